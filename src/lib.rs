#![allow(clippy::cast_precision_loss)]
#![doc = include_str!("../README.md")]

mod cubic;
pub mod error;
mod feature;
mod feature_mapper;
pub mod geometry;
mod mapper;
mod measured_polygon;
mod measurer;
mod morph;
pub mod path;
mod polygon_builder;
mod rounded_polygon;
pub(crate) mod util;

pub use self::{
    cubic::Cubic,
    error::{Error, Result},
    feature::{Feature, FeatureType},
    mapper::DoubleMapper,
    measured_polygon::{MeasuredPolygon, ProgressableFeature},
    measurer::Measurer,
    morph::Morph,
    polygon_builder::RoundedPolygonBuilder,
    rounded_polygon::{CornerRounding, RoundedPoint, RoundedPolygon},
};
