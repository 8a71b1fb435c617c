//! Semantic grouping of contiguous cubics: edges, corners, and ignorable
//! runs that exist for continuity but should not participate in morph
//! feature matching.

use crate::{
    cubic::Cubic,
    error::{Error, Result},
    geometry::{DISTANCE_EPSILON, PointTransformer},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FeatureType {
    Edge,
    Corner { convex: bool },
    Ignorable,
}

/// A contiguous run of cubics forming one semantic piece of an outline: a
/// straight edge, a rounded corner (tagged with its convexity), or an
/// edge-shaped run explicitly marked as not a matching candidate.
#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    pub ty: FeatureType,
    pub cubics: Vec<Cubic>,
}

impl Feature {
    /// Builds an `Edge` feature from a single straight (or near-straight)
    /// cubic.
    pub fn edge(cubics: Vec<Cubic>) -> Result<Self> {
        Self::build(cubics, FeatureType::Edge)
    }

    /// Builds a `Corner` feature, tagged as convex.
    pub fn convex_corner(cubics: Vec<Cubic>) -> Result<Self> {
        Self::build(cubics, FeatureType::Corner { convex: true })
    }

    /// Builds a `Corner` feature, tagged as concave.
    pub fn concave_corner(cubics: Vec<Cubic>) -> Result<Self> {
        Self::build(cubics, FeatureType::Corner { convex: false })
    }

    /// Builds a `Corner` feature with explicit convexity.
    pub fn corner(cubics: Vec<Cubic>, convex: bool) -> Result<Self> {
        Self::build(cubics, FeatureType::Corner { convex })
    }

    /// Builds an edge-shaped feature that default morph matching should skip
    /// over.
    pub fn ignorable(cubics: Vec<Cubic>) -> Result<Self> {
        Self::build(cubics, FeatureType::Ignorable)
    }

    fn build(cubics: Vec<Cubic>, ty: FeatureType) -> Result<Self> {
        if cubics.is_empty() {
            return Err(Error::invalid_argument("a feature needs at least one cubic"));
        }

        if !is_continuous(&cubics) {
            return Err(Error::invalid_argument(
                "feature cubics must be continuous: each anchor1 must match the next cubic's anchor0",
            ));
        }

        Ok(Self { cubics, ty })
    }

    #[must_use]
    pub fn transformed<T: PointTransformer>(self, f: &T) -> Self {
        Self {
            cubics: self.cubics.into_iter().map(|cubic| cubic.transformed(f)).collect(),
            ty: self.ty,
        }
    }

    pub const fn is_edge(&self) -> bool {
        matches!(self.ty, FeatureType::Edge)
    }

    pub const fn is_ignorable(&self) -> bool {
        matches!(self.ty, FeatureType::Ignorable)
    }

    pub const fn is_corner(&self) -> bool {
        matches!(self.ty, FeatureType::Corner { .. })
    }

    pub const fn is_convex_corner(&self) -> bool {
        matches!(self.ty, FeatureType::Corner { convex: true })
    }

    pub const fn is_concave_corner(&self) -> bool {
        matches!(self.ty, FeatureType::Corner { convex: false })
    }

    pub fn is_corner_and<F: FnOnce(bool) -> bool>(&self, func: F) -> bool {
        if let FeatureType::Corner { convex } = &self.ty { func(*convex) } else { false }
    }
}

fn is_continuous(cubics: &[Cubic]) -> bool {
    cubics.windows(2).all(|pair| {
        let [a, b] = pair else { unreachable!() };

        (a.anchor1() - b.anchor0()).length() < DISTANCE_EPSILON
    })
}
