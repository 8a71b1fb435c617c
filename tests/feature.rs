use euclid::approxeq::ApproxEq;
use roundshape::{Cubic, Feature, geometry::Point};

const EPSILON: Point = Point::new(1e-4, 1e-4);

fn assert_features(expected: &Feature, actual: &Feature) {
    assert_eq!(expected.cubics.len(), actual.cubics.len());

    for i in 0..expected.cubics.len() {
        assert!(expected.cubics[i].anchor0().approx_eq_eps(&actual.cubics[i].anchor0(), &EPSILON));
        assert!(expected.cubics[i].control0().approx_eq_eps(&actual.cubics[i].control0(), &EPSILON));
        assert!(expected.cubics[i].control1().approx_eq_eps(&actual.cubics[i].control1(), &EPSILON));
        assert!(expected.cubics[i].anchor1().approx_eq_eps(&actual.cubics[i].anchor1(), &EPSILON));
    }

    assert_eq!(expected.ty, actual.ty);

    if expected.is_corner() && actual.is_corner() {
        assert!(expected.is_corner_and(|a| actual.is_corner_and(|b| a == b)));
    }
}

#[test]
fn builds_concave_corner() {
    let cubic = Cubic::straight_line(Point::zero(), Point::new(1.0, 0.0));
    let actual = Feature::corner(vec![cubic], false).unwrap();
    let expected = Feature::corner(vec![cubic], false).unwrap();

    assert_features(&expected, &actual);
    assert!(actual.is_concave_corner());
}

#[test]
fn builds_convex_corner() {
    let cubic = Cubic::straight_line(Point::zero(), Point::new(1.0, 0.0));
    let actual = Feature::corner(vec![cubic], true).unwrap();
    let expected = Feature::corner(vec![cubic], true).unwrap();

    assert_features(&expected, &actual);
    assert!(actual.is_convex_corner());
}

#[test]
fn builds_edge() {
    let cubic = Cubic::straight_line(Point::zero(), Point::new(1.0, 0.0));
    let actual = Feature::edge(vec![cubic]).unwrap();
    let expected = Feature::edge(vec![cubic]).unwrap();

    assert_features(&expected, &actual);
    assert!(actual.is_edge());
}

#[test]
fn builds_ignorable() {
    let cubic = Cubic::straight_line(Point::zero(), Point::new(1.0, 0.0));
    let feature = Feature::ignorable(vec![cubic]).unwrap();

    assert!(feature.is_ignorable());
    assert!(!feature.is_corner());
    assert!(!feature.is_edge());
}

#[test]
fn rejects_empty_cubics() {
    assert!(Feature::edge(vec![]).is_err());
}

#[test]
fn rejects_discontinuous_cubics() {
    let a = Cubic::straight_line(Point::zero(), Point::new(1.0, 0.0));
    let b = Cubic::straight_line(Point::new(5.0, 5.0), Point::new(6.0, 5.0));

    assert!(Feature::edge(vec![a, b]).is_err());
}
