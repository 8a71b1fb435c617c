use roundshape::{
    Morph, RoundedPolygon,
    geometry::{Point, Vector},
};

const EPSILON: f32 = 1e-4;

#[test]
fn cubics_test() {
    let _ = env_logger::builder().is_test(true).try_init();

    let poly1 = RoundedPolygon::from_vertices_count_at(3, 1.0, Point::new(0.5, 0.5), None, &[]).unwrap();
    let cubics11 = Morph::new(poly1.clone(), poly1.clone()).unwrap().as_cubics(0.0);

    assert!(!cubics11.is_empty());

    // The structure of a morph and its component shapes may not match exactly,
    // because morph calculations may optimize some of the zero-length curves
    // out. But in general, every curve in the morph *should* exist somewhere in
    // the shape it is based on, so we do an exhaustive search for such
    // existence. Note that this assertion only works because we constructed the
    // Morph from/to the same shape. A Morph between different shapes
    // may not have the curves replicated exactly.
    for morph_cubic in cubics11 {
        let mut matched = false;

        for p1_cubic in &poly1.cubics {
            if (morph_cubic.anchor0() - p1_cubic.anchor0())
                .abs()
                .lower_than(Vector::splat(EPSILON))
                .and((morph_cubic.anchor1() - p1_cubic.anchor1()).abs().lower_than(Vector::splat(EPSILON)))
                .and((morph_cubic.control0() - p1_cubic.control0()).abs().lower_than(Vector::splat(EPSILON)))
                .and((morph_cubic.control1() - p1_cubic.control1()).abs().lower_than(Vector::splat(EPSILON)))
                .all()
            {
                matched = true;

                break;
            }
        }

        assert!(matched);
    }
}

#[test]
fn bounds_contain_both_source_polygons() {
    let triangle = RoundedPolygon::from_vertices_count_at(3, 1.0, Point::new(0.5, 0.5), None, &[]).unwrap();
    let square = RoundedPolygon::rectangle().with_center(Point::new(0.5, 0.5)).build().unwrap();
    let morph = Morph::new(triangle.clone(), square.clone()).unwrap();

    let triangle_bounds = triangle.aabb(true);
    let square_bounds = square.aabb(true);
    let morph_bounds = morph.bounds(true);

    assert!(morph_bounds.min.x <= triangle_bounds.min.x.min(square_bounds.min.x));
    assert!(morph_bounds.min.y <= triangle_bounds.min.y.min(square_bounds.min.y));
    assert!(morph_bounds.max.x >= triangle_bounds.max.x.max(square_bounds.max.x));
    assert!(morph_bounds.max.y >= triangle_bounds.max.y.max(square_bounds.max.y));
}

#[test]
fn max_bounds_is_union_of_source_max_bounds() {
    let triangle = RoundedPolygon::from_vertices_count_at(3, 1.0, Point::new(0.5, 0.5), None, &[]).unwrap();
    let square = RoundedPolygon::rectangle().with_center(Point::new(0.5, 0.5)).build().unwrap();
    let morph = Morph::new(triangle.clone(), square.clone()).unwrap();

    let expected_min = triangle.max_bounds().min.min(square.max_bounds().min);
    let expected_max = triangle.max_bounds().max.max(square.max_bounds().max);

    assert_eq!(expected_min, morph.max_bounds().min);
    assert_eq!(expected_max, morph.max_bounds().max);
}
