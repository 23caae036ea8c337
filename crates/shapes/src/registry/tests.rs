use super::*;
use crate::types::{ShapeKind, Visibility};

fn invalid_field(res: Result<Shape, ShapeError>) -> String {
    match res {
        Err(ShapeError::InvalidParameter { field, .. }) => field,
        other => panic!("expected InvalidParameter, got {other:?}"),
    }
}

#[test]
fn rejects_non_positive_dimensions() {
    assert_eq!(invalid_field(create_circle(0.0)), "radius");
    assert_eq!(invalid_field(create_circle(-5.0)), "radius");
    assert_eq!(invalid_field(create_rectangle(0.0, 3.0)), "width");
    assert_eq!(invalid_field(create_rectangle(3.0, -1.0)), "height");
}

#[test]
fn rejects_non_finite_dimensions() {
    assert_eq!(invalid_field(create_circle(f64::NAN)), "radius");
    assert_eq!(invalid_field(create_circle(f64::INFINITY)), "radius");
    assert_eq!(invalid_field(create_rectangle(2.0, f64::NEG_INFINITY)), "height");
    // first offending field wins
    assert_eq!(invalid_field(create_rectangle(-1.0, f64::NAN)), "width");
}

#[test]
fn error_carries_value_and_reason() {
    let err = create_circle(-5.0).unwrap_err();
    assert_eq!(
        err,
        ShapeError::InvalidParameter {
            field: "radius".into(),
            value: "-5".into(),
            reason: "must be greater than zero",
        }
    );
    assert_eq!(
        err.to_string(),
        "invalid parameter `radius` = -5: must be greater than zero"
    );
}

#[test]
fn valid_shapes_keep_their_kind_and_dimensions() {
    let c = create_circle(3.0).unwrap();
    assert_eq!(c.kind(), ShapeKind::Circle);
    assert_eq!(*c.variant(), Variant::Circle { radius: 3.0 });
    let r = create_rectangle(3.0, 2.0).unwrap();
    assert_eq!(r.kind(), ShapeKind::Rectangle);
    assert_eq!(r.policy().get("width"), Some(Visibility::Public));
    assert_eq!(r.policy().get("height"), Some(Visibility::Public));
}

#[test]
fn compare_circle_against_rectangle() {
    let c = create_circle(3.0).unwrap();
    let r = create_rectangle(3.0, 2.0).unwrap();
    assert_eq!(compare(&c, &r), 1);
    assert_eq!(compare(&r, &c), -1);
    assert_eq!(compare(&c, &c), 0);
}

#[test]
fn equal_areas_tie_across_kinds() {
    let a = create_rectangle(2.0, 8.0).unwrap();
    let b = create_rectangle(4.0, 4.0).unwrap();
    assert_eq!(compare(&a, &b), 0);
    // PI * 1 * 1 == PI * 1 exactly
    let unit_circle = create_circle(1.0).unwrap();
    let pi_strip = create_rectangle(std::f64::consts::PI, 1.0).unwrap();
    assert_eq!(compare(&unit_circle, &pi_strip), 0);
    assert_eq!(compare(&pi_strip, &unit_circle), 0);
}

#[test]
fn compare_eps_widens_ties() {
    let a = create_rectangle(1.0, 1.0).unwrap();
    let b = create_rectangle(1.0, 1.05).unwrap();
    assert_eq!(compare(&a, &b), -1);
    assert_eq!(compare_eps(&a, &b, 0.1), 0);
    assert_eq!(compare_eps(&b, &a, 0.1), 0);
    // negative and NaN tolerances collapse to exact comparison
    assert_eq!(compare_eps(&a, &b, -1.0), -1);
    assert_eq!(compare_eps(&a, &b, f64::NAN), -1);
    let cfg = EngineCfg {
        tie_eps: 0.1,
        ..EngineCfg::default()
    };
    assert_eq!(compare_with(&a, &b, &cfg), 0);
}

#[test]
fn builder_attaches_tagged_attributes() {
    let s = ShapeBuilder::circle(2.0)
        .attribute("internalId", "c-001", Visibility::Private)
        .attribute("label", "wheel", Visibility::Public)
        .build()
        .unwrap();
    assert_eq!(s.policy().get("radius"), Some(Visibility::Public));
    assert_eq!(s.policy().get("internalId"), Some(Visibility::Private));
    assert_eq!(s.policy().get("label"), Some(Visibility::Public));
    assert_eq!(s.attributes().count(), 2);
}

#[test]
fn builder_overrides_dimension_visibility() {
    let s = ShapeBuilder::rectangle(3.0, 2.0)
        .visibility("height", Visibility::Private)
        .build()
        .unwrap();
    assert_eq!(s.policy().get("width"), Some(Visibility::Public));
    assert_eq!(s.policy().get("height"), Some(Visibility::Private));
}

#[test]
fn builder_rejects_unknown_policy_key() {
    let res = ShapeBuilder::circle(1.0)
        .visibility("width", Visibility::Private)
        .build();
    assert_eq!(invalid_field(res), "visibility");
}

#[test]
fn builder_rejects_bad_attribute_names() {
    let empty = ShapeBuilder::circle(1.0)
        .attribute("  ", 1.0, Visibility::Public)
        .build();
    assert_eq!(invalid_field(empty), "attribute");

    let clash = ShapeBuilder::circle(1.0)
        .attribute("radius", 9.0, Visibility::Private)
        .build();
    assert_eq!(invalid_field(clash), "radius");

    let dup = ShapeBuilder::rectangle(1.0, 1.0)
        .attribute("id", "a", Visibility::Private)
        .attribute("id", "b", Visibility::Public)
        .build();
    assert_eq!(invalid_field(dup), "id");

    let nan = ShapeBuilder::rectangle(1.0, 1.0)
        .attribute("weight", f64::NAN, Visibility::Public)
        .build();
    assert_eq!(invalid_field(nan), "weight");
}

#[test]
fn builder_checks_dimensions_before_attributes() {
    let res = ShapeBuilder::circle(-1.0)
        .attribute("", 1.0, Visibility::Public)
        .build();
    assert_eq!(invalid_field(res), "radius");
}

#[test]
fn rejects_dimensions_whose_measures_leave_f64_range() {
    // area overflows
    assert_eq!(invalid_field(create_rectangle(1e300, 1e300)), "area");
    // area underflows to zero
    assert_eq!(invalid_field(create_circle(1e-200)), "area");
    // area is finite but the perimeter overflows
    assert_eq!(invalid_field(create_rectangle(1e308, 1e-10)), "perimeter");
}

#[test]
fn large_but_representable_shapes_keep_their_order() {
    let big = create_rectangle(1e150, 1e150).unwrap();
    let bigger = create_rectangle(1e151, 1e150).unwrap();
    assert_eq!(compare(&bigger, &big), 1);
    let tiny = create_circle(1e-100).unwrap();
    let tinier = create_circle(1e-110).unwrap();
    assert_eq!(compare(&tinier, &tiny), -1);
}

#[test]
fn policy_lists_every_field_once() {
    let s = ShapeBuilder::rectangle(3.0, 2.0)
        .attribute("internalId", "r-7", Visibility::Private)
        .build()
        .unwrap();
    let tags: Vec<_> = s.policy().iter().collect();
    assert_eq!(
        tags,
        vec![
            ("height", Visibility::Public),
            ("internalId", Visibility::Private),
            ("width", Visibility::Public),
        ]
    );
}
