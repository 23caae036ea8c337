//! Property checks for construction, measures and the area order.

use std::f64::consts::PI;

use proptest::prelude::*;
use shapes::api::*;

fn dim() -> impl Strategy<Value = f64> {
    1e-3f64..1e3
}

fn any_shape() -> impl Strategy<Value = Shape> {
    prop_oneof![
        dim().prop_map(|r| create_circle(r).unwrap()),
        (dim(), dim()).prop_map(|(w, h)| create_rectangle(w, h).unwrap()),
    ]
}

proptest! {
    #[test]
    fn circle_area_is_pi_r_squared(r in dim()) {
        let s = create_circle(r).unwrap();
        let expected = PI * r * r;
        prop_assert!((area(&s) - expected).abs() <= 1e-12 * expected);
    }

    #[test]
    fn rectangle_area_is_width_times_height(w in dim(), h in dim()) {
        let s = create_rectangle(w, h).unwrap();
        prop_assert_eq!(area(&s), w * h);
    }

    #[test]
    fn compare_is_antisymmetric(a in any_shape(), b in any_shape()) {
        prop_assert_eq!(compare(&a, &b), -compare(&b, &a));
    }

    #[test]
    fn compare_eps_is_antisymmetric(a in any_shape(), b in any_shape(), eps in 0.0f64..10.0) {
        prop_assert_eq!(compare_eps(&a, &b, eps), -compare_eps(&b, &a, eps));
    }

    #[test]
    fn compare_is_reflexive(a in any_shape()) {
        prop_assert_eq!(compare(&a, &a), 0);
    }

    #[test]
    fn compare_stays_in_sign_range(a in any_shape(), b in any_shape()) {
        prop_assert!([-1, 0, 1].contains(&compare(&a, &b)));
    }

    #[test]
    fn non_positive_radius_is_rejected(r in -1e3f64..=0.0) {
        let is_invalid = matches!(create_circle(r), Err(ShapeError::InvalidParameter { .. }));
        prop_assert!(is_invalid);
    }

    #[test]
    fn non_positive_side_is_rejected(good in dim(), bad in -1e3f64..=0.0, bad_first in any::<bool>()) {
        let res = if bad_first {
            create_rectangle(bad, good)
        } else {
            create_rectangle(good, bad)
        };
        let is_invalid = matches!(res, Err(ShapeError::InvalidParameter { .. }));
        prop_assert!(is_invalid);
    }

    #[test]
    fn user_projection_is_subset_of_admin(r in dim(), id in "[a-z]{1,8}", hide_radius in any::<bool>()) {
        let mut builder = ShapeBuilder::circle(r).attribute("internalId", id, Visibility::Private);
        if hide_radius {
            builder = builder.visibility("radius", Visibility::Private);
        }
        let s = builder.build().unwrap();
        let user = project(&s, Role::User);
        let admin = project(&s, Role::Admin);
        prop_assert_eq!(admin.len(), 2);
        prop_assert!(!user.contains_key("internalId"));
        prop_assert_eq!(user.contains_key("radius"), !hide_radius);
        for (k, v) in &user {
            prop_assert_eq!(admin.get(k), Some(v));
        }
    }

    #[test]
    fn sampled_shapes_replay(seed in any::<u64>(), index in 0u64..1000) {
        let cfg = SampleCfg::default();
        let tok = ReplayToken { seed, index };
        let a = draw_shape(&cfg, tok).unwrap();
        let b = draw_shape(&cfg, tok).unwrap();
        prop_assert_eq!(area(&a).to_bits(), area(&b).to_bits());
        prop_assert_eq!(a, b);
    }
}
