use proptest::prelude::*;

use vigil_geo::{distance_km, EARTH_RADIUS_KM};
use vigil_types::Coordinates;

fn coord_strategy() -> impl Strategy<Value = Coordinates> {
    (-90.0f64..=90.0, -180.0f64..=180.0).prop_map(|(lat, lon)| Coordinates::new(lat, lon))
}

proptest! {
    /// Distance is finite and non-negative for all coordinate pairs.
    #[test]
    fn distance_non_negative(a in coord_strategy(), b in coord_strategy()) {
        let d = distance_km(a, b);
        prop_assert!(d.is_finite());
        prop_assert!(d >= 0.0);
    }

    /// Distance is symmetric.
    #[test]
    fn distance_symmetric(a in coord_strategy(), b in coord_strategy()) {
        prop_assert!((distance_km(a, b) - distance_km(b, a)).abs() < 1e-9);
    }

    /// Distance from a point to itself is zero.
    #[test]
    fn distance_identity(a in coord_strategy()) {
        prop_assert!(distance_km(a, a) < 1e-9);
    }

    /// No two points are farther apart than half the circumference.
    #[test]
    fn distance_bounded_by_half_circumference(a in coord_strategy(), b in coord_strategy()) {
        prop_assert!(distance_km(a, b) <= std::f64::consts::PI * EARTH_RADIUS_KM + 1e-6);
    }
}
