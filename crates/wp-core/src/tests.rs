//! Unit tests for wp-core primitives.

#[cfg(test)]
mod geo {
    use crate::{COORD_EPSILON_DEG, GeoPoint, PlanError};

    #[test]
    fn zero_distance() {
        let p = GeoPoint::new(23.8103, 90.4125);
        assert!(p.distance_m(p) < 1e-6);
    }

    #[test]
    fn one_degree_latitude() {
        // ~1 degree of latitude ≈ 111 km
        let a = GeoPoint::new(30.0, -88.0);
        let b = GeoPoint::new(31.0, -88.0);
        let d = a.distance_m(b);
        assert!((d - 111_195.0).abs() < 5.0, "got {d}");
    }

    #[test]
    fn approx_eq_tolerance() {
        let a = GeoPoint::new(10.0, 20.0);
        assert!(a.approx_eq(GeoPoint::new(10.0 + 1e-10, 20.0), COORD_EPSILON_DEG));
        assert!(!a.approx_eq(GeoPoint::new(10.0, 20.0 + 1e-6), COORD_EPSILON_DEG));
    }

    #[test]
    fn validate_rejects_out_of_range() {
        assert!(GeoPoint::new(45.0, 90.0).validate().is_ok());
        assert!(matches!(
            GeoPoint::new(91.0, 0.0).validate(),
            Err(PlanError::InvalidGeometry(_))
        ));
        assert!(matches!(
            GeoPoint::new(0.0, -180.5).validate(),
            Err(PlanError::InvalidGeometry(_))
        ));
        assert!(matches!(
            GeoPoint::new(f64::NAN, 0.0).validate(),
            Err(PlanError::InvalidGeometry(_))
        ));
    }

    #[test]
    fn display() {
        assert_eq!(GeoPoint::new(1.5, -2.25).to_string(), "(1.5000000, -2.2500000)");
    }
}

#[cfg(test)]
mod geodesy {
    use proptest::prelude::*;

    use crate::{EARTH_RADIUS_M, GeoPoint, PlanError, destination, normalize_lon};

    #[test]
    fn north_along_meridian() {
        let start = GeoPoint::new(0.0, 0.0);
        let d = 1_000.0;
        let p = destination(start, d, 0.0).unwrap();
        let expected_lat = (d / EARTH_RADIUS_M).to_degrees();
        assert!((p.latitude - expected_lat).abs() < 1e-12);
        assert!(p.longitude.abs() < 1e-12);
    }

    #[test]
    fn west_on_equator_decreases_longitude() {
        let p = destination(GeoPoint::new(0.0, 10.0), 500.0, 270.0).unwrap();
        assert!(p.longitude < 10.0);
        assert!(p.latitude.abs() < 1e-9);
        let moved = GeoPoint::new(0.0, 10.0).distance_m(p);
        assert!((moved - 500.0).abs() < 1e-6, "got {moved}");
    }

    #[test]
    fn negative_distance_is_reciprocal_bearing() {
        let start = GeoPoint::new(12.0, 34.0);
        let a = destination(start, -250.0, 0.0).unwrap();
        let b = destination(start, 250.0, 180.0).unwrap();
        assert!(a.approx_eq(b, 1e-12));
    }

    #[test]
    fn zero_distance_is_identity() {
        let start = GeoPoint::new(-33.86, 151.21);
        let p = start.moved(0.0, 123.0).unwrap();
        assert!(p.approx_eq(start, 1e-12));
    }

    #[test]
    fn non_finite_input_is_domain_error() {
        let start = GeoPoint::new(0.0, 0.0);
        assert!(matches!(
            destination(start, f64::INFINITY, 0.0),
            Err(PlanError::NumericDomain(_))
        ));
        assert!(matches!(
            destination(start, 10.0, f64::NAN),
            Err(PlanError::NumericDomain(_))
        ));
        assert!(matches!(
            destination(GeoPoint::new(f64::NAN, 0.0), 10.0, 0.0),
            Err(PlanError::NumericDomain(_))
        ));
    }

    #[test]
    fn crossing_antimeridian_wraps() {
        let p = destination(GeoPoint::new(0.0, 179.9999), 100.0, 90.0).unwrap();
        assert!(p.longitude < 0.0 && p.longitude >= -180.0, "got {}", p.longitude);
    }

    #[test]
    fn normalize_lon_range() {
        assert_eq!(normalize_lon(45.0), 45.0);
        assert_eq!(normalize_lon(180.0), 180.0);
        assert!((normalize_lon(190.0) - -170.0).abs() < 1e-12);
        assert!((normalize_lon(-190.0) - 170.0).abs() < 1e-12);
    }

    proptest! {
        #[test]
        fn out_and_back_returns_home(
            lat in -60.0f64..60.0,
            lon in -170.0f64..170.0,
            distance in 0.0f64..300.0,
            bearing in 0.0f64..360.0,
        ) {
            let start = GeoPoint::new(lat, lon);
            let out = destination(start, distance, bearing).unwrap();
            let back = destination(out, distance, bearing + 180.0).unwrap();
            prop_assert!(back.approx_eq(start, 1e-6), "{start} → {out} → {back}");
        }
    }
}

#[cfg(test)]
mod angle {
    use proptest::prelude::*;

    use crate::{Dms, decimal_to_dms, dms_to_decimal};

    #[test]
    fn splits_positive_angle() {
        let dms = decimal_to_dms(23.7625);
        assert_eq!(dms.degrees, 23);
        assert_eq!(dms.minutes, 45);
        assert!((dms.seconds - 45.0).abs() < 1e-6);
        assert!(!dms.negative);
    }

    #[test]
    fn sign_on_degrees() {
        let dms = decimal_to_dms(-10.5);
        assert_eq!(dms.degrees, -10);
        assert_eq!(dms.minutes, 30);
        assert!(dms.seconds.abs() < 1e-6);
        assert!((dms_to_decimal(-10, 30, 0.0) - -10.5).abs() < 1e-12);
    }

    #[test]
    fn sub_degree_negative_keeps_sign() {
        let dms = Dms::from_decimal(-0.5);
        assert_eq!(dms.degrees, 0);
        assert!(dms.negative);
        assert!((dms.to_decimal() - -0.5).abs() < 1e-12);
    }

    #[test]
    fn display() {
        assert_eq!(Dms::from_decimal(12.5).to_string(), "12°30'00.000\"");
        assert_eq!(Dms::from_decimal(-0.25).to_string(), "-0°15'00.000\"");
    }

    proptest! {
        #[test]
        fn round_trip(x in -180.0f64..=180.0) {
            let back = decimal_to_dms(x).to_decimal();
            prop_assert!((back - x).abs() < 1e-4, "{x} → {back}");
        }
    }
}
