//! Great-circle distance.

use crate::domain::Coordinate;

/// Mean Earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance between two coordinates, in kilometres.
///
/// Symmetric in its arguments and exactly zero for identical points.
///
/// # Examples
///
/// ```
/// use metro_server::domain::Coordinate;
/// use metro_server::geo::haversine_km;
///
/// let a = Coordinate::new(0.0, 0.0).unwrap();
/// let b = Coordinate::new(0.0, 1.0).unwrap();
/// let d = haversine_km(a, b);
/// assert!((d - 111.195).abs() < 0.001);
/// ```
pub fn haversine_km(a: Coordinate, b: Coordinate) -> f64 {
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let dlat = lat2 - lat1;
    let dlon = (b.longitude - a.longitude).to_radians();

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    // Rounding can push h a hair above 1 for antipodal points
    let c = 2.0 * h.sqrt().min(1.0).asin();

    EARTH_RADIUS_KM * c
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coord(lat: f64, lon: f64) -> Coordinate {
        Coordinate::new(lat, lon).unwrap()
    }

    #[test]
    fn identical_points_are_zero() {
        let p = coord(41.0055971704, 28.9513306172);
        assert_eq!(haversine_km(p, p), 0.0);
    }

    #[test]
    fn one_degree_of_longitude_on_equator() {
        let d = haversine_km(coord(0.0, 0.0), coord(0.0, 1.0));
        // 2 * pi * 6371 / 360
        assert!((d - 111.19492664455873).abs() < 1e-9);
    }

    #[test]
    fn known_pair_yenikapi_to_sirkeci() {
        let yenikapi = coord(41.0055971704, 28.9513306172);
        let sirkeci = coord(41.015180, 28.975890);
        let d = haversine_km(yenikapi, sirkeci);
        assert!(d > 2.2 && d < 2.4, "got {d}");
    }

    #[test]
    fn antipodal_points_are_half_circumference() {
        let d = haversine_km(coord(0.0, 0.0), coord(0.0, 180.0));
        assert!((d - std::f64::consts::PI * EARTH_RADIUS_KM).abs() < 1e-6);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn any_coord() -> impl Strategy<Value = Coordinate> {
        (-90.0..=90.0f64, -180.0..=180.0f64)
            .prop_map(|(lat, lon)| Coordinate::new(lat, lon).unwrap())
    }

    proptest! {
        /// Distance does not depend on argument order
        #[test]
        fn symmetric(a in any_coord(), b in any_coord()) {
            prop_assert_eq!(haversine_km(a, b), haversine_km(b, a));
        }

        /// A point is at zero distance from itself
        #[test]
        fn zero_for_same_point(a in any_coord()) {
            prop_assert_eq!(haversine_km(a, a), 0.0);
        }

        /// Never negative and never more than half the circumference
        #[test]
        fn bounded(a in any_coord(), b in any_coord()) {
            let d = haversine_km(a, b);
            prop_assert!(d >= 0.0);
            prop_assert!(d <= std::f64::consts::PI * EARTH_RADIUS_KM + 1e-6);
        }
    }
}
