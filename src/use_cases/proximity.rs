use crate::domain::entities::Coordinates;

// Mean Earth radius in meters, as used by the haversine formula.
const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

// Great-circle distance between two points, in meters.
pub fn distance_meters(a: Coordinates, b: Coordinates) -> f64 {
    let phi1 = a.latitude().to_radians();
    let phi2 = b.latitude().to_radians();
    let delta_phi = (b.latitude() - a.latitude()).to_radians();
    let delta_lambda = (b.longitude() - a.longitude()).to_radians();

    let h = (delta_phi / 2.0).sin().powi(2)
        + phi1.cos() * phi2.cos() * (delta_lambda / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_METERS * c
}

// Radius gate the scan flow combines with token validity.
//
// Independent of the token checks: either side may fail without
// affecting the other's evaluation.
#[derive(Clone, Copy, Debug)]
pub struct ProximityCheck {
    pub max_distance_meters: f64,
}

impl ProximityCheck {
    pub fn is_within_range(&self, a: Coordinates, b: Coordinates) -> bool {
        distance_meters(a, b) <= self.max_distance_meters
    }
}
