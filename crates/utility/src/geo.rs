/// WGS84 equatorial radius.
pub const EARTH_RADIUS_M: f64 = 6_378_137.0;

fn to_radians(degrees: f64) -> f64 {
    degrees * std::f64::consts::PI / 180.0
}

/// Great-circle distance in meters between two coordinates given in degrees.
pub fn haversine_distance_m(
    latitude_1: f64,
    longitude_1: f64,
    latitude_2: f64,
    longitude_2: f64,
) -> f64 {
    let lat1_rad = to_radians(latitude_1);
    let lon1_rad = to_radians(longitude_1);
    let lat2_rad = to_radians(latitude_2);
    let lon2_rad = to_radians(longitude_2);

    let dlat = lat2_rad - lat1_rad;
    let dlon = lon2_rad - lon1_rad;

    let a = (dlat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (dlon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_M * c
}

/// Length in meters of a path given as ordered `(lng, lat)` pairs.
/// Paths with fewer than two points have length zero.
pub fn path_length_m(coordinates: &[(f64, f64)]) -> f64 {
    coordinates
        .windows(2)
        .map(|pair| {
            let (lng1, lat1) = pair[0];
            let (lng2, lat2) = pair[1];
            haversine_distance_m(lat1, lng1, lat2, lng2)
        })
        .sum()
}
