//! Element-wise conversions between Cartesian, geocentric and geodetic coordinates.
//!
//! Every function accepts one [`Elementwise`] container per coordinate component
//! (a scalar, a `Vec<f64>`, a fixed-size array or a `DVector<f64>`) and returns
//! containers of the same kind. Angles are in degrees, longitudes in (-180, 180].

use crate::elementwise::map3;
use crate::prelude::*;

/// Cartesian (x, y, z) to geocentric (r, lat, lon).
pub fn cart2geocentric<T: Elementwise>(x: &T, y: &T, z: &T) -> Result<(T, T, T)> {
    map3(x, y, z, |x, y, z| {
        let geoc = ECEF::new(x, y, z).to_geocentric();
        [
            geoc.radius,
            geoc.latitude.to_degrees(),
            geoc.longitude.to_degrees(),
        ]
    })
}

/// Geocentric (r, lat, lon) to Cartesian (x, y, z).
pub fn geocentric2cart<T: Elementwise>(r: &T, lat: &T, lon: &T) -> Result<(T, T, T)> {
    map3(r, lat, lon, |r, lat, lon| {
        let ecef = Geocentric::from_degs(r, lat, lon).to_ecef();
        [ecef.x, ecef.y, ecef.z]
    })
}

/// Geodetic (h, lat, lon) to Cartesian (x, y, z) on `ellipsoid`.
pub fn geodetic2cart<T: Elementwise>(
    h: &T,
    lat: &T,
    lon: &T,
    ellipsoid: &EllipsoidModel,
) -> Result<(T, T, T)> {
    ellipsoid.validate()?;
    map3(h, lat, lon, |h, lat, lon| {
        let ecef = LLA::from_degs(lat, lon, h).to_ecef_unchecked(ellipsoid);
        [ecef.x, ecef.y, ecef.z]
    })
}

/// Cartesian (x, y, z) to geodetic (h, lat, lon) on `ellipsoid`.
pub fn cart2geodetic<T: Elementwise>(
    x: &T,
    y: &T,
    z: &T,
    ellipsoid: &EllipsoidModel,
) -> Result<(T, T, T)> {
    ellipsoid.validate()?;
    map3(x, y, z, |x, y, z| {
        let lla = ECEF::new(x, y, z).to_lla_unchecked(ellipsoid);
        [
            lla.altitude,
            lla.latitude.to_degrees(),
            lla.longitude.to_degrees(),
        ]
    })
}

/// Geodetic (h, lat, lon) to geocentric (r, lat, lon) on `ellipsoid`.
pub fn geodetic2geocentric<T: Elementwise>(
    h: &T,
    lat: &T,
    lon: &T,
    ellipsoid: &EllipsoidModel,
) -> Result<(T, T, T)> {
    let (x, y, z) = geodetic2cart(h, lat, lon, ellipsoid)?;
    cart2geocentric(&x, &y, &z)
}

/// Geocentric (r, lat, lon) to geodetic (h, lat, lon) on `ellipsoid`.
pub fn geocentric2geodetic<T: Elementwise>(
    r: &T,
    lat: &T,
    lon: &T,
    ellipsoid: &EllipsoidModel,
) -> Result<(T, T, T)> {
    ellipsoid.validate()?;
    let (x, y, z) = geocentric2cart(r, lat, lon)?;
    cart2geodetic(&x, &y, &z, ellipsoid)
}
