//! Local radii of a reference ellipsoid.

use crate::elementwise::{map1, map2};
use crate::prelude::*;

/// Distance from the center to the ellipsoid surface at geodetic latitude `lat`
/// (degrees). Equals `a` exactly on the equator.
pub fn ellipsoid_r_geodetic<T: Elementwise>(ellipsoid: &EllipsoidModel, lat: &T) -> Result<T> {
    ellipsoid.validate()?;
    let a = ellipsoid.equatorial_radius;
    let es = ellipsoid.eccentricity_squared();
    map1(lat, |lat| {
        if ellipsoid.is_sphere() {
            return a;
        }
        let (sin_lat, cos_lat) = lat.to_radians().sin_cos();
        let sin2 = sin_lat * sin_lat;
        let one_minus_es = 1. - es;
        a * ((cos_lat * cos_lat + one_minus_es * one_minus_es * sin2) / (1. - es * sin2)).sqrt()
    })
}

/// Distance from the center to the ellipsoid surface at geocentric latitude
/// `lat` (degrees). Equals `a` exactly on the equator.
pub fn ellipsoid_r_geocentric<T: Elementwise>(ellipsoid: &EllipsoidModel, lat: &T) -> Result<T> {
    ellipsoid.validate()?;
    let a = ellipsoid.equatorial_radius;
    let eps = ellipsoid.second_eccentricity_squared();
    map1(lat, |lat| {
        if ellipsoid.is_sphere() {
            return a;
        }
        let sin_lat = lat.to_radians().sin();
        a / (1. + eps * sin_lat * sin_lat).sqrt()
    })
}

/// Radius of curvature of the normal section at geodetic latitude `lat` with
/// azimuth `azimuth` (degrees clockwise from north), by Euler's theorem.
pub fn ellipsoid_r_curvature<T: Elementwise>(
    ellipsoid: &EllipsoidModel,
    lat: &T,
    azimuth: &T,
) -> Result<T> {
    ellipsoid.validate()?;
    map2(lat, azimuth, |lat, azimuth| {
        if ellipsoid.is_sphere() {
            return ellipsoid.equatorial_radius;
        }
        let lat = lat.to_radians();
        let (sin_az, cos_az) = azimuth.to_radians().sin_cos();
        let m = ellipsoid.meridional_radius(lat);
        let n = ellipsoid.prime_vertical_radius(lat);
        1. / (cos_az * cos_az / m + sin_az * sin_az / n)
    })
}
