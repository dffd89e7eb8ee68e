use crate::prelude::*;

/// Geodetic position relative to a reference ellipsoid.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LLA {
    /// radians
    pub latitude: f64,
    /// radians
    pub longitude: f64,
    /// meters above the reference ellipsoid
    pub altitude: f64,
}

impl LLA {
    pub fn from_rads(latitude: f64, longitude: f64, altitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            altitude,
        }
    }

    pub fn from_degs(latitude: f64, longitude: f64, altitude: f64) -> Self {
        Self {
            latitude: latitude.to_radians(),
            longitude: longitude.to_radians(),
            altitude,
        }
    }

    pub fn to_ecef(&self, ellipsoid: &EllipsoidModel) -> Result<ECEF> {
        ellipsoid.validate()?;
        Ok(self.to_ecef_unchecked(ellipsoid))
    }

    pub(crate) fn to_ecef_unchecked(&self, ellipsoid: &EllipsoidModel) -> ECEF {
        //Direct implementation of https://en.wikipedia.org/wiki/Geographic_coordinate_conversion
        let (sin_lat, cos_lat) = self.latitude.sin_cos();
        let (sin_lon, cos_lon) = self.longitude.sin_cos();
        let es = ellipsoid.eccentricity_squared();

        let n = ellipsoid.prime_vertical_radius(self.latitude);

        ECEF::new(
            (n + self.altitude) * cos_lat * cos_lon,
            (n + self.altitude) * cos_lat * sin_lon,
            (n * (1.0 - es) + self.altitude) * sin_lat,
        )
    }

    pub fn to_geocentric(&self, ellipsoid: &EllipsoidModel) -> Result<Geocentric> {
        Ok(self.to_ecef(ellipsoid)?.to_geocentric())
    }
}
