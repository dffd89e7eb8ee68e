use crate::prelude::*;

/// Spherical position about the center of the body.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Geocentric {
    pub radius: f64,
    /// radians
    pub latitude: f64,
    /// radians
    pub longitude: f64,
}

impl Geocentric {
    pub fn from_rads(radius: f64, latitude: f64, longitude: f64) -> Self {
        Self {
            radius,
            latitude,
            longitude,
        }
    }

    pub fn from_degs(radius: f64, latitude: f64, longitude: f64) -> Self {
        Self::from_rads(radius, latitude.to_radians(), longitude.to_radians())
    }

    pub fn to_ecef(&self) -> ECEF {
        let (sin_lat, cos_lat) = self.latitude.sin_cos();
        let (sin_lon, cos_lon) = self.longitude.sin_cos();
        ECEF::new(
            self.radius * cos_lat * cos_lon,
            self.radius * cos_lat * sin_lon,
            self.radius * sin_lat,
        )
    }

    pub fn to_lla(&self, ellipsoid: &EllipsoidModel) -> Result<LLA> {
        self.to_ecef().to_lla(ellipsoid)
    }
}
