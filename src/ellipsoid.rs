use std::collections::HashMap;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::error::{GeodesyError, Result};

/// Reference ellipsoid, an oblate spheroid given by its equatorial radius and
/// eccentricity. A sphere has zero eccentricity.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct EllipsoidModel {
    /// meters
    pub equatorial_radius: f64,
    pub eccentricity: f64,
}

impl EllipsoidModel {
    pub const WGS84: EllipsoidModel = EllipsoidModel::new(6378137.0, 0.0818191908426);

    /// Builds a model without checking it. Every conversion validates the
    /// model it is given, see [`EllipsoidModel::validate`].
    pub const fn new(equatorial_radius: f64, eccentricity: f64) -> Self {
        Self {
            equatorial_radius,
            eccentricity,
        }
    }

    pub fn from_flattening(equatorial_radius: f64, flattening: f64) -> Result<Self> {
        if !(0.0..1.0).contains(&flattening) {
            return Err(GeodesyError::InvalidArgument(format!(
                "flattening must lie in [0, 1), got {}",
                flattening
            )));
        }
        let model = Self::new(equatorial_radius, (flattening * (2. - flattening)).sqrt());
        model.validate()?;
        Ok(model)
    }

    pub fn from_radii(equatorial_radius: f64, polar_radius: f64) -> Result<Self> {
        if !(polar_radius > 0.0 && polar_radius <= equatorial_radius) {
            return Err(GeodesyError::InvalidArgument(format!(
                "polar radius must lie in (0, {}], got {}",
                equatorial_radius, polar_radius
            )));
        }
        let ratio = polar_radius / equatorial_radius;
        let model = Self::new(equatorial_radius, (1. - ratio * ratio).sqrt());
        model.validate()?;
        Ok(model)
    }

    /// Checks that the radius is finite and positive and that `0 <= e < 1`.
    pub fn validate(&self) -> Result<()> {
        if !(self.equatorial_radius.is_finite() && self.equatorial_radius > 0.0) {
            return Err(GeodesyError::InvalidArgument(format!(
                "equatorial radius must be finite and positive, got {}",
                self.equatorial_radius
            )));
        }
        if !(0.0..1.0).contains(&self.eccentricity) {
            return Err(GeodesyError::InvalidArgument(format!(
                "eccentricity must lie in [0, 1), got {}",
                self.eccentricity
            )));
        }
        Ok(())
    }

    pub fn eccentricity_squared(&self) -> f64 {
        self.eccentricity * self.eccentricity
    }

    /// e'² = e² / (1 - e²)
    pub fn second_eccentricity_squared(&self) -> f64 {
        let es = self.eccentricity_squared();
        es / (1. - es)
    }

    pub fn polar_radius(&self) -> f64 {
        self.equatorial_radius * (1. - self.eccentricity_squared()).sqrt()
    }

    pub fn flattening(&self) -> f64 {
        1. - (1. - self.eccentricity_squared()).sqrt()
    }

    pub fn is_sphere(&self) -> bool {
        self.eccentricity == 0.0
    }

    /// Radius of curvature in the prime vertical, N. Latitude in radians.
    pub fn prime_vertical_radius(&self, latitude: f64) -> f64 {
        let sin_lat = latitude.sin();
        self.equatorial_radius / (1. - self.eccentricity_squared() * sin_lat * sin_lat).sqrt()
    }

    /// Radius of curvature in the meridian, M. Latitude in radians.
    pub fn meridional_radius(&self, latitude: f64) -> f64 {
        let es = self.eccentricity_squared();
        let sin_lat = latitude.sin();
        let w = 1. - es * sin_lat * sin_lat;
        self.equatorial_radius * (1. - es) / (w * w.sqrt())
    }
}

/// Named reference ellipsoids, in registration order.
#[derive(Debug)]
pub struct EllipsoidModels {
    entries: Vec<(&'static str, EllipsoidModel)>,
    index: HashMap<&'static str, usize>,
}

impl EllipsoidModels {
    fn new(entries: Vec<(&'static str, EllipsoidModel)>) -> Self {
        let index = entries
            .iter()
            .enumerate()
            .map(|(i, (name, _))| (*name, i))
            .collect();
        Self { entries, index }
    }

    pub fn get(&self, name: &str) -> Result<&EllipsoidModel> {
        self.index
            .get(name)
            .map(|&i| &self.entries[i].1)
            .ok_or_else(|| GeodesyError::KeyNotFound(name.to_owned()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn models(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(name, _)| *name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &EllipsoidModel)> + '_ {
        self.entries.iter().map(|(name, model)| (*name, model))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

static ELLIPSOID_MODELS: LazyLock<EllipsoidModels> = LazyLock::new(|| {
    EllipsoidModels::new(vec![
        ("SphericalEarth", EllipsoidModel::new(6371000.0, 0.0)),
        ("WGS84", EllipsoidModel::WGS84),
        ("SphericalVenus", EllipsoidModel::new(6051800.0, 0.0)),
        ("SphericalMars", EllipsoidModel::new(3389500.0, 0.0)),
        ("EllipsoidMars", EllipsoidModel::new(3396190.0, 0.1083)),
        ("SphericalJupiter", EllipsoidModel::new(69911000.0, 0.0)),
        ("EllipsoidJupiter", EllipsoidModel::new(71492000.0, 0.3543)),
        ("SphericalEuropa", EllipsoidModel::new(1561000.0, 0.0)),
        ("SphericalIo", EllipsoidModel::new(1821600.0, 0.0)),
        ("EllipsoidIo", EllipsoidModel::new(1829400.0, 0.0826)),
    ])
});

/// The registry of reference ellipsoids, built on first use.
pub fn ellipsoidmodels() -> &'static EllipsoidModels {
    &ELLIPSOID_MODELS
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn registry_eccentricities_are_valid() {
        let e = ellipsoidmodels();
        assert!(!e.is_empty());
        for (name, model) in e.iter() {
            assert!(model.eccentricity >= 0.0, "{}", name);
            assert!(model.eccentricity < 1.0, "{}", name);
            assert!(model.validate().is_ok(), "{}", name);
        }
    }

    #[test]
    fn lookup_by_name() {
        let e = ellipsoidmodels();
        assert_eq!(*e.get("WGS84").unwrap(), EllipsoidModel::WGS84);
        assert!(e.contains("SphericalEarth"));
        assert_eq!(e.models().count(), e.len());
        assert_eq!(e.models().next(), Some("SphericalEarth"));
    }

    #[test]
    fn unknown_name_is_key_not_found() {
        let err = ellipsoidmodels().get("Flat").unwrap_err();
        assert_eq!(err, GeodesyError::KeyNotFound("Flat".to_owned()));
    }

    #[test]
    fn invalid_models_fail_validation() {
        assert!(EllipsoidModel::new(6378137.0, 1.0).validate().is_err());
        assert!(EllipsoidModel::new(6378137.0, -0.1).validate().is_err());
        assert!(EllipsoidModel::new(0.0, 0.1).validate().is_err());
        assert!(EllipsoidModel::new(f64::NAN, 0.0).validate().is_err());
    }

    #[test]
    fn wgs84_derived_quantities() {
        let wgs84 = EllipsoidModel::WGS84;
        assert_relative_eq!(wgs84.flattening(), 1.0 / 298.257223563, max_relative = 1e-9);
        assert_relative_eq!(wgs84.polar_radius(), 6356752.314245, epsilon = 1e-3);

        let from_f = EllipsoidModel::from_flattening(6378137.0, 1.0 / 298.257223563).unwrap();
        assert_relative_eq!(from_f.eccentricity, wgs84.eccentricity, max_relative = 1e-10);

        let from_radii = EllipsoidModel::from_radii(6378137.0, wgs84.polar_radius()).unwrap();
        assert_relative_eq!(from_radii.eccentricity, wgs84.eccentricity, max_relative = 1e-10);
        assert!(EllipsoidModel::from_radii(6378137.0, 7000000.0).is_err());
    }

    #[test]
    fn curvature_radii_at_equator_and_pole() {
        let wgs84 = EllipsoidModel::WGS84;
        let a = wgs84.equatorial_radius;
        let b = wgs84.polar_radius();
        assert_relative_eq!(wgs84.prime_vertical_radius(0.0), a);
        assert_relative_eq!(wgs84.meridional_radius(0.0), b * b / a, max_relative = 1e-12);
        let pole = std::f64::consts::FRAC_PI_2;
        assert_relative_eq!(wgs84.prime_vertical_radius(pole), a * a / b, max_relative = 1e-12);
        assert_relative_eq!(wgs84.meridional_radius(pole), a * a / b, max_relative = 1e-12);
    }

    #[test]
    fn model_serializes_to_json() {
        let json = serde_json::to_string(&EllipsoidModel::WGS84).unwrap();
        let back: EllipsoidModel = serde_json::from_str(&json).unwrap();
        assert_eq!(back, EllipsoidModel::WGS84);
    }
}
