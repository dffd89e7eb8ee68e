pub use nalgebra::{DVector, Vector3};
pub use crate::conversion::{
    cart2geocentric, cart2geodetic, geocentric2cart, geocentric2geodetic, geodetic2cart,
    geodetic2geocentric,
};
pub use crate::ecef::ECEF;
pub use crate::elementwise::Elementwise;
pub use crate::ellipsoid::{EllipsoidModel, EllipsoidModels, ellipsoidmodels};
pub use crate::error::{GeodesyError, Result};
pub use crate::geocentric::Geocentric;
pub use crate::lla::LLA;
pub use crate::radius::{ellipsoid_r_curvature, ellipsoid_r_geocentric, ellipsoid_r_geodetic};
