//! Ellipsoid models and conversions between Cartesian, geocentric and
//! geodetic coordinates.

pub mod conversion;
pub mod ecef;
pub mod elementwise;
pub mod ellipsoid;
pub mod error;
pub mod geocentric;
pub mod lla;
pub mod prelude;
pub mod radius;

pub use crate::prelude::*;
