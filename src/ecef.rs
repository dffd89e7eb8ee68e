use std::f64::consts::FRAC_PI_2;

use crate::prelude::*;

/// Earth-centered Cartesian position, same unit as the ellipsoid radius.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ECEF {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Latitude assigned to points on the polar axis, +90 for z = 0.
fn polar_latitude(z: f64) -> f64 {
    if z >= 0.0 { FRAC_PI_2 } else { -FRAC_PI_2 }
}

impl ECEF {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn norm(&self) -> f64 {
        self.to_vector().norm()
    }

    pub fn to_vector(&self) -> Vector3<f64> {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Longitude of the point, 0 on the polar axis.
    fn longitude(&self) -> f64 {
        if self.x == 0.0 && self.y == 0.0 {
            0.0
        } else {
            self.y.atan2(self.x)
        }
    }

    pub fn to_geocentric(&self) -> Geocentric {
        let radius = self.norm();
        let latitude = if radius == 0.0 {
            0.0
        } else {
            self.z.atan2(self.x.hypot(self.y))
        };
        Geocentric::from_rads(radius, latitude, self.longitude())
    }

    pub fn to_lla(&self, ellipsoid: &EllipsoidModel) -> Result<LLA> {
        ellipsoid.validate()?;
        Ok(self.to_lla_unchecked(ellipsoid))
    }

    /// Closed-form inversion, valid for every point including those inside the
    /// evolute of the meridian ellipse, where the surface normal through the
    /// point is not unique. There the nearest surface point is returned.
    ///
    /// Ref : Vermeille H., (2011): An analytical method to transform geocentric into geodetic
    ///       coordinates, Journal of Geodesy, 85, pp. 105-117.
    ///       Karney C.F.F., GeographicLib, Geocentric::IntReverse.
    pub(crate) fn to_lla_unchecked(&self, ellipsoid: &EllipsoidModel) -> LLA {
        let a = ellipsoid.equatorial_radius;
        let es = ellipsoid.eccentricity_squared();
        let one_minus_es = 1. - es;
        let e4 = es * es;

        let longitude = self.longitude();
        let beta = self.x.hypot(self.y);

        if e4 == 0.0 {
            let latitude = if beta == 0.0 {
                polar_latitude(self.z)
            } else {
                self.z.atan2(beta)
            };
            return LLA::from_rads(latitude, longitude, beta.hypot(self.z) - a);
        }

        let p = (beta / a).powi(2);
        let q = one_minus_es * (self.z / a).powi(2);
        let r = (p + q - e4) / 6.;

        let (sin_lat, cos_lat, altitude) = if !(q == 0.0 && r <= 0.0) {
            let s = e4 * p * q / 4.;
            let r2 = r * r;
            let r3 = r * r2;
            let disc = s * (2. * r3 + s);

            let mut u = r;
            if disc >= 0.0 {
                let mut t3 = s + r3;
                t3 += if t3 < 0.0 { -disc.sqrt() } else { disc.sqrt() };
                let t = t3.cbrt();
                u += t + if t != 0.0 { r2 / t } else { 0.0 };
            } else {
                // inside the evolute, three real roots
                let angle = (-disc).sqrt().atan2(-(s + r3));
                u += 2. * r * (angle / 3.).cos();
            }

            let v = (u * u + e4 * q).sqrt();
            let uv = if u < 0.0 { e4 * q / (v - u) } else { u + v };
            let w = (es * (uv - q) / (2. * v)).max(0.0);
            let k = uv / ((uv + w * w).sqrt() + w);
            let d = k * beta / (k + es);

            let z_over_k = self.z / k;
            let beta_over_k = beta / (k + es);
            let length = z_over_k.hypot(beta_over_k);
            (
                z_over_k / length,
                beta_over_k / length,
                (1. - one_minus_es / k) * d.hypot(self.z),
            )
        } else {
            // equatorial plane inside the evolute, the general formulas degenerate to 0/0
            let zz = ((e4 - p) / one_minus_es).sqrt();
            let xx = p.sqrt();
            let length = zz.hypot(xx);
            let sin_lat = if self.z < 0.0 { -zz / length } else { zz / length };
            (sin_lat, xx / length, -a * one_minus_es * length / es)
        };

        LLA::from_rads(sin_lat.atan2(cos_lat), longitude, altitude)
    }
}
