use crate::{constants::UTM_K0, ellipsoid::ReferenceEllipsoid, latlon::LatLon};

/// Transverse Mercator projection about an arbitrary central meridian.
///
/// Uses the truncated series from USGS Professional Paper 1395 (Snyder),
/// accurate to well under a meter inside a UTM zone. All ellipsoid-derived
/// coefficients are computed once at construction.
pub(crate) struct TransverseMercator {
    a: f64,
    k0: f64,
    e2: f64,
    ep2: f64,
    e1: f64,
    // a * (1 - e2/4 - 3e2^2/64 - 5e2^3/256), scales northing to the
    // footpoint series parameter
    mu_scale: f64,
}

impl TransverseMercator {
    pub fn new(ellipsoid: &ReferenceEllipsoid) -> TransverseMercator {
        let a = ellipsoid.semi_major_axis();
        let e2 = ellipsoid.eccentricity_squared();
        let ep2 = ellipsoid.second_eccentricity_squared();

        let e1 = (1. - (1. - e2).sqrt()) / (1. + (1. - e2).sqrt());
        let mu_scale = a * (1. - e2 / 4. - 3. * e2.powi(2) / 64. - 5. * e2.powi(3) / 256.);

        Self {
            a,
            k0: UTM_K0,
            e2,
            ep2,
            e1,
            mu_scale,
        }
    }

    /// Projects lat/lon (degrees) to easting/northing in meters relative to
    /// the central meridian `lon0`. No false easting or northing is applied,
    /// so the returned values are signed.
    pub fn from_latlon(&self, lon0: f64, lat: f64, lon: f64) -> (f64, f64) {
        let phi = lat.to_radians();
        let lam = lon.to_radians();
        let lam0 = lon0.to_radians();

        let sin_phi = phi.sin();
        let cos_phi = phi.cos();
        let tan_phi = phi.tan();

        // Radius of curvature in the prime vertical
        let n = self.a / (1. - self.e2 * sin_phi.powi(2)).sqrt();
        let t = tan_phi.powi(2);
        let c = self.ep2 * cos_phi.powi(2);
        let a_ = cos_phi * (lam - lam0);

        let x = self.k0
            * n
            * (a_
                + (1. - t + c) * a_.powi(3) / 6.
                + (5. - 18. * t + t.powi(2) + 72. * c - 58. * self.ep2) * a_.powi(5) / 120.);

        let y = self.k0
            * (self.meridional_arc(phi)
                + n * tan_phi
                    * (a_.powi(2) / 2.
                        + (5. - t + 9. * c + 4. * c.powi(2)) * a_.powi(4) / 24.
                        + (61. - 58. * t + t.powi(2) + 600. * c - 330. * self.ep2) * a_.powi(6)
                            / 720.));

        (x, y)
    }

    /// Inverse projection of signed easting/northing in meters relative to
    /// the central meridian `lon0`, back to lat/lon in degrees.
    pub fn to_latlon(&self, lon0: f64, x: f64, y: f64) -> LatLon {
        let phi1 = self.footpoint_latitude(y);

        let sin_phi1 = phi1.sin();
        let cos_phi1 = phi1.cos();
        let tan_phi1 = phi1.tan();

        let n1 = self.a / (1. - self.e2 * sin_phi1.powi(2)).sqrt();
        let t1 = tan_phi1.powi(2);
        let c1 = self.ep2 * cos_phi1.powi(2);
        // Radius of curvature in the meridian plane
        let r1 = self.a * (1. - self.e2) / (1. - self.e2 * sin_phi1.powi(2)).powf(1.5);
        let d = x / (n1 * self.k0);

        let lat = phi1
            - (n1 * tan_phi1 / r1)
                * (d.powi(2) / 2.
                    - (5. + 3. * t1 + 10. * c1 - 4. * c1.powi(2) - 9. * self.ep2) * d.powi(4) / 24.
                    + (61. + 90. * t1 + 298. * c1 + 45. * t1.powi(2)
                        - 252. * self.ep2
                        - 3. * c1.powi(2))
                        * d.powi(6)
                        / 720.);

        let lon = (d - (1. + 2. * t1 + c1) * d.powi(3) / 6.
            + (5. - 2. * c1 + 28. * t1 - 3. * c1.powi(2) + 8. * self.ep2 + 24. * t1.powi(2))
                * d.powi(5)
                / 120.)
            / cos_phi1;

        LatLon {
            latitude: lat.to_degrees(),
            longitude: lon0 + lon.to_degrees(),
        }
    }

    // Meridian arc length in meters from the equator to latitude phi (radians)
    fn meridional_arc(&self, phi: f64) -> f64 {
        let e2 = self.e2;

        self.a
            * ((1. - e2 / 4. - 3. * e2.powi(2) / 64. - 5. * e2.powi(3) / 256.) * phi
                - (3. * e2 / 8. + 3. * e2.powi(2) / 32. + 45. * e2.powi(3) / 1024.)
                    * (2. * phi).sin()
                + (15. * e2.powi(2) / 256. + 45. * e2.powi(3) / 1024.) * (4. * phi).sin()
                - 35. * e2.powi(3) / 3072. * (6. * phi).sin())
    }

    // Latitude (radians) of the point on the central meridian with the same
    // northing, the expansion point for the inverse series
    fn footpoint_latitude(&self, y: f64) -> f64 {
        let e1 = self.e1;
        let mu = y / self.k0 / self.mu_scale;

        mu + (3. * e1 / 2. - 27. * e1.powi(3) / 32.) * (2. * mu).sin()
            + (21. * e1.powi(2) / 16. - 55. * e1.powi(4) / 32.) * (4. * mu).sin()
            + 151. * e1.powi(3) / 96. * (6. * mu).sin()
    }
}

#[cfg(test)]
mod tests {
    use crate::ellipsoid::ReferenceEllipsoid;

    use super::TransverseMercator;

    #[test]
    fn forward_inverse_consistency() {
        let tm = TransverseMercator::new(ReferenceEllipsoid::wgs84());

        let (lat0, lon0) = (60.39299, 5.32415);
        let (x, y) = tm.from_latlon(9.0, lat0, lon0);
        let coord = tm.to_latlon(9.0, x, y);

        assert!((coord.latitude() - lat0).abs() < 1e-7);
        assert!((coord.longitude() - lon0).abs() < 1e-7);
    }

    #[test]
    fn meridional_arc_at_known_latitudes() {
        let tm = TransverseMercator::new(ReferenceEllipsoid::wgs84());

        assert_eq!(tm.meridional_arc(0.0), 0.0);
        // Quarter meridian of WGS 84 is 10 001 965.729 m
        let quarter = tm.meridional_arc(std::f64::consts::FRAC_PI_2);
        assert!((quarter - 10_001_965.729).abs() < 1.0);
        assert!((tm.meridional_arc(std::f64::consts::FRAC_PI_4) - 4_984_944.378).abs() < 1e-2);
    }

    #[test]
    fn footpoint_recovers_meridian_point() {
        let tm = TransverseMercator::new(ReferenceEllipsoid::wgs84());

        assert_eq!(tm.footpoint_latitude(0.0), 0.0);

        let phi = 0.8_f64;
        let arc = tm.meridional_arc(phi);
        assert!((tm.footpoint_latitude(tm.k0 * arc) - phi).abs() < 1e-9);
    }
}
