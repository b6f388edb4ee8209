/// A reference ellipsoid from the built-in parameter table, described by its
/// semi-major axis and inverse flattening. Every derived quantity used by the
/// projection math is computed from those two values.
#[derive(Clone, Copy, Debug)]
pub struct ReferenceEllipsoid {
    id: i32,
    name: &'static str,
    semi_major_axis: f64,
    inverse_flattening: f64,
}

/// Parameter table addressed by numeric id. Entry 23, WGS 84, is the default
/// ellipsoid for every conversion.
#[allow(clippy::unreadable_literal)]
static ELLIPSOIDS: [ReferenceEllipsoid; 23] = [
    ReferenceEllipsoid { id: 1, name: "Airy", semi_major_axis: 6_377_563.396, inverse_flattening: 299.3249646 },
    ReferenceEllipsoid { id: 2, name: "Australian National", semi_major_axis: 6_378_160., inverse_flattening: 298.25 },
    ReferenceEllipsoid { id: 3, name: "Bessel 1841", semi_major_axis: 6_377_397.155, inverse_flattening: 299.1528128 },
    ReferenceEllipsoid { id: 4, name: "Bessel 1841 Nambia", semi_major_axis: 6_377_483.865, inverse_flattening: 299.1528128 },
    ReferenceEllipsoid { id: 5, name: "Clarke 1866", semi_major_axis: 6_378_206.4, inverse_flattening: 294.9786982 },
    ReferenceEllipsoid { id: 6, name: "Clarke 1880", semi_major_axis: 6_378_249.145, inverse_flattening: 293.465 },
    ReferenceEllipsoid { id: 7, name: "Everest", semi_major_axis: 6_377_276.345, inverse_flattening: 300.8017 },
    ReferenceEllipsoid { id: 8, name: "Fischer 1960 Mercury", semi_major_axis: 6_378_166., inverse_flattening: 298.3 },
    ReferenceEllipsoid { id: 9, name: "Fischer 1968", semi_major_axis: 6_378_150., inverse_flattening: 298.3 },
    ReferenceEllipsoid { id: 10, name: "GRS 1967", semi_major_axis: 6_378_160., inverse_flattening: 298.247167427 },
    ReferenceEllipsoid { id: 11, name: "GRS 1980", semi_major_axis: 6_378_137., inverse_flattening: 298.257222101 },
    ReferenceEllipsoid { id: 12, name: "Helmert 1906", semi_major_axis: 6_378_200., inverse_flattening: 298.3 },
    ReferenceEllipsoid { id: 13, name: "Hough", semi_major_axis: 6_378_270., inverse_flattening: 297.0 },
    ReferenceEllipsoid { id: 14, name: "International", semi_major_axis: 6_378_388., inverse_flattening: 297.0 },
    ReferenceEllipsoid { id: 15, name: "Krassovsky", semi_major_axis: 6_378_245., inverse_flattening: 298.3 },
    ReferenceEllipsoid { id: 16, name: "Modified Airy", semi_major_axis: 6_377_340.189, inverse_flattening: 299.3249646 },
    ReferenceEllipsoid { id: 17, name: "Modified Everest", semi_major_axis: 6_377_304.063, inverse_flattening: 300.8017 },
    ReferenceEllipsoid { id: 18, name: "Modified Fischer 1960", semi_major_axis: 6_378_155., inverse_flattening: 298.3 },
    ReferenceEllipsoid { id: 19, name: "South American 1969", semi_major_axis: 6_378_160., inverse_flattening: 298.25 },
    ReferenceEllipsoid { id: 20, name: "WGS 60", semi_major_axis: 6_378_165., inverse_flattening: 298.3 },
    ReferenceEllipsoid { id: 21, name: "WGS 66", semi_major_axis: 6_378_145., inverse_flattening: 298.25 },
    ReferenceEllipsoid { id: 22, name: "WGS 72", semi_major_axis: 6_378_135., inverse_flattening: 298.26 },
    ReferenceEllipsoid { id: 23, name: "WGS 84", semi_major_axis: 6_378_137., inverse_flattening: 298.257223563 },
];

impl ReferenceEllipsoid {
    /// Looks up an ellipsoid by its table id.
    ///
    /// # Panics
    ///
    /// Panics if `id` is not in the table. Callers that receive the id from
    /// an external source should use [`ReferenceEllipsoid::find`] instead.
    ///
    /// # Usage
    ///
    /// ```
    /// use utmcodec::ReferenceEllipsoid;
    ///
    /// let ellipsoid = ReferenceEllipsoid::from_id(23);
    ///
    /// assert_eq!(ellipsoid.name(), "WGS 84");
    /// assert_eq!(ellipsoid.semi_major_axis(), 6_378_137.);
    /// ```
    pub fn from_id(id: i32) -> &'static ReferenceEllipsoid {
        match Self::find(id) {
            Some(ellipsoid) => ellipsoid,
            None => panic!("no reference ellipsoid with id {id}"),
        }
    }

    /// Looks up an ellipsoid by its table id, returning `None` for ids the
    /// table does not contain.
    ///
    /// # Usage
    ///
    /// ```
    /// use utmcodec::ReferenceEllipsoid;
    ///
    /// assert!(ReferenceEllipsoid::find(5).is_some());
    /// assert!(ReferenceEllipsoid::find(99).is_none());
    /// ```
    pub fn find(id: i32) -> Option<&'static ReferenceEllipsoid> {
        ELLIPSOIDS.iter().find(|ellipsoid| ellipsoid.id == id)
    }

    /// Returns the WGS 84 entry, the default ellipsoid for conversions.
    pub fn wgs84() -> &'static ReferenceEllipsoid {
        &ELLIPSOIDS[ELLIPSOIDS.len() - 1]
    }

    /// Returns the table id.
    #[inline]
    pub fn id(&self) -> i32 {
        self.id
    }

    /// Returns the ellipsoid name.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the semi-major axis `a` in meters.
    #[inline]
    pub fn semi_major_axis(&self) -> f64 {
        self.semi_major_axis
    }

    /// Returns the inverse flattening `1/f`.
    #[inline]
    pub fn inverse_flattening(&self) -> f64 {
        self.inverse_flattening
    }

    /// Returns the flattening `f`.
    #[inline]
    pub fn flattening(&self) -> f64 {
        1.0 / self.inverse_flattening
    }

    /// Returns the semi-minor axis `b` in meters.
    pub fn semi_minor_axis(&self) -> f64 {
        self.semi_major_axis * (1.0 - self.flattening())
    }

    /// Returns the squared first eccentricity `e^2 = f * (2 - f)`.
    ///
    /// # Usage
    ///
    /// ```
    /// use utmcodec::ReferenceEllipsoid;
    ///
    /// let wgs84 = ReferenceEllipsoid::from_id(23);
    ///
    /// assert!((wgs84.eccentricity_squared() - 0.00669438).abs() < 1e-8);
    /// ```
    pub fn eccentricity_squared(&self) -> f64 {
        let f = self.flattening();
        f * (2.0 - f)
    }

    /// Returns the squared second eccentricity `e'^2 = e^2 / (1 - e^2)`.
    pub fn second_eccentricity_squared(&self) -> f64 {
        let e2 = self.eccentricity_squared();
        e2 / (1.0 - e2)
    }
}
