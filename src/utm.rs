use lazy_static::lazy_static;

use crate::{
    constants::{BAND_OUT_OF_RANGE, FALSE_EASTING, FALSE_NORTHING, LATITUDE_BANDS},
    ellipsoid::ReferenceEllipsoid,
    latlon::LatLon,
    projections::transverse_mercator::TransverseMercator,
    zone::ZoneDesignator,
    Error,
};

lazy_static! {
    // Built once; every conversion on the default ellipsoid goes through
    // this instance.
    static ref WGS84_TM: TransverseMercator =
        TransverseMercator::new(ReferenceEllipsoid::wgs84());
}

/// Representation of a WGS84
/// [UTM](https://en.wikipedia.org/wiki/Universal_Transverse_Mercator_coordinate_system)
/// point: zone number, latitude band letter, and easting/northing in meters.
/// Conversion from lat/lon derives the zone and band automatically, applying
/// the Norway and Svalbard zone exceptions.
#[allow(clippy::module_name_repetitions)]
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UtmCoordinate {
    pub(crate) zone: i32,
    pub(crate) band: char,
    pub(crate) easting: f64,
    pub(crate) northing: f64,
}

impl UtmCoordinate {
    /// Internal-only constructor that doesn't check the coordinate
    pub(crate) fn new(zone: i32, band: char, easting: f64, northing: f64) -> UtmCoordinate {
        Self {
            zone,
            band,
            easting,
            northing,
        }
    }

    /// Tries to create a UTM point from its constituent parts. The zone and
    /// band must form a valid designator; easting and northing are taken as
    /// given.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidZoneDesignator`] if the zone is outside the
    /// range `[0, 60]` or the band letter is outside the range `['C', 'X']`.
    ///
    /// # Usage
    ///
    /// ```
    /// use utmcodec::UtmCoordinate;
    ///
    /// let coord = UtmCoordinate::create(18, 'T', 585664.121, 4511315.422);
    ///
    /// assert!(coord.is_ok());
    ///
    /// let coord = coord.unwrap();
    ///
    /// assert_eq!(coord.zone(), 18);
    /// assert_eq!(coord.band(), 'T');
    /// assert!((coord.easting() - 585664.121).abs() < 1e-3);
    /// assert!((coord.northing() - 4511315.422).abs() < 1e-3);
    ///
    /// let invalid_coord_zone = UtmCoordinate::create(61, 'T', 585664.121, 4511315.422);
    /// assert!(invalid_coord_zone.is_err());
    ///
    /// let invalid_coord_band = UtmCoordinate::create(18, 'Y', 585664.121, 4511315.422);
    /// assert!(invalid_coord_band.is_err());
    /// ```
    pub fn create(zone: i32, band: char, easting: f64, northing: f64) -> Result<UtmCoordinate, Error> {
        ZoneDesignator::create(zone, band)?;

        Ok(UtmCoordinate::new(zone, band, easting, northing))
    }

    /// Returns the UTM zone.
    ///
    /// # Example
    /// ```
    /// use utmcodec::UtmCoordinate;
    ///
    /// let coord = UtmCoordinate::create(18, 'T', 585664.121, 4511315.422).unwrap();
    /// assert_eq!(coord.zone(), 18);
    /// ```
    pub fn zone(&self) -> i32 {
        self.zone
    }

    /// Returns the latitude band letter.
    ///
    /// # Example
    /// ```
    /// use utmcodec::UtmCoordinate;
    ///
    /// let coord = UtmCoordinate::create(18, 'T', 585664.121, 4511315.422).unwrap();
    /// assert_eq!(coord.band(), 'T');
    /// ```
    pub fn band(&self) -> char {
        self.band
    }

    /// Returns the UTM easting.
    ///
    /// # Example
    /// ```
    /// use utmcodec::UtmCoordinate;
    ///
    /// let coord = UtmCoordinate::create(18, 'T', 585664.121, 4511315.422).unwrap();
    /// assert!((coord.easting() - 585664.121).abs() < 1e-3);
    /// ```
    pub fn easting(&self) -> f64 {
        self.easting
    }

    /// Returns the UTM northing.
    ///
    /// # Example
    /// ```
    /// use utmcodec::UtmCoordinate;
    ///
    /// let coord = UtmCoordinate::create(18, 'T', 585664.121, 4511315.422).unwrap();
    /// assert!((coord.northing() - 4511315.422).abs() < 1e-3);
    /// ```
    pub fn northing(&self) -> f64 {
        self.northing
    }

    /// Returns whether the coordinate is in the northern hemisphere. Band
    /// letters `N` through `X` cover the north, `C` through `M` the south.
    ///
    /// # Example
    /// ```
    /// use utmcodec::UtmCoordinate;
    ///
    /// let coord = UtmCoordinate::create(18, 'T', 585664.121, 4511315.422).unwrap();
    /// assert!(coord.is_north());
    ///
    /// let coord = UtmCoordinate::create(34, 'H', 261790.804, 6243850.338).unwrap();
    /// assert!(!coord.is_north());
    /// ```
    pub fn is_north(&self) -> bool {
        self.designator().is_north()
    }

    /// Returns the zone designator of this coordinate. A coordinate built
    /// from a latitude outside `[-80, 84]` carries the out-of-range band
    /// letter `Z`, which fails designator validation downstream.
    pub fn designator(&self) -> ZoneDesignator {
        ZoneDesignator::new(self.zone, self.band)
    }

    /// Converts from [`LatLon`] to [`UtmCoordinate`] on the default WGS 84
    /// ellipsoid.
    ///
    /// # Usage
    ///
    /// ```
    /// use utmcodec::{LatLon, UtmCoordinate};
    ///
    /// let coord = LatLon::create(40.748333, -73.985278).unwrap();
    ///
    /// let converted = UtmCoordinate::from_latlon(&coord);
    ///
    /// assert_eq!(converted.zone(), 18);
    /// assert_eq!(converted.band(), 'T');
    /// // Check if the converted coordinate is accurate to 3 decimals (same as reference)
    /// assert!((converted.easting() - 585664.121).abs() < 1e-3);
    /// assert!((converted.northing() - 4511315.422).abs() < 1e-3);
    /// ```
    pub fn from_latlon(value: &LatLon) -> UtmCoordinate {
        Self::project_forward(&WGS84_TM, value)
    }

    /// Converts from [`LatLon`] to [`UtmCoordinate`] on the given reference
    /// ellipsoid.
    ///
    /// # Usage
    ///
    /// ```
    /// use utmcodec::{LatLon, ReferenceEllipsoid, UtmCoordinate};
    ///
    /// let clarke = ReferenceEllipsoid::from_id(5);
    /// let coord = LatLon::create(40.748333, -73.985278).unwrap();
    ///
    /// let converted = UtmCoordinate::from_latlon_with(clarke, &coord);
    /// let back = converted.to_latlon_with(clarke);
    ///
    /// assert!((back.latitude() - coord.latitude()).abs() < 1e-6);
    /// assert!((back.longitude() - coord.longitude()).abs() < 1e-6);
    /// ```
    pub fn from_latlon_with(ellipsoid: &ReferenceEllipsoid, value: &LatLon) -> UtmCoordinate {
        Self::project_forward(&TransverseMercator::new(ellipsoid), value)
    }

    fn project_forward(projection: &TransverseMercator, value: &LatLon) -> UtmCoordinate {
        let lon = normalize_longitude(value.longitude);
        let zone = zone_number(value.latitude, lon);
        let band = latitude_band(value.latitude);

        let (x, y) = projection.from_latlon(central_meridian(zone), value.latitude, lon);

        let easting = x + FALSE_EASTING;
        let northing = if value.latitude < 0.0 { y + FALSE_NORTHING } else { y };

        UtmCoordinate {
            zone,
            band,
            easting,
            northing,
        }
    }

    /// Converts from [`UtmCoordinate`] to [`LatLon`] on the default WGS 84
    /// ellipsoid.
    ///
    /// # Usage
    ///
    /// ```
    /// use utmcodec::{LatLon, UtmCoordinate};
    ///
    /// let coord = LatLon::create(40.748333, -73.985278).unwrap();
    /// let coord_utm = UtmCoordinate::create(18, 'T', 585664.121, 4511315.422).unwrap();
    ///
    /// let converted = coord_utm.to_latlon();
    ///
    /// // Check if the converted coordinate is accurate to 6 decimals (same as reference)
    /// assert!((converted.latitude() - coord.latitude()).abs() < 1e-6);
    /// assert!((converted.longitude() - coord.longitude()).abs() < 1e-6);
    /// ```
    pub fn to_latlon(&self) -> LatLon {
        self.project_inverse(&WGS84_TM)
    }

    /// Converts from [`UtmCoordinate`] to [`LatLon`] on the given reference
    /// ellipsoid.
    pub fn to_latlon_with(&self, ellipsoid: &ReferenceEllipsoid) -> LatLon {
        self.project_inverse(&TransverseMercator::new(ellipsoid))
    }

    fn project_inverse(&self, projection: &TransverseMercator) -> LatLon {
        let x = self.easting - FALSE_EASTING;
        let y = if self.is_north() { self.northing } else { self.northing - FALSE_NORTHING };

        projection.to_latlon(central_meridian(self.zone), x, y)
    }
}

pub(crate) fn central_meridian(zone: i32) -> f64 {
    6.0 * f64::from(zone) - 183.
}

// Wrap a longitude into [-180, 180).
pub(crate) fn normalize_longitude(lon: f64) -> f64 {
    lon - ((lon + 180.0) / 360.0).floor() * 360.0
}

// Map lat/lon to the UTM zone number. Expects a normalized longitude.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn zone_number(lat: f64, lon: f64) -> i32 {
    let mut zone = ((lon + 180.0) / 6.0).floor() as i32 + 1;

    // The Norway exception
    if (56.0..64.0).contains(&lat) && (3.0..12.0).contains(&lon) {
        zone = 32;
    }

    // The Svalbard exception
    if (72.0..84.0).contains(&lat) {
        if (0.0..9.0).contains(&lon) {
            zone = 31;
        } else if (9.0..21.0).contains(&lon) {
            zone = 33;
        } else if (21.0..33.0).contains(&lon) {
            zone = 35;
        } else if (33.0..42.0).contains(&lon) {
            zone = 37;
        }
    }

    zone
}

// Latitude band letter for the 8-degree bands between 80S and 84N. Letters
// run C..X south to north, skipping I and O.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn latitude_band(lat: f64) -> char {
    if !(-80.0..=84.0).contains(&lat) {
        return BAND_OUT_OF_RANGE;
    }

    let index = (((lat + 80.0) / 8.0).floor() as usize).min(LATITUDE_BANDS.len() - 1);
    LATITUDE_BANDS.as_bytes()[index] as char
}

/// East-west width in meters of a standard 6-degree zone at the given
/// latitude, measured between the zone edges 3 degrees either side of the
/// central meridian.
///
/// # Usage
///
/// ```
/// use utmcodec::utm::zonal_width;
///
/// // A zone spans about 668 km at the equator and narrows towards the poles
/// assert!((zonal_width(0.0) - 667957.114).abs() < 1e-2);
/// assert!((zonal_width(54.0) - 393241.797).abs() < 1e-2);
/// ```
pub fn zonal_width(lat: f64) -> f64 {
    let (west, _) = WGS84_TM.from_latlon(0.0, lat, -3.0);
    let (east, _) = WGS84_TM.from_latlon(0.0, lat, 3.0);

    east - west
}

/// Easting correction in meters that expresses `point` in the planar frame
/// of `origin_zone` instead of its own zone: one zone width per zone
/// boundary crossed.
pub fn zonal_offset(point: &LatLon, origin_zone: i32) -> f64 {
    let lon = normalize_longitude(point.longitude);
    let crossings = zone_number(point.latitude, lon) - origin_zone;

    f64::from(crossings) * zonal_width(point.latitude)
}

impl std::fmt::Display for UtmCoordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut buf = ryu::Buffer::new();
        let easting = buf.format(self.easting);
        let mut buf = ryu::Buffer::new();
        let northing = buf.format(self.northing);
        write!(
            f,
            "{} {easting} {northing}",
            self.designator(),
        )
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::approx_eq;

    use super::{central_meridian, latitude_band, normalize_longitude, zone_number};

    #[test]
    fn bands_cover_the_table() {
        assert_eq!(latitude_band(-80.0), 'C');
        assert_eq!(latitude_band(-8.0), 'M');
        assert_eq!(latitude_band(-0.01), 'M');
        assert_eq!(latitude_band(0.0), 'N');
        assert_eq!(latitude_band(40.748333), 'T');
        assert_eq!(latitude_band(71.99), 'W');
        assert_eq!(latitude_band(72.0), 'X');
        // X is stretched to cover up to 84
        assert_eq!(latitude_band(84.0), 'X');
    }

    #[test]
    fn bands_outside_the_table() {
        assert_eq!(latitude_band(-80.01), 'Z');
        assert_eq!(latitude_band(84.01), 'Z');
        assert_eq!(latitude_band(90.0), 'Z');
    }

    #[test]
    fn zone_numbers() {
        assert_eq!(zone_number(0.0, -180.0), 1);
        assert_eq!(zone_number(0.0, 179.999), 60);
        assert_eq!(zone_number(50.0, 1.0), 31);
        assert_eq!(zone_number(-33.918861, 18.4233), 34);
    }

    #[test]
    fn norway_exception() {
        assert_eq!(zone_number(60.0, 5.0), 32);
        assert_eq!(zone_number(60.0, 2.9), 31);
        assert_eq!(zone_number(55.9, 5.0), 31);
        assert_eq!(zone_number(64.0, 5.0), 31);
    }

    #[test]
    fn svalbard_exception() {
        assert_eq!(zone_number(78.0, 8.9), 31);
        assert_eq!(zone_number(78.0, 9.0), 33);
        assert_eq!(zone_number(78.0, 20.9), 33);
        assert_eq!(zone_number(78.0, 21.0), 35);
        assert_eq!(zone_number(78.0, 33.0), 37);
        assert_eq!(zone_number(78.0, 41.9), 37);
        assert_eq!(zone_number(78.0, 42.0), 38);
        // South of the stretched X band the regular grid applies
        assert_eq!(zone_number(71.9, 9.0), 32);
    }

    #[test]
    fn longitude_wrapping() {
        assert!(approx_eq!(f64, normalize_longitude(0.0), 0.0));
        assert!(approx_eq!(f64, normalize_longitude(180.0), -180.0));
        assert!(approx_eq!(f64, normalize_longitude(-180.0), -180.0));
        assert!(approx_eq!(f64, normalize_longitude(190.0), -170.0));
        assert!(approx_eq!(f64, normalize_longitude(-200.0), 160.0));
        assert!(approx_eq!(f64, normalize_longitude(540.0), -180.0));
    }

    #[test]
    fn central_meridians() {
        assert!(approx_eq!(f64, central_meridian(31), 3.0));
        assert!(approx_eq!(f64, central_meridian(1), -177.0));
        assert!(approx_eq!(f64, central_meridian(60), 177.0));
    }
}
