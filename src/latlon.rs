use std::fmt::Display;

use crate::{constants::FALSE_NORTHING, utm::{zonal_offset, UtmCoordinate}, Error};

/// Representation of a WGS84 latitude/longitude point. Can be converted
/// to/from [`UtmCoordinate`].
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LatLon {
    #[cfg_attr(feature = "serde", serde(alias = "lat"))]
    pub(crate) latitude: f64,
    #[cfg_attr(feature = "serde", serde(alias = "lon"))]
    pub(crate) longitude: f64,
}

impl LatLon {
    /// Internal-only constructor that doesn't check the bounds of lat/lon
    pub(crate) fn new(lat: f64, lon: f64) -> LatLon {
        Self {
            latitude: lat,
            longitude: lon,
        }
    }

    /// Tries to create a latitude/longitude point from a lat/lon pair. First checks if the
    /// values are valid:
    /// * Latitude must be in range [-90,90]
    /// * Longitude must be in range [-180,180)
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCoord`] if either latitude or longitude are invalid.
    ///
    /// # Usage
    ///
    /// ```
    /// use utmcodec::LatLon;
    ///
    /// let coord = LatLon::create(40.748333, -73.985278);
    ///
    /// assert!(coord.is_ok());
    ///
    /// let coord = coord.unwrap();
    ///
    /// assert_eq!(coord.latitude(), 40.748333);
    /// assert_eq!(coord.longitude(), -73.985278);
    ///
    /// let invalid_coord_lat = LatLon::create(100.0, 0.0);
    /// assert!(invalid_coord_lat.is_err());
    ///
    /// let invalid_coord_lon = LatLon::create(0.0, -200.0);
    /// assert!(invalid_coord_lon.is_err());
    /// ```
    pub fn create(lat: f64, lon: f64) -> Result<LatLon, Error> {
        if !(-90_f64..=90_f64).contains(&lat) {
            Err(Error::InvalidCoord(format!("Latitude {lat} outside of valid range [-90, 90].")))
        } else if !(-180_f64..180_f64).contains(&lon) {
            Err(Error::InvalidCoord(format!("Longitude {lon} outside of valid range [-180, 180).")))
        } else {
            Ok(LatLon::new(lat, lon))
        }
    }

    /// Returns the latitude value.
    ///
    /// # Example
    /// ```
    /// use utmcodec::LatLon;
    ///
    /// let coord = LatLon::create(40.748333, -73.985278).unwrap();
    /// assert_eq!(coord.latitude(), 40.748333);
    /// ```
    #[inline]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Returns the longitude value.
    ///
    /// # Example
    /// ```
    /// use utmcodec::LatLon;
    ///
    /// let coord = LatLon::create(40.748333, -73.985278).unwrap();
    /// assert_eq!(coord.longitude(), -73.985278);
    /// ```
    #[inline]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Returns whether the current point is in the northern hemisphere.
    ///
    /// # Example
    ///
    /// ```
    /// use utmcodec::LatLon;
    ///
    /// let coord = LatLon::create(40.748333, -73.985278).unwrap();
    /// assert!(coord.is_north());
    ///
    /// let coord = LatLon::create(-40.748333, -73.985278).unwrap();
    /// assert!(!coord.is_north());
    /// ```
    pub fn is_north(&self) -> bool {
        self.latitude.is_sign_positive()
    }

    /// Converts from [`UtmCoordinate`] to [`LatLon`]
    ///
    /// # Usage
    ///
    /// ```
    /// use utmcodec::{LatLon, UtmCoordinate};
    ///
    /// let coord = LatLon::create(40.748333, -73.985278).unwrap();
    /// let coord_utm = UtmCoordinate::create(18, 'T', 585664.121, 4511315.422).unwrap();
    ///
    /// let converted = LatLon::from_utm(&coord_utm);
    ///
    /// // Check if the converted coordinate is accurate to 6 decimals (same as reference)
    /// assert!((converted.latitude() - coord.latitude()).abs() < 1e-6);
    /// assert!((converted.longitude() - coord.longitude()).abs() < 1e-6);
    /// ```
    pub fn from_utm(value: &UtmCoordinate) -> LatLon {
        value.to_latlon()
    }

    /// Converts from [`LatLon`] to [`UtmCoordinate`]
    ///
    /// # Usage
    ///
    /// ```
    /// use utmcodec::{LatLon, UtmCoordinate};
    ///
    /// let coord = LatLon::create(40.748333, -73.985278).unwrap();
    /// let coord_utm = UtmCoordinate::create(18, 'T', 585664.121, 4511315.422).unwrap();
    ///
    /// let converted = coord.to_utm();
    ///
    /// assert_eq!(converted.zone(), coord_utm.zone());
    /// assert_eq!(converted.band(), coord_utm.band());
    /// // Check if the converted coordinate is accurate to 3 decimals (same as reference)
    /// assert!((converted.easting() - coord_utm.easting()).abs() < 1e-3);
    /// assert!((converted.northing() - coord_utm.northing()).abs() < 1e-3);
    /// ```
    pub fn to_utm(&self) -> UtmCoordinate {
        UtmCoordinate::from_latlon(self)
    }

    /// Returns the east/north offset in meters from `self` to `other` on the
    /// UTM grid. Northings are measured from the equator so points from both
    /// hemispheres mix cleanly, and when the points fall in different zones
    /// the target easting is shifted by whole zone widths into the zone of
    /// `self`.
    ///
    /// # Usage
    ///
    /// ```
    /// use utmcodec::LatLon;
    ///
    /// let origin = LatLon::create(54.0, 8.0).unwrap();
    /// let target = LatLon::create(54.1, 8.2).unwrap();
    ///
    /// let (east, north) = origin.planar_offset(&target);
    ///
    /// assert!((east - 13235.173).abs() < 1e-2);
    /// assert!((north - 10959.197).abs() < 1e-2);
    /// ```
    pub fn planar_offset(&self, other: &LatLon) -> (f64, f64) {
        let origin = self.to_utm();
        let target = other.to_utm();

        // Northings relative to the equator, not the southern false origin
        let y0 = origin.northing - if origin.is_north() { 0.0 } else { FALSE_NORTHING };
        let y1 = target.northing - if target.is_north() { 0.0 } else { FALSE_NORTHING };

        let east = target.easting + zonal_offset(other, origin.zone) - origin.easting;

        (east, y1 - y0)
    }

    /// Returns the straight-line distance in meters between two points on
    /// the UTM grid.
    ///
    /// # Usage
    ///
    /// ```
    /// use utmcodec::LatLon;
    ///
    /// let origin = LatLon::create(54.0, 8.0).unwrap();
    /// let target = LatLon::create(54.1, 8.2).unwrap();
    ///
    /// assert!((origin.planar_distance(&target) - 17183.533).abs() < 1e-2);
    /// ```
    pub fn planar_distance(&self, other: &LatLon) -> f64 {
        let (east, north) = self.planar_offset(other);
        east.hypot(north)
    }

    /// Returns the compass bearing from `self` to `other` in degrees
    /// `[0, 360)`, measured clockwise from grid north.
    ///
    /// # Usage
    ///
    /// ```
    /// use utmcodec::LatLon;
    ///
    /// let origin = LatLon::create(54.0, 8.0).unwrap();
    /// let target = LatLon::create(54.1, 8.2).unwrap();
    ///
    /// assert!((origin.bearing(&target) - 50.374).abs() < 1e-3);
    /// ```
    pub fn bearing(&self, other: &LatLon) -> f64 {
        let (east, north) = self.planar_offset(other);
        (90.0 - north.atan2(east).to_degrees()).rem_euclid(360.0)
    }

    /// Moves the point east and north by the given offsets in meters and
    /// returns the shifted point.
    ///
    /// # Usage
    ///
    /// ```
    /// use utmcodec::LatLon;
    ///
    /// let origin = LatLon::create(54.0, 8.0).unwrap();
    ///
    /// let moved = origin.translate(1000.0, 1000.0);
    ///
    /// assert!((moved.latitude() - 54.0091125).abs() < 1e-6);
    /// assert!((moved.longitude() - 8.0150412).abs() < 1e-6);
    /// ```
    pub fn translate(&self, east: f64, north: f64) -> LatLon {
        let utm = self.to_utm();

        UtmCoordinate::new(utm.zone, utm.band, utm.easting + east, utm.northing + north)
            .to_latlon()
    }
}

impl Display for LatLon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut buf = ryu::Buffer::new();
        let lat = buf.format(self.latitude);
        let mut buf = ryu::Buffer::new();
        let lon = buf.format(self.longitude);
        write!(
            f,
            "{lat} {lon}",
        )
    }
}
