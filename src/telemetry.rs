use log::{trace, warn};

use crate::{
    latlon::LatLon,
    utm::UtmCoordinate,
    zone::{EncodedZone, ZoneDesignator},
    Error,
};

/// Forward conversion result shaped for a doubles-only channel: the planar
/// coordinates next to the zone designator already encoded as two doubles.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UtmConversion {
    easting: f64,
    northing: f64,
    zone: EncodedZone,
}

impl UtmConversion {
    /// Returns the UTM easting in meters.
    #[inline]
    pub fn easting(&self) -> f64 {
        self.easting
    }

    /// Returns the UTM northing in meters.
    #[inline]
    pub fn northing(&self) -> f64 {
        self.northing
    }

    /// Returns the encoded zone designator pair.
    #[inline]
    pub fn zone(&self) -> EncodedZone {
        self.zone
    }
}

/// Converts a lat/lon pair to UTM on the WGS 84 ellipsoid for a doubles-only
/// channel. Any longitude is accepted and wrapped into `[-180, 180)`;
/// latitudes outside `[-80, 84]` have no band letter and fail.
///
/// # Errors
///
/// Returns [`Error::InvalidZoneDesignator`] if the latitude falls outside
/// the band table.
///
/// # Usage
///
/// ```
/// use utmcodec::telemetry;
///
/// let conversion = telemetry::latlon_to_utm(50.0, 1.0).unwrap();
///
/// assert_eq!(conversion.zone().zone(), 31.0);
/// assert_eq!(conversion.zone().band_index(), 20.0);
/// assert!((conversion.easting() - 356670.876).abs() < 1e-3);
/// assert!((conversion.northing() - 5540547.370).abs() < 1e-3);
///
/// // No band letter covers 89N
/// assert!(telemetry::latlon_to_utm(89.0, 1.0).is_err());
/// ```
pub fn latlon_to_utm(lat: f64, lon: f64) -> Result<UtmConversion, Error> {
    let coord = UtmCoordinate::from_latlon(&LatLon::new(lat, lon));

    let zone = coord.designator().encode().map_err(|err| {
        warn!("Conversion of ({lat}, {lon}) has no valid designator: {err}");
        err
    })?;

    trace!("({lat}, {lon}) -> {coord}");

    Ok(UtmConversion {
        easting: coord.easting(),
        northing: coord.northing(),
        zone,
    })
}

/// Converts a UTM position back to lat/lon on the WGS 84 ellipsoid. The
/// designator is validated before the projection runs; easting and northing
/// are taken as given.
///
/// # Errors
///
/// Returns [`Error::InvalidZoneDesignator`] if the zone or band is out of
/// range.
///
/// # Usage
///
/// ```
/// use utmcodec::telemetry;
///
/// let coord = telemetry::utm_to_latlon(31, 'U', 356670.876, 5540547.370).unwrap();
///
/// assert!((coord.latitude() - 50.0).abs() < 1e-6);
/// assert!((coord.longitude() - 1.0).abs() < 1e-6);
///
/// assert!(telemetry::utm_to_latlon(31, 'Z', 356670.876, 5540547.370).is_err());
/// ```
pub fn utm_to_latlon(zone: i32, band: char, easting: f64, northing: f64) -> Result<LatLon, Error> {
    let designator = ZoneDesignator::create(zone, band).map_err(|err| {
        warn!("Rejected designator {zone}{band}: {err}");
        err
    })?;

    Ok(inverse(designator, easting, northing))
}

/// Converts a UTM position back to lat/lon, taking the zone designator as
/// the two raw doubles read off the channel. The pair is decoded with
/// C-style truncation and validated before the projection runs.
///
/// # Errors
///
/// Returns [`Error::InvalidZoneDesignator`] if the decoded pair is out of
/// range.
///
/// # Usage
///
/// ```
/// use utmcodec::telemetry;
///
/// let coord = telemetry::encoded_utm_to_latlon(31.0, 20.0, 356670.876, 5540547.370).unwrap();
///
/// assert!((coord.latitude() - 50.0).abs() < 1e-6);
/// assert!((coord.longitude() - 1.0).abs() < 1e-6);
///
/// // The advisory failure sentinel never decodes
/// assert!(telemetry::encoded_utm_to_latlon(-1.0, -1.0, 0.0, 0.0).is_err());
/// ```
pub fn encoded_utm_to_latlon(
    zone: f64,
    band_index: f64,
    easting: f64,
    northing: f64,
) -> Result<LatLon, Error> {
    let designator = EncodedZone::new(zone, band_index).decode().map_err(|err| {
        warn!("Rejected encoded zone pair ({zone}, {band_index}): {err}");
        err
    })?;

    Ok(inverse(designator, easting, northing))
}

/// Converts a UTM position back to lat/lon, taking the zone designator as a
/// string such as `19C`.
///
/// # Errors
///
/// Returns [`Error::MalformedZoneString`] if the string doesn't parse and
/// [`Error::InvalidZoneDesignator`] if its values are out of range.
///
/// # Usage
///
/// ```
/// use utmcodec::telemetry;
///
/// let coord = telemetry::utm_str_to_latlon("31U", 356670.876, 5540547.370).unwrap();
///
/// assert!((coord.latitude() - 50.0).abs() < 1e-6);
/// assert!((coord.longitude() - 1.0).abs() < 1e-6);
///
/// assert!(telemetry::utm_str_to_latlon("AB", 356670.876, 5540547.370).is_err());
/// ```
pub fn utm_str_to_latlon(designator: &str, easting: f64, northing: f64) -> Result<LatLon, Error> {
    let designator = ZoneDesignator::parse_str(designator).map_err(|err| {
        warn!("Rejected designator string \"{designator}\": {err}");
        err
    })?;

    Ok(inverse(designator, easting, northing))
}

fn inverse(designator: ZoneDesignator, easting: f64, northing: f64) -> LatLon {
    let coord = UtmCoordinate::new(designator.zone(), designator.band(), easting, northing);
    let result = coord.to_latlon();

    trace!("{coord} -> {result}");

    result
}
