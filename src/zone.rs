use std::fmt::Display;

use crate::{constants::DESIGNATOR_LEN, Error, ParseCoord};

pub(crate) mod zonespec {
    pub(crate) const MINZONE: i32 = 0;
    pub(crate) const MAXZONE: i32 = 60;
    pub(crate) const MINBAND: char = 'C';
    pub(crate) const MAXBAND: char = 'X';
}

const DIGITS: &str = "0123456789";

/// A UTM zone designator: a zone number in `[0, 60]` paired with a latitude
/// band letter in `['C', 'X']`. The band letter, not the planar coordinates,
/// decides the hemisphere of a UTM point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ZoneDesignator {
    pub(crate) zone: i32,
    pub(crate) band: char,
}

impl ZoneDesignator {
    /// Internal-only constructor that doesn't check the ranges
    pub(crate) fn new(zone: i32, band: char) -> ZoneDesignator {
        Self { zone, band }
    }

    /// Tries to create a designator from a zone number and band letter.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidZoneDesignator`] if the zone is outside the
    /// range `[0, 60]` or the band letter is outside the range `['C', 'X']`.
    ///
    /// # Usage
    ///
    /// ```
    /// use utmcodec::ZoneDesignator;
    ///
    /// let designator = ZoneDesignator::create(19, 'C');
    ///
    /// assert!(designator.is_ok());
    ///
    /// let designator = designator.unwrap();
    ///
    /// assert_eq!(designator.zone(), 19);
    /// assert_eq!(designator.band(), 'C');
    ///
    /// let invalid_zone = ZoneDesignator::create(61, 'C');
    /// assert!(invalid_zone.is_err());
    ///
    /// let invalid_band = ZoneDesignator::create(19, 'B');
    /// assert!(invalid_band.is_err());
    /// ```
    pub fn create(zone: i32, band: char) -> Result<ZoneDesignator, Error> {
        let designator = ZoneDesignator::new(zone, band);

        if designator.is_valid() {
            Ok(designator)
        } else {
            Err(Error::InvalidZoneDesignator(format!(
                "Designator {zone}{band} not within zones [0, 60] and bands [C, X]"
            )))
        }
    }

    /// Parses a designator string such as `19C` or `08X`: one or two zone
    /// digits followed by a single band letter. Lowercase letters and
    /// surrounding whitespace are accepted.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedZoneString`] if the string doesn't have the
    /// digits-then-letter shape, and [`Error::InvalidZoneDesignator`] if it
    /// does but the values are out of range.
    ///
    /// # Usage
    ///
    /// ```
    /// use utmcodec::ZoneDesignator;
    ///
    /// let designator = ZoneDesignator::parse_str("19C").unwrap();
    ///
    /// assert_eq!(designator.zone(), 19);
    /// assert_eq!(designator.band(), 'C');
    ///
    /// // No digits at the front
    /// assert!(ZoneDesignator::parse_str("AB").is_err());
    /// // Well-formed but out of range
    /// assert!(ZoneDesignator::parse_str("99X").is_err());
    /// ```
    pub fn parse_str(value: &str) -> Result<ZoneDesignator, Error> {
        Self::parse_coord(value)
    }

    /// Returns the zone number.
    ///
    /// # Example
    /// ```
    /// use utmcodec::ZoneDesignator;
    ///
    /// let designator = ZoneDesignator::create(19, 'C').unwrap();
    /// assert_eq!(designator.zone(), 19);
    /// ```
    #[inline]
    pub fn zone(&self) -> i32 {
        self.zone
    }

    /// Returns the band letter.
    ///
    /// # Example
    /// ```
    /// use utmcodec::ZoneDesignator;
    ///
    /// let designator = ZoneDesignator::create(19, 'C').unwrap();
    /// assert_eq!(designator.band(), 'C');
    /// ```
    #[inline]
    pub fn band(&self) -> char {
        self.band
    }

    /// Returns whether the zone and band are inside the valid designator
    /// ranges. Every encode and decode path funnels through this check.
    pub fn is_valid(&self) -> bool {
        (zonespec::MINZONE..=zonespec::MAXZONE).contains(&self.zone)
            && (zonespec::MINBAND..=zonespec::MAXBAND).contains(&self.band)
    }

    /// Returns whether the designator lies in the northern hemisphere. Band
    /// letters `N` and above are northern.
    ///
    /// # Example
    ///
    /// ```
    /// use utmcodec::ZoneDesignator;
    ///
    /// let designator = ZoneDesignator::create(18, 'T').unwrap();
    /// assert!(designator.is_north());
    ///
    /// let designator = ZoneDesignator::create(34, 'H').unwrap();
    /// assert!(!designator.is_north());
    /// ```
    pub fn is_north(&self) -> bool {
        self.band >= 'N'
    }

    /// Encodes the designator as the numeric pair used on doubles-only
    /// channels.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidZoneDesignator`] if the designator fails
    /// validation.
    pub fn encode(&self) -> Result<EncodedZone, Error> {
        EncodedZone::encode(self.zone, self.band)
    }
}

impl ParseCoord for ZoneDesignator {
    fn parse_coord(value: &str) -> Result<Self, Error> {
        let value = value.trim().to_ascii_uppercase();
        let len = value.len();
        let chars = value.as_bytes();

        if len == 0 || len > DESIGNATOR_LEN {
            return Err(Error::MalformedZoneString(format!(
                "Expected 1 or 2 zone digits and a band letter, got \"{value}\""
            )));
        }

        let mut p = 0;
        let mut zone = 0i32;
        while p < len {
            if let Some(i) = DIGITS.find(chars[p] as char) {
                zone = 10 * zone + i as i32;
                p += 1;
            }
            else {
                break;
            }
        }

        if p == 0 {
            return Err(Error::MalformedZoneString(format!("No zone digits at start of {value}")));
        }

        if p + 1 != len {
            return Err(Error::MalformedZoneString(format!(
                "Expected a single band letter after the zone digits in {value}"
            )));
        }

        let band = chars[p] as char;
        if !band.is_ascii_uppercase() {
            return Err(Error::MalformedZoneString(format!("Band {band} is not a letter")));
        }

        ZoneDesignator::create(zone, band)
    }
}

impl Display for ZoneDesignator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}{}", self.zone, self.band)
    }
}

/// Numeric image of a [`ZoneDesignator`] for channels that can only carry
/// double-precision values: the zone number as a double and the band letter
/// as its alphabet index, so `19C` travels as `(19.0, 2.0)`. The fields hold
/// whatever arrived on the wire; [`EncodedZone::decode`] validates.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EncodedZone {
    pub(crate) zone: f64,
    pub(crate) band_index: f64,
}

impl EncodedZone {
    /// Advisory in-band sentinel some producers write after a failed
    /// conversion. The `Result` of the producing call is authoritative; the
    /// sentinel only serves consumers that see nothing but the two doubles.
    pub const INVALID: EncodedZone = EncodedZone {
        zone: -1.0,
        band_index: -1.0,
    };

    /// Wraps a pair of raw channel values without validating them.
    pub fn new(zone: f64, band_index: f64) -> EncodedZone {
        Self { zone, band_index }
    }

    /// Validates a zone/band pair and encodes it for the wire.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidZoneDesignator`] if the pair fails designator
    /// validation.
    ///
    /// # Usage
    ///
    /// ```
    /// use utmcodec::EncodedZone;
    ///
    /// let encoded = EncodedZone::encode(19, 'C').unwrap();
    ///
    /// assert_eq!(encoded.zone(), 19.0);
    /// assert_eq!(encoded.band_index(), 2.0);
    ///
    /// assert!(EncodedZone::encode(19, 'Z').is_err());
    /// ```
    pub fn encode(zone: i32, band: char) -> Result<EncodedZone, Error> {
        let designator = ZoneDesignator::create(zone, band)?;

        Ok(EncodedZone {
            zone: f64::from(designator.zone),
            band_index: f64::from(designator.band as u8 - b'A'),
        })
    }

    /// Decodes the pair back into a designator. Both doubles are truncated
    /// toward zero the way a C integer cast would, so senders are expected
    /// to put whole numbers on the wire.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidZoneDesignator`] if either value is not
    /// finite or the truncated pair fails designator validation.
    ///
    /// # Usage
    ///
    /// ```
    /// use utmcodec::EncodedZone;
    ///
    /// let designator = EncodedZone::new(19.0, 2.0).decode().unwrap();
    ///
    /// assert_eq!(designator.zone(), 19);
    /// assert_eq!(designator.band(), 'C');
    ///
    /// assert!(EncodedZone::INVALID.decode().is_err());
    /// ```
    #[allow(clippy::cast_possible_truncation)]
    pub fn decode(&self) -> Result<ZoneDesignator, Error> {
        // A saturating cast would turn a NaN zone into valid zone 0
        if !self.zone.is_finite() || !self.band_index.is_finite() {
            return Err(Error::InvalidZoneDesignator(format!(
                "Encoded pair ({}, {}) is not finite",
                self.zone, self.band_index
            )));
        }

        let zone = self.zone as i32;
        let index = self.band_index as i32;

        // Only indexes naming an uppercase letter can become a band char;
        // anything else would fail the designator check regardless.
        if !(0..26).contains(&index) {
            return Err(Error::InvalidZoneDesignator(format!(
                "Band index {} does not name a letter",
                self.band_index
            )));
        }

        #[allow(clippy::cast_sign_loss)]
        let band = char::from(b'A' + index as u8);

        ZoneDesignator::create(zone, band)
    }

    /// Returns whether the pair is exactly the advisory failure sentinel.
    pub fn is_invalid(&self) -> bool {
        *self == Self::INVALID
    }

    /// Returns the zone number as carried on the wire.
    #[inline]
    pub fn zone(&self) -> f64 {
        self.zone
    }

    /// Returns the band letter index as carried on the wire.
    #[inline]
    pub fn band_index(&self) -> f64 {
        self.band_index
    }
}

#[cfg(test)]
mod tests {
    use crate::Error;

    use super::{EncodedZone, ZoneDesignator};

    #[test]
    fn parse_accepts_both_digit_counts() {
        assert_eq!(ZoneDesignator::parse_str("19C").unwrap(), ZoneDesignator::new(19, 'C'));
        assert_eq!(ZoneDesignator::parse_str("9S").unwrap(), ZoneDesignator::new(9, 'S'));
        assert_eq!(ZoneDesignator::parse_str("09S").unwrap(), ZoneDesignator::new(9, 'S'));
        assert_eq!(ZoneDesignator::parse_str(" 60x ").unwrap(), ZoneDesignator::new(60, 'X'));
    }

    #[test]
    fn parse_rejects_malformed_strings() {
        for value in ["", "AB", "19", "100C", "1C9", "19CC", "19!"] {
            let result = ZoneDesignator::parse_str(value);
            assert!(
                matches!(result, Err(Error::MalformedZoneString(_))),
                "{value:?} should be malformed, got {result:?}"
            );
        }
    }

    #[test]
    fn parse_rejects_out_of_range_values() {
        for value in ["99X", "19B", "19Y", "61C"] {
            let result = ZoneDesignator::parse_str(value);
            assert!(
                matches!(result, Err(Error::InvalidZoneDesignator(_))),
                "{value:?} should be out of range, got {result:?}"
            );
        }
    }

    #[test]
    fn display_zero_pads_the_zone() {
        assert_eq!(ZoneDesignator::new(9, 'S').to_string(), "09S");
        assert_eq!(ZoneDesignator::new(19, 'C').to_string(), "19C");
    }

    #[test]
    fn decode_truncates_toward_zero() {
        assert_eq!(
            EncodedZone::new(19.7, 2.9).decode().unwrap(),
            ZoneDesignator::new(19, 'C')
        );
        assert_eq!(
            EncodedZone::new(60.99, 23.99).decode().unwrap(),
            ZoneDesignator::new(60, 'X')
        );
    }

    #[test]
    fn decode_rejects_stray_indexes() {
        assert!(EncodedZone::new(19.0, -1.0).decode().is_err());
        assert!(EncodedZone::new(19.0, 26.0).decode().is_err());
        assert!(EncodedZone::new(-1.0, 2.0).decode().is_err());
    }

    #[test]
    fn decode_rejects_non_finite_values() {
        // A NaN zone must not saturate into zone 0
        assert!(EncodedZone::new(f64::NAN, 2.0).decode().is_err());
        assert!(EncodedZone::new(19.0, f64::NAN).decode().is_err());
        assert!(EncodedZone::new(f64::INFINITY, 2.0).decode().is_err());
        assert!(EncodedZone::new(19.0, f64::NEG_INFINITY).decode().is_err());
    }

    #[test]
    fn sentinel_is_the_minus_one_pair() {
        assert_eq!(EncodedZone::INVALID.zone(), -1.0);
        assert_eq!(EncodedZone::INVALID.band_index(), -1.0);
        assert!(EncodedZone::INVALID.is_invalid());
        assert!(!EncodedZone::new(19.0, 2.0).is_invalid());
        assert!(EncodedZone::INVALID.decode().is_err());
    }
}
