// UTM central scale factor
pub(crate) const UTM_K0: f64 = 9996.0 / 10_000.;

// Planar offsets that keep UTM coordinates positive
pub(crate) const FALSE_EASTING: f64 = 500_000.;
pub(crate) const FALSE_NORTHING: f64 = 10_000_000.;

// Latitude band letters, 8 degrees each starting at 80S. I and O are
// never assigned. X is stretched northward to cover [72, 84].
pub(crate) const LATITUDE_BANDS: &str = "CDEFGHJKLMNPQRSTUVWX";

// Letter emitted for latitudes the band table does not cover. It sits
// outside the valid band range, so designator validation rejects it.
pub(crate) const BAND_OUT_OF_RANGE: char = 'Z';

// Longest well-formed designator string: two zone digits plus the band letter
pub(crate) const DESIGNATOR_LEN: usize = 3;
