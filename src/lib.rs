#![warn(clippy::pedantic)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use
)]

use thiserror::Error;

pub mod ellipsoid;
pub mod latlon;
pub mod telemetry;
pub mod utm;
pub mod zone;

pub use ellipsoid::ReferenceEllipsoid;
pub use latlon::LatLon;
pub use telemetry::UtmConversion;
pub use utm::UtmCoordinate;
pub use zone::{EncodedZone, ZoneDesignator};

pub(crate) mod projections {
    pub mod transverse_mercator;
}

pub(crate) mod constants;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Coordinate parameters are not valid: {0}")]
    InvalidCoord(String),
    #[error("Zone designator is not valid: {0}")]
    InvalidZoneDesignator(String),
    #[error("Zone designator string is malformed: {0}")]
    MalformedZoneString(String),
}

pub trait ParseCoord {
    fn parse_coord(value: &str) -> Result<Self, Error>
    where Self: Sized;
}

pub fn from_str<S, T>(value: S) -> Result<T, Error>
where 
    S: AsRef<str>,
    T: ParseCoord
{
    T::parse_coord(value.as_ref())
}
