//! Serial numbers.
//!
//! The serial of a zone’s SOA record tells secondaries whether the zone
//! has changed. This module provides the type [`Serial`] as well as the
//! [`SerialPolicy`] deciding which serial a new SOA record starts with.

use core::fmt;
use std::time::{SystemTime, UNIX_EPOCH};
use time::{Date, OffsetDateTime};

//------------ Serial --------------------------------------------------------

/// A serial number.
///
/// Serial numbers are used in DNS to track changes to resources. The
/// [`Soa`][super::Soa] record provides a serial number that expresses the
/// version of the zone. The value is written into the zone file as a
/// plain decimal number.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Serial(pub u32);

impl Serial {
    /// Returns a serial number for the current Unix time.
    pub fn now() -> Self {
        let now = SystemTime::now();
        let value = match now.duration_since(UNIX_EPOCH) {
            Ok(value) => value.as_secs(),
            Err(_) => 0,
        };
        Self(value as u32)
    }

    /// Returns a serial number in the conventional date format.
    ///
    /// The serial will be the decimal number `YYYYMMDDnn` where `nn` is
    /// the given version of the zone on that date.
    ///
    /// # Panics
    ///
    /// The method panics if `version` is larger than 99 or the year is
    /// before year 0 or after year 4294.
    pub fn from_date(date: Date, version: u8) -> Self {
        assert!(version <= 99);
        assert!((0..=4294).contains(&date.year()));
        Serial(
            date.year() as u32 * 1_000_000
                + u32::from(u8::from(date.month())) * 10_000
                + u32::from(date.day()) * 100
                + u32::from(version),
        )
    }

    /// Returns the first date format serial number of today.
    ///
    /// Today is determined in UTC.
    pub fn today() -> Self {
        Self::from_date(OffsetDateTime::now_utc().date(), 0)
    }

    /// Returns the serial number as a raw integer.
    pub fn into_int(self) -> u32 {
        self.0
    }
}

//--- From

impl From<u32> for Serial {
    fn from(value: u32) -> Serial {
        Serial(value)
    }
}

impl From<Serial> for u32 {
    fn from(serial: Serial) -> u32 {
        serial.0
    }
}

//--- Display

impl fmt::Display for Serial {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

//------------ SerialPolicy --------------------------------------------------

/// How the default serial number of a new SOA record is chosen.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SerialPolicy {
    /// Today’s date as `YYYYMMDD00`.
    #[default]
    Date,

    /// The number of seconds since the Unix epoch.
    Epoch,
}

impl SerialPolicy {
    /// Returns the serial number for right now.
    pub fn serial(self) -> Serial {
        match self {
            SerialPolicy::Date => Serial::today(),
            SerialPolicy::Epoch => Serial::now(),
        }
    }
}

//============ Testing =======================================================
