//! Time values.
//!
//! Zone files and SOA records express time spans either as a plain number
//! of seconds or in BIND’s unit notation such as `1h` or `2d`.

use core::fmt;
use core::str::FromStr;
use core::time::Duration;

const SECS_PER_MINUTE: u32 = 60;
const SECS_PER_HOUR: u32 = 3600;
const SECS_PER_DAY: u32 = 86400;
const SECS_PER_WEEK: u32 = 604800;

//------------ TimeUnit ------------------------------------------------------

/// The unit a time value is written in.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TimeUnit {
    Seconds,
    Minutes,
    Hours,
    Days,
    Weeks,
}

impl TimeUnit {
    /// Returns the number of seconds in one unit.
    pub const fn secs(self) -> u32 {
        match self {
            TimeUnit::Seconds => 1,
            TimeUnit::Minutes => SECS_PER_MINUTE,
            TimeUnit::Hours => SECS_PER_HOUR,
            TimeUnit::Days => SECS_PER_DAY,
            TimeUnit::Weeks => SECS_PER_WEEK,
        }
    }

    /// Returns the suffix used in BIND notation.
    pub const fn suffix(self) -> &'static str {
        match self {
            TimeUnit::Seconds => "s",
            TimeUnit::Minutes => "m",
            TimeUnit::Hours => "h",
            TimeUnit::Days => "d",
            TimeUnit::Weeks => "w",
        }
    }

    fn from_suffix(ch: char) -> Option<Self> {
        match ch.to_ascii_lowercase() {
            's' => Some(TimeUnit::Seconds),
            'm' => Some(TimeUnit::Minutes),
            'h' => Some(TimeUnit::Hours),
            'd' => Some(TimeUnit::Days),
            'w' => Some(TimeUnit::Weeks),
            _ => None,
        }
    }
}

//------------ TimeValue -----------------------------------------------------

/// A span of time as used for TTLs and SOA timers.
///
/// A time value is a number of seconds with a unit it should be written
/// in. Values created from plain integers are written as a plain number of
/// seconds; values created through the unit constructors keep their unit:
///
/// ```
/// use bindconf::zonefile::TimeValue;
///
/// assert_eq!(TimeValue::from(600).to_string(), "600");
/// assert_eq!(TimeValue::hours(3).to_string(), "3h");
/// assert_eq!(TimeValue::hours(3).as_secs(), 10800);
/// ```
///
/// Values can also be parsed from BIND notation. A single number with a
/// unit keeps that unit, compound values such as `1h30m` are normalized
/// into seconds.
///
/// With the `serde` feature, values are serialized in BIND notation and
/// deserialized through the same parser. Plain integers are accepted as
/// seconds.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct TimeValue {
    secs: u32,
    unit: TimeUnit,
}

impl TimeValue {
    /// Creates a new value from the specified number of seconds.
    #[must_use]
    pub const fn seconds(secs: u32) -> Self {
        TimeValue {
            secs,
            unit: TimeUnit::Seconds,
        }
    }

    /// Creates a new value from the specified number of minutes.
    ///
    /// # Panics
    ///
    /// This method panics if the value does not fit into 32 bits worth of
    /// seconds.
    #[must_use]
    pub const fn minutes(minutes: u32) -> Self {
        Self::with_unit(minutes, TimeUnit::Minutes)
    }

    /// Creates a new value from the specified number of hours.
    ///
    /// # Panics
    ///
    /// This method panics if the value does not fit into 32 bits worth of
    /// seconds.
    #[must_use]
    pub const fn hours(hours: u32) -> Self {
        Self::with_unit(hours, TimeUnit::Hours)
    }

    /// Creates a new value from the specified number of days.
    ///
    /// # Panics
    ///
    /// This method panics if the value does not fit into 32 bits worth of
    /// seconds.
    #[must_use]
    pub const fn days(days: u32) -> Self {
        Self::with_unit(days, TimeUnit::Days)
    }

    /// Creates a new value from the specified number of weeks.
    ///
    /// # Panics
    ///
    /// This method panics if the value does not fit into 32 bits worth of
    /// seconds.
    #[must_use]
    pub const fn weeks(weeks: u32) -> Self {
        Self::with_unit(weeks, TimeUnit::Weeks)
    }

    const fn with_unit(count: u32, unit: TimeUnit) -> Self {
        assert!(count <= u32::MAX / unit.secs());
        TimeValue {
            secs: count * unit.secs(),
            unit,
        }
    }

    /// Returns the total time span in seconds.
    #[must_use]
    pub const fn as_secs(&self) -> u32 {
        self.secs
    }

    /// Returns the unit the value is written in.
    #[must_use]
    pub const fn unit(&self) -> TimeUnit {
        self.unit
    }

    /// Converts the value into a [`Duration`].
    #[must_use]
    pub const fn into_duration(&self) -> Duration {
        Duration::from_secs(self.secs as u64)
    }
}

//--- From and FromStr

impl From<u32> for TimeValue {
    fn from(secs: u32) -> Self {
        TimeValue::seconds(secs)
    }
}

impl FromStr for TimeValue {
    type Err = TimeValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(TimeValueError::Empty);
        }
        if s.bytes().all(|ch| ch.is_ascii_digit()) {
            return s
                .parse()
                .map(TimeValue::seconds)
                .map_err(|_| TimeValueError::Overflow);
        }

        let mut secs = 0u32;
        let mut count = None::<u32>;
        let mut units = Vec::new();
        for ch in s.chars() {
            if let Some(digit) = ch.to_digit(10) {
                count = Some(
                    count
                        .unwrap_or(0)
                        .checked_mul(10)
                        .and_then(|count| count.checked_add(digit))
                        .ok_or(TimeValueError::Overflow)?,
                );
            } else {
                let unit = TimeUnit::from_suffix(ch)
                    .ok_or(TimeValueError::BadSyntax)?;
                let count = count.take().ok_or(TimeValueError::BadSyntax)?;
                secs = count
                    .checked_mul(unit.secs())
                    .and_then(|value| secs.checked_add(value))
                    .ok_or(TimeValueError::Overflow)?;
                units.push(unit);
            }
        }
        if count.is_some() {
            // A trailing number without a unit.
            return Err(TimeValueError::BadSyntax);
        }
        match units.as_slice() {
            [unit] => Ok(TimeValue { secs, unit: *unit }),
            _ => Ok(TimeValue::seconds(secs)),
        }
    }
}

//--- Display

impl fmt::Display for TimeValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.unit {
            TimeUnit::Seconds => write!(f, "{}", self.secs),
            unit => write!(f, "{}{}", self.secs / unit.secs(), unit.suffix()),
        }
    }
}

//--- Serialize and Deserialize

#[cfg(feature = "serde")]
impl serde::Serialize for TimeValue {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for TimeValue {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Self, D::Error> {
        use serde::de::Error;

        struct InnerVisitor;

        impl<'de> serde::de::Visitor<'de> for InnerVisitor {
            type Value = TimeValue;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a time value")
            }

            fn visit_str<E: Error>(self, v: &str) -> Result<Self::Value, E> {
                TimeValue::from_str(v).map_err(E::custom)
            }

            fn visit_u64<E: Error>(self, v: u64) -> Result<Self::Value, E> {
                u32::try_from(v)
                    .map(TimeValue::seconds)
                    .map_err(|_| E::custom(TimeValueError::Overflow))
            }
        }

        deserializer.deserialize_any(InnerVisitor)
    }
}

//============ Error Types ===================================================

//------------ TimeValueError ------------------------------------------------

/// A time value could not be parsed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TimeValueError {
    /// The string was empty.
    Empty,

    /// The string is not in BIND time notation.
    BadSyntax,

    /// The value does not fit into 32 bits worth of seconds.
    Overflow,
}

impl fmt::Display for TimeValueError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            TimeValueError::Empty => "empty time value",
            TimeValueError::BadSyntax => "invalid time value",
            TimeValueError::Overflow => "time value too large",
        })
    }
}

impl std::error::Error for TimeValueError {}

//============ Tests =========================================================

#[cfg(test)]
mod test {
    use super::*;
    use rstest::rstest;

    #[test]
    fn constructors() {
        assert_eq!(TimeValue::seconds(30).to_string(), "30");
        assert_eq!(TimeValue::minutes(30).to_string(), "30m");
        assert_eq!(TimeValue::minutes(30).as_secs(), 1800);
        assert_eq!(TimeValue::days(2).to_string(), "2d");
        assert_eq!(TimeValue::weeks(1).as_secs(), 604800);
        assert_eq!(TimeValue::weeks(1).unit(), TimeUnit::Weeks);
        assert_eq!(
            TimeValue::hours(2).into_duration(),
            Duration::from_secs(7200)
        );
    }

    #[test]
    #[should_panic]
    fn constructor_overflow() {
        let _ = TimeValue::weeks(u32::MAX);
    }

    #[rstest]
    #[case("3600", 3600, "3600")]
    #[case("1h", 3600, "1h")]
    #[case("1H", 3600, "1h")]
    #[case("30m", 1800, "30m")]
    #[case("2d", 172800, "2d")]
    #[case("1w", 604800, "1w")]
    #[case("10s", 10, "10")]
    #[case("1h30m", 5400, "5400")]
    #[case("1W2D3H4M5S", 788645, "788645")]
    fn parse(
        #[case] input: &str,
        #[case] secs: u32,
        #[case] display: &str,
    ) {
        let value = TimeValue::from_str(input).unwrap();
        assert_eq!(value.as_secs(), secs);
        assert_eq!(value.to_string(), display);
    }

    #[rstest]
    #[case("", TimeValueError::Empty)]
    #[case("h", TimeValueError::BadSyntax)]
    #[case("1x", TimeValueError::BadSyntax)]
    #[case("1h30", TimeValueError::BadSyntax)]
    #[case("-1", TimeValueError::BadSyntax)]
    #[case("4294967296", TimeValueError::Overflow)]
    #[case("7102w", TimeValueError::Overflow)]
    fn parse_errors(#[case] input: &str, #[case] err: TimeValueError) {
        assert_eq!(TimeValue::from_str(input), Err(err));
    }

    #[cfg(feature = "serde")]
    #[rstest]
    #[case(TimeValue::hours(3), "\"3h\"")]
    #[case(TimeValue::seconds(5400), "\"5400\"")]
    #[case(TimeValue::from_str("1h30m").unwrap(), "\"5400\"")]
    fn serialize(#[case] value: TimeValue, #[case] json: &str) {
        assert_eq!(serde_json::to_string(&value).unwrap(), json);
        assert_eq!(serde_json::from_str::<TimeValue>(json).unwrap(), value);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialize_checks_text() {
        let value: TimeValue = serde_json::from_str("\"90m\"").unwrap();
        assert_eq!(value.as_secs(), 5400);
        assert_eq!(value.to_string(), "90m");
        assert_eq!(
            serde_json::from_str::<TimeValue>("600").unwrap(),
            TimeValue::seconds(600)
        );

        // Seconds and unit can't be given separately.
        assert!(serde_json::from_str::<TimeValue>(
            r#"{"secs":5400,"unit":"Hours"}"#
        )
        .is_err());
        assert!(serde_json::from_str::<TimeValue>("\"1h30\"").is_err());
        assert!(serde_json::from_str::<TimeValue>("4294967296").is_err());
    }
}
