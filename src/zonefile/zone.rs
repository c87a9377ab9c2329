//! Zones.

use super::rdata::{Aaaa, Cname, Mx, Ns, Soa, Txt, A};
use super::record::Record;
use super::serial::{Serial, SerialPolicy};
use super::time::TimeValue;
use crate::net::{parse_addr, AddrError};
use core::fmt;
use core::marker::PhantomData;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tracing::debug;

//------------ Forward and Reverse -------------------------------------------

/// Marker for a forward zone mapping names to data.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Forward {}

/// Marker for a reverse zone mapping addresses to names.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Reverse {}

/// A zone holding forward records.
pub type ForwardZone = Zone<Forward>;

/// A zone holding reverse records.
pub type ReverseZone = Zone<Reverse>;

//------------ Zone ----------------------------------------------------------

/// The content of a zone file.
///
/// A zone consists of its origin, the default TTL for records without an
/// explicit TTL, and an ordered list of records. The type parameter
/// determines which kind of records can be added besides the SOA and NS
/// records every zone can have: a [`ForwardZone`] takes address and name
/// records, a [`ReverseZone`] takes PTR records.
///
/// Nothing is validated. In particular, a zone doesn’t need to have an SOA
/// record, so it can be used to create fragments for an `$INCLUDE`
/// directive.
///
/// Every `add_*` method returns the new record so that the owner, TTL, and
/// comment can be changed:
///
/// ```
/// use bindconf::zonefile::{ForwardZone, TimeValue};
///
/// let mut zone = ForwardZone::new("example.com");
/// zone.add_a("192.0.2.1")?.set_owner("www").set_ttl(TimeValue::minutes(5));
/// assert_eq!(
///     zone.to_string(),
///     "$ORIGIN example.com.\n$TTL 1h\nwww 5m IN A 192.0.2.1\n"
/// );
/// # Ok::<(), bindconf::net::AddrError>(())
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Zone<K> {
    origin: String,
    ttl: TimeValue,
    serial_policy: SerialPolicy,
    records: Vec<Record>,
    marker: PhantomData<K>,
}

/// # Creation
///
impl<K> Zone<K> {
    /// The default TTL of records.
    pub const DEFAULT_TTL: TimeValue = TimeValue::hours(1);

    /// Creates a new, empty zone.
    ///
    /// If `origin` doesn’t end in a dot, one is appended.
    pub fn new(origin: impl Into<String>) -> Self {
        let mut origin = origin.into();
        if !origin.ends_with('.') {
            origin.push('.');
        }
        Zone {
            origin,
            ttl: Self::DEFAULT_TTL,
            serial_policy: SerialPolicy::default(),
            records: Vec::new(),
            marker: PhantomData,
        }
    }

    /// Sets the default TTL of the zone.
    #[must_use]
    pub fn with_ttl(mut self, ttl: impl Into<TimeValue>) -> Self {
        self.ttl = ttl.into();
        self
    }

    /// Sets how the default serial of an SOA record is chosen.
    #[must_use]
    pub fn with_serial_policy(mut self, policy: SerialPolicy) -> Self {
        self.serial_policy = policy;
        self
    }
}

/// # Access
///
impl<K> Zone<K> {
    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn ttl(&self) -> TimeValue {
        self.ttl
    }

    pub fn serial_policy(&self) -> SerialPolicy {
        self.serial_policy
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Returns the serial an SOA record would get right now.
    pub fn default_serial(&self) -> Serial {
        self.serial_policy.serial()
    }
}

/// # Adding Records
///
impl<K> Zone<K> {
    /// Appends a record to the zone.
    pub fn add_record(&mut self, record: impl Into<Record>) -> &mut Record {
        self.records.push(record.into());
        let last = self.records.len() - 1;
        &mut self.records[last]
    }

    /// Appends an SOA record with default timers and serial.
    ///
    /// The `rname` can be given as an e-mail address. Use
    /// [`add_record`][Self::add_record] with a [`Soa`] for other timers.
    pub fn add_soa(
        &mut self,
        mname: impl Into<String>,
        rname: impl AsRef<str>,
    ) -> &mut Record {
        let serial = self.default_serial();
        self.add_record(Soa::new(mname, rname, serial))
    }

    /// Appends an NS record.
    pub fn add_ns(&mut self, nsdname: impl Into<String>) -> &mut Record {
        self.add_record(Ns::new(nsdname))
    }
}

/// # Output
///
impl<K> Zone<K> {
    /// Writes the zone file to `path`.
    ///
    /// An existing file is truncated.
    pub fn write_file(&self, path: impl AsRef<Path>) -> io::Result<()> {
        let path = path.as_ref();
        debug!(
            path = %path.display(),
            origin = %self.origin,
            records = self.records.len(),
            "writing zone file"
        );
        let mut file = BufWriter::new(File::create(path)?);
        write!(file, "{}", self)?;
        file.flush()
    }
}

impl Zone<Forward> {
    /// Appends an A record for an IPv4 address given as text.
    pub fn add_a(&mut self, addr: &str) -> Result<&mut Record, AddrError> {
        let data = A::from_text(addr)?;
        Ok(self.add_record(data))
    }

    /// Appends an AAAA record for an IPv6 address given as text.
    pub fn add_aaaa(&mut self, addr: &str) -> Result<&mut Record, AddrError> {
        let data = Aaaa::from_text(addr)?;
        Ok(self.add_record(data))
    }

    /// Appends a CNAME record.
    ///
    /// The owner of the record is the alias, so it will almost always
    /// need to be set.
    pub fn add_cname(&mut self, cname: impl Into<String>) -> &mut Record {
        self.add_record(Cname::new(cname))
    }

    /// Appends an MX record.
    ///
    /// Use [`Mx::DEFAULT_PREFERENCE`] if you don’t care.
    pub fn add_mx(
        &mut self,
        preference: u16,
        exchange: impl Into<String>,
    ) -> &mut Record {
        self.add_record(Mx::new(preference, exchange))
    }

    /// Appends a TXT record.
    pub fn add_txt(&mut self, text: impl Into<String>) -> &mut Record {
        self.add_record(Txt::new(text))
    }
}

impl Zone<Reverse> {
    /// Appends a PTR record for an address given as text.
    ///
    /// Both IPv4 and IPv6 addresses are accepted. The owner is the absolute
    /// reverse name of the address.
    pub fn add_ptr(
        &mut self,
        addr: &str,
        target: impl Into<String>,
    ) -> Result<&mut Record, AddrError> {
        let addr = parse_addr(addr)?;
        Ok(self.add_record(Record::ptr(addr, target)))
    }
}

//--- Display

impl<K> fmt::Display for Zone<K> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "$ORIGIN {}", self.origin)?;
        writeln!(f, "$TTL {}", self.ttl)?;
        for record in &self.records {
            writeln!(f, "{}", record)?;
        }
        Ok(())
    }
}

//============ Tests =========================================================
