//! Record data.
//!
//! Each record type that can be written into a zone file has its own type
//! here holding the data in presentation format. Host names are kept as
//! given: they must end in a dot to be absolute, otherwise they are
//! relative to the zone’s origin.
//!
//! The [`RecordData`] enum collects all of them.

use super::serial::Serial;
use super::time::TimeValue;
use crate::iana::Rtype;
use crate::net::{parse_ipv4, parse_ipv6, AddrError};
use core::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};

//------------ Soa -----------------------------------------------------------

/// Soa record data.
///
/// Soa records mark the top of a zone and contain information pertinent to
/// name server maintenance operations.
///
/// The Soa record type is defined in RFC 1035, section 3.3.13.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Soa {
    mname: String,
    rname: String,
    serial: Serial,
    refresh: TimeValue,
    retry: TimeValue,
    expire: TimeValue,
    minimum: TimeValue,
}

impl Soa {
    /// The default refresh interval of secondaries.
    pub const DEFAULT_REFRESH: TimeValue = TimeValue::hours(3);

    /// The default retry interval of secondaries.
    pub const DEFAULT_RETRY: TimeValue = TimeValue::hours(1);

    /// The default time after which secondaries drop the zone.
    pub const DEFAULT_EXPIRE: TimeValue = TimeValue::days(2);

    /// The default TTL for negative answers.
    pub const DEFAULT_MINIMUM: TimeValue = TimeValue::hours(1);

    /// Creates new Soa record data with default timers.
    ///
    /// The `rname` may be given as an e-mail address. In this case, the
    /// `@` is replaced by a dot and the name is made absolute.
    pub fn new(
        mname: impl Into<String>,
        rname: impl AsRef<str>,
        serial: Serial,
    ) -> Self {
        Soa {
            mname: mname.into(),
            rname: mailbox_name(rname.as_ref()),
            serial,
            refresh: Self::DEFAULT_REFRESH,
            retry: Self::DEFAULT_RETRY,
            expire: Self::DEFAULT_EXPIRE,
            minimum: Self::DEFAULT_MINIMUM,
        }
    }

    #[must_use]
    pub fn with_refresh(mut self, refresh: impl Into<TimeValue>) -> Self {
        self.refresh = refresh.into();
        self
    }

    #[must_use]
    pub fn with_retry(mut self, retry: impl Into<TimeValue>) -> Self {
        self.retry = retry.into();
        self
    }

    #[must_use]
    pub fn with_expire(mut self, expire: impl Into<TimeValue>) -> Self {
        self.expire = expire.into();
        self
    }

    #[must_use]
    pub fn with_minimum(mut self, minimum: impl Into<TimeValue>) -> Self {
        self.minimum = minimum.into();
        self
    }

    /// The primary name server for the zone.
    pub fn mname(&self) -> &str {
        &self.mname
    }

    /// The mailbox for the person responsible for this zone.
    pub fn rname(&self) -> &str {
        &self.rname
    }

    pub fn serial(&self) -> Serial {
        self.serial
    }

    pub fn refresh(&self) -> TimeValue {
        self.refresh
    }

    pub fn retry(&self) -> TimeValue {
        self.retry
    }

    pub fn expire(&self) -> TimeValue {
        self.expire
    }

    pub fn minimum(&self) -> TimeValue {
        self.minimum
    }
}

impl fmt::Display for Soa {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {} ({} {} {} {} {})",
            self.mname,
            self.rname,
            self.serial,
            self.refresh,
            self.retry,
            self.expire,
            self.minimum
        )
    }
}

/// Turns an e-mail address into a mailbox domain name.
fn mailbox_name(rname: &str) -> String {
    match rname.split_once('@') {
        Some((local, domain)) => {
            let mut res = format!("{}.{}", local, domain);
            if !res.ends_with('.') {
                res.push('.');
            }
            res
        }
        None => rname.into(),
    }
}

//------------ A -------------------------------------------------------------

/// A record data.
///
/// A records convey the IPv4 address of a host.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct A {
    addr: Ipv4Addr,
}

impl A {
    pub fn new(addr: Ipv4Addr) -> Self {
        A { addr }
    }

    /// Creates A record data from an address in text form.
    pub fn from_text(addr: &str) -> Result<Self, AddrError> {
        parse_ipv4(addr).map(Self::new)
    }

    pub fn addr(&self) -> Ipv4Addr {
        self.addr
    }
}

impl fmt::Display for A {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.addr.fmt(f)
    }
}

//------------ Aaaa ----------------------------------------------------------

/// Aaaa record data.
///
/// Aaaa records convey the IPv6 address of a host. The type is defined in
/// RFC 3596.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Aaaa {
    addr: Ipv6Addr,
}

impl Aaaa {
    pub fn new(addr: Ipv6Addr) -> Self {
        Aaaa { addr }
    }

    /// Creates Aaaa record data from an address in text form.
    pub fn from_text(addr: &str) -> Result<Self, AddrError> {
        parse_ipv6(addr).map(Self::new)
    }

    pub fn addr(&self) -> Ipv6Addr {
        self.addr
    }
}

impl fmt::Display for Aaaa {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.addr.fmt(f)
    }
}

//------------ Name Record Types ---------------------------------------------

macro_rules! name_type {
    ( $(#[$attr:meta])* $target:ident, $field:ident ) => {
        $(#[$attr])*
        #[derive(Clone, Debug, Eq, Hash, PartialEq)]
        #[cfg_attr(
            feature = "serde",
            derive(serde::Serialize, serde::Deserialize)
        )]
        pub struct $target {
            $field: String,
        }

        impl $target {
            pub fn new($field: impl Into<String>) -> Self {
                $target {
                    $field: $field.into(),
                }
            }

            pub fn $field(&self) -> &str {
                &self.$field
            }
        }

        impl fmt::Display for $target {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str(&self.$field)
            }
        }
    };
}

name_type! {
    /// NS record data.
    ///
    /// NS records specify hosts that are authoritative for a domain.
    Ns, nsdname
}

name_type! {
    /// CNAME record data.
    ///
    /// The CNAME record specifies the canonical or primary name for a
    /// domain name alias.
    Cname, cname
}

name_type! {
    /// PTR record data.
    ///
    /// PTR records are used in reverse mapping zones to point from an
    /// address back to a host name.
    Ptr, ptrdname
}

//------------ Mx ------------------------------------------------------------

/// Mx record data.
///
/// The Mx record specifies a host willing to serve as a mail exchange for
/// the owner name.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mx {
    preference: u16,
    exchange: String,
}

impl Mx {
    /// The preference used if none is given.
    pub const DEFAULT_PREFERENCE: u16 = 10;

    pub fn new(preference: u16, exchange: impl Into<String>) -> Self {
        Mx {
            preference,
            exchange: exchange.into(),
        }
    }

    pub fn preference(&self) -> u16 {
        self.preference
    }

    pub fn exchange(&self) -> &str {
        &self.exchange
    }
}

impl fmt::Display for Mx {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.preference, self.exchange)
    }
}

//------------ Txt -----------------------------------------------------------

/// Txt record data.
///
/// Txt records hold descriptive text. The text is written as one or more
/// quoted character strings. Since a character string can hold at most
/// 255 octets, longer text is split into several strings.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Txt {
    text: String,
}

impl Txt {
    /// The maximum length of a single character string.
    const CHUNK_LEN: usize = 255;

    pub fn new(text: impl Into<String>) -> Self {
        Txt { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the text split into character strings.
    ///
    /// Splits never happen inside a UTF-8 sequence.
    fn chunks(&self) -> impl Iterator<Item = &str> {
        let mut rest = self.text.as_str();
        let mut first = true;
        core::iter::from_fn(move || {
            if rest.is_empty() && !first {
                return None;
            }
            first = false;
            let mut end = rest.len().min(Self::CHUNK_LEN);
            while !rest.is_char_boundary(end) {
                end -= 1;
            }
            let (head, tail) = rest.split_at(end);
            rest = tail;
            Some(head)
        })
    }
}

impl fmt::Display for Txt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, chunk) in self.chunks().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str("\"")?;
            for ch in chunk.chars() {
                if ch == '"' || ch == '\\' {
                    write!(f, "\\{}", ch)?;
                } else {
                    write!(f, "{}", ch)?;
                }
            }
            f.write_str("\"")?;
        }
        Ok(())
    }
}

//------------ RecordData ----------------------------------------------------

/// The data of any record that can appear in a zone file.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RecordData {
    Soa(Soa),
    Ns(Ns),
    A(A),
    Aaaa(Aaaa),
    Cname(Cname),
    Mx(Mx),
    Txt(Txt),
    Ptr(Ptr),
}

impl RecordData {
    /// Returns the record type of the data.
    pub fn rtype(&self) -> Rtype {
        match self {
            RecordData::Soa(_) => Rtype::Soa,
            RecordData::Ns(_) => Rtype::Ns,
            RecordData::A(_) => Rtype::A,
            RecordData::Aaaa(_) => Rtype::Aaaa,
            RecordData::Cname(_) => Rtype::Cname,
            RecordData::Mx(_) => Rtype::Mx,
            RecordData::Txt(_) => Rtype::Txt,
            RecordData::Ptr(_) => Rtype::Ptr,
        }
    }
}

macro_rules! record_data_from {
    ( $( $variant:ident ),* ) => {
        $(
            impl From<$variant> for RecordData {
                fn from(data: $variant) -> Self {
                    RecordData::$variant(data)
                }
            }
        )*
    };
}

record_data_from!(Soa, Ns, A, Aaaa, Cname, Mx, Txt, Ptr);

impl fmt::Display for RecordData {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RecordData::Soa(data) => data.fmt(f),
            RecordData::Ns(data) => data.fmt(f),
            RecordData::A(data) => data.fmt(f),
            RecordData::Aaaa(data) => data.fmt(f),
            RecordData::Cname(data) => data.fmt(f),
            RecordData::Mx(data) => data.fmt(f),
            RecordData::Txt(data) => data.fmt(f),
            RecordData::Ptr(data) => data.fmt(f),
        }
    }
}

//============ Tests =========================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn soa() {
        let soa =
            Soa::new("ns1.example.com.", "email@example.com", Serial(1969123100))
                .with_refresh(TimeValue::hours(1))
                .with_retry(TimeValue::minutes(30))
                .with_expire(TimeValue::days(1))
                .with_minimum(999u32);
        let text = soa.to_string();
        assert_eq!(
            text,
            "ns1.example.com. email.example.com. (1969123100 1h 30m 1d 999)"
        );
        let fields: Vec<_> = text.split_whitespace().collect();
        assert_eq!(fields[0], soa.mname());
        assert_eq!(fields[1], "email.example.com.");
        assert_eq!(soa.minimum().as_secs(), 999);
    }

    #[test]
    fn soa_defaults() {
        let soa = Soa::new("ns1", "hostmaster", Serial(2024010100));
        assert_eq!(soa.rname(), "hostmaster");
        assert_eq!(soa.to_string(), "ns1 hostmaster (2024010100 3h 1h 2d 1h)");
    }

    #[test]
    fn mailbox() {
        for rname in [
            "hostmaster@example.com.",
            "hostmaster@example.com",
            "hostmaster.example.com.",
        ] {
            assert_eq!(mailbox_name(rname), "hostmaster.example.com.");
        }
    }

    #[test]
    fn addresses() {
        assert_eq!(
            A::from_text("192.168.1.1").unwrap().to_string(),
            "192.168.1.1"
        );
        assert!(A::from_text("2001:db8::1").is_err());
        assert!(A::from_text("192.168.1").is_err());
        assert_eq!(
            Aaaa::from_text("2001:0db8:0000::1").unwrap().to_string(),
            "2001:db8::1"
        );
        assert!(Aaaa::from_text("192.168.1.1").is_err());
    }

    #[test]
    fn txt() {
        assert_eq!(
            Txt::new("v=spf1 mx ~all").to_string(),
            "\"v=spf1 mx ~all\""
        );
        assert_eq!(Txt::new("").to_string(), "\"\"");
        assert_eq!(
            Txt::new("say \"hi\" \\o/").to_string(),
            "\"say \\\"hi\\\" \\\\o/\""
        );

        let long = "a".repeat(300);
        assert_eq!(
            Txt::new(long).to_string(),
            format!("\"{}\" \"{}\"", "a".repeat(255), "a".repeat(45))
        );

        let exact = "b".repeat(255);
        assert_eq!(
            Txt::new(exact.clone()).to_string(),
            format!("\"{}\"", exact)
        );
    }

    #[test]
    fn txt_utf8_boundary() {
        let text = format!("{}ä", "a".repeat(254));
        let txt = Txt::new(text);
        let chunks: Vec<_> = txt.chunks().collect();
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].len(), 254);
        assert_eq!(chunks[1], "ä");
    }

    #[test]
    fn record_data() {
        let data = RecordData::from(Mx::new(20, "mail2"));
        assert_eq!(data.rtype(), Rtype::Mx);
        assert_eq!(data.to_string(), "20 mail2");
        assert_eq!(
            RecordData::from(Ptr::new("ns1.example.com.")).rtype(),
            Rtype::Ptr
        );
        assert_eq!(RecordData::from(Cname::new("mail")).to_string(), "mail");
    }
}
