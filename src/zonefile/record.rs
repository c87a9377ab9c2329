//! Resource records.

use super::rdata::{Aaaa, Cname, Mx, Ns, Ptr, RecordData, Soa, Txt, A};
use super::time::TimeValue;
use crate::iana::Class;
use core::fmt;
use std::net::IpAddr;

//------------ Record --------------------------------------------------------

/// A single resource record of a zone file.
///
/// A record is written as a single line in the order owner, TTL, class,
/// record type, and record data. The TTL is optional: if it is missing, the
/// zone’s default TTL applies. A comment, if present, is written before
/// the record with each line starting with a semicolon.
///
/// The owner defaults to `@`, i.e., the origin of the zone.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Record {
    owner: String,
    ttl: Option<TimeValue>,
    class: Class,
    data: RecordData,
    comment: Option<String>,
}

/// # Creation
///
impl Record {
    /// The owner name used if none is given.
    pub const APEX: &'static str = "@";

    /// Creates a new record for the zone apex.
    pub fn new(data: impl Into<RecordData>) -> Self {
        Record {
            owner: Self::APEX.into(),
            ttl: None,
            class: Class::default(),
            data: data.into(),
            comment: None,
        }
    }

    /// Creates a new PTR record for the given address.
    ///
    /// The owner is the absolute reverse name of `addr`.
    pub fn ptr(addr: IpAddr, target: impl Into<String>) -> Self {
        let mut res = Self::new(Ptr::new(target));
        res.owner = reverse_name(addr);
        res
    }
}

/// # Access and Modification
///
/// The setters return a mutable reference so they can be chained directly
/// on the record returned by a zone’s `add_*` methods.
impl Record {
    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn set_owner(&mut self, owner: impl Into<String>) -> &mut Self {
        self.owner = owner.into();
        self
    }

    pub fn ttl(&self) -> Option<TimeValue> {
        self.ttl
    }

    pub fn set_ttl(&mut self, ttl: impl Into<TimeValue>) -> &mut Self {
        self.ttl = Some(ttl.into());
        self
    }

    /// Removes an explicit TTL so the zone’s default applies.
    pub fn clear_ttl(&mut self) -> &mut Self {
        self.ttl = None;
        self
    }

    pub fn class(&self) -> Class {
        self.class
    }

    pub fn set_class(&mut self, class: Class) -> &mut Self {
        self.class = class;
        self
    }

    pub fn data(&self) -> &RecordData {
        &self.data
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    pub fn set_comment(&mut self, comment: impl Into<String>) -> &mut Self {
        self.comment = Some(comment.into());
        self
    }
}

//--- From

impl From<RecordData> for Record {
    fn from(data: RecordData) -> Self {
        Record::new(data)
    }
}

macro_rules! record_from {
    ( $( $data:ident ),* ) => {
        $(
            impl From<$data> for Record {
                fn from(data: $data) -> Self {
                    Record::new(data)
                }
            }
        )*
    };
}

record_from!(Soa, Ns, A, Aaaa, Cname, Mx, Txt, Ptr);

//--- Display

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if let Some(comment) = self.comment.as_ref() {
            for line in comment.lines() {
                writeln!(f, "; {}", line)?;
            }
        }
        f.write_str(&self.owner)?;
        if let Some(ttl) = self.ttl {
            write!(f, " {}", ttl)?;
        }
        write!(f, " {} {} {}", self.class, self.data.rtype(), self.data)
    }
}

//------------ reverse_name --------------------------------------------------

/// Returns the absolute reverse lookup name for an address.
///
/// IPv4 addresses map to the reversed octets below `in-addr.arpa.`, IPv6
/// addresses to the reversed nibbles below `ip6.arpa.`.
pub fn reverse_name(addr: IpAddr) -> String {
    let mut res = String::new();
    match addr {
        IpAddr::V4(addr) => {
            for octet in addr.octets().iter().rev() {
                res.push_str(&format!("{}.", octet));
            }
            res.push_str("in-addr.arpa.");
        }
        IpAddr::V6(addr) => {
            for octet in addr.octets().iter().rev() {
                res.push_str(&format!("{:x}.{:x}.", octet & 0x0F, octet >> 4));
            }
            res.push_str("ip6.arpa.");
        }
    }
    res
}

//============ Tests =========================================================

#[cfg(test)]
mod test {
    use super::*;
    use std::net::{Ipv4Addr, Ipv6Addr};

    #[test]
    fn plain() {
        let record = Record::new(Ns::new("ns1.example.com."));
        assert_eq!(record.to_string(), "@ IN NS ns1.example.com.");
    }

    #[test]
    fn chained_setters() {
        let mut record = Record::new(A::new(Ipv4Addr::new(192, 0, 2, 1)));
        record
            .set_owner("www")
            .set_ttl(TimeValue::minutes(5))
            .set_comment("web server");
        assert_eq!(record.to_string(), "; web server\nwww 5m IN A 192.0.2.1");
        assert_eq!(record.owner(), "www");

        record.clear_ttl().set_class(Class::Ch);
        assert_eq!(record.to_string(), "; web server\nwww CH A 192.0.2.1");
    }

    #[test]
    fn multi_line_comment() {
        let mut record = Record::new(Mx::new(10, "mail"));
        record.set_comment("primary\nmail exchange");
        assert_eq!(
            record.to_string(),
            "; primary\n; mail exchange\n@ IN MX 10 mail"
        );
    }

    #[test]
    fn reverse_names() {
        assert_eq!(
            reverse_name(IpAddr::V4(Ipv4Addr::new(192, 168, 1, 1))),
            "1.1.168.192.in-addr.arpa."
        );
        assert_eq!(
            reverse_name(IpAddr::V6(Ipv6Addr::new(
                0x2001, 0xdb8, 0, 0, 0, 0, 0, 1
            ))),
            "1.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.\
             0.0.0.0.0.0.0.0.8.b.d.0.1.0.0.2.ip6.arpa."
        );
    }

    #[test]
    fn ptr() {
        let record = Record::ptr(
            IpAddr::V4(Ipv4Addr::new(192, 0, 2, 53)),
            "ns1.example.com.",
        );
        assert_eq!(
            record.to_string(),
            "53.2.0.192.in-addr.arpa. IN PTR ns1.example.com."
        );
    }
}
