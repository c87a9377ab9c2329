//! Writing zone files.
//!
//! This module provides types for assembling the content of a zone file,
//! the textual representation of the data of a DNS zone defined in RFC
//! 1035, and writing it out. A [`ForwardZone`] holds SOA, NS, A, AAAA,
//! CNAME, MX, and TXT records, a [`ReverseZone`] holds SOA, NS, and PTR
//! records.
//!
//! Host names are passed through unmodified. They need to end in a dot to
//! be absolute, otherwise they are relative to the zone’s origin. Nothing
//! checks that the resulting zone is valid. Tools like
//! `named-checkzone(8)` can be used for that.
//!
//! ```no_run
//! use bindconf::zonefile::{ForwardZone, Mx};
//!
//! let mut zone = ForwardZone::new("example.com");
//! zone.add_soa("ns1", "hostmaster@example.com");
//! zone.add_ns("ns1");
//! zone.add_mx(Mx::DEFAULT_PREFERENCE, "mail");
//! zone.add_a("192.0.2.1").unwrap().set_owner("ns1");
//! zone.write_file("example.com.zone").unwrap();
//! ```

pub use self::rdata::{
    Aaaa, Cname, Mx, Ns, Ptr, RecordData, Soa, Txt, A,
};
pub use self::record::{reverse_name, Record};
pub use self::serial::{Serial, SerialPolicy};
pub use self::time::{TimeUnit, TimeValue, TimeValueError};
pub use self::zone::{Forward, ForwardZone, Reverse, ReverseZone, Zone};

mod rdata;
mod record;
mod serial;
mod time;
mod zone;
