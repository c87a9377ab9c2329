//! Parsing IP addresses given as text.
//!
//! Addresses reach the BIND and zone file builders as strings. They are
//! checked here before anything is added to a configuration so that a bad
//! address never ends up in the output.

use core::fmt;
use core::str::FromStr;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

//------------ Family --------------------------------------------------------

/// The address family of an IP address.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Family {
    V4,
    V6,
}

impl Family {
    /// Returns the family of the given address.
    pub fn of(addr: IpAddr) -> Self {
        match addr {
            IpAddr::V4(_) => Family::V4,
            IpAddr::V6(_) => Family::V6,
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Family::V4 => f.write_str("IPv4"),
            Family::V6 => f.write_str("IPv6"),
        }
    }
}

//------------ Parsing Functions ---------------------------------------------

/// Parses an IPv4 or IPv6 address.
pub fn parse_addr(s: &str) -> Result<IpAddr, AddrError> {
    IpAddr::from_str(s.trim()).map_err(|_| AddrError::Invalid(s.into()))
}

/// Parses an IPv4 address.
///
/// Returns [`AddrError::Family`] if `s` holds an IPv6 address.
pub fn parse_ipv4(s: &str) -> Result<Ipv4Addr, AddrError> {
    match parse_addr(s)? {
        IpAddr::V4(addr) => Ok(addr),
        addr => Err(AddrError::Family {
            addr,
            expected: Family::V4,
        }),
    }
}

/// Parses an IPv6 address.
///
/// Returns [`AddrError::Family`] if `s` holds an IPv4 address.
pub fn parse_ipv6(s: &str) -> Result<Ipv6Addr, AddrError> {
    match parse_addr(s)? {
        IpAddr::V6(addr) => Ok(addr),
        addr => Err(AddrError::Family {
            addr,
            expected: Family::V6,
        }),
    }
}

//============ Error Types ===================================================

//------------ AddrError -----------------------------------------------------

/// An address given as text could not be used.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AddrError {
    /// The text is not an IP address.
    Invalid(String),

    /// The address is of the wrong family.
    Family { addr: IpAddr, expected: Family },
}

impl fmt::Display for AddrError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AddrError::Invalid(s) => {
                write!(f, "invalid IP address '{}'", s)
            }
            AddrError::Family { addr, expected } => {
                write!(f, "expected {} address, got '{}'", expected, addr)
            }
        }
    }
}

impl std::error::Error for AddrError {}

//============ Tests =========================================================
