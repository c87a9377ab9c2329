//! Mnemonic DNS parameters.
//!
//! This module contains the classes and record types that appear in the
//! zone files written by this crate. Each type is an enum of the values
//! that are supported and is written as its usual mnemonic.

pub use self::class::Class;
pub use self::rtype::Rtype;

use core::fmt;

mod class;
mod rtype;

//------------ UnknownMnemonic -----------------------------------------------

/// A string was not a known mnemonic.
///
/// The value is the name of the type that was parsed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct UnknownMnemonic(pub &'static str);

impl fmt::Display for UnknownMnemonic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "unknown {} mnemonic", self.0)
    }
}

impl std::error::Error for UnknownMnemonic {}
