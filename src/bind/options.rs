//! The options clause.

use super::quoted;
use super::source::SourceAddresses;
use crate::conf::{Clause, Container, Statement};

//------------ Options -------------------------------------------------------

/// The global `options` clause.
///
/// There can only be one of these in a configuration. See
/// [`BindConf::set_options`][super::BindConf::set_options].
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Options {
    clause: Clause,
}

impl Options {
    pub fn new() -> Self {
        Options {
            clause: Clause::new("options", Vec::<String>::new()),
        }
    }

    /// Sets the working directory of the server.
    ///
    /// Relative paths elsewhere in the configuration are relative to this
    /// directory.
    pub fn set_directory(&mut self, path: &str) {
        self.set_element(Statement::new("directory").with_value([quoted(path)]))
    }
}

impl Default for Options {
    fn default() -> Self {
        Self::new()
    }
}

clause_type!(Options);

impl SourceAddresses for Options {}

//============ Tests =========================================================
