//! Masters lists.

use super::quoted;
use crate::conf::{Clause, Container, EmptyLabel, Statement};
use crate::net::{parse_addr, AddrError};

//------------ MastersList ---------------------------------------------------

/// A list of primary servers.
///
/// This is implemented by both [`NamedMasters`] and [`Masters`]. The list
/// can contain addresses and the names of other named masters lists.
pub trait MastersList: Container {
    /// Appends the address of a primary server.
    ///
    /// The address is written in its canonical form, followed by the port
    /// and the name of the TSIG key if given. If `addr` isn’t an IP
    /// address, an error is returned and the list stays unchanged.
    fn add_master(
        &mut self,
        addr: &str,
        port: Option<u16>,
        key: Option<&str>,
    ) -> Result<(), AddrError> {
        let stmt = master_statement(addr, port, key)?;
        self.add_element(stmt);
        Ok(())
    }

    /// Appends a reference to a named masters list.
    ///
    /// If `name` is empty, an error is returned and the list stays
    /// unchanged.
    fn add_masters_name(&mut self, name: &str) -> Result<(), EmptyLabel> {
        self.add_element(Statement::try_new(name)?);
        Ok(())
    }
}

/// Creates the list item for a single primary server.
pub(super) fn master_statement(
    addr: &str,
    port: Option<u16>,
    key: Option<&str>,
) -> Result<Statement, AddrError> {
    let addr = parse_addr(addr)?;
    let mut value = Vec::new();
    if let Some(port) = port {
        value.push("port".to_string());
        value.push(port.to_string());
    }
    if let Some(key) = key {
        value.push("key".into());
        value.push(quoted(key));
    }
    Ok(Statement::new(addr.to_string()).with_value(value))
}

/// Returns the additional tokens for a masters clause.
fn port_tokens(port: Option<u16>) -> Vec<String> {
    match port {
        Some(port) => vec!["port".into(), port.to_string()],
        None => Vec::new(),
    }
}

//------------ NamedMasters --------------------------------------------------

/// A top-level `masters` clause.
///
/// A named masters list can be referred to by name from the masters list
/// of secondary zones. If a port is given, it applies to all entries that
/// don’t have their own.
///
/// ```text
/// masters example_masters port 5353 {
///     192.0.2.1;
///     192.0.2.2 key "transfer";
/// };
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct NamedMasters {
    clause: Clause,
}

impl NamedMasters {
    /// Creates a new, empty named masters list.
    pub fn new(name: &str, port: Option<u16>) -> Self {
        let mut additional = vec![name.to_string()];
        additional.extend(port_tokens(port));
        NamedMasters {
            clause: Clause::new("masters", additional),
        }
    }

    /// Returns the name of the list.
    pub fn name(&self) -> &str {
        self.clause
            .additional()
            .first()
            .map(String::as_str)
            .unwrap_or_default()
    }
}

clause_type!(NamedMasters);

impl MastersList for NamedMasters {}

//------------ Masters -------------------------------------------------------

/// The `masters` clause of a secondary zone.
///
/// This is the anonymous version of [`NamedMasters`] used inside a
/// [`Zone`][super::Zone].
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Masters {
    clause: Clause,
}

impl Masters {
    /// Creates a new, empty masters list.
    pub fn new(port: Option<u16>) -> Self {
        Masters {
            clause: Clause::new("masters", port_tokens(port)),
        }
    }
}

impl Default for Masters {
    fn default() -> Self {
        Self::new(None)
    }
}

clause_type!(Masters);

impl MastersList for Masters {}

//============ Tests =========================================================
