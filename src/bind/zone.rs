//! Zone clauses.

use super::masters::{master_statement, Masters};
use super::source::SourceAddresses;
use super::{addr_tokens, quoted};
use crate::conf::{Clause, Container, Element, Statement};
use crate::iana::Class;
use crate::net::{parse_addr, AddrError};
use core::fmt;

//------------ ZoneType ------------------------------------------------------

mnemonic_enum! {
    /// The role of the server for a zone.
    =>
    ZoneType;

    /// The server has the primary copy of the zone.
    (Master => "master")

    /// The server transfers the zone from a primary.
    (Slave => "slave")

    /// Only the NS records of the zone are transferred.
    (Stub => "stub")

    /// Queries for the zone are forwarded.
    (Forward => "forward")

    /// The initial set of root name servers.
    (Hint => "hint")

    /// Like a stub zone but with statically configured servers.
    (StaticStub => "static-stub")

    /// Answers queries that would otherwise result in NXDOMAIN.
    (Redirect => "redirect")

    /// A validated copy of a zone, usually the root zone.
    (Mirror => "mirror")
}

//------------ NotifyMode ----------------------------------------------------

mnemonic_enum! {
    /// Whether NOTIFY messages are sent when a zone changes.
    =>
    NotifyMode;

    /// Notify all name servers of the zone and the also-notify list.
    (Yes => "yes")

    /// Don’t send any notifies.
    (No => "no")

    /// Only notify the servers in the also-notify list.
    (Explicit => "explicit")

    /// Only notify when the server is the primary.
    (MasterOnly => "master-only")
}

//------------ Zone ----------------------------------------------------------

/// A `zone` clause.
///
/// A new zone always has a `type` and a `file` statement:
///
/// ```
/// use bindconf::bind::{Zone, ZoneType};
///
/// let zone = Zone::new("example.com", ZoneType::Master, "example.com.hosts");
/// assert_eq!(
///     zone.to_string(),
///     "zone \"example.com\" IN {\n\
///      \ttype master;\n\
///      \tfile \"example.com.hosts\";\n\
///      };\n"
/// );
/// ```
///
/// Zones can be added to a [`View`][super::View] or, if no views are
/// used, directly to the [`BindConf`][super::BindConf].
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Zone {
    clause: Clause,
}

/// # Creation
///
impl Zone {
    /// Creates a new zone of class IN.
    pub fn new(name: &str, zone_type: ZoneType, file: &str) -> Self {
        Self::with_class(name, Class::In, zone_type, file)
    }

    /// Creates a new zone of the given class.
    pub fn with_class(
        name: &str,
        class: Class,
        zone_type: ZoneType,
        file: &str,
    ) -> Self {
        let mut res = Zone {
            clause: Clause::new("zone", [quoted(name), class.to_string()]),
        };
        res.set_type(zone_type);
        res.set_file(file);
        res
    }
}

/// # Statements
///
impl Zone {
    /// Sets the `type` statement.
    pub fn set_type(&mut self, zone_type: ZoneType) {
        self.set_element(Statement::new("type").with_value([zone_type]))
    }

    /// Sets the `file` statement.
    pub fn set_file(&mut self, path: &str) {
        self.set_element(Statement::new("file").with_value([quoted(path)]))
    }

    /// Sets the `allow-update` address match list.
    ///
    /// The items are taken as they are. Use `["none"]` to forbid dynamic
    /// updates altogether.
    pub fn set_allow_update<T: fmt::Display>(
        &mut self,
        items: impl IntoIterator<Item = T>,
    ) {
        self.set_element(Statement::new("allow-update").with_stanza(items))
    }

    /// Replaces the masters list.
    pub fn set_masters(&mut self, masters: Masters) {
        self.set_element(masters)
    }

    /// Adds a primary server to the masters list.
    ///
    /// If the zone already has a masters list, the server is appended to
    /// the first one. This is also the case for a `masters` statement
    /// added through the [`Container`] methods, which gains a stanza item.
    /// Otherwise a new list is created.
    pub fn add_master(
        &mut self,
        addr: &str,
        port: Option<u16>,
        key: Option<&str>,
    ) -> Result<(), AddrError> {
        let stmt = master_statement(addr, port, key)?;
        let existing = self
            .elements_mut()
            .iter_mut()
            .find(|element| element.label() == "masters");
        match existing {
            Some(Element::Clause(masters)) => masters.add_element(stmt),
            Some(Element::Statement(masters)) => {
                let mut item = stmt.label().to_string();
                for token in stmt.value() {
                    item.push(' ');
                    item.push_str(token);
                }
                masters.push_stanza(item)
            }
            None => {
                let mut masters = Masters::default();
                masters.add_element(stmt);
                self.add_element(masters);
            }
        }
        Ok(())
    }

    /// Sets the `notify` statement.
    pub fn set_notify(&mut self, mode: NotifyMode) {
        self.set_element(Statement::new("notify").with_value([mode]))
    }

    /// Adds a server to the `also-notify` list.
    ///
    /// All servers end up in a single list, in the order they were added.
    pub fn add_also_notify(
        &mut self,
        addr: &str,
        port: Option<u16>,
    ) -> Result<(), AddrError> {
        let item = addr_tokens(parse_addr(addr)?, port).join(" ");
        match self.statement_mut("also-notify") {
            Some(stmt) => stmt.push_stanza(item),
            None => self.add_element(
                Statement::new("also-notify").with_stanza([item]),
            ),
        }
        Ok(())
    }
}

clause_type!(Zone);

impl SourceAddresses for Zone {}

//============ Tests =========================================================

#[cfg(test)]
mod test {
    use super::*;
    use crate::bind::MastersList;
    use rstest::rstest;

    fn zone() -> Zone {
        Zone::new("example.com", ZoneType::Slave, "slave/example.com.hosts")
    }

    #[rstest]
    #[case(ZoneType::Master, "master")]
    #[case(ZoneType::Slave, "slave")]
    #[case(ZoneType::StaticStub, "static-stub")]
    #[case(ZoneType::Mirror, "mirror")]
    fn zone_types(#[case] zone_type: ZoneType, #[case] mnemonic: &str) {
        assert_eq!(zone_type.to_string(), mnemonic);
        assert_eq!(mnemonic.parse(), Ok(zone_type));
    }

    #[test]
    fn singletons() {
        let mut zone = zone();
        zone.set_type(ZoneType::Master);
        zone.set_file("master/example.com.hosts");
        zone.set_allow_update(["192.0.2.1"]);
        zone.set_allow_update(["none"]);
        zone.set_notify(NotifyMode::Yes);
        zone.set_notify(NotifyMode::MasterOnly);
        for label in ["type", "file", "allow-update", "notify"] {
            assert_eq!(zone.get_elements(label).len(), 1, "{}", label);
        }
        assert_eq!(
            zone.to_string(),
            "zone \"example.com\" IN {\n\
             \ttype master;\n\
             \tfile \"master/example.com.hosts\";\n\
             \tallow-update {\n\
             \t\tnone;\n\
             \t};\n\
             \tnotify master-only;\n\
             };\n"
        );
    }

    #[test]
    fn add_master_accumulates() {
        let mut zone = zone();
        zone.add_master("192.0.2.1", None, None).unwrap();
        zone.add_master("192.0.2.2", Some(5353), None).unwrap();
        zone.add_master("2001:db8::1", None, Some("transfer")).unwrap();
        assert_eq!(zone.get_elements("masters").len(), 1);
        assert_eq!(
            zone.to_string(),
            "zone \"example.com\" IN {\n\
             \ttype slave;\n\
             \tfile \"slave/example.com.hosts\";\n\
             \tmasters {\n\
             \t\t192.0.2.1;\n\
             \t\t192.0.2.2 port 5353;\n\
             \t\t2001:db8::1 key \"transfer\";\n\
             \t};\n\
             };\n"
        );
    }

    #[test]
    fn add_master_extends_set_masters() {
        let mut zone = zone();
        let mut masters = Masters::new(Some(53));
        masters.add_masters_name("example_masters").unwrap();
        zone.set_masters(masters);
        zone.add_master("192.0.2.1", None, None).unwrap();
        let clause = zone.get_elements("masters")[0].as_clause().unwrap();
        assert_eq!(clause.additional(), ["port", "53"]);
        assert_eq!(clause.elements().len(), 2);

        zone.set_masters(Masters::default());
        let clause = zone.get_elements("masters")[0].as_clause().unwrap();
        assert!(clause.is_empty());
    }

    #[test]
    fn add_master_extends_generic_statement() {
        let mut zone = zone();
        zone.add_element(
            Statement::new("masters").with_stanza(["192.0.2.9"]),
        );
        zone.add_master("192.0.2.1", Some(5353), None).unwrap();
        assert_eq!(zone.get_elements("masters").len(), 1);
        assert_eq!(
            zone.get_elements("masters")[0].as_statement().unwrap().stanza(),
            ["192.0.2.9", "192.0.2.1 port 5353"]
        );
        assert!(zone.to_string().ends_with(
            "\tmasters {\n\
             \t\t192.0.2.9;\n\
             \t\t192.0.2.1 port 5353;\n\
             \t};\n\
             };\n"
        ));
    }

    #[test]
    fn invalid_master() {
        let mut zone = zone();
        let before = zone.clone();
        assert!(zone.add_master("example_masters", None, None).is_err());
        assert!(zone.add_also_notify("192.0.2", None).is_err());
        assert_eq!(zone, before);
    }

    #[test]
    fn also_notify() {
        let mut zone = zone();
        zone.add_also_notify("192.0.2.1", None).unwrap();
        zone.add_also_notify("2001:db8::53", Some(5300)).unwrap();
        assert_eq!(zone.get_elements("also-notify").len(), 1);
        assert!(zone.to_string().contains(
            "\talso-notify {\n\
             \t\t192.0.2.1;\n\
             \t\t2001:db8::53 port 5300;\n\
             \t};\n"
        ));
    }

    #[test]
    fn other_class() {
        let zone = Zone::with_class(
            "version.bind",
            Class::Ch,
            ZoneType::Master,
            "version.db",
        );
        assert!(zone.to_string().starts_with("zone \"version.bind\" CH {\n"));
    }
}
