//! Views.

use super::quoted;
use super::source::SourceAddresses;
use super::zone::Zone;
use crate::conf::{Clause, Container, Statement};
use crate::iana::Class;
use core::fmt;

//------------ View ----------------------------------------------------------

/// A `view` clause.
///
/// A view presents its own set of zones to the clients it matches. It is
/// written as
///
/// ```text
/// view "internal" IN {
///     match-destinations {
///         192.0.2.1;
///     };
///     zone "example.com" IN {
///         ...
///     };
/// };
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct View {
    clause: Clause,
}

impl View {
    /// Creates a new, empty view of class IN.
    pub fn new(name: &str) -> Self {
        Self::with_class(name, Class::In)
    }

    /// Creates a new, empty view of the given class.
    pub fn with_class(name: &str, class: Class) -> Self {
        View {
            clause: Clause::new(
                "view",
                [quoted(name), class.to_string()],
            ),
        }
    }

    /// Appends a zone to the view.
    pub fn add_zone(&mut self, zone: Zone) {
        self.add_element(zone)
    }

    /// Sets the address match list for destination addresses.
    ///
    /// Only queries sent to an address matching the list are answered from
    /// this view. The items are taken as they are, so they can be ACL
    /// names or prefixes as well as addresses.
    pub fn set_match_destinations<T: fmt::Display>(
        &mut self,
        items: impl IntoIterator<Item = T>,
    ) {
        self.set_element(
            Statement::new("match-destinations").with_stanza(items),
        )
    }
}

clause_type!(View);

impl SourceAddresses for View {}

//============ Tests =========================================================

#[cfg(test)]
mod test {
    use super::*;
    use crate::bind::ZoneType;

    #[test]
    fn render() {
        let mut view = View::new("example_view");
        view.add_zone(
            Zone::new("example.com", ZoneType::Slave, "example.com.hosts")
                .with_comment("This is a comment"),
        );
        view.set_match_destinations(["1.1.1.1", "2.2.2.2"]);
        view.set_notify_source("3.3.3.3", None).unwrap();
        view.set_comment("view comment");
        assert_eq!(
            view.to_string(),
            "# view comment\n\
             view \"example_view\" IN {\n\
             \t# This is a comment\n\
             \tzone \"example.com\" IN {\n\
             \t\ttype slave;\n\
             \t\tfile \"example.com.hosts\";\n\
             \t};\n\
             \tmatch-destinations {\n\
             \t\t1.1.1.1;\n\
             \t\t2.2.2.2;\n\
             \t};\n\
             \tnotify-source 3.3.3.3;\n\
             };\n"
        );
    }

    #[test]
    fn match_destinations_singleton() {
        let mut view = View::with_class("chaos", Class::Ch);
        view.set_match_destinations(["any"]);
        view.set_match_destinations(["localhost", "localnets"]);
        assert_eq!(view.get_elements("match-destinations").len(), 1);
        assert!(view.to_string().starts_with("view \"chaos\" CH {\n"));
        assert!(view.to_string().contains("\t\tlocalnets;\n"));
    }
}
