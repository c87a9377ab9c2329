//! Access control lists.

use super::quoted;
use crate::conf::{ConfFmt, ConfWriter, Element, Statement};
use core::fmt;

//------------ Acl -----------------------------------------------------------

/// An `acl` statement.
///
/// An ACL gives a name to an address match list:
///
/// ```text
/// acl "internal" {
///     192.0.2.0/24;
///     2001:db8::/32;
/// };
/// ```
///
/// The list items are taken as they are. Besides addresses and prefixes,
/// they can be the names of other ACLs, one of the built-in lists such as
/// `localhost`, or a negated item starting with `!`.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Acl {
    stmt: Statement,
}

impl Acl {
    /// Creates a new ACL from a name and the items of its list.
    pub fn new<T: fmt::Display>(
        name: impl fmt::Display,
        items: impl IntoIterator<Item = T>,
    ) -> Self {
        Acl {
            stmt: Statement::new("acl")
                .with_value([quoted(name)])
                .with_stanza(items),
        }
    }

    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.stmt = self.stmt.with_comment(comment);
        self
    }

    /// Returns the name of the ACL without quotes.
    pub fn name(&self) -> &str {
        self.stmt
            .value()
            .first()
            .map(|name| name.trim_matches('"'))
            .unwrap_or_default()
    }

    /// Returns the items of the address match list.
    pub fn items(&self) -> &[String] {
        self.stmt.stanza()
    }

    /// Appends an item to the address match list.
    pub fn push_item(&mut self, item: impl fmt::Display) {
        self.stmt.push_stanza(item)
    }

    pub fn as_statement(&self) -> &Statement {
        &self.stmt
    }
}

//--- From

impl From<Acl> for Element {
    fn from(acl: Acl) -> Self {
        acl.stmt.into()
    }
}

//--- ConfFmt and Display

impl ConfFmt for Acl {
    fn fmt_conf<W: fmt::Write>(&self, w: &mut ConfWriter<W>) -> fmt::Result {
        self.stmt.fmt_conf(w)
    }
}

impl fmt::Display for Acl {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.stmt.fmt(f)
    }
}

//============ Tests =========================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn render() {
        let mut acl = Acl::new("example_acl", ["1.1.1.1", "2.2.2.2"])
            .with_comment("trusted hosts");
        acl.push_item("!192.0.2.13");
        assert_eq!(acl.name(), "example_acl");
        assert_eq!(acl.items().len(), 3);
        assert_eq!(
            acl.to_string(),
            "# trusted hosts\n\
             acl \"example_acl\" {\n\
             \t1.1.1.1;\n\
             \t2.2.2.2;\n\
             \t!192.0.2.13;\n\
             };\n"
        );
    }

    #[test]
    fn into_element() {
        let element = Element::from(Acl::new("none_acl", ["none"]));
        assert_eq!(element.label(), "acl");
        assert_eq!(element.as_statement().unwrap().stanza(), ["none"]);
    }
}
