//! Elements of a configuration tree.

use super::clause::Clause;
use super::fmt::{ConfFmt, ConfWriter};
use super::statement::Statement;
use core::fmt;

//------------ Element -------------------------------------------------------

/// A node of the configuration tree.
///
/// An element is either a [`Statement`] or a [`Clause`]. Every container
/// accepts anything that converts into an element, so the set of things
/// that can be attached to a tree is closed.
///
/// Elements have no identity beyond their position in the parent’s list
/// of children.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Element {
    /// A single directive.
    Statement(Statement),

    /// A braced block of further elements.
    Clause(Clause),
}

impl Element {
    /// Returns the label, i.e., the first word of the element.
    pub fn label(&self) -> &str {
        match self {
            Element::Statement(stmt) => stmt.label(),
            Element::Clause(clause) => clause.label(),
        }
    }

    /// Returns the comment preceding the element if there is one.
    pub fn comment(&self) -> Option<&str> {
        match self {
            Element::Statement(stmt) => stmt.comment(),
            Element::Clause(clause) => clause.comment(),
        }
    }

    /// Sets or clears the comment preceding the element.
    pub fn set_comment(&mut self, comment: Option<String>) {
        match self {
            Element::Statement(stmt) => stmt.set_comment(comment),
            Element::Clause(clause) => clause.set_comment(comment),
        }
    }

    /// Returns the statement if the element is one.
    pub fn as_statement(&self) -> Option<&Statement> {
        match self {
            Element::Statement(stmt) => Some(stmt),
            Element::Clause(_) => None,
        }
    }

    /// Returns a mutable reference to the statement if the element is one.
    pub fn as_statement_mut(&mut self) -> Option<&mut Statement> {
        match self {
            Element::Statement(stmt) => Some(stmt),
            Element::Clause(_) => None,
        }
    }

    /// Returns the clause if the element is one.
    pub fn as_clause(&self) -> Option<&Clause> {
        match self {
            Element::Clause(clause) => Some(clause),
            Element::Statement(_) => None,
        }
    }

    /// Returns a mutable reference to the clause if the element is one.
    pub fn as_clause_mut(&mut self) -> Option<&mut Clause> {
        match self {
            Element::Clause(clause) => Some(clause),
            Element::Statement(_) => None,
        }
    }
}

//--- From

impl From<Statement> for Element {
    fn from(stmt: Statement) -> Self {
        Element::Statement(stmt)
    }
}

impl From<Clause> for Element {
    fn from(clause: Clause) -> Self {
        Element::Clause(clause)
    }
}

//--- ConfFmt and Display

impl ConfFmt for Element {
    fn fmt_conf<W: fmt::Write>(&self, w: &mut ConfWriter<W>) -> fmt::Result {
        match self {
            Element::Statement(stmt) => stmt.fmt_conf(w),
            Element::Clause(clause) => clause.fmt_conf(w),
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(f, 0)
    }
}

//------------ check_label ---------------------------------------------------

/// Makes sure a label is usable.
pub(super) fn check_label(label: String) -> Result<String, EmptyLabel> {
    if label.is_empty() {
        Err(EmptyLabel)
    } else {
        Ok(label)
    }
}

//============ Error Types ===================================================

//------------ EmptyLabel ----------------------------------------------------

/// An attempt was made to create an element with an empty label.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct EmptyLabel;

impl fmt::Display for EmptyLabel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("empty element label")
    }
}

impl std::error::Error for EmptyLabel {}

//============ Tests =========================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn accessors() {
        let mut elem = Element::from(
            Statement::new("type").with_value(["master"]),
        );
        assert_eq!(elem.label(), "type");
        assert!(elem.as_statement().is_some());
        assert!(elem.as_clause().is_none());
        assert_eq!(elem.comment(), None);
        elem.set_comment(Some("primary copy".into()));
        assert_eq!(elem.comment(), Some("primary copy"));
        assert_eq!(elem.to_string(), "# primary copy\ntype master;\n");

        let elem = Element::from(Clause::new("view", ["\"internal\""]));
        assert_eq!(elem.label(), "view");
        assert!(elem.as_clause().is_some());
    }

    #[test]
    fn empty_label() {
        assert_eq!(check_label(String::new()), Err(EmptyLabel));
        assert_eq!(check_label("zone".into()), Ok("zone".into()));
    }
}
