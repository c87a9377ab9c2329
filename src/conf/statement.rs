//! Statements.

use super::element::{check_label, EmptyLabel};
use super::fmt::{ConfFmt, ConfWriter};
use core::fmt;

//------------ Statement -----------------------------------------------------

/// A single configuration directive.
///
/// A statement consists of a label, an optional list of arguments written
/// on the same line – the *value* –, and an optional list of sub-items
/// written one per line inside braces – the *stanza*. If the stanza is
/// empty, the statement is written as a single line:
///
/// ```text
/// type master;
/// ```
///
/// Otherwise, the value tokens stay on the opening line and each stanza
/// item gets a line of its own:
///
/// ```text
/// acl "internal" {
///     192.0.2.1;
///     192.0.2.2;
/// };
/// ```
///
/// Statements can be preceded by a comment.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Statement {
    label: String,
    value: Vec<String>,
    stanza: Vec<String>,
    comment: Option<String>,
}

/// # Creation
///
impl Statement {
    /// Creates a new statement with the given label.
    ///
    /// # Panics
    ///
    /// The function panics if `label` is empty. Use [`try_new`] to check
    /// labels that are not known in advance.
    ///
    /// [`try_new`]: Statement::try_new
    pub fn new(label: impl Into<String>) -> Self {
        match Self::try_new(label) {
            Ok(stmt) => stmt,
            Err(_) => panic!("statement label must not be empty"),
        }
    }

    /// Creates a new statement, checking that the label isn’t empty.
    pub fn try_new(label: impl Into<String>) -> Result<Self, EmptyLabel> {
        Ok(Statement {
            label: check_label(label.into())?,
            value: Vec::new(),
            stanza: Vec::new(),
            comment: None,
        })
    }

    /// Sets the tokens written on the label’s line.
    #[must_use]
    pub fn with_value<T: fmt::Display>(
        mut self,
        value: impl IntoIterator<Item = T>,
    ) -> Self {
        self.value = value.into_iter().map(|item| item.to_string()).collect();
        self
    }

    /// Sets the items written inside braces.
    #[must_use]
    pub fn with_stanza<T: fmt::Display>(
        mut self,
        stanza: impl IntoIterator<Item = T>,
    ) -> Self {
        self.stanza =
            stanza.into_iter().map(|item| item.to_string()).collect();
        self
    }

    /// Sets the comment preceding the statement.
    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}

/// # Access
///
impl Statement {
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn value(&self) -> &[String] {
        &self.value
    }

    pub fn stanza(&self) -> &[String] {
        &self.stanza
    }

    /// Appends an item to the stanza.
    ///
    /// This turns a single line statement into a braced one.
    pub fn push_stanza(&mut self, item: impl fmt::Display) {
        self.stanza.push(item.to_string())
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    pub fn set_comment(&mut self, comment: Option<String>) {
        self.comment = comment
    }
}

//--- ConfFmt and Display

impl ConfFmt for Statement {
    fn fmt_conf<W: fmt::Write>(&self, w: &mut ConfWriter<W>) -> fmt::Result {
        w.comment(self.comment())?;
        w.label(&self.label)?;
        for token in &self.value {
            w.token(token)?;
        }
        if self.stanza.is_empty() {
            w.end()
        } else {
            w.block(|w| {
                for item in &self.stanza {
                    w.item(item)?;
                }
                Ok(())
            })
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(f, 0)
    }
}

//--- Deserialize

/// The serialized fields of a statement before the label is checked.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(rename = "Statement")]
struct StatementFields {
    label: String,
    value: Vec<String>,
    stanza: Vec<String>,
    comment: Option<String>,
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Statement {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Self, D::Error> {
        use serde::de::Error;

        let fields = StatementFields::deserialize(deserializer)?;
        Ok(Statement {
            label: check_label(fields.label).map_err(D::Error::custom)?,
            value: fields.value,
            stanza: fields.stanza,
            comment: fields.comment,
        })
    }
}

//============ Tests =========================================================
