//! Clauses.

use super::container::Container;
use super::element::{check_label, Element, EmptyLabel};
use super::fmt::{ConfFmt, ConfWriter};
use core::fmt;

//------------ Clause --------------------------------------------------------

/// A named block of configuration.
///
/// A clause starts with a label followed by a fixed list of *additional*
/// tokens, e.g., the name and class of a view. It then contains a list of
/// further elements inside braces:
///
/// ```text
/// zone "example.com." IN {
///     type master;
///     file "example.com.hosts";
/// };
/// ```
///
/// The additional tokens are given when creating the clause and cannot be
/// changed later. The children are managed through the [`Container`]
/// trait.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Clause {
    label: String,
    additional: Vec<String>,
    elements: Vec<Element>,
    comment: Option<String>,
}

impl Clause {
    /// Creates a new, empty clause.
    ///
    /// # Panics
    ///
    /// The function panics if `label` is empty.
    pub fn new<T: fmt::Display>(
        label: impl Into<String>,
        additional: impl IntoIterator<Item = T>,
    ) -> Self {
        match Self::try_new(label, additional) {
            Ok(clause) => clause,
            Err(_) => panic!("clause label must not be empty"),
        }
    }

    /// Creates a new clause, checking that the label isn’t empty.
    pub fn try_new<T: fmt::Display>(
        label: impl Into<String>,
        additional: impl IntoIterator<Item = T>,
    ) -> Result<Self, EmptyLabel> {
        Ok(Clause {
            label: check_label(label.into())?,
            additional: additional
                .into_iter()
                .map(|item| item.to_string())
                .collect(),
            elements: Vec::new(),
            comment: None,
        })
    }

    /// Sets the comment preceding the clause.
    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn additional(&self) -> &[String] {
        &self.additional
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    pub fn set_comment(&mut self, comment: Option<String>) {
        self.comment = comment
    }
}

//--- Container

impl Container for Clause {
    fn elements(&self) -> &[Element] {
        &self.elements
    }

    fn elements_mut(&mut self) -> &mut Vec<Element> {
        &mut self.elements
    }
}

//--- ConfFmt and Display

impl ConfFmt for Clause {
    fn fmt_conf<W: fmt::Write>(&self, w: &mut ConfWriter<W>) -> fmt::Result {
        w.comment(self.comment())?;
        w.label(&self.label)?;
        for token in &self.additional {
            w.token(token)?;
        }
        w.block(|w| {
            for element in &self.elements {
                element.fmt_conf(w)?;
            }
            Ok(())
        })
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(f, 0)
    }
}

//--- Deserialize

/// The serialized fields of a clause before the label is checked.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(rename = "Clause")]
struct ClauseFields {
    label: String,
    additional: Vec<String>,
    elements: Vec<Element>,
    comment: Option<String>,
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Clause {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Self, D::Error> {
        use serde::de::Error;

        let fields = ClauseFields::deserialize(deserializer)?;
        Ok(Clause {
            label: check_label(fields.label).map_err(D::Error::custom)?,
            additional: fields.additional,
            elements: fields.elements,
            comment: fields.comment,
        })
    }
}

//============ Tests =========================================================
