//! Complete configurations.

use super::container::Container;
use super::element::Element;
use super::fmt::{ConfFmt, ConfWriter};
use core::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tracing::debug;

//------------ Configuration -------------------------------------------------

/// The content of a configuration file.
///
/// A configuration is an ordered list of top-level elements. It can be
/// written to a file via [`write_file`] or converted into a string via its
/// `Display` implementation. Both produce the same text.
///
/// [`write_file`]: Configuration::write_file
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Configuration {
    elements: Vec<Element>,
}

impl Configuration {
    /// Creates a new, empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes the configuration to the file at `path`.
    ///
    /// An existing file is truncated. Elements are written one by one, so
    /// if an error happens half way through, whatever was written so far
    /// stays in the file. Errors are returned as they are.
    pub fn write_file(&self, path: impl AsRef<Path>) -> io::Result<()> {
        let path = path.as_ref();
        debug!(
            path = %path.display(),
            elements = self.elements.len(),
            "writing configuration"
        );
        let mut file = BufWriter::new(File::create(path)?);
        let mut buf = String::new();
        for element in &self.elements {
            buf.clear();
            element.render(&mut buf, 0).map_err(|_| {
                io::Error::new(io::ErrorKind::Other, "formatting failed")
            })?;
            file.write_all(buf.as_bytes())?;
        }
        file.flush()
    }
}

//--- Container

impl Container for Configuration {
    fn elements(&self) -> &[Element] {
        &self.elements
    }

    fn elements_mut(&mut self) -> &mut Vec<Element> {
        &mut self.elements
    }
}

//--- ConfFmt and Display

impl ConfFmt for Configuration {
    fn fmt_conf<W: fmt::Write>(&self, w: &mut ConfWriter<W>) -> fmt::Result {
        for element in &self.elements {
            element.fmt_conf(w)?;
        }
        Ok(())
    }
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(f, 0)
    }
}

//============ Tests =========================================================
