//! Writing configuration elements as text.
//!
//! All elements render through a [`ConfWriter`] which keeps track of the
//! current nesting depth and writes the leading indentation for every
//! line. The [`ConfFmt`] trait is implemented by everything that can be
//! written this way.

use core::fmt;

//------------ ConfFmt -------------------------------------------------------

/// Show a value in ISC configuration syntax.
pub trait ConfFmt {
    /// Writes the value to `w` at the writer’s current depth.
    fn fmt_conf<W: fmt::Write>(&self, w: &mut ConfWriter<W>) -> fmt::Result;

    /// Renders the value into `target` starting at the given depth.
    fn render<W: fmt::Write>(&self, target: W, indent: usize) -> fmt::Result {
        self.fmt_conf(&mut ConfWriter::with_depth(target, indent))
    }

    /// Returns a value displaying `self` at depth zero.
    fn display_conf(&self) -> ConfDisplay<'_, Self> {
        ConfDisplay { inner: self }
    }
}

impl<T: ConfFmt + ?Sized> ConfFmt for &T {
    fn fmt_conf<W: fmt::Write>(&self, w: &mut ConfWriter<W>) -> fmt::Result {
        T::fmt_conf(self, w)
    }
}

//------------ ConfDisplay ---------------------------------------------------

/// Helper type returned by [`ConfFmt::display_conf`].
pub struct ConfDisplay<'a, T: ?Sized> {
    inner: &'a T,
}

impl<T: ConfFmt + ?Sized> fmt::Display for ConfDisplay<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.inner.fmt_conf(&mut ConfWriter::new(f))
    }
}

//------------ ConfWriter ----------------------------------------------------

/// A text sink that knows about indentation.
///
/// Every line starts with the indent unit repeated once per nesting level.
/// The unit is a single tab unless changed via [`with_indent`].
///
/// [`with_indent`]: ConfWriter::with_indent
pub struct ConfWriter<W> {
    writer: W,
    depth: usize,
    indent: &'static str,
}

impl<W: fmt::Write> ConfWriter<W> {
    /// The default indent unit.
    pub const TAB: &'static str = "\t";

    /// Creates a new writer at depth zero.
    pub fn new(writer: W) -> Self {
        Self::with_depth(writer, 0)
    }

    /// Creates a new writer starting at the given depth.
    pub fn with_depth(writer: W, depth: usize) -> Self {
        ConfWriter {
            writer,
            depth,
            indent: Self::TAB,
        }
    }

    /// Replaces the indent unit.
    #[must_use]
    pub fn with_indent(mut self, indent: &'static str) -> Self {
        self.indent = indent;
        self
    }

    /// Returns the current nesting depth.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_indent(&mut self) -> fmt::Result {
        for _ in 0..self.depth {
            self.writer.write_str(self.indent)?;
        }
        Ok(())
    }

    /// Writes a comment, one `# ` prefixed line per line of text.
    ///
    /// Nothing is written if `comment` is `None`.
    pub fn comment(&mut self, comment: Option<&str>) -> fmt::Result {
        if let Some(comment) = comment {
            for line in comment.lines() {
                self.write_indent()?;
                writeln!(self.writer, "# {}", line)?;
            }
        }
        Ok(())
    }

    /// Starts a new line with the given label.
    pub fn label(&mut self, label: &str) -> fmt::Result {
        self.write_indent()?;
        self.writer.write_str(label)
    }

    /// Appends a space separated token to the current line.
    pub fn token(&mut self, token: impl fmt::Display) -> fmt::Result {
        write!(self.writer, " {}", token)
    }

    /// Terminates the current line with a semicolon.
    pub fn end(&mut self) -> fmt::Result {
        self.writer.write_str(";\n")
    }

    /// Writes a complete line holding a single semicolon-terminated item.
    pub fn item(&mut self, item: impl fmt::Display) -> fmt::Result {
        self.write_indent()?;
        writeln!(self.writer, "{};", item)
    }

    /// Writes a braced block.
    ///
    /// Opens the brace at the end of the current line, runs `op` one level
    /// deeper and closes the block with `};` at the original depth.
    pub fn block(
        &mut self,
        op: impl FnOnce(&mut Self) -> fmt::Result,
    ) -> fmt::Result {
        self.writer.write_str(" {\n")?;
        self.depth += 1;
        let res = op(self);
        self.depth -= 1;
        res?;
        self.write_indent()?;
        self.writer.write_str("};\n")
    }
}

//============ Tests =========================================================
