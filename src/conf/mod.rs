//! The generic ISC configuration model.
//!
//! Configuration files of ISC software such as BIND’s `named.conf` consist
//! of two kinds of elements. A [`Statement`] is a single directive ending
//! in a semicolon, possibly followed by a list of items in braces. A
//! [`Clause`] is a named block in braces that contains further statements
//! and clauses. Both can be preceded by a comment. The top-level list of
//! elements is a [`Configuration`].
//!
//! Trees are built from the leaves up: create the statements and clauses,
//! add them to their parent via [`Container::add_element`] and finally
//! write the [`Configuration`] to a file:
//!
//! ```no_run
//! use bindconf::conf::{Clause, Configuration, Container, Statement};
//!
//! let mut zone = Clause::new("zone", ["\"example.com.\"", "IN"]);
//! zone.add_element(Statement::new("type").with_value(["master"]));
//! zone.add_element(
//!     Statement::new("allow-update").with_stanza(["none"])
//! );
//!
//! let mut conf = Configuration::new();
//! conf.add_element(zone);
//! conf.write_file("named.conf").unwrap();
//! ```
//!
//! Nothing is checked beyond the shape of the tree. In particular, no
//! attempt is made to verify that the result is a valid configuration.

pub use self::clause::Clause;
pub use self::config::Configuration;
pub use self::container::Container;
pub use self::element::{Element, EmptyLabel};
pub use self::fmt::{ConfDisplay, ConfFmt, ConfWriter};
pub use self::statement::Statement;

mod clause;
mod config;
mod container;
mod element;
pub mod fmt;
mod statement;
