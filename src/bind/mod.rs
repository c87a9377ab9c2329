//! BIND’s `named.conf`.
//!
//! The types in this module are specialized versions of the generic
//! [`Clause`] and [`Statement`] for the parts of a BIND configuration
//! that are used most often. They take care of the correct syntax of the
//! statements they manage and make sure that statements that can appear
//! only once are replaced rather than repeated.
//!
//! All of them can be turned into an [`Element`], and the clause types
//! implement [`Container`], so anything not covered here can still be
//! added by hand.
//!
//! ```
//! use bindconf::bind::{Acl, BindConf, View, Zone, ZoneType};
//! use bindconf::conf::Container;
//!
//! let mut conf = BindConf::new();
//! conf.add_acl(Acl::new("internal", ["192.0.2.0/24"]));
//!
//! let mut view = View::new("internal");
//! view.set_match_destinations(["internal"]);
//! view.add_zone(
//!     Zone::new("example.com", ZoneType::Master, "example.com.hosts")
//! );
//! conf.add_view(view);
//!
//! assert!(conf.to_string().starts_with("acl \"internal\" {\n"));
//! ```
//!
//! Ordering is not checked: ACLs and named masters lists must be added
//! before anything refers to them. Neither is it checked whether a
//! statement is allowed in the place it is added. Running
//! `named-checkconf(8)` on the result is a good idea.
//!
//! [`Clause`]: crate::conf::Clause
//! [`Statement`]: crate::conf::Statement
//! [`Element`]: crate::conf::Element
//! [`Container`]: crate::conf::Container

/// Implements the common traits for a newtype around a clause.
///
/// The type needs to have a single field `clause` of type `Clause`.
macro_rules! clause_type {
    ( $target:ident ) => {
        impl $target {
            /// Sets the comment preceding the clause.
            #[must_use]
            pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
                self.clause = self.clause.with_comment(comment);
                self
            }

            /// Returns the comment preceding the clause, if any.
            pub fn comment(&self) -> Option<&str> {
                self.clause.comment()
            }

            /// Replaces the comment preceding the clause.
            pub fn set_comment(&mut self, comment: impl Into<String>) {
                self.clause.set_comment(Some(comment.into()))
            }

            /// Returns a reference to the underlying clause.
            pub fn as_clause(&self) -> &$crate::conf::Clause {
                &self.clause
            }

            /// Converts the value into the underlying clause.
            pub fn into_clause(self) -> $crate::conf::Clause {
                self.clause
            }
        }

        impl $crate::conf::Container for $target {
            fn elements(&self) -> &[$crate::conf::Element] {
                $crate::conf::Container::elements(&self.clause)
            }

            fn elements_mut(&mut self) -> &mut Vec<$crate::conf::Element> {
                $crate::conf::Container::elements_mut(&mut self.clause)
            }
        }

        impl From<$target> for $crate::conf::Element {
            fn from(src: $target) -> Self {
                src.clause.into()
            }
        }

        impl $crate::conf::ConfFmt for $target {
            fn fmt_conf<W: core::fmt::Write>(
                &self,
                w: &mut $crate::conf::ConfWriter<W>,
            ) -> core::fmt::Result {
                $crate::conf::ConfFmt::fmt_conf(&self.clause, w)
            }
        }

        impl core::fmt::Display for $target {
            fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.clause, f)
            }
        }
    };
}

pub use self::acl::Acl;
pub use self::config::BindConf;
pub use self::masters::{Masters, MastersList, NamedMasters};
pub use self::options::Options;
pub use self::source::SourceAddresses;
pub use self::view::View;
pub use self::zone::{NotifyMode, Zone, ZoneType};

mod acl;
mod config;
mod masters;
mod options;
mod source;
mod view;
mod zone;

//------------ Helper Functions ----------------------------------------------

/// Returns the text in double quotes.
fn quoted(text: impl core::fmt::Display) -> String {
    format!("\"{}\"", text)
}

/// Returns an address with an optional port as configuration tokens.
fn addr_tokens(addr: std::net::IpAddr, port: Option<u16>) -> Vec<String> {
    let mut res = vec![addr.to_string()];
    if let Some(port) = port {
        res.push("port".into());
        res.push(port.to_string());
    }
    res
}
