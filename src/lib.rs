//! Writing BIND configuration and zone files.
//!
//! This crate provides building blocks for generating the configuration
//! of the ISC BIND name server, `named.conf`, as well as the zone files it
//! serves. Everything is write-only: configurations and zones are built in
//! memory and then written to a file. Existing files are never read.
//!
//! # Modules
//!
//! * [conf] contains the generic model of ISC configuration files made of
//!   statements and clauses,
//! * [bind] builds on it with types for the most common parts of a BIND
//!   configuration such as ACLs, views, and zones,
//! * [zonefile] contains types for assembling the records of a zone and
//!   writing them as a zone file,
//! * [iana] has the DNS classes and record types used by zone files, and
//! * [net] checks IP addresses given as text.
//!
//! Nothing checks that the generated files are accepted by BIND. Use the
//! `named-checkconf(8)` and `named-checkzone(8)` tools for that.
//!
//! # Reference of Feature Flags
//!
//! * `serde`: Enables serde serialization for a number of basic types.
//! * `logging`: Adds the `logging` module with a helper for installing a
//!   `tracing` subscriber, mostly useful for the demo programs.
//!
//! Events are always emitted through the [tracing] crate. Without a
//! subscriber, they are simply dropped.
//!
//! [tracing]: https://docs.rs/tracing
#![allow(renamed_and_removed_lints)]
#![allow(clippy::unknown_clippy_lints)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[macro_use]
mod macros;

pub mod bind;
pub mod conf;
pub mod iana;
#[cfg(feature = "logging")]
pub mod logging;
pub mod net;
pub mod zonefile;
