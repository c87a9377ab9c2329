//! Complete BIND configurations.

use super::acl::Acl;
use super::masters::NamedMasters;
use super::options::Options;
use super::view::View;
use super::zone::Zone;
use crate::conf::{ConfFmt, ConfWriter, Configuration, Container, Element};
use core::fmt;
use std::io;
use std::path::Path;

//------------ BindConf ------------------------------------------------------

/// The content of a `named.conf` file.
///
/// Top-level elements are written in the order they were added. The
/// typed methods only accept the matching BIND type, so adding a view via
/// [`add_acl`][Self::add_acl] doesn’t compile. Anything else can still be
/// added through the [`Container`] trait.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct BindConf {
    conf: Configuration,
}

impl BindConf {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_acl(&mut self, acl: Acl) {
        self.add_element(acl)
    }

    pub fn add_named_masters(&mut self, masters: NamedMasters) {
        self.add_element(masters)
    }

    pub fn add_view(&mut self, view: View) {
        self.add_element(view)
    }

    /// Adds a zone outside of any view.
    ///
    /// BIND refuses configurations that mix views and top-level zones.
    pub fn add_zone(&mut self, zone: Zone) {
        self.add_element(zone)
    }

    /// Sets the options clause, replacing an existing one.
    pub fn set_options(&mut self, options: Options) {
        self.set_element(options)
    }

    /// Writes the configuration to the file at `path`.
    ///
    /// See [`Configuration::write_file`] for details.
    pub fn write_file(&self, path: impl AsRef<Path>) -> io::Result<()> {
        self.conf.write_file(path)
    }

    /// Returns a reference to the generic configuration.
    pub fn as_configuration(&self) -> &Configuration {
        &self.conf
    }
}

//--- From

impl From<Configuration> for BindConf {
    fn from(conf: Configuration) -> Self {
        BindConf { conf }
    }
}

impl From<BindConf> for Configuration {
    fn from(conf: BindConf) -> Self {
        conf.conf
    }
}

//--- Container

impl Container for BindConf {
    fn elements(&self) -> &[Element] {
        self.conf.elements()
    }

    fn elements_mut(&mut self) -> &mut Vec<Element> {
        self.conf.elements_mut()
    }
}

//--- ConfFmt and Display

impl ConfFmt for BindConf {
    fn fmt_conf<W: fmt::Write>(&self, w: &mut ConfWriter<W>) -> fmt::Result {
        self.conf.fmt_conf(w)
    }
}

impl fmt::Display for BindConf {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.conf.fmt(f)
    }
}

//============ Tests =========================================================

#[cfg(test)]
mod test {
    use super::*;
    use crate::bind::{MastersList, SourceAddresses, ZoneType};
    use crate::conf::Statement;
    use std::fs;

    #[test]
    fn ordering() {
        let mut conf = BindConf::new();
        conf.add_acl(Acl::new("example_acl", ["1.1.1.1", "2.2.2.2"]));
        let mut masters = NamedMasters::new("example_masters", None);
        masters.add_master("192.0.2.1", None, None).unwrap();
        conf.add_named_masters(masters);
        conf.add_view(View::new("example_view"));
        let labels: Vec<_> =
            conf.elements().iter().map(Element::label).collect();
        assert_eq!(labels, ["acl", "masters", "view"]);
    }

    #[test]
    fn options_singleton() {
        let mut conf = BindConf::new();
        conf.add_zone(Zone::new("example.com", ZoneType::Master, "db"));
        let mut options = Options::new();
        options.set_directory("/var/named");
        conf.set_options(options);
        let mut options = Options::new();
        options.set_notify_source("192.0.2.53", None).unwrap();
        conf.set_options(options);

        let found = conf.get_elements("options");
        assert_eq!(found.len(), 1);
        let options = found[0].as_clause().unwrap();
        assert_eq!(options.elements()[0].label(), "notify-source");
    }

    #[test]
    fn generic_elements() {
        let mut conf = BindConf::new();
        conf.add_element(
            Statement::new("include").with_value(["\"/etc/rndc.key\""]),
        );
        assert_eq!(conf.to_string(), "include \"/etc/rndc.key\";\n");
        assert_eq!(
            Configuration::from(conf.clone()).to_string(),
            conf.to_string()
        );
    }

    #[test]
    fn write_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("named.conf");
        let mut conf = BindConf::new();
        conf.add_acl(Acl::new("example_acl", ["1.1.1.1"]));
        conf.write_file(&path).unwrap();
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "acl \"example_acl\" {\n\t1.1.1.1;\n};\n"
        );
    }
}
