//! Source addresses for outgoing notifies and transfers.

use super::addr_tokens;
use crate::conf::{Container, Statement};
use crate::net::{parse_addr, AddrError, Family};

//------------ SourceAddresses -----------------------------------------------

/// Clauses that can set the source address of outgoing requests.
///
/// This is implemented by [`Options`], [`View`], and [`Zone`]. The
/// statement label depends on the address family: an IPv4 address sets
/// `notify-source` or `transfer-source`, an IPv6 address sets
/// `notify-source-v6` or `transfer-source-v6`. Setting either replaces a
/// previous statement of the same label.
///
/// [`Options`]: super::Options
/// [`View`]: super::View
/// [`Zone`]: super::Zone
pub trait SourceAddresses: Container {
    /// Sets the source address of NOTIFY messages.
    fn set_notify_source(
        &mut self,
        addr: &str,
        port: Option<u16>,
    ) -> Result<(), AddrError> {
        let stmt =
            source_statement("notify-source", "notify-source-v6", addr, port)?;
        self.set_element(stmt);
        Ok(())
    }

    /// Sets the source address of zone transfer requests.
    fn set_transfer_source(
        &mut self,
        addr: &str,
        port: Option<u16>,
    ) -> Result<(), AddrError> {
        let stmt = source_statement(
            "transfer-source",
            "transfer-source-v6",
            addr,
            port,
        )?;
        self.set_element(stmt);
        Ok(())
    }
}

fn source_statement(
    v4_label: &str,
    v6_label: &str,
    addr: &str,
    port: Option<u16>,
) -> Result<Statement, AddrError> {
    let addr = parse_addr(addr)?;
    let label = match Family::of(addr) {
        Family::V4 => v4_label,
        Family::V6 => v6_label,
    };
    Ok(Statement::new(label).with_value(addr_tokens(addr, port)))
}

//============ Tests =========================================================

#[cfg(test)]
mod test {
    use super::*;
    use crate::bind::{Options, View};
    use crate::conf::Element;

    fn labels(container: &impl Container) -> Vec<&str> {
        container.elements().iter().map(Element::label).collect()
    }

    #[test]
    fn by_family() {
        let mut options = Options::new();
        options.set_notify_source("192.0.2.1", None).unwrap();
        options.set_notify_source("2001:db8::1", Some(5353)).unwrap();
        options.set_transfer_source("192.0.2.2", Some(53)).unwrap();
        assert_eq!(
            labels(&options),
            ["notify-source", "notify-source-v6", "transfer-source"]
        );
        assert_eq!(
            options.to_string(),
            "options {\n\
             \tnotify-source 192.0.2.1;\n\
             \tnotify-source-v6 2001:db8::1 port 5353;\n\
             \ttransfer-source 192.0.2.2 port 53;\n\
             };\n"
        );
    }

    #[test]
    fn replaces() {
        let mut view = View::new("example_view");
        view.set_transfer_source("2001:db8::1", None).unwrap();
        view.set_transfer_source("2001:db8::2", None).unwrap();
        let sources = view.get_elements("transfer-source-v6");
        assert_eq!(sources.len(), 1);
        assert_eq!(sources[0].as_statement().unwrap().value(), ["2001:db8::2"]);
    }

    #[test]
    fn invalid_keeps_clause() {
        let mut view = View::new("example_view");
        view.set_notify_source("192.0.2.1", None).unwrap();
        let before = view.clone();
        assert!(view.set_notify_source("192.0.2.300", None).is_err());
        assert!(view.set_transfer_source("", Some(53)).is_err());
        assert_eq!(view, before);
    }
}
