//! Writes a forward and two reverse example zone files.
//!
//! Run with `RUST_LOG=bindconf=debug` to see what is happening.

use std::env;
use std::path::{Path, PathBuf};
use std::process::exit;

use bindconf::net::AddrError;
use bindconf::zonefile::{ForwardZone, Mx, ReverseZone, TimeValue};
use bindconf::logging::init_logging;

fn forward() -> Result<ForwardZone, AddrError> {
    let mut zone = ForwardZone::new("example.com");
    zone.add_soa("ns1", "hostmaster@example.com");
    zone.add_ns("ns1");
    zone.add_ns("ns2");
    zone.add_mx(Mx::DEFAULT_PREFERENCE, "mail1");
    zone.add_mx(20, "mail2").set_ttl(600u32);
    zone.add_a("192.168.1.1")?.set_owner("ns1");
    zone.add_aaaa("2001:db8::1")?.set_owner("ns1");
    zone.add_txt("v=spf1 mx ~all");
    zone.add_cname("mailserver").set_owner("mail");
    Ok(zone)
}

fn reverse_v4() -> Result<ReverseZone, AddrError> {
    let mut zone = ReverseZone::new("1.168.192.in-addr.arpa")
        .with_ttl(TimeValue::days(1));
    zone.add_soa("ns1.example.com.", "hostmaster@example.com");
    zone.add_ns("ns1.example.com.");
    zone.add_ptr("192.168.1.1", "ns1.example.com.")?;
    Ok(zone)
}

fn reverse_v6() -> Result<ReverseZone, AddrError> {
    let mut zone = ReverseZone::new("8.b.d.0.1.0.0.2.ip6.arpa");
    zone.add_soa("ns1.example.com.", "hostmaster@example.com");
    zone.add_ns("ns1.example.com.");
    zone.add_ptr("2001:db8::1", "ns1.example.com.")?;
    Ok(zone)
}

fn write<K>(
    dir: &Path,
    name: &str,
    zone: Result<bindconf::zonefile::Zone<K>, AddrError>,
) {
    let zone = match zone {
        Ok(zone) => zone,
        Err(err) => {
            eprintln!("Failed to build {}: {}", name, err);
            exit(1);
        }
    };
    let path = dir.join(name);
    if let Err(err) = zone.write_file(&path) {
        eprintln!("Failed to write {}: {}", path.display(), err);
        exit(1);
    }
    println!("Wrote {}.", path.display());
}

fn main() {
    init_logging();

    let mut args = env::args();
    let prog_name = args.next().unwrap_or_else(|| "zonefiles".into());
    let dir = match args.next() {
        Some(dir) => PathBuf::from(dir),
        None => {
            eprintln!("Usage: {} <output-dir>", prog_name);
            exit(2);
        }
    };

    write(&dir, "fwdzone", forward());
    write(&dir, "revzone4", reverse_v4());
    write(&dir, "revzone6", reverse_v6());
}
