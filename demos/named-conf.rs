//! Writes an example named.conf.
//!
//! Run with `RUST_LOG=bindconf=debug` to see what is happening.

use std::env;
use std::path::PathBuf;
use std::process::exit;

use bindconf::bind::{
    Acl, BindConf, MastersList, NamedMasters, NotifyMode, Options,
    SourceAddresses, View, Zone, ZoneType,
};
use bindconf::logging::init_logging;

fn main() {
    init_logging();

    let mut args = env::args();
    let prog_name = args.next().unwrap_or_else(|| "named-conf".into());
    let dir = match args.next() {
        Some(dir) => PathBuf::from(dir),
        None => {
            eprintln!("Usage: {} <output-dir>", prog_name);
            exit(2);
        }
    };

    let mut conf = BindConf::new();

    let mut options = Options::new();
    options.set_directory("/var/named");
    if let Err(err) = options.set_transfer_source("192.0.2.53", None) {
        eprintln!("{}", err);
        exit(1);
    }
    conf.set_options(options);

    conf.add_acl(Acl::new("example_acl", ["1.1.1.1", "2.2.2.2"]));

    let mut masters = NamedMasters::new("example_masters", None)
        .with_comment("Primaries for all secondary zones.");
    for addr in ["192.0.2.1", "192.0.2.2"] {
        if let Err(err) = masters.add_master(addr, None, None) {
            eprintln!("{}", err);
            exit(1);
        }
    }
    conf.add_named_masters(masters);

    let mut view = View::new("example_view");
    view.set_match_destinations(["1.1.1.1", "2.2.2.2"]);
    if let Err(err) = view.set_notify_source("3.3.3.3", None) {
        eprintln!("{}", err);
        exit(1);
    }
    view.set_comment("view comment");

    let mut primary =
        Zone::new("example.com", ZoneType::Master, "master/example.com.hosts")
            .with_comment("This is a comment");
    primary.set_allow_update(["none"]);
    primary.set_notify(NotifyMode::Explicit);
    if let Err(err) = primary.add_also_notify("192.0.2.10", None) {
        eprintln!("{}", err);
        exit(1);
    }
    view.add_zone(primary);

    let mut secondary =
        Zone::new("example.net", ZoneType::Slave, "slave/example.net.hosts");
    if let Err(err) = secondary.add_master("192.0.2.1", Some(5353), None) {
        eprintln!("{}", err);
        exit(1);
    }
    view.add_zone(secondary);

    conf.add_view(view);

    let path = dir.join("named.conf");
    if let Err(err) = conf.write_file(&path) {
        eprintln!("Failed to write {}: {}", path.display(), err);
        exit(1);
    }
    println!("Wrote {}.", path.display());
}
