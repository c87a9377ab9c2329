use std::fs;
use std::net::IpAddr;
use std::str::FromStr;

use rstest::{fixture, rstest};
use tempfile::TempDir;

use bindconf::iana::{Class, Rtype};
use bindconf::zonefile::{
    reverse_name, ForwardZone, Mx, Record, ReverseZone, Serial,
    SerialPolicy, Soa, TimeValue,
};

#[fixture]
fn out_dir() -> TempDir {
    tempfile::tempdir().unwrap()
}

#[rstest]
fn forward_zone_file(out_dir: TempDir) {
    let mut zone = ForwardZone::new("example.com");
    zone.add_record(
        Soa::new("ns1", "hostmaster@example.com", Serial(2024061500))
            .with_refresh(TimeValue::hours(6))
            .with_minimum(TimeValue::minutes(5)),
    );
    zone.add_ns("ns1");
    zone.add_mx(Mx::DEFAULT_PREFERENCE, "mail1");
    zone.add_a("192.168.1.1")
        .unwrap()
        .set_owner("ns1")
        .set_comment("primary name server");
    zone.add_txt("v=spf1 mx ~all").set_ttl(TimeValue::days(1));

    let path = out_dir.path().join("example.com.zone");
    zone.write_file(&path).unwrap();
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "$ORIGIN example.com.\n\
         $TTL 1h\n\
         @ IN SOA ns1 hostmaster.example.com. \
         (2024061500 6h 1h 2d 5m)\n\
         @ IN NS ns1\n\
         @ IN MX 10 mail1\n\
         ; primary name server\n\
         ns1 IN A 192.168.1.1\n\
         @ 1d IN TXT \"v=spf1 mx ~all\"\n"
    );
}

#[rstest]
fn reverse_zone_file(out_dir: TempDir) {
    let mut zone = ReverseZone::new("1.168.192.in-addr.arpa")
        .with_ttl(3600u32)
        .with_serial_policy(SerialPolicy::Epoch);
    zone.add_soa("ns1.example.com.", "hostmaster@example.com");
    zone.add_ptr("192.168.1.1", "ns1.example.com.").unwrap();

    let path = out_dir.path().join("revzone");
    zone.write_file(&path).unwrap();
    let text = fs::read_to_string(&path).unwrap();
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines[0], "$ORIGIN 1.168.192.in-addr.arpa.");
    assert_eq!(lines[1], "$TTL 3600");
    assert!(lines[2].starts_with("@ IN SOA ns1.example.com. "));
    assert_eq!(
        lines[3],
        "1.1.168.192.in-addr.arpa. IN PTR ns1.example.com."
    );
    assert_eq!(lines.len(), 4);
}

#[rstest]
#[case("192.168.1.1", "1.1.168.192.in-addr.arpa.")]
#[case("10.0.0.254", "254.0.0.10.in-addr.arpa.")]
#[case(
    "2001:db8::1",
    "1.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.8.b.d.0.1.0.0.2.ip6.arpa."
)]
#[case(
    "::ffff:c000:0201",
    "1.0.2.0.0.0.0.c.f.f.f.f.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.ip6.arpa."
)]
fn reverse_names(#[case] addr: &str, #[case] name: &str) {
    assert_eq!(reverse_name(IpAddr::from_str(addr).unwrap()), name);
}

#[rstest]
#[case("192.168.1.1", true)]
#[case("2001:db8::1", false)]
#[case("192.168.1", false)]
#[case("ns1", false)]
fn a_records_need_ipv4(#[case] addr: &str, #[case] ok: bool) {
    let mut zone = ForwardZone::new("example.com");
    assert_eq!(zone.add_a(addr).is_ok(), ok);
    assert_eq!(zone.records().len(), usize::from(ok));
}

#[test]
fn record_fields() {
    let mut zone = ForwardZone::new("example.com");
    let record = zone.add_cname("mailserver");
    record.set_owner("mail").set_class(Class::In);
    assert_eq!(record.data().rtype(), Rtype::Cname);
    assert_eq!(record.ttl(), None);
    assert_eq!(zone.records()[0], {
        let mut expected = Record::new(bindconf::zonefile::Cname::new(
            "mailserver",
        ));
        expected.set_owner("mail");
        expected
    });
}

#[cfg(feature = "serde")]
#[test]
fn serialize_record() {
    let mut record = Record::new(Mx::new(20, "mail2"));
    record.set_ttl(600u32);
    let json = serde_json::to_string(&record).unwrap();
    let back: Record = serde_json::from_str(&json).unwrap();
    assert_eq!(back, record);
}
