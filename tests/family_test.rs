//! IP family classifier tests.

use dialaddr::addr::{all_ipv4, all_ipv6, global_unicast_ip};

const V4: [&str; 3] = ["1.1.1.1", "127.0.0.1", "2.2.2.2"];
const V6: [&str; 3] = ["1111:2222::1", "::1", "2222:3333::1"];
const MIXED: [&str; 5] = ["1111:2222::1", "::1", "127.0.0.1", "2.2.2.2", "2222:3333::1"];

#[test]
fn test_all_ipv6() {
    assert!(!all_ipv6(&V4));
    assert!(all_ipv6(&V6));
    assert!(!all_ipv6(&MIXED));
    assert!(!all_ipv6(&["1.1.1.1", "2222:3333::1"]));
    assert!(all_ipv6(&["invalidip"]));
}

#[test]
fn test_all_ipv4() {
    assert!(all_ipv4(&V4));
    assert!(!all_ipv4(&V6));
    assert!(!all_ipv4(&MIXED));
    assert!(!all_ipv4(&["invalidip"]));
}

#[test]
fn test_global_unicast_ip() {
    assert_eq!(global_unicast_ip(&["127.0.0.1", "1.1.1.1"]), Some("1.1.1.1"));
    assert_eq!(global_unicast_ip::<&str>(&[]), None);
    assert_eq!(global_unicast_ip(&["invalidip"]), None);
    assert_eq!(global_unicast_ip(&MIXED), Some("1111:2222::1"));
}

#[test]
fn test_classifiers_agree_on_each_literal() {
    for addr in V4.iter().chain(V6.iter()).chain(["bogus", "::ffff:8.8.8.8"].iter()) {
        let one = [*addr];
        // A single literal can never be both all-IPv4 and all-IPv6.
        assert!(!(all_ipv4(&one) && all_ipv6(&one)), "{addr}");
    }
}

#[test]
fn test_owned_strings() {
    let addrs: Vec<String> = V6.iter().map(|s| s.to_string()).collect();
    assert!(all_ipv6(&addrs));
    assert!(!all_ipv4(&addrs));
    assert_eq!(global_unicast_ip(&addrs), Some("1111:2222::1"));
}
