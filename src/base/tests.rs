use crate::addr::split::split_host_port;
use crate::base::neterror::NetError;
use std::error::Error as _;
use std::io;
use std::time::Duration;

#[test]
fn test_no_address_message() {
    assert_eq!(NetError::NoAddress.to_string(), "no address specified");
    assert!(NetError::NoAddress.source().is_none());
}

#[test]
fn test_malformed_address_is_transparent() {
    let addr_err = split_host_port("localhost").unwrap_err();
    let err = NetError::from(addr_err.clone());
    assert_eq!(err.to_string(), addr_err.to_string());
    assert_eq!(err.to_string(), "address localhost: missing port in address");
    assert!(err.is_input_error());
}

#[test]
fn test_lookup_failed_wraps_cause() {
    let cause = NetError::dns_failed(
        "127.0.0.1.1",
        io::Error::new(io::ErrorKind::NotFound, "no such host"),
    );
    let err = NetError::lookup_failed(cause);

    assert_eq!(
        err.to_string(),
        "lookup failed for IP address: lookup 127.0.0.1.1: no such host"
    );
    assert!(!err.is_input_error());

    let source = err.source().expect("cause is exposed as source");
    assert_eq!(source.to_string(), "lookup 127.0.0.1.1: no such host");
    assert!(matches!(
        err.lookup_cause(),
        Some(NetError::NameNotResolvedFor { .. })
    ));
}

#[test]
fn test_timeout_message() {
    let err = NetError::lookup_failed(NetError::LookupTimedOut {
        domain: "slow.example".into(),
        timeout: Duration::from_millis(50),
    });
    assert_eq!(
        err.to_string(),
        "lookup failed for IP address: lookup slow.example: timed out after 50ms"
    );
}

#[test]
fn test_lookup_cause_only_for_lookup_failures() {
    assert!(NetError::NoAddress.lookup_cause().is_none());
    assert!(NetError::no_addresses_for("x").lookup_cause().is_none());
}
