//! IP family classification over lists of address literals.
//!
//! Every predicate parses with [`IpAddr::from_str`], so a literal is
//! classified the same way by each of them.

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

fn parse(addr: &str) -> Option<IpAddr> {
    IpAddr::from_str(addr).ok()
}

/// Returns true unless some element parses as an IPv4 literal.
///
/// Strings that are not IP literals at all count as IPv6 here. This is a
/// permissive default, not validation: `all_ipv6(&["invalidip"])` is true.
pub fn all_ipv6<S: AsRef<str>>(addrs: &[S]) -> bool {
    !addrs
        .iter()
        .any(|addr| matches!(parse(addr.as_ref()), Some(IpAddr::V4(_))))
}

/// Returns true if every element parses as an IPv4 literal.
///
/// Unlike [`all_ipv6`], an unparseable element disqualifies the list.
pub fn all_ipv4<S: AsRef<str>>(addrs: &[S]) -> bool {
    addrs
        .iter()
        .all(|addr| matches!(parse(addr.as_ref()), Some(IpAddr::V4(_))))
}

/// Returns the first element that is a global unicast address, in input order.
///
/// `None` when the list is empty or nothing qualifies.
pub fn global_unicast_ip<S: AsRef<str>>(addrs: &[S]) -> Option<&str> {
    addrs
        .iter()
        .map(|addr| addr.as_ref())
        .find(|addr| parse(addr).is_some_and(is_global_unicast))
}

/// Global unicast: anything except unspecified, loopback, link-local,
/// multicast and the IPv4 limited broadcast address. Private ranges qualify.
/// IPv4-mapped IPv6 addresses are judged as IPv4.
pub fn is_global_unicast(ip: IpAddr) -> bool {
    match ip.to_canonical() {
        IpAddr::V4(v4) => is_global_unicast_v4(v4),
        IpAddr::V6(v6) => is_global_unicast_v6(v6),
    }
}

fn is_global_unicast_v4(ip: Ipv4Addr) -> bool {
    !(ip.is_unspecified()
        || ip.is_loopback()
        || ip.is_link_local()
        || ip.is_multicast()
        || ip.is_broadcast())
}

fn is_global_unicast_v6(ip: Ipv6Addr) -> bool {
    // fe80::/10
    let link_local = (ip.segments()[0] & 0xffc0) == 0xfe80;
    !(ip.is_unspecified() || ip.is_loopback() || ip.is_multicast() || link_local)
}
