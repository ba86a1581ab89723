//! Address resolution and IP family classification.
//!
//! - [`resolve_addr`] / [`AddrResolver`]: `host:port` to a dialable `ip:port`
//! - [`split_host_port`]: the `host:port` grammar
//! - [`all_ipv4`], [`all_ipv6`], [`global_unicast_ip`]: list classifiers

pub mod config;
pub mod family;
pub mod resolver;
pub mod split;

pub use config::{FamilyPreference, ResolverConfig};
pub use family::{all_ipv4, all_ipv6, global_unicast_ip, is_global_unicast};
pub use resolver::{format_addr, resolve_addr, select_addr, AddrResolver};
pub use split::{split_host_port, AddrError};
