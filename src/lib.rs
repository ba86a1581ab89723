//! # dialaddr
//!
//! Turns `host:port` strings into a single canonical `ip:port` suitable for
//! dialing, and classifies lists of address literals by IP family.
//!
//! ## Features
//!
//! - **Literal detection**: IPv4 and bracketed IPv6 hosts never hit DNS
//! - **Pluggable lookup**: any [`dns::Resolve`] implementation, passed explicitly
//! - **Family selection**: first IPv4 answer wins, else first IPv6 (configurable)
//! - **Stable errors**: splitter messages surface verbatim, lookup failures keep their cause
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use dialaddr::addr::resolve_addr;
//! use dialaddr::dns::GaiResolver;
//!
//! #[tokio::main]
//! async fn main() {
//!     let addr = resolve_addr("localhost:9080", &GaiResolver::new()).await.unwrap();
//!     println!("dial {}", addr);
//! }
//! ```
//!
//! ## Modules
//!
//! - [`addr`] - Resolution, `host:port` splitting, and family classifiers
//! - [`base`] - Error definitions and context helpers
//! - [`dns`] - Lookup strategies (system, hickory-dns, overrides)

pub mod addr;
pub mod base;
pub mod dns;
