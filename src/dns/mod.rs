//! DNS Resolution Module
//!
//! Provides the pluggable lookup capability used by the address resolver:
//! - System resolver (getaddrinfo via thread pool), the default
//! - Async hickory-dns resolver (DoH/DoT capable)
//! - Hostname-to-IP override mechanism
//!
//! # Example
//!
//! ```rust,ignore
//! use dialaddr::dns::{GaiResolver, Name, Resolve};
//!
//! let resolver = GaiResolver::new();
//! for ip in resolver.resolve(Name::new("example.com")).await? {
//!     println!("Resolved: {}", ip);
//! }
//! ```

mod gai;
mod hickory;
mod resolve;

pub use gai::GaiResolver;
pub use hickory::HickoryResolver;
pub use resolve::{Addrs, DnsResolverWithOverrides, Name, Resolve, Resolving};
