//! System DNS resolver using getaddrinfo.
//!
//! This resolver uses the operating system's native DNS resolution via
//! `getaddrinfo`, executed in a thread pool to avoid blocking the async runtime.
//! It is the default lookup used by [`AddrResolver::system`](crate::addr::AddrResolver::system).
//!
//! # When to Use
//!
//! - When you need to respect system DNS configuration (/etc/resolv.conf, /etc/hosts)
//! - When DoH/DoT is not required

use super::{Addrs, Name, Resolve, Resolving};
use crate::base::{context::IoResultExt, neterror::NetError};
use std::{
    io,
    net::{IpAddr, ToSocketAddrs},
};
use tokio::task::JoinError;

/// System DNS resolver using `getaddrinfo` in a thread pool.
///
/// This resolver wraps the standard library's `ToSocketAddrs` trait and
/// executes resolution in `tokio::task::spawn_blocking` to avoid blocking
/// the async runtime. Answer order is the order `getaddrinfo` returned.
#[derive(Clone, Debug, Default)]
pub struct GaiResolver;

impl GaiResolver {
    /// Creates a new `GaiResolver`.
    pub fn new() -> Self {
        Self
    }
}

impl Resolve for GaiResolver {
    fn resolve(&self, name: Name) -> Resolving {
        Box::pin(async move {
            let host = name.as_str().to_string();
            let domain = host.clone();

            let result = tokio::task::spawn_blocking(move || {
                tracing::debug!(host = %host, "resolving via getaddrinfo");
                (host.as_str(), 0u16)
                    .to_socket_addrs()
                    .map(|iter| iter.map(|sa| sa.ip()).collect::<Vec<IpAddr>>())
            })
            .await;

            let addrs = collect_answer(&domain, result)?;
            tracing::debug!(domain = %domain, count = addrs.len(), "DNS resolution complete");
            Ok(Box::new(addrs.into_iter()) as Addrs)
        })
    }
}

/// Turns the blocking task's outcome into an answer for `domain`. A task
/// that panicked or was cancelled is reported as a failed lookup of `domain`.
fn collect_answer(
    domain: &str,
    result: Result<io::Result<Vec<IpAddr>>, JoinError>,
) -> Result<Vec<IpAddr>, NetError> {
    let addrs = result
        .map_err(|e| {
            tracing::error!(domain = %domain, error = %e, "DNS resolution task failed");
            NetError::dns_failed(domain, io::Error::from(e))
        })?
        .dns_context(domain)
        .inspect_err(|e| {
            tracing::debug!(domain = %domain, error = %e, "DNS resolution failed");
        })?;

    if addrs.is_empty() {
        return Err(NetError::no_addresses_for(domain));
    }
    Ok(addrs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_gai_resolver_localhost() {
        let resolver = GaiResolver::new();
        let result = resolver.resolve(Name::new("localhost")).await;

        // localhost should always resolve
        assert!(result.is_ok());
        let addrs: Vec<_> = result.unwrap().collect();
        assert!(!addrs.is_empty());
        assert!(addrs.iter().all(|ip| ip.is_loopback()));
    }

    #[tokio::test]
    async fn test_gai_resolver_literal() {
        let resolver = GaiResolver::new();
        let addrs: Vec<_> = resolver
            .resolve(Name::new("127.0.0.1"))
            .await
            .unwrap()
            .collect();
        assert_eq!(addrs, vec!["127.0.0.1".parse::<IpAddr>().unwrap()]);
    }

    #[tokio::test]
    async fn test_gai_resolver_invalid_domain() {
        let resolver = GaiResolver::new();
        let result = resolver
            .resolve(Name::new("this-domain-definitely-does-not-exist.invalid"))
            .await;

        match result {
            Err(NetError::NameNotResolvedFor { domain, .. }) => {
                assert_eq!(domain, "this-domain-definitely-does-not-exist.invalid");
            }
            Err(NetError::NoAddressesFor { .. }) => {}
            Err(other) => panic!("Unexpected error type: {other}"),
            Ok(_) => panic!("Expected lookup of .invalid to fail"),
        }
    }

    #[tokio::test]
    async fn test_panicked_task_keeps_domain() {
        let join_err = tokio::spawn(async { panic!("getaddrinfo blew up") })
            .await
            .unwrap_err();

        let err = collect_answer("db.local", Err(join_err)).unwrap_err();
        match err {
            NetError::NameNotResolvedFor { ref domain, .. } => assert_eq!(domain, "db.local"),
            other => panic!("Unexpected error type: {other}"),
        }
        assert!(err.to_string().starts_with("lookup db.local: "));
    }

    #[test]
    fn test_empty_answer_keeps_domain() {
        let err = collect_answer("db.local", Ok(Ok(Vec::new()))).unwrap_err();
        assert!(matches!(err, NetError::NoAddressesFor { ref domain } if domain == "db.local"));
    }
}
