//! Lookup backed by hickory-dns.
//!
//! Fully async: no blocking thread per query, pooled connections to the
//! upstream servers, and DoH/DoT when the [`ResolverConfig`] asks for it.

use super::{Addrs, Name, Resolve, Resolving};
use crate::base::neterror::NetError;
use hickory_resolver::{
    config::{LookupIpStrategy, ResolverConfig},
    name_server::TokioConnectionProvider,
    TokioResolver,
};
use std::{
    io,
    net::IpAddr,
    sync::{Arc, LazyLock},
};

/// [`Resolve`] implementation over a [`TokioResolver`].
///
/// [`HickoryResolver::new`] hands out one process-wide instance built from
/// the system configuration; [`HickoryResolver::with_config`] builds a
/// private one. Either way the resolver always asks for both families and
/// leaves the choice to the address resolver.
#[derive(Debug, Clone)]
pub struct HickoryResolver {
    resolver: Arc<TokioResolver>,
}

impl HickoryResolver {
    /// Shared resolver using the system DNS configuration, or the hickory
    /// defaults when that cannot be read. Built on first use.
    pub fn new() -> Self {
        static SYSTEM: LazyLock<Arc<TokioResolver>> = LazyLock::new(|| Arc::new(build(None)));

        Self {
            resolver: Arc::clone(&SYSTEM),
        }
    }

    /// Private resolver talking to the name servers in `config`.
    pub fn with_config(config: ResolverConfig) -> Self {
        Self {
            resolver: Arc::new(build(Some(config))),
        }
    }
}

/// `None` reads the system configuration, falling back to hickory defaults.
fn build(config: Option<ResolverConfig>) -> TokioResolver {
    let mut builder = match config {
        Some(config) => {
            TokioResolver::builder_with_config(config, TokioConnectionProvider::default())
        }
        None => TokioResolver::builder_tokio().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "system DNS config unreadable, using hickory defaults");
            TokioResolver::builder_with_config(
                ResolverConfig::default(),
                TokioConnectionProvider::default(),
            )
        }),
    };
    builder.options_mut().ip_strategy = LookupIpStrategy::Ipv4AndIpv6;
    builder.build()
}

impl Default for HickoryResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl Resolve for HickoryResolver {
    fn resolve(&self, name: Name) -> Resolving {
        let resolver = Arc::clone(&self.resolver);
        Box::pin(async move {
            let host = name.as_str();
            tracing::debug!(host = %host, "hickory lookup");

            let answer = resolver.lookup_ip(host).await.map_err(|e| {
                tracing::debug!(host = %host, error = %e, "hickory lookup failed");
                NetError::dns_failed(host, io::Error::new(io::ErrorKind::NotFound, e.to_string()))
            })?;

            let addrs: Vec<IpAddr> = answer.iter().collect();
            if addrs.is_empty() {
                return Err(NetError::no_addresses_for(host));
            }

            tracing::debug!(host = %host, count = addrs.len(), "hickory lookup complete");
            Ok(Box::new(addrs.into_iter()) as Addrs)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::addr::resolve_addr;

    #[test]
    fn test_new_shares_system_instance() {
        let a = HickoryResolver::new();
        let b = HickoryResolver::default();
        assert!(Arc::ptr_eq(&a.resolver, &b.resolver));
    }

    #[test]
    fn test_with_config_is_private() {
        let shared = HickoryResolver::new();
        let private = HickoryResolver::with_config(ResolverConfig::cloudflare());
        assert!(!Arc::ptr_eq(&shared.resolver, &private.resolver));
    }

    #[tokio::test]
    async fn test_invalid_tld_is_lookup_failure() {
        let err = resolve_addr("no-such-host.invalid:443", &HickoryResolver::new())
            .await
            .unwrap_err();
        match err.lookup_cause() {
            Some(NetError::NameNotResolvedFor { domain, .. }) => {
                assert_eq!(domain, "no-such-host.invalid");
            }
            Some(NetError::NoAddressesFor { domain }) => {
                assert_eq!(domain, "no-such-host.invalid");
            }
            other => panic!("unexpected cause: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_localhost_resolves_to_loopback() {
        match resolve_addr("localhost:15012", &HickoryResolver::new()).await {
            Ok(addr) => assert!(addr == "127.0.0.1:15012" || addr == "[::1]:15012", "{addr}"),
            Err(e) => println!("skipping: hickory could not resolve localhost here: {e}"),
        }
    }
}
