//! `host:port` to dialable `ip:port` resolution.

use super::config::{FamilyPreference, ResolverConfig};
use super::split::split_host_port;
use crate::base::neterror::NetError;
use crate::dns::{GaiResolver, HickoryResolver, Name, Resolve};
use std::{fmt, net::IpAddr, sync::Arc, time::Duration};

/// Resolves `address` (`host:port` or `[ipv6]:port`) to a single `ip:port`
/// string, using `lookup` when the host is not an IP literal.
///
/// IP literals never reach the lookup. For DNS names the first IPv4 answer
/// is chosen, else the first IPv6 answer; IPv6 results are bracketed. An
/// empty port (`"host:"`) is carried through as-is.
///
/// Errors, in detection order:
/// - [`NetError::NoAddress`] for an empty string
/// - [`NetError::MalformedAddress`] when `host:port` cannot be split
/// - [`NetError::LookupFailed`] when the lookup errors or returns nothing
///
/// No timeout is applied; drop the future to cancel, or use
/// [`AddrResolver`] with [`ResolverConfig::lookup_timeout`].
///
/// # Example
///
/// ```rust,ignore
/// use dialaddr::addr::resolve_addr;
/// use dialaddr::dns::GaiResolver;
///
/// let addr = resolve_addr("localhost:9080", &GaiResolver::new()).await?;
/// assert!(addr == "127.0.0.1:9080" || addr == "[::1]:9080");
/// ```
pub async fn resolve_addr<R>(address: &str, lookup: &R) -> Result<String, NetError>
where
    R: Resolve + ?Sized,
{
    resolve_with(address, lookup, &ResolverConfig::default()).await
}

async fn resolve_with<R>(
    address: &str,
    lookup: &R,
    config: &ResolverConfig,
) -> Result<String, NetError>
where
    R: Resolve + ?Sized,
{
    if address.is_empty() {
        return Err(NetError::NoAddress);
    }

    let (host, port) = split_host_port(address)?;

    if let Ok(ip) = host.parse::<IpAddr>() {
        tracing::trace!(host = %host, "address is an IP literal, skipping lookup");
        return Ok(format_addr(ip, port));
    }

    tracing::debug!(host = %host, "looking up address");
    let addrs = lookup_host(lookup, host, config.lookup_timeout)
        .await
        .map_err(|e| {
            tracing::debug!(host = %host, error = %e, "address lookup failed");
            NetError::lookup_failed(e)
        })?;

    let ip = select_addr(addrs, config.family_preference)
        .ok_or_else(|| NetError::lookup_failed(NetError::no_addresses_for(host)))?;

    tracing::debug!(host = %host, ip = %ip, "finished address lookup");
    Ok(format_addr(ip, port))
}

async fn lookup_host<R>(
    lookup: &R,
    host: &str,
    timeout: Option<Duration>,
) -> Result<Vec<IpAddr>, NetError>
where
    R: Resolve + ?Sized,
{
    let resolving = lookup.resolve(Name::new(host));
    let addrs = match timeout {
        Some(timeout) => tokio::time::timeout(timeout, resolving)
            .await
            .map_err(|_| NetError::LookupTimedOut {
                domain: host.to_string(),
                timeout,
            })??,
        None => resolving.await?,
    };
    Ok(addrs.collect())
}

/// Picks one address from a lookup answer according to `preference`.
///
/// Answers are walked in order; the first address of the preferred family
/// wins, otherwise the first address of the other family. IPv4-mapped IPv6
/// answers are unmapped and treated as IPv4. Returns `None` for an empty
/// answer.
pub fn select_addr<I>(addrs: I, preference: FamilyPreference) -> Option<IpAddr>
where
    I: IntoIterator<Item = IpAddr>,
{
    let mut fallback = None;
    for ip in addrs.into_iter().map(|ip| ip.to_canonical()) {
        let preferred = match preference {
            FamilyPreference::PreferIpv4 => ip.is_ipv4(),
            FamilyPreference::PreferIpv6 => ip.is_ipv6(),
        };
        if preferred {
            return Some(ip);
        }
        fallback.get_or_insert(ip);
    }
    fallback
}

/// Formats `ip` and `port` for dialing, bracketing IPv6.
pub fn format_addr(ip: IpAddr, port: &str) -> String {
    match ip {
        IpAddr::V4(v4) => format!("{v4}:{port}"),
        IpAddr::V6(v6) => format!("[{v6}]:{port}"),
    }
}

/// An address resolver bound to a lookup strategy and a [`ResolverConfig`].
///
/// ```rust,ignore
/// use dialaddr::addr::{AddrResolver, ResolverConfig};
/// use std::time::Duration;
///
/// let resolver = AddrResolver::system()
///     .with_config(ResolverConfig::new().with_lookup_timeout(Duration::from_secs(15)));
/// let addr = resolver.resolve("istiod.istio-system.svc:15012").await?;
/// ```
#[derive(Clone)]
pub struct AddrResolver {
    lookup: Arc<dyn Resolve>,
    config: ResolverConfig,
}

impl AddrResolver {
    pub fn new(lookup: Arc<dyn Resolve>) -> Self {
        Self {
            lookup,
            config: ResolverConfig::default(),
        }
    }

    /// Resolver backed by the system's `getaddrinfo`.
    pub fn system() -> Self {
        Self::new(Arc::new(GaiResolver::new()))
    }

    /// Resolver backed by the shared hickory-dns instance.
    pub fn hickory() -> Self {
        Self::new(Arc::new(HickoryResolver::new()))
    }

    pub fn with_config(mut self, config: ResolverConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Same contract as [`resolve_addr`], with this resolver's family
    /// preference and lookup timeout applied.
    pub async fn resolve(&self, address: &str) -> Result<String, NetError> {
        resolve_with(address, self.lookup.as_ref(), &self.config)
            .await
            .inspect_err(|e| {
                if e.is_input_error() {
                    tracing::debug!(address = %address, error = %e, "rejected address");
                }
            })
    }
}

impl Default for AddrResolver {
    fn default() -> Self {
        Self::system()
    }
}

impl fmt::Debug for AddrResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AddrResolver")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
