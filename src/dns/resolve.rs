//! The lookup capability and its override wrapper.

use crate::base::neterror::NetError;
use std::{collections::HashMap, fmt, future::Future, net::IpAddr, pin::Pin, sync::Arc};

/// A host token that did not parse as an IP literal and must be looked up.
#[derive(Clone, Hash, Eq, PartialEq)]
pub struct Name {
    host: Box<str>,
}

impl Name {
    #[inline]
    pub fn new(host: impl Into<Box<str>>) -> Self {
        Self { host: host.into() }
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.host
    }

    /// Lowercased, without a trailing root dot. Two names with the same key
    /// refer to the same DNS node.
    pub fn key(&self) -> String {
        self.host.trim_end_matches('.').to_ascii_lowercase()
    }
}

impl From<&str> for Name {
    fn from(value: &str) -> Self {
        Name::new(value)
    }
}

impl From<String> for Name {
    fn from(value: String) -> Self {
        Name::new(value)
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.host, f)
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.host, f)
    }
}

/// Lookup answer, in the order the resolver produced it.
pub type Addrs = Box<dyn Iterator<Item = IpAddr> + Send>;

/// Future returned by [`Resolve::resolve`].
pub type Resolving = Pin<Box<dyn Future<Output = Result<Addrs, NetError>> + Send>>;

/// Name-to-address lookup, handed explicitly to
/// [`resolve_addr`](crate::addr::resolve_addr).
///
/// Answer order matters: family selection walks it front to back. Dropping
/// the returned future cancels the lookup.
pub trait Resolve: Send + Sync {
    fn resolve(&self, name: Name) -> Resolving;
}

impl<R: Resolve + ?Sized> Resolve for Arc<R> {
    fn resolve(&self, name: Name) -> Resolving {
        (**self).resolve(name)
    }
}

/// Answers a fixed set of names from a table and sends everything else to
/// `inner`.
///
/// Names are matched on [`Name::key`], so `Svc.Local.` hits an entry added as
/// `svc.local`. An entry with an empty address list is still a hit and
/// yields an empty answer.
///
/// ```rust,ignore
/// let lookup = DnsResolverWithOverrides::new(Arc::new(GaiResolver::new()))
///     .with_override("istiod.istio-system.svc", ["10.96.0.10".parse()?]);
/// ```
#[derive(Clone)]
pub struct DnsResolverWithOverrides {
    inner: Arc<dyn Resolve>,
    overrides: HashMap<String, Arc<[IpAddr]>>,
}

impl DnsResolverWithOverrides {
    pub fn new(inner: Arc<dyn Resolve>) -> Self {
        Self {
            inner,
            overrides: HashMap::new(),
        }
    }

    /// Adds or replaces the answer for `host`.
    pub fn with_override<I>(mut self, host: &str, addrs: I) -> Self
    where
        I: IntoIterator<Item = IpAddr>,
    {
        let key = Name::new(host).key();
        self.overrides.insert(key, addrs.into_iter().collect());
        self
    }

    pub fn override_count(&self) -> usize {
        self.overrides.len()
    }
}

impl Resolve for DnsResolverWithOverrides {
    fn resolve(&self, name: Name) -> Resolving {
        match self.overrides.get(&name.key()) {
            Some(addrs) => {
                tracing::trace!(host = %name, count = addrs.len(), "answering from overrides");
                let addrs: Addrs = Box::new(addrs.to_vec().into_iter());
                Box::pin(std::future::ready(Ok(addrs)))
            }
            None => self.inner.resolve(name),
        }
    }
}

impl fmt::Debug for DnsResolverWithOverrides {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DnsResolverWithOverrides")
            .field("override_count", &self.overrides.len())
            .finish_non_exhaustive()
    }
}
