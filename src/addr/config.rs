//! Resolver configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Which address family wins when a lookup returns both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FamilyPreference {
    /// First IPv4 answer, else first IPv6 answer.
    #[default]
    PreferIpv4,
    /// First IPv6 answer, else first IPv4 answer.
    PreferIpv6,
}

/// Settings for [`AddrResolver`](super::AddrResolver).
///
/// The defaults match [`resolve_addr`](super::resolve_addr): IPv4 preferred,
/// no lookup timeout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    pub family_preference: FamilyPreference,
    /// Upper bound on a single lookup. Serialized as milliseconds.
    #[serde(with = "opt_millis", rename = "lookup_timeout_ms")]
    pub lookup_timeout: Option<Duration>,
}

impl ResolverConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_family_preference(mut self, preference: FamilyPreference) -> Self {
        self.family_preference = preference;
        self
    }

    pub fn with_lookup_timeout(mut self, timeout: Duration) -> Self {
        self.lookup_timeout = Some(timeout);
        self
    }
}

mod opt_millis {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(value: &Option<Duration>, s: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(d) => s.serialize_some(&u64::try_from(d.as_millis()).unwrap_or(u64::MAX)),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Duration>, D::Error> {
        Ok(Option::<u64>::deserialize(d)?.map(Duration::from_millis))
    }
}
