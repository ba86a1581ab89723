use crate::addr::split::AddrError;
use std::{io, sync::Arc, time::Duration};
use thiserror::Error;

/// Unified error type for address resolution.
///
/// The three kinds a caller of [`crate::addr::resolve_addr`] can observe are,
/// in order of detection, [`NetError::NoAddress`],
/// [`NetError::MalformedAddress`] and [`NetError::LookupFailed`]. The remaining
/// variants describe why a lookup failed and only ever appear as the source of
/// a `LookupFailed`, or directly from a [`crate::dns::Resolve`] implementation.
#[derive(Debug, Error, Clone)]
pub enum NetError {
    #[error("no address specified")]
    NoAddress,

    /// The `host:port` splitter rejected the input. Displayed verbatim.
    #[error(transparent)]
    MalformedAddress(#[from] AddrError),

    #[error("lookup failed for IP address: {0}")]
    LookupFailed(#[source] Box<NetError>),

    #[error("lookup {domain}: {source}")]
    NameNotResolvedFor {
        domain: String,
        #[source]
        source: Arc<io::Error>,
    },

    #[error("lookup {domain}: no addresses returned")]
    NoAddressesFor { domain: String },

    #[error("lookup {domain}: timed out after {timeout:?}")]
    LookupTimedOut { domain: String, timeout: Duration },
}

impl NetError {
    /// Wraps a lookup cause beneath the fixed `lookup failed` prefix.
    pub fn lookup_failed(cause: NetError) -> Self {
        NetError::LookupFailed(Box::new(cause))
    }

    pub fn dns_failed(domain: impl Into<String>, err: io::Error) -> Self {
        NetError::NameNotResolvedFor {
            domain: domain.into(),
            source: Arc::new(err),
        }
    }

    pub fn no_addresses_for(domain: impl Into<String>) -> Self {
        NetError::NoAddressesFor {
            domain: domain.into(),
        }
    }

    /// Returns the wrapped cause of a [`NetError::LookupFailed`].
    pub fn lookup_cause(&self) -> Option<&NetError> {
        match self {
            NetError::LookupFailed(cause) => Some(cause),
            _ => None,
        }
    }

    /// True for errors raised before any lookup was attempted.
    pub fn is_input_error(&self) -> bool {
        matches!(self, NetError::NoAddress | NetError::MalformedAddress(_))
    }
}
