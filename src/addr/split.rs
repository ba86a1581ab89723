//! `host:port` splitting.
//!
//! Follows the conventional dial-address grammar: an IPv6 host must be
//! bracketed, the port is whatever follows the last colon (possibly empty),
//! and error messages are stable so callers may match on them.

use thiserror::Error;

const MISSING_PORT: &str = "missing port in address";
const TOO_MANY_COLONS: &str = "too many colons in address";

/// A malformed `host:port` string.
///
/// Displays as `address <addr>: <reason>`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("address {addr}: {reason}")]
pub struct AddrError {
    addr: String,
    reason: &'static str,
}

impl AddrError {
    fn new(addr: &str, reason: &'static str) -> Self {
        Self {
            addr: addr.to_string(),
            reason,
        }
    }

    /// The input that failed to split.
    pub fn addr(&self) -> &str {
        &self.addr
    }

    /// Why it failed, without the address prefix.
    pub fn reason(&self) -> &str {
        self.reason
    }
}

/// Splits `host:port` or `[host]:port` into its host and port parts.
///
/// Brackets are stripped from the host. The port is not validated and may be
/// empty (`"localhost:"` yields `("localhost", "")`).
pub fn split_host_port(hostport: &str) -> Result<(&str, &str), AddrError> {
    let Some(last_colon) = hostport.rfind(':') else {
        return Err(AddrError::new(hostport, MISSING_PORT));
    };

    let (host, open_from, close_from) = if hostport.starts_with('[') {
        let Some(end) = hostport.find(']') else {
            return Err(AddrError::new(hostport, "missing ']' in address"));
        };
        let after = end + 1;
        if after == hostport.len() {
            return Err(AddrError::new(hostport, MISSING_PORT));
        }
        if after != last_colon {
            // `]` is either not followed by a colon, or by one that is not the last.
            let reason = if hostport.as_bytes()[after] == b':' {
                TOO_MANY_COLONS
            } else {
                MISSING_PORT
            };
            return Err(AddrError::new(hostport, reason));
        }
        (&hostport[1..end], 1, after)
    } else {
        let host = &hostport[..last_colon];
        if host.contains(':') {
            return Err(AddrError::new(hostport, TOO_MANY_COLONS));
        }
        (host, 0, 0)
    };

    if hostport[open_from..].contains('[') {
        return Err(AddrError::new(hostport, "unexpected '[' in address"));
    }
    if hostport[close_from..].contains(']') {
        return Err(AddrError::new(hostport, "unexpected ']' in address"));
    }

    Ok((host, &hostport[last_colon + 1..]))
}
