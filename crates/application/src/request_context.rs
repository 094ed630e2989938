//! Request context for propagating client identity and request metadata
//!
//! This module provides a `RequestContext` struct that carries the calling
//! client's network identity and access token through the application layer.
//! It should be extracted from the transport layer (peer address, headers)
//! and passed to the guardrail gate alongside the content text.

use std::net::IpAddr;

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Fallback key when no client identity can be established
const UNKNOWN_CLIENT: &str = "unknown";

/// Context for a single request, carrying client identity and metadata
///
/// `RequestContext` is created by the transport layer for every incoming
/// request and provides:
///
/// - the client identity used as the rate-limiter key (first entry of a
///   forwarded-for chain when present, else the direct peer address)
/// - the access token supplied by the caller, if any
/// - a unique request id and receive timestamp for tracing/logging
#[derive(Debug, Clone)]
pub struct RequestContext {
    peer_addr: Option<IpAddr>,
    forwarded_for: Option<String>,
    access_token: Option<String>,
    request_id: Uuid,
    timestamp: DateTime<Utc>,
}

impl RequestContext {
    /// Create a new request context with no client identity
    ///
    /// Generates a new random request ID and captures the current timestamp.
    #[must_use]
    pub fn new() -> Self {
        Self {
            peer_addr: None,
            forwarded_for: None,
            access_token: None,
            request_id: Uuid::new_v4(),
            timestamp: Utc::now(),
        }
    }

    /// Set the direct peer address
    #[must_use]
    pub const fn with_peer_addr(mut self, addr: IpAddr) -> Self {
        self.peer_addr = Some(addr);
        self
    }

    /// Set the raw forwarded-for header value (comma-separated chain)
    #[must_use]
    pub fn with_forwarded_for(mut self, chain: impl Into<String>) -> Self {
        self.forwarded_for = Some(chain.into());
        self
    }

    /// Set the caller-supplied access token
    #[must_use]
    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    /// Resolve the rate-limiter key for this client
    ///
    /// Reverse proxies pass the original client as the first entry of the
    /// forwarded-for chain; that entry wins over the direct peer address.
    #[must_use]
    pub fn client_key(&self) -> String {
        if let Some(chain) = &self.forwarded_for {
            if let Some(first) = chain.split(',').next() {
                let first = first.trim();
                if !first.is_empty() {
                    return first.to_string();
                }
            }
        }

        self.peer_addr
            .map_or_else(|| UNKNOWN_CLIENT.to_string(), |addr| addr.to_string())
    }

    /// Get the caller-supplied access token, if any
    #[must_use]
    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    /// Get the unique request identifier
    #[must_use]
    pub const fn request_id(&self) -> Uuid {
        self.request_id
    }

    /// Get the timestamp when the request was received
    #[must_use]
    pub const fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

impl Default for RequestContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_creates_unique_request_id() {
        let ctx1 = RequestContext::new();
        let ctx2 = RequestContext::new();

        assert_ne!(ctx1.request_id(), ctx2.request_id());
    }

    #[test]
    fn new_captures_current_timestamp() {
        let before = Utc::now();
        let ctx = RequestContext::new();
        let after = Utc::now();

        assert!(ctx.timestamp() >= before);
        assert!(ctx.timestamp() <= after);
    }

    #[test]
    fn client_key_prefers_forwarded_for() {
        let ctx = RequestContext::new()
            .with_peer_addr("10.0.0.1".parse().unwrap())
            .with_forwarded_for("203.0.113.7, 10.0.0.1");

        assert_eq!(ctx.client_key(), "203.0.113.7");
    }

    #[test]
    fn client_key_trims_forwarded_entry() {
        let ctx = RequestContext::new().with_forwarded_for("  203.0.113.7  ,10.0.0.1");
        assert_eq!(ctx.client_key(), "203.0.113.7");
    }

    #[test]
    fn client_key_falls_back_to_peer_addr() {
        let ctx = RequestContext::new().with_peer_addr("192.0.2.4".parse().unwrap());
        assert_eq!(ctx.client_key(), "192.0.2.4");
    }

    #[test]
    fn client_key_falls_back_to_unknown() {
        let ctx = RequestContext::new();
        assert_eq!(ctx.client_key(), "unknown");
    }

    #[test]
    fn empty_forwarded_chain_falls_back() {
        let ctx = RequestContext::new()
            .with_peer_addr("192.0.2.4".parse().unwrap())
            .with_forwarded_for("   ");
        assert_eq!(ctx.client_key(), "192.0.2.4");
    }

    #[test]
    fn access_token_round_trips() {
        let ctx = RequestContext::new().with_access_token("demo-secret");
        assert_eq!(ctx.access_token(), Some("demo-secret"));
    }

    #[test]
    fn debug_format_contains_fields() {
        let ctx = RequestContext::new();
        let debug = format!("{ctx:?}");

        assert!(debug.contains("RequestContext"));
        assert!(debug.contains("request_id"));
        assert!(debug.contains("timestamp"));
    }
}
