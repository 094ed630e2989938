//! Guardrail gate
//!
//! Admission control that runs synchronously before the pipeline is
//! invoked: optional access-token gate, input validation, length limit, and
//! the per-client sliding-window rate limit.

use secrecy::{ExposeSecret, SecretString};
use subtle::ConstantTimeEq;
use tracing::{debug, instrument, warn};

use crate::error::ApplicationError;
use crate::rate_limit::{RateLimiterConfig, SlidingWindowRateLimiter};
use crate::request_context::RequestContext;

/// Guardrail gate configuration
#[derive(Clone, Debug)]
pub struct GuardrailConfig {
    /// Maximum accepted text length in characters
    pub max_text_chars: usize,
    /// Sliding-window rate limit parameters
    pub rate_limit: RateLimiterConfig,
    /// Optional static token; when set, required on every request
    pub access_token: Option<SecretString>,
}

impl Default for GuardrailConfig {
    fn default() -> Self {
        Self {
            max_text_chars: 1200,
            rate_limit: RateLimiterConfig::default(),
            access_token: None,
        }
    }
}

/// Admission gate owning the rate-limiter ledger
///
/// Constructed once and shared; tests instantiate isolated gates so no
/// state leaks between them. No other component reads or mutates the
/// ledger.
#[derive(Debug)]
pub struct GuardrailGate {
    max_text_chars: usize,
    access_token: Option<SecretString>,
    limiter: SlidingWindowRateLimiter,
}

impl GuardrailGate {
    /// Create a new gate from configuration
    #[must_use]
    pub fn new(config: GuardrailConfig) -> Self {
        Self {
            max_text_chars: config.max_text_chars,
            access_token: config.access_token,
            limiter: SlidingWindowRateLimiter::new(&config.rate_limit),
        }
    }

    /// Check a request against all guardrails
    ///
    /// Runs synchronously and never suspends. On success the client's
    /// rate-limit ledger has been charged for this request; in-flight work
    /// abandoned later needs no rollback.
    #[instrument(skip(self, ctx, text), fields(request_id = %ctx.request_id(), text_chars = text.chars().count()))]
    pub fn check(&self, ctx: &RequestContext, text: &str) -> Result<(), ApplicationError> {
        if let Some(expected) = &self.access_token {
            let provided = ctx.access_token().unwrap_or_default();
            let matches: bool = expected
                .expose_secret()
                .as_bytes()
                .ct_eq(provided.as_bytes())
                .into();
            if !matches {
                warn!("Access token missing or invalid");
                return Err(ApplicationError::Unauthorized(
                    "Missing or invalid access token".to_string(),
                ));
            }
        }

        if text.trim().is_empty() {
            return Err(ApplicationError::validation("Text is required"));
        }

        if text.chars().count() > self.max_text_chars {
            return Err(ApplicationError::PayloadTooLarge {
                max_chars: self.max_text_chars,
            });
        }

        let client_key = ctx.client_key();
        if let Err(retry_after_secs) = self.limiter.check(&client_key) {
            warn!(client = %client_key, retry_after_secs, "Rate limit exceeded");
            return Err(ApplicationError::RateLimited { retry_after_secs });
        }

        debug!(client = %client_key, "Guardrails passed");
        Ok(())
    }

    /// Drop rate-limiter entries for clients idle longer than the window
    pub fn cleanup(&self) {
        self.limiter.cleanup();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gate_with(config: GuardrailConfig) -> GuardrailGate {
        GuardrailGate::new(config)
    }

    fn default_gate() -> GuardrailGate {
        gate_with(GuardrailConfig::default())
    }

    fn ctx() -> RequestContext {
        RequestContext::new().with_peer_addr("192.0.2.1".parse().unwrap())
    }

    #[test]
    fn plain_text_passes() {
        let gate = default_gate();
        assert!(gate.check(&ctx(), "Hello friend").is_ok());
    }

    #[test]
    fn empty_text_rejected() {
        let gate = default_gate();
        let result = gate.check(&ctx(), "");
        assert!(matches!(result, Err(ApplicationError::Validation(_))));
    }

    #[test]
    fn whitespace_only_text_rejected() {
        let gate = default_gate();
        let result = gate.check(&ctx(), "   \n\t ");
        assert!(matches!(result, Err(ApplicationError::Validation(_))));
    }

    #[test]
    fn text_at_limit_accepted() {
        let gate = gate_with(GuardrailConfig {
            max_text_chars: 10,
            ..GuardrailConfig::default()
        });
        assert!(gate.check(&ctx(), &"x".repeat(10)).is_ok());
    }

    #[test]
    fn text_over_limit_rejected() {
        let gate = gate_with(GuardrailConfig {
            max_text_chars: 10,
            ..GuardrailConfig::default()
        });
        let result = gate.check(&ctx(), &"x".repeat(11));
        assert!(matches!(
            result,
            Err(ApplicationError::PayloadTooLarge { max_chars: 10 })
        ));
    }

    #[test]
    fn length_is_measured_in_characters() {
        let gate = gate_with(GuardrailConfig {
            max_text_chars: 5,
            ..GuardrailConfig::default()
        });
        // Five two-byte characters still pass a five-character limit.
        assert!(gate.check(&ctx(), "ééééé").is_ok());
    }

    #[test]
    fn token_not_required_when_unset() {
        let gate = default_gate();
        assert!(gate.check(&ctx(), "hello").is_ok());
    }

    #[test]
    fn missing_token_rejected_when_required() {
        let gate = gate_with(GuardrailConfig {
            access_token: Some(SecretString::from("demo-secret".to_string())),
            ..GuardrailConfig::default()
        });
        let result = gate.check(&ctx(), "hello");
        assert!(matches!(result, Err(ApplicationError::Unauthorized(_))));
    }

    #[test]
    fn wrong_token_rejected() {
        let gate = gate_with(GuardrailConfig {
            access_token: Some(SecretString::from("demo-secret".to_string())),
            ..GuardrailConfig::default()
        });
        let result = gate.check(&ctx().with_access_token("wrong"), "hello");
        assert!(matches!(result, Err(ApplicationError::Unauthorized(_))));
    }

    #[test]
    fn correct_token_accepted() {
        let gate = gate_with(GuardrailConfig {
            access_token: Some(SecretString::from("demo-secret".to_string())),
            ..GuardrailConfig::default()
        });
        assert!(gate.check(&ctx().with_access_token("demo-secret"), "hello").is_ok());
    }

    #[test]
    fn token_check_runs_before_validation() {
        let gate = gate_with(GuardrailConfig {
            access_token: Some(SecretString::from("demo-secret".to_string())),
            ..GuardrailConfig::default()
        });
        // Empty text with missing token: the token failure wins.
        let result = gate.check(&ctx(), "");
        assert!(matches!(result, Err(ApplicationError::Unauthorized(_))));
    }

    #[test]
    fn over_limit_client_rejected_with_hint() {
        let gate = gate_with(GuardrailConfig {
            rate_limit: RateLimiterConfig {
                max_requests: 2,
                window_secs: 60,
            },
            ..GuardrailConfig::default()
        });
        let ctx = ctx();

        assert!(gate.check(&ctx, "hello").is_ok());
        assert!(gate.check(&ctx, "hello").is_ok());

        match gate.check(&ctx, "hello") {
            Err(ApplicationError::RateLimited { retry_after_secs }) => {
                assert!(retry_after_secs <= 60);
            }
            other => unreachable!("Expected RateLimited, got {other:?}"),
        }
    }

    #[test]
    fn rejected_requests_do_not_consume_quota() {
        let gate = gate_with(GuardrailConfig {
            max_text_chars: 5,
            rate_limit: RateLimiterConfig {
                max_requests: 1,
                window_secs: 60,
            },
            ..GuardrailConfig::default()
        });
        let ctx = ctx();

        // Length rejection happens before the ledger is touched.
        assert!(gate.check(&ctx, "too long text").is_err());
        assert!(gate.check(&ctx, "ok").is_ok());
    }

    #[test]
    fn forwarded_clients_are_limited_separately() {
        let gate = gate_with(GuardrailConfig {
            rate_limit: RateLimiterConfig {
                max_requests: 1,
                window_secs: 60,
            },
            ..GuardrailConfig::default()
        });

        let first = RequestContext::new().with_forwarded_for("203.0.113.7");
        let second = RequestContext::new().with_forwarded_for("203.0.113.8");

        assert!(gate.check(&first, "hello").is_ok());
        assert!(gate.check(&first, "hello").is_err());
        assert!(gate.check(&second, "hello").is_ok());
    }
}
