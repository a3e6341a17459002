//! Shared client machinery: errors, credentials, input payloads, and the
//! parameter resolution pipeline every provider implements.
//!
//! The pipeline is always the same three steps, run fresh on every call and
//! entirely before any network traffic:
//!
//! 1. **Resolve**: merge an optional [`VoiceConfig`](crate::VoiceConfig)
//!    derivation with optional raw overrides into one effective parameter
//!    set ([`Params`]).
//! 2. **Validate**: check every key of the effective set against the
//!    provider's legal vocabulary.
//! 3. **Guard**: enforce the provider's maximum input size under its own
//!    counting rule.
//!
//! Steps 1–2 live in the [`Capabilities`] trait; the guard is provider code
//! because each provider measures a different representation of the input.

use std::collections::BTreeMap;

use async_trait::async_trait;
use bytes::Bytes;

use crate::voice::VoiceConfig;

/// Effective parameter set: provider-specific key names mapped to
/// provider-specific values. Built per call, never cached.
pub type Params = BTreeMap<String, String>;

/// Convenience alias used throughout the crate.
pub type TTSResult<T> = Result<T, TTSError>;

// =============================================================================
// Errors
// =============================================================================

/// Errors raised by synthesis clients.
///
/// The first four variants are detected locally, before any request is sent,
/// and are never retried or downgraded. The remaining variants surface
/// transport-boundary failures unmodified.
#[derive(Debug, thiserror::Error)]
pub enum TTSError {
    /// No credential was configured on the client.
    #[error("no credential configured")]
    MissingCredential,

    /// A credential of the wrong variant was supplied for this provider.
    #[error("credential mismatch: {0}")]
    CredentialMismatch(String),

    /// The effective parameter set failed the provider's validator.
    #[error("invalid synthesis parameters: {0}")]
    InvalidParams(String),

    /// The input payload exceeds the provider's maximum size.
    #[error("payload too large: {length} exceeds the provider limit of {limit}")]
    PayloadTooLarge { length: usize, limit: usize },

    /// Token exchange with the provider's auth endpoint failed.
    #[error("authentication failed: {0}")]
    AuthenticationFailed(String),

    /// The provider answered the synthesis request with an error.
    #[error("provider error: {0}")]
    ProviderError(String),

    /// Network-level failure while talking to the provider.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

// =============================================================================
// Credentials
// =============================================================================

/// Provider credential, one variant per service.
///
/// A client accepts exactly one variant; constructing a client with any
/// other variant fails with [`TTSError::CredentialMismatch`].
#[derive(Debug, Clone)]
pub enum Credential {
    /// Amazon Polly. With both keys absent the AWS default credential chain
    /// (environment, profile, instance role) is used instead.
    Polly {
        region: String,
        access_key_id: Option<String>,
        secret_access_key: Option<String>,
    },
    /// IBM Watson service instance: basic-auth pair plus the instance URL.
    Watson {
        username: String,
        password: String,
        url: String,
    },
    /// Google Cloud service-account JSON key file.
    Google { credentials_path: String },
    /// Azure Cognitive Services subscription key.
    Azure { api_key: String },
}

impl Credential {
    /// Name of the provider this credential belongs to.
    pub fn provider(&self) -> &'static str {
        match self {
            Self::Polly { .. } => "aws-polly",
            Self::Watson { .. } => "ibm-watson",
            Self::Google { .. } => "google",
            Self::Azure { .. } => "azure",
        }
    }

    /// Whether a Polly credential carries an explicit access-key pair.
    ///
    /// Returns `false` for non-Polly variants and for Polly credentials
    /// relying on the ambient AWS credential chain.
    pub fn has_access_keys(&self) -> bool {
        matches!(
            self,
            Self::Polly {
                access_key_id: Some(_),
                secret_access_key: Some(_),
                ..
            }
        )
    }
}

// =============================================================================
// Synthesis input
// =============================================================================

/// Payload to synthesize: plain text or SSML markup.
///
/// Modeling the input as an enum makes the ambiguous "text and SSML in the
/// same call" case unrepresentable; the length guard always measures the
/// representation that is actually transmitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SynthesisInput {
    Text(String),
    Ssml(String),
}

impl SynthesisInput {
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    pub fn ssml(s: impl Into<String>) -> Self {
        Self::Ssml(s.into())
    }

    /// The raw payload string, regardless of kind.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Text(s) | Self::Ssml(s) => s,
        }
    }

    pub fn is_ssml(&self) -> bool {
        matches!(self, Self::Ssml(_))
    }
}

// =============================================================================
// Resolution pipeline
// =============================================================================

/// Per-provider capability resolution and validation.
///
/// Implementors supply the capability-table derivation and the validator
/// predicate chain; [`Capabilities::resolve_params`] combines them with the
/// shared merge policy.
pub trait Capabilities {
    /// Derive provider parameters from a voice description.
    ///
    /// Both lookups (format and (language, gender)) are partial: a miss
    /// leaves the corresponding keys absent rather than inventing defaults,
    /// so an unsupported description fails validation instead of silently
    /// degrading.
    fn params_from_voice(&self, voice: &VoiceConfig) -> Params;

    /// Whether the effective parameter set is entirely within this
    /// provider's legal vocabulary.
    fn is_valid_params(&self, params: &Params) -> bool;

    /// Build and validate the effective parameter set for one call.
    ///
    /// Merge policy, in priority order:
    /// 1. voice + overrides: derive from the voice, then overlay every
    ///    override key on top;
    /// 2. voice only: derive from the voice;
    /// 3. overrides only: use the overrides verbatim, no table involvement;
    /// 4. neither: derive from the default [`VoiceConfig`].
    ///
    /// An invalid result is rejected with [`TTSError::InvalidParams`]; no
    /// network call is attempted for a rejected set.
    fn resolve_params(
        &self,
        voice: Option<&VoiceConfig>,
        overrides: Option<&Params>,
    ) -> TTSResult<Params> {
        let params = match (voice, overrides) {
            (Some(vc), Some(extra)) => {
                let mut params = self.params_from_voice(vc);
                for (key, value) in extra {
                    params.insert(key.clone(), value.clone());
                }
                params
            }
            (Some(vc), None) => self.params_from_voice(vc),
            (None, Some(extra)) => extra.clone(),
            (None, None) => self.params_from_voice(&VoiceConfig::default()),
        };

        if !self.is_valid_params(&params) {
            return Err(TTSError::InvalidParams(format!(
                "parameter set rejected: {params:?}"
            )));
        }

        Ok(params)
    }
}

// =============================================================================
// Provider interface
// =============================================================================

/// Common interface implemented by every provider client.
#[async_trait]
pub trait BaseTTS: Send + Sync + std::fmt::Debug {
    /// Provider name, matching the factory aliases.
    fn provider(&self) -> &'static str;

    /// Synthesize audio for the given input.
    ///
    /// Runs the credential gate, parameter resolution, validation, and the
    /// length guard, in that order, before dispatching a single request.
    /// Returns the raw audio bytes in the negotiated format.
    async fn tts(
        &self,
        input: &SynthesisInput,
        voice: Option<&VoiceConfig>,
        overrides: Option<&Params>,
    ) -> TTSResult<Bytes>;
}

/// Fetch a key a validated parameter set is guaranteed to hold.
pub(crate) fn required_param<'a>(params: &'a Params, key: &str) -> TTSResult<&'a str> {
    params
        .get(key)
        .map(String::as_str)
        .ok_or_else(|| TTSError::InvalidParams(format!("missing required key `{key}`")))
}

/// Check that a payload length is within a provider limit.
pub(crate) fn check_limit(length: usize, limit: usize) -> TTSResult<()> {
    if length > limit {
        return Err(TTSError::PayloadTooLarge { length, limit });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credential_provider_names() {
        let cred = Credential::Azure {
            api_key: "key".into(),
        };
        assert_eq!(cred.provider(), "azure");

        let cred = Credential::Watson {
            username: "u".into(),
            password: "p".into(),
            url: "https://example".into(),
        };
        assert_eq!(cred.provider(), "ibm-watson");
    }

    #[test]
    fn test_polly_access_keys() {
        let ambient = Credential::Polly {
            region: "us-east-1".into(),
            access_key_id: None,
            secret_access_key: None,
        };
        assert!(!ambient.has_access_keys());

        let partial = Credential::Polly {
            region: "us-east-1".into(),
            access_key_id: Some("AKIA...".into()),
            secret_access_key: None,
        };
        assert!(!partial.has_access_keys());

        let explicit = Credential::Polly {
            region: "us-east-1".into(),
            access_key_id: Some("AKIA...".into()),
            secret_access_key: Some("secret".into()),
        };
        assert!(explicit.has_access_keys());
    }

    #[test]
    fn test_synthesis_input() {
        let text = SynthesisInput::text("hello");
        assert!(!text.is_ssml());
        assert_eq!(text.as_str(), "hello");

        let ssml = SynthesisInput::ssml("<speak>hi</speak>");
        assert!(ssml.is_ssml());
    }

    #[test]
    fn test_check_limit_boundary() {
        assert!(check_limit(100, 100).is_ok());
        let err = check_limit(101, 100).unwrap_err();
        assert!(matches!(
            err,
            TTSError::PayloadTooLarge {
                length: 101,
                limit: 100
            }
        ));
    }
}
