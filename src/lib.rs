//! # cloudtts
//!
//! A provider-agnostic text-to-speech client library covering Amazon Polly,
//! IBM Watson, Google Cloud, and Azure Cognitive Services behind one
//! interface.
//!
//! Every client runs the same local pipeline before touching the network:
//!
//! 1. **Resolve** a [`VoiceConfig`] and/or raw parameter overrides into the
//!    provider's own parameter vocabulary.
//! 2. **Validate** the effective parameter set against the provider's
//!    capability tables.
//! 3. **Guard** the input payload against the provider's size limit, each
//!    provider measuring what it actually transmits.
//!
//! Only a fully validated call is dispatched, so configuration mistakes
//! surface as typed errors instead of provider HTTP failures.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use cloudtts::{create_client, Credential, SynthesisInput};
//!
//! let client = create_client(
//!     "polly",
//!     Credential::Polly {
//!         region: "us-east-1".into(),
//!         access_key_id: None,
//!         secret_access_key: None,
//!     },
//! )?;
//!
//! let audio = client
//!     .tts(&SynthesisInput::text("Hello world!"), None, None)
//!     .await?;
//! std::fs::write("hello.mp3", &audio)?;
//! ```

pub mod aws_polly;
pub mod azure;
pub mod base;
pub mod google;
pub mod ibm_watson;
pub mod voice;

pub use aws_polly::PollyClient;
pub use azure::AzureClient;
pub use base::{BaseTTS, Capabilities, Credential, Params, SynthesisInput, TTSError, TTSResult};
pub use google::GoogleClient;
pub use ibm_watson::WatsonClient;
pub use voice::{AudioFormat, Gender, Language, VoiceConfig};

/// Provider names accepted by [`create_client`], one canonical name per
/// provider.
pub const SUPPORTED_PROVIDERS: &[&str] = &["aws-polly", "ibm-watson", "google", "azure"];

/// Build a boxed client for a provider name.
///
/// Matching is case-insensitive and each provider answers to a few common
/// aliases (`polly`, `aws_polly`, `amazon-polly`, `watson`, `ibm`,
/// `microsoft-azure`, ...). The credential must belong to the named
/// provider; a mismatch fails with [`TTSError::CredentialMismatch`] and an
/// unknown name with [`TTSError::InvalidParams`].
pub fn create_client(provider: &str, credential: Credential) -> TTSResult<Box<dyn BaseTTS>> {
    match provider.to_lowercase().as_str() {
        "polly" | "aws-polly" | "aws_polly" | "amazon-polly" => {
            Ok(Box::new(PollyClient::new(credential)?))
        }
        "watson" | "ibm" | "ibm-watson" | "ibm_watson" => {
            Ok(Box::new(WatsonClient::new(credential)?))
        }
        "google" | "google-cloud" => Ok(Box::new(GoogleClient::new(credential)?)),
        "azure" | "microsoft-azure" => Ok(Box::new(AzureClient::new(credential)?)),
        unknown => Err(TTSError::InvalidParams(format!(
            "unknown provider `{unknown}`, supported providers: {}",
            SUPPORTED_PROVIDERS.join(", ")
        ))),
    }
}
