//! Amazon Polly provider module.
//!
//! Maps the shared voice vocabulary onto Polly's `SynthesizeSpeech`
//! parameters and validates effective parameter sets against Polly's legal
//! formats, per-format sample rates, and voice ids before any request is
//! signed.
//!
//! # Authentication
//!
//! A [`Credential::Polly`](crate::Credential::Polly) names the region and
//! optionally an access-key pair. With the pair present the client signs
//! with those keys; without it the AWS default credential chain is used.
//! Both paths resolve and validate identically.
//!
//! # Example
//!
//! ```rust,ignore
//! use cloudtts::{Credential, PollyClient, SynthesisInput, BaseTTS};
//!
//! let client = PollyClient::new(Credential::Polly {
//!     region: "us-east-1".into(),
//!     access_key_id: None,
//!     secret_access_key: None,
//! })?;
//!
//! let audio = client
//!     .tts(&SynthesisInput::text("Hello world!"), None, None)
//!     .await?;
//! ```

mod config;
mod provider;


pub use config::{AVAILABLE_VOICE_IDS, MAX_SSML_LENGTH, MAX_TEXT_LENGTH};
pub use provider::{AWS_POLLY_TTS_URL, PollyClient};
