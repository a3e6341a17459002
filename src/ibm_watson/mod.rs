//! IBM Watson provider module.
//!
//! Maps the shared voice vocabulary onto Watson's `Accept` header and voice
//! names, validates accept strings against the full rate-suffix grammar, and
//! guards the JSON-encoded text body against the service's byte limit.
//!
//! # Example
//!
//! ```rust,ignore
//! use cloudtts::{Credential, WatsonClient, SynthesisInput, BaseTTS};
//!
//! let client = WatsonClient::new(Credential::Watson {
//!     username: "apikey".into(),
//!     password: "...".into(),
//!     url: "https://stream.watsonplatform.net/text-to-speech/api".into(),
//! })?;
//!
//! let audio = client
//!     .tts(&SynthesisInput::text("Hello world!"), None, None)
//!     .await?;
//! ```

mod config;
mod provider;

#[cfg(test)]
mod tests;

pub use config::{
    ACCEPT_ALLOW_RATE, ACCEPT_DISALLOW_RATE, ACCEPT_REQUIRE_RATE, AVAILABLE_VOICES, MAX_RATE,
    MAX_TEXT_BYTES, MIN_RATE, is_valid_accept,
};
pub use provider::WatsonClient;
