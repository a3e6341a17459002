//! Google Cloud Text-to-Speech provider module.
//!
//! Maps the shared voice vocabulary onto the `text:synthesize` request
//! fields. Authentication works entirely from a service-account JSON key
//! file: the client signs a JWT with the key and trades it for a bearer
//! token on each call.
//!
//! # Example
//!
//! ```rust,ignore
//! use cloudtts::{Credential, GoogleClient, SynthesisInput, BaseTTS};
//!
//! let client = GoogleClient::new(Credential::Google {
//!     credentials_path: "/etc/gcp/service-account.json".into(),
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

pub use config::{AVAILABLE_ENCODINGS, AVAILABLE_GENDERS, AVAILABLE_LANGUAGES, MAX_TEXT_BYTES};
pub use provider::{GOOGLE_TTS_URL, GoogleClient};
