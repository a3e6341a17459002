//! Azure Cognitive Services provider module.
//!
//! Maps the shared voice vocabulary onto Azure's output-format names and
//! short voice names, wraps the text in the SSML envelope the service
//! expects, and guards the complete envelope against the character limit.
//!
//! # Example
//!
//! ```rust,ignore
//! use cloudtts::{Credential, AzureClient, SynthesisInput, BaseTTS};
//!
//! let client = AzureClient::new(Credential::Azure {
//!     api_key: "...".into(),
//! })?;
//!
//! let audio = client
//!     .tts(&SynthesisInput::text("Hello world!"), None, None)
//!     .await?;
//! ```

mod config;
mod provider;


pub use config::{AVAILABLE_FORMATS, AVAILABLE_VOICES, MAX_ENVELOPE_CHARS};
pub use provider::{AZURE_TOKEN_URL, AZURE_TTS_URL, AzureClient};
