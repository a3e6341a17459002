//! IBM Watson TTS client.
//!
//! Dispatches over HTTP with basic auth against the service instance URL
//! from the credential. The audio format travels in the `Accept` header and
//! the voice in the query string; the text itself is a JSON body, and the
//! length guard measures the bytes of that JSON document.

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::StatusCode;
use tracing::{debug, error};

use super::config::{
    AVAILABLE_VOICES, MAX_TEXT_BYTES, accept_for, is_valid_accept, voice_for,
};
use crate::base::{
    BaseTTS, Capabilities, Credential, Params, SynthesisInput, TTSError, TTSResult, check_limit,
    required_param,
};
use crate::voice::VoiceConfig;

/// API version segment of the synthesis path.
const API_VERSION: &str = "v1";

/// IBM Watson synthesis client.
///
/// Accepts plain text only. The effective parameter keys are `accept` (the
/// negotiated audio format) and `voice`; a `customization_id` override is
/// forwarded untouched as a query parameter.
#[derive(Debug)]
pub struct WatsonClient {
    credential: Option<Credential>,
}

impl WatsonClient {
    /// Create a client from a Watson credential.
    pub fn new(credential: Credential) -> TTSResult<Self> {
        match credential {
            Credential::Watson { .. } => Ok(Self {
                credential: Some(credential),
            }),
            other => Err(TTSError::CredentialMismatch(format!(
                "ibm-watson client cannot hold a {} credential",
                other.provider()
            ))),
        }
    }

    /// Create a client with no credential. Every `tts` call will fail with
    /// [`TTSError::MissingCredential`] until replaced via [`Self::new`].
    pub fn unauthenticated() -> Self {
        Self { credential: None }
    }

    fn credential(&self) -> TTSResult<&Credential> {
        self.credential
            .as_ref()
            .ok_or(TTSError::MissingCredential)
    }

    fn is_valid_accept_param(&self, params: &Params) -> bool {
        params
            .get("accept")
            .is_some_and(|accept| is_valid_accept(accept))
    }

    fn is_valid_voice(&self, params: &Params) -> bool {
        params
            .get("voice")
            .is_some_and(|voice| AVAILABLE_VOICES.contains(&voice.as_str()))
    }

    /// Enforce Watson's 5 KiB limit on the JSON-encoded text body.
    ///
    /// The limit applies to the document on the wire, so quotes and escape
    /// sequences count. A payload that fits as characters can still be
    /// oversized once encoded.
    pub(super) fn check_payload(&self, input: &SynthesisInput) -> TTSResult<()> {
        let body = serde_json::json!({ "text": input.as_str() });
        check_limit(body.to_string().len(), MAX_TEXT_BYTES)
    }
}

impl Capabilities for WatsonClient {
    fn params_from_voice(&self, voice: &VoiceConfig) -> Params {
        let mut params = Params::new();

        if let Some(accept) = accept_for(voice.audio_format()) {
            params.insert("accept".into(), accept.into());
        }

        if let Some(voice_name) = voice_for(voice.language(), voice.gender()) {
            params.insert("voice".into(), voice_name.into());
        }

        params
    }

    fn is_valid_params(&self, params: &Params) -> bool {
        self.is_valid_accept_param(params) && self.is_valid_voice(params)
    }
}

#[async_trait]
impl BaseTTS for WatsonClient {
    fn provider(&self) -> &'static str {
        "ibm-watson"
    }

    async fn tts(
        &self,
        input: &SynthesisInput,
        voice: Option<&VoiceConfig>,
        overrides: Option<&Params>,
    ) -> TTSResult<Bytes> {
        let (username, password, base_url) = match self.credential()? {
            Credential::Watson {
                username,
                password,
                url,
            } => (username.clone(), password.clone(), url.clone()),
            other => {
                return Err(TTSError::CredentialMismatch(format!(
                    "ibm-watson client cannot hold a {} credential",
                    other.provider()
                )));
            }
        };

        if input.is_ssml() {
            return Err(TTSError::InvalidParams(
                "SSML input is not supported by the IBM Watson client".into(),
            ));
        }

        let params = self.resolve_params(voice, overrides)?;
        self.check_payload(input)?;

        let accept = required_param(&params, "accept")?;
        let voice_name = required_param(&params, "voice")?;

        debug!(
            voice = %voice_name,
            accept = %accept,
            input_len = input.as_str().len(),
            "synthesizing with IBM Watson"
        );

        let url = format!("{}/{API_VERSION}/synthesize", base_url.trim_end_matches('/'));

        let mut query: Vec<(&str, &str)> = vec![("voice", voice_name)];
        if let Some(customization_id) = params.get("customization_id") {
            query.push(("customization_id", customization_id));
        }

        let response = reqwest::Client::new()
            .post(&url)
            .basic_auth(&username, Some(&password))
            .header(reqwest::header::ACCEPT, accept)
            .query(&query)
            .json(&serde_json::json!({ "text": input.as_str() }))
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(TTSError::AuthenticationFailed(format!(
                "Watson rejected the credentials ({status})"
            )));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, "Watson synthesis failed");
            return Err(TTSError::ProviderError(format!(
                "Watson API error {status}: {body}"
            )));
        }

        Ok(response.bytes().await?)
    }
}
