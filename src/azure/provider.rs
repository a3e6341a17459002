//! Azure Cognitive Services TTS client.
//!
//! Two-step dispatch: the subscription key is traded for a short-lived
//! bearer token at the token endpoint, then the text is wrapped in an SSML
//! envelope and posted to the synthesis endpoint. The length guard measures
//! the complete envelope, wrapping included, so the same text can be legal
//! or oversized depending on the resolved voice name.

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::StatusCode;
use tracing::{debug, error};

use super::config::{AVAILABLE_FORMATS, AVAILABLE_VOICES, MAX_ENVELOPE_CHARS, format_for, voice_for};
use crate::base::{
    BaseTTS, Capabilities, Credential, Params, SynthesisInput, TTSError, TTSResult, check_limit,
    required_param,
};
use crate::voice::VoiceConfig;

/// Token endpoint; the subscription key goes in the
/// `Ocp-Apim-Subscription-Key` header.
pub const AZURE_TOKEN_URL: &str = "https://api.cognitive.microsoft.com/sts/v1.0/issueToken";

/// Synthesis endpoint.
pub const AZURE_TTS_URL: &str = "https://speech.platform.bing.com/synthesize";

/// Azure synthesis client.
///
/// Accepts plain text only; the client builds the SSML wrapping itself. The
/// effective parameter keys are `format`, `voice`, `language`, and `gender`,
/// the last three feeding the envelope attributes.
#[derive(Debug)]
pub struct AzureClient {
    credential: Option<Credential>,
}

impl AzureClient {
    /// Create a client from an Azure credential.
    pub fn new(credential: Credential) -> TTSResult<Self> {
        match credential {
            Credential::Azure { .. } => Ok(Self {
                credential: Some(credential),
            }),
            other => Err(TTSError::CredentialMismatch(format!(
                "azure client cannot hold a {} credential",
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

    fn is_valid_format(&self, params: &Params) -> bool {
        params
            .get("format")
            .is_some_and(|format| AVAILABLE_FORMATS.contains(&format.as_str()))
    }

    fn is_valid_voice(&self, params: &Params) -> bool {
        params
            .get("voice")
            .is_some_and(|voice| AVAILABLE_VOICES.contains(&voice.as_str()))
    }

    /// Build the SSML document posted to the synthesis endpoint.
    ///
    /// The voice name is the long registry form combining the language tag
    /// with the short voice name.
    pub(super) fn build_envelope(&self, params: &Params, text: &str) -> TTSResult<String> {
        let lang = required_param(params, "language")?;
        let gender = required_param(params, "gender")?;
        let voice = required_param(params, "voice")?;

        Ok(format!(
            "<speak version=\"1.0\" xmlns=\"http://www.w3.org/2001/10/synthesis\" \
             xml:lang=\"{lang}\">\
             <voice xml:lang=\"{lang}\" xml:gender=\"{gender}\" \
             name=\"Microsoft Server Speech Text to Speech Voice ({lang}, {voice})\">\
             {text}\
             </voice>\
             </speak>"
        ))
    }

    /// Enforce the 1024-character limit on the complete envelope.
    pub(super) fn check_envelope(&self, envelope: &str) -> TTSResult<()> {
        check_limit(envelope.chars().count(), MAX_ENVELOPE_CHARS)
    }

    /// Trade the subscription key for a bearer token.
    async fn fetch_token(&self, api_key: &str) -> TTSResult<String> {
        let response = reqwest::Client::new()
            .post(AZURE_TOKEN_URL)
            .header("Ocp-Apim-Subscription-Key", api_key)
            .header(reqwest::header::CONTENT_LENGTH, 0)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TTSError::AuthenticationFailed(format!(
                "token endpoint answered {status}"
            )));
        }

        Ok(response.text().await?)
    }
}

impl Capabilities for AzureClient {
    fn params_from_voice(&self, voice: &VoiceConfig) -> Params {
        let mut params = Params::new();

        if let Some(format) = format_for(voice.audio_format()) {
            params.insert("format".into(), format.into());
        }

        // The envelope needs all three of voice, language, and gender, so
        // they are derived together or not at all.
        if let Some(voice_name) = voice_for(voice.language(), voice.gender()) {
            params.insert("voice".into(), voice_name.into());
            params.insert("language".into(), voice.language().as_str().into());
            params.insert("gender".into(), voice.gender().as_str().into());
        }

        params
    }

    fn is_valid_params(&self, params: &Params) -> bool {
        self.is_valid_format(params) && self.is_valid_voice(params)
    }
}

#[async_trait]
impl BaseTTS for AzureClient {
    fn provider(&self) -> &'static str {
        "azure"
    }

    async fn tts(
        &self,
        input: &SynthesisInput,
        voice: Option<&VoiceConfig>,
        overrides: Option<&Params>,
    ) -> TTSResult<Bytes> {
        let api_key = match self.credential()? {
            Credential::Azure { api_key } => api_key.clone(),
            other => {
                return Err(TTSError::CredentialMismatch(format!(
                    "azure client cannot hold a {} credential",
                    other.provider()
                )));
            }
        };

        if input.is_ssml() {
            return Err(TTSError::InvalidParams(
                "raw SSML input is not supported by the Azure client".into(),
            ));
        }

        let params = self.resolve_params(voice, overrides)?;
        let envelope = self.build_envelope(&params, input.as_str())?;
        self.check_envelope(&envelope)?;

        debug!(
            voice = %required_param(&params, "voice")?,
            format = %required_param(&params, "format")?,
            envelope_len = envelope.chars().count(),
            "synthesizing with Azure"
        );

        let token = self.fetch_token(&api_key).await?;

        let response = reqwest::Client::new()
            .post(AZURE_TTS_URL)
            .header(reqwest::header::CONTENT_TYPE, "application/ssml+xml")
            .header("X-Microsoft-OutputFormat", required_param(&params, "format")?)
            .header(reqwest::header::AUTHORIZATION, format!("Bearer {token}"))
            .body(envelope)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(TTSError::AuthenticationFailed(format!(
                "Azure rejected the token ({status})"
            )));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, "Azure synthesis failed");
            return Err(TTSError::ProviderError(format!(
                "Azure API error {status}: {body}"
            )));
        }

        Ok(response.bytes().await?)
    }
}
