//! Amazon Polly client.
//!
//! Implements the resolve → validate → guard pipeline against Polly's
//! vocabulary and dispatches through the AWS SDK's `SynthesizeSpeech`
//! operation. Explicit access keys in the credential take precedence;
//! without them the AWS default credential chain (environment, profile,
//! instance role) is used.

use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_credential_types::Credentials;
use aws_sdk_polly::Client as PollySdkClient;
use aws_sdk_polly::config::Builder as PollyConfigBuilder;
use aws_sdk_polly::types::{OutputFormat, TextType, VoiceId};
use bytes::Bytes;
use tracing::{debug, error};

use super::config::{
    AVAILABLE_VOICE_IDS, MAX_SSML_LENGTH, MAX_TEXT_LENGTH, format_params, sample_rates_for,
    voice_for,
};
use crate::base::{
    BaseTTS, Capabilities, Credential, Params, SynthesisInput, TTSError, TTSResult, check_limit,
    required_param,
};
use crate::voice::VoiceConfig;

/// Regional endpoint template; the SDK resolves the concrete host from the
/// configured region.
pub const AWS_POLLY_TTS_URL: &str = "https://polly.{region}.amazonaws.com/v1/speech";

/// Amazon Polly synthesis client.
///
/// Accepts plain text and SSML input. The effective parameter keys are
/// `output_format`, `sample_rate`, and `voice_id`, matching the
/// `SynthesizeSpeech` request fields.
#[derive(Debug)]
pub struct PollyClient {
    credential: Option<Credential>,
}

impl PollyClient {
    /// Create a client from a Polly credential.
    ///
    /// Any other credential variant is rejected with
    /// [`TTSError::CredentialMismatch`].
    pub fn new(credential: Credential) -> TTSResult<Self> {
        match credential {
            Credential::Polly { .. } => Ok(Self {
                credential: Some(credential),
            }),
            other => Err(TTSError::CredentialMismatch(format!(
                "aws-polly client cannot hold a {} credential",
                other.provider()
            ))),
        }
    }

    /// Create a client with no credential. Every `tts` call will fail with
    /// [`TTSError::MissingCredential`] until replaced via [`Self::new`].
    pub fn unauthenticated() -> Self {
        Self { credential: None }
    }

    /// Credential gate: presence first, variant second.
    fn credential(&self) -> TTSResult<&Credential> {
        self.credential
            .as_ref()
            .ok_or(TTSError::MissingCredential)
    }

    /// Build an SDK client for this call.
    async fn sdk_client(&self) -> TTSResult<PollySdkClient> {
        let (region, access_key_id, secret_access_key) = match self.credential()? {
            Credential::Polly {
                region,
                access_key_id,
                secret_access_key,
            } => (region.clone(), access_key_id.clone(), secret_access_key.clone()),
            other => {
                return Err(TTSError::CredentialMismatch(format!(
                    "aws-polly client cannot hold a {} credential",
                    other.provider()
                )));
            }
        };

        let region = Region::new(region);

        if let (Some(key), Some(secret)) = (access_key_id, secret_access_key) {
            let credentials = Credentials::new(key, secret, None, None, "cloudtts");
            let conf = PollyConfigBuilder::new()
                .behavior_version(BehaviorVersion::latest())
                .region(region)
                .credentials_provider(credentials)
                .build();
            return Ok(PollySdkClient::from_conf(conf));
        }

        // Ambient resolution: environment, shared config, instance profile.
        let aws_config = aws_config::defaults(BehaviorVersion::latest())
            .region(region)
            .load()
            .await;
        Ok(PollySdkClient::new(&aws_config))
    }

    fn is_valid_output_format(&self, params: &Params) -> bool {
        params
            .get("output_format")
            .is_some_and(|format| sample_rates_for(format).is_some())
    }

    /// Rate legality is conditional on the format: without a supported
    /// format there is no legal rate at all.
    fn is_valid_sample_rate(&self, params: &Params) -> bool {
        let Some(rates) = params
            .get("output_format")
            .and_then(|format| sample_rates_for(format))
        else {
            return false;
        };

        params
            .get("sample_rate")
            .is_some_and(|rate| rates.contains(&rate.as_str()))
    }

    fn is_valid_voice_id(&self, params: &Params) -> bool {
        params
            .get("voice_id")
            .is_some_and(|voice| AVAILABLE_VOICE_IDS.contains(&voice.as_str()))
    }

    /// Enforce Polly's input limits: 3000 characters of plain text, 6000
    /// characters of SSML including markup.
    pub(super) fn check_payload(&self, input: &SynthesisInput) -> TTSResult<()> {
        let length = input.as_str().chars().count();
        let limit = if input.is_ssml() {
            MAX_SSML_LENGTH
        } else {
            MAX_TEXT_LENGTH
        };
        check_limit(length, limit)
    }
}

impl Capabilities for PollyClient {
    fn params_from_voice(&self, voice: &VoiceConfig) -> Params {
        let mut params = Params::new();

        if let Some((output_format, sample_rate)) = format_params(voice.audio_format()) {
            params.insert("output_format".into(), output_format.into());
            params.insert("sample_rate".into(), sample_rate.into());
        }

        if let Some(voice_id) = voice_for(voice.language(), voice.gender()) {
            params.insert("voice_id".into(), voice_id.into());
        }

        params
    }

    fn is_valid_params(&self, params: &Params) -> bool {
        self.is_valid_output_format(params)
            && self.is_valid_sample_rate(params)
            && self.is_valid_voice_id(params)
    }
}

#[async_trait]
impl BaseTTS for PollyClient {
    fn provider(&self) -> &'static str {
        "aws-polly"
    }

    async fn tts(
        &self,
        input: &SynthesisInput,
        voice: Option<&VoiceConfig>,
        overrides: Option<&Params>,
    ) -> TTSResult<Bytes> {
        self.credential()?;

        let params = self.resolve_params(voice, overrides)?;
        self.check_payload(input)?;

        debug!(
            voice_id = %required_param(&params, "voice_id")?,
            output_format = %required_param(&params, "output_format")?,
            input_len = input.as_str().len(),
            "synthesizing with Amazon Polly"
        );

        let client = self.sdk_client().await?;

        let text_type = if input.is_ssml() {
            TextType::Ssml
        } else {
            TextType::Text
        };

        let response = client
            .synthesize_speech()
            .text(input.as_str())
            .text_type(text_type)
            .output_format(OutputFormat::from(required_param(&params, "output_format")?))
            .voice_id(VoiceId::from(required_param(&params, "voice_id")?))
            .sample_rate(required_param(&params, "sample_rate")?)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "Polly synthesis failed");
                TTSError::ProviderError(format!("Polly API error: {e}"))
            })?;

        let audio = response
            .audio_stream
            .collect()
            .await
            .map_err(|e| TTSError::ProviderError(format!("failed to read audio stream: {e}")))?;

        Ok(audio.into_bytes())
    }
}
