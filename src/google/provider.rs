//! Google Cloud Text-to-Speech client.
//!
//! Authenticates with a service-account key file: a short-lived RS256 JWT is
//! signed locally and exchanged at the key's token endpoint for a bearer
//! token, which authorizes the synthesis request. The response carries the
//! audio as base64 in a JSON envelope.

use std::time::{SystemTime, UNIX_EPOCH};

use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use bytes::Bytes;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use super::config::{
    AVAILABLE_ENCODINGS, AVAILABLE_GENDERS, AVAILABLE_LANGUAGES, MAX_TEXT_BYTES, encoding_for,
    gender_for, language_for,
};
use crate::base::{
    BaseTTS, Capabilities, Credential, Params, SynthesisInput, TTSError, TTSResult, check_limit,
    required_param,
};
use crate::voice::VoiceConfig;

/// Synthesis endpoint.
pub const GOOGLE_TTS_URL: &str = "https://texttospeech.googleapis.com/v1/text:synthesize";

/// OAuth scope requested for the bearer token.
const TOKEN_SCOPE: &str = "https://www.googleapis.com/auth/cloud-platform";

/// Bearer-token lifetime requested in the JWT, in seconds.
const TOKEN_TTL_SECS: u64 = 3600;

/// Fields of the service-account JSON key file the client needs.
#[derive(Deserialize)]
struct ServiceAccountKey {
    client_email: String,
    private_key: String,
    token_uri: String,
}

#[derive(Serialize)]
struct TokenClaims<'a> {
    iss: &'a str,
    scope: &'a str,
    aud: &'a str,
    iat: u64,
    exp: u64,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[derive(Deserialize)]
struct SynthesizeResponse {
    #[serde(rename = "audioContent")]
    audio_content: String,
}

/// Google Cloud synthesis client.
///
/// Accepts plain text only. The effective parameter keys are
/// `audio_encoding`, `gender`, and `language`, mirroring the voice and
/// audio-config fields of the `text:synthesize` request.
#[derive(Debug)]
pub struct GoogleClient {
    credential: Option<Credential>,
}

impl GoogleClient {
    /// Create a client from a Google credential.
    pub fn new(credential: Credential) -> TTSResult<Self> {
        match credential {
            Credential::Google { .. } => Ok(Self {
                credential: Some(credential),
            }),
            other => Err(TTSError::CredentialMismatch(format!(
                "google client cannot hold a {} credential",
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

    fn is_valid_encoding(&self, params: &Params) -> bool {
        params
            .get("audio_encoding")
            .is_some_and(|enc| AVAILABLE_ENCODINGS.contains(&enc.as_str()))
    }

    fn is_valid_gender(&self, params: &Params) -> bool {
        params
            .get("gender")
            .is_some_and(|gender| AVAILABLE_GENDERS.contains(&gender.as_str()))
    }

    fn is_valid_language(&self, params: &Params) -> bool {
        params
            .get("language")
            .is_some_and(|lang| AVAILABLE_LANGUAGES.contains(&lang.as_str()))
    }

    /// Enforce the 5000-byte limit on the UTF-8 encoding of the text.
    pub(super) fn check_payload(&self, input: &SynthesisInput) -> TTSResult<()> {
        check_limit(input.as_str().len(), MAX_TEXT_BYTES)
    }

    /// Exchange a locally-signed JWT for a bearer token.
    async fn fetch_access_token(&self, key: &ServiceAccountKey) -> TTSResult<String> {
        let iat = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|e| TTSError::AuthenticationFailed(format!("system clock error: {e}")))?
            .as_secs();

        let claims = TokenClaims {
            iss: &key.client_email,
            scope: TOKEN_SCOPE,
            aud: &key.token_uri,
            iat,
            exp: iat + TOKEN_TTL_SECS,
        };

        let signing_key = EncodingKey::from_rsa_pem(key.private_key.as_bytes())
            .map_err(|e| TTSError::AuthenticationFailed(format!("invalid private key: {e}")))?;
        let assertion = encode(&Header::new(Algorithm::RS256), &claims, &signing_key)
            .map_err(|e| TTSError::AuthenticationFailed(format!("failed to sign JWT: {e}")))?;

        let response = reqwest::Client::new()
            .post(&key.token_uri)
            .form(&[
                ("grant_type", "urn:ietf:params:oauth:grant-type:jwt-bearer"),
                ("assertion", assertion.as_str()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(TTSError::AuthenticationFailed(format!(
                "token exchange failed with {status}: {body}"
            )));
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| TTSError::AuthenticationFailed(format!("malformed token response: {e}")))?;

        Ok(token.access_token)
    }

    fn load_key(&self, path: &str) -> TTSResult<ServiceAccountKey> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            TTSError::AuthenticationFailed(format!("cannot read key file {path}: {e}"))
        })?;
        serde_json::from_str(&raw).map_err(|e| {
            TTSError::AuthenticationFailed(format!("malformed service-account key: {e}"))
        })
    }
}

impl Capabilities for GoogleClient {
    fn params_from_voice(&self, voice: &VoiceConfig) -> Params {
        let mut params = Params::new();

        if let Some(encoding) = encoding_for(voice.audio_format()) {
            params.insert("audio_encoding".into(), encoding.into());
        }

        params.insert("gender".into(), gender_for(voice.gender()).into());

        if let Some(language) = language_for(voice.language()) {
            params.insert("language".into(), language.into());
        }

        params
    }

    fn is_valid_params(&self, params: &Params) -> bool {
        self.is_valid_encoding(params)
            && self.is_valid_gender(params)
            && self.is_valid_language(params)
    }
}

#[async_trait]
impl BaseTTS for GoogleClient {
    fn provider(&self) -> &'static str {
        "google"
    }

    async fn tts(
        &self,
        input: &SynthesisInput,
        voice: Option<&VoiceConfig>,
        overrides: Option<&Params>,
    ) -> TTSResult<Bytes> {
        let credentials_path = match self.credential()? {
            Credential::Google { credentials_path } => credentials_path.clone(),
            other => {
                return Err(TTSError::CredentialMismatch(format!(
                    "google client cannot hold a {} credential",
                    other.provider()
                )));
            }
        };

        if input.is_ssml() {
            return Err(TTSError::InvalidParams(
                "SSML input is not supported by the Google client".into(),
            ));
        }

        let params = self.resolve_params(voice, overrides)?;
        self.check_payload(input)?;

        debug!(
            language = %required_param(&params, "language")?,
            audio_encoding = %required_param(&params, "audio_encoding")?,
            input_len = input.as_str().len(),
            "synthesizing with Google Cloud"
        );

        let key = self.load_key(&credentials_path)?;
        let token = self.fetch_access_token(&key).await?;

        let body = serde_json::json!({
            "input": { "text": input.as_str() },
            "voice": {
                "languageCode": required_param(&params, "language")?,
                "ssmlGender": required_param(&params, "gender")?,
            },
            "audioConfig": {
                "audioEncoding": required_param(&params, "audio_encoding")?,
            },
        });

        let response = reqwest::Client::new()
            .post(GOOGLE_TTS_URL)
            .bearer_auth(&token)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, "Google synthesis failed");
            return Err(TTSError::ProviderError(format!(
                "Google API error {status}: {body}"
            )));
        }

        let synthesized: SynthesizeResponse = response
            .json()
            .await
            .map_err(|e| TTSError::ProviderError(format!("malformed synthesis response: {e}")))?;

        let audio = BASE64
            .decode(synthesized.audio_content)
            .map_err(|e| TTSError::ProviderError(format!("invalid base64 audio content: {e}")))?;

        Ok(Bytes::from(audio))
    }
}
