//! Extended tests for the Google Cloud client: resolution policy, validator
//! chain, the UTF-8 byte guard, and the credential gate.

use super::*;
use crate::base::{BaseTTS, Capabilities, Credential, Params, SynthesisInput, TTSError};
use crate::voice::{AudioFormat, Gender, Language, VoiceConfig};

fn client() -> GoogleClient {
    GoogleClient::new(Credential::Google {
        credentials_path: "/nonexistent/service-account.json".into(),
    })
    .unwrap()
}

fn overrides(pairs: &[(&str, &str)]) -> Params {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

// =============================================================================
// Resolution
// =============================================================================

#[test]
fn test_default_resolution() {
    let params = client().resolve_params(None, None).unwrap();

    assert_eq!(params.get("audio_encoding").unwrap(), "MP3");
    assert_eq!(params.get("gender").unwrap(), "FEMALE");
    assert_eq!(params.get("language").unwrap(), "en-US");
    assert_eq!(params.len(), 3);
}

#[test]
fn test_resolution_from_voice() {
    let vc = VoiceConfig::new(AudioFormat::OggOpus, Gender::Male, Language::KoKr);
    let params = client().resolve_params(Some(&vc), None).unwrap();

    assert_eq!(params.get("audio_encoding").unwrap(), "OGG_OPUS");
    assert_eq!(params.get("gender").unwrap(), "MALE");
    assert_eq!(params.get("language").unwrap(), "ko-KR");
}

#[test]
fn test_override_wins() {
    let vc = VoiceConfig::default();
    let extra = overrides(&[("language", "ja-JP")]);
    let params = client().resolve_params(Some(&vc), Some(&extra)).unwrap();

    assert_eq!(params.get("language").unwrap(), "ja-JP");
    assert_eq!(params.get("audio_encoding").unwrap(), "MP3");
}

#[test]
fn test_vorbis_not_offered() {
    let vc = VoiceConfig::new(AudioFormat::OggVorbis, Gender::Female, Language::EnUs);
    let err = client().resolve_params(Some(&vc), None).unwrap_err();
    assert!(matches!(err, TTSError::InvalidParams(_)));
}

#[test]
fn test_unsupported_language_is_rejected() {
    // Danish is offered by other providers but not here.
    let vc = VoiceConfig::new(AudioFormat::Mp3, Gender::Female, Language::DaDk);
    assert!(client().resolve_params(Some(&vc), None).is_err());
}

// =============================================================================
// Validation
// =============================================================================

#[test]
fn test_validator_chain() {
    let c = client();

    let good = overrides(&[
        ("audio_encoding", "OGG_OPUS"),
        ("gender", "MALE"),
        ("language", "sv-SE"),
    ]);
    assert!(c.is_valid_params(&good));

    // Wrong case for the encoding name.
    let bad_encoding = overrides(&[
        ("audio_encoding", "mp3"),
        ("gender", "MALE"),
        ("language", "sv-SE"),
    ]);
    assert!(!c.is_valid_params(&bad_encoding));

    let bad_gender = overrides(&[
        ("audio_encoding", "MP3"),
        ("gender", "NEUTRAL"),
        ("language", "sv-SE"),
    ]);
    assert!(!c.is_valid_params(&bad_gender));

    let bad_language = overrides(&[
        ("audio_encoding", "MP3"),
        ("gender", "MALE"),
        ("language", "xx-XX"),
    ]);
    assert!(!c.is_valid_params(&bad_language));
}

#[test]
fn test_every_listed_language_validates() {
    let c = client();
    for language in AVAILABLE_LANGUAGES {
        let params = overrides(&[
            ("audio_encoding", "MP3"),
            ("gender", "FEMALE"),
            ("language", language),
        ]);
        assert!(c.is_valid_params(&params), "{language} failed validation");
    }
}

// =============================================================================
// Length guard
// =============================================================================

#[test]
fn test_guard_boundary() {
    let c = client();

    assert!(c
        .check_payload(&SynthesisInput::text("a".repeat(MAX_TEXT_BYTES)))
        .is_ok());

    let err = c
        .check_payload(&SynthesisInput::text("a".repeat(MAX_TEXT_BYTES + 1)))
        .unwrap_err();
    assert!(matches!(err, TTSError::PayloadTooLarge { .. }));
}

#[test]
fn test_guard_counts_bytes_not_characters() {
    // U+3042 is three bytes in UTF-8, so a third of the limit in characters
    // already saturates it.
    let text = "あ".repeat(MAX_TEXT_BYTES / 3 + 1);
    assert!(text.chars().count() < MAX_TEXT_BYTES);
    assert!(client().check_payload(&SynthesisInput::text(text)).is_err());
}

// =============================================================================
// Credential gate and dispatch ordering
// =============================================================================

#[test]
fn test_wrong_credential_variant() {
    let err = GoogleClient::new(Credential::Azure {
        api_key: "key".into(),
    })
    .unwrap_err();
    assert!(matches!(err, TTSError::CredentialMismatch(_)));
}

#[tokio::test]
async fn test_missing_credential_checked_first() {
    let c = GoogleClient::unauthenticated();
    let err = c
        .tts(&SynthesisInput::text("hi"), None, None)
        .await
        .unwrap_err();
    assert!(matches!(err, TTSError::MissingCredential));
}

#[tokio::test]
async fn test_ssml_input_rejected() {
    let err = client()
        .tts(&SynthesisInput::ssml("<speak>hi</speak>"), None, None)
        .await
        .unwrap_err();
    assert!(matches!(err, TTSError::InvalidParams(_)));
}

#[tokio::test]
async fn test_invalid_params_rejected_before_key_load() {
    // The key file does not exist, but the parameter failure wins because
    // resolution runs before any credential material is touched.
    let bad = overrides(&[("audio_encoding", "FLAC")]);
    let err = client()
        .tts(&SynthesisInput::text("hi"), None, Some(&bad))
        .await
        .unwrap_err();
    assert!(matches!(err, TTSError::InvalidParams(_)));
}

#[tokio::test]
async fn test_oversized_payload_rejected_before_key_load() {
    let oversized = SynthesisInput::text("a".repeat(MAX_TEXT_BYTES + 1));
    let err = client().tts(&oversized, None, None).await.unwrap_err();
    assert!(matches!(err, TTSError::PayloadTooLarge { .. }));
}
