//! Extended tests for the IBM Watson client: resolution policy, accept
//! grammar enforcement, the JSON-byte length guard, and the credential gate.

use super::*;
use crate::base::{BaseTTS, Capabilities, Credential, Params, SynthesisInput, TTSError};
use crate::voice::{AudioFormat, Gender, Language, VoiceConfig};

fn client() -> WatsonClient {
    WatsonClient::new(Credential::Watson {
        username: "user".into(),
        password: "pass".into(),
        url: "https://stream.watsonplatform.net/text-to-speech/api".into(),
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

    assert_eq!(params.get("accept").unwrap(), "audio/mp3");
    assert_eq!(params.get("voice").unwrap(), "en-US_AllisonVoice");
    assert_eq!(params.len(), 2);
}

#[test]
fn test_resolution_from_voice() {
    let vc = VoiceConfig::new(AudioFormat::OggOpus, Gender::Female, Language::JaJp);
    let params = client().resolve_params(Some(&vc), None).unwrap();

    assert_eq!(params.get("accept").unwrap(), "audio/ogg;codecs=opus");
    assert_eq!(params.get("voice").unwrap(), "ja-JP_EmiVoice");
}

#[test]
fn test_override_wins() {
    let vc = VoiceConfig::default();
    let extra = overrides(&[("accept", "audio/l16;rate=16000")]);
    let params = client().resolve_params(Some(&vc), Some(&extra)).unwrap();

    assert_eq!(params.get("accept").unwrap(), "audio/l16;rate=16000");
    assert_eq!(params.get("voice").unwrap(), "en-US_AllisonVoice");
}

#[test]
fn test_override_only_is_verbatim() {
    let extra = overrides(&[("accept", "audio/wav"), ("voice", "en-GB_KateVoice")]);
    let params = client().resolve_params(None, Some(&extra)).unwrap();
    assert_eq!(params, extra);
}

#[test]
fn test_pcm_not_offered() {
    // No accept mapping for raw PCM, so the key is absent and validation
    // fails.
    let vc = VoiceConfig::new(AudioFormat::Pcm, Gender::Female, Language::EnUs);
    let err = client().resolve_params(Some(&vc), None).unwrap_err();
    assert!(matches!(err, TTSError::InvalidParams(_)));
}

#[test]
fn test_unmapped_pair_is_rejected() {
    // No male Japanese voice in the table.
    let vc = VoiceConfig::new(AudioFormat::Mp3, Gender::Male, Language::JaJp);
    assert!(client().resolve_params(Some(&vc), None).is_err());
}

#[test]
fn test_customization_id_passes_validation() {
    let extra = overrides(&[("customization_id", "abc-123")]);
    let params = client()
        .resolve_params(Some(&VoiceConfig::default()), Some(&extra))
        .unwrap();
    assert_eq!(params.get("customization_id").unwrap(), "abc-123");
}

// =============================================================================
// Validation
// =============================================================================

#[test]
fn test_accept_grammar_enforced_on_overrides() {
    let c = client();

    let good = overrides(&[("accept", "audio/l16;rate=192000"), ("voice", "en-US_LisaVoice")]);
    assert!(c.is_valid_params(&good));

    let over_max = overrides(&[("accept", "audio/l16;rate=192001"), ("voice", "en-US_LisaVoice")]);
    assert!(!c.is_valid_params(&over_max));
}

#[test]
fn test_unknown_voice_is_rejected() {
    let params = overrides(&[("accept", "audio/mp3"), ("voice", "en-US_NobodyVoice")]);
    assert!(!client().is_valid_params(&params));
}

#[test]
fn test_every_listed_voice_validates() {
    let c = client();
    for voice in AVAILABLE_VOICES {
        let params = overrides(&[("accept", "audio/mp3"), ("voice", voice)]);
        assert!(c.is_valid_params(&params), "{voice} failed validation");
    }
}

// =============================================================================
// Length guard
// =============================================================================

#[test]
fn test_guard_measures_the_json_document() {
    let c = client();

    // {"text":""} is 11 bytes of overhead, so the largest legal plain
    // ASCII payload is MAX_TEXT_BYTES - 11 characters.
    let headroom = MAX_TEXT_BYTES - 11;
    assert!(c.check_payload(&SynthesisInput::text("a".repeat(headroom))).is_ok());

    let err = c
        .check_payload(&SynthesisInput::text("a".repeat(headroom + 1)))
        .unwrap_err();
    assert!(matches!(err, TTSError::PayloadTooLarge { .. }));
}

#[test]
fn test_guard_counts_escape_sequences() {
    // Each quote character encodes as two bytes (\") in the JSON body, so
    // a string that fits as characters can be oversized on the wire.
    let headroom = MAX_TEXT_BYTES - 11;
    let quotes = "\"".repeat(headroom / 2 + 1);
    assert!(quotes.chars().count() < headroom);
    assert!(client().check_payload(&SynthesisInput::text(quotes)).is_err());
}

// =============================================================================
// Credential gate and dispatch ordering
// =============================================================================

#[test]
fn test_wrong_credential_variant() {
    let err = WatsonClient::new(Credential::Azure {
        api_key: "key".into(),
    })
    .unwrap_err();
    assert!(matches!(err, TTSError::CredentialMismatch(_)));
}

#[tokio::test]
async fn test_missing_credential_checked_first() {
    let c = WatsonClient::unauthenticated();
    let bad = overrides(&[("accept", "audio/unknown")]);

    let err = c
        .tts(&SynthesisInput::text("hi"), None, Some(&bad))
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
async fn test_invalid_params_rejected_before_dispatch() {
    let bad = overrides(&[("accept", "audio/l16"), ("voice", "en-US_LisaVoice")]);
    let err = client()
        .tts(&SynthesisInput::text("hi"), None, Some(&bad))
        .await
        .unwrap_err();
    assert!(matches!(err, TTSError::InvalidParams(_)));
}

#[tokio::test]
async fn test_oversized_payload_rejected_before_dispatch() {
    let oversized = SynthesisInput::text("a".repeat(MAX_TEXT_BYTES));
    let err = client().tts(&oversized, None, None).await.unwrap_err();
    assert!(matches!(err, TTSError::PayloadTooLarge { .. }));
}
