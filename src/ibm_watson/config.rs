//! Capability tables and the accept-header grammar for IBM Watson TTS.
//!
//! Watson negotiates the audio format through the `Accept` header, and the
//! legal header strings follow a small grammar: a codec name, optionally or
//! mandatorily followed by a `;rate=<integer>` suffix depending on which
//! class the codec falls into. The grammar is validated here in full before
//! any request is made.

use crate::voice::{AudioFormat, Gender, Language};

/// Maximum size of the JSON-encoded `text` field, in bytes.
///
/// Watson counts the bytes of the JSON document it receives, so quoting and
/// escape sequences count against the limit, not just the raw characters.
pub const MAX_TEXT_BYTES: usize = 5 * 1024;

/// Inclusive bounds for the `rate=` suffix of an accept string.
pub const MIN_RATE: u32 = 8000;
pub const MAX_RATE: u32 = 192_000;

/// Codecs that reject any rate suffix.
pub const ACCEPT_DISALLOW_RATE: &[&str] =
    &["audio/basic", "audio/webm", "audio/webm;codecs=opus"];

/// Codecs that take an optional rate suffix.
pub const ACCEPT_ALLOW_RATE: &[&str] = &[
    "audio/flac",
    "audio/mp3",
    "audio/mpeg",
    "audio/ogg",
    "audio/ogg;codecs=opus",
    "audio/ogg;codecs=vorbis",
    "audio/wav",
    "audio/webm;codecs=vorbis",
];

/// Codecs that require a rate suffix.
pub const ACCEPT_REQUIRE_RATE: &[&str] = &["audio/l16", "audio/mulaw"];

/// Every voice Watson offers.
pub const AVAILABLE_VOICES: &[&str] = &[
    "de-DE_BirgitVoice",
    "de-DE_DieterVoice",
    "en-GB_KateVoice",
    "en-US_AllisonVoice",
    "en-US_LisaVoice",
    "en-US_MichaelVoice",
    "es-ES_EnriqueVoice",
    "es-ES_LauraVoice",
    "es-LA_SofiaVoice",
    "es-US_SofiaVoice",
    "fr-FR_ReneeVoice",
    "it-IT_FrancescaVoice",
    "ja-JP_EmiVoice",
    "pt-BR_IsabelaVoice",
];

/// Map a shared audio format to Watson's accept string. PCM has no
/// counterpart in the vocabulary mapping; raw overrides may still request
/// `audio/l16` with an explicit rate.
pub fn accept_for(format: AudioFormat) -> Option<&'static str> {
    match format {
        AudioFormat::Mp3 => Some("audio/mp3"),
        AudioFormat::OggOpus => Some("audio/ogg;codecs=opus"),
        AudioFormat::OggVorbis => Some("audio/ogg;codecs=vorbis"),
        AudioFormat::Pcm => None,
    }
}

/// Map a (language, gender) pair to Watson's voice identifier.
pub fn voice_for(language: Language, gender: Gender) -> Option<&'static str> {
    use Gender::{Female, Male};
    use Language::*;

    match (language, gender) {
        (DeDe, Female) => Some("de-DE_BirgitVoice"),
        (DeDe, Male) => Some("de-DE_DieterVoice"),
        (EnGb, Female) => Some("en-GB_KateVoice"),
        (EnUs, Female) => Some("en-US_AllisonVoice"),
        (EnUs, Male) => Some("en-US_MichaelVoice"),
        (EsEs, Female) => Some("es-ES_LauraVoice"),
        (EsEs, Male) => Some("es-ES_EnriqueVoice"),
        (EsUs, Female) => Some("es-US_SofiaVoice"),
        (FrFr, Female) => Some("fr-FR_ReneeVoice"),
        (ItIt, Female) => Some("it-IT_FrancescaVoice"),
        (JaJp, Female) => Some("ja-JP_EmiVoice"),
        (PtBr, Female) => Some("pt-BR_IsabelaVoice"),
        _ => None,
    }
}

/// Parse a `;rate=<integer>` suffix and check it against the rate bounds.
///
/// Anything else (missing `=`, a non-numeric value, trailing garbage, or a
/// rate outside `MIN_RATE..=MAX_RATE`) is invalid.
fn valid_rate_suffix(suffix: &str) -> bool {
    let Some(value) = suffix.strip_prefix(";rate=") else {
        return false;
    };
    match value.parse::<u32>() {
        Ok(rate) => (MIN_RATE..=MAX_RATE).contains(&rate),
        Err(_) => false,
    }
}

/// Whether an accept string is legal under Watson's grammar.
///
/// Codec prefixes overlap (`audio/ogg` is a prefix of
/// `audio/ogg;codecs=opus`), so every class entry is tried; one legal
/// reading is enough.
pub fn is_valid_accept(accept: &str) -> bool {
    if ACCEPT_DISALLOW_RATE.contains(&accept) {
        return true;
    }

    let allowed = ACCEPT_ALLOW_RATE.iter().any(|codec| {
        accept == *codec
            || accept
                .strip_prefix(codec)
                .is_some_and(valid_rate_suffix)
    });
    if allowed {
        return true;
    }

    ACCEPT_REQUIRE_RATE.iter().any(|codec| {
        accept
            .strip_prefix(codec)
            .is_some_and(valid_rate_suffix)
    })
}
