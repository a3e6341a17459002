//! Capability tables for Google Cloud Text-to-Speech.

use crate::voice::{AudioFormat, Gender, Language};

/// Maximum input size in UTF-8 bytes of the raw text.
pub const MAX_TEXT_BYTES: usize = 5000;

/// Audio encodings the client offers.
pub const AVAILABLE_ENCODINGS: &[&str] = &["MP3", "OGG_OPUS"];

/// SSML genders the client offers.
pub const AVAILABLE_GENDERS: &[&str] = &["MALE", "FEMALE"];

/// Language tags the client offers.
pub const AVAILABLE_LANGUAGES: &[&str] = &[
    "nl-NL",
    "en-AU",
    "en-GB",
    "en-US",
    "fr-FR",
    "fr-CA",
    "de-DE",
    "it-IT",
    "ja-JP",
    "ko-KR",
    "pt-BR",
    "es-ES",
    "sv-SE",
    "tr-TR",
];

/// Map a shared audio format to Google's encoding name. Vorbis and raw PCM
/// are not offered.
pub fn encoding_for(format: AudioFormat) -> Option<&'static str> {
    match format {
        AudioFormat::Mp3 => Some("MP3"),
        AudioFormat::OggOpus => Some("OGG_OPUS"),
        AudioFormat::OggVorbis | AudioFormat::Pcm => None,
    }
}

pub fn gender_for(gender: Gender) -> &'static str {
    match gender {
        Gender::Male => "MALE",
        Gender::Female => "FEMALE",
    }
}

/// Map a shared language to Google's tag, if the language is offered.
pub fn language_for(language: Language) -> Option<&'static str> {
    let tag = language.as_str();
    AVAILABLE_LANGUAGES.contains(&tag).then_some(tag)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encoding_mapping() {
        assert_eq!(encoding_for(AudioFormat::Mp3), Some("MP3"));
        assert_eq!(encoding_for(AudioFormat::OggOpus), Some("OGG_OPUS"));
        assert_eq!(encoding_for(AudioFormat::OggVorbis), None);
        assert_eq!(encoding_for(AudioFormat::Pcm), None);
    }

    #[test]
    fn test_gender_mapping_is_total() {
        assert_eq!(gender_for(Gender::Male), "MALE");
        assert_eq!(gender_for(Gender::Female), "FEMALE");
    }

    #[test]
    fn test_language_lookup() {
        assert_eq!(language_for(Language::EnUs), Some("en-US"));
        assert_eq!(language_for(Language::FrCa), Some("fr-CA"));
        // Offered by other providers but not here.
        assert_eq!(language_for(Language::DaDk), None);
    }
}
