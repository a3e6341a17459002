//! Vendor-neutral voice description.
//!
//! This module defines the closed vocabularies shared by every provider
//! (audio format, speaker gender, and language) and the immutable
//! [`VoiceConfig`] triple built from them. Each provider maps a
//! `VoiceConfig` into its own parameter vocabulary through its capability
//! tables; none of these types carry provider-specific meaning on their own.

use serde::{Deserialize, Serialize};

// =============================================================================
// Audio Format
// =============================================================================

/// Requested audio container/codec, independent of any provider.
///
/// Every provider supports a strict subset of these; asking a provider for a
/// format outside its subset leaves the derived parameter set incomplete and
/// the validator rejects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AudioFormat {
    /// MP3 (supported by all four providers)
    #[default]
    #[serde(rename = "mp3")]
    Mp3,
    /// Opus codec in an OGG container (Google, Watson)
    #[serde(rename = "ogg_opus")]
    OggOpus,
    /// Vorbis codec in an OGG container (Polly, Watson)
    #[serde(rename = "ogg_vorbis")]
    OggVorbis,
    /// Raw 16-bit PCM (Polly, Azure)
    #[serde(rename = "pcm")]
    Pcm,
}

impl AudioFormat {
    /// Neutral token for this format.
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mp3 => "mp3",
            Self::OggOpus => "ogg_opus",
            Self::OggVorbis => "ogg_vorbis",
            Self::Pcm => "pcm",
        }
    }
}

impl std::fmt::Display for AudioFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// =============================================================================
// Gender
// =============================================================================

/// Speaker gender dimension of a voice description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "male")]
    Male,
    #[default]
    #[serde(rename = "female")]
    Female,
}

impl Gender {
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// =============================================================================
// Language
// =============================================================================

/// Languages addressable through the shared vocabulary.
///
/// `as_str()` yields the BCP-47 locale tag. Each provider supports a
/// documented subset; unsupported pairs are simply absent from that
/// provider's capability table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Language {
    /// Danish (Azure, Polly)
    #[serde(rename = "da-DK")]
    DaDk,
    /// German (all providers)
    #[serde(rename = "de-DE")]
    DeDe,
    /// Australian English (Azure, Google, Polly)
    #[serde(rename = "en-AU")]
    EnAu,
    /// British English (all providers)
    #[serde(rename = "en-GB")]
    EnGb,
    /// Indian English (Azure, Polly)
    #[serde(rename = "en-IN")]
    EnIn,
    /// US English (all providers)
    #[default]
    #[serde(rename = "en-US")]
    EnUs,
    /// Castilian Spanish (all providers)
    #[serde(rename = "es-ES")]
    EsEs,
    /// US Spanish (Polly, Watson)
    #[serde(rename = "es-US")]
    EsUs,
    /// Canadian French (Azure, Google, Polly)
    #[serde(rename = "fr-CA")]
    FrCa,
    /// French (all providers)
    #[serde(rename = "fr-FR")]
    FrFr,
    /// Hindi (Azure, Polly)
    #[serde(rename = "hi-IN")]
    HiIn,
    /// Italian (all providers)
    #[serde(rename = "it-IT")]
    ItIt,
    /// Japanese (all providers)
    #[serde(rename = "ja-JP")]
    JaJp,
    /// Korean (Azure, Google, Polly)
    #[serde(rename = "ko-KR")]
    KoKr,
    /// Norwegian Bokmål (Azure, Polly)
    #[serde(rename = "nb-NO")]
    NbNo,
    /// Dutch (Azure, Google, Polly)
    #[serde(rename = "nl-NL")]
    NlNl,
    /// Polish (Azure, Polly)
    #[serde(rename = "pl-PL")]
    PlPl,
    /// Brazilian Portuguese (all providers)
    #[serde(rename = "pt-BR")]
    PtBr,
    /// European Portuguese (Azure, Polly)
    #[serde(rename = "pt-PT")]
    PtPt,
    /// Romanian (Azure, Polly)
    #[serde(rename = "ro-RO")]
    RoRo,
    /// Russian (Azure, Polly)
    #[serde(rename = "ru-RU")]
    RuRu,
    /// Swedish (Azure, Google, Polly)
    #[serde(rename = "sv-SE")]
    SvSe,
    /// Turkish (Azure, Google, Polly)
    #[serde(rename = "tr-TR")]
    TrTr,
}

impl Language {
    /// BCP-47 locale tag for this language.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DaDk => "da-DK",
            Self::DeDe => "de-DE",
            Self::EnAu => "en-AU",
            Self::EnGb => "en-GB",
            Self::EnIn => "en-IN",
            Self::EnUs => "en-US",
            Self::EsEs => "es-ES",
            Self::EsUs => "es-US",
            Self::FrCa => "fr-CA",
            Self::FrFr => "fr-FR",
            Self::HiIn => "hi-IN",
            Self::ItIt => "it-IT",
            Self::JaJp => "ja-JP",
            Self::KoKr => "ko-KR",
            Self::NbNo => "nb-NO",
            Self::NlNl => "nl-NL",
            Self::PlPl => "pl-PL",
            Self::PtBr => "pt-BR",
            Self::PtPt => "pt-PT",
            Self::RoRo => "ro-RO",
            Self::RuRu => "ru-RU",
            Self::SvSe => "sv-SE",
            Self::TrTr => "tr-TR",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// =============================================================================
// Voice Config
// =============================================================================

/// Immutable, always-valid description of the desired voice and audio.
///
/// Because every dimension is a closed enum, a `VoiceConfig` cannot hold an
/// out-of-domain value; there is no partially-constructed state. It is used
/// purely as input to a provider's parameter resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoiceConfig {
    audio_format: AudioFormat,
    gender: Gender,
    language: Language,
}

impl Default for VoiceConfig {
    /// MP3 / female / US English.
    fn default() -> Self {
        Self::new(AudioFormat::Mp3, Gender::Female, Language::EnUs)
    }
}

impl VoiceConfig {
    pub fn new(audio_format: AudioFormat, gender: Gender, language: Language) -> Self {
        Self {
            audio_format,
            gender,
            language,
        }
    }

    #[inline]
    pub fn audio_format(&self) -> AudioFormat {
        self.audio_format
    }

    #[inline]
    pub fn gender(&self) -> Gender {
        self.gender
    }

    #[inline]
    pub fn language(&self) -> Language {
        self.language
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_voice_config() {
        let vc = VoiceConfig::default();
        assert_eq!(vc.audio_format(), AudioFormat::Mp3);
        assert_eq!(vc.gender(), Gender::Female);
        assert_eq!(vc.language(), Language::EnUs);
    }

    #[test]
    fn test_language_tags() {
        assert_eq!(Language::EnUs.as_str(), "en-US");
        assert_eq!(Language::PtBr.as_str(), "pt-BR");
        assert_eq!(Language::NbNo.as_str(), "nb-NO");
    }

    #[test]
    fn test_wire_names() {
        assert_eq!(AudioFormat::OggVorbis.as_str(), "ogg_vorbis");
        assert_eq!(Gender::Male.to_string(), "male");
        assert_eq!(
            serde_json::to_string(&Language::JaJp).unwrap(),
            "\"ja-JP\""
        );
    }
}
