//! Capability tables for Amazon Polly.
//!
//! Static, read-only data describing what Polly accepts: the mapping from
//! the shared voice vocabulary into Polly's parameter names, and the full
//! legal value sets used by the validator. The mapping tables are partial;
//! raw overrides may still name any value from the legal sets.

use crate::voice::{AudioFormat, Gender, Language};

/// Maximum plain-text input length, in characters.
pub const MAX_TEXT_LENGTH: usize = 3000;

/// Maximum SSML input length including markup, in characters.
pub const MAX_SSML_LENGTH: usize = 6000;

/// Every voice id Polly accepts, including the accented spellings the API
/// tolerates alongside their ASCII forms.
pub const AVAILABLE_VOICE_IDS: &[&str] = &[
    "Aditi", "Amy", "Astrid", "Brian", "Carla", "Carmen", "Celine", "Chantal", "Conchita",
    "Cristiano", "Céline", "Dora", "Dóra", "Emma", "Enrique", "Ewa", "Filiz", "Geraint",
    "Giorgio", "Gwyneth", "Hans", "Ines", "Inês", "Ivy", "Jacek", "Jan", "Joanna", "Joey",
    "Justin", "Karl", "Kendra", "Kimberly", "Liv", "Lotte", "Léa", "Mads", "Maja", "Marlene",
    "Mathieu", "Matthew", "Maxim", "Miguel", "Mizuki", "Naja", "Nicole", "Penelope", "Penélope",
    "Raveena", "Ricardo", "Ruben", "Russell", "Salli", "Seoyeon", "Takumi", "Tatyana", "Vicki",
    "Vitoria", "Vitória",
];

/// Legal sample rates per output format. Also serves as the legal format
/// set: a format absent here is not a Polly format.
pub fn sample_rates_for(output_format: &str) -> Option<&'static [&'static str]> {
    match output_format {
        "mp3" | "ogg_vorbis" => Some(&["8000", "16000", "22050"]),
        "pcm" => Some(&["8000", "16000"]),
        _ => None,
    }
}

/// Map a shared audio format to Polly's `(output_format, sample_rate)`
/// defaults. Opus is not offered by Polly, so the lookup misses for it.
pub fn format_params(format: AudioFormat) -> Option<(&'static str, &'static str)> {
    match format {
        AudioFormat::Mp3 => Some(("mp3", "22050")),
        AudioFormat::OggVorbis => Some(("ogg_vorbis", "22050")),
        AudioFormat::Pcm => Some(("pcm", "16000")),
        AudioFormat::OggOpus => None,
    }
}

/// Map a (language, gender) pair to Polly's voice id.
///
/// Aditi is bilingual and serves both en-IN and hi-IN.
pub fn voice_for(language: Language, gender: Gender) -> Option<&'static str> {
    use Gender::{Female, Male};
    use Language::*;

    match (language, gender) {
        (DaDk, Female) => Some("Naja"),
        (DaDk, Male) => Some("Mads"),
        (DeDe, Female) => Some("Marlene"),
        (DeDe, Male) => Some("Hans"),
        (EnAu, Female) => Some("Nicole"),
        (EnAu, Male) => Some("Russell"),
        (EnGb, Female) => Some("Amy"),
        (EnGb, Male) => Some("Brian"),
        (EnIn, Female) => Some("Aditi"),
        (EnUs, Female) => Some("Joanna"),
        (EnUs, Male) => Some("Joey"),
        (EsEs, Female) => Some("Conchita"),
        (EsEs, Male) => Some("Enrique"),
        (EsUs, Female) => Some("Penelope"),
        (EsUs, Male) => Some("Miguel"),
        (FrCa, Female) => Some("Chantal"),
        (FrFr, Female) => Some("Celine"),
        (FrFr, Male) => Some("Mathieu"),
        (HiIn, Female) => Some("Aditi"),
        (ItIt, Female) => Some("Carla"),
        (ItIt, Male) => Some("Giorgio"),
        (JaJp, Female) => Some("Mizuki"),
        (JaJp, Male) => Some("Takumi"),
        (KoKr, Female) => Some("Seoyeon"),
        (NbNo, Female) => Some("Liv"),
        (NlNl, Female) => Some("Lotte"),
        (NlNl, Male) => Some("Ruben"),
        (PlPl, Female) => Some("Ewa"),
        (PlPl, Male) => Some("Jacek"),
        (PtBr, Female) => Some("Vitoria"),
        (PtBr, Male) => Some("Ricardo"),
        (PtPt, Female) => Some("Ines"),
        (PtPt, Male) => Some("Cristiano"),
        (RoRo, Female) => Some("Carmen"),
        (RuRu, Female) => Some("Tatyana"),
        (RuRu, Male) => Some("Maxim"),
        (SvSe, Female) => Some("Astrid"),
        (TrTr, Female) => Some("Filiz"),
        _ => None,
    }
}
