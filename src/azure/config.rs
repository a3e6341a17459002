//! Capability tables for Azure Cognitive Services speech synthesis.

use crate::voice::{AudioFormat, Gender, Language};

/// Maximum length of the complete SSML envelope, in characters.
///
/// The limit covers the document actually posted, so the `<speak>` and
/// `<voice>` wrapping counts against it, not just the text.
pub const MAX_ENVELOPE_CHARS: usize = 1024;

/// Output formats accepted in the `X-Microsoft-OutputFormat` header.
pub const AVAILABLE_FORMATS: &[&str] = &[
    "audio-16khz-128kbitrate-mono-mp3",
    "audio-16khz-16kbps-mono-siren",
    "audio-16khz-32kbitrate-mono-mp3",
    "audio-16khz-64kbitrate-mono-mp3",
    "raw-16khz-16bit-mono-pcm",
    "riff-16khz-16bit-mono-pcm",
    "riff-16khz-16kbps-mono-siren",
    "ssml-16khz-16bit-mono-tts",
];

/// Short voice names accepted by the service. The wire name is the long
/// "Microsoft Server Speech Text to Speech Voice (lang, voice)" form built
/// by the envelope.
pub const AVAILABLE_VOICES: &[&str] = &[
    "An",
    "Andika",
    "Andrei",
    "Asaf",
    "Ayumi, Apollo",
    "BenjaminRUS",
    "Caroline",
    "Catherine",
    "Cosimo, Apollo",
    "Daniel, Apollo",
    "Danny, Apollo",
    "EkaterinaRUS",
    "Filip",
    "George, Apollo",
    "Guillaume",
    "Guy24kRUS",
    "HanHanRUS",
    "HannaRUS",
    "HarmonieRUS",
    "HarukaRUS",
    "HayleyRUS",
    "HazelRUS",
    "HeamiRUS",
    "HeatherRUS",
    "Hedda",
    "HeddaRUS",
    "HedvigRUS",
    "Heera, Apollo",
    "HeidiRUS",
    "HelenaRUS",
    "HeliaRUS",
    "HelleRUS",
    "HeloisaRUS",
    "Hemant",
    "HerenaRUS",
    "HildaRUS",
    "Hoda",
    "HortenseRUS",
    "HuihuiRUS",
    "HuldaRUS",
    "Ichiro, Apollo",
    "Irina, Apollo",
    "Ivan",
    "Jakub",
    "Jessa24kRUS",
    "JessaRUS",
    "Julie, Apollo",
    "Kalpana",
    "Kalpana, Apollo",
    "Kangkang, Apollo",
    "Karsten",
    "Lado",
    "Laura, Apollo",
    "Linda",
    "LuciaRUS",
    "Matej",
    "Michael",
    "Naayf",
    "Pablo, Apollo",
    "Pattara",
    "Paul, Apollo",
    "PaulinaRUS",
    "Pavel, Apollo",
    "PriyaRUS",
    "Raul, Apollo",
    "Ravi, Apollo",
    "Rizwan",
    "Sean",
    "SedaRUS",
    "Stefan, Apollo",
    "Stefanos",
    "Susan, Apollo",
    "Szabolcs",
    "Tracy, Apollo",
    "TracyRUS",
    "Valluvar",
    "Yaoyao, Apollo",
    "Yating, Apollo",
    "ZiraRUS",
];

/// Map a shared audio format to Azure's output-format name. Only MP3 and
/// raw PCM are mapped; other formats can still be requested through a raw
/// override.
pub fn format_for(format: AudioFormat) -> Option<&'static str> {
    match format {
        AudioFormat::Mp3 => Some("audio-16khz-128kbitrate-mono-mp3"),
        AudioFormat::Pcm => Some("raw-16khz-16bit-mono-pcm"),
        AudioFormat::OggOpus | AudioFormat::OggVorbis => None,
    }
}

/// Map a (language, gender) pair to Azure's short voice name.
pub fn voice_for(language: Language, gender: Gender) -> Option<&'static str> {
    use Gender::{Female, Male};
    use Language::*;

    match (language, gender) {
        (DaDk, Female) => Some("HelleRUS"),
        (DeDe, Female) => Some("HeddaRUS"),
        (DeDe, Male) => Some("Stefan, Apollo"),
        (EnAu, Female) => Some("HayleyRUS"),
        (EnGb, Female) => Some("Susan, Apollo"),
        (EnGb, Male) => Some("George, Apollo"),
        (EnIn, Female) => Some("PriyaRUS"),
        (EnIn, Male) => Some("Ravi, Apollo"),
        (EnUs, Female) => Some("ZiraRUS"),
        (EnUs, Male) => Some("Guy24kRUS"),
        (EsEs, Female) => Some("HelenaRUS"),
        (EsEs, Male) => Some("Pablo, Apollo"),
        (FrCa, Female) => Some("HarmonieRUS"),
        (FrFr, Female) => Some("HortenseRUS"),
        (FrFr, Male) => Some("Paul, Apollo"),
        (HiIn, Female) => Some("Kalpana, Apollo"),
        (HiIn, Male) => Some("Hemant"),
        (ItIt, Female) => Some("LuciaRUS"),
        (ItIt, Male) => Some("Cosimo, Apollo"),
        (JaJp, Female) => Some("Ayumi, Apollo"),
        (JaJp, Male) => Some("Ichiro, Apollo"),
        (KoKr, Female) => Some("HeamiRUS"),
        (NbNo, Female) => Some("HuldaRUS"),
        (NlNl, Female) => Some("HannaRUS"),
        (PlPl, Female) => Some("PaulinaRUS"),
        (PtBr, Female) => Some("HeloisaRUS"),
        (PtBr, Male) => Some("Daniel, Apollo"),
        (PtPt, Female) => Some("HeliaRUS"),
        (RoRo, Male) => Some("Andrei"),
        (RuRu, Female) => Some("EkaterinaRUS"),
        (RuRu, Male) => Some("Pavel, Apollo"),
        (SvSe, Female) => Some("HedvigRUS"),
        (TrTr, Female) => Some("SedaRUS"),
        _ => None,
    }
}
