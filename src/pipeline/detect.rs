//! Lightweight language detection.
//!
//! Scores function-word indicator lexicons plus diacritic signals for the
//! languages the service commonly sees, and returns an ISO 639-1 code. The
//! pipeline only branches on `"en"` versus everything else, so ambiguous or
//! very short input defaults to `"en"`, which skips a needless translation.
//! Sits behind [`DetectLanguage`] so a remote detector can replace it.

use super::gateway::{DetectLanguage, ModelError};

/// Below this many characters there is not enough signal to score.
const SHORT_TEXT_LIMIT: usize = 20;

struct LanguageProfile {
    code: &'static str,
    indicators: &'static [&'static str],
    diacritics: &'static [char],
}

/// English first: ties fall back to the no-translation path.
const PROFILES: &[LanguageProfile] = &[
    LanguageProfile {
        code: "en",
        indicators: &[
            "the ", "and ", "was ", "for ", "are ", "not ", "but ", "you ",
            "with ", "this ", "that ", "have ", "from ", "they ", "will ",
            "been ", "were ", "which ", "their ", "would ",
        ],
        diacritics: &[],
    },
    LanguageProfile {
        code: "fr",
        indicators: &[
            "le ", "la ", "les ", "des ", "une ", "est ", "dans ", "avec ",
            "pour ", "sur ", "mais ", "cette ", "sont ", "aux ", "chez ",
            "d'", "l'", "qu'", "n'", "c'", "j'",
        ],
        diacritics: &[
            'é', 'è', 'ê', 'ë', 'ç', 'ù', 'û', 'î', 'ï', 'ô', 'à', 'â', 'œ', 'æ',
        ],
    },
    LanguageProfile {
        code: "es",
        indicators: &[
            "el ", "los ", "las ", "una ", "que ", "con ", "para ", "por ",
            "como ", "pero ", "muy ", "está ", "están ", "son ", "tiene ",
            "hay ", "más ", "también ",
        ],
        diacritics: &['ñ', 'á', 'í', 'ó', 'ú', '¿', '¡'],
    },
    LanguageProfile {
        code: "de",
        indicators: &[
            "der ", "die ", "das ", "und ", "ist ", "nicht ", "ein ", "eine ",
            "mit ", "für ", "auf ", "sich ", "von ", "wird ", "sind ", "auch ",
            "dem ", "den ", "zu ", "im ",
        ],
        diacritics: &['ä', 'ö', 'ü', 'ß'],
    },
];

/// Indicator-lexicon language detector.
pub struct HeuristicDetector;

impl HeuristicDetector {
    pub fn new() -> Self {
        Self
    }
}

impl Default for HeuristicDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl DetectLanguage for HeuristicDetector {
    fn detect(&self, text: &str) -> Result<String, ModelError> {
        Ok(detect(text))
    }
}

fn detect(text: &str) -> String {
    if text.trim().len() < SHORT_TEXT_LIMIT {
        return "en".to_string();
    }

    let lower = text.to_lowercase();

    let mut best = PROFILES[0].code;
    let mut best_score = score(&lower, &PROFILES[0]);
    for profile in &PROFILES[1..] {
        let profile_score = score(&lower, profile);
        if profile_score > best_score {
            best = profile.code;
            best_score = profile_score;
        }
    }
    best.to_string()
}

fn score(lower_text: &str, profile: &LanguageProfile) -> u32 {
    count_indicators(lower_text, profile.indicators)
        + count_diacritics(lower_text, profile.diacritics) / 2
}

/// Count indicator occurrences in the text (each occurrence adds 1).
fn count_indicators(lower_text: &str, indicators: &[&str]) -> u32 {
    let mut count = 0u32;
    for &indicator in indicators {
        count += lower_text.matches(indicator).count() as u32;
    }
    count
}

/// Count language-specific diacritics. Weighted at half an indicator each
/// since single characters are a weaker signal than function words.
fn count_diacritics(lower_text: &str, diacritics: &[char]) -> u32 {
    lower_text.chars().filter(|c| diacritics.contains(c)).count() as u32
}
