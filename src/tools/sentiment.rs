//! Lexicon-based headline sentiment.
//!
//! Each token is looked up in a hand-built AFINN-style lexicon (−5..+5, sports
//! terms weighted heavier than general ones), scaled by an intensifier or a
//! negation immediately before it, and summed. The sum is damped by √n rather
//! than averaged so a headline with several strong words still reads strong.

use std::collections::{HashMap, HashSet};

use lazy_static::lazy_static;
use regex::Regex;

use crate::models::{SentimentResult, SignalBand, SignalClassification};
use crate::odds::round_half_up;

/// Multiplier for a negation two tokens back ("not a serious injury").
const DISTANT_NEGATION: f64 = -0.5;
/// Scales the scored/total token ratio so short opinion-light headlines still register.
const SUBJECTIVITY_AMPLIFIER: f64 = 3.0;
/// Lexicon scores are on a ±5 scale.
const LEXICON_SCALE: f64 = 5.0;

const STRONG_BAND: f64 = 0.3;
const MILD_BAND: f64 = 0.1;

lazy_static! {
    static ref STRIP_RE: Regex = Regex::new(r"[^a-z\s']").unwrap(); // keep letters, whitespace, apostrophes

    static ref LEXICON: HashMap<&'static str, i32> = {
        let entries: &[(&str, i32)] = &[
            // very positive sports terms
            ("cleared", 3), ("dominant", 4), ("unstoppable", 4), ("outstanding", 4),
            ("spectacular", 4), ("championship", 3), ("victory", 4), ("win", 3),
            ("wins", 3), ("winner", 3), ("winning", 3), ("triumph", 4),
            ("comeback", 3), ("record", 2), ("elite", 3), ("healthy", 3),
            ("recovered", 3), ("return", 2), ("returning", 2), ("impressive", 3),
            ("undefeated", 4), ("perfect", 4), ("great", 3), ("good", 2),
            ("strong", 2), ("excellent", 4), ("explosive", 3), ("hot", 2),
            ("sizzling", 3), ("surging", 3), ("signed", 2), ("deal", 2),
            ("extension", 2), ("clutch", 3), ("best", 3), ("top", 2),
            ("upgrade", 3), ("boosted", 2), ("power", 2), ("thriving", 3),
            ("playoff", 2), ("promoted", 3), ("confident", 2), ("ready", 2),
            ("approve", 2), ("approved", 3), ("breakthrough", 3), ("favourite", 2),
            ("favored", 2), ("lead", 2), ("leading", 2),
            // positive general terms
            ("up", 1), ("gain", 2), ("rise", 2), ("rising", 2),
            ("positive", 2), ("boost", 2), ("improve", 2), ("improved", 2),
            ("improving", 2), ("amazing", 4), ("wonderful", 4), ("fantastic", 4),
            ("brilliant", 4), ("exceptional", 4), ("safe", 2),
            // negative sports terms
            ("injured", -4), ("injury", -4), ("out", -3), ("suspended", -4),
            ("suspension", -4), ("ejected", -3), ("crash", -3), ("collision", -3),
            ("benched", -3), ("trade", -1), ("traded", -2), ("cut", -2),
            ("fired", -3), ("dismissed", -2), ("lost", -3), ("loss", -3),
            ("lose", -3), ("losing", -3), ("defeat", -3), ("defeated", -3),
            ("slump", -3), ("struggle", -2), ("struggling", -3), ("eliminated", -4),
            ("disqualified", -4), ("banned", -4), ("failed", -3), ("fails", -3),
            ("fail", -2), ("blowout", -2), ("knocked", -2), ("down", -1),
            ("hurt", -3), ("pain", -3), ("fracture", -4), ("torn", -4),
            ("surgery", -4), ("questionable", -2), ("doubtful", -3), ("ruled", -2),
            ("sidelined", -4), ("concussion", -4), ("retiring", -2), ("retired", -1),
            ("demoted", -3), ("missed", -2), ("miss", -2), ("drops", -2),
            ("dropped", -2), ("worst", -4), ("terrible", -4), ("awful", -4),
            ("bad", -2), ("poor", -2), ("weak", -2), ("chaos", -3),
            ("crisis", -4), ("scandal", -4), ("controversy", -3), ("controversial", -2),
            ("fined", -3), ("arrested", -4), ("charged", -3),
            // negation words; excluded from scoring when they are in NEGATIONS
            ("not", -1), ("never", -1), ("no", -1), ("without", -1),
            ("isnt", -1), ("arent", -1), ("wasnt", -1), ("cant", -1),
            ("wont", -1), ("dont", -1),
        ];
        entries.iter().copied().collect()
    };

    static ref INTENSIFIERS: HashMap<&'static str, f64> = [
        ("very", 1.5), ("extremely", 2.0), ("really", 1.4), ("absolutely", 1.8),
        ("totally", 1.5), ("highly", 1.4), ("barely", 0.5), ("slightly", 0.5),
        ("somewhat", 0.7), ("major", 1.5), ("massive", 1.8), ("huge", 1.6),
        ("serious", 1.4), ("significant", 1.3),
    ]
    .into_iter()
    .collect();

    static ref NEGATIONS: HashSet<&'static str> = [
        "not", "no", "never", "without", "isn't", "aren't", "wasn't", "can't", "won't", "don't",
    ]
    .into_iter()
    .collect();
}

/// Lowercase, drop everything but letters/whitespace/apostrophes, split.
fn tokenize(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    STRIP_RE
        .replace_all(&lower, "")
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

fn is_negation(token: &str) -> bool {
    NEGATIONS.contains(token)
}

/// Modifier contributed by the tokens preceding position `i`.
fn multiplier_at(words: &[String], i: usize) -> f64 {
    let mut multiplier = 1.0;
    if i > 0 {
        if let Some(m) = INTENSIFIERS.get(words[i - 1].as_str()) {
            multiplier = *m;
        }
        if is_negation(&words[i - 1]) {
            multiplier *= -1.0;
        }
    }
    if i > 1 && is_negation(&words[i - 2]) {
        multiplier *= DISTANT_NEGATION;
    }
    multiplier
}

/// Score a headline. Text without any lexicon words is neutral `{0, 0}`.
pub fn get_news_sentiment(headline: &str) -> SentimentResult {
    let words = tokenize(headline);
    let mut total_score = 0.0;
    let mut total_words = 0usize;
    let mut subjective_words = 0usize;

    for (i, word) in words.iter().enumerate() {
        let w = word.as_str();
        let Some(raw) = LEXICON.get(w) else {
            continue;
        };
        if is_negation(w) || INTENSIFIERS.contains_key(w) {
            continue;
        }
        total_score += (*raw as f64 / LEXICON_SCALE) * multiplier_at(&words, i);
        total_words += 1;
        subjective_words += 1;
    }

    if total_words == 0 {
        return SentimentResult {
            polarity: 0.0,
            subjectivity: 0.0,
        };
    }

    let polarity = (total_score / (total_words as f64).sqrt()).clamp(-1.0, 1.0);
    let subjectivity =
        (subjective_words as f64 / words.len() as f64 * SUBJECTIVITY_AMPLIFIER).min(1.0);

    SentimentResult {
        polarity: round_half_up(polarity, 2),
        subjectivity: round_half_up(subjectivity, 2),
    }
}

/// Map polarity to a directional market signal.
pub fn get_signal(polarity: f64) -> SignalClassification {
    let band = if polarity > STRONG_BAND {
        SignalBand::StrongPositive
    } else if polarity > MILD_BAND {
        SignalBand::Positive
    } else if polarity >= -MILD_BAND {
        SignalBand::Neutral
    } else if polarity >= -STRONG_BAND {
        SignalBand::Negative
    } else {
        SignalBand::StrongNegative
    };
    SignalClassification {
        band,
        label: band.label(),
        detail: band.detail(),
        polarity,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn empty_and_unscored_text_is_neutral() {
        for text in ["", "the team played today", "   ", "123 !!!"] {
            let s = get_news_sentiment(text);
            assert_eq!(s.polarity, 0.0, "{:?}", text);
            assert_eq!(s.subjectivity, 0.0, "{:?}", text);
        }
    }

    #[test]
    fn injured_is_negative() {
        let s = get_news_sentiment("player is injured");
        assert_relative_eq!(s.polarity, -0.8, epsilon = 1e-9);
        // 1 scored word of 3, ×3 → capped at 1
        assert_relative_eq!(s.subjectivity, 1.0, epsilon = 1e-9);
    }

    #[test]
    fn adjacent_negation_inverts() {
        let s = get_news_sentiment("player is not injured");
        assert_relative_eq!(s.polarity, 0.8, epsilon = 1e-9);
        assert_relative_eq!(s.subjectivity, 0.75, epsilon = 1e-9);
    }

    #[test]
    fn distant_negation_is_weaker() {
        // "not" two back: −0.8 × −0.5 = 0.4
        let s = get_news_sentiment("not really injured");
        assert_relative_eq!(s.polarity, 0.4 * 1.4, epsilon = 1e-9);
        let s = get_news_sentiment("not a injured");
        assert_relative_eq!(s.polarity, 0.4, epsilon = 1e-9);
    }

    #[test]
    fn contracted_negation_keeps_apostrophe() {
        let s = get_news_sentiment("He isn't injured");
        assert!(s.polarity > 0.0);
    }

    #[test]
    fn intensifier_scales() {
        let plain = get_news_sentiment("dominant");
        let strong = get_news_sentiment("extremely dominant");
        assert_relative_eq!(plain.polarity, 0.8, epsilon = 1e-9);
        // 0.8 × 2.0 clamps at 1
        assert_relative_eq!(strong.polarity, 1.0, epsilon = 1e-9);
        let weak = get_news_sentiment("barely dominant");
        assert_relative_eq!(weak.polarity, 0.4, epsilon = 1e-9);
    }

    #[test]
    fn negation_words_never_score_themselves() {
        // "no" is in the lexicon but is a negation; nothing else scores
        let s = get_news_sentiment("no comment");
        assert_eq!(s.polarity, 0.0);
        assert_eq!(s.subjectivity, 0.0);
    }

    #[test]
    fn sqrt_damping_over_multiple_words() {
        // cleared (+3) and crash (−3) cancel; 0 / √2 = 0
        let s = get_news_sentiment("Kyle Busch cleared for race after practice crash");
        assert_relative_eq!(s.polarity, 0.0, epsilon = 1e-9);
        // 2 of 8 tokens × 3 = 0.75
        assert_relative_eq!(s.subjectivity, 0.75, epsilon = 1e-9);

        // ruled (−2), out (−3), torn (−4): −1.8 / √3 → clamp −1
        let s = get_news_sentiment("Starting QB ruled out Sunday with torn ligament");
        assert_relative_eq!(s.polarity, -1.0, epsilon = 1e-9);

        // healthy (+3), ready (+2): 1.0 / √2 = 0.7071 → 0.71
        let s = get_news_sentiment("Ace pitcher healthy and ready for season opener");
        assert_relative_eq!(s.polarity, 0.71, epsilon = 1e-9);
    }

    #[test]
    fn punctuation_and_case_are_ignored() {
        let a = get_news_sentiment("DOMINANT win!!!");
        let b = get_news_sentiment("dominant win");
        assert_eq!(a, b);
    }

    #[test]
    fn signal_bands() {
        let cases = [
            (-0.9, SignalBand::StrongNegative),
            (-0.2, SignalBand::Negative),
            (0.0, SignalBand::Neutral),
            (0.2, SignalBand::Positive),
            (0.9, SignalBand::StrongPositive),
        ];
        for (polarity, band) in cases {
            assert_eq!(get_signal(polarity).band, band, "polarity {}", polarity);
        }
    }

    #[test]
    fn signal_band_edges() {
        assert_eq!(get_signal(0.3).band, SignalBand::Positive);
        assert_eq!(get_signal(0.31).band, SignalBand::StrongPositive);
        assert_eq!(get_signal(0.1).band, SignalBand::Neutral);
        assert_eq!(get_signal(-0.1).band, SignalBand::Neutral);
        assert_eq!(get_signal(-0.3).band, SignalBand::Negative);
        assert_eq!(get_signal(-0.31).band, SignalBand::StrongNegative);
        let s = get_signal(-0.5);
        assert_eq!(s.label, "STRONG NEGATIVE");
        assert_eq!(s.polarity, -0.5);
    }
}
