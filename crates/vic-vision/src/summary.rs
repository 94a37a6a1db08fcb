//! Aggregation of per-image results into a single profile.

use indexmap::IndexMap;
use vic_core::random::{self, RandomSource};
use vic_core::StyleProfile;

use crate::palette::ColorTag;

/// How many tags and styles survive aggregation
pub const TOP_N: usize = 3;

/// Color tags and inferred styles for one image
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ImageAnalysis {
    pub tags: Vec<ColorTag>,
    pub styles: Vec<&'static str>,
}

/// Most frequent labels first; equal counts keep first-seen order.
pub fn top_by_frequency<'a>(labels: impl IntoIterator<Item = &'a str>, n: usize) -> Vec<String> {
    let mut counts: IndexMap<&str, usize> = IndexMap::new();
    for label in labels {
        *counts.entry(label).or_insert(0) += 1;
    }

    let mut ranked: Vec<(&str, usize)> = counts.into_iter().collect();
    ranked.sort_by(|left, right| right.1.cmp(&left.1));
    ranked.into_iter().take(n).map(|(label, _)| label.to_string()).collect()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Candidate one-line summaries for the given top styles and tags.
///
/// The "essence" phrasing needs two styles and is left out otherwise.
pub fn summary_candidates(top_styles: &[String], top_tags: &[String]) -> Vec<String> {
    let vibe = top_styles.iter().map(|s| capitalize(s)).collect::<Vec<_>>().join(" + ");
    let mut candidates = vec![
        format!("Your vibe: {}", vibe),
        format!("You lean towards {} color palettes", top_tags.join(", ")),
    ];
    if let [first, second, ..] = top_styles {
        candidates.push(format!("Style essence: {} with {} influences", first, second));
    }
    candidates
}

/// Merge per-image results into a profile with a randomly phrased summary.
pub fn summarize(analyses: &[ImageAnalysis], rng: &dyn RandomSource) -> StyleProfile {
    let top_tags = top_by_frequency(analyses.iter().flat_map(|a| a.tags.iter().map(ColorTag::as_str)), TOP_N);
    let top_styles = top_by_frequency(analyses.iter().flat_map(|a| a.styles.iter().copied()), TOP_N);

    let candidates = summary_candidates(&top_styles, &top_tags);
    let summary = random::choose(rng, &candidates).cloned().unwrap_or_default();

    StyleProfile::new(top_styles, top_tags, summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use vic_core::FixedRandom;

    fn blue() -> ImageAnalysis {
        ImageAnalysis {
            tags: vec![ColorTag::CoolTones],
            styles: vec!["crisp", "professional", "polished"],
        }
    }

    #[test]
    fn test_frequency_with_first_seen_tie_break() {
        let top = top_by_frequency(["b", "a", "c", "a", "d", "c"], 3);
        assert_eq!(top, vec!["a", "c", "b"]);
    }

    #[test]
    fn test_at_most_three() {
        let top = top_by_frequency(["a", "b", "c", "d", "e"], 3);
        assert_eq!(top, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_summary_templates() {
        let analyses = vec![blue(), blue(), blue()];

        let profile = summarize(&analyses, &FixedRandom(0));
        assert_eq!(profile.summary, "Your vibe: Crisp + Professional + Polished");
        assert_eq!(profile.top_tags, vec!["cool-tones"]);
        assert_eq!(profile.top_styles, vec!["crisp", "professional", "polished"]);

        let profile = summarize(&analyses, &FixedRandom(1));
        assert_eq!(profile.summary, "You lean towards cool-tones color palettes");

        let profile = summarize(&analyses, &FixedRandom(2));
        assert_eq!(profile.summary, "Style essence: crisp with professional influences");
    }

    #[test]
    fn test_single_style_never_picks_essence() {
        let analyses = vec![ImageAnalysis {
            tags: vec![ColorTag::CoolTones],
            styles: vec!["crisp"],
        }];
        assert_eq!(summary_candidates(&["crisp".into()], &["cool-tones".into()]).len(), 2);
        // index 2 wraps back onto the first candidate
        let profile = summarize(&analyses, &FixedRandom(2));
        assert_eq!(profile.summary, "Your vibe: Crisp");
    }

    #[test]
    fn test_mixed_images_rank_by_frequency() {
        let gray = ImageAnalysis {
            tags: vec![ColorTag::NeutralTones, ColorTag::Monochrome],
            styles: vec!["minimalist", "modern", "sophisticated"],
        };
        let profile = summarize(&[blue(), gray.clone(), gray], &FixedRandom(0));
        assert_eq!(profile.top_tags, vec!["neutral-tones", "monochrome", "cool-tones"]);
        assert_eq!(profile.top_styles, vec!["minimalist", "modern", "sophisticated"]);
    }

    #[test]
    fn test_blank_input_is_degenerate_not_an_error() {
        let profile = summarize(&[ImageAnalysis::default()], &FixedRandom(0));
        assert!(profile.top_tags.is_empty());
        assert!(profile.top_styles.is_empty());
        assert_eq!(profile.summary, "Your vibe: ");
    }
}
