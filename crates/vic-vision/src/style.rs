use crate::palette::ColorTag;

/// Maximum number of styles inferred from one image
pub const MAX_STYLES: usize = 3;

/// Candidate style adjectives per color tag
pub const STYLE_TABLE: &[(ColorTag, [&str; 3])] = &[
    (ColorTag::NeutralTones, ["minimalist", "modern", "sophisticated"]),
    (ColorTag::Monochrome, ["minimalist", "contemporary", "clean"]),
    (ColorTag::DarkNeutrals, ["edgy", "urban", "streetwear"]),
    (ColorTag::LightNeutrals, ["soft", "casual", "relaxed"]),
    (ColorTag::WarmTones, ["earthy", "bohemian", "cozy"]),
    (ColorTag::CoolTones, ["crisp", "professional", "polished"]),
];

fn styles_for(tag: ColorTag) -> &'static [&'static str] {
    STYLE_TABLE
        .iter()
        .find(|(t, _)| *t == tag)
        .map(|(_, styles)| styles.as_slice())
        .unwrap_or(&[])
}

/// Union of the candidate styles of every tag, in tag order, capped at three.
pub fn infer_style(tags: &[ColorTag]) -> Vec<&'static str> {
    let mut styles: Vec<&'static str> = Vec::new();
    for tag in tags {
        for style in styles_for(*tag) {
            if !styles.contains(style) {
                styles.push(style);
            }
        }
    }
    styles.truncate(MAX_STYLES);
    styles
}
