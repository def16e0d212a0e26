use unicode_normalization::UnicodeNormalization;

/// Circle-like glyphs that editors use interchangeably for censored or
/// templated syllables in voice lines (○○ちゃん, ●●さん, ...). All of
/// them collapse to `CANONICAL_CIRCLE` so the corpus sees one spelling.
const CIRCLE_GLYPHS: [char; 14] = [
    '○', // U+25CB white circle (the canonical form)
    '●', // U+25CF black circle
    '◯', // U+25EF large circle
    '⚪', // U+26AA medium white circle
    '⚫', // U+26AB medium black circle
    '◉', // U+25C9 fisheye
    '◎', // U+25CE bullseye
    '⬤', // U+2B24 black large circle
    '〇', // U+3007 ideographic number zero
    '◦', // U+25E6 white bullet
    '•', // U+2022 bullet
    '∙', // U+2219 bullet operator
    '⦿', // U+29BF circled bullet
    '◌', // U+25CC dotted circle
];

const CANONICAL_CIRCLE: char = '○';

/// Canonicalizes scraped text for corpus building.
///
/// Stage 1 is Unicode NFKC (full-width ASCII folds to half-width,
/// half-width katakana folds to full-width, spacing and punctuation
/// variants collapse). Stage 2 rewrites every member of the circle-glyph
/// set to the canonical white circle. The whole transform is idempotent.
#[derive(Debug, Clone)]
pub struct TextNormalizer {
    circle_glyphs: Vec<char>,
    canonical_circle: char,
}

impl TextNormalizer {
    pub fn new(circle_glyphs: Vec<char>, canonical_circle: char) -> Self {
        Self {
            circle_glyphs,
            canonical_circle,
        }
    }

    pub fn normalize(&self, text: &str) -> String {
        text.nfkc()
            .map(|c| {
                if self.circle_glyphs.contains(&c) {
                    self.canonical_circle
                } else {
                    c
                }
            })
            .collect()
    }

    /// Element-wise `normalize`; output length and order mirror the input.
    pub fn normalize_many(&self, texts: &[String]) -> Vec<String> {
        texts.iter().map(|t| self.normalize(t)).collect()
    }
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new(CIRCLE_GLYPHS.to_vec(), CANONICAL_CIRCLE)
    }
}
