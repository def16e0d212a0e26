use std::fs;
use url::Url;

use crate::extractor::Extractor;
use crate::page::Page;

fn fixture_page(name: &str) -> Page {
    let html = fs::read_to_string(format!("src/extractor/tests/fixtures/{name}"))
        .expect("Failed to read test fixture");
    Page::parse(
        &html,
        Url::parse("https://seesaawiki.jp/imascg/d/fixture").unwrap(),
    )
}

#[test]
fn extracts_full_card_page() {
    let page = fixture_page("card_page.html");
    let record = Extractor::default().extract(&page).expect("card page extracts");

    assert_eq!(record.card_name, "［正月］ある名前＋");
    assert_eq!(record.idol_name, "ある名前");
    assert_eq!(record.card_type, "キュート");

    // Raw lines keep the wiki's spelling
    assert_eq!(
        record.lines.raw.before_training,
        vec![
            "●●プロデューサー、あけましておめでとう！",
            "今年もＬＩＶＥ頑張るね！"
        ]
    );
    assert_eq!(record.lines.raw.after_training, vec!["特訓後も◎◎と一緒だよ"]);
    assert_eq!(
        record.lines.raw.memorial_episode,
        vec!["一言目の思い出", "二言目の思い出", "三言目の思い出"]
    );

    // Normalized lines collapse circle glyphs and fold widths
    assert_eq!(
        record.lines.normalized.before_training,
        vec![
            "○○プロデューサー、あけましておめでとう!",
            "今年もLIVE頑張るね!"
        ]
    );
    assert_eq!(
        record.lines.normalized.after_training,
        vec!["特訓後も○○と一緒だよ"]
    );

    // Element-wise invariant: same lengths, same order
    assert_eq!(
        record.lines.raw.before_training.len(),
        record.lines.normalized.before_training.len()
    );
    assert_eq!(
        record.lines.raw.memorial_episode.len(),
        record.lines.normalized.memorial_episode.len()
    );
}

#[test]
fn single_voice_block_maps_to_before_training_only() {
    let page = fixture_page("card_single_voice.html");
    let record = Extractor::default().extract(&page).expect("card page extracts");

    assert_eq!(record.idol_name, "ある名前");
    assert_eq!(record.card_type, "パッション");
    assert_eq!(
        record.lines.raw.before_training,
        vec!["おはよう、プロデューサー", "がんばるぞ！"]
    );
    assert!(record.lines.raw.after_training.is_empty());
    assert!(record.lines.raw.memorial_episode.is_empty());
    assert!(record.lines.normalized.after_training.is_empty());
}

#[test]
fn placeholder_card_is_skipped() {
    let page = fixture_page("placeholder_card.html");
    assert!(Extractor::default().extract(&page).is_none());
}

#[test]
fn non_card_page_is_skipped() {
    let page = fixture_page("not_a_card.html");
    assert!(Extractor::default().extract(&page).is_none());
}

#[test]
fn classified_page_without_data_block_is_skipped() {
    // Profile and voice blocks pass the gate, but the データ table is gone.
    let html = r#"<div class="user-area">
        <div id="p"><h3>プロフィール</h3></div>
        <div id="l"><h3>セリフ集</h3><table><tbody>
            <tr><td>挨拶</td><td>こんにちは</td></tr>
        </tbody></table></div>
    </div>"#;
    let page = Page::parse(html, Url::parse("https://seesaawiki.jp/imascg/d/x").unwrap());
    assert!(Extractor::default().extract(&page).is_none());
}

#[test]
fn extract_survives_malformed_html() {
    let html = "<div class=\"user-area\"><div id=\"a\"><h3>データ<table><tr><td>unclosed";
    let page = Page::parse(html, Url::parse("https://seesaawiki.jp/imascg/d/x").unwrap());
    // Not a card page; must skip cleanly, never panic.
    assert!(Extractor::default().extract(&page).is_none());
}

#[cfg(feature = "fuzz")]
mod fuzz {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn extract_never_panics(
            html in ".*",
        ) {
            let page = Page::parse(&html, Url::parse("https://seesaawiki.jp/imascg/d/x").unwrap());
            let _ = Extractor::default().extract(&page);
        }

        #[test]
        fn emitted_records_hold_the_lines_invariant(
            lines in proptest::collection::vec(".*", 0..8),
        ) {
            use crate::extractor::normalize::TextNormalizer;
            let normalizer = TextNormalizer::default();
            let normalized = normalizer.normalize_many(&lines);
            prop_assert_eq!(normalized.len(), lines.len());
            for text in &normalized {
                prop_assert_eq!(&normalizer.normalize(text), text);
            }
        }
    }
}
