use regex::Regex;
use std::sync::LazyLock;

// Card names decorate the idol's proper name two ways: a bracketed theme
// prefix (［正月］, [限定], ...) and a trailing ＋ marking the trained
// variant. Both half-width and full-width glyphs occur in the wild.
static BRACKET_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*[\[［].+?[\]］]\s*").expect("valid regex"));

static PLUS_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*[+＋]$").expect("valid regex"));

/// Derive the idol's proper name from a decorated card name.
///
/// Strips the bracketed prefix first, then the trailing plus; the order
/// matters so a name carrying both decorations loses both. Each step is a
/// no-op on already-stripped input.
pub fn derive_idol_name(card_name: &str) -> String {
    let without_prefix = BRACKET_PREFIX.replace(card_name, "");
    PLUS_SUFFIX.replace(&without_prefix, "").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_fullwidth_bracket_prefix_and_plus() {
        assert_eq!(derive_idol_name("［正月］ユニット名＋"), "ユニット名");
    }

    #[test]
    fn strips_halfwidth_variants() {
        assert_eq!(derive_idol_name("[限定]ある名前+"), "ある名前");
    }

    #[test]
    fn mixed_width_decorations() {
        assert_eq!(derive_idol_name("[クリスマス］ある名前＋"), "ある名前");
    }

    #[test]
    fn plain_name_passes_through() {
        assert_eq!(derive_idol_name("ある名前"), "ある名前");
    }

    #[test]
    fn prefix_only() {
        assert_eq!(derive_idol_name("［お祭り］ある名前"), "ある名前");
    }

    #[test]
    fn suffix_only() {
        assert_eq!(derive_idol_name("ある名前＋"), "ある名前");
    }

    #[test]
    fn non_greedy_stops_at_first_closing_bracket() {
        // Brackets inside the proper name survive.
        assert_eq!(derive_idol_name("［限定］ある［名前］"), "ある［名前］");
    }

    #[test]
    fn leading_whitespace_before_bracket_is_consumed() {
        assert_eq!(derive_idol_name("  ［正月］ある名前 ＋"), "ある名前");
    }

    #[test]
    fn idempotent_on_own_output() {
        for input in ["［正月］ユニット名＋", "ある名前", "[a]b+"] {
            let once = derive_idol_name(input);
            assert_eq!(derive_idol_name(&once), once);
        }
    }
}
