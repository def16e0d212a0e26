pub mod locator;

pub use locator::{BlockLocator, BlockQuery};

use scraper::{ElementRef, Html, Selector};
use std::fmt;
use std::sync::LazyLock;
use url::Url;

static ANY_WITH_ID: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("[id]").expect("valid selector"));

static ROW_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("tbody tr").expect("valid selector"));

static CELL_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("td").expect("valid selector"));

/// Opaque identifier of a content block within a single page.
///
/// These are the `id` attributes the wiki engine stamps on its section
/// containers. They are only unique within one page and must never be
/// cached across pages.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BlockId(String);

impl BlockId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BlockId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// A parsed, read-only wiki page plus the URL it was fetched from.
///
/// Everything downstream of the fetch layer works on this; the raw HTML
/// and transport details stay in `fetcher::PageResponse`.
pub struct Page {
    doc: Html,
    url: Url,
}

impl Page {
    pub fn parse(html: &str, url: Url) -> Self {
        Self {
            doc: Html::parse_document(html),
            url,
        }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn select<'a>(&'a self, selector: &'a Selector) -> impl Iterator<Item = ElementRef<'a>> {
        self.doc.select(selector)
    }

    /// Look up an element by its `id` attribute.
    ///
    /// Deliberately an attribute scan rather than a formatted `#id`
    /// selector: wiki-generated ids can contain characters that are not
    /// valid in a CSS identifier.
    pub fn element_by_id(&self, id: &BlockId) -> Option<ElementRef<'_>> {
        self.doc
            .select(&ANY_WITH_ID)
            .find(|el| el.value().attr("id") == Some(id.as_str()))
    }

    /// Resolve a (possibly relative) href against this page's URL.
    pub fn resolve_href(&self, href: &str) -> Option<Url> {
        self.url.join(href).ok()
    }

    /// View a located block as a `ContentBlock`, if its element still
    /// exists on the page.
    pub fn block(&self, id: &BlockId) -> Option<ContentBlock<'_>> {
        self.element_by_id(id).map(|root| ContentBlock { root })
    }
}

/// Tabular view over one located content block.
///
/// A block is a labeled section container whose body is a table; rows and
/// cells come back as trimmed visible text in document order.
pub struct ContentBlock<'a> {
    root: ElementRef<'a>,
}

impl ContentBlock<'_> {
    /// The block's label: its first non-empty visible text, trimmed.
    ///
    /// Section containers on the wiki lead with their heading text, so
    /// this is the heading. Comparing the whole subtree text would drag
    /// the table body in and never match a label.
    pub fn label(&self) -> Option<String> {
        first_text(&self.root)
    }

    /// All table rows of the block body, each row as its cell texts.
    pub fn rows(&self) -> Vec<Vec<String>> {
        self.root
            .select(&ROW_SELECTOR)
            .map(|row| {
                row.select(&CELL_SELECTOR)
                    .map(|cell| cell.text().collect::<String>().trim().to_string())
                    .collect()
            })
            .collect()
    }
}

/// First non-empty text node under an element, trimmed.
pub(crate) fn first_text(el: &ElementRef<'_>) -> Option<String> {
    el.text()
        .map(str::trim)
        .find(|t| !t.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(html: &str) -> Page {
        Page::parse(html, Url::parse("https://seesaawiki.jp/imascg/d/x").unwrap())
    }

    #[test]
    fn element_by_id_finds_block() {
        let p = page(r#"<div class="user-area"><div id="content_1">データ</div></div>"#);
        assert!(p.element_by_id(&BlockId::from("content_1")).is_some());
        assert!(p.element_by_id(&BlockId::from("content_2")).is_none());
    }

    #[test]
    fn block_rows_collect_cell_text_in_order() {
        let p = page(
            r#"<div id="b"><h3>データ</h3><table><tbody>
                <tr><td>カード名</td><td>ある名前</td></tr>
                <tr><td>属性</td><td>キュート</td></tr>
            </tbody></table></div>"#,
        );
        let block = p.block(&BlockId::from("b")).unwrap();
        assert_eq!(block.label().as_deref(), Some("データ"));
        let rows = block.rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], vec!["カード名", "ある名前"]);
        assert_eq!(rows[1], vec!["属性", "キュート"]);
    }

    #[test]
    fn resolve_href_handles_relative_and_absolute() {
        let p = page("<html></html>");
        assert_eq!(
            p.resolve_href("/imascg/d/other").unwrap().as_str(),
            "https://seesaawiki.jp/imascg/d/other"
        );
        assert_eq!(
            p.resolve_href("https://example.com/a").unwrap().as_str(),
            "https://example.com/a"
        );
    }
}
