pub mod sink;

pub use sink::{JsonLinesSink, RecordSink};

use crate::extractor::Extractor;
use crate::fetcher;
use crate::page::Page;
use anyhow::Result;
use scraper::Selector;
use std::collections::{HashSet, VecDeque};
use std::sync::LazyLock;
use std::time::Duration;
use tracing::{info, warn};
use url::Url;

// Index-page layout of the wiki's page list: entry links sit in the list
// under the page body, the "next page" link in the second pagination
// list item below it.
static ENTRY_LINKS: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("#page-body-inner > ul > li > a").expect("valid selector"));

static NEXT_PAGE_LINK: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("#page-body-inner > div:nth-of-type(2) > ul > li:nth-of-type(2) > a")
        .expect("valid selector")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageRole {
    /// A list page enumerating card pages, possibly with a next-page link.
    Index,
    /// A single card page to run the extraction pipeline on.
    Detail,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitRequest {
    pub url: Url,
    pub role: PageRole,
}

/// Visit requests produced by one index page: one Detail request per entry
/// link, then at most one Index request for the next page of the list.
///
/// Pure over the page; deduplication is deliberately not done here (the
/// runner guards against cycles).
pub fn index_requests(page: &Page) -> Vec<VisitRequest> {
    let mut requests: Vec<VisitRequest> = page
        .select(&ENTRY_LINKS)
        .filter_map(|a| a.value().attr("href"))
        .filter_map(|href| page.resolve_href(href))
        .map(|url| VisitRequest {
            url,
            role: PageRole::Detail,
        })
        .collect();

    if let Some(next) = page
        .select(&NEXT_PAGE_LINK)
        .filter_map(|a| a.value().attr("href"))
        .filter_map(|href| page.resolve_href(href))
        .next()
    {
        requests.push(VisitRequest {
            url: next,
            role: PageRole::Index,
        });
    }

    requests
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CrawlStats {
    pub pages_visited: usize,
    pub records_emitted: usize,
    pub pages_skipped: usize,
}

/// Queue-driven crawl runner.
///
/// Owns everything the core deliberately does not: fetching, pacing,
/// cycle protection, and per-page failure isolation. One bad page is
/// logged and skipped; the crawl always moves on.
pub struct Crawler<S: RecordSink> {
    extractor: Extractor,
    sink: S,
    request_delay: Duration,
    max_pages: usize,
}

impl<S: RecordSink> Crawler<S> {
    pub fn new(extractor: Extractor, sink: S, request_delay: Duration, max_pages: usize) -> Self {
        Self {
            extractor,
            sink,
            request_delay,
            max_pages,
        }
    }

    pub async fn run(&mut self, start_url: Url) -> Result<CrawlStats> {
        let mut stats = CrawlStats::default();
        let mut queue = VecDeque::from([VisitRequest {
            url: start_url,
            role: PageRole::Index,
        }]);
        // The wiki's pagination is expected to be acyclic, but a cycling
        // next-page link must terminate, so visited URLs are remembered.
        let mut visited: HashSet<Url> = HashSet::new();

        while let Some(request) = queue.pop_front() {
            if !visited.insert(request.url.clone()) {
                continue;
            }
            if self.max_pages > 0 && stats.pages_visited >= self.max_pages {
                info!(max_pages = self.max_pages, "page cap reached, stopping");
                break;
            }

            let response = match fetcher::fetch(&request.url).await {
                Ok(response) => response,
                Err(err) => {
                    warn!(url = %request.url, error = %err, retriable = err.should_retry(), "fetch failed, skipping page");
                    stats.pages_skipped += 1;
                    continue;
                }
            };
            stats.pages_visited += 1;

            let page = Page::parse(&response.body_utf8, response.url_final.clone());
            match request.role {
                PageRole::Index => {
                    let requests = index_requests(&page);
                    info!(url = %page.url(), requests = requests.len(), "index page parsed");
                    queue.extend(requests);
                }
                PageRole::Detail => match self.extractor.extract(&page) {
                    Some(record) => {
                        self.sink.write(&record)?;
                        stats.records_emitted += 1;
                    }
                    None => stats.pages_skipped += 1,
                },
            }

            if !self.request_delay.is_zero() && !queue.is_empty() {
                tokio::time::sleep(self.request_delay).await;
            }
        }

        self.sink.flush()?;
        info!(
            pages_visited = stats.pages_visited,
            records_emitted = stats.records_emitted,
            pages_skipped = stats.pages_skipped,
            "crawl finished"
        );
        Ok(stats)
    }
}
