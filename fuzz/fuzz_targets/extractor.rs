#![no_main]

use libfuzzer_sys::fuzz_target;
use url::Url;

use deremas_scrape::extractor::Extractor;
use deremas_scrape::page::Page;

fuzz_target!(|data: &[u8]| {
    // Convert raw bytes to string, handling invalid UTF-8 gracefully
    let html = String::from_utf8_lossy(data).to_string();

    let page = Page::parse(
        &html,
        Url::parse("https://seesaawiki.jp/imascg/d/fuzz").unwrap(),
    );

    // The extractor should never panic regardless of input
    let _ = Extractor::default().extract(&page);
});
