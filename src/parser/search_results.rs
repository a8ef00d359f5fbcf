// Search results page: find the first direct deal link
use reqwest::Url;
use scraper::{Html, Selector};

use crate::model::ParserError;

pub struct SearchResultsParser {
    direct_markers: Vec<String>,
    link_selector: Selector,
}

impl SearchResultsParser {
    pub fn new(direct_markers: &[String]) -> Result<Self, ParserError> {
        let link_selector =
            Selector::parse("a[href]").map_err(|e| ParserError::Html(e.to_string()))?;
        Ok(Self {
            direct_markers: direct_markers.to_vec(),
            link_selector,
        })
    }

    /// First anchor pointing at a direct deal page (`/f/<digits>...`),
    /// made absolute against `page_url` and stripped of its fragment.
    pub fn first_direct_link(&self, html: &str, page_url: &str) -> Option<String> {
        let base = Url::parse(page_url).ok();
        let document = Html::parse_document(html);

        document
            .select(&self.link_selector)
            .filter_map(|a| a.value().attr("href"))
            .map(str::trim)
            .find(|href| self.is_direct(href))
            .and_then(|href| absolutize(href, base.as_ref()))
    }

    fn is_direct(&self, href: &str) -> bool {
        self.direct_markers.iter().any(|marker| {
            href.match_indices(marker.as_str()).any(|(pos, m)| {
                href[pos + m.len()..]
                    .chars()
                    .next()
                    .is_some_and(|c| c.is_ascii_digit())
            })
        })
    }
}

fn absolutize(href: &str, base: Option<&Url>) -> Option<String> {
    let mut url = match Url::parse(href) {
        Ok(url) => url,
        Err(_) => base?.join(href).ok()?,
    };
    url.set_fragment(None);
    Some(url.to_string())
}
