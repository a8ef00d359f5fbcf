// RSS 2.0 feed parsing
use quick_xml::de::from_str;
use serde::Deserialize;

use super::RecordParser;
use crate::model::{ParserError, SourceRecord};
use crate::utils::{format_datetime, parse_datetime};

#[derive(Debug, Deserialize)]
struct Rss {
    channel: Channel,
}

#[derive(Debug, Deserialize)]
struct Channel {
    #[serde(rename = "item", default)]
    items: Vec<Item>,
}

#[derive(Debug, Deserialize)]
struct Item {
    title: Option<String>,
    link: Option<String>,
    #[serde(rename = "pubDate")]
    pub_date: Option<String>,
    #[serde(rename = "dc:date", alias = "date")]
    dc_date: Option<String>,
}

pub struct FeedParser;

impl FeedParser {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FeedParser {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordParser for FeedParser {
    /// Items without a title or link are dropped. Dates are re-emitted as
    /// UTC ISO-8601; unparseable dates become empty.
    fn parse(&self, xml: &str) -> Result<Vec<SourceRecord>, ParserError> {
        let rss: Rss = from_str(xml).map_err(|e| ParserError::Xml(e.to_string()))?;

        let records = rss
            .channel
            .items
            .into_iter()
            .filter_map(|item| {
                let title = clean(item.title)?;
                let link = clean(item.link)?;
                let pub_date = item
                    .pub_date
                    .or(item.dc_date)
                    .and_then(|raw| parse_datetime(&raw))
                    .map(|dt| format_datetime(&dt))
                    .unwrap_or_default();
                Some(SourceRecord::new(title, link).with_pub_date(pub_date))
            })
            .collect();

        Ok(records)
    }
}

fn clean(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    const FEED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0" xmlns:dc="http://purl.org/dc/elements/1.1/">
  <channel>
    <title>Frontpage Deals</title>
    <link>https://slickdeals.net/</link>
    <item>
      <title><![CDATA[PS5 Slim Console Bundle $399 at Amazon]]></title>
      <link>https://slickdeals.net/f/17001-ps5-slim?utm_source=rss</link>
      <pubDate>Fri, 29 Nov 2024 08:00:00 -0500</pubDate>
      <description><![CDATA[<p>Great deal</p>]]></description>
    </item>
    <item>
      <title>Bounty Paper Towels</title>
      <link>https://slickdeals.net/f/17002-bounty</link>
      <dc:date>2024-11-28T10:30:00Z</dc:date>
    </item>
    <item>
      <title>No Link Here</title>
    </item>
    <item>
      <title>   </title>
      <link>https://slickdeals.net/f/17003</link>
    </item>
    <item>
      <title>Bad Date</title>
      <link>https://slickdeals.net/f/17004</link>
      <pubDate>sometime</pubDate>
    </item>
  </channel>
</rss>"#;

    #[test]
    fn parses_items_and_normalizes_dates() {
        let records = FeedParser::new().parse(FEED).unwrap();
        assert_eq!(records.len(), 3);

        assert_eq!(records[0].title, "PS5 Slim Console Bundle $399 at Amazon");
        assert_eq!(
            records[0].link,
            "https://slickdeals.net/f/17001-ps5-slim?utm_source=rss"
        );
        assert_eq!(records[0].pub_date, "2024-11-29T13:00:00Z");

        assert_eq!(records[1].pub_date, "2024-11-28T10:30:00Z");
        assert_eq!(records[2].title, "Bad Date");
        assert_eq!(records[2].pub_date, "");
    }

    #[test]
    fn empty_channel_yields_nothing() {
        let xml = r#"<rss version="2.0"><channel><title>x</title></channel></rss>"#;
        assert!(FeedParser::new().parse(xml).unwrap().is_empty());
    }

    #[test]
    fn malformed_xml_is_an_error() {
        assert!(matches!(
            FeedParser::new().parse("<rss><channel>"),
            Err(ParserError::Xml(_))
        ));
    }
}
