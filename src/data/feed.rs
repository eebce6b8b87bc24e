//! ECB daily reference feed decoding
//!
//! The feed nests three levels of `Cube` elements: an outer wrapper, one
//! dated cube carrying the `time` attribute, and one cube per currency with
//! `currency` and `rate` attributes.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;

use super::{QueryResult, RateEntry};
use crate::error::{FxRefError, Result};

/// Format of the publication date attribute
const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(rename = "Cube")]
    cube: OuterCube,
}

#[derive(Debug, Deserialize)]
struct OuterCube {
    #[serde(rename = "Cube")]
    day: DailyCube,
}

#[derive(Debug, Deserialize)]
struct DailyCube {
    #[serde(rename = "@time")]
    time: String,
    #[serde(rename = "Cube", default)]
    rates: Vec<RateCube>,
}

#[derive(Debug, Deserialize)]
struct RateCube {
    #[serde(rename = "@currency")]
    currency: String,
    #[serde(rename = "@rate")]
    rate: String,
}

/// Parsed reference document: one publication date and its rates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feed {
    time: String,
    rates: Vec<RateEntry>,
}

impl Feed {
    /// Decodes raw document bytes
    ///
    /// Any structural mismatch is reported as `FxRefError::Decode`; no lenient
    /// re-parse is attempted.
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        let envelope: Envelope = quick_xml::de::from_reader(bytes)?;
        let day = envelope.cube.day;

        Ok(Self {
            time: day.time,
            rates: day
                .rates
                .into_iter()
                .map(|cube| RateEntry {
                    currency: cube.currency,
                    rate: cube.rate,
                })
                .collect(),
        })
    }

    /// Publication date string as it appears in the document
    pub fn time(&self) -> &str {
        &self.time
    }

    /// All rate entries in document order
    pub fn rates(&self) -> &[RateEntry] {
        &self.rates
    }

    /// Parses the publication date as midnight UTC
    pub fn publication_date(&self) -> Result<DateTime<Utc>> {
        let date = NaiveDate::parse_from_str(&self.time, DATE_FORMAT).map_err(|source| {
            FxRefError::InvalidDate {
                value: self.time.clone(),
                source,
            }
        })?;
        Ok(date.and_time(chrono::NaiveTime::MIN).and_utc())
    }

    /// Finds the entry for `code`, ignoring case
    pub fn entry(&self, code: &str) -> Option<&RateEntry> {
        self.rates
            .iter()
            .find(|entry| entry.currency.eq_ignore_ascii_case(code))
    }

    /// Extracts the rate for `code` together with the publication date
    ///
    /// # Returns
    /// * `Ok(QueryResult)` - the parsed rate and date
    /// * `Err(FxRefError::RateNotFound)` - the document has no entry for `code`
    /// * `Err(FxRefError::InvalidRate)` / `Err(FxRefError::InvalidDate)` - unparsable values
    pub fn rate_for(&self, code: &str) -> Result<QueryResult> {
        let entry = self
            .entry(code)
            .ok_or_else(|| FxRefError::RateNotFound(code.to_string()))?;

        let rate = entry
            .rate
            .parse::<f64>()
            .map_err(|source| FxRefError::InvalidRate {
                value: entry.rate.clone(),
                source,
            })?;

        Ok(QueryResult {
            last_update: self.publication_date()?,
            rate,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use chrono::{Datelike, Timelike};

    const FIXTURE: &str = include_str!("../../tests/fixtures/eurofxref-daily.xml");

    fn single_rate_feed(time: &str, currency: &str, rate: &str) -> String {
        format!(
            "<Envelope><Cube><Cube time='{}'><Cube currency='{}' rate='{}'/></Cube></Cube></Envelope>",
            time, currency, rate
        )
    }

    #[test]
    fn test_parse_fixture_reads_all_entries() {
        let feed = Feed::parse(FIXTURE.as_bytes()).expect("fixture should parse");

        assert_eq!(feed.time(), "2023-05-17");
        assert_eq!(feed.rates().len(), 30);
        assert_eq!(
            feed.rates()[0],
            RateEntry {
                currency: "USD".to_string(),
                rate: "1.0852".to_string(),
            }
        );
    }

    #[test]
    fn test_rate_for_usd() {
        let feed = Feed::parse(FIXTURE.as_bytes()).unwrap();
        let result = feed.rate_for("USD").unwrap();

        assert!((result.rate - 1.0852).abs() < f64::EPSILON);
        assert_eq!(result.last_update.year(), 2023);
        assert_eq!(result.last_update.month(), 5);
        assert_eq!(result.last_update.day(), 17);
        assert_eq!(result.last_update.hour(), 0);
        assert_eq!(result.last_update.minute(), 0);
    }

    #[test]
    fn test_rate_for_matches_case_insensitively() {
        let feed = Feed::parse(single_rate_feed("2023-05-17", "usd", "1.0852").as_bytes()).unwrap();
        assert!(feed.rate_for("USD").is_ok());
    }

    #[test]
    fn test_rate_for_missing_currency() {
        let feed = Feed::parse(single_rate_feed("2023-05-17", "USD", "1.0852").as_bytes()).unwrap();
        let err = feed.rate_for("JPY").unwrap_err();

        assert!(matches!(err, FxRefError::RateNotFound(ref code) if code == "JPY"));
        assert_eq!(err.kind(), ErrorKind::Data);
    }

    #[test]
    fn test_rate_for_non_numeric_rate() {
        let feed = Feed::parse(single_rate_feed("2023-05-17", "USD", "n/a").as_bytes()).unwrap();
        let err = feed.rate_for("USD").unwrap_err();

        assert!(matches!(err, FxRefError::InvalidRate { .. }));
        assert_eq!(err.kind(), ErrorKind::Data);
    }

    #[test]
    fn test_rate_for_bad_date() {
        let feed = Feed::parse(single_rate_feed("17/05/2023", "USD", "1.0852").as_bytes()).unwrap();
        let err = feed.rate_for("USD").unwrap_err();

        assert!(matches!(err, FxRefError::InvalidDate { .. }));
        assert_eq!(err.kind(), ErrorKind::Data);
    }

    #[test]
    fn test_parse_malformed_document() {
        let err = Feed::parse(b"<Envelope><Cube><Cube time='2023-05-17'>").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Decode);
    }

    #[test]
    fn test_parse_unexpected_shape() {
        let err = Feed::parse(b"<html><body>maintenance</body></html>").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Decode);
    }

    #[test]
    fn test_parse_day_without_rates() {
        let feed = Feed::parse(b"<Envelope><Cube><Cube time='2023-05-17'/></Cube></Envelope>").unwrap();

        assert!(feed.rates().is_empty());
        assert!(matches!(
            feed.rate_for("USD"),
            Err(FxRefError::RateNotFound(_))
        ));
    }
}
