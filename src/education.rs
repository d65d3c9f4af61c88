//! Health education articles and the best-effort NPHIL importer.

use std::future::Future;
use std::sync::LazyLock;
use std::time::Duration;

use regex::Regex;
use rusqlite::Connection;
use serde::Serialize;

use crate::db;
use crate::error::CareError;
use crate::models::{EducationFilter, HealthEducation};

pub const NPHIL_URL: &str = "https://nphil.gov.lr/";
const FETCH_TIMEOUT: Duration = Duration::from_secs(10);
const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
(KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

const MAX_SECTIONS: usize = 20;
const MAX_ALERTS: usize = 10;
const MIN_UPDATE_CHARS: usize = 50;
const MIN_ALERT_CHARS: usize = 30;
const ALERT_KEYWORDS: &[&str] = &[
    "alert",
    "outbreak",
    "vaccination",
    "epidemic",
    "health",
    "disease",
    "prevention",
];

pub fn list_education(
    conn: &Connection,
    filter: &EducationFilter,
) -> Result<Vec<HealthEducation>, CareError> {
    Ok(db::get_education_filtered(conn, filter)?)
}

/// An article lifted from an external page, not yet stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScrapedArticle {
    pub title: String,
    pub content: String,
    pub category: String,
    pub source: String,
}

/// Something that can produce education articles from outside the database.
/// Implementations never fail: problems are logged and yield an empty list.
pub trait EducationSource: Send + Sync {
    fn fetch(&self) -> impl Future<Output = Vec<ScrapedArticle>> + Send;
}

/// Scrapes the public-health institute's home page.
pub struct NphilSource {
    url: String,
    client: reqwest::Client,
}

impl NphilSource {
    pub fn new(url: &str) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(FETCH_TIMEOUT)
            .user_agent(BROWSER_USER_AGENT)
            .build()?;
        Ok(Self {
            url: url.to_string(),
            client,
        })
    }

    async fn fetch_html(&self) -> Result<String, reqwest::Error> {
        self.client
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await
    }
}

impl EducationSource for NphilSource {
    async fn fetch(&self) -> Vec<ScrapedArticle> {
        match self.fetch_html().await {
            Ok(html) => {
                let articles = extract_articles(&html);
                tracing::info!(url = %self.url, count = articles.len(), "NPHIL page imported");
                articles
            }
            Err(e) => {
                tracing::warn!(url = %self.url, error = %e, "NPHIL import failed");
                Vec::new()
            }
        }
    }
}

static SECTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<(h[1-4]|p)\b[^>]*>(.*?)</(?:h[1-4]|p)\s*>").unwrap()
});
static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)<[^>]*>").unwrap());
static NON_TEXT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<!--.*?-->|<script\b.*?</script\s*>|<style\b.*?</style\s*>").unwrap()
});
static TEXT_NODE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r">([^<]+)<").unwrap());

fn decode_entities(text: &str) -> String {
    text.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

fn section_text(inner: &str) -> String {
    let stripped = TAG_RE.replace_all(inner, " ");
    decode_entities(&stripped)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Pull articles out of an HTML page.
///
/// The first twenty heading/paragraph sections are scanned; headings are
/// skipped and paragraphs longer than fifty characters become numbered
/// updates. Then the first ten text nodes mentioning a health keyword are
/// kept as alerts when longer than thirty characters.
pub fn extract_articles(html: &str) -> Vec<ScrapedArticle> {
    let html = NON_TEXT_RE.replace_all(html, "");
    let mut articles = Vec::new();

    for (i, caps) in SECTION_RE.captures_iter(&html).take(MAX_SECTIONS).enumerate() {
        if !caps[1].eq_ignore_ascii_case("p") {
            continue;
        }
        let text = section_text(&caps[2]);
        if text.chars().count() > MIN_UPDATE_CHARS {
            articles.push(ScrapedArticle {
                title: format!("NPHIL Health Update {}", i + 1),
                content: text,
                category: "public-health".to_string(),
                source: "NPHIL".to_string(),
            });
        }
    }

    let alerts = TEXT_NODE_RE
        .captures_iter(&html)
        .map(|caps| decode_entities(caps[1].trim()))
        .filter(|text| {
            let lower = text.to_lowercase();
            ALERT_KEYWORDS.iter().any(|k| lower.contains(k))
        })
        .take(MAX_ALERTS);
    for text in alerts {
        if text.chars().count() > MIN_ALERT_CHARS {
            articles.push(ScrapedArticle {
                title: "NPHIL Health Alert".to_string(),
                content: text,
                category: "health-alert".to_string(),
                source: "NPHIL".to_string(),
            });
        }
    }

    articles
}
