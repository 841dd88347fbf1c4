//! Amazon product permalink rule implementation.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;
use url::form_urlencoded;

use super::{CleanTarget, Rule};
use crate::domain::CleanResult;

/// Product ID segment of an Amazon product path.
static PRODUCT_PATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)/dp/([a-z0-9]+)").expect("product path pattern is valid"));

/// Rule that rewrites Amazon product pages to `https://<host>/dp/<ID>`.
///
/// Every query pair is dropped. When the original path carried more than the
/// `/dp/<ID>` segment, a synthetic `path=<original>` entry is recorded.
pub struct AmazonRule {
    associate_tag: Option<String>,
}

impl AmazonRule {
    /// Create a new AmazonRule with an optional associate tag.
    pub fn new(associate_tag: Option<String>) -> Self {
        Self { associate_tag }
    }

    /// Substring match, so `amazon.co.jp` and `smile.amazon.com` both qualify.
    fn is_amazon_host(host: &str) -> bool {
        host.contains("amazon.")
    }

    /// Extract the product ID from a URL path.
    fn product_id(path: &str) -> Option<&str> {
        PRODUCT_PATH
            .captures(path)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }

    /// Whether a query pair is the tag this rule would add anyway.
    fn is_own_tag(&self, name: &str, value: &str) -> bool {
        name == "tag" && self.associate_tag.as_deref() == Some(value)
    }
}

impl Rule for AmazonRule {
    fn applies_to(&self, target: &CleanTarget) -> bool {
        Self::is_amazon_host(&target.host) && Self::product_id(target.url.path()).is_some()
    }

    fn execute(&self, target: &CleanTarget) -> CleanResult {
        let path = target.url.path();
        let Some(id) = Self::product_id(path) else {
            return CleanResult::unchanged(target.input);
        };

        let mut removed_params: Vec<String> = target
            .url
            .query_pairs()
            .filter(|(name, value)| !self.is_own_tag(name, value))
            .map(|(name, value)| format!("{}={}", name, value))
            .collect();

        let permalink_path = format!("/dp/{}", id);
        if path != permalink_path {
            removed_params.push(format!("path={}", path));
        }

        let mut clean_url = format!("https://{}{}", target.host, permalink_path);
        if let Some(tag) = &self.associate_tag {
            let query = form_urlencoded::Serializer::new(String::new())
                .append_pair("tag", tag)
                .finish();
            clean_url.push('?');
            clean_url.push_str(&query);
        }

        debug!("Amazon permalink {} from {}", clean_url, target.input);

        CleanResult {
            clean_url,
            removed_params,
            error: None,
        }
    }

    fn priority(&self) -> u32 {
        10
    }
}
