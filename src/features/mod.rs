//! Feature-vector extraction, the core of the service.
//!
//! `extract` turns one raw URL string into an ordered, fixed-length numeric
//! vector the classifier was trained on. The call never fails: the single
//! network fetch is best-effort, the structural parse is best-effort, and
//! every rule has a defined fallback, so the output always has exactly
//! [`FEATURE_COUNT`] values in the fixed order below.

pub mod rules;
pub mod shorteners;

pub use rules::RuleContext;

use crate::fetcher;
use scraper::Html;
use serde::Serialize;
use tracing::debug;
use url::Url;

pub const FEATURE_COUNT: usize = 31;

/// Ordered feature vector. Index order matches the trained model schema
/// exactly; reordering silently corrupts predictions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeatureVector([i64; FEATURE_COUNT]);

impl FeatureVector {
    pub fn as_slice(&self) -> &[i64] {
        &self.0
    }

    pub fn to_f64(&self) -> [f64; FEATURE_COUNT] {
        self.0.map(|v| v as f64)
    }
}

impl From<[i64; FEATURE_COUNT]> for FeatureVector {
    fn from(values: [i64; FEATURE_COUNT]) -> Self {
        Self(values)
    }
}

/// A fetched page body, present only when the single bounded GET succeeded.
/// Owned by one extraction call and discarded with it.
#[derive(Debug)]
pub struct FetchedPage {
    pub body_utf8: String,
}

/// Extract the feature vector for `url`, performing at most one bounded
/// network fetch. Fetch failures of any kind (timeout, DNS, refused,
/// malformed URL, non-HTML body) degrade to absent-page state; they are a
/// normal outcome here, not an error.
pub async fn extract(url: &str) -> FeatureVector {
    let page = match fetcher::fetch(url).await {
        Ok(response) => Some(FetchedPage {
            body_utf8: response.body_utf8,
        }),
        Err(err) => {
            debug!(url, error = %err, "page fetch failed, extracting without content");
            None
        }
    };
    build_vector(url, page.as_ref())
}

/// Pure half of the extraction: evaluate all rules against the URL and an
/// already-resolved fetch outcome. Split out so tests can pin the page state.
pub fn build_vector(url: &str, page: Option<&FetchedPage>) -> FeatureVector {
    let document = page.map(|p| Html::parse_document(&p.body_utf8));
    let ctx = RuleContext {
        url,
        parsed: Url::parse(url).ok(),
        document: document.as_ref(),
    };

    // Fixed evaluation order; positions 9 and 13-30 are the placeholder
    // constants documented in `rules`.
    FeatureVector([
        rules::using_ip(&ctx),
        rules::long_url(&ctx),
        rules::short_url(&ctx),
        rules::at_symbol(&ctx),
        rules::redirecting(&ctx),
        rules::prefix_suffix(&ctx),
        rules::sub_domains(&ctx),
        rules::https_scheme(&ctx),
        rules::DOMAIN_REG_LEN,
        rules::favicon(&ctx),
        rules::non_std_port(&ctx),
        rules::https_in_domain(&ctx),
        rules::REQUEST_URL,
        rules::ANCHOR_URL,
        rules::LINKS_IN_SCRIPT_TAGS,
        rules::SERVER_FORM_HANDLER,
        rules::INFO_EMAIL,
        rules::ABNORMAL_URL,
        rules::WEBSITE_FORWARDING,
        rules::STATUS_BAR_CUST,
        rules::DISABLE_RIGHT_CLICK,
        rules::USING_POPUP_WINDOW,
        rules::IFRAME_REDIRECTION,
        rules::AGE_OF_DOMAIN,
        rules::DNS_RECORD,
        rules::WEBSITE_TRAFFIC,
        rules::PAGE_RANK,
        rules::GOOGLE_INDEX,
        rules::LINKS_POINTING_TO_PAGE,
        rules::STATS_REPORT,
        rules::url_length(&ctx),
    ])
}
