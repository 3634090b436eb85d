//! The individual feature rules.
//!
//! Each rule is a pure function of a [`RuleContext`] returning -1
//! (suspicious), 0 (neutral) or 1 (safe) -- except [`url_length`], which
//! returns the raw character count. Rules never fail: anything a rule cannot
//! determine collapses into its documented fallback so the driver always
//! gets a complete vector.

use crate::features::shorteners::SHORTENER_CATALOG;
use scraper::{Html, Selector};
use url::{Host, Url};

/// Everything a rule is allowed to look at: the raw URL text, the
/// best-effort structural parse, and the parsed page document when the
/// fetch succeeded. Built fresh per extraction, never shared across calls.
pub struct RuleContext<'a> {
    pub url: &'a str,
    pub parsed: Option<Url>,
    pub document: Option<&'a Html>,
}

impl RuleContext<'_> {
    /// The authority component as the original heuristics saw it:
    /// host plus an explicit `:port` suffix when one survives parsing.
    /// `None` when the URL did not parse or has no host.
    pub fn domain(&self) -> Option<String> {
        let parsed = self.parsed.as_ref()?;
        let host = parsed.host_str()?;
        Some(match parsed.port() {
            Some(port) => format!("{host}:{port}"),
            None => host.to_string(),
        })
    }

    /// The authority exactly as written in the raw URL text. `Url` drops
    /// scheme-default ports during parsing, so the port rule has to look at
    /// what the author actually typed. `None` unless the URL parsed to
    /// something with a host.
    pub fn raw_authority(&self) -> Option<&str> {
        self.parsed.as_ref()?.host_str()?;
        let (_, rest) = self.url.split_once("//")?;
        let end = rest.find(['/', '?', '#']).unwrap_or(rest.len());
        Some(&rest[..end])
    }
}

// Rules 9 and 13-30 stand in for signals that need external data sources
// (WHOIS registration/age, DNS records, Alexa-style traffic rank, PageRank,
// search-engine indexing, page asset provenance). The model was trained with
// these exact constants at these exact positions; changing one silently
// shifts the decision boundary.

/// Rule 9: WHOIS registration length (omitted lookup).
pub const DOMAIN_REG_LEN: i64 = 0;
/// Rule 13: cross-origin asset ratio (omitted page audit).
pub const REQUEST_URL: i64 = 1;
/// Rule 14: anchor target analysis (omitted page audit).
pub const ANCHOR_URL: i64 = 0;
/// Rule 15: script/link tag provenance (omitted page audit).
pub const LINKS_IN_SCRIPT_TAGS: i64 = 0;
/// Rule 16: form handler destination (omitted page audit).
pub const SERVER_FORM_HANDLER: i64 = -1;
/// Rule 17: mailto/info-address harvesting (omitted page audit).
pub const INFO_EMAIL: i64 = 1;
/// Rule 18: WHOIS identity vs URL host (omitted lookup).
pub const ABNORMAL_URL: i64 = 1;
/// Rule 19: redirect-chain depth (omitted history audit).
pub const WEBSITE_FORWARDING: i64 = 0;
/// Rule 20: onMouseOver status-bar tampering (omitted script audit).
pub const STATUS_BAR_CUST: i64 = 1;
/// Rule 21: right-click suppression (omitted script audit).
pub const DISABLE_RIGHT_CLICK: i64 = 1;
/// Rule 22: popup-window credential prompts (omitted script audit).
pub const USING_POPUP_WINDOW: i64 = 1;
/// Rule 23: invisible iframe redirection (omitted page audit).
pub const IFRAME_REDIRECTION: i64 = 1;
/// Rule 24: domain age (omitted WHOIS lookup).
pub const AGE_OF_DOMAIN: i64 = -1;
/// Rule 25: DNS record presence (omitted lookup).
pub const DNS_RECORD: i64 = -1;
/// Rule 26: traffic rank (omitted lookup).
pub const WEBSITE_TRAFFIC: i64 = 0;
/// Rule 27: PageRank (omitted lookup).
pub const PAGE_RANK: i64 = -1;
/// Rule 28: Google index membership (omitted lookup).
pub const GOOGLE_INDEX: i64 = 1;
/// Rule 29: inbound link count (omitted lookup).
pub const LINKS_POINTING_TO_PAGE: i64 = 1;
/// Rule 30: blacklist/statistics report membership (omitted lookup).
pub const STATS_REPORT: i64 = 1;

/// Rule 1: a literal IP address in place of a hostname.
pub fn using_ip(ctx: &RuleContext) -> i64 {
    match ctx.parsed.as_ref().and_then(|u| u.host()) {
        Some(Host::Ipv4(_)) | Some(Host::Ipv6(_)) => -1,
        _ => 1,
    }
}

/// Rule 2: overall URL length, banded at 54 and 75 characters.
pub fn long_url(ctx: &RuleContext) -> i64 {
    let len = ctx.url.chars().count();
    if len < 54 {
        1
    } else if len <= 75 {
        0
    } else {
        -1
    }
}

/// Rule 3: known URL-shortener anywhere in the URL.
pub fn short_url(ctx: &RuleContext) -> i64 {
    if SHORTENER_CATALOG.is_match(ctx.url) { -1 } else { 1 }
}

/// Rule 4: `@` anywhere in the URL (credential-trick prefix).
pub fn at_symbol(ctx: &RuleContext) -> i64 {
    if ctx.url.contains('@') { -1 } else { 1 }
}

/// Rule 5: a `//` after the scheme separator suggests an embedded redirect.
pub fn redirecting(ctx: &RuleContext) -> i64 {
    match ctx.url.rfind("//") {
        Some(idx) if idx > 6 => -1,
        _ => 1,
    }
}

/// Rule 6: hyphenated host. Falls back to -1 when the URL has no
/// parseable host.
pub fn prefix_suffix(ctx: &RuleContext) -> i64 {
    match ctx.domain() {
        Some(domain) if domain.contains('-') => -1,
        Some(_) => 1,
        None => -1,
    }
}

/// Rule 7: dot count over the whole URL as a subdomain proxy.
pub fn sub_domains(ctx: &RuleContext) -> i64 {
    match ctx.url.matches('.').count() {
        1 => 1,
        2 => 0,
        _ => -1,
    }
}

/// Rule 8: https scheme. Unparseable URLs default to safe.
pub fn https_scheme(ctx: &RuleContext) -> i64 {
    match ctx.parsed.as_ref() {
        Some(parsed) if parsed.scheme().contains("https") => 1,
        Some(_) => -1,
        None => 1,
    }
}

/// Rule 10: a `<link rel=icon>` in the fetched document. Absent page,
/// unparsed markup, or no icon all read as suspicious.
pub fn favicon(ctx: &RuleContext) -> i64 {
    let Some(document) = ctx.document else {
        return -1;
    };
    match Selector::parse(r#"link[rel~="icon"]"#) {
        Ok(selector) if document.select(&selector).next().is_some() => 1,
        _ => -1,
    }
}

/// Rule 11: explicit `:port` suffix in the authority, scheme-default ports
/// included. Matched against the raw text, not the normalized parse.
pub fn non_std_port(ctx: &RuleContext) -> i64 {
    match ctx.raw_authority() {
        Some(authority) if authority.contains(':') => -1,
        _ => 1,
    }
}

/// Rule 12: literal "https" inside the host itself (scheme spoofing).
///
/// Substring-of-host on purpose: the paired model was trained against this
/// exact check, so it stays even though it rarely fires in the wild.
pub fn https_in_domain(ctx: &RuleContext) -> i64 {
    match ctx.domain() {
        Some(domain) if domain.contains("https") => -1,
        _ => 1,
    }
}

/// Rule 31: raw character count of the input URL.
pub fn url_length(ctx: &RuleContext) -> i64 {
    ctx.url.chars().count() as i64
}
