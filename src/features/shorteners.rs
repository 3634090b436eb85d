use once_cell::sync::Lazy;
use regex::Regex;

/// Catalog of known URL-shortener hosts, matched anywhere in the raw URL.
/// This is the exact alternation the classifier was trained against
/// (duplicates and all); keep it in sync with the model, not with taste.
pub static SHORTENER_CATALOG: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"bit\.ly|goo\.gl|shorte\.st|go2l\.ink|x\.co|ow\.ly|t\.co|tinyurl|tr\.im|is\.gd|cli\.gs|",
        r"yfrog\.com|migre\.me|ff\.im|tiny\.cc|url4\.eu|twit\.ac|su\.pr|twurl\.nl|snipurl\.com|",
        r"short\.to|BudURL\.com|ping\.fm|post\.ly|Just\.as|bkite\.com|snipr\.com|fic\.kr|loopt\.us|",
        r"doiop\.com|short\.ie|kl\.am|wp\.me|rubyurl\.com|om\.ly|to\.ly|bit\.do|t\.co|lnkd\.in|",
        r"db\.tt|qr\.ae|adf\.ly|goo\.gl|bitly\.com|cur\.lv|tinyurl\.com|ow\.ly|bit\.ly|ity\.im|",
        r"q\.gs|is\.gd|po\.st|bc\.vc|twitthis\.com|u\.to|j\.mp|buzurl\.com|cutt\.us|u\.bb|yourls\.org|",
        r"x\.co|prettylinkpro\.com|scrnch\.me|filoops\.info|vzturl\.com|qr\.net|1url\.com|tweez\.me|v\.gd|tr\.im|link\.zip\.net",
    ))
    .unwrap()
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_common_shorteners() {
        for url in [
            "http://bit.ly/abc",
            "https://tinyurl.com/xyz",
            "http://t.co/q",
            "https://goo.gl/maps/x",
        ] {
            assert!(SHORTENER_CATALOG.is_match(url), "expected match: {url}");
        }
    }

    #[test]
    fn ignores_regular_hosts() {
        for url in [
            "http://example.com/page",
            "https://www.wikipedia.org/",
            "https://mybank.com/login",
        ] {
            assert!(!SHORTENER_CATALOG.is_match(url), "unexpected match: {url}");
        }
    }
}
