use bytes::Bytes;
use chrono::{DateTime, Utc};
use reqwest::StatusCode;
use url::Url;

/// Character encoding detected for a fetched page body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Charset {
    Utf8,
    Latin1,
    Windows1252,
    Iso88591,
    ShiftJis,
    Gb2312,
    Big5,
    Other(String),
}

impl Charset {
    pub fn from_encoding(encoding: &'static encoding_rs::Encoding) -> Self {
        use std::ptr;

        if ptr::eq(encoding, encoding_rs::UTF_8) {
            Self::Utf8
        } else if ptr::eq(encoding, encoding_rs::WINDOWS_1252) {
            Self::Windows1252
        } else if ptr::eq(encoding, encoding_rs::SHIFT_JIS) {
            Self::ShiftJis
        } else if ptr::eq(encoding, encoding_rs::GBK) || ptr::eq(encoding, encoding_rs::GB18030) {
            Self::Gb2312
        } else if ptr::eq(encoding, encoding_rs::BIG5) {
            Self::Big5
        } else {
            Self::Other(encoding.name().to_ascii_lowercase())
        }
    }
}

/// One successfully fetched and decoded page. The feature rules only ever
/// look at `body_utf8`; the rest is kept for logging and diagnostics.
#[derive(Debug)]
pub struct PageResponse {
    pub url_final: Url,
    pub status: StatusCode,
    pub body_raw: Bytes,
    pub body_utf8: String,
    pub charset: Charset,
    pub fetched_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_known_encodings() {
        assert_eq!(Charset::from_encoding(encoding_rs::UTF_8), Charset::Utf8);
        assert_eq!(
            Charset::from_encoding(encoding_rs::SHIFT_JIS),
            Charset::ShiftJis
        );
        assert_eq!(Charset::from_encoding(encoding_rs::BIG5), Charset::Big5);
    }

    #[test]
    fn keeps_label_of_unmapped_encodings() {
        let encoding = encoding_rs::Encoding::for_label(b"euc-kr").unwrap();
        assert_eq!(
            Charset::from_encoding(encoding),
            Charset::Other("euc-kr".to_string())
        );
    }
}
