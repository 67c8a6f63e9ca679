//! Response body decoding from the `Content-Type` charset.

use encoding_rs::{Encoding, UTF_8};

/// Extracts the lowercased `charset` parameter from a `Content-Type` value.
pub fn charset_from_content_type(content_type: &str) -> Option<String> {
    content_type.split(';').skip(1).find_map(|param| {
        let (name, value) = param.split_once('=')?;
        if !name.trim().eq_ignore_ascii_case("charset") {
            return None;
        }
        let value = value.trim().trim_matches('"').trim_matches('\'');
        if value.is_empty() {
            None
        } else {
            Some(value.to_ascii_lowercase())
        }
    })
}

/// Decodes a response body to text.
///
/// A declared charset is resolved through the WHATWG label table (so
/// `iso-8859-1` decodes as windows-1252, `Shift_JIS`, `euc-kr`, `gb2312`
/// etc. all work). A missing or unknown charset decodes as UTF-8. Malformed
/// sequences are replaced, never rejected.
pub fn decode_body(body: &[u8], content_type: Option<&str>) -> String {
    let encoding = content_type
        .and_then(charset_from_content_type)
        .and_then(|label| Encoding::for_label(label.as_bytes()))
        .unwrap_or(UTF_8);
    let (text, had_errors) = encoding.decode_without_bom_handling(body);
    if had_errors {
        tracing::debug!(charset = encoding.name(), "body had malformed sequences");
    }
    text.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn charset_parsing() {
        assert_eq!(
            charset_from_content_type("text/html; charset=UTF-8").as_deref(),
            Some("utf-8")
        );
        assert_eq!(
            charset_from_content_type("text/html;charset=\"ISO-8859-1\"").as_deref(),
            Some("iso-8859-1")
        );
        assert_eq!(charset_from_content_type("text/html"), None);
        assert_eq!(charset_from_content_type("text/html; charset="), None);
    }

    #[test]
    fn utf8_passes_through() {
        let body = "<p>héllo</p>".as_bytes();
        assert_eq!(decode_body(body, Some("text/html; charset=utf-8")), "<p>héllo</p>");
        assert_eq!(decode_body(body, None), "<p>héllo</p>");
    }

    #[test]
    fn iso_8859_1_label_decodes() {
        let body = b"caf\xe9";
        assert_eq!(decode_body(body, Some("text/html; charset=iso-8859-1")), "café");
    }

    #[test]
    fn windows_1252_smart_quotes() {
        let body = b"\x93hi\x94 caf\xe9";
        assert_eq!(
            decode_body(body, Some("text/html; charset=windows-1252")),
            "\u{201c}hi\u{201d} caf\u{e9}"
        );
        assert_eq!(
            decode_body(body, Some("text/html; charset=cp1252")),
            "\u{201c}hi\u{201d} caf\u{e9}"
        );
    }

    #[test]
    fn shift_jis_and_euc_kr() {
        assert_eq!(decode_body(b"\x82\xa0", Some("text/html; charset=Shift_JIS")), "\u{3042}");
        assert_eq!(decode_body(b"\xc7\xd1", Some("text/html; charset=euc-kr")), "\u{d55c}");
    }

    #[test]
    fn unknown_charset_falls_back_to_utf8() {
        let body = "<p>h\u{e9}llo</p>".as_bytes();
        assert_eq!(decode_body(body, Some("text/html; charset=x-made-up")), "<p>h\u{e9}llo</p>");
    }

    #[test]
    fn utf8_bom_is_kept_verbatim() {
        assert_eq!(decode_body(b"\xef\xbb\xbfhi", Some("text/html; charset=utf-8")), "\u{feff}hi");
    }

    #[test]
    fn invalid_utf8_is_replaced() {
        let body = b"ok\xff";
        assert_eq!(decode_body(body, Some("text/html")), "ok\u{fffd}");
    }
}
