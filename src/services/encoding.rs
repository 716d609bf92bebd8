use std::sync::OnceLock;

use chardetng::EncodingDetector;
use encoding_rs::Encoding;
use regex::Regex;

const META_SNIFF_LEN: usize = 1024;

fn meta_charset_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([a-z0-9_:.\-]+)"#).expect("valid regex")
    })
}

/// Picks the body encoding: BOM, then `Content-Type` charset, then `<meta>` charset,
/// then a chardetng guess.
pub fn detect(bytes: &[u8], content_type: Option<&str>) -> &'static Encoding {
    if let Some((encoding, _)) = Encoding::for_bom(bytes) {
        return encoding;
    }

    if let Some(encoding) = content_type.and_then(charset_param).and_then(for_label) {
        return encoding;
    }

    if let Some(encoding) = sniff_meta(bytes) {
        return encoding;
    }

    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    detector.guess(None, true)
}

pub fn decode(bytes: &[u8], content_type: Option<&str>) -> String {
    let encoding = detect(bytes, content_type);
    let (text, actual, had_errors) = encoding.decode(bytes);

    if had_errors {
        tracing::debug!(encoding = actual.name(), "body contained malformed sequences");
    }

    text.into_owned()
}

fn charset_param(content_type: &str) -> Option<&str> {
    content_type.split(';').skip(1).find_map(|param| {
        let (key, value) = param.split_once('=')?;
        if key.trim().eq_ignore_ascii_case("charset") {
            Some(value.trim().trim_matches('"'))
        } else {
            None
        }
    })
}

fn for_label(label: &str) -> Option<&'static Encoding> {
    Encoding::for_label(label.as_bytes())
}

fn sniff_meta(bytes: &[u8]) -> Option<&'static Encoding> {
    let head = &bytes[..bytes.len().min(META_SNIFF_LEN)];
    let head = String::from_utf8_lossy(head);
    let label = meta_charset_re().captures(&head)?.get(1)?.as_str();

    // A <meta> that claims UTF-16 is read as UTF-8 per the HTML sniffing rules.
    for_label(label).map(Encoding::output_encoding)
}
