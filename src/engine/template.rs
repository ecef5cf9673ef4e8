use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::bangs::PLACEHOLDERS;

/// Characters escaped by URI component encoding (everything except
/// `A-Z a-z 0-9 - _ . ! ~ * ' ( )`)
pub const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Component encoding that keeps `/` literal so path-like queries stay readable
pub const QUERY: &AsciiSet = &COMPONENT.remove(b'/');

const HARD_FALLBACK: &str = "https://duckduckgo.com/?q=";

/// Percent-encode a search query for substitution into a template
pub fn encode(query: &str) -> String {
    utf8_percent_encode(query, QUERY).to_string()
}

/// Replace the first placeholder in the template with the encoded query.
///
/// Whichever of `{{{s}}}` / `%s` appears first is replaced; a template with
/// neither is returned unchanged.
pub fn expand(template: &str, query: &str) -> String {
    let first = PLACEHOLDERS
        .iter()
        .filter_map(|placeholder| template.find(placeholder).map(|at| (at, placeholder.len())))
        .min_by_key(|&(at, _)| at);

    match first {
        Some((at, len)) => {
            let encoded = encode(query);
            let mut url = String::with_capacity(template.len() - len + encoded.len());
            url.push_str(&template[..at]);
            url.push_str(&encoded);
            url.push_str(&template[at + len..]);
            url
        }
        None => template.to_string(),
    }
}

/// Destination used when no bang at all can be resolved
pub fn hard_fallback_url(query: &str) -> String {
    format!("{HARD_FALLBACK}{}", utf8_percent_encode(query, COMPONENT))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_matches_uri_component_rules() {
        assert_eq!(encode("hello world"), "hello%20world");
        assert_eq!(encode("a+b&c=d?#"), "a%2Bb%26c%3Dd%3F%23");
        assert_eq!(encode("it's (fine)! ~*._-"), "it's%20(fine)!%20~*._-");
        assert_eq!(encode("naïve"), "na%C3%AFve");
        assert_eq!(encode("100%2F"), "100%252F");
    }

    #[test]
    fn test_encode_keeps_slashes() {
        assert_eq!(encode("tokio/src/lib.rs"), "tokio/src/lib.rs");
    }

    #[test]
    fn test_expand_either_placeholder() {
        assert_eq!(
            expand("https://duckduckgo.com/?q={{{s}}}", "rust lang"),
            "https://duckduckgo.com/?q=rust%20lang"
        );
        assert_eq!(
            expand("https://example.com/search?q=%s&x=1", "a/b"),
            "https://example.com/search?q=a/b&x=1"
        );
    }

    #[test]
    fn test_expand_replaces_only_the_earliest_placeholder() {
        assert_eq!(
            expand("https://x.dev/%s/{{{s}}}", "q"),
            "https://x.dev/q/{{{s}}}"
        );
        assert_eq!(
            expand("https://x.dev/{{{s}}}/%s", "q"),
            "https://x.dev/q/%s"
        );
    }

    #[test]
    fn test_expand_without_placeholder_is_unchanged() {
        assert_eq!(expand("https://x.dev/", "q"), "https://x.dev/");
    }

    #[test]
    fn test_hard_fallback_encodes_slashes() {
        assert_eq!(
            hard_fallback_url("a/b c"),
            "https://duckduckgo.com/?q=a%2Fb%20c"
        );
    }
}
