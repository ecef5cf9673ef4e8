use super::types::BangDefinition;

// (trigger, domain, template)
const BUILTIN: &[(&str, &str, &str)] = &[
    ("ddg", "duckduckgo.com", "https://duckduckgo.com/?q={{{s}}}"),
    ("g", "google.com", "https://www.google.com/search?q={{{s}}}"),
    ("gi", "google.com", "https://google.com/search?tbm=isch&q={{{s}}}&tbs=imgo:1"),
    ("gm", "maps.google.com", "https://www.google.com/maps/search/{{{s}}}"),
    ("r", "www.reddit.com", "https://www.reddit.com/search?q={{{s}}}"),
    ("yt", "www.youtube.com", "https://www.youtube.com/results?search_query={{{s}}}"),
    ("w", "en.wikipedia.org", "https://en.wikipedia.org/wiki/Special:Search?search={{{s}}}"),
    ("brave", "search.brave.com", "https://search.brave.com/search?q={{{s}}}"),
    ("b", "www.bing.com", "https://www.bing.com/search?q={{{s}}}"),
    ("gh", "github.com", "https://github.com/search?q={{{s}}}"),
    ("so", "stackoverflow.com", "https://stackoverflow.com/search?q={{{s}}}"),
    ("crates", "crates.io", "https://crates.io/search?q={{{s}}}"),
    ("docs", "docs.rs", "https://docs.rs/releases/search?query={{{s}}}"),
    ("npm", "www.npmjs.com", "https://www.npmjs.com/search?q={{{s}}}"),
    ("imdb", "www.imdb.com", "https://www.imdb.com/find?s=all&q={{{s}}}"),
    ("a", "www.amazon.com", "https://www.amazon.com/s?k={{{s}}}"),
    ("chatgpt", "chatgpt.com", "https://chatgpt.com/?q={{{s}}}"),
    ("perplexity", "www.perplexity.ai", "https://www.perplexity.ai/search?q={{{s}}}"),
    ("kagi", "kagi.com", "https://kagi.com/search?q={{{s}}}"),
    ("t3", "t3.chat", "https://www.t3.chat/new?q={{{s}}}"),
    ("bsky", "bsky.app", "https://bsky.app/search?q={{{s}}}"),
];

/// The static bang table shipped with the service, in registry order
pub fn builtin_bangs() -> Vec<BangDefinition> {
    BUILTIN
        .iter()
        .map(|&(trigger, domain, template)| BangDefinition::new(trigger, domain, template))
        .collect()
}
