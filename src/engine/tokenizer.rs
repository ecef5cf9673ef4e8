use std::ops::Range;

use crate::bangs::BangRegistry;

/// One syntactic `!trigger` token found in a query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BangMatch {
    /// Lower-cased trigger without the `!`
    pub trigger: String,
    /// Byte range of the token, including the whitespace separator before it
    pub span: Range<usize>,
}

/// Known bangs detected in a query and the text left after removing them
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TokenScan {
    pub triggers: Vec<String>,
    pub residual: String,
}

fn is_trigger_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

/// Forward scan for bang tokens.
///
/// A token is `!` followed by one or more of `[A-Za-z0-9_-]`, where the `!`
/// sits at the start of the string or right after a whitespace character, and
/// the run is followed by whitespace or the end of the string. Scanning resumes
/// right after each token's run, so the whitespace that terminates one token
/// can separate the next.
pub fn scan(query: &str) -> Vec<BangMatch> {
    let chars: Vec<(usize, char)> = query.char_indices().collect();
    let mut matches = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let (offset, c) = chars[i];

        let bang_at = if i == 0 && c == '!' {
            Some(0)
        } else if c.is_whitespace() && chars.get(i + 1).is_some_and(|&(_, next)| next == '!') {
            Some(i + 1)
        } else {
            None
        };

        let Some(bang_at) = bang_at else {
            i += 1;
            continue;
        };

        let run_start = bang_at + 1;
        let mut run_end = run_start;
        while chars.get(run_end).is_some_and(|&(_, c)| is_trigger_char(c)) {
            run_end += 1;
        }

        let terminated = chars.get(run_end).is_none_or(|&(_, c)| c.is_whitespace());
        if run_end == run_start || !terminated {
            i += 1;
            continue;
        }

        let byte_at = |index: usize| chars.get(index).map_or(query.len(), |&(o, _)| o);
        let trigger_bytes = byte_at(run_start)..byte_at(run_end);

        matches.push(BangMatch {
            trigger: query[trigger_bytes].to_ascii_lowercase(),
            span: offset..byte_at(run_end),
        });
        i = run_end;
    }

    matches
}

/// Delete the given non-overlapping, ascending spans and trim the result
pub fn remove_spans(query: &str, spans: &[Range<usize>]) -> String {
    let mut residual = String::with_capacity(query.len());
    let mut cursor = 0;

    for span in spans {
        residual.push_str(&query[cursor..span.start]);
        cursor = span.end;
    }
    residual.push_str(&query[cursor..]);

    residual.trim().to_string()
}

/// Detect the bang tokens whose trigger exists in the registry.
///
/// Unknown tokens are left in the residual text untouched.
pub fn find_bangs(query: &str, registry: &BangRegistry) -> TokenScan {
    let (triggers, spans): (Vec<_>, Vec<_>) = scan(query)
        .into_iter()
        .filter(|found| registry.contains(&found.trigger))
        .map(|found| (found.trigger, found.span))
        .unzip();

    TokenScan {
        residual: remove_spans(query, &spans),
        triggers,
    }
}
