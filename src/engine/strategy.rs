use serde::Serialize;

use crate::bangs::BangRegistry;

use super::tokenizer::{self, TokenScan};

/// Which parser produced the single-destination candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ParseStrategy {
    /// Registry-aware token scan found exactly one known bang
    MultiBang,
    /// First `!run` anywhere in the query, known or not
    Legacy,
}

/// Candidate trigger and the query text left once it is removed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateQuery {
    pub trigger: Option<String>,
    pub clean_query: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedQuery {
    Single {
        strategy: ParseStrategy,
        candidate: CandidateQuery,
    },
    /// Two or more known bangs, in order of appearance
    Multi(TokenScan),
}

/// Pick the parsing strategy for a trimmed, non-empty query.
///
/// With multi-bang enabled the token scan runs first; when it detects no known
/// bang the legacy parser runs on the full query, so an explicit unknown
/// bang is still stripped.
pub fn parse(query: &str, registry: &BangRegistry, multi_bang_enabled: bool) -> ParsedQuery {
    if multi_bang_enabled {
        let mut scan = tokenizer::find_bangs(query, registry);

        match scan.triggers.len() {
            0 => {}
            1 => {
                return ParsedQuery::Single {
                    strategy: ParseStrategy::MultiBang,
                    candidate: CandidateQuery {
                        trigger: scan.triggers.pop(),
                        clean_query: scan.residual,
                    },
                };
            }
            _ => return ParsedQuery::Multi(scan),
        }
    }

    ParsedQuery::Single {
        strategy: ParseStrategy::Legacy,
        candidate: parse_legacy(query),
    }
}

/// Single-bang parsing: the first `!` followed by a non-whitespace run.
///
/// The run is lower-cased as the candidate trigger; `!run` and any whitespace
/// after it are removed from the query. Registry membership is not checked.
pub fn parse_legacy(query: &str) -> CandidateQuery {
    let found = query.match_indices('!').find_map(|(bang_at, _)| {
        let rest = &query[bang_at + 1..];
        let run_len = rest.find(char::is_whitespace).unwrap_or(rest.len());
        (run_len > 0).then_some((bang_at, run_len))
    });

    let Some((bang_at, run_len)) = found else {
        return CandidateQuery {
            trigger: None,
            clean_query: query.to_string(),
        };
    };

    let run_end = bang_at + 1 + run_len;
    let trigger = query[bang_at + 1..run_end].to_lowercase();
    let after = query[run_end..].trim_start();
    let clean_query = format!("{}{}", &query[..bang_at], after).trim().to_string();

    CandidateQuery {
        trigger: Some(trigger),
        clean_query,
    }
}
