//! "Did you mean" suggestions for paths that match no route

use crate::spec::RouteTable;
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

const MAX_SUGGESTIONS: usize = 3;

/// Returns up to three declared path templates that fuzzily resemble `input_path`,
/// best match first.
#[must_use]
pub fn suggest_paths(table: &RouteTable, input_path: &str) -> Vec<String> {
    let matcher = SkimMatcherV2::default().ignore_case();

    let mut scored: Vec<(i64, &str)> = Vec::new();
    for route in table.routes() {
        if scored.iter().any(|(_, p)| *p == route.path) {
            continue;
        }
        if let Some(score) = matcher.fuzzy_match(&route.path, input_path.trim_end_matches('/')) {
            scored.push((score, route.path.as_str()));
        }
    }

    // Stable sort keeps table order among equal scores.
    scored.sort_by(|a, b| b.0.cmp(&a.0));
    scored
        .into_iter()
        .take(MAX_SUGGESTIONS)
        .map(|(_, path)| path.to_string())
        .collect()
}
