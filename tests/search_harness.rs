#![allow(unused)]
//! Search layer integration harness.
//!
//! # What this covers
//!
//! - **Worked examples**: `init` on the functions fixture returns the `init`,
//!   `initaxis` and `initialise` entries with every target intact; `zzz`
//!   returns nothing and does not fail.
//! - **Normalisation**: case, leading whitespace and Doxygen's `_xx` encoding
//!   of punctuation (`~` matches `_7e` keys). Fragments of the encoded keys
//!   themselves (`_7e`, `3c_3c`) match as typed.
//! - **Modes**: prefix, substring, `/regex/`, the empty-query policy and the
//!   result cap.
//! - **Property: results contain the query**: every returned key contains the
//!   normalised query.
//! - **Property: completeness**: every key containing the query as typed, or
//!   its encoded form, is returned, including queries with `_`.
//! - **Property: prefix ⊆ substring**: for any query, the prefix result set is
//!   a subset of the substring result set.
//! - **Property: table order**: results are strictly increasing positions.
//!
//! # Running
//!
//! ```sh
//! cargo test --test search_harness
//! ```

mod common;
use common::*;
use docseek_core::{normalize_query, EmptyQuery, MatchMode, Matcher};
use proptest::prelude::*;
use rstest::rstest;

// ---------------------------------------------------------------------------
// Worked examples
// ---------------------------------------------------------------------------

#[test]
fn init_matches_with_all_targets() {
    let index = load(FUNCTIONS_I);
    let hits = Matcher::default().search(&index, "init");
    assert_keys!(hits, ["init", "initaxis", "initialise"]);

    assert_eq!(hits[0].targets.len(), 3);
    assert_eq!(hits[0].targets[1].scope, "ComPWA::TwoBodyKinematics::init()");
    assert_eq!(hits[1].targets.len(), 2);
    assert_eq!(hits[2].display_label, "initialise");
}

#[test]
fn no_match_is_empty_not_error() {
    let index = load(FUNCTIONS_I);
    assert!(Matcher::default().search(&index, "zzz").is_empty());
}

#[test]
fn query_is_case_insensitive() {
    let index = load(FUNCTIONS_I);
    let upper = Matcher::default().search(&index, "InitAxis");
    assert_keys!(upper, ["initaxis"]);
}

#[test]
fn leading_whitespace_is_ignored() {
    let index = load(FUNCTIONS_I);
    assert_keys!(Matcher::default().search(&index, "   imag"), ["imag"]);
}

#[test]
fn punctuation_matches_encoded_keys() {
    let index = load(SPECIAL_KEYS);
    assert_keys!(Matcher::default().search(&index, "~"), ["_7efunctiontree"]);
    assert_keys!(Matcher::default().search(&index, "operator<<"), ["operator_3c_3c"]);
    assert_keys!(Matcher::default().search(&index, "()"), ["operator_28_29"]);
}

#[rstest]
#[case("_", &["_7efunctiontree", "operator_3c_3c", "operator_28_29"])]
#[case("_7e", &["_7efunctiontree"])]
#[case("_7eFunction", &["_7efunctiontree"])]
#[case("operator_3c", &["operator_3c_3c"])]
#[case("3c_3c", &["operator_3c_3c"])]
#[case("_28_29", &["operator_28_29"])]
fn encoded_key_fragments_match_as_typed(#[case] query: &str, #[case] expected: &[&str]) {
    let index = load(SPECIAL_KEYS);
    for mode in [MatchMode::Substring, MatchMode::Prefix] {
        let hits = Matcher::new(mode).search(&index, query);
        let keys: Vec<&str> = hits.iter().map(|e| e.search_key.as_str()).collect();
        let wanted: Vec<&str> = match mode {
            MatchMode::Substring => expected.to_vec(),
            MatchMode::Prefix => expected
                .iter()
                .copied()
                .filter(|k| k.starts_with(&query.to_lowercase()))
                .collect(),
        };
        assert_eq!(keys, wanted, "mode {mode}, query {query:?}");
    }
}

#[rstest]
#[case("imag", &["imag"])]
#[case("IMAG", &["imag"])]
#[case("tree", &["inilhtree"])]
#[case("insert", &["insertnode"])]
#[case("within", &["iswithinphsp"])]
#[case("intensity", &["incoherentintensity"])]
fn single_hits(#[case] query: &str, #[case] expected: &[&str]) {
    let index = load(FUNCTIONS_I);
    let hits = Matcher::default().search(&index, query);
    let keys: Vec<&str> = hits.iter().map(|e| e.search_key.as_str()).collect();
    assert_eq!(keys, expected);
}

// ---------------------------------------------------------------------------
// Modes
// ---------------------------------------------------------------------------

#[test]
fn prefix_mode_excludes_inner_matches() {
    let index = load(FUNCTIONS_I);
    let substring = Matcher::new(MatchMode::Substring).search(&index, "phsp");
    assert_keys!(substring, ["iswithinphsp"]);
    let prefix = Matcher::new(MatchMode::Prefix).search(&index, "phsp");
    assert!(prefix.is_empty());
    let prefix = Matcher::new(MatchMode::Prefix).search(&index, "in");
    assert_keys!(
        prefix,
        ["incoherentintensity", "inilhtree", "init", "initaxis", "initialise", "innerproduct", "insertnode"]
    );
}

#[test]
fn regex_query_overrides_mode() {
    let index = load(FUNCTIONS_I);
    let hits = Matcher::new(MatchMode::Prefix).search(&index, "/^in.*t$/");
    assert_keys!(hits, ["init", "innerproduct"]);
}

#[test]
fn invalid_regex_returns_nothing() {
    let index = load(FUNCTIONS_I);
    assert!(Matcher::default().search(&index, "/[init/").is_empty());
}

#[test]
fn empty_query_policy() {
    let index = load(FUNCTIONS_I);
    assert!(Matcher::default().search(&index, "").is_empty());
    let all = Matcher::default()
        .with_empty_query(EmptyQuery::All)
        .search(&index, "  ");
    assert_eq!(all.len(), FUNCTIONS_I_RECORDS);
}

#[test]
fn max_results_keeps_the_first_hits() {
    let index = load(FUNCTIONS_I);
    let hits = Matcher::default().with_max_results(2).search(&index, "in");
    assert_keys!(hits, ["incoherentintensity", "inilhtree"]);
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

fn keys_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::btree_set("[a-z0-9_]{1,10}", 1..40)
        .prop_map(|keys| keys.into_iter().collect::<Vec<_>>())
        .prop_shuffle()
}

proptest! {
    #[test]
    fn prop_results_contain_query(keys in keys_strategy(), query in "[a-zA-Z0-9]{1,3}") {
        let index = index_from_keys(&keys);
        let hits = Matcher::default().search(&index, &query);
        assert_all_contain!(hits, &normalize_query(&query));
    }

    #[test]
    fn prop_substring_finds_every_containing_key(keys in keys_strategy(), query in "[a-z0-9_]{1,3}") {
        let index = index_from_keys(&keys);
        let hits = Matcher::default().search(&index, &query);
        let found: Vec<&str> = hits.iter().map(|e| e.search_key.as_str()).collect();
        for key in keys.iter().filter(|k| k.contains(query.as_str())) {
            prop_assert!(found.contains(&key.as_str()), "key {:?} contains {:?} but was not returned", key, query);
        }
        let encoded = normalize_query(&query);
        let expected = keys
            .iter()
            .filter(|k| k.contains(query.as_str()) || k.contains(encoded.as_str()))
            .count();
        prop_assert_eq!(hits.len(), expected);
    }

    #[test]
    fn prop_prefix_finds_every_key_starting_with_query(keys in keys_strategy(), query in "[a-z0-9_]{1,3}") {
        let index = index_from_keys(&keys);
        let hits = Matcher::new(MatchMode::Prefix).search(&index, &query);
        let found: Vec<&str> = hits.iter().map(|e| e.search_key.as_str()).collect();
        for key in keys.iter().filter(|k| k.starts_with(query.as_str())) {
            prop_assert!(found.contains(&key.as_str()), "key {:?} starts with {:?} but was not returned", key, query);
        }
    }

    #[test]
    fn prop_prefix_subset_of_substring(keys in keys_strategy(), query in "[a-z0-9_]{1,3}") {
        let index = index_from_keys(&keys);
        let prefix = Matcher::new(MatchMode::Prefix).positions(&index, &query);
        let substring = Matcher::new(MatchMode::Substring).positions(&index, &query);
        for p in &prefix {
            prop_assert!(substring.contains(p), "prefix hit {} missing from substring hits", p);
        }
    }

    #[test]
    fn prop_results_in_table_order(keys in keys_strategy(), query in "[a-z]{1,2}", prefix in any::<bool>()) {
        let index = index_from_keys(&keys);
        let mode = if prefix { MatchMode::Prefix } else { MatchMode::Substring };
        let positions = Matcher::new(mode).positions(&index, &query);
        assert_table_order!(positions);
    }
}
