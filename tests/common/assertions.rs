//! Domain-specific assertion macros for docseek harnesses.
//!
//! These wrap `pretty_assertions` and add failure messages that name the
//! query and the keys involved.

/// Assert that a result list has exactly the given search keys, in order.
///
/// ```rust
/// assert_keys!(matcher.search(&index, "init"), ["init", "initaxis"]);
/// ```
#[macro_export]
macro_rules! assert_keys {
    ($hits:expr, [$($key:expr),* $(,)?]) => {{
        let actual: Vec<&str> = $hits.iter().map(|e| e.search_key.as_str()).collect();
        let expected: Vec<&str> = vec![$($key),*];
        pretty_assertions::assert_eq!(actual, expected, "search keys differ");
    }};
}

/// Assert that every hit's key contains `$needle` (already normalised).
#[macro_export]
macro_rules! assert_all_contain {
    ($hits:expr, $needle:expr) => {{
        let needle: &str = $needle;
        for entry in $hits.iter() {
            if !entry.search_key.to_lowercase().contains(needle) {
                panic!(
                    "assert_all_contain! failed: key {:?} does not contain {:?}",
                    entry.search_key, needle
                );
            }
        }
    }};
}

/// Assert that `$positions` is strictly increasing, i.e. results are in
/// table order with no duplicates.
#[macro_export]
macro_rules! assert_table_order {
    ($positions:expr) => {{
        let positions: &[usize] = &$positions;
        if let Some(w) = positions.windows(2).find(|w| w[0] >= w[1]) {
            panic!(
                "assert_table_order! failed: position {} followed by {} in {:?}",
                w[0], w[1], positions
            );
        }
    }};
}
