//! Property-map string parsing
//!
//! Report configuration carries small string-to-string maps inline in
//! property values:
//!
//! ```text
//! ("SOO" , "Product 1"); ("Wc2000", "Product 2"); ("SEP", "Product 3")
//! ```
//!
//! [`parse_map`] turns such a string into a sorted map. Segments that do
//! not match the `("key", "value")` form are skipped.

use lazy_regex::regex;
use std::collections::BTreeMap;

/// Parse a property string of `("key", "value")` pairs separated by
/// semicolons into a sorted map
///
/// # Example
///
/// ```rust
/// use gridcast::propmap::parse_map;
///
/// let map = parse_map(r#"("b", "2"); ("a", "1")"#);
/// assert_eq!(map.get("a").map(String::as_str), Some("1"));
/// assert_eq!(map.keys().next().map(String::as_str), Some("a"));
/// ```
pub fn parse_map(data: &str) -> BTreeMap<String, String> {
    let pattern = regex!(r#"^\(\s*?"(.+?)"\s*,\s*"(.+?)"\s*\)$"#);

    let mut map = BTreeMap::new();
    for element in data.split(';') {
        if let Some(captures) = pattern.captures(element.trim()) {
            map.insert(captures[1].to_string(), captures[2].to_string());
        }
    }
    map
}
