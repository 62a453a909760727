//! Recursive key/value search over a [`Value`] tree.
//!
//! The walk visits every node of the document exactly once, in document
//! order, offering each object member to a [`Predicate`]. A member can match
//! on its key, on its (string) value, or on both; matching never stops the
//! walk from descending into the member. Array elements carry no key, so the
//! walk only recurses through them.
//!
//! The search itself cannot fail: any well-formed [`Value`] tree produces a
//! (possibly empty) list of matches.

use std::fmt;

use regex::{Regex, RegexBuilder};

use crate::value::Value;

/// Which rule produced a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    /// The member's key contained the pattern.
    Key,
    /// The member's string value contained the pattern.
    Value,
}

impl fmt::Display for MatchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchKind::Key => write!(f, "KEY"),
            MatchKind::Value => write!(f, "VALUE"),
        }
    }
}

/// One search hit.
///
/// `path` locates the matched member relative to the search root: `.key` for
/// object member access (a bare `key` at the root) and `[index]` for array
/// elements, e.g. `facility.childFacilities[3].starsConfiguration`.
///
/// `depth` is diagnostic only: the nesting depth of the matched member's
/// parent container, counted from the search root (members of the root have
/// depth 0). It never affects traversal order or results.
#[derive(Debug, Clone, PartialEq)]
pub struct Match<'a> {
    pub path: String,
    pub kind: MatchKind,
    pub value: &'a Value,
    pub depth: usize,
}

/// A match rule applied to every object member during [`search`].
///
/// Both methods are consulted for each member, so one member can produce a
/// [`MatchKind::Key`] and a [`MatchKind::Value`] record in the same pass.
pub trait Predicate {
    /// Does this member key match?
    fn matches_key(&self, key: &str) -> bool;

    /// Does this member value match? The stock predicates only ever match
    /// string values; numbers, booleans and containers are never offered a
    /// textual form.
    fn matches_value(&self, value: &Value) -> bool;
}

/// Case-insensitive substring predicate, the default match rule.
///
/// # Examples
///
/// ```
/// use starscan::{search, SubstringMatch, Value};
///
/// let doc = Value::from_json_str(r#"{"a": {"altimeterSetting": 5}}"#).unwrap();
/// let hits = search(&doc, &SubstringMatch::keys("ALTIMETER"), "");
/// assert_eq!(hits.len(), 1);
/// assert_eq!(hits[0].path, "a.altimeterSetting");
/// ```
pub struct SubstringMatch {
    needle: String,
    include_values: bool,
}

impl SubstringMatch {
    /// Match object keys only.
    pub fn keys(needle: &str) -> Self {
        SubstringMatch {
            needle: needle.to_lowercase(),
            include_values: false,
        }
    }

    /// Match object keys and string values.
    pub fn keys_and_values(needle: &str) -> Self {
        SubstringMatch {
            needle: needle.to_lowercase(),
            include_values: true,
        }
    }
}

impl Predicate for SubstringMatch {
    fn matches_key(&self, key: &str) -> bool {
        key.to_lowercase().contains(&self.needle)
    }

    fn matches_value(&self, value: &Value) -> bool {
        if !self.include_values {
            return false;
        }
        match value {
            Value::String(s) => s.to_lowercase().contains(&self.needle),
            _ => false,
        }
    }
}

/// Regex predicate for `--regex` searches.
///
/// Patterns compile case-insensitively so the two predicate flavors agree on
/// casing.
pub struct RegexMatch {
    re: Regex,
    include_values: bool,
}

impl RegexMatch {
    /// Match object keys only.
    pub fn keys(pattern: &str) -> Result<Self, regex::Error> {
        Ok(RegexMatch {
            re: compile(pattern)?,
            include_values: false,
        })
    }

    /// Match object keys and string values.
    pub fn keys_and_values(pattern: &str) -> Result<Self, regex::Error> {
        Ok(RegexMatch {
            re: compile(pattern)?,
            include_values: true,
        })
    }
}

fn compile(pattern: &str) -> Result<Regex, regex::Error> {
    RegexBuilder::new(pattern).case_insensitive(true).build()
}

impl Predicate for RegexMatch {
    fn matches_key(&self, key: &str) -> bool {
        self.re.is_match(key)
    }

    fn matches_value(&self, value: &Value) -> bool {
        if !self.include_values {
            return false;
        }
        match value {
            Value::String(s) => self.re.is_match(s),
            _ => false,
        }
    }
}

/// Depth-first search of `root`, returning matches in document order.
///
/// `prefix` is the path accumulated so far; pass `""` when `root` is the
/// document (or subtree) the paths should be relative to. A parent's match
/// is reported before any match inside its subtree, and calling `search`
/// twice on the same input yields identical results.
///
/// # Examples
///
/// ```
/// use starscan::{search, MatchKind, SubstringMatch, Value};
///
/// let doc = Value::from_json_str(
///     r#"{"list": [{"x": 1}, {"altimeter": "29.92"}]}"#,
/// ).unwrap();
///
/// let hits = search(&doc, &SubstringMatch::keys_and_values("altimeter"), "");
/// assert_eq!(hits.len(), 1);
/// assert_eq!(hits[0].path, "list[1].altimeter");
/// assert_eq!(hits[0].kind, MatchKind::Key);
/// ```
pub fn search<'a, P: Predicate + ?Sized>(
    root: &'a Value,
    predicate: &P,
    prefix: &str,
) -> Vec<Match<'a>> {
    let mut matches = Vec::new();
    walk(root, predicate, prefix, 0, &mut matches);
    matches
}

fn walk<'a, P: Predicate + ?Sized>(
    value: &'a Value,
    predicate: &P,
    path: &str,
    depth: usize,
    out: &mut Vec<Match<'a>>,
) {
    match value {
        Value::Object(obj) => {
            for (key, member) in obj {
                let child_path = if path.is_empty() {
                    key.clone()
                } else {
                    format!("{}.{}", path, key)
                };
                if predicate.matches_key(key) {
                    out.push(Match {
                        path: child_path.clone(),
                        kind: MatchKind::Key,
                        value: member,
                        depth,
                    });
                }
                if predicate.matches_value(member) {
                    out.push(Match {
                        path: child_path.clone(),
                        kind: MatchKind::Value,
                        value: member,
                        depth,
                    });
                }
                // A match never prunes the subtree below it.
                walk(member, predicate, &child_path, depth + 1, out);
            }
        }
        Value::Array(arr) => {
            for (index, element) in arr.iter().enumerate() {
                let child_path = format!("{}[{}]", path, index);
                walk(element, predicate, &child_path, depth + 1, out);
            }
        }
        // Scalars are leaves; their values were already offered to the
        // predicate by the containing object, if any.
        _ => {}
    }
}

/// Keep only matches whose path contains `needle` (case-sensitive).
///
/// This is a post-filter over a completed search, not a traversal rule: the
/// walk always covers the whole subtree and the cut happens afterwards. An
/// empty needle keeps everything.
pub fn filter_by_path<'a>(matches: Vec<Match<'a>>, needle: &str) -> Vec<Match<'a>> {
    matches
        .into_iter()
        .filter(|m| m.path.contains(needle))
        .collect()
}
