pub mod cli;
pub mod output;
pub mod profile;
pub mod search;
pub mod value;

pub use output::{render_value, render_value_compact, to_json, to_json_pretty, truncate};
pub use profile::{Facility, LoadError, Occurrences, Profile};
pub use search::{filter_by_path, search, Match, MatchKind, Predicate, RegexMatch, SubstringMatch};
pub use value::Value;
