//! Whole-profile field search with section counts

use crate::output::{render_value_compact, truncate};
use crate::profile::Profile;
use crate::search::{filter_by_path, search, Predicate, RegexMatch, SubstringMatch};

use super::CliError;

/// Options for the scan command
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Substring (or regex) to look for
    pub pattern: String,
    /// Match keys only, ignoring string values
    pub keys_only: bool,
    /// Treat the pattern as a regular expression
    pub regex: bool,
    /// Only list matches whose path contains this substring
    pub within: String,
    /// Maximum number of matches to list
    pub limit: usize,
    /// Truncate listed values to this many characters
    pub truncate: usize,
}

impl Default for ScanOptions {
    fn default() -> Self {
        ScanOptions {
            pattern: "altimeter".to_string(),
            keys_only: false,
            regex: false,
            within: "starsConfiguration".to_string(),
            limit: 20,
            truncate: 200,
        }
    }
}

/// Render the scan report: match counts for the two conventional sections,
/// then a listing of the facility matches whose paths fall inside `within`.
pub fn render_scan(profile: &Profile, options: &ScanOptions) -> Result<String, CliError> {
    let predicate = build_predicate(options)?;

    let auto_matches = match profile.auto_atc_rules() {
        Some(rules) => search(rules, predicate.as_ref(), "autoAtcRules"),
        None => Vec::new(),
    };
    let facility_matches = match profile.facility() {
        Some(facility) => search(facility.value(), predicate.as_ref(), "facility"),
        None => Vec::new(),
    };
    let facility_count = facility_matches.len();
    let within_matches = filter_by_path(facility_matches, &options.within);

    let mut out = String::new();
    out.push_str(&format!(
        "In autoAtcRules section: {} occurrences (ignored by convention)\n\n",
        auto_matches.len()
    ));
    out.push_str(&format!(
        "In facility section: {} occurrences\n\n",
        facility_count
    ));
    out.push_str(&format!(
        "In {}: {} occurrences\n\n",
        options.within,
        within_matches.len()
    ));

    if !within_matches.is_empty() {
        out.push_str(&format!(
            "Fields matching '{}' in {}:\n\n",
            options.pattern, options.within
        ));
        out.push_str(&format!("{}\n", "=".repeat(80)));
        for m in within_matches.iter().take(options.limit) {
            out.push_str(&format!("\nPath: {}\n", m.path));
            out.push_str(&format!("Match Type: {}\n", m.kind));
            out.push_str(&format!(
                "Value: {}\n",
                truncate(&render_value_compact(m.value), options.truncate)
            ));
            out.push_str(&format!("{}\n", "-".repeat(80)));
        }
    }

    Ok(out)
}

fn build_predicate(options: &ScanOptions) -> Result<Box<dyn Predicate>, CliError> {
    if options.regex {
        let rx = if options.keys_only {
            RegexMatch::keys(&options.pattern)
        } else {
            RegexMatch::keys_and_values(&options.pattern)
        }
        .map_err(CliError::Pattern)?;
        Ok(Box::new(rx))
    } else if options.keys_only {
        Ok(Box::new(SubstringMatch::keys(&options.pattern)))
    } else {
        Ok(Box::new(SubstringMatch::keys_and_values(&options.pattern)))
    }
}
