//! Per-facility match counts over starsConfiguration

use crate::output::{render_value_compact, truncate};
use crate::profile::Profile;
use crate::search::{search, SubstringMatch};

/// Options for the summary command
#[derive(Debug, Clone)]
pub struct SummaryOptions {
    /// Substring to look for in keys
    pub pattern: String,
    /// Truncate listed values to this many characters
    pub truncate: usize,
}

impl Default for SummaryOptions {
    fn default() -> Self {
        SummaryOptions {
            pattern: "altimeter".to_string(),
            truncate: 100,
        }
    }
}

/// Render a short block per facility: how many keys under its
/// `starsConfiguration` match the pattern, with path and value inline.
///
/// Facilities without a populated `starsConfiguration` are skipped; towers
/// and other non-STARS facilities carry none.
pub fn render_summary(profile: &Profile, options: &SummaryOptions) -> String {
    let predicate = SubstringMatch::keys(&options.pattern);
    let facilities = profile.child_facilities();

    let mut out = String::new();
    out.push_str(&format!("Found {} child facilities\n\n", facilities.len()));

    for fac in &facilities {
        let stars = match fac.nonempty_stars_configuration() {
            Some(stars) => stars,
            None => continue,
        };
        let hits = search(stars, &predicate, "");
        let id = fac.id().unwrap_or("?");
        if hits.is_empty() {
            out.push_str(&format!("{}: No {} fields found\n", id, options.pattern));
        } else {
            out.push_str(&format!(
                "\n{} has {} {} field(s):\n",
                id,
                hits.len(),
                options.pattern
            ));
            for m in &hits {
                out.push_str(&format!(
                    "  {}: {}\n",
                    m.path,
                    truncate(&render_value_compact(m.value), options.truncate)
                ));
            }
        }
    }

    out
}
