//! Full match listing for selected facilities

use crate::output::render_value;
use crate::profile::Profile;
use crate::search::{search, SubstringMatch};

/// Options for the detail command
#[derive(Debug, Clone)]
pub struct DetailOptions {
    /// Facility ids to detail, in report order
    pub ids: Vec<String>,
    /// Substring to look for in keys
    pub pattern: String,
}

impl Default for DetailOptions {
    fn default() -> Self {
        DetailOptions {
            ids: Vec::new(),
            pattern: "altimeter".to_string(),
        }
    }
}

/// Render a banner-framed section per requested facility, listing every
/// match's path and full value (objects and arrays pretty-printed), then a
/// one-line status per facility across the whole profile.
///
/// A requested id missing from `childFacilities` gets a "not found" line
/// instead of failing the report. A facility without a `starsConfiguration`
/// searches as empty.
pub fn render_detail(profile: &Profile, options: &DetailOptions) -> String {
    let predicate = SubstringMatch::keys(&options.pattern);
    let banner = "=".repeat(60);

    let mut out = String::new();
    out.push_str(&format!(
        "Searching for '{}' fields in TRACON starsConfiguration objects...\n\n",
        options.pattern
    ));

    for id in &options.ids {
        out.push_str(&format!(
            "{}\n{} TRACON - starsConfiguration\n{}\n",
            banner, id, banner
        ));
        match profile.find_facility(id) {
            None => out.push_str(&format!("\n{} not found\n", id)),
            Some(fac) => {
                let hits = match fac.stars_configuration() {
                    Some(stars) => search(stars, &predicate, ""),
                    None => Vec::new(),
                };
                if hits.is_empty() {
                    out.push_str(&format!(
                        "\nNo fields containing '{}' found in {} starsConfiguration\n",
                        options.pattern, id
                    ));
                } else {
                    out.push_str(&format!(
                        "\nFound {} {} field(s):\n\n",
                        hits.len(),
                        options.pattern
                    ));
                    for m in &hits {
                        out.push_str(&format!("Path: {}\n", m.path));
                        out.push_str(&format!("Value: {}\n\n", render_value(m.value)));
                    }
                }
            }
        }
        out.push('\n');
    }

    out.push_str(&format!("{}\nALL TRACONs Summary\n{}\n", banner, banner));
    for fac in profile.child_facilities() {
        let stars = match fac.nonempty_stars_configuration() {
            Some(stars) => stars,
            None => continue,
        };
        let hits = search(stars, &predicate, "");
        let status = if hits.is_empty() {
            format!("No {} fields", options.pattern)
        } else {
            format!("Found {} {} field(s)", hits.len(), options.pattern)
        };
        out.push_str(&format!("{}: {}\n", fac.id().unwrap_or("?"), status));
    }

    out
}
