//! Profile-wide search report

use crate::profile::Profile;
use crate::search::{search, SubstringMatch};

/// Options for the report command
#[derive(Debug, Clone)]
pub struct ReportOptions {
    /// Facility ids to highlight with their matching paths
    pub facilities: Vec<String>,
    /// Substring to look for in keys
    pub pattern: String,
}

impl Default for ReportOptions {
    fn default() -> Self {
        ReportOptions {
            facilities: Vec::new(),
            pattern: "altimeter".to_string(),
        }
    }
}

/// Render the full report: header with file name and facility roster,
/// highlighted facilities with their matching paths, a per-facility summary
/// with totals, and a closing note on where the pattern occurs in the raw
/// document.
pub fn render_report(profile: &Profile, options: &ReportOptions) -> String {
    let predicate = SubstringMatch::keys(&options.pattern);
    let facilities = profile.child_facilities();
    let banner = "=".repeat(80);

    let mut out = String::new();
    out.push_str(&format!(
        "{}\nTRACON STARSCONFIG {} FIELD SEARCH\n{}\n",
        banner,
        options.pattern.to_uppercase(),
        banner
    ));
    out.push_str(&format!("\nFile: {}\n", profile.name()));
    out.push_str(&format!(
        "Total child facilities (TRACONs): {}\n",
        facilities.len()
    ));

    let ids: Vec<&str> = facilities.iter().map(|f| f.id().unwrap_or("?")).collect();
    out.push_str(&format!("\nFacility IDs: {}\n", ids.join(", ")));

    out.push_str(&format!("\n{}\nSEARCH RESULTS\n{}\n", banner, banner));

    for id in &options.facilities {
        out.push_str(&format!("\n{} TRACON:\n", id));
        match profile.find_facility(id) {
            None => out.push_str(&format!("  {} not found\n", id)),
            Some(fac) => {
                let hits = match fac.stars_configuration() {
                    Some(stars) => search(stars, &predicate, ""),
                    None => Vec::new(),
                };
                if hits.is_empty() {
                    out.push_str(&format!(
                        "  No fields containing '{}' found in starsConfiguration\n",
                        options.pattern
                    ));
                } else {
                    out.push_str(&format!(
                        "  Found {} field(s) containing '{}'\n",
                        hits.len(),
                        options.pattern
                    ));
                    for m in &hits {
                        out.push_str(&format!("    - {}\n", m.path));
                    }
                }
            }
        }
    }

    out.push_str(&format!("\n{}\nALL TRACONs SUMMARY\n{}\n", banner, banner));
    let mut with_matches = 0;
    for fac in &facilities {
        let stars = match fac.nonempty_stars_configuration() {
            Some(stars) => stars,
            None => continue,
        };
        let hits = search(stars, &predicate, "");
        let id = fac.id().unwrap_or("?");
        if hits.is_empty() {
            out.push_str(&format!("  {}: No {} fields\n", id, options.pattern));
        } else {
            with_matches += 1;
            out.push_str(&format!(
                "  {}: {} {} field(s)\n",
                id,
                hits.len(),
                options.pattern
            ));
        }
    }
    out.push_str(&format!(
        "\nTotal TRACONs with {} fields: {}/{}\n",
        options.pattern,
        with_matches,
        facilities.len()
    ));

    let occ = profile.occurrences(&options.pattern);
    out.push_str(&format!("\n{}\nNOTE\n{}\n", banner, banner));
    out.push_str(&format!(
        "The word '{}' appears {} times in the entire file.\n",
        options.pattern, occ.total
    ));
    out.push_str(&format!(
        "{} occurrence(s) are in the 'autoAtcRules' section, which is excluded\n",
        occ.auto_atc_rules
    ));
    out.push_str(&format!(
        "from this search by convention; {} are under 'facility'.\n",
        occ.facility
    ));

    out
}
