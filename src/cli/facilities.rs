//! List a profile's child facilities

use crate::profile::Profile;

/// Render one line per child facility: id, type, STARS marker and name,
/// preceded by the profile's own facility line when present.
pub fn render_facilities(profile: &Profile) -> String {
    let facilities = profile.child_facilities();

    let mut out = String::new();
    out.push_str(&format!("File: {}\n", profile.name()));
    if let Some(artcc) = profile.facility() {
        out.push_str(&format!(
            "Facility: {} ({}) - {}\n",
            artcc.id().unwrap_or("?"),
            artcc.facility_type().unwrap_or("?"),
            artcc.name().unwrap_or("?"),
        ));
    }
    out.push_str(&format!("Child facilities: {}\n\n", facilities.len()));

    let id_width = facilities
        .iter()
        .map(|f| f.id().unwrap_or("?").len())
        .max()
        .unwrap_or(0);
    let type_width = facilities
        .iter()
        .map(|f| f.facility_type().unwrap_or("?").len())
        .max()
        .unwrap_or(0);

    for fac in &facilities {
        let stars = if fac.nonempty_stars_configuration().is_some() {
            "STARS"
        } else {
            "-"
        };
        out.push_str(&format!(
            "  {:<iw$}  {:<tw$}  {:<5}  {}\n",
            fac.id().unwrap_or("?"),
            fac.facility_type().unwrap_or("?"),
            stars,
            fac.name().unwrap_or("?"),
            iw = id_width,
            tw = type_width,
        ));
    }

    out
}
