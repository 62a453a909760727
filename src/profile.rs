//! Loading and navigating CRC facility profiles.
//!
//! A profile is one JSON document describing an ARTCC and its child
//! facilities. The interesting members of the top-level object are
//! `facility` (the ARTCC itself, whose `childFacilities` array holds the
//! TRACONs and towers) and `autoAtcRules` (a rule list that searches skip by
//! convention). Everything else is carried through untouched.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use crate::output::to_json;
use crate::value::Value;

/// A parsed facility profile plus the name it was loaded under.
#[derive(Debug)]
pub struct Profile {
    name: String,
    root: Value,
}

impl Profile {
    /// Read and parse a profile file.
    ///
    /// The profile's name is the file name, e.g. `ZDC.json`.
    pub fn load(path: &Path) -> Result<Profile, LoadError> {
        let text = fs::read_to_string(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Profile::from_json_str(&name, &text)
    }

    /// Parse a profile from in-memory JSON under an explicit name.
    ///
    /// # Examples
    ///
    /// ```
    /// use starscan::Profile;
    ///
    /// let profile = Profile::from_json_str(
    ///     "ZDC.json",
    ///     r#"{"facility": {"id": "ZDC", "childFacilities": []}}"#,
    /// ).unwrap();
    /// assert_eq!(profile.name(), "ZDC.json");
    /// assert!(profile.child_facilities().is_empty());
    /// ```
    pub fn from_json_str(name: &str, json: &str) -> Result<Profile, LoadError> {
        let root = Value::from_json_str(json)?;
        Ok(Profile {
            name: name.to_string(),
            root,
        })
    }

    /// The name the profile was loaded under.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The whole document.
    pub fn root(&self) -> &Value {
        &self.root
    }

    /// The top-level `facility` object (the ARTCC), if present.
    pub fn facility(&self) -> Option<Facility<'_>> {
        self.root.get("facility").map(Facility::new)
    }

    /// The top-level `autoAtcRules` section, if present.
    pub fn auto_atc_rules(&self) -> Option<&Value> {
        self.root.get("autoAtcRules")
    }

    /// The ARTCC's direct children, in document order.
    ///
    /// Profiles list TRACONs and towers one level below the ARTCC; nothing
    /// here recurses into grandchildren.
    pub fn child_facilities(&self) -> Vec<Facility<'_>> {
        self.facility()
            .and_then(|f| f.value.get("childFacilities"))
            .and_then(Value::as_array)
            .map(|entries| entries.iter().map(Facility::new).collect())
            .unwrap_or_default()
    }

    /// Look up a child facility by exact id (case-sensitive, matching how
    /// facility ids are written in the profile).
    pub fn find_facility(&self, id: &str) -> Option<Facility<'_>> {
        self.child_facilities()
            .into_iter()
            .find(|f| f.id() == Some(id))
    }

    /// Case-insensitive occurrence counts of `needle` over the compact JSON
    /// text of the document and its two conventional sections.
    ///
    /// Counts cover keys, values and punctuation alike, so they are an upper
    /// bound on what a structural search reports. Useful for the report's
    /// closing note about where a term actually lives.
    pub fn occurrences(&self, needle: &str) -> Occurrences {
        Occurrences {
            total: count_ci(&to_json(&self.root), needle),
            facility: self
                .facility()
                .map_or(0, |f| count_ci(&to_json(f.value()), needle)),
            auto_atc_rules: self
                .auto_atc_rules()
                .map_or(0, |v| count_ci(&to_json(v), needle)),
        }
    }
}

/// Occurrence counts by document section, as reported by
/// [`Profile::occurrences`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Occurrences {
    pub total: usize,
    pub facility: usize,
    pub auto_atc_rules: usize,
}

/// Non-overlapping case-insensitive count, the way `str::matches` sees it.
fn count_ci(haystack: &str, needle: &str) -> usize {
    if needle.is_empty() {
        return 0;
    }
    haystack
        .to_lowercase()
        .matches(&needle.to_lowercase())
        .count()
}

/// A borrowed view over one facility object.
#[derive(Debug, Clone, Copy)]
pub struct Facility<'a> {
    value: &'a Value,
}

impl<'a> Facility<'a> {
    fn new(value: &'a Value) -> Self {
        Facility { value }
    }

    /// The underlying JSON object.
    pub fn value(&self) -> &'a Value {
        self.value
    }

    /// The facility's `id`, e.g. `"PCT"`.
    pub fn id(&self) -> Option<&'a str> {
        self.value.get("id").and_then(Value::as_str)
    }

    /// The facility's display `name`.
    pub fn name(&self) -> Option<&'a str> {
        self.value.get("name").and_then(Value::as_str)
    }

    /// The facility's `type`, e.g. `"Tracon"` or `"AtctTracon"`.
    pub fn facility_type(&self) -> Option<&'a str> {
        self.value.get("type").and_then(Value::as_str)
    }

    /// The `starsConfiguration` member, when present. A facility without
    /// one searches as empty rather than erroring.
    pub fn stars_configuration(&self) -> Option<&'a Value> {
        self.value.get("starsConfiguration")
    }

    /// The `starsConfiguration` subtree when it is present and non-empty.
    ///
    /// The summary views key off this: towers usually carry no STARS block,
    /// and an empty `{}` counts the same as none.
    pub fn nonempty_stars_configuration(&self) -> Option<&'a Value> {
        self.stars_configuration().filter(|v| !v.is_empty())
    }
}

/// Errors from reading a profile off disk.
#[derive(Debug)]
pub enum LoadError {
    /// IO error while reading the file
    Io(io::Error),
    /// The file is not valid JSON
    Json(serde_json::Error),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io(e) => write!(f, "IO error: {}", e),
            LoadError::Json(e) => write!(f, "Invalid JSON: {}", e),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io(e) => Some(e),
            LoadError::Json(e) => Some(e),
        }
    }
}

impl From<io::Error> for LoadError {
    fn from(e: io::Error) -> Self {
        LoadError::Io(e)
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(e: serde_json::Error) -> Self {
        LoadError::Json(e)
    }
}
