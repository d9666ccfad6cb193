//! Module classification from breadcrumb segments.
//!
//! The docserver breadcrumb is inconsistent: sometimes a segment names the
//! module outright, sometimes the hit sits under a programming guide, and
//! sometimes there is nothing better than the first non-root segment. The
//! rules below are tried in [`MODULE_RULES`] order and the first match wins.
//! The result is a best-effort label, not ground truth.

/// Substrings (lowercase) that mark a segment as naming a module or guide.
pub const MODULE_KEYWORDS: &[&str] = &[
    // Modules
    "battery design module",
    "cfd module",
    "heat transfer module",
    "structural mechanics module",
    "acoustics module",
    "chemical reaction engineering module",
    "corrosion module",
    "electrochemistry module",
    "electrodeposition module",
    "fuel cell",
    "electrolyzer module",
    "microfluidics module",
    "optimization module",
    "plasma module",
    "pipe flow module",
    "porous media flow module",
    "polymer flow module",
    "subsurface flow module",
    "electric discharge module",
    // Guides and special sections
    "application programming",
    "programming guide",
    "physics builder",
    "model manager",
    "material library",
    // Generic markers
    "module",
    "battery",
    "cfd",
    "plasma",
    "api",
];

/// Substrings (lowercase) of the joined path that suggest API documentation.
pub const API_PATH_INDICATORS: &[&str] = &["programming", "java", "api", "method", "script"];

/// Substrings (lowercase) of a segment that name the API guide itself.
pub const API_SEGMENT_MARKERS: &[&str] = &["programming", "api"];

/// Guide and manual titles (lowercase) matched exactly.
pub const GUIDE_TITLES: &[&str] = &[
    "physics builder manual",
    "application programming guide",
    "model manager reference manual",
    "introduction to the application builder",
];

/// Generic root label skipped by the positional fallback.
pub const ROOT_SEGMENT: &str = "COMSOL Multiphysics";

pub const UNKNOWN_MODULE: &str = "Unknown";

/// One step of the classification chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModuleRule {
    /// First segment containing any of [`MODULE_KEYWORDS`].
    Keyword,
    /// When the joined path hints at API docs, the first segment containing
    /// any of [`API_SEGMENT_MARKERS`].
    ApiGuide,
    /// First segment equal to one of [`GUIDE_TITLES`].
    GuideTitle,
    /// First non-empty segment other than [`ROOT_SEGMENT`].
    FirstNonRoot,
}

pub const MODULE_RULES: &[ModuleRule] = &[
    ModuleRule::Keyword,
    ModuleRule::ApiGuide,
    ModuleRule::GuideTitle,
    ModuleRule::FirstNonRoot,
];

impl ModuleRule {
    /// Returns the matching segment, if this rule matches.
    ///
    /// `joined_lower` is the lowercased " > "-joined path.
    pub fn apply<'a>(&self, segments: &'a [String], joined_lower: &str) -> Option<&'a str> {
        let found = match self {
            ModuleRule::Keyword => segments
                .iter()
                .find(|segment| contains_any(&segment.to_lowercase(), MODULE_KEYWORDS)),
            ModuleRule::ApiGuide => {
                if !contains_any(joined_lower, API_PATH_INDICATORS) {
                    return None;
                }
                segments
                    .iter()
                    .find(|segment| contains_any(&segment.to_lowercase(), API_SEGMENT_MARKERS))
            }
            ModuleRule::GuideTitle => segments
                .iter()
                .find(|segment| GUIDE_TITLES.contains(&segment.to_lowercase().as_str())),
            ModuleRule::FirstNonRoot => segments
                .iter()
                .find(|segment| !segment.trim().is_empty() && segment.as_str() != ROOT_SEGMENT),
        };
        found.map(String::as_str)
    }
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}

/// Infer the module label for a result from its breadcrumb segments.
pub fn infer_module(segments: &[String]) -> String {
    let joined_lower = segments.join(" > ").to_lowercase();
    MODULE_RULES
        .iter()
        .find_map(|rule| rule.apply(segments, &joined_lower))
        .unwrap_or(UNKNOWN_MODULE)
        .to_string()
}
