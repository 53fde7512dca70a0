//! Categorical mappers
//!
//! Free-text labels from the table's single/multi-select columns map onto
//! small canonical code sets. Lookup tables are static; unmapped labels fall
//! back to a default code instead of failing.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Resource type
// =============================================================================

/// Kind of resource a record describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResourceType {
    #[default]
    Article,
    Report,
    Research,
    Guide,
    Toolkit,
    Brief,
    CaseStudy,
    Legislation,
    Data,
    Tool,
    Video,
    Podcast,
}

const TOOL_TYPE_LABELS: &[(&str, ResourceType)] = &[
    ("Article", ResourceType::Article),
    ("Report", ResourceType::Report),
    ("Research", ResourceType::Research),
    ("Research Report", ResourceType::Research),
    ("Guide", ResourceType::Guide),
    ("Toolkit", ResourceType::Toolkit),
    ("Policy Brief", ResourceType::Brief),
    ("Brief", ResourceType::Brief),
    ("Case Study", ResourceType::CaseStudy),
    ("Model Legislation", ResourceType::Legislation),
    ("Legislation", ResourceType::Legislation),
    ("Data", ResourceType::Data),
    ("Dataset", ResourceType::Data),
    ("Tool", ResourceType::Tool),
    ("Video", ResourceType::Video),
    ("Webinar", ResourceType::Video),
    ("Podcast", ResourceType::Podcast),
];

impl ResourceType {
    const ALL: [ResourceType; 12] = [
        Self::Article,
        Self::Report,
        Self::Research,
        Self::Guide,
        Self::Toolkit,
        Self::Brief,
        Self::CaseStudy,
        Self::Legislation,
        Self::Data,
        Self::Tool,
        Self::Video,
        Self::Podcast,
    ];

    /// Exact-match lookup of a "Tool Type" label; unmapped labels are articles
    pub fn from_label(label: &str) -> Self {
        lookup(TOOL_TYPE_LABELS, label).unwrap_or_default()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Article => "article",
            Self::Report => "report",
            Self::Research => "research",
            Self::Guide => "guide",
            Self::Toolkit => "toolkit",
            Self::Brief => "brief",
            Self::CaseStudy => "case-study",
            Self::Legislation => "legislation",
            Self::Data => "data",
            Self::Tool => "tool",
            Self::Video => "video",
            Self::Podcast => "podcast",
        }
    }
}

// =============================================================================
// Region
// =============================================================================

/// Geographic scope of a resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    #[default]
    National,
    Northeast,
    Southeast,
    Midwest,
    Southwest,
    West,
    International,
}

const REGION_LABELS: &[(&str, Region)] = &[
    ("National", Region::National),
    ("Federal", Region::National),
    ("Northeast", Region::Northeast),
    ("Southeast", Region::Southeast),
    ("Midwest", Region::Midwest),
    ("Southwest", Region::Southwest),
    ("West", Region::West),
    ("West Coast", Region::West),
    ("Mountain West", Region::West),
    ("International", Region::International),
];

impl Region {
    const ALL: [Region; 7] = [
        Self::National,
        Self::Northeast,
        Self::Southeast,
        Self::Midwest,
        Self::Southwest,
        Self::West,
        Self::International,
    ];

    /// Exact-match lookup of a "Region" label; unmapped labels are national
    pub fn from_label(label: &str) -> Self {
        lookup(REGION_LABELS, label).unwrap_or_default()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::National => "national",
            Self::Northeast => "northeast",
            Self::Southeast => "southeast",
            Self::Midwest => "midwest",
            Self::Southwest => "southwest",
            Self::West => "west",
            Self::International => "international",
        }
    }
}

// =============================================================================
// Policy type / policy area
// =============================================================================

/// Policy domain. The feed only carries housing resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PolicyType {
    #[default]
    Housing,
}

impl PolicyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Housing => "housing",
        }
    }
}

/// Housing policy category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PolicyArea {
    #[default]
    Landuse,
    Financing,
    Rental,
    Cost,
    Climate,
    Homelessness,
    Homeownership,
}

/// Ordered (key phrase, area) pairs; the first phrase contained in a label wins
const POLICY_AREA_PHRASES: &[(&str, PolicyArea)] = &[
    ("Land Use", PolicyArea::Landuse),
    ("Financing Projects", PolicyArea::Financing),
    ("Rental / Tenant Protections", PolicyArea::Rental),
    ("Cost of Building", PolicyArea::Cost),
    ("Climate Resiliency", PolicyArea::Climate),
    ("Homelessness Prevention", PolicyArea::Homelessness),
    ("Homeownership", PolicyArea::Homeownership),
];

impl PolicyArea {
    pub const ALL: [PolicyArea; 7] = [
        Self::Landuse,
        Self::Financing,
        Self::Rental,
        Self::Cost,
        Self::Climate,
        Self::Homelessness,
        Self::Homeownership,
    ];

    /// Substring match of a single policy-area label against the phrase table
    pub fn match_label(label: &str) -> Option<Self> {
        POLICY_AREA_PHRASES
            .iter()
            .find(|(phrase, _)| label.contains(phrase))
            .map(|(_, area)| *area)
    }

    /// Primary area for a record: the first mapped one, else land use
    pub fn primary(areas: &[PolicyArea]) -> Self {
        areas.first().copied().unwrap_or_default()
    }

    /// Parse a canonical code such as `"rental"`
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.as_str() == code)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Landuse => "landuse",
            Self::Financing => "financing",
            Self::Rental => "rental",
            Self::Cost => "cost",
            Self::Climate => "climate",
            Self::Homelessness => "homelessness",
            Self::Homeownership => "homeownership",
        }
    }
}

/// Policy-area column split into its trimmed, non-empty segments and the
/// areas those segments map to
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PolicyAreaLabels<'a> {
    pub segments: Vec<&'a str>,
    pub mapped: Vec<PolicyArea>,
}

impl PolicyAreaLabels<'_> {
    pub fn primary(&self) -> PolicyArea {
        PolicyArea::primary(&self.mapped)
    }
}

/// Split a raw policy-area string on commas and map every segment.
/// Segments without a match are dropped from `mapped`, not defaulted.
pub fn map_policy_areas(raw: &str) -> PolicyAreaLabels<'_> {
    let segments: Vec<&str> = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();
    let mapped = segments
        .iter()
        .filter_map(|s| PolicyArea::match_label(s))
        .collect();

    PolicyAreaLabels { segments, mapped }
}

/// First comma-separated token of a raw label list, trimmed
pub fn first_segment(raw: &str) -> &str {
    raw.split(',').next().unwrap_or_default().trim()
}

fn lookup<T: Copy>(table: &[(&str, T)], label: &str) -> Option<T> {
    table
        .iter()
        .find(|(candidate, _)| *candidate == label)
        .map(|(_, code)| *code)
}

// =============================================================================
// Display / FromStr
// =============================================================================

/// Unrecognized canonical code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCode(pub String);

impl fmt::Display for UnknownCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown code '{}'", self.0)
    }
}

impl std::error::Error for UnknownCode {}

macro_rules! code_traits {
    ($ty:ty, $all:expr) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = UnknownCode;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $all.into_iter()
                    .find(|v| v.as_str() == s)
                    .ok_or_else(|| UnknownCode(s.to_string()))
            }
        }
    };
}

code_traits!(ResourceType, ResourceType::ALL);
code_traits!(Region, Region::ALL);
code_traits!(PolicyArea, PolicyArea::ALL);
code_traits!(PolicyType, [PolicyType::Housing]);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_type_lookup() {
        assert_eq!(ResourceType::from_label("Guide"), ResourceType::Guide);
        assert_eq!(ResourceType::from_label("Policy Brief"), ResourceType::Brief);
        assert_eq!(ResourceType::from_label("Webinar"), ResourceType::Video);
        // exact match only
        assert_eq!(ResourceType::from_label("guide"), ResourceType::Article);
        assert_eq!(ResourceType::from_label("Guidebook"), ResourceType::Article);
        assert_eq!(ResourceType::from_label(""), ResourceType::Article);
    }

    #[test]
    fn test_region_lookup() {
        assert_eq!(Region::from_label("Midwest"), Region::Midwest);
        assert_eq!(Region::from_label("West Coast"), Region::West);
        assert_eq!(Region::from_label("Atlantis"), Region::National);
        assert_eq!(Region::from_label(""), Region::National);
    }

    #[test]
    fn test_policy_area_substring_match() {
        assert_eq!(
            PolicyArea::match_label("Land Use & Zoning"),
            Some(PolicyArea::Landuse)
        );
        assert_eq!(
            PolicyArea::match_label("Rental / Tenant Protections"),
            Some(PolicyArea::Rental)
        );
        assert_eq!(
            PolicyArea::match_label("Homeownership Access"),
            Some(PolicyArea::Homeownership)
        );
        assert_eq!(PolicyArea::match_label("land use"), None);
        assert_eq!(PolicyArea::match_label("Transit"), None);
    }

    #[test]
    fn test_policy_area_table_order_wins() {
        // contains both phrases; Land Use is earlier in the table
        assert_eq!(
            PolicyArea::match_label("Homeownership and Land Use"),
            Some(PolicyArea::Landuse)
        );
    }

    #[test]
    fn test_map_policy_areas_drops_unmatched_segments() {
        let labels = map_policy_areas(" Transit , Cost of Building,, Climate Resiliency ");
        assert_eq!(
            labels.segments,
            vec!["Transit", "Cost of Building", "Climate Resiliency"]
        );
        assert_eq!(labels.mapped, vec![PolicyArea::Cost, PolicyArea::Climate]);
        assert_eq!(labels.primary(), PolicyArea::Cost);
    }

    #[test]
    fn test_unmapped_policy_area_defaults_only_primary() {
        let labels = map_policy_areas("Transit Oriented Development");
        assert!(labels.mapped.is_empty());
        assert_eq!(labels.primary(), PolicyArea::Landuse);

        let empty = map_policy_areas("");
        assert!(empty.segments.is_empty());
        assert_eq!(empty.primary(), PolicyArea::Landuse);
    }

    #[test]
    fn test_first_segment() {
        assert_eq!(first_segment("Guide, Report"), "Guide");
        assert_eq!(first_segment("  Report  "), "Report");
        assert_eq!(first_segment(""), "");
        assert_eq!(first_segment(", Report"), "");
    }

    #[test]
    fn test_codes_round_trip_through_display() {
        for area in PolicyArea::ALL {
            assert_eq!(area.to_string().parse::<PolicyArea>(), Ok(area));
            assert_eq!(PolicyArea::from_code(area.as_str()), Some(area));
        }
        assert_eq!(ResourceType::CaseStudy.to_string(), "case-study");
        assert_eq!("national".parse::<Region>(), Ok(Region::National));
        assert_eq!(PolicyType::Housing.to_string(), "housing");
        assert!("suburbs".parse::<Region>().is_err());
    }

    #[test]
    fn test_serde_codes_match_display() {
        assert_eq!(
            serde_json::to_value(ResourceType::CaseStudy).unwrap(),
            serde_json::json!("case-study")
        );
        assert_eq!(
            serde_json::to_value(PolicyArea::Homelessness).unwrap(),
            serde_json::json!("homelessness")
        );
        assert_eq!(
            serde_json::to_value(Region::International).unwrap(),
            serde_json::json!("international")
        );
    }
}
