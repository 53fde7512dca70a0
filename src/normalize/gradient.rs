//! Card gradient assignment
//!
//! Each policy area owns three CSS gradients. A resource's gradient is picked
//! by its position in the feed, so neighbouring cards of the same area
//! alternate while a given record at a given position always renders the
//! same way.

use super::mapping::PolicyArea;

pub const GRADIENTS_PER_AREA: usize = 3;

const LANDUSE: [&str; GRADIENTS_PER_AREA] = [
    "linear-gradient(135deg, #667eea 0%, #764ba2 100%)",
    "linear-gradient(135deg, #f093fb 0%, #f5576c 100%)",
    "linear-gradient(135deg, #4facfe 0%, #00f2fe 100%)",
];

const FINANCING: [&str; GRADIENTS_PER_AREA] = [
    "linear-gradient(135deg, #43e97b 0%, #38f9d7 100%)",
    "linear-gradient(135deg, #fa709a 0%, #fee140 100%)",
    "linear-gradient(135deg, #a8edea 0%, #fed6e3 100%)",
];

const RENTAL: [&str; GRADIENTS_PER_AREA] = [
    "linear-gradient(135deg, #d299c2 0%, #fef9d7 100%)",
    "linear-gradient(135deg, #89f7fe 0%, #66a6ff 100%)",
    "linear-gradient(135deg, #fdbb2d 0%, #22c1c3 100%)",
];

const COST: [&str; GRADIENTS_PER_AREA] = [
    "linear-gradient(135deg, #ff9a9e 0%, #fecfef 100%)",
    "linear-gradient(135deg, #ffecd2 0%, #fcb69f 100%)",
    "linear-gradient(135deg, #a8edea 0%, #fed6e3 100%)",
];

const CLIMATE: [&str; GRADIENTS_PER_AREA] = [
    "linear-gradient(135deg, #a8edea 0%, #fed6e3 100%)",
    "linear-gradient(135deg, #d299c2 0%, #fef9d7 100%)",
    "linear-gradient(135deg, #89f7fe 0%, #66a6ff 100%)",
];

const HOMELESSNESS: [&str; GRADIENTS_PER_AREA] = [
    "linear-gradient(135deg, #ffecd2 0%, #fcb69f 100%)",
    "linear-gradient(135deg, #ff9a9e 0%, #fecfef 100%)",
    "linear-gradient(135deg, #f093fb 0%, #f5576c 100%)",
];

const HOMEOWNERSHIP: [&str; GRADIENTS_PER_AREA] = [
    "linear-gradient(135deg, #667eea 0%, #764ba2 100%)",
    "linear-gradient(135deg, #4facfe 0%, #00f2fe 100%)",
    "linear-gradient(135deg, #43e97b 0%, #38f9d7 100%)",
];

fn palette(area: PolicyArea) -> &'static [&'static str; GRADIENTS_PER_AREA] {
    match area {
        PolicyArea::Landuse => &LANDUSE,
        PolicyArea::Financing => &FINANCING,
        PolicyArea::Rental => &RENTAL,
        PolicyArea::Cost => &COST,
        PolicyArea::Climate => &CLIMATE,
        PolicyArea::Homelessness => &HOMELESSNESS,
        PolicyArea::Homeownership => &HOMEOWNERSHIP,
    }
}

/// Gradient for the resource at `index` whose primary area is `area`
pub fn gradient(area: PolicyArea, index: usize) -> &'static str {
    palette(area)[index % GRADIENTS_PER_AREA]
}

/// Same as [`gradient`], keyed by canonical code; unknown codes use the land-use palette
pub fn gradient_for_code(code: &str, index: usize) -> &'static str {
    gradient(PolicyArea::from_code(code).unwrap_or_default(), index)
}
