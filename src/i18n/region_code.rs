use strum::{AsRefStr, EnumIter, EnumString};

use crate::countries::helper_constants::TEST_REGION_ID;

pub struct RegionCode {
}

impl RegionCode {
    /// Region id of the synthetic test country.
    pub fn test() -> &'static str {
        return TEST_REGION_ID;
    }
}

/// Region ids that are not ISO 3166 countries and get a fixed glyph instead
/// of a regional indicator pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, EnumString, EnumIter)]
pub enum SpecialRegion {
    /// Anonymous numbers sold on Fragment.
    #[strum(serialize = "FT")]
    Fragment,
    #[strum(serialize = "TG")]
    Test,
    /// Global satellite services.
    #[strum(serialize = "XG")]
    Satellite,
    #[strum(serialize = "XV")]
    Virtual,
    #[strum(serialize = "YL")]
    Worldwide,
}

impl SpecialRegion {
    pub fn glyph(&self) -> &'static str {
        match self {
            SpecialRegion::Fragment => "\u{1F3F4}\u{200D}\u{2620}\u{FE0F}",
            SpecialRegion::Test | SpecialRegion::Satellite => "\u{1F6F0}\u{FE0F}",
            SpecialRegion::Virtual | SpecialRegion::Worldwide => "\u{1F30D}",
        }
    }
}
