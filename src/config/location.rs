// src/config/location.rs
use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// Mighty Hike venues and their results-site race ids (`RId`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HikeLocation {
    NorfolkCoast,
    EryriSnowdonia,
    London,
    SouthCoast,
    LakeDistrict,
    GiantsCauseway,
    YorkshireDales,
    GowerPeninsula,
    ThamesPath,
    PeakDistrict,
    RobRoy,
    CornwallCoast,
    WyeValley,
    JurassicCoast,
}

use HikeLocation::*;

static TABLE: [(HikeLocation, u32, &str); 14] = [
    (NorfolkCoast,   20427, "Norfolk Coast"),
    (EryriSnowdonia, 20428, "Eryri Snowdonia"),
    (London,         20429, "London"),
    (SouthCoast,     20430, "South Coast"),
    (LakeDistrict,   20431, "Lake District"),
    (GiantsCauseway, 20432, "Giants Causeway"),
    (YorkshireDales, 20433, "Yorkshire Dales"),
    (GowerPeninsula, 20434, "Gower Peninsula"),
    (ThamesPath,     20435, "Thames Path"),
    (PeakDistrict,   20436, "Peak District"),
    (RobRoy,         20437, "Rob Roy"),
    (CornwallCoast,  20438, "Cornwall Coast"),
    (WyeValley,      20439, "Wye Valley"),
    (JurassicCoast,  20440, "Jurassic Coast"),
];

impl HikeLocation {
    pub fn all() -> impl Iterator<Item = HikeLocation> {
        TABLE.iter().map(|(loc, _, _)| *loc)
    }

    fn entry(self) -> &'static (HikeLocation, u32, &'static str) {
        // TABLE is declared in variant order.
        &TABLE[self as usize]
    }

    pub fn id(self) -> u32 {
        self.entry().1
    }

    pub fn name(self) -> &'static str {
        self.entry().2
    }

    pub fn from_id(id: u32) -> Option<Self> {
        TABLE.iter().find(|(_, i, _)| *i == id).map(|(loc, _, _)| *loc)
    }

    /// Case-insensitive; spaces, underscores and hyphens are interchangeable.
    pub fn from_name(name: &str) -> Option<Self> {
        let wanted = fold_name(name);
        TABLE.iter().find(|(_, _, n)| fold_name(n) == wanted).map(|(loc, _, _)| *loc)
    }
}

fn fold_name(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, ' ' | '_' | '-'))
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

impl FromStr for HikeLocation {
    type Err = ConfigError;

    /// Accepts either the numeric id or the venue name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let found = match s.parse::<u32>() {
            Ok(id) => Self::from_id(id),
            Err(_) => Self::from_name(s),
        };
        found.ok_or_else(|| ConfigError::UnknownLocation(s.to_string()))
    }
}

impl fmt::Display for HikeLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::HikeLocation::*;

    #[test]
    fn table_matches_variant_order() {
        for (i, (loc, _, _)) in TABLE.iter().enumerate() {
            assert_eq!(*loc as usize, i);
        }
        assert_eq!(HikeLocation::all().count(), 14);
    }

    #[test]
    fn ids_span_known_range() {
        let ids: Vec<u32> = HikeLocation::all().map(HikeLocation::id).collect();
        assert_eq!(ids.iter().min(), Some(&20427));
        assert_eq!(ids.iter().max(), Some(&20440));
        assert_eq!(JurassicCoast.id(), 20440);
        assert_eq!(WyeValley.id(), 20439);
    }

    #[test]
    fn parses_id_or_name() {
        assert_eq!("20440".parse::<HikeLocation>().unwrap(), JurassicCoast);
        assert_eq!("jurassic_coast".parse::<HikeLocation>().unwrap(), JurassicCoast);
        assert_eq!("Eryri-Snowdonia".parse::<HikeLocation>().unwrap(), EryriSnowdonia);
        assert_eq!(" Rob Roy ".parse::<HikeLocation>().unwrap(), RobRoy);
    }

    #[test]
    fn unknown_location() {
        assert!(matches!("20441".parse::<HikeLocation>(), Err(ConfigError::UnknownLocation(_))));
        assert!("Ben Nevis".parse::<HikeLocation>().is_err());
    }
}
