//! Screen density buckets

use crate::error::IconLintError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A density bucket qualifier on a resource folder.
///
/// Variants are declared in canonical order (lowest density first), so the
/// derived `Ord` is the order used in every listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Density {
    Ldpi,
    Mdpi,
    Tvdpi,
    Hdpi,
    Xhdpi,
    Xxhdpi,
}

impl Density {
    /// Every bucket, in canonical order
    pub const ALL: [Density; 6] = [
        Density::Ldpi,
        Density::Mdpi,
        Density::Tvdpi,
        Density::Hdpi,
        Density::Xhdpi,
        Density::Xxhdpi,
    ];

    /// Buckets every project is expected to provide
    pub const REQUIRED: [Density; 3] = [Density::Mdpi, Density::Hdpi, Density::Xhdpi];

    /// Folder qualifier text (e.g. `hdpi`)
    pub fn qualifier(self) -> &'static str {
        match self {
            Density::Ldpi => "ldpi",
            Density::Mdpi => "mdpi",
            Density::Tvdpi => "tvdpi",
            Density::Hdpi => "hdpi",
            Density::Xhdpi => "xhdpi",
            Density::Xxhdpi => "xxhdpi",
        }
    }

    /// Parse a folder qualifier; returns `None` for anything that isn't a bucket
    pub fn from_qualifier(qualifier: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.qualifier() == qualifier)
    }

    /// Scale factor relative to mdpi
    pub fn scale(self) -> f32 {
        match self {
            Density::Ldpi => 0.75,
            Density::Mdpi => 1.0,
            Density::Tvdpi => 1.33125,
            Density::Hdpi => 1.5,
            Density::Xhdpi => 2.0,
            Density::Xxhdpi => 3.0,
        }
    }

    /// Convert an mdpi length to this bucket's pixels, rounding half up
    pub fn scale_from_mdpi(self, mdpi: u32) -> u32 {
        (mdpi as f32 * self.scale()).round() as u32
    }

    /// Convert a pixel length in this bucket to density-independent pixels
    pub fn to_dip(self, px: u32) -> u32 {
        (px as f32 / self.scale()).round() as u32
    }
}

impl fmt::Display for Density {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.qualifier())
    }
}

impl FromStr for Density {
    type Err = IconLintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_qualifier(&s.to_ascii_lowercase())
            .ok_or_else(|| IconLintError::UnknownDensity(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_order() {
        let mut shuffled = vec![Density::Xhdpi, Density::Ldpi, Density::Hdpi, Density::Mdpi];
        shuffled.sort();
        assert_eq!(
            shuffled,
            vec![Density::Ldpi, Density::Mdpi, Density::Hdpi, Density::Xhdpi]
        );
    }

    #[test]
    fn test_qualifier_roundtrip() {
        for d in Density::ALL {
            assert_eq!(Density::from_qualifier(d.qualifier()), Some(d));
        }
        assert_eq!(Density::from_qualifier("nodpi"), None);
        assert_eq!(Density::from_qualifier("land"), None);
    }

    #[test]
    fn test_from_str_is_case_insensitive() {
        assert_eq!("XHDPI".parse::<Density>().unwrap(), Density::Xhdpi);
        assert!("huge".parse::<Density>().is_err());
    }

    #[test]
    fn test_scale_from_mdpi_rounds() {
        assert_eq!(Density::Ldpi.scale_from_mdpi(48), 36);
        assert_eq!(Density::Hdpi.scale_from_mdpi(25), 38);
        assert_eq!(Density::Ldpi.scale_from_mdpi(25), 19);
        assert_eq!(Density::Xhdpi.scale_from_mdpi(32), 64);
        assert_eq!(Density::Tvdpi.scale_from_mdpi(48), 64);
    }

    #[test]
    fn test_to_dip() {
        assert_eq!(Density::Ldpi.to_dip(472), 629);
        assert_eq!(Density::Ldpi.to_dip(290), 387);
        assert_eq!(Density::Hdpi.to_dip(472), 315);
        assert_eq!(Density::Hdpi.to_dip(290), 193);
        assert_eq!(Density::Xhdpi.to_dip(290), 145);
    }
}
