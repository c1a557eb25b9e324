use std::{fmt, str::FromStr};

use crate::{
    effects::{EffectInput, lightning, magic, rainbow, smooth},
    foundation::error::TrailError,
    render::primitive::Primitive,
};

/// Signature shared by every effect generator.
pub type EffectGenerator = fn(&EffectInput<'_>) -> Vec<Primitive>;

/// Visual style of the trail.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EffectStyle {
    /// Solid dots in the primary color.
    #[default]
    Smooth,
    /// Flame wisps (and optional forked branches) rising off the trail.
    Lightning,
    /// Hue-cycling rainbow gradient.
    Rainbow,
    /// Jittering, twinkling purple/pink sparkles.
    Magic,
}

impl EffectStyle {
    /// Every style, in menu order.
    pub const ALL: [Self; 4] = [Self::Smooth, Self::Lightning, Self::Rainbow, Self::Magic];

    /// Stable lowercase name used in config files and on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Self::Smooth => "smooth",
            Self::Lightning => "lightning",
            Self::Rainbow => "rainbow",
            Self::Magic => "magic",
        }
    }

    /// Generator for this style. This is the single dispatch point from style to geometry.
    pub fn generator(self) -> EffectGenerator {
        match self {
            Self::Smooth => smooth::generate,
            Self::Lightning => lightning::generate,
            Self::Rainbow => rainbow::generate,
            Self::Magic => magic::generate,
        }
    }
}

impl fmt::Display for EffectStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EffectStyle {
    type Err = TrailError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let kind = s.trim().to_ascii_lowercase();
        if kind.is_empty() {
            return Err(TrailError::config("effect style must be non-empty"));
        }
        Self::ALL
            .into_iter()
            .find(|style| style.name() == kind)
            .ok_or_else(|| TrailError::config(format!("unknown effect style '{kind}'")))
    }
}

impl serde::Serialize for EffectStyle {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl<'de> serde::Deserialize<'de> for EffectStyle {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/style.rs"]
mod tests;
