//! Static reference data: material rates and reward tiers.

use std::fmt;
use std::str::FromStr;

use crate::error::NotFoundError;

/// A recyclable material accepted for points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Material {
    Plastic,
    Paper,
    Glass,
    Metal,
    EWaste,
}

impl Material {
    pub const ALL: [Material; 5] = [
        Material::Plastic,
        Material::Paper,
        Material::Glass,
        Material::Metal,
        Material::EWaste,
    ];

    /// Points awarded per kilogram recycled.
    pub const fn points_per_kg(self) -> f64 {
        match self {
            Self::Plastic => 5.0,
            Self::Paper => 3.0,
            Self::Glass => 4.0,
            Self::Metal => 6.0,
            Self::EWaste => 10.0,
        }
    }

    /// Catalog key, in capitalized form.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Plastic => "Plastic",
            Self::Paper => "Paper",
            Self::Glass => "Glass",
            Self::Metal => "Metal",
            Self::EWaste => "E-waste",
        }
    }

    /// Look up a material by name.
    ///
    /// The name is normalized to capitalized form first (first character
    /// upper case, the rest lower case), so `"PLASTIC"`, `"plastic"` and
    /// `"e-WASTE"` all resolve.
    pub fn lookup(raw: &str) -> Result<Self, NotFoundError> {
        let key = capitalize(raw.trim());
        Self::ALL
            .into_iter()
            .find(|m| m.name() == key)
            .ok_or(NotFoundError::Material(key))
    }
}

impl FromStr for Material {
    type Err = NotFoundError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::lookup(s)
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Reward tier unlocked by a points balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RewardTier {
    EcoContributor,
    RecyclingChampion,
    GreenWarrior,
    PlanetProtector,
}

impl RewardTier {
    /// Highest tier first.
    pub const DESCENDING: [RewardTier; 4] = [
        RewardTier::PlanetProtector,
        RewardTier::GreenWarrior,
        RewardTier::RecyclingChampion,
        RewardTier::EcoContributor,
    ];

    /// Minimum balance for this tier.
    pub const fn threshold(self) -> f64 {
        match self {
            Self::PlanetProtector => 500.0,
            Self::GreenWarrior => 200.0,
            Self::RecyclingChampion => 100.0,
            Self::EcoContributor => 50.0,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::PlanetProtector => "Planet Protector",
            Self::GreenWarrior => "Green Warrior",
            Self::RecyclingChampion => "Recycling Champion",
            Self::EcoContributor => "Eco Contributor",
        }
    }

    /// Highest tier whose threshold the balance reaches, if any.
    pub fn for_points(points: f64) -> Option<Self> {
        Self::DESCENDING
            .into_iter()
            .find(|tier| points >= tier.threshold())
    }
}

impl fmt::Display for RewardTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rates() {
        assert_eq!(Material::Plastic.points_per_kg(), 5.0);
        assert_eq!(Material::Paper.points_per_kg(), 3.0);
        assert_eq!(Material::Glass.points_per_kg(), 4.0);
        assert_eq!(Material::Metal.points_per_kg(), 6.0);
        assert_eq!(Material::EWaste.points_per_kg(), 10.0);
    }

    #[test]
    fn test_lookup_normalizes_case() {
        assert_eq!(Material::lookup("plastic"), Ok(Material::Plastic));
        assert_eq!(Material::lookup("GLASS"), Ok(Material::Glass));
        assert_eq!(Material::lookup("e-WASTE"), Ok(Material::EWaste));
        assert_eq!(Material::lookup(" metal "), Ok(Material::Metal));
    }

    #[test]
    fn test_lookup_unknown_material() {
        assert_eq!(
            Material::lookup("wood"),
            Err(NotFoundError::Material("Wood".to_string()))
        );
        assert!(Material::lookup("").is_err());
    }

    #[test]
    fn test_material_name_round_trips_through_lookup() {
        for material in Material::ALL {
            assert_eq!(material.name().parse::<Material>(), Ok(material));
        }
    }

    #[test]
    fn test_tier_for_points() {
        assert_eq!(RewardTier::for_points(0.0), None);
        assert_eq!(RewardTier::for_points(49.9), None);
        assert_eq!(RewardTier::for_points(50.0), Some(RewardTier::EcoContributor));
        assert_eq!(RewardTier::for_points(150.0), Some(RewardTier::RecyclingChampion));
        assert_eq!(RewardTier::for_points(200.0), Some(RewardTier::GreenWarrior));
        assert_eq!(RewardTier::for_points(10_000.0), Some(RewardTier::PlanetProtector));
    }
}
