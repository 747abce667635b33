use phf::{Map, phf_map};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ligand {
    StrongAttract, // sa
    WeakAttract,   // wa
    StrongRepel,   // sr
    WeakRepel,     // wr
}

static LIGAND_KEYWORDS: Map<&'static str, Ligand> = phf_map! {
    "sa" => Ligand::StrongAttract,
    "wa" => Ligand::WeakAttract,
    "sr" => Ligand::StrongRepel,
    "wr" => Ligand::WeakRepel,
};

#[derive(Debug, Error, PartialEq, Eq)]
#[error("'{0}' is not a ligand keyword (expected one of sa, wa, sr, wr)")]
pub struct UnknownLigand(pub String);

impl Ligand {
    /// Looks up a markup token. Matching ignores ASCII case.
    pub fn from_token(token: &str) -> Option<Self> {
        if let Some(ligand) = LIGAND_KEYWORDS.get(token) {
            return Some(*ligand);
        }
        LIGAND_KEYWORDS
            .get(token.to_ascii_lowercase().as_str())
            .copied()
    }

    pub fn is_ligand(token: &str) -> bool {
        Self::from_token(token).is_some()
    }

    pub fn weight(self) -> f64 {
        match self {
            Ligand::StrongAttract => 2.0,
            Ligand::WeakAttract => 1.0,
            Ligand::StrongRepel => -2.0,
            Ligand::WeakRepel => -1.0,
        }
    }

    pub fn keyword(self) -> &'static str {
        match self {
            Ligand::StrongAttract => "sa",
            Ligand::WeakAttract => "wa",
            Ligand::StrongRepel => "sr",
            Ligand::WeakRepel => "wr",
        }
    }

    pub fn is_attraction(self) -> bool {
        self.weight() > 0.0
    }
}

impl FromStr for Ligand {
    type Err = UnknownLigand;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_token(s.trim()).ok_or_else(|| UnknownLigand(s.to_string()))
    }
}

impl fmt::Display for Ligand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords_map_to_expected_weights() {
        assert_eq!(Ligand::from_token("sa").map(Ligand::weight), Some(2.0));
        assert_eq!(Ligand::from_token("wa").map(Ligand::weight), Some(1.0));
        assert_eq!(Ligand::from_token("sr").map(Ligand::weight), Some(-2.0));
        assert_eq!(Ligand::from_token("wr").map(Ligand::weight), Some(-1.0));
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(Ligand::from_token("SA"), Some(Ligand::StrongAttract));
        assert_eq!(Ligand::from_token("Wr"), Some(Ligand::WeakRepel));
    }

    #[test]
    fn unrecognized_tokens_are_not_ligands() {
        assert!(!Ligand::is_ligand("s"));
        assert!(!Ligand::is_ligand("saa"));
        assert!(!Ligand::is_ligand(""));
        assert!(!Ligand::is_ligand("node"));
    }

    #[test]
    fn from_str_reports_unknown_keyword() {
        assert_eq!("wa".parse::<Ligand>(), Ok(Ligand::WeakAttract));
        assert_eq!(
            "xx".parse::<Ligand>(),
            Err(UnknownLigand("xx".to_string()))
        );
    }

    #[test]
    fn display_round_trips_through_keyword() {
        for ligand in [
            Ligand::StrongAttract,
            Ligand::WeakAttract,
            Ligand::StrongRepel,
            Ligand::WeakRepel,
        ] {
            assert_eq!(Ligand::from_token(&ligand.to_string()), Some(ligand));
        }
    }

    #[test]
    fn attraction_follows_weight_sign() {
        assert!(Ligand::StrongAttract.is_attraction());
        assert!(Ligand::WeakAttract.is_attraction());
        assert!(!Ligand::StrongRepel.is_attraction());
        assert!(!Ligand::WeakRepel.is_attraction());
    }
}
