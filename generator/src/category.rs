//! Category - which name table a selection is drawn from

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::InvalidArguments;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Male,
    Female,
}

impl Category {
    /// Fair coin flip between the two categories
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        if rng.gen::<bool>() {
            Category::Male
        } else {
            Category::Female
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Male => "male",
            Category::Female => "female",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case-sensitive: only `male` and `female` are accepted.
impl FromStr for Category {
    type Err = InvalidArguments;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "male" => Ok(Category::Male),
            "female" => Ok(Category::Female),
            other => Err(InvalidArguments::UnknownCategory(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_parse_exact_labels() {
        assert_eq!("male".parse::<Category>().unwrap(), Category::Male);
        assert_eq!("female".parse::<Category>().unwrap(), Category::Female);
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        for input in ["Male", "FEMALE", " male", "female ", "", "m"] {
            let err = input.parse::<Category>().unwrap_err();
            assert_eq!(err, InvalidArguments::UnknownCategory(input.to_string()));
        }
    }

    #[test]
    fn test_display_matches_parse() {
        for category in [Category::Male, Category::Female] {
            assert_eq!(category.to_string().parse::<Category>().unwrap(), category);
        }
    }

    #[test]
    fn test_serde_uses_lowercase_labels() {
        assert_eq!(serde_json::to_string(&Category::Female).unwrap(), "\"female\"");
        assert_eq!(
            serde_json::from_str::<Category>("\"male\"").unwrap(),
            Category::Male
        );
        assert!(serde_json::from_str::<Category>("\"Male\"").is_err());
    }

    #[test]
    fn test_coin_flip_is_roughly_even() {
        let mut rng = StdRng::seed_from_u64(2022);
        let trials = 10_000;
        let males = (0..trials)
            .filter(|_| Category::random(&mut rng) == Category::Male)
            .count();

        // 10k fair flips stay well inside 45%..55%
        assert!(males > trials * 45 / 100, "males = {}", males);
        assert!(males < trials * 55 / 100, "males = {}", males);
    }
}
