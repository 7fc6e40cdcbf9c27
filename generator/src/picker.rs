//! Name Picker - draws one name from the table of a (possibly random) category

use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use tracing::{debug, trace};

use crate::category::Category;
use crate::config::Config;
use crate::names::NameList;

/// One picked name and the table it came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Selection {
    pub name: &'static str,
    pub category: Category,
}

/// Renders as `<Name> (<category>)`
impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.category)
    }
}

pub struct NamePicker<R: Rng> {
    rng: R,
}

impl<R: Rng> NamePicker<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Pick a name. Without a category a coin flip decides the table first.
    pub fn pick(&mut self, category: Option<Category>) -> Selection {
        let category = match category {
            Some(category) => category,
            None => {
                let flipped = Category::random(&mut self.rng);
                trace!(%flipped, "no category requested, flipped a coin");
                flipped
            }
        };

        let list = NameList::for_category(category);
        let name = list.choose(&mut self.rng);
        debug!(name, category = %list.category(), table_len = list.len(), "picked name");

        Selection { name, category }
    }
}

impl NamePicker<StdRng> {
    /// Seeded when the config carries a seed, otherwise seeded from OS entropy.
    pub fn from_config(config: &Config) -> Self {
        let rng = match config.seed {
            Some(seed) => {
                debug!(seed, "using fixed seed");
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_entropy(),
        };
        Self::new(rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(seed: u64) -> NamePicker<StdRng> {
        NamePicker::from_config(&Config {
            seed: Some(seed),
            ..Config::default()
        })
    }

    #[test]
    fn test_requested_category_is_respected() {
        let mut picker = seeded(1);
        for category in [Category::Male, Category::Female] {
            let list = NameList::for_category(category);
            for _ in 0..500 {
                let selection = picker.pick(Some(category));
                assert_eq!(selection.category, category);
                assert!(list.contains(selection.name));
            }
        }
    }

    #[test]
    fn test_open_category_draws_from_matching_table() {
        let mut picker = seeded(99);
        let (mut males, mut females) = (0, 0);
        for _ in 0..4_000 {
            let selection = picker.pick(None);
            assert!(NameList::for_category(selection.category).contains(selection.name));
            match selection.category {
                Category::Male => males += 1,
                Category::Female => females += 1,
            }
        }
        assert!(males > 1_700 && females > 1_700, "{} / {}", males, females);
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = seeded(2022);
        let mut b = seeded(2022);
        for _ in 0..50 {
            assert_eq!(a.pick(None), b.pick(None));
        }
    }

    #[test]
    fn test_display_format() {
        let selection = Selection {
            name: "Eva - Maria",
            category: Category::Female,
        };
        assert_eq!(selection.to_string(), "Eva - Maria (female)");

        let selection = Selection {
            name: "Ümit",
            category: Category::Male,
        };
        assert_eq!(selection.to_string(), "Ümit (male)");
    }

    #[test]
    fn test_selection_serializes() {
        let selection = Selection {
            name: "Anna",
            category: Category::Female,
        };
        let json = serde_json::to_value(selection).unwrap();
        assert_eq!(json, serde_json::json!({ "name": "Anna", "category": "female" }));
    }
}
