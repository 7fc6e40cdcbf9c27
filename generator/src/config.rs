//! Runtime configuration read from the environment

use std::env;

use crate::error::{Error, Result};

pub const SEED_VAR: &str = "NAME_GENERATOR_SEED";
pub const LOG_VAR: &str = "NAME_GENERATOR_LOG";

/// Log filter used when `NAME_GENERATOR_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Fixed seed for reproducible output, entropy when absent
    pub seed: Option<u64>,
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let present = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let seed = present(SEED_VAR)
            .map(|value| {
                value.trim().parse::<u64>().map_err(|_| Error::InvalidSeed {
                    var: SEED_VAR,
                    value,
                })
            })
            .transpose()?;

        let log_filter = present(LOG_VAR).unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Ok(Self { seed, log_filter })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.log_filter, "warn");
    }

    #[test]
    fn test_seed_and_filter() {
        let config =
            Config::from_lookup(lookup(&[(SEED_VAR, " 1234 "), (LOG_VAR, "generator=debug")]))
                .unwrap();
        assert_eq!(config.seed, Some(1234));
        assert_eq!(config.log_filter, "generator=debug");
    }

    #[test]
    fn test_empty_values_are_unset() {
        let config = Config::from_lookup(lookup(&[(SEED_VAR, ""), (LOG_VAR, "  ")])).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_bad_seed() {
        for value in ["abc", "-1", "18446744073709551616"] {
            let err = Config::from_lookup(lookup(&[(SEED_VAR, value)])).unwrap_err();
            assert_eq!(
                err,
                Error::InvalidSeed {
                    var: SEED_VAR,
                    value: value.to_string()
                }
            );
            assert_eq!(err.exit_code(), 3);
        }
    }
}
