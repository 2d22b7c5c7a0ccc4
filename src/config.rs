use std::env;

use crate::error::{Error, Result};
use crate::merge_sort::DEFAULT_CUTOVER;

/// Overrides the insertion sort cutover threshold.
pub const CUTOVER_VAR: &str = "MERGE_BENCH_CUTOVER";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub cutover: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cutover: DEFAULT_CUTOVER,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Builds the config from an arbitrary variable lookup, unset variables keep their default.
    pub fn from_lookup(mut lookup: impl FnMut(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(value) = lookup(CUTOVER_VAR) {
            config.cutover = value.trim().parse().map_err(|_| Error::Config {
                var: CUTOVER_VAR,
                value: value.clone(),
            })?;
            log::debug!("insertion sort cutover set to {}", config.cutover);
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_unset() {
        let config = Config::from_lookup(|_| None).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.cutover, 10);
    }

    #[test]
    fn cutover_override() {
        let config = Config::from_lookup(|var| (var == CUTOVER_VAR).then(|| "32".into())).unwrap();
        assert_eq!(config.cutover, 32);
    }

    #[test]
    fn bad_cutover() {
        let err = Config::from_lookup(|_| Some("ten".into())).unwrap_err();
        assert!(matches!(err, Error::Config { var: CUTOVER_VAR, .. }));
    }
}
