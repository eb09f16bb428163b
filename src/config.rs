/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Deserialize;
use std::fs;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::error::{Error, Result};

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Config {
    pub building: BuildingConfig,
    #[serde(default)]
    pub dispatch: DispatchConfig,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct BuildingConfig {
    pub n_floors: u8,
    pub n_cars: usize,
    pub capacity: u32,
}

/// Tunable heuristics of the dispatch policy.
#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct DispatchConfig {
    /// Cars loaded at or above this fraction do not stop for passing calls.
    pub acceptance_load_threshold: f64,
    /// Queues shorter than this are left in arrival order.
    pub reorder_min_len: usize,
    /// Floor of the direction-continuity multiplier.
    pub min_continuity: f64,
    /// Completed tasks kept per car; older ones are dropped first.
    pub served_history: usize,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        DispatchConfig {
            acceptance_load_threshold: 0.7,
            reorder_min_len: 3,
            min_continuity: 0.1,
            served_history: 64,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if self.building.n_floors == 0 {
            return Err(Error::InvalidConfig("n_floors must be at least 1".into()));
        }
        if self.building.n_cars == 0 {
            return Err(Error::InvalidConfig("n_cars must be at least 1".into()));
        }
        if self.building.capacity == 0 {
            return Err(Error::InvalidConfig("capacity must be at least 1".into()));
        }
        let threshold = self.dispatch.acceptance_load_threshold;
        if !(0.0..=1.0).contains(&threshold) {
            return Err(Error::InvalidConfig(format!(
                "acceptance_load_threshold {} is outside [0, 1]",
                threshold
            )));
        }
        if self.dispatch.min_continuity <= 0.0 {
            return Err(Error::InvalidConfig("min_continuity must be positive".into()));
        }
        Ok(())
    }
}

/***************************************/
/*             Public API              */
/***************************************/
pub fn parse_config(config_str: &str) -> Result<Config> {
    let config: Config = toml::from_str(config_str)?;
    config.validate()?;
    Ok(config)
}

pub fn load_config(path: &str) -> Result<Config> {
    let config_str = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_string(),
        source,
    })?;
    parse_config(&config_str)
}

/***************************************/
/*             Unit tests              */
/***************************************/
