/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::{Deserialize, Serialize};
use std::fs;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::coordinator::HostEvent;
use crate::error::{Error, Result};

/// Host-side state of a car: where it is and how full it is.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct CarStatus {
    pub car: usize,
    pub floor: u8,
    pub load: f64,
}

/// One line of an event script.
///
/// ```text
/// {"status": {"car": 0, "floor": 2, "load": 0.4}}
/// {"event": {"type": "up_button_pressed", "floor": 3}}
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum ScriptLine {
    Event(HostEvent),
    Status(CarStatus),
}

/// Parses a JSON-lines script. Blank lines and lines starting with `#` are skipped.
pub fn parse_script(input: &str) -> Result<Vec<ScriptLine>> {
    let mut lines = Vec::new();
    for (index, raw) in input.lines().enumerate() {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let line = serde_json::from_str(trimmed).map_err(|source| Error::Script {
            line: index + 1,
            source,
        })?;
        lines.push(line);
    }
    Ok(lines)
}

pub fn load_script(path: &str) -> Result<Vec<ScriptLine>> {
    let input = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_string(),
        source,
    })?;
    parse_script(&input)
}
