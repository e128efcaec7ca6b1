//! Persisted player configuration. The engine itself only ever consumes
//! `draw_count`; the rest is carried for the presentation layer. Stored
//! as JSON with the original field names, so an existing settings file
//! keeps working.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::game::DrawCount;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HandPreference {
    Left,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    pub draw_count: DrawCount,
    pub sound_enabled: bool,
    pub hand_preference: HandPreference,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            draw_count: DrawCount::One,
            sound_enabled: true,
            hand_preference: HandPreference::Right,
        }
    }
}

impl Settings {
    /// Missing file means first run: defaults, not an error.
    pub fn load(path: &Path) -> io::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)?;
        serde_json::from_str(&contents)
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))
    }

    pub fn save(&self, path: &Path) -> io::Result<()> {
        let contents = serde_json::to_string_pretty(self)
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;
        fs::write(path, contents)
    }
}
