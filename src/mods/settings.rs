use crate::mods::constants::{EV_UNIT, JOULE_UNIT};
use thiserror::Error;

/// Which conversion a run performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    JoulesToEv,
    EvToJoules,
}

impl Direction {
    pub fn parse(word: &str) -> Result<Self, SettingsError> {
        if word.eq_ignore_ascii_case("JtoEV") {
            Ok(Self::JoulesToEv)
        } else if word.eq_ignore_ascii_case("EVtoJ") {
            Ok(Self::EvToJoules)
        } else {
            Err(SettingsError::UnknownDirection {
                word: word.to_string(),
            })
        }
    }

    /// Unit suffix of the converted value.
    pub fn out_unit(&self) -> &'static str {
        match self {
            Self::JoulesToEv => EV_UNIT,
            Self::EvToJoules => JOULE_UNIT,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub direction: Direction,
    pub energy: f64,

    pub raw: bool,
    pub verbose: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            direction: Direction::JoulesToEv,
            energy: 1.0,

            raw: false,
            verbose: false,
        }
    }
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }
}

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Missing required argument '{0}'")]
    MissingArgument(&'static str),

    #[error("Invalid value for 'Direction': expected 'JtoEV' or 'EVtoJ', got '{word}'")]
    UnknownDirection { word: String },

    #[error("Failed to parse 'Energy' with value '{value}': {source}")]
    Energy {
        value: String,
        source: evalexpr::EvalexprError,
    },

    #[error("Unknown argument '{0}'")]
    UnknownArgument(String),
}
