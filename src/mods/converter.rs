//! Conversion between the Joule and electron-volt energy scales.
//!
//! Every function here is a pure function of its argument and the fixed
//! elementary charge. Non-finite inputs pass through the arithmetic
//! unchanged, so infinities and NaN come out instead of an error.

use crate::mods::constants::{ELEMENTARY_CHARGE, EV_UNIT, JOULE_UNIT};

/// Energy in Joules to energy in electron-volts.
#[inline(always)]
pub fn joules_to_electron_volts(energy: f64) -> f64 {
    energy / ELEMENTARY_CHARGE
}

/// Energy in electron-volts to energy in Joules.
#[inline(always)]
pub fn electron_volts_to_joules(energy: f64) -> f64 {
    energy * ELEMENTARY_CHARGE
}

/// Converted value rendered as `<value> eV`.
pub fn joules_to_electron_volts_text(energy: f64) -> String {
    format!("{:e} {}", joules_to_electron_volts(energy), EV_UNIT)
}

/// Converted value rendered as `<value> J`.
pub fn electron_volts_to_joules_text(energy: f64) -> String {
    format!("{:e} {}", electron_volts_to_joules(energy), JOULE_UNIT)
}
