use crate::mods::settings::{Direction, Settings, SettingsError};

use evalexpr::eval_number;

/// Fills `cfg` from the command-line arguments (program name already
/// stripped). The energy operand goes through `eval_number`, so plain
/// literals and arithmetic expressions are both accepted.
pub fn parse_args<I>(cfg: &mut Settings, mut args: I) -> Result<(), SettingsError>
where
    I: Iterator<Item = String>,
{
    let direction = args
        .next()
        .ok_or(SettingsError::MissingArgument("Direction"))?;
    cfg.direction = Direction::parse(&direction)?;

    let energy = args.next().ok_or(SettingsError::MissingArgument("Energy"))?;
    cfg.energy = eval_number(&energy).map_err(|e| SettingsError::Energy {
        value: energy.clone(),
        source: e,
    })?;

    for flag in args {
        if flag.eq_ignore_ascii_case("Raw") {
            cfg.raw = true;
        } else if flag.eq_ignore_ascii_case("Verbose") {
            cfg.verbose = true;
        } else {
            return Err(SettingsError::UnknownArgument(flag));
        }
    }

    Ok(())
}

pub fn print_usage() {
    eprintln!("Usage: energy_scales <JtoEV|EVtoJ> <Energy> [Raw] [Verbose]");
    eprintln!("  JtoEV    convert Energy from Joules to electron-volts");
    eprintln!("  EVtoJ    convert Energy from electron-volts to Joules");
    eprintln!("  Energy   numeric expression, e.g. 1.6e-19 or 13.6*2");
    eprintln!("  Raw      print the bare number without the unit suffix");
    eprintln!("  Verbose  echo the run parameters before converting");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(tokens: &[&str]) -> Result<Settings, SettingsError> {
        let mut cfg = Settings::new();
        parse_args(&mut cfg, tokens.iter().map(|s| s.to_string()))?;
        Ok(cfg)
    }

    #[test]
    fn full_argument_set() {
        let cfg = parse(&["EVtoJ", "13.6", "Raw", "Verbose"]).unwrap();
        assert_eq!(cfg.direction, Direction::EvToJoules);
        assert_eq!(cfg.energy, 13.6);
        assert!(cfg.raw);
        assert!(cfg.verbose);
    }

    #[test]
    fn scientific_notation_literal() {
        let cfg = parse(&["JtoEV", "1.6e-19"]).unwrap();
        assert_eq!(cfg.direction, Direction::JoulesToEv);
        assert_eq!(cfg.energy, 1.6e-19);
        assert!(!cfg.raw);
    }

    #[test]
    fn energy_expression_is_evaluated() {
        let cfg = parse(&["JtoEV", "0.8*2"]).unwrap();
        assert_eq!(cfg.energy, 1.6);
    }

    #[test]
    fn integer_energy_coerces_to_float() {
        let cfg = parse(&["jtoev", "5"]).unwrap();
        assert_eq!(cfg.energy, 5.0);
    }

    #[test]
    fn missing_arguments_are_reported() {
        assert!(matches!(
            parse(&[]).unwrap_err(),
            SettingsError::MissingArgument("Direction")
        ));
        assert!(matches!(
            parse(&["JtoEV"]).unwrap_err(),
            SettingsError::MissingArgument("Energy")
        ));
    }

    #[test]
    fn malformed_energy_is_reported_with_its_text() {
        let err = parse(&["JtoEV", "watts"]).unwrap_err();
        assert!(matches!(err, SettingsError::Energy { .. }));
        assert!(err.to_string().contains("watts"));
    }

    #[test]
    fn unknown_trailing_argument_is_rejected() {
        let err = parse(&["JtoEV", "1.0", "Loud"]).unwrap_err();
        assert!(matches!(err, SettingsError::UnknownArgument(_)));
    }
}
