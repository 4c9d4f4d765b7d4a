mod mods;

use mods::{
    constants::ELEMENTARY_CHARGE,
    converter, io_handler,
    settings::{Direction, Settings},
};

use chrono::Utc;
use std::time::Instant;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let sta = Instant::now();

    let mut cfg = Settings::new();
    if let Err(e) = io_handler::parse_args(&mut cfg, std::env::args().skip(1)) {
        eprintln!("❌ Error: {}", e);
        io_handler::print_usage();
        std::process::exit(1);
    }

    if cfg.verbose {
        println!("Run: {};", Utc::now().format("%Y-%m-%d %H:%M:%S UTC"));
        println!("Direction: {:?}; Out: {};", cfg.direction, cfg.direction.out_unit());
        println!("Energy: {:.5e};", cfg.energy);
        println!("e: {:.9e} C;", ELEMENTARY_CHARGE);
    }

    let output = match (cfg.direction, cfg.raw) {
        (Direction::JoulesToEv, false) => converter::joules_to_electron_volts_text(cfg.energy),
        (Direction::JoulesToEv, true) => {
            format!("{:e}", converter::joules_to_electron_volts(cfg.energy))
        }
        (Direction::EvToJoules, false) => converter::electron_volts_to_joules_text(cfg.energy),
        (Direction::EvToJoules, true) => {
            format!("{:e}", converter::electron_volts_to_joules(cfg.energy))
        }
    };
    println!("{}", output);

    if cfg.verbose {
        println!("✅ All DONE! (Time: {:?})", sta.elapsed());
    }

    Ok(())
}
