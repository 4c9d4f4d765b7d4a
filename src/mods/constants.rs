/// Elementary charge in Coulombs (CODATA 2018, exact).
pub const ELEMENTARY_CHARGE: f64 = 1.602176634e-19;

pub const EV_UNIT: &str = "eV";
pub const JOULE_UNIT: &str = "J";
