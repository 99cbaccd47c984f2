//! Physical constants (CODATA 2018 exact values where defined), SI units.

/// Boltzmann constant, J/K
pub const KB: f64 = 1.380649e-23;
/// Planck constant, J*s
pub const H: f64 = 6.62607015e-34;
/// Avogadro constant, 1/mol
pub const NA: f64 = 6.02214076e23;
/// gas constant, J/(mol*K)
pub const R: f64 = KB * NA;
/// speed of light, m/s
pub const C: f64 = 299_792_458.0;
/// standard temperature of thermochemical tables, K
pub const T_REF: f64 = 298.15;

/// converts a wavenumber in cm^-1 to an energy per molecule in J
pub fn wavenumber_to_joule(wavenumber: f64) -> f64 {
    H * C * 100.0 * wavenumber
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_gas_constant() {
        assert_relative_eq!(R, 8.314462618, epsilon = 1e-8);
    }

    #[test]
    fn test_wavenumber_conversion() {
        // 1 cm^-1 is about 1.986e-23 J
        assert_relative_eq!(wavenumber_to_joule(1.0), 1.98644586e-23, max_relative = 1e-8);
    }
}
