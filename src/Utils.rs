/// physical constants in SI units
pub mod constants;
/// simplelog initialisation for binaries and examples
pub mod logger;
