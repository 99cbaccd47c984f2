/// NASA 7-coefficient polynomials
pub mod NASAdata;
/// constant heat capacity model
pub mod ConstCpData;
/// common interface of the thermodynamic models
pub mod thermo_api;
