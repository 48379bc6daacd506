pub mod configure;
pub mod constants;
pub mod energies;
