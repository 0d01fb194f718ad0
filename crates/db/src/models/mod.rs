pub mod log;
pub mod tech;
