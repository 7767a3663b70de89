pub mod debug;
pub mod fileio;
