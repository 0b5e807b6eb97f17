pub mod preset;
pub mod profile;
