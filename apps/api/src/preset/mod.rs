pub mod loader;
pub mod merge;

pub use loader::load_preset;
pub use merge::apply_preset;
