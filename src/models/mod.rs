// Module exports for models

pub mod insight;
pub mod settings;
pub mod slot;
