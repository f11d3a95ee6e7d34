// Service module exports

pub mod analytics;
pub mod database;
pub mod insight;
pub mod settings;
pub mod slot;
