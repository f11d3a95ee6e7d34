mod analytics_panel;
mod app;
mod edit_menu;
mod insight_panel;
mod views;

pub use app::ChronosApp;
