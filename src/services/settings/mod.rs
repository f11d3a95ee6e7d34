// Settings service
// Load/store of the singleton settings row

use anyhow::{anyhow, Context, Result};

use crate::models::settings::Settings;
use crate::services::database::Database;

pub struct SettingsService<'a> {
    db: &'a Database,
}

impl<'a> SettingsService<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Get the current settings
    pub fn get(&self) -> Result<Settings> {
        let conn = self.db.connection();

        let settings = conn
            .query_row(
                "SELECT id, theme, time_format, show_analytics FROM settings WHERE id = 1",
                [],
                |row| {
                    Ok(Settings {
                        id: Some(row.get(0)?),
                        theme: row.get(1)?,
                        time_format: row.get(2)?,
                        show_analytics: row.get::<_, i32>(3)? != 0,
                    })
                },
            )
            .context("Failed to load settings")?;

        Ok(settings)
    }

    /// Update settings
    pub fn update(&self, settings: &Settings) -> Result<()> {
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings: {}", e))?;

        let conn = self.db.connection();
        conn.execute(
            "UPDATE settings
             SET theme = ?1,
                 time_format = ?2,
                 show_analytics = ?3,
                 updated_at = CURRENT_TIMESTAMP
             WHERE id = 1",
            (
                &settings.theme,
                &settings.time_format,
                settings.show_analytics as i32,
            ),
        )
        .context("Failed to update settings")?;

        Ok(())
    }
}
