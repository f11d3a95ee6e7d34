// Settings module
// Persisted application preferences (singleton row, id = 1)

pub struct Settings {
    pub id: Option<i64>,
    pub theme: String,
    pub time_format: String,
    pub show_analytics: bool,
}

impl Settings {
    pub fn validate(&self) -> Result<(), String> {
        if self.theme != "dark" && self.theme != "light" {
            return Err(format!("Unknown theme: {}", self.theme));
        }
        if self.time_format != "24h" && self.time_format != "12h" {
            return Err(format!("Unknown time format: {}", self.time_format));
        }
        Ok(())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            id: Some(1),
            theme: "dark".to_string(),
            time_format: "24h".to_string(),
            show_analytics: true,
        }
    }
}
