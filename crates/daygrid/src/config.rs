//! Calendar configuration files.
//!
//! A configuration is a TOML document with a `[behavior]` table and a
//! `[style]` table. Every key is optional:
//!
//! ```toml
//! [behavior]
//! allow_out_of_month_selection = true
//! freeze = false
//! show_date_tooltip = true
//! render_out_of_month_days = true
//! tooltip_format = "%d.%m.%Y"
//!
//! [style]
//! border_style = "horizontal"
//! border_color = "#C0C0C0"
//! selected_back_color = "#2E7D32"
//!
//! [style.font]
//! family = "monospace"
//! size = 13.0
//! ```
//!
//! # Loading
//!
//! ```ignore
//! let config = CalendarConfig::load("calendar.toml")?;
//! let calendar = CalendarWidget::with_date(date)?.with_config(config);
//! ```

use std::io;
use std::path::{Path, PathBuf};

use chrono::format::{Item, StrftimeItems};
use daygrid_core::logging::targets;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::style::CalendarStyle;

/// Default `chrono` format of the date tooltip.
pub const DEFAULT_TOOLTIP_FORMAT: &str = "%Y-%m-%d";

/// Errors raised while loading, saving or validating a configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Reading or writing the file failed.
    #[error("failed to access config file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The document is not valid TOML or does not match the schema.
    #[error("failed to parse calendar config: {0}")]
    Parse(#[from] toml::de::Error),

    /// The configuration could not be written as TOML.
    #[error("failed to serialize calendar config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// A value parsed but is not acceptable.
    #[error("invalid value for '{field}': {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

/// Interaction switches of the calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarBehavior {
    /// Clicking a day of the previous or next month selects it.
    pub allow_out_of_month_selection: bool,
    /// The displayed year and month cannot be changed.
    pub freeze: bool,
    /// Hovering a day shows its date in a tooltip.
    pub show_date_tooltip: bool,
    /// Days of the previous and next month are drawn.
    pub render_out_of_month_days: bool,
    /// `chrono` strftime format of the tooltip text.
    pub tooltip_format: String,
}

impl Default for CalendarBehavior {
    fn default() -> Self {
        Self {
            allow_out_of_month_selection: false,
            freeze: false,
            show_date_tooltip: false,
            render_out_of_month_days: true,
            tooltip_format: DEFAULT_TOOLTIP_FORMAT.to_string(),
        }
    }
}

impl CalendarBehavior {
    /// Check that the tooltip format is a valid strftime string.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_date_format(&self.tooltip_format)
    }
}

/// Check that `format` is a valid `chrono` strftime format string.
pub fn validate_date_format(format: &str) -> Result<(), ConfigError> {
    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(ConfigError::InvalidValue {
            field: "behavior.tooltip_format",
            reason: format!("'{format}' is not a valid strftime format"),
        });
    }
    Ok(())
}

/// A complete calendar configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarConfig {
    pub behavior: CalendarBehavior,
    pub style: CalendarStyle,
}

impl CalendarConfig {
    /// Parse and validate a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the configuration as pretty-printed TOML.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Read, parse and validate a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(target: targets::CONFIG, path = %path.display(), "loaded calendar config");
        Ok(config)
    }

    /// Write the configuration to a file.
    ///
    /// The text is written to a sibling temporary file first and then renamed
    /// over `path`, so readers never observe a half-written file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let text = self.to_toml_string()?;
        let io_error = |source: io::Error| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };

        let mut tmp_name = path.as_os_str().to_os_string();
        tmp_name.push(".tmp");
        let tmp_path = PathBuf::from(tmp_name);
        std::fs::write(&tmp_path, text).map_err(io_error)?;
        if let Err(err) = std::fs::rename(&tmp_path, path) {
            let _ = std::fs::remove_file(&tmp_path);
            return Err(io_error(err));
        }

        tracing::debug!(target: targets::CONFIG, path = %path.display(), "saved calendar config");
        Ok(())
    }

    /// Validate both sections.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.behavior.validate()?;
        self.style.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::BorderStyle;
    use daygrid_render::{Color, FontFamily};

    #[test]
    fn test_empty_document_gives_defaults() {
        let config = CalendarConfig::from_toml_str("").unwrap();
        assert_eq!(config, CalendarConfig::default());
        assert!(config.behavior.render_out_of_month_days);
        assert_eq!(config.behavior.tooltip_format, DEFAULT_TOOLTIP_FORMAT);
    }

    #[test]
    fn test_partial_document() {
        let text = r##"
            [behavior]
            allow_out_of_month_selection = true
            tooltip_format = "%d.%m.%Y"

            [style]
            border_style = "horizontal"
            border_color = "#C0C0C0"

            [style.font]
            family = "monospace"
            size = 13.0
        "##;
        let config = CalendarConfig::from_toml_str(text).unwrap();
        assert!(config.behavior.allow_out_of_month_selection);
        assert!(!config.behavior.freeze);
        assert_eq!(config.behavior.tooltip_format, "%d.%m.%Y");
        assert_eq!(config.style.border_style, BorderStyle::Horizontal);
        assert_eq!(config.style.border_color, Color::from_rgb8(0xC0, 0xC0, 0xC0));
        assert_eq!(config.style.font.family, FontFamily::Monospace);
        assert_eq!(config.style.font.size, 13.0);
        assert_eq!(config.style.header_height, 24.0);
    }

    #[test]
    fn test_invalid_documents() {
        assert!(matches!(
            CalendarConfig::from_toml_str("[style]\nborder_color = \"red\""),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            CalendarConfig::from_toml_str("[style]\nborder_style = \"dotted\""),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            CalendarConfig::from_toml_str("[style]\nborder_thickness = -1.0"),
            Err(ConfigError::InvalidValue { .. })
        ));
        assert!(matches!(
            CalendarConfig::from_toml_str("[behavior]\ntooltip_format = \"%Q\""),
            Err(ConfigError::InvalidValue {
                field: "behavior.tooltip_format",
                ..
            })
        ));
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("calendar.toml");

        let mut config = CalendarConfig::default();
        config.behavior.show_date_tooltip = true;
        config.style.selected_back_color = Color::from_rgb8(0x2E, 0x7D, 0x32);
        config.style.border_style = BorderStyle::Vertical;
        config.save(&path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("[behavior]"));
        assert!(text.contains("#2E7D32"));

        let loaded = CalendarConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_failed_save_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        // A non-empty directory at the target path makes the rename fail.
        let path = dir.path().join("calendar.toml");
        std::fs::create_dir(&path).unwrap();
        std::fs::write(path.join("keep"), "").unwrap();

        let err = CalendarConfig::default().save(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(!dir.path().join("calendar.toml.tmp").exists());
        assert!(path.join("keep").exists());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = CalendarConfig::load(dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("missing.toml"));
    }
}
