use crate::core::range::{DateTuple, TimeRange, format_tuple};
use crate::errors::{AppError, AppResult};
use crate::models::calendar::{CalendarEntry, CalendarMap};
use crate::models::report::ReportRow;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// First header line of every report.
    #[serde(default = "default_owner_name")]
    pub owner_name: String,
    #[serde(default = "default_calendars")]
    pub calendars: CalendarMap,
    #[serde(default = "default_start")]
    pub default_start: DateTuple,
    #[serde(default = "default_end")]
    pub default_end: DateTuple,
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    #[serde(default)]
    pub labels: Labels,
    #[serde(default)]
    pub google: GoogleConfig,
}

/// Texts printed in the report: column titles and the range prefixes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Labels {
    pub date: String,
    pub start: String,
    pub end: String,
    pub duration: String,
    pub from: String,
    pub to: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            date: "Date".into(),
            start: "Start".into(),
            end: "End".into(),
            duration: "Duration".into(),
            from: "From".into(),
            to: "To".into(),
        }
    }
}

impl Labels {
    pub fn column_titles(&self) -> ReportRow {
        ReportRow::new(&self.date, &self.start, &self.end, &self.duration)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GoogleConfig {
    pub client_id: String,
    pub client_secret: String,
    /// Stored OAuth token (JSON with access_token, refresh_token, expires_at).
    pub token_file: String,
    pub api_base: String,
    pub token_url: String,
}

impl Default for GoogleConfig {
    fn default() -> Self {
        Self {
            client_id: String::new(),
            client_secret: String::new(),
            token_file: "~/.calreport/token.json".into(),
            api_base: "https://www.googleapis.com/calendar/v3".into(),
            token_url: "https://oauth2.googleapis.com/token".into(),
        }
    }
}

impl GoogleConfig {
    pub fn token_path(&self) -> PathBuf {
        expand_tilde(&self.token_file)
    }
}

fn default_owner_name() -> String {
    "Time report".to_string()
}
fn default_calendars() -> CalendarMap {
    CalendarMap::new(vec![CalendarEntry::new("primary", "primary")])
}
fn default_start() -> DateTuple {
    [2019, 1, 20, 0, 0]
}
fn default_end() -> DateTuple {
    [2019, 2, 19, 23, 59]
}
fn default_output_dir() -> String {
    "output".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            owner_name: default_owner_name(),
            calendars: default_calendars(),
            default_start: default_start(),
            default_end: default_end(),
            output_dir: default_output_dir(),
            labels: Labels::default(),
            google: GoogleConfig::default(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("calreport")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".calreport")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("calreport.conf")
    }

    /// Load configuration from `path`, or return defaults if it does not exist
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| AppError::ConfigLoad(format!("{}: {e}", path.display())))?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::ConfigLoad(format!("{}: {e}", path.display())))
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir).map_err(|e| AppError::ConfigSave(e.to_string()))?;
        }

        let yaml = serde_yaml::to_string(self).map_err(|e| AppError::ConfigSave(e.to_string()))?;
        fs::write(path, yaml).map_err(|e| AppError::ConfigSave(format!("{}: {e}", path.display())))
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Problems that would make a report run fail or behave unexpectedly.
    pub fn check(&self) -> Vec<String> {
        let mut problems = Vec::new();

        if self.calendars.is_empty() {
            problems.push("no calendars configured".to_string());
        }
        for name in self.calendars.duplicate_names() {
            problems.push(format!("calendar '{name}' is listed more than once"));
        }
        for c in self.calendars.entries() {
            if c.id.trim().is_empty() {
                problems.push(format!("calendar '{}' has an empty id", c.name));
            }
        }

        match TimeRange::from_tuples(self.default_start, self.default_end) {
            Ok(r) if r.start > r.end => problems.push(format!(
                "default_start {} is after default_end {}",
                format_tuple(self.default_start),
                format_tuple(self.default_end)
            )),
            Ok(_) => {}
            Err(e) => problems.push(format!("default range: {e}")),
        }

        if self.output_dir.trim().is_empty() {
            problems.push("output_dir is empty".to_string());
        }

        problems
    }
}
