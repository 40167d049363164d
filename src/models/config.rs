use anyhow::Context;
use chrono::{Datelike, Local};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::core::units::{self, Quantity};
use crate::error::ProfileError;
use crate::models::profile::{ActivityLevel, ActivityProfile, Anthropometrics, Goal, Sex};

/// Environment variable that overrides the data directory.
pub const HOME_ENV: &str = "NUTRICARE_HOME";

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub profile: Profile,
    #[serde(default)]
    pub units: Units,
}

/// Stored user profile, always in metric units.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub weight_kg: Option<f64>,
    pub height_cm: Option<f64>,
    pub birth_year: Option<i32>,
    pub sex: Option<Sex>,
    #[serde(default)]
    pub activity_level: ActivityLevel,
    #[serde(default)]
    pub goal: Goal,
}

impl Profile {
    /// Age in whole years as of `year`, from the stored birth year.
    pub fn age_in(&self, year: i32) -> Result<Option<u32>, ProfileError> {
        match self.birth_year {
            Some(born) if born > year => Err(ProfileError::BirthYearInFuture(born)),
            Some(born) => Ok(Some(year.abs_diff(born))),
            None => Ok(None),
        }
    }

    pub fn anthropometrics(&self) -> Result<Anthropometrics, ProfileError> {
        Ok(Anthropometrics {
            weight_kg: self.weight_kg,
            height_cm: self.height_cm,
            age_years: self.age_in(Local::now().year())?,
            sex: self.sex,
        })
    }

    pub fn activity_profile(&self) -> ActivityProfile {
        ActivityProfile::new(self.activity_level, self.goal)
    }
}

/// Unit system used for CLI input and human output.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum UnitSystem {
    #[default]
    Metric,
    Imperial,
}

impl FromStr for UnitSystem {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "metric" => Ok(Self::Metric),
            "imperial" => Ok(Self::Imperial),
            _ => anyhow::bail!("units.system must be 'metric' or 'imperial', got '{}'", s),
        }
    }
}

impl std::fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Metric => write!(f, "metric"),
            Self::Imperial => write!(f, "imperial"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Units {
    #[serde(default)]
    pub system: UnitSystem,
}

/// Keys accepted by `config set`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    Weight,
    Height,
    BirthYear,
    Sex,
    Activity,
    Goal,
    UnitSystem,
}

impl ConfigKey {
    pub const NAMES: &'static str = "weight, height, birth_year, sex, activity, goal, units.system";
}

impl FromStr for ConfigKey {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "weight" => Self::Weight,
            "height" => Self::Height,
            "birth_year" => Self::BirthYear,
            "sex" | "gender" => Self::Sex,
            "activity" | "activity_level" => Self::Activity,
            "goal" => Self::Goal,
            "units.system" | "units" => Self::UnitSystem,
            _ => anyhow::bail!("unknown config key: {} (expected one of: {})", s, Self::NAMES),
        })
    }
}

impl Config {
    /// Read the config file, or fall back to defaults when there is none.
    pub fn load() -> anyhow::Result<Self> {
        let path = Self::path();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("cannot read {}", path.display()))?;
        let config = toml::from_str(&contents)
            .with_context(|| format!("invalid config at {}", path.display()))?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Write the config file, owner-only on unix.
    pub fn save(&self) -> anyhow::Result<()> {
        let path = Self::path();
        let contents = toml::to_string_pretty(self)?;
        write_private(&path, &contents)
            .with_context(|| format!("cannot write {}", path.display()))?;
        tracing::debug!(path = %path.display(), "saved config");
        Ok(())
    }

    /// Apply one `config set` assignment and validate the resulting profile.
    /// Weight and height are read in the configured unit system.
    pub fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        let system = self.units.system;
        let mut profile = self.profile.clone();

        match key.parse::<ConfigKey>()? {
            ConfigKey::Weight => {
                let v: f64 = value.parse().context("weight must be a number")?;
                profile.weight_kg = Some(units::from_input(v, Quantity::Weight, system));
            }
            ConfigKey::Height => {
                let v: f64 = value.parse().context("height must be a number")?;
                profile.height_cm = Some(units::from_input(v, Quantity::Height, system));
            }
            ConfigKey::BirthYear => {
                profile.birth_year = Some(value.parse().context("birth_year must be a year")?);
            }
            ConfigKey::Sex => profile.sex = Some(value.parse()?),
            ConfigKey::Activity => profile.activity_level = ActivityLevel::parse_lenient(value),
            ConfigKey::Goal => profile.goal = Goal::parse_lenient(value),
            ConfigKey::UnitSystem => self.units.system = value.parse()?,
        }

        profile.anthropometrics()?.validate()?;
        self.profile = profile;
        Ok(())
    }

    pub fn data_dir() -> PathBuf {
        if let Ok(home) = std::env::var(HOME_ENV) {
            return PathBuf::from(home);
        }
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".nutricare")
    }

    pub fn path() -> PathBuf {
        Self::data_dir().join("config.toml")
    }
}

#[cfg(unix)]
fn write_private(path: &Path, contents: &str) -> std::io::Result<()> {
    use std::fs::{self, OpenOptions, Permissions};
    use std::io::Write;
    use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
        fs::set_permissions(dir, Permissions::from_mode(0o700))?;
    }
    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(0o600)
        .open(path)?;
    file.write_all(contents.as_bytes())?;

    // mode() only applies on creation
    if file.metadata()?.permissions().mode() & 0o777 != 0o600 {
        fs::set_permissions(path, Permissions::from_mode(0o600))?;
    }
    Ok(())
}

#[cfg(not(unix))]
fn write_private(path: &Path, contents: &str) -> std::io::Result<()> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }
    std::fs::write(path, contents)
}
