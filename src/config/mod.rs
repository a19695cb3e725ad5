use crate::models::{BusinessType, Currency};
use crate::ui::messages::warning;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub data_dir: String,
    #[serde(default = "default_business")]
    pub default_business: BusinessType,
    #[serde(default)]
    pub default_currency: Currency,
}

fn default_business() -> BusinessType {
    BusinessType::DigitalFootprints
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: Self::data_dir_default().to_string_lossy().to_string(),
            default_business: default_business(),
            default_currency: Currency::Usd,
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("medialedger")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".medialedger")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("medialedger.conf")
    }

    /// Default location of the record store
    pub fn data_dir_default() -> PathBuf {
        Self::config_dir().join("data")
    }

    /// Load configuration from file, or return defaults if not found.
    /// A malformed file degrades to defaults with a warning rather than
    /// aborting the whole command.
    pub fn load() -> Self {
        let path = Self::config_file();
        if !path.exists() {
            return Self::default();
        }
        match fs::read_to_string(&path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(cfg) => cfg,
                Err(e) => {
                    warning(format!("Failed to parse configuration file: {e}"));
                    Self::default()
                }
            },
            Err(e) => {
                warning(format!("Failed to read configuration file: {e}"));
                Self::default()
            }
        }
    }

    /// Initialize configuration and data directories
    pub fn init_all(custom_data_dir: Option<String>, is_test: bool) -> io::Result<PathBuf> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let data_dir = match custom_data_dir {
            Some(name) => {
                let p = PathBuf::from(&name);
                if p.is_absolute() { p } else { dir.join(p) }
            }
            None => Self::data_dir_default(),
        };

        let config = Config {
            data_dir: data_dir.to_string_lossy().to_string(),
            ..Self::default()
        };

        if !is_test {
            let yaml = serde_yaml::to_string(&config)
                .map_err(|e| io::Error::other(e.to_string()))?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        fs::create_dir_all(data_dir.join("store"))?;
        println!("✅ Data dir:    {:?}", data_dir);

        Ok(data_dir)
    }
}
