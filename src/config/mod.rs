use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_recent_limit")]
    pub dashboard_recent_limit: usize,
    #[serde(default = "default_chart_width")]
    pub chart_width: usize,
}

fn default_recent_limit() -> usize {
    10
}

fn default_chart_width() -> usize {
    40
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            dashboard_recent_limit: default_recent_limit(),
            chart_width: default_chart_width(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("visitlog")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".visitlog")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("visitlog.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("visitlog.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Self {
        let path = Self::config_file();

        if path.exists() {
            match fs::read_to_string(&path) {
                Ok(content) => serde_yaml::from_str(&content).unwrap_or_default(),
                Err(_) => Config::default(),
            }
        } else {
            Config::default()
        }
    }

    /// Initialize configuration and database files
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> io::Result<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // DB path: user provided or default
        let db_path = if let Some(name) = custom_db {
            let p = std::path::Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            Self::database_file()
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            dashboard_recent_limit: default_recent_limit(),
            chart_width: default_chart_width(),
        };

        // Write config file (skipped in test mode)
        if !is_test {
            let yaml = serde_yaml::to_string(&config)
                .map_err(|e| io::Error::other(e.to_string()))?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        // Create empty DB file if not exists
        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        println!("✅ Database:    {:?}", db_path);

        Ok(())
    }
}
