use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    /// Default category suggested by the `post` command when none is given.
    #[serde(default = "default_category")]
    pub default_category: String,
    /// When true, accepting an applicant marks the job Filled and
    /// auto-rejects the other pending applications for it.
    #[serde(default = "default_close_on_accept")]
    pub close_job_on_accept: bool,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
}

fn default_category() -> String {
    "Errands".to_string()
}
fn default_close_on_accept() -> bool {
    true
}
fn default_separator_char() -> String {
    "-".to_string()
}

impl Default for Config {
    fn default() -> Self {
        let db_path = Self::database_file();
        Self {
            database: db_path.to_string_lossy().to_string(),
            default_category: default_category(),
            close_job_on_accept: default_close_on_accept(),
            separator_char: default_separator_char(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("gigboard")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".gigboard")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("gigboard.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("gigboard.sqlite")
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
    pub fn init_all(custom_name: Option<String>, is_test: bool) -> io::Result<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // DB name: user provided or default
        let db_path = if let Some(name) = custom_name {
            let p = std::path::Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            dir.join("gigboard.sqlite")
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            default_category: default_category(),
            close_job_on_accept: default_close_on_accept(),
            separator_char: default_separator_char(),
        };

        // Write config file (skipped in test mode so tests never touch
        // the user's real configuration)
        if !is_test {
            let yaml = serde_yaml::to_string(&config)
                .map_err(|e| io::Error::other(format!("config serialize failed: {e}")))?;
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let cfg = Config::default();
        assert!(cfg.close_job_on_accept);
        assert_eq!(cfg.default_category, "Errands");
        assert!(cfg.database.ends_with("gigboard.sqlite"));
    }

    #[test]
    fn yaml_round_trip() {
        let cfg = Config::default();
        let yaml = serde_yaml::to_string(&cfg).expect("serialize");
        let back: Config = serde_yaml::from_str(&yaml).expect("parse");
        assert_eq!(back.database, cfg.database);
        assert_eq!(back.close_job_on_accept, cfg.close_job_on_accept);
    }

    #[test]
    fn missing_optional_fields_use_defaults() {
        let back: Config = serde_yaml::from_str("database: /tmp/x.sqlite\n").expect("parse");
        assert_eq!(back.database, "/tmp/x.sqlite");
        assert!(back.close_job_on_accept);
        assert_eq!(back.separator_char, "-");
    }
}
