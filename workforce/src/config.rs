use crate::error::WorkforceError;
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

/// Application configuration struct.
/// Holds the location of the company database and leaves room for future
/// sections without breaking older configuration files on disk.
#[derive(Serialize, Deserialize, Debug, PartialEq, Clone, Default)]
pub struct AppConfiguration {
    /// This will ensure that the filename is created, even if the Toml file
    /// is an old version, which does not have an `application_data` section
    #[serde(default = "default_application_data")]
    pub application_data: ApplicationData,
}

/// Holds the configuration for the `application_data` section of the Toml file
#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
pub struct ApplicationData {
    /// The path to the Sqlite file holding departments, employees and projects
    pub database: String,
}

impl Default for ApplicationData {
    fn default() -> Self {
        ApplicationData {
            database: database_file().to_string_lossy().to_string(),
        }
    }
}

/// Filename holding the application configuration parameters
#[must_use]
pub fn configuration_file() -> PathBuf {
    project_dirs().preference_dir().into()
}

/// Filename of the Sqlite DBMS holding the company records
#[must_use]
pub fn database_file() -> PathBuf {
    project_dirs().data_dir().join("company.db")
}

/// Loads the configuration from disk, falling back to the defaults when no
/// configuration file has been written yet.
#[allow(clippy::missing_errors_doc)]
pub fn load() -> Result<AppConfiguration, WorkforceError> {
    let config_path = configuration_file();
    if !config_path.exists() {
        return Ok(AppConfiguration::default());
    }
    read(&config_path)
}

#[allow(clippy::missing_errors_doc)]
pub fn save(cfg: &AppConfiguration) -> Result<()> {
    create_configuration_file(cfg, &configuration_file())
}

fn default_application_data() -> ApplicationData {
    ApplicationData::default()
}

fn project_dirs() -> ProjectDirs {
    ProjectDirs::from("com", "ems", "workforce")
        .expect("Unable to determine the name of the 'project_dirs' directory name")
}

/// Reads the `Application` configuration struct from the supplied TOML file
fn read(path: &Path) -> Result<AppConfiguration, WorkforceError> {
    let mut file = File::open(path).map_err(|source| WorkforceError::ApplicationConfig {
        path: path.into(),
        source,
    })?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)
        .map_err(|source| WorkforceError::ApplicationConfig {
            path: path.into(),
            source,
        })?;
    toml::from_str::<AppConfiguration>(&contents).map_err(|source| WorkforceError::TomlParse {
        path: path.into(),
        source,
    })
}

fn create_configuration_file(cfg: &AppConfiguration, path: &PathBuf) -> Result<()> {
    let directory = path.parent().unwrap();
    if !directory.try_exists()? {
        fs::create_dir_all(directory)?;
    }

    let mut file = File::create(path)?;
    let toml = toml::to_string::<AppConfiguration>(cfg)?;
    file.write_all(toml.as_bytes())?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toml_parsing() {
        let toml_str = r#"
        [application_data]
        database = "company.db"
        "#;

        let app_config: AppConfiguration = toml::from_str(toml_str).unwrap();
        assert_eq!(app_config.application_data.database, "company.db");
    }

    /// Verifies that the database path is populated with a reasonable default
    /// even if it does not exist in the configuration file on disk
    #[test]
    fn test_toml_parsing_with_defaults_generated() {
        let toml_str = "";

        let app_config: AppConfiguration = toml::from_str(toml_str).unwrap();
        assert_eq!(
            app_config.application_data.database,
            database_file().to_string_lossy()
        );
    }

    #[test]
    fn test_write_and_read_toml_file() -> Result<()> {
        let tmp_dir = tempfile::tempdir()?;
        let tmp_config_file = tmp_dir.path().join("test-config.toml");

        let cfg = AppConfiguration {
            application_data: ApplicationData {
                database: "company.db".to_string(),
            },
        };

        create_configuration_file(&cfg, &tmp_config_file)?;
        match read(&tmp_config_file) {
            Ok(result) => assert_eq!(cfg, result),
            Err(_) => panic!("Unable to read the TOML configuration back from disk"),
        }

        Ok(())
    }
}
