use std::fs;
use std::path::{Path, PathBuf};
use log::debug;
use serde::de::DeserializeOwned;

use crate::config::Config;
use crate::utils::error::{BoxResult, BlogkitError};

/// Data file extensions in lookup order
const DATA_EXTENSIONS: [&str; 3] = ["yml", "yaml", "json"];

/// Find a data file by stem in the configured data directory
pub fn find_data_file(config: &Config, stem: &str) -> Option<PathBuf> {
    let data_dir = config.data_path();

    DATA_EXTENSIONS
        .iter()
        .map(|ext| data_dir.join(format!("{}.{}", stem, ext)))
        .find(|path| path.is_file())
}

/// Load and deserialize a YAML or JSON data file
pub fn load_data_file<T: DeserializeOwned>(path: &Path) -> BoxResult<T> {
    debug!("Loading data file {}", path.display());

    let content = fs::read_to_string(path)
        .map_err(|e| BlogkitError::Data(format!(
            "Failed to read data file {}: {}", path.display(), e
        )))?;

    let extension = path.extension().unwrap_or_default().to_string_lossy().to_lowercase();

    let data = match extension.as_str() {
        "yml" | "yaml" => serde_yaml::from_str(&content)
            .map_err(|e| BlogkitError::Data(format!(
                "Failed to parse YAML data file {}: {}", path.display(), e
            )))?,
        "json" => serde_json::from_str(&content)
            .map_err(|e| BlogkitError::Data(format!(
                "Failed to parse JSON data file {}: {}", path.display(), e
            )))?,
        _ => {
            return Err(BlogkitError::Data(format!(
                "Unsupported data file format: {}", path.display()
            )).into());
        }
    };

    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use crate::utils::fs::write_file;

    #[test]
    fn test_find_and_load_data_file() {
        let dir = std::env::temp_dir().join(format!("blogkit-data-{}", std::process::id()));
        write_file(dir.join("_data").join("links.json"), r#"{"home": "/"}"#).unwrap();

        let config = Config {
            source: dir.clone(),
            ..Config::default()
        };

        let path = find_data_file(&config, "links").unwrap();
        let links: HashMap<String, String> = load_data_file(&path).unwrap();
        assert_eq!(links["home"], "/");

        assert!(find_data_file(&config, "missing").is_none());

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_unsupported_data_format() {
        let dir = std::env::temp_dir().join(format!("blogkit-data-csv-{}", std::process::id()));
        let path = dir.join("projects.csv");
        write_file(&path, "title\nx\n").unwrap();

        let err = load_data_file::<Vec<String>>(&path).unwrap_err();
        assert!(err.to_string().contains("Unsupported data file format"));

        fs::remove_dir_all(&dir).unwrap();
    }
}
