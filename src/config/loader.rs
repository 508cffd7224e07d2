use std::path::{Path, PathBuf};
use std::fs;
use log::debug;

use crate::config::defaults;
use crate::config::types::Config;
use crate::config::validation;
use crate::markdown::toc::TocOptions;
use crate::utils::error::{BoxResult, BlogkitError};

/// Configuration file names to look for
const CONFIG_FILES: [&str; 3] = ["_config.yml", "_config.yaml", "_config.toml"];

/// Load site configuration from config files
pub fn load_config<P: AsRef<Path>>(
    source_dir: P,
    config_files: Option<Vec<PathBuf>>
) -> BoxResult<Config> {
    // Start with default configuration
    let mut config = Config::default();

    let config_paths = match config_files {
        Some(paths) if !paths.is_empty() => paths,
        _ => find_default_config_files(&source_dir),
    };

    if config_paths.is_empty() {
        debug!("No configuration files found, using defaults");
    } else {
        for path in config_paths {
            debug!("Loading configuration from {}", path.display());
            merge_config_file(&mut config, &path)?;
        }
    }

    if config.source == defaults::default_source() {
        config.source = source_dir.as_ref().to_path_buf();
    }

    validation::validate_config(&config)?;

    debug!("Configuration loaded: {:?}", config);
    Ok(config)
}

/// Find default configuration files
fn find_default_config_files<P: AsRef<Path>>(source_dir: P) -> Vec<PathBuf> {
    CONFIG_FILES
        .iter()
        .map(|config_file| source_dir.as_ref().join(config_file))
        .filter(|config_path| config_path.exists())
        .collect()
}

/// Merge a configuration file into the current configuration
fn merge_config_file(config: &mut Config, config_path: &Path) -> BoxResult<()> {
    if !config_path.exists() {
        return Err(BlogkitError::Config(format!(
            "Configuration file not found: {}", config_path.display()
        )).into());
    }

    let content = fs::read_to_string(config_path)
        .map_err(|e| BlogkitError::Config(format!(
            "Failed to read configuration file {}: {}", config_path.display(), e
        )))?;

    let file_config = parse_config(&content, config_path)?;
    merge_configs(config, &file_config);

    Ok(())
}

/// Parse configuration content based on the file extension
fn parse_config(content: &str, path: &Path) -> BoxResult<Config> {
    if content.trim().is_empty() {
        return Ok(Config::default());
    }

    match path.extension().map(|ext| ext.to_string_lossy().to_lowercase()) {
        Some(ext) if ext == "toml" => parse_toml_config(content, path),
        Some(ext) if ext == "json" => parse_json_config(content, path),
        Some(ext) if ext == "yml" || ext == "yaml" => parse_yaml_config(content, path),
        Some(ext) => Err(BlogkitError::Config(format!(
            "Unsupported configuration file format: {}", ext
        )).into()),
        // Assume YAML if no extension
        None => parse_yaml_config(content, path),
    }
}

/// Parse a YAML configuration file
fn parse_yaml_config(content: &str, path: &Path) -> BoxResult<Config> {
    serde_yaml::from_str(content)
        .map_err(|e| BlogkitError::Config(format!(
            "Failed to parse YAML configuration ({}): {}", path.display(), e
        )).into())
}

/// Parse a TOML configuration file
fn parse_toml_config(content: &str, path: &Path) -> BoxResult<Config> {
    toml::from_str(content)
        .map_err(|e| BlogkitError::Config(format!(
            "Failed to parse TOML configuration ({}): {}", path.display(), e
        )).into())
}

/// Parse a JSON configuration file
fn parse_json_config(content: &str, path: &Path) -> BoxResult<Config> {
    serde_json::from_str(content)
        .map_err(|e| BlogkitError::Config(format!(
            "Failed to parse JSON configuration ({}): {}", path.display(), e
        )).into())
}

/// Merge two configurations.
///
/// Only values that differ from the defaults in `source` override `target`.
fn merge_configs(target: &mut Config, source: &Config) {
    if source.source != defaults::default_source() {
        target.source = source.source.clone();
    }

    if source.data_dir != defaults::default_data_dir() {
        target.data_dir = source.data_dir.clone();
    }

    if source.title != defaults::default_site_title() {
        target.title = source.title.clone();
    }

    if source.author.is_some() {
        target.author = source.author.clone();
    }

    if source.description.is_some() {
        target.description = source.description.clone();
    }

    if source.site_url.is_some() {
        target.site_url = source.site_url.clone();
    }

    // Social accounts merge one by one so a later file can add a single account
    let social = &source.social;
    let merged = &mut target.social;
    for (from, to) in [
        (&social.email, &mut merged.email),
        (&social.github, &mut merged.github),
        (&social.juejin, &mut merged.juejin),
        (&social.zhihu, &mut merged.zhihu),
        (&social.linkedin, &mut merged.linkedin),
        (&social.twitter, &mut merged.twitter),
    ] {
        if from.is_some() {
            *to = from.clone();
        }
    }

    if source.icp_record.is_some() {
        target.icp_record = source.icp_record.clone();
    }

    merge_toc_options(&mut target.toc, &source.toc);

    if source.markdown.header_id_prefix != defaults::default_header_id_prefix() {
        target.markdown.header_id_prefix = source.markdown.header_id_prefix.clone();
    }
}

fn merge_toc_options(target: &mut TocOptions, source: &TocOptions) {
    let default = TocOptions::default();

    if source.indent_depth != default.indent_depth {
        target.indent_depth = source.indent_depth;
    }
    if source.from_heading != default.from_heading {
        target.from_heading = source.from_heading;
    }
    if source.to_heading != default.to_heading {
        target.to_heading = source.to_heading;
    }
    if source.as_disclosure != default.as_disclosure {
        target.as_disclosure = source.as_disclosure;
    }
    if source.exclude != default.exclude {
        debug!("Merging TOC exclude: {:?}", source.exclude);
        target.exclude = source.exclude.clone();
    }
    if source.label != default.label {
        target.label = source.label.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markdown::toc::Exclude;
    use crate::utils::fs::write_file;

    fn temp_site(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("blogkit-config-{}-{}", name, std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_defaults_without_config_files() {
        let dir = temp_site("empty");
        let config = load_config(&dir, None).unwrap();

        assert_eq!(config.source, dir);
        assert_eq!(config.title, defaults::default_site_title());
        assert_eq!(config.toc, TocOptions::default());

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_yaml_then_toml_merge() {
        let dir = temp_site("merge");
        write_file(dir.join("_config.yml"), "title: My Blog\nauthor: Ann\ntoc:\n  indent_depth: 2\n").unwrap();
        write_file(
            dir.join("_config.toml"),
            "author = \"Bo\"\n[toc]\nexclude = [\"FAQ\"]\n[social]\ngithub = \"https://github.com/bo\"\n",
        ).unwrap();

        let config = load_config(&dir, None).unwrap();

        assert_eq!(config.title, "My Blog");
        assert_eq!(config.author.as_deref(), Some("Bo"));
        assert_eq!(config.toc.indent_depth, 2);
        assert_eq!(config.toc.exclude, Exclude::from(vec!["FAQ"]));
        assert_eq!(config.social.github.as_deref(), Some("https://github.com/bo"));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_explicit_json_config() {
        let dir = temp_site("json");
        let path = dir.join("site.json");
        write_file(&path, r#"{"title": "Json Blog", "toc": {"as_disclosure": false}}"#).unwrap();

        let config = load_config(&dir, Some(vec![path])).unwrap();
        assert_eq!(config.title, "Json Blog");
        assert!(!config.toc.as_disclosure);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_missing_config_file_is_an_error() {
        let dir = temp_site("missing");
        let err = load_config(&dir, Some(vec![dir.join("nope.yml")])).unwrap_err();
        assert!(err.to_string().contains("Configuration file not found"));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_unsupported_format() {
        let err = parse_config("title = 1", Path::new("site.ini")).unwrap_err();
        assert!(err.to_string().contains("Unsupported configuration file format"));
    }

    #[test]
    fn test_invalid_yaml_reports_path() {
        let err = parse_config("title: [unclosed", Path::new("_config.yml")).unwrap_err();
        assert!(err.to_string().contains("_config.yml"));
    }
}
