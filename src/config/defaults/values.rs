use std::path::PathBuf;

/// Default source directory
pub fn default_source() -> PathBuf {
    PathBuf::from(".")
}

/// Default data directory
pub fn default_data_dir() -> PathBuf {
    PathBuf::from("_data")
}

/// Default site title
pub fn default_site_title() -> String {
    "Your awesome blog".to_string()
}

/// Default prefix for generated heading ids
pub fn default_header_id_prefix() -> String {
    "".to_string()
}

/// Data file name stems searched for project listings
pub fn default_projects_stem() -> &'static str {
    "projects"
}
