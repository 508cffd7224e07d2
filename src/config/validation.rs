use log::{warn, info};

use crate::config::Config;
use crate::utils::error::{BoxResult, BlogkitError};
use crate::utils::fs;

/// Validate the configuration
pub fn validate_config(config: &Config) -> BoxResult<()> {
    validate_source_directory(config)?;

    validate_social_links(config);

    validate_toc_options(config);

    Ok(())
}

/// Validate the source directory
fn validate_source_directory(config: &Config) -> BoxResult<()> {
    let source = &config.source;

    if !source.exists() {
        return Err(BlogkitError::Config(format!(
            "Source directory does not exist: {}", source.display()
        )).into());
    }

    if !fs::is_directory(source) {
        return Err(BlogkitError::Config(format!(
            "Source path is not a directory: {}", source.display()
        )).into());
    }

    info!("Source directory: {}", source.display());
    Ok(())
}

/// Warn about social accounts that are present but empty
fn validate_social_links(config: &Config) {
    let social = &config.social;
    for (kind, value) in [
        ("email", &social.email),
        ("github", &social.github),
        ("juejin", &social.juejin),
        ("zhihu", &social.zhihu),
        ("linkedin", &social.linkedin),
        ("twitter", &social.twitter),
    ] {
        if let Some(value) = value {
            if value.trim().is_empty() {
                warn!("Social link '{}' is set but empty and will be skipped", kind);
            }
        }
    }
}

/// Heading levels are never rejected, only reported when they select nothing
fn validate_toc_options(config: &Config) {
    let toc = &config.toc;
    if toc.from_heading > toc.to_heading {
        warn!(
            "TOC heading range {}..={} is empty, tables of contents will have no entries",
            toc.from_heading, toc.to_heading
        );
    }
}
