use std::path::Path;

use crate::cli::types::Commands;
use crate::collections::data::find_data_file;
use crate::components::{load_projects, render_projects};
use crate::config::{default_projects_stem, Config};
use crate::utils::error::{BlogkitError, BoxResult};
use crate::utils::fs::write_output;

/// Handle the projects command
pub fn handle_projects_command(
    command: &Commands,
    config: &Config,
    output: Option<&Path>,
) -> BoxResult<()> {
    if let Commands::Projects { data } = command {
        let path = match data {
            Some(path) => path.clone(),
            None => find_data_file(config, default_projects_stem()).ok_or_else(|| {
                BlogkitError::Data(format!(
                    "No {}.yml, {}.yaml or {}.json found in {}",
                    default_projects_stem(),
                    default_projects_stem(),
                    default_projects_stem(),
                    config.data_path().display()
                ))
            })?,
        };

        let projects = load_projects(&path)?;
        write_output(output, &render_projects(&projects))?;
    }

    Ok(())
}
