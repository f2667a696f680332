use std::io;
use std::path::Path;

use anyhow::{Context, Result};

use modkit::presentation::factory::{create_export_use_case, export_options};
use modkit::presentation::output::{renderer, OutputFormat};

pub fn cmd_export(
    project: &Path,
    output: &Path,
    product_name: Option<String>,
    runtime_version: Option<String>,
    json: bool,
    verbose: u8,
) -> Result<()> {
    let project = &super::absolute(project)?;
    let config = super::load_config(project)?;

    std::fs::create_dir_all(output)
        .with_context(|| format!("creating output directory {}", output.display()))?;
    let output = super::absolute(output)?;

    let use_case = create_export_use_case(&config, project)?;
    let options = export_options(&config, project, &output, product_name, runtime_version);

    let outcome = use_case
        .execute(&options)
        .with_context(|| format!("exporting mod tools for {}", project.display()))?;

    renderer(OutputFormat::from_json_flag(json), verbose)
        .render_outcome(&outcome, &mut io::stdout().lock())?;
    Ok(())
}
