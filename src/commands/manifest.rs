use std::io;
use std::path::Path;

use anyhow::{Context, Result};

use modkit::presentation::factory::{create_export_use_case, export_options};
use modkit::presentation::output::{renderer, OutputFormat};

pub fn cmd_manifest(project: &Path, json: bool, verbose: u8) -> Result<()> {
    let project = &super::absolute(project)?;
    let config = super::load_config(project)?;
    let use_case = create_export_use_case(&config, project)?;
    let options = export_options(&config, project, Path::new("."), None, None);

    let plan = use_case
        .plan(&options)
        .with_context(|| format!("listing manifest for {}", project.display()))?;

    renderer(OutputFormat::from_json_flag(json), verbose)
        .render_plan(&plan, &mut io::stdout().lock())?;
    Ok(())
}
