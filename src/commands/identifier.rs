use std::path::PathBuf;

use anyhow::Result;

use modkit::derive_identifier;

pub fn cmd_identifier(paths: &[PathBuf], json: bool) -> Result<()> {
    if json {
        let items: Vec<_> = paths
            .iter()
            .map(|p| {
                serde_json::json!({
                    "path": p.display().to_string(),
                    "identifier": derive_identifier(p).as_str(),
                })
            })
            .collect();
        println!("{}", serde_json::json!({ "event": "identifier", "items": items }));
        return Ok(());
    }

    for path in paths {
        println!("{}  {}", derive_identifier(path), path.display());
    }
    Ok(())
}
