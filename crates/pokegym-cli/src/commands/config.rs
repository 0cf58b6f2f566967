use std::path::Path;

use anyhow::Result;
use pokegym_config::Config;

pub fn handle(config: &Config, config_path: &Path) -> Result<()> {
    println!("# {}", config_path.display());
    print!("{}", toml::to_string_pretty(config)?);

    if let Some(box_file) = config.box_file(config_path) {
        let status = if box_file.exists() { "found" } else { "missing" };
        println!("\n# box file: {} ({})", box_file.display(), status);
    }

    Ok(())
}
