use std::path::Path;

use anyhow::Result;
use pokegym_config::Config;

use super::{build_engine, print_item, random_source};
use crate::cli::OpenArgs;

pub async fn handle(args: OpenArgs, config: &Config, config_path: &Path) -> Result<()> {
    let engine = build_engine(&args.engine, config, config_path, args.offline)?;
    let size = args.size.unwrap_or(config.engine.pack_size);

    // Draws happen before the first catalog call; the source is not held
    // across the await.
    let slots = {
        let mut source = random_source(args.seed);
        engine.roll_pack(size, source.as_mut())?
    };
    let items = engine.resolve(slots).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&items)?);
        return Ok(());
    }

    println!("✓ Opened a pack of {} (buff {:+.0}%)", items.len(), engine.buff() * 100.0);
    for (index, item) in items.iter().enumerate() {
        print_item(index, item);
    }

    Ok(())
}
