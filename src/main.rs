use inkboard::{document_json, init_logging, load_config, run_demo, Editor};
use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    init_logging()?;

    // Optional first argument: path to a .toml or .json config file
    let config_path = std::env::args_os().nth(1).map(PathBuf::from);
    let config = load_config(config_path.as_deref())?;

    tracing::info!(
        "Inkboard {} (built {})",
        inkboard::VERSION,
        inkboard::BUILD_DATE
    );

    let mut editor = Editor::new(&config)?;
    run_demo(&mut editor)?;

    println!("{}", document_json(&editor.document)?);
    Ok(())
}
