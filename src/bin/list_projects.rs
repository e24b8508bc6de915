use anyhow::{Context, Result};
use clap::Parser;
use projpick::{cli::ListCli, format, index, logging};

fn main() -> Result<()> {
    let cli = ListCli::parse();
    logging::init();

    let config = cli.location.config()?;
    let projects = index::load_or_empty(&config.index_file);

    let output = format::format_projects(&projects, cli.format)
        .context("failed to render project list")?;
    println!("{output}");

    Ok(())
}
