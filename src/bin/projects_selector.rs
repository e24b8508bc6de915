use anyhow::{Context, Result};
use clap::Parser;
use std::{
    env,
    process,
    io::{self, IsTerminal},
};
use projpick::{cli::SelectorCli, index, keys::TerminalKeys, logging, utils, Selector};

fn main() -> Result<()> {
    let cli = SelectorCli::parse();
    logging::init();

    // stdout is usually captured by the shell wrapper, so color follows stderr
    let no_color = env::var_os("NO_COLOR");
    let color = utils::use_color(io::stderr().is_terminal(), no_color.as_deref());
    colored::control::set_override(color);

    let config = cli.location.config()?;
    let projects = index::load_or_empty(&config.index_file);

    let mut selector = Selector::new(config, projects);
    let outcome = selector
        .run(&mut TerminalKeys, &mut io::stderr().lock(), &mut io::stdout().lock())
        .context("project selector failed")?;

    let code = outcome.exit_code();
    if code != 0 {
        process::exit(code);
    }

    Ok(())
}
