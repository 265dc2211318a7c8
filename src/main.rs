use std::path::PathBuf;
use std::process;

use clap::CommandFactory;

use sprint_select::color::Palette;
use sprint_select::config::{self, CliArgs, Command, Config, DEFAULT_CONFIG_FILE};
use sprint_select::logging;
use sprint_select::Error;

mod commands;
mod output;

use commands::{cmd_init, cmd_select_from};

fn main() {
    let cli = match config::parse_args(std::env::args_os()) {
        Ok(cli) => cli,
        Err(e) => e.exit(),
    };
    logging::init(cli.verbose);

    let Some(command) = cli.command.clone() else {
        let _ = CliArgs::command().print_help();
        process::exit(2);
    };

    let result = match command {
        Command::SelectFrom { path } => run_select_from(&cli, &path),
        Command::Init { force } => {
            let target = cli
                .config
                .clone()
                .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
            let color = Config::load_without_file(&cli).color;
            let palette = Palette::new(color.enabled());
            cmd_init(&target, force, palette)
        }
    };

    if let Err(e) = result {
        output::print_error(&e);
        process::exit(1);
    }
}

fn run_select_from(cli: &CliArgs, path: &std::path::Path) -> Result<(), Error> {
    let config = Config::load(cli)?;
    cmd_select_from(&config, path)
}
