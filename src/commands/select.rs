use std::io::{self, Write};
use std::path::Path;

use tracing::info;

use sprint_select::backlog::BacklogFile;
use sprint_select::color::Palette;
use sprint_select::config::Config;
use sprint_select::plan;
use sprint_select::report;
use sprint_select::Error;

/// Select the sprint for a backlog file and print the report to stdout.
pub fn cmd_select_from(config: &Config, path: &Path) -> Result<(), Error> {
    info!(path = %path.display(), "selecting sprint");

    let file = BacklogFile::load(path)?;
    let sprint = plan::select_sprint(file, config)?;

    let palette = Palette::new(config.color.enabled());
    let rendered = report::render(&sprint, config.format, palette)?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(rendered.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
