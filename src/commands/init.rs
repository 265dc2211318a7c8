use std::fs;
use std::io;
use std::path::Path;

use sprint_select::color::Palette;
use sprint_select::config::Config;
use sprint_select::Error;

/// Write the default config file to `path`.
///
/// An existing file is left alone unless `force` is set.
pub fn cmd_init(path: &Path, force: bool, palette: Palette) -> Result<(), Error> {
    if path.exists() && !force {
        println!(
            "{} (use --force to overwrite)",
            palette.warning(&format!("Config file already exists: {}", path.display()))
        );
        return Ok(());
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, Config::default_toml()).map_err(|e| {
        io::Error::new(e.kind(), format!("failed to write {}: {}", path.display(), e))
    })?;

    println!("{}", palette.success(&format!("Created {}", path.display())));
    Ok(())
}
