use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::warning;

/// Handle the `calendars` command: print `index) name  id`.
pub fn handle(cfg: &Config) -> AppResult<()> {
    if cfg.calendars.is_empty() {
        warning("No calendars configured.");
        return Ok(());
    }

    let width = cfg
        .calendars
        .entries()
        .iter()
        .map(|c| c.name.chars().count())
        .max()
        .unwrap_or(0);

    for (i, c) in cfg.calendars.entries().iter().enumerate() {
        println!("{i}) {:<width$}  {}", c.name, c.id, width = width);
    }
    Ok(())
}
