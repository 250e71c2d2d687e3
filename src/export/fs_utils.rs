// src/export/fs_utils.rs

use crate::core::range::TimeRange;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// `<dir>/<calendar-lowercased>-<MM>-<MM>[-<filter>].<ext>`
///
/// Path separators in the calendar name or filter are replaced so the file
/// always lands directly inside `dir`.
pub fn output_path(
    dir: &Path,
    calendar_name: &str,
    range: &TimeRange,
    filter: Option<&str>,
    ext: &str,
) -> PathBuf {
    let mut stem = format!(
        "{}-{:02}-{:02}",
        calendar_name.to_lowercase(),
        range.start_month(),
        range.end_month()
    );
    if let Some(f) = filter.filter(|f| !f.is_empty()) {
        stem.push('-');
        stem.push_str(f);
    }

    let stem: String = stem
        .chars()
        .map(|c| if matches!(c, '/' | '\\') { '_' } else { c })
        .collect();

    dir.join(format!("{stem}.{ext}"))
}

/// Create the output directory if it does not exist yet.
pub(crate) fn ensure_dir(dir: &Path) -> AppResult<()> {
    if !dir.as_os_str().is_empty() && !dir.exists() {
        fs::create_dir_all(dir)?;
        info(format!("Created output directory {}", dir.display()));
    }
    Ok(())
}

/// Check whether a file may be created or overwritten.
///
/// - file does not exist → Ok
/// - file exists and `force` → Ok
/// - file exists and no `force` → ask the user.
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }

    warning(format!("The file '{}' already exists.", path.display()));

    print!("Overwrite? [y/N]: ");
    io::stdout().flush().ok();

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    let ans = answer.trim().to_ascii_lowercase();

    if ans == "y" || ans == "yes" {
        info("Existing file will be overwritten.");
        Ok(())
    } else {
        Err(AppError::Export(
            "existing file not overwritten".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(m1: i32, m2: i32) -> TimeRange {
        TimeRange::from_tuples([2019, m1, 20, 0, 0], [2019, m2, 19, 23, 59]).unwrap()
    }

    #[test]
    fn name_months_and_filter() {
        let p = output_path(Path::new("output"), "Freelance", &range(1, 2), None, "pdf");
        assert_eq!(p, Path::new("output").join("freelance-01-02.pdf"));

        let p = output_path(
            Path::new("output"),
            "Freelance",
            &range(11, 12),
            Some("review"),
            "csv",
        );
        assert_eq!(p, Path::new("output").join("freelance-11-12-review.csv"));

        let p = output_path(Path::new("out"), "A", &range(1, 2), Some(""), "pdf");
        assert_eq!(p, Path::new("out").join("a-01-02.pdf"));
    }

    #[test]
    fn separators_do_not_escape_the_directory() {
        let p = output_path(Path::new("out"), "x", &range(1, 2), Some("../etc"), "pdf");
        assert_eq!(p, Path::new("out").join("x-01-02-.._etc.pdf"));
    }
}
