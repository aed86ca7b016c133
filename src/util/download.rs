use std::fs;
use std::path::{Path, PathBuf};

use time::{macros::format_description, OffsetDateTime};

use crate::domain::{export::portfolio_csv, export::ExportError, PortfolioRow};

/// Writes the portfolio as `skin_profit_<timestamp>.csv` into `dir`.
pub fn save_portfolio_csv(dir: &Path, rows: &[PortfolioRow]) -> Result<PathBuf, ExportError> {
    let contents = portfolio_csv(rows)?;
    fs::create_dir_all(dir)?;
    let path = dir.join(export_file_name(
        OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc()),
    ));
    fs::write(&path, contents)?;
    tracing::info!(path = %path.display(), rows = rows.len(), "exported portfolio");
    Ok(path)
}

pub fn export_file_name(at: OffsetDateTime) -> String {
    let stamp = at
        .format(format_description!("[year][month][day]_[hour][minute][second]"))
        .unwrap_or_else(|_| at.unix_timestamp().to_string());
    format!("skin_profit_{stamp}.csv")
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn file_name_carries_timestamp() {
        let at = datetime!(2024-03-09 07:05:01 UTC);
        assert_eq!(export_file_name(at), "skin_profit_20240309_070501.csv");
    }

    #[test]
    fn saves_into_directory() {
        let dir = std::env::temp_dir().join(format!("skin_profit_test_{}", std::process::id()));
        let path = save_portfolio_csv(&dir, &[]).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("#,Skin,Skin Num"));
        fs::remove_dir_all(&dir).unwrap();
    }
}
