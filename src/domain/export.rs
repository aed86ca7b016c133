use std::io;

use csv::Writer;
use thiserror::Error;

use super::entities::PortfolioRow;

pub const EXPORT_HEADER: [&str; 10] = [
    "#",
    "Skin",
    "Skin Num",
    "Buy Price",
    "Sell Price",
    "Fee %",
    "Net Received",
    "Profit",
    "ROI %",
    "Cumulative Money",
];

#[derive(Debug, Error)]
pub enum ExportError {
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("export produced invalid UTF-8")]
    Encoding,
}

/// Writes portfolio rows as CSV, one record per skin in index order.
pub fn write_portfolio_csv<W: io::Write>(rows: &[PortfolioRow], sink: W) -> Result<(), ExportError> {
    let mut writer = Writer::from_writer(sink);
    writer.write_record(EXPORT_HEADER)?;

    for (position, row) in rows.iter().enumerate() {
        let skin = &row.skin;
        writer.write_record([
            (position + 1).to_string(),
            skin.name.clone(),
            skin.index.to_string(),
            skin.buy_price.to_string(),
            skin.sell_price_adj.to_string(),
            skin.fee_adj.to_string(),
            skin.net_received.to_string(),
            skin.profit.to_string(),
            skin.roi.to_string(),
            row.cumulative_money.to_string(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

pub fn portfolio_csv(rows: &[PortfolioRow]) -> Result<String, ExportError> {
    let mut buffer = Vec::new();
    write_portfolio_csv(rows, &mut buffer)?;
    String::from_utf8(buffer).map_err(|_| ExportError::Encoding)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        entities::{Modifiers, SkinInput},
        pricing::build_portfolio,
    };

    #[test]
    fn header_and_rows_are_written() {
        let items = vec![
            SkinInput::new(1, 100.0, 150.0, 8.0),
            SkinInput::new(2, 10.0, 20.0, 0.0),
        ];
        let portfolio = build_portfolio(&items, &Modifiers::default(), false);
        let csv = portfolio_csv(&portfolio.rows).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            "#,Skin,Skin Num,Buy Price,Sell Price,Fee %,Net Received,Profit,ROI %,Cumulative Money"
        );
        assert!(lines[1].starts_with("1,Skin 1,1,100,150,8,"));
        assert!(lines[2].starts_with("2,Skin 2,2,10,20,0,20,10,100,"));
    }

    #[test]
    fn names_with_delimiters_are_quoted() {
        let mut item = SkinInput::new(1, 1.0, 2.0, 0.0);
        item.name = "AK-47 | Redline, FT".to_string();
        let portfolio = build_portfolio(&[item], &Modifiers::default(), false);
        let csv = portfolio_csv(&portfolio.rows).unwrap();

        assert!(csv.contains("\"AK-47 | Redline, FT\""));
    }

    #[test]
    fn empty_export_has_only_header() {
        let csv = portfolio_csv(&[]).unwrap();
        assert_eq!(csv.lines().count(), 1);
    }
}
