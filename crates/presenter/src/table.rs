use crate::columns::Column;
use crate::error::PresenterError;
use core_types::PlayerStatSummary;
use std::io::Write;

/// Spaces added after the widest cell of every column.
const PADDING: usize = 2;

/// Printed in place of a ratio that has no value.
const UNDEFINED_MARKER: &str = "undefined";

/// A fully formatted table, ready to print.
///
/// Each column is as wide as its widest cell, header included, plus `PADDING`.
#[derive(Debug, Clone)]
pub struct TableLayout {
    headers: Vec<&'static str>,
    rows: Vec<Vec<String>>,
    widths: Vec<usize>,
}

impl TableLayout {
    pub fn new(columns: &[Column], records: &[PlayerStatSummary]) -> Self {
        let headers: Vec<&'static str> = columns.iter().map(|c| c.header).collect();
        let rows: Vec<Vec<String>> = records
            .iter()
            .map(|record| columns.iter().map(|c| c.format(record, UNDEFINED_MARKER)).collect())
            .collect();

        let widths = headers
            .iter()
            .enumerate()
            .map(|(col, header)| {
                let widest_cell = rows
                    .iter()
                    .map(|row| row[col].chars().count())
                    .max()
                    .unwrap_or(0);
                header.chars().count().max(widest_cell) + PADDING
            })
            .collect();

        Self { headers, rows, widths }
    }

    pub fn widths(&self) -> &[usize] {
        &self.widths
    }

    /// Writes the header line, an `=` separator spanning every column, then one line per record.
    pub fn write_to<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        writeln!(out, "{}", self.line(self.headers.iter().copied()))?;
        writeln!(out, "{}", "=".repeat(self.widths.iter().sum()))?;
        for row in &self.rows {
            writeln!(out, "{}", self.line(row.iter().map(String::as_str)))?;
        }
        Ok(())
    }

    fn line<'a>(&self, cells: impl Iterator<Item = &'a str>) -> String {
        cells
            .zip(&self.widths)
            .map(|(cell, &width)| format!("{cell:<width$}"))
            .collect()
    }
}

/// Prints the ranked summaries as a fixed-width table.
pub fn render_table<W: Write>(
    columns: &[Column],
    records: &[PlayerStatSummary],
    out: &mut W,
) -> Result<(), PresenterError> {
    TableLayout::new(columns, records).write_to(out)?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::columns::REPORT_COLUMNS;
    use core_types::Ratio;
    use rust_decimal_macros::dec;

    fn trout() -> PlayerStatSummary {
        PlayerStatSummary {
            first_name: "Mike".to_string(),
            last_name: "Trout".to_string(),
            external_id: 123,
            mean: dec!(12.35),
            stdev: dec!(3.21),
            ratio: Ratio::Defined(dec!(3.85)),
        }
    }

    fn render(records: &[PlayerStatSummary]) -> String {
        let mut out = Vec::new();
        render_table(&REPORT_COLUMNS, records, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn column_width_is_widest_cell_plus_padding() {
        let layout = TableLayout::new(&REPORT_COLUMNS, &[trout()]);
        // fname: "Mike"(4) vs "fname"(5); lname: "Trout"(5); id: "123.00"(6);
        // mean: "12.35"(5); stdev: "3.21"(4) vs "stdev"(5); ratio: "3.85"(4) vs "ratio"(5)
        assert_eq!(layout.widths(), &[7, 7, 8, 7, 7, 7]);
    }

    #[test]
    fn renders_header_separator_and_rows() {
        let output = render(&[trout()]);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "fname  lname  id      mean   stdev  ratio  ");
        assert_eq!(lines[1], "=".repeat(43));
        assert_eq!(lines[2], "Mike   Trout  123.00  12.35  3.21   3.85   ");
    }

    #[test]
    fn long_names_widen_their_column() {
        let mut player = trout();
        player.last_name = "Encarnacion-Strand".to_string();
        let layout = TableLayout::new(&REPORT_COLUMNS, &[player]);
        assert_eq!(layout.widths()[1], 20);
    }

    #[test]
    fn undefined_ratio_is_labelled() {
        let mut player = trout();
        player.ratio = Ratio::Undefined;
        let output = render(&[player]);
        assert!(output.lines().nth(2).unwrap().ends_with("undefined  "));
    }

    #[test]
    fn empty_report_prints_header_and_separator_only() {
        let output = render(&[]);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines, ["fname  lname  id  mean  stdev  ratio  ", "=".repeat(38).as_str()]);
    }
}
