use core_types::PlayerStatSummary;
use rust_decimal::Decimal;

/// How a column's values are read and formatted.
///
/// The tag is fixed when the column is declared; formatting never inspects
/// the value to decide how to print it.
#[derive(Debug, Clone, Copy)]
pub enum ColumnKind {
    /// Printed as-is.
    Text(fn(&PlayerStatSummary) -> &str),
    /// Any numeric value, printed with exactly two decimal places. `None` means undefined.
    Decimal(fn(&PlayerStatSummary) -> Option<Decimal>),
}

/// One column of the report.
#[derive(Debug, Clone, Copy)]
pub struct Column {
    pub header: &'static str,
    pub kind: ColumnKind,
}

impl Column {
    /// Formats this column's cell for one record. Undefined decimals print as `undefined`.
    pub fn format(&self, summary: &PlayerStatSummary, undefined: &str) -> String {
        match self.kind {
            ColumnKind::Text(get) => get(summary).to_owned(),
            ColumnKind::Decimal(get) => match get(summary) {
                Some(value) => format!("{value:.2}"),
                None => undefined.to_owned(),
            },
        }
    }
}

fn first_name(s: &PlayerStatSummary) -> &str {
    &s.first_name
}

fn last_name(s: &PlayerStatSummary) -> &str {
    &s.last_name
}

fn external_id(s: &PlayerStatSummary) -> Option<Decimal> {
    Some(Decimal::from(s.external_id))
}

fn mean(s: &PlayerStatSummary) -> Option<Decimal> {
    Some(s.mean)
}

fn stdev(s: &PlayerStatSummary) -> Option<Decimal> {
    Some(s.stdev)
}

fn ratio(s: &PlayerStatSummary) -> Option<Decimal> {
    s.ratio.value()
}

/// The report's columns, in output order.
pub const REPORT_COLUMNS: [Column; 6] = [
    Column { header: "fname", kind: ColumnKind::Text(first_name) },
    Column { header: "lname", kind: ColumnKind::Text(last_name) },
    Column { header: "id", kind: ColumnKind::Decimal(external_id) },
    Column { header: "mean", kind: ColumnKind::Decimal(mean) },
    Column { header: "stdev", kind: ColumnKind::Decimal(stdev) },
    Column { header: "ratio", kind: ColumnKind::Decimal(ratio) },
];

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::Ratio;
    use rust_decimal_macros::dec;

    fn summary() -> PlayerStatSummary {
        PlayerStatSummary {
            first_name: "Mike".to_string(),
            last_name: "Trout".to_string(),
            external_id: 123,
            mean: dec!(12.3),
            stdev: dec!(3.21),
            ratio: Ratio::Undefined,
        }
    }

    #[test]
    fn decimals_always_print_two_places() {
        let s = summary();
        assert_eq!(REPORT_COLUMNS[3].format(&s, "-"), "12.30");
        assert_eq!(REPORT_COLUMNS[4].format(&s, "-"), "3.21");
    }

    #[test]
    fn text_columns_print_as_is() {
        assert_eq!(REPORT_COLUMNS[0].format(&summary(), "-"), "Mike");
        assert_eq!(REPORT_COLUMNS[1].format(&summary(), "-"), "Trout");
    }

    #[test]
    fn id_is_numeric_with_two_places() {
        assert_eq!(REPORT_COLUMNS[2].format(&summary(), "-"), "123.00");
    }

    #[test]
    fn undefined_ratio_uses_the_marker() {
        assert_eq!(REPORT_COLUMNS[5].format(&summary(), "undefined"), "undefined");
        assert_eq!(REPORT_COLUMNS[5].format(&summary(), ""), "");
    }

    #[test]
    fn headers_match_report_layout() {
        let headers: Vec<&str> = REPORT_COLUMNS.iter().map(|c| c.header).collect();
        assert_eq!(headers, ["fname", "lname", "id", "mean", "stdev", "ratio"]);
    }
}
