use crate::columns::Column;
use crate::error::PresenterError;
use core_types::PlayerStatSummary;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes the header and one row per record to any writer, then flushes it.
///
/// Undefined decimals are written as empty cells.
pub fn write_csv_to<W: Write>(
    columns: &[Column],
    records: &[PlayerStatSummary],
    out: W,
) -> Result<(), PresenterError> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(columns.iter().map(|c| c.header))?;
    for record in records {
        writer.write_record(columns.iter().map(|c| c.format(record, "")))?;
    }
    writer.flush()?;
    Ok(())
}

/// Writes the report to `path`, creating parent directories as needed.
///
/// The file is closed when this returns, whether or not the write succeeded.
pub fn write_csv(
    columns: &[Column],
    records: &[PlayerStatSummary],
    path: &Path,
) -> Result<(), PresenterError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    write_csv_to(columns, records, BufWriter::new(file))?;

    tracing::info!(path = %path.display(), rows = records.len(), "CSV report written.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::columns::REPORT_COLUMNS;
    use core_types::Ratio;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use std::str::FromStr;
    use tempfile::tempdir;

    fn records() -> Vec<PlayerStatSummary> {
        vec![
            PlayerStatSummary {
                first_name: "Mike".to_string(),
                last_name: "Trout".to_string(),
                external_id: 123,
                mean: dec!(12.35),
                stdev: dec!(3.21),
                ratio: Ratio::Defined(dec!(3.85)),
            },
            PlayerStatSummary {
                first_name: "Ken".to_string(),
                last_name: "Griffey, Jr.".to_string(),
                external_id: 24,
                mean: dec!(9),
                stdev: dec!(4.5),
                ratio: Ratio::Defined(dec!(2)),
            },
            PlayerStatSummary {
                first_name: "Steady \"Eddie\"".to_string(),
                last_name: "Murray".to_string(),
                external_id: 33,
                mean: dec!(6.00),
                stdev: dec!(0.00),
                ratio: Ratio::Undefined,
            },
        ]
    }

    #[test]
    fn written_file_reads_back_as_the_same_rows() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("scores_data.csv");
        let records = records();

        write_csv(&REPORT_COLUMNS, &records, &path).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let headers: Vec<String> = reader.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, ["fname", "lname", "id", "mean", "stdev", "ratio"]);

        let rows: Vec<csv::StringRecord> = reader.records().map(Result::unwrap).collect();
        assert_eq!(rows.len(), records.len());
        for (row, record) in rows.iter().zip(&records) {
            assert_eq!(&row[0], record.first_name);
            assert_eq!(&row[1], record.last_name);
            assert_eq!(Decimal::from_str(&row[2]).unwrap(), Decimal::from(record.external_id));
            assert_eq!(Decimal::from_str(&row[3]).unwrap(), record.mean);
            assert_eq!(Decimal::from_str(&row[4]).unwrap(), record.stdev);
            assert_eq!(Decimal::from_str(&row[5]).ok(), record.ratio.value());
        }
    }

    #[test]
    fn decimals_have_two_places_and_special_characters_are_quoted() {
        let mut out = Vec::new();
        write_csv_to(&REPORT_COLUMNS, &records(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "fname,lname,id,mean,stdev,ratio");
        assert_eq!(lines[1], "Mike,Trout,123.00,12.35,3.21,3.85");
        assert_eq!(lines[2], "Ken,\"Griffey, Jr.\",24.00,9.00,4.50,2.00");
        assert_eq!(lines[3], "\"Steady \"\"Eddie\"\"\",Murray,33.00,6.00,0.00,");
    }

    #[test]
    fn missing_parent_directories_are_created() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("reports").join("nested").join("scores_data.csv");

        write_csv(&REPORT_COLUMNS, &[], &path).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(text, "fname,lname,id,mean,stdev,ratio\n");
    }
}
