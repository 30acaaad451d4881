use std::fs::File;
use std::path::Path;

use chrono::NaiveDate;
use csv::StringRecord;
use rust_decimal::Decimal;

use crate::error::ImportError;
use crate::record::{Region, SalesRecord};
use crate::session::Session;

const FILENAME_PREFIX: &str = "sales_q";
const FILENAME_SUFFIX: &str = ".csv";

/// Imports all rows of `filename` (relative to `data_dir`) into the session
/// and returns how many rows were appended.
///
/// The filename is checked before any file I/O: it must not have been
/// imported before, must match `sales_q*.csv` and must name a region code
/// right before the extension. The first row of the file is a header and is
/// skipped unread. Every data row is `date,quarter,region,amount`; rows are
/// appended to the session as soon as they parse and the first bad row
/// aborts the import. Earlier rows of the failing file stay in place, but
/// the filename is only registered after the whole file went through, so a
/// corrected file can be imported again.
pub fn import_file(
    data_dir: &Path,
    filename: &str,
    session: &mut Session,
) -> Result<usize, ImportError> {
    if session.is_imported(filename) {
        return Err(ImportError::AlreadyImported(filename.to_string()));
    }
    let stem = match (
        filename.starts_with(FILENAME_PREFIX),
        filename.strip_suffix(FILENAME_SUFFIX),
    ) {
        (true, Some(stem)) => stem,
        _ => return Err(ImportError::FilenameFormat(filename.to_string())),
    };
    if stem.chars().last().and_then(Region::from_code).is_none() {
        return Err(ImportError::FilenameRegion(filename.to_string()));
    }

    let path = data_dir.join(filename);
    log::info!("Importing {}...", path.display());
    let file = File::open(&path).map_err(|err| match err.kind() {
        std::io::ErrorKind::NotFound => ImportError::NotFound(filename.to_string()),
        _ => ImportError::Io {
            filename: filename.to_string(),
            source: err,
        },
    })?;

    // `flexible` so a short row surfaces as a malformed row instead of a
    // reader-level length error.
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(file);
    let mut imported = 0;
    for (index, row) in reader.records().enumerate() {
        // Row numbers count the header, so data rows start at 2.
        let row_number = index + 2;
        let row = row.map_err(|err| reader_error(filename, row_number, err))?;
        let record = parse_row(&row).map_err(|reason| ImportError::MalformedRow {
            row: row_number,
            reason,
        })?;
        session.add(record);
        imported += 1;
    }

    session.mark_imported(filename);
    log::info!("Importing {}...done, {} rows", path.display(), imported);
    Ok(imported)
}

fn reader_error(filename: &str, row: usize, err: csv::Error) -> ImportError {
    let reason = err.to_string();
    match err.into_kind() {
        csv::ErrorKind::Io(source) => ImportError::Io {
            filename: filename.to_string(),
            source,
        },
        _ => ImportError::MalformedRow { row, reason },
    }
}

// Quarter, region and amount are taken as parsed: the quarter is not checked
// against the date and the region is not checked against the fixed code set.
fn parse_row(row: &StringRecord) -> Result<SalesRecord, String> {
    let date_raw = column(row, 0, "date")?;
    let date = NaiveDate::parse_from_str(date_raw, "%Y-%m-%d")
        .map_err(|_| format!("`{date_raw}` is not a date of the form YYYY-MM-DD"))?;
    let quarter_raw = column(row, 1, "quarter")?;
    let quarter: u8 = quarter_raw
        .parse()
        .map_err(|_| format!("`{quarter_raw}` is not a valid quarter"))?;
    let region = column(row, 2, "region")?.to_string();
    let amount_raw = column(row, 3, "amount")?;
    let amount: Decimal = amount_raw
        .parse()
        .map_err(|_| format!("`{amount_raw}` is not a valid amount"))?;
    Ok(SalesRecord {
        date,
        quarter,
        region,
        amount,
    })
}

fn column<'a>(row: &'a StringRecord, index: usize, name: &str) -> Result<&'a str, String> {
    row.get(index).ok_or_else(|| format!("missing {name} column"))
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    const HEADER: &str = "date,quarter,region,amount\n";

    fn data_dir_with_file(name: &str, content: &str) -> (tempfile::TempDir, PathBuf) {
        let tempdir = tempfile::tempdir().unwrap();
        std::fs::write(tempdir.path().join(name), content).unwrap();
        let path = tempdir.path().to_path_buf();
        (tempdir, path)
    }

    #[test]
    fn imports_rows_in_file_order() {
        let (_tempdir, dir) = data_dir_with_file(
            "sales_q1_2024_w.csv",
            &format!("{HEADER}2024-01-15,1,w,100.0\n2024-02-20,1,w,50.0\n"),
        );
        let mut session = Session::new();

        let imported = import_file(&dir, "sales_q1_2024_w.csv", &mut session).unwrap();

        assert_eq!(2, imported);
        assert_eq!(
            vec![
                SalesRecord {
                    date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
                    quarter: 1,
                    region: "w".to_string(),
                    amount: "100.0".parse().unwrap(),
                },
                SalesRecord {
                    date: NaiveDate::from_ymd_opt(2024, 2, 20).unwrap(),
                    quarter: 1,
                    region: "w".to_string(),
                    amount: "50.0".parse().unwrap(),
                },
            ],
            session.sales()
        );
        assert!(session.is_imported("sales_q1_2024_w.csv"));
        assert_eq!(1, session.imported_files().len());
    }

    #[test]
    fn rejects_already_imported_file_without_touching_state() {
        let (_tempdir, dir) = data_dir_with_file(
            "sales_q1_2024_w.csv",
            &format!("{HEADER}2024-01-15,1,w,100.0\n"),
        );
        let mut session = Session::new();
        session.mark_imported("sales_q1_2024_w.csv");

        let err = import_file(&dir, "sales_q1_2024_w.csv", &mut session).unwrap_err();

        assert!(matches!(err, ImportError::AlreadyImported(_)));
        assert!(session.sales().is_empty());
        assert_eq!(1, session.imported_files().len());
    }

    #[test]
    fn rejects_bad_filename_shape_before_any_file_io() {
        // The directory doesn't even exist, so passing means no I/O happened.
        let dir = Path::new("/nonexistent");
        let mut session = Session::new();

        for filename in ["totals_q1_2024_w.csv", "sales_q1_2024_w.txt", "sales_q"] {
            let err = import_file(dir, filename, &mut session).unwrap_err();
            assert!(matches!(err, ImportError::FilenameFormat(_)), "{filename}");
        }
        assert!(session.sales().is_empty());
    }

    #[test]
    fn rejects_filename_without_region_code_before_any_file_io() {
        let dir = Path::new("/nonexistent");
        let mut session = Session::new();

        for filename in ["sales_q1_2024_x.csv", "sales_q.csv"] {
            let err = import_file(dir, filename, &mut session).unwrap_err();
            assert!(matches!(err, ImportError::FilenameRegion(_)), "{filename}");
        }
    }

    #[test]
    fn reports_missing_file() {
        let tempdir = tempfile::tempdir().unwrap();
        let mut session = Session::new();

        let err = import_file(tempdir.path(), "sales_q1_2024_w.csv", &mut session).unwrap_err();

        assert!(matches!(err, ImportError::NotFound(_)));
        assert!(!session.is_imported("sales_q1_2024_w.csv"));
    }

    #[test]
    fn malformed_row_aborts_but_keeps_earlier_rows() {
        let (_tempdir, dir) = data_dir_with_file(
            "sales_q1_2024_w.csv",
            &format!("{HEADER}2024-01-15,1,w,100.0\n2024-02-20,1,w,50.0\n2024-03-01,1,w,oops\n"),
        );
        let mut session = Session::new();

        let err = import_file(&dir, "sales_q1_2024_w.csv", &mut session).unwrap_err();

        match err {
            ImportError::MalformedRow { row, .. } => assert_eq!(4, row),
            other => panic!("expected MalformedRow, got {other}"),
        }
        // The two rows before the bad one are already committed, but the
        // file is not registered, so a corrected version can be retried.
        assert_eq!(2, session.sales().len());
        assert!(!session.is_imported("sales_q1_2024_w.csv"));
    }

    #[test]
    fn rejects_row_with_missing_columns() {
        let (_tempdir, dir) = data_dir_with_file(
            "sales_q1_2024_w.csv",
            &format!("{HEADER}2024-01-15,1,w\n"),
        );
        let mut session = Session::new();

        let err = import_file(&dir, "sales_q1_2024_w.csv", &mut session).unwrap_err();

        match err {
            ImportError::MalformedRow { row, reason } => {
                assert_eq!(2, row);
                assert_eq!("missing amount column", reason);
            }
            other => panic!("expected MalformedRow, got {other}"),
        }
    }

    #[test]
    fn rejects_invalid_date() {
        let (_tempdir, dir) = data_dir_with_file(
            "sales_q1_2024_w.csv",
            &format!("{HEADER}2024-02-30,1,w,100.0\n"),
        );
        let mut session = Session::new();

        let err = import_file(&dir, "sales_q1_2024_w.csv", &mut session).unwrap_err();

        assert!(matches!(err, ImportError::MalformedRow { row: 2, .. }));
        assert!(session.sales().is_empty());
    }

    #[test]
    fn imported_rows_skip_the_interactive_rules() {
        // Region outside the fixed code set, non-positive amount, quarter
        // that contradicts the date: all accepted verbatim.
        let (_tempdir, dir) = data_dir_with_file(
            "sales_q1_2024_w.csv",
            &format!("{HEADER}2024-01-31,3,north,-5.0\n"),
        );
        let mut session = Session::new();

        import_file(&dir, "sales_q1_2024_w.csv", &mut session).unwrap();

        assert_eq!(
            vec![SalesRecord {
                date: NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
                quarter: 3,
                region: "north".to_string(),
                amount: "-5.0".parse().unwrap(),
            }],
            session.sales()
        );
    }

    #[test]
    fn header_content_is_ignored() {
        let (_tempdir, dir) = data_dir_with_file(
            "sales_q1_2024_w.csv",
            "anything,goes,in,the,header,row\n2024-01-15,1,w,100.0\n",
        );
        let mut session = Session::new();

        let imported = import_file(&dir, "sales_q1_2024_w.csv", &mut session).unwrap();

        assert_eq!(1, imported);
    }
}
