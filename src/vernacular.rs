//! Filters the vernacular-name table down to an allow-listed set of
//! languages. Kept rows are re-emitted byte for byte, so the output stays a
//! verbatim subset of the input.

use crate::error::{BackboneError, Result};
use crate::progress::ProgressObserver;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

pub const VERNACULAR_INPUT: &str = "VernacularName.tsv";
pub const VERNACULAR_OUTPUT: &str = "VernacularName-new.tsv";

/// Language codes whose vernacular names survive the filter.
pub const KEPT_LANGUAGES: [&str; 2] = ["sv", "en"];

/// Field positions in the vernacular-name table.
struct VernacularColumns {
    language: usize,
    source: usize,
}

const COLUMNS: VernacularColumns = VernacularColumns {
    language: 2,
    source: 7,
};

#[derive(Debug)]
pub struct VernacularSummary {
    pub rows_processed: u64,
    pub rows_kept: u64,
}

/// Streams `VernacularName.tsv` line by line and writes the kept subset to
/// `VernacularName-new.tsv`. The first line is always kept as the header;
/// every later line is kept iff its language field is in [`KEPT_LANGUAGES`].
pub fn filter_vernacular_names(
    src_dir: &Path,
    observer: &mut dyn ProgressObserver,
) -> Result<VernacularSummary> {
    let input_path = src_dir.join(VERNACULAR_INPUT);
    let output_path = src_dir.join(VERNACULAR_OUTPUT);

    let infile = File::open(&input_path).map_err(|source| BackboneError::FileOpen {
        path: input_path.clone(),
        source,
    })?;
    let outfile = File::create(&output_path).map_err(|source| BackboneError::FileOpen {
        path: output_path.clone(),
        source,
    })?;

    let mut reader = BufReader::new(infile);
    let mut writer = BufWriter::new(outfile);

    let mut line = String::new();
    let mut rows_processed: u64 = 0;
    let mut rows_kept: u64 = 0;

    loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            break;
        }

        // The split is inspection-only; the retained output is the raw line.
        let fields: Vec<&str> = line.split('\t').collect();
        let language = field(&fields, "language", COLUMNS.language, rows_processed + 1)?;
        // The source field takes no part in the decision, but resolving it
        // keeps the at-least-8-fields contract on every row.
        let _source = field(&fields, "source", COLUMNS.source, rows_processed + 1)?;

        if rows_processed == 0 || KEPT_LANGUAGES.contains(&language) {
            writer.write_all(line.as_bytes())?;
            rows_kept += 1;
            observer.row_kept(rows_kept);
        }

        rows_processed += 1;
        observer.row_processed(rows_processed);
    }

    writer.flush()?;

    Ok(VernacularSummary {
        rows_processed,
        rows_kept,
    })
}

fn field<'r>(
    fields: &[&'r str],
    column: &'static str,
    index: usize,
    row: u64,
) -> Result<&'r str> {
    fields
        .get(index)
        .copied()
        .ok_or(BackboneError::FieldOutOfRange {
            file: VERNACULAR_INPUT,
            column,
            index,
            row,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::SilentProgress;
    use std::fs;
    use tempfile::TempDir;

    const HEADER: &str = "taxonID\tvernacularName\tlanguage\tcountry\tcountryCode\tsex\tlifeStage\tsource\n";

    fn row(language: &str, name: &str) -> String {
        format!("t1\t{}\t{}\t\t\t\t\tsome source\n", name, language)
    }

    fn run_filter(input: &str) -> (TempDir, Result<VernacularSummary>) {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(VERNACULAR_INPUT), input).unwrap();
        let result = filter_vernacular_names(dir.path(), &mut SilentProgress);
        (dir, result)
    }

    fn read_output(dir: &TempDir) -> String {
        fs::read_to_string(dir.path().join(VERNACULAR_OUTPUT)).unwrap()
    }

    #[test]
    fn test_keeps_header_and_allowed_languages() {
        let input = format!(
            "{}{}{}{}",
            HEADER,
            row("sv", "talgoxe"),
            row("fr", "mésange charbonnière"),
            row("en", "great tit"),
        );
        let (dir, result) = run_filter(&input);
        let summary = result.unwrap();
        assert_eq!(summary.rows_processed, 4);
        assert_eq!(summary.rows_kept, 3);
        assert_eq!(
            read_output(&dir),
            format!("{}{}{}", HEADER, row("sv", "talgoxe"), row("en", "great tit"))
        );
    }

    #[test]
    fn test_header_kept_regardless_of_language() {
        // First line passes untouched even though its language field is the
        // literal column name.
        let (dir, result) = run_filter(HEADER);
        let summary = result.unwrap();
        assert_eq!(summary.rows_kept, 1);
        assert_eq!(read_output(&dir), HEADER);
    }

    #[test]
    fn test_language_match_is_exact() {
        let input = format!(
            "{}{}{}{}",
            HEADER,
            row("sve", "x"),
            row("SV", "y"),
            row("en-GB", "z"),
        );
        let (dir, result) = run_filter(&input);
        let summary = result.unwrap();
        assert_eq!(summary.rows_kept, 1);
        assert_eq!(read_output(&dir), HEADER);
    }

    #[test]
    fn test_kept_lines_are_verbatim() {
        // Odd spacing and a CRLF terminator must survive untouched.
        let crlf_row = "t2\t great  tit \ten\t\t\t\t\tsrc\r\n";
        let input = format!("{}{}", HEADER, crlf_row);
        let (dir, result) = run_filter(&input);
        result.unwrap();
        assert_eq!(read_output(&dir), format!("{}{}", HEADER, crlf_row));
    }

    #[test]
    fn test_short_row_aborts() {
        let input = format!("{}t1\tname\tsv\n", HEADER);
        let (_dir, result) = run_filter(&input);
        assert!(matches!(
            result,
            Err(BackboneError::FieldOutOfRange { column, index: 7, row: 2, .. })
                if column == "source"
        ));
    }

    #[test]
    fn test_short_header_aborts() {
        // The header is only presumed; it still has to carry all 8 fields.
        let (_dir, result) = run_filter("taxonID\tvernacularName\tlanguage\n");
        assert!(matches!(
            result,
            Err(BackboneError::FieldOutOfRange { row: 1, .. })
        ));
    }

    #[test]
    fn test_observer_sees_processed_and_kept_counts() {
        struct Counting {
            processed: u64,
            kept: u64,
        }
        impl ProgressObserver for Counting {
            fn row_processed(&mut self, rows: u64) {
                self.processed = rows;
            }
            fn row_kept(&mut self, rows: u64) {
                self.kept = rows;
            }
        }

        let input = format!("{}{}{}", HEADER, row("fr", "a"), row("en", "b"));
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(VERNACULAR_INPUT), input).unwrap();

        let mut counting = Counting { processed: 0, kept: 0 };
        let summary = filter_vernacular_names(dir.path(), &mut counting).unwrap();
        assert_eq!(counting.processed, summary.rows_processed);
        assert_eq!(counting.kept, summary.rows_kept);
        assert!(summary.rows_kept <= summary.rows_processed);
    }

    #[test]
    fn test_missing_input_reports_path() {
        let dir = TempDir::new().unwrap();
        let result = filter_vernacular_names(dir.path(), &mut SilentProgress);
        assert!(matches!(
            result,
            Err(BackboneError::FileOpen { ref path, .. }) if path.ends_with(VERNACULAR_INPUT)
        ));
    }
}
