//! Cleans redundant authorship suffixes out of the taxon table.
//!
//! Upstream exports duplicate the `scientificNameAuthorship` value at the
//! end of `scientificName` (e.g. `Homo sapiens Linnaeus` + `Linnaeus`); the
//! import pipeline expects the bare name.

use crate::error::{BackboneError, Result};
use crate::progress::ProgressObserver;
use csv::{QuoteStyle, ReaderBuilder, StringRecord, WriterBuilder};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

pub const TAXON_INPUT: &str = "Taxon-lab.tsv";
pub const TAXON_OUTPUT: &str = "Taxon-new.tsv";

/// Field positions in the taxon table. The table carries no header that is
/// consulted; indices are fixed by upstream convention.
struct TaxonColumns {
    scientific_name: usize,
    authorship: usize,
}

const COLUMNS: TaxonColumns = TaxonColumns {
    scientific_name: 5,
    authorship: 6,
};

#[derive(Debug)]
pub struct TaxonSummary {
    pub rows_processed: u64,
}

/// Streams `Taxon-lab.tsv` record by record and writes `Taxon-new.tsv` with
/// the authorship suffix stripped from the scientific name wherever the name
/// ends in exactly the authorship string. All other fields pass through
/// unchanged, in order.
pub fn clean_taxon_names(
    src_dir: &Path,
    observer: &mut dyn ProgressObserver,
) -> Result<TaxonSummary> {
    let input_path = src_dir.join(TAXON_INPUT);
    let output_path = src_dir.join(TAXON_OUTPUT);

    let infile = File::open(&input_path).map_err(|source| BackboneError::FileOpen {
        path: input_path.clone(),
        source,
    })?;
    let outfile = File::create(&output_path).map_err(|source| BackboneError::FileOpen {
        path: output_path.clone(),
        source,
    })?;

    // Raw tab-separated text: no quoting rules, no header row, field counts
    // may vary per record (short rows are rejected below, not by the reader).
    let mut reader = ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .quoting(false)
        .flexible(true)
        .from_reader(BufReader::new(infile));
    let mut writer = WriterBuilder::new()
        .delimiter(b'\t')
        .quote_style(QuoteStyle::Never)
        .flexible(true)
        .from_writer(BufWriter::new(outfile));

    let mut rows_processed: u64 = 0;
    let mut record = StringRecord::new();

    while reader.read_record(&mut record)? {
        rows_processed += 1;

        let scientific_name = field(&record, "scientificName", COLUMNS.scientific_name, rows_processed)?;
        let authorship = field(&record, "scientificNameAuthorship", COLUMNS.authorship, rows_processed)?;

        if !authorship.is_empty() && scientific_name.ends_with(authorship) {
            let bare_name = scientific_name[..scientific_name.len() - authorship.len()]
                .trim()
                .to_string();
            let mut fields: Vec<String> = record.iter().map(str::to_string).collect();
            fields[COLUMNS.scientific_name] = bare_name;
            writer.write_record(&fields)?;
        } else {
            writer.write_record(&record)?;
        }

        observer.row_processed(rows_processed);
    }

    writer.flush()?;

    Ok(TaxonSummary { rows_processed })
}

/// Positional access with the table's hard-failure contract: a missing index
/// aborts the run, naming the column and 1-based row.
fn field<'r>(
    record: &'r StringRecord,
    column: &'static str,
    index: usize,
    row: u64,
) -> Result<&'r str> {
    record.get(index).ok_or(BackboneError::FieldOutOfRange {
        file: TAXON_INPUT,
        column,
        index,
        row,
    })
}
