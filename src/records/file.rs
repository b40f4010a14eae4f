// src/records/file.rs
// =============================================================================
// CSV input and output.
//
// Input:  no header, one `rank,domain` pair per line, in file order.
// Output: `rank,domain,favicon_url` header followed by one row per result.
//
// The path-based functions wrap csv errors into CrawlError with the path
// attached; the reader/writer based ones are what the tests drive.
// =============================================================================

use super::{FaviconResult, InputRow};
use crate::error::CrawlError;
use std::io::{Read, Write};
use std::path::Path;

const OUTPUT_HEADER: [&str; 3] = ["rank", "domain", "favicon_url"];

/// Reads every row of the input file, keeping file order.
pub fn read_domains(path: &Path) -> Result<Vec<InputRow>, CrawlError> {
    let wrap = |source: csv::Error| CrawlError::Input {
        path: path.to_path_buf(),
        source,
    };
    let file = std::fs::File::open(path).map_err(|e| wrap(csv::Error::from(e)))?;
    read_domains_from(file).map_err(wrap)
}

pub(crate) fn read_domains_from<R: Read>(reader: R) -> Result<Vec<InputRow>, csv::Error> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .trim(csv::Trim::All)
        .from_reader(reader);

    // collect() stops at the first malformed row and hands back its error
    reader.deserialize().collect()
}

/// Writes the (already sorted) results to `path`, replacing the file.
pub fn write_results(path: &Path, results: &[FaviconResult]) -> Result<(), CrawlError> {
    let file = std::fs::File::create(path).map_err(|e| CrawlError::Output {
        path: path.to_path_buf(),
        source: csv::Error::from(e),
    })?;
    write_results_to(file, results).map_err(|source| CrawlError::Output {
        path: path.to_path_buf(),
        source,
    })
}

/// Writes the header and one row per result to any writer.
pub fn write_results_to<W: Write>(writer: W, results: &[FaviconResult]) -> Result<(), csv::Error> {
    // Header is written by hand so an empty run still produces it
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    writer.write_record(OUTPUT_HEADER)?;
    for result in results {
        writer.serialize(result)?;
    }
    writer.flush()?;
    Ok(())
}
