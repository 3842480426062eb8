use csv::ReaderBuilder;
use std::{fs::File, path::Path};
use tracing::{debug, info};

use crate::error::{FeedError, ProcessingError};

/// The fully loaded input: one header row plus every data row, in whatever
/// order they currently hold. Fields are raw strings straight from the file,
/// no coercion, no validation.
#[derive(Debug)]
pub struct Dataset {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Dataset {
    /// Read the whole CSV into memory. The first record is the header; it is
    /// kept for the echoing variant and skipped for transmission. Any fault
    /// while reading aborts the load — there is no partial-row recovery.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, FeedError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| FeedError::FileAccess {
            path: path.to_path_buf(),
            source,
        })?;
        info!("opened for reading: {}", path.display());

        // Ragged rows are accepted here; field counts are only enforced by
        // the bracketed renderer, at send time.
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(file);

        let mut records = reader.records();
        let header: Vec<String> = match records.next() {
            Some(record) => {
                let record = record.map_err(ProcessingError::Csv)?;
                record.iter().map(str::to_string).collect()
            }
            None => Vec::new(),
        };
        info!(header = ?header, "skipped header row");

        let mut rows = Vec::new();
        for record in records {
            let record = record.map_err(ProcessingError::Csv)?;
            rows.push(record.iter().map(str::to_string).collect());
        }
        debug!(rows = rows.len(), "rows read");

        Ok(Dataset { header, rows })
    }

    /// Invert the row order in place so the oldest record streams first. The
    /// dataset is never mutated again after this.
    pub fn reverse(&mut self) {
        self.rows.reverse();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_csv(lines: &[&str]) -> Result<NamedTempFile> {
        let mut file = NamedTempFile::new()?;
        for line in lines {
            writeln!(file, "{line}")?;
        }
        file.flush()?;
        Ok(file)
    }

    #[test]
    fn load_splits_header_from_rows() -> Result<()> {
        let file = write_csv(&[
            "Year,Month,Day,Time,TempF",
            "2022,1,1,00:00,30.1",
            "2022,1,1,01:00,29.7",
        ])?;
        let dataset = Dataset::load(file.path())?;
        assert_eq!(dataset.header, vec!["Year", "Month", "Day", "Time", "TempF"]);
        assert_eq!(dataset.rows.len(), 2);
        assert_eq!(dataset.rows[0][4], "30.1");
        Ok(())
    }

    #[test]
    fn reverse_puts_oldest_row_first() -> Result<()> {
        let file = write_csv(&["h1,h2", "newest,1", "middle,2", "oldest,3"])?;
        let mut dataset = Dataset::load(file.path())?;
        dataset.reverse();
        assert_eq!(dataset.rows[0][0], "oldest");
        assert_eq!(dataset.rows[2][0], "newest");
        Ok(())
    }

    #[test]
    fn header_only_file_yields_zero_rows() -> Result<()> {
        let file = write_csv(&["Year,Month,Day,Time,TempF"])?;
        let dataset = Dataset::load(file.path())?;
        assert!(dataset.rows.is_empty());
        Ok(())
    }

    #[test]
    fn ragged_rows_load_without_error() -> Result<()> {
        let file = write_csv(&["a,b,c", "1,2,3", "1,2"])?;
        let dataset = Dataset::load(file.path())?;
        assert_eq!(dataset.rows[1].len(), 2);
        Ok(())
    }

    #[test]
    fn missing_file_is_a_file_access_error() {
        let err = Dataset::load("no/such/file.csv").unwrap_err();
        assert!(matches!(err, FeedError::FileAccess { .. }));
    }
}
