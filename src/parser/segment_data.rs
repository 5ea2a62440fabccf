use std::fs::File;
use std::io::{BufRead, BufReader};

use crate::database::SolverModel;
use crate::error::DataError;
use crate::params::Parameters;

pub struct SegmentDataReader;  // Reader for per-segment, per-quantity data files

impl SegmentDataReader {
    /// Read every configured quantity file for `segment_name` into the
    /// segment's data tables. The segment must already be registered; the
    /// check happens before any file I/O.
    pub fn read(
        params: &Parameters,
        model: &mut SolverModel,
        segment_name: &str,
    ) -> Result<(), DataError> {
        log::info!("Read segment data, segment name: {}", segment_name);

        let segment = model
            .segment_mut(segment_name)
            .ok_or_else(|| DataError::UnknownSegment(segment_name.to_string()))?;

        for data_name in &params.data_names {
            log::info!("Data name: {}", data_name);
            let file_name = params.data_file_path(segment_name, data_name);
            let (table, num_rows, num_cols) = Self::read_data_file(&file_name)?;
            log::info!("Number of rows read: {}", num_rows);
            log::info!("Number of columns read: {}", num_cols);

            // Replace semantics: a repeated read overwrites the stored table
            segment.data.insert(data_name.clone(), table);
        }

        Ok(())
    }

    /// Read one data file into a table of float rows. Returns the table
    /// together with the rows-read counter and the inferred column count.
    ///
    /// Every physical line increments the counter, but blank lines contribute
    /// no data row, so the counter may exceed the stored row count. The
    /// column count follows the last non-empty row; rows are not validated
    /// for consistent width.
    pub fn read_data_file(file_name: &str) -> Result<(Vec<Vec<f64>>, usize, usize), DataError> {
        let file = File::open(file_name)?;
        let reader = BufReader::new(file);

        let mut table: Vec<Vec<f64>> = Vec::new();
        let mut num_rows = 0;
        let mut num_cols = 0;

        for line in reader.lines() {
            let line = line?;
            num_rows += 1;
            let tokens: Vec<&str> = line.split_whitespace().collect();
            if tokens.is_empty() {
                continue;
            }

            let values: Vec<f64> = tokens
                .iter()
                .map(|v| v.parse::<f64>())
                .collect::<Result<_, _>>()?;       // ? maps to NumberParseError

            num_cols = values.len();
            table.push(values);
        }

        Ok((table, num_rows, num_cols))
    }
}
