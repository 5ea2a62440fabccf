use std::fs::File;
use std::io::{BufWriter, Write};

use crate::database::SolverModel;
use crate::error::WriterError;
use crate::params::Parameters;

pub struct TabularWriter;  // Writer for the per-quantity delimited output files

impl TabularWriter {
    /// Write one delimited file per configured quantity.
    ///
    /// The header row holds the configured segment names. Each data row holds
    /// an output time followed by, for each configured segment, entry `i` of
    /// the last recorded row of that segment's table for the quantity.
    /// Fields are comma separated with no quoting; existing files are
    /// overwritten.
    pub fn write(params: &Parameters, model: &SolverModel) -> Result<(), WriterError> {
        for data_name in &params.data_names {
            log::info!("Write data name: {}", data_name);
            let file_name = params.output_file_path(data_name);
            let file = File::create(&file_name)?;
            let mut writer = BufWriter::new(file);

            // Header: only the segments configured for output, not the full registry
            writeln!(writer, "{}", params.segments.join(","))?;

            for (i, time) in params.times.iter().enumerate() {
                write!(writer, "{}", time)?;
                for name in &params.segments {
                    let value = Self::segment_value(model, name, data_name, i)?;
                    write!(writer, ",{}", value)?;
                }
                writeln!(writer)?;
            }

            writer.flush()?;
        }

        Ok(())
    }

    // Entry `index` of the last recorded row for one segment and quantity.
    fn segment_value(
        model: &SolverModel,
        segment_name: &str,
        data_name: &str,
        index: usize,
    ) -> Result<f64, WriterError> {
        let segment = model.segment(segment_name).ok_or_else(|| {
            WriterError::MissingData(format!("No segment named: {}", segment_name))
        })?;

        let table = segment.data.get(data_name).ok_or_else(|| {
            WriterError::MissingData(format!(
                "Segment '{}' has no data for '{}'",
                segment_name, data_name
            ))
        })?;

        let last_row = table.last().ok_or_else(|| {
            WriterError::MissingData(format!(
                "Segment '{}' has an empty table for '{}'",
                segment_name, data_name
            ))
        })?;

        last_row.get(index).copied().ok_or_else(|| {
            WriterError::IndexMismatch(format!(
                "Time index {} is out of range for segment '{}' ({} values recorded for '{}')",
                index,
                segment_name,
                last_row.len(),
                data_name
            ))
        })
    }
}
