use std::fs;

use vtkio::model::Vtk;

use crate::error::WriterError;

pub struct VtpWriter;  // Serializes geometry datasets to XML PolyData (.vtp) files

impl VtpWriter {
    pub fn write(vtk: Vtk, output_path: &str) -> Result<(), WriterError> {
        let mut buf = Vec::new();
        vtk.write_xml(&mut buf)?;          // Serialize into memory, then write out in one go
        fs::write(output_path, &buf)?;
        Ok(())
    }
}
