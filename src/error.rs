use std::fmt;
use std::io;    // I/O error type wrapped by every stage error

#[derive(Debug)]
pub enum ParseError {                               // Errors raised while reading the solver description file
    IoError(io::Error),                             // File I/O errors (e.g., file not found)
    FormatError(String),                            // Malformed directive lines (wrong token count, bad layout)
    NumberParseError(String),                       // Failed number conversions (invalid float/int strings)
}

// Implement automatic conversion from std::io::Error to our ParseError
// This allows us to use the ? operator with file operations
impl From<io::Error> for ParseError {
    fn from(err: io::Error) -> Self {
        ParseError::IoError(err)
    }
}

// Implement automatic conversion from float parsing errors
impl From<std::num::ParseFloatError> for ParseError {
    fn from(err: std::num::ParseFloatError) -> Self {
        ParseError::NumberParseError(format!("Float parse error: {}", err))
    }
}

// Implement automatic conversion from integer parsing errors
impl From<std::num::ParseIntError> for ParseError {
    fn from(err: std::num::ParseIntError) -> Self {
        ParseError::NumberParseError(format!("Int parse error: {}", err))
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::IoError(err) =>
                write!(f, "Solver file I/O error: {}", err),
            ParseError::FormatError(msg) =>
                write!(f, "Malformed solver file: {}", msg),
            ParseError::NumberParseError(msg) =>
                write!(f, "Invalid number in solver file: {}", msg),
        }
    }
}

// Errors raised while reading per-segment data files
#[derive(Debug)]
pub enum DataError {
    IoError(io::Error),                             // Data file missing or unreadable
    UnknownSegment(String),                         // Requested segment name is not in the registry
    NumberParseError(String),                       // Non-numeric token in a data row
}

impl From<io::Error> for DataError {
    fn from(err: io::Error) -> Self {
        DataError::IoError(err)
    }
}

impl From<std::num::ParseFloatError> for DataError {
    fn from(err: std::num::ParseFloatError) -> Self {
        DataError::NumberParseError(format!("Float parse error: {}", err))
    }
}

impl fmt::Display for DataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataError::IoError(err) =>
                write!(f, "Data file I/O error: {}", err),
            DataError::UnknownSegment(name) =>
                write!(f, "No segment named: {}", name),
            DataError::NumberParseError(msg) =>
                write!(f, "Invalid number in data file: {}", msg),
        }
    }
}

// Writer errors for output operations
#[derive(Debug)]
pub enum WriterError {
    IoError(io::Error),
    MissingData(String),                            // Configured segment or quantity has no stored table
    IndexMismatch(String),                          // Output-times length exceeds the recorded data
    VtkError(String),                               // VTK serialization failure
}

impl From<io::Error> for WriterError {
    fn from(err: io::Error) -> Self {
        WriterError::IoError(err)
    }
}

impl From<vtkio::Error> for WriterError {
    fn from(err: vtkio::Error) -> Self {
        WriterError::VtkError(format!("{:?}", err))
    }
}

impl fmt::Display for WriterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WriterError::IoError(err) =>
                write!(f, "Output file I/O error: {}", err),
            WriterError::MissingData(msg) =>
                write!(f, "Missing data: {}", msg),
            WriterError::IndexMismatch(msg) =>
                write!(f, "Index mismatch: {}", msg),
            WriterError::VtkError(msg) =>
                write!(f, "VTK write error: {}", msg),
        }
    }
}
