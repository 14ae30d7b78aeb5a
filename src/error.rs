use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConvertError>;

// Everything here is fatal: the run either produces both output files or
// stops at the first failure.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The input file could not be opened or read as CSV.
    #[error("input error: {0}")]
    Input(#[from] csv::Error),

    /// A data row had too few columns or a field that failed to parse.
    #[error("line {line}: {message}")]
    Parse { line: u64, message: String },

    /// The input had a header but no data rows, so the bounding box is
    /// undefined.
    #[error("no data rows found after header row")]
    EmptyInput,

    /// An output file could not be created or written.
    #[error("output error: {0}")]
    Output(#[from] std::io::Error),
}
