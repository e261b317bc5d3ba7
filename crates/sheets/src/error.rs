use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Sheet '{0}' not found")]
    MissingSheet(String),

    #[error("Failed to read workbook: {0}")]
    Read(#[from] calamine::XlsxError),

    #[error("Failed to write workbook: {0}")]
    Write(#[from] rust_xlsxwriter::XlsxError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
