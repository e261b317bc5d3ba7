//! Spreadsheet interchange for participants and their cards.
//!
//! Two sheets, `Participantes` and `Cartones`, read and written as xlsx.
//! Import is lenient: only a missing participants sheet is an error.

mod error;
pub mod mapping;
pub mod workbook;
pub mod xlsx;

pub use error::ParseError;
pub use mapping::{
    from_workbook, from_workbook_with_rng, to_workbook, CARDS_SHEET, PARTICIPANTS_SHEET,
};
pub use workbook::{Cell, Record, Sheet, Table, Workbook};
pub use xlsx::{
    export_file_name, export_file_name_today, read_workbook, read_xlsx, write_workbook, write_xlsx,
};
