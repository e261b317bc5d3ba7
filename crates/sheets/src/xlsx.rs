use crate::error::ParseError;
use crate::mapping;
use crate::workbook::{Cell, Sheet, Workbook};
use bingo_types::Participant;
use calamine::{open_workbook_from_rs, Data, Reader, Xlsx};
use chrono::{Local, NaiveDate};
use rust_xlsxwriter::Format;
use std::io::Cursor;

/// `bingo_participantes_2024-05-01.xlsx`
pub fn export_file_name(date: NaiveDate) -> String {
    format!("bingo_participantes_{}.xlsx", date.format("%Y-%m-%d"))
}

pub fn export_file_name_today() -> String {
    export_file_name(Local::now().date_naive())
}

/// Serializes a workbook to xlsx bytes. The first row of every sheet is
/// written bold.
pub fn write_workbook(workbook: &Workbook) -> Result<Vec<u8>, ParseError> {
    let mut out = rust_xlsxwriter::Workbook::new();
    let bold = Format::new().set_bold();

    for sheet in &workbook.sheets {
        let worksheet = out.add_worksheet();
        worksheet.set_name(&sheet.name)?;
        for (r, row) in sheet.rows.iter().enumerate() {
            let r = r as u32;
            for (c, cell) in row.iter().enumerate() {
                let c = c as u16;
                match cell {
                    Cell::Empty => {}
                    Cell::Text(s) if r == 0 => {
                        worksheet.write_string_with_format(r, c, s, &bold)?;
                    }
                    Cell::Text(s) => {
                        worksheet.write_string(r, c, s)?;
                    }
                    Cell::Number(n) => {
                        worksheet.write_number(r, c, *n)?;
                    }
                }
            }
        }
    }

    Ok(out.save_to_buffer()?)
}

/// Reads every sheet of an xlsx document, in workbook order.
pub fn read_workbook(bytes: &[u8]) -> Result<Workbook, ParseError> {
    let mut source: Xlsx<_> = open_workbook_from_rs(Cursor::new(bytes))?;
    let mut workbook = Workbook::new();

    for name in source.sheet_names() {
        let range = source.worksheet_range(&name)?;
        let mut sheet = Sheet::new(name);
        for row in range.rows() {
            sheet.push_row(row.iter().map(to_cell).collect());
        }
        log::debug!("Read sheet '{}' with {} row(s)", sheet.name, sheet.rows.len());
        workbook.push(sheet);
    }
    Ok(workbook)
}

fn to_cell(data: &Data) -> Cell {
    match data {
        Data::Empty | Data::Error(_) => Cell::Empty,
        Data::Int(i) => Cell::Number(*i as f64),
        Data::Float(f) => Cell::Number(*f),
        Data::String(s) => Cell::Text(s.clone()),
        other => Cell::Text(other.to_string()),
    }
}

pub fn write_xlsx(participants: &[Participant]) -> Result<Vec<u8>, ParseError> {
    write_workbook(&mapping::to_workbook(participants))
}

pub fn read_xlsx(bytes: &[u8]) -> Result<Vec<Participant>, ParseError> {
    mapping::from_workbook(&read_workbook(bytes)?)
}
