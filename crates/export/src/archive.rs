use crate::error::ExportError;
use std::collections::HashSet;
use std::io::{Cursor, Write};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// An in-memory zip of card images under a single folder.
pub struct CardArchive {
    writer: ZipWriter<Cursor<Vec<u8>>>,
    folder: String,
    names: HashSet<String>,
}

impl CardArchive {
    pub fn new(folder: &str) -> Result<Self, ExportError> {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        writer.add_directory(format!("{}/", folder), options())?;
        Ok(Self {
            writer,
            folder: folder.to_string(),
            names: HashSet::new(),
        })
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Adds an entry and returns its path inside the archive. A name already
    /// used gets a numeric suffix so no image is overwritten.
    pub fn add(&mut self, file_name: &str, bytes: &[u8]) -> Result<String, ExportError> {
        let name = self.unique_name(file_name);
        let path = format!("{}/{}", self.folder, name);
        self.writer.start_file(path.as_str(), options())?;
        self.writer.write_all(bytes)?;
        self.names.insert(name);
        Ok(path)
    }

    pub fn finish(self) -> Result<Vec<u8>, ExportError> {
        Ok(self.writer.finish()?.into_inner())
    }

    fn unique_name(&self, file_name: &str) -> String {
        if !self.names.contains(file_name) {
            return file_name.to_string();
        }
        let (stem, ext) = match file_name.rsplit_once('.') {
            Some((stem, ext)) => (stem, format!(".{}", ext)),
            None => (file_name, String::new()),
        };
        (2..)
            .map(|n| format!("{}_{}{}", stem, n, ext))
            .find(|candidate| !self.names.contains(candidate))
            .unwrap_or_else(|| file_name.to_string())
    }
}

fn options() -> SimpleFileOptions {
    SimpleFileOptions::default().compression_method(CompressionMethod::Deflated)
}
