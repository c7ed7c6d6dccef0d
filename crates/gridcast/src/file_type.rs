//! Output file types and their extensions

use std::fmt;
use std::path::Path;

/// File types reporting output can be written as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileType {
    Html,
    Txt,
    Xlsx,
    Xls,
    Json,
}

/// All file types, for iteration over the closed set
pub const ALL_FILE_TYPES: [FileType; 5] = [
    FileType::Html,
    FileType::Txt,
    FileType::Xlsx,
    FileType::Xls,
    FileType::Json,
];

impl FileType {
    /// Get the file extension, including the leading dot
    pub fn extension(&self) -> &'static str {
        match self {
            FileType::Html => ".html",
            FileType::Txt => ".txt",
            FileType::Xlsx => ".xlsx",
            FileType::Xls => ".xls",
            FileType::Json => ".json",
        }
    }

    /// Determine the file type from a path's extension (case-insensitive)
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<FileType> {
        let ext = path.as_ref().extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "html" => Some(FileType::Html),
            "txt" => Some(FileType::Txt),
            "xlsx" => Some(FileType::Xlsx),
            "xls" => Some(FileType::Xls),
            "json" => Some(FileType::Json),
            _ => None,
        }
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Extension without the dot doubles as the display name
        write!(f, "{}", &self.extension()[1..])
    }
}
