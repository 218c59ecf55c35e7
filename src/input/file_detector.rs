//! File type detection based on extension

use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    Text,
    Markdown,
    Unknown,
}

pub fn detect_file_type(path: &Path) -> FileType {
    match path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
        .as_deref()
    {
        Some("txt") => FileType::Text,
        Some("md") | Some("markdown") => FileType::Markdown,
        _ => FileType::Unknown,
    }
}
