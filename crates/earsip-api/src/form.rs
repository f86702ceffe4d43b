//! Multipart form bodies for uploads.
//!
//! Mail records, profile pictures and the organization logo are submitted as
//! `multipart/form-data`. [`FormData`] collects text fields and local file
//! paths; files are only read when the request is sent.

use std::path::{Path, PathBuf};

use reqwest::multipart::{Form, Part};

use crate::error::Result;

/// A single form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormPart {
    /// Plain text value.
    Text(String),
    /// File read from the local filesystem at send time.
    File(PathBuf),
}

/// Ordered multipart form body.
///
/// Repeated names are allowed (`attachments` is sent once per file).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData {
    parts: Vec<(String, FormPart)>,
}

impl FormData {
    /// Creates an empty form.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a text field.
    #[must_use]
    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.push_text(name, value);
        self
    }

    /// Adds a file field.
    #[must_use]
    pub fn file(mut self, name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        self.push_file(name, path);
        self
    }

    /// Adds a text field in place.
    pub fn push_text(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.parts
            .push((name.into(), FormPart::Text(value.into())));
    }

    /// Adds a file field in place.
    pub fn push_file(&mut self, name: impl Into<String>, path: impl Into<PathBuf>) {
        self.parts.push((name.into(), FormPart::File(path.into())));
    }

    /// Returns the first text value for `name`.
    #[must_use]
    pub fn text_value(&self, name: &str) -> Option<&str> {
        self.parts.iter().find_map(|(n, part)| match part {
            FormPart::Text(value) if n == name => Some(value.as_str()),
            _ => None,
        })
    }

    /// Returns every file path submitted under `name`.
    #[must_use]
    pub fn files(&self, name: &str) -> Vec<&Path> {
        self.parts
            .iter()
            .filter_map(|(n, part)| match part {
                FormPart::File(path) if n == name => Some(path.as_path()),
                _ => None,
            })
            .collect()
    }

    /// Iterates over all fields in insertion order.
    pub fn parts(&self) -> impl Iterator<Item = (&str, &FormPart)> {
        self.parts.iter().map(|(n, p)| (n.as_str(), p))
    }

    /// Number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// Returns true if the form has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Reads file parts from disk and builds the `reqwest` form.
    pub(crate) async fn into_multipart(self) -> Result<Form> {
        let mut form = Form::new();
        for (name, part) in self.parts {
            form = match part {
                FormPart::Text(value) => form.text(name, value),
                FormPart::File(path) => {
                    let bytes = tokio::fs::read(&path).await?;
                    let file_name = path
                        .file_name()
                        .map_or_else(|| "upload".to_string(), |n| n.to_string_lossy().into_owned());
                    let part = Part::bytes(bytes)
                        .file_name(file_name)
                        .mime_str(mime_for(&path))?;
                    form.part(name, part)
                }
            };
        }
        Ok(form)
    }
}

/// Content type guessed from the file extension.
fn mime_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "pdf" => "application/pdf",
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "doc" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "xls" => "application/vnd.ms-excel",
        "xlsx" => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        "txt" => "text/plain",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeated_file_fields() {
        let form = FormData::new()
            .text("number", "001/SK/2025")
            .file("attachments", "/tmp/a.pdf")
            .file("attachments", "/tmp/b.pdf");

        assert_eq!(form.len(), 3);
        assert_eq!(form.text_value("number"), Some("001/SK/2025"));
        assert_eq!(form.files("attachments").len(), 2);
        assert_eq!(form.text_value("attachments"), None);
    }

    #[test]
    fn test_mime_for() {
        assert_eq!(mime_for(Path::new("scan.PDF")), "application/pdf");
        assert_eq!(mime_for(Path::new("logo.png")), "image/png");
        assert_eq!(mime_for(Path::new("noext")), "application/octet-stream");
    }
}
