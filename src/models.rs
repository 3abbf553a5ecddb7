//! Core data types for the staging and ranking pipeline.

/// Recognized resume document formats, keyed off the filename extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocFormat {
    Pdf,
    Docx,
}

impl DocFormat {
    /// Determines the format from the extension after the last `.`,
    /// case-insensitive. Returns `None` for missing or unrecognized
    /// extensions — this is the upload allow-list.
    pub fn from_filename(filename: &str) -> Option<DocFormat> {
        let ext = filename.rsplit_once('.')?.1;
        if ext.eq_ignore_ascii_case("pdf") {
            Some(DocFormat::Pdf)
        } else if ext.eq_ignore_ascii_case("docx") {
            Some(DocFormat::Docx)
        } else {
            None
        }
    }
}

/// An uploaded-but-not-yet-processed file sitting in the staging buffer.
///
/// The filename is already sanitized. Duplicate filenames coexist in the
/// buffer; the last one wins only at disk-write time.
#[derive(Debug, Clone)]
pub struct StagedFile {
    pub filename: String,
    pub content: Vec<u8>,
}

/// One ranked candidate produced by a batch commit. Ephemeral — rendered
/// into the response and discarded, never stored across requests.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub filename: String,
    /// Arithmetic mean of all CGPA/percentage observations found in the
    /// text; 0.0 when nothing matched. Always finite and non-negative.
    pub score: f64,
    /// Full extracted text, as decoded.
    pub text: String,
    /// Dense rank 1..N, assigned after the descending sort.
    pub rank: usize,
}
