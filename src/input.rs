//! Loading study material from text files, stdin, or PDFs.

use std::io::Read;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InputError {
    #[error("failed to read input: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("failed to extract PDF text: {0}")]
    PdfError(#[from] pdf_extract::OutputError),
    #[error("no text found in {0}")]
    Empty(String),
}

/// Load study material from a path, extracting text from PDFs by extension.
pub fn load_path(path: &Path) -> Result<String, InputError> {
    let is_pdf = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));

    let text = if is_pdf {
        extract_pdf_text(path)?
    } else {
        std::fs::read_to_string(path)?
    };

    if text.trim().is_empty() {
        return Err(InputError::Empty(path.display().to_string()));
    }
    Ok(text)
}

/// Read study material piped on stdin.
pub fn read_stdin() -> Result<String, InputError> {
    let mut text = String::new();
    std::io::stdin().read_to_string(&mut text)?;
    if text.trim().is_empty() {
        return Err(InputError::Empty("stdin".to_string()));
    }
    Ok(text)
}

/// Extract the text layer of a PDF file.
fn extract_pdf_text(path: &Path) -> Result<String, InputError> {
    let bytes = std::fs::read(path)?;
    let text = pdf_extract::extract_text_from_mem(&bytes)?;
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_text_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, "the mitochondria is the powerhouse of the cell").unwrap();

        let text = load_path(&path).unwrap();
        assert!(text.contains("powerhouse"));
    }

    #[test]
    fn test_blank_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blank.txt");
        std::fs::write(&path, "   \n\t").unwrap();

        assert!(matches!(load_path(&path), Err(InputError::Empty(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let path = Path::new("/nonexistent/notes.txt");
        assert!(matches!(load_path(path), Err(InputError::ReadError(_))));
    }
}
