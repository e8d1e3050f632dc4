//! Resume upload parsing: PDF and DOCX to normalized plain text.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResumeFormat {
    Pdf,
    Docx,
}

impl ResumeFormat {
    /// Detects the format from the file extension, case-insensitively.
    pub fn from_file_name(name: &str) -> Option<Self> {
        let name = name.trim().to_ascii_lowercase();
        if name.ends_with(".pdf") {
            Some(ResumeFormat::Pdf)
        } else if name.ends_with(".docx") {
            Some(ResumeFormat::Docx)
        } else {
            None
        }
    }
}

#[derive(Debug, Error)]
pub enum ResumeError {
    #[error("Could not read PDF: {0}")]
    Pdf(#[from] pdf_extract::OutputError),

    #[error("Could not read DOCX: {0}")]
    Docx(#[from] docx_rs::ReaderError),

    #[error("Could not extract text from the file")]
    Empty,
}

/// Extracts and normalizes text. Blocking; call from `spawn_blocking`.
pub fn extract_text(format: ResumeFormat, bytes: &[u8]) -> Result<String, ResumeError> {
    let raw = match format {
        ResumeFormat::Pdf => pdf_extract::extract_text_from_mem(bytes)?,
        ResumeFormat::Docx => extract_docx_text(bytes)?,
    };

    let text = normalize_text(&raw);
    if text.is_empty() {
        return Err(ResumeError::Empty);
    }
    Ok(text)
}

/// Paragraph texts joined by newlines. Runs inside a paragraph are concatenated.
fn extract_docx_text(bytes: &[u8]) -> Result<String, docx_rs::ReaderError> {
    use docx_rs::{DocumentChild, ParagraphChild, RunChild};

    let docx = docx_rs::read_docx(bytes)?;
    let mut paragraphs: Vec<String> = Vec::new();

    for child in &docx.document.children {
        if let DocumentChild::Paragraph(para) = child {
            let mut line = String::new();
            for para_child in &para.children {
                if let ParagraphChild::Run(run) = para_child {
                    for run_child in &run.children {
                        if let RunChild::Text(t) = run_child {
                            line.push_str(&t.text);
                        }
                    }
                }
            }
            paragraphs.push(line);
        }
    }

    Ok(paragraphs.join("\n"))
}

/// CRLF → LF, runs of three or more newlines collapsed to two, outer whitespace trimmed.
pub fn normalize_text(raw: &str) -> String {
    let unix = raw.replace("\r\n", "\n");
    let mut out = String::with_capacity(unix.len());
    let mut newlines = 0usize;

    for ch in unix.chars() {
        if ch == '\n' {
            newlines += 1;
            if newlines <= 2 {
                out.push(ch);
            }
        } else {
            newlines = 0;
            out.push(ch);
        }
    }

    out.trim().to_string()
}
