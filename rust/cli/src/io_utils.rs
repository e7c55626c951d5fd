//! File I/O utilities for reading hand lists.
//!
//! Functions return `Result<_, String>` so commands can wrap the message in
//! their own error context.

/// Read a text file, stripping a leading UTF-8 BOM if present.
///
/// # Example
///
/// ```rust,no_run
/// # use handrank_cli::io_utils::read_text;
/// let content = read_text("hands.txt").unwrap();
/// ```
pub fn read_text(path: &str) -> Result<String, String> {
    let content = std::fs::read_to_string(path).map_err(|e| format!("{}: {}", path, e))?;
    if let Some(stripped) = content.strip_prefix('\u{feff}') {
        return Ok(stripped.to_string());
    }
    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn strips_byte_order_mark() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "\u{feff}AH KH QH JH 10H").unwrap();
        let text = read_text(file.path().to_str().unwrap()).unwrap();
        assert_eq!(text, "AH KH QH JH 10H");
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = read_text("definitely/not/here.txt").unwrap_err();
        assert!(err.starts_with("definitely/not/here.txt:"));
    }
}
