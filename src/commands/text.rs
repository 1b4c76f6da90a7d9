use crate::page_range::{resolve_flat, FlatSelection};
use crate::pdf::text::{extract_text, extract_text_pages, format_pages};
use crate::pdf::PdfDocument;
use anyhow::{bail, Context, Result};
use std::path::Path;

/// Text for the pages named by `pages`. A blank specification means the
/// whole document.
pub fn text<P: AsRef<Path>>(path: P, pages: &str) -> Result<String> {
    let total_pages = PdfDocument::open(&path)?.page_count();

    match resolve_flat(pages, total_pages)? {
        FlatSelection::AllPages => extract_text(&path),
        FlatSelection::Pages(page_list) => {
            if page_list.is_empty() {
                bail!("No pages specified");
            }
            let texts = extract_text_pages(&path, &page_list)?;
            Ok(format_pages(&texts))
        }
    }
}

pub fn run<P: AsRef<Path>>(path: P, pages: &str, output: Option<&Path>) -> Result<()> {
    let text = text(&path, pages)?;

    match output {
        Some(output) => {
            std::fs::write(output, &text)
                .with_context(|| format!("Failed to write text: {}", output.display()))?;
            println!("Text saved to {}", output.display());
        }
        None => print!("{}", text),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pdf::fixtures::write_pdf;

    #[test]
    fn test_selected_pages_have_headers() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_pdf(dir.path(), "in.pdf", 4);

        let text = text(&path, "3,1").unwrap();
        let first = text.find("Page 1:").unwrap();
        let third = text.find("Page 3:").unwrap();
        assert!(first < third);
        assert!(!text.contains("Page 2:"));
    }

    #[test]
    fn test_blank_spec_is_whole_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_pdf(dir.path(), "in.pdf", 2);

        let text = text(&path, "").unwrap();
        assert!(!text.contains("Page 1:"));
        assert!(text.contains("Page 2"));
    }

    #[test]
    fn test_separators_only_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_pdf(dir.path(), "in.pdf", 2);

        assert!(text(&path, ",").is_err());
    }

    #[test]
    fn test_write_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_pdf(dir.path(), "in.pdf", 1);
        let output = dir.path().join("out.txt");

        run(&path, "1", Some(&output)).unwrap();
        assert!(std::fs::read_to_string(&output)
            .unwrap()
            .starts_with("Page 1:\n"));
    }
}
