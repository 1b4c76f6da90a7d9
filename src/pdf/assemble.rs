//! Writing new documents out of existing pages.

use anyhow::{anyhow, bail, Context, Result};
use qpdf::QPdf;
use std::path::Path;

pub(crate) fn read_bytes(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).with_context(|| format!("Failed to read PDF: {}", path.display()))
}

pub(crate) fn load(path: &Path) -> Result<QPdf> {
    let bytes = read_bytes(path)?;
    QPdf::read_from_memory(&bytes).with_context(|| format!("Failed to open PDF: {}", path.display()))
}

pub(crate) fn write_bytes(path: &Path, bytes: &[u8]) -> Result<()> {
    std::fs::write(path, bytes)
        .with_context(|| format!("Failed to save PDF: {}", path.display()))
}

/// Write `pages` (0-indexed, in the given order, duplicates allowed) of
/// `input` into a new document at `output`.
///
/// Nothing is written unless every page is within the document.
pub fn write_pages<P: AsRef<Path>, Q: AsRef<Path>>(input: P, pages: &[u32], output: Q) -> Result<()> {
    let (input, output) = (input.as_ref(), output.as_ref());
    if pages.is_empty() {
        bail!("No pages specified");
    }

    let source = load(input)?;
    let total = source.get_num_pages()?;
    if let Some(&page) = pages.iter().find(|&&page| page >= total) {
        bail!("Page {} is out of range (1-{})", page + 1, total);
    }

    let dest = QPdf::empty();
    for &index in pages {
        let page = source
            .get_page(index)
            .ok_or_else(|| anyhow!("Page {} is out of range (1-{})", index + 1, total))?;
        let copied = dest.copy_from_foreign(&page);
        dest.add_page(&copied, false)?;
    }

    let bytes = dest.writer().write_to_memory()?;
    write_bytes(output, &bytes)?;

    tracing::info!(
        input = %input.display(),
        output = %output.display(),
        pages = pages.len(),
        "wrote pages"
    );
    Ok(())
}

/// Concatenate every page of every input, in argument order. Returns the
/// number of pages written.
pub fn merge<P: AsRef<Path>, Q: AsRef<Path>>(inputs: &[P], output: Q) -> Result<u32> {
    let output = output.as_ref();
    if inputs.is_empty() {
        bail!("No input files specified");
    }

    let dest = QPdf::empty();
    let mut total_pages = 0;

    // Sources must outlive the copy into dest
    let mut sources = Vec::with_capacity(inputs.len());
    for input in inputs {
        let input = input.as_ref();
        let source = load(input)?;
        let pages = source
            .get_pages()
            .with_context(|| format!("Failed to read pages of {}", input.display()))?;
        for page in &pages {
            let copied = dest.copy_from_foreign(page);
            dest.add_page(&copied, false)?;
        }
        total_pages += pages.len() as u32;
        sources.push(source);
    }

    let bytes = dest.writer().write_to_memory()?;
    write_bytes(output, &bytes)?;

    tracing::info!(
        files = inputs.len(),
        pages = total_pages,
        output = %output.display(),
        "merged"
    );
    Ok(total_pages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pdf::fixtures::{source_pages, write_pdf};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_write_pages_keeps_order_and_duplicates() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_pdf(dir.path(), "in.pdf", 5);
        let output = dir.path().join("out.pdf");

        write_pages(&input, &[4, 0, 2, 0], &output).unwrap();
        assert_eq!(source_pages(&output), vec![4, 0, 2, 0]);
    }

    #[test]
    fn test_write_pages_out_of_range_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_pdf(dir.path(), "in.pdf", 3);
        let output = dir.path().join("out.pdf");

        let err = write_pages(&input, &[0, 3], &output).unwrap_err();
        assert_eq!(err.to_string(), "Page 4 is out of range (1-3)");
        assert!(!output.exists());
    }

    #[test]
    fn test_write_pages_empty_selection() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_pdf(dir.path(), "in.pdf", 3);
        let output = dir.path().join("out.pdf");

        assert!(write_pages(&input, &[], &output).is_err());
        assert!(!output.exists());
    }

    #[test]
    fn test_merge_concatenates_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let first = write_pdf(dir.path(), "a.pdf", 2);
        let second = write_pdf(dir.path(), "b.pdf", 3);
        let output = dir.path().join("merged.pdf");

        let pages = merge(&[&first, &second], &output).unwrap();
        assert_eq!(pages, 5);
        assert_eq!(source_pages(&output), vec![0, 1, 0, 1, 2]);
    }

    #[test]
    fn test_merge_requires_inputs() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("merged.pdf");
        let inputs: [&Path; 0] = [];

        assert!(merge(&inputs, &output).is_err());
        assert!(!output.exists());
    }

    #[test]
    fn test_merge_missing_input_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let first = write_pdf(dir.path(), "a.pdf", 2);
        let missing = dir.path().join("missing.pdf");
        let output = dir.path().join("merged.pdf");

        assert!(merge(&[&first, &missing], &output).is_err());
        assert!(!output.exists());
    }
}
