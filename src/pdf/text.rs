use anyhow::{bail, Context, Result};
use std::collections::BTreeMap;
use std::path::Path;

fn page_texts(path: &Path) -> Result<Vec<String>> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("Failed to read PDF: {}", path.display()))?;

    pdf_extract::extract_text_from_mem_by_pages(&bytes)
        .with_context(|| format!("Failed to extract text from PDF: {}", path.display()))
}

/// Text of the whole document, each page followed by a blank line
pub fn extract_text<P: AsRef<Path>>(path: P) -> Result<String> {
    let mut text = String::new();
    for page in page_texts(path.as_ref())? {
        text.push_str(&page);
        text.push_str("\n\n");
    }
    Ok(text)
}

/// Text of the given 0-indexed pages, keyed by page. Repeated pages appear
/// once.
pub fn extract_text_pages<P: AsRef<Path>>(path: P, pages: &[u32]) -> Result<BTreeMap<u32, String>> {
    let texts = page_texts(path.as_ref())?;
    let total = texts.len() as u32;

    let mut result = BTreeMap::new();
    for &page in pages {
        let Some(text) = texts.get(page as usize) else {
            bail!("Page {} is out of range (1-{})", page + 1, total);
        };
        result.insert(page, text.clone());
    }
    Ok(result)
}

/// Render per-page text with 1-indexed "Page N:" headers.
pub fn format_pages(pages: &BTreeMap<u32, String>) -> String {
    let mut out = String::new();
    for (page, text) in pages {
        out.push_str(&format!("Page {}:\n{}\n\n", page + 1, text));
    }
    out
}
