use crate::page_range::resolve_compact;
use crate::pdf::{assemble, PdfDocument};
use anyhow::{bail, Result};
use std::path::Path;

/// Export the pages named by `pages` (e.g. "1,3,5-7") to `output`, in the order
/// given. Returns the number of pages written.
pub fn split<P: AsRef<Path>, Q: AsRef<Path>>(input: P, pages: &str, output: Q) -> Result<u32> {
    let total_pages = PdfDocument::open(&input)?.page_count();

    let selection = resolve_compact(pages, total_pages)?;
    if selection.is_empty() {
        bail!("No pages specified");
    }

    let page_list = selection.expand();
    assemble::write_pages(&input, &page_list, &output)?;
    Ok(page_list.len() as u32)
}

pub fn run<P: AsRef<Path>, Q: AsRef<Path>>(input: P, pages: &str, output: Q) -> Result<()> {
    let count = split(input, pages, &output)?;

    println!(
        "Extracted {} page(s) to {}",
        count,
        output.as_ref().display()
    );

    Ok(())
}
