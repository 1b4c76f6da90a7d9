use crate::page_order::{parse_move, PageOrder};
use crate::page_range::resolve_flat;
use crate::pdf::{assemble, PdfDocument};
use anyhow::{bail, Result};
use std::path::Path;

/// Rearrange the pages of `input`.
///
/// `order` is a page specification giving the starting order (the document
/// order when absent or blank); each entry of `moves` is then applied as a
/// "FROM:TO" move of 1-indexed positions. Returns the final 0-indexed order.
pub fn reorder<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    order: Option<&str>,
    moves: &[String],
    output: Q,
) -> Result<Vec<u32>> {
    let total_pages = PdfDocument::open(&input)?.page_count();

    let selection = resolve_flat(order.unwrap_or_default(), total_pages)?;
    let mut page_order = PageOrder::from_selection(selection, total_pages);

    for m in moves {
        let (from, to) = parse_move(m)?;
        if from != to && !page_order.move_page(from, to) {
            bail!(
                "Move {} is outside the page order (1-{})",
                m,
                page_order.as_slice().len()
            );
        }
    }

    if page_order.is_empty() {
        bail!("No pages to write");
    }

    assemble::write_pages(&input, page_order.as_slice(), &output)?;
    Ok(page_order.as_slice().to_vec())
}

pub fn run<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    order: Option<&str>,
    moves: &[String],
    output: Q,
) -> Result<()> {
    let page_order = reorder(input, order, moves, &output)?;

    let shown: Vec<String> = page_order.iter().map(|p| (p + 1).to_string()).collect();
    println!(
        "Saved pages in order {} to {}",
        shown.join(","),
        output.as_ref().display()
    );

    Ok(())
}
