use crate::pdf::assemble;
use anyhow::Result;
use std::path::Path;

pub fn run<P: AsRef<Path>>(inputs: &[P], output: P) -> Result<()> {
    let total_pages = assemble::merge(inputs, &output)?;

    println!(
        "Merged {} files ({} pages) into {}",
        inputs.len(),
        total_pages,
        output.as_ref().display()
    );

    Ok(())
}
