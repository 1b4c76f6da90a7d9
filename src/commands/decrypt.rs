use crate::pdf::security;
use anyhow::Result;
use std::path::Path;

pub fn run<P: AsRef<Path>, Q: AsRef<Path>>(input: P, output: Q, password: &str) -> Result<()> {
    security::decrypt(input, &output, password)?;
    println!("PDF decrypted successfully to {}", output.as_ref().display());
    Ok(())
}
