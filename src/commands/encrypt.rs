use crate::pdf::security;
use anyhow::Result;
use std::path::Path;

pub fn run<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
    user_password: &str,
    owner_password: Option<&str>,
) -> Result<()> {
    security::encrypt(input, &output, user_password, owner_password)?;
    println!("PDF encrypted successfully to {}", output.as_ref().display());
    Ok(())
}
