//! Password protection.

use super::assemble::{read_bytes, write_bytes};
use anyhow::{Context, Result};
use qpdf::{EncryptionParams, EncryptionParamsR6, PrintPermission, QPdf, QPdfErrorCode};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SecurityError {
    #[error("User password must not be empty")]
    EmptyPassword,

    #[error("Incorrect password")]
    IncorrectPassword,

    #[error("PDF is not encrypted")]
    NotEncrypted,
}

/// Protect `input` with AES-256. The owner password defaults to the user
/// password.
pub fn encrypt<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
    user_password: &str,
    owner_password: Option<&str>,
) -> Result<()> {
    let (input, output) = (input.as_ref(), output.as_ref());
    if user_password.is_empty() {
        return Err(SecurityError::EmptyPassword.into());
    }

    let bytes = read_bytes(input)?;
    let qpdf = QPdf::read_from_memory(&bytes)
        .with_context(|| format!("Failed to open PDF: {}", input.display()))?;

    let owner_password = owner_password
        .filter(|p| !p.is_empty())
        .unwrap_or(user_password);

    let params = EncryptionParams::R6(EncryptionParamsR6 {
        user_password: user_password.to_string(),
        owner_password: owner_password.to_string(),
        allow_accessibility: true,
        allow_extract: true,
        allow_assemble: true,
        allow_annotate_and_form: true,
        allow_form_filling: true,
        allow_modify_other: true,
        allow_print: PrintPermission::Full,
        encrypt_metadata: true,
    });

    let mut writer = qpdf.writer();
    writer.preserve_encryption(false).encryption_params(params);
    write_bytes(output, &writer.write_to_memory()?)?;

    tracing::info!(input = %input.display(), output = %output.display(), "encrypted");
    Ok(())
}

/// Write an unprotected copy of `input`.
///
/// Fails with [`SecurityError::NotEncrypted`] when there is nothing to remove
/// and [`SecurityError::IncorrectPassword`] when `password` does not open it.
pub fn decrypt<P: AsRef<Path>, Q: AsRef<Path>>(input: P, output: Q, password: &str) -> Result<()> {
    let (input, output) = (input.as_ref(), output.as_ref());
    let bytes = read_bytes(input)?;

    match QPdf::read_from_memory(&bytes) {
        Ok(plain) if !plain.is_encrypted() => return Err(SecurityError::NotEncrypted.into()),
        Ok(_) => {}
        Err(e) if matches!(e.error_code(), QPdfErrorCode::InvalidPassword) => {}
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to open PDF: {}", input.display()))
        }
    }

    let qpdf = QPdf::read_from_memory_encrypted(&bytes, password).map_err(|e| {
        if matches!(e.error_code(), QPdfErrorCode::InvalidPassword) {
            anyhow::Error::from(SecurityError::IncorrectPassword)
        } else {
            anyhow::Error::from(e).context(format!("Failed to open PDF: {}", input.display()))
        }
    })?;

    let mut writer = qpdf.writer();
    writer.preserve_encryption(false);
    write_bytes(output, &writer.write_to_memory()?)?;

    tracing::info!(input = %input.display(), output = %output.display(), "decrypted");
    Ok(())
}
