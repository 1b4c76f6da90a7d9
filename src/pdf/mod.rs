pub mod assemble;
pub mod document;
pub mod security;
pub mod text;

#[cfg(test)]
pub(crate) mod fixtures;

pub use document::PdfDocument;
