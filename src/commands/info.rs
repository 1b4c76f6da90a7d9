use crate::pdf::PdfDocument;
use anyhow::Result;
use std::path::Path;

pub fn run<P: AsRef<Path>>(path: P) -> Result<()> {
    let doc = PdfDocument::open(&path)?;
    let info = doc.info();

    println!("File: {}", doc.path.display());
    println!("Pages: {}", info.page_count);

    let fields = [
        ("Title", &info.title),
        ("Author", &info.author),
        ("Subject", &info.subject),
        ("Keywords", &info.keywords),
        ("Creator", &info.creator),
        ("Producer", &info.producer),
    ];
    for (label, value) in fields {
        if let Some(value) = value {
            println!("{}: {}", label, value);
        }
    }
    if let Some(date) = &info.creation_date {
        println!("Created: {}", format_pdf_date(date));
    }
    if let Some(date) = &info.mod_date {
        println!("Modified: {}", format_pdf_date(date));
    }

    Ok(())
}

/// `D:YYYYMMDDHHmmSS...` to `YYYY-MM-DD HH:mm:SS`; anything else is returned as is.
fn format_pdf_date(date: &str) -> String {
    let digits =
        |d: &str, n: usize| d.len() >= n && d.as_bytes()[..n].iter().all(u8::is_ascii_digit);

    let Some(d) = date.strip_prefix("D:") else {
        return date.to_string();
    };
    if !digits(d, 8) {
        return date.to_string();
    }

    let mut out = format!("{}-{}-{}", &d[0..4], &d[4..6], &d[6..8]);
    if digits(d, 14) {
        out.push_str(&format!(" {}:{}:{}", &d[8..10], &d[10..12], &d[12..14]));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_pdf_date() {
        assert_eq!(format_pdf_date("D:20240131093005+01'00'"), "2024-01-31 09:30:05");
        assert_eq!(format_pdf_date("D:20240131"), "2024-01-31");
        assert_eq!(format_pdf_date("yesterday"), "yesterday");
        assert_eq!(format_pdf_date("D:2024"), "D:2024");
        assert_eq!(format_pdf_date("D:2024013"), "D:2024013");
    }

    #[test]
    fn test_format_pdf_date_non_ascii() {
        assert_eq!(format_pdf_date("D:202401311\u{e9}123"), "2024-01-31");
        assert_eq!(format_pdf_date("D:20\u{e9}40131"), "D:20\u{e9}40131");
        assert_eq!(format_pdf_date("D:\u{e9}\u{e9}\u{e9}\u{e9}"), "D:\u{e9}\u{e9}\u{e9}\u{e9}");
    }
}
