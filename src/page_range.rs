use std::num::IntErrorKind;
use thiserror::Error;

/// Why a page specification was rejected. Carries the offending token so the
/// message can be shown to the user verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PageRangeError {
    #[error("{}", parse_message(.token))]
    Parse { token: String },

    #[error("{}", range_message(.token, .total))]
    Range { token: String, total: u32 },
}

fn parse_message(token: &str) -> String {
    if token.contains('-') {
        format!("Invalid page range format: {}", token)
    } else {
        format!("Invalid page number: {}", token)
    }
}

fn range_message(token: &str, total: &u32) -> String {
    if token.contains('-') {
        format!("Page range {} is out of bounds (1-{})", token, total)
    } else {
        format!("Page {} is out of bounds (1-{})", token, total)
    }
}

/// One comma-separated unit of a page specification, 0-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageToken {
    Single(u32),
    Range(u32, u32), // inclusive
}

impl PageToken {
    fn parse(token: &str, total_pages: u32) -> Result<Self, PageRangeError> {
        let out_of_bounds = || PageRangeError::Range {
            token: token.to_string(),
            total: total_pages,
        };

        if let Some((start, end)) = token.split_once('-') {
            let start = parse_page_number(start, token)?;
            let end = parse_page_number(end, token)?;

            // 1-indexed on the way in
            let start = to_index(start, total_pages);
            let end = to_index(end, total_pages);
            let (Some(start), Some(end)) = (start, end) else {
                return Err(out_of_bounds());
            };
            if start > end {
                return Err(out_of_bounds());
            }
            Ok(PageToken::Range(start, end))
        } else {
            let page = parse_page_number(token, token)?;
            to_index(page, total_pages)
                .map(PageToken::Single)
                .ok_or_else(out_of_bounds)
        }
    }

    /// The 0-indexed pages this token covers, in ascending order.
    pub fn pages(&self) -> impl Iterator<Item = u32> {
        let (start, end) = match *self {
            PageToken::Single(page) => (page, page),
            PageToken::Range(start, end) => (start, end),
        };
        start..=end
    }
}

/// A well-formed page number too large for `u64` is still a number, just one
/// past the end of any document.
fn parse_page_number(s: &str, token: &str) -> Result<u64, PageRangeError> {
    match s.trim().parse::<u64>() {
        Ok(n) => Ok(n),
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => Ok(u64::MAX),
        Err(_) => Err(PageRangeError::Parse {
            token: token.to_string(),
        }),
    }
}

/// 1-indexed page number to 0-indexed page, if it is inside the document.
fn to_index(page: u64, total_pages: u32) -> Option<u32> {
    let index = page.checked_sub(1)?;
    if index < u64::from(total_pages) {
        u32::try_from(index).ok()
    } else {
        None
    }
}

/// Tokens in the order the user typed them. Duplicates are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageSelection {
    pub tokens: Vec<PageToken>,
}

impl PageSelection {
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Expand ranges into individual 0-indexed pages, preserving token order.
    pub fn expand(&self) -> Vec<u32> {
        self.tokens.iter().flat_map(PageToken::pages).collect()
    }
}

/// Result of resolving a page specification where a blank input means
/// "the whole document".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlatSelection {
    AllPages,
    Pages(Vec<u32>),
}

fn parse_tokens(s: &str, total_pages: u32) -> Result<Vec<PageToken>, PageRangeError> {
    s.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| PageToken::parse(part, total_pages))
        .collect()
}

/// Parse a 1-indexed specification like "1,3,5-7" into compact tokens.
///
/// Blank input yields an empty selection; callers that write output treat
/// that as nothing to do.
pub fn resolve_compact(s: &str, total_pages: u32) -> Result<PageSelection, PageRangeError> {
    if s.trim().is_empty() {
        return Ok(PageSelection::default());
    }
    let tokens = parse_tokens(s, total_pages)?;
    tracing::debug!(input = s, ?tokens, "resolved compact page selection");
    Ok(PageSelection { tokens })
}

/// Parse a 1-indexed specification into a flat list of 0-indexed pages.
///
/// Blank input yields [`FlatSelection::AllPages`]. A non-blank input with no
/// tokens (e.g. ",,") yields an empty list, which is not the same thing.
pub fn resolve_flat(s: &str, total_pages: u32) -> Result<FlatSelection, PageRangeError> {
    if s.trim().is_empty() {
        return Ok(FlatSelection::AllPages);
    }
    let pages: Vec<u32> = parse_tokens(s, total_pages)?
        .iter()
        .flat_map(PageToken::pages)
        .collect();
    tracing::debug!(input = s, ?pages, "resolved flat page selection");
    Ok(FlatSelection::Pages(pages))
}
