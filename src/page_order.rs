use crate::page_range::FlatSelection;
use anyhow::{anyhow, Result};

/// The order in which pages of a document are written out, as 0-indexed
/// source pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageOrder {
    order: Vec<u32>,
}

impl PageOrder {
    pub fn identity(total_pages: u32) -> Self {
        PageOrder {
            order: (0..total_pages).collect(),
        }
    }

    /// Build an explicit order from a flat selection. `AllPages` is the
    /// identity order.
    pub fn from_selection(selection: FlatSelection, total_pages: u32) -> Self {
        match selection {
            FlatSelection::AllPages => Self::identity(total_pages),
            FlatSelection::Pages(order) => PageOrder { order },
        }
    }

    /// Take the page at position `from` and drop it at position `to`.
    ///
    /// Returns `false` and leaves the order untouched when either position is
    /// outside the current order or the two are equal.
    pub fn move_page(&mut self, from: usize, to: usize) -> bool {
        let len = self.order.len();
        if from >= len || to >= len || from == to {
            return false;
        }
        let page = self.order.remove(from);
        self.order.insert(to, page);
        true
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.order
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// Parse a "FROM:TO" move with 1-indexed positions into 0-indexed positions.
pub fn parse_move(s: &str) -> Result<(usize, usize)> {
    let (from, to) = s
        .split_once(':')
        .ok_or_else(|| anyhow!("Invalid move (expected FROM:TO): {}", s))?;

    let position = |p: &str| -> Result<usize> {
        p.trim()
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .ok_or_else(|| anyhow!("Invalid position in move {}: {}", s, p))
    };

    Ok((position(from)?, position(to)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_identity() {
        assert_eq!(PageOrder::identity(4).as_slice(), &[0, 1, 2, 3]);
        assert!(PageOrder::identity(0).is_empty());
    }

    #[test]
    fn test_move_forward() {
        let mut order = PageOrder::identity(5);
        assert!(order.move_page(0, 3));
        assert_eq!(order.as_slice(), &[1, 2, 3, 0, 4]);
    }

    #[test]
    fn test_move_backward() {
        let mut order = PageOrder::identity(5);
        assert!(order.move_page(4, 1));
        assert_eq!(order.as_slice(), &[0, 4, 1, 2, 3]);
    }

    #[test]
    fn test_invalid_moves_are_ignored() {
        let mut order = PageOrder::identity(3);
        assert!(!order.move_page(1, 1));
        assert!(!order.move_page(3, 0));
        assert!(!order.move_page(0, 7));
        assert_eq!(order.as_slice(), &[0, 1, 2]);
    }

    #[test]
    fn test_from_selection() {
        let order = PageOrder::from_selection(FlatSelection::AllPages, 3);
        assert_eq!(order.as_slice(), &[0, 1, 2]);

        let order = PageOrder::from_selection(FlatSelection::Pages(vec![2, 0, 1]), 3);
        assert_eq!(order.as_slice(), &[2, 0, 1]);
    }

    #[test]
    fn test_parse_move() {
        assert_eq!(parse_move("3:1").unwrap(), (2, 0));
        assert_eq!(parse_move(" 1 : 2 ").unwrap(), (0, 1));
        assert!(parse_move("0:1").is_err());
        assert!(parse_move("3").is_err());
        assert!(parse_move("a:b").is_err());
    }
}
