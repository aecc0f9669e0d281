//! Marks and cells

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Number of cells on the grid
pub const BOARD_SIZE: usize = 9;

/// A player's symbol.
///
/// The service decides which symbols exist; any single visible character is
/// accepted so the client keeps working against services that use `X`/`O`
/// instead of `A`/`B`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Mark(char);

impl Mark {
    pub const A: Mark = Mark('A');
    pub const B: Mark = Mark('B');

    /// Parse a mark from its wire symbol.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidMark`] unless `symbol` is exactly one
    /// non-whitespace character.
    pub fn parse(symbol: &str) -> Result<Mark> {
        let mut chars = symbol.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if !c.is_whitespace() && !c.is_control() => Ok(Mark(c)),
            _ => Err(Error::InvalidMark {
                symbol: symbol.to_string(),
            }),
        }
    }

    pub fn symbol(self) -> char {
        self.0
    }

    /// Style class used when painting a cell holding this mark
    pub fn style_class(self) -> String {
        self.0.to_lowercase().collect()
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for Mark {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Mark::parse(&value)
    }
}

impl From<Mark> for String {
    fn from(mark: Mark) -> Self {
        mark.0.to_string()
    }
}

/// A cell on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Cell {
    #[default]
    Empty,
    Marked(Mark),
}

impl Cell {
    /// Parse a cell from the wire, where `""` means empty.
    pub fn from_wire(value: &str) -> Result<Cell> {
        if value.is_empty() {
            Ok(Cell::Empty)
        } else {
            Mark::parse(value).map(Cell::Marked)
        }
    }

    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Marked(mark) => Some(mark),
        }
    }

    /// Visible label: the mark's symbol, or nothing for an empty cell
    pub fn label(self) -> String {
        self.mark().map(String::from).unwrap_or_default()
    }
}

impl TryFrom<String> for Cell {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Cell::from_wire(&value)
    }
}

impl From<Cell> for String {
    fn from(cell: Cell) -> Self {
        cell.label()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_parse_accepts_single_symbol() {
        assert_eq!(Mark::parse("A").unwrap(), Mark::A);
        assert_eq!(Mark::parse("X").unwrap().symbol(), 'X');
    }

    #[test]
    fn test_mark_parse_rejects_bad_symbols() {
        for bad in ["", "AB", " ", "\n"] {
            assert!(
                matches!(Mark::parse(bad), Err(Error::InvalidMark { .. })),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_style_class_is_lowercase() {
        assert_eq!(Mark::A.style_class(), "a");
        assert_eq!(Mark::parse("o").unwrap().style_class(), "o");
    }

    #[test]
    fn test_cell_wire_values() {
        assert_eq!(Cell::from_wire("").unwrap(), Cell::Empty);
        assert_eq!(Cell::from_wire("B").unwrap(), Cell::Marked(Mark::B));
        assert!(Cell::from_wire("BB").is_err());
        assert_eq!(Cell::Marked(Mark::A).label(), "A");
        assert_eq!(Cell::Empty.label(), "");
    }

    #[test]
    fn test_cell_serializes_as_wire_string() {
        let cells = [Cell::Empty, Cell::Marked(Mark::A)];
        let json = serde_json::to_string(&cells).unwrap();
        assert_eq!(json, r#"["","A"]"#);
    }
}
