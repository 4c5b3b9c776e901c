//! Maze document parsing: header validation, row shape checks, and the
//! symbol-to-cell mapping.
//!
//! The parser stops at cells; start-marker bookkeeping and pellet counts
//! belong to [`crate::map::grid::Maze`], which validates them on
//! construction.

use crate::constants::MAZE_HEADER_TOKEN;
use crate::error::ParseError;
use crate::map::cell::CellKind;

/// A structurally valid maze document: dimensions plus the cell grid,
/// stored column-major (`x * height + y`).
#[derive(Debug)]
pub struct ParsedMaze {
    pub width: u32,
    pub height: u32,
    pub cells: Vec<CellKind>,
}

/// Parser for maze documents.
pub struct MazeParser;

impl MazeParser {
    /// Parses the header line `"munch maze WxH"` into `(width, height)`.
    ///
    /// The whole line must match; both dimensions must be positive
    /// decimal integers.
    pub fn parse_header(line: &str) -> Result<(u32, u32), ParseError> {
        let malformed = || ParseError::MalformedHeader { line: line.to_string() };

        let dimensions = line
            .strip_prefix(MAZE_HEADER_TOKEN)
            .and_then(|rest| rest.strip_prefix(" maze "))
            .ok_or_else(malformed)?;
        let (width, height) = dimensions.split_once('x').ok_or_else(malformed)?;

        match (Self::parse_dimension(width), Self::parse_dimension(height)) {
            (Some(width), Some(height)) => Ok((width, height)),
            _ => Err(malformed()),
        }
    }

    /// Parses the whole document: one header line followed by exactly
    /// `height` rows of exactly `width` symbols.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first problem found: a bad header, a
    /// row count or row length mismatch, or an unknown symbol with its
    /// 1-based file line and column.
    pub fn parse_lines(lines: &[&str]) -> Result<ParsedMaze, ParseError> {
        let header = lines.first().copied().unwrap_or_default();
        let (width, height) = Self::parse_header(header)?;

        let rows = &lines[1..];
        if rows.len() != height as usize {
            return Err(ParseError::RowCountMismatch { expected: height, found: rows.len() });
        }
        for (y, row) in rows.iter().enumerate() {
            let found = row.chars().count();
            if found != width as usize {
                return Err(ParseError::RowLengthMismatch { row: y as u32, found, expected: width });
            }
        }

        let mut cells = vec![CellKind::Empty; width as usize * height as usize];
        for (y, row) in rows.iter().enumerate() {
            for (x, symbol) in row.chars().enumerate() {
                let kind = CellKind::from_symbol(symbol).ok_or(ParseError::UnknownSymbol {
                    // Header is line 1, so body row y sits on line y + 2.
                    line: y as u32 + 2,
                    column: x as u32 + 1,
                    symbol,
                })?;
                cells[x * height as usize + y] = kind;
            }
        }

        Ok(ParsedMaze { width, height, cells })
    }

    /// A positive decimal integer with no sign or surrounding noise.
    fn parse_dimension(text: &str) -> Option<u32> {
        if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        text.parse().ok().filter(|&value| value > 0)
    }
}
