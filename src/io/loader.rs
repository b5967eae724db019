//! Puzzle file reading and writing

use crate::io::error::{Result, file_system_error, invalid_edge_code, malformed_puzzle};
use crate::puzzle::board::BOARD_CELLS;
use crate::puzzle::edge::Edge;
use crate::puzzle::tile::{EDGES_PER_TILE, Tile};
use std::fs;
use std::path::Path;

/// Edge codes a complete puzzle file must supply
const CODES_PER_PUZZLE: usize = BOARD_CELLS * EDGES_PER_TILE;

/// Parse puzzle text into nine tiles
///
/// Lines whose first character is `#` are comments. The remaining content
/// is read as whitespace-separated two-character edge codes, four per tile
/// in top, right, bottom, left order; tiles are numbered by order of
/// appearance. Line breaks otherwise carry no meaning. `path` is used for
/// error reporting only.
///
/// # Errors
///
/// Returns an error when the content does not hold exactly thirty-six
/// codes or when any code fails to parse. A bad code is reported with the
/// one-based number of the tile it belongs to.
pub fn parse_tiles(content: &str, path: &Path) -> Result<[Tile; BOARD_CELLS]> {
    let codes: Vec<&str> = content
        .lines()
        .filter(|line| !line.starts_with('#'))
        .flat_map(str::split_whitespace)
        .collect();

    if codes.len() != CODES_PER_PUZZLE {
        return Err(malformed_puzzle(
            path,
            &format!(
                "expected {CODES_PER_PUZZLE} edge codes, found {}",
                codes.len()
            ),
        ));
    }

    let mut tiles = [Tile::default(); BOARD_CELLS];
    for (tile_index, group) in codes.chunks(EDGES_PER_TILE).enumerate() {
        let mut edges = [Edge::default(); EDGES_PER_TILE];
        for (slot, code) in edges.iter_mut().zip(group) {
            *slot =
                Edge::from_code(code).ok_or_else(|| invalid_edge_code(code, tile_index + 1))?;
        }
        if let Some(slot) = tiles.get_mut(tile_index) {
            *slot = Tile::new(edges);
        }
    }
    Ok(tiles)
}

/// Load tiles from a puzzle file
///
/// # Errors
///
/// Returns an error when the file cannot be read or its content fails to
/// parse as a puzzle.
pub fn load_tiles(path: &Path) -> Result<[Tile; BOARD_CELLS]> {
    let content =
        fs::read_to_string(path).map_err(|source| file_system_error(path, "read", source))?;
    parse_tiles(&content, path)
}

/// Write tiles to a puzzle file in the format the loader reads
///
/// Each line of `comment` becomes a `#` comment at the top of the file,
/// followed by one four-code line per tile. Saved puzzles round-trip
/// through [`load_tiles`] unchanged.
///
/// # Errors
///
/// Returns an error when the file cannot be written.
pub fn save_tiles(path: &Path, tiles: &[Tile; BOARD_CELLS], comment: &str) -> Result<()> {
    let mut out = String::new();
    for line in comment.lines() {
        out.push_str("# ");
        out.push_str(line);
        out.push('\n');
    }
    for tile in tiles {
        out.push_str(&tile.to_string());
        out.push('\n');
    }
    fs::write(path, out).map_err(|source| file_system_error(path, "write", source))
}
