//! Tests for rotation search on fixed arrangements

#[cfg(test)]
mod tests {
    use tilefit::algorithm::orientation::orient;
    use tilefit::algorithm::search::SearchStats;
    use tilefit::puzzle::board::{BOARD_CELLS, Board};
    use tilefit::puzzle::edge::Edge;
    use tilefit::puzzle::tile::Tile;

    // Nine tiles that solve in listed order with no turns
    fn matched_tiles() -> [Tile; BOARD_CELLS] {
        [
            Tile::new([Edge::GREEN_TAIL, Edge::RED_HEAD, Edge::YELLOW_HEAD, Edge::YELLOW_TAIL]),
            Tile::new([Edge::BLUE_TAIL, Edge::GREEN_HEAD, Edge::RED_TAIL, Edge::RED_TAIL]),
            Tile::new([Edge::YELLOW_HEAD, Edge::BLUE_TAIL, Edge::GREEN_HEAD, Edge::GREEN_TAIL]),
            Tile::new([Edge::YELLOW_TAIL, Edge::BLUE_HEAD, Edge::RED_HEAD, Edge::GREEN_HEAD]),
            Tile::new([Edge::RED_HEAD, Edge::YELLOW_TAIL, Edge::BLUE_TAIL, Edge::BLUE_TAIL]),
            Tile::new([Edge::GREEN_TAIL, Edge::RED_TAIL, Edge::YELLOW_TAIL, Edge::YELLOW_HEAD]),
            Tile::new([Edge::RED_TAIL, Edge::GREEN_TAIL, Edge::BLUE_HEAD, Edge::RED_HEAD]),
            Tile::new([Edge::BLUE_HEAD, Edge::YELLOW_HEAD, Edge::GREEN_TAIL, Edge::GREEN_HEAD]),
            Tile::new([Edge::YELLOW_HEAD, Edge::BLUE_HEAD, Edge::RED_TAIL, Edge::YELLOW_TAIL]),
        ]
    }

    // Tests a pre-matched arrangement settles with zero turns in one pass
    // Verified by skipping the first rotation candidate
    #[test]
    fn test_prematched_arrangement_needs_no_turns() {
        let mut board = Board::new(matched_tiles());
        let mut stats = SearchStats::default();

        assert!(orient(&mut board, &mut stats));
        assert_eq!(board.rotations(), &[0; BOARD_CELLS]);
        assert_eq!(stats.checks, 9);
    }

    // Tests a known pre-turn is undone by the complementary rotation
    // Verified by writing the raw countdown value as the rotation
    #[test]
    fn test_preturned_center_tile_is_recovered() {
        let mut tiles = matched_tiles();
        tiles[4] = tiles[4].rotated(2);
        let mut board = Board::new(tiles);
        let mut stats = SearchStats::default();

        assert!(orient(&mut board, &mut stats));
        assert_eq!(board.rotations(), &[0, 0, 0, 0, 2, 0, 0, 0, 0]);
        assert_eq!(stats.checks, 11);
    }

    // Tests the candidate order prefers three turns over one on a tie
    // Verified by trying rotations in ascending clockwise order
    #[test]
    fn test_tied_cell_settles_on_the_earlier_candidate() {
        let mut tiles = matched_tiles();
        // Both one and three turns join this corner; zero and two do not
        tiles[8] = Tile::new([
            Edge::YELLOW_TAIL,
            Edge::YELLOW_HEAD,
            Edge::YELLOW_TAIL,
            Edge::YELLOW_HEAD,
        ]);
        let mut board = Board::new(tiles);
        let mut stats = SearchStats::default();

        assert!(orient(&mut board, &mut stats));
        assert_eq!(board.rotations(), &[0, 0, 0, 0, 0, 0, 0, 0, 3]);
        assert_eq!(stats.checks, 10);
    }

    // Tests an unmatchable arrangement is rejected after twenty checks
    // Verified by descending past a failed neighbor check
    #[test]
    fn test_unmatchable_arrangement_fails() {
        let mut board = Board::new([Tile::default(); BOARD_CELLS]);
        let mut stats = SearchStats::default();

        assert!(!orient(&mut board, &mut stats));
        assert_eq!(stats.checks, 20);
    }

    // Tests backtracking revisits an earlier cell after a downstream failure
    // Verified by halting at the first failed cell
    #[test]
    fn test_backtracking_accumulates_checks() {
        let mut tiles = matched_tiles();
        tiles.swap(7, 8);
        let mut board = Board::new(tiles);
        let mut stats = SearchStats::default();

        assert!(!orient(&mut board, &mut stats));
        assert!(stats.checks > 9);
    }
}
