//! Tests for the exhaustive search driver

#[cfg(test)]
mod tests {
    use tilefit::algorithm::search::{ExhaustiveSearch, solve};
    use tilefit::algorithm::verify::verify_solution;
    use tilefit::puzzle::board::BOARD_CELLS;
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

    // Tests the first arrangement wins when tiles are listed solved
    // Verified by advancing the arrangement before the first attempt
    #[test]
    fn test_identity_arrangement_found_first() {
        let mut search = ExhaustiveSearch::new(matched_tiles());
        let solution = search.run().expect("matched tiles solve");

        let placed: Vec<u8> = solution.positions.iter().copied().collect();
        assert_eq!(placed, vec![0, 1, 2, 3, 4, 5, 6, 7, 8]);
        assert!(solution.rotations.iter().all(|&rotation| rotation == 0));
        assert_eq!(search.stats().arrangements, 1);
        assert_eq!(search.stats().checks, 9);
    }

    // Tests a swapped pair is relocated by stepping the arrangement
    // Verified by reporting list order instead of cell assignment
    #[test]
    fn test_swapped_pair_is_relocated() {
        let mut tiles = matched_tiles();
        tiles.swap(7, 8);
        let mut search = ExhaustiveSearch::new(tiles);
        let solution = search.run().expect("swapped tiles still solve");

        let placed: Vec<u8> = solution.positions.iter().copied().collect();
        assert_eq!(placed, vec![0, 1, 2, 3, 4, 5, 6, 8, 7]);
        assert!(solution.rotations.iter().all(|&rotation| rotation == 0));
        assert_eq!(search.stats().arrangements, 2);
        verify_solution(&tiles, &solution).unwrap();
    }

    // Tests repeated runs report the identical first-found solution
    // Verified by randomizing the arrangement order
    #[test]
    fn test_search_is_deterministic() {
        let mut tiles = matched_tiles();
        tiles.swap(2, 6);
        let first = solve(tiles);
        let second = solve(tiles);

        assert!(first.is_some());
        assert_eq!(first, second);
    }

    // Tests work counters accumulate across failed arrangements
    // Verified by resetting the counters on each arrangement
    #[test]
    fn test_stats_accumulate_across_arrangements() {
        let mut tiles = matched_tiles();
        tiles.swap(7, 8);
        let mut search = ExhaustiveSearch::new(tiles);
        assert!(search.run().is_some());

        let stats = search.stats();
        assert_eq!(stats.arrangements, 2);
        assert!(stats.checks > 9);
    }

    // Tests the search reports exhaustion rather than erroring
    // Verified by returning the last arrangement as a solution
    #[test]
    fn test_unsolvable_tiles_exhaust() {
        let solution = solve([Tile::default(); BOARD_CELLS]);
        assert!(solution.is_none());
    }

    // Tests the convenience entry agrees with the driver
    // Verified by starting the driver from a shuffled arrangement
    #[test]
    fn test_solve_matches_driver() {
        let tiles = matched_tiles();
        let mut search = ExhaustiveSearch::new(tiles);
        assert_eq!(solve(tiles), search.run());
    }

    // Tests the snapshot grids are row-major three by three
    // Verified by transposing the snapshot indices
    #[test]
    fn test_solution_grids_are_row_major() {
        let mut tiles = matched_tiles();
        tiles.swap(7, 8);
        let solution = solve(tiles).expect("swapped tiles still solve");

        assert_eq!(solution.positions.dim(), (3, 3));
        assert_eq!(solution.rotations.dim(), (3, 3));
        assert_eq!(solution.positions[(2, 1)], 8);
        assert_eq!(solution.positions[(2, 2)], 7);
    }
}
