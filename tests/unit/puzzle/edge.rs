//! Tests for edge parsing, matching, and display

#[cfg(test)]
mod tests {
    use tilefit::puzzle::edge::{Color, Direction, Edge};

    // Tests every legal code parses to the expected constant
    // Verified by swapping the direction letters in the parser
    #[test]
    fn test_parse_all_codes() {
        let expected = [
            ("RT", Edge::RED_TAIL),
            ("BT", Edge::BLUE_TAIL),
            ("GT", Edge::GREEN_TAIL),
            ("YT", Edge::YELLOW_TAIL),
            ("RH", Edge::RED_HEAD),
            ("BH", Edge::BLUE_HEAD),
            ("GH", Edge::GREEN_HEAD),
            ("YH", Edge::YELLOW_HEAD),
        ];
        for (code, edge) in expected {
            assert_eq!(Edge::from_code(code), Some(edge), "code {code}");
        }
    }

    // Tests malformed codes are rejected rather than defaulted
    // Verified by accepting lowercase and overlong codes
    #[test]
    fn test_reject_malformed_codes() {
        for code in ["", "R", "T", "rt", "RX", "XT", "RTT", "RT ", "TR"] {
            assert_eq!(Edge::from_code(code), None, "code {code:?}");
        }
    }

    // Tests the complement flips direction and keeps color
    // Verified by flipping a color bit instead
    #[test]
    fn test_complement_flips_direction_only() {
        for edge in Edge::ALL {
            let complement = edge.complement();
            assert_eq!(complement.color(), edge.color());
            assert_ne!(complement.direction(), edge.direction());
            assert_eq!(complement.complement(), edge);
        }
    }

    // Tests matching is symmetric and holds exactly for complements
    // Verified by comparing colors alone
    #[test]
    fn test_matches_exactly_the_complement() {
        for a in Edge::ALL {
            for b in Edge::ALL {
                let expected = b == a.complement();
                assert_eq!(a.matches(b), expected, "{a} vs {b}");
                assert_eq!(b.matches(a), expected, "{b} vs {a}");
            }
        }
        for edge in Edge::ALL {
            assert!(!edge.matches(edge));
        }
    }

    // Tests display renders the parseable two-letter code
    // Verified by emitting the direction letter first
    #[test]
    fn test_display_round_trips() {
        for edge in Edge::ALL {
            let code = edge.to_string();
            assert_eq!(code.len(), 2);
            assert_eq!(Edge::from_code(&code), Some(edge));
        }
        assert_eq!(Edge::GREEN_HEAD.to_string(), "GH");
    }

    // Tests the default edge is the all-zero red tail encoding
    // Verified by defaulting to a head instead
    #[test]
    fn test_default_is_red_tail() {
        assert_eq!(Edge::default(), Edge::RED_TAIL);
        assert_eq!(Edge::default().color(), Color::Red);
        assert_eq!(Edge::default().direction(), Direction::Tail);
    }

    // Tests the code letters used by parser and display agree
    // Verified by swapping two color letters
    #[test]
    fn test_code_letters() {
        assert_eq!(Color::Red.code(), 'R');
        assert_eq!(Color::Blue.code(), 'B');
        assert_eq!(Color::Green.code(), 'G');
        assert_eq!(Color::Yellow.code(), 'Y');
        assert_eq!(Direction::Tail.code(), 'T');
        assert_eq!(Direction::Head.code(), 'H');
    }

    // Tests the exhaustive edge list covers all eight values once
    // Verified by repeating an entry in the list
    #[test]
    fn test_all_edges_are_distinct() {
        for (i, a) in Edge::ALL.iter().enumerate() {
            for b in Edge::ALL.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
        assert_eq!(Edge::ALL.len(), 8);
    }
}
