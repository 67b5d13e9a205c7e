//! Unit tests for the line-protocol parser.

use crate::parse::{self, Line, ParseError};

#[cfg(test)]
mod grid_lines {
    use super::*;

    #[test]
    fn two_integers() {
        assert_eq!(parse::grid_line("5 5"), Ok(Line::Value((5, 5))));
        assert_eq!(parse::grid_line("  12\t7 "), Ok(Line::Value((12, 7))));
    }

    #[test]
    fn negative_integers_parse_here_and_fail_typed_validation_later() {
        // The parse layer only tokenizes; Grid::new rejects the values.
        assert_eq!(parse::grid_line("-1 5"), Ok(Line::Value((-1, 5))));
    }

    #[test]
    fn exit_is_case_insensitive() {
        assert_eq!(parse::grid_line("Exit"), Ok(Line::Exit));
        assert_eq!(parse::grid_line("EXIT"), Ok(Line::Exit));
        assert_eq!(parse::grid_line("exit"), Ok(Line::Exit));
    }

    #[test]
    fn wrong_token_count_is_malformed() {
        assert!(matches!(parse::grid_line(""), Err(ParseError::Malformed { .. })));
        assert!(matches!(parse::grid_line("5"), Err(ParseError::Malformed { .. })));
        assert!(matches!(parse::grid_line("5 5 5"), Err(ParseError::Malformed { .. })));
    }

    #[test]
    fn non_integer_token_is_malformed() {
        assert!(matches!(parse::grid_line("five 5"), Err(ParseError::Malformed { .. })));
    }
}

#[cfg(test)]
mod position_lines {
    use super::*;

    #[test]
    fn three_tokens() {
        assert_eq!(parse::position_line("1 2 N"), Ok(Line::Value((1, 2, 'N'))));
        assert_eq!(parse::position_line("3 3 e"), Ok(Line::Value((3, 3, 'e'))));
    }

    #[test]
    fn exit_word() {
        assert_eq!(parse::position_line("exit"), Ok(Line::Exit));
    }

    #[test]
    fn multi_character_heading_is_malformed() {
        assert!(matches!(
            parse::position_line("1 2 NE"),
            Err(ParseError::Malformed { .. })
        ));
    }

    #[test]
    fn wrong_token_count_is_malformed() {
        assert!(matches!(parse::position_line("1 2"), Err(ParseError::Malformed { .. })));
        assert!(matches!(
            parse::position_line("1 2 N M"),
            Err(ParseError::Malformed { .. })
        ));
    }

    #[test]
    fn non_integer_coordinate_is_malformed() {
        assert!(matches!(
            parse::position_line("one 2 N"),
            Err(ParseError::Malformed { .. })
        ));
    }
}

#[cfg(test)]
mod plan_lines {
    use super::*;

    #[test]
    fn single_token() {
        assert_eq!(
            parse::plan_line("LMLMLMLMM"),
            Ok(Line::Value("LMLMLMLMM".to_string()))
        );
    }

    #[test]
    fn blank_line_is_the_empty_plan() {
        assert_eq!(parse::plan_line(""), Ok(Line::Value(String::new())));
        assert_eq!(parse::plan_line("   "), Ok(Line::Value(String::new())));
    }

    #[test]
    fn exit_word() {
        assert_eq!(parse::plan_line("Exit"), Ok(Line::Exit));
    }

    #[test]
    fn multiple_tokens_are_malformed() {
        assert!(matches!(
            parse::plan_line("LM LM"),
            Err(ParseError::Malformed { .. })
        ));
    }

    #[test]
    fn bad_plan_characters_parse_here_and_fail_typed_validation_later() {
        // Tokenizing accepts any single word; assign_plan rejects it.
        assert_eq!(parse::plan_line("LXM"), Ok(Line::Value("LXM".to_string())));
    }
}
