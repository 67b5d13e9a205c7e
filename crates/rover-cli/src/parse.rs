//! Line parsing for the interactive protocol.
//!
//! This layer owns the malformed-input class of failures (wrong token
//! counts, non-integer tokens, multi-character headings).  Typed validation
//! of the values themselves — bounds, occupancy, heading letters — is the
//! core's job and happens after parsing.

use thiserror::Error;

/// A successfully parsed input line: either the session-ending escape word
/// or a value for the current prompt.
#[derive(Debug, PartialEq, Eq)]
pub enum Line<T> {
    /// The user typed `Exit` (any case) as the sole token.
    Exit,
    Value(T),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid Input.  Expected {expected}.")]
    Malformed { expected: &'static str },
}

type ParseResult<T> = Result<Line<T>, ParseError>;

fn is_exit(tokens: &[&str]) -> bool {
    tokens.len() == 1 && tokens[0].eq_ignore_ascii_case("exit")
}

fn int(token: &str, expected: &'static str) -> Result<i32, ParseError> {
    token.parse().map_err(|_| ParseError::Malformed { expected })
}

/// Grid prompt: two integer tokens, the upper-right corner.
pub fn grid_line(line: &str) -> ParseResult<(i32, i32)> {
    const EXPECTED: &str = "two integers";
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if is_exit(&tokens) {
        return Ok(Line::Exit);
    }
    match tokens.as_slice() {
        [x, y] => Ok(Line::Value((int(x, EXPECTED)?, int(y, EXPECTED)?))),
        _ => Err(ParseError::Malformed { expected: EXPECTED }),
    }
}

/// Starting-position prompt: two integers and a single heading character.
pub fn position_line(line: &str) -> ParseResult<(i32, i32, char)> {
    const EXPECTED: &str = "an X coordinate, a Y coordinate and a heading character";
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if is_exit(&tokens) {
        return Ok(Line::Exit);
    }
    match tokens.as_slice() {
        [x, y, heading] => {
            let mut chars = heading.chars();
            let (Some(ch), None) = (chars.next(), chars.next()) else {
                return Err(ParseError::Malformed { expected: EXPECTED });
            };
            Ok(Line::Value((int(x, EXPECTED)?, int(y, EXPECTED)?, ch)))
        }
        _ => Err(ParseError::Malformed { expected: EXPECTED }),
    }
}

/// Movement-plan prompt: one token of plan characters.
///
/// A blank line is the empty (no-op) plan.
pub fn plan_line(line: &str) -> ParseResult<String> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if is_exit(&tokens) {
        return Ok(Line::Exit);
    }
    match tokens.as_slice() {
        [] => Ok(Line::Value(String::new())),
        [plan] => Ok(Line::Value((*plan).to_string())),
        _ => Err(ParseError::Malformed { expected: "a single movement plan" }),
    }
}
