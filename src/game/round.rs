//! Rounds and match-history parsing.
//!
//! Histories arrive as JSON in two shapes: finished-match files downloaded
//! from the platform (`{"moves": [{"p1": "R", "p2": "P"}, ...]}`) and the
//! in-progress gamestate handed to a bot (`{"rounds": [...]}`). Both use
//! the same single-character move codes.
//!
//! Finished files are parsed strictly and rejected whole on the first bad
//! code, keeping malformed data out of the training set. The gamestate
//! parser is lenient: an unknown code degrades to "no move" with a stderr
//! warning, since a live match must keep playing.

use serde::Deserialize;
use thiserror::Error;

use super::moves::Move;

/// One recorded round: the pair of moves played. Immutable once recorded.
/// `None` marks an out-of-vocabulary symbol retained in degraded form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Round {
    pub p1: Option<Move>,
    pub p2: Option<Move>,
}

impl Round {
    /// A round of two known moves.
    pub fn new(p1: Move, p2: Move) -> Round {
        Round {
            p1: Some(p1),
            p2: Some(p2),
        }
    }
}

/// Errors rejecting a match-history document at the boundary.
#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("invalid history JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown move code '{0}' at round {1}")]
    UnknownCode(String, usize),
}

#[derive(Deserialize)]
struct RawRound {
    p1: String,
    p2: String,
}

#[derive(Deserialize)]
struct MatchFile {
    moves: Vec<RawRound>,
}

#[derive(Deserialize)]
struct GameState {
    #[serde(default)]
    rounds: Vec<RawRound>,
}

/// Decodes a wire code. Only single-character codes are valid.
fn decode(code: &str) -> Option<Move> {
    let mut chars = code.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Move::from_code(c),
        _ => None,
    }
}

/// Decodes rounds strictly, failing on the first unknown code.
fn decode_rounds(raw: &[RawRound]) -> Result<Vec<Round>, HistoryError> {
    raw.iter()
        .enumerate()
        .map(|(i, r)| {
            let p1 = decode(&r.p1).ok_or_else(|| HistoryError::UnknownCode(r.p1.clone(), i))?;
            let p2 = decode(&r.p2).ok_or_else(|| HistoryError::UnknownCode(r.p2.clone(), i))?;
            Ok(Round::new(p1, p2))
        })
        .collect()
}

/// Parses a finished-match file (`{"moves": [...]}`). Strict.
pub fn parse_match(json: &str) -> Result<Vec<Round>, HistoryError> {
    let raw: MatchFile = serde_json::from_str(json)?;
    decode_rounds(&raw.moves)
}

/// Parses an in-progress gamestate (`{"rounds": [...]}`), degrading
/// unknown move codes to "no move" instead of rejecting the match. Each
/// unknown code is logged to stderr once at this boundary; downstream the
/// round still advances every counter as a non-match.
pub fn parse_gamestate_lenient(json: &str) -> Result<Vec<Round>, HistoryError> {
    let raw: GameState = serde_json::from_str(json)?;
    let rounds = raw
        .rounds
        .iter()
        .enumerate()
        .map(|(i, r)| {
            let p1 = decode(&r.p1);
            let p2 = decode(&r.p2);
            if p1.is_none() {
                eprintln!("warning: unknown move code '{}' at round {} (p1)", r.p1, i);
            }
            if p2.is_none() {
                eprintln!("warning: unknown move code '{}' at round {} (p2)", r.p2, i);
            }
            Round { p1, p2 }
        })
        .collect();
    Ok(rounds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_match_valid() {
        let json = r#"{"moves": [{"p1": "R", "p2": "P"}, {"p1": "D", "p2": "W"}]}"#;
        let rounds = parse_match(json).unwrap();
        assert_eq!(
            rounds,
            vec![
                Round::new(Move::Rock, Move::Paper),
                Round::new(Move::Dynamite, Move::Water),
            ]
        );
    }

    #[test]
    fn parse_match_empty() {
        let rounds = parse_match(r#"{"moves": []}"#).unwrap();
        assert!(rounds.is_empty());
    }

    #[test]
    fn parse_match_rejects_unknown_code() {
        let json = r#"{"moves": [{"p1": "R", "p2": "P"}, {"p1": "Q", "p2": "S"}]}"#;
        match parse_match(json) {
            Err(HistoryError::UnknownCode(code, round)) => {
                assert_eq!(code, "Q");
                assert_eq!(round, 1);
            }
            other => panic!("expected UnknownCode, got {:?}", other),
        }
    }

    #[test]
    fn parse_match_rejects_multichar_code() {
        let json = r#"{"moves": [{"p1": "RR", "p2": "P"}]}"#;
        assert!(parse_match(json).is_err());
    }

    #[test]
    fn parse_match_rejects_bad_json() {
        assert!(matches!(
            parse_match("{not json"),
            Err(HistoryError::Json(_))
        ));
    }

    #[test]
    fn parse_gamestate_lenient_missing_rounds_is_empty() {
        let rounds = parse_gamestate_lenient("{}").unwrap();
        assert!(rounds.is_empty());
    }

    #[test]
    fn parse_gamestate_lenient_degrades_unknown() {
        let json = r#"{"rounds": [{"p1": "Q", "p2": "S"}]}"#;
        let rounds = parse_gamestate_lenient(json).unwrap();
        assert_eq!(
            rounds,
            vec![Round {
                p1: None,
                p2: Some(Move::Scissors),
            }]
        );
    }
}
