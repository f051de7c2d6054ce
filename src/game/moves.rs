//! The five-move vocabulary: Rock, Paper, Scissors, Dynamite, Water.
//!
//! The declaration order is load-bearing: it fixes the one-hot index each
//! move occupies in every tensor a model has been trained against, and must
//! never change once a model has been exported.

/// Number of moves in the vocabulary.
pub const MOVE_COUNT: usize = 5;

/// All moves in canonical (one-hot) order.
pub const ALL_MOVES: [Move; MOVE_COUNT] = [
    Move::Rock,
    Move::Paper,
    Move::Scissors,
    Move::Dynamite,
    Move::Water,
];

/// A move in the extended rock-paper-scissors game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Rock,
    Paper,
    Scissors,
    Dynamite,
    Water,
}

impl Move {
    /// Returns this move's index in the canonical order.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Maps an index back to its move.
    pub fn from_index(idx: usize) -> Option<Move> {
        ALL_MOVES.get(idx).copied()
    }

    /// Returns the single-character wire code used in match-history JSON.
    pub const fn code(self) -> char {
        match self {
            Move::Rock => 'R',
            Move::Paper => 'P',
            Move::Scissors => 'S',
            Move::Dynamite => 'D',
            Move::Water => 'W',
        }
    }

    /// Parses a move from its single-character wire code.
    pub fn from_code(c: char) -> Option<Move> {
        match c {
            'R' => Some(Move::Rock),
            'P' => Some(Move::Paper),
            'S' => Some(Move::Scissors),
            'D' => Some(Move::Dynamite),
            'W' => Some(Move::Water),
            _ => None,
        }
    }

    /// One-hot encoding in canonical order.
    pub fn one_hot(self) -> [f32; MOVE_COUNT] {
        let mut vec = [0.0; MOVE_COUNT];
        vec[self.index()] = 1.0;
        vec
    }

    /// The moves this move wins against. Identical moves never beat each
    /// other, so a move never appears in its own list.
    pub const fn victims(self) -> &'static [Move] {
        match self {
            Move::Rock => &[Move::Scissors, Move::Dynamite],
            Move::Paper => &[Move::Rock, Move::Dynamite],
            Move::Scissors => &[Move::Paper, Move::Dynamite],
            Move::Dynamite => &[Move::Rock, Move::Paper, Move::Scissors],
            Move::Water => &[Move::Dynamite],
        }
    }

    /// The moves that win against this move.
    pub const fn beaten_by(self) -> &'static [Move] {
        match self {
            Move::Rock => &[Move::Paper, Move::Dynamite],
            Move::Paper => &[Move::Scissors, Move::Dynamite],
            Move::Scissors => &[Move::Rock, Move::Dynamite],
            Move::Dynamite => &[Move::Water],
            Move::Water => &[Move::Rock, Move::Paper, Move::Scissors],
        }
    }

    /// Returns true if this move beats `other`.
    pub fn beats(self, other: Move) -> bool {
        self.victims().contains(&other)
    }
}

/// One-hot encoding for a possibly-unknown symbol. An out-of-vocabulary
/// move projects to all zeros rather than panicking, so malformed upstream
/// data degrades into a neutral encoding.
pub fn one_hot_opt(mv: Option<Move>) -> [f32; MOVE_COUNT] {
    match mv {
        Some(m) => m.one_hot(),
        None => [0.0; MOVE_COUNT],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_roundtrip() {
        for (i, &mv) in ALL_MOVES.iter().enumerate() {
            assert_eq!(mv.index(), i);
            assert_eq!(Move::from_index(i), Some(mv));
        }
        assert_eq!(Move::from_index(5), None);
    }

    #[test]
    fn code_roundtrip() {
        for &mv in ALL_MOVES.iter() {
            assert_eq!(Move::from_code(mv.code()), Some(mv));
        }
        assert_eq!(Move::from_code('X'), None);
        assert_eq!(Move::from_code('r'), None);
    }

    #[test]
    fn one_hot_is_unit_vector() {
        for &mv in ALL_MOVES.iter() {
            let vec = mv.one_hot();
            assert_eq!(vec.iter().sum::<f32>(), 1.0);
            assert_eq!(vec[mv.index()], 1.0);
        }
    }

    #[test]
    fn one_hot_unknown_is_zero() {
        assert_eq!(one_hot_opt(None), [0.0; MOVE_COUNT]);
        assert_eq!(one_hot_opt(Some(Move::Water)), Move::Water.one_hot());
    }

    #[test]
    fn beats_relation() {
        assert!(Move::Rock.beats(Move::Scissors));
        assert!(Move::Rock.beats(Move::Dynamite));
        assert!(Move::Water.beats(Move::Dynamite));
        assert!(Move::Dynamite.beats(Move::Rock));
        assert!(!Move::Water.beats(Move::Rock));
        assert!(!Move::Rock.beats(Move::Paper));
    }

    #[test]
    fn identical_moves_never_beat() {
        for &mv in ALL_MOVES.iter() {
            assert!(!mv.beats(mv));
        }
    }

    #[test]
    fn beaten_by_is_inverse_of_victims() {
        for &a in ALL_MOVES.iter() {
            for &b in ALL_MOVES.iter() {
                assert_eq!(a.beats(b), b.beaten_by().contains(&a));
            }
        }
    }
}
