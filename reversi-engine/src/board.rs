//! The Reversi state machine: grid, piece counts, side to move and move history.
//!
//! [`Board`] commands are unchecked. [`Board::put`] expects a square for which
//! [`Board::is_legal`] holds and [`Board::pass`] expects [`Board::is_legal_all`]
//! to be false. Debug builds assert both contracts. In release builds a broken
//! contract leaves an unspecified state; the one exception is a placement on an
//! empty square that captures nothing, which [`Board::undo`] still reverses
//! exactly. Use [`crate::Game`] for checked play.

use crate::{Color, Direction, Grid, History, MoveRecord, Position, NUM_SPACES};
use std::fmt;

/// The complete state of one game, mutated only through its own operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    grid: Grid,
    counts: [usize; 2],
    turn: Color,
    history: History,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// The starting position with First to move and no history.
    pub fn new() -> Self {
        Self::from_grid(Grid::starting(), Color::First)
    }

    /// Start an arbitrary position with an empty history.
    pub fn from_grid(grid: Grid, turn: Color) -> Self {
        Self {
            counts: [grid.count(Color::First), grid.count(Color::Second)],
            grid,
            turn,
            history: History::new(),
        }
    }

    /// Discard everything and return to the starting position.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn cell(&self, pos: Position) -> Option<Color> {
        self.grid.get(pos)
    }

    #[inline]
    pub fn turn(&self) -> Color {
        self.turn
    }

    #[inline]
    pub fn count(&self, color: Color) -> usize {
        self.counts[color.index()]
    }

    /// Returns `(first_count, second_count)`.
    #[inline]
    pub fn counts(&self) -> (usize, usize) {
        (self.counts[0], self.counts[1])
    }

    #[inline]
    pub fn empty_count(&self) -> usize {
        NUM_SPACES - self.counts[0] - self.counts[1]
    }

    #[inline]
    pub fn history(&self) -> &History {
        &self.history
    }

    /// The most recent move, for highlighting what just changed.
    #[inline]
    pub fn last_record(&self) -> Option<&MoveRecord> {
        self.history.last()
    }

    /// Whether placing at `pos` captures along `direction` for the side to move:
    /// a run of at least one opposing piece closed by one of our own.
    fn is_legal_direction(&self, pos: Position, direction: Direction) -> bool {
        let mut seen_opponent = false;
        for square in pos.ray(direction) {
            match self.grid.get(square) {
                None => return false,
                Some(color) if color == self.turn => return seen_opponent,
                Some(_) => seen_opponent = true,
            }
        }
        false
    }

    /// Whether the side to move may place at `pos`.
    pub fn is_legal(&self, pos: Position) -> bool {
        if self.grid.get(pos).is_some() {
            return false;
        }
        Direction::ALL
            .iter()
            .any(|&direction| self.is_legal_direction(pos, direction))
    }

    /// [`Board::is_legal`] for raw coordinates; anything off the board is illegal.
    pub fn is_legal_at(&self, x: i32, y: i32) -> bool {
        Position::from_coords(x, y).map_or(false, |pos| self.is_legal(pos))
    }

    /// Whether the side to move has any placement at all. If not, it must pass.
    pub fn is_legal_all(&self) -> bool {
        Position::all().any(|pos| self.is_legal(pos))
    }

    /// All legal placements for the side to move, row by row.
    pub fn legal_positions(&self) -> Vec<Position> {
        Position::all().filter(|&pos| self.is_legal(pos)).collect()
    }

    /// Place a piece for the side to move at `pos`, flip every captured run,
    /// record the move and hand the turn over.
    pub fn put(&mut self, pos: Position) {
        debug_assert!(self.is_legal(pos), "illegal placement at {}", pos);

        // Decide every ray against the grid as it was before the placement.
        let mut capturing = [false; 8];
        for (flag, &direction) in capturing.iter_mut().zip(Direction::ALL.iter()) {
            *flag = self.is_legal_direction(pos, direction);
        }

        let mover = self.turn;
        let opponent = mover.opponent();
        self.grid.set(pos, Some(mover));
        self.counts[mover.index()] += 1;

        let mut flipped = Vec::new();
        for (&direction, _) in Direction::ALL.iter().zip(capturing).filter(|&(_, flag)| flag) {
            for square in pos.ray(direction) {
                if self.grid.get(square) == Some(mover) {
                    break;
                }
                self.grid.set(square, Some(mover));
                self.counts[mover.index()] += 1;
                self.counts[opponent.index()] -= 1;
                flipped.push(square);
            }
        }

        self.history.push(MoveRecord::Placement {
            color: mover,
            position: pos,
            flipped,
        });
        self.turn = opponent;
    }

    /// Hand the turn over without placing.
    pub fn pass(&mut self) {
        debug_assert!(!self.is_legal_all(), "pass with a legal placement available");

        self.history.push(MoveRecord::Pass);
        self.turn = self.turn.opponent();
    }

    /// Take back the most recent move, restoring the exact previous state.
    /// Returns the removed record, or None (and changes nothing) if there is no history.
    pub fn undo(&mut self) -> Option<MoveRecord> {
        let record = self.history.pop()?;

        if let MoveRecord::Placement {
            color,
            position,
            flipped,
        } = &record
        {
            let opponent = color.opponent();
            self.grid.set(*position, None);
            for &square in flipped {
                self.grid.set(square, Some(opponent));
            }
            self.counts[color.index()] -= 1 + flipped.len();
            self.counts[opponent.index()] += flipped.len();
        }

        self.turn = self.turn.opponent();
        Some(record)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.grid)?;
        write!(
            f,
            "{} {} - {} {}, {} to move",
            Color::First,
            self.counts[0],
            self.counts[1],
            Color::Second,
            self.turn
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(x: usize, y: usize) -> Position {
        Position::new(x, y).unwrap()
    }

    fn assert_counts_consistent(board: &Board) {
        assert_eq!(board.count(Color::First), board.grid().count(Color::First));
        assert_eq!(board.count(Color::Second), board.grid().count(Color::Second));
        assert_eq!(board.empty_count(), board.grid().count_empty());
    }

    #[test]
    fn new_game_state() {
        let board = Board::new();
        assert_eq!(board.counts(), (2, 2));
        assert_eq!(board.turn(), Color::First);
        assert!(board.history().is_empty());
        assert_eq!(board.last_record(), None);
        assert_counts_consistent(&board);
    }

    #[test]
    fn opening_legal_moves() {
        let board = Board::new();
        assert_eq!(
            board.legal_positions(),
            vec![pos(3, 2), pos(2, 3), pos(5, 4), pos(4, 5)]
        );
        assert!(board.is_legal(pos(2, 3)));
        assert!(!board.is_legal(pos(3, 3)), "occupied square");
        assert!(!board.is_legal(pos(0, 0)));
        assert!(board.is_legal_all());
    }

    #[test]
    fn off_board_is_never_legal() {
        let board = Board::new();
        for &(x, y) in &[(-1, 3), (3, -1), (8, 0), (0, 8), (100, 100)] {
            assert!(!board.is_legal_at(x, y));
        }
        assert!(board.is_legal_at(2, 3));
        assert_eq!(board, Board::new());
    }

    #[test]
    fn opening_move_flips_one() {
        let mut board = Board::new();
        board.put(pos(2, 3));

        assert_eq!(board.cell(pos(2, 3)), Some(Color::First));
        assert_eq!(board.cell(pos(3, 3)), Some(Color::First));
        assert_eq!(board.counts(), (4, 1));
        assert_eq!(board.turn(), Color::Second);
        assert_eq!(
            board.last_record(),
            Some(&MoveRecord::Placement {
                color: Color::First,
                position: pos(2, 3),
                flipped: vec![pos(3, 3)],
            })
        );
        assert_counts_consistent(&board);
    }

    #[test]
    fn flips_follow_direction_then_distance_order() {
        // First to move at a1 captures along the row (b1, c1) and the diagonal (b2).
        let grid: Grid = "
            .OO#....
            .O......
            ..#.....
            ........
            ........
            ........
            ........
            ........"
            .parse()
            .unwrap();
        let mut board = Board::from_grid(grid, Color::First);
        assert!(board.is_legal(pos(0, 0)));

        board.put(pos(0, 0));
        // Direction order puts the diagonal (1, 1) before the row (1, 0).
        assert_eq!(
            board.last_record().unwrap().flipped(),
            &[pos(1, 1), pos(1, 0), pos(2, 0)]
        );
        assert_eq!(board.counts(), (6, 0));
        assert_counts_consistent(&board);
    }

    #[test]
    fn adjacent_own_piece_does_not_capture() {
        let grid: Grid = "
            .#O#....
            ........
            ........
            ........
            ........
            ........
            ........
            ........"
            .parse()
            .unwrap();
        let board = Board::from_grid(grid, Color::First);
        assert!(!board.is_legal(pos(0, 0)));
    }

    #[test]
    fn ray_broken_by_gap_does_not_capture() {
        let grid: Grid = "
            .O.#....
            ........
            ........
            ........
            ........
            ........
            ........
            ........"
            .parse()
            .unwrap();
        let board = Board::from_grid(grid, Color::First);
        assert!(!board.is_legal(pos(0, 0)));
        assert!(!board.is_legal_all());
    }

    #[test]
    fn forced_pass_only_toggles_turn() {
        // Neither empty square is legal for Second.
        let grid: Grid = "
            .O######
            ########
            ########
            ########
            ########
            ########
            ########
            #######."
            .parse()
            .unwrap();
        let mut board = Board::from_grid(grid, Color::Second);
        assert!(!board.is_legal_all());

        let before = *board.grid();
        let counts = board.counts();
        board.pass();

        assert_eq!(board.turn(), Color::First);
        assert_eq!(board.grid(), &before);
        assert_eq!(board.counts(), counts);
        assert_eq!(board.last_record(), Some(&MoveRecord::Pass));
        assert!(board.is_legal(pos(0, 0)));
    }

    #[test]
    fn undo_restores_exact_state() {
        let mut board = Board::new();
        let start = board.clone();

        board.put(pos(2, 3));
        let after_first = board.clone();
        board.put(pos(2, 2));
        board.undo();
        assert_eq!(board, after_first);

        board.undo();
        assert_eq!(board, start);
    }

    #[test]
    fn undo_pass_restores_turn() {
        let grid: Grid = "
            .O######
            ########
            ########
            ########
            ########
            ########
            ########
            #######."
            .parse()
            .unwrap();
        let mut board = Board::from_grid(grid, Color::Second);
        let before = board.clone();

        board.pass();
        assert_eq!(board.undo(), Some(MoveRecord::Pass));
        assert_eq!(board, before);
    }

    #[test]
    fn undo_on_empty_history_changes_nothing() {
        let mut board = Board::new();
        assert_eq!(board.undo(), None);
        assert_eq!(board, Board::new());
    }

    #[test]
    fn queries_are_idempotent() {
        let mut board = Board::new();
        board.put(pos(2, 3));
        let snapshot = board.clone();

        let moves = board.legal_positions();
        assert_eq!(board.legal_positions(), moves);
        assert_eq!(board.is_legal_all(), board.is_legal_all());
        for square in Position::all() {
            assert_eq!(board.is_legal(square), board.is_legal(square));
        }
        assert_eq!(board, snapshot);
    }

    #[test]
    fn reset_discards_everything() {
        let mut board = Board::new();
        board.put(pos(2, 3));
        board.reset();
        assert_eq!(board, Board::new());
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "illegal placement at d4")]
    fn put_on_occupied_square_asserts() {
        Board::new().put(pos(3, 3));
    }

    #[test]
    #[cfg(not(debug_assertions))]
    fn non_capturing_put_on_empty_square_is_undone_exactly() {
        let mut board = Board::new();
        board.put(pos(0, 0));
        assert!(board.last_record().unwrap().flipped().is_empty());
        assert_eq!(board.counts(), (3, 2));

        board.undo();
        assert_eq!(board, Board::new());
    }

    #[test]
    fn display_shows_counts_and_turn() {
        let rendered = Board::new().to_string();
        assert!(rendered.ends_with("Black 2 - 2 White, Black to move"));
    }
}
