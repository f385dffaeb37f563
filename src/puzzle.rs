use rand::{seq::SliceRandom, Rng};
use std::fmt;
use std::str::FromStr;

use crate::error::{ConfigurationError, InvalidMove};

/// A tile number; `0` is the blank.
pub type Tile = u16;

/// Direction the blank travels in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

impl Move {
    /// Canonical expansion order.
    pub const ALL: [Move; 4] = [Move::Up, Move::Down, Move::Left, Move::Right];
    /// Canonical order reversed, for stack frontiers.
    pub const REVERSED: [Move; 4] = [Move::Right, Move::Left, Move::Down, Move::Up];

    pub fn opposite(&self) -> Self {
        match self {
            Move::Up => Move::Down,
            Move::Down => Move::Up,
            Move::Left => Move::Right,
            Move::Right => Move::Left,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Move::Up => "Up",
            Move::Down => "Down",
            Move::Left => "Left",
            Move::Right => "Right",
        }
    }

    pub fn letter(&self) -> char {
        match self {
            Move::Up => 'U',
            Move::Down => 'D',
            Move::Left => 'L',
            Move::Right => 'R',
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Order in which [`Grid::neighbours`] yields moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOrder {
    Forward,
    Reverse,
}

impl MoveOrder {
    fn moves(self) -> &'static [Move; 4] {
        match self {
            MoveOrder::Forward => &Move::ALL,
            MoveOrder::Reverse => &Move::REVERSED,
        }
    }
}

/// Geometry of a square grid, row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Grid {
    side: usize,
}

impl Grid {
    pub fn new(side: usize) -> Self {
        Self { side }
    }

    pub fn side(&self) -> usize {
        self.side
    }

    /// Number of cells.
    pub fn cells(&self) -> usize {
        self.side * self.side
    }

    pub fn row(&self, index: usize) -> usize {
        index / self.side
    }

    pub fn col(&self, index: usize) -> usize {
        index % self.side
    }

    /// Cell the blank lands on when moved from `blank`, if the move stays on the grid.
    pub fn target(&self, blank: usize, mv: Move) -> Option<usize> {
        let side = self.side;
        if blank >= self.cells() {
            return None;
        }
        match mv {
            Move::Up => (blank >= side).then(|| blank - side),
            Move::Down => (blank < self.cells() - side).then(|| blank + side),
            Move::Left => (blank % side != 0).then(|| blank - 1),
            Move::Right => (blank % side != side - 1).then(|| blank + 1),
        }
    }

    /// Legal moves from `blank` paired with the cell each one moves the blank to.
    ///
    /// The move that would undo `incoming` is never yielded.
    pub fn neighbours(
        &self,
        blank: usize,
        incoming: Option<Move>,
        order: MoveOrder,
    ) -> impl Iterator<Item = (Move, usize)> {
        let grid = *self;
        let reverse = incoming.map(|mv| mv.opposite());
        order
            .moves()
            .iter()
            .copied()
            .filter(move |&mv| Some(mv) != reverse)
            .filter_map(move |mv| grid.target(blank, mv).map(|to| (mv, to)))
    }

    /// Swap the blank with its neighbour in direction `mv`, returning the new
    /// tiles and the new blank index.
    pub fn apply_move(
        &self,
        tiles: &[Tile],
        blank: usize,
        mv: Move,
    ) -> Result<(Box<[Tile]>, usize), InvalidMove> {
        match self.target(blank, mv) {
            Some(to) if tiles.len() == self.cells() => Ok((swap_blank(tiles, blank, to), to)),
            _ => Err(InvalidMove { blank, mv }),
        }
    }
}

/// Copy of `tiles` with cells `blank` and `to` exchanged.
pub(crate) fn swap_blank(tiles: &[Tile], blank: usize, to: usize) -> Box<[Tile]> {
    let mut next: Box<[Tile]> = tiles.into();
    next.swap(blank, to);
    next
}

/// Where the blank sits in a default goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlankPlacement {
    /// `0, 1, 2, ..`
    #[default]
    First,
    /// `1, 2, .., 0`
    Last,
}

/// Sign of a permutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parity {
    Even,
    Odd,
}

impl Parity {
    fn of_count(count: usize) -> Self {
        if count % 2 == 0 {
            Parity::Even
        } else {
            Parity::Odd
        }
    }

    pub fn flip(self) -> Self {
        match self {
            Parity::Even => Parity::Odd,
            Parity::Odd => Parity::Even,
        }
    }

    /// Parity after `flips` sign changes.
    pub fn flipped_by(self, flips: usize) -> Self {
        if flips % 2 == 0 {
            self
        } else {
            self.flip()
        }
    }
}

fn count_inversions(tiles: &[Tile]) -> usize {
    tiles
        .iter()
        .enumerate()
        .filter(|&(_, &val)| val != 0)
        .map(|(i, &val)| {
            tiles[i + 1..]
                .iter()
                .filter(|&&next| next != 0 && next < val)
                .count()
        })
        .sum()
}

/// Parity of the non-blank tiles read row-major.
pub fn permutation_parity(tiles: &[Tile]) -> Parity {
    Parity::of_count(count_inversions(tiles))
}

/// Whether `initial` can be slid into `goal`.
///
/// A horizontal move never reorders the non-blank tiles. A vertical move
/// carries one tile past `side - 1` others, so it flips the parity exactly
/// when the side is even, and every vertical move changes the blank's row.
pub fn is_solvable(initial: &Board, goal: &Board) -> bool {
    if initial.side() != goal.side() {
        return false;
    }
    let grid = initial.grid;
    let row_distance = grid.row(initial.blank).abs_diff(grid.row(goal.blank));
    let flips = (grid.side() + 1) * row_distance;
    permutation_parity(&initial.tiles) == permutation_parity(&goal.tiles).flipped_by(flips)
}

/// A validated tile configuration: a permutation of `0..side²`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    grid: Grid,
    tiles: Box<[Tile]>,
    blank: usize,
}

impl Board {
    pub fn new(tiles: Vec<Tile>) -> Result<Self, ConfigurationError> {
        let len = tiles.len();
        if len == 0 {
            return Err(ConfigurationError::Empty);
        }
        if len > Tile::MAX as usize + 1 {
            return Err(ConfigurationError::TooLarge { len });
        }
        let side = integer_sqrt(len).ok_or(ConfigurationError::NotSquare { len })?;

        let mut seen = vec![false; len];
        for &tile in &tiles {
            match seen.get_mut(tile as usize) {
                Some(slot) if !*slot => *slot = true,
                _ => return Err(ConfigurationError::NotPermutation { len }),
            }
        }

        let blank = tiles
            .iter()
            .position(|&t| t == 0)
            .ok_or(ConfigurationError::NotPermutation { len })?;
        Ok(Self {
            grid: Grid::new(side),
            tiles: tiles.into_boxed_slice(),
            blank,
        })
    }

    /// The solved configuration for a grid of `side`.
    pub fn goal(side: usize, placement: BlankPlacement) -> Result<Self, ConfigurationError> {
        if side == 0 {
            return Err(ConfigurationError::Empty);
        }
        let cells = side
            .checked_mul(side)
            .filter(|&cells| cells <= Tile::MAX as usize + 1)
            .ok_or(ConfigurationError::TooLarge {
                len: side.saturating_mul(side),
            })?;
        let tiles: Box<[Tile]> = match placement {
            BlankPlacement::First => (0..cells).map(|t| t as Tile).collect(),
            BlankPlacement::Last => (1..cells).chain(0..1).map(|t| t as Tile).collect(),
        };
        let blank = match placement {
            BlankPlacement::First => 0,
            BlankPlacement::Last => cells - 1,
        };
        Ok(Self {
            grid: Grid::new(side),
            tiles,
            blank,
        })
    }

    pub(crate) fn from_parts(grid: Grid, tiles: Box<[Tile]>, blank: usize) -> Self {
        Self { grid, tiles, blank }
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    pub fn side(&self) -> usize {
        self.grid.side()
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn blank(&self) -> usize {
        self.blank
    }

    pub fn apply_move(&self, mv: Move) -> Result<Board, InvalidMove> {
        let (tiles, blank) = self.grid.apply_move(&self.tiles, self.blank, mv)?;
        Ok(Self {
            grid: self.grid,
            tiles,
            blank,
        })
    }

    /// Apply `moves` in order, stopping at the first illegal one.
    pub fn replay(&self, moves: &[Move]) -> Result<Board, InvalidMove> {
        moves
            .iter()
            .try_fold(self.clone(), |board, &mv| board.apply_move(mv))
    }

    /// A uniformly shuffled configuration that can reach `goal`.
    pub fn shuffled<R: Rng + ?Sized>(goal: &Board, rng: &mut R) -> Self {
        let mut board = goal.clone();

        loop {
            board.tiles.shuffle(rng);
            board.blank = board.tiles.iter().position(|&t| t == 0).unwrap_or(0);

            if is_solvable(&board, goal) {
                return board;
            }
        }
    }

    /// Random walk of `steps` legal moves from `goal`, never undoing the previous move.
    pub fn scrambled<R: Rng + ?Sized>(goal: &Board, steps: usize, rng: &mut R) -> Self {
        let grid = goal.grid;
        let mut board = goal.clone();
        let mut last = None;

        for _ in 0..steps {
            let options: Vec<(Move, usize)> =
                grid.neighbours(board.blank, last, MoveOrder::Forward).collect();
            let Some(&(mv, to)) = options.choose(rng) else {
                break;
            };
            board.tiles.swap(board.blank, to);
            board.blank = to;
            last = Some(mv);
        }
        board
    }
}

fn integer_sqrt(len: usize) -> Option<usize> {
    let approx = (len as f64).sqrt().round() as usize;
    (approx.saturating_sub(1)..=approx + 1).find(|side| side * side == len)
}

impl FromStr for Board {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tiles = s
            .split(',')
            .map(|token| {
                let token = token.trim();
                token
                    .parse::<Tile>()
                    .map_err(|_| ConfigurationError::InvalidTile {
                        token: token.to_string(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Board::new(tiles)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = (self.tiles.len() - 1).to_string().len();
        for row in self.tiles.chunks(self.side()) {
            for &val in row {
                write!(f, "{:>width$} ", val)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn moves_from(side: usize, blank: usize, incoming: Option<Move>, order: MoveOrder) -> Vec<Move> {
        Grid::new(side)
            .neighbours(blank, incoming, order)
            .map(|(mv, _)| mv)
            .collect()
    }

    #[test]
    fn corners_and_centre_of_3x3() {
        assert_eq!(moves_from(3, 0, None, MoveOrder::Forward), vec![Move::Down, Move::Right]);
        assert_eq!(moves_from(3, 8, None, MoveOrder::Forward), vec![Move::Up, Move::Left]);
        assert_eq!(moves_from(3, 4, None, MoveOrder::Forward), Move::ALL.to_vec());
        assert_eq!(moves_from(3, 4, None, MoveOrder::Reverse), Move::REVERSED.to_vec());
    }

    #[test]
    fn incoming_move_is_not_undone() {
        assert_eq!(
            moves_from(3, 4, Some(Move::Up), MoveOrder::Forward),
            vec![Move::Up, Move::Left, Move::Right]
        );
        assert_eq!(
            moves_from(3, 4, Some(Move::Left), MoveOrder::Reverse),
            vec![Move::Left, Move::Down, Move::Up]
        );
    }

    #[test]
    fn right_edge_uses_side_not_three() {
        // index 2 is an interior column on a 4x4 grid
        assert!(moves_from(4, 2, None, MoveOrder::Forward).contains(&Move::Right));
        assert!(!moves_from(4, 3, None, MoveOrder::Forward).contains(&Move::Right));
    }

    #[test]
    fn apply_move_swaps_blank() {
        let grid = Grid::new(3);
        let tiles: Vec<Tile> = (0..9).collect();
        let (next, blank) = grid.apply_move(&tiles, 0, Move::Down).unwrap();
        assert_eq!(blank, 3);
        assert_eq!(&next[..4], &[3, 1, 2, 0]);
        assert_eq!(
            grid.apply_move(&tiles, 0, Move::Up),
            Err(InvalidMove { blank: 0, mv: Move::Up })
        );
    }

    #[test]
    fn board_validation() {
        assert_eq!(Board::new(vec![]), Err(ConfigurationError::Empty));
        assert_eq!(
            Board::new(vec![0, 1, 2]),
            Err(ConfigurationError::NotSquare { len: 3 })
        );
        assert_eq!(
            Board::new(vec![0, 1, 1, 3]),
            Err(ConfigurationError::NotPermutation { len: 4 })
        );
        assert_eq!(
            Board::new(vec![0, 1, 2, 4]),
            Err(ConfigurationError::NotPermutation { len: 4 })
        );
        let board = Board::new(vec![1, 2, 0, 3]).unwrap();
        assert_eq!(board.side(), 2);
        assert_eq!(board.blank(), 2);
    }

    #[test]
    fn parse_tiles() {
        let board: Board = "8, 6,4,2,1,3,5,7,0".parse().unwrap();
        assert_eq!(board.tiles(), &[8, 6, 4, 2, 1, 3, 5, 7, 0]);
        assert_eq!(
            "1,x,0,2".parse::<Board>(),
            Err(ConfigurationError::InvalidTile { token: "x".into() })
        );
    }

    #[test]
    fn goals() {
        assert_eq!(Board::goal(2, BlankPlacement::First).unwrap().tiles(), &[0, 1, 2, 3]);
        let last = Board::goal(2, BlankPlacement::Last).unwrap();
        assert_eq!(last.tiles(), &[1, 2, 3, 0]);
        assert_eq!(last.blank(), 3);
    }

    #[test]
    fn parity_counts_non_blank_inversions() {
        assert_eq!(permutation_parity(&[0, 1, 2, 3]), Parity::Even);
        assert_eq!(permutation_parity(&[0, 2, 1, 3]), Parity::Odd);
        assert_eq!(permutation_parity(&[2, 0, 1, 3]), Parity::Odd);
        assert_eq!(Parity::Odd.flip(), Parity::Even);
        assert_eq!(Parity::Even.flipped_by(3), Parity::Odd);
    }

    #[test]
    fn solvability_accounts_for_blank_row_on_even_side() {
        let goal = Board::goal(4, BlankPlacement::First).unwrap();
        assert!(is_solvable(&goal, &goal));
        let down = goal.apply_move(Move::Down).unwrap();
        assert!(is_solvable(&down, &goal));

        let swapped = Board::new(vec![0, 2, 1, 3, 4, 5, 6, 7, 8]).unwrap();
        assert!(!is_solvable(&swapped, &Board::goal(3, BlankPlacement::First).unwrap()));
    }

    #[test]
    fn shuffled_and_scrambled_boards_are_solvable() {
        let mut rng = StdRng::seed_from_u64(7);
        for side in 2..=4 {
            let goal = Board::goal(side, BlankPlacement::Last).unwrap();
            let board = Board::shuffled(&goal, &mut rng);
            assert!(is_solvable(&board, &goal));
            let walked = Board::scrambled(&goal, 30, &mut rng);
            assert!(is_solvable(&walked, &goal));
        }
    }

    #[test]
    fn shuffle_targets_the_given_goal() {
        let mut rng = StdRng::seed_from_u64(1);
        // one transposition away from the default goal, so the other parity class
        let goal = Board::new(vec![0, 2, 1, 3, 4, 5, 6, 7, 8]).unwrap();
        let default = Board::goal(3, BlankPlacement::First).unwrap();
        for _ in 0..20 {
            let board = Board::shuffled(&goal, &mut rng);
            assert!(is_solvable(&board, &goal));
            assert!(!is_solvable(&board, &default));
        }
    }

    #[test]
    fn goal_rejects_degenerate_sides() {
        assert_eq!(
            Board::goal(0, BlankPlacement::Last),
            Err(ConfigurationError::Empty)
        );
        assert_eq!(
            Board::goal(257, BlankPlacement::First),
            Err(ConfigurationError::TooLarge { len: 257 * 257 })
        );
        let largest = Board::goal(256, BlankPlacement::Last).unwrap();
        assert_eq!(largest.tiles()[0], 1);
        assert_eq!(largest.blank(), 256 * 256 - 1);
    }

    #[test]
    fn display_pads_tiles() {
        let board = Board::goal(4, BlankPlacement::First).unwrap();
        let text = board.to_string();
        assert_eq!(text.lines().next(), Some(" 0  1  2  3 "));
    }
}
