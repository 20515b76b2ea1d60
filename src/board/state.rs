use super::{Cell, Color, Piece, PieceCode, Square};

const BACK_RANK: [Piece; 8] = [
    Piece::Rook,
    Piece::Knight,
    Piece::Bishop,
    Piece::Queen,
    Piece::King,
    Piece::Bishop,
    Piece::Knight,
    Piece::Rook,
];

/// The 8x8 grid of cells plus the global move counter.
///
/// The counter goes up by one for every applied move, search trials
/// included, and back down on every unapplied move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub(crate) cells: [[Cell; 8]; 8], // [rank][file]
    pub(crate) move_counter: u32,
}

impl Board {
    /// Standard starting position with the move counter at zero.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        board.init();
        board
    }

    /// Reset to the standard starting position and zero the move counter.
    pub fn init(&mut self) {
        *self = Board::empty();
        for (file, piece) in BACK_RANK.iter().enumerate() {
            self.cells[0][file] = Cell::piece(Color::White, *piece);
            self.cells[1][file] = Cell::piece(Color::White, Piece::Pawn);
            self.cells[6][file] = Cell::piece(Color::Black, Piece::Pawn);
            self.cells[7][file] = Cell::piece(Color::Black, *piece);
        }
    }

    /// A board with no pieces.
    #[must_use]
    pub fn empty() -> Self {
        Board {
            cells: [[Cell::Empty; 8]; 8],
            move_counter: 0,
        }
    }

    #[inline]
    #[must_use]
    pub fn cell(&self, sq: Square) -> Cell {
        self.cells[sq.rank()][sq.file()]
    }

    #[inline]
    pub(crate) fn set_cell(&mut self, sq: Square, cell: Cell) {
        self.cells[sq.rank()][sq.file()] = cell;
    }

    #[inline]
    pub(crate) fn code_mut(&mut self, sq: Square) -> Option<&mut PieceCode> {
        match &mut self.cells[sq.rank()][sq.file()] {
            Cell::Empty => None,
            Cell::Occupied(code) => Some(code),
        }
    }

    /// Piece and color on a square
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        self.cell(sq).code().map(|c| (c.color, c.piece))
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.cell(sq).is_empty()
    }

    /// Get just the piece type on a square (without color)
    #[must_use]
    pub fn piece_on(&self, sq: Square) -> Option<Piece> {
        self.cell(sq).kind()
    }

    /// Get just the color of the piece on a square
    #[must_use]
    pub fn color_on(&self, sq: Square) -> Option<Color> {
        self.cell(sq).color()
    }

    #[must_use]
    pub fn move_counter(&self) -> u32 {
        self.move_counter
    }

    /// Squares holding a piece of `color`, in rank-major order.
    pub fn occupied_by(&self, color: Color) -> impl Iterator<Item = Square> + '_ {
        Square::all().filter(move |&sq| self.cell(sq).is_color(color))
    }

    /// First square (rank-major) holding `color`'s king.
    #[must_use]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        Square::all().find(|&sq| self.cell(sq).holds(color, Piece::King))
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}
