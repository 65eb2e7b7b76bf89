use serde::{Deserialize, Serialize};

// 디버그 로그 출력 (WASM 환경에서는 JS console.log로 전달)
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

#[cfg(target_arch = "wasm32")]
fn log_debug(msg: &str) {
    log(msg);
}

#[cfg(not(target_arch = "wasm32"))]
fn log_debug(msg: &str) {
    println!("DEBUG: {}", msg);
}

/// 보드 한 변의 칸 수
pub const BOARD_SIZE: usize = 8;

/// JS 경계에서 들어오는 좌표 오류
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("square ({row}, {col}) is outside the 8x8 board")]
    OutOfBounds { row: i32, col: i32 },
}

/// 보드 좌표 (0-indexed, row 0 = 화면 맨 위 = 흑 진영)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    pub fn new(row: i32, col: i32) -> Result<Self, BoardError> {
        let size = BOARD_SIZE as i32;
        if (0..size).contains(&row) && (0..size).contains(&col) {
            Ok(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            Err(BoardError::OutOfBounds { row, col })
        }
    }

    pub fn row(&self) -> usize {
        self.row as usize
    }

    pub fn col(&self) -> usize {
        self.col as usize
    }

    /// "e2" 같은 문자열에서 파싱
    pub fn from_notation(s: &str) -> Option<Self> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != 2 {
            return None;
        }
        let col = (chars[0] as i32) - ('a' as i32);
        let rank = (chars[1] as i32) - ('1' as i32);
        // rank 8이 row 0
        Self::new(BOARD_SIZE as i32 - 1 - rank, col).ok()
    }

    /// 체스 표기법으로 변환
    pub fn to_notation(&self) -> String {
        let file = (b'a' + self.col) as char;
        let rank = (b'8' - self.row) as char;
        format!("{}{}", file, rank)
    }

    /// 밝은 칸 여부 ((row + col) 짝수)
    pub fn is_light(&self) -> bool {
        (self.row + self.col) % 2 == 0
    }
}

/// 기물 색
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// 턴 표시 문구
    pub fn label(self) -> &'static str {
        match self {
            Color::White => "⚪ Blancas",
            Color::Black => "⚫ Negras",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Black => "black",
        }
    }
}

/// 기물 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

impl PieceKind {
    /// 백 랭크 배치 순서 (a ~ h)
    pub const BACK_RANK: [PieceKind; BOARD_SIZE] = [
        PieceKind::Rook,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Queen,
        PieceKind::King,
        PieceKind::Bishop,
        PieceKind::Knight,
        PieceKind::Rook,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PieceKind::Pawn => "pawn",
            PieceKind::Rook => "rook",
            PieceKind::Knight => "knight",
            PieceKind::Bishop => "bishop",
            PieceKind::Queen => "queen",
            PieceKind::King => "king",
        }
    }
}

/// 기물
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Self { kind, color }
    }

    /// 유니코드 기물 문자
    pub fn glyph(&self) -> &'static str {
        match (self.kind, self.color) {
            (PieceKind::Pawn, Color::White) => "♙",
            (PieceKind::Rook, Color::White) => "♖",
            (PieceKind::Knight, Color::White) => "♘",
            (PieceKind::Bishop, Color::White) => "♗",
            (PieceKind::Queen, Color::White) => "♕",
            (PieceKind::King, Color::White) => "♔",
            (PieceKind::Pawn, Color::Black) => "♟",
            (PieceKind::Rook, Color::Black) => "♜",
            (PieceKind::Knight, Color::Black) => "♞",
            (PieceKind::Bishop, Color::Black) => "♝",
            (PieceKind::Queen, Color::Black) => "♛",
            (PieceKind::King, Color::Black) => "♚",
        }
    }
}

/// 8x8 격자. 규칙 검사 없이 칸 내용만 보관한다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    grid: [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    pub fn empty() -> Self {
        Self {
            grid: [[None; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// 표준 시작 배치 (row 0/1 = 흑, row 6/7 = 백)
    pub fn initial() -> Self {
        let mut board = Self::empty();
        for (col, kind) in PieceKind::BACK_RANK.iter().enumerate() {
            board.grid[0][col] = Some(Piece::new(*kind, Color::Black));
            board.grid[1][col] = Some(Piece::new(PieceKind::Pawn, Color::Black));
            board.grid[6][col] = Some(Piece::new(PieceKind::Pawn, Color::White));
            board.grid[7][col] = Some(Piece::new(*kind, Color::White));
        }
        board
    }

    pub fn get(&self, square: Square) -> Option<Piece> {
        self.grid[square.row()][square.col()]
    }

    /// 칸에 기물을 놓고 원래 있던 기물을 돌려준다
    pub fn set(&mut self, square: Square, piece: Option<Piece>) -> Option<Piece> {
        std::mem::replace(&mut self.grid[square.row()][square.col()], piece)
    }

    /// from의 기물을 to로 옮긴다. to에 있던 기물은 덮어쓰고 반환.
    /// from == to면 내용 변화 없음.
    pub fn relocate(&mut self, from: Square, to: Square) -> Option<Piece> {
        let moving = self.grid[from.row()][from.col()].take();
        self.set(to, moving)
    }

    /// (Square, 기물) 순회, row-major
    pub fn squares(&self) -> impl Iterator<Item = (Square, Option<Piece>)> + '_ {
        self.grid.iter().enumerate().flat_map(|(row, cells)| {
            cells.iter().enumerate().map(move |(col, piece)| {
                (
                    Square {
                        row: row as u8,
                        col: col as u8,
                    },
                    *piece,
                )
            })
        })
    }

    pub fn piece_count(&self) -> usize {
        self.squares().filter(|(_, p)| p.is_some()).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::initial()
    }
}

/// 클릭 처리 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    /// 선택된 칸 없음
    #[default]
    Idle,
    /// 출발 칸이 선택되어 목적지 클릭을 기다림
    Armed(Square),
}

/// 클릭 한 번의 결과
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// 아무 일도 없음
    Ignored,
    /// 출발 칸 선택
    Selected(Square),
    /// 이동 완료. captured는 덮어쓴 기물 (같은 색이어도 상관없음)
    Moved {
        from: Square,
        to: Square,
        captured: Option<Piece>,
    },
}

/// 보드 위젯 상태
#[derive(Debug, Clone)]
pub struct BoardGame {
    board: Board,
    selection: Selection,
    turn: Color,
    pub debug_mode: bool,
}

impl BoardGame {
    pub fn new() -> Self {
        Self {
            board: Board::initial(),
            selection: Selection::Idle,
            turn: Color::White,
            debug_mode: false,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn selected_square(&self) -> Option<Square> {
        match self.selection {
            Selection::Idle => None,
            Selection::Armed(square) => Some(square),
        }
    }

    /// JS 좌표로 클릭 처리. 범위 밖이면 상태를 건드리지 않는다.
    pub fn click_at(&mut self, row: i32, col: i32) -> Result<ClickOutcome, BoardError> {
        let square = Square::new(row, col)?;
        Ok(self.click(square))
    }

    /// 칸 클릭
    ///
    /// Idle: 현재 턴 색의 기물이면 Armed로 전환, 아니면 무시.
    /// Armed: 어떤 칸이든 무조건 이동 후 턴을 넘긴다 (합법성 검사 없음).
    pub fn click(&mut self, square: Square) -> ClickOutcome {
        let outcome = match self.selection {
            Selection::Idle => match self.board.get(square) {
                Some(piece) if piece.color == self.turn => {
                    self.selection = Selection::Armed(square);
                    ClickOutcome::Selected(square)
                }
                _ => ClickOutcome::Ignored,
            },
            Selection::Armed(from) => {
                let captured = self.board.relocate(from, square);
                self.selection = Selection::Idle;
                self.turn = self.turn.opposite();
                ClickOutcome::Moved {
                    from,
                    to: square,
                    captured,
                }
            }
        };

        if self.debug_mode {
            self.trace(&outcome);
        }
        outcome
    }

    fn trace(&self, outcome: &ClickOutcome) {
        match outcome {
            ClickOutcome::Ignored => {}
            ClickOutcome::Selected(square) => {
                log_debug(&format!("select {} ({})", square.to_notation(), self.turn.as_str()));
            }
            ClickOutcome::Moved { from, to, captured } => {
                let target = captured
                    .map(|p| format!(" x{}", p.glyph()))
                    .unwrap_or_default();
                log_debug(&format!(
                    "move {} -> {}{}, turn: {}",
                    from.to_notation(),
                    to.to_notation(),
                    target,
                    self.turn.as_str()
                ));
            }
        }
    }
}

impl Default for BoardGame {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(row: i32, col: i32) -> Square {
        Square::new(row, col).unwrap()
    }

    #[test]
    fn test_initial_setup() {
        let game = BoardGame::new();
        let board = game.board();

        for col in 0..8 {
            assert_eq!(board.get(sq(6, col)), Some(Piece::new(PieceKind::Pawn, Color::White)));
            assert_eq!(board.get(sq(1, col)), Some(Piece::new(PieceKind::Pawn, Color::Black)));
            for row in 2..6 {
                assert!(board.get(sq(row, col)).is_none());
            }
        }

        // 킹은 e열 (col 4)
        assert_eq!(board.get(sq(0, 4)), Some(Piece::new(PieceKind::King, Color::Black)));
        assert_eq!(board.get(sq(7, 4)), Some(Piece::new(PieceKind::King, Color::White)));
        assert_eq!(board.get(sq(7, 3)), Some(Piece::new(PieceKind::Queen, Color::White)));
        assert_eq!(board.piece_count(), 32);

        assert_eq!(game.turn(), Color::White);
        assert_eq!(game.selection(), Selection::Idle);
    }

    #[test]
    fn test_select_then_move_pawn() {
        let mut game = BoardGame::new();

        assert_eq!(game.click(sq(6, 4)), ClickOutcome::Selected(sq(6, 4)));
        assert_eq!(game.selection(), Selection::Armed(sq(6, 4)));
        assert_eq!(game.turn(), Color::White);

        let outcome = game.click(sq(4, 4));
        assert_eq!(
            outcome,
            ClickOutcome::Moved { from: sq(6, 4), to: sq(4, 4), captured: None }
        );
        assert!(game.board().get(sq(6, 4)).is_none());
        assert_eq!(game.board().get(sq(4, 4)), Some(Piece::new(PieceKind::Pawn, Color::White)));
        assert_eq!(game.turn(), Color::Black);
        assert_eq!(game.selection(), Selection::Idle);
    }

    #[test]
    fn test_unreachable_target_still_moves() {
        let mut game = BoardGame::new();

        // 폰이 갈 수 없는 칸 (e2 -> a5)
        game.click(sq(6, 4));
        let outcome = game.click(sq(3, 0));
        assert!(matches!(outcome, ClickOutcome::Moved { .. }));
        assert_eq!(game.board().get(sq(3, 0)), Some(Piece::new(PieceKind::Pawn, Color::White)));
        assert_eq!(game.turn(), Color::Black);
    }

    #[test]
    fn test_idle_click_on_empty_square() {
        let mut game = BoardGame::new();
        let before = game.board().clone();

        assert_eq!(game.click(sq(4, 4)), ClickOutcome::Ignored);
        assert_eq!(game.board(), &before);
        assert_eq!(game.turn(), Color::White);
        assert_eq!(game.selection(), Selection::Idle);
    }

    #[test]
    fn test_idle_click_on_opponent_piece() {
        let mut game = BoardGame::new();

        assert_eq!(game.click(sq(1, 0)), ClickOutcome::Ignored);
        assert_eq!(game.selection(), Selection::Idle);
        assert_eq!(game.turn(), Color::White);
    }

    #[test]
    fn test_move_onto_same_square_flips_turn() {
        let mut game = BoardGame::new();
        let before = game.board().clone();

        game.click(sq(7, 1));
        let outcome = game.click(sq(7, 1));
        assert_eq!(
            outcome,
            ClickOutcome::Moved { from: sq(7, 1), to: sq(7, 1), captured: None }
        );
        assert_eq!(game.board(), &before);
        assert_eq!(game.turn(), Color::Black);
        assert_eq!(game.selection(), Selection::Idle);
    }

    #[test]
    fn test_capture_own_piece_allowed() {
        let mut game = BoardGame::new();

        // 백 퀸으로 백 킹 위에 착지
        game.click(sq(7, 3));
        let outcome = game.click(sq(7, 4));
        assert_eq!(
            outcome,
            ClickOutcome::Moved {
                from: sq(7, 3),
                to: sq(7, 4),
                captured: Some(Piece::new(PieceKind::King, Color::White)),
            }
        );
        assert_eq!(game.board().get(sq(7, 4)), Some(Piece::new(PieceKind::Queen, Color::White)));
        assert_eq!(game.board().piece_count(), 31);
    }

    #[test]
    fn test_capture_king_has_no_win_condition() {
        let mut game = BoardGame::new();

        game.click(sq(6, 0));
        game.click(sq(0, 4));
        assert_eq!(game.board().get(sq(0, 4)), Some(Piece::new(PieceKind::Pawn, Color::White)));

        // 흑은 킹이 없어도 계속 둘 수 있다
        assert_eq!(game.turn(), Color::Black);
        assert_eq!(game.click(sq(1, 1)), ClickOutcome::Selected(sq(1, 1)));
    }

    #[test]
    fn test_turns_alternate() {
        let mut game = BoardGame::new();

        game.click(sq(6, 4));
        game.click(sq(4, 4));
        // 흑 차례에 백 기물 클릭은 무시
        assert_eq!(game.click(sq(4, 4)), ClickOutcome::Ignored);

        game.click(sq(1, 4));
        game.click(sq(3, 4));
        assert_eq!(game.turn(), Color::White);
        assert_eq!(game.click(sq(4, 4)), ClickOutcome::Selected(sq(4, 4)));
    }

    #[test]
    fn test_click_out_of_bounds() {
        let mut game = BoardGame::new();
        game.click(sq(6, 4));

        assert_eq!(game.click_at(8, 0), Err(BoardError::OutOfBounds { row: 8, col: 0 }));
        assert_eq!(game.click_at(0, -1), Err(BoardError::OutOfBounds { row: 0, col: -1 }));
        // Armed 상태 유지
        assert_eq!(game.selection(), Selection::Armed(sq(6, 4)));
        assert_eq!(game.turn(), Color::White);

        assert!(matches!(game.click_at(5, 4), Ok(ClickOutcome::Moved { .. })));
    }

    #[test]
    fn test_square_notation() {
        assert_eq!(sq(0, 0).to_notation(), "a8");
        assert_eq!(sq(7, 4).to_notation(), "e1");
        assert_eq!(sq(6, 4).to_notation(), "e2");

        assert_eq!(Square::from_notation("e2"), Some(sq(6, 4)));
        assert_eq!(Square::from_notation("h1"), Some(sq(7, 7)));
        assert_eq!(Square::from_notation("i1"), None);
        assert_eq!(Square::from_notation("a9"), None);
        assert_eq!(Square::from_notation("e"), None);
    }

    #[test]
    fn test_square_shade() {
        assert!(sq(0, 0).is_light());
        assert!(!sq(0, 1).is_light());
        assert!(sq(7, 7).is_light());
    }

    #[test]
    fn test_glyphs_are_distinct() {
        let kinds = [
            PieceKind::Pawn,
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
        ];
        let mut glyphs: Vec<&str> = kinds
            .iter()
            .flat_map(|k| [Color::White, Color::Black].map(|c| Piece::new(*k, c).glyph()))
            .collect();
        glyphs.sort();
        glyphs.dedup();
        assert_eq!(glyphs.len(), 12);

        assert_eq!(Piece::new(PieceKind::King, Color::White).glyph(), "♔");
        assert_eq!(Piece::new(PieceKind::Pawn, Color::Black).glyph(), "♟");
    }

    #[test]
    fn test_turn_label() {
        assert_eq!(Color::White.label(), "⚪ Blancas");
        assert_eq!(Color::Black.label(), "⚫ Negras");
    }

    #[test]
    fn test_debug_mode_does_not_change_behavior() {
        let mut game = BoardGame::new();
        game.debug_mode = true;

        game.click(sq(6, 3));
        game.click(sq(2, 3));
        assert_eq!(game.board().get(sq(2, 3)), Some(Piece::new(PieceKind::Pawn, Color::White)));
        assert_eq!(game.turn(), Color::Black);
    }
}
