use wasm_bindgen::prelude::*;
use serde::{Serialize, Deserialize};
use board::{BoardGame, ClickOutcome, Square};
use gallery::{Category, Game, Gallery, NAV_LINKS, PARTICLE_COUNT};
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

/// JS에서 사용할 게임 포털 래퍼
#[wasm_bindgen]
pub struct Portal {
    gallery: Gallery,
}

/// JS로 전달할 게임 카드 정보
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct JsGame {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub category: String,
    pub tag: String,
    pub players: String,
    pub desc: String,
}

/// JS로 전달할 필터 버튼 정보
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct JsCategory {
    pub id: String,
    pub label: String,
    pub active: bool,
}

/// JS로 전달할 포털 상태
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct JsPortalState {
    pub category: String,
    pub categories: Vec<JsCategory>,
    pub games: Vec<JsGame>,
    pub selected_game: Option<JsGame>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct JsNavLink {
    pub label: String,
    pub href: String,
}

#[wasm_bindgen]
impl Portal {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Portal {
        Portal {
            gallery: Gallery::new(),
        }
    }

    /// 카테고리 필터 변경 ("all", "todos", "strategy", "estrategia" ...)
    #[wasm_bindgen]
    pub fn select_category(&mut self, category: &str) -> Result<(), JsError> {
        let category: Category = category.parse()?;
        self.gallery.select_category(category);
        Ok(())
    }

    /// 카드 클릭 → 모달 열기
    #[wasm_bindgen]
    pub fn open_game(&mut self, id: &str) -> Result<(), JsError> {
        self.gallery.open_game_by_id(id)?;
        Ok(())
    }

    /// 오버레이나 닫기 버튼 클릭
    #[wasm_bindgen]
    pub fn close_modal(&mut self) {
        self.gallery.close_modal();
    }

    /// 현재 포털 상태
    #[wasm_bindgen]
    pub fn get_state(&self) -> Result<JsValue, JsError> {
        let js_state = build_portal_state(&self.gallery);
        Ok(serde_wasm_bindgen::to_value(&js_state)?)
    }

    /// 내비게이션 링크 목록
    #[wasm_bindgen]
    pub fn nav_links(&self) -> Result<JsValue, JsError> {
        Ok(serde_wasm_bindgen::to_value(&build_nav_links())?)
    }
}

impl Default for Portal {
    fn default() -> Self {
        Self::new()
    }
}

/// JS에서 사용할 체스판 래퍼
#[wasm_bindgen]
pub struct ChessBoard {
    game: BoardGame,
}

/// JS로 전달할 칸 정보
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct JsCell {
    pub row: u8,
    pub col: u8,
    pub glyph: String,
    pub kind: Option<String>,
    pub color: Option<String>,
    pub light: bool,
    pub selected: bool,
}

/// JS로 전달할 보드 상태
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct JsBoardState {
    pub cells: Vec<JsCell>,
    pub turn: String,
    pub turn_label: String,
    pub selected: Option<(u8, u8)>,
}

/// JS로 전달할 클릭 결과
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct JsClickOutcome {
    pub outcome: String, // "ignored", "selected", "moved"
    pub from: Option<(u8, u8)>,
    pub to: Option<(u8, u8)>,
    pub captured: Option<String>,
}

#[wasm_bindgen]
impl ChessBoard {
    /// 시작 배치로 새 보드 생성
    #[wasm_bindgen(constructor)]
    pub fn new() -> ChessBoard {
        ChessBoard {
            game: BoardGame::new(),
        }
    }

    /// 디버그 모드 설정 (클릭 처리 추적)
    #[wasm_bindgen]
    pub fn set_debug(&mut self, enabled: bool) {
        self.game.debug_mode = enabled;
    }

    /// 칸 클릭 처리
    #[wasm_bindgen]
    pub fn click(&mut self, row: i32, col: i32) -> Result<JsValue, JsError> {
        let outcome = self.game.click_at(row, col)?;
        Ok(serde_wasm_bindgen::to_value(&build_click_outcome(&outcome))?)
    }

    /// 현재 보드 상태
    #[wasm_bindgen]
    pub fn get_state(&self) -> Result<JsValue, JsError> {
        let js_state = build_board_state(&self.game);
        Ok(serde_wasm_bindgen::to_value(&js_state)?)
    }

    /// 현재 턴 ("white" | "black")
    #[wasm_bindgen]
    pub fn current_turn(&self) -> String {
        self.game.turn().as_str().to_string()
    }
}

impl Default for ChessBoard {
    fn default() -> Self {
        Self::new()
    }
}

/// 파티클 컨테이너를 비우고 장식용 span을 채운다. 컨테이너가 없으면 0 반환.
#[wasm_bindgen]
pub fn mount_particles(container_id: &str) -> Result<u32, JsValue> {
    let doc = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let Some(container) = doc.get_element_by_id(container_id) else {
        return Ok(0);
    };

    container.set_inner_html("");
    let mut rng = rand::thread_rng();
    let particles = gallery::generate_particles(&mut rng, PARTICLE_COUNT);
    for particle in &particles {
        let span = doc.create_element("span")?;
        span.set_attribute("style", &particle.style())?;
        container.append_child(&span)?;
    }
    Ok(particles.len() as u32)
}

/// 섹션으로 부드럽게 스크롤 ("Jugar Ahora" 버튼)
#[wasm_bindgen]
pub fn scroll_to_section(section_id: &str) -> Result<(), JsValue> {
    let doc = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    if let Some(el) = doc.get_element_by_id(section_id) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        el.scroll_into_view_with_scroll_into_view_options(&options);
    }
    Ok(())
}

// === Private helpers ===

fn build_game(game: &Game) -> JsGame {
    JsGame {
        id: game.id.to_string(),
        name: game.name.to_string(),
        icon: game.icon.to_string(),
        category: game.category.id().to_string(),
        tag: game.tag().to_string(),
        players: game.players_caption(),
        desc: game.desc.to_string(),
    }
}

fn build_portal_state(gallery: &Gallery) -> JsPortalState {
    let active = gallery.category();
    JsPortalState {
        category: active.id().to_string(),
        categories: Category::ALL
            .iter()
            .map(|c| JsCategory {
                id: c.id().to_string(),
                label: c.label().to_string(),
                active: *c == active,
            })
            .collect(),
        games: gallery.filtered_games().into_iter().map(build_game).collect(),
        selected_game: gallery.selected_game().map(build_game),
    }
}

fn build_nav_links() -> Vec<JsNavLink> {
    NAV_LINKS
        .iter()
        .map(|l| JsNavLink {
            label: l.label.to_string(),
            href: l.href(),
        })
        .collect()
}

fn coords(square: Square) -> (u8, u8) {
    (square.row() as u8, square.col() as u8)
}

fn build_board_state(game: &BoardGame) -> JsBoardState {
    let selected = game.selected_square();
    let cells = game
        .board()
        .squares()
        .map(|(square, piece)| JsCell {
            row: square.row() as u8,
            col: square.col() as u8,
            glyph: piece.map(|p| p.glyph()).unwrap_or("").to_string(),
            kind: piece.map(|p| p.kind.as_str().to_string()),
            color: piece.map(|p| p.color.as_str().to_string()),
            light: square.is_light(),
            selected: selected == Some(square),
        })
        .collect();

    JsBoardState {
        cells,
        turn: game.turn().as_str().to_string(),
        turn_label: game.turn().label().to_string(),
        selected: selected.map(coords),
    }
}

fn build_click_outcome(outcome: &ClickOutcome) -> JsClickOutcome {
    match *outcome {
        ClickOutcome::Ignored => JsClickOutcome {
            outcome: "ignored".to_string(),
            from: None,
            to: None,
            captured: None,
        },
        ClickOutcome::Selected(square) => JsClickOutcome {
            outcome: "selected".to_string(),
            from: Some(coords(square)),
            to: None,
            captured: None,
        },
        ClickOutcome::Moved { from, to, captured } => JsClickOutcome {
            outcome: "moved".to_string(),
            from: Some(coords(from)),
            to: Some(coords(to)),
            captured: captured.map(|p| p.glyph().to_string()),
        },
    }
}

/// 콘솔 로그
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

#[wasm_bindgen(start)]
pub fn main() {
    log("SukunaArts WASM initialized!");
}
