use rand::Rng;
use serde::Serialize;
use std::str::FromStr;

/// 배경 파티클 개수
pub const PARTICLE_COUNT: usize = 40;

/// JS에서 넘어온 문자열 해석 오류
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GalleryError {
    #[error("unknown category: {0}")]
    UnknownCategory(String),
    #[error("no game with id {0} in the catalog")]
    UnknownGame(String),
}

/// 카테고리 필터
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    All,
    Arcade,
    Puzzle,
    Strategy,
}

impl Category {
    /// 버튼 표시 순서
    pub const ALL: [Category; 4] = [
        Category::All,
        Category::Arcade,
        Category::Puzzle,
        Category::Strategy,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Category::All => "all",
            Category::Arcade => "arcade",
            Category::Puzzle => "puzzle",
            Category::Strategy => "strategy",
        }
    }

    /// 필터 버튼 문구
    pub fn label(self) -> &'static str {
        match self {
            Category::All => "todos",
            Category::Arcade => "arcade",
            Category::Puzzle => "puzzle",
            Category::Strategy => "estrategia",
        }
    }

    /// 카드에 붙는 태그
    pub fn tag(self) -> &'static str {
        match self {
            Category::All => "Todos",
            Category::Arcade => "Arcade",
            Category::Puzzle => "Puzzle",
            Category::Strategy => "Estrategia",
        }
    }

    /// 게임이 이 필터에 걸리는지
    pub fn matches(self, game: &Game) -> bool {
        self == Category::All || game.category == self
    }
}

impl FromStr for Category {
    type Err = GalleryError;

    /// id("strategy")와 버튼 문구("estrategia") 둘 다 허용
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.id() == s || c.label() == s)
            .ok_or_else(|| GalleryError::UnknownCategory(s.to_string()))
    }
}

/// 카탈로그 항목
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Game {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub category: Category,
    pub players: &'static str,
    pub desc: &'static str,
}

impl Game {
    pub fn tag(&self) -> &'static str {
        self.category.tag()
    }

    /// 카드 하단 문구 ("12K jugadores")
    pub fn players_caption(&self) -> String {
        format!("{} jugadores", self.players)
    }
}

/// 고정 카탈로그 (표시 순서 그대로)
pub static CATALOG: [Game; 4] = [
    Game {
        id: "snake",
        name: "Snake",
        icon: "🐍",
        category: Category::Arcade,
        players: "12K",
        desc: "Guia la serpiente y recoge la comida.",
    },
    Game {
        id: "memory",
        name: "Memoria",
        icon: "🧠",
        category: Category::Puzzle,
        players: "8K",
        desc: "Encuentra las parejas de cartas iguales.",
    },
    Game {
        id: "tictactoe",
        name: "Tres en Raya",
        icon: "❌",
        category: Category::Strategy,
        players: "15K",
        desc: "Clásico tres en raya contra la máquina.",
    },
    Game {
        id: "breakout",
        name: "Breakout",
        icon: "🎯",
        category: Category::Arcade,
        players: "9K",
        desc: "Destruye los bloques con la pelota.",
    },
];

pub fn find_game(id: &str) -> Option<&'static Game> {
    CATALOG.iter().find(|g| g.id == id)
}

/// 갤러리 위젯 상태
#[derive(Debug, Clone, Default)]
pub struct Gallery {
    category: Category,
    selected: Option<&'static Game>,
}

impl Gallery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn select_category(&mut self, category: Category) {
        self.category = category;
    }

    /// 현재 필터에 맞는 게임 (카탈로그 순서 유지)
    pub fn filtered_games(&self) -> Vec<&'static Game> {
        CATALOG.iter().filter(|g| self.category.matches(g)).collect()
    }

    pub fn open_game(&mut self, game: &'static Game) {
        self.selected = Some(game);
    }

    /// id로 모달 열기. 없는 id면 선택 상태 유지.
    pub fn open_game_by_id(&mut self, id: &str) -> Result<&'static Game, GalleryError> {
        let game = find_game(id).ok_or_else(|| GalleryError::UnknownGame(id.to_string()))?;
        self.open_game(game);
        Ok(game)
    }

    pub fn close_modal(&mut self) {
        self.selected = None;
    }

    pub fn selected_game(&self) -> Option<&'static Game> {
        self.selected
    }
}

/// 상단 내비게이션 링크
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub label: &'static str,
}

impl NavLink {
    /// 이동할 섹션 id
    pub fn section_id(&self) -> String {
        self.label.to_lowercase()
    }

    pub fn href(&self) -> String {
        format!("#{}", self.section_id())
    }
}

pub static NAV_LINKS: [NavLink; 4] = [
    NavLink { label: "Inicio" },
    NavLink { label: "Juegos" },
    NavLink { label: "Destacado" },
    NavLink { label: "Comunidad" },
];

/// "Jugar Ahora" 버튼이 스크롤하는 섹션
pub const GAMES_SECTION_ID: &str = "juegos";

/// 장식용 파티클 하나
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Particle {
    /// 가로 위치 (%), [0, 100)
    pub left_percent: f64,
    /// 한 변 크기 (px), [2, 5)
    pub size_px: f64,
}

impl Particle {
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self {
            left_percent: rng.gen_range(0.0..100.0),
            size_px: rng.gen_range(2.0..5.0),
        }
    }

    /// span에 넣을 inline style
    pub fn style(&self) -> String {
        format!(
            "left: {}%; width: {}px; height: {}px;",
            self.left_percent, self.size_px, self.size_px
        )
    }
}

pub fn generate_particles<R: Rng>(rng: &mut R, count: usize) -> Vec<Particle> {
    (0..count).map(|_| Particle::random(rng)).collect()
}
