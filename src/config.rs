use ratatui::style::Color;
use ratatui::symbols::border;

/// Logical playfield width in pixels.
pub const SCREEN_WIDTH: i32 = 600;

/// Logical playfield height in pixels.
pub const SCREEN_HEIGHT: i32 = 600;

/// Pixel size of one grid cell; also the movement step size.
pub const UNIT_SIZE: i32 = 25;

/// Fixed gameplay tick period in milliseconds.
pub const TICK_INTERVAL_MS: u64 = 75;

/// Snake length at the start of every game.
pub const INITIAL_BODY_LENGTH: usize = 6;

/// Playfield width in cells.
pub const GRID_WIDTH: u16 = (SCREEN_WIDTH / UNIT_SIZE) as u16;

/// Playfield height in cells.
pub const GRID_HEIGHT: u16 = (SCREEN_HEIGHT / UNIT_SIZE) as u16;

/// Logical grid dimensions passed through the game as a named type.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }
}

/// The stock 24×24 playfield derived from the pixel geometry.
pub const DEFAULT_GRID: GridSize = GridSize {
    width: GRID_WIDTH,
    height: GRID_HEIGHT,
};

/// A color theme applied to all visual elements.
#[derive(Debug)]
pub struct Theme {
    /// Identifier used by the settings file and the `--theme` flag.
    pub name: &'static str,
    pub snake_head: Color,
    pub snake_body: Color,
    pub food: Color,
    /// Color of the background grid dots.
    pub grid_dot: Color,
    /// Background color for empty play-area cells.
    pub play_bg: Color,
    pub border_fg: Color,
    pub border_bg: Color,
    pub hud_score: Color,
    pub overlay_title: Color,
    pub overlay_text: Color,
}

/// The original palette: green snake, red apple, gray grid on black.
pub const THEME_CLASSIC: Theme = Theme {
    name: "classic",
    snake_head: Color::Green,
    snake_body: Color::Rgb(45, 180, 0),
    food: Color::Red,
    grid_dot: Color::DarkGray,
    play_bg: Color::Black,
    border_fg: Color::White,
    border_bg: Color::DarkGray,
    hud_score: Color::White,
    overlay_title: Color::Red,
    overlay_text: Color::Red,
};

/// Ocean cyan theme.
pub const THEME_OCEAN: Theme = Theme {
    name: "ocean",
    snake_head: Color::White,
    snake_body: Color::Cyan,
    food: Color::Yellow,
    grid_dot: Color::DarkGray,
    play_bg: Color::Black,
    border_fg: Color::Cyan,
    border_bg: Color::DarkGray,
    hud_score: Color::Cyan,
    overlay_title: Color::Yellow,
    overlay_text: Color::Cyan,
};

/// Neon magenta/yellow theme.
pub const THEME_NEON: Theme = Theme {
    name: "neon",
    snake_head: Color::White,
    snake_body: Color::Magenta,
    food: Color::Yellow,
    grid_dot: Color::DarkGray,
    play_bg: Color::Black,
    border_fg: Color::Magenta,
    border_bg: Color::Black,
    hud_score: Color::Magenta,
    overlay_title: Color::Yellow,
    overlay_text: Color::Magenta,
};

/// All built-in themes.
pub const THEMES: &[Theme] = &[THEME_CLASSIC, THEME_OCEAN, THEME_NEON];

/// Looks up a built-in theme by its id, case-insensitively.
#[must_use]
pub fn theme_by_name(name: &str) -> Option<&'static Theme> {
    THEMES
        .iter()
        .find(|theme| theme.name.eq_ignore_ascii_case(name))
}

/// Half-block border set: solid side faces the play area.
///
/// - Top row + top corners: `▄` (solid bottom -> play area below)
/// - Bottom row + bottom corners: `▀` (solid top -> play area above)
/// - Left and right columns: `█` (fully solid)
pub const BORDER_HALF_BLOCK: border::Set = border::Set {
    top_left: "▄",
    top_right: "▄",
    bottom_left: "▀",
    bottom_right: "▀",
    vertical_left: "█",
    vertical_right: "█",
    horizontal_top: "▄",
    horizontal_bottom: "▀",
};

pub const GLYPH_SNAKE_HEAD_UP: &str = "▲";
pub const GLYPH_SNAKE_HEAD_DOWN: &str = "▼";
pub const GLYPH_SNAKE_HEAD_LEFT: &str = "◀";
pub const GLYPH_SNAKE_HEAD_RIGHT: &str = "▶";
pub const GLYPH_SNAKE_BODY: &str = "█";
pub const GLYPH_FOOD: &str = "●";
pub const GLYPH_GRID_DOT: &str = "·";
