use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use crate::config::{
    GridSize, Theme, BORDER_HALF_BLOCK, GLYPH_FOOD, GLYPH_GRID_DOT, GLYPH_SNAKE_BODY,
    GLYPH_SNAKE_HEAD_DOWN, GLYPH_SNAKE_HEAD_LEFT, GLYPH_SNAKE_HEAD_RIGHT, GLYPH_SNAKE_HEAD_UP,
};
use crate::game::{GameState, RunState};
use crate::input::Direction;
use crate::snake::Position;
use crate::ui::overlay::render_game_over;

/// Presentation options resolved from settings and CLI flags.
#[derive(Debug, Clone, Copy)]
pub struct ViewOptions<'a> {
    pub theme: &'a Theme,
    pub show_grid: bool,
}

/// Renders one full frame from immutable game state.
pub fn render(frame: &mut Frame<'_>, state: &GameState, view: ViewOptions<'_>) {
    let (score_area, play_area) = split_frame(frame.area(), state.bounds());

    render_score_line(frame, score_area, state.score, view.theme);

    let block = Block::bordered().border_set(BORDER_HALF_BLOCK).border_style(
        Style::new()
            .fg(view.theme.border_fg)
            .bg(view.theme.border_bg),
    );
    let inner = block.inner(play_area);
    frame.render_widget(block, play_area);

    fill_play_area(frame, inner, view);
    render_food(frame, inner, state, view.theme);
    render_snake(frame, inner, state, view.theme);

    if state.status == RunState::Ended {
        render_game_over(frame, play_area, state.score, view.theme);
    }
}

/// Centers a one-line HUD over a bordered board of the grid's cell size.
fn split_frame(area: Rect, grid: GridSize) -> (Rect, Rect) {
    let board_width = grid.width.saturating_add(2);
    let board_height = grid.height.saturating_add(2);

    let [column] = Layout::horizontal([Constraint::Length(board_width)])
        .flex(Flex::Center)
        .areas(area);
    let [score_area, play_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(board_height.min(area.height.saturating_sub(1))),
    ])
    .areas(column);

    (score_area, play_area)
}

fn render_score_line(frame: &mut Frame<'_>, area: Rect, score: u32, theme: &Theme) {
    frame.render_widget(
        Paragraph::new(Line::from(format!("Apples Eaten: {score}")))
            .alignment(Alignment::Center)
            .style(
                Style::new()
                    .fg(theme.hud_score)
                    .add_modifier(Modifier::BOLD),
            ),
        area,
    );
}

fn fill_play_area(frame: &mut Frame<'_>, inner: Rect, view: ViewOptions<'_>) {
    frame.render_widget(
        Paragraph::new("").style(Style::new().bg(view.theme.play_bg)),
        inner,
    );

    if !view.show_grid {
        return;
    }

    let dot_style = Style::new().fg(view.theme.grid_dot);
    let buffer = frame.buffer_mut();
    for y in inner.y..inner.bottom() {
        for x in inner.x..inner.right() {
            buffer.set_string(x, y, GLYPH_GRID_DOT, dot_style);
        }
    }
}

fn render_food(frame: &mut Frame<'_>, inner: Rect, state: &GameState, theme: &Theme) {
    let Some((x, y)) = cell_to_terminal(inner, state.bounds(), state.food.position) else {
        return;
    };

    frame
        .buffer_mut()
        .set_string(x, y, GLYPH_FOOD, Style::new().fg(theme.food));
}

fn render_snake(frame: &mut Frame<'_>, inner: Rect, state: &GameState, theme: &Theme) {
    let head = state.snake.head();
    let head_glyph = head_glyph(state.snake.heading());

    let buffer = frame.buffer_mut();
    for segment in state.snake.segments() {
        let Some((x, y)) = cell_to_terminal(inner, state.bounds(), *segment) else {
            continue;
        };

        if *segment == head {
            buffer.set_string(
                x,
                y,
                head_glyph,
                Style::new()
                    .fg(theme.snake_head)
                    .add_modifier(Modifier::BOLD),
            );
        } else {
            buffer.set_string(x, y, GLYPH_SNAKE_BODY, Style::new().fg(theme.snake_body));
        }
    }
}

fn head_glyph(heading: Direction) -> &'static str {
    match heading {
        Direction::Up => GLYPH_SNAKE_HEAD_UP,
        Direction::Down => GLYPH_SNAKE_HEAD_DOWN,
        Direction::Left => GLYPH_SNAKE_HEAD_LEFT,
        Direction::Right => GLYPH_SNAKE_HEAD_RIGHT,
    }
}

/// Maps a cell position into terminal coordinates, clipping anything outside
/// the grid or the visible inner area.
fn cell_to_terminal(inner: Rect, bounds: GridSize, position: Position) -> Option<(u16, u16)> {
    if !position.is_within_bounds(bounds) {
        return None;
    }

    let x_offset = u16::try_from(position.x).ok()?;
    let y_offset = u16::try_from(position.y).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x >= inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}
