use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use crate::config::Theme;

const GAME_OVER_TITLE: &str = "Game Over";
const RESTART_PROMPT: &str = "Press SPACE to RESTART";
const EXIT_PROMPT: &str = "Press ESC to EXIT";

/// Columns taken by the popup border and inner padding.
const POPUP_CHROME_WIDTH: u16 = 4;
/// Rows taken by the popup border.
const POPUP_CHROME_HEIGHT: u16 = 2;

/// Draws the end-of-game popup over the play area.
pub fn render_game_over(frame: &mut Frame<'_>, area: Rect, score: u32, theme: &Theme) {
    let score_text = format!("Apples Eaten: {score}");

    let widest = [GAME_OVER_TITLE, score_text.as_str(), RESTART_PROMPT, EXIT_PROMPT]
        .iter()
        .map(|line| line.width())
        .max()
        .unwrap_or(0);

    let title_style = Style::new()
        .fg(theme.overlay_title)
        .add_modifier(Modifier::BOLD);
    let text_style = Style::new().fg(theme.overlay_text);

    let lines = vec![
        Line::styled(GAME_OVER_TITLE, title_style),
        Line::from(""),
        Line::styled(score_text, text_style),
        Line::from(""),
        Line::styled(RESTART_PROMPT, text_style),
        Line::styled(EXIT_PROMPT, text_style),
    ];

    let width = u16::try_from(widest).unwrap_or(u16::MAX).saturating_add(POPUP_CHROME_WIDTH);
    let height = u16::try_from(lines.len())
        .unwrap_or(u16::MAX)
        .saturating_add(POPUP_CHROME_HEIGHT);
    let popup = centered_rect(area, width, height);

    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::bordered().border_style(Style::new().fg(theme.border_fg)))
            .style(Style::new().bg(theme.play_bg)),
        popup,
    );
}

fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let [mid] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [center] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(mid);

    center
}
