//! Drawing and hit-testing helpers shared by both games.

use ratatui::{
    Frame,
    layout::{Alignment, Position, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

/// Button face colour.
pub const BUTTON_COLOR: Color = Color::Rgb(240, 240, 240);
/// Button face colour under the pointer.
pub const BUTTON_HOVER_COLOR: Color = Color::Rgb(200, 200, 200);
/// Button border and label colour.
pub const BORDER_COLOR: Color = Color::Rgb(50, 50, 50);

/// Rectangle of at most `width` x `height` centred in `area`.
pub fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// Whether the terminal cell at (`column`, `row`) lies inside `rect`.
pub fn hit(rect: Rect, column: u16, row: u16) -> bool {
    rect.contains(Position::new(column, row))
}

/// Fills `rect` with a solid colour.
pub fn fill(frame: &mut Frame, rect: Rect, color: Color) {
    let rect = rect.intersection(frame.area());
    frame.render_widget(Block::new().style(Style::new().bg(color)), rect);
}

/// Draws a bordered popup panel, clearing whatever was underneath.
pub fn panel(frame: &mut Frame, rect: Rect, title: &str) {
    let rect = rect.intersection(frame.area());
    frame.render_widget(Clear, rect);
    let block = Block::new()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(Line::from(title.to_string()).centered())
        .style(Style::new().fg(BORDER_COLOR).bg(Color::White));
    frame.render_widget(block, rect);
}

/// Draws a rounded button with a centred label, lighter while `hovered`.
pub fn button(frame: &mut Frame, rect: Rect, label: &str, hovered: bool) {
    let face = if hovered { BUTTON_HOVER_COLOR } else { BUTTON_COLOR };
    let rect = rect.intersection(frame.area());
    frame.render_widget(Clear, rect);
    let paragraph = Paragraph::new(label.to_string())
        .alignment(Alignment::Center)
        .style(
            Style::new()
                .fg(BORDER_COLOR)
                .bg(face)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::new()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    frame.render_widget(paragraph, rect);
}

/// Draws a single line of centred text in `rect`.
pub fn centered_text(frame: &mut Frame, rect: Rect, text: &str, style: Style) {
    let rect = rect.intersection(frame.area());
    frame.render_widget(
        Paragraph::new(text.to_string())
            .style(style)
            .alignment(Alignment::Center),
        rect,
    );
}
