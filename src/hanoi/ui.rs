//! Stateless rendering for Tower of Hanoi.

use super::layout::HanoiLayout;
use crate::widgets::{BORDER_COLOR, button, centered_text, fill, hit, panel};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
};
use tower_of_hanoi::{Disk, GameState, HanoiGame, Peg};

const BG_COLOR: Color = Color::Rgb(220, 230, 240);
const TEXT_COLOR: Color = Color::Rgb(40, 40, 40);
const PEG_COLOR: Color = Color::Rgb(100, 149, 237);
const BASE_COLOR: Color = Color::Rgb(80, 100, 150);
const SUCCESS_COLOR: Color = Color::Rgb(60, 179, 113);

/// Disk colours, indexed by size - 1.
const DISK_COLORS: [Color; 10] = [
    Color::Rgb(255, 99, 71),
    Color::Rgb(255, 165, 0),
    Color::Rgb(255, 215, 0),
    Color::Rgb(152, 251, 152),
    Color::Rgb(100, 149, 237),
    Color::Rgb(138, 43, 226),
    Color::Rgb(238, 130, 238),
    Color::Rgb(255, 192, 203),
    Color::Rgb(192, 192, 192),
    Color::Rgb(128, 128, 128),
];

/// Colour of a disk.
pub fn disk_color(disk: Disk) -> Color {
    DISK_COLORS[usize::from(disk.size().saturating_sub(1)) % DISK_COLORS.len()]
}

/// Draws the screen for the current game state. `pointer` is the last
/// known pointer cell and lights up the button under it.
pub fn draw(frame: &mut Frame, game: &HanoiGame, pointer: Option<(u16, u16)>) {
    let hovered = |rect: Rect| pointer.is_some_and(|(column, row)| hit(rect, column, row));
    let area = frame.area();
    fill(frame, area, BG_COLOR);

    if game.state() == GameState::Start {
        draw_start(frame, area, game);
        return;
    }

    let layout = HanoiLayout::new(area);
    draw_board(frame, &layout, game);
    button(
        frame,
        layout.menu_button,
        "Menu",
        game.state() != GameState::Won && hovered(layout.menu_button),
    );
    match game.state() {
        GameState::Menu => {
            panel(frame, layout.menu_panel, " Menu ");
            for (rect, label) in [
                (layout.restart_button, "Restart"),
                (layout.previous_button, "Previous level"),
                (layout.resume_button, "Resume"),
            ] {
                button(frame, rect, label, hovered(rect));
            }
        }
        GameState::Won => {
            draw_won(frame, &layout, game);
            button(
                frame,
                layout.next_button,
                "Next level",
                hovered(layout.next_button),
            );
        }
        GameState::Start | GameState::Playing => {}
    }
}

fn text_row(area: Rect, y: u16) -> Rect {
    Rect {
        y: area.y + y.min(area.height.saturating_sub(1)),
        height: 1,
        ..area
    }
}

fn draw_start(frame: &mut Frame, area: Rect, game: &HanoiGame) {
    let body = crate::widgets::center_rect(area, area.width, 12);
    let text = Style::new().fg(TEXT_COLOR).bg(BG_COLOR);

    centered_text(
        frame,
        text_row(body, 0),
        "TOWER OF HANOI",
        text.add_modifier(Modifier::BOLD),
    );
    centered_text(frame, text_row(body, 3), "Choose the number of disks", text);
    centered_text(
        frame,
        text_row(body, 5),
        &format!("< {} >", game.selection()),
        Style::new()
            .fg(PEG_COLOR)
            .bg(BG_COLOR)
            .add_modifier(Modifier::BOLD),
    );
    centered_text(
        frame,
        text_row(body, 8),
        "Up/Down or mouse wheel to adjust, Enter to start",
        text,
    );
    centered_text(frame, text_row(body, 10), "Q to quit", text);
}

fn draw_board(frame: &mut Frame, layout: &HanoiLayout, game: &HanoiGame) {
    let tower = game.tower();

    centered_text(
        frame,
        text_row(layout.header, 1),
        &format!("Moves: {}", tower.move_count()),
        Style::new()
            .fg(TEXT_COLOR)
            .bg(BG_COLOR)
            .add_modifier(Modifier::BOLD),
    );

    fill(frame, layout.base, BASE_COLOR);
    for peg in Peg::ALL {
        let column = layout.peg_columns[peg.index()];
        let shaft = Rect::new(column, layout.peg_top, 1, layout.base.y - layout.peg_top);
        fill(frame, shaft, PEG_COLOR);

        for (level, disk) in tower.disks(peg).iter().enumerate() {
            if let Some(row) = layout.stack_row(level) {
                draw_disk(frame, layout.disk_rect(peg, *disk, row), *disk);
            }
        }
    }

    if let Some(held) = tower.held() {
        let rect = layout.disk_rect(*held.source(), *held.disk(), layout.held_row);
        draw_disk(frame, rect, *held.disk());
    }
}

fn draw_disk(frame: &mut Frame, rect: Rect, disk: Disk) {
    fill(frame, rect, disk_color(disk));
    let label = Style::new()
        .fg(BORDER_COLOR)
        .bg(disk_color(disk))
        .add_modifier(Modifier::BOLD);
    if rect.width >= 3 {
        centered_text(frame, rect, &disk.size().to_string(), label);
    }
}

fn draw_won(frame: &mut Frame, layout: &HanoiLayout, game: &HanoiGame) {
    let tower = game.tower();
    let body = layout.won_panel;
    let text = Style::new().fg(TEXT_COLOR).bg(Color::White);

    panel(frame, body, "");
    centered_text(
        frame,
        text_row(body, 2),
        "SUCCESS!",
        Style::new()
            .fg(SUCCESS_COLOR)
            .bg(Color::White)
            .add_modifier(Modifier::BOLD),
    );
    centered_text(
        frame,
        text_row(body, 5),
        &format!("Minimum moves: {}", tower.min_moves()),
        text,
    );
    centered_text(
        frame,
        text_row(body, 6),
        &format!("Your moves: {}", tower.move_count()),
        text,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disk_colors_follow_size() {
        assert_eq!(disk_color(Disk::new(1)), DISK_COLORS[0]);
        assert_eq!(disk_color(Disk::new(10)), DISK_COLORS[9]);
    }
}
