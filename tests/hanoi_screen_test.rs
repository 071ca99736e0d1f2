//! Tests for the Tower of Hanoi screen: start page, peg clicks, the pause
//! menu, the success panel and rendering.

use parlor_games::hanoi::{HanoiLayout, HanoiScreen};
use parlor_games::widgets::{BUTTON_COLOR, BUTTON_HOVER_COLOR};
use parlor_games::{Flow, GameKey, InputEvent, Screen, ScrollDirection};
use ratatui::{Terminal, backend::TestBackend, buffer::Buffer, layout::Rect, style::Color};
use std::time::Duration;
use tower_of_hanoi::{Disk, DiskCount, GameState, Peg};

const AREA: Rect = Rect {
    x: 0,
    y: 0,
    width: 80,
    height: 24,
};

fn layout() -> HanoiLayout {
    HanoiLayout::new(AREA)
}

fn send(screen: &mut HanoiScreen, event: InputEvent) -> Flow {
    screen.handle(event, AREA)
}

fn key(screen: &mut HanoiScreen, key: GameKey) -> Flow {
    send(screen, InputEvent::Key(key))
}

fn click_rect(screen: &mut HanoiScreen, rect: Rect) {
    send(
        screen,
        InputEvent::PointerDown {
            column: rect.x + rect.width / 2,
            row: rect.y + rect.height / 2,
        },
    );
}

fn click_peg(screen: &mut HanoiScreen, peg: Peg) {
    let layout = layout();
    send(
        screen,
        InputEvent::PointerDown {
            column: layout.peg_columns[peg.index()],
            row: layout.peg_top + 2,
        },
    );
}

fn playing(disks: u8) -> HanoiScreen {
    let mut screen = HanoiScreen::new(DiskCount::new(disks));
    key(&mut screen, GameKey::Confirm);
    assert_eq!(screen.game().state(), GameState::Playing);
    screen
}

/// Solves three disks onto the right peg with digit keys.
fn solve_three(screen: &mut HanoiScreen) {
    for (from, to) in [(1, 3), (1, 2), (3, 2), (1, 3), (2, 1), (2, 3), (1, 3)] {
        key(screen, GameKey::Digit(from));
        key(screen, GameKey::Digit(to));
    }
}

fn render_buffer(screen: &HanoiScreen) -> Buffer {
    let mut terminal = Terminal::new(TestBackend::new(AREA.width, AREA.height)).unwrap();
    terminal.draw(|f| screen.render(f, Duration::ZERO)).unwrap();
    terminal.backend().buffer().clone()
}

fn render(screen: &HanoiScreen) -> String {
    render_buffer(screen)
        .content
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

/// Background of the middle cell of `rect`.
fn face_color(screen: &HanoiScreen, rect: Rect) -> Color {
    let buffer = render_buffer(screen);
    buffer[(rect.x + rect.width / 2, rect.y + rect.height / 2)].bg
}

fn hover(screen: &mut HanoiScreen, rect: Rect) {
    send(
        screen,
        InputEvent::PointerMoved {
            column: rect.x + rect.width / 2,
            row: rect.y + rect.height / 2,
        },
    );
}

#[test]
fn test_start_page_adjusts_selection() {
    let mut screen = HanoiScreen::new(DiskCount::DEFAULT);

    key(&mut screen, GameKey::Up);
    assert_eq!(screen.game().selection().get(), 5);
    send(&mut screen, InputEvent::Scroll(ScrollDirection::Down));
    send(&mut screen, InputEvent::Scroll(ScrollDirection::Down));
    assert_eq!(screen.game().selection().get(), 3);
    key(&mut screen, GameKey::Down);
    assert_eq!(screen.game().selection().get(), 3);

    key(&mut screen, GameKey::Confirm);
    assert_eq!(screen.game().state(), GameState::Playing);
    assert_eq!(screen.game().tower().disk_count().get(), 3);
}

#[test]
fn test_start_page_ignores_clicks() {
    let mut screen = HanoiScreen::new(DiskCount::DEFAULT);
    click_peg(&mut screen, Peg::Left);
    assert_eq!(screen.game().state(), GameState::Start);
}

#[test]
fn test_clicking_pegs_moves_disk() {
    let mut screen = playing(4);

    click_peg(&mut screen, Peg::Left);
    assert_eq!(
        screen.game().tower().held().map(|h| *h.disk()),
        Some(Disk::new(1))
    );
    click_peg(&mut screen, Peg::Right);

    let tower = screen.game().tower();
    assert!(tower.held().is_none());
    assert_eq!(tower.top(Peg::Right), Some(Disk::new(1)));
    assert_eq!(tower.move_count(), 1);
}

#[test]
fn test_click_between_pegs_is_ignored() {
    let mut screen = playing(4);
    send(
        &mut screen,
        InputEvent::PointerDown {
            column: 30,
            row: 12,
        },
    );
    assert!(screen.game().tower().held().is_none());
}

#[test]
fn test_illegal_drop_returns_disk() {
    let mut screen = playing(4);
    click_peg(&mut screen, Peg::Left);
    click_peg(&mut screen, Peg::Middle);

    click_peg(&mut screen, Peg::Left);
    click_peg(&mut screen, Peg::Middle);

    let tower = screen.game().tower();
    assert_eq!(tower.disks(Peg::Left).len(), 3);
    assert_eq!(tower.top(Peg::Middle), Some(Disk::new(1)));
    assert_eq!(tower.move_count(), 1);
}

#[test]
fn test_menu_button_and_resume() {
    let mut screen = playing(4);

    click_rect(&mut screen, layout().menu_button);
    assert_eq!(screen.game().state(), GameState::Menu);

    // Pegs are inert behind the menu.
    click_peg(&mut screen, Peg::Left);
    assert!(screen.game().tower().held().is_none());

    click_rect(&mut screen, layout().resume_button);
    assert_eq!(screen.game().state(), GameState::Playing);
}

#[test]
fn test_escape_toggles_menu() {
    let mut screen = playing(4);
    key(&mut screen, GameKey::Escape);
    assert_eq!(screen.game().state(), GameState::Menu);
    key(&mut screen, GameKey::Escape);
    assert_eq!(screen.game().state(), GameState::Playing);
}

#[test]
fn test_menu_restart_resets_moves() {
    let mut screen = playing(5);
    key(&mut screen, GameKey::Digit(1));
    key(&mut screen, GameKey::Digit(2));
    assert_eq!(screen.game().tower().move_count(), 1);

    key(&mut screen, GameKey::Escape);
    click_rect(&mut screen, layout().restart_button);

    assert_eq!(screen.game().state(), GameState::Playing);
    assert_eq!(screen.game().tower().move_count(), 0);
    assert_eq!(screen.game().tower().disks(Peg::Left).len(), 5);
}

#[test]
fn test_menu_previous_level() {
    let mut screen = playing(4);
    key(&mut screen, GameKey::Escape);
    click_rect(&mut screen, layout().previous_button);
    assert_eq!(screen.game().state(), GameState::Playing);
    assert_eq!(screen.game().tower().disk_count().get(), 3);

    // No level below three: the menu stays open.
    key(&mut screen, GameKey::Escape);
    click_rect(&mut screen, layout().previous_button);
    assert_eq!(screen.game().state(), GameState::Menu);
    assert_eq!(screen.game().tower().disk_count().get(), 3);
}

#[test]
fn test_solve_then_next_level() {
    let mut screen = playing(3);
    solve_three(&mut screen);

    assert_eq!(screen.game().state(), GameState::Won);
    assert_eq!(screen.game().tower().move_count(), 7);

    click_rect(&mut screen, layout().next_button);
    assert_eq!(screen.game().state(), GameState::Playing);
    assert_eq!(screen.game().tower().disk_count().get(), 4);
    assert_eq!(screen.game().tower().move_count(), 0);
}

#[test]
fn test_confirm_advances_from_success() {
    let mut screen = playing(3);
    solve_three(&mut screen);
    key(&mut screen, GameKey::Confirm);
    assert_eq!(screen.game().tower().disk_count().get(), 4);
}

#[test]
fn test_quit_from_any_state() {
    let mut screen = HanoiScreen::new(DiskCount::DEFAULT);
    assert_eq!(key(&mut screen, GameKey::Quit), Flow::Quit);
    let mut screen = playing(3);
    assert_eq!(key(&mut screen, GameKey::Quit), Flow::Quit);
    key(&mut screen, GameKey::Escape);
    assert_eq!(key(&mut screen, GameKey::Quit), Flow::Quit);
}

#[test]
fn test_render_start_page() {
    let screen = HanoiScreen::new(DiskCount::new(6));
    let text = render(&screen);
    assert!(text.contains("TOWER OF HANOI"));
    assert!(text.contains("< 6 >"));
}

#[test]
fn test_render_board_and_menu() {
    let mut screen = playing(4);
    key(&mut screen, GameKey::Digit(1));
    key(&mut screen, GameKey::Digit(3));
    let text = render(&screen);
    assert!(text.contains("Moves: 1"));
    assert!(text.contains("Menu"));

    key(&mut screen, GameKey::Escape);
    let text = render(&screen);
    assert!(text.contains("Restart"));
    assert!(text.contains("Previous level"));
    assert!(text.contains("Resume"));
}

#[test]
fn test_render_success_panel() {
    let mut screen = playing(3);
    solve_three(&mut screen);
    let text = render(&screen);
    assert!(text.contains("SUCCESS!"));
    assert!(text.contains("Minimum moves: 7"));
    assert!(text.contains("Your moves: 7"));
    assert!(text.contains("Next level"));
}

#[test]
fn test_render_ten_disks_survives_small_terminal() {
    let screen = playing(10);
    let mut terminal = Terminal::new(TestBackend::new(20, 8)).unwrap();
    terminal.draw(|f| screen.render(f, Duration::ZERO)).unwrap();
}

#[test]
fn test_menu_buttons_light_up_under_pointer() {
    let mut screen = playing(4);
    key(&mut screen, GameKey::Escape);
    let layout = layout();

    hover(&mut screen, layout.resume_button);
    assert_eq!(face_color(&screen, layout.resume_button), BUTTON_HOVER_COLOR);
    assert_eq!(face_color(&screen, layout.restart_button), BUTTON_COLOR);

    hover(&mut screen, layout.restart_button);
    assert_eq!(face_color(&screen, layout.resume_button), BUTTON_COLOR);
    assert_eq!(face_color(&screen, layout.restart_button), BUTTON_HOVER_COLOR);
}

#[test]
fn test_hover_does_not_change_game() {
    let mut screen = playing(4);
    let before = screen.game().clone();
    hover(&mut screen, layout().menu_button);
    assert_eq!(screen.game(), &before);
    assert_eq!(face_color(&screen, layout().menu_button), BUTTON_HOVER_COLOR);
}

#[test]
fn test_menu_button_not_lit_on_success_panel() {
    let mut screen = playing(3);
    solve_three(&mut screen);
    hover(&mut screen, layout().menu_button);
    assert_eq!(face_color(&screen, layout().menu_button), BUTTON_COLOR);

    hover(&mut screen, layout().next_button);
    assert_eq!(face_color(&screen, layout().next_button), BUTTON_HOVER_COLOR);
}
