//! Tests for the fading tic-tac-toe screen: pointer and keyboard input,
//! restart and rendering.

use fading_tictactoe::{Board, Player, Position, Square};
use parlor_games::tictactoe::{BoardLayout, TicTacToeScreen};
use parlor_games::{Flow, GameKey, InputEvent, Screen};
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::TestBackend, layout::Rect};
use std::time::Duration;

const AREA: Rect = Rect {
    x: 0,
    y: 0,
    width: 80,
    height: 24,
};

fn screen() -> TicTacToeScreen {
    TicTacToeScreen::with_rng(Duration::from_millis(400), StdRng::seed_from_u64(7))
}

/// Terminal cell at the middle of a board cell.
fn cell_centre(pos: Position) -> InputEvent {
    let board = BoardLayout::new(AREA).board;
    let column = board.x + (2 * pos.col() as u16 + 1) * board.width / 6;
    let row = board.y + (2 * pos.row() as u16 + 1) * board.height / 6;
    InputEvent::PointerDown { column, row }
}

fn click(screen: &mut TicTacToeScreen, pos: Position) {
    assert_eq!(screen.handle(cell_centre(pos), AREA), Flow::Continue);
}

fn key(screen: &mut TicTacToeScreen, key: GameKey) -> Flow {
    screen.handle(InputEvent::Key(key), AREA)
}

fn render(screen: &TicTacToeScreen) -> String {
    let mut terminal = Terminal::new(TestBackend::new(AREA.width, AREA.height)).unwrap();
    terminal
        .draw(|f| screen.render(f, Duration::from_millis(500)))
        .unwrap();
    terminal
        .backend()
        .buffer()
        .content
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

/// Plays a row-0 win for whoever starts.
fn play_to_win(screen: &mut TicTacToeScreen) -> Player {
    let starter = screen.game().to_move();
    for pos in [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::TopCenter,
        Position::Center,
        Position::TopRight,
    ] {
        click(screen, pos);
    }
    starter
}

#[test]
fn test_click_places_mark_for_player_to_move() {
    let mut screen = screen();
    let starter = screen.game().to_move();

    click(&mut screen, Position::BottomRight);

    assert_eq!(
        screen.game().board().get(Position::BottomRight),
        Square::Occupied(starter)
    );
    assert_eq!(screen.game().to_move(), starter.opponent());
}

#[test]
fn test_click_on_occupied_cell_is_ignored() {
    let mut screen = screen();
    let starter = screen.game().to_move();

    click(&mut screen, Position::Center);
    click(&mut screen, Position::Center);

    assert_eq!(
        screen.game().board().get(Position::Center),
        Square::Occupied(starter)
    );
    assert_eq!(screen.game().to_move(), starter.opponent());
}

#[test]
fn test_click_outside_board_is_ignored() {
    let mut screen = screen();
    let before = screen.game().clone();

    screen.handle(InputEvent::PointerDown { column: 2, row: 10 }, AREA);
    screen.handle(InputEvent::PointerDown { column: 40, row: 1 }, AREA);

    assert_eq!(screen.game(), &before);
}

#[test]
fn test_cursor_and_confirm_place_mark() {
    let mut screen = screen();
    assert_eq!(screen.cursor(), Position::Center);

    key(&mut screen, GameKey::Up);
    key(&mut screen, GameKey::Left);
    key(&mut screen, GameKey::Left);
    assert_eq!(screen.cursor(), Position::TopLeft);

    let starter = screen.game().to_move();
    key(&mut screen, GameKey::Confirm);
    assert_eq!(
        screen.game().board().get(Position::TopLeft),
        Square::Occupied(starter)
    );
}

#[test]
fn test_digit_places_mark() {
    let mut screen = screen();
    let starter = screen.game().to_move();

    key(&mut screen, GameKey::Digit(9));

    assert_eq!(
        screen.game().board().get(Position::BottomRight),
        Square::Occupied(starter)
    );
}

#[test]
fn test_win_then_restart_button() {
    let mut screen = screen();
    let winner = play_to_win(&mut screen);
    assert_eq!(screen.game().winner(), Some(winner));

    // Board clicks do nothing once the game is over.
    click(&mut screen, Position::BottomLeft);
    assert_eq!(screen.game().board().get(Position::BottomLeft), Square::Empty);

    let button = BoardLayout::new(AREA).restart_button;
    screen.handle(
        InputEvent::PointerDown {
            column: button.x + button.width / 2,
            row: button.y + button.height / 2,
        },
        AREA,
    );

    assert!(!screen.game().is_over());
    assert_eq!(screen.game().board(), &Board::new());
}

#[test]
fn test_restart_key_clears_board() {
    let mut screen = screen();
    click(&mut screen, Position::Center);

    key(&mut screen, GameKey::Restart);

    assert_eq!(screen.game().board(), &Board::new());
    assert!(screen.game().queue(Player::X).is_empty());
    assert!(screen.game().queue(Player::O).is_empty());
}

#[test]
fn test_quit_and_escape_leave() {
    let mut screen = screen();
    assert_eq!(key(&mut screen, GameKey::Quit), Flow::Quit);
    assert_eq!(key(&mut screen, GameKey::Escape), Flow::Quit);
}

#[test]
fn test_render_shows_status() {
    let mut screen = screen();
    click(&mut screen, Position::Center);

    let text = render(&screen);
    assert!(text.contains(&screen.game().status_text()));
    assert!(!text.contains("Play again"));
}

#[test]
fn test_render_after_win_offers_restart() {
    let mut screen = screen();
    let winner = play_to_win(&mut screen);

    let text = render(&screen);
    assert!(text.contains(&format!("Player {winner} wins!")));
    assert!(text.contains("Play again"));
}

#[test]
fn test_render_survives_tiny_terminal() {
    let screen = screen();
    let mut terminal = Terminal::new(TestBackend::new(8, 3)).unwrap();
    terminal.draw(|f| screen.render(f, Duration::ZERO)).unwrap();
}
