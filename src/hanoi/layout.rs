//! Screen geometry and hit-testing for Tower of Hanoi.

use crate::widgets::{center_rect, hit};
use ratatui::layout::{Constraint, Layout, Rect};
use tower_of_hanoi::{Disk, Peg};

/// Tallest peg, in rows: room for ten disks plus one.
const MAX_PEG_HEIGHT: u16 = 11;

/// Areas of the Hanoi screen. Everything derives from the terminal area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HanoiLayout {
    /// Move counter row.
    pub header: Rect,
    /// Opens the pause menu.
    pub menu_button: Rect,
    /// Board area below the header.
    pub play: Rect,
    /// The bar the pegs stand on.
    pub base: Rect,
    /// Row of the top of each peg.
    pub peg_top: u16,
    /// Row where the held disk floats.
    pub held_row: u16,
    /// Column of each peg's centre.
    pub peg_columns: [u16; 3],
    /// Clicks closer than this to a peg centre select it.
    pub peg_tolerance: u16,
    /// Widest half-width a disk may take without touching the next peg.
    pub max_half_width: u16,
    /// Pause menu panel.
    pub menu_panel: Rect,
    /// "Restart" in the pause menu.
    pub restart_button: Rect,
    /// "Previous level" in the pause menu.
    pub previous_button: Rect,
    /// "Resume" in the pause menu.
    pub resume_button: Rect,
    /// Success panel.
    pub won_panel: Rect,
    /// "Next level" on the success panel.
    pub next_button: Rect,
}

impl HanoiLayout {
    /// Computes the layout for the full terminal area.
    pub fn new(area: Rect) -> Self {
        let [header, play] =
            Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(area);

        let menu_button = Rect::new(
            header.right().saturating_sub(12).max(header.x),
            header.y,
            10u16.min(header.width),
            header.height,
        );

        let base = Rect::new(
            play.x + 2u16.min(play.width / 2),
            play.bottom().saturating_sub(2).max(play.y),
            play.width.saturating_sub(4),
            1u16.min(play.height),
        );
        let peg_height = MAX_PEG_HEIGHT.min(base.y.saturating_sub(play.y + 2));
        let peg_top = base.y - peg_height;
        let held_row = peg_top.saturating_sub(2).max(play.y);

        let peg_columns = [
            area.x + area.width / 4,
            area.x + area.width / 2,
            area.x + area.width * 3 / 4,
        ];
        let spacing = area.width / 4;
        let peg_tolerance = ((u32::from(area.width) * 60 / 800) as u16).max(2);
        let max_half_width = (spacing.saturating_sub(2) / 2).max(1);

        let menu_panel = center_rect(area, 30, 15);
        let button_at = |panel: Rect, offset: u16| {
            let row = Rect {
                y: panel.y + offset.min(panel.height),
                height: 3u16.min(panel.height.saturating_sub(offset)),
                ..panel
            };
            center_rect(row, 20, 3)
        };
        let won_panel = center_rect(area, 36, 14);

        Self {
            header,
            menu_button,
            play,
            base,
            peg_top,
            held_row,
            peg_columns,
            peg_tolerance,
            max_half_width,
            menu_panel,
            restart_button: button_at(menu_panel, 3),
            previous_button: button_at(menu_panel, 7),
            resume_button: button_at(menu_panel, 11),
            won_panel,
            next_button: button_at(won_panel, 9),
        }
    }

    /// Peg near the clicked column, if any.
    pub fn peg_at(&self, column: u16) -> Option<Peg> {
        Peg::ALL
            .into_iter()
            .find(|peg| self.peg_columns[peg.index()].abs_diff(column) < self.peg_tolerance)
    }

    /// Whether a click lands on the menu button.
    pub fn on_menu_button(&self, column: u16, row: u16) -> bool {
        hit(self.menu_button, column, row)
    }

    /// Half the width of a disk; size 1 is narrowest, size 10 fills the gap.
    pub fn half_width(&self, disk: Disk) -> u16 {
        let steps = u16::from(disk.size().saturating_sub(1));
        1 + steps * self.max_half_width.saturating_sub(1) / 9
    }

    /// Rectangle for `disk` centred on `peg` at `row`.
    pub fn disk_rect(&self, peg: Peg, disk: Disk, row: u16) -> Rect {
        let half = self.half_width(disk);
        let centre = self.peg_columns[peg.index()];
        Rect::new(centre.saturating_sub(half), row, half * 2 + 1, 1)
    }

    /// Row of the `level`-th disk from the bottom of a peg, if it fits on screen.
    pub fn stack_row(&self, level: usize) -> Option<u16> {
        let level = u16::try_from(level).ok()?;
        let row = self.base.y.checked_sub(level + 1)?;
        (row >= self.play.y).then_some(row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> HanoiLayout {
        HanoiLayout::new(Rect::new(0, 0, 80, 24))
    }

    #[test]
    fn test_pegs_at_quarters() {
        let layout = layout();
        assert_eq!(layout.peg_columns, [20, 40, 60]);
        assert_eq!(layout.peg_tolerance, 6);
        assert_eq!(layout.peg_at(20), Some(Peg::Left));
        assert_eq!(layout.peg_at(45), Some(Peg::Middle));
        assert_eq!(layout.peg_at(65), Some(Peg::Right));
        assert_eq!(layout.peg_at(66), None);
        assert_eq!(layout.peg_at(30), None);
    }

    #[test]
    fn test_disks_fit_between_pegs() {
        let layout = layout();
        let widest = layout.disk_rect(Peg::Left, Disk::new(10), 10);
        let next = layout.disk_rect(Peg::Middle, Disk::new(10), 10);
        assert!(widest.right() <= next.x);
        assert_eq!(layout.disk_rect(Peg::Middle, Disk::new(1), 10).width, 3);
    }

    #[test]
    fn test_ten_disks_fit_on_80x24() {
        let layout = layout();
        assert!(layout.stack_row(9).is_some());
        assert!(layout.held_row < layout.peg_top);
        assert!(layout.held_row >= layout.play.y);
    }

    #[test]
    fn test_menu_buttons_do_not_overlap() {
        let layout = layout();
        assert!(layout.restart_button.bottom() <= layout.previous_button.y);
        assert!(layout.previous_button.bottom() <= layout.resume_button.y);
        assert!(layout.resume_button.bottom() <= layout.menu_panel.bottom());
    }
}
