use crate::consts;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{
        block::{Block, Padding},
        Clear, Widget,
    },
};

/// A widget for displaying the pause pop-up
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct Paused;

impl Paused {
    /// The height that should be used for the `Rect` passed to
    /// `Paused::render()`
    pub(super) const HEIGHT: u16 = 5;

    /// The width that should be used for the `Rect` passed to
    /// `Paused::render()`
    pub(super) const WIDTH: u16 = 19;

    const OPTIONS: [(&'static str, &'static str); 3] =
        [("Resume", "p"), ("New Game", "n"), ("Quit", "q")];
}

impl Widget for Paused {
    /*
     * ┌──── PAUSED ─────┐
     * │ Resume (p)      │
     * │ New Game (n)    │
     * │ Quit (q)        │
     * └─────────────────┘
     */

    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .title(" PAUSED ")
            .title_alignment(Alignment::Center)
            .padding(Padding::horizontal(1))
            .style(Style::reset());
        let inner = block.inner(area);
        Clear.render(area, buf);
        block.render(area, buf);
        for ((label, key), row) in Paused::OPTIONS.into_iter().zip(inner.rows()) {
            Line::from_iter([
                Span::raw(label),
                Span::raw(" ("),
                Span::styled(key, consts::KEY_STYLE),
                Span::raw(")"),
            ])
            .render(row, buf);
        }
    }
}
