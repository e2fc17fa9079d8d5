use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Style},
    text::Text,
    widgets::{Block, Widget},
};
use stakkr_engine::{GamePhase, GameSession};

use crate::ui::widgets::{BoardDisplay, color, style};

/// Full game view: banner line, bordered board, and the key hint line.
#[derive(Debug)]
pub struct SessionDisplay<'a> {
    session: &'a GameSession,
}

impl<'a> SessionDisplay<'a> {
    pub fn new(session: &'a GameSession) -> Self {
        Self { session }
    }
}

impl Widget for SessionDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &SessionDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_color = match self.session.phase() {
            GamePhase::Running => color::WHITE,
            GamePhase::Won => color::GREEN,
            GamePhase::Lost => color::RED,
        };

        let board = BoardDisplay::new(self.session).block(
            Block::bordered()
                .border_style(border_color)
                .style(style::DEFAULT),
        );

        let banner = Text::from(self.session.display_message())
            .style(style::DEFAULT)
            .centered();

        let hint = if self.session.phase().is_running() {
            "PRESS SPACE TO SET BLOCKS | Q TO QUIT"
        } else {
            "PRESS R TO PLAY AGAIN | Q TO QUIT"
        };
        let hint = Text::from(hint)
            .style(Style::default().fg(Color::DarkGray))
            .centered();

        let [banner_area, board_area, hint_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(board.height()),
            Constraint::Length(1),
        ])
        .flex(Flex::Center)
        .areas(area);
        let [board_area] = Layout::horizontal([Constraint::Length(board.width())])
            .flex(Flex::Center)
            .areas(board_area);

        banner.render(banner_area, buf);
        board.render(board_area, buf);
        hint.render(hint_area, buf);
    }
}
