use ratatui::{
    buffer::Buffer,
    layout::Rect,
    widgets::{Block as BlockWidget, BlockExt, Widget},
};
use stakkr_engine::GameSession;

use crate::ui::widgets::style;

/// Footprint of one grid cell in terminal characters.
const CELL_WIDTH: u16 = 2;
const CELL_HEIGHT: u16 = 1;

/// Draws the board grid with every active and settled block.
#[derive(Debug)]
pub struct BoardDisplay<'a> {
    session: &'a GameSession,
    block: Option<BlockWidget<'a>>,
}

impl<'a> BoardDisplay<'a> {
    pub fn new(session: &'a GameSession) -> Self {
        Self {
            session,
            block: None,
        }
    }

    pub fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    #[expect(clippy::cast_possible_truncation)]
    pub fn width(&self) -> u16 {
        self.session.field().board().cols() as u16 * CELL_WIDTH
            + super::block_horizontal_margin(self.block.as_ref())
    }

    #[expect(clippy::cast_possible_truncation)]
    pub fn height(&self) -> u16 {
        self.session.field().board().rows() as u16 * CELL_HEIGHT
            + super::block_vertical_margin(self.block.as_ref())
    }
}

fn cell_rect(area: Rect, col: u16, row: u16) -> Rect {
    Rect::new(
        area.x + col * CELL_WIDTH,
        area.y + row * CELL_HEIGHT,
        CELL_WIDTH,
        CELL_HEIGHT,
    )
    .intersection(area)
}

impl Widget for BoardDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &BoardDisplay<'_> {
    #[expect(clippy::cast_possible_truncation)]
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        let board = self.session.field().board();
        for row in 0..board.rows() as u16 {
            for col in 0..board.cols() as u16 {
                let cell = cell_rect(area, col, row);
                buf.set_stringn(cell.x, cell.y, ". ", cell.width as usize, style::EMPTY_DOT);
            }
        }

        for pos in self.session.blocks() {
            let cell = cell_rect(area, pos.col as u16, pos.row as u16);
            buf.set_stringn(cell.x, cell.y, "  ", cell.width as usize, style::BLOCK);
        }
    }
}
