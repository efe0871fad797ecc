use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::{Frame, Terminal};

/// Full-screen size used by the layout tests: wide enough for all three columns.
pub const TERM_W: u16 = 100;
pub const TERM_H: u16 = 12;

/// Draws one frame of `w` x `h` cells and returns its text, one line per row.
/// Trailing spaces and trailing blank rows are dropped; styles are ignored.
pub fn render_to_string(w: u16, h: u16, draw: impl FnOnce(&mut Frame, Rect)) -> String {
    buffer_text(&render_to_buffer(w, h, draw))
}

/// Draws one frame and keeps the styled cells, for colour checks.
pub fn render_to_buffer(w: u16, h: u16, draw: impl FnOnce(&mut Frame, Rect)) -> Buffer {
    let mut terminal = Terminal::new(TestBackend::new(w, h)).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            draw(frame, area);
        })
        .unwrap();
    terminal.backend().buffer().clone()
}

/// Foreground colour of the first cell of `needle`, searching row by row.
pub fn fg_of(buffer: &Buffer, needle: &str) -> Option<Color> {
    let area = buffer.area;
    (area.top()..area.bottom()).find_map(|y| {
        let row: Vec<&str> = (area.left()..area.right())
            .filter_map(|x| buffer.cell((x, y)).map(|cell| cell.symbol()))
            .collect();
        let text = row.concat();
        let offset = text.find(needle)?;
        let x = text[..offset].chars().count() as u16 + area.left();
        buffer.cell((x, y)).map(|cell| cell.fg)
    })
}

fn buffer_text(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut rows: Vec<String> = (area.top()..area.bottom())
        .map(|y| {
            let row: String = (area.left()..area.right())
                .filter_map(|x| buffer.cell((x, y)).map(|cell| cell.symbol()))
                .collect();
            row.trim_end().to_string()
        })
        .collect();

    while rows.last().is_some_and(String::is_empty) {
        rows.pop();
    }
    rows.join("\n")
}
