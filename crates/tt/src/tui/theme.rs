use ratatui::style::Color;

/// Palette keyed by what is drawn, not by hue.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Body text: task rows, content, start dates.
    pub body: Color,
    /// Titles and typed input.
    pub title: Color,
    /// Selection marker, prompt cursor and focused border.
    pub accent: Color,
    /// Hints, empty placeholders and field labels.
    pub muted: Color,
    pub tag: Color,
    pub due: Color,
    pub inbox: Color,
    pub filter: Color,
    /// Delete prompt.
    pub danger: Color,
    /// Complete prompt.
    pub success: Color,
    /// Status-line messages such as sync errors.
    pub notice: Color,
    pub selection_bg: Color,
    pub border: Color,
}

impl Default for Theme {
    fn default() -> Self {
        // TickTick blue on a neutral grey scale.
        Theme {
            body: Color::Rgb(0xD4, 0xD7, 0xDD),
            title: Color::White,
            accent: Color::Rgb(0x41, 0x77, 0xF6),
            muted: Color::Rgb(0x80, 0x86, 0x90),
            tag: Color::Rgb(0x5C, 0xB8, 0xA8),
            due: Color::Rgb(0xF5, 0xA6, 0x23),
            inbox: Color::Rgb(0x41, 0x77, 0xF6),
            filter: Color::Rgb(0xB3, 0x8B, 0xE8),
            danger: Color::Rgb(0xE0, 0x55, 0x55),
            success: Color::Rgb(0x4C, 0xAF, 0x50),
            notice: Color::Rgb(0xF5, 0xA6, 0x23),
            selection_bg: Color::Rgb(0x1F, 0x2A, 0x44),
            border: Color::Rgb(0x3A, 0x3F, 0x4A),
        }
    }
}
