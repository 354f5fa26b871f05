use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph, Widget, Wrap};

use crate::ui::theme::Theme;

/// Bordered scrollable text view used for notes, punish blocks, and
/// apple-kill tables. Scrolling is clamped so the last line can always be
/// brought into view but never past it.
pub struct TextPanel<'a> {
    pub title: String,
    pub text: &'a str,
    pub scroll: u16,
    pub dim: bool,
    pub theme: &'a Theme,
}

impl<'a> TextPanel<'a> {
    pub fn new(title: &str, text: &'a str, scroll: u16, theme: &'a Theme) -> Self {
        Self {
            title: title.to_string(),
            text,
            scroll,
            dim: false,
            theme,
        }
    }

    /// Render the whole panel in the dim text color (used for "no data"
    /// placeholder messages).
    pub fn dimmed(mut self) -> Self {
        self.dim = true;
        self
    }

    pub fn max_scroll(text: &str, viewport_height: u16) -> u16 {
        let lines = text.lines().count() as u16;
        lines.saturating_sub(viewport_height.max(1))
    }
}

impl Widget for TextPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let block = Block::bordered()
            .title(format!(" {} ", self.title))
            .border_style(Style::default().fg(colors.border()))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let text_color = if self.dim { colors.text_dim() } else { colors.fg() };
        let lines: Vec<Line> = self.text.lines().map(Line::from).collect();
        let scroll = self.scroll.min(Self::max_scroll(self.text, inner.height));

        Paragraph::new(lines)
            .style(Style::default().fg(text_color))
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0))
            .render(inner, buf);
    }
}
