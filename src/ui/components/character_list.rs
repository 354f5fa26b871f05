use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::ui::theme::Theme;

/// One display row in the roster or practice-list view.
pub struct CharacterRow {
    pub name: String,
    pub in_practice: bool,
    pub is_main: bool,
}

/// Selectable character listing. The caller owns the selection index and
/// clamps it; the widget keeps the selected row visible by scrolling.
pub struct CharacterList<'a> {
    pub title: String,
    pub rows: Vec<CharacterRow>,
    pub selected: usize,
    pub theme: &'a Theme,
}

impl<'a> CharacterList<'a> {
    pub fn new(title: &str, rows: Vec<CharacterRow>, selected: usize, theme: &'a Theme) -> Self {
        Self {
            title: title.to_string(),
            rows,
            selected,
            theme,
        }
    }
}

impl Widget for &CharacterList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let count_tag = format!(" {} ({}) ", self.title, self.rows.len());
        let block = Block::bordered()
            .title(count_tag)
            .border_style(Style::default().fg(colors.border()))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 || self.rows.is_empty() {
            if self.rows.is_empty() && inner.height > 0 {
                let empty = Paragraph::new(Line::from(Span::styled(
                    " (empty)",
                    Style::default().fg(colors.text_dim()),
                )));
                empty.render(inner, buf);
            }
            return;
        }

        // Scroll window that keeps the selection visible
        let visible = inner.height as usize;
        let selected = self.selected.min(self.rows.len() - 1);
        let first = if selected >= visible {
            selected + 1 - visible
        } else {
            0
        };

        let lines: Vec<Line> = self
            .rows
            .iter()
            .enumerate()
            .skip(first)
            .take(visible)
            .map(|(i, row)| {
                let is_selected = i == selected;
                let indicator = if is_selected { ">" } else { " " };
                let practice_mark = if row.in_practice { "★" } else { " " };
                let main_tag = if row.is_main { "  (main)" } else { "" };

                let name_style = Style::default()
                    .fg(if is_selected { colors.accent() } else { colors.fg() })
                    .add_modifier(if is_selected {
                        Modifier::BOLD
                    } else {
                        Modifier::empty()
                    });

                Line::from(vec![
                    Span::styled(format!(" {indicator} "), name_style),
                    Span::styled(
                        format!("{practice_mark} "),
                        Style::default().fg(colors.warning()),
                    ),
                    Span::styled(row.name.clone(), name_style),
                    Span::styled(main_tag, Style::default().fg(colors.text_dim())),
                ])
            })
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }
}
