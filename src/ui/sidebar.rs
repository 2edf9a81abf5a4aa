use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::menu::{MenuCatalog, MenuEntry};

use super::app::{App, Focus};

/// One visual row of the menu list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MenuRow<'a> {
    Header(&'a str),
    Item(&'a MenuEntry),
}

/// Flatten the catalog into category headers followed by their entries.
pub fn menu_rows(catalog: &MenuCatalog) -> Vec<MenuRow<'_>> {
    let mut rows = Vec::with_capacity(catalog.len() + catalog.categories().len());
    for (category, items) in catalog.sections() {
        rows.push(MenuRow::Header(category));
        rows.extend(items.into_iter().map(MenuRow::Item));
    }
    rows
}

/// `name` left-aligned and `price` right-aligned within `width` columns.
///
/// Names that don't fit are cut and end with an ellipsis.
pub fn item_label(name: &str, price: &str, width: usize) -> String {
    let price_width = price.width();
    let name_room = width.saturating_sub(price_width + 1);

    let name = if name.width() > name_room {
        let mut cut = String::new();
        for c in name.chars() {
            if cut.width() + c.to_string().width() + 1 > name_room {
                break;
            }
            cut.push(c);
        }
        cut.push('…');
        cut
    } else {
        name.to_string()
    };

    let gap = width.saturating_sub(name.width() + price_width).max(1);
    format!("{}{}{}", name, " ".repeat(gap), price)
}

/// Render the sidebar panel showing the menu grouped by category.
pub fn render_sidebar(frame: &mut Frame, area: Rect, app: &App) {
    let is_focused = app.focus == Focus::Sidebar;

    let border_style = if is_focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block = Block::default()
        .title(" Menu ")
        .borders(Borders::ALL)
        .border_style(border_style);

    let catalog = app.selection.catalog();
    if catalog.is_empty() {
        let empty_msg = vec![
            Line::from(""),
            Line::from(Span::styled(
                "The menu is empty",
                Style::default().fg(Color::DarkGray),
            )),
        ];
        let paragraph = Paragraph::new(empty_msg)
            .block(block)
            .alignment(Alignment::Center);
        frame.render_widget(paragraph, area);
        return;
    }

    // Borders plus the two-column marker prefix.
    let label_width = usize::from(area.width.saturating_sub(2)).saturating_sub(2);
    let cursor_id = app.cursor_entry().map(|e| e.id);
    let selected_id = app.selection.selected_id();

    let mut cursor_row = None;
    let items: Vec<ListItem> = menu_rows(catalog)
        .into_iter()
        .enumerate()
        .map(|(row, menu_row)| match menu_row {
            MenuRow::Header(category) => ListItem::new(Line::from(Span::styled(
                category.to_string(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ))),
            MenuRow::Item(entry) => {
                let under_cursor = Some(entry.id) == cursor_id;
                if under_cursor {
                    cursor_row = Some(row);
                }

                let style = if under_cursor && is_focused {
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Cyan)
                        .add_modifier(Modifier::BOLD)
                } else if under_cursor {
                    Style::default().fg(Color::Black).bg(Color::DarkGray)
                } else {
                    Style::default()
                };

                let marker = if Some(entry.id) == selected_id {
                    "● "
                } else {
                    "  "
                };

                let content = Line::from(vec![
                    Span::styled(marker, Style::default().fg(Color::Green)),
                    Span::styled(
                        item_label(&entry.name, &entry.price.to_string(), label_width),
                        style,
                    ),
                ]);

                ListItem::new(content).style(style)
            }
        })
        .collect();

    let list = List::new(items).block(block);

    let mut list_state = ListState::default();
    list_state.select(cursor_row);

    frame.render_stateful_widget(list, area, &mut list_state);
}
