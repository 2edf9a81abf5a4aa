use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::{Line, Span};
use ratatui::widgets::canvas::{Canvas, Line as CanvasLine};
use ratatui::widgets::{Block, Borders, Paragraph};

use super::app::{App, Focus};
use super::model_view::{canvas_bounds, wireframe};

/// Render the main scene panel: selected item details above the spinning model.
pub fn render_main_scene(frame: &mut Frame, area: Rect, app: &App) {
    let is_focused = app.focus == Focus::MainScene;

    let border_style = if is_focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block = Block::default()
        .title(format!(" {} ", app.config.model))
        .borders(Borders::ALL)
        .border_style(border_style);

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .split(inner);

    render_details(frame, chunks[0], app);
    render_model(frame, chunks[1], app.selection.rotation_phase());
    render_rotation_footer(frame, chunks[2], app);
}

fn render_details(frame: &mut Frame, area: Rect, app: &App) {
    let content = if let Some(entry) = app.selection.current_selection() {
        vec![
            Line::from(Span::styled(
                entry.name.as_str(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                entry.price.to_string(),
                Style::default()
                    .fg(Color::Gray)
                    .add_modifier(Modifier::ITALIC),
            )),
            Line::from(Span::styled(
                format!("Category: {}", entry.category),
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(Span::styled(
                format!("Image: {}", entry.image_ref),
                Style::default().fg(Color::DarkGray),
            )),
        ]
    } else {
        vec![
            Line::from(""),
            Line::from(Span::styled(
                "No item selected",
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(Span::styled(
                "Pick one from the menu with Enter",
                Style::default().fg(Color::DarkGray),
            )),
        ]
    };

    let paragraph = Paragraph::new(content).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn render_model(frame: &mut Frame, area: Rect, phase: f64) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let (x_bounds, y_bounds) = canvas_bounds(area.width, area.height);
    let segments = wireframe(phase);

    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds(x_bounds)
        .y_bounds(y_bounds)
        .paint(move |ctx| {
            for s in &segments {
                ctx.draw(&CanvasLine::new(s.x1, s.y1, s.x2, s.y2, s.color));
            }
        });

    frame.render_widget(canvas, area);
}

fn render_rotation_footer(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(
        format!("{:>5.1}°", app.selection.rotation_phase()),
        Style::default().fg(Color::DarkGray),
    )];
    if app.spinner.is_paused() {
        spans.push(Span::styled(
            "  paused (p to resume)",
            Style::default().fg(Color::Yellow),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans)).alignment(Alignment::Right);
    frame.render_widget(paragraph, area);
}
