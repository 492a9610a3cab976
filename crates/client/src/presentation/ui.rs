//! Frame composition for the demo UI.
//!
//! Reads the widgets and the simulated inventory every frame; the engine
//! recomputes on its own cadence underneath.
use anyhow::Result;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use widget_core::{DisplayUnit, HudConfig, InventoryView, SlotCategory};

use crate::app::App;
use crate::presentation::terminal::Tui;
use crate::sim;

pub fn render(terminal: &mut Tui, app: &App) -> Result<()> {
    terminal.draw(|frame| draw(frame, app))?;
    Ok(())
}

fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // header
            Constraint::Min(5),    // widget row
            Constraint::Length(3), // inventory strip
            Constraint::Length(1), // footer
        ])
        .split(frame.area());

    draw_header(frame, chunks[0], app);
    draw_widgets(frame, chunks[1], app);
    draw_inventory(frame, chunks[2], app);
    draw_footer(frame, chunks[3]);
}

fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let status = if app.paused() { "paused" } else { "running" };
    let line = Line::from(vec![
        Span::styled(
            "itemhud",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!("  tick {}  {}", app.ticks(), status)),
    ]);
    let paragraph = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}

fn draw_widgets(frame: &mut Frame, area: Rect, app: &App) {
    let count = app.widgets().len().max(1);
    let constraints = vec![Constraint::Ratio(1, count as u32); count];
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (widget, chunk) in app.widgets().iter().zip(chunks.iter()) {
        draw_widget(frame, *chunk, widget);
    }
}

fn draw_widget(frame: &mut Frame, area: Rect, widget: &DisplayUnit) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", widget.nickname()));

    let Some(stats) = widget.stats() else {
        let placeholder = Paragraph::new("warming up")
            .style(Style::default().add_modifier(Modifier::DIM))
            .block(block);
        frame.render_widget(placeholder, area);
        return;
    };

    if !widget.is_visible() {
        let hidden = Paragraph::new("(hidden)")
            .style(Style::default().add_modifier(Modifier::DIM))
            .block(block);
        frame.render_widget(hidden, area);
        return;
    }

    let mut lines = Vec::new();
    lines.push(Line::from(Span::styled(
        sim::item_name(stats.representative.id),
        Style::default().fg(Color::White),
    )));

    if widget.show_counter() {
        lines.push(Line::from(vec![
            Span::styled("count: ", Style::default().fg(Color::White)),
            Span::raw(format!("{}/{}", stats.counter_label(), stats.maximum_count)),
        ]));
    }

    if widget.show_analog_bar() {
        let filled = stats.bar_length();
        let empty = HudConfig::BAR_RESOLUTION.saturating_sub(filled);
        lines.push(Line::from(vec![
            Span::styled(
                "█".repeat(filled as usize),
                Style::default().fg(bar_color(filled)),
            ),
            Span::styled(
                "░".repeat(empty as usize),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Bar color for the current fill band.
fn bar_color(filled: u32) -> Color {
    if filled > 9 {
        Color::Green
    } else if filled > 4 {
        Color::Yellow
    } else {
        Color::Red
    }
}

fn draw_inventory(frame: &mut Frame, area: Rect, app: &App) {
    let view = app.sim().view();
    let mut spans = Vec::new();

    // Hotbar: the first nine main slots.
    for index in 0..9 {
        let cell = match view.slot(SlotCategory::Main, index) {
            Some(item) => format!("[{}{:>2}]", sim::item_glyph(item.id), item.quantity),
            None => "[   ]".to_string(),
        };
        let style = if index == view.selected_index() {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(cell, style));
        spans.push(Span::raw(" "));
    }

    spans.push(Span::raw("  armor: "));
    let armor_cell = match view.slot(SlotCategory::Armor, 0) {
        Some(item) => format!(
            "[{} {:>3}]",
            sim::item_glyph(item.id),
            item.remaining_durability()
        ),
        None => "[     ]".to_string(),
    };
    spans.push(Span::styled(armor_cell, Style::default().fg(Color::Gray)));

    let paragraph = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).title(" inventory "));
    frame.render_widget(paragraph, area);
}

fn draw_footer(frame: &mut Frame, area: Rect) {
    let paragraph =
        Paragraph::new("q: quit   space: pause").style(Style::default().fg(Color::DarkGray));
    frame.render_widget(paragraph, area);
}
