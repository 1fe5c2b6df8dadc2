//! Rendering. Everything here is a pure function of [`App`] state.

use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::app::{App, Focus};
use crate::form::Field;

pub const BUTTON_LABEL: &str = "Generate Roadmap";
pub const BUTTON_BUSY_LABEL: &str = "Generating Roadmap...";
pub const RESULT_TITLE: &str = "Your AI-Generated Roadmap";
pub const RESULT_SUBTITLE: &str = "Here's your personalized career development plan";

const ACCENT: Color = Color::Indexed(63);

pub fn draw(f: &mut Frame, app: &App) {
    let session = app.session();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(f.size());

    let header = Paragraph::new(Line::from(Span::styled(
        app.title().to_string(),
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, chunks[0]);

    for (field, area) in Field::ALL.into_iter().zip(chunks[1..4].iter().copied()) {
        draw_input(f, app, field, area);
    }

    draw_button(f, app, chunks[4]);

    // Result panel exists only once a roadmap has been produced
    if session.has_roadmap() {
        draw_result(f, session.roadmap(), app.result_scroll(), chunks[5]);
    }

    let help = Paragraph::new(Line::from(vec![
        Span::styled("Tab/↑↓", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" move  "),
        Span::styled("Enter", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" generate  "),
        Span::styled("PgUp/PgDn", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" scroll  "),
        Span::styled("Esc", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" quit"),
    ]))
    .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[6]);

    if let Some(alert) = session.alert() {
        draw_alert(f, &alert.message);
    }
}

fn draw_input(f: &mut Frame, app: &App, field: Field, area: Rect) {
    let focused = app.focus() == Focus::Field(field);
    let value = app.session().form().get(field);

    let border = if focused {
        Style::default().fg(ACCENT)
    } else {
        Style::default().fg(Color::Gray)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(field.label());
    let inner = block.inner(area);

    // Keep the end of the value and the cursor cell in view
    let shown = visible_tail(value, inner.width.saturating_sub(1) as usize);
    let content = if value.is_empty() {
        Span::styled(field.placeholder(), Style::default().fg(Color::DarkGray))
    } else {
        Span::raw(shown.to_string())
    };
    f.render_widget(Paragraph::new(Line::from(content)).block(block), area);

    if focused && app.session().alert().is_none() {
        let offset = shown.chars().count() as u16;
        let x = inner.x + offset.min(inner.width.saturating_sub(1));
        f.set_cursor(x, inner.y);
    }
}

/// Last `width` chars of `value`
fn visible_tail(value: &str, width: usize) -> &str {
    let len = value.chars().count();
    if len <= width {
        return value;
    }
    match value.char_indices().nth(len - width) {
        Some((idx, _)) => &value[idx..],
        None => "",
    }
}

fn draw_button(f: &mut Frame, app: &App, area: Rect) {
    let session = app.session();
    let focused = app.focus() == Focus::Generate;

    let (label, style) = if session.trigger_enabled() {
        let mut style = Style::default()
            .fg(Color::White)
            .bg(ACCENT)
            .add_modifier(Modifier::BOLD);
        if focused {
            style = style.add_modifier(Modifier::REVERSED);
        }
        (BUTTON_LABEL.to_string(), style)
    } else {
        (
            format!("{} {}", app.spinner(), BUTTON_BUSY_LABEL),
            Style::default().fg(Color::Gray).bg(Color::DarkGray),
        )
    };

    let button = Paragraph::new(Line::from(label))
        .alignment(Alignment::Center)
        .style(style)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(button, area);
}

fn draw_result(f: &mut Frame, roadmap: &str, scroll: u16, area: Rect) {
    let mut lines = vec![
        Line::from(Span::styled(
            RESULT_SUBTITLE,
            Style::default().fg(Color::Gray),
        )),
        Line::raw(""),
    ];
    lines.extend(roadmap.lines().map(|l| Line::raw(l.to_string())));

    let panel = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(ACCENT))
                .title(Span::styled(
                    RESULT_TITLE,
                    Style::default().add_modifier(Modifier::BOLD),
                )),
        );
    f.render_widget(panel, area);
}

fn draw_alert(f: &mut Frame, message: &str) {
    let area = centered_rect(44, 5, f.size());
    f.render_widget(Clear, area);
    let popup = Paragraph::new(vec![
        Line::raw(message.to_string()),
        Line::raw(""),
        Line::from(Span::styled(
            "[Enter] OK",
            Style::default().add_modifier(Modifier::BOLD),
        )),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .title("Notice"),
    );
    f.render_widget(popup, area);
}

fn centered_rect(width: u16, height: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    let height = height.min(r.height);
    Rect {
        x: r.x + (r.width - width) / 2,
        y: r.y + (r.height - height) / 2,
        width,
        height,
    }
}
