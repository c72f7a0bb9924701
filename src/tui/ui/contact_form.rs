//! Contact form screen rendering

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use crate::surface::{Element, Role, Surface, SUBMITTED_HEADING};
use crate::tui::app::App;
use crate::tui::screens::ContactFormScreen;
use crate::tui::types::Focus;

/// Renders the screen

pub fn render_contact_form(f: &mut Frame, app: &App) {
    let size = f.size();

    if let Some(screen) = &app.contact_form_screen {
        let surface = screen.surface();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Length(4), // First name
                Constraint::Length(4), // Last name
                Constraint::Length(4), // Email
                Constraint::Length(4), // Message
                Constraint::Length(3), // Submit button
                Constraint::Min(3),    // Submitted record
                Constraint::Length(3), // Status message
                Constraint::Length(3), // Help text
            ])
            .split(size);

        // Title
        let heading = surface
            .query_all_by_role(Role::Heading)
            .into_iter()
            .next()
            .map(|e| e.text.as_str())
            .unwrap_or_default();
        let title = Paragraph::new(heading)
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(title, chunks[0]);

        // Inputs, each followed by its error (if any)
        let inputs = surface.query_all_by_role(Role::Textbox);
        for (input, area) in inputs.into_iter().zip(chunks[1..5].iter()) {
            render_input(f, screen, &surface, input, *area);
        }

        // Submit button
        let button_style = if screen.focus == Focus::SubmitButton {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Yellow)
        };
        let button_text = surface
            .query_all_by_role(Role::Button)
            .into_iter()
            .next()
            .map(|e| format!("[ {} ]", e.text))
            .unwrap_or_default();
        let button = Paragraph::new(Span::styled(button_text, button_style))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(button, chunks[5]);

        render_submitted(f, &surface, chunks[6]);

        // Status message
        let status_text = screen.status_message.as_deref().unwrap_or("");
        let status_color = if screen.is_error {
            Color::Red
        } else {
            Color::Green
        };
        let status_widget = Paragraph::new(status_text)
            .style(Style::default().fg(status_color))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Status"));
        f.render_widget(status_widget, chunks[7]);

        // Help text
        let help_text = "Tab/↑↓: Move | Enter: Next/Submit | Ctrl+S: Submit | Ctrl+V: Paste | Delete: Clear | Esc: Back";
        let help = Paragraph::new(help_text)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(help, chunks[8]);
    }
}

fn render_input(
    f: &mut Frame,
    screen: &ContactFormScreen,
    surface: &Surface,
    input: &Element,
    area: Rect,
) {
    let focused = input.field.is_some() && screen.focus.field() == input.field;
    let value = input.value.as_deref().unwrap_or("");

    let mut lines = vec![Line::from(vec![
        Span::styled(value.to_string(), Style::default().fg(Color::White)),
        Span::styled(
            if focused { "▏" } else { "" },
            Style::default().fg(Color::Yellow),
        ),
    ])];

    let error = surface
        .query_all_by_role(Role::Alert)
        .into_iter()
        .find(|e| e.field == input.field);
    if let Some(error) = error {
        lines.push(Line::from(Span::styled(
            error.text.clone(),
            Style::default().fg(Color::Red),
        )));
    }

    let border_color = if focused {
        Color::Yellow
    } else if error.is_some() {
        Color::Red
    } else {
        Color::Gray
    };

    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .title(input.label.clone().unwrap_or_default()),
    );
    f.render_widget(widget, area);
}

fn render_submitted(f: &mut Frame, surface: &Surface, area: Rect) {
    let displays: Vec<&Element> = surface
        .elements()
        .iter()
        .filter(|e| e.role == Role::Text && e.field.is_some())
        .collect();

    if displays.is_empty() {
        let placeholder = Paragraph::new("Nothing submitted yet")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Submission"));
        f.render_widget(placeholder, area);
        return;
    }

    let lines: Vec<Line> = displays
        .into_iter()
        .filter_map(|e| {
            let field = e.field?;
            Some(Line::from(vec![
                Span::styled(
                    format!("{}: ", field.label().trim_end_matches('*')),
                    Style::default().fg(Color::Yellow),
                ),
                Span::styled(e.text.clone(), Style::default().fg(Color::Green)),
            ]))
        })
        .collect();

    let widget = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(SUBMITTED_HEADING),
        );
    f.render_widget(widget, area);
}
