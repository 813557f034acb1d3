use super::app::{App, InputMode};
use super::theme::theme;
use crate::app::FormField;
use crate::storage::BlobStore;
use crate::view::DetailView;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, List, ListItem as ListRow, Paragraph, Wrap},
};

pub fn draw<B: BlobStore>(f: &mut Frame, app: &mut App<B>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // List + detail
            Constraint::Length(1), // Footer
        ])
        .split(f.area());

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(chunks[0]);

    draw_list(f, app, panes[0]);
    draw_detail(f, app, panes[1]);
    draw_footer(f, app, chunks[1]);

    if app.input_mode == InputMode::Form {
        draw_form(f, app);
    }
    if app.show_help {
        draw_help_popup(f);
    }
}

fn draw_list<B: BlobStore>(f: &mut Frame, app: &mut App<B>, area: Rect) {
    let t = theme();
    let view = app.list_view();

    let rows: Vec<ListRow> = view
        .items
        .iter()
        .map(|item| {
            if item.is_placeholder() {
                ListRow::new(Span::styled(item.label.clone(), t.muted_style()))
            } else {
                ListRow::new(item.label.clone())
            }
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(t.border_style(app.input_mode == InputMode::Normal))
        .title(format!(" Places ({}) ", app.state.len()));
    app.list_area = block.inner(area);

    let list = List::new(rows)
        .block(block)
        .highlight_style(t.active_style())
        .highlight_symbol(t.row_marker);

    app.list_state.select(view.active_index());
    f.render_stateful_widget(list, area, &mut app.list_state);
}

fn detail_text(view: &DetailView) -> Text<'static> {
    let t = theme();
    match view {
        DetailView::Empty { message } => Text::from(vec![
            Line::from(""),
            Line::from(Span::styled(message.clone(), t.muted_style())),
        ]),
        DetailView::Card(card) => {
            let mut lines = vec![
                Line::from(Span::styled(
                    card.title.clone(),
                    Style::default().fg(t.title).add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(card.meta.clone(), t.muted_style())),
            ];
            for section in &card.sections {
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled(
                    section.heading,
                    Style::default().fg(t.heading).add_modifier(Modifier::BOLD),
                )));
                lines.extend(section.lines.iter().map(|l| Line::from(l.clone())));
            }
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(card.added.clone(), t.muted_style())));
            Text::from(lines)
        }
    }
}

fn draw_detail<B: BlobStore>(f: &mut Frame, app: &App<B>, area: Rect) {
    let t = theme();
    let paragraph = Paragraph::new(detail_text(&app.detail_view()))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(t.border_style(false))
                .title(" Details "),
        )
        .wrap(Wrap { trim: false })
        .scroll((app.detail_scroll, 0));
    f.render_widget(paragraph, area);
}

fn draw_form<B: BlobStore>(f: &mut Frame, app: &App<B>) {
    let t = theme();
    let area = centered_rect(60, 70, f.area());

    let mut lines = vec![Line::from("")];
    for field in FormField::ALL {
        let active = app.focus == field;
        let label_style = if active {
            Style::default().fg(t.modal_cursor)
        } else {
            Style::default().fg(t.text)
        };
        let value = app.form.value(field);

        let mut first_line = vec![
            Span::styled(
                if active { t.row_marker } else { "  " },
                Style::default().fg(t.modal_cursor),
            ),
            Span::styled(
                format!("{:<11}", format!("{}:", field.label())),
                label_style.add_modifier(Modifier::BOLD),
            ),
        ];

        if value.is_empty() {
            first_line.push(Span::styled(field.placeholder(), t.muted_style()));
            if active {
                first_line.push(Span::styled("_", Style::default().fg(t.modal_cursor)));
            }
            lines.push(Line::from(first_line));
        } else {
            let mut value_lines = value.split('\n').peekable();
            let mut first = true;
            while let Some(part) = value_lines.next() {
                let mut spans = if first {
                    std::mem::take(&mut first_line)
                } else {
                    vec![Span::raw(" ".repeat(13))]
                };
                spans.push(Span::raw(part.to_string()));
                if active && value_lines.peek().is_none() {
                    spans.push(Span::styled("_", Style::default().fg(t.modal_cursor)));
                }
                lines.push(Line::from(spans));
                first = false;
            }
        }
        lines.push(Line::from(""));
    }

    if let Some(ref msg) = app.message {
        lines.push(Line::from(Span::styled(
            format!("  {}", msg),
            Style::default().fg(t.warning).add_modifier(Modifier::BOLD),
        )));
    }
    lines.push(Line::from(Span::styled(
        "  Tab: next field  Enter: save (newline in landmarks/notes)  Ctrl+S: save  Esc: close",
        t.muted_style(),
    )));

    let paragraph = Paragraph::new(Text::from(lines))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(t.modal_border_create))
                .title(" New place "),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, area);
    f.render_widget(paragraph, area);
}

fn draw_footer<B: BlobStore>(f: &mut Frame, app: &App<B>, area: Rect) {
    let t = theme();
    let mode = match app.input_mode {
        InputMode::Normal => Span::styled(
            " NORMAL ",
            Style::default().bg(t.mode_normal.0).fg(t.mode_normal.1),
        ),
        InputMode::Form => Span::styled(
            " ADD ",
            Style::default().bg(t.mode_form.0).fg(t.mode_form.1),
        ),
    };

    let rest = match (&app.message, app.input_mode) {
        (Some(msg), InputMode::Normal) => Span::styled(format!(" {}", msg), Style::default().fg(t.text)),
        _ => Span::styled(
            " ↑/↓ select  a add  J/K scroll  ? help  q quit",
            t.muted_style(),
        ),
    };

    f.render_widget(Paragraph::new(Line::from(vec![mode, rest])), area);
}

fn draw_help_popup(f: &mut Frame) {
    let t = theme();
    let area = centered_rect(50, 50, f.area());
    let keys = [
        ("↑/↓, j/k", "Move selection"),
        ("g / G", "First / last place"),
        ("click", "Select a place"),
        ("a, c", "Add a place"),
        ("J/K, PgDn/PgUp", "Scroll details"),
        ("?", "Toggle help"),
        ("q", "Quit"),
    ];

    let mut lines = vec![Line::from("")];
    lines.extend(keys.iter().map(|(key, what)| {
        Line::from(vec![
            Span::styled(
                format!("  {:<16}", key),
                Style::default().fg(t.heading).add_modifier(Modifier::BOLD),
            ),
            Span::raw(*what),
        ])
    }));

    let paragraph = Paragraph::new(Text::from(lines)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(t.border_style(true))
            .title(" Help "),
    );
    f.render_widget(Clear, area);
    f.render_widget(paragraph, area);
}

/// Helper function to create a centered rect
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
