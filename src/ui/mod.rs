mod components;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table},
    Frame,
};

use crate::app::{App, Popup};
use crate::grid::columns::{viewport_class, visible_columns, CellKind, ColumnSpec, Viewport};
use crate::grid::Person;
use crate::theme::Theme;

/// Glyph width of the progress track inside its cell
const PROGRESS_TRACK_WIDTH: u16 = 16;

pub fn draw(f: &mut Frame, app: &App) {
    let area = f.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(0)
        .constraints([
            Constraint::Length(1), // Info line
            Constraint::Min(6),    // Grid
            Constraint::Length(1), // Footer
        ])
        .split(area);

    draw_info_line(f, app, chunks[0]);
    draw_grid(f, app, chunks[1]);
    draw_footer(f, app, chunks[2]);

    // Draw popups on top
    match app.popup {
        Popup::None => {}
        Popup::AddEntry => draw_add_entry(f, app),
        Popup::Confirm => draw_confirm_popup(f, app),
        Popup::Help => draw_help_popup(f, &app.theme),
    }
}

fn draw_info_line(f: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    // Priority: status message > row/page summary
    let line = if let Some(ref status) = app.status_message {
        Line::from(Span::styled(status, Style::default().fg(theme.warning)))
    } else {
        Line::from(Span::styled(
            format!(
                "{} entries │ page {}/{}",
                app.store.len(),
                app.page() + 1,
                app.page_count()
            ),
            Style::default().fg(theme.text_dim),
        ))
    };

    let info = Paragraph::new(line).alignment(Alignment::Center);
    f.render_widget(info, area);
}

fn draw_grid(f: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let block = Block::default()
        .title(Span::styled(
            " Roster ",
            Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.accent));

    if app.loading {
        let placeholder = Paragraph::new("Loading…")
            .style(Style::default().fg(theme.text_dim))
            .alignment(Alignment::Center)
            .block(block);
        f.render_widget(placeholder, area);
        return;
    }

    let viewport = viewport_class(area.width);
    let columns = visible_columns(viewport);

    let header = Row::new(
        columns
            .iter()
            .map(|c| Span::styled(c.title, Style::default().fg(theme.header)))
            .collect::<Vec<_>>(),
    );

    let rows: Vec<Row> = if app.store.is_empty() {
        vec![Row::new(vec![Span::styled(
            "  No rows — press 'a' to add one",
            Style::default().fg(theme.text_dim),
        )])]
    } else {
        let selected = app.selected_on_page();
        app.page_rows()
            .iter()
            .enumerate()
            .map(|(i, person)| {
                let row_style = if i == selected {
                    Style::default().bg(theme.bg_selected).fg(theme.text)
                } else if app.striped && i % 2 == 1 {
                    Style::default().bg(theme.bg_stripe)
                } else {
                    Style::default()
                };
                Row::new(
                    columns
                        .iter()
                        .map(|c| grid_cell(c, person, viewport, theme))
                        .collect::<Vec<_>>(),
                )
                .style(row_style)
            })
            .collect()
    };

    let widths: Vec<Constraint> = columns.iter().map(|c| c.constraint()).collect();

    let table = Table::new(rows, widths)
        .header(header.style(Style::default()))
        .block(block);

    f.render_widget(table, area);
}

fn grid_cell(
    column: &ColumnSpec,
    person: &Person,
    viewport: Viewport,
    theme: &Theme,
) -> Cell<'static> {
    match column.kind {
        CellKind::Text => {
            let value = match column.key {
                "id" => person.id.to_string(),
                "name" => person.name.clone(),
                "age" => person.age.to_string(),
                "email" => person.email.clone(),
                _ => String::new(),
            };
            Cell::from(Span::styled(value, Style::default().fg(theme.text)))
        }
        CellKind::StatusBadge => Cell::from(components::status_badge(person.status, theme)),
        CellKind::ProgressBar => {
            let track = match viewport {
                Viewport::Small => PROGRESS_TRACK_WIDTH / 2,
                _ => PROGRESS_TRACK_WIDTH,
            };
            Cell::from(components::progress_cell(person.progress, track, theme))
        }
        CellKind::Actions => Cell::from(components::delete_action(theme)),
    }
}

fn draw_footer(f: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let hints: Vec<(&str, &str)> = match app.popup {
        Popup::AddEntry => vec![
            ("Tab", "Field"),
            ("Enter", "Next/Add"),
            ("Esc", "Cancel"),
        ],
        _ => vec![
            ("↑↓", "Nav"),
            ("←→", "Page"),
            ("a", "Add"),
            ("d", "Del"),
            ("Enter", "Select"),
            ("R", "Reload"),
            ("?", "Help"),
        ],
    };

    // Responsive: show fewer hints on narrow terminals
    let max_hints = if area.width < 60 {
        4
    } else if area.width < 80 {
        5
    } else {
        hints.len()
    };

    let hint_spans: Vec<Span> = hints
        .iter()
        .take(max_hints)
        .flat_map(|(key, action)| {
            vec![
                Span::styled(*key, Style::default().fg(theme.accent)),
                Span::styled(format!(" {} │ ", action), Style::default().fg(theme.text_dim)),
            ]
        })
        .collect();

    let footer = Paragraph::new(Line::from(hint_spans)).alignment(Alignment::Center);
    f.render_widget(footer, area);
}

fn draw_add_entry(f: &mut Frame, app: &App) {
    let theme = &app.theme;
    let area = f.area();
    let popup_area = centered_rect(
        if area.width < 80 { 90 } else { 50 },
        if area.height < 25 { 85 } else { 60 },
        area,
    );

    f.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(Span::styled(
            " Add New Entry ",
            Style::default().fg(theme.accent),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.accent));

    f.render_widget(block, popup_area);

    let inner = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(popup_area);

    let fields = [
        (" Full Name ", &app.draft.name, 0),
        (" Age ", &app.draft.age, 1),
        (" Email ", &app.draft.email, 2),
    ];

    for (title, value, idx) in fields {
        let focused = app.draft_field == idx;
        let border = if focused { theme.accent } else { theme.inactive };
        let cursor = if focused { "_" } else { "" };
        let input = Paragraph::new(format!("{}{}", value, cursor))
            .style(Style::default().fg(theme.text))
            .block(
                Block::default()
                    .title(Span::styled(
                        title,
                        Style::default().fg(if focused { theme.accent } else { theme.header }),
                    ))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(border)),
            );
        f.render_widget(input, inner[idx]);
    }

    let buttons = Paragraph::new(Line::from(vec![
        Span::styled("  [ ", Style::default().fg(theme.text_dim)),
        Span::styled(
            "Enter = Add",
            Style::default().fg(theme.success).add_modifier(Modifier::BOLD),
        ),
        Span::styled(" ]  [ ", Style::default().fg(theme.text_dim)),
        Span::styled("Tab = Switch Field", Style::default().fg(theme.accent)),
        Span::styled(" ]  [ ", Style::default().fg(theme.text_dim)),
        Span::styled("Esc = Cancel", Style::default().fg(theme.danger)),
        Span::styled(" ]  ", Style::default().fg(theme.text_dim)),
    ]))
    .alignment(Alignment::Center);
    f.render_widget(buttons, inner[4]);
}

fn draw_confirm_popup(f: &mut Frame, app: &App) {
    let theme = &app.theme;
    let popup_area = centered_rect(40, 20, f.area());

    f.render_widget(Clear, popup_area);

    let message = app.status_message.as_deref().unwrap_or("Confirm?");

    let confirm = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(message, Style::default().fg(theme.warning))),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                "  y",
                Style::default().fg(theme.success).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" Yes   "),
            Span::styled(
                "n",
                Style::default().fg(theme.danger).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" No"),
        ]),
    ])
    .block(
        Block::default()
            .title(Span::styled(" Confirm ", Style::default().fg(theme.warning)))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.warning)),
    )
    .alignment(Alignment::Center);

    f.render_widget(confirm, popup_area);
}

fn draw_help_popup(f: &mut Frame, theme: &Theme) {
    let area = f.area();
    let popup_area = centered_rect(
        if area.width < 80 { 95 } else { 60 },
        if area.height < 30 { 90 } else { 70 },
        area,
    );

    f.render_widget(Clear, popup_area);

    let help_text = vec![
        Line::from(Span::styled(
            "═══ Navigation ═══",
            Style::default().fg(theme.header).add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled("  ↑/↓ j/k   ", Style::default().fg(theme.accent)),
            Span::raw("Move between rows"),
        ]),
        Line::from(vec![
            Span::styled("  ←/→       ", Style::default().fg(theme.accent)),
            Span::raw("Previous / next page"),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "═══ Rows ═══",
            Style::default().fg(theme.header).add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled("  a         ", Style::default().fg(theme.accent)),
            Span::raw("Add a new entry"),
        ]),
        Line::from(vec![
            Span::styled("  d/Del     ", Style::default().fg(theme.accent)),
            Span::raw("Delete the selected row"),
        ]),
        Line::from(vec![
            Span::styled("  Enter     ", Style::default().fg(theme.accent)),
            Span::raw("Select (report) the row under the cursor"),
        ]),
        Line::from(vec![
            Span::styled("  R         ", Style::default().fg(theme.accent)),
            Span::raw("Reload rows from the data source"),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "═══ Add dialog ═══",
            Style::default().fg(theme.header).add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled("  Tab       ", Style::default().fg(theme.accent)),
            Span::raw("Switch field"),
        ]),
        Line::from(vec![
            Span::styled("  Enter     ", Style::default().fg(theme.accent)),
            Span::raw("Next field, or commit from the last one"),
        ]),
        Line::from(vec![
            Span::styled("  Esc       ", Style::default().fg(theme.accent)),
            Span::raw("Discard the draft and close"),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("  Press ", Style::default().fg(theme.text_dim)),
            Span::styled("?", Style::default().fg(theme.accent)),
            Span::styled("/", Style::default().fg(theme.text_dim)),
            Span::styled("Esc", Style::default().fg(theme.accent)),
            Span::styled(" to close", Style::default().fg(theme.text_dim)),
        ]),
    ];

    let help = Paragraph::new(Text::from(help_text)).block(
        Block::default()
            .title(Span::styled(" tabulon Help ", Style::default().fg(theme.accent)))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent)),
    );

    f.render_widget(help, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
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
