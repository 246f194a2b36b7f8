use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use eduflow_core::models::Role;

use crate::app::App;
use crate::ui::styles;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    render_overview(frame, app, chunks[0]);
    render_users(frame, app, chunks[1]);
}

fn render_overview(frame: &mut Frame, app: &App, area: Rect) {
    let overview = app.overview();

    let mut lines = vec![
        Line::from(vec![
            Span::styled("Users:    ", styles::highlight_style()),
            Span::raw(overview.user_count().to_string()),
        ]),
    ];
    for role in Role::ALL {
        lines.push(Line::from(vec![
            Span::styled(format!("  {:<9}", role.title()), styles::muted_style()),
            Span::raw(overview.count_for(role).to_string()),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("Courses:  ", styles::highlight_style()),
        Span::raw(overview.course_count.to_string()),
    ]));
    lines.push(Line::from(vec![
        Span::styled("Lessons:  ", styles::highlight_style()),
        Span::raw(overview.lesson_count.to_string()),
    ]));
    lines.push(Line::from(vec![
        Span::styled("Assignments: ", styles::highlight_style()),
        Span::raw(app.assignments.len().to_string()),
    ]));

    let block = Block::default()
        .title(" Platform overview ")
        .title_style(styles::title_style())
        .borders(Borders::ALL)
        .border_style(styles::border_style(true));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_users(frame: &mut Frame, app: &App, area: Rect) {
    let lines: Vec<Line> = app
        .directory
        .iter()
        .map(|identity| {
            Line::from(vec![
                Span::styled(format!("{:<6}", identity.id), styles::muted_style()),
                Span::styled(format!("{:<20}", identity.name), styles::list_item_style()),
                Span::styled(identity.role.title(), styles::muted_style()),
            ])
        })
        .collect();

    let block = Block::default()
        .title(format!(" Users ({}) ", app.directory.len()))
        .title_style(styles::title_style())
        .borders(Borders::ALL)
        .border_style(styles::border_style(false));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
