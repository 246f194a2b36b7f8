use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::ui::styles;

pub fn render_home(frame: &mut Frame, app: &App, area: Rect) {
    let greeting = match app.identity() {
        Some(identity) => format!("Welcome back, {}!", identity.first_name()),
        None => "Welcome to EduFlow".to_string(),
    };

    let mut lines = vec![
        Line::from(Span::styled(greeting, styles::title_style())),
        Line::from(""),
        Line::from("Learn at your own pace, keep track of assignments and run your classroom."),
        Line::from(""),
        Line::from(Span::styled("Featured courses", styles::highlight_style())),
        Line::from(""),
    ];

    for course in &app.courses {
        lines.push(Line::from(vec![
            Span::styled(format!("  {:<20}", course.title), styles::list_item_style()),
            Span::styled(course.display_lessons(), styles::muted_style()),
        ]));
        lines.push(Line::from(Span::styled(
            format!("    {}", course.description),
            styles::muted_style(),
        )));
    }

    let block = Block::default()
        .title(" Home ")
        .title_style(styles::title_style())
        .borders(Borders::ALL)
        .border_style(styles::border_style(true));

    let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

pub fn render_about(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled("About EduFlow", styles::title_style())),
        Line::from(""),
        Line::from("EduFlow is an offline demo of a learning platform with separate"),
        Line::from("dashboards for students, teachers and administrators."),
        Line::from(""),
        Line::from(Span::styled(
            "All accounts and data are mocked. Progress, assignments and attendance",
            styles::muted_style(),
        )),
        Line::from(Span::styled(
            "are kept in a local store on this machine.",
            styles::muted_style(),
        )),
    ];

    let block = Block::default()
        .title(" About ")
        .title_style(styles::title_style())
        .borders(Borders::ALL)
        .border_style(styles::border_style(true));

    let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
