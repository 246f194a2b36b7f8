use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::app::App;
use crate::ui::styles;
use crate::utils::{progress_bar, truncate_string};

/// Width of the progress bar in cells
const PROGRESS_BAR_WIDTH: usize = 24;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    render_progress(frame, app, chunks[0]);
    render_courses(frame, app, chunks[1]);
}

fn render_progress(frame: &mut Frame, app: &App, area: Rect) {
    let name = app.identity().map(|i| i.first_name()).unwrap_or("student");

    let quiz_line = match app.last_quiz_result {
        Some(true) => Line::from(Span::styled("  Last answer: correct", styles::success_style())),
        Some(false) => Line::from(Span::styled("  Last answer: incorrect", styles::error_style())),
        None => Line::from(Span::styled("  No answers yet", styles::muted_style())),
    };

    let lines = vec![
        Line::from(Span::styled(format!("Hi {}!", name), styles::title_style())),
        Line::from(""),
        Line::from(Span::styled("Course progress", styles::highlight_style())),
        Line::from(format!("  {}", progress_bar(app.progress(), PROGRESS_BAR_WIDTH))),
        Line::from(""),
        Line::from(Span::styled("Practice quiz", styles::highlight_style())),
        Line::from("  What is 7 × 8?"),
        quiz_line,
    ];

    let block = Block::default()
        .title(" Student dashboard ")
        .title_style(styles::title_style())
        .borders(Borders::ALL)
        .border_style(styles::border_style(false));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_courses(frame: &mut Frame, app: &App, area: Rect) {
    let courses = app.enrolled_courses();
    let title_width = (area.width as usize).saturating_sub(16).max(8);

    let items: Vec<ListItem> = courses
        .iter()
        .enumerate()
        .map(|(i, course)| {
            let style = if i == app.course_selection {
                styles::selected_style()
            } else {
                styles::list_item_style()
            };
            ListItem::new(vec![
                Line::from(format!(
                    "{:<width$} {}",
                    truncate_string(&course.title, title_width),
                    course.display_lessons(),
                    width = title_width
                )),
                Line::from(Span::styled(
                    format!("  {}", course.description),
                    styles::muted_style(),
                )),
            ])
            .style(style)
        })
        .collect();

    let block = Block::default()
        .title(format!(" My courses ({}) ", courses.len()))
        .title_style(styles::title_style())
        .borders(Borders::ALL)
        .border_style(styles::border_style(true));

    if items.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            "Not enrolled in any courses",
            styles::muted_style(),
        )))
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let list = List::new(items).block(block);
    let mut state = ListState::default();
    state.select(Some(app.course_selection));
    frame.render_stateful_widget(list, area, &mut state);
}
