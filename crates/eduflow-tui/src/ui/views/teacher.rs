use chrono::Utc;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use crate::app::{App, TeacherPanel};
use crate::ui::styles;
use crate::utils::{format_due, truncate_string};

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(6), Constraint::Length(8)])
        .split(columns[0]);

    render_assignments(frame, app, left[0]);
    render_questions(frame, app, left[1]);
    render_attendance(frame, app, columns[1]);
}

fn render_assignments(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.teacher_panel == TeacherPanel::Assignments;
    let now = Utc::now();
    let title_width = (area.width as usize).saturating_sub(32).max(10);

    let block = Block::default()
        .title(format!(" Assignments ({}) ", app.assignments.len()))
        .title_style(styles::title_style())
        .borders(Borders::ALL)
        .border_style(styles::border_style(focused));

    if app.assignments.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            "No assignments yet - press [n] to create one",
            styles::muted_style(),
        )))
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = app
        .assignments
        .items()
        .iter()
        .enumerate()
        .map(|(i, assignment)| {
            let style = if focused && i == app.assignment_selection {
                styles::selected_style()
            } else {
                styles::list_item_style()
            };
            let due_style = if assignment.is_overdue(now) {
                styles::error_style()
            } else {
                styles::muted_style()
            };
            ListItem::new(Line::from(vec![
                Span::raw(format!(
                    "{:<width$} ",
                    truncate_string(&assignment.title, title_width),
                    width = title_width
                )),
                Span::styled(format_due(assignment.due, now), due_style),
            ]))
            .style(style)
        })
        .collect();

    let list = List::new(items).block(block);
    let mut state = ListState::default();
    state.select(Some(app.assignment_selection));
    frame.render_stateful_widget(list, area, &mut state);
}

fn render_questions(frame: &mut Frame, app: &App, area: Rect) {
    let lines: Vec<Line> = if app.generated_questions.is_empty() {
        vec![Line::from(Span::styled(
            "Press [g] to generate practice questions",
            styles::muted_style(),
        ))]
    } else {
        app.generated_questions
            .iter()
            .enumerate()
            .map(|(i, q)| Line::from(format!("{}. {}", i + 1, q)))
            .collect()
    };

    let block = Block::default()
        .title(" Question ideas ")
        .title_style(styles::title_style())
        .borders(Borders::ALL)
        .border_style(styles::border_style(false));

    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
}

fn render_attendance(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.teacher_panel == TeacherPanel::Attendance;

    let items: Vec<ListItem> = app
        .roster
        .iter()
        .enumerate()
        .map(|(i, student)| {
            let present = app.attendance.is_present(&student.id);
            let style = if focused && i == app.attendance_selection {
                styles::selected_style()
            } else {
                styles::list_item_style()
            };
            ListItem::new(Line::from(vec![
                Span::styled(
                    if present { "[x] " } else { "[ ] " },
                    styles::presence_style(present),
                ),
                Span::raw(student.name.clone()),
            ]))
            .style(style)
        })
        .collect();

    let block = Block::default()
        .title(format!(
            " Attendance ({}/{}) ",
            app.attendance
                .present_count(app.roster.iter().map(|s| s.id.as_str())),
            app.roster.len()
        ))
        .title_style(styles::title_style())
        .borders(Borders::ALL)
        .border_style(styles::border_style(focused));

    let list = List::new(items).block(block);
    let mut state = ListState::default();
    state.select(Some(app.attendance_selection));
    frame.render_stateful_widget(list, area, &mut state);
}
