use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use eduflow_core::models::MAX_TITLE_LENGTH;
use eduflow_core::Screen;

use crate::app::{App, AppState, Tab};

use super::styles;
use super::views::{admin, home, signin, student, teacher};

pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title bar
            Constraint::Length(3), // Tabs
            Constraint::Min(10),   // Main content
            Constraint::Length(2), // Status bar
        ])
        .split(frame.area());

    render_title_bar(frame, app, chunks[0]);
    render_tabs(frame, app, chunks[1]);
    render_main_content(frame, app, chunks[2]);
    render_status_bar(frame, app, chunks[3]);

    // Render overlays
    match app.state {
        AppState::ShowingHelp => render_help_overlay(frame),
        AppState::EditingAssignment => render_assignment_overlay(frame, app),
        AppState::ConfirmingQuit => render_quit_overlay(frame),
        AppState::Normal | AppState::Quitting => {}
    }
}

fn render_title_bar(frame: &mut Frame, app: &App, area: Rect) {
    let title = "  EduFlow";
    let right = match app.identity() {
        Some(identity) => format!("{} ({})  [?] Help", identity.name, identity.role),
        None => "[?] Help".to_string(),
    };

    let title_line = Line::from(vec![
        Span::styled(title, styles::title_style()),
        Span::raw(" ".repeat(
            (area.width as usize).saturating_sub(title.len() + right.chars().count() + 2),
        )),
        Span::styled(right, styles::muted_style()),
    ]);

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(styles::muted_style());

    let paragraph = Paragraph::new(title_line).block(block);
    frame.render_widget(paragraph, area);
}

fn render_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let current = app.current_tab();

    let mut spans = vec![Span::raw(" ")];
    for (i, tab) in Tab::ALL.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", styles::muted_style()));
        }
        spans.push(Span::styled(
            format!("[{}] {}", i + 1, tab.title()),
            styles::tab_style(*tab == current),
        ));
    }

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(styles::muted_style());

    let paragraph = Paragraph::new(Line::from(spans)).block(block);
    frame.render_widget(paragraph, area);
}

fn render_main_content(frame: &mut Frame, app: &App, area: Rect) {
    match app.screen() {
        Screen::Home => home::render_home(frame, app, area),
        Screen::About => home::render_about(frame, area),
        Screen::SignIn => signin::render(frame, app, area),
        Screen::StudentDashboard => student::render(frame, app, area),
        Screen::TeacherDashboard => teacher::render(frame, app, area),
        Screen::AdminDashboard => admin::render(frame, app, area),
    }
}

fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let left_text = match app.status_message {
        Some(ref msg) => format!(" {} ", msg),
        None => " Ready ".to_string(),
    };
    let right_text = format!(" {} ", shortcuts(app.screen()));

    let width = area.width as usize;
    let padding_len = width
        .saturating_sub(left_text.chars().count())
        .saturating_sub(right_text.chars().count());

    let status_line = Line::from(vec![
        Span::styled(left_text, styles::muted_style()),
        Span::raw(" ".repeat(padding_len)),
        Span::styled(right_text, styles::muted_style()),
    ]);
    let paragraph = Paragraph::new(status_line).style(styles::status_bar_style());
    frame.render_widget(paragraph, area);
}

/// Key hints for the status bar
fn shortcuts(screen: Screen) -> &'static str {
    match screen {
        Screen::SignIn => "↑/↓ role | Enter sign in | [q]uit",
        Screen::StudentDashboard => "[c]omplete lesson | [k] quiz | sign [o]ut | [q]uit",
        Screen::TeacherDashboard => "[n]ew | [d]elete | Space mark | [g]enerate | [e]xport | sign [o]ut",
        Screen::AdminDashboard => "sign [o]ut | [q]uit",
        Screen::Home | Screen::About => "1-3 tabs | [q]uit",
    }
}

fn render_help_overlay(frame: &mut Frame) {
    let area = centered_rect_fixed(52, 25, frame.area());

    // Clear the area
    frame.render_widget(Clear, area);

    let version = env!("CARGO_PKG_VERSION");

    let help_text = vec![
        Line::from(Span::styled("  EduFlow", styles::title_style())),
        Line::from(Span::styled(
            format!("  version {}", version),
            styles::muted_style(),
        )),
        Line::from(""),
        Line::from(Span::styled(" Navigation", styles::highlight_style())),
        help_line("1-3", "Switch tabs"),
        help_line("←/→", "Prev/next tab"),
        help_line("↑/↓", "Navigate list"),
        help_line("Tab", "Switch panel (teacher)"),
        help_line("Esc", "Close dialog"),
        Line::from(""),
        Line::from(Span::styled(" Student", styles::highlight_style())),
        help_line("c", "Complete a lesson"),
        help_line("k", "Answer a quiz question"),
        Line::from(""),
        Line::from(Span::styled(" Teacher", styles::highlight_style())),
        help_line("n / d", "New / delete assignment"),
        help_line("Space", "Toggle attendance"),
        help_line("g / e", "Generate questions / export"),
        Line::from(""),
        help_line("o", "Sign out"),
        help_line("q", "Quit"),
        Line::from(""),
        Line::from(vec![
            Span::styled("       Press ", styles::muted_style()),
            Span::styled("?", styles::help_key_style()),
            Span::styled(" or ", styles::muted_style()),
            Span::styled("Esc", styles::help_key_style()),
            Span::styled(" to close", styles::muted_style()),
        ]),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles::border_style(true))
        .style(Style::default());

    let paragraph = Paragraph::new(help_text).block(block);

    frame.render_widget(paragraph, area);
}

fn help_line(key: &str, desc: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {:<10}", key), styles::help_key_style()),
        Span::styled(desc.to_string(), styles::help_desc_style()),
    ])
}

fn render_assignment_overlay(frame: &mut Frame, app: &App) {
    let area = centered_rect_fixed(60, 9, frame.area());

    frame.render_widget(Clear, area);

    let lines = vec![
        Line::from(Span::styled(" New assignment", styles::highlight_style())),
        Line::from(""),
        Line::from(vec![
            Span::styled(" Title: ", styles::muted_style()),
            Span::styled(format!("{}▌", app.assignment_input), styles::selected_style()),
        ]),
        Line::from(Span::styled(
            format!(
                " {}/{} characters, due in one week",
                app.assignment_input.chars().count(),
                MAX_TITLE_LENGTH
            ),
            styles::muted_style(),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(" Enter", styles::help_key_style()),
            Span::styled(" to create, ", styles::muted_style()),
            Span::styled("Esc", styles::help_key_style()),
            Span::styled(" to cancel", styles::muted_style()),
        ]),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles::border_style(true))
        .style(Style::default());

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Create a centered rectangle with fixed dimensions
pub(crate) fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}

fn render_quit_overlay(frame: &mut Frame) {
    let area = centered_rect_fixed(46, 7, frame.area());

    frame.render_widget(Clear, area);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "   Are you sure you want to quit?",
            styles::highlight_style(),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("   Press ", styles::muted_style()),
            Span::styled("[Y]", styles::help_key_style()),
            Span::styled(" to quit, ", styles::muted_style()),
            Span::styled("[N]", styles::help_key_style()),
            Span::styled(" to cancel", styles::muted_style()),
        ]),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles::border_style(true))
        .style(Style::default());

    let paragraph = Paragraph::new(lines).block(block);

    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use eduflow_core::{Config, MemoryStore};
    use eduflow_core::models::Role;
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_signed_out_draws_signin() {
        let app = App::new(Config::default(), Box::new(MemoryStore::new()));
        let screen = draw(&app);
        assert!(screen.contains("Sign in"));
        assert!(!screen.contains("Attendance"));
    }

    #[test]
    fn test_teacher_draws_teacher_dashboard() {
        let mut app = App::new(Config::default(), Box::new(MemoryStore::new()));
        app.signin_role = Role::Teacher;
        app.sign_in();
        let screen = draw(&app);
        assert!(screen.contains("Attendance"));
        assert!(!screen.contains("My courses"));
        assert!(!screen.contains("Platform overview"));
    }

    #[test]
    fn test_attendance_title_counts_roster_only() {
        let mut app = App::new(Config::default(), Box::new(MemoryStore::new()));
        app.signin_role = Role::Teacher;
        app.sign_in();
        app.attendance.mark("former_student");
        app.attendance.mark("s1");
        let screen = draw(&app);
        assert!(screen.contains(&format!("Attendance (1/{})", app.roster.len())));
    }

    #[test]
    fn test_centered_rect_fits_small_area() {
        let r = centered_rect_fixed(60, 20, Rect::new(0, 0, 40, 10));
        assert_eq!(r.width, 40);
        assert_eq!(r.height, 10);
    }
}
