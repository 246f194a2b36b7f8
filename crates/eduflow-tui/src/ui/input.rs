//! Keyboard input handling for the TUI.
//!
//! This module handles all keyboard events and translates them into
//! application state changes.

use chrono::Utc;
use crossterm::event::{KeyCode, KeyEvent};

use eduflow_core::models::Role;
use eduflow_core::Screen;

use crate::app::{can_add_title_char, App, AppState, Tab, TeacherPanel};

/// Handle keyboard input. Returns true if the app should quit.
pub fn handle_input(app: &mut App, key: KeyEvent) -> bool {
    match app.state {
        AppState::ShowingHelp => {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')) {
                app.state = AppState::Normal;
            }
            return false;
        }
        AppState::ConfirmingQuit => {
            match key.code {
                KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                    app.state = AppState::Quitting;
                    return true;
                }
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                    app.state = AppState::Normal;
                }
                _ => {}
            }
            return false;
        }
        AppState::EditingAssignment => {
            handle_assignment_input(app, key);
            return false;
        }
        AppState::Quitting => return true,
        AppState::Normal => {}
    }

    // Global keys
    match key.code {
        KeyCode::Char('q') => {
            app.state = AppState::ConfirmingQuit;
            return false;
        }
        KeyCode::Char('?') => {
            app.state = AppState::ShowingHelp;
            return false;
        }
        KeyCode::Char('1') => {
            app.select_tab(Tab::Home);
            return false;
        }
        KeyCode::Char('2') => {
            app.select_tab(Tab::About);
            return false;
        }
        KeyCode::Char('3') => {
            app.select_tab(Tab::Dashboard);
            return false;
        }
        KeyCode::Left => {
            app.select_tab(app.current_tab().prev());
            return false;
        }
        KeyCode::Right => {
            app.select_tab(app.current_tab().next());
            return false;
        }
        KeyCode::Up => {
            app.select_prev();
            return false;
        }
        KeyCode::Down => {
            app.select_next();
            return false;
        }
        _ => {}
    }

    match app.screen() {
        Screen::SignIn => handle_signin_input(app, key),
        Screen::StudentDashboard => handle_student_input(app, key),
        Screen::TeacherDashboard => handle_teacher_input(app, key),
        Screen::AdminDashboard | Screen::Home | Screen::About => {
            if key.code == KeyCode::Char('o') && app.is_signed_in() {
                app.sign_out();
            }
        }
    }

    false
}

fn handle_signin_input(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.sign_in(),
        KeyCode::Tab => app.select_next(),
        KeyCode::BackTab => app.select_prev(),
        KeyCode::Char('s') => quick_sign_in(app, Role::Student),
        KeyCode::Char('t') => quick_sign_in(app, Role::Teacher),
        KeyCode::Char('a') => quick_sign_in(app, Role::Admin),
        _ => {}
    }
}

fn quick_sign_in(app: &mut App, role: Role) {
    app.signin_role = role;
    app.sign_in();
}

fn handle_student_input(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('c') => app.complete_lesson(),
        KeyCode::Char('k') => app.answer_quiz(&mut rand::thread_rng()),
        KeyCode::Char('o') => app.sign_out(),
        _ => {}
    }
}

fn handle_teacher_input(app: &mut App, key: KeyEvent) {
    match (key.code, app.teacher_panel) {
        (KeyCode::Char('d') | KeyCode::Delete, TeacherPanel::Assignments) => {
            app.delete_selected_assignment()
        }
        (KeyCode::Char(' ') | KeyCode::Enter, TeacherPanel::Attendance) => {
            app.toggle_selected_attendance()
        }
        _ => handle_teacher_shortcut(app, key),
    }
}

/// Teacher keys that work whichever panel has focus.
fn handle_teacher_shortcut(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Tab | KeyCode::BackTab => app.teacher_panel = app.teacher_panel.toggle(),
        KeyCode::Char('n') => app.start_new_assignment(),
        KeyCode::Char('g') => app.generate_questions(),
        KeyCode::Char('e') => app.export_csv(),
        KeyCode::Char('o') => app.sign_out(),
        _ => {}
    }
}

fn handle_assignment_input(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.submit_assignment(Utc::now()),
        KeyCode::Esc => app.cancel_new_assignment(),
        KeyCode::Backspace => {
            app.assignment_input.pop();
        }
        KeyCode::Char(c) => {
            if can_add_title_char(app.assignment_input.chars().count(), c) {
                app.assignment_input.push(c);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use eduflow_core::{Config, MemoryStore};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn press(app: &mut App, codes: &[KeyCode]) -> bool {
        let mut quit = false;
        for code in codes {
            quit = handle_input(app, key(*code));
        }
        quit
    }

    fn app() -> App {
        App::new(Config::default(), Box::new(MemoryStore::new()))
    }

    #[test]
    fn test_enter_signs_in_selected_role() {
        let mut app = app();
        press(&mut app, &[KeyCode::Down, KeyCode::Enter]);
        assert_eq!(app.screen(), Screen::TeacherDashboard);
    }

    #[test]
    fn test_quick_sign_in_letters() {
        let mut app = app();
        press(&mut app, &[KeyCode::Char('a')]);
        assert_eq!(app.screen(), Screen::AdminDashboard);
    }

    #[test]
    fn test_tabs_before_sign_in_stay_on_signin() {
        let mut app = app();
        press(&mut app, &[KeyCode::Char('1')]);
        assert_eq!(app.current_tab(), Tab::Home);
        assert_eq!(app.screen(), Screen::SignIn);
    }

    #[test]
    fn test_student_keys() {
        let mut app = app();
        press(&mut app, &[KeyCode::Char('s'), KeyCode::Char('c'), KeyCode::Char('k')]);
        assert!(app.last_quiz_result.is_some());
        assert!(app.progress() > 0.35);
        press(&mut app, &[KeyCode::Char('o')]);
        assert_eq!(app.screen(), Screen::SignIn);
    }

    #[test]
    fn test_teacher_creates_assignment_by_typing() {
        let mut app = app();
        press(&mut app, &[KeyCode::Char('t'), KeyCode::Char('n')]);
        assert_eq!(app.state, AppState::EditingAssignment);

        // Letters typed here must not trigger dashboard shortcuts
        press(
            &mut app,
            &[
                KeyCode::Char('q'),
                KeyCode::Char('u'),
                KeyCode::Char('i'),
                KeyCode::Char('z'),
                KeyCode::Char('x'),
                KeyCode::Backspace,
                KeyCode::Enter,
            ],
        );
        assert_eq!(app.state, AppState::Normal);
        assert_eq!(app.assignments.get(0).map(|a| a.title.as_str()), Some("quiz"));
    }

    #[test]
    fn test_escape_cancels_assignment() {
        let mut app = app();
        press(&mut app, &[KeyCode::Char('t'), KeyCode::Char('n'), KeyCode::Char('a'), KeyCode::Esc]);
        assert_eq!(app.state, AppState::Normal);
        assert!(app.assignments.is_empty());
    }

    #[test]
    fn test_teacher_attendance_toggle_via_tab_and_space() {
        let mut app = app();
        press(&mut app, &[KeyCode::Char('t'), KeyCode::Tab, KeyCode::Char(' ')]);
        let first = app.roster[0].id.clone();
        assert!(app.attendance.is_present(&first));
    }

    #[test]
    fn test_attendance_keys_ignored_in_assignments_panel() {
        let mut app = app();
        press(&mut app, &[KeyCode::Char('t')]);
        assert_eq!(app.teacher_panel, TeacherPanel::Assignments);
        press(&mut app, &[KeyCode::Enter, KeyCode::Char(' ')]);
        assert_eq!(app.attendance, Default::default());
    }

    #[test]
    fn test_delete_ignored_in_attendance_panel() {
        let mut app = app();
        press(&mut app, &[KeyCode::Char('t'), KeyCode::Char('n')]);
        for c in "Essay".chars() {
            press(&mut app, &[KeyCode::Char(c)]);
        }
        press(&mut app, &[KeyCode::Enter, KeyCode::Tab]);
        assert_eq!(app.teacher_panel, TeacherPanel::Attendance);

        press(&mut app, &[KeyCode::Char('d'), KeyCode::Delete]);
        assert_eq!(app.assignments.len(), 1);

        press(&mut app, &[KeyCode::Tab, KeyCode::Char('d')]);
        assert!(app.assignments.is_empty());
    }

    #[test]
    fn test_quit_confirmation() {
        let mut app = app();
        assert!(!press(&mut app, &[KeyCode::Char('q')]));
        assert_eq!(app.state, AppState::ConfirmingQuit);
        assert!(!press(&mut app, &[KeyCode::Char('n')]));
        assert_eq!(app.state, AppState::Normal);
        assert!(press(&mut app, &[KeyCode::Char('q'), KeyCode::Char('y')]));
        assert_eq!(app.state, AppState::Quitting);
    }

    #[test]
    fn test_help_overlay_swallows_keys() {
        let mut app = app();
        press(&mut app, &[KeyCode::Char('?'), KeyCode::Char('a')]);
        assert_eq!(app.state, AppState::ShowingHelp);
        assert_eq!(app.screen(), Screen::SignIn);
        press(&mut app, &[KeyCode::Esc]);
        assert_eq!(app.state, AppState::Normal);
    }
}
