//! Application state management for EduFlow.
//!
//! This module contains the `App` struct that owns the session, the per-role
//! dashboard data loaded from the local cache, and all UI state.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use tracing::{debug, info};

use eduflow_core::dashboard::{self, Overview, LESSON_STEP};
use eduflow_core::models::{AssignmentBook, Attendance, Course, Identity, Role, MAX_TITLE_LENGTH};
use eduflow_core::{mock, Config, KvStore, LocalCache, Screen, Session, View};

// ============================================================================
// Constants
// ============================================================================

/// New assignments are due this many days after creation.
const DEFAULT_DUE_DAYS: i64 = 7;

/// Topic passed to the question generator from the teacher dashboard.
const QUESTION_TOPIC: &str = "current unit";

// ============================================================================
// UI State Types
// ============================================================================

/// Main navigation tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Home,
    About,
    Dashboard,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Home, Tab::About, Tab::Dashboard];

    pub fn title(&self) -> &'static str {
        self.view().title()
    }

    /// Get the next tab (wrapping around)
    pub fn next(&self) -> Self {
        match self {
            Tab::Home => Tab::About,
            Tab::About => Tab::Dashboard,
            Tab::Dashboard => Tab::Home,
        }
    }

    /// Get the previous tab (wrapping around)
    pub fn prev(&self) -> Self {
        match self {
            Tab::Home => Tab::Dashboard,
            Tab::About => Tab::Home,
            Tab::Dashboard => Tab::About,
        }
    }

    pub fn view(&self) -> View {
        match self {
            Tab::Home => View::Home,
            Tab::About => View::About,
            Tab::Dashboard => View::Dashboard,
        }
    }

    /// Sign-in requests land on the dashboard tab.
    pub fn from_view(view: View) -> Self {
        match view {
            View::Home => Tab::Home,
            View::About => Tab::About,
            View::SignIn | View::Dashboard => Tab::Dashboard,
        }
    }
}

/// Teacher dashboard panel with keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TeacherPanel {
    Assignments,
    Attendance,
}

impl TeacherPanel {
    pub fn toggle(&self) -> Self {
        match self {
            TeacherPanel::Assignments => TeacherPanel::Attendance,
            TeacherPanel::Attendance => TeacherPanel::Assignments,
        }
    }
}

/// Overall application state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Normal,
    ShowingHelp,
    EditingAssignment,
    ConfirmingQuit,
    Quitting,
}

// ============================================================================
// Main Application Struct
// ============================================================================

pub struct App {
    // Core services
    pub config: Config,
    pub session: Session<Box<dyn KvStore>>,

    // Demo dataset
    pub directory: Vec<Identity>,
    pub courses: Vec<Course>,
    pub roster: Vec<Identity>,

    // UI State
    pub state: AppState,
    pub signin_role: Role,
    pub status_message: Option<String>,

    // Student dashboard
    pub course_selection: usize,
    pub last_quiz_result: Option<bool>,

    // Teacher dashboard
    pub teacher_panel: TeacherPanel,
    pub assignments: AssignmentBook,
    pub assignment_selection: usize,
    pub assignment_input: String,
    pub attendance: Attendance,
    pub attendance_selection: usize,
    pub generated_questions: Vec<String>,
}

impl App {
    pub fn new(config: Config, store: Box<dyn KvStore>) -> Self {
        let cache = LocalCache::new(store);
        let assignments = cache.load_assignments();
        let attendance = cache.load_attendance();
        let session = Session::restore(cache);
        debug!(
            signed_in = session.is_signed_in(),
            assignments = assignments.len(),
            "Restored local state"
        );

        let signin_role = config.last_role.unwrap_or(Role::Student);

        Self {
            config,
            session,

            directory: mock::directory(),
            courses: mock::courses(),
            roster: mock::roster(),

            state: AppState::Normal,
            signin_role,
            status_message: None,

            course_selection: 0,
            last_quiz_result: None,

            teacher_panel: TeacherPanel::Assignments,
            assignments,
            assignment_selection: 0,
            assignment_input: String::new(),
            attendance,
            attendance_selection: 0,
            generated_questions: Vec::new(),
        }
    }

    pub fn screen(&self) -> Screen {
        self.session.screen()
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.session.identity()
    }

    pub fn is_signed_in(&self) -> bool {
        self.session.is_signed_in()
    }

    pub fn current_tab(&self) -> Tab {
        Tab::from_view(self.session.state().view)
    }

    pub fn select_tab(&mut self, tab: Tab) {
        self.session.navigate(tab.view());
    }

    // =========================================================================
    // Sign-in
    // =========================================================================

    pub fn sign_in(&mut self) {
        let role = self.signin_role;
        match self.session.sign_in(role, &self.directory) {
            Ok(()) => {
                self.config.last_role = Some(role);
                self.reset_selections();
                let name = self.identity().map(|i| i.name.clone()).unwrap_or_default();
                self.status_message = Some(format!("Signed in as {}", name));
            }
            Err(e) => {
                info!(error = %e, "Sign-in rejected");
                self.status_message = Some(e.to_string());
            }
        }
    }

    pub fn sign_out(&mut self) {
        self.session.sign_out();
        self.reset_selections();
        self.status_message = Some("Signed out".to_string());
    }

    fn reset_selections(&mut self) {
        self.course_selection = 0;
        self.last_quiz_result = None;
        self.teacher_panel = TeacherPanel::Assignments;
        self.assignment_selection = 0;
        self.attendance_selection = 0;
        self.generated_questions.clear();
    }

    // =========================================================================
    // Student actions
    // =========================================================================

    pub fn enrolled_courses(&self) -> Vec<&Course> {
        match self.identity() {
            Some(identity) => dashboard::enrolled_courses(identity, &self.courses),
            None => Vec::new(),
        }
    }

    pub fn progress(&self) -> f64 {
        self.identity().and_then(|i| i.progress).unwrap_or(0.0)
    }

    pub fn complete_lesson(&mut self) {
        let next = dashboard::advance_progress(self.progress(), LESSON_STEP);
        if let Some(stored) = self.session.set_progress(next) {
            self.status_message = Some(format!(
                "Lesson complete - progress {}%",
                dashboard::progress_percent(stored)
            ));
        }
    }

    pub fn answer_quiz<R: Rng>(&mut self, rng: &mut R) {
        let correct = dashboard::grade_quiz_answer(rng);
        self.last_quiz_result = Some(correct);
        self.status_message = Some(if correct {
            "Correct!".to_string()
        } else {
            "Not quite - try again".to_string()
        });
    }

    // =========================================================================
    // Teacher actions
    // =========================================================================

    pub fn start_new_assignment(&mut self) {
        self.assignment_input.clear();
        self.state = AppState::EditingAssignment;
    }

    pub fn cancel_new_assignment(&mut self) {
        self.assignment_input.clear();
        self.state = AppState::Normal;
    }

    /// Create an assignment from the input buffer. Stays in the editor on
    /// validation errors so the title can be fixed.
    pub fn submit_assignment(&mut self, now: DateTime<Utc>) {
        let due = now + Duration::days(DEFAULT_DUE_DAYS);
        match self.assignments.create(&self.assignment_input, due, now) {
            Ok(created) => {
                info!(id = %created.id, "Assignment created");
                self.status_message = Some(format!("Created \"{}\"", created.title));
                self.session.cache().save_assignments(&self.assignments);
                self.assignment_selection = 0;
                self.assignment_input.clear();
                self.state = AppState::Normal;
            }
            Err(e) => {
                self.status_message = Some(e.to_string());
            }
        }
    }

    pub fn delete_selected_assignment(&mut self) {
        let Some(id) = self
            .assignments
            .get(self.assignment_selection)
            .map(|a| a.id.clone())
        else {
            return;
        };
        if self.assignments.delete(&id) {
            info!(%id, "Assignment deleted");
            self.session.cache().save_assignments(&self.assignments);
            self.assignment_selection = self
                .assignment_selection
                .min(self.assignments.len().saturating_sub(1));
            self.status_message = Some("Assignment deleted".to_string());
        }
    }

    pub fn toggle_selected_attendance(&mut self) {
        let Some(student) = self.roster.get(self.attendance_selection) else {
            return;
        };
        let present = self.attendance.mark(&student.id);
        self.status_message = Some(format!(
            "{} marked {}",
            student.name,
            if present { "present" } else { "absent" }
        ));
        self.session.cache().save_attendance(&self.attendance);
    }

    pub fn generate_questions(&mut self) {
        self.generated_questions = dashboard::generate_questions(QUESTION_TOPIC);
        self.status_message = Some(format!(
            "Generated {} questions",
            self.generated_questions.len()
        ));
    }

    pub fn export_csv(&mut self) {
        self.status_message = Some(dashboard::export_csv_notice().to_string());
    }

    // =========================================================================
    // Admin
    // =========================================================================

    pub fn overview(&self) -> Overview {
        Overview::from_directory(&self.directory, &self.courses)
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    pub fn select_next(&mut self) {
        match self.screen() {
            Screen::SignIn => self.signin_role = self.signin_role.next(),
            Screen::StudentDashboard => {
                let len = self.enrolled_courses().len();
                self.course_selection = step_forward(self.course_selection, len);
            }
            Screen::TeacherDashboard => match self.teacher_panel {
                TeacherPanel::Assignments => {
                    self.assignment_selection =
                        step_forward(self.assignment_selection, self.assignments.len());
                }
                TeacherPanel::Attendance => {
                    self.attendance_selection =
                        step_forward(self.attendance_selection, self.roster.len());
                }
            },
            Screen::Home | Screen::About | Screen::AdminDashboard => {}
        }
    }

    pub fn select_prev(&mut self) {
        match self.screen() {
            Screen::SignIn => self.signin_role = self.signin_role.prev(),
            Screen::StudentDashboard => {
                self.course_selection = self.course_selection.saturating_sub(1);
            }
            Screen::TeacherDashboard => match self.teacher_panel {
                TeacherPanel::Assignments => {
                    self.assignment_selection = self.assignment_selection.saturating_sub(1);
                }
                TeacherPanel::Attendance => {
                    self.attendance_selection = self.attendance_selection.saturating_sub(1);
                }
            },
            Screen::Home | Screen::About | Screen::AdminDashboard => {}
        }
    }
}

fn step_forward(current: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (current + 1).min(len - 1)
    }
}

// ============================================================================
// Input validation helpers (exported for use in input.rs)
// ============================================================================

/// Check if a character should be accepted into the assignment title
pub fn can_add_title_char(current_len: usize, c: char) -> bool {
    current_len < MAX_TITLE_LENGTH && !c.is_control()
}

// ============================================================================
// Tests
// ============================================================================
