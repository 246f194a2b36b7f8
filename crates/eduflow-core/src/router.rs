//! Identity and view routing.
//!
//! `RouterState` is an explicit value: every transition takes a state and
//! returns the next one, and [`resolve`] maps a state to the screen that
//! should be drawn. Persistence lives in [`crate::session`].

use tracing::info;

use crate::error::RouterError;
use crate::models::{Identity, Role};

/// The view the user asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Home,
    About,
    SignIn,
    Dashboard,
}

impl View {
    pub fn title(&self) -> &'static str {
        match self {
            View::Home => "Home",
            View::About => "About",
            View::SignIn => "Sign in",
            View::Dashboard => "Dashboard",
        }
    }
}

/// What actually gets drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    About,
    SignIn,
    StudentDashboard,
    TeacherDashboard,
    AdminDashboard,
}

impl Screen {
    pub fn dashboard_for(role: Role) -> Self {
        match role {
            Role::Student => Screen::StudentDashboard,
            Role::Teacher => Screen::TeacherDashboard,
            Role::Admin => Screen::AdminDashboard,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RouterState {
    pub identity: Option<Identity>,
    pub view: View,
}

impl RouterState {
    pub fn signed_out() -> Self {
        Self::default()
    }

    pub fn with_identity(identity: Identity) -> Self {
        Self {
            identity: Some(identity),
            view: View::Dashboard,
        }
    }

    pub fn is_signed_in(&self) -> bool {
        self.identity.is_some()
    }
}

/// Sign in as the first identity in `directory` holding `role`.
///
/// On failure the caller keeps its current state; the error text is meant to
/// be shown to the user as-is.
pub fn sign_in(
    state: RouterState,
    role: Role,
    directory: &[Identity],
) -> Result<RouterState, RouterError> {
    let identity = directory
        .iter()
        .find(|identity| identity.role == role)
        .cloned()
        .ok_or(RouterError::NoIdentityForRole(role))?;

    info!(user_id = %identity.id, %role, "Signed in");
    let mut next = state;
    next.identity = Some(identity);
    next.view = View::Dashboard;
    Ok(next)
}

pub fn sign_out(state: RouterState) -> RouterState {
    let mut next = state;
    if let Some(identity) = next.identity.take() {
        info!(user_id = %identity.id, "Signed out");
    }
    next.view = View::SignIn;
    next
}

pub fn navigate(state: RouterState, view: View) -> RouterState {
    RouterState { view, ..state }
}

/// Pick the screen for `state`. Without an identity this is always the
/// sign-in screen; otherwise the dashboard follows the identity's role.
pub fn resolve(state: &RouterState) -> Screen {
    let Some(identity) = state.identity.as_ref() else {
        return Screen::SignIn;
    };
    match state.view {
        View::Home => Screen::Home,
        View::About => Screen::About,
        View::SignIn | View::Dashboard => Screen::dashboard_for(identity.role),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock;

    const ALL_VIEWS: [View; 4] = [View::Home, View::About, View::SignIn, View::Dashboard];

    #[test]
    fn test_no_identity_always_signin() {
        for view in ALL_VIEWS {
            let state = navigate(RouterState::signed_out(), view);
            assert_eq!(resolve(&state), Screen::SignIn);
        }
    }

    #[test]
    fn test_sign_in_picks_first_matching_identity() {
        let state = sign_in(RouterState::signed_out(), Role::Student, &mock::directory()).unwrap();
        let identity = state.identity.as_ref().unwrap();
        assert_eq!(identity.id, "s1");
        assert_eq!(state.view, View::Dashboard);
        assert_eq!(resolve(&state), Screen::StudentDashboard);
    }

    #[test]
    fn test_teacher_never_sees_other_dashboards() {
        let state = sign_in(RouterState::signed_out(), Role::Teacher, &mock::directory()).unwrap();
        for view in ALL_VIEWS {
            let screen = resolve(&navigate(state.clone(), view));
            assert_ne!(screen, Screen::StudentDashboard);
            assert_ne!(screen, Screen::AdminDashboard);
        }
        assert_eq!(resolve(&state), Screen::TeacherDashboard);
    }

    #[test]
    fn test_dispatch_matches_role() {
        for role in Role::ALL {
            let state = sign_in(RouterState::signed_out(), role, &mock::directory()).unwrap();
            assert_eq!(resolve(&state), Screen::dashboard_for(role));
        }
    }

    #[test]
    fn test_sign_in_without_matching_identity() {
        let directory = vec![Identity::new("s1", Role::Student, "Only Student")];
        let err = sign_in(RouterState::signed_out(), Role::Admin, &directory).unwrap_err();
        assert_eq!(err, RouterError::NoIdentityForRole(Role::Admin));
        assert_eq!(
            err.to_string(),
            "No demo account is available for the admin role"
        );
    }

    #[test]
    fn test_sign_out_clears_identity() {
        let state = sign_in(RouterState::signed_out(), Role::Admin, &mock::directory()).unwrap();
        let state = sign_out(state);
        assert!(!state.is_signed_in());
        assert_eq!(resolve(&state), Screen::SignIn);
    }

    #[test]
    fn test_navigate_keeps_identity() {
        let state = sign_in(RouterState::signed_out(), Role::Student, &mock::directory()).unwrap();
        let state = navigate(state, View::About);
        assert_eq!(resolve(&state), Screen::About);
        let state = navigate(state, View::Home);
        assert_eq!(resolve(&state), Screen::Home);
        assert!(state.is_signed_in());
    }
}
