use crate::cache::LocalCache;
use crate::error::RouterError;
use crate::models::{Identity, Role};
use crate::router::{self, RouterState, Screen, View};
use crate::store::KvStore;

/// Binds the router state to local persistence.
///
/// Transitions go through the pure functions in [`crate::router`]; the
/// session only decides what to write afterwards.
pub struct Session<S> {
    cache: LocalCache<S>,
    state: RouterState,
}

impl<S: KvStore> Session<S> {
    /// Restore the signed-in user from the cache, if any.
    pub fn restore(cache: LocalCache<S>) -> Self {
        let state = match cache.load_user() {
            Some(identity) => RouterState::with_identity(identity),
            None => RouterState::signed_out(),
        };
        Self { cache, state }
    }

    pub fn sign_in(&mut self, role: Role, directory: &[Identity]) -> Result<(), RouterError> {
        let mut next = router::sign_in(self.state.clone(), role, directory)?;
        if let Some(identity) = next.identity.as_mut() {
            if let Some(progress) = self.cache.load_progress(&identity.id) {
                identity.progress = Some(progress);
            }
            self.cache.save_user(identity);
        }
        self.state = next;
        Ok(())
    }

    pub fn sign_out(&mut self) {
        self.state = router::sign_out(std::mem::take(&mut self.state));
        self.cache.clear_user();
    }

    pub fn navigate(&mut self, view: View) {
        self.state = router::navigate(std::mem::take(&mut self.state), view);
    }

    pub fn screen(&self) -> Screen {
        router::resolve(&self.state)
    }

    pub fn state(&self) -> &RouterState {
        &self.state
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.state.identity.as_ref()
    }

    pub fn is_signed_in(&self) -> bool {
        self.state.is_signed_in()
    }

    pub fn cache(&self) -> &LocalCache<S> {
        &self.cache
    }

    /// Record new lesson progress for the signed-in user and persist it.
    /// Returns the stored (clamped) value, or `None` when signed out.
    pub fn set_progress(&mut self, progress: f64) -> Option<f64> {
        let identity = self.state.identity.as_mut()?;
        let progress = progress.clamp(0.0, 1.0);
        identity.progress = Some(progress);
        self.cache.save_progress(&identity.id, progress);
        self.cache.save_user(identity);
        Some(progress)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock;
    use crate::store::{KvStore, MemoryStore};

    #[test]
    fn test_fresh_store_is_signed_out() {
        let session = Session::restore(LocalCache::new(MemoryStore::new()));
        assert!(!session.is_signed_in());
        assert_eq!(session.screen(), Screen::SignIn);
    }

    #[test]
    fn test_sign_in_persists_across_restore() {
        let store = MemoryStore::new();
        {
            let mut session = Session::restore(LocalCache::new(&store));
            session.sign_in(Role::Teacher, &mock::directory()).unwrap();
        }
        let session = Session::restore(LocalCache::new(&store));
        assert!(session.is_signed_in());
        assert_eq!(session.identity().map(|i| i.id.as_str()), Some("t1"));
        assert_eq!(session.screen(), Screen::TeacherDashboard);
    }

    #[test]
    fn test_sign_out_persists_null_user() {
        let store = MemoryStore::new();
        {
            let mut session = Session::restore(LocalCache::new(&store));
            session.sign_in(Role::Admin, &mock::directory()).unwrap();
            session.sign_out();
            assert_eq!(session.screen(), Screen::SignIn);
        }
        let session = Session::restore(LocalCache::new(&store));
        assert!(session.identity().is_none());
        assert_eq!(store.read("eduflow_user").unwrap().as_deref(), Some("null"));
    }

    #[test]
    fn test_failed_sign_in_keeps_state() {
        let mut session = Session::restore(LocalCache::new(MemoryStore::new()));
        let directory = vec![Identity::new("t1", Role::Teacher, "Dana Rivera")];
        assert!(session.sign_in(Role::Student, &directory).is_err());
        assert!(session.identity().is_none());
        assert!(session.cache().load_user().is_none());
    }

    #[test]
    fn test_sign_in_picks_up_saved_progress() {
        let store = MemoryStore::new();
        let cache = LocalCache::new(&store);
        cache.save_progress("s1", 0.8);

        let mut session = Session::restore(cache);
        session.sign_in(Role::Student, &mock::directory()).unwrap();
        assert_eq!(session.identity().and_then(|i| i.progress), Some(0.8));
    }

    #[test]
    fn test_set_progress_persists() {
        let store = MemoryStore::new();
        let mut session = Session::restore(LocalCache::new(&store));
        assert_eq!(session.set_progress(0.5), None);

        session.sign_in(Role::Student, &mock::directory()).unwrap();
        assert_eq!(session.set_progress(1.4), Some(1.0));
        assert_eq!(session.cache().load_progress("s1"), Some(1.0));
        assert_eq!(
            session.cache().load_user().and_then(|i| i.progress),
            Some(1.0)
        );
    }

    #[test]
    fn test_navigate_then_gate() {
        let mut session = Session::restore(LocalCache::new(MemoryStore::new()));
        session.navigate(View::About);
        assert_eq!(session.screen(), Screen::SignIn);
        session.sign_in(Role::Student, &mock::directory()).unwrap();
        session.navigate(View::About);
        assert_eq!(session.screen(), Screen::About);
    }
}
