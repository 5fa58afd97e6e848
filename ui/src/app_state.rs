use api::prefs::user_prefs::UserPrefs;
use std::ops::Deref;
use std::sync::Arc;

#[derive(Debug, PartialEq)]
pub struct AppStateData {
    pub prefs: UserPrefs,
    /// The signed-in chain account. `None` when unauthenticated.
    pub actor: Option<String>,
}

/// Stable, non-reactive state shared with every component.
#[derive(Clone, Debug, PartialEq)]
pub struct AppState(Arc<AppStateData>);

impl Deref for AppState {
    type Target = AppStateData;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AppState {
    pub fn new(prefs: UserPrefs, actor: Option<String>) -> Self {
        Self(Arc::new(AppStateData { prefs, actor }))
    }

    pub fn current_actor(&self) -> Option<&str> {
        self.actor.as_deref()
    }
}
