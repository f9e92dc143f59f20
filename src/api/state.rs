//! API server state

use std::sync::Arc;

use crate::random::Selector;

/// API server state
#[derive(Clone, Debug)]
pub struct AppState {
    /// Generator shared by every unicorn request
    pub selector: Arc<Selector>,
}

impl AppState {
    pub fn new(selector: Arc<Selector>) -> Self {
        Self { selector }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Arc::new(Selector::default()))
    }
}
