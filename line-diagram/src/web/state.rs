//! Application state for the web layer.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::panel::Panel;
use crate::planner::PathFinder;

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// The panel, shared with the render loop
    pub panel: Arc<Mutex<Panel>>,

    /// Route finder over the reference network
    pub finder: PathFinder<'static>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(panel: Panel) -> Self {
        Self {
            panel: Arc::new(Mutex::new(panel)),
            finder: PathFinder::default(),
        }
    }
}
