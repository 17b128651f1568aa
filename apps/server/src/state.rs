//! Application state.

use std::sync::Arc;

use exercise_store::{ExerciseStore, LogAppender, LogQueryEngine, UserDirectory};

use crate::config::Config;

/// Shared application state.
///
/// The service objects are constructed once at startup and handed to
/// request handlers by reference; there is no module-level state.
pub struct AppState<S: ExerciseStore> {
    /// Server configuration.
    pub config: Config,
    /// User lookup and creation.
    pub users: UserDirectory<S>,
    /// Exercise appending.
    pub appender: LogAppender<S>,
    /// Log queries.
    pub query: LogQueryEngine<S>,
}

impl<S: ExerciseStore> AppState<S> {
    /// Creates new application state.
    pub fn new(config: Config, store: S) -> Self {
        let store = Arc::new(store);
        Self {
            config,
            users: UserDirectory::new(Arc::clone(&store)),
            appender: LogAppender::new(Arc::clone(&store)),
            query: LogQueryEngine::new(store),
        }
    }
}

/// Type alias for shared state.
pub type SharedState<S> = Arc<AppState<S>>;

/// Creates shared state from config and store.
pub fn create_shared_state<S: ExerciseStore>(config: Config, store: S) -> SharedState<S> {
    Arc::new(AppState::new(config, store))
}
