use crate::actions::Action;
use crate::api::Api;
use crate::middleware::{checker_middleware::CheckerMiddleware, keyboard_middleware::KeyboardMiddleware};
use crate::reducers::app_reducer::reduce;
use crate::state::AppState;
use goalboard_config::AppConfig;
use goalboard_store::{LoggingMiddleware, Store, ThunkMiddleware};

pub type AppStore = Store<AppState, Action>;

/// Build the store with the application middleware chain
///
/// Order matters: key presses are translated first, thunks run before
/// anything inspects plain actions, and the logger only sees what
/// survived the checker.
pub fn create_store(config: &AppConfig, api: Api) -> AppStore {
    let mut store = Store::with_default(reduce);

    store.add_middleware(KeyboardMiddleware::new(api));
    store.add_middleware(ThunkMiddleware::new());
    store.add_middleware(CheckerMiddleware::new(config.banned_words.clone()));
    if config.log_actions {
        store.add_middleware(LoggingMiddleware::with_filter(Action::is_noisy));
    }

    store
}
