use std::sync::Arc;

use chrono::NaiveDate;
use monthcal_core::Clock;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    // Injected so "/" can be tested against a fixed date
    clock: Arc<dyn Clock>,
}

impl AppState {
    pub fn new(clock: impl Clock + 'static) -> Self {
        AppState {
            clock: Arc::new(clock),
        }
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }
}
