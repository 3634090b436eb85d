use crate::classifier::LogisticModel;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub model: Arc<LogisticModel>,
}

impl AppState {
    pub fn new(model: LogisticModel) -> Self {
        Self {
            model: Arc::new(model),
        }
    }
}
