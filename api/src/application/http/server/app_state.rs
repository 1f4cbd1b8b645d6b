use std::sync::Arc;

use kidney_compass_core::application::CompassService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: CompassService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: CompassService) -> Self {
        Self { args, service }
    }
}
