// src/presentation/http/state.rs
use crate::{application::services::ApplicationServices, presentation::views::PageRenderer};
use std::sync::Arc;

#[derive(Clone)]
pub struct HttpState {
    pub services: Arc<ApplicationServices>,
    pub views: Arc<PageRenderer>,
}
