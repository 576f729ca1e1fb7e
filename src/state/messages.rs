use crate::state::app_state::LoadedMatch;
use crate::state::network::LoadingState;
use crossterm::event::KeyEvent;
use wc_api::catalog::Catalog;

#[derive(Debug, Clone)]
pub enum NetworkRequest {
    LoadCatalog,
    LoadMatch { match_id: u64 },
}

#[derive(Debug)]
pub enum NetworkResponse {
    LoadingStateChanged { loading_state: LoadingState },
    CatalogLoaded { catalog: Catalog },
    MatchLoaded { loaded: Box<LoadedMatch> },
    Error { message: String },
}

#[derive(Debug, Clone)]
pub enum UiEvent {
    KeyPressed(KeyEvent),
    Resize,
    AppStarted,
}
