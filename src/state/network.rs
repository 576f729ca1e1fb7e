use crate::state::app_state::LoadedMatch;
use crate::state::messages::{NetworkRequest, NetworkResponse};
use log::{debug, error, warn};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use wc_api::catalog::CatalogCache;
use wc_api::client::{ApiError, DataRoot, StatsBombApi};

const SPINNER_CHARS: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];
pub const ERROR_CHAR: char = '!';

#[derive(Debug, Copy, Clone)]
pub struct LoadingState {
    pub is_loading: bool,
    pub spinner_char: char,
}

impl Default for LoadingState {
    fn default() -> Self {
        Self { is_loading: false, spinner_char: ' ' }
    }
}

/// Serves requests one at a time; a slow fetch blocks the queue behind it.
pub struct NetworkWorker {
    client: StatsBombApi,
    catalog: CatalogCache,
    requests: mpsc::Receiver<NetworkRequest>,
    responses: mpsc::Sender<NetworkResponse>,
    spinner: Option<JoinHandle<()>>,
}

impl NetworkWorker {
    pub fn new(
        data_root: DataRoot,
        requests: mpsc::Receiver<NetworkRequest>,
        responses: mpsc::Sender<NetworkResponse>,
    ) -> Self {
        Self {
            client: StatsBombApi::new().with_root(data_root),
            catalog: CatalogCache::new(),
            requests,
            responses,
            spinner: None,
        }
    }

    pub async fn run(mut self) {
        while let Some(request) = self.requests.recv().await {
            self.start_loading_animation().await;

            let result = match request {
                NetworkRequest::LoadCatalog => self.handle_load_catalog().await,
                NetworkRequest::LoadMatch { match_id } => self.handle_load_match(match_id).await,
            };

            debug!("network request complete");
            self.stop_loading_animation(result.is_ok()).await;

            let response = result.unwrap_or_else(|err| NetworkResponse::Error {
                message: err.to_string(),
            });

            if let Err(e) = self.responses.send(response).await {
                error!("Failed to send network response: {e}");
                break;
            }
        }
    }

    async fn handle_load_catalog(&self) -> Result<NetworkResponse, ApiError> {
        debug!("loading world cup catalog");
        let catalog = self.catalog.get_or_resolve(&self.client).await?.clone();
        debug!("catalog holds {} matches", catalog.len());
        Ok(NetworkResponse::CatalogLoaded { catalog })
    }

    async fn handle_load_match(&self, match_id: u64) -> Result<NetworkResponse, ApiError> {
        let row = self
            .catalog
            .get_or_resolve(&self.client)
            .await?
            .find(match_id)
            .cloned()
            .ok_or_else(|| ApiError::NotFound(format!("match {match_id} is not in the catalog")))?;

        debug!("loading events for {} ({match_id})", row.label());
        let tables = self.client.fetch_match_tables(match_id).await?;
        // Events alone are enough to explore a match.
        let lineups = match self.client.fetch_lineups(match_id).await {
            Ok(lineups) => lineups,
            Err(e) => {
                warn!("lineups for match {match_id} unavailable: {e}");
                Vec::new()
            }
        };
        Ok(NetworkResponse::MatchLoaded {
            loaded: Box::new(LoadedMatch::new(row, tables, lineups)),
        })
    }

    async fn start_loading_animation(&mut self) {
        if let Some(previous) = self.spinner.take() {
            previous.abort();
        }

        let mut loading_state =
            LoadingState { is_loading: true, spinner_char: SPINNER_CHARS[0] };
        let _ = self
            .responses
            .send(NetworkResponse::LoadingStateChanged { loading_state })
            .await;

        let responses = self.responses.clone();
        self.spinner = Some(tokio::spawn(async move {
            let mut spinner_index = 1;
            let mut interval = tokio::time::interval(Duration::from_millis(33));
            interval.tick().await;
            loop {
                interval.tick().await;
                loading_state.spinner_char = SPINNER_CHARS[spinner_index];
                spinner_index = (spinner_index + 1) % SPINNER_CHARS.len();
                if responses
                    .send(NetworkResponse::LoadingStateChanged { loading_state })
                    .await
                    .is_err()
                {
                    break;
                }
            }
        }));
    }

    /// Cancels the spinner task and waits for it to exit, so no spinner frame
    /// can follow the final state.
    async fn stop_loading_animation(&mut self, is_ok: bool) {
        if let Some(spinner) = self.spinner.take() {
            spinner.abort();
            let _ = spinner.await;
        }

        let spinner_char = if is_ok { ' ' } else { ERROR_CHAR };
        let _ = self
            .responses
            .send(NetworkResponse::LoadingStateChanged {
                loading_state: LoadingState { is_loading: false, spinner_char },
            })
            .await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    const COMPETITIONS: &str = r#"[
        {"competition_id": 43, "season_id": 106, "competition_name": "FIFA World Cup",
         "season_name": "2022"}
    ]"#;

    const MATCHES: &str = r#"[
        {"match_id": 7, "match_date": "2022-12-18",
         "home_team": {"home_team_name": "Argentina"},
         "away_team": {"away_team_name": "France"}}
    ]"#;

    const EVENTS: &str = r#"[
        {"id": "p1", "index": 1, "period": 1, "timestamp": "00:00:01.000",
         "minute": 0, "second": 1, "type": {"id": 30, "name": "Pass"},
         "team": {"id": 779, "name": "Argentina"},
         "player": {"id": 5503, "name": "Lionel Messi"}}
    ]"#;

    fn data_dir(name: &str, lineups: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("wctui-{name}-{}", std::process::id()));
        for sub in ["matches/43", "events", "lineups"] {
            std::fs::create_dir_all(dir.join(sub)).unwrap();
        }
        std::fs::write(dir.join("competitions.json"), COMPETITIONS).unwrap();
        std::fs::write(dir.join("matches/43/106.json"), MATCHES).unwrap();
        std::fs::write(dir.join("events/7.json"), EVENTS).unwrap();
        std::fs::write(dir.join("lineups/7.json"), lineups).unwrap();
        dir
    }

    fn worker(root: DataRoot) -> (NetworkWorker, mpsc::Receiver<NetworkResponse>) {
        let (_req_tx, req_rx) = mpsc::channel(8);
        let (resp_tx, resp_rx) = mpsc::channel(256);
        (NetworkWorker::new(root, req_rx, resp_tx), resp_rx)
    }

    #[tokio::test]
    async fn broken_lineups_still_load_the_match() {
        let dir = data_dir("broken-lineups", "{\"not\": \"a list\"}");
        let (worker, _responses) = worker(DataRoot::Local(dir.clone()));

        let response = worker.handle_load_match(7).await;
        let _ = std::fs::remove_dir_all(&dir);

        match response {
            Ok(NetworkResponse::MatchLoaded { loaded }) => {
                assert!(loaded.lineups.is_empty());
                assert_eq!(loaded.events().len(), 1);
                assert_eq!(loaded.row.home_team, "Argentina");
            }
            other => panic!("expected a loaded match, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn unknown_match_is_an_error() {
        let dir = data_dir("unknown-match", "[]");
        let (worker, _responses) = worker(DataRoot::Local(dir.clone()));

        let response = worker.handle_load_match(99).await;
        let _ = std::fs::remove_dir_all(&dir);

        assert!(matches!(response, Err(ApiError::NotFound(_))));
    }

    #[tokio::test]
    async fn spinner_stops_after_each_request() {
        let (mut worker, mut responses) = worker(DataRoot::Local(std::env::temp_dir()));

        for is_ok in [true, false] {
            worker.start_loading_animation().await;
            tokio::time::sleep(Duration::from_millis(80)).await;
            worker.stop_loading_animation(is_ok).await;
            assert!(worker.spinner.is_none());
        }

        let mut states = Vec::new();
        while let Ok(NetworkResponse::LoadingStateChanged { loading_state }) = responses.try_recv() {
            states.push(loading_state);
        }
        let last = states.last().expect("loading states were sent");
        assert!(!last.is_loading);
        assert_eq!(last.spinner_char, ERROR_CHAR);

        tokio::time::sleep(Duration::from_millis(120)).await;
        assert!(responses.try_recv().is_err());
    }
}
