use crate::parser::parse_match;
use crate::statsbomb::{SbCompetition, SbEvent, SbLineupTeam, SbMatch};
use crate::{Competition, Event, LineupPlayer, MatchRow, MatchTables, TeamLineup};
use chrono::NaiveDate;
use log::debug;
use reqwest::Client;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

pub type ApiResult<T> = Result<T, ApiError>;

pub const OPEN_DATA_URL: &str = "https://raw.githubusercontent.com/statsbomb/open-data/master/data";

/// Where the open-data JSON tree lives.
#[derive(Debug, Clone, PartialEq)]
pub enum DataRoot {
    Remote(String),
    /// A local checkout of the `data/` directory.
    Local(PathBuf),
}

/// StatsBomb open-data client.
#[derive(Debug, Clone)]
pub struct StatsBombApi {
    client: Client,
    root: DataRoot,
    timeout: Duration,
}

impl Default for StatsBombApi {
    fn default() -> Self {
        Self {
            client: Client::builder()
                .user_agent("wctui/0.1 (terminal world cup explorer)")
                .build()
                .unwrap_or_default(),
            root: DataRoot::Remote(OPEN_DATA_URL.to_string()),
            timeout: Duration::from_secs(30),
        }
    }
}

#[derive(Debug)]
pub enum ApiError {
    Network(reqwest::Error, String),
    Api(reqwest::Error, String),
    Parsing(String, String),
    Io(std::io::Error, String),
    NotFound(String),
    Other(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(e, url) => write!(f, "Network error for {url}: {e}"),
            ApiError::Api(e, url) => write!(f, "API error for {url}: {e}"),
            ApiError::Parsing(e, url) => write!(f, "Parse error for {url}: {e}"),
            ApiError::Io(e, path) => write!(f, "Could not read {path}: {e}"),
            ApiError::NotFound(msg) => write!(f, "Not found: {msg}"),
            ApiError::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl StatsBombApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_root(mut self, root: DataRoot) -> Self {
        self.root = root;
        self
    }

    pub fn with_base_url(self, url: impl Into<String>) -> Self {
        let url: String = url.into();
        self.with_root(DataRoot::Remote(url.trim_end_matches('/').to_string()))
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn root(&self) -> &DataRoot {
        &self.root
    }

    pub async fn fetch_competitions(&self) -> ApiResult<Vec<Competition>> {
        let raw: Vec<SbCompetition> = self.get("competitions.json").await?;
        Ok(raw.into_iter().map(map_competition).collect())
    }

    pub async fn fetch_matches(&self, competition_id: u32, season_id: u32) -> ApiResult<Vec<MatchRow>> {
        let raw: Vec<SbMatch> = self
            .get(&format!("matches/{competition_id}/{season_id}.json"))
            .await?;
        Ok(raw
            .into_iter()
            .map(|m| map_match(m, competition_id, season_id))
            .collect())
    }

    /// The flattened event table of one match, in feed order.
    pub async fn fetch_events(&self, match_id: u64) -> ApiResult<Vec<Event>> {
        Ok(self.fetch_match_tables(match_id).await?.events)
    }

    /// Events plus the related-event, freeze-frame and tactics tables, all
    /// derived from a single download of the event feed.
    pub async fn fetch_match_tables(&self, match_id: u64) -> ApiResult<MatchTables> {
        let raw: Vec<SbEvent> = self.get(&format!("events/{match_id}.json")).await?;
        debug!("parsed {} raw events for match {match_id}", raw.len());
        Ok(parse_match(match_id, raw))
    }

    pub async fn fetch_lineups(&self, match_id: u64) -> ApiResult<Vec<TeamLineup>> {
        let raw: Vec<SbLineupTeam> = self.get(&format!("lineups/{match_id}.json")).await?;
        Ok(raw.into_iter().map(map_lineup).collect())
    }

    async fn get<T: Default + serde::de::DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        match &self.root {
            DataRoot::Remote(base) => self.get_remote(&format!("{base}/{path}")).await,
            DataRoot::Local(dir) => {
                let file = dir.join(path);
                let display = file.display().to_string();
                match tokio::fs::read_to_string(&file).await {
                    Ok(content) => serde_json::from_str(&content)
                        .map_err(|e| ApiError::Parsing(e.to_string(), display)),
                    // Same contract as a 4xx from the remote: nothing published.
                    Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(T::default()),
                    Err(e) => Err(ApiError::Io(e, display)),
                }
            }
        }
    }

    async fn get_remote<T: Default + serde::de::DeserializeOwned>(&self, url: &str) -> ApiResult<T> {
        debug!("GET {url}");
        let response = self
            .client
            .get(url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| ApiError::Network(e, url.to_owned()))?;

        match response.error_for_status() {
            Ok(res) => res
                .json::<T>()
                .await
                .map_err(|e| ApiError::Parsing(e.to_string(), url.to_owned())),
            Err(e) => {
                if e.status().map(|s| s.is_client_error()).unwrap_or(false) {
                    Ok(T::default())
                } else {
                    Err(ApiError::Api(e, url.to_owned()))
                }
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Mapping: StatsBomb wire types → clean domain types
// ---------------------------------------------------------------------------

fn map_competition(c: SbCompetition) -> Competition {
    Competition {
        competition_id: c.competition_id,
        season_id: c.season_id,
        competition_name: c.competition_name,
        season_name: c.season_name,
        country_name: c.country_name,
        competition_gender: c.competition_gender,
    }
}

/// The request's ids win over the embedded ones; older files omit them.
fn map_match(m: SbMatch, competition_id: u32, season_id: u32) -> MatchRow {
    let competition = m.competition.unwrap_or_default();
    let season = m.season.unwrap_or_default();

    MatchRow {
        match_id: m.match_id,
        competition_id,
        competition: competition.competition_name.unwrap_or_default(),
        season_id,
        season: season.season_name.unwrap_or_default(),
        match_date: m.match_date.as_deref().and_then(parse_match_date),
        kick_off: m.kick_off,
        home_team: m.home_team.home_team_name,
        away_team: m.away_team.away_team_name,
        home_score: m.home_score,
        away_score: m.away_score,
        competition_stage: m.competition_stage.and_then(|s| s.name),
        stadium: m.stadium.and_then(|s| s.name),
        referee: m.referee.and_then(|r| r.name),
    }
}

fn parse_match_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

fn map_lineup(team: SbLineupTeam) -> TeamLineup {
    TeamLineup {
        team_id: team.team_id,
        team: team.team_name,
        players: team
            .lineup
            .into_iter()
            .map(|p| LineupPlayer {
                player_id: p.player_id,
                name: p.player_name,
                nickname: p.player_nickname,
                jersey_number: p.jersey_number,
                country: p.country.and_then(|c| c.name),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COMPETITIONS: &str = r#"[
        {"competition_id": 43, "season_id": 106, "country_name": "International",
         "competition_name": "FIFA World Cup", "competition_gender": "male",
         "season_name": "2022", "match_updated": "2024-01-01T00:00:00"},
        {"competition_id": 11, "season_id": 90, "country_name": "Spain",
         "competition_name": "La Liga", "competition_gender": "male",
         "season_name": "2020/2021"}
    ]"#;

    const MATCHES: &str = r#"[
        {"match_id": 3869685, "match_date": "2022-12-18", "kick_off": "17:00:00.000",
         "competition": {"competition_id": 43, "country_name": "International", "competition_name": "FIFA World Cup"},
         "season": {"season_id": 106, "season_name": "2022"},
         "home_team": {"home_team_id": 779, "home_team_name": "Argentina", "home_team_gender": "male"},
         "away_team": {"away_team_id": 771, "away_team_name": "France", "away_team_gender": "male"},
         "home_score": 3, "away_score": 3, "match_status": "available", "match_week": 7,
         "competition_stage": {"id": 26, "name": "Final"},
         "stadium": {"id": 4276, "name": "Lusail Stadium", "country": {"id": 185, "name": "Qatar"}},
         "referee": {"id": 1, "name": "Szymon Marciniak"}}
    ]"#;

    const LINEUPS: &str = r#"[
        {"team_id": 779, "team_name": "Argentina", "lineup": [
            {"player_id": 5503, "player_name": "Lionel Andrés Messi Cuccittini",
             "player_nickname": "Lionel Messi", "jersey_number": 10,
             "country": {"id": 11, "name": "Argentina"}, "cards": [], "positions": []}
        ]},
        {"team_id": 771, "team_name": "France", "lineup": []}
    ]"#;

    #[tokio::test]
    async fn fetch_competitions_maps_rows() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/competitions.json")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(COMPETITIONS)
            .create_async()
            .await;

        let api = StatsBombApi::new().with_base_url(server.url());
        let competitions = api.fetch_competitions().await.expect("competitions should load");

        mock.assert_async().await;
        assert_eq!(competitions.len(), 2);
        assert_eq!(competitions[0].competition_name, "FIFA World Cup");
        assert_eq!(competitions[0].season_id, 106);
        assert_eq!(competitions[1].country_name.as_deref(), Some("Spain"));
    }

    #[tokio::test]
    async fn fetch_matches_maps_nested_names() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/matches/43/106.json")
            .with_status(200)
            .with_body(MATCHES)
            .create_async()
            .await;

        let api = StatsBombApi::new().with_base_url(format!("{}/", server.url()));
        let matches = api.fetch_matches(43, 106).await.expect("matches should load");

        assert_eq!(matches.len(), 1);
        let m = &matches[0];
        assert_eq!(m.match_id, 3869685);
        assert_eq!(m.home_team, "Argentina");
        assert_eq!(m.away_team, "France");
        assert_eq!(m.season, "2022");
        assert_eq!(m.competition, "FIFA World Cup");
        assert_eq!(m.match_date, NaiveDate::from_ymd_opt(2022, 12, 18));
        assert_eq!(m.stadium.as_deref(), Some("Lusail Stadium"));
        assert_eq!(m.competition_stage.as_deref(), Some("Final"));
    }

    #[tokio::test]
    async fn client_error_yields_empty_result() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/lineups/1.json")
            .with_status(404)
            .create_async()
            .await;

        let api = StatsBombApi::new().with_base_url(server.url());
        let lineups = api.fetch_lineups(1).await.expect("404 should map to empty");
        assert!(lineups.is_empty());
    }

    #[tokio::test]
    async fn server_error_is_surfaced() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/events/1.json")
            .with_status(503)
            .create_async()
            .await;

        let api = StatsBombApi::new().with_base_url(server.url());
        let err = api.fetch_events(1).await.expect_err("5xx must fail");
        assert!(matches!(err, ApiError::Api(_, _)), "got {err}");
    }

    #[tokio::test]
    async fn fetch_lineups_maps_players() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/lineups/3869685.json")
            .with_status(200)
            .with_body(LINEUPS)
            .create_async()
            .await;

        let api = StatsBombApi::new().with_base_url(server.url());
        let lineups = api.fetch_lineups(3869685).await.expect("lineups should load");

        assert_eq!(lineups.len(), 2);
        assert_eq!(lineups[0].team, "Argentina");
        assert_eq!(lineups[0].players[0].nickname.as_deref(), Some("Lionel Messi"));
        assert_eq!(lineups[0].players[0].jersey_number, Some(10));
        assert!(lineups[1].players.is_empty());
    }

    #[tokio::test]
    async fn local_root_missing_file_is_empty() {
        let dir = std::env::temp_dir().join("wc-api-missing-root");
        let api = StatsBombApi::new().with_root(DataRoot::Local(dir));
        let competitions = api.fetch_competitions().await.expect("missing file maps to empty");
        assert!(competitions.is_empty());
    }

    #[test]
    fn match_date_parsing_tolerates_garbage() {
        assert_eq!(parse_match_date("2018-07-15"), NaiveDate::from_ymd_opt(2018, 7, 15));
        assert_eq!(parse_match_date("not a date"), None);
    }
}
