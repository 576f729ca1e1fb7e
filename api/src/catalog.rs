use crate::client::{ApiResult, StatsBombApi};
use crate::{Competition, MatchRow};
use log::{debug, warn};
use std::collections::HashSet;
use tokio::sync::OnceCell;

pub const WORLD_CUP: &str = "FIFA World Cup";

/// Every World Cup match the source publishes, across all seasons.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    matches: Vec<MatchRow>,
}

impl Catalog {
    /// Concatenate per-season match lists in the order given. A match id
    /// seen twice keeps its first row.
    pub fn from_seasons(seasons: Vec<Vec<MatchRow>>) -> Self {
        let mut seen = HashSet::new();
        let mut matches = Vec::new();
        for m in seasons.into_iter().flatten() {
            if seen.insert(m.match_id) {
                matches.push(m);
            } else {
                warn!("duplicate match id {} in catalog, keeping first", m.match_id);
            }
        }
        Self { matches }
    }

    pub fn matches(&self) -> &[MatchRow] {
        &self.matches
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Distinct season names in catalog order.
    pub fn seasons(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for m in &self.matches {
            if !out.contains(&m.season.as_str()) {
                out.push(&m.season);
            }
        }
        out
    }

    pub fn matches_in_season<'a>(&'a self, season: &'a str) -> impl Iterator<Item = &'a MatchRow> {
        self.matches.iter().filter(move |m| m.season == season)
    }

    pub fn find(&self, match_id: u64) -> Option<&MatchRow> {
        self.matches.iter().find(|m| m.match_id == match_id)
    }
}

/// Seasons of the named competition, in source order.
pub fn competition_seasons<'a>(competitions: &'a [Competition], name: &str) -> Vec<&'a Competition> {
    competitions
        .iter()
        .filter(|c| c.competition_name == name)
        .collect()
}

/// Resolve the World Cup catalog. An absent competition yields an empty
/// catalog; fetch failures propagate.
pub async fn resolve_catalog(api: &StatsBombApi) -> ApiResult<Catalog> {
    let competitions = api.fetch_competitions().await?;
    let seasons = competition_seasons(&competitions, WORLD_CUP);
    if seasons.is_empty() {
        warn!("{WORLD_CUP} not found among {} competitions", competitions.len());
        return Ok(Catalog::default());
    }

    let mut per_season = Vec::with_capacity(seasons.len());
    for season in seasons {
        debug!("loading {WORLD_CUP} {} matches", season.season_name);
        let mut rows = api.fetch_matches(season.competition_id, season.season_id).await?;
        for row in rows.iter_mut() {
            fill_names(row, season);
        }
        per_season.push(rows);
    }
    Ok(Catalog::from_seasons(per_season))
}

/// Older match files omit the embedded competition and season; fall back to
/// the names listed in `competitions.json`.
fn fill_names(row: &mut MatchRow, season: &Competition) {
    if row.season.is_empty() {
        row.season = season.season_name.clone();
    }
    if row.competition.is_empty() {
        row.competition = season.competition_name.clone();
    }
}

/// Process-lifetime memo of the catalog: resolved on first use, then reused.
/// A failed resolve leaves the cache empty so the next call retries.
#[derive(Debug, Default)]
pub struct CatalogCache {
    cell: OnceCell<Catalog>,
}

impl CatalogCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get_or_resolve(&self, api: &StatsBombApi) -> ApiResult<&Catalog> {
        self.cell.get_or_try_init(|| resolve_catalog(api)).await
    }

    pub fn get(&self) -> Option<&Catalog> {
        self.cell.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(match_id: u64, season: &str, home: &str, away: &str) -> MatchRow {
        MatchRow {
            match_id,
            season: season.to_string(),
            home_team: home.to_string(),
            away_team: away.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn from_seasons_concatenates_and_dedupes() {
        let catalog = Catalog::from_seasons(vec![
            vec![row(1, "2022", "Argentina", "France"), row(2, "2022", "Croatia", "Morocco")],
            vec![row(3, "2018", "France", "Croatia"), row(1, "2018", "dup", "dup")],
        ]);

        let ids: Vec<u64> = catalog.matches().iter().map(|m| m.match_id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(catalog.find(1).map(|m| m.home_team.as_str()), Some("Argentina"));
        assert_eq!(catalog.seasons(), vec!["2022", "2018"]);
        assert_eq!(catalog.matches_in_season("2018").count(), 1);
    }

    #[test]
    fn competition_seasons_filters_by_name() {
        let comps = vec![
            Competition { competition_id: 43, season_id: 106, competition_name: WORLD_CUP.into(), ..Default::default() },
            Competition { competition_id: 11, season_id: 90, competition_name: "La Liga".into(), ..Default::default() },
            Competition { competition_id: 43, season_id: 3, competition_name: WORLD_CUP.into(), ..Default::default() },
        ];
        let seasons: Vec<u32> = competition_seasons(&comps, WORLD_CUP).iter().map(|c| c.season_id).collect();
        assert_eq!(seasons, vec![106, 3]);
        assert!(competition_seasons(&comps, "Copa America").is_empty());
    }

    const COMPETITIONS: &str = r#"[
        {"competition_id": 43, "season_id": 106, "competition_name": "FIFA World Cup", "season_name": "2022"},
        {"competition_id": 43, "season_id": 3, "competition_name": "FIFA World Cup", "season_name": "2018"}
    ]"#;

    fn matches_json(ids: &[u64], season: &str) -> String {
        let rows: Vec<String> = ids
            .iter()
            .map(|id| {
                format!(
                    r#"{{"match_id": {id}, "match_date": "2022-12-18",
                        "season": {{"season_id": 1, "season_name": "{season}"}},
                        "home_team": {{"home_team_name": "Home {id}"}},
                        "away_team": {{"away_team_name": "Away {id}"}}}}"#
                )
            })
            .collect();
        format!("[{}]", rows.join(","))
    }

    #[tokio::test]
    async fn resolve_merges_all_seasons() {
        let mut server = mockito::Server::new_async().await;
        server.mock("GET", "/competitions.json").with_body(COMPETITIONS).create_async().await;
        server
            .mock("GET", "/matches/43/106.json")
            .with_body(matches_json(&[10, 11], "2022"))
            .create_async()
            .await;
        server
            .mock("GET", "/matches/43/3.json")
            .with_body(matches_json(&[20], "2018"))
            .create_async()
            .await;

        let api = StatsBombApi::new().with_base_url(server.url());
        let catalog = resolve_catalog(&api).await.expect("catalog should resolve");

        let ids: Vec<u64> = catalog.matches().iter().map(|m| m.match_id).collect();
        assert_eq!(ids, vec![10, 11, 20]);
        assert_eq!(catalog.seasons(), vec!["2022", "2018"]);
    }

    #[tokio::test]
    async fn resolve_fills_names_missing_from_match_files() {
        let mut server = mockito::Server::new_async().await;
        server.mock("GET", "/competitions.json").with_body(COMPETITIONS).create_async().await;
        server
            .mock("GET", "/matches/43/106.json")
            .with_body(matches_json(&[10], "2022"))
            .create_async()
            .await;
        server
            .mock("GET", "/matches/43/3.json")
            .with_body(
                r#"[{"match_id": 20, "match_date": "2018-07-15",
                     "home_team": {"home_team_name": "France"},
                     "away_team": {"away_team_name": "Croatia"}}]"#,
            )
            .create_async()
            .await;

        let api = StatsBombApi::new().with_base_url(server.url());
        let catalog = resolve_catalog(&api).await.expect("catalog should resolve");

        let old = catalog.find(20).expect("2018 match is listed");
        assert_eq!(old.season, "2018");
        assert_eq!(old.competition, WORLD_CUP);
        assert_eq!(catalog.seasons(), vec!["2022", "2018"]);
        assert_eq!(catalog.matches_in_season("2018").count(), 1);
    }

    #[tokio::test]
    async fn resolve_without_world_cup_is_empty() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/competitions.json")
            .with_body(r#"[{"competition_id": 11, "season_id": 90, "competition_name": "La Liga", "season_name": "2020/2021"}]"#)
            .create_async()
            .await;

        let api = StatsBombApi::new().with_base_url(server.url());
        let catalog = resolve_catalog(&api).await.expect("absent competition is not an error");
        assert!(catalog.is_empty());
    }

    #[tokio::test]
    async fn cache_resolves_once() {
        let mut server = mockito::Server::new_async().await;
        let competitions = server
            .mock("GET", "/competitions.json")
            .with_body(COMPETITIONS)
            .expect(1)
            .create_async()
            .await;
        server.mock("GET", "/matches/43/106.json").with_body(matches_json(&[10], "2022")).create_async().await;
        server.mock("GET", "/matches/43/3.json").with_body("[]").create_async().await;

        let api = StatsBombApi::new().with_base_url(server.url());
        let cache = CatalogCache::new();
        assert!(cache.get().is_none());

        let first = cache.get_or_resolve(&api).await.expect("first resolve").clone();
        let second = cache.get_or_resolve(&api).await.expect("cached resolve");
        assert_eq!(&first, second);
        assert_eq!(second.len(), 1);
        competitions.assert_async().await;
    }
}
