use crate::app::MenuItem;
use wc_api::catalog::Catalog;
use wc_api::query::{EventFilter, SHOT, event_types, players};
use wc_api::{Event, MatchRow, MatchTables, TeamLineup};

// ---------------------------------------------------------------------------
// Catalog / match picker state
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct CatalogState {
    pub catalog: Option<Catalog>,
    pub selected_season: usize,
    pub selected_match: usize,
}

impl CatalogState {
    pub fn load(&mut self, catalog: Catalog) {
        self.catalog = Some(catalog);
        self.selected_season = 0;
        self.selected_match = 0;
    }

    pub fn seasons(&self) -> Vec<&str> {
        self.catalog.as_ref().map(|c| c.seasons()).unwrap_or_default()
    }

    pub fn current_season(&self) -> Option<&str> {
        self.seasons().get(self.selected_season).copied()
    }

    pub fn season_matches(&self) -> Vec<&MatchRow> {
        match (self.catalog.as_ref(), self.current_season()) {
            (Some(catalog), Some(season)) => catalog.matches_in_season(season).collect(),
            _ => Vec::new(),
        }
    }

    pub fn selected_match(&self) -> Option<&MatchRow> {
        self.season_matches().get(self.selected_match).copied()
    }

    pub fn next_season(&mut self) {
        let count = self.seasons().len();
        if count > 0 {
            self.selected_season = (self.selected_season + 1) % count;
            self.selected_match = 0;
        }
    }

    pub fn prev_season(&mut self) {
        let count = self.seasons().len();
        if count > 0 {
            self.selected_season = (self.selected_season + count - 1) % count;
            self.selected_match = 0;
        }
    }

    pub fn match_down(&mut self) {
        let max = self.season_matches().len().saturating_sub(1);
        if self.selected_match < max {
            self.selected_match += 1;
        }
    }

    pub fn match_up(&mut self) {
        self.selected_match = self.selected_match.saturating_sub(1);
    }
}

// ---------------------------------------------------------------------------
// Loaded match
// ---------------------------------------------------------------------------

/// Everything fetched for one match. Read-only once loaded; every view is
/// derived from it on demand.
#[derive(Debug, Clone)]
pub struct LoadedMatch {
    pub row: MatchRow,
    pub tables: MatchTables,
    pub lineups: Vec<TeamLineup>,
    pub event_types: Vec<String>,
}

impl LoadedMatch {
    pub fn new(row: MatchRow, tables: MatchTables, lineups: Vec<TeamLineup>) -> Self {
        let event_types = event_types(&tables.events);
        Self { row, tables, lineups, event_types }
    }

    pub fn events(&self) -> &[Event] {
        &self.tables.events
    }

    pub fn team(&self, side: Side) -> &str {
        match side {
            Side::Home => &self.row.home_team,
            Side::Away => &self.row.away_team,
        }
    }

    pub fn squad_size(&self, team: &str) -> Option<usize> {
        self.lineups
            .iter()
            .find(|l| l.team == team)
            .map(|l| l.players.len())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Side {
    #[default]
    Home,
    Away,
}

impl Side {
    pub fn toggle(self) -> Self {
        match self {
            Side::Home => Side::Away,
            Side::Away => Side::Home,
        }
    }
}

// ---------------------------------------------------------------------------
// Team + player selection (pass map, shot map)
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct PlayerPicker {
    pub side: Side,
    pub index: usize,
    /// Only list players with at least one event of this type.
    pub only_kind: Option<&'static str>,
}

impl PlayerPicker {
    pub fn shooters() -> Self {
        Self { only_kind: Some(SHOT), ..Self::default() }
    }

    pub fn players(&self, m: &LoadedMatch) -> Vec<String> {
        let mut f = EventFilter::new().team(m.team(self.side));
        f.kind = self.only_kind;
        players(m.events(), &f)
    }

    /// `(team, player)`; `None` when the team has no selectable player.
    pub fn selection(&self, m: &LoadedMatch) -> Option<(String, String)> {
        let list = self.players(m);
        let player = list.get(self.index).or_else(|| list.first())?;
        Some((m.team(self.side).to_string(), player.clone()))
    }

    pub fn toggle_side(&mut self) {
        self.side = self.side.toggle();
        self.index = 0;
    }

    pub fn next(&mut self, m: &LoadedMatch) {
        let max = self.players(m).len().saturating_sub(1);
        if self.index < max {
            self.index += 1;
        }
    }

    pub fn prev(&mut self) {
        self.index = self.index.saturating_sub(1);
    }

    pub fn reset(&mut self) {
        self.side = Side::Home;
        self.index = 0;
    }
}

// ---------------------------------------------------------------------------
// Event browser
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct EventBrowserState {
    pub type_index: usize,
    pub scroll_offset: u16,
}

impl EventBrowserState {
    pub fn selected_type<'m>(&self, m: &'m LoadedMatch) -> Option<&'m str> {
        m.event_types.get(self.type_index).map(String::as_str)
    }

    pub fn next_type(&mut self, count: usize) {
        if count > 0 {
            self.type_index = (self.type_index + 1) % count;
            self.scroll_offset = 0;
        }
    }

    pub fn prev_type(&mut self, count: usize) {
        if count > 0 {
            self.type_index = (self.type_index + count - 1) % count;
            self.scroll_offset = 0;
        }
    }
}

// ---------------------------------------------------------------------------
// Player comparison
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct CompareState {
    pub home_index: usize,
    pub away_index: usize,
}

impl CompareState {
    pub fn home_players(m: &LoadedMatch) -> Vec<String> {
        players(m.events(), &EventFilter::new().team(m.team(Side::Home)))
    }

    pub fn away_players(m: &LoadedMatch) -> Vec<String> {
        players(m.events(), &EventFilter::new().team(m.team(Side::Away)))
    }

    /// Selected home and away player, each as `(team, player)`.
    pub fn selection(&self, m: &LoadedMatch) -> Option<((String, String), (String, String))> {
        let pick = |list: Vec<String>, index: usize| list.get(index).or_else(|| list.first()).cloned();
        let home = pick(Self::home_players(m), self.home_index)?;
        let away = pick(Self::away_players(m), self.away_index)?;
        Some((
            (m.team(Side::Home).to_string(), home),
            (m.team(Side::Away).to_string(), away),
        ))
    }

    pub fn move_home(&mut self, m: &LoadedMatch, down: bool) {
        let len = Self::home_players(m).len();
        self.home_index = step(self.home_index, len, down);
    }

    pub fn move_away(&mut self, m: &LoadedMatch, down: bool) {
        let len = Self::away_players(m).len();
        self.away_index = step(self.away_index, len, down);
    }
}

fn step(index: usize, len: usize, down: bool) -> usize {
    if down {
        (index + 1).min(len.saturating_sub(1))
    } else {
        index.saturating_sub(1)
    }
}

// ---------------------------------------------------------------------------
// Root app state
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct AppState {
    pub active_tab: MenuItem,
    pub previous_tab: MenuItem,
    pub show_logs: bool,
    pub last_error: Option<String>,
    /// One-line feedback for the last user action (e.g. an export).
    pub status: Option<String>,
    pub catalog: CatalogState,
    pub current: Option<LoadedMatch>,
    pub events_view: EventBrowserState,
    pub pass_view: PlayerPicker,
    pub shot_view: PlayerPicker,
    pub compare: CompareState,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            shot_view: PlayerPicker::shooters(),
            ..Self::default()
        }
    }
}
