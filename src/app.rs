use crate::state::app_settings::AppSettings;
use crate::state::app_state::{AppState, LoadedMatch};
use chrono::Local;
use log::info;
use std::path::PathBuf;
use wc_api::catalog::Catalog;
use wc_api::export::{ExportError, export_filename, to_csv};
use wc_api::query::{EventFilter, filter};

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum MenuItem {
    #[default]
    Matches,
    Info,
    Events,
    PassMap,
    ShotMap,
    Compare,
    Help,
}

pub struct App {
    pub settings: AppSettings,
    pub state: AppState,
}

impl App {
    pub fn new() -> Self {
        let app = Self::with_settings(AppSettings::load());

        if let Some(level) = app.settings.log_level {
            log::set_max_level(level);
            tui_logger::set_default_level(level);
        }

        app
    }

    pub fn with_settings(settings: AppSettings) -> Self {
        Self { state: AppState::new(), settings }
    }

    // -----------------------------------------------------------------------
    // Network response handlers
    // -----------------------------------------------------------------------

    pub fn on_catalog_loaded(&mut self, catalog: Catalog) {
        self.state.last_error = None;
        info!("catalog loaded: {} matches", catalog.len());
        self.state.catalog.load(catalog);
    }

    pub fn on_match_loaded(&mut self, loaded: LoadedMatch) {
        self.state.last_error = None;
        info!("match {} loaded: {} events", loaded.row.match_id, loaded.events().len());
        self.state.events_view = Default::default();
        self.state.pass_view.reset();
        self.state.shot_view.reset();
        self.state.compare = Default::default();
        self.state.current = Some(loaded);
    }

    pub fn on_error(&mut self, message: String) {
        self.state.last_error = Some(message);
    }

    // -----------------------------------------------------------------------
    // Tab management
    // -----------------------------------------------------------------------

    pub fn update_tab(&mut self, next: MenuItem) {
        if self.state.active_tab == next {
            return;
        }
        self.state.previous_tab = self.state.active_tab;
        self.state.active_tab = next;
        self.state.status = None;
    }

    pub fn exit_help(&mut self) {
        if self.state.active_tab == MenuItem::Help {
            self.state.active_tab = self.state.previous_tab;
        }
    }

    pub fn toggle_show_logs(&mut self) {
        self.state.show_logs = !self.state.show_logs;
    }

    pub fn toggle_full_screen(&mut self) {
        self.settings.full_screen = !self.settings.full_screen;
    }

    // -----------------------------------------------------------------------
    // Match picker
    // -----------------------------------------------------------------------

    /// Match id under the cursor, if it differs from the one already loaded.
    /// Switches to the Info tab as a side-effect.
    pub fn select_match(&mut self) -> Option<u64> {
        let match_id = self.state.catalog.selected_match()?.match_id;
        self.update_tab(MenuItem::Info);
        let already_loaded = self
            .state
            .current
            .as_ref()
            .is_some_and(|m| m.row.match_id == match_id);
        (!already_loaded).then_some(match_id)
    }

    // -----------------------------------------------------------------------
    // Per-tab navigation
    // -----------------------------------------------------------------------

    pub fn move_down(&mut self) {
        let Some(m) = self.state.current.as_ref() else {
            if self.state.active_tab == MenuItem::Matches {
                self.state.catalog.match_down();
            }
            return;
        };
        match self.state.active_tab {
            MenuItem::Matches => self.state.catalog.match_down(),
            MenuItem::Events => {
                self.state.events_view.scroll_offset = self.state.events_view.scroll_offset.saturating_add(1);
            }
            MenuItem::PassMap => self.state.pass_view.next(m),
            MenuItem::ShotMap => self.state.shot_view.next(m),
            MenuItem::Compare => self.state.compare.move_home(m, true),
            _ => {}
        }
    }

    pub fn move_up(&mut self) {
        match self.state.active_tab {
            MenuItem::Matches => self.state.catalog.match_up(),
            MenuItem::Events => {
                self.state.events_view.scroll_offset = self.state.events_view.scroll_offset.saturating_sub(1);
            }
            MenuItem::PassMap => self.state.pass_view.prev(),
            MenuItem::ShotMap => self.state.shot_view.prev(),
            MenuItem::Compare => {
                if let Some(m) = self.state.current.as_ref() {
                    self.state.compare.move_home(m, false);
                }
            }
            _ => {}
        }
    }

    pub fn move_right(&mut self) {
        let type_count = self.state.current.as_ref().map_or(0, |m| m.event_types.len());
        match self.state.active_tab {
            MenuItem::Matches => self.state.catalog.next_season(),
            MenuItem::Events => self.state.events_view.next_type(type_count),
            MenuItem::PassMap => self.state.pass_view.toggle_side(),
            MenuItem::ShotMap => self.state.shot_view.toggle_side(),
            _ => {}
        }
    }

    pub fn move_left(&mut self) {
        let type_count = self.state.current.as_ref().map_or(0, |m| m.event_types.len());
        match self.state.active_tab {
            MenuItem::Matches => self.state.catalog.prev_season(),
            MenuItem::Events => self.state.events_view.prev_type(type_count),
            MenuItem::PassMap => self.state.pass_view.toggle_side(),
            MenuItem::ShotMap => self.state.shot_view.toggle_side(),
            _ => {}
        }
    }

    pub fn compare_away(&mut self, down: bool) {
        if let Some(m) = self.state.current.as_ref() {
            self.state.compare.move_away(m, down);
        }
    }

    // -----------------------------------------------------------------------
    // CSV export
    // -----------------------------------------------------------------------

    /// Player whose events `e` would export on the active tab.
    pub fn export_target(&self) -> Option<(String, String)> {
        let m = self.state.current.as_ref()?;
        match self.state.active_tab {
            MenuItem::PassMap => self.state.pass_view.selection(m),
            MenuItem::ShotMap => self.state.shot_view.selection(m),
            MenuItem::Compare => self.state.compare.selection(m).map(|(home, _)| home),
            _ => None,
        }
    }

    pub fn export_selected_player(&mut self) {
        let Some((team, player)) = self.export_target() else {
            self.state.status = Some("Select a player on Pass Map, Shot Map or Compare to export".to_string());
            return;
        };
        let stamp = Local::now().format("%H:%M:%S");
        match self.write_export(&team, &player) {
            Ok((path, rows)) => {
                info!("exported {rows} events for {player} to {}", path.display());
                self.state.status = Some(format!("[{stamp}] Wrote {rows} rows to {}", path.display()));
            }
            Err(e) => {
                log::error!("export for {player} failed: {e}");
                self.state.status = Some(format!("[{stamp}] {e}"));
            }
        }
    }

    fn write_export(&self, team: &str, player: &str) -> Result<(PathBuf, usize), ExportError> {
        let events = self.state.current.as_ref().map_or(&[][..], |m| m.events());
        let selected = filter(events, &EventFilter::new().team(team).player(player));
        let bytes = to_csv(&selected)?;

        std::fs::create_dir_all(&self.settings.export_dir).map_err(ExportError::Io)?;
        let path = self.settings.export_dir.join(export_filename(player));
        std::fs::write(&path, bytes).map_err(ExportError::Io)?;
        Ok((path, selected.len()))
    }
}
