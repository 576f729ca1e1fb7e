use crate::app::{App, MenuItem};
use crate::state::messages::NetworkRequest;
use crossterm::event::KeyCode::Char;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::sync::{Mutex, mpsc};

pub async fn handle_key_bindings(
    key_event: KeyEvent,
    app: &Arc<Mutex<App>>,
    network_requests: &mpsc::Sender<NetworkRequest>,
) {
    let mut guard = app.lock().await;

    match (guard.state.active_tab, key_event.code, key_event.modifiers) {
        // Quit
        (_, Char('q'), _) | (_, Char('c'), KeyModifiers::CONTROL) => {
            crate::cleanup_terminal();
            std::process::exit(0);
        }

        // Tab switching
        (_, Char('1'), _) => guard.update_tab(MenuItem::Matches),
        (_, Char('2'), _) => guard.update_tab(MenuItem::Info),
        (_, Char('3'), _) => guard.update_tab(MenuItem::Events),
        (_, Char('4'), _) => guard.update_tab(MenuItem::PassMap),
        (_, Char('5'), _) => guard.update_tab(MenuItem::ShotMap),
        (_, Char('6'), _) => guard.update_tab(MenuItem::Compare),
        (_, Char('?'), _) => guard.update_tab(MenuItem::Help),
        (MenuItem::Help, KeyCode::Esc, _) => guard.exit_help(),

        // Load the highlighted match
        (MenuItem::Matches, KeyCode::Enter, _) => {
            if let Some(match_id) = guard.select_match() {
                drop(guard);
                let _ = network_requests.send(NetworkRequest::LoadMatch { match_id }).await;
                return;
            }
        }

        // Away-side player on Compare
        (MenuItem::Compare, Char('J'), _) => guard.compare_away(true),
        (MenuItem::Compare, Char('K'), _) => guard.compare_away(false),

        // Navigation, interpreted per tab
        (_, Char('j') | KeyCode::Down, _) => guard.move_down(),
        (_, Char('k') | KeyCode::Up, _) => guard.move_up(),
        (_, Char('l') | KeyCode::Right, _) => guard.move_right(),
        (_, Char('h') | KeyCode::Left, _) => guard.move_left(),
        (MenuItem::Info | MenuItem::Events, KeyCode::Esc, _) => guard.update_tab(MenuItem::Matches),

        // Global
        (_, Char('e'), _) => guard.export_selected_player(),
        (_, Char('f'), _) => guard.toggle_full_screen(),
        (_, Char('"'), _) => guard.toggle_show_logs(),

        _ => {}
    }
}
