use tui::backend::Backend;
use tui::layout::{Alignment, Constraint, Layout, Rect};
use tui::style::{Color, Modifier, Style};
use tui::text::{Line, Span};
use tui::widgets::{Block, BorderType, Borders, Paragraph, Row, Table, Tabs, Wrap};
use tui::{Frame, Terminal};
use tui_logger::TuiLoggerWidget;

use crate::app::{App, MenuItem};
use crate::components::pitch::{
    FormationWidget, PassMapWidget, ShotMapWidget, hex_color, pass_color, shot_style,
};
use crate::components::radar::{AWAY_COLOR, HOME_COLOR, RadarChart};
use crate::state::app_state::{CompareState, LoadedMatch, PlayerPicker, Side};
use crate::state::network::{ERROR_CHAR, LoadingState};
use crate::ui::layout::LayoutAreas;
use wc_api::colors::team_colors;
use wc_api::compare::{CATEGORIES, compare};
use wc_api::formation::starting_xi;
use wc_api::maps::{pass_legend, pass_map, shot_legend, shot_map};
use wc_api::query::EventTable;

static TABS: &[&str; 6] = &["Matches", "Info", "Events", "Pass Map", "Shot Map", "Compare"];

const MAX_COLUMN_WIDTH: u16 = 28;
const SIDE_PANEL_WIDTH: u16 = 30;

pub fn draw<B>(terminal: &mut Terminal<B>, app: &mut App, loading: LoadingState)
where
    B: Backend,
{
    let current_size = terminal.size().unwrap_or_default();
    if current_size.width <= 10 || current_size.height <= 10 {
        return;
    }

    let result = terminal.draw(|f| {
        let layout = LayoutAreas::new(f.area(), app.settings.full_screen, app.state.show_logs);

        if !app.settings.full_screen {
            draw_tabs(f, layout.tab_bar, app);
        }

        match app.state.active_tab {
            MenuItem::Matches => draw_matches(f, layout.main, app),
            MenuItem::Info => with_match(f, layout.main, app, " Match Info ", draw_info),
            MenuItem::Events => with_match(f, layout.main, app, " Events ", draw_events),
            MenuItem::PassMap => with_match(f, layout.main, app, " Pass Map ", draw_pass_map),
            MenuItem::ShotMap => with_match(f, layout.main, app, " Shot Map ", draw_shot_map),
            MenuItem::Compare => with_match(f, layout.main, app, " Compare ", draw_compare),
            MenuItem::Help => draw_help(f, layout.main),
        }

        draw_status(f, layout.status, app);
        if let Some(area) = layout.logs {
            draw_logs(f, area);
        }
        draw_loading_spinner(f, f.area(), app, loading);
    });

    if let Err(e) = result {
        log::error!("draw failed: {e}");
    }
}

pub fn default_border<'a>(color: Color) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(color))
}

fn selected_style() -> Style {
    Style::default().fg(Color::Black).bg(Color::Yellow)
}

fn dim_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

fn draw_tabs(f: &mut Frame, tab_bar: [Rect; 2], app: &App) {
    let style = Style::default().fg(Color::White);
    let border_type = BorderType::Rounded;

    let tab_index = match app.state.active_tab {
        MenuItem::Matches => 0,
        MenuItem::Info => 1,
        MenuItem::Events => 2,
        MenuItem::PassMap => 3,
        MenuItem::ShotMap => 4,
        MenuItem::Compare => 5,
        MenuItem::Help => 0,
    };

    let titles: Vec<Line> = TABS.iter().map(|t| Line::from(*t)).collect();
    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::LEFT | Borders::BOTTOM | Borders::TOP)
                .border_type(border_type),
        )
        .highlight_style(Style::default().add_modifier(Modifier::UNDERLINED))
        .select(tab_index)
        .style(style);
    f.render_widget(tabs, tab_bar[0]);

    let help = Paragraph::new("Help: ? ")
        .alignment(Alignment::Right)
        .block(
            Block::default()
                .borders(Borders::RIGHT | Borders::BOTTOM | Borders::TOP)
                .border_type(border_type),
        )
        .style(style);
    f.render_widget(help, tab_bar[1]);
}

/// Frame a per-match view, or explain why there is nothing to show yet.
fn with_match(f: &mut Frame, area: Rect, app: &App, title: &str, view: fn(&mut Frame, Rect, &App, &LoadedMatch)) {
    let block = default_border(Color::White).title(title.to_string());
    let inner = block.inner(area);
    f.render_widget(block, area);

    match app.state.current.as_ref() {
        Some(m) => view(f, inner, app, m),
        None => {
            let msg = if let Some(err) = app.state.last_error.as_deref() {
                format!("Load failed:\n{err}")
            } else {
                "Pick a match on the Matches tab (1) and press Enter".to_string()
            };
            draw_placeholder(f, inner, &msg);
        }
    }
}

// ---------------------------------------------------------------------------
// Matches
// ---------------------------------------------------------------------------

fn draw_matches(f: &mut Frame, area: Rect, app: &App) {
    let block = default_border(Color::White).title(" FIFA World Cup ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let catalog = &app.state.catalog;
    if catalog.catalog.is_none() {
        let msg = match app.state.last_error.as_deref() {
            Some(err) => format!("Catalog load failed:\n{err}"),
            None => "Loading World Cup matches...".to_string(),
        };
        draw_placeholder(f, inner, &msg);
        return;
    }

    let seasons = catalog.seasons();
    if seasons.is_empty() {
        draw_placeholder(f, inner, "No World Cup matches published");
        return;
    }

    let [season_area, list_area] =
        Layout::vertical([Constraint::Length(2), Constraint::Fill(1)]).areas(inner);

    let mut spans = vec![Span::styled("Season (h/l): ", dim_style())];
    for (i, season) in seasons.iter().enumerate() {
        let style = if i == catalog.selected_season {
            selected_style()
        } else {
            Style::default()
        };
        spans.push(Span::styled(format!(" {season} "), style));
        spans.push(Span::raw(" "));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), season_area);

    let matches = catalog.season_matches();
    let visible = list_area.height as usize;
    let start = catalog.selected_match.saturating_sub(visible.saturating_sub(1));
    let lines: Vec<Line> = matches
        .iter()
        .enumerate()
        .skip(start)
        .take(visible)
        .map(|(i, m)| {
            let date = m.match_date.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default();
            let stage = m.competition_stage.as_deref().unwrap_or("");
            let text = format!("{date:<10}  {:<18}  {}", truncate(stage, 18), m.result_line());
            let style = if i == catalog.selected_match {
                selected_style()
            } else {
                Style::default()
            };
            Line::from(Span::styled(text, style))
        })
        .collect();
    f.render_widget(Paragraph::new(lines), list_area);
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max.saturating_sub(1)).collect();
    out.push('…');
    out
}

// ---------------------------------------------------------------------------
// Info + Starting XI
// ---------------------------------------------------------------------------

fn draw_info(f: &mut Frame, area: Rect, _app: &App, m: &LoadedMatch) {
    let [header_area, pitch_area] =
        Layout::vertical([Constraint::Length(8), Constraint::Fill(1)]).areas(area);

    f.render_widget(Paragraph::new(info_lines(m)), header_area);

    let halves: [Rect; 2] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(pitch_area);
    for (side, half) in [Side::Home, Side::Away].into_iter().zip(halves) {
        let team = m.team(side);
        match starting_xi(m.events(), &m.tables.tactics, team) {
            Some(xi) => {
                let colors = team_colors(team);
                let title = format!(" {team} ({}) ", xi.formation);
                let block = default_border(hex_color(colors.primary)).title(title);
                f.render_widget(FormationWidget { xi: &xi, colors, block: Some(block) }, half);
            }
            None => {
                let block = default_border(Color::DarkGray).title(format!(" {team} "));
                let inner = block.inner(half);
                f.render_widget(block, half);
                draw_placeholder(f, inner, "No Starting XI recorded");
            }
        }
    }
}

fn info_lines(m: &LoadedMatch) -> Vec<Line<'static>> {
    let row = &m.row;
    let field = |label: &str, value: Option<&str>| {
        Line::from(vec![
            Span::styled(format!("{label:<12}"), dim_style()),
            Span::raw(value.unwrap_or("-").to_string()),
        ])
    };
    let date = row.match_date.map(|d| d.format("%d %b %Y").to_string());
    let squads = format!(
        "{} {} / {} {}",
        row.home_team,
        m.squad_size(&row.home_team).map_or("-".to_string(), |n| n.to_string()),
        row.away_team,
        m.squad_size(&row.away_team).map_or("-".to_string(), |n| n.to_string()),
    );
    let competition = (!row.competition.is_empty()).then_some(row.competition.as_str());
    vec![
        Line::from(Span::styled(row.result_line(), Style::default().add_modifier(Modifier::BOLD))),
        field("Competition", competition),
        field("Stage", row.competition_stage.as_deref()),
        field("Date", date.as_deref()),
        field("Kick-off", row.kick_off.as_deref()),
        field("Stadium", row.stadium.as_deref()),
        field("Referee", row.referee.as_deref()),
        field("Squads", Some(squads.as_str())),
    ]
}

// ---------------------------------------------------------------------------
// Event browser
// ---------------------------------------------------------------------------

fn draw_events(f: &mut Frame, area: Rect, app: &App, m: &LoadedMatch) {
    let view = &app.state.events_view;
    let Some(kind) = view.selected_type(m) else {
        draw_placeholder(f, area, "No events recorded for this match");
        return;
    };

    let [picker_area, table_area] =
        Layout::vertical([Constraint::Length(2), Constraint::Fill(1)]).areas(area);

    let table = EventTable::for_type(m.events(), kind);
    f.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("Type (h/l): ", dim_style()),
            Span::styled(format!(" {kind} "), selected_style()),
            Span::styled(
                format!("  {}/{}  {} rows", view.type_index + 1, m.event_types.len(), table.rows.len()),
                dim_style(),
            ),
        ])),
        picker_area,
    );

    let widths: Vec<Constraint> = table
        .columns
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let widest = table
                .rows
                .iter()
                .map(|r| r[i].chars().count())
                .max()
                .unwrap_or(0)
                .max(name.len());
            Constraint::Length((widest as u16).min(MAX_COLUMN_WIDTH))
        })
        .collect();

    let header = Row::new(table.columns.iter().copied())
        .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));
    let offset = (view.scroll_offset as usize).min(table.rows.len().saturating_sub(1));
    let rows = table.rows.iter().skip(offset).map(|r| Row::new(r.iter().map(String::as_str)));

    f.render_widget(Table::new(rows, widths).header(header).column_spacing(2), table_area);
}

// ---------------------------------------------------------------------------
// Pass map / shot map
// ---------------------------------------------------------------------------

/// Team toggle and player list shared by the two map tabs.
fn draw_player_picker(f: &mut Frame, area: Rect, m: &LoadedMatch, picker: &PlayerPicker, empty: &str) {
    let mut lines = vec![Line::from(vec![
        Span::styled("Team (h/l)", dim_style()),
    ])];
    for side in [Side::Home, Side::Away] {
        let style = if side == picker.side { selected_style() } else { Style::default() };
        lines.push(Line::from(Span::styled(format!(" {} ", m.team(side)), style)));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Player (j/k)", dim_style())));

    let players = picker.players(m);
    if players.is_empty() {
        lines.push(Line::from(Span::styled(empty.to_string(), dim_style())));
    }
    let selected = picker.index.min(players.len().saturating_sub(1));
    let visible = (area.height as usize).saturating_sub(lines.len());
    let start = selected.saturating_sub(visible.saturating_sub(1));
    for (i, p) in players.iter().enumerate().skip(start).take(visible) {
        let style = if i == selected { selected_style() } else { Style::default() };
        lines.push(Line::from(Span::styled(truncate(p, area.width as usize), style)));
    }

    f.render_widget(Paragraph::new(lines), area);
}

fn map_split(area: Rect) -> [Rect; 3] {
    let [side, right] =
        Layout::horizontal([Constraint::Length(SIDE_PANEL_WIDTH), Constraint::Fill(1)]).areas(area);
    let [pitch, legend] = Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(right);
    [side, pitch, legend]
}

fn draw_pass_map(f: &mut Frame, area: Rect, app: &App, m: &LoadedMatch) {
    let [side, pitch, legend] = map_split(area);
    let picker = &app.state.pass_view;
    draw_player_picker(f, side, m, picker, "no players");

    let Some((team, player)) = picker.selection(m) else {
        draw_placeholder(f, pitch, "No player to show");
        return;
    };
    let segments = pass_map(m.events(), &team, &player);
    let block = default_border(Color::Green).title(format!(" {player} "));
    f.render_widget(PassMapWidget { segments: &segments, block: Some(block) }, pitch);

    let mut spans = vec![Span::styled(format!("{} passes  ", segments.len()), dim_style())];
    for category in pass_legend(&segments) {
        spans.push(Span::styled("── ", Style::default().fg(pass_color(category))));
        spans.push(Span::raw(format!("{}  ", category.label())));
    }
    spans.push(Span::styled("e: export CSV", dim_style()));
    f.render_widget(Paragraph::new(Line::from(spans)), legend);
}

fn draw_shot_map(f: &mut Frame, area: Rect, app: &App, m: &LoadedMatch) {
    let [side, pitch, legend] = map_split(area);
    let picker = &app.state.shot_view;
    draw_player_picker(f, side, m, picker, "no shots");

    let Some((team, player)) = picker.selection(m) else {
        draw_placeholder(f, pitch, "No shots for this team");
        return;
    };
    let points = shot_map(m.events(), &team, &player);
    let block = default_border(Color::Green).title(format!(" {player} "));
    f.render_widget(ShotMapWidget { points: &points, block: Some(block) }, pitch);

    let mut spans = vec![Span::styled(format!("{} shots  ", points.len()), dim_style())];
    for category in shot_legend(&points) {
        spans.push(Span::styled(format!("{} ", category.marker()), shot_style(category)));
        spans.push(Span::raw(format!("{}  ", category.label())));
    }
    spans.push(Span::styled("e: export CSV", dim_style()));
    f.render_widget(Paragraph::new(Line::from(spans)), legend);
}

// ---------------------------------------------------------------------------
// Compare
// ---------------------------------------------------------------------------

fn draw_compare(f: &mut Frame, area: Rect, app: &App, m: &LoadedMatch) {
    let [lists, chart] =
        Layout::horizontal([Constraint::Length(SIDE_PANEL_WIDTH), Constraint::Fill(1)]).areas(area);
    let [home_area, away_area] =
        Layout::vertical([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(lists);

    let compare_state = &app.state.compare;
    draw_name_list(
        f,
        home_area,
        &format!("{} (j/k)", m.team(Side::Home)),
        &CompareState::home_players(m),
        compare_state.home_index,
        HOME_COLOR,
    );
    draw_name_list(
        f,
        away_area,
        &format!("{} (J/K)", m.team(Side::Away)),
        &CompareState::away_players(m),
        compare_state.away_index,
        AWAY_COLOR,
    );

    let Some(((home_team, home), (away_team, away))) = compare_state.selection(m) else {
        draw_placeholder(f, chart, "Both teams need a player to compare");
        return;
    };
    let comparison = compare(m.events(), (&home_team, &home), (&away_team, &away));

    let [radar_area, counts_area] =
        Layout::vertical([Constraint::Fill(1), Constraint::Length(CATEGORIES.len() as u16 + 2)]).areas(chart);
    let title = Line::from(vec![
        Span::raw(" "),
        Span::styled(home.clone(), Style::default().fg(HOME_COLOR)),
        Span::raw(" vs "),
        Span::styled(away.clone(), Style::default().fg(AWAY_COLOR)),
        Span::raw(" "),
    ]);
    f.render_widget(
        RadarChart { comparison: &comparison, block: Some(default_border(Color::White).title(title)) },
        radar_area,
    );

    let home_values = comparison.home.counters.values();
    let away_values = comparison.away.counters.values();
    let rows = CATEGORIES.iter().enumerate().map(|(i, label)| {
        Row::new(vec![
            Span::raw(*label),
            Span::styled(home_values[i].to_string(), Style::default().fg(HOME_COLOR)),
            Span::styled(away_values[i].to_string(), Style::default().fg(AWAY_COLOR)),
        ])
    });
    let header = Row::new(vec![
        Span::styled("", dim_style()),
        Span::styled(truncate(&home, 16), Style::default().fg(HOME_COLOR)),
        Span::styled(truncate(&away, 16), Style::default().fg(AWAY_COLOR)),
    ]);
    let widths = [Constraint::Length(26), Constraint::Length(18), Constraint::Length(18)];
    f.render_widget(
        Table::new(rows, widths).header(header).block(Block::default().borders(Borders::TOP)),
        counts_area,
    );
}

fn draw_name_list(f: &mut Frame, area: Rect, title: &str, names: &[String], index: usize, color: Color) {
    let block = default_border(color).title(format!(" {title} "));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let selected = index.min(names.len().saturating_sub(1));
    let visible = inner.height as usize;
    let start = selected.saturating_sub(visible.saturating_sub(1));
    let lines: Vec<Line> = names
        .iter()
        .enumerate()
        .skip(start)
        .take(visible)
        .map(|(i, n)| {
            let style = if i == selected { selected_style() } else { Style::default() };
            Line::from(Span::styled(truncate(n, inner.width as usize), style))
        })
        .collect();
    f.render_widget(Paragraph::new(lines), inner);
}

// ---------------------------------------------------------------------------
// Chrome
// ---------------------------------------------------------------------------

fn draw_help(f: &mut Frame, area: Rect) {
    let block = default_border(Color::White).title(" Help ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = [
        ("1-6", "Matches, Info, Events, Pass Map, Shot Map, Compare"),
        ("h/l ←/→", "season (Matches), event type (Events), team (maps)"),
        ("j/k ↑/↓", "match, table scroll, player; home player on Compare"),
        ("J/K", "away player on Compare"),
        ("Enter", "load the selected match"),
        ("e", "export the selected player's events to CSV"),
        ("f", "toggle full screen"),
        ("\"", "toggle log pane"),
        ("? / Esc", "open / close help"),
        ("q", "quit"),
    ];
    let lines: Vec<Line> = rows
        .iter()
        .map(|(key, what)| {
            Line::from(vec![
                Span::styled(format!("{key:<10}"), Style::default().fg(Color::Yellow)),
                Span::raw(*what),
            ])
        })
        .collect();
    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

fn draw_status(f: &mut Frame, area: Rect, app: &App) {
    let (text, style) = match (app.state.status.as_deref(), app.state.last_error.as_deref()) {
        (Some(status), _) => (status.to_string(), Style::default().fg(Color::Gray)),
        (None, Some(err)) => (err.to_string(), Style::default().fg(Color::Red)),
        (None, None) => match app.state.current.as_ref() {
            Some(m) => (m.row.result_line(), dim_style()),
            None => (String::new(), dim_style()),
        },
    };
    f.render_widget(Paragraph::new(truncate(&text, area.width as usize)).style(style), area);
}

fn draw_logs(f: &mut Frame, area: Rect) {
    let logs = TuiLoggerWidget::default()
        .block(default_border(Color::DarkGray).title(" Logs "))
        .style(Style::default().fg(Color::Gray));
    f.render_widget(logs, area);
}

fn draw_placeholder(f: &mut Frame, area: Rect, msg: &str) {
    f.render_widget(
        Paragraph::new(msg.to_string())
            .style(dim_style())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        area,
    );
}

fn draw_loading_spinner(f: &mut Frame, area: Rect, app: &App, loading: LoadingState) {
    if !loading.is_loading && loading.spinner_char != ERROR_CHAR {
        return;
    }
    let style = match loading.spinner_char {
        ERROR_CHAR => Style::default().fg(Color::Red),
        _ => Style::default().fg(Color::White),
    };
    let spinner = Paragraph::new(loading.spinner_char.to_string())
        .alignment(Alignment::Right)
        .style(style);
    let area = if app.settings.full_screen {
        Rect::new(area.width.saturating_sub(3), area.height.saturating_sub(2), 1, 1)
    } else {
        Rect::new(area.width.saturating_sub(11), 1, 1, 1)
    };
    f.render_widget(spinner, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_keeps_short_text() {
        assert_eq!(truncate("Final", 18), "Final");
        assert_eq!(truncate("Round of Sixteen", 8), "Round o…");
    }

    #[test]
    fn info_header_names_the_competition() {
        use wc_api::{MatchRow, MatchTables};

        let row = MatchRow {
            match_id: 3869685,
            competition: "FIFA World Cup".to_string(),
            season: "2022".to_string(),
            home_team: "Argentina".to_string(),
            away_team: "France".to_string(),
            competition_stage: Some("Final".to_string()),
            ..Default::default()
        };
        let m = LoadedMatch::new(row, MatchTables::default(), Vec::new());
        let text: Vec<String> = info_lines(&m).iter().map(|l| l.to_string()).collect();

        assert!(text.iter().any(|l| l.starts_with("Competition") && l.ends_with("FIFA World Cup")));
        assert!(text.iter().any(|l| l.starts_with("Stage") && l.ends_with("Final")));
        assert!(text.iter().any(|l| l.starts_with("Squads") && l.contains("Argentina - / France -")));
    }
}
