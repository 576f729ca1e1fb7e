//! Predicate filtering over a match's event table, and the selection lists and
//! browsing table built from it.

use crate::{EVENT_COLUMNS, Event};

pub const PASS: &str = "Pass";
pub const SHOT: &str = "Shot";
pub const DRIBBLE: &str = "Dribble";
pub const DUEL: &str = "Duel";
pub const BLOCK: &str = "Block";
pub const BALL_RECOVERY: &str = "Ball Recovery";
pub const STARTING_XI: &str = "Starting XI";

/// Conjunction of optional predicates; `None` matches everything.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EventFilter<'a> {
    pub team: Option<&'a str>,
    pub player: Option<&'a str>,
    pub kind: Option<&'a str>,
}

impl<'a> EventFilter<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn team(mut self, team: &'a str) -> Self {
        self.team = Some(team);
        self
    }

    pub fn player(mut self, player: &'a str) -> Self {
        self.player = Some(player);
        self
    }

    pub fn kind(mut self, kind: &'a str) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn matches(&self, event: &Event) -> bool {
        self.team.is_none_or(|t| event.team.as_deref() == Some(t))
            && self.player.is_none_or(|p| event.player.as_deref() == Some(p))
            && self.kind.is_none_or(|k| event.kind == k)
    }
}

/// The subsequence of `events` matching `filter`, in feed order.
pub fn filter<'e>(events: &'e [Event], filter: &EventFilter) -> Vec<&'e Event> {
    events.iter().filter(|e| filter.matches(e)).collect()
}

/// Distinct event types in first-seen order.
pub fn event_types(events: &[Event]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for e in events {
        if !out.iter().any(|k| *k == e.kind) {
            out.push(e.kind.clone());
        }
    }
    out
}

/// Distinct non-missing player names among events matching `filter`, in
/// first-seen order.
pub fn players(events: &[Event], filter: &EventFilter) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for e in events.iter().filter(|e| filter.matches(e)) {
        if let Some(player) = e.player.as_deref()
            && !out.iter().any(|p| p == player)
        {
            out.push(player.to_string());
        }
    }
    out
}

/// Browsing table for a filtered event subsequence. Columns with no value in
/// any row are dropped; missing cells inside kept columns are empty strings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventTable {
    pub columns: Vec<&'static str>,
    pub rows: Vec<Vec<String>>,
}

impl EventTable {
    pub fn from_events(events: &[&Event]) -> Self {
        let cells: Vec<_> = events.iter().map(|e| e.cells()).collect();
        let keep: Vec<usize> = (0..EVENT_COLUMNS.len())
            .filter(|&col| cells.iter().any(|row| row[col].is_some()))
            .collect();

        let rows = cells
            .into_iter()
            .map(|row| {
                keep.iter()
                    .map(|&col| row[col].clone().unwrap_or_default())
                    .collect()
            })
            .collect();

        Self {
            columns: keep.iter().map(|&col| EVENT_COLUMNS[col]).collect(),
            rows,
        }
    }

    /// Table of all events of one type.
    pub fn for_type(events: &[Event], kind: &str) -> Self {
        Self::from_events(&filter(events, &EventFilter::new().kind(kind)))
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;

    fn feed() -> Vec<Event> {
        vec![
            event("Starting XI", "France", None),
            pass("France", "Kylian Mbappé", None),
            event("Pressure", "Argentina", Some("Enzo Fernández")),
            pass("France", "Antoine Griezmann", Some("Incomplete")),
            event("Half End", "France", None),
            shot("France", "Kylian Mbappé", "Goal", "Open Play"),
        ]
    }

    #[test]
    fn filter_combines_predicates() {
        let events = feed();
        let f = EventFilter::new().team("France").player("Kylian Mbappé");
        let kinds: Vec<&str> = filter(&events, &f).iter().map(|e| e.kind.as_str()).collect();
        assert_eq!(kinds, vec!["Pass", "Shot"]);

        let passes = filter(&events, &EventFilter::new().kind(PASS));
        assert_eq!(passes.len(), 2);
        assert!(filter(&events, &EventFilter::new().team("Brazil")).is_empty());
    }

    #[test]
    fn event_types_are_distinct_in_feed_order() {
        assert_eq!(
            event_types(&feed()),
            vec!["Starting XI", "Pass", "Pressure", "Half End", "Shot"]
        );
    }

    #[test]
    fn player_lists_never_contain_missing_players() {
        let events = feed();
        for f in [
            EventFilter::new(),
            EventFilter::new().team("France"),
            EventFilter::new().team("Argentina"),
            EventFilter::new().kind("Half End"),
            EventFilter::new().team("France").kind(SHOT),
        ] {
            let list = players(&events, &f);
            assert!(list.iter().all(|p| !p.is_empty()));
        }
        assert_eq!(
            players(&events, &EventFilter::new().team("France")),
            vec!["Kylian Mbappé", "Antoine Griezmann"]
        );
        assert!(players(&events, &EventFilter::new().kind("Half End")).is_empty());
        assert_eq!(
            players(&events, &EventFilter::new().team("France").kind(SHOT)),
            vec!["Kylian Mbappé"]
        );
    }

    #[test]
    fn table_drops_all_empty_columns() {
        let table = EventTable::for_type(&feed(), PASS);
        assert_eq!(table.rows.len(), 2);
        assert!(table.columns.contains(&"pass_end_location"));
        assert!(table.columns.contains(&"pass_outcome"));
        assert!(!table.columns.contains(&"shot_outcome"));
        assert!(!table.columns.contains(&"duration"));

        let outcome = table.columns.iter().position(|c| *c == "pass_outcome").unwrap();
        assert_eq!(table.rows[0][outcome], "");
        assert_eq!(table.rows[1][outcome], "Incomplete");
    }

    #[test]
    fn table_keeps_type_specific_columns() {
        let events = vec![
            Event {
                interception_outcome: Some("Won".to_string()),
                ..event("Interception", "Argentina", Some("Cristian Romero"))
            },
            Event {
                goalkeeper_type: Some("Shot Saved".to_string()),
                goalkeeper_outcome: Some("Success".to_string()),
                ..event("Goal Keeper", "France", Some("Hugo Lloris"))
            },
        ];

        let interceptions = EventTable::for_type(&events, "Interception");
        assert!(interceptions.columns.contains(&"interception_outcome"));
        assert!(!interceptions.columns.contains(&"goalkeeper_type"));

        let saves = EventTable::for_type(&events, "Goal Keeper");
        assert!(saves.columns.contains(&"goalkeeper_type"));
        assert!(saves.columns.contains(&"goalkeeper_outcome"));
        let col = saves.columns.iter().position(|c| *c == "goalkeeper_type").unwrap();
        assert_eq!(saves.rows[0][col], "Shot Saved");
    }

    #[test]
    fn table_for_unknown_type_is_empty() {
        let table = EventTable::for_type(&feed(), "Foul Won");
        assert!(table.is_empty());
        assert!(table.columns.is_empty());
    }
}
