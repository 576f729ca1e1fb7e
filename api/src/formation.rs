use crate::query::STARTING_XI;
use crate::{Event, TacticsRow};
use log::warn;

/// One player placed in a formation slot. `position_id` is the StatsBomb
/// position id (1 = Goalkeeper ... 25 = Secondary Striker).
#[derive(Debug, Clone, PartialEq)]
pub struct FormationSlot {
    pub position_id: u8,
    pub position: String,
    pub player: Option<String>,
    pub jersey_number: Option<u16>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StartingXi {
    pub team: String,
    pub formation: String,
    pub slots: Vec<FormationSlot>,
}

/// Starting formation of `team`, joining its "Starting XI" event with the
/// tactics rows on event id.
///
/// Returns `None` when the feed has no Starting XI for the team. When it has
/// several, the first one in feed order is used.
pub fn starting_xi(events: &[Event], tactics: &[TacticsRow], team: &str) -> Option<StartingXi> {
    let mut markers = events
        .iter()
        .filter(|e| e.kind == STARTING_XI && e.team.as_deref() == Some(team));

    let marker = markers.next()?;
    let extra = markers.count();
    if extra > 0 {
        warn!("{team}: {} Starting XI events in feed, using {}", extra + 1, marker.id);
    }

    let slots = tactics
        .iter()
        .filter(|t| t.event_id == marker.id)
        .map(|t| FormationSlot {
            position_id: t.position_id,
            position: t.position_name.clone(),
            player: t.player_name.as_deref().map(short_name),
            jersey_number: t.jersey_number,
        })
        .collect();

    Some(StartingXi {
        team: team.to_string(),
        formation: marker.tactics_formation.clone().unwrap_or_default(),
        slots,
    })
}

/// First and last token of a full name: "Lionel Andrés Messi Cuccittini" →
/// "Lionel Cuccittini". Single-token names are returned as-is.
pub fn short_name(full: &str) -> String {
    let mut tokens = full.split_whitespace();
    match (tokens.next(), tokens.next_back()) {
        (Some(first), Some(last)) => format!("{first} {last}"),
        (Some(only), None) => only.to_string(),
        _ => full.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const POSITIONS: [(u8, &str); 11] = [
        (1, "Goalkeeper"),
        (2, "Right Back"),
        (3, "Right Center Back"),
        (5, "Left Center Back"),
        (6, "Left Back"),
        (10, "Center Defensive Midfield"),
        (13, "Right Center Midfield"),
        (15, "Left Center Midfield"),
        (17, "Right Wing"),
        (23, "Center Forward"),
        (21, "Left Wing"),
    ];

    fn xi_event(id: &str, team: &str, formation: &str) -> Event {
        Event {
            id: id.to_string(),
            kind: STARTING_XI.to_string(),
            team: Some(team.to_string()),
            tactics_formation: Some(formation.to_string()),
            ..Default::default()
        }
    }

    fn tactics_for(event_id: &str) -> Vec<TacticsRow> {
        POSITIONS
            .iter()
            .enumerate()
            .map(|(i, (id, name))| TacticsRow {
                event_id: event_id.to_string(),
                player_id: Some(i as u64),
                player_name: Some(format!("Player Middle {i}")),
                position_id: *id,
                position_name: name.to_string(),
                jersey_number: Some(i as u16 + 1),
            })
            .collect()
    }

    #[test]
    fn extracts_formation_and_eleven_slots() {
        let events = vec![
            xi_event("fra", "France", "4-3-3"),
            xi_event("arg", "Argentina", "4-4-2"),
        ];
        let mut tactics = tactics_for("fra");
        tactics.extend(tactics_for("arg"));

        let xi = starting_xi(&events, &tactics, "France").expect("France has a Starting XI");
        assert_eq!(xi.formation, "4-3-3");
        assert_eq!(xi.slots.len(), 11);
        assert_eq!(xi.slots[0].position_id, 1);
        assert_eq!(xi.slots[0].player.as_deref(), Some("Player 0"));
    }

    #[test]
    fn missing_starting_xi_is_none() {
        let events = vec![xi_event("fra", "France", "4-3-3")];
        assert!(starting_xi(&events, &tactics_for("fra"), "Croatia").is_none());
        assert!(starting_xi(&[], &[], "France").is_none());
    }

    #[test]
    fn duplicate_starting_xi_takes_first() {
        let events = vec![
            xi_event("first", "France", "4-2-3-1"),
            xi_event("second", "France", "4-4-2"),
        ];
        let mut tactics = tactics_for("first");
        tactics.extend(tactics_for("second").into_iter().take(3));

        let xi = starting_xi(&events, &tactics, "France").unwrap();
        assert_eq!(xi.formation, "4-2-3-1");
        assert_eq!(xi.slots.len(), 11);
    }

    #[test]
    fn missing_player_name_passes_through() {
        let events = vec![xi_event("fra", "France", "4-3-3")];
        let mut tactics = tactics_for("fra");
        tactics[4].player_name = None;

        let xi = starting_xi(&events, &tactics, "France").unwrap();
        assert_eq!(xi.slots[4].player, None);
    }

    #[test]
    fn short_name_keeps_first_and_last_tokens() {
        assert_eq!(short_name("Lionel Andrés Messi Cuccittini"), "Lionel Cuccittini");
        assert_eq!(short_name("Kylian Mbappé"), "Kylian Mbappé");
        assert_eq!(short_name("Pepe"), "Pepe");
        assert_eq!(short_name("  Hugo   Lloris "), "Hugo Lloris");
        assert_eq!(short_name(""), "");
    }
}
