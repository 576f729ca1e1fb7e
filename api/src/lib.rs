pub mod catalog;
pub mod client;
pub mod colors;
pub mod compare;
pub mod export;
pub mod formation;
pub mod maps;
pub mod parser;
pub mod query;
pub mod statsbomb;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Domain types — clean model, independent of the StatsBomb wire format
// ---------------------------------------------------------------------------

/// A point on the 120x80 StatsBomb pitch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub x: f64,
    pub y: f64,
}

impl Location {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Competition {
    pub competition_id: u32,
    pub season_id: u32,
    pub competition_name: String,
    pub season_name: String,
    pub country_name: Option<String>,
    pub competition_gender: Option<String>,
}

/// One row of the match list for a competition season.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatchRow {
    pub match_id: u64,
    pub competition_id: u32,
    pub competition: String,
    pub season_id: u32,
    pub season: String,
    pub match_date: Option<NaiveDate>,
    pub kick_off: Option<String>,
    pub home_team: String,
    pub away_team: String,
    pub home_score: Option<u8>,
    pub away_score: Option<u8>,
    pub competition_stage: Option<String>,
    pub stadium: Option<String>,
    pub referee: Option<String>,
}

impl MatchRow {
    /// "Home x Away", the label used by the match picker.
    pub fn label(&self) -> String {
        format!("{} x {}", self.home_team, self.away_team)
    }

    /// "Home 3 x 3 Away"; missing scores render as `-`.
    pub fn result_line(&self) -> String {
        let score = |s: Option<u8>| s.map_or_else(|| "-".to_string(), |s| s.to_string());
        format!(
            "{} {} x {} {}",
            self.home_team,
            score(self.home_score),
            score(self.away_score),
            self.away_team
        )
    }

    pub fn teams(&self) -> [&str; 2] {
        [self.home_team.as_str(), self.away_team.as_str()]
    }
}

/// One in-game action. Type-specific attributes are flattened into optional
/// `pass_*`, `shot_*`, `goalkeeper_*`, ... fields; absent means the source did
/// not record it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Event {
    pub id: String,
    pub index: u32,
    pub period: u8,
    pub timestamp: String,
    pub minute: u16,
    pub second: u8,
    pub kind: String,
    pub possession: Option<u32>,
    pub possession_team: Option<String>,
    pub play_pattern: Option<String>,
    pub team: Option<String>,
    pub player: Option<String>,
    pub position: Option<String>,
    pub location: Option<Location>,
    pub duration: Option<f64>,
    pub under_pressure: Option<bool>,
    pub counterpress: Option<bool>,
    pub off_camera: Option<bool>,
    pub out: Option<bool>,
    pub related_events: Vec<String>,
    pub pass_recipient: Option<String>,
    pub pass_length: Option<f64>,
    pub pass_angle: Option<f64>,
    pub pass_height: Option<String>,
    pub pass_end_location: Option<Location>,
    pub pass_outcome: Option<String>,
    pub pass_body_part: Option<String>,
    pub pass_type: Option<String>,
    pub pass_technique: Option<String>,
    pub pass_cross: Option<bool>,
    pub pass_switch: Option<bool>,
    pub pass_shot_assist: Option<bool>,
    pub pass_goal_assist: Option<bool>,
    pub shot_statsbomb_xg: Option<f64>,
    pub shot_end_location: Option<Location>,
    pub shot_outcome: Option<String>,
    pub shot_type: Option<String>,
    pub shot_body_part: Option<String>,
    pub shot_technique: Option<String>,
    pub shot_first_time: Option<bool>,
    pub shot_key_pass_id: Option<String>,
    pub goalkeeper_type: Option<String>,
    pub goalkeeper_outcome: Option<String>,
    pub goalkeeper_technique: Option<String>,
    pub goalkeeper_position: Option<String>,
    pub goalkeeper_body_part: Option<String>,
    pub dribble_outcome: Option<String>,
    pub dribble_nutmeg: Option<bool>,
    pub dribble_overrun: Option<bool>,
    pub duel_type: Option<String>,
    pub duel_outcome: Option<String>,
    pub carry_end_location: Option<Location>,
    pub interception_outcome: Option<String>,
    pub clearance_body_part: Option<String>,
    pub clearance_aerial_won: Option<bool>,
    pub ball_receipt_outcome: Option<String>,
    pub ball_recovery_recovery_failure: Option<bool>,
    pub block_deflection: Option<bool>,
    pub block_offensive: Option<bool>,
    pub block_save_block: Option<bool>,
    pub foul_committed_card: Option<String>,
    pub foul_committed_type: Option<String>,
    pub foul_committed_advantage: Option<bool>,
    pub foul_committed_penalty: Option<bool>,
    pub foul_won_defensive: Option<bool>,
    pub foul_won_advantage: Option<bool>,
    pub foul_won_penalty: Option<bool>,
    pub fifty_fifty_outcome: Option<String>,
    pub bad_behaviour_card: Option<String>,
    pub miscontrol_aerial_won: Option<bool>,
    pub substitution_outcome: Option<String>,
    pub substitution_replacement: Option<String>,
    pub tactics_formation: Option<String>,
}

pub const EVENT_COLUMN_COUNT: usize = 73;

/// Column names of the flattened event table, in display/export order.
pub const EVENT_COLUMNS: [&str; EVENT_COLUMN_COUNT] = [
    "id",
    "index",
    "period",
    "timestamp",
    "minute",
    "second",
    "type",
    "possession",
    "possession_team",
    "play_pattern",
    "team",
    "player",
    "position",
    "location",
    "duration",
    "under_pressure",
    "counterpress",
    "off_camera",
    "out",
    "related_events",
    "pass_recipient",
    "pass_length",
    "pass_angle",
    "pass_height",
    "pass_end_location",
    "pass_outcome",
    "pass_body_part",
    "pass_type",
    "pass_technique",
    "pass_cross",
    "pass_switch",
    "pass_shot_assist",
    "pass_goal_assist",
    "shot_statsbomb_xg",
    "shot_end_location",
    "shot_outcome",
    "shot_type",
    "shot_body_part",
    "shot_technique",
    "shot_first_time",
    "shot_key_pass_id",
    "goalkeeper_type",
    "goalkeeper_outcome",
    "goalkeeper_technique",
    "goalkeeper_position",
    "goalkeeper_body_part",
    "dribble_outcome",
    "dribble_nutmeg",
    "dribble_overrun",
    "duel_type",
    "duel_outcome",
    "carry_end_location",
    "interception_outcome",
    "clearance_body_part",
    "clearance_aerial_won",
    "ball_receipt_outcome",
    "ball_recovery_recovery_failure",
    "block_deflection",
    "block_offensive",
    "block_save_block",
    "foul_committed_card",
    "foul_committed_type",
    "foul_committed_advantage",
    "foul_committed_penalty",
    "foul_won_defensive",
    "foul_won_advantage",
    "foul_won_penalty",
    "50_50_outcome",
    "bad_behaviour_card",
    "miscontrol_aerial_won",
    "substitution_outcome",
    "substitution_replacement",
    "tactics_formation",
];

impl Event {
    /// Every column rendered as text, aligned with [`EVENT_COLUMNS`].
    /// `None` marks a missing value.
    pub fn cells(&self) -> [Option<String>; EVENT_COLUMN_COUNT] {
        let num = |v: Option<f64>| v.map(|v| v.to_string());
        let flag = |v: Option<bool>| v.map(|b| b.to_string());
        let loc = |v: Option<Location>| v.map(|l| format!("[{}, {}]", l.x, l.y));
        let related = if self.related_events.is_empty() {
            None
        } else {
            Some(format!("[{}]", self.related_events.join(", ")))
        };

        [
            Some(self.id.clone()),
            Some(self.index.to_string()),
            Some(self.period.to_string()),
            Some(self.timestamp.clone()),
            Some(self.minute.to_string()),
            Some(self.second.to_string()),
            Some(self.kind.clone()),
            self.possession.map(|p| p.to_string()),
            self.possession_team.clone(),
            self.play_pattern.clone(),
            self.team.clone(),
            self.player.clone(),
            self.position.clone(),
            loc(self.location),
            num(self.duration),
            flag(self.under_pressure),
            flag(self.counterpress),
            flag(self.off_camera),
            flag(self.out),
            related,
            self.pass_recipient.clone(),
            num(self.pass_length),
            num(self.pass_angle),
            self.pass_height.clone(),
            loc(self.pass_end_location),
            self.pass_outcome.clone(),
            self.pass_body_part.clone(),
            self.pass_type.clone(),
            self.pass_technique.clone(),
            flag(self.pass_cross),
            flag(self.pass_switch),
            flag(self.pass_shot_assist),
            flag(self.pass_goal_assist),
            num(self.shot_statsbomb_xg),
            loc(self.shot_end_location),
            self.shot_outcome.clone(),
            self.shot_type.clone(),
            self.shot_body_part.clone(),
            self.shot_technique.clone(),
            flag(self.shot_first_time),
            self.shot_key_pass_id.clone(),
            self.goalkeeper_type.clone(),
            self.goalkeeper_outcome.clone(),
            self.goalkeeper_technique.clone(),
            self.goalkeeper_position.clone(),
            self.goalkeeper_body_part.clone(),
            self.dribble_outcome.clone(),
            flag(self.dribble_nutmeg),
            flag(self.dribble_overrun),
            self.duel_type.clone(),
            self.duel_outcome.clone(),
            loc(self.carry_end_location),
            self.interception_outcome.clone(),
            self.clearance_body_part.clone(),
            flag(self.clearance_aerial_won),
            self.ball_receipt_outcome.clone(),
            flag(self.ball_recovery_recovery_failure),
            flag(self.block_deflection),
            flag(self.block_offensive),
            flag(self.block_save_block),
            self.foul_committed_card.clone(),
            self.foul_committed_type.clone(),
            flag(self.foul_committed_advantage),
            flag(self.foul_committed_penalty),
            flag(self.foul_won_defensive),
            flag(self.foul_won_advantage),
            flag(self.foul_won_penalty),
            self.fifty_fifty_outcome.clone(),
            self.bad_behaviour_card.clone(),
            flag(self.miscontrol_aerial_won),
            self.substitution_outcome.clone(),
            self.substitution_replacement.clone(),
            self.tactics_formation.clone(),
        ]
    }
}

/// One player listed on a "Starting XI" or "Tactical Shift" event.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TacticsRow {
    pub event_id: String,
    pub player_id: Option<u64>,
    pub player_name: Option<String>,
    pub position_id: u8,
    pub position_name: String,
    pub jersey_number: Option<u16>,
}

/// Link between an event and one of its related events.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RelatedEvent {
    pub event_id: String,
    pub index: u32,
    pub related_id: String,
}

/// One player visible in a shot's freeze frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FreezeFrame {
    pub event_id: String,
    pub player: Option<String>,
    pub position: Option<String>,
    pub location: Option<Location>,
    pub teammate: bool,
}

/// The four aligned tables derived from one match's event feed.
#[derive(Debug, Clone, Default)]
pub struct MatchTables {
    pub match_id: u64,
    pub events: Vec<Event>,
    pub related: Vec<RelatedEvent>,
    pub freeze_frames: Vec<FreezeFrame>,
    pub tactics: Vec<TacticsRow>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TeamLineup {
    pub team_id: u64,
    pub team: String,
    pub players: Vec<LineupPlayer>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineupPlayer {
    pub player_id: u64,
    pub name: String,
    pub nickname: Option<String>,
    pub jersey_number: Option<u16>,
    pub country: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cells_align_with_columns() {
        let event = Event {
            kind: "Pass".into(),
            player: Some("Lionel Messi".into()),
            location: Some(Location::new(60.0, 40.5)),
            ..Default::default()
        };
        let cells = event.cells();
        let col = |name: &str| EVENT_COLUMNS.iter().position(|c| *c == name).unwrap();

        assert_eq!(cells[col("type")].as_deref(), Some("Pass"));
        assert_eq!(cells[col("player")].as_deref(), Some("Lionel Messi"));
        assert_eq!(cells[col("location")].as_deref(), Some("[60, 40.5]"));
        assert!(cells[col("pass_outcome")].is_none());
        assert!(cells[col("related_events")].is_none());
    }

    #[test]
    fn result_line_renders_missing_scores() {
        let m = MatchRow {
            home_team: "Argentina".into(),
            away_team: "France".into(),
            home_score: Some(3),
            away_score: None,
            ..Default::default()
        };
        assert_eq!(m.label(), "Argentina x France");
        assert_eq!(m.result_line(), "Argentina 3 x - France");
    }
}
