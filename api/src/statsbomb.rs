/// StatsBomb open-data raw wire types — serde shapes for the JSON files under
/// `data/` (competitions, matches, events, lineups).
/// These map to the clean domain types in client.rs and parser.rs.
use serde::Deserialize;

/// `{ "id": 30, "name": "Pass" }` — the shape of every named lookup
/// (type, team, player, position, outcome, ...).
#[derive(Debug, Deserialize, Default, Clone)]
pub struct SbRef {
    pub id: Option<u64>,
    pub name: Option<String>,
}

// ---------------------------------------------------------------------------
// competitions.json
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, Default, Clone)]
pub struct SbCompetition {
    pub competition_id: u32,
    pub season_id: u32,
    pub country_name: Option<String>,
    pub competition_name: String,
    pub competition_gender: Option<String>,
    pub season_name: String,
}

// ---------------------------------------------------------------------------
// matches/{competition_id}/{season_id}.json
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, Default, Clone)]
pub struct SbMatch {
    pub match_id: u64,
    pub match_date: Option<String>, // "2022-12-18"
    pub kick_off: Option<String>,
    pub competition: Option<SbMatchCompetition>,
    pub season: Option<SbMatchSeason>,
    pub home_team: SbHomeTeam,
    pub away_team: SbAwayTeam,
    pub home_score: Option<u8>,
    pub away_score: Option<u8>,
    pub competition_stage: Option<SbRef>,
    pub stadium: Option<SbRef>,
    pub referee: Option<SbRef>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct SbMatchCompetition {
    pub competition_id: Option<u32>,
    pub competition_name: Option<String>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct SbMatchSeason {
    pub season_id: Option<u32>,
    pub season_name: Option<String>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct SbHomeTeam {
    pub home_team_id: Option<u64>,
    pub home_team_name: String,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct SbAwayTeam {
    pub away_team_id: Option<u64>,
    pub away_team_name: String,
}

// ---------------------------------------------------------------------------
// events/{match_id}.json
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, Default, Clone)]
pub struct SbEvent {
    pub id: String,
    pub index: u32,
    pub period: u8,
    pub timestamp: String,
    pub minute: u16,
    pub second: u8,
    #[serde(rename = "type")]
    pub event_type: SbRef,
    pub possession: Option<u32>,
    pub possession_team: Option<SbRef>,
    pub play_pattern: Option<SbRef>,
    pub team: Option<SbRef>,
    pub player: Option<SbRef>,
    pub position: Option<SbRef>,
    /// `[x, y]`; shot end locations may carry a third (height) coordinate.
    pub location: Option<Vec<f64>>,
    pub duration: Option<f64>,
    pub under_pressure: Option<bool>,
    pub counterpress: Option<bool>,
    pub off_camera: Option<bool>,
    pub out: Option<bool>,
    pub related_events: Option<Vec<String>>,
    pub tactics: Option<SbTactics>,
    pub pass: Option<SbPass>,
    pub shot: Option<SbShot>,
    pub goalkeeper: Option<SbGoalkeeper>,
    pub dribble: Option<SbDribble>,
    pub duel: Option<SbDuel>,
    pub carry: Option<SbCarry>,
    pub interception: Option<SbOutcomeOnly>,
    pub clearance: Option<SbClearance>,
    pub ball_receipt: Option<SbOutcomeOnly>,
    pub ball_recovery: Option<SbBallRecovery>,
    pub block: Option<SbBlock>,
    pub foul_committed: Option<SbFoulCommitted>,
    pub foul_won: Option<SbFoulWon>,
    #[serde(rename = "50_50")]
    pub fifty_fifty: Option<SbOutcomeOnly>,
    pub bad_behaviour: Option<SbBadBehaviour>,
    pub miscontrol: Option<SbMiscontrol>,
    pub substitution: Option<SbSubstitution>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct SbTactics {
    /// Formation as digits, e.g. `433` or `4231`.
    pub formation: Option<u32>,
    pub lineup: Option<Vec<SbTacticsPlayer>>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct SbTacticsPlayer {
    pub player: Option<SbRef>,
    pub position: Option<SbRef>,
    pub jersey_number: Option<u16>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct SbPass {
    pub recipient: Option<SbRef>,
    pub length: Option<f64>,
    pub angle: Option<f64>,
    pub height: Option<SbRef>,
    pub end_location: Option<Vec<f64>>,
    /// Absent for completed passes.
    pub outcome: Option<SbRef>,
    pub body_part: Option<SbRef>,
    #[serde(rename = "type")]
    pub pass_type: Option<SbRef>,
    pub technique: Option<SbRef>,
    pub cross: Option<bool>,
    pub switch: Option<bool>,
    pub shot_assist: Option<bool>,
    pub goal_assist: Option<bool>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct SbShot {
    pub statsbomb_xg: Option<f64>,
    pub end_location: Option<Vec<f64>>,
    pub outcome: Option<SbRef>,
    #[serde(rename = "type")]
    pub shot_type: Option<SbRef>,
    pub body_part: Option<SbRef>,
    pub technique: Option<SbRef>,
    pub first_time: Option<bool>,
    pub key_pass_id: Option<String>,
    pub freeze_frame: Option<Vec<SbFreezeFramePlayer>>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct SbFreezeFramePlayer {
    pub location: Option<Vec<f64>>,
    pub player: Option<SbRef>,
    pub position: Option<SbRef>,
    #[serde(default)]
    pub teammate: bool,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct SbOutcomeOnly {
    pub outcome: Option<SbRef>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct SbGoalkeeper {
    #[serde(rename = "type")]
    pub goalkeeper_type: Option<SbRef>,
    pub outcome: Option<SbRef>,
    pub technique: Option<SbRef>,
    pub position: Option<SbRef>,
    pub body_part: Option<SbRef>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct SbDribble {
    pub outcome: Option<SbRef>,
    pub nutmeg: Option<bool>,
    pub overrun: Option<bool>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct SbDuel {
    #[serde(rename = "type")]
    pub duel_type: Option<SbRef>,
    pub outcome: Option<SbRef>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct SbCarry {
    pub end_location: Option<Vec<f64>>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct SbClearance {
    pub body_part: Option<SbRef>,
    pub aerial_won: Option<bool>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct SbBallRecovery {
    pub recovery_failure: Option<bool>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct SbBlock {
    pub deflection: Option<bool>,
    pub offensive: Option<bool>,
    pub save_block: Option<bool>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct SbFoulCommitted {
    pub card: Option<SbRef>,
    #[serde(rename = "type")]
    pub foul_type: Option<SbRef>,
    pub advantage: Option<bool>,
    pub penalty: Option<bool>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct SbFoulWon {
    pub defensive: Option<bool>,
    pub advantage: Option<bool>,
    pub penalty: Option<bool>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct SbBadBehaviour {
    pub card: Option<SbRef>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct SbMiscontrol {
    pub aerial_won: Option<bool>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct SbSubstitution {
    pub outcome: Option<SbRef>,
    pub replacement: Option<SbRef>,
}

// ---------------------------------------------------------------------------
// lineups/{match_id}.json
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, Default, Clone)]
pub struct SbLineupTeam {
    pub team_id: u64,
    pub team_name: String,
    #[serde(default)]
    pub lineup: Vec<SbLineupPlayer>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct SbLineupPlayer {
    pub player_id: u64,
    pub player_name: String,
    pub player_nickname: Option<String>,
    pub jersey_number: Option<u16>,
    pub country: Option<SbRef>,
}
