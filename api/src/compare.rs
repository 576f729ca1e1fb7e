use crate::Event;
use crate::query::{BALL_RECOVERY, BLOCK, DRIBBLE, DUEL, EventFilter, SHOT};

/// Radar axis labels, in the order of [`PlayerCounters::values`].
pub const CATEGORIES: [&str; 5] = [
    "Completed dribbles",
    "Goals (excl. penalties)",
    "Ball recoveries",
    "Tackles won",
    "Blocks",
];

/// Fixed radial range of the comparison chart.
pub const RADAR_RANGE: (f64, f64) = (0.0, 5.0);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlayerCounters {
    pub dribbles: u32,
    pub goals: u32,
    pub recoveries: u32,
    pub tackles: u32,
    pub blocks: u32,
}

impl PlayerCounters {
    pub fn values(&self) -> [u32; 5] {
        [self.dribbles, self.goals, self.recoveries, self.tackles, self.blocks]
    }

    fn add(&mut self, event: &Event) {
        match event.kind.as_str() {
            DRIBBLE if event.dribble_outcome.as_deref() == Some("Complete") => self.dribbles += 1,
            SHOT if is_non_penalty_goal(event) => self.goals += 1,
            BALL_RECOVERY => self.recoveries += 1,
            DUEL if event.duel_type.as_deref() == Some("Tackle")
                && event.duel_outcome.as_deref() == Some("Won") =>
            {
                self.tackles += 1
            }
            BLOCK => self.blocks += 1,
            _ => {}
        }
    }
}

fn is_non_penalty_goal(event: &Event) -> bool {
    event.shot_outcome.as_deref() == Some("Goal") && event.shot_type.as_deref() != Some("Penalty")
}

pub fn player_counters(events: &[Event], team: &str, player: &str) -> PlayerCounters {
    let f = EventFilter::new().team(team).player(player);
    let mut counters = PlayerCounters::default();
    for e in events.iter().filter(|e| f.matches(e)) {
        counters.add(e);
    }
    counters
}

#[derive(Debug, Clone, PartialEq)]
pub struct RadarSeries {
    pub team: String,
    pub player: String,
    pub counters: PlayerCounters,
}

/// Head-to-head: one player from each side of the match.
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    pub home: RadarSeries,
    pub away: RadarSeries,
}

pub fn compare(events: &[Event], home: (&str, &str), away: (&str, &str)) -> Comparison {
    let series = |(team, player): (&str, &str)| RadarSeries {
        team: team.to_string(),
        player: player.to_string(),
        counters: player_counters(events, team, player),
    };
    Comparison {
        home: series(home),
        away: series(away),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::fixtures::{event, shot};

    fn dribble(player: &str, outcome: &str) -> Event {
        Event {
            dribble_outcome: Some(outcome.to_string()),
            ..event("Dribble", "France", Some(player))
        }
    }

    fn duel(player: &str, duel_type: &str, outcome: Option<&str>) -> Event {
        Event {
            duel_type: Some(duel_type.to_string()),
            duel_outcome: outcome.map(str::to_string),
            ..event("Duel", "France", Some(player))
        }
    }

    fn sample() -> Vec<Event> {
        vec![
            dribble("P", "Complete"),
            dribble("P", "Complete"),
            dribble("P", "Incomplete"),
            shot("France", "P", "Goal", "Open Play"),
            shot("France", "P", "Goal", "Penalty"),
            shot("France", "P", "Saved", "Open Play"),
            duel("P", "Tackle", Some("Won")),
            duel("P", "Tackle", Some("Lost In Play")),
            duel("P", "Aerial Lost", None),
            event("Pass", "France", Some("P")),
            event("Block", "France", Some("Q")),
        ]
    }

    #[test]
    fn counts_follow_fixed_category_order() {
        let counters = player_counters(&sample(), "France", "P");
        assert_eq!(counters.values(), [2, 1, 0, 1, 0]);
    }

    #[test]
    fn counts_are_order_independent() {
        let events = sample();
        let forward = player_counters(&events, "France", "P");

        let mut reversed = events.clone();
        reversed.reverse();
        assert_eq!(player_counters(&reversed, "France", "P"), forward);

        let mut rotated = events;
        rotated.rotate_left(4);
        assert_eq!(player_counters(&rotated, "France", "P"), forward);
    }

    #[test]
    fn recoveries_and_blocks_count_by_type() {
        let events = vec![
            event("Ball Recovery", "Argentina", Some("R")),
            event("Ball Recovery", "Argentina", Some("R")),
            event("Block", "Argentina", Some("R")),
            event("Block", "France", Some("R")),
        ];
        let counters = player_counters(&events, "Argentina", "R");
        assert_eq!(counters.values(), [0, 0, 2, 0, 1]);
    }

    #[test]
    fn unknown_player_counts_zero() {
        assert_eq!(player_counters(&sample(), "France", "nobody"), PlayerCounters::default());
    }

    #[test]
    fn compare_is_idempotent() {
        let events = sample();
        let first = compare(&events, ("France", "P"), ("France", "Q"));
        let second = compare(&events, ("France", "P"), ("France", "Q"));
        assert_eq!(first, second);
        assert_eq!(first.away.counters.blocks, 1);
    }
}
