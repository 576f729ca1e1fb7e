//! Pass and shot maps: classify a player's passes/shots by outcome and hand
//! the renderer display-ready segments and points.

use crate::query::{EventFilter, PASS, SHOT, filter};
use crate::{Event, Location};
use log::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PassCategory {
    Completed,
    Incomplete,
}

impl PassCategory {
    /// A pass is completed exactly when the feed records no outcome for it.
    pub fn classify(event: &Event) -> Self {
        match event.pass_outcome {
            None => PassCategory::Completed,
            Some(_) => PassCategory::Incomplete,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PassCategory::Completed => "Completed passes",
            PassCategory::Incomplete => "Incomplete passes",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            PassCategory::Completed => "blue",
            PassCategory::Incomplete => "red",
        }
    }

    pub fn alpha(&self) -> f32 {
        match self {
            PassCategory::Completed => 0.7,
            PassCategory::Incomplete => 0.5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShotCategory {
    Goal,
    Other,
}

impl ShotCategory {
    pub fn classify(event: &Event) -> Self {
        if event.shot_outcome.as_deref() == Some("Goal") {
            ShotCategory::Goal
        } else {
            ShotCategory::Other
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ShotCategory::Goal => "Goal",
            ShotCategory::Other => "Shot",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            ShotCategory::Goal => "blue",
            ShotCategory::Other => "red",
        }
    }

    pub fn marker(&self) -> char {
        match self {
            ShotCategory::Goal => 'o',
            ShotCategory::Other => 'x',
        }
    }
}

/// A directed pass from `start` to `end`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PassSegment {
    pub start: Location,
    pub end: Location,
    pub category: PassCategory,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShotPoint {
    pub location: Location,
    pub category: ShotCategory,
}

/// One segment per pass by `player` for `team`. Passes without both
/// coordinates cannot be drawn and are skipped.
pub fn pass_map(events: &[Event], team: &str, player: &str) -> Vec<PassSegment> {
    let f = EventFilter::new().team(team).player(player).kind(PASS);
    filter(events, &f)
        .into_iter()
        .filter_map(|e| match (e.location, e.pass_end_location) {
            (Some(start), Some(end)) => Some(PassSegment {
                start,
                end,
                category: PassCategory::classify(e),
            }),
            _ => {
                debug!("pass {} has no coordinates, skipping", e.id);
                None
            }
        })
        .collect()
}

pub fn shot_map(events: &[Event], team: &str, player: &str) -> Vec<ShotPoint> {
    let f = EventFilter::new().team(team).player(player).kind(SHOT);
    filter(events, &f)
        .into_iter()
        .filter_map(|e| {
            e.location.map(|location| ShotPoint {
                location,
                category: ShotCategory::classify(e),
            })
        })
        .collect()
}

/// Distinct legend entries in first-drawn order.
pub fn pass_legend(segments: &[PassSegment]) -> Vec<PassCategory> {
    let mut out = Vec::new();
    for s in segments {
        if !out.contains(&s.category) {
            out.push(s.category);
        }
    }
    out
}

pub fn shot_legend(points: &[ShotPoint]) -> Vec<ShotCategory> {
    let mut out = Vec::new();
    for p in points {
        if !out.contains(&p.category) {
            out.push(p.category);
        }
    }
    out
}
