//! Flattens the nested StatsBomb event feed into the event table plus the
//! related-event, freeze-frame and tactics side tables.

use crate::statsbomb::{SbEvent, SbRef};
use crate::{Event, FreezeFrame, Location, MatchTables, RelatedEvent, TacticsRow};

pub fn parse_match(match_id: u64, raw: Vec<SbEvent>) -> MatchTables {
    let mut tables = MatchTables {
        match_id,
        events: Vec::with_capacity(raw.len()),
        ..Default::default()
    };

    for ev in raw {
        for related_id in ev.related_events.iter().flatten() {
            tables.related.push(RelatedEvent {
                event_id: ev.id.clone(),
                index: ev.index,
                related_id: related_id.clone(),
            });
        }

        if let Some(frame) = ev.shot.as_ref().and_then(|s| s.freeze_frame.as_ref()) {
            tables.freeze_frames.extend(frame.iter().map(|p| FreezeFrame {
                event_id: ev.id.clone(),
                player: name(&p.player),
                position: name(&p.position),
                location: to_location(&p.location),
                teammate: p.teammate,
            }));
        }

        if let Some(lineup) = ev.tactics.as_ref().and_then(|t| t.lineup.as_ref()) {
            tables.tactics.extend(lineup.iter().map(|p| TacticsRow {
                event_id: ev.id.clone(),
                player_id: p.player.as_ref().and_then(|r| r.id),
                player_name: name(&p.player),
                position_id: p
                    .position
                    .as_ref()
                    .and_then(|r| r.id)
                    .and_then(|id| u8::try_from(id).ok())
                    .unwrap_or_default(),
                position_name: name(&p.position).unwrap_or_default(),
                jersey_number: p.jersey_number,
            }));
        }

        tables.events.push(map_event(ev));
    }

    tables
}

fn map_event(ev: SbEvent) -> Event {
    let pass = ev.pass.unwrap_or_default();
    let shot = ev.shot.unwrap_or_default();
    let keeper = ev.goalkeeper.unwrap_or_default();
    let dribble = ev.dribble.unwrap_or_default();
    let duel = ev.duel.unwrap_or_default();
    let clearance = ev.clearance.unwrap_or_default();
    let block = ev.block.unwrap_or_default();
    let foul = ev.foul_committed.unwrap_or_default();
    let foul_won = ev.foul_won.unwrap_or_default();
    let substitution = ev.substitution.unwrap_or_default();

    Event {
        id: ev.id,
        index: ev.index,
        period: ev.period,
        timestamp: ev.timestamp,
        minute: ev.minute,
        second: ev.second,
        kind: ev.event_type.name.unwrap_or_default(),
        possession: ev.possession,
        possession_team: name(&ev.possession_team),
        play_pattern: name(&ev.play_pattern),
        team: name(&ev.team),
        player: name(&ev.player),
        position: name(&ev.position),
        location: to_location(&ev.location),
        duration: ev.duration,
        under_pressure: ev.under_pressure,
        counterpress: ev.counterpress,
        off_camera: ev.off_camera,
        out: ev.out,
        related_events: ev.related_events.unwrap_or_default(),
        pass_recipient: name(&pass.recipient),
        pass_length: pass.length,
        pass_angle: pass.angle,
        pass_height: name(&pass.height),
        pass_end_location: to_location(&pass.end_location),
        pass_outcome: name(&pass.outcome),
        pass_body_part: name(&pass.body_part),
        pass_type: name(&pass.pass_type),
        pass_technique: name(&pass.technique),
        pass_cross: pass.cross,
        pass_switch: pass.switch,
        pass_shot_assist: pass.shot_assist,
        pass_goal_assist: pass.goal_assist,
        shot_statsbomb_xg: shot.statsbomb_xg,
        shot_end_location: to_location(&shot.end_location),
        shot_outcome: name(&shot.outcome),
        shot_type: name(&shot.shot_type),
        shot_body_part: name(&shot.body_part),
        shot_technique: name(&shot.technique),
        shot_first_time: shot.first_time,
        shot_key_pass_id: shot.key_pass_id,
        goalkeeper_type: name(&keeper.goalkeeper_type),
        goalkeeper_outcome: name(&keeper.outcome),
        goalkeeper_technique: name(&keeper.technique),
        goalkeeper_position: name(&keeper.position),
        goalkeeper_body_part: name(&keeper.body_part),
        dribble_outcome: name(&dribble.outcome),
        dribble_nutmeg: dribble.nutmeg,
        dribble_overrun: dribble.overrun,
        duel_type: name(&duel.duel_type),
        duel_outcome: name(&duel.outcome),
        carry_end_location: ev.carry.and_then(|c| to_location(&c.end_location)),
        interception_outcome: ev.interception.and_then(|i| i.outcome).and_then(|o| o.name),
        clearance_body_part: name(&clearance.body_part),
        clearance_aerial_won: clearance.aerial_won,
        ball_receipt_outcome: ev.ball_receipt.and_then(|r| r.outcome).and_then(|o| o.name),
        ball_recovery_recovery_failure: ev.ball_recovery.and_then(|r| r.recovery_failure),
        block_deflection: block.deflection,
        block_offensive: block.offensive,
        block_save_block: block.save_block,
        foul_committed_card: name(&foul.card),
        foul_committed_type: name(&foul.foul_type),
        foul_committed_advantage: foul.advantage,
        foul_committed_penalty: foul.penalty,
        foul_won_defensive: foul_won.defensive,
        foul_won_advantage: foul_won.advantage,
        foul_won_penalty: foul_won.penalty,
        fifty_fifty_outcome: ev.fifty_fifty.and_then(|f| f.outcome).and_then(|o| o.name),
        bad_behaviour_card: ev.bad_behaviour.and_then(|b| b.card).and_then(|c| c.name),
        miscontrol_aerial_won: ev.miscontrol.and_then(|m| m.aerial_won),
        substitution_outcome: name(&substitution.outcome),
        substitution_replacement: name(&substitution.replacement),
        tactics_formation: ev.tactics.and_then(|t| t.formation).map(formation_code),
    }
}

/// `433` → `"4-3-3"`, `4231` → `"4-2-3-1"`.
pub fn formation_code(raw: u32) -> String {
    raw.to_string()
        .chars()
        .map(String::from)
        .collect::<Vec<_>>()
        .join("-")
}

fn name(r: &Option<SbRef>) -> Option<String> {
    r.as_ref().and_then(|r| r.name.clone())
}

fn to_location(raw: &Option<Vec<f64>>) -> Option<Location> {
    match raw.as_deref() {
        Some([x, y, ..]) => Some(Location::new(*x, *y)),
        _ => None,
    }
}
