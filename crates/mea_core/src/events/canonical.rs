//! Canonical event shapes.
//!
//! The classifier produces exactly one canonical struct per semantic kind;
//! downstream components never look at raw records or re-derive a kind.
//! Canonical events keep `Option` where the distinction between "absent" and
//! "zero" still matters downstream (timestamps gate temporal correlation,
//! zones gate spatial aggregation, explicit xT fields gate the fallback
//! chain); everything else is defaulted here, once.

use crate::filter::OutcomeFlag;
use crate::pitch::Zone;
use serde::{Deserialize, Serialize};

pub type TeamId = String;
pub type PlayerId = String;

/// Pass vs. dribble.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionType {
    #[default]
    Pass,
    Dribble,
}

/// The 16 boolean outcome flags of an action: whether it reached each danger
/// tier / the penalty area / a shot / a goal, and the same judged from the
/// zone the action began in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutcomeFlags {
    pub p0: bool,
    pub p1: bool,
    pub p2: bool,
    pub p3: bool,
    pub pk: bool,
    pub shot: bool,
    pub goal: bool,
    pub p0_start: bool,
    pub p1_start: bool,
    pub p2_start: bool,
    pub p3_start: bool,
    pub pk_start: bool,
    pub shot_start: bool,
    pub goal_start: bool,
}

impl OutcomeFlags {
    /// Lookup by the filter enum used in dashboard queries.
    pub fn has(&self, flag: OutcomeFlag) -> bool {
        match flag {
            OutcomeFlag::P0 => self.p0,
            OutcomeFlag::P1 => self.p1,
            OutcomeFlag::P2 => self.p2,
            OutcomeFlag::P3 => self.p3,
            OutcomeFlag::P0Start => self.p0_start,
            OutcomeFlag::P1Start => self.p1_start,
            OutcomeFlag::P2Start => self.p2_start,
            OutcomeFlag::P3Start => self.p3_start,
            OutcomeFlag::Pk => self.pk,
            OutcomeFlag::Shot => self.shot,
            OutcomeFlag::Goal => self.goal,
        }
    }
}

/// One on-ball touch of the analyzed team.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActionEvent {
    pub minute: f64,
    /// Seconds into the match video; `None` excludes the action from
    /// temporal correlation only.
    pub timestamp: Option<f64>,
    pub start_zone: Option<Zone>,
    pub end_zone: Option<Zone>,
    pub sender: Option<PlayerId>,
    pub receiver: Option<PlayerId>,
    pub team: Option<TeamId>,
    /// Opposing players bypassed; 0 when untagged.
    pub packing: i64,
    /// Explicit start-zone xT when the tagging tool wrote one.
    pub xt_start: Option<f64>,
    pub xt_end: Option<f64>,
    pub action_type: ActionType,
    pub outcomes: OutcomeFlags,
}

/// Reaction quality after a loss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Reaction {
    /// Pressed the ball within the grace period.
    InTime,
    /// Reacted, but too late or too loosely.
    Poor,
    /// Reaction quality not applicable.
    NotApplicable,
}

/// One possession change (used for both regains and losses; the owning
/// collection inside [`MatchEvents`] carries the kind).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TurnoverEvent {
    pub minute: f64,
    pub timestamp: Option<f64>,
    /// Where possession changed, relative to the acting team.
    pub defense_zone: Option<Zone>,
    /// The mirrored location; derived from `defense_zone` when untagged.
    pub attack_zone: Option<Zone>,
    /// Explicit xT values when present; the fallback chain in
    /// [`crate::value`] derives them from the defense zone otherwise.
    pub xt_defense: Option<f64>,
    pub xt_attack: Option<f64>,
    pub team: Option<TeamId>,
    pub player: Option<PlayerId>,
    pub mates_behind_ball: Option<u32>,
    pub opponents_behind_ball: Option<u32>,
    pub reaction: Option<Reaction>,
    /// Ball left the pitch with the turnover; excluded from own-half loss
    /// counts but not from opponent-half counts.
    pub out_of_bounds: bool,
}

/// Shot outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShotOutcome {
    Goal,
    OnTarget,
    #[default]
    OffTarget,
    Blocked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShotCategory {
    #[default]
    OpenPlay,
    SetPiece,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyPart {
    #[default]
    Foot,
    Head,
    Other,
}

/// Which team an event belongs to, for records where the team id is not a
/// reliable discriminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TeamContext {
    #[default]
    Attack,
    Defense,
}

/// One shot by either team.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShotEvent {
    pub minute: f64,
    pub timestamp: Option<f64>,
    pub xg: f64,
    pub team: Option<TeamId>,
    pub context: Option<TeamContext>,
    pub outcome: ShotOutcome,
    pub body_part: BodyPart,
    pub category: ShotCategory,
    pub players_on_shot_line: Option<u32>,
}

impl ShotEvent {
    /// Whether this shot belongs to the analyzed team. The context tag wins
    /// when present; otherwise the team id decides.
    pub fn is_by(&self, team_id: &str) -> bool {
        match self.context {
            Some(TeamContext::Attack) => true,
            Some(TeamContext::Defense) => false,
            None => self.team.as_deref() == Some(team_id),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryMethod {
    #[default]
    Pass,
    Dribble,
    SetPiece,
}

/// One penalty-area entry. `team` always carries the analyzed team's id
/// regardless of context; `context` is the for/against discriminator.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AreaEntryEvent {
    pub minute: f64,
    pub timestamp: Option<f64>,
    pub team: Option<TeamId>,
    pub context: TeamContext,
    pub method: EntryMethod,
    pub led_to_regain: bool,
    pub led_to_shot: bool,
    pub led_to_goal: bool,
}

impl AreaEntryEvent {
    /// An entry counts as successful when it produced a shot or a goal.
    pub fn is_successful(&self) -> bool {
        self.led_to_shot || self.led_to_goal
    }
}

/// The classified, enriched event snapshot for one match. Immutable once
/// built; every aggregate is a pure fold over these vectors.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchEvents {
    pub actions: Vec<ActionEvent>,
    pub regains: Vec<TurnoverEvent>,
    pub losses: Vec<TurnoverEvent>,
    pub shots: Vec<ShotEvent>,
    pub entries: Vec<AreaEntryEvent>,
}
