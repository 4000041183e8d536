//! Raw store records.
//!
//! The remote document store serves whatever the tagging tool wrote, and the
//! tool's schema drifted over seasons: camelCase field names, renamed flags,
//! and one list reused for both regains and losses depending on how the match
//! was tagged. Everything here is `Option` + `#[serde(default)]` so a record
//! from any schema generation decodes without error; the classifier in
//! [`super::classify`] turns these into the canonical tagged shapes.
//!
//! Missing numeric fields default to 0 downstream, missing flags to false;
//! nothing in this module validates. Unknown extra fields are ignored.

use serde::Deserialize;

/// One on-ball packing action (pass or dribble) as stored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawActionRecord {
    pub minute: Option<f64>,
    /// Seconds into the match video. Older exports called it `videoTimestamp`.
    #[serde(alias = "videoTimestamp")]
    pub timestamp: Option<f64>,
    #[serde(alias = "zoneStart")]
    pub start_zone: Option<String>,
    #[serde(alias = "zoneEnd")]
    pub end_zone: Option<String>,
    #[serde(alias = "playerId")]
    pub sender_id: Option<String>,
    pub receiver_id: Option<String>,
    pub team_id: Option<String>,
    /// Opposing players bypassed by the action.
    #[serde(alias = "packingPoints")]
    pub packing: Option<i64>,
    #[serde(alias = "xtStart")]
    pub xt_start: Option<f64>,
    #[serde(alias = "xtEnd")]
    pub xt_end: Option<f64>,
    /// `"pass"` or `"dribble"`; very old exports used a boolean instead.
    #[serde(alias = "type")]
    pub action_type: Option<String>,
    pub is_dribble: Option<bool>,

    // Outcome flags for the zone the action ENDED in...
    pub p0: Option<bool>,
    pub p1: Option<bool>,
    pub p2: Option<bool>,
    pub p3: Option<bool>,
    #[serde(alias = "penaltyArea")]
    pub pk: Option<bool>,
    pub shot: Option<bool>,
    pub goal: Option<bool>,
    // ...and for the zone it STARTED in.
    pub p0_start: Option<bool>,
    pub p1_start: Option<bool>,
    pub p2_start: Option<bool>,
    pub p3_start: Option<bool>,
    #[serde(alias = "penaltyAreaStart")]
    pub pk_start: Option<bool>,
    pub shot_start: Option<bool>,
    pub goal_start: Option<bool>,
}

/// One possession change as stored. The same record shape backs both the
/// regain and the loss collections; which kind a record is can only be
/// decided per record, never from the collection it arrived in.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawTurnoverRecord {
    /// Explicit kind tag when the tagging tool wrote one: `"regain"`,
    /// `"loses"`, `"lose"` or `"loss"`.
    #[serde(alias = "type", alias = "eventType")]
    pub tag: Option<String>,
    pub minute: Option<f64>,
    #[serde(alias = "videoTimestamp")]
    pub timestamp: Option<f64>,
    /// Where possession changed, relative to the acting team. Early exports
    /// stored it simply as `zone`.
    #[serde(alias = "zone")]
    pub defense_zone: Option<String>,
    pub attack_zone: Option<String>,
    #[serde(alias = "xt")]
    pub xt_defense: Option<f64>,
    pub xt_attack: Option<f64>,
    pub team_id: Option<String>,
    pub player_id: Option<String>,
    /// Teammates goal-side of the ball when possession changed.
    #[serde(alias = "teammatesBehindBall")]
    pub mates_behind_ball: Option<u32>,
    pub opponents_behind_ball: Option<u32>,
    /// Reaction within the grace period after a loss.
    #[serde(alias = "reactedInTime")]
    pub reacted: Option<bool>,
    /// Reacted, but too late or too loosely. `badReaction` is the legacy
    /// spelling and means the same thing.
    #[serde(alias = "badReaction")]
    pub reacted_poorly: Option<bool>,
    /// Reaction quality not applicable (e.g. ball immediately dead).
    pub not_applicable: Option<bool>,
    /// Ball left the pitch with the turnover; excluded from own-half counts.
    pub out_of_bounds: Option<bool>,
}

/// One shot as stored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawShotRecord {
    pub minute: Option<f64>,
    #[serde(alias = "videoTimestamp")]
    pub timestamp: Option<f64>,
    #[serde(alias = "xG", alias = "expectedGoals")]
    pub xg: Option<f64>,
    #[serde(alias = "team")]
    pub team_id: Option<String>,
    /// `"attack"` (our shot) or `"defense"` (conceded). Some exports carry
    /// only this and no usable team id.
    #[serde(alias = "context")]
    pub team_context: Option<String>,
    /// `"goal"`, `"onTarget"`, `"offTarget"` or `"blocked"`.
    pub outcome: Option<String>,
    pub body_part: Option<String>,
    /// `"openPlay"` vs `"setPiece"`; legacy exports wrote `"sfg"` for
    /// set-piece-originated attacks.
    pub category: Option<String>,
    /// Opposing players between ball and goal at release.
    #[serde(alias = "playersOnLine")]
    pub players_on_shot_line: Option<u32>,
}

/// One penalty-area entry as stored.
///
/// The tagging tool always writes the ANALYZED team's id into `teamId`, even
/// for entries conceded; `teamContext` is the only reliable for/against
/// discriminator.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawEntryRecord {
    pub minute: Option<f64>,
    #[serde(alias = "videoTimestamp")]
    pub timestamp: Option<f64>,
    pub team_id: Option<String>,
    /// `"attack"` = our entry, `"defense"` = conceded.
    #[serde(alias = "context")]
    pub team_context: Option<String>,
    /// `"pass"`, `"dribble"` or `"setPiece"`.
    pub method: Option<String>,
    #[serde(alias = "regain")]
    pub led_to_regain: Option<bool>,
    #[serde(alias = "shot")]
    pub led_to_shot: Option<bool>,
    #[serde(alias = "goal")]
    pub led_to_goal: Option<bool>,
}
