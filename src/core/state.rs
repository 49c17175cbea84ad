//! Battle state: both combatants, turn bookkeeping and the match log.
//!
//! ## BattleState
//!
//! An immutable value. The turn engine never edits a state in place; each
//! resolved attack produces a fresh `BattleState` and the previous one stays
//! valid. The textual log and the structured history use `im` persistent
//! vectors, so the fresh state shares them with its predecessor instead of
//! copying them.
//!
//! Invariants:
//! - while ongoing, `active` is the id of exactly one of the two combatants
//! - health and mana stay within `[0, max]`
//! - `round` increases by one each time control returns to combatant A
//! - `status` goes ongoing → finished at most once
//! - `winner` is `Some` iff `status` is finished

use im::Vector;
use serde::{Deserialize, Serialize};

use super::attack::Attack;
use super::combatant::{Combatant, CombatantId};
use super::quiz::AnsweredQuiz;
use crate::damage::DamageTier;

/// Whether a match is still running.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BattleStatus {
    #[default]
    Ongoing,
    Finished,
}

/// The two seats of a match. Combatant A always opens.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Seat {
    A,
    B,
}

impl Seat {
    /// The other seat.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Seat::A => Seat::B,
            Seat::B => Seat::A,
        }
    }
}

/// Structured record of one resolved turn.
///
/// Carries everything needed to re-apply the turn to the preceding state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// Round in which the turn was taken.
    pub round: u32,
    pub attacker: CombatantId,
    pub defender: CombatantId,

    /// The attack as played, which need not be in the attacker's catalog.
    pub attack: Attack,

    /// Quiz inputs, for quiz-gated attacks.
    pub quiz: Option<AnsweredQuiz>,

    /// Damage dealt before health clamping.
    pub damage: u32,

    /// Damage tier, for quiz-gated attacks.
    pub tier: Option<DamageTier>,
}

/// Complete state of one match.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BattleState {
    combatant_a: Combatant,
    combatant_b: Combatant,

    /// Combatant whose turn it is.
    active: CombatantId,

    /// Round number (starts at 1).
    round: u32,

    /// Human-readable turn summaries, oldest first.
    log: Vector<String>,

    /// Structured turn history, parallel to `log`.
    history: Vector<TurnRecord>,

    status: BattleStatus,
    winner: Option<CombatantId>,
}

impl BattleState {
    /// Create the opening state of a match. Combatant A acts first.
    ///
    /// Combatants are taken as given; `MatchCoordinator::start_match`
    /// is responsible for resetting their vitals and validating ids.
    #[must_use]
    pub(crate) fn new(combatant_a: Combatant, combatant_b: Combatant) -> Self {
        let active = combatant_a.id;
        Self {
            combatant_a,
            combatant_b,
            active,
            round: 1,
            log: Vector::new(),
            history: Vector::new(),
            status: BattleStatus::Ongoing,
            winner: None,
        }
    }

    // === Combatants ===

    /// The combatant in the opening seat.
    #[must_use]
    pub fn combatant_a(&self) -> &Combatant {
        &self.combatant_a
    }

    /// The combatant in the second seat.
    #[must_use]
    pub fn combatant_b(&self) -> &Combatant {
        &self.combatant_b
    }

    /// Which seat a combatant occupies, if it is part of this match.
    #[must_use]
    pub fn seat_of(&self, id: CombatantId) -> Option<Seat> {
        if self.combatant_a.id == id {
            Some(Seat::A)
        } else if self.combatant_b.id == id {
            Some(Seat::B)
        } else {
            None
        }
    }

    /// The combatant in a seat.
    #[must_use]
    pub fn seat(&self, seat: Seat) -> &Combatant {
        match seat {
            Seat::A => &self.combatant_a,
            Seat::B => &self.combatant_b,
        }
    }

    pub(crate) fn seat_mut(&mut self, seat: Seat) -> &mut Combatant {
        match seat {
            Seat::A => &mut self.combatant_a,
            Seat::B => &mut self.combatant_b,
        }
    }

    /// Look up a combatant by id.
    #[must_use]
    pub fn combatant(&self, id: CombatantId) -> Option<&Combatant> {
        self.seat_of(id).map(|seat| self.seat(seat))
    }

    /// The combatant whose turn it is.
    #[must_use]
    pub fn active_combatant(&self) -> &Combatant {
        if self.active == self.combatant_b.id {
            &self.combatant_b
        } else {
            &self.combatant_a
        }
    }

    // === Turn Bookkeeping ===

    /// Id of the combatant whose turn it is.
    #[must_use]
    pub fn active_combatant_id(&self) -> CombatantId {
        self.active
    }

    /// Current round (starts at 1).
    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Hand control to a seat, advancing the round when it returns to A.
    pub(crate) fn pass_turn_to(&mut self, seat: Seat) {
        self.active = self.seat(seat).id;
        if seat == Seat::A {
            self.round += 1;
        }
    }

    // === Status ===

    #[must_use]
    pub fn status(&self) -> BattleStatus {
        self.status
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.status == BattleStatus::Finished
    }

    /// The winner, once the match is finished.
    #[must_use]
    pub fn winner_id(&self) -> Option<CombatantId> {
        self.winner
    }

    /// Close the match. Has no effect on an already finished match.
    pub(crate) fn finish(&mut self, winner: CombatantId) {
        if self.status == BattleStatus::Ongoing {
            self.status = BattleStatus::Finished;
            self.winner = Some(winner);
        }
    }

    // === Log ===

    /// Turn summaries, oldest first.
    #[must_use]
    pub fn log(&self) -> &Vector<String> {
        &self.log
    }

    /// Structured turn history, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<TurnRecord> {
        &self.history
    }

    pub(crate) fn record_turn(&mut self, summary: String, record: TurnRecord) {
        self.log.push_back(summary);
        self.history.push_back(record);
    }
}
