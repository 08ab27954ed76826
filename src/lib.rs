//! Bestiary - rank monsters by simulated one-on-one combat.
//!
//! Records come from a [`source::RecordSource`], bouts are fought on private
//! copies by [`combat`], and [`ranking`] turns bout outcomes into an order.

pub mod build_info;
pub mod combat;
pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod monster;
pub mod ranking;
pub mod report;
pub mod source;

pub use combat::{compute_damage, fight, resolve, BoutOutcome, CombatState, Side};
pub use config::RankConfig;
pub use error::{Result, RosterError};
pub use monster::{builtin_roster, MonsterRecord, Roster};
pub use ranking::{rank, rank_pairwise, Ranking, Strategy};
pub use report::RankReport;
pub use source::{load_or_empty, BuiltinRoster, RecordSource, RosterFile};
