// Matching engine: skill value, match scoring, gap analysis, population ranking.
// Pure synchronous computation over caller-supplied records. No I/O, no shared state.
// Handlers run ranking inside tokio::task::spawn_blocking.

pub mod gap;
pub mod handlers;
pub mod ranker;
pub mod scorer;
pub mod skill_value;

pub use gap::{skill_gap, GapReport};
pub use ranker::{rank_candidates, rank_jobs, RankOptions, Ranked};
pub use scorer::match_score;
pub use skill_value::ScoringWeights;
