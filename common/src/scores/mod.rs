mod score_record;
mod score_store;

pub use score_record::ScoreRecord;
pub use score_store::{SCORES_KEY, ScoreStore, StoredScores};
