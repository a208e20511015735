use crate::config::{ConfigSerializer, ContentProvider, YamlConfigSerializer};
use crate::error::MoveError;
use crate::log;
use crate::scores::{ScoreRecord, ScoreStore, StoredScores};
use super::game_state::GameState;
use super::observer::GameObserver;
use super::types::MoveResult;

/// One table: the current round plus the running score.
///
/// Finished rounds are counted exactly once, since the engine rejects every
/// move after the round ends.
pub struct GameSession<TContentProvider, TSerializer = YamlConfigSerializer>
where
    TContentProvider: ContentProvider,
    TSerializer: ConfigSerializer<StoredScores>,
{
    state: GameState,
    scores: ScoreStore<TContentProvider, TSerializer>,
    observers: Vec<Box<dyn GameObserver>>,
}

impl<TContentProvider, TSerializer> GameSession<TContentProvider, TSerializer>
where
    TContentProvider: ContentProvider,
    TSerializer: ConfigSerializer<StoredScores>,
{
    pub fn new(scores: ScoreStore<TContentProvider, TSerializer>) -> Self {
        Self {
            state: GameState::new(),
            scores,
            observers: Vec::new(),
        }
    }

    pub fn subscribe(&mut self, observer: Box<dyn GameObserver>) {
        self.observers.push(observer);
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn scores(&self) -> ScoreRecord {
        self.scores.record()
    }

    pub fn score_store(&self) -> &ScoreStore<TContentProvider, TSerializer> {
        &self.scores
    }

    /// Announces the initial round and scores to every observer.
    pub fn start(&mut self) {
        log!("New game started, {} to move", self.state.current_turn());
        let scores = self.scores.record();
        for observer in self.observers.iter_mut() {
            observer.on_scores_changed(&scores);
            observer.on_new_game(&self.state);
        }
    }

    pub fn submit_move(&mut self, cell: usize) -> Result<MoveResult, MoveError> {
        let player = self.state.current_turn();
        let result = match self.state.place_mark(cell) {
            Ok(result) => result,
            Err(e) => {
                for observer in self.observers.iter_mut() {
                    observer.on_invalid_move(cell, &e);
                }
                return Err(e);
            }
        };

        log!("{} marked cell {}", player, cell);
        for observer in self.observers.iter_mut() {
            observer.on_move(&self.state, cell, &result);
        }

        if let Some(outcome) = result.outcome() {
            log!("Game over: {:?}", outcome);
            let scores = self.scores.record_outcome(outcome);
            for observer in self.observers.iter_mut() {
                observer.on_scores_changed(&scores);
            }
        }

        Ok(result)
    }

    /// Starts a fresh round. Scores are untouched.
    pub fn restart(&mut self) {
        self.state = GameState::new();
        log!("New game started, {} to move", self.state.current_turn());
        for observer in self.observers.iter_mut() {
            observer.on_new_game(&self.state);
        }
    }

    pub fn reset_scores(&mut self) -> ScoreRecord {
        let scores = self.scores.reset();
        for observer in self.observers.iter_mut() {
            observer.on_scores_changed(&scores);
        }
        scores
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use crate::config::MemoryContentProvider;
    use crate::games::tictactoe::{GameOutcome, GameStatus, Player};

    #[derive(Debug, Clone, PartialEq)]
    enum Event {
        NewGame,
        Move(usize, MoveResult),
        Invalid(usize, MoveError),
        Scores(ScoreRecord),
    }

    #[derive(Clone, Default)]
    struct Recorder {
        events: Arc<Mutex<Vec<Event>>>,
    }

    impl Recorder {
        fn take(&self) -> Vec<Event> {
            std::mem::take(&mut *self.events.lock().unwrap())
        }
    }

    impl GameObserver for Recorder {
        fn on_new_game(&mut self, _state: &GameState) {
            self.events.lock().unwrap().push(Event::NewGame);
        }

        fn on_move(&mut self, _state: &GameState, cell: usize, result: &MoveResult) {
            self.events.lock().unwrap().push(Event::Move(cell, *result));
        }

        fn on_invalid_move(&mut self, cell: usize, error: &MoveError) {
            self.events.lock().unwrap().push(Event::Invalid(cell, *error));
        }

        fn on_scores_changed(&mut self, scores: &ScoreRecord) {
            self.events.lock().unwrap().push(Event::Scores(*scores));
        }
    }

    fn create_session(provider: &MemoryContentProvider) -> (GameSession<MemoryContentProvider>, Recorder) {
        let store = ScoreStore::open(provider.clone(), YamlConfigSerializer::new());
        let mut session = GameSession::new(store);
        let recorder = Recorder::default();
        session.subscribe(Box::new(recorder.clone()));
        (session, recorder)
    }

    #[test]
    fn test_start_announces_scores_and_board() {
        let provider = MemoryContentProvider::new();
        let (mut session, recorder) = create_session(&provider);
        session.start();
        assert_eq!(recorder.take(), vec![Event::Scores(ScoreRecord::default()), Event::NewGame]);
    }

    #[test]
    fn test_win_is_recorded_once() {
        let provider = MemoryContentProvider::new();
        let (mut session, recorder) = create_session(&provider);

        for cell in [0, 3, 1, 4] {
            session.submit_move(cell).unwrap();
        }
        recorder.take();

        let result = session.submit_move(2).unwrap();
        assert_eq!(result, MoveResult::Win { winner: Player::O, line: [0, 1, 2] });
        assert_eq!(
            recorder.take(),
            vec![Event::Move(2, result), Event::Scores(ScoreRecord::new(1, 0, 0))]
        );

        assert_eq!(session.submit_move(5), Err(MoveError::GameOver));
        assert_eq!(recorder.take(), vec![Event::Invalid(5, MoveError::GameOver)]);
        assert_eq!(session.scores(), ScoreRecord::new(1, 0, 0));

        let reopened = ScoreStore::open(provider.clone(), YamlConfigSerializer::new());
        assert_eq!(reopened.record(), ScoreRecord::new(1, 0, 0));
    }

    #[test]
    fn test_draw_is_recorded() {
        let provider = MemoryContentProvider::new();
        let (mut session, _recorder) = create_session(&provider);
        let mut last = None;
        for cell in [1, 0, 3, 2, 5, 4, 6, 7, 8] {
            last = Some(session.submit_move(cell).unwrap());
        }
        assert_eq!(last.and_then(|r| r.outcome()), Some(GameOutcome::Draw));
        assert_eq!(session.scores(), ScoreRecord::new(0, 0, 1));
    }

    #[test]
    fn test_restart_keeps_scores() {
        let provider = MemoryContentProvider::new();
        let (mut session, recorder) = create_session(&provider);
        for cell in [0, 3, 1, 4, 2] {
            session.submit_move(cell).unwrap();
        }
        recorder.take();

        session.restart();
        assert_eq!(session.state(), &GameState::new());
        assert_eq!(session.state().status(), GameStatus::InProgress);
        assert_eq!(session.scores(), ScoreRecord::new(1, 0, 0));
        assert_eq!(recorder.take(), vec![Event::NewGame]);
    }

    #[test]
    fn test_reset_scores_notifies_and_persists() {
        let provider = MemoryContentProvider::with_content("tictactoeScores:\n  O: 2\n  X: 2\n  draw: 2\n");
        let (mut session, recorder) = create_session(&provider);
        assert_eq!(session.scores(), ScoreRecord::new(2, 2, 2));

        assert_eq!(session.reset_scores(), ScoreRecord::default());
        assert_eq!(recorder.take(), vec![Event::Scores(ScoreRecord::default())]);
        let reopened = ScoreStore::open(provider.clone(), YamlConfigSerializer::new());
        assert_eq!(reopened.record(), ScoreRecord::default());
    }

    #[test]
    fn test_storage_outage_does_not_interrupt_play() {
        let provider = MemoryContentProvider::new();
        let (mut session, _recorder) = create_session(&provider);
        provider.set_fail_writes(true);

        for cell in [0, 3, 1, 4, 2] {
            session.submit_move(cell).unwrap();
        }
        assert_eq!(session.scores(), ScoreRecord::new(1, 0, 0));
        assert!(session.score_store().is_dirty());
    }
}
