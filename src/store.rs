use crate::domain::{
    action::Action,
    board::BoardState,
    engine::BoardEngine,
    ids::{IdGenerator, RandomIdGenerator},
};
use mockable::{Clock, DefaultClock};
use parking_lot::Mutex;
use tracing::debug;

/// Holds the current board snapshot and serializes read-apply-store.
///
/// Snapshots handed out by [`BoardStore::snapshot`] and
/// [`BoardStore::dispatch`] are independent values; later dispatches never
/// change them.
pub struct BoardStore<G = RandomIdGenerator, C = DefaultClock> {
    engine: BoardEngine<G, C>,
    state: Mutex<BoardState>,
}

impl BoardStore {
    pub fn new(initial: BoardState) -> Self {
        Self::with_engine(BoardEngine::default(), initial)
    }
}

impl<G: IdGenerator, C: Clock> BoardStore<G, C> {
    pub fn with_engine(engine: BoardEngine<G, C>, initial: BoardState) -> Self {
        Self {
            engine,
            state: Mutex::new(initial),
        }
    }

    pub fn snapshot(&self) -> BoardState {
        self.state.lock().clone()
    }

    /// Applies `action` to the current state and stores the result
    pub fn dispatch(&self, action: Action) -> BoardState {
        let kind = action.kind();
        let mut state = self.state.lock();
        let next = self.engine.apply(&state, action);
        let changed = next != *state;

        debug!(
            action = kind,
            changed,
            columns = next.columns().len(),
            tickets = next.tickets().len(),
            "Dispatched board action"
        );

        *state = next.clone();
        next
    }
}
