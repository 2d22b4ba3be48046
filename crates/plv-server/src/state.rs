use std::sync::Arc;

use plv_resolver::{BatchAggregator, StateResolver};
use plv_store::{fixtures, EntityStore, HistoryLog, InMemoryEntityStore, InMemoryHistoryLog};

/// Shared handles behind the router.
///
/// Explicitly constructed and injected; there is no process-wide store
/// singleton. Any `EntityStore`/`HistoryLog` implementation plugs in here.
#[derive(Clone)]
pub struct AppState {
    pub resolver: Arc<StateResolver>,
    pub aggregator: Arc<BatchAggregator>,
    pub entities: Arc<dyn EntityStore>,
    pub history: Arc<dyn HistoryLog>,
}

impl AppState {
    pub fn new(entities: Arc<dyn EntityStore>, history: Arc<dyn HistoryLog>) -> Self {
        let resolver = StateResolver::new(entities.clone(), history.clone());
        let aggregator =
            BatchAggregator::new(StateResolver::new(entities.clone(), history.clone()));
        Self {
            resolver: Arc::new(resolver),
            aggregator: Arc::new(aggregator),
            entities,
            history,
        }
    }

    /// Empty in-memory stores.
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(InMemoryEntityStore::new()),
            Arc::new(InMemoryHistoryLog::new()),
        )
    }

    /// In-memory stores seeded with the sample floor data.
    pub fn in_memory_demo() -> Self {
        let entities = InMemoryEntityStore::new();
        let history = InMemoryHistoryLog::new();
        fixtures::seed_demo(&entities, &history);
        Self::new(Arc::new(entities), Arc::new(history))
    }
}
