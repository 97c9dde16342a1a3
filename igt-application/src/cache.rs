//! Process wide cache for the results of read queries.
//!
//! Every [`QueryKey`] owns at most one slot. A slot either holds the
//! value of the last successful fetch or a single in-flight request
//! that all concurrent readers share. Failed fetches are never stored.
//!
//! Invalidation replaces the value of all matching slots by a new
//! request. It is driven in the background when a Tokio runtime is
//! available, otherwise by the next reader. Slots of single records
//! are dropped instead and fetched again on demand.

use std::{
    any::Any,
    collections::HashMap,
    fmt,
    future::Future,
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    },
};

use futures_util::future::{BoxFuture, FutureExt, Shared};
use parking_lot::Mutex;
use tokio::runtime::Handle;

use crate::{QueryKey, Table};

/// Outcome of a read query as presented to a view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryState<T> {
    Loading,
    Error(String),
    Data(T),
}

impl<T> QueryState<T> {
    pub fn data(self) -> Option<T> {
        match self {
            Self::Data(data) => Some(data),
            _ => None,
        }
    }

    pub fn as_data(&self) -> Option<&T> {
        match self {
            Self::Data(data) => Some(data),
            _ => None,
        }
    }
}

type Value = Arc<dyn Any + Send + Sync>;
type FetchResult = Result<Value, String>;
type InFlight = Shared<BoxFuture<'static, FetchResult>>;
type Fetch = Arc<dyn Fn() -> BoxFuture<'static, FetchResult> + Send + Sync>;

enum Slot {
    Ready(Value),
    Pending(InFlight),
}

struct Entry {
    generation: u64,
    slot: Slot,
    fetch: Fetch,
}

#[derive(Default)]
struct Inner {
    entries: Mutex<HashMap<QueryKey, Entry>>,
    generations: AtomicU64,
}

#[derive(Clone, Default)]
pub struct QueryCache(Arc<Inner>);

impl fmt::Debug for QueryCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueryCache")
            .field("entries", &self.len())
            .finish()
    }
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read through the cache.
    ///
    /// The `fetch` function is only invoked if there is neither
    /// a cached value nor a pending request for this key.
    pub async fn query<T, E, F, Fut>(&self, key: QueryKey, fetch: F) -> QueryState<T>
    where
        T: Clone + Send + Sync + 'static,
        E: fmt::Display,
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<T, E>> + Send + 'static,
    {
        let (generation, pending) = {
            let mut entries = self.0.entries.lock();
            match entries.get(&key) {
                Some(Entry {
                    slot: Slot::Ready(value),
                    ..
                }) => {
                    trace!("Cache hit: {key:?}");
                    return downcast(&key, value);
                }
                Some(Entry {
                    slot: Slot::Pending(pending),
                    generation,
                    ..
                }) => {
                    debug!("Waiting for pending request: {key:?}");
                    (*generation, pending.clone())
                }
                None => {
                    debug!("Cache miss: {key:?}");
                    let fetch = erase(fetch);
                    let pending = fetch().shared();
                    let generation = self.next_generation();
                    entries.insert(
                        key.clone(),
                        Entry {
                            generation,
                            slot: Slot::Pending(pending.clone()),
                            fetch,
                        },
                    );
                    (generation, pending)
                }
            }
        };
        let result = pending.await;
        self.settle(&key, generation, &result);
        match result {
            Ok(value) => downcast(&key, &value),
            Err(msg) => QueryState::Error(msg),
        }
    }

    /// The cached value without triggering a request.
    pub fn peek<T>(&self, key: &QueryKey) -> QueryState<T>
    where
        T: Clone + 'static,
    {
        match self.0.entries.lock().get(key) {
            Some(Entry {
                slot: Slot::Ready(value),
                ..
            }) => downcast(key, value),
            _ => QueryState::Loading,
        }
    }

    /// Mark all matching entries as stale and request them again.
    pub fn invalidate(&self, predicate: impl Fn(&QueryKey) -> bool) {
        let runtime = Handle::try_current().ok();
        let mut entries = self.0.entries.lock();
        entries.retain(|key, _| {
            let evict = key.is_record() && predicate(key);
            if evict {
                debug!("Evicting {key:?}");
            }
            !evict
        });
        for (key, entry) in entries.iter_mut().filter(|(key, _)| predicate(key)) {
            debug!("Invalidating {key:?}");
            let pending = (entry.fetch)().shared();
            let generation = self.next_generation();
            entry.generation = generation;
            entry.slot = Slot::Pending(pending.clone());
            if let Some(runtime) = &runtime {
                let cache = self.clone();
                let key = key.clone();
                runtime.spawn(async move {
                    let result = pending.await;
                    cache.settle(&key, generation, &result);
                });
            }
        }
    }

    /// Invalidate all queries that read from the given tables.
    pub fn invalidate_tables(&self, tables: &[Table]) {
        self.invalidate(|key| tables.iter().any(|table| key.reads(*table)));
    }

    /// Forget the entry of a key.
    ///
    /// A pending request of the key still completes for its current
    /// readers but its result is not stored.
    pub fn remove(&self, key: &QueryKey) {
        self.0.entries.lock().remove(key);
    }

    pub fn len(&self) -> usize {
        self.0.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.entries.lock().is_empty()
    }

    fn next_generation(&self) -> u64 {
        self.0.generations.fetch_add(1, Ordering::Relaxed)
    }

    // Results of outdated requests are discarded.
    fn settle(&self, key: &QueryKey, generation: u64, result: &FetchResult) {
        let mut entries = self.0.entries.lock();
        let Some(entry) = entries.get_mut(key) else {
            return;
        };
        if entry.generation != generation || !matches!(entry.slot, Slot::Pending(_)) {
            return;
        }
        match result {
            Ok(value) => {
                entry.slot = Slot::Ready(Arc::clone(value));
            }
            Err(msg) => {
                warn!("Request {key:?} failed: {msg}");
                entries.remove(key);
            }
        }
    }
}

fn erase<T, E, F, Fut>(fetch: F) -> Fetch
where
    T: Send + Sync + 'static,
    E: fmt::Display,
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<T, E>> + Send + 'static,
{
    Arc::new(move || {
        let request = fetch();
        async move {
            request
                .await
                .map(|data| Arc::new(data) as Value)
                .map_err(|err| err.to_string())
        }
        .boxed()
    })
}

fn downcast<T>(key: &QueryKey, value: &Value) -> QueryState<T>
where
    T: Clone + 'static,
{
    match (**value).downcast_ref::<T>() {
        Some(data) => QueryState::Data(data.clone()),
        None => {
            error!("Cached value of {key:?} has an unexpected type");
            QueryState::Error(format!("Unexpected result for {key:?}"))
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{
        sync::atomic::{AtomicUsize, Ordering},
        time::Duration,
    };

    use super::*;

    type Calls = Arc<AtomicUsize>;

    fn counting(calls: &Calls, value: u32) -> impl Fn() -> BoxFuture<'static, Result<u32, String>> {
        let calls = Arc::clone(calls);
        move || {
            let n = calls.fetch_add(1, Ordering::SeqCst) as u32;
            async move { Ok(value + n) }.boxed()
        }
    }

    #[tokio::test]
    async fn reuse_cached_value() {
        let cache = QueryCache::new();
        let calls = Calls::default();
        assert_eq!(
            cache.query(QueryKey::Operators, counting(&calls, 10)).await,
            QueryState::Data(10)
        );
        assert_eq!(
            cache.query(QueryKey::Operators, counting(&calls, 20)).await,
            QueryState::Data(10)
        );
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(cache.peek::<u32>(&QueryKey::Operators), QueryState::Data(10));
    }

    #[tokio::test]
    async fn share_a_single_pending_request() {
        let cache = QueryCache::new();
        let calls = Calls::default();
        let slow = {
            let calls = Arc::clone(&calls);
            move || {
                calls.fetch_add(1, Ordering::SeqCst);
                async {
                    tokio::time::sleep(Duration::from_millis(20)).await;
                    Ok::<_, String>("tours")
                }
            }
        };
        let (a, b) = tokio::join!(
            cache.query(QueryKey::Tours, slow.clone()),
            cache.query(QueryKey::Tours, slow)
        );
        assert_eq!(a, QueryState::Data("tours"));
        assert_eq!(b, QueryState::Data("tours"));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn keys_are_cached_separately() {
        let cache = QueryCache::new();
        let calls = Calls::default();
        cache.query(QueryKey::Tour("a".into()), counting(&calls, 0)).await;
        cache.query(QueryKey::Tour("b".into()), counting(&calls, 0)).await;
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn peek_before_first_fetch() {
        let cache = QueryCache::new();
        assert_eq!(cache.peek::<u32>(&QueryKey::Enquiries), QueryState::Loading);
    }

    #[tokio::test]
    async fn refetch_invalidated_entries() {
        let cache = QueryCache::new();
        let calls = Calls::default();
        cache.query(QueryKey::Operators, counting(&calls, 0)).await;
        cache.query(QueryKey::Enquiries, counting(&calls, 100)).await;
        assert_eq!(calls.load(Ordering::SeqCst), 2);

        cache.invalidate_tables(&[Table::Operators]);

        // The stored fetch function of the entry is used again
        assert_eq!(
            cache.query(QueryKey::Operators, counting(&calls, 50)).await,
            QueryState::Data(2)
        );
        assert_eq!(
            cache.query(QueryKey::Enquiries, counting(&calls, 0)).await,
            QueryState::Data(101)
        );
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn refetch_in_background() {
        let cache = QueryCache::new();
        let calls = Calls::default();
        cache.query(QueryKey::Operators, counting(&calls, 0)).await;
        cache.invalidate(|key| *key == QueryKey::Operators);
        for _ in 0..100 {
            if cache.peek::<u32>(&QueryKey::Operators) == QueryState::Data(1) {
                break;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        assert_eq!(cache.peek::<u32>(&QueryKey::Operators), QueryState::Data(1));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn do_not_cache_errors() {
        let cache = QueryCache::new();
        let calls = Calls::default();
        let failing = {
            let calls = Arc::clone(&calls);
            move || {
                calls.fetch_add(1, Ordering::SeqCst);
                async { Err::<u32, _>("permission denied") }
            }
        };
        assert_eq!(
            cache.query(QueryKey::Enquiries, failing.clone()).await,
            QueryState::Error("permission denied".into())
        );
        assert_eq!(cache.peek::<u32>(&QueryKey::Enquiries), QueryState::Loading);
        cache.query(QueryKey::Enquiries, failing).await;
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn evict_records_instead_of_refetching_them() {
        let cache = QueryCache::new();
        let calls = Calls::default();
        for i in 0..100 {
            cache
                .query(QueryKey::Tour(format!("t{i}").into()), counting(&calls, 0))
                .await;
        }
        cache.query(QueryKey::Tours, counting(&calls, 0)).await;
        assert_eq!(cache.len(), 101);
        assert_eq!(calls.load(Ordering::SeqCst), 101);

        cache.invalidate_tables(&[Table::Tours]);

        assert_eq!(cache.len(), 1);
        assert_eq!(calls.load(Ordering::SeqCst), 102);
        assert_eq!(
            cache.peek::<u32>(&QueryKey::Tour("t1".into())),
            QueryState::Loading
        );
    }

    #[tokio::test]
    async fn removed_entries_are_fetched_again() {
        let cache = QueryCache::new();
        let calls = Calls::default();
        cache.query(QueryKey::Operators, counting(&calls, 0)).await;
        cache.remove(&QueryKey::Operators);
        assert!(cache.is_empty());
        assert_eq!(
            cache.query(QueryKey::Operators, counting(&calls, 0)).await,
            QueryState::Data(1)
        );
    }

    #[tokio::test]
    async fn report_type_mismatch_as_error() {
        let cache = QueryCache::new();
        let calls = Calls::default();
        cache.query(QueryKey::Tours, counting(&calls, 0)).await;
        assert!(matches!(
            cache.peek::<String>(&QueryKey::Tours),
            QueryState::Error(_)
        ));
    }
}
