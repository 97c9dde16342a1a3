use std::sync::Arc;

use igt_core::usecases::DashboardStats;

use crate::{
    cache::{QueryCache, QueryState},
    *,
};

pub async fn tours(db: &Arc<dyn Backend>, cache: &QueryCache) -> QueryState<Vec<Tour>> {
    let db = Arc::clone(db);
    cache
        .query(QueryKey::Tours, move || {
            let db = Arc::clone(&db);
            async move { db.all_tours().await }
        })
        .await
}

pub async fn featured_tours(db: &Arc<dyn Backend>, cache: &QueryCache) -> QueryState<Vec<Tour>> {
    let db = Arc::clone(db);
    cache
        .query(QueryKey::FeaturedTours, move || {
            let db = Arc::clone(&db);
            async move { usecases::load_featured_tours(&*db).await }
        })
        .await
}

/// Missing tours are not cached.
pub async fn tour(db: &Arc<dyn Backend>, cache: &QueryCache, id: &Id) -> QueryState<Option<Tour>> {
    let db = Arc::clone(db);
    let key = QueryKey::Tour(id.clone());
    let id = id.clone();
    let state = cache
        .query(key.clone(), move || {
            let db = Arc::clone(&db);
            let id = id.clone();
            async move { usecases::load_tour(&*db, &id).await }
        })
        .await;
    if matches!(state, QueryState::Data(None)) {
        cache.remove(&key);
    }
    state
}

pub async fn admin_tours(db: &Arc<dyn Backend>, cache: &QueryCache) -> QueryState<Vec<Tour>> {
    let db = Arc::clone(db);
    cache
        .query(QueryKey::AdminTours, move || {
            let db = Arc::clone(&db);
            async move { db.admin_tours().await }
        })
        .await
}

pub async fn operators(db: &Arc<dyn Backend>, cache: &QueryCache) -> QueryState<Vec<Operator>> {
    let db = Arc::clone(db);
    cache
        .query(QueryKey::Operators, move || {
            let db = Arc::clone(&db);
            async move { db.all_operators().await }
        })
        .await
}

pub async fn active_operators(
    db: &Arc<dyn Backend>,
    cache: &QueryCache,
) -> QueryState<Vec<OperatorRef>> {
    let db = Arc::clone(db);
    cache
        .query(QueryKey::ActiveOperators, move || {
            let db = Arc::clone(&db);
            async move { db.active_operators().await }
        })
        .await
}

pub async fn enquiries(db: &Arc<dyn Backend>, cache: &QueryCache) -> QueryState<Vec<Enquiry>> {
    let db = Arc::clone(db);
    cache
        .query(QueryKey::Enquiries, move || {
            let db = Arc::clone(&db);
            async move { db.all_enquiries().await }
        })
        .await
}

pub async fn dashboard_stats(db: &Arc<dyn Backend>, cache: &QueryCache) -> QueryState<DashboardStats> {
    let db = Arc::clone(db);
    cache
        .query(QueryKey::DashboardStats, move || {
            let db = Arc::clone(&db);
            async move { usecases::dashboard_stats(&*db).await }
        })
        .await
}
