use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use crate::catalog::Catalog;
use crate::models::job::{JobFilters, JobPosting, JobsPage};

/// Async query boundary over the catalog, with an optional artificial
/// latency so the service can mimic a remote backend. Queries are pure
/// reads; the latency is the only thing the clock buys.
#[derive(Clone)]
pub struct CatalogClient {
    catalog: Arc<Catalog>,
    latency: Duration,
}

impl CatalogClient {
    pub fn new(catalog: Arc<Catalog>, latency: Duration) -> Self {
        Self { catalog, latency }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub async fn list_jobs(&self, filters: &JobFilters, page: u32) -> JobsPage {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        self.catalog.list(filters, page)
    }

    /// Single-item lookups answer at half the list latency.
    pub async fn get_job(&self, id: &str) -> Option<JobPosting> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency / 2).await;
        }
        self.catalog.get(id).cloned()
    }
}

/// Last-request-wins guard for in-flight list queries.
///
/// A caller may change criteria while an earlier query is still
/// suspended on the latency boundary. Each query is stamped with a
/// generation at issue time, and a completion is only accepted while its
/// stamp is still the latest; a superseded query resolves to `None` and
/// its result is dropped. Supersession is the only cancellation needed.
#[allow(dead_code)]
pub struct QuerySession {
    client: CatalogClient,
    generation: AtomicU64,
}

#[allow(dead_code)]
pub struct QueryTicket(u64);

#[allow(dead_code)]
impl QuerySession {
    pub fn new(client: CatalogClient) -> Self {
        Self {
            client,
            generation: AtomicU64::new(0),
        }
    }

    /// Stamp a new query, superseding any still in flight.
    pub fn issue(&self) -> QueryTicket {
        QueryTicket(self.generation.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Whether a completion holding this ticket is still the latest.
    pub fn accept(&self, ticket: &QueryTicket) -> bool {
        self.generation.load(Ordering::SeqCst) == ticket.0
    }

    /// Run a list query under the stale-discard protocol.
    pub async fn run(&self, filters: &JobFilters, page: u32) -> Option<JobsPage> {
        let ticket = self.issue();
        let result = self.client.list_jobs(filters, page).await;
        self.accept(&ticket).then_some(result)
    }
}
