//! Drives one invocation: fetch every inventory, filter, normalize,
//! render, assemble, dispatch.

use std::sync::Arc;

use chrono::{Local, Utc};
use futures::future::try_join_all;
use tracing::info;

use crate::error::{FetchError, WatcherError};
use crate::normalize::normalize;
use crate::notify::ReportSink;
use crate::report::{assemble, builder::section_blocks, SectionSet};
use crate::reservation::active_only;
use crate::sources::ReservationSource;

pub struct Watcher {
    sources: Vec<Arc<dyn ReservationSource>>,
    sink: Arc<dyn ReportSink>,
}

impl Watcher {
    pub fn new(sources: Vec<Arc<dyn ReservationSource>>, sink: Arc<dyn ReportSink>) -> Self {
        Self { sources, sink }
    }

    /// Run the job once. The inventories are independent, so they are
    /// fetched concurrently; the first failure aborts the join and nothing
    /// is dispatched.
    pub async fn run(&self) -> Result<(), WatcherError> {
        let fetched = try_join_all(self.sources.iter().map(|source| async move {
            let records = source.fetch().await?;
            Ok::<_, FetchError>((source.kind(), records))
        }))
        .await?;

        let now = Utc::now();
        let mut sections = SectionSet::default();
        for (kind, raw) in fetched {
            let active = active_only(raw);
            let normalized = normalize(&active, now);
            if let Some(blocks) = section_blocks(normalized.as_deref()) {
                sections.insert(kind, blocks);
            }
        }

        let report = assemble(Local::now().date_naive(), sections);
        self.sink.dispatch(&report).await?;

        info!(sources = self.sources.len(), "watch run complete");
        Ok(())
    }
}
