// libs/layout-cell/src/services/layout.rs
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::info;

use shared_config::AppConfig;

use crate::models::{
    ConsolidateHeadersRequest, ConsolidateHeadersResponse, ConsolidationMode, ElementNode,
    SelectorError,
};
use crate::services::consolidator::HeaderConsolidator;
use crate::services::observer::HeaderObserver;

pub struct LayoutService {
    config: Arc<AppConfig>,
}

impl LayoutService {
    pub fn new(config: Arc<AppConfig>) -> Self {
        Self { config }
    }

    /// One-shot pass over a submitted document.
    pub fn consolidate_headers(
        &self,
        request: ConsolidateHeadersRequest,
    ) -> Result<ConsolidateHeadersResponse, SelectorError> {
        let consolidator = HeaderConsolidator::for_mode(request.mode, &request.custom_selectors)?;

        let mut document = request.document;
        let report = consolidator.consolidate(&mut document);

        info!(
            "Header consolidation ({:?}): {} candidate(s), {} removed",
            request.mode,
            report.candidates,
            report.removed.len()
        );

        Ok(ConsolidateHeadersResponse { document, report })
    }

    /// Starts a live observer over `document` using the configured initial delay.
    pub fn observe(
        &self,
        document: Arc<RwLock<ElementNode>>,
        mode: ConsolidationMode,
        custom_selectors: &[String],
    ) -> Result<HeaderObserver, SelectorError> {
        let consolidator = HeaderConsolidator::for_mode(mode, custom_selectors)?;
        Ok(HeaderObserver::from_config(consolidator, document, &self.config))
    }
}
