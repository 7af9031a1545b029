// libs/layout-cell/src/lib.rs
//! # Layout Cell
//!
//! Header de-duplication for rendered portal pages. Pages are modelled as an
//! [`ElementNode`] tree; a pass finds branded header candidates, keeps the topmost
//! and hides the rest with a `data-removed-duplicate` marker.
//!
//! - [`HeaderConsolidator`] runs a single pass.
//! - [`HeaderObserver`] re-runs passes over a live document as mutations arrive.
//! - `POST /api/layout/consolidate-headers` runs a pass over a submitted document.

pub mod handlers;
pub mod models;
pub mod router;
pub mod services;

pub use models::{
    ConsolidateHeadersRequest, ConsolidateHeadersResponse, ConsolidationMode,
    ConsolidationReport, ElementNode, MutationRecord, NodePath, ObserverError, SelectorError,
};
pub use router::layout_routes;
pub use services::{BrandHeuristic, HeaderConsolidator, HeaderObserver, LayoutService, SelectorList};
