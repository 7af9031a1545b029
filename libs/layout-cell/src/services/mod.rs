pub mod consolidator;
pub mod heuristic;
pub mod layout;
pub mod observer;
pub mod selector;

pub use consolidator::HeaderConsolidator;
pub use heuristic::BrandHeuristic;
pub use layout::LayoutService;
pub use observer::HeaderObserver;
pub use selector::SelectorList;
