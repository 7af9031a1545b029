// libs/layout-cell/src/services/consolidator.rs
use tracing::{debug, info};

use crate::models::{ConsolidationMode, ConsolidationReport, ElementNode, NodePath, SelectorError};
use crate::services::heuristic::BrandHeuristic;
use crate::services::selector::SelectorList;

pub const BASIC_HEADER_SELECTORS: &str =
    r#"header, nav, .header, .navbar, .nav-container, .app-header, [role="banner"]"#;

pub const FIXED_HEADER_SELECTORS: &str = ".fixed.top-0, .fixed.z-40, .fixed.z-50";

/// Hides every branded header except the topmost one.
#[derive(Debug, Clone)]
pub struct HeaderConsolidator {
    selectors: SelectorList,
    heuristic: BrandHeuristic,
}

impl HeaderConsolidator {
    pub fn new(selectors: SelectorList, heuristic: BrandHeuristic) -> Self {
        Self { selectors, heuristic }
    }

    pub fn basic() -> Result<Self, SelectorError> {
        Ok(Self::new(
            SelectorList::parse(BASIC_HEADER_SELECTORS)?,
            BrandHeuristic::basic(),
        ))
    }

    pub fn advanced<S: AsRef<str>>(custom_selectors: &[S]) -> Result<Self, SelectorError> {
        let mut selectors = SelectorList::parse(BASIC_HEADER_SELECTORS)?;
        selectors.extend(SelectorList::parse(FIXED_HEADER_SELECTORS)?);
        selectors.extend(SelectorList::parse_all(custom_selectors)?);

        Ok(Self::new(selectors, BrandHeuristic::advanced()))
    }

    /// Custom selectors extend the preset in either mode.
    pub fn for_mode<S: AsRef<str>>(
        mode: ConsolidationMode,
        custom_selectors: &[S],
    ) -> Result<Self, SelectorError> {
        match mode {
            ConsolidationMode::Basic => {
                let mut consolidator = Self::basic()?;
                consolidator
                    .selectors
                    .extend(SelectorList::parse_all(custom_selectors)?);
                Ok(consolidator)
            }
            ConsolidationMode::Advanced => Self::advanced(custom_selectors),
        }
    }

    pub fn selectors(&self) -> &SelectorList {
        &self.selectors
    }

    pub fn consolidate(&self, root: &mut ElementNode) -> ConsolidationReport {
        let potential = self.selectors.select_paths(root);
        debug!("Found {} potential headers", potential.len());

        let mut branded: Vec<(NodePath, f64)> = potential
            .into_iter()
            .filter_map(|path| {
                let node = root.node_at(&path)?;
                (!node.is_removed_duplicate() && self.heuristic.is_branded(node))
                    .then(|| (path, node.top))
            })
            .collect();
        debug!("Found {} branded headers", branded.len());

        let candidates = branded.len();
        branded.sort_by(|a, b| a.1.total_cmp(&b.1));

        let mut paths = branded.into_iter().map(|(path, _)| path);
        let kept = paths.next();
        let mut removed = Vec::new();

        for path in paths {
            if let Some(node) = root.node_at_mut(&path) {
                node.mark_removed_duplicate();
                debug!("Removed duplicate header at {:?}", path);
                removed.push(path);
            }
        }

        if !removed.is_empty() {
            info!(
                "Consolidated headers: kept {:?}, hid {} duplicate(s)",
                kept,
                removed.len()
            );
        }

        ConsolidationReport {
            kept,
            removed,
            candidates,
        }
    }
}
