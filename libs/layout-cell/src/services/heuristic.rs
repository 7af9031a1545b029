// libs/layout-cell/src/services/heuristic.rs
use crate::models::ElementNode;

/// Decides whether a candidate header carries SequoiaHealth branding.
#[derive(Debug, Clone)]
pub struct BrandHeuristic {
    /// All of these must appear in the element's text.
    pub brand_terms: Vec<String>,
    /// Any of these in a descendant image `src`.
    pub logo_src_terms: Vec<String>,
    /// Any of these in a descendant image `alt`, compared lower-cased.
    pub logo_alt_terms: Vec<String>,
    pub header_classes: Vec<String>,
    pub header_id_term: Option<String>,
}

fn owned(terms: &[&str]) -> Vec<String> {
    terms.iter().map(|t| t.to_string()).collect()
}

impl BrandHeuristic {
    pub fn basic() -> Self {
        Self {
            brand_terms: owned(&["Sequoia", "Health"]),
            logo_src_terms: owned(&["sequoia"]),
            logo_alt_terms: owned(&["sequoia", "logo"]),
            header_classes: Vec::new(),
            header_id_term: None,
        }
    }

    pub fn advanced() -> Self {
        Self {
            logo_src_terms: owned(&["sequoia", "tree"]),
            header_classes: owned(&["app-header", "main-header"]),
            header_id_term: Some("header".to_string()),
            ..Self::basic()
        }
    }

    pub fn is_branded(&self, element: &ElementNode) -> bool {
        self.has_brand_text(element) || self.has_logo(element) || self.has_header_marker(element)
    }

    fn has_brand_text(&self, element: &ElementNode) -> bool {
        if self.brand_terms.is_empty() {
            return false;
        }
        let text = element.text_content();
        self.brand_terms.iter().all(|term| text.contains(term.as_str()))
    }

    fn has_logo(&self, element: &ElementNode) -> bool {
        element
            .descendants()
            .into_iter()
            .filter(|n| n.tag.eq_ignore_ascii_case("img"))
            .any(|img| {
                let src = img.attributes.get("src").map(String::as_str).unwrap_or("");
                let alt = img
                    .attributes
                    .get("alt")
                    .map(|a| a.to_lowercase())
                    .unwrap_or_default();

                self.logo_src_terms.iter().any(|t| src.contains(t.as_str()))
                    || self.logo_alt_terms.iter().any(|t| alt.contains(t.as_str()))
            })
    }

    fn has_header_marker(&self, element: &ElementNode) -> bool {
        let by_class = self.header_classes.iter().any(|c| element.has_class(c));
        let by_id = match (&self.header_id_term, &element.id) {
            (Some(term), Some(id)) => id.contains(term.as_str()),
            _ => false,
        };
        by_class || by_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn logo(src: &str, alt: &str) -> ElementNode {
        ElementNode::new("img")
            .with_attribute("src", src)
            .with_attribute("alt", alt)
    }

    #[test]
    fn brand_text_needs_both_terms() {
        let heuristic = BrandHeuristic::basic();

        let split = ElementNode::new("header")
            .with_child(ElementNode::new("span").with_text("Sequoia"))
            .with_child(ElementNode::new("span").with_text("Health"));
        let partial = ElementNode::new("header").with_text("Sequoia Park");

        assert!(heuristic.is_branded(&split));
        assert!(!heuristic.is_branded(&partial));
    }

    #[test]
    fn logo_detection_by_src_and_alt() {
        let heuristic = BrandHeuristic::basic();

        let by_src = ElementNode::new("nav").with_child(logo("/img/sequoia.svg", ""));
        let by_alt = ElementNode::new("nav").with_child(logo("/a.png", "Company LOGO"));
        let tree = ElementNode::new("nav").with_child(logo("/tree.png", "icon"));

        assert!(heuristic.is_branded(&by_src));
        assert!(heuristic.is_branded(&by_alt));
        assert!(!heuristic.is_branded(&tree));
        assert!(BrandHeuristic::advanced().is_branded(&tree));
    }

    #[test]
    fn own_image_is_not_a_descendant() {
        let heuristic = BrandHeuristic::basic();
        assert!(!heuristic.is_branded(&logo("/sequoia.png", "logo")));
    }

    #[test]
    fn advanced_accepts_header_class_and_id() {
        let basic = BrandHeuristic::basic();
        let advanced = BrandHeuristic::advanced();

        let by_class = ElementNode::new("div").with_class("main-header");
        let by_id = ElementNode::new("div").with_id("site-header-top");

        assert!(!basic.is_branded(&by_class));
        assert!(!basic.is_branded(&by_id));
        assert!(advanced.is_branded(&by_class));
        assert!(advanced.is_branded(&by_id));
    }
}
