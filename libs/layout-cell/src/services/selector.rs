// libs/layout-cell/src/services/selector.rs
use crate::models::{ElementNode, NodePath, SelectorError};

#[derive(Debug, Clone, PartialEq)]
pub enum AttributeSelector {
    Exists(String),
    Equals(String, String),
}

impl AttributeSelector {
    fn matches(&self, node: &ElementNode) -> bool {
        match self {
            Self::Exists(name) => node.attribute(name).is_some(),
            Self::Equals(name, value) => node.attribute(name).as_deref() == Some(value.as_str()),
        }
    }
}

/// One compound selector such as `nav.fixed.top-0[role="banner"]`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CompoundSelector {
    pub tag: Option<String>,
    pub ids: Vec<String>,
    pub classes: Vec<String>,
    pub attributes: Vec<AttributeSelector>,
}

impl CompoundSelector {
    pub fn matches(&self, node: &ElementNode) -> bool {
        if let Some(tag) = &self.tag {
            if !node.tag.eq_ignore_ascii_case(tag) {
                return false;
            }
        }

        self.ids.iter().all(|id| node.id.as_deref() == Some(id.as_str()))
            && self.classes.iter().all(|class| node.has_class(class))
            && self.attributes.iter().all(|attr| attr.matches(node))
    }

    fn parse(selector: &str) -> Result<Self, SelectorError> {
        let chars: Vec<char> = selector.chars().collect();
        if chars.is_empty() {
            return Err(SelectorError::Empty(selector.to_string()));
        }

        let mut compound = Self::default();
        let mut pos = 0;

        if chars[0] == '*' {
            pos = 1;
        } else if is_name_char(chars[0]) {
            let (tag, next) = read_name(&chars, 0);
            compound.tag = Some(tag.to_ascii_lowercase());
            pos = next;
        }

        while pos < chars.len() {
            match chars[pos] {
                '.' | '#' => {
                    let (name, next) = read_name(&chars, pos + 1);
                    if name.is_empty() {
                        return Err(SelectorError::ExpectedName {
                            selector: selector.to_string(),
                            position: pos + 1,
                        });
                    }
                    if chars[pos] == '.' {
                        compound.classes.push(name);
                    } else {
                        compound.ids.push(name);
                    }
                    pos = next;
                }
                '[' => {
                    let (attr, next) = parse_attribute(selector, &chars, pos + 1)?;
                    compound.attributes.push(attr);
                    pos = next;
                }
                c if c.is_whitespace() || matches!(c, '>' | '+' | '~') => {
                    return Err(SelectorError::UnsupportedCombinator(selector.to_string()));
                }
                ch => {
                    return Err(SelectorError::UnexpectedCharacter {
                        selector: selector.to_string(),
                        ch,
                        position: pos,
                    });
                }
            }
        }

        Ok(compound)
    }
}

fn is_name_char(c: char) -> bool {
    c.is_alphanumeric() || c == '-' || c == '_'
}

fn read_name(chars: &[char], start: usize) -> (String, usize) {
    let mut end = start;
    while end < chars.len() && is_name_char(chars[end]) {
        end += 1;
    }
    (chars[start..end].iter().collect(), end)
}

fn skip_whitespace(chars: &[char], mut pos: usize) -> usize {
    while pos < chars.len() && chars[pos].is_whitespace() {
        pos += 1;
    }
    pos
}

/// Parses `name]`, `name=value]` or `name="value"]`, starting just after `[`.
fn parse_attribute(
    selector: &str,
    chars: &[char],
    start: usize,
) -> Result<(AttributeSelector, usize), SelectorError> {
    let unterminated = || SelectorError::UnterminatedAttribute(selector.to_string());

    let pos = skip_whitespace(chars, start);
    let (name, pos) = read_name(chars, pos);
    if name.is_empty() {
        return Err(SelectorError::ExpectedName {
            selector: selector.to_string(),
            position: pos,
        });
    }
    let pos = skip_whitespace(chars, pos);

    match chars.get(pos) {
        None => Err(unterminated()),
        Some(']') => Ok((AttributeSelector::Exists(name), pos + 1)),
        Some('=') => {
            let pos = skip_whitespace(chars, pos + 1);
            let (value, pos) = match chars.get(pos) {
                None => return Err(unterminated()),
                Some(&quote) if quote == '"' || quote == '\'' => {
                    let close = chars[pos + 1..]
                        .iter()
                        .position(|&c| c == quote)
                        .ok_or_else(unterminated)?;
                    let value: String = chars[pos + 1..pos + 1 + close].iter().collect();
                    (value, pos + close + 2)
                }
                Some(_) => read_name(chars, pos),
            };
            let pos = skip_whitespace(chars, pos);
            match chars.get(pos) {
                Some(']') => Ok((AttributeSelector::Equals(name, value), pos + 1)),
                None => Err(unterminated()),
                Some(&ch) => Err(SelectorError::UnexpectedCharacter {
                    selector: selector.to_string(),
                    ch,
                    position: pos,
                }),
            }
        }
        Some(&ch) => Err(SelectorError::UnexpectedCharacter {
            selector: selector.to_string(),
            ch,
            position: pos,
        }),
    }
}

/// Splits on commas that are not inside a quoted attribute value.
fn split_selector_list(input: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut quote: Option<char> = None;
    let mut start = 0;

    for (i, c) in input.char_indices() {
        match (quote, c) {
            (None, '"') | (None, '\'') => quote = Some(c),
            (Some(q), c) if c == q => quote = None,
            (None, ',') => {
                parts.push(&input[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(&input[start..]);
    parts
}

/// A comma-separated selector group, matched the way `querySelectorAll` does.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SelectorList {
    selectors: Vec<CompoundSelector>,
}

impl SelectorList {
    pub fn parse(input: &str) -> Result<Self, SelectorError> {
        let selectors = split_selector_list(input)
            .into_iter()
            .map(|part| {
                let part = part.trim();
                if part.is_empty() {
                    Err(SelectorError::Empty(input.to_string()))
                } else {
                    CompoundSelector::parse(part)
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { selectors })
    }

    /// Parses every entry and concatenates them into one list.
    pub fn parse_all<S: AsRef<str>>(inputs: &[S]) -> Result<Self, SelectorError> {
        let mut list = Self::default();
        for input in inputs {
            list.extend(Self::parse(input.as_ref())?);
        }
        Ok(list)
    }

    pub fn extend(&mut self, other: SelectorList) {
        self.selectors.extend(other.selectors);
    }

    pub fn len(&self) -> usize {
        self.selectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selectors.is_empty()
    }

    pub fn matches(&self, node: &ElementNode) -> bool {
        self.selectors.iter().any(|s| s.matches(node))
    }

    /// True when `node` or any of its descendants matches.
    pub fn matches_within(&self, node: &ElementNode) -> bool {
        self.matches(node) || node.children.iter().any(|c| self.matches_within(c))
    }

    /// Paths of every matching element under (and including) `root`, in document order.
    pub fn select_paths(&self, root: &ElementNode) -> Vec<NodePath> {
        let mut out = Vec::new();
        let mut path = Vec::new();
        self.collect(root, &mut path, &mut out);
        out
    }

    fn collect(&self, node: &ElementNode, path: &mut NodePath, out: &mut Vec<NodePath>) {
        if self.matches(node) {
            out.push(path.clone());
        }
        for (i, child) in node.children.iter().enumerate() {
            path.push(i);
            self.collect(child, path, out);
            path.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn parses_header_selector_group() {
        let list = SelectorList::parse(
            r#"header, nav, .header, .navbar, .nav-container, .app-header, [role="banner"]"#,
        )
        .unwrap();
        assert_eq!(list.len(), 7);
    }

    #[test]
    fn compound_classes_must_all_match() {
        let list = SelectorList::parse(".fixed.top-0").unwrap();

        let both = ElementNode::new("div").with_class("fixed").with_class("top-0");
        let one = ElementNode::new("div").with_class("fixed");

        assert!(list.matches(&both));
        assert!(!list.matches(&one));
    }

    #[test]
    fn attribute_selectors() {
        let exists = SelectorList::parse("[role]").unwrap();
        let equals = SelectorList::parse("[role='banner']").unwrap();
        let bare = SelectorList::parse("[role=banner]").unwrap();

        let banner = ElementNode::new("div").with_attribute("role", "banner");
        let nav = ElementNode::new("div").with_attribute("role", "navigation");

        assert!(exists.matches(&banner));
        assert!(exists.matches(&nav));
        assert!(equals.matches(&banner));
        assert!(!equals.matches(&nav));
        assert!(bare.matches(&banner));
    }

    #[test]
    fn tag_and_id_matching() {
        let list = SelectorList::parse("HEADER#main").unwrap();

        assert!(list.matches(&ElementNode::new("header").with_id("main")));
        assert!(!list.matches(&ElementNode::new("header").with_id("other")));
        assert!(!list.matches(&ElementNode::new("nav").with_id("main")));
    }

    #[test]
    fn comma_inside_quotes_is_not_a_separator() {
        let list = SelectorList::parse(r#"[data-x="a,b"], nav"#).unwrap();
        assert_eq!(list.len(), 2);
        assert!(list.matches(&ElementNode::new("div").with_attribute("data-x", "a,b")));
    }

    #[test]
    fn rejects_invalid_syntax() {
        assert_matches!(SelectorList::parse(""), Err(SelectorError::Empty(_)));
        assert_matches!(SelectorList::parse("nav,"), Err(SelectorError::Empty(_)));
        assert_matches!(SelectorList::parse("."), Err(SelectorError::ExpectedName { .. }));
        assert_matches!(
            SelectorList::parse("[role=\"banner\""),
            Err(SelectorError::UnterminatedAttribute(_))
        );
        assert_matches!(
            SelectorList::parse("header nav"),
            Err(SelectorError::UnsupportedCombinator(_))
        );
        assert_matches!(
            SelectorList::parse("nav!"),
            Err(SelectorError::UnexpectedCharacter { ch: '!', .. })
        );
    }

    #[test]
    fn select_paths_in_document_order_including_nested() {
        let doc = ElementNode::new("body")
            .with_child(
                ElementNode::new("header").with_child(ElementNode::new("nav")),
            )
            .with_child(ElementNode::new("main"))
            .with_child(ElementNode::new("nav"));

        let list = SelectorList::parse("header, nav").unwrap();
        assert_eq!(list.select_paths(&doc), vec![vec![0], vec![0, 0], vec![2]]);
        assert!(list.matches_within(&doc));
        assert!(!list.matches_within(&ElementNode::new("main")));
    }
}
