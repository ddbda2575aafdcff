//! The node interface every extractor is written against.
//!
//! Extractors never touch a concrete HTML parser. They take any [`DomNode`]
//! (in practice the root element of a parsed [`scraper::Html`] document) and
//! query it with CSS selectors, which keeps them testable from inline
//! fixtures.

use ::scraper::{CaseSensitivity, ElementRef, Selector};

use crate::error::Result;

/// A queryable element of an already parsed HTML document.
pub trait DomNode: Sized {
    /// All descendants matching `selector`, in document order.
    fn select(&self, selector: &str) -> Result<Vec<Self>>;

    /// Text of this element and all its descendants, with whitespace runs
    /// collapsed to single spaces and the ends trimmed.
    fn text(&self) -> String;

    /// Text of the direct text children only, normalized like [`DomNode::text`].
    fn own_text(&self) -> String;

    fn attr(&self, name: &str) -> Option<String>;

    fn class_names(&self) -> Vec<String>;

    fn has_class(&self, class: &str) -> bool {
        self.class_names().iter().any(|c| c == class)
    }

    fn tag_name(&self) -> String;

    fn parent(&self) -> Option<Self>;

    /// Element children, skipping text and comment nodes.
    fn children(&self) -> Vec<Self>;

    /// The next element sibling.
    fn next_sibling(&self) -> Option<Self>;

    /// This element or its nearest ancestor matching `selector`.
    fn closest(&self, selector: &str) -> Result<Option<Self>>;

    fn matches(&self, selector: &str) -> Result<bool>;
}

/// Collapse whitespace runs the way browsers render inline text.
pub(crate) fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

impl<'a> DomNode for ElementRef<'a> {
    fn select(&self, selector: &str) -> Result<Vec<Self>> {
        let selector = Selector::parse(selector)?;
        Ok(ElementRef::select(self, &selector).collect())
    }

    fn text(&self) -> String {
        normalize_whitespace(&ElementRef::text(self).collect::<String>())
    }

    fn own_text(&self) -> String {
        let raw: String = (**self)
            .children()
            .filter_map(|child| child.value().as_text().map(|text| &**text))
            .collect();
        normalize_whitespace(&raw)
    }

    fn attr(&self, name: &str) -> Option<String> {
        self.value().attr(name).map(str::to_owned)
    }

    fn class_names(&self) -> Vec<String> {
        self.value().classes().map(str::to_owned).collect()
    }

    fn has_class(&self, class: &str) -> bool {
        self.value().has_class(class, CaseSensitivity::CaseSensitive)
    }

    fn tag_name(&self) -> String {
        self.value().name().to_owned()
    }

    fn parent(&self) -> Option<Self> {
        (**self).parent().and_then(ElementRef::wrap)
    }

    fn children(&self) -> Vec<Self> {
        (**self).children().filter_map(ElementRef::wrap).collect()
    }

    fn next_sibling(&self) -> Option<Self> {
        (**self).next_siblings().find_map(ElementRef::wrap)
    }

    fn closest(&self, selector: &str) -> Result<Option<Self>> {
        let selector = Selector::parse(selector)?;
        Ok(std::iter::once(*self)
            .chain((**self).ancestors().filter_map(ElementRef::wrap))
            .find(|element| selector.matches(element)))
    }

    fn matches(&self, selector: &str) -> Result<bool> {
        let selector = Selector::parse(selector)?;
        Ok(selector.matches(self))
    }
}

#[cfg(test)]
mod tests {
    use ::scraper::Html;

    use super::*;

    const FIXTURE: &str = r#"
        <div class="wf-card outer">
            <div class="team-roster-item">
                <a href="/player/9/tenz">
                    <span class="alias">  TenZ
                    </span>
                    loose   text
                </a>
            </div>
            <div class="label">Total Winnings</div>
            <span class="value">$1,000</span>
        </div>
    "#;

    #[test]
    fn text_is_whitespace_normalized() {
        let document = Html::parse_document(FIXTURE);
        let root = document.root_element();
        let link = DomNode::select(&root, "a").unwrap().remove(0);

        assert_eq!(DomNode::text(&link), "TenZ loose text");
        assert_eq!(link.own_text(), "loose text");
        assert_eq!(DomNode::attr(&link, "href").as_deref(), Some("/player/9/tenz"));
        assert_eq!(link.tag_name(), "a");
    }

    #[test]
    fn closest_walks_up_including_self() {
        let document = Html::parse_document(FIXTURE);
        let root = document.root_element();
        let link = DomNode::select(&root, "a").unwrap().remove(0);

        let card = DomNode::closest(&link, ".wf-card").unwrap().unwrap();
        assert!(DomNode::has_class(&card, "outer"));
        assert!(DomNode::closest(&link, "a").unwrap().is_some());
        assert!(DomNode::closest(&link, ".missing").unwrap().is_none());
    }

    #[test]
    fn siblings_and_parents() {
        let document = Html::parse_document(FIXTURE);
        let root = document.root_element();
        let label = DomNode::select(&root, ".label").unwrap().remove(0);

        let value = DomNode::next_sibling(&label).unwrap();
        assert_eq!(DomNode::text(&value), "$1,000");
        assert!(DomNode::parent(&label).unwrap().has_class("wf-card"));
        assert_eq!(DomNode::children(&DomNode::parent(&label).unwrap()).len(), 3);
    }

    #[test]
    fn invalid_selector_is_an_error() {
        let document = Html::parse_document(FIXTURE);
        let root = document.root_element();
        assert!(DomNode::select(&root, "div[").is_err());
    }
}
