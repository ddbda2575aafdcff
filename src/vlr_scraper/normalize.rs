//! Small pure helpers shared by the extractors.

use regex::Regex;

use crate::dom::DomNode;
use crate::error::Result;
use crate::model::SideStat;
use crate::vlr_scraper::{non_empty, select_first, select_text, BASE_URL};

/// Country code carried by a `mod-<code>` token in a class string,
/// e.g. `"flag mod-us"` gives `us`.
pub(crate) fn country_code(class_string: &str) -> Result<Option<String>> {
    let pattern = Regex::new(r"mod-([a-z]+)")?;
    Ok(pattern
        .captures(class_string)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string()))
}

/// Canonical 16px flag image for a country code.
pub(crate) fn flag_url(code: &str) -> String {
    format!("{BASE_URL}/img/icons/flags/16/{code}.png")
}

/// Flag URL for the country code carried by `node`'s classes, if any.
pub(crate) fn flag_url_of<N: DomNode>(node: &N) -> Result<Option<String>> {
    let classes = node.class_names().join(" ");
    Ok(country_code(&classes)?.map(|code| flag_url(&code)))
}

/// Normalize a protocol-relative or root-relative URL to an absolute vlr.gg URL.
pub(crate) fn normalize_url(src: &str) -> String {
    if src.starts_with("//") {
        format!("https:{src}")
    } else if src.starts_with('/') {
        format!("{BASE_URL}{src}")
    } else {
        src.to_string()
    }
}

/// Social platform key for a profile link. Unrecognized hosts are `website`.
pub(crate) fn social_platform(url: &str) -> &'static str {
    let url = url.to_lowercase();
    if url.contains("twitter.com") || url.contains("x.com") {
        "twitter"
    } else if url.contains("instagram.com") {
        "instagram"
    } else if url.contains("youtube.com") || url.contains("youtu.be") {
        "youtube"
    } else if url.contains("twitch.tv") {
        "twitch"
    } else if url.contains("facebook.com") {
        "facebook"
    } else {
        "website"
    }
}

/// Normalized `src` of the first image matching `selector`, absent when no
/// image or an empty `src` is found.
pub(crate) fn image_url<N: DomNode>(node: &N, selector: &str) -> Result<Option<String>> {
    Ok(select_first(node, selector)?
        .and_then(|img| img.attr("src"))
        .and_then(non_empty)
        .map(|src| normalize_url(&src)))
}

/// First non-empty run of direct text in `node` or its descendants, in
/// document order. `<span>Ascent<span>PICK</span></span>` gives `Ascent`.
pub(crate) fn first_own_text<N: DomNode>(node: &N) -> Option<String> {
    non_empty(node.own_text()).or_else(|| node.children().iter().find_map(first_own_text))
}

/// Split a stats cell into its all/attack/defend values.
///
/// Missing cells or sub-spans read as `"0"`.
pub(crate) fn side_stat<N: DomNode>(cell: Option<&N>) -> Result<SideStat> {
    let Some(cell) = cell else {
        return Ok(SideStat::default());
    };
    let value = |selector: &str| -> Result<String> {
        Ok(non_empty(select_text(cell, selector)?).unwrap_or_else(|| "0".to_string()))
    };
    Ok(SideStat {
        all: value("span.mod-both")?,
        attack: value("span.mod-t")?,
        defend: value("span.mod-ct")?,
    })
}

/// Value printed next to a label, for markup shaped like
/// `<div>Label</div><div>Value</div>` or `<div><b>Label</b> Value</div>`.
///
/// Looks at elements matching `candidates` for the first whose text is exactly
/// `label`, then reads its next sibling, and failing that the parent's text
/// with the label removed.
pub(crate) fn labeled_value<N: DomNode>(root: &N, candidates: &str, label: &str) -> Result<Option<String>> {
    let Some(label_node) = root
        .select(candidates)?
        .into_iter()
        .find(|node| node.text() == label)
    else {
        return Ok(None);
    };

    if let Some(value) = label_node.next_sibling().map(|s| s.text()).and_then(non_empty) {
        return Ok(Some(value));
    }

    Ok(label_node
        .parent()
        .map(|p| p.text().replacen(label, "", 1))
        .and_then(non_empty))
}
