//! Rebuilds a nested discussion from the flat, document-ordered post list a
//! thread page renders.

use std::collections::BTreeMap;

use crate::model::ThreadComment;

/// A post as it appears in page order, with its nesting depth (0 is top level).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatPost {
    pub depth: usize,
    pub author: String,
    pub content: String,
    pub url: Option<String>,
}

struct Slot {
    post: FlatPost,
    children: Vec<usize>,
}

/// Turn a depth-annotated post sequence into a comment forest in one pass.
///
/// Each post attaches to the most recent post one level shallower. When that
/// level was never seen, the nearest shallower level is used instead, and a
/// post with no shallower ancestor at all becomes a root. Posts are never
/// dropped. Order is assumed to be a depth-first walk of the thread.
pub fn build_comment_forest(posts: impl IntoIterator<Item = FlatPost>) -> Vec<ThreadComment> {
    let mut arena: Vec<Slot> = Vec::new();
    let mut roots = Vec::new();
    // Most recent post seen at each depth.
    let mut latest: BTreeMap<usize, usize> = BTreeMap::new();

    for post in posts {
        let index = arena.len();
        let depth = post.depth;

        match latest.range(..depth).next_back() {
            Some((_, &parent)) => arena[parent].children.push(index),
            None => roots.push(index),
        }
        latest.insert(depth, index);

        arena.push(Slot {
            post,
            children: Vec::new(),
        });
    }

    let mut slots: Vec<Option<Slot>> = arena.into_iter().map(Some).collect();
    roots
        .into_iter()
        .filter_map(|index| materialize(&mut slots, index))
        .collect()
}

fn materialize(slots: &mut [Option<Slot>], index: usize) -> Option<ThreadComment> {
    let Slot { post, children } = slots.get_mut(index)?.take()?;
    Some(ThreadComment {
        author: post.author,
        content: post.content,
        url: post.url,
        children: children
            .into_iter()
            .filter_map(|child| materialize(slots, child))
            .collect(),
    })
}
