//! Fragment stream assembly for the rendered message.

use std::borrow::Cow;

use super::delimiters::Delimiter;

/// Append-only stream of output fragments.
///
/// A fragment is either a run of literal characters or a markup fragment
/// (tag or literal delimiter text). Tentative opening tags each occupy
/// their own fragment so they can later be rewritten in place; the stream
/// never shrinks and indices stay stable.
#[derive(Debug, Default)]
pub(crate) struct Emitter {
    fragments: Vec<Cow<'static, str>>,
    /// Index of the most recent fragment containing non-whitespace
    /// content. Maintained incrementally so blank-span checks stay O(1)
    /// instead of rescanning the stream backward.
    last_significant: Option<usize>,
    /// Whether the tail fragment is literal text that may be extended.
    tail_is_literal: bool,
}

impl Emitter {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Append one literal character, extending the tail fragment when it
    /// is already a literal run.
    pub(crate) fn push_char(&mut self, ch: char) {
        if self.tail_is_literal
            && let Some(tail) = self.fragments.last_mut()
        {
            tail.to_mut().push(ch);
        } else {
            self.fragments.push(Cow::Owned(ch.to_string()));
            self.tail_is_literal = true;
        }
        if !ch.is_whitespace() {
            self.last_significant = Some(self.fragments.len() - 1);
        }
    }

    /// Append literal delimiter text as its own fragment.
    pub(crate) fn push_literal(&mut self, text: &'static str) {
        self.fragments.push(Cow::Borrowed(text));
        self.tail_is_literal = true;
        if text.chars().any(|c| !c.is_whitespace()) {
            self.last_significant = Some(self.fragments.len() - 1);
        }
    }

    /// Append a tag fragment and return its index.
    pub(crate) fn push_tag(&mut self, tag: &'static str) -> usize {
        self.fragments.push(Cow::Borrowed(tag));
        self.tail_is_literal = false;
        let index = self.fragments.len() - 1;
        self.last_significant = Some(index);
        index
    }

    /// Rewrite a tentative opening tag back to the delimiter text the user
    /// typed. The significance cursor never moves backward: the fragment
    /// stays non-whitespace.
    pub(crate) fn demote(&mut self, index: usize, kind: Delimiter) {
        self.fragments[index] = Cow::Borrowed(kind.literal());
    }

    /// True when nothing but whitespace has been appended since the
    /// fragment at `open_index`.
    pub(crate) fn blank_since(&self, open_index: usize) -> bool {
        self.last_significant.is_none_or(|last| last <= open_index)
    }

    pub(crate) fn finish(self) -> String {
        self.fragments.concat()
    }
}
