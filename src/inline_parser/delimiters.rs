//! Delimiter kinds and open-slot bookkeeping.

/// The six delimiter kinds a message can open.
///
/// `ItalicStar`/`Bold` share the `*` character and
/// `ItalicUnderscore`/`Underline` share `_`; which of the two closes is
/// decided by the tie-break in the emphasis resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Delimiter {
    ItalicStar,
    Bold,
    Code,
    CodeBlock,
    ItalicUnderscore,
    Underline,
}

impl Delimiter {
    pub(crate) const ALL: [Delimiter; 6] = [
        Delimiter::ItalicStar,
        Delimiter::Bold,
        Delimiter::Code,
        Delimiter::CodeBlock,
        Delimiter::ItalicUnderscore,
        Delimiter::Underline,
    ];

    /// The characters the user typed to open this span.
    pub(crate) fn literal(self) -> &'static str {
        match self {
            Delimiter::ItalicStar => "*",
            Delimiter::Bold => "**",
            Delimiter::Code => "`",
            Delimiter::CodeBlock => "``",
            Delimiter::ItalicUnderscore => "_",
            Delimiter::Underline => "__",
        }
    }

    pub(crate) fn open_tag(self) -> &'static str {
        match self {
            Delimiter::ItalicStar | Delimiter::ItalicUnderscore => "<em>",
            Delimiter::Bold => "<strong>",
            Delimiter::Code => "<code>",
            Delimiter::CodeBlock => "<pre><code>",
            Delimiter::Underline => "<u>",
        }
    }

    pub(crate) fn close_tag(self) -> &'static str {
        match self {
            Delimiter::ItalicStar | Delimiter::ItalicUnderscore => "</em>",
            Delimiter::Bold => "</strong>",
            Delimiter::Code => "</code>",
            Delimiter::CodeBlock => "</code></pre>",
            Delimiter::Underline => "</u>",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// A single- and double-character span pair driven by one character.
pub(crate) struct DelimiterPair {
    pub(crate) ch: char,
    pub(crate) single: Delimiter,
    pub(crate) double: Delimiter,
}

pub(crate) const PAIR_STAR: DelimiterPair = DelimiterPair {
    ch: '*',
    single: Delimiter::ItalicStar,
    double: Delimiter::Bold,
};

pub(crate) const PAIR_UNDERSCORE: DelimiterPair = DelimiterPair {
    ch: '_',
    single: Delimiter::ItalicUnderscore,
    double: Delimiter::Underline,
};

/// Which spans are currently open, each slot holding the fragment index of
/// its tentative opener.
#[derive(Debug, Default)]
pub(crate) struct DelimiterSlots {
    slots: [Option<usize>; 6],
}

impl DelimiterSlots {
    pub(crate) fn get(&self, kind: Delimiter) -> Option<usize> {
        self.slots[kind.index()]
    }

    pub(crate) fn open(&mut self, kind: Delimiter, index: usize) {
        // Code and CodeBlock are never open at the same time
        debug_assert!(
            !matches!(kind, Delimiter::Code | Delimiter::CodeBlock) || !self.in_code(),
            "code spans cannot nest"
        );
        self.slots[kind.index()] = Some(index);
    }

    /// Take the opener index, leaving the slot empty. Returns `None` when
    /// the span was not open.
    pub(crate) fn close(&mut self, kind: Delimiter) -> Option<usize> {
        self.slots[kind.index()].take()
    }

    /// True while an inline code span or a code block is open. Emphasis
    /// characters are literal for the duration.
    pub(crate) fn in_code(&self) -> bool {
        self.get(Delimiter::Code).is_some() || self.get(Delimiter::CodeBlock).is_some()
    }

    /// Take and yield every occupied slot, for the finalizer.
    pub(crate) fn drain(&mut self) -> impl Iterator<Item = (Delimiter, usize)> + '_ {
        Delimiter::ALL
            .iter()
            .filter_map(|&kind| self.slots[kind.index()].take().map(|index| (kind, index)))
    }
}
