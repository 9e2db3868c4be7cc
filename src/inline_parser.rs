//! Single-pass inline markup scanner.
//!
//! The scanner walks escaped text once, left to right, keeping one open
//! slot per delimiter kind. Delimiters open tentatively: the opening tag is
//! pushed into the fragment stream immediately and its index recorded, and
//! either the resolver (blank span at close time) or the finalizer
//! (unterminated span at end of input) rewrites it back to the literal
//! characters the user typed. Nothing in here can fail; malformed markup
//! degrades to literal text.

mod code_spans;
mod delimiters;
mod emitter;
mod emphasis;
mod escapes;

use delimiters::{Delimiter, DelimiterSlots, PAIR_STAR, PAIR_UNDERSCORE};
use emitter::Emitter;

/// Scan already-escaped text and return the joined fragment stream.
pub(crate) fn scan(escaped: &str) -> String {
    let mut scanner = Scanner::new(escaped);
    scanner.run();
    scanner.into_markup()
}

/// State for one scan: cursor, escape flag, fragment stream, open slots.
///
/// All of it is created fresh per call and dropped once the joined string
/// is returned; there is no cross-call state.
pub(crate) struct Scanner {
    /// The escaped input, one entry per Unicode codepoint
    chars: Vec<char>,
    /// Current position in `chars`
    pos: usize,
    /// True only for the character immediately following an unpaired
    /// backslash outside code context
    escaping: bool,
    emitter: Emitter,
    slots: DelimiterSlots,
}

impl Scanner {
    fn new(escaped: &str) -> Self {
        Self {
            chars: escaped.chars().collect(),
            pos: 0,
            escaping: false,
            emitter: Emitter::new(),
            slots: DelimiterSlots::default(),
        }
    }

    /// The character after the current one, if any.
    fn peek_next(&self) -> Option<char> {
        self.chars.get(self.pos + 1).copied()
    }

    fn advance(&mut self, n: usize) {
        self.pos += n;
    }

    fn run(&mut self) {
        log::trace!("scanning {} characters", self.chars.len());

        while let Some(&ch) = self.chars.get(self.pos) {
            if self.escaping {
                // The character after an unpaired backslash is literal,
                // whatever it is
                self.emitter.push_char(ch);
                self.escaping = false;
                self.advance(1);
                continue;
            }

            match ch {
                '\\' => escapes::scan_backslash(self),
                '*' => emphasis::scan_delimiter(self, &PAIR_STAR),
                '_' => emphasis::scan_delimiter(self, &PAIR_UNDERSCORE),
                '`' => code_spans::scan_backtick(self),
                _ => {
                    self.emitter.push_char(ch);
                    self.advance(1);
                }
            }
        }
    }

    /// Close a span whose opener sits at `open_index`.
    ///
    /// When nothing but whitespace was emitted since the opener, the span
    /// is blank: the opener is rewritten back to its literal delimiter and
    /// the closing delimiter is appended as a literal too, instead of a
    /// tag pair.
    fn close_span(&mut self, kind: Delimiter, open_index: usize) {
        if self.emitter.blank_since(open_index) {
            log::debug!("blank {:?} span, reverting delimiters to literal", kind);
            self.emitter.demote(open_index, kind);
            self.emitter.push_literal(kind.literal());
        } else {
            self.emitter.push_tag(kind.close_tag());
        }
    }

    /// Rewrite the opener of every span still open at end of input back to
    /// the delimiter text the user typed. No close tag is ever synthesized
    /// for an unterminated span.
    fn finalize(&mut self) {
        for (kind, open_index) in self.slots.drain() {
            log::debug!("unterminated {:?} span, reverting opener to literal", kind);
            self.emitter.demote(open_index, kind);
        }
    }

    fn into_markup(mut self) -> String {
        self.finalize();
        self.emitter.finish()
    }
}
