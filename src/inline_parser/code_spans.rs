//! Backtick-delimited code spans and code blocks.
//!
//! A lone backtick opens an inline code span, a doubled backtick opens a
//! code block. While either is open, emphasis characters stay literal and
//! only the matching backtick sequence closes the span. Closing applies
//! the same blank-span demotion as emphasis.

use super::Scanner;
use super::delimiters::Delimiter;

/// Handle one backtick at the current position.
pub(crate) fn scan_backtick(s: &mut Scanner) {
    // An open code span closes on any lone backtick, even when more
    // backticks follow
    if let Some(open_index) = s.slots.close(Delimiter::Code) {
        log::trace!("closing {:?} at {}", Delimiter::Code, s.pos);
        s.close_span(Delimiter::Code, open_index);
        s.advance(1);
        return;
    }

    let doubled = s.peek_next() == Some('`');

    if s.slots.get(Delimiter::CodeBlock).is_some() {
        if doubled
            && let Some(open_index) = s.slots.close(Delimiter::CodeBlock)
        {
            log::trace!("closing {:?} at {}", Delimiter::CodeBlock, s.pos);
            s.close_span(Delimiter::CodeBlock, open_index);
            s.advance(2);
        } else {
            // A lone backtick inside a code block stays literal; a nested
            // code span would occupy both code slots at once
            s.emitter.push_char('`');
            s.advance(1);
        }
        return;
    }

    let (kind, width) = if doubled {
        (Delimiter::CodeBlock, 2)
    } else {
        (Delimiter::Code, 1)
    };
    log::trace!("opening {:?} at {}", kind, s.pos);
    let index = s.emitter.push_tag(kind.open_tag());
    s.slots.open(kind, index);
    s.advance(width);
}
