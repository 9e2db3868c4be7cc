//! Backslash handling.
//!
//! Outside code spans a backslash arms the escape flag and emits nothing;
//! the next character is then literal regardless of kind, so `\*` renders
//! as a star and `\\` as one backslash. Inside a code span the backslash is
//! itself literal, with one exception: `` \` `` yields a literal backtick,
//! letting code content contain the character that would otherwise close it.

use super::Scanner;

/// Handle one backslash at the current position. Never entered with the
/// escape flag armed; the scanner emits flagged characters directly.
pub(crate) fn scan_backslash(s: &mut Scanner) {
    if s.slots.in_code() {
        if s.peek_next() == Some('`') {
            log::trace!("escaped backtick inside code at {}", s.pos);
            s.emitter.push_char('`');
            s.advance(2);
        } else {
            s.emitter.push_char('\\');
            s.advance(1);
        }
        return;
    }

    log::trace!("arming escape at {}", s.pos);
    s.escaping = true;
    s.advance(1);
}
