//! Paired emphasis delimiters: `*`/`**` and `_`/`__`.
//!
//! Both characters drive the same machine: a single-character span and a
//! double-character span share one delimiter character and are told apart
//! at close time. The routine is parametrized over the pair so the
//! tie-break logic exists exactly once.

use super::Scanner;
use super::delimiters::DelimiterPair;

/// Handle one `*` or `_` at the current position.
pub(crate) fn scan_delimiter(s: &mut Scanner, pair: &DelimiterPair) {
    if s.slots.in_code() {
        // Emphasis is never parsed inside code spans
        s.emitter.push_char(pair.ch);
        s.advance(1);
        return;
    }

    if s.slots.get(pair.single).is_some() || s.slots.get(pair.double).is_some() {
        close_delimiter(s, pair);
        return;
    }

    if s.peek_next() == Some(pair.ch) {
        log::trace!("opening {:?} at {}", pair.double, s.pos);
        let index = s.emitter.push_tag(pair.double.open_tag());
        s.slots.open(pair.double, index);
        s.advance(2);
    } else {
        log::trace!("opening {:?} at {}", pair.single, s.pos);
        let index = s.emitter.push_tag(pair.single.open_tag());
        s.slots.open(pair.single, index);
        s.advance(1);
    }
}

/// Close one of the two same-character spans.
///
/// The span opened later closes first; closing the double span also
/// requires the delimiter character to be doubled at the current position.
fn close_delimiter(s: &mut Scanner, pair: &DelimiterPair) {
    let single_is_inner = match (s.slots.get(pair.single), s.slots.get(pair.double)) {
        (Some(single), Some(double)) => single > double,
        (Some(_), None) => true,
        (None, _) => false,
    };
    let doubled = s.peek_next() == Some(pair.ch);

    if !single_is_inner
        && doubled
        && let Some(open_index) = s.slots.close(pair.double)
    {
        log::trace!("closing {:?} at {}", pair.double, s.pos);
        s.close_span(pair.double, open_index);
        s.advance(2);
        return;
    }

    match s.slots.close(pair.single) {
        Some(open_index) => {
            log::trace!("closing {:?} at {}", pair.single, s.pos);
            s.close_span(pair.single, open_index);
        }
        None => {
            // Only the double span is open and the delimiter is not
            // doubled here. The character stays literal and the double
            // span is left for the finalizer; no close tag is fabricated
            s.emitter.push_char(pair.ch);
        }
    }
    s.advance(1);
}
