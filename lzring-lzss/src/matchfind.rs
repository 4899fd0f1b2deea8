//! Match-finding strategies.
//!
//! The encoder asks a [`MatchFinder`] for the best back-reference each
//! iteration. The search algorithm is a pluggable strategy (brute force,
//! hash chains, suffix structures, or an externally accelerated search all
//! fit behind the same trait), but every implementation must honor the same
//! tie-break rule, or two encoders stop producing byte-identical streams.

use crate::params::LzssParams;
use lzring_core::window::{LookaheadBuffer, SlidingWindow};

/// A candidate back-reference returned by a [`MatchFinder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match {
    /// Absolute window position where the match begins.
    pub offset: usize,
    /// Match length in bytes; zero means "no match worth encoding".
    pub length: usize,
}

impl Match {
    /// The "no match worth encoding" result.
    pub fn none() -> Self {
        Self {
            offset: 0,
            length: 0,
        }
    }
}

/// Strategy interface for the encoder's dictionary search.
///
/// `find_match` must locate the longest run in the window equal to a prefix
/// of the valid lookahead content, capped at
/// `min(params.max_coded(), lookahead.len())`, and return length zero when
/// nothing longer than `params.max_uncoded()` exists.
///
/// Two rules keep all implementations wire-identical:
///
/// - **Tie-break**: among equal-length candidates, the start position found
///   first scanning forward from `window_head` wins.
/// - **Self-reference**: a run may extend through `window_head` into the
///   region this very match will rewrite. Window positions the candidate
///   match has already rewritten by the time the run reaches them compare
///   against the corresponding matched lookahead byte; positions it has not
///   compare against the current (stale) window content. The decoder's
///   staged copy reads by the identical rule.
///
/// A finder may parallelize internally, but each call is a synchronous,
/// side-effect-free query returning the single deterministic winner.
pub trait MatchFinder {
    /// Search the window for the best match against the lookahead prefix.
    fn find_match(
        &mut self,
        params: &LzssParams,
        window: &SlidingWindow,
        window_head: usize,
        lookahead: &LookaheadBuffer,
        lookahead_head: usize,
    ) -> Match;
}

/// Reference brute-force search, O(window · max match) per call.
#[derive(Debug, Clone, Copy, Default)]
pub struct BruteForceFinder;

impl BruteForceFinder {
    /// Create a new brute-force finder.
    pub fn new() -> Self {
        Self
    }
}

impl MatchFinder for BruteForceFinder {
    fn find_match(
        &mut self,
        params: &LzssParams,
        window: &SlidingWindow,
        window_head: usize,
        lookahead: &LookaheadBuffer,
        lookahead_head: usize,
    ) -> Match {
        let cap = params.max_coded().min(lookahead.len());
        let mut best = Match::none();
        if cap == 0 {
            return best;
        }

        let window_size = window.capacity();
        for step in 0..window_size {
            let start = window.wrap(window_head + step);

            let mut len = 0;
            while len < cap {
                let src = window.wrap(start + len);
                // How many positions past the head this slot sits; if the
                // match has already rewritten it, compare against the
                // matched lookahead byte instead of the stale window byte.
                let rewritten = window.wrap(src + window_size - window_head);
                let candidate = if rewritten < len {
                    lookahead.get(lookahead_head + rewritten)
                } else {
                    window.get(src)
                };
                if candidate != lookahead.get(lookahead_head + len) {
                    break;
                }
                len += 1;
            }

            // Strict improvement keeps the first-found candidate on ties.
            if len > best.length {
                best = Match {
                    offset: start,
                    length: len,
                };
                if len >= cap {
                    break;
                }
            }
        }

        if best.length <= params.max_uncoded() {
            return Match::none();
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn lookahead_with(params: &LzssParams, data: &[u8]) -> LookaheadBuffer {
        let mut lookahead = LookaheadBuffer::new(params.max_coded());
        lookahead.fill(&mut Cursor::new(data)).unwrap();
        lookahead
    }

    #[test]
    fn test_no_match_in_untouched_window() {
        let params = LzssParams::DEFAULT;
        let window = SlidingWindow::new(params.window_size());
        let lookahead = lookahead_with(&params, b"ABCDEF");

        let m = BruteForceFinder::new().find_match(&params, &window, 0, &lookahead, 0);
        assert_eq!(m.length, 0);
    }

    #[test]
    fn test_plain_match() {
        let params = LzssParams::new(4, 2, 2).unwrap(); // window 16
        let mut window = SlidingWindow::new(params.window_size());
        for (i, &b) in b"ABCD".iter().enumerate() {
            window.set(i, b);
        }
        let lookahead = lookahead_with(&params, b"BCDQZW");

        let m = BruteForceFinder::new().find_match(&params, &window, 4, &lookahead, 0);
        assert_eq!(m.offset, 1);
        assert_eq!(m.length, 3);
    }

    #[test]
    fn test_short_match_not_worth_encoding() {
        let params = LzssParams::DEFAULT;
        let mut window = SlidingWindow::new(params.window_size());
        window.set(0, b'X');
        window.set(1, b'Y');
        let lookahead = lookahead_with(&params, b"XYQQQQ");

        // length 2 == max_uncoded: stays literal
        let m = BruteForceFinder::new().find_match(&params, &window, 2, &lookahead, 0);
        assert_eq!(m.length, 0);
    }

    #[test]
    fn test_self_referential_run() {
        // One 'A' in the window; the run extends through the head by
        // matching the lookahead against itself.
        let params = LzssParams::DEFAULT;
        let mut window = SlidingWindow::new(params.window_size());
        window.set(0, b'A');
        // State after the encoder emitted the first of ten 'A's as a
        // literal and hit EOF: nine valid bytes starting at position 1.
        let mut lookahead = lookahead_with(&params, b"AAAAAAAAAA");
        lookahead.shorten();

        let m = BruteForceFinder::new().find_match(&params, &window, 1, &lookahead, 1);
        assert_eq!(m.offset, 0);
        assert_eq!(m.length, 9);
    }

    #[test]
    fn test_length_capped_at_valid_lookahead() {
        let params = LzssParams::DEFAULT;
        let mut window = SlidingWindow::new(params.window_size());
        window.set(0, b'A');
        let mut lookahead = lookahead_with(&params, b"AAAA");
        lookahead.shorten(); // 3 valid bytes

        let m = BruteForceFinder::new().find_match(&params, &window, 1, &lookahead, 0);
        assert_eq!(m.length, 3);
    }

    #[test]
    fn test_tie_break_prefers_first_from_head() {
        let params = LzssParams::new(4, 2, 1).unwrap(); // window 16, max_uncoded 1
        let mut window = SlidingWindow::new(params.window_size());
        window.set(2, b'A');
        window.set(3, b'B');
        window.set(8, b'A');
        window.set(9, b'B');
        let lookahead = lookahead_with(&params, b"ABQZW");

        // Scanning forward from the head reaches position 2 before 8.
        let m = BruteForceFinder::new().find_match(&params, &window, 0, &lookahead, 0);
        assert_eq!(m.offset, 2);
        assert_eq!(m.length, 2);
    }

    #[test]
    fn test_scan_order_wraps_from_head() {
        let params = LzssParams::new(4, 2, 1).unwrap();
        let mut window = SlidingWindow::new(params.window_size());
        window.set(2, b'A');
        window.set(3, b'B');
        window.set(8, b'A');
        window.set(9, b'B');
        let lookahead = lookahead_with(&params, b"ABQZW");

        // From head 5 the forward scan meets position 8 first.
        let m = BruteForceFinder::new().find_match(&params, &window, 5, &lookahead, 0);
        assert_eq!(m.offset, 8);
        assert_eq!(m.length, 2);
    }
}
