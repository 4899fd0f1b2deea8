//! LZSS compression (encoding).
//!
//! The encoder walks the input through a lookahead buffer, queries the
//! match finder against the sliding window each iteration, and emits
//! flag-prefixed literal or match tokens into the bit stream. Empty input
//! produces empty output, not even a flush byte.

use crate::matchfind::{BruteForceFinder, MatchFinder};
use crate::params::{FLAG_LITERAL, FLAG_MATCH, LzssParams};
use lzring_core::bitstream::BitWriter;
use lzring_core::error::Result;
use lzring_core::window::{LookaheadBuffer, SlidingWindow};
use std::io::{self, Read, Write};

/// LZSS encoder.
///
/// Owns the format parameters and the match-finding strategy; each
/// [`encode`](LzssEncoder::encode) call owns its window, lookahead, and bit
/// stream, so an encoder can be reused across independent streams.
#[derive(Debug)]
pub struct LzssEncoder<F: MatchFinder = BruteForceFinder> {
    /// Format parameters.
    params: LzssParams,
    /// Dictionary search strategy.
    finder: F,
}

impl LzssEncoder<BruteForceFinder> {
    /// Create an encoder with the default format and the brute-force
    /// finder.
    pub fn new() -> Self {
        Self::with_params(LzssParams::DEFAULT)
    }

    /// Create an encoder with the given format and the brute-force finder.
    pub fn with_params(params: LzssParams) -> Self {
        Self {
            params,
            finder: BruteForceFinder::new(),
        }
    }
}

impl Default for LzssEncoder<BruteForceFinder> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: MatchFinder> LzssEncoder<F> {
    /// Create an encoder with a custom match-finding strategy.
    pub fn with_finder(params: LzssParams, finder: F) -> Self {
        Self { params, finder }
    }

    /// Get the format parameters.
    pub fn params(&self) -> &LzssParams {
        &self.params
    }

    /// Compress `input` into `output`.
    ///
    /// The output stream is flushed (zero-padded to a byte boundary) before
    /// returning. Any I/O failure aborts immediately; a half-written token
    /// cannot be un-written, so no recovery is attempted.
    pub fn encode<R: Read, W: Write>(&mut self, mut input: R, output: W) -> Result<()> {
        let mut window = SlidingWindow::new(self.params.window_size());
        let mut lookahead = LookaheadBuffer::new(self.params.max_coded());
        let mut bits = BitWriter::new(output);

        if lookahead.fill(&mut input)? == 0 {
            // Empty input: empty output, no trailing byte.
            return Ok(());
        }

        let mut window_head = 0usize;
        let mut lookahead_head = 0usize;

        while lookahead.len() > 0 {
            let mut found = self.finder.find_match(
                &self.params,
                &window,
                window_head,
                &lookahead,
                lookahead_head,
            );
            // Data beyond the end of input must not extend a match.
            if found.length > lookahead.len() {
                found.length = lookahead.len();
            }

            let advance = if found.length <= self.params.max_uncoded() {
                bits.write_bit(FLAG_LITERAL)?;
                bits.write_byte(lookahead.get(lookahead_head))?;
                1
            } else {
                bits.write_bit(FLAG_MATCH)?;
                bits.write_bits(found.offset as u32, self.params.offset_bits())?;
                bits.write_bits(
                    (found.length - self.params.min_coded()) as u32,
                    self.params.length_bits(),
                )?;
                found.length
            };

            // Move the coded bytes into the window; each vacated lookahead
            // slot takes one new input byte, or the valid count shrinks once
            // the input is exhausted.
            for _ in 0..advance {
                window.set(window_head, lookahead.get(lookahead_head));
                match read_input_byte(&mut input)? {
                    Some(byte) => lookahead.set(lookahead_head, byte),
                    None => lookahead.shorten(),
                }
                window_head = window.wrap(window_head + 1);
                lookahead_head = lookahead.wrap(lookahead_head + 1);
            }
        }

        bits.flush(false)?;
        Ok(())
    }
}

/// Pull one byte from the input, `None` at end of input.
fn read_input_byte<R: Read>(input: &mut R) -> Result<Option<u8>> {
    let mut byte = [0u8; 1];
    loop {
        match input.read(&mut byte) {
            Ok(0) => return Ok(None),
            Ok(_) => return Ok(Some(byte[0])),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        }
    }
}

/// Compress `input` into `output` with the default format.
pub fn encode_lzss<R: Read, W: Write>(input: R, output: W) -> Result<()> {
    LzssEncoder::new().encode(input, output)
}

/// Compress a byte slice with the default format.
pub fn compress(data: &[u8]) -> Result<Vec<u8>> {
    let mut output = Vec::new();
    LzssEncoder::new().encode(data, &mut output)?;
    Ok(output)
}
