//! LZSS decompression (decoding).
//!
//! The decoder rebuilds the window as it emits output, so a match token is
//! just a window copy. Termination is driven entirely by the reader: the
//! loop stops the first time a flag bit, or any field after it, cannot be
//! completed, which is why trailing pad bits are never misread as data. A
//! truncated stream therefore yields truncated output, not an error.

use crate::params::{FLAG_LITERAL, LzssParams};
use lzring_core::bitstream::BitReader;
use lzring_core::error::Result;
use lzring_core::window::SlidingWindow;
use std::io::{Read, Write};

/// LZSS decoder.
#[derive(Debug)]
pub struct LzssDecoder {
    /// Format parameters; must match the encoder's exactly.
    params: LzssParams,
}

impl LzssDecoder {
    /// Create a decoder with the default format.
    pub fn new() -> Self {
        Self::with_params(LzssParams::DEFAULT)
    }

    /// Create a decoder with the given format.
    pub fn with_params(params: LzssParams) -> Self {
        Self { params }
    }

    /// Get the format parameters.
    pub fn params(&self) -> &LzssParams {
        &self.params
    }

    /// Decompress `input` into `output`.
    ///
    /// Stops cleanly at end of stream, also when it strikes inside a token;
    /// a partial token contributes nothing to the output.
    pub fn decode<R: Read, W: Write>(&self, input: R, mut output: W) -> Result<()> {
        let mut window = SlidingWindow::new(self.params.window_size());
        let mut bits = BitReader::new(input);
        // Staging area for match copies; source and destination ranges may
        // overlap in the window, so bytes are staged before any slot is
        // rewritten.
        let mut staging = vec![0u8; self.params.max_coded()];
        let mut next_char = 0usize;

        loop {
            let Some(flag) = bits.read_bit()? else {
                break;
            };

            if flag == FLAG_LITERAL {
                let Some(byte) = bits.read_byte()? else {
                    break;
                };
                output.write_all(&[byte])?;
                window.set(next_char, byte);
                next_char = window.wrap(next_char + 1);
            } else {
                let Some(offset) = bits.read_bits(self.params.offset_bits())? else {
                    break;
                };
                let Some(raw_length) = bits.read_bits(self.params.length_bits())? else {
                    break;
                };
                let offset = offset as usize;
                let length = raw_length as usize + self.params.min_coded();

                let window_size = window.capacity();
                for i in 0..length {
                    let src = window.wrap(offset + i);
                    // A source slot this token has already produced reads
                    // the staged byte; anything else reads the pre-token
                    // window, stale history included.
                    let produced = window.wrap(src + window_size - next_char);
                    staging[i] = if produced < i {
                        staging[produced]
                    } else {
                        window.get(src)
                    };
                }

                output.write_all(&staging[..length])?;
                for (i, &byte) in staging[..length].iter().enumerate() {
                    window.set(next_char + i, byte);
                }
                next_char = window.wrap(next_char + length);
            }
        }

        output.flush()?;
        Ok(())
    }
}

impl Default for LzssDecoder {
    fn default() -> Self {
        Self::new()
    }
}

/// Decompress `input` into `output` with the default format.
pub fn decode_lzss<R: Read, W: Write>(input: R, output: W) -> Result<()> {
    LzssDecoder::new().decode(input, output)
}

/// Decompress a byte slice with the default format.
pub fn decompress(data: &[u8]) -> Result<Vec<u8>> {
    let mut output = Vec::new();
    LzssDecoder::new().decode(data, &mut output)?;
    Ok(output)
}
