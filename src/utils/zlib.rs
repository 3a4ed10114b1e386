use std::io::{self, Read, Write};

use flate2::write::ZlibEncoder;
use flate2::{Compression, Decompress, FlushDecompress, Status};

const CHUNK_SIZE: usize = 8 * 1024;

/// Why `decompress` failed. Reading the source and decoding it are kept apart so callers can
/// tell an I/O problem from corrupt data.
#[derive(thiserror::Error, Debug)]
pub enum DecompressError {
    #[error("could not read compressed data")]
    Read(#[source] io::Error),
    #[error("data is not a valid zlib stream")]
    Corrupt(#[source] io::Error),
}

/// Compresses `bytes` using a zlib encoder.
///
/// # Errors
///
/// This function will fail if the `ZlibEncoder` fails.
pub fn compress(bytes: &[u8]) -> io::Result<Vec<u8>> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(bytes)?;
    encoder.finish()
}

/// Returns the data read from `reader` decompressed.
///
/// The reader is consumed in chunks, so a `File` can be passed directly without loading the
/// compressed bytes first. Anything after the end of the zlib stream is ignored.
///
/// # Errors
///
/// This function will fail with `DecompressError::Read` if reading from `reader` fails, and with
/// `DecompressError::Corrupt` if the data is not a complete zlib stream (bad header, truncated
/// data or checksum mismatch).
pub fn decompress<R: Read>(mut reader: R) -> Result<Vec<u8>, DecompressError> {
    let mut inflater = Decompress::new(true);
    let mut input = [0u8; CHUNK_SIZE];
    let mut output = Vec::with_capacity(CHUNK_SIZE);

    loop {
        let read = reader.read(&mut input).map_err(DecompressError::Read)?;
        let eof = read == 0;
        let flush = if eof {
            FlushDecompress::Finish
        } else {
            FlushDecompress::None
        };

        let mut chunk = &input[..read];
        loop {
            output.reserve(CHUNK_SIZE);
            let (in_before, out_before) = (inflater.total_in(), inflater.total_out());
            let status = inflater
                .decompress_vec(chunk, &mut output, flush)
                .map_err(|e| {
                    DecompressError::Corrupt(io::Error::new(io::ErrorKind::InvalidData, e))
                })?;

            if status == Status::StreamEnd {
                return Ok(output);
            }

            chunk = &chunk[(inflater.total_in() - in_before) as usize..];
            // the inflater may still hold output after eating the whole chunk
            if chunk.is_empty() && inflater.total_out() == out_before {
                break;
            }
        }

        if eof {
            return Err(DecompressError::Corrupt(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "zlib stream ended before its end marker",
            )));
        }
    }
}

// Tests
