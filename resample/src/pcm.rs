//! Raw PCM sample encodings.
//!
//! Buffers are headerless, interleaved, little-endian. Decoding checks that
//! the byte count is a whole number of samples; encoding never fails.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ResampleError, Result};

/// Full-scale value of a 16-bit sample.
pub const I16_SCALE: f64 = 0x7FFF as f64;

/// Sample encoding of a raw PCM buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SampleFormat {
    /// Signed 16-bit little-endian.
    #[default]
    S16Le,
    /// 32-bit float little-endian.
    F32Le,
    /// 64-bit float little-endian.
    F64Le,
}

impl SampleFormat {
    /// Returns the size of one sample in bytes.
    pub fn bytes_per_sample(&self) -> usize {
        match self {
            SampleFormat::S16Le => 2,
            SampleFormat::F32Le => 4,
            SampleFormat::F64Le => 8,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            SampleFormat::S16Le => "s16le",
            SampleFormat::F32Le => "f32le",
            SampleFormat::F64Le => "f64le",
        }
    }
}

impl fmt::Display for SampleFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SampleFormat {
    type Err = ResampleError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "s16le" | "s16" | "pcm" => Ok(SampleFormat::S16Le),
            "f32le" | "f32" => Ok(SampleFormat::F32Le),
            "f64le" | "f64" => Ok(SampleFormat::F64Le),
            other => Err(ResampleError::UnknownFormat(other.to_string())),
        }
    }
}

/// Converts a 16-bit sample to a normalized float.
#[inline]
pub fn i16_to_f64(sample: i16) -> f64 {
    sample as f64 / I16_SCALE
}

/// Converts a normalized float back to a 16-bit sample, truncating toward
/// zero. Out-of-range values saturate.
#[inline]
pub fn f64_to_i16(sample: f64) -> i16 {
    (sample * I16_SCALE) as i16
}

fn check_aligned(data: &[u8], format: SampleFormat) -> Result<()> {
    let sample_bytes = format.bytes_per_sample();
    if data.len() % sample_bytes != 0 {
        return Err(ResampleError::UnalignedData {
            len: data.len(),
            sample_bytes,
        });
    }
    Ok(())
}

/// Decodes signed 16-bit little-endian samples.
pub fn decode_s16le(data: &[u8]) -> Result<Vec<i16>> {
    check_aligned(data, SampleFormat::S16Le)?;
    Ok(data
        .chunks_exact(2)
        .map(|b| i16::from_le_bytes([b[0], b[1]]))
        .collect())
}

/// Encodes samples as signed 16-bit little-endian.
pub fn encode_s16le(samples: &[i16]) -> Vec<u8> {
    let mut data = Vec::with_capacity(samples.len() * 2);
    for sample in samples {
        data.extend_from_slice(&sample.to_le_bytes());
    }
    data
}

/// Decodes 32-bit float little-endian samples.
pub fn decode_f32le(data: &[u8]) -> Result<Vec<f32>> {
    check_aligned(data, SampleFormat::F32Le)?;
    Ok(data
        .chunks_exact(4)
        .map(|b| f32::from_le_bytes([b[0], b[1], b[2], b[3]]))
        .collect())
}

/// Encodes samples as 32-bit float little-endian.
pub fn encode_f32le(samples: &[f32]) -> Vec<u8> {
    let mut data = Vec::with_capacity(samples.len() * 4);
    for sample in samples {
        data.extend_from_slice(&sample.to_le_bytes());
    }
    data
}

/// Decodes 64-bit float little-endian samples.
pub fn decode_f64le(data: &[u8]) -> Result<Vec<f64>> {
    check_aligned(data, SampleFormat::F64Le)?;
    Ok(data
        .chunks_exact(8)
        .map(|b| f64::from_le_bytes([b[0], b[1], b[2], b[3], b[4], b[5], b[6], b[7]]))
        .collect())
}

/// Encodes samples as 64-bit float little-endian.
pub fn encode_f64le(samples: &[f64]) -> Vec<u8> {
    let mut data = Vec::with_capacity(samples.len() * 8);
    for sample in samples {
        data.extend_from_slice(&sample.to_le_bytes());
    }
    data
}
