//! Sample rate conversion for interleaved PCM audio.
//!
//! This crate resamples whole buffers using a natural cubic spline evaluated
//! over a sliding 4-sample window, one channel at a time:
//!
//! - `config`: validated channel count and source/target rates
//! - `spline`: the 4-point natural cubic spline
//! - `channel`: resampling of a single de-interleaved channel
//! - `resampler`: de-interleave, resample, re-interleave for f64 and i16 buffers
//! - `pcm`: raw little-endian sample codecs
//!
//! # Example
//!
//! ```rust
//! use giztoy_resample::{Config, Resampler};
//!
//! // Stereo, 48kHz to 16kHz
//! let config = Config::new(2, 48000, 16000).unwrap();
//! let resampler = Resampler::new(config);
//!
//! let input = vec![0i16; 960]; // 10ms of stereo audio
//! let output = resampler.resample_i16(&input);
//! assert_eq!(output.len(), 320);
//! ```

pub mod channel;
pub mod config;
mod error;
pub mod pcm;
pub mod resampler;
pub mod spline;

pub use channel::resample_channel;
pub use config::Config;
pub use error::{ResampleError, Result};
pub use pcm::SampleFormat;
pub use resampler::{Resampler, resample_f64, resample_i16};
