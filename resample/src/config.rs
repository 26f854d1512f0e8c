//! Resampler configuration.

use serde::{Deserialize, Serialize};

use crate::error::{ResampleError, Result};

/// Validated resampling parameters.
///
/// A `Config` can only be obtained through [`Config::new`] (or by
/// deserializing, which runs the same checks), so every value in circulation
/// has at least one channel and positive rates. It holds no mutable state and
/// may be shared freely across threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawConfig", into = "RawConfig")]
pub struct Config {
    channels: usize,
    from_rate: u64,
    to_rate: u64,
}

impl Config {
    /// Creates a new configuration.
    ///
    /// Checks run in order (channels, source rate, target rate) and the first
    /// failure is returned.
    pub fn new(channels: i64, from_rate: i64, to_rate: i64) -> Result<Self> {
        if channels < 1 {
            return Err(ResampleError::InvalidChannelCount(channels));
        }
        if from_rate < 1 {
            return Err(ResampleError::InvalidSourceRate(from_rate));
        }
        if to_rate < 1 {
            return Err(ResampleError::InvalidTargetRate(to_rate));
        }

        Ok(Self {
            channels: channels as usize,
            from_rate: from_rate as u64,
            to_rate: to_rate as u64,
        })
    }

    /// Returns the number of interleaved channels.
    pub fn channels(&self) -> usize {
        self.channels
    }

    /// Returns the source sample rate.
    pub fn from_rate(&self) -> u64 {
        self.from_rate
    }

    /// Returns the target sample rate.
    pub fn to_rate(&self) -> u64 {
        self.to_rate
    }

    /// Returns true if source and target rates match.
    pub fn is_identity(&self) -> bool {
        self.from_rate == self.to_rate
    }

    /// Returns the per-channel source rate.
    pub fn channel_from_rate(&self) -> f64 {
        self.from_rate as f64 / self.channels as f64
    }

    /// Returns the per-channel target rate.
    pub fn channel_to_rate(&self) -> f64 {
        self.to_rate as f64 / self.channels as f64
    }

    /// Returns the distance, in source samples, between two output samples
    /// of one channel.
    pub fn step(&self) -> f64 {
        self.channel_from_rate() / self.channel_to_rate()
    }

    /// Returns the interleaved output length for an input of `input_len`
    /// samples.
    pub fn output_len(&self, input_len: usize) -> usize {
        ((input_len as f64 / self.from_rate as f64) * self.to_rate as f64) as usize
    }
}

/// On-disk shape of [`Config`].
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawConfig {
    #[serde(default = "default_channels")]
    channels: i64,
    from_rate: i64,
    to_rate: i64,
}

fn default_channels() -> i64 {
    1
}

impl TryFrom<RawConfig> for Config {
    type Error = ResampleError;

    fn try_from(raw: RawConfig) -> Result<Self> {
        Config::new(raw.channels, raw.from_rate, raw.to_rate)
    }
}

impl From<Config> for RawConfig {
    fn from(cfg: Config) -> Self {
        Self {
            channels: cfg.channels as i64,
            from_rate: cfg.from_rate as i64,
            to_rate: cfg.to_rate as i64,
        }
    }
}
