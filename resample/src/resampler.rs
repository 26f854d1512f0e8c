//! Interleaved buffer resampling.

use std::borrow::Cow;

use tracing::{debug, trace};

use crate::channel::resample_channel;
use crate::config::Config;
use crate::error::Result;
use crate::pcm::{self, SampleFormat};

/// Resamples whole interleaved PCM buffers with a fixed [`Config`].
///
/// The resampler is stateless between calls: every call sees the complete
/// buffer and allocates its own working storage. It is `Copy` and can be
/// shared across threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resampler {
    config: Config,
}

impl Resampler {
    /// Creates a resampler for `config`.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    pub fn config(&self) -> Config {
        self.config
    }

    /// Resamples an interleaved buffer of normalized floats.
    ///
    /// When source and target rates are equal the input is returned as
    /// [`Cow::Borrowed`], sharing storage with `data`. Callers must not assume
    /// a fresh allocation.
    pub fn resample_f64<'a>(&self, data: &'a [f64]) -> Cow<'a, [f64]> {
        if data.is_empty() {
            return Cow::Owned(Vec::new());
        }
        if self.config.is_identity() {
            trace!(len = data.len(), "identity rate, borrowing input");
            return Cow::Borrowed(data);
        }

        let num_channels = self.config.channels();
        debug!(
            len = data.len(),
            channels = num_channels,
            from = self.config.from_rate(),
            to = self.config.to_rate(),
            "resampling buffer"
        );

        // Split channels
        let per_channel = data.len().div_ceil(num_channels);
        let mut channels: Vec<Vec<f64>> = (0..num_channels)
            .map(|_| Vec::with_capacity(per_channel))
            .collect();
        for (i, &sample) in data.iter().enumerate() {
            channels[i % num_channels].push(sample);
        }

        let from = self.config.channel_from_rate();
        let to = self.config.channel_to_rate();
        let resampled: Vec<Vec<f64>> = channels
            .iter()
            .map(|ch| resample_channel(ch, from, to))
            .collect();

        // Interleave, holding the last sample of a channel that ran short.
        let mut output = vec![0.0; self.config.output_len(data.len())];
        for (i, slot) in output.iter_mut().enumerate() {
            let channel = &resampled[i % num_channels];
            if channel.is_empty() {
                continue;
            }
            let idx = (i / num_channels).min(channel.len() - 1);
            *slot = channel[idx];
        }

        debug!(output = output.len(), "buffer resampled");
        Cow::Owned(output)
    }

    /// Resamples an interleaved buffer of 16-bit samples.
    ///
    /// Samples are normalized by `32767`, resampled with
    /// [`resample_f64`](Self::resample_f64), then scaled back and truncated
    /// toward zero.
    pub fn resample_i16(&self, data: &[i16]) -> Vec<i16> {
        let normalized: Vec<f64> = data.iter().map(|&s| pcm::i16_to_f64(s)).collect();
        self.resample_f64(&normalized)
            .iter()
            .map(|&v| pcm::f64_to_i16(v))
            .collect()
    }

    /// Resamples a raw little-endian PCM buffer in `format`.
    ///
    /// 16-bit input goes through [`resample_i16`](Self::resample_i16); float
    /// input through [`resample_f64`](Self::resample_f64), with f32 widened
    /// and narrowed back.
    pub fn resample_bytes(&self, data: &[u8], format: SampleFormat) -> Result<Vec<u8>> {
        let out = match format {
            SampleFormat::S16Le => {
                let samples = pcm::decode_s16le(data)?;
                pcm::encode_s16le(&self.resample_i16(&samples))
            }
            SampleFormat::F32Le => {
                let samples: Vec<f64> = pcm::decode_f32le(data)?
                    .into_iter()
                    .map(f64::from)
                    .collect();
                let resampled: Vec<f32> = self
                    .resample_f64(&samples)
                    .iter()
                    .map(|&v| v as f32)
                    .collect();
                pcm::encode_f32le(&resampled)
            }
            SampleFormat::F64Le => {
                let samples = pcm::decode_f64le(data)?;
                pcm::encode_f64le(&self.resample_f64(&samples))
            }
        };
        Ok(out)
    }
}

impl From<Config> for Resampler {
    fn from(config: Config) -> Self {
        Self::new(config)
    }
}

/// Resamples an interleaved float buffer with `config`.
///
/// See [`Resampler::resample_f64`].
pub fn resample_f64<'a>(data: &'a [f64], config: &Config) -> Cow<'a, [f64]> {
    Resampler::new(*config).resample_f64(data)
}

/// Resamples an interleaved 16-bit buffer with `config`.
///
/// See [`Resampler::resample_i16`].
pub fn resample_i16(data: &[i16], config: &Config) -> Vec<i16> {
    Resampler::new(*config).resample_i16(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::channel::OUTPUT_SCALE;

    fn resampler(channels: i64, from: i64, to: i64) -> Resampler {
        Resampler::new(Config::new(channels, from, to).unwrap())
    }

    #[test]
    fn test_empty_input() {
        let r = resampler(2, 44100, 16000);
        assert!(r.resample_f64(&[]).is_empty());
        assert!(r.resample_i16(&[]).is_empty());

        let r = resampler(1, 16000, 16000);
        assert!(r.resample_f64(&[]).is_empty());
    }

    #[test]
    fn test_identity_borrows() {
        let r = resampler(2, 16000, 16000);
        let data = vec![0.1, 0.2, 0.3, 0.4];
        let out = r.resample_f64(&data);
        assert!(matches!(out, Cow::Borrowed(_)));
        assert_eq!(out.as_ptr(), data.as_ptr());
        assert_eq!(&*out, &data[..]);
    }

    #[test]
    fn test_output_length() {
        let r = resampler(2, 48000, 16000);
        let data = vec![0.0; 960];
        assert_eq!(r.resample_f64(&data).len(), 320);

        let r = resampler(1, 16000, 24000);
        let data = vec![0.0; 100];
        assert_eq!(r.resample_f64(&data).len(), 150);
    }

    #[test]
    fn test_upsample_mono_ramp() {
        let r = resampler(1, 1, 2);
        let data: Vec<f64> = (0..20).map(|i| i as f64).collect();
        let out = r.resample_f64(&data);

        assert_eq!(out.len(), 40);
        assert_eq!(out[0], 0.5 / OUTPUT_SCALE);
        // 7 resampled samples, the rest holds the last one
        let last = out[6];
        assert!((last * OUTPUT_SCALE - 3.5).abs() < 1e-9);
        assert!(out[7..].iter().all(|&v| v == last));
    }

    #[test]
    fn test_stereo_channels_independent() {
        let r = resampler(2, 2, 4);
        let mut data = Vec::new();
        for i in 0..40 {
            data.push(i as f64);
            data.push(-(i as f64));
        }
        let out = r.resample_f64(&data);

        assert_eq!(out.len(), 160);
        for frame in out.chunks_exact(2).take(10) {
            assert!((frame[0] + frame[1]).abs() < 1e-12);
        }
        assert!(out[0] > 0.0);
        assert!(out[1] < 0.0);
    }

    #[test]
    fn test_short_buffer_zero_filled() {
        let r = resampler(2, 8000, 16000);
        let data = vec![0.5; 20];
        let out = r.resample_f64(&data);
        // 10 samples per channel resample to 10 zeros each
        assert_eq!(out.len(), 40);
        assert!(out.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_length_not_multiple_of_channels() {
        // channel 0 gets 18 samples, channel 1 gets 17
        let r = resampler(2, 1, 2);
        let data: Vec<f64> = (0..35).map(|i| i as f64).collect();
        let out = r.resample_f64(&data);

        assert_eq!(out.len(), 70);
        // ch0 avail 2 -> x = 0.5, 1, 1.5; ch1 avail 1 -> x = 0.5
        for (i, v) in out.iter().enumerate().skip(2) {
            if i % 2 == 1 {
                assert_eq!(*v, out[1]);
            }
        }
        assert_eq!(out[4], out[68]);
        assert_ne!(out[0], out[2]);
    }

    #[test]
    fn test_resample_i16_identity() {
        let r = resampler(1, 16000, 16000);
        assert_eq!(r.resample_i16(&[0, 16384, -16384]), vec![0, 16384, -16384]);
        assert_eq!(r.resample_i16(&[i16::MAX, i16::MIN + 1]), vec![i16::MAX, i16::MIN + 1]);
    }

    #[test]
    fn test_resample_i16_scaled_down() {
        // Every interpolated value is divided by 32767 inside the channel
        // resampler, so i16 output collapses towards zero.
        let r = resampler(1, 16000, 8000);
        let data = vec![i16::MAX; 64];
        let out = r.resample_i16(&data);
        assert_eq!(out.len(), 32);
        assert!(out.iter().all(|&s| s == 0 || s == 1));
    }

    #[test]
    fn test_resample_bytes_s16le() {
        let r = resampler(1, 16000, 16000);
        let data = pcm::encode_s16le(&[100, -200, 300]);
        assert_eq!(r.resample_bytes(&data, SampleFormat::S16Le).unwrap(), data);
        assert!(r.resample_bytes(&data[..5], SampleFormat::S16Le).is_err());
    }

    #[test]
    fn test_resample_bytes_float() {
        let r = resampler(1, 1, 2);
        let samples: Vec<f64> = (0..20).map(|i| i as f64).collect();

        let out = r
            .resample_bytes(&pcm::encode_f64le(&samples), SampleFormat::F64Le)
            .unwrap();
        let out = pcm::decode_f64le(&out).unwrap();
        assert_eq!(out, r.resample_f64(&samples).into_owned());

        let samples32: Vec<f32> = samples.iter().map(|&v| v as f32).collect();
        let out = r
            .resample_bytes(&pcm::encode_f32le(&samples32), SampleFormat::F32Le)
            .unwrap();
        assert_eq!(out.len(), 40 * 4);
    }

    #[test]
    fn test_free_functions() {
        let cfg = Config::new(1, 1, 2).unwrap();
        let data: Vec<f64> = (0..20).map(|i| i as f64).collect();
        assert_eq!(resample_f64(&data, &cfg), Resampler::from(cfg).resample_f64(&data));
        assert_eq!(resample_i16(&[1, 2, 3], &cfg), vec![0; 6]);
    }
}
