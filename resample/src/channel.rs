//! Single-channel resampling.

use tracing::trace;

use crate::pcm::I16_SCALE;
use crate::spline::{self, WINDOW};

/// Samples held back at the end of a channel. A channel must be longer than
/// this to produce any output.
pub const TAIL_MARGIN: usize = 16;

/// Scale applied to every interpolated sample before it is emitted.
///
/// This is [`I16_SCALE`], the i16 full-scale value. It is applied on the f64
/// path too.
pub const OUTPUT_SCALE: f64 = I16_SCALE;

/// Resamples one channel from `from_rate` to `to_rate`.
///
/// Channels of [`TAIL_MARGIN`] samples or fewer yield the same number of
/// zeros. Otherwise an output sample is interpolated at every multiple of
/// `from_rate / to_rate` below `len - TAIL_MARGIN`, then divided by
/// [`OUTPUT_SCALE`].
///
/// Both rates must be positive and finite. The output is pre-allocated for
/// `(len - TAIL_MARGIN) * to_rate / from_rate` samples, so the ratio must keep
/// that allocatable. Rates taken from a [`Config`](crate::Config) divided by
/// its channel count satisfy the first condition.
pub fn resample_channel(samples: &[f64], from_rate: f64, to_rate: f64) -> Vec<f64> {
    if samples.len() <= TAIL_MARGIN {
        trace!(len = samples.len(), "channel too short, zero-filling");
        return vec![0.0; samples.len()];
    }

    let avail = (samples.len() - TAIL_MARGIN) as f64;
    let step = from_rate / to_rate;
    debug_assert!(step > 0.0 && step.is_finite(), "invalid step {}", step);
    let mut output = Vec::with_capacity((avail / step).ceil() as usize);

    let mut x = step;
    while x < avail {
        let base = x as usize;
        let window: [f64; WINDOW] = [
            samples[base],
            samples[base + 1],
            samples[base + 2],
            samples[base + 3],
        ];
        let y = spline::evaluate(&window, base as f64, x);
        output.push(y / OUTPUT_SCALE);
        x += step;
    }

    trace!(
        input = samples.len(),
        output = output.len(),
        step,
        "channel resampled"
    );
    output
}
