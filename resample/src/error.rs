use thiserror::Error;

/// Errors returned by the resampler.
///
/// Resampling a slice of samples never fails; only building a [`Config`],
/// parsing a sample format and decoding raw PCM bytes can.
///
/// [`Config`]: crate::Config
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResampleError {
    #[error("resample: at least 1 channel is required (have {0})")]
    InvalidChannelCount(i64),

    #[error("resample: input sample rate must be bigger than 0 (got {0})")]
    InvalidSourceRate(i64),

    #[error("resample: output sample rate must be bigger than 0 (got {0})")]
    InvalidTargetRate(i64),

    #[error("resample: {len} bytes is not a multiple of the {sample_bytes}-byte sample size")]
    UnalignedData { len: usize, sample_bytes: usize },

    #[error("resample: unknown sample format: {0}")]
    UnknownFormat(String),
}

/// Result type for resample operations.
pub type Result<T> = std::result::Result<T, ResampleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            ResampleError::InvalidChannelCount(0).to_string(),
            "resample: at least 1 channel is required (have 0)"
        );
        assert_eq!(
            ResampleError::InvalidSourceRate(-1).to_string(),
            "resample: input sample rate must be bigger than 0 (got -1)"
        );
        assert_eq!(
            ResampleError::InvalidTargetRate(0).to_string(),
            "resample: output sample rate must be bigger than 0 (got 0)"
        );
    }

    #[test]
    fn test_unaligned_display() {
        let err = ResampleError::UnalignedData {
            len: 3,
            sample_bytes: 2,
        };
        assert!(err.to_string().contains("3 bytes"));
        assert!(err.to_string().contains("2-byte"));
    }

    #[test]
    fn test_unknown_format_display() {
        let err = ResampleError::UnknownFormat("wav".to_string());
        assert_eq!(err.to_string(), "resample: unknown sample format: wav");
    }
}
