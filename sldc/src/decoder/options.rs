//! Decode options

/// Options controlling how a [`Decoder`](super::Decoder) treats anomalies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Fail on the first reportable anomaly instead of decoding best-effort.
    /// Default: false
    pub strict: bool,

    /// Log a bit window around each anomaly at `debug` level.
    /// Default: true
    pub dump_on_anomaly: bool,
}

impl DecodeOptions {
    /// Create permissive options, matching legacy decoder behavior.
    #[must_use]
    pub fn new() -> Self {
        Self {
            strict: false,
            dump_on_anomaly: true,
        }
    }

    /// Create options that reject any anomalous stream.
    #[must_use]
    pub fn strict() -> Self {
        Self::new().with_strict(true)
    }

    /// Set whether anomalies abort the decode.
    #[must_use]
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Set whether anomalies are accompanied by a bit dump.
    #[must_use]
    pub fn with_dump_on_anomaly(mut self, dump: bool) -> Self {
        self.dump_on_anomaly = dump;
        self
    }
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_permissive() {
        let opts = DecodeOptions::default();
        assert!(!opts.strict);
        assert!(opts.dump_on_anomaly);
    }

    #[test]
    fn test_strict_builder() {
        let opts = DecodeOptions::strict().with_dump_on_anomaly(false);
        assert!(opts.strict);
        assert!(!opts.dump_on_anomaly);
    }
}
