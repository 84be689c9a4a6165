use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{DataPoint, XYSource};
use crate::error::{PlotError, PlotResult};

const SAMPLE_WIDTH_BYTES: usize = std::mem::size_of::<f64>();
// Upfront reservation only; longer reads grow the buffer as samples arrive.
const MAX_PREALLOCATED_SAMPLES: usize = 1 << 20;

/// Fixed-rate measurement trace.
///
/// X values are derived from the sample index (`x = i / sample_rate`), so a
/// trace always starts at `0.0` seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SampleSeriesFields")]
pub struct SampleSeries {
    samples: Vec<f64>,
    sample_rate: f64,
}

#[derive(Deserialize)]
struct SampleSeriesFields {
    samples: Vec<f64>,
    sample_rate: f64,
}

impl TryFrom<SampleSeriesFields> for SampleSeries {
    type Error = PlotError;

    fn try_from(fields: SampleSeriesFields) -> PlotResult<Self> {
        Self::new(fields.samples, fields.sample_rate)
    }
}

impl SampleSeries {
    pub fn new(samples: Vec<f64>, sample_rate: f64) -> PlotResult<Self> {
        if !sample_rate.is_finite() || sample_rate <= 0.0 {
            return Err(PlotError::InvalidData(format!(
                "sample rate must be finite and > 0, got {sample_rate}"
            )));
        }

        Ok(Self {
            samples,
            sample_rate,
        })
    }

    /// Reads exactly `count` big-endian `f64` values from `reader`.
    ///
    /// A reader that ends early fails with `PlotError::Io`
    /// (`UnexpectedEof`); nothing is padded.
    pub fn read_big_endian<R: Read>(
        mut reader: R,
        count: usize,
        sample_rate: f64,
    ) -> PlotResult<Self> {
        let mut samples = Vec::with_capacity(count.min(MAX_PREALLOCATED_SAMPLES));
        let mut word = [0_u8; SAMPLE_WIDTH_BYTES];
        for _ in 0..count {
            reader.read_exact(&mut word)?;
            samples.push(f64::from_be_bytes(word));
        }

        Self::new(samples, sample_rate)
    }

    /// Loads `count` big-endian `f64` samples from a file on disk.
    pub fn load_big_endian(
        path: impl AsRef<Path>,
        count: usize,
        sample_rate: f64,
    ) -> PlotResult<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let series = Self::read_big_endian(BufReader::new(file), count, sample_rate)?;
        debug!(
            path = %path.display(),
            count,
            sample_rate,
            "loaded sample series"
        );
        Ok(series)
    }

    #[must_use]
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    #[must_use]
    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    /// Trace length in seconds (`len / sample_rate`).
    #[must_use]
    pub fn duration(&self) -> f64 {
        self.samples.len() as f64 / self.sample_rate
    }

    #[must_use]
    pub fn into_samples(self) -> Vec<f64> {
        self.samples
    }
}

impl XYSource for SampleSeries {
    fn len(&self) -> usize {
        self.samples.len()
    }

    fn xy(&self, index: usize) -> DataPoint {
        DataPoint::new(index as f64 / self.sample_rate, self.samples[index])
    }
}
