//! Decoded audio timelines with millisecond-indexed slicing.

use crate::error::{AudioError, Result};
use hound::{SampleFormat, WavReader, WavSpec, WavWriter};
use std::path::Path;

/// Decoded audio: interleaved samples normalized to [-1.0, 1.0] plus the
/// source WAV spec, so the timeline can be re-encoded in its original format.
#[derive(Clone, Debug)]
pub struct Timeline {
    samples: Vec<f32>,
    spec: WavSpec,
}

impl Timeline {
    /// Decode a WAV file into a timeline.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or has an unsupported
    /// channel layout (mono and stereo are accepted).
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut reader = WavReader::open(path)?;
        let spec = reader.spec();

        if spec.channels == 0 || spec.channels > 2 {
            return Err(AudioError::InvalidChannels(spec.channels).into());
        }

        let samples: Vec<f32> = match spec.sample_format {
            SampleFormat::Float => reader.samples::<f32>().collect::<hound::Result<_>>()?,
            SampleFormat::Int => {
                let scale = (1i64 << (spec.bits_per_sample - 1)) as f32;
                reader
                    .samples::<i32>()
                    .map(|s| s.map(|s| s as f32 / scale))
                    .collect::<hound::Result<_>>()?
            }
        };

        Ok(Self { samples, spec })
    }

    pub fn new(samples: Vec<f32>, spec: WavSpec) -> Self {
        Self { samples, spec }
    }

    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    pub fn spec(&self) -> WavSpec {
        self.spec
    }

    /// Total duration in whole milliseconds.
    pub fn duration_ms(&self) -> u64 {
        self.frames() * 1000 / self.spec.sample_rate as u64
    }

    /// Number of sample frames (one frame spans all channels).
    fn frames(&self) -> u64 {
        self.samples.len() as u64 / self.spec.channels as u64
    }

    /// First sample index of the frame at `ms`, clamped to the timeline end.
    fn sample_index_at_ms(&self, ms: u64) -> usize {
        let frame = ms * self.spec.sample_rate as u64 / 1000;
        let index = frame * self.spec.channels as u64;
        (index as usize).min(self.samples.len())
    }

    /// Slice the half-open range `[start_ms, end_ms)`. Out-of-range bounds
    /// clamp to the timeline end; the result is never an error.
    pub fn slice_ms(&self, start_ms: u64, end_ms: u64) -> Self {
        let start = self.sample_index_at_ms(start_ms);
        let end = self.sample_index_at_ms(end_ms.max(start_ms));
        Self {
            samples: self.samples[start..end].to_vec(),
            spec: self.spec,
        }
    }

    /// A silent timeline of `ms` milliseconds matching this timeline's spec.
    pub fn silence(&self, ms: u64) -> Self {
        let frames = ms * self.spec.sample_rate as u64 / 1000;
        Self {
            samples: vec![0.0; frames as usize * self.spec.channels as usize],
            spec: self.spec,
        }
    }

    /// Concatenate, producing a new timeline. Associative; the duration of
    /// the result is the sum of the operands' durations. Both operands must
    /// share a spec (all parts of one pipeline derive from the same source).
    pub fn concat(mut self, other: &Self) -> Self {
        debug_assert_eq!(self.spec, other.spec);
        self.samples.extend_from_slice(&other.samples);
        self
    }

    /// Encode to a WAV file preserving the source spec.
    pub fn write_wav<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut writer = WavWriter::create(path, self.spec)?;
        match self.spec.sample_format {
            SampleFormat::Float => {
                for &sample in &self.samples {
                    writer.write_sample(sample)?;
                }
            }
            SampleFormat::Int => {
                let scale = (1i64 << (self.spec.bits_per_sample - 1)) as f32;
                for &sample in &self.samples {
                    let value = (sample * scale).clamp(-scale, scale - 1.0) as i32;
                    writer.write_sample(value)?;
                }
            }
        }
        writer.finalize()?;
        Ok(())
    }

    /// Encode to a 16-bit PCM WAV file regardless of the source spec.
    pub fn write_wav_pcm16<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let spec = WavSpec {
            channels: self.spec.channels,
            sample_rate: self.spec.sample_rate,
            bits_per_sample: 16,
            sample_format: SampleFormat::Int,
        };
        let mut writer = WavWriter::create(path, spec)?;
        for &sample in &self.samples {
            let value = (sample * 32768.0).clamp(-32768.0, 32767.0) as i16;
            writer.write_sample(value)?;
        }
        writer.finalize()?;
        Ok(())
    }

    /// Downmix to mono 16-bit PCM for wire transfer, with the sample rate.
    pub fn mono_pcm16(&self) -> (Vec<i16>, u32) {
        let channels = self.spec.channels as usize;
        let pcm = self
            .samples
            .chunks(channels)
            .map(|frame| {
                let mixed = frame.iter().sum::<f32>() / channels as f32;
                (mixed * 32768.0).clamp(-32768.0, 32767.0) as i16
            })
            .collect();
        (pcm, self.spec.sample_rate)
    }
}
