// Purpose - external interfaces, format conversions

pub mod converter;
pub mod midi;

/// Planar (one buffer per channel) output block handed to the engine.
#[derive(Debug, Default)]
pub struct AudioOutput {
    pub buffers: Vec<Vec<f32>>,
}

impl AudioOutput {
    /// Allocate `channel_count` zeroed buffers of `block_size` samples.
    pub fn channels(channel_count: usize, block_size: usize) -> Self {
        Self {
            buffers: vec![vec![0.0; block_size]; channel_count],
        }
    }

    /// Samples per channel; zero when there are no channels.
    pub fn block_len(&self) -> usize {
        self.buffers.first().map_or(0, Vec::len)
    }
}
