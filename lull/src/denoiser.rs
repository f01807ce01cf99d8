use std::mem;

use glam::Vec3;
use log::{debug, info, log_enabled, trace, Level};

use crate::kernels::Vec3Ext;
use crate::{
    accumulate, measure, reproject, spatial_filter, Buffer2D, DenoiserConfig,
    Error, Frame, Result,
};

/// Temporal denoiser.
///
/// Starts cold, without any history; the first frame is only spatially
/// filtered and becomes the history all further frames are accumulated
/// into.
///
/// Frames must be submitted in the order they were rendered.
#[derive(Debug)]
pub struct Denoiser {
    config: DenoiserConfig,
    history: Option<History>,
    frames_processed: u64,
}

#[derive(Debug)]
struct History {
    accumulated: Buffer2D<Vec3>,
    scratch: Buffer2D<Vec3>,
    valid: Buffer2D<bool>,
    prev_frame: Frame,
}

impl Denoiser {
    pub fn new(config: DenoiserConfig) -> Self {
        info!("Initializing denoiser; config={config:?}");

        Self {
            config,
            history: None,
            frames_processed: 0,
        }
    }

    /// Denoises given frame and returns the accumulated color.
    ///
    /// Fails if the frame's size differs from the size of frames processed
    /// before; in that case the denoiser's state stays untouched.
    pub fn process_frame(&mut self, frame: Frame) -> Result<&Buffer2D<Vec3>> {
        if let Some(history) = &self.history {
            let expected = history.prev_frame.size();

            if frame.size() != expected {
                return Err(Error::FrameSizeMismatch {
                    buffer: "beauty",
                    expected,
                    actual: frame.size(),
                });
            }
        }

        let config = self.config;
        let filtered =
            measure("spatial_filter", || spatial_filter(&frame, &config));

        let history = match self.history.take() {
            None => {
                let size = frame.size();

                info!("Warming up; size={}x{}", size.x, size.y);

                History {
                    scratch: Buffer2D::new(size),
                    valid: Buffer2D::new(size),
                    accumulated: filtered,
                    prev_frame: frame,
                }
            }

            Some(mut history) => {
                measure("reproject", || {
                    reproject(
                        &frame,
                        &history.prev_frame,
                        &history.accumulated,
                        &mut history.scratch,
                        &mut history.valid,
                    )
                });

                // Reprojected colors become the history, while the previous
                // accumulation buffer gets reused for the output
                mem::swap(&mut history.scratch, &mut history.accumulated);

                measure("accumulate", || {
                    accumulate(
                        &history.valid,
                        &history.accumulated,
                        &filtered,
                        &config,
                        &mut history.scratch,
                    )
                });

                mem::swap(&mut history.scratch, &mut history.accumulated);

                if log_enabled!(Level::Debug) {
                    let valid =
                        history.valid.as_slice().iter().filter(|v| **v).count();

                    debug!(
                        "Frame #{} reprojected; valid pixels: {} / {}",
                        self.frames_processed,
                        valid,
                        history.valid.len(),
                    );
                }

                history.prev_frame = frame;
                history
            }
        };

        self.frames_processed += 1;

        let accumulated = &self.history.insert(history).accumulated;

        if log_enabled!(Level::Trace) {
            trace!("Mean luma: {}", mean_luma(accumulated));
        }

        Ok(accumulated)
    }

    /// Returns whether the denoiser has processed at least one frame.
    pub fn is_warm(&self) -> bool {
        self.history.is_some()
    }

    pub fn frames_processed(&self) -> u64 {
        self.frames_processed
    }

    pub fn accumulated_color(&self) -> Option<&Buffer2D<Vec3>> {
        self.history.as_ref().map(|history| &history.accumulated)
    }

    /// Returns which pixels of the most recent frame had a valid history.
    ///
    /// After the first frame this mask is all-false, since there was nothing
    /// to reproject yet.
    pub fn validity_mask(&self) -> Option<&Buffer2D<bool>> {
        self.history.as_ref().map(|history| &history.valid)
    }

    pub fn config(&self) -> &DenoiserConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut DenoiserConfig {
        &mut self.config
    }
}

impl Default for Denoiser {
    fn default() -> Self {
        Self::new(Default::default())
    }
}

fn mean_luma(buffer: &Buffer2D<Vec3>) -> f32 {
    if buffer.is_empty() {
        return 0.0;
    }

    let sum: f32 = buffer.as_slice().iter().map(|color| color.luma()).sum();

    sum / (buffer.len() as f32)
}
