//! Scripted canvas resizes for headless runs
//!
//! A resize event is written `FRAME:WIDTHxHEIGHT` and fires just before that frame
//! is rendered.

use crate::io::error::{Result, WheelError, invalid_parameter};
use crate::spatial::CanvasSize;
use std::str::FromStr;

/// Request to resize the canvas before a given frame
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResizeEvent {
    /// Zero-based frame index the resize precedes
    pub frame: usize,
    /// New canvas dimensions
    pub size: CanvasSize,
}

impl FromStr for ResizeEvent {
    type Err = WheelError;

    fn from_str(text: &str) -> Result<Self> {
        let malformed = || invalid_parameter("resize", &text, &"expected FRAME:WIDTHxHEIGHT");

        let (frame, dimensions) = text.trim().split_once(':').ok_or_else(malformed)?;
        let (width, height) = dimensions
            .trim()
            .split_once(['x', 'X'])
            .ok_or_else(malformed)?;

        let frame = frame
            .trim()
            .parse::<usize>()
            .map_err(|e| invalid_parameter("resize", &text, &e))?;
        let width = width
            .trim()
            .parse::<u32>()
            .map_err(|e| invalid_parameter("resize", &text, &e))?;
        let height = height
            .trim()
            .parse::<u32>()
            .map_err(|e| invalid_parameter("resize", &text, &e))?;

        Ok(Self {
            frame,
            size: CanvasSize::new(width, height)?,
        })
    }
}

/// Resize events ordered by frame
#[derive(Clone, Debug, Default)]
pub struct ResizeSchedule {
    events: Vec<ResizeEvent>,
}

impl ResizeSchedule {
    /// Build a schedule; events sharing a frame keep their given order
    pub fn new(mut events: Vec<ResizeEvent>) -> Self {
        events.sort_by_key(|event| event.frame);
        Self { events }
    }

    /// Number of scheduled events
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether no resize is scheduled
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Events due before `frame`, in order
    pub fn due_at(&self, frame: usize) -> impl Iterator<Item = &ResizeEvent> {
        self.events.iter().filter(move |event| event.frame == frame)
    }

    /// Number of events that fire within the first `frames` frames
    pub fn fired_within(&self, frames: usize) -> usize {
        self.events.iter().filter(|event| event.frame < frames).count()
    }
}
