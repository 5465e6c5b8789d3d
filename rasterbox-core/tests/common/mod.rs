use anyhow::bail;
use rasterbox_core::{Color, InputSource, Presenter, RawView, Result};
use std::collections::VecDeque;

/// Copy of a presented frame
#[derive(Debug, Clone)]
pub struct PresentedFrame {
    pub pixel_data: Vec<u8>,
    pub pitch: usize,
}

impl PresentedFrame {
    pub fn pixel(&self, x: usize, y: usize) -> Color {
        let base = y * self.pitch + x * 4;
        let bytes = [
            self.pixel_data[base],
            self.pixel_data[base + 1],
            self.pixel_data[base + 2],
            self.pixel_data[base + 3],
        ];

        Color::new(u32::from_ne_bytes(bytes))
    }
}

#[derive(Debug, Default)]
pub struct RecordingPresenter {
    pub frames: Vec<PresentedFrame>,
    pub teardowns: usize,
    /// Fail on the n-th call to `present` (0-based)
    pub fail_at: Option<usize>,
}

impl RecordingPresenter {
    #[allow(unused)]
    pub fn failing_at(frame: usize) -> Self {
        Self {
            fail_at: Some(frame),
            ..Self::default()
        }
    }
}

impl Presenter for RecordingPresenter {
    fn present(&mut self, frame: RawView<'_>) -> Result<()> {
        if self.fail_at == Some(self.frames.len()) {
            bail!("Texture upload failed");
        }

        self.frames.push(PresentedFrame {
            pixel_data: frame.pixel_data.to_vec(),
            pitch: frame.pitch,
        });

        Ok(())
    }

    fn teardown(&mut self) {
        self.teardowns += 1;
    }
}

/// Answers `keep_running` from a fixed script, then asks to quit
#[derive(Debug, Default)]
pub struct ScriptedInput {
    signals: VecDeque<bool>,
    pub polls: usize,
}

impl ScriptedInput {
    pub fn new(signals: &[bool]) -> Self {
        Self {
            signals: signals.iter().copied().collect(),
            polls: 0,
        }
    }

    #[allow(unused)]
    pub fn frames(count: usize) -> Self {
        Self::new(&vec![true; count])
    }
}

impl InputSource for ScriptedInput {
    fn keep_running(&mut self) -> bool {
        self.polls += 1;
        self.signals.pop_front().unwrap_or(false)
    }
}
