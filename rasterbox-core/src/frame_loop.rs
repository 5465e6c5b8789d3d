use crate::error::RasterError;
use crate::scene::Scene;
use crate::{FrameBuffer, RawView, Result};
use derive_more::Display;
use log::{error, info};

/// Consumer of finished frames, e.g. a texture upload followed by a present.
pub trait Presenter {
    /// Called once per frame. The view is only valid for the duration of the call.
    fn present(&mut self, frame: RawView<'_>) -> Result<()>;

    fn teardown(&mut self) {}
}

pub trait InputSource {
    /// Polled once per frame; `false` once a quit has been requested.
    fn keep_running(&mut self) -> bool;
}

#[derive(Debug, Display, Copy, Clone, Eq, PartialEq)]
pub enum LoopState {
    #[display("idle")]
    Idle,
    #[display("running")]
    Running,
    #[display("stopped")]
    Stopped,
}

/// Owns the frame buffer and the presenter and drives the
/// clear -> draw -> present -> clear cycle.
pub struct FrameLoop<P: Presenter> {
    presenter: P,
    scene: Scene,
    state: LoopState,
    buffer: Option<FrameBuffer>,
    frames_presented: u64,
}

impl<P: Presenter> FrameLoop<P> {
    pub fn new(presenter: P, scene: Scene) -> Self {
        Self {
            presenter,
            scene,
            state: LoopState::Idle,
            buffer: None,
            frames_presented: 0,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }

    pub fn buffer(&self) -> Option<&FrameBuffer> {
        self.buffer.as_ref()
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    /// Allocates the frame buffer. Failing to do so is fatal: the loop goes
    /// straight to [`LoopState::Stopped`] without producing a frame.
    pub fn start(&mut self, width: i32, height: i32) -> Result<()> {
        if self.state != LoopState::Idle {
            return Err(self.invalid_state("start").into());
        }

        match FrameBuffer::allocate(width, height) {
            Ok(buffer) => {
                self.buffer = Some(buffer);
                self.state = LoopState::Running;
                info!("Frame loop running at {width}x{height}");

                Ok(())
            }
            Err(err) => {
                error!("{err}");
                self.stop();

                Err(err.into())
            }
        }
    }

    /// Runs a single frame, or stops the loop if `keep_running` is `false`.
    /// Does nothing unless the loop is running.
    pub fn step(&mut self, keep_running: bool) -> Result<LoopState> {
        if self.state != LoopState::Running {
            return Ok(self.state);
        }

        if !keep_running {
            self.stop();
            return Ok(self.state);
        }

        if let Err(err) = self.render_frame() {
            error!("Frame {} failed: {err}", self.frames_presented);
            self.stop();

            return Err(err);
        }

        Ok(self.state)
    }

    pub fn run(&mut self, input: &mut impl InputSource) -> Result<()> {
        if self.state == LoopState::Idle {
            return Err(self.invalid_state("run").into());
        }

        while self.state == LoopState::Running {
            let keep_running = input.keep_running();
            self.step(keep_running)?;
        }

        Ok(())
    }

    pub fn stop(&mut self) {
        if self.state == LoopState::Stopped {
            return;
        }

        if let Some(buffer) = self.buffer.take() {
            buffer.release();
        }
        self.presenter.teardown();
        self.state = LoopState::Stopped;

        info!("Frame loop stopped after {} frame(s)", self.frames_presented);
    }

    fn render_frame(&mut self) -> Result<()> {
        let Some(buffer) = self.buffer.as_mut() else {
            return Err(RasterError::InvalidState {
                operation: "render a frame",
                state: self.state,
            }
            .into());
        };
        let palette = self.scene.palette();

        buffer.fill(palette.clear);
        self.scene.draw(buffer)?;
        self.presenter.present(buffer.raw_view())?;
        buffer.fill(palette.next_frame_clear);
        self.frames_presented += 1;

        Ok(())
    }

    fn invalid_state(&self, operation: &'static str) -> RasterError {
        RasterError::InvalidState {
            operation,
            state: self.state,
        }
    }
}

impl<P: Presenter> Drop for FrameLoop<P> {
    fn drop(&mut self) {
        self.stop();
    }
}
