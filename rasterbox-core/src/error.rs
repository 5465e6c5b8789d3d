use crate::frame_loop::LoopState;
use derive_more::{Display, Error};

pub type RasterResult<T> = std::result::Result<T, RasterError>;

#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum RasterError {
    /// Frame buffer storage could not be obtained. Fatal at startup.
    #[display("Failed to allocate a {width}x{height} frame buffer")]
    Allocation { width: i32, height: i32 },
    /// A primitive received a structurally invalid argument.
    #[display("Invalid value {value} for parameter `{name}`")]
    InvalidParameter { name: &'static str, value: i64 },
    #[display("Frame loop cannot {operation} while {state}")]
    InvalidState {
        operation: &'static str,
        state: LoopState,
    },
}
