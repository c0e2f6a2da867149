use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlayerError {
    #[error("Video file not found.")]
    NotFound(PathBuf),

    #[error("ffprobe failed for {path}: {reason}")]
    Probe { path: PathBuf, reason: String },

    #[error("decode failed at frame {frame}: {reason}")]
    Decode { frame: u64, reason: String },

    #[error("failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("unexpected frame size: {actual} bytes (expected {expected})")]
    FrameSize { expected: usize, actual: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type PlayerResult<T> = Result<T, PlayerError>;
