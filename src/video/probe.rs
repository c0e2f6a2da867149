use std::path::Path;
use std::process::Command;
use crate::core::{PlayerError, PlayerResult};

const FALLBACK_FPS: f64 = 30.0;

/// Stream metadata reported by ffprobe
#[derive(Debug, Clone, PartialEq)]
pub struct VideoInfo {
    pub width: u32,
    pub height: u32,
    pub fps: f64,
    pub duration: f64,
    /// Total number of frames, 0 when the container does not say and the duration is unknown
    pub frame_count: u64,
}

impl VideoInfo {
    pub fn probe(ffprobe: &Path, file_path: &Path) -> PlayerResult<Self> {
        let output = Command::new(ffprobe)
            .arg("-v").arg("quiet")
            .arg("-print_format").arg("json")
            .arg("-show_format")
            .arg("-show_streams")
            .arg(file_path)
            .output()
            .map_err(|source| PlayerError::Spawn {
                program: ffprobe.display().to_string(),
                source,
            })?;

        if !output.status.success() {
            return Err(PlayerError::Probe {
                path: file_path.to_path_buf(),
                reason: format!("ffprobe exited with {}", output.status),
            });
        }

        let json: serde_json::Value = serde_json::from_slice(&output.stdout)?;
        let info = Self::from_ffprobe_json(&json).map_err(|reason| PlayerError::Probe {
            path: file_path.to_path_buf(),
            reason,
        })?;

        log::info!("Probed {}: {}x{} @ {:.3} FPS, {:.2}s, {} frames",
            file_path.display(), info.width, info.height, info.fps, info.duration, info.frame_count);
        Ok(info)
    }

    pub fn from_ffprobe_json(json: &serde_json::Value) -> Result<Self, String> {
        let streams = json["streams"].as_array().ok_or("No streams found")?;
        let video_stream = streams.iter()
            .find(|s| s["codec_type"] == "video")
            .ok_or("No video stream found")?;

        let width = video_stream["width"].as_u64().unwrap_or(0) as u32;
        let height = video_stream["height"].as_u64().unwrap_or(0) as u32;
        if width == 0 || height == 0 {
            return Err(format!("Invalid video dimensions: {}x{}", width, height));
        }

        let fps = parse_frame_rate(&video_stream["r_frame_rate"])
            .or_else(|| parse_frame_rate(&video_stream["avg_frame_rate"]))
            .unwrap_or_else(|| {
                log::warn!("No usable frame rate reported, assuming {} FPS", FALLBACK_FPS);
                FALLBACK_FPS
            });

        let duration = parse_number(&json["format"]["duration"])
            .or_else(|| parse_number(&video_stream["duration"]))
            .unwrap_or(0.0);

        let frame_count = parse_number(&video_stream["nb_frames"])
            .map(|n| n as u64)
            .filter(|&n| n > 0)
            .unwrap_or_else(|| (duration * fps).round() as u64);

        Ok(Self {
            width,
            height,
            fps,
            duration,
            frame_count,
        })
    }

    /// Timestamp of a frame index in milliseconds
    pub fn position_ms(&self, frame: u64) -> f64 {
        frame as f64 / self.fps * 1000.0
    }

    /// Frame index closest to a timestamp in milliseconds
    pub fn frame_at_ms(&self, ms: f64) -> u64 {
        (ms.max(0.0) / 1000.0 * self.fps).round() as u64
    }

    /// Size of one packed RGB24 frame
    pub fn rgb24_frame_size(&self) -> usize {
        self.width as usize * self.height as usize * 3
    }
}

// Rates come as "30000/1001", "25/1" or occasionally a plain decimal
fn parse_frame_rate(value: &serde_json::Value) -> Option<f64> {
    let rate = value.as_str()?;
    let fps = match rate.split_once('/') {
        Some((num, den)) => {
            let num: f64 = num.trim().parse().ok()?;
            let den: f64 = den.trim().parse().ok()?;
            if den == 0.0 {
                return None;
            }
            num / den
        }
        None => rate.trim().parse().ok()?,
    };
    (fps.is_finite() && fps > 0.0).then_some(fps)
}

// ffprobe emits most numbers as strings
fn parse_number(value: &serde_json::Value) -> Option<f64> {
    match value {
        serde_json::Value::String(s) => s.parse().ok(),
        serde_json::Value::Number(n) => n.as_f64(),
        _ => None,
    }
}
