use std::path::Path;
use crate::core::{AppConfig, PlayerResult};
use crate::video::{FfmpegFrameSource, FrameSource, VideoFrame, VideoInfo};

/// What a playback tick did
#[derive(Debug, Clone, PartialEq)]
pub enum TickOutcome {
    /// Not playing, nothing decoded
    Idle,
    /// A new frame is ready for the canvas
    Frame,
    /// The stream ran out and playback stopped
    EndOfStream,
    /// Decoding failed and playback stopped
    Failed(String),
}

pub struct VideoPlayer {
    source: Box<dyn FrameSource>,
    is_playing: bool,
    seek_amount: f64,
    current_frame: Option<VideoFrame>,
    has_new_frame: bool,
    progress: f32,
}

impl VideoPlayer {
    pub fn new(source: Box<dyn FrameSource>, seek_amount: f64) -> Self {
        Self {
            source,
            is_playing: false,
            seek_amount,
            current_frame: None,
            has_new_frame: false,
            progress: 0.0,
        }
    }

    /// Open a file with the ffmpeg tools named in the config
    pub fn open(video_path: &Path, config: &AppConfig) -> PlayerResult<Self> {
        let source = FfmpegFrameSource::open(
            video_path,
            &config.ffmpeg_program(),
            &config.ffprobe_program(),
        )?;
        Ok(Self::new(Box::new(source), config.seek_amount_secs as f64))
    }

    pub fn toggle_play_pause(&mut self) {
        if self.is_playing {
            self.pause();
        } else {
            self.play();
        }
    }

    pub fn play(&mut self) {
        if self.is_playing {
            return;
        }
        if self.source.is_released() {
            self.rewind();
        }
        self.is_playing = true;
        log::info!("Playback started at frame {}", self.source.position());
    }

    pub fn pause(&mut self) {
        if self.is_playing {
            self.is_playing = false;
            log::info!("Playback paused at frame {}", self.source.position());
        }
    }

    /// Decode and publish the next frame while playing
    pub fn tick(&mut self) -> TickOutcome {
        if !self.is_playing {
            return TickOutcome::Idle;
        }

        match self.source.read_frame() {
            Ok(Some(frame)) => {
                self.show_frame(frame);
                self.update_progress();
                TickOutcome::Frame
            }
            Ok(None) => {
                self.stop_at_end();
                TickOutcome::EndOfStream
            }
            Err(e) => {
                log::error!("Failed to decode frame: {}", e);
                self.stop_at_end();
                TickOutcome::Failed(e.to_string())
            }
        }
    }

    pub fn seek_forward(&mut self) {
        let info = self.source.info();
        let frame_count = info.frame_count;
        let target = self.source.position() + (self.seek_amount * info.fps) as u64;

        if target < frame_count {
            self.seek_to(target);
        } else {
            log::debug!("Seek forward to frame {} ignored, stream has {} frames", target, frame_count);
        }
    }

    pub fn seek_backward(&mut self) {
        let info = self.source.info();
        let current_ms = info.position_ms(self.source.position());
        let target_ms = (current_ms - self.seek_amount * 1000.0).max(0.0);
        let target = info.frame_at_ms(target_ms);
        self.seek_to(target);
    }

    fn seek_to(&mut self, frame: u64) {
        if self.source.is_released() {
            return;
        }
        self.source.seek(frame);
        self.update_progress();

        // Playback picks the new position up on the next tick; when paused show where we landed
        if !self.is_playing {
            match self.source.preview(frame) {
                Ok(preview) => self.show_frame(preview),
                Err(e) => log::warn!("Failed to preview frame {}: {}", frame, e),
            }
        }
    }

    fn rewind(&mut self) {
        log::debug!("Reopening released stream from the start");
        self.source.reopen();
        self.progress = 0.0;
    }

    fn stop_at_end(&mut self) {
        self.is_playing = false;
        self.source.release();
    }

    fn show_frame(&mut self, frame: VideoFrame) {
        self.current_frame = Some(frame);
        self.has_new_frame = true;
    }

    fn update_progress(&mut self) {
        let total = self.source.info().frame_count;
        if total > 0 {
            self.progress = (self.source.position() as f64 * 100.0 / total as f64) as f32;
        }
    }

    /// The latest frame, if it has not been handed out yet
    pub fn take_new_frame(&mut self) -> Option<&VideoFrame> {
        if self.has_new_frame {
            self.has_new_frame = false;
            self.current_frame.as_ref()
        } else {
            None
        }
    }

    #[cfg(test)]
    pub fn current_frame(&self) -> Option<&VideoFrame> {
        self.current_frame.as_ref()
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn play_button_label(&self) -> &'static str {
        if self.is_playing { "Pause" } else { "Play" }
    }

    /// Percentage of the stream decoded so far, 0 to 100
    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn position_secs(&self) -> f64 {
        self.source.info().position_ms(self.source.position()) / 1000.0
    }

    pub fn duration_secs(&self) -> f64 {
        self.source.info().duration
    }

    #[cfg(test)]
    pub fn frame_count(&self) -> u64 {
        self.source.info().frame_count
    }

    pub fn info(&self) -> &VideoInfo {
        self.source.info()
    }

    pub fn seek_amount(&self) -> f64 {
        self.seek_amount
    }
}
