use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::{Child, Command, Stdio};
use crate::core::{PlayerError, PlayerResult};
use crate::video::{VideoFrame, VideoInfo};

/// Sequential frame decoder with a repositionable cursor
pub trait FrameSource {
    fn info(&self) -> &VideoInfo;

    /// Decode the frame at the cursor and advance it. `None` at end of stream.
    fn read_frame(&mut self) -> PlayerResult<Option<VideoFrame>>;

    /// Index of the next frame `read_frame` will return
    fn position(&self) -> u64;

    fn seek(&mut self, frame: u64);

    /// Decode a single frame without moving the cursor
    fn preview(&mut self, frame: u64) -> PlayerResult<VideoFrame>;

    fn release(&mut self);

    fn is_released(&self) -> bool;

    /// Undo a release and put the cursor back on the first frame
    fn reopen(&mut self);
}

/// Decodes frames by piping raw RGB24 out of an ffmpeg child process.
///
/// The child is started lazily on the first read after opening or seeking, so a burst
/// of seeks only costs one process.
pub struct FfmpegFrameSource {
    video_path: PathBuf,
    ffmpeg: PathBuf,
    info: VideoInfo,
    stream: Option<Child>,
    cursor: u64,
    released: bool,
}

impl FfmpegFrameSource {
    pub fn open(video_path: &Path, ffmpeg: &Path, ffprobe: &Path) -> PlayerResult<Self> {
        if !video_path.is_file() {
            return Err(PlayerError::NotFound(video_path.to_path_buf()));
        }

        let info = VideoInfo::probe(ffprobe, video_path)?;
        log::info!("Opened {}", video_path.display());

        Ok(Self {
            video_path: video_path.to_path_buf(),
            ffmpeg: ffmpeg.to_path_buf(),
            info,
            stream: None,
            cursor: 0,
            released: false,
        })
    }

    fn start_time(&self, frame: u64) -> String {
        format!("{:.6}", self.info.position_ms(frame) / 1000.0)
    }

    fn start_stream(&self) -> PlayerResult<Child> {
        let mut cmd = Command::new(&self.ffmpeg);
        cmd.arg("-ss").arg(self.start_time(self.cursor))
            .arg("-i").arg(&self.video_path)
            .args([
                "-f", "rawvideo",
                "-pix_fmt", "rgb24",
                "-vsync", "passthrough", // one output frame per decoded frame
                "-an",
                "-v", "quiet",
                "-",
            ])
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .stdin(Stdio::null());

        let child = cmd.spawn().map_err(|source| PlayerError::Spawn {
            program: self.ffmpeg.display().to_string(),
            source,
        })?;

        log::debug!("Decoder stream started at frame {} ({}s)", self.cursor, self.start_time(self.cursor));
        Ok(child)
    }

    fn stop_stream(&mut self) {
        if let Some(mut process) = self.stream.take() {
            let _ = process.kill();
            let _ = process.wait();
        }
    }
}

impl FrameSource for FfmpegFrameSource {
    fn info(&self) -> &VideoInfo {
        &self.info
    }

    fn read_frame(&mut self) -> PlayerResult<Option<VideoFrame>> {
        if self.released {
            return Ok(None);
        }

        if self.stream.is_none() {
            self.stream = Some(self.start_stream()?);
        }

        let frame_size = self.info.rgb24_frame_size();
        let cursor = self.cursor;
        let stdout = self.stream.as_mut()
            .and_then(|process| process.stdout.as_mut())
            .ok_or_else(|| PlayerError::Decode {
                frame: cursor,
                reason: "ffmpeg stdout not available".to_string(),
            })?;

        let Some(buf) = read_rgb24_frame(stdout, frame_size, cursor)? else {
            return Ok(None);
        };

        let frame = VideoFrame::from_rgb24(cursor, self.info.width, self.info.height, &buf)?;
        self.cursor += 1;
        Ok(Some(frame))
    }

    fn position(&self) -> u64 {
        self.cursor
    }

    fn seek(&mut self, frame: u64) {
        if self.released {
            return;
        }
        self.stop_stream();
        self.cursor = frame;
        log::debug!("Decode cursor moved to frame {}", frame);
    }

    fn preview(&mut self, frame: u64) -> PlayerResult<VideoFrame> {
        let output = Command::new(&self.ffmpeg)
            .arg("-ss").arg(self.start_time(frame))
            .arg("-i").arg(&self.video_path)
            .args([
                "-frames:v", "1",
                "-f", "rawvideo",
                "-pix_fmt", "rgb24",
                "-an",
                "-v", "quiet",
                "-",
            ])
            .output()
            .map_err(|source| PlayerError::Spawn {
                program: self.ffmpeg.display().to_string(),
                source,
            })?;

        if !output.status.success() {
            return Err(PlayerError::Decode {
                frame,
                reason: format!("ffmpeg exited with {}", output.status),
            });
        }

        VideoFrame::from_rgb24(frame, self.info.width, self.info.height, &output.stdout)
    }

    fn release(&mut self) {
        self.stop_stream();
        self.released = true;
        log::debug!("Released decoder for {}", self.video_path.display());
    }

    fn is_released(&self) -> bool {
        self.released
    }

    fn reopen(&mut self) {
        self.stop_stream();
        self.cursor = 0;
        self.released = false;
    }
}

/// Read one packed RGB24 frame. A clean EOF before the first byte is the end of the
/// stream, an EOF anywhere else is a truncated frame.
pub fn read_rgb24_frame<R: Read>(reader: &mut R, frame_size: usize, index: u64) -> PlayerResult<Option<Vec<u8>>> {
    let mut buf = vec![0u8; frame_size];
    let mut read = 0;

    while read < frame_size {
        match reader.read(&mut buf[read..]) {
            Ok(0) if read == 0 => {
                log::info!("Video stream ended at frame {}", index);
                return Ok(None);
            }
            Ok(0) => {
                log::error!("ffmpeg stream ended mid-frame ({}/{} bytes)", read, frame_size);
                return Err(PlayerError::Decode {
                    frame: index,
                    reason: format!("stream ended mid-frame (read {}/{} bytes)", read, frame_size),
                });
            }
            Ok(n) => read += n,
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => {}
            Err(e) => return Err(e.into()),
        }
    }

    Ok(Some(buf))
}

impl Drop for FfmpegFrameSource {
    fn drop(&mut self) {
        self.stop_stream();
    }
}
