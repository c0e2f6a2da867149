use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Step used by the `<<` and `>>` buttons, in whole seconds
    pub seek_amount_secs: u32,
    /// Delay between playback ticks
    pub tick_interval_ms: u64,
    /// Vertical space reserved for the buttons and progress bar
    pub controls_height: f32,
    pub min_window_size: [f32; 2],
    pub show_progress_readout: bool,
    pub ffmpeg_path: Option<PathBuf>,
    pub ffprobe_path: Option<PathBuf>,
    pub last_video: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seek_amount_secs: 10,
            tick_interval_ms: 30,
            controls_height: 100.0,
            min_window_size: [400.0, 300.0],
            show_progress_readout: true,
            ffmpeg_path: None,
            ffprobe_path: None,
            last_video: None,
        }
    }
}

impl AppConfig {
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(config_path: &Path) -> anyhow::Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)
                .map_err(|e| anyhow::anyhow!("Failed to read config file at {}: {}", config_path.display(), e))?;

            match serde_json::from_str::<Self>(&content) {
                Ok(config) => {
                    log::info!("Loaded existing config from {}", config_path.display());
                    Ok(config)
                }
                Err(e) => {
                    log::warn!("Config file exists but has issues ({}), replacing it with defaults", e);
                    let new_config = Self::default();
                    new_config.save_to(config_path)
                        .map_err(|save_err| anyhow::anyhow!("Failed to save new config: {}", save_err))?;
                    Ok(new_config)
                }
            }
        } else {
            log::info!("No config file found, creating default config at {}", config_path.display());
            let config = Self::default();
            config.save_to(config_path)
                .map_err(|e| anyhow::anyhow!("Failed to save default config: {}", e))?;
            Ok(config)
        }
    }

    pub fn save(&self) -> anyhow::Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, config_path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("video-player")
            .join("config.json")
    }

    pub fn ffmpeg_program(&self) -> PathBuf {
        self.ffmpeg_path.clone().unwrap_or_else(|| PathBuf::from("ffmpeg"))
    }

    pub fn ffprobe_program(&self) -> PathBuf {
        self.ffprobe_path.clone().unwrap_or_else(|| PathBuf::from("ffprobe"))
    }

    /// Initial window size for a video of the given dimensions, leaving room for the controls.
    pub fn window_size_for(&self, frame_width: u32, frame_height: u32) -> [f32; 2] {
        let width = (frame_width as f32).max(self.min_window_size[0]);
        let height = (frame_height as f32 + self.controls_height).max(self.min_window_size[1]);
        [width, height]
    }
}
