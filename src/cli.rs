use std::path::PathBuf;

use clap::Parser;

use crate::core::AppConfig;

#[derive(Parser, Debug)]
#[command(name = env!("CARGO_PKG_NAME"), about = "Simple Video Player")]
pub struct Cli {
    /// Path to the video file. Opens a file picker when omitted.
    #[arg(long)]
    pub video: Option<PathBuf>,

    /// Seek step in seconds for the << and >> buttons (default: 10)
    #[arg(long = "seek_amount", alias = "seek-amount")]
    pub seek_amount: Option<u32>,

    /// Milliseconds between decoded frames during playback (default: 30)
    #[arg(long = "tick-ms")]
    pub tick_ms: Option<u64>,
}

impl Cli {
    /// Command line values win over the stored config for this session only
    pub fn apply_to(&self, config: &mut AppConfig) {
        if let Some(seek_amount) = self.seek_amount {
            config.seek_amount_secs = seek_amount;
        }
        if let Some(tick_ms) = self.tick_ms {
            config.tick_interval_ms = tick_ms.max(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_snake_case_flags() {
        let cli = Cli::try_parse_from(["video-player", "--video", "clip.mp4", "--seek_amount", "5"]).unwrap();
        assert_eq!(cli.video, Some(PathBuf::from("clip.mp4")));
        assert_eq!(cli.seek_amount, Some(5));
        assert_eq!(cli.tick_ms, None);
    }

    #[test]
    fn test_kebab_case_alias() {
        let cli = Cli::try_parse_from(["video-player", "--seek-amount", "3"]).unwrap();
        assert_eq!(cli.seek_amount, Some(3));
        assert!(cli.video.is_none());
    }

    #[test]
    fn test_rejects_fractional_seek() {
        assert!(Cli::try_parse_from(["video-player", "--seek_amount", "2.5"]).is_err());
    }

    #[test]
    fn test_apply_overrides_config() {
        let cli = Cli::try_parse_from(["video-player", "--seek_amount", "7", "--tick-ms", "0"]).unwrap();
        let mut config = AppConfig::default();
        cli.apply_to(&mut config);
        assert_eq!(config.seek_amount_secs, 7);
        assert_eq!(config.tick_interval_ms, 1);

        let cli = Cli::try_parse_from(["video-player"]).unwrap();
        let mut config = AppConfig::default();
        cli.apply_to(&mut config);
        assert_eq!(config.seek_amount_secs, 10);
        assert_eq!(config.tick_interval_ms, 30);
    }
}
