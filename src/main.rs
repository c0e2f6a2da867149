mod cli;
mod core;
mod gui;
mod video;

use std::path::PathBuf;
use clap::Parser;
use eframe::egui;
use cli::Cli;
use crate::core::AppConfig;
use gui::VideoPlayerApp;
use video::VideoPlayer;

const VIDEO_EXTENSIONS: [&str; 7] = ["mp4", "mkv", "avi", "mov", "webm", "m4v", "wmv"];

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let mut stored_config = AppConfig::load().unwrap_or_else(|e| {
        log::warn!("Using default config: {}", e);
        AppConfig::default()
    });
    let mut config = stored_config.clone();
    cli.apply_to(&mut config);

    let Some(video_path) = cli.video.clone().or_else(|| pick_video(&stored_config)) else {
        log::info!("No video selected, exiting");
        return Ok(());
    };

    let opened = VideoPlayer::open(&video_path, &config);
    if opened.is_ok() {
        stored_config.last_video = Some(video_path.clone());
        if let Err(e) = stored_config.save() {
            log::warn!("Failed to remember last video: {}", e);
        }
    }

    let inner_size = match &opened {
        Ok(player) => config.window_size_for(player.info().width, player.info().height),
        Err(_) => config.min_window_size,
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(inner_size)
            .with_min_inner_size(config.min_window_size)
            .with_title("Video Player"),
        ..Default::default()
    };

    eframe::run_native(
        "Video Player",
        options,
        Box::new(move |cc| Ok(Box::new(VideoPlayerApp::new(cc, config, opened)))),
    ).map_err(|e| anyhow::anyhow!("Failed to run app: {}", e))?;

    Ok(())
}

fn pick_video(config: &AppConfig) -> Option<PathBuf> {
    let mut dialog = rfd::FileDialog::new()
        .set_title("Open video")
        .add_filter("Video", &VIDEO_EXTENSIONS);

    if let Some(dir) = config.last_video.as_ref().and_then(|p| p.parent()) {
        if dir.is_dir() {
            dialog = dialog.set_directory(dir);
        }
    }

    dialog.pick_file()
}
