use eframe::egui;
use std::time::{Duration, Instant};
use crate::core::{AppConfig, PlayerError, PlayerResult};
use crate::gui::canvas::VideoCanvas;
use crate::gui::controls::{self, ControlAction};
use crate::gui::progress;
use crate::video::{TickOutcome, VideoPlayer};

pub struct VideoPlayerApp {
    pub config: AppConfig,
    pub player: Option<VideoPlayer>,
    /// Shown in red instead of the canvas when the video could not be opened
    pub error_message: Option<String>,
    pub status_message: String,
    pub canvas: VideoCanvas,
    /// When the last playback tick ran, `None` while paused
    pub last_tick: Option<Instant>,
}

impl VideoPlayerApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: AppConfig, opened: PlayerResult<VideoPlayer>) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::dark());
        Self::from_parts(config, opened)
    }

    pub fn from_parts(config: AppConfig, opened: PlayerResult<VideoPlayer>) -> Self {
        let (player, error_message) = match opened {
            Ok(player) => (Some(player), None),
            Err(e @ PlayerError::NotFound(_)) => {
                log::error!("{}", e);
                (None, Some(e.to_string()))
            }
            Err(e) => {
                log::error!("Could not open video: {}", e);
                (None, Some(format!("Could not open video: {}", e)))
            }
        };

        Self {
            config,
            player,
            error_message,
            status_message: String::new(),
            canvas: VideoCanvas::new(),
            last_tick: None,
        }
    }

    pub fn apply_action(&mut self, action: ControlAction) {
        let Some(player) = self.player.as_mut() else {
            return;
        };

        match action {
            ControlAction::SeekBackward => player.seek_backward(),
            ControlAction::TogglePlayPause => {
                player.toggle_play_pause();
                if player.is_playing() {
                    self.status_message.clear();
                }
                self.last_tick = None;
            }
            ControlAction::SeekForward => player.seek_forward(),
        }
    }

    pub(crate) fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.config.tick_interval_ms.max(1))
    }

    /// Run the playback tick when it is due and schedule the next one
    fn run_playback(&mut self, ctx: &egui::Context) {
        let interval = self.tick_interval();
        let Some(player) = self.player.as_mut() else {
            return;
        };

        if !player.is_playing() {
            self.last_tick = None;
        } else {
            let now = Instant::now();
            let due = self.last_tick.map_or(true, |last| now.duration_since(last) >= interval);

            if due {
                match player.tick() {
                    TickOutcome::EndOfStream => {
                        self.status_message = "Playback finished".to_string();
                    }
                    TickOutcome::Failed(reason) => {
                        self.status_message = format!("Playback stopped: {}", reason);
                    }
                    TickOutcome::Frame | TickOutcome::Idle => {}
                }
                self.last_tick = Some(now);
            }

            if player.is_playing() {
                let elapsed = self.last_tick.map(|last| now.duration_since(last)).unwrap_or_default();
                ctx.request_repaint_after(interval.saturating_sub(elapsed));
            }
        }

        if let Some(frame) = player.take_new_frame() {
            self.canvas.upload(ctx, frame);
        }
    }

    /// Lay out the whole window for one frame
    pub fn show(&mut self, ctx: &egui::Context) {
        if let Some(action) = controls::keyboard_action(ctx) {
            self.apply_action(action);
        }

        self.run_playback(ctx);

        let play_label = self.player.as_ref().map_or("Play", |p| p.play_button_label());
        let seek_amount = self.player.as_ref().map_or(self.config.seek_amount_secs as f64, |p| p.seek_amount());
        let mut clicked = None;

        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            ui.add_space(10.0);
            clicked = controls::show_controls(ui, play_label, seek_amount);
            ui.add_space(10.0);

            if let Some(message) = &self.error_message {
                ui.vertical_centered(|ui| {
                    ui.colored_label(egui::Color32::RED, message);
                });
            }
        });

        if let Some(player) = &self.player {
            egui::TopBottomPanel::bottom("progress").show(ctx, |ui| {
                progress::show_progress(ui, player, self.config.show_progress_readout);
                if !self.status_message.is_empty() {
                    ui.vertical_centered(|ui| ui.weak(&self.status_message));
                }
            });

            egui::CentralPanel::default()
                .frame(egui::Frame::none())
                .show(ctx, |ui| {
                    self.canvas.show(ui);
                });
        }

        if let Some(action) = clicked {
            self.apply_action(action);
            ctx.request_repaint();
        }
    }
}

impl eframe::App for VideoPlayerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.show(ctx);
    }
}
