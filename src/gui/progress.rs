use eframe::egui;
use crate::video::VideoPlayer;

const PROGRESS_BAR_WIDTH: f32 = 300.0;

pub fn show_progress(ui: &mut egui::Ui, player: &VideoPlayer, show_readout: bool) {
    ui.vertical_centered(|ui| {
        ui.add_space(10.0);
        ui.add(
            egui::ProgressBar::new(player.progress() / 100.0)
                .desired_width(PROGRESS_BAR_WIDTH),
        );
        if show_readout {
            ui.label(format_readout(player.position_secs(), player.duration_secs(), player.progress()));
        }
        ui.add_space(10.0);
    });
}

pub fn format_readout(position: f64, duration: f64, progress: f32) -> String {
    format!("{} / {} ({:.1}%)", format_time(position), format_time(duration), progress)
}

pub fn format_time(seconds: f64) -> String {
    let total = seconds.max(0.0) as u64;
    format!("{:02}:{:02}", total / 60, total % 60)
}
