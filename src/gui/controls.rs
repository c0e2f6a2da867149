use eframe::egui;

const BUTTON_WIDTH: f32 = 60.0;
const BUTTON_PADDING: f32 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlAction {
    SeekBackward,
    TogglePlayPause,
    SeekForward,
}

/// Centered `<<` / play-pause / `>>` row
pub fn show_controls(ui: &mut egui::Ui, play_label: &str, seek_amount: f64) -> Option<ControlAction> {
    let mut action = None;

    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = BUTTON_PADDING * 2.0;
        let row_width = BUTTON_WIDTH * 3.0 + ui.spacing().item_spacing.x * 2.0;
        ui.add_space(((ui.available_width() - row_width) / 2.0).max(BUTTON_PADDING));

        let buttons = [
            ("<<", ControlAction::SeekBackward, format!("Back {}s (Left)", seek_amount)),
            (play_label, ControlAction::TogglePlayPause, "Space".to_string()),
            (">>", ControlAction::SeekForward, format!("Forward {}s (Right)", seek_amount)),
        ];
        for (label, button_action, hint) in buttons {
            let button = egui::Button::new(label).min_size(egui::vec2(BUTTON_WIDTH, 0.0));
            if ui.add(button).on_hover_text(hint).clicked() {
                action = Some(button_action);
            }
        }
    });

    action
}

/// Space toggles playback, the arrow keys seek
pub fn keyboard_action(ctx: &egui::Context) -> Option<ControlAction> {
    ctx.input(|i| {
        if i.key_pressed(egui::Key::Space) {
            Some(ControlAction::TogglePlayPause)
        } else if i.key_pressed(egui::Key::ArrowLeft) {
            Some(ControlAction::SeekBackward)
        } else if i.key_pressed(egui::Key::ArrowRight) {
            Some(ControlAction::SeekForward)
        } else {
            None
        }
    })
}
