use draw_core::sanitize_integer_text;
use eframe::egui;
use shared::domain::Tile;

pub const TILE_SIZE: f32 = 44.0;

/// Single-line integer input; the text is re-sanitized on every edit.
pub fn integer_field(ui: &mut egui::Ui, text: &mut String, hint: &str) -> egui::Response {
    let response = ui.add(
        egui::TextEdit::singleline(text)
            .hint_text(hint)
            .desired_width(140.0),
    );
    if response.changed() {
        let cleaned = sanitize_integer_text(text);
        if cleaned != *text {
            *text = cleaned;
        }
    }
    response
}

pub fn tile(ui: &mut egui::Ui, tile: &Tile) -> egui::Response {
    let (rect, response) =
        ui.allocate_exact_size(egui::vec2(TILE_SIZE, TILE_SIZE), egui::Sense::hover());

    if ui.is_rect_visible(rect) {
        let visuals = ui.visuals();
        let (fill, text_color) = match tile {
            Tile::Ghost => (visuals.faint_bg_color, visuals.weak_text_color()),
            Tile::Number(_) => (visuals.selection.bg_fill, visuals.strong_text_color()),
            Tile::Overflow(_) => (visuals.widgets.inactive.bg_fill, visuals.text_color()),
        };
        let font_size = if tile.to_string().len() > 4 { 12.0 } else { 16.0 };

        let painter = ui.painter();
        painter.circle_filled(rect.center(), TILE_SIZE / 2.0 - 1.0, fill);
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            tile.to_string(),
            egui::FontId::proportional(font_size),
            text_color,
        );
    }

    response
}

pub fn error_banner(ui: &mut egui::Ui, message: &str) {
    let color = ui.visuals().error_fg_color;
    egui::Frame::group(ui.style())
        .stroke(egui::Stroke::new(1.0, color))
        .show(ui, |ui| {
            ui.colored_label(color, message);
        });
}
