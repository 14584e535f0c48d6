//! Generic egui helpers shared by the map view and the detail panel.
//!
//! Stateless conversions from the library's plain colors and geometry into
//! egui types, plus small text utilities.

use eframe::egui;
use planet_mindmap::mindmap::{PlanetKind, Priority, TaskStatus};

// ─── Colors ───────────────────────────────────────────────────────────────────

pub fn color32(rgb: [u8; 3]) -> egui::Color32 {
    egui::Color32::from_rgb(rgb[0], rgb[1], rgb[2])
}

/// `rgb` with `opacity` in 0.0–1.0.
pub fn color32_alpha(rgb: [u8; 3], opacity: f32) -> egui::Color32 {
    let a = (opacity.clamp(0.0, 1.0) * 255.0) as u8;
    egui::Color32::from_rgba_unmultiplied(rgb[0], rgb[1], rgb[2], a)
}

/// Body and stripe colors for each planet sprite.
pub fn planet_palette(kind: PlanetKind) -> (egui::Color32, egui::Color32) {
    match kind {
        PlanetKind::Cratered => (
            egui::Color32::from_rgb(120, 104, 92),
            egui::Color32::from_rgb(84, 72, 64),
        ),
        PlanetKind::Banded => (
            egui::Color32::from_rgb(196, 120, 64),
            egui::Color32::from_rgb(150, 84, 40),
        ),
        PlanetKind::Frozen => (
            egui::Color32::from_rgb(150, 196, 214),
            egui::Color32::from_rgb(96, 148, 172),
        ),
    }
}

pub fn status_color(status: TaskStatus) -> egui::Color32 {
    match status {
        TaskStatus::New => egui::Color32::from_rgb(180, 180, 190),
        TaskStatus::Chosen => egui::Color32::from_rgb(255, 184, 28),
        TaskStatus::Completed => egui::Color32::from_rgb(0, 170, 0),
    }
}

pub fn priority_color(priority: Priority) -> egui::Color32 {
    match priority {
        Priority::Low => egui::Color32::from_rgb(60, 157, 198),
        Priority::Medium => egui::Color32::from_rgb(255, 184, 28),
        Priority::Urgent => egui::Color32::from_rgb(255, 99, 71),
    }
}

// ─── Geometry ─────────────────────────────────────────────────────────────────

/// Closed polyline approximating an axis-aligned ellipse.
pub fn ellipse_points(center: egui::Pos2, rx: f32, ry: f32, segments: usize) -> Vec<egui::Pos2> {
    let n = segments.max(8);
    (0..n)
        .map(|i| {
            let a = i as f32 / n as f32 * std::f32::consts::TAU;
            egui::pos2(center.x + a.cos() * rx, center.y + a.sin() * ry)
        })
        .collect()
}

// ─── Text utilities ───────────────────────────────────────────────────────────

/// Truncate `s` to at most `max_chars` Unicode scalar values, appending `"..."` if truncated.
pub fn truncate_str(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let t: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", t)
    }
}
