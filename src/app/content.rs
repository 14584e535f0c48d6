//! Content-area rendering for `MindMapApp`.
//!
//! Contains three methods:
//!
//! - `draw_content`      — top-level dispatcher (spinner, error, map)
//! - `draw_map`          — paints the scene and handles planet selection
//! - `draw_stats_panel`  — right-side progress panel
//!
//! plus the free-standing detail panel drawn at the selection anchor.

use eframe::egui;
use planet_mindmap::mindmap::{Node, PlanetKind, TaskStatus, SOLAR_FLARE};
use planet_mindmap::render::animator::{rotate, spin_angle};
use planet_mindmap::render::hit::{panel_anchor, pick_child, Selection};
use planet_mindmap::render::scene::{MapPrimitive, MapScene, PLANET_RADIUS};

use crate::ui::{
    color32, color32_alpha, ellipse_points, planet_palette, priority_color, status_color,
    truncate_str,
};
use super::MindMapApp;

/// Width of the detail panel
const PANEL_WIDTH: f32 = 300.0;

impl MindMapApp {
    pub fn draw_content(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        if let Some(ref err) = self.error {
            ui.colored_label(color32(SOLAR_FLARE), err);
        }

        if self.map.is_none() {
            ui.centered_and_justified(|ui| {
                if self.loading {
                    ui.spinner();
                } else {
                    ui.label("Enter a task source and press Reload.");
                }
            });
            return;
        }

        self.draw_map(ui);
        self.draw_detail_panel(ctx);

        // Planets keep spinning
        ctx.request_repaint_after(std::time::Duration::from_millis(33));
    }

    // ── Orbital map ──────────────────────────────────────────────────────────

    fn draw_map(&mut self, ui: &mut egui::Ui) {
        let Some(map) = &self.map else {
            return;
        };

        let (response, painter) =
            ui.allocate_painter(ui.available_size(), egui::Sense::click());
        let rect = response.rect;
        let center = rect.center();
        let center_arr = [center.x, center.y];
        let t = self.app_start.elapsed().as_secs_f32();

        paint_scene(&painter, &map.scene, center, t);

        // Keep the panel glued to its planet when the window resizes
        if self.map_center != center_arr {
            self.map_center = center_arr;
            if let Some(sel) = &mut self.selection {
                sel.anchor = panel_anchor(center_arr, sel.position);
            }
        }

        if let Some(sel) = &self.selection {
            let p = center + egui::vec2(sel.position.x, sel.position.y);
            painter.circle_stroke(
                p,
                PLANET_RADIUS + 6.0,
                egui::Stroke::new(2.0, egui::Color32::WHITE),
            );
        }

        if response.clicked() {
            let picked = response.interact_pointer_pos().and_then(|pos| {
                pick_child(&map.positions, center_arr, [pos.x, pos.y], PLANET_RADIUS)
            });
            self.selection = picked.map(|i| {
                let node = &map.visible.children[i];
                log::debug!("Selected {} ({})", node.id, node.label);
                Selection::new(i, node.id.clone(), map.positions[i], center_arr)
            });
        }

        if let Some(hover) = response.hover_pos() {
            if pick_child(&map.positions, center_arr, [hover.x, hover.y], PLANET_RADIUS).is_some() {
                ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
            }
        }
    }

    // ── Detail panel ─────────────────────────────────────────────────────────

    fn draw_detail_panel(&mut self, ctx: &egui::Context) {
        let (Some(sel), Some(map)) = (&self.selection, &self.map) else {
            return;
        };
        let Some(node) = map.visible.children.get(sel.index) else {
            return;
        };

        let mut close = false;
        egui::Area::new(egui::Id::new("task_detail_panel"))
            .fixed_pos(egui::pos2(sel.anchor[0], sel.anchor[1]))
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                egui::Frame::popup(ui.style()).show(ui, |ui| {
                    ui.set_width(PANEL_WIDTH);
                    close = task_details(ui, node);
                });
            });

        if close {
            self.selection = None;
        }
    }

    // ── Stats panel ──────────────────────────────────────────────────────────

    pub fn draw_stats_panel(&self, ui: &mut egui::Ui) {
        ui.heading("Progress");
        ui.separator();

        let Some(map) = &self.map else {
            ui.label("No tasks loaded");
            return;
        };

        let p = map.progress;
        egui::Grid::new("progress_grid").num_columns(2).show(ui, |ui| {
            ui.label("Completed");
            ui.colored_label(status_color(TaskStatus::Completed), p.completed_ratio());
            ui.end_row();
            ui.label("Chosen");
            ui.colored_label(status_color(TaskStatus::Chosen), p.chosen_ratio());
            ui.end_row();
            ui.label("Visible");
            ui.label(format!("{}/{}", map.visible.child_count(), map.tree.child_count()));
            ui.end_row();
            ui.label("Rings");
            ui.label(format!("{}", map.scene.guides().count()));
            ui.end_row();
        });

        if p.total > 0 {
            ui.add_space(8.0);
            ui.add(
                egui::ProgressBar::new(p.completed as f32 / p.total as f32)
                    .text(format!("{} completed", p.completed_ratio())),
            );
        }

        ui.add_space(12.0);
        ui.label(
            egui::RichText::new(truncate_str(&self.config.store.source, 40))
                .monospace()
                .small(),
        );
    }
}

/// Paint every primitive relative to `center`. Hit-testing works on the
/// layout positions, not on what is painted here.
fn paint_scene(painter: &egui::Painter, scene: &MapScene, center: egui::Pos2, t: f32) {
    for prim in &scene.primitives {
        match prim {
            MapPrimitive::Ellipse {
                rx,
                ry,
                stroke_width,
                color,
                opacity,
                ..
            } => {
                let points = ellipse_points(center, *rx, *ry, 96);
                painter.add(egui::Shape::closed_line(
                    points,
                    egui::Stroke::new(*stroke_width, color32_alpha(*color, *opacity)),
                ));
            }
            MapPrimitive::Sun {
                radius,
                label,
                color,
                text_color,
            } => {
                // Glow
                for (grow, alpha) in [(30.0, 0.12), (18.0, 0.2), (8.0, 0.35)] {
                    painter.circle_filled(center, radius + grow, color32_alpha(*color, alpha));
                }
                painter.circle_filled(center, *radius, color32(*color));
                painter.text(
                    center,
                    egui::Align2::CENTER_CENTER,
                    truncate_str(label, 18),
                    egui::FontId::proportional(15.0),
                    color32(*text_color),
                );
            }
            MapPrimitive::Planet {
                index,
                center: offset,
                radius,
                halo,
                kind,
                badge,
                ..
            } => {
                let p = center + egui::vec2(offset[0], offset[1]);
                paint_planet(painter, p, *radius, *halo, *kind, spin_angle(*index, t));
                if let Some(names) = badge {
                    painter.text(
                        p,
                        egui::Align2::CENTER_CENTER,
                        truncate_str(names, 20),
                        egui::FontId::proportional(11.0),
                        egui::Color32::WHITE,
                    );
                }
            }
            MapPrimitive::Label {
                position,
                text,
                color,
                ..
            } => {
                painter.text(
                    center + egui::vec2(position[0], position[1]),
                    egui::Align2::CENTER_CENTER,
                    truncate_str(text, 36),
                    egui::FontId::proportional(13.0),
                    color32(*color),
                );
            }
        }
    }
}

fn paint_planet(
    painter: &egui::Painter,
    p: egui::Pos2,
    radius: f32,
    halo: [u8; 3],
    kind: PlanetKind,
    angle: f32,
) {
    // Halo
    painter.circle_filled(p, radius + 10.0, color32_alpha(halo, 0.25));
    painter.circle_filled(p, radius + 5.0, color32_alpha(halo, 0.5));

    let (body, stripe) = planet_palette(kind);
    painter.circle_filled(p, radius, body);

    // Surface marks rotate with the spin angle
    let marks: [([f32; 2], f32); 3] = match kind {
        PlanetKind::Cratered => [([0.4, -0.3], 0.18), ([-0.35, 0.25], 0.14), ([0.1, 0.5], 0.1)],
        PlanetKind::Banded => [([0.0, -0.45], 0.22), ([0.0, 0.0], 0.2), ([0.0, 0.45], 0.16)],
        PlanetKind::Frozen => [([0.3, 0.3], 0.12), ([-0.4, -0.1], 0.16), ([0.2, -0.45], 0.1)],
    };
    for (offset, size) in marks {
        let r = rotate(offset, angle);
        painter.circle_filled(p + egui::vec2(r[0], r[1]) * radius, size * radius, stripe);
    }

    painter.circle_stroke(p, radius, egui::Stroke::new(1.5, color32(halo)));
}

/// Body of the detail panel. Returns true when the close button was clicked.
fn task_details(ui: &mut egui::Ui, node: &Node) -> bool {
    let mut close = false;

    ui.horizontal(|ui| {
        ui.strong(&node.label);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.small_button("\u{2715}").clicked() {
                close = true;
            }
        });
    });
    ui.separator();

    let Some(task) = &node.task else {
        return close;
    };

    egui::Grid::new("task_detail_grid").num_columns(2).show(ui, |ui| {
        ui.label("Status");
        ui.colored_label(status_color(task.status), task.status.as_str());
        ui.end_row();
        ui.label("Priority");
        ui.colored_label(priority_color(task.priority), task.priority.as_str());
        ui.end_row();
        if !task.due_date.is_empty() {
            ui.label("Due");
            ui.label(&task.due_date);
            ui.end_row();
        }
        if !task.assigned_to.is_empty() {
            ui.label("Assigned");
            ui.label(task.assignee_names());
            ui.end_row();
        }
    });

    if !task.info.is_empty() {
        ui.add_space(6.0);
        ui.label(&task.info);
    }

    close
}
