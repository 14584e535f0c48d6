//! Toolbar rendering for `MindMapApp`.
//!
//! Draws the task-source field, reload button, viewer-role selector,
//! guide-mode selector and the stats toggle.

use eframe::egui;
use planet_mindmap::mindmap::Role;
use planet_mindmap::render::scene::GuideMode;

use super::MindMapApp;

impl MindMapApp {
    /// Render the top toolbar strip.
    pub fn draw_toolbar(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        ui.horizontal(|ui| {
            ui.add_space(4.0);

            // Source field
            let response = ui.add_sized(
                [ui.available_width() - 360.0, 24.0],
                egui::TextEdit::singleline(&mut self.source_input)
                    .hint_text("tasks.json or https://...")
                    .font(egui::TextStyle::Monospace),
            );

            if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                self.reload(ctx);
            }

            if ui
                .add_enabled(!self.loading, egui::Button::new("\u{21BB} Reload"))
                .clicked()
            {
                self.reload(ctx);
            }

            // Viewer role
            let prev_role = self.viewer_role;
            egui::ComboBox::from_id_salt("viewer_role")
                .selected_text(match self.viewer_role {
                    Role::Manager => "Manager",
                    Role::Employee => "Employee",
                })
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut self.viewer_role, Role::Manager, "Manager");
                    ui.selectable_value(&mut self.viewer_role, Role::Employee, "Employee");
                });

            // Guide ellipses
            let prev_guides = self.guide_mode;
            egui::ComboBox::from_id_salt("guide_mode")
                .selected_text(match self.guide_mode {
                    GuideMode::PerRing => "Rings",
                    GuideMode::PerChild => "Per task",
                })
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut self.guide_mode, GuideMode::PerRing, "One per ring");
                    ui.selectable_value(&mut self.guide_mode, GuideMode::PerChild, "One per task");
                });

            if self.viewer_role != prev_role || self.guide_mode != prev_guides {
                self.relayout();
            }

            ui.toggle_value(&mut self.show_stats, "Stats");

            if self.loading {
                ui.spinner();
            }
        });
    }
}
