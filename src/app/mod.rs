//! `MindMapApp` — the top-level egui application state.
//!
//! This module declares the `MindMapApp` struct and its constructor.
//! All methods are split across the sibling sub-modules:
//!
//! - `refresh` — background task loading and re-layout
//! - `toolbar` — source field and view controls
//! - `content` — orbital map, detail panel and stats panel

pub mod refresh;
pub mod toolbar;
pub mod content;

use std::sync::mpsc;

use planet_mindmap::config::AppConfig;
use planet_mindmap::engine::pipeline::{MapError, MapResult};
use planet_mindmap::mindmap::Role;
use planet_mindmap::render::hit::Selection;
use planet_mindmap::render::orbit::OrbitLayoutCache;
use planet_mindmap::render::scene::GuideMode;

// ─── Application state ───────────────────────────────────────────────────────

pub struct MindMapApp {
    pub config: AppConfig,
    pub source_input: String,
    pub viewer_role: Role,
    pub guide_mode: GuideMode,
    pub map: Option<MapResult>,
    pub error: Option<String>,
    pub loading: bool,
    pub load_rx: Option<mpsc::Receiver<Result<MapResult, MapError>>>,
    /// Positions reused by `relayout` while the visible count is unchanged
    pub layout_cache: OrbitLayoutCache,
    /// Selected planet; re-resolved by node id after every refresh
    pub selection: Option<Selection>,
    /// Screen position of the sun, updated every frame
    pub map_center: [f32; 2],
    pub show_stats: bool,
    pub app_start: std::time::Instant,
}

impl MindMapApp {
    pub fn new(config: AppConfig) -> Self {
        Self {
            source_input: config.store.source.clone(),
            viewer_role: config.view.viewer_role,
            guide_mode: config.view.guide_mode,
            config,
            map: None,
            error: None,
            loading: false,
            load_rx: None,
            layout_cache: OrbitLayoutCache::new(),
            selection: None,
            map_center: [0.0, 0.0],
            show_stats: true,
            app_start: std::time::Instant::now(),
        }
    }
}

impl eframe::App for MindMapApp {
    fn update(&mut self, ctx: &eframe::egui::Context, _frame: &mut eframe::Frame) {
        use eframe::egui;

        self.check_load();

        ctx.set_visuals(egui::Visuals::dark());

        // Top toolbar
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            self.draw_toolbar(ui, ctx);
        });

        // Stats side panel
        if self.show_stats {
            egui::SidePanel::right("stats")
                .default_width(220.0)
                .show(ctx, |ui| {
                    self.draw_stats_panel(ui);
                });
        }

        // Main content area
        let ctx_clone = ctx.clone();
        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(crate::ui::color32(
                planet_mindmap::mindmap::SPACE_BACKGROUND,
            )))
            .show(ctx, |ui| {
                self.draw_content(ui, &ctx_clone);
            });
    }
}
