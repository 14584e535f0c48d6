//! Loading and re-layout for `MindMapApp`.
//!
//! Store reads run on a spawned thread (`reload`) and are picked up by
//! `check_load` on the next frame. Viewer or guide changes only re-run the
//! layout on the tree already in memory (`relayout`).

use std::sync::mpsc;
use eframe::egui;

use planet_mindmap::engine::pipeline::{MapEngine, MapError, MapResult};
use planet_mindmap::mindmap::Viewer;
use planet_mindmap::net::store::TaskSource;
use planet_mindmap::render::hit::Selection;

use super::MindMapApp;

impl MindMapApp {
    fn engine(&self) -> MapEngine {
        MapEngine::new(&self.config)
            .with_viewer(Viewer {
                name: self.config.view.viewer_name.clone(),
                role: self.viewer_role,
            })
            .with_guides(self.guide_mode)
    }

    /// Start an async store read for the source in the toolbar.
    pub fn reload(&mut self, ctx: &egui::Context) {
        if self.loading {
            return;
        }
        let source = match TaskSource::parse(&self.source_input) {
            Ok(s) => s,
            Err(e) => {
                self.error = Some(e.to_string());
                return;
            }
        };

        self.loading = true;
        self.error = None;
        self.config.store.source = self.source_input.trim().to_string();

        let (tx, rx) = mpsc::channel();
        self.load_rx = Some(rx);

        let engine = self.engine();
        let ctx = ctx.clone();
        log::info!("Loading tasks from {}", source);

        std::thread::spawn(move || {
            let result = engine.load(&source);
            let _ = tx.send(result);
            ctx.request_repaint();
        });
    }

    /// Poll the load channel and update app state when a result arrives.
    pub fn check_load(&mut self) {
        let Some(rx) = &self.load_rx else {
            return;
        };
        let result = match rx.try_recv() {
            Ok(result) => result,
            Err(mpsc::TryRecvError::Empty) => return,
            // Loader thread died before sending
            Err(mpsc::TryRecvError::Disconnected) => Err(MapError {
                message: "loader thread exited without a result".to_string(),
                phase: "store",
            }),
        };

        match result {
            Ok(map) => {
                self.install(map);
                self.error = None;
            }
            Err(e) => {
                log::warn!("Task load failed: {}", e);
                self.error = Some(e.to_string());
            }
        }
        self.loading = false;
        self.load_rx = None;
    }

    /// Re-run filter and layout on the current tree.
    pub fn relayout(&mut self) {
        let Some(map) = &self.map else {
            return;
        };
        let tree = map.tree.clone();
        match self.engine().process_tree_cached(tree, &mut self.layout_cache) {
            Ok(map) => self.install(map),
            Err(e) => self.error = Some(e.to_string()),
        }
    }

    /// Swap in a new map, keeping the selection if its node is still visible.
    fn install(&mut self, map: MapResult) {
        let center = self.map_center;
        self.selection = self.selection.take().and_then(|sel| {
            let (index, node) = map.visible.find_child(&sel.node_id)?;
            let position = *map.positions.get(index)?;
            Some(Selection::new(index, node.id.clone(), position, center))
        });
        self.map = Some(map);
    }
}
