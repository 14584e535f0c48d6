use crate::config::AppConfig;
use crate::mindmap::{visible_children, Node, ProgressSummary, TaskRecord, Viewer};
use crate::net::store::{load_tasks, TaskSource};
use crate::render::orbit::{OrbitConfig, OrbitLayoutCache, Position};
use crate::render::scene::{build_scene, GuideMode, MapScene};

/// Result of loading and laying out a mind map
#[derive(Debug, Clone)]
pub struct MapResult {
    /// Full tree as served by the store
    pub tree: Node,
    /// Tree filtered for the current viewer; positions index into its children
    pub visible: Node,
    pub positions: Vec<Position>,
    pub scene: MapScene,
    pub progress: ProgressSummary,
}

/// Error during map loading, tagged with the phase that failed
#[derive(Debug, thiserror::Error)]
#[error("[{phase}] {message}")]
pub struct MapError {
    pub message: String,
    pub phase: &'static str,
}

/// The map pipeline: Store → Tree → Filter → Layout → Scene
pub struct MapEngine {
    orbit: OrbitConfig,
    root_label: String,
    viewer: Viewer,
    guides: GuideMode,
}

impl MapEngine {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            orbit: config.orbit,
            root_label: config.view.root_label.clone(),
            viewer: config.view.viewer(),
            guides: config.view.guide_mode,
        }
    }

    pub fn with_viewer(mut self, viewer: Viewer) -> Self {
        self.viewer = viewer;
        self
    }

    pub fn with_guides(mut self, guides: GuideMode) -> Self {
        self.guides = guides;
        self
    }

    /// Load tasks from `source` through the full pipeline
    pub fn load(&self, source: &TaskSource) -> Result<MapResult, MapError> {
        let records = load_tasks(source).map_err(|e| MapError {
            message: e.to_string(),
            phase: "store",
        })?;
        self.process_records(records)
    }

    /// Run already-fetched records through the pipeline
    pub fn process_records(&self, records: Vec<TaskRecord>) -> Result<MapResult, MapError> {
        let tree = Node::from_records(self.root_label.clone(), records);
        self.process_tree(tree)
    }

    /// Filter and lay out an existing tree
    pub fn process_tree(&self, tree: Node) -> Result<MapResult, MapError> {
        self.process_tree_cached(tree, &mut OrbitLayoutCache::new())
    }

    /// Like `process_tree`, reusing positions from `cache` when the visible
    /// child count and orbit config are unchanged.
    pub fn process_tree_cached(
        &self,
        tree: Node,
        cache: &mut OrbitLayoutCache,
    ) -> Result<MapResult, MapError> {
        let visible = visible_children(&tree, &self.viewer);

        let positions = cache
            .positions(visible.child_count(), &self.orbit)
            .map_err(|e| MapError {
                message: e.to_string(),
                phase: "layout",
            })?
            .to_vec();

        let scene =
            build_scene(&visible, &positions, &self.orbit, self.guides).map_err(|e| MapError {
                message: e.to_string(),
                phase: "layout",
            })?;

        // Progress is project-wide; the viewer filter only decides what is drawn
        let progress = ProgressSummary::of(&tree);

        log::debug!(
            "Laid out {} of {} tasks for {} ({} completed, {} chosen)",
            visible.child_count(),
            tree.child_count(),
            self.viewer.name,
            progress.completed,
            progress.chosen,
        );

        Ok(MapResult {
            tree,
            visible,
            positions,
            scene,
            progress,
        })
    }
}
