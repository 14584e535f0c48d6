use std::io::Write;

use planet_mindmap::config::AppConfig;
use planet_mindmap::engine::pipeline::MapEngine;
use planet_mindmap::mindmap::{Role, TaskStatus, Viewer};
use planet_mindmap::net::store::TaskSource;
use planet_mindmap::render::hit::{pick_child, Selection};
use planet_mindmap::render::scene::PLANET_RADIUS;

const TASKS: &str = r#"[
    {"id": "t1", "taskName": "Survey Mercury", "status": "completed",
     "assignedTo": [{"id": "e1", "name": "Rei", "email": "rei@example.com"}], "taskPriority": "Low"},
    {"id": "t2", "taskName": "Map Venus", "taskPriority": "Urgent", "assignedTo": "nobody"},
    {"id": "t3", "taskName": "Count moons", "status": "chosen",
     "assignedTo": [{"id": "e2", "name": "Kai"}], "taskDueDate": "2025-04-01"},
    {"id": "t4", "taskName": "Ring census", "taskPriority": "Medium"},
    {"id": "t5", "taskName": "Probe launch", "status": "chosen",
     "assignedTo": [{"id": "e1", "name": "Rei"}]}
]"#;

fn task_file() -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(TASKS.as_bytes()).unwrap();
    file
}

#[test]
fn load_select_and_anchor() {
    let file = task_file();
    let source = TaskSource::parse(file.path().to_str().unwrap()).unwrap();
    let map = MapEngine::new(&AppConfig::default()).load(&source).unwrap();

    assert_eq!(map.tree.child_count(), 5);
    assert_eq!(map.positions.len(), 5);
    assert_eq!(map.progress.completed_ratio(), "1/5");
    assert_eq!(map.progress.chosen_ratio(), "2/5");

    // Fifth task opens ring 1 at π/4
    let center = [640.0, 450.0];
    let p = map.positions[4];
    let pointer = [center[0] + p.x + 3.0, center[1] + p.y - 2.0];
    let idx = pick_child(&map.positions, center, pointer, PLANET_RADIUS).unwrap();
    assert_eq!(idx, 4);

    let node = &map.visible.children[idx];
    let sel = Selection::new(idx, node.id.clone(), map.positions[idx], center);
    assert_eq!(sel.node_id, "t5");
    assert!((sel.anchor[0] - (640.0 + p.x + 100.0)).abs() < 1e-3);
    assert!((sel.anchor[1] - (450.0 + p.y)).abs() < 1e-3);
}

#[test]
fn employee_view_relayouts_filtered_tasks() {
    let file = task_file();
    let source = TaskSource::File(file.path().to_path_buf());
    let engine = MapEngine::new(&AppConfig::default()).with_viewer(Viewer {
        name: "Rei".to_string(),
        role: Role::Employee,
    });
    let map = engine.load(&source).unwrap();

    let ids: Vec<&str> = map.visible.children.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["t1", "t5"]);
    assert_eq!(map.positions.len(), 2);
    assert_eq!(map.progress.completed_ratio(), "1/5");
    assert_eq!(map.progress.chosen_ratio(), "2/5");
    assert_eq!(
        map.visible.children[1].status(),
        Some(TaskStatus::Chosen)
    );
    // t5 moves into slot 1 of ring 0 (straight down)
    assert!(map.positions[1].x.abs() < 1e-3);
    assert!((map.positions[1].y - 160.0).abs() < 1e-3);
}

#[test]
fn config_file_drives_the_layout() {
    let cfg = AppConfig::parse(
        r#"
        [orbit]
        ring_capacity = 2

        [view]
        root_label = "Outer Planets"
        "#,
    )
    .unwrap();
    let file = task_file();
    let map = MapEngine::new(&cfg)
        .load(&TaskSource::File(file.path().to_path_buf()))
        .unwrap();

    assert_eq!(map.tree.label, "Outer Planets");
    // 5 tasks over capacity 2 → rings 0, 1, 2
    assert_eq!(map.scene.guides().count(), 3);
}
