//! Mind-map tree and task metadata.
//!
//! The tree is rebuilt wholesale from store records on every refresh; child
//! order is preserved because it decides where each planet sits.

pub mod record;

use serde::{Deserialize, Serialize};

pub use record::{AssigneeRecord, TaskRecord};

/// Workflow state of a task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    #[default]
    New,
    /// Picked up by at least one assignee
    Chosen,
    Completed,
}

impl TaskStatus {
    /// Parse a store value. Unknown or empty values count as `New`.
    pub fn from_store(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "chosen" => Self::Chosen,
            "completed" => Self::Completed,
            _ => Self::New,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Chosen => "chosen",
            Self::Completed => "completed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Priority {
    #[default]
    Low,
    Medium,
    Urgent,
}

impl Priority {
    /// Parse a store value. Unknown or empty values count as `Low`.
    pub fn from_store(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "medium" => Self::Medium,
            "urgent" => Self::Urgent,
            _ => Self::Low,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::Urgent => "Urgent",
        }
    }
}

/// Team member a task is assigned to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignee {
    pub id: String,
    pub name: String,
    pub email: Option<String>,
}

/// Planet sprite shown for a task
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanetKind {
    Cratered,
    Banded,
    Frozen,
}

impl PlanetKind {
    const ALL: [PlanetKind; 3] = [PlanetKind::Cratered, PlanetKind::Banded, PlanetKind::Frozen];

    /// Stable pick from the task id (FNV-1a), so refreshes keep each planet's look.
    pub fn for_id(id: &str) -> Self {
        let mut h: u64 = 0xcbf2_9ce4_8422_2325;
        for b in id.bytes() {
            h ^= b as u64;
            h = h.wrapping_mul(0x0100_0000_01b3);
        }
        Self::ALL[(h % Self::ALL.len() as u64) as usize]
    }
}

/// Metadata carried by task nodes
#[derive(Debug, Clone, PartialEq)]
pub struct TaskInfo {
    pub info: String,
    pub status: TaskStatus,
    pub priority: Priority,
    pub assigned_to: Vec<Assignee>,
    pub due_date: String,
    pub planet: PlanetKind,
}

impl TaskInfo {
    pub fn is_assigned_to(&self, name: &str) -> bool {
        self.assigned_to.iter().any(|a| a.name == name)
    }

    /// Assignee names joined for display ("Ann, Bo").
    pub fn assignee_names(&self) -> String {
        self.assigned_to
            .iter()
            .map(|a| a.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// A display entity in the mind map (root or task)
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub id: String,
    pub label: String,
    pub children: Vec<Node>,
    /// `None` on the root
    pub task: Option<TaskInfo>,
}

impl Node {
    pub fn root(label: impl Into<String>) -> Self {
        Self {
            id: "root".to_string(),
            label: label.into(),
            children: Vec::new(),
            task: None,
        }
    }

    /// Build a root whose children are `records`, in store order.
    pub fn from_records(root_label: impl Into<String>, records: Vec<TaskRecord>) -> Self {
        let mut root = Self::root(root_label);
        root.children = records.into_iter().map(TaskRecord::into_node).collect();
        root
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    pub fn find_child(&self, id: &str) -> Option<(usize, &Node)> {
        self.children.iter().enumerate().find(|(_, c)| c.id == id)
    }

    pub fn status(&self) -> Option<TaskStatus> {
        self.task.as_ref().map(|t| t.status)
    }
}

// ─── Viewer filtering ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Manager,
    Employee,
}

/// Who is looking at the map
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Viewer {
    pub name: String,
    pub role: Role,
}

/// Copy of `root` holding only the children `viewer` may see.
///
/// Managers see everything. Employees see their own tasks once chosen or
/// completed. Surviving children keep their relative order.
pub fn visible_children(root: &Node, viewer: &Viewer) -> Node {
    let children = match viewer.role {
        Role::Manager => root.children.clone(),
        Role::Employee => root
            .children
            .iter()
            .filter(|c| {
                c.task.as_ref().is_some_and(|t| {
                    t.is_assigned_to(&viewer.name)
                        && matches!(t.status, TaskStatus::Chosen | TaskStatus::Completed)
                })
            })
            .cloned()
            .collect(),
    };
    Node {
        id: root.id.clone(),
        label: root.label.clone(),
        children,
        task: root.task.clone(),
    }
}

// ─── Progress ────────────────────────────────────────────────────────────────

/// Task counts shown in the stats panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProgressSummary {
    pub completed: usize,
    pub chosen: usize,
    pub total: usize,
}

impl ProgressSummary {
    pub fn of(root: &Node) -> Self {
        let mut s = Self {
            total: root.children.len(),
            ..Self::default()
        };
        for child in &root.children {
            match child.status() {
                Some(TaskStatus::Completed) => s.completed += 1,
                Some(TaskStatus::Chosen) => s.chosen += 1,
                _ => {}
            }
        }
        s
    }

    /// "completed/total"
    pub fn completed_ratio(&self) -> String {
        format!("{}/{}", self.completed, self.total)
    }

    /// "chosen/total"
    pub fn chosen_ratio(&self) -> String {
        format!("{}/{}", self.chosen, self.total)
    }
}

// ─── Colors ──────────────────────────────────────────────────────────────────

pub const SUNSET_GOLD: [u8; 3] = [0xFF, 0xB8, 0x1C];
pub const SOLAR_FLARE: [u8; 3] = [0xFF, 0x5A, 0x36];
pub const DAYLIGHT_BLUE: [u8; 3] = [0x3C, 0x9D, 0xC6];
pub const SOLAR_WHITE: [u8; 3] = [0xF8, 0xF8, 0xF8];
pub const ASTRO_GRAY: [u8; 3] = [0x5A, 0x5A, 0x5A];
pub const LUNAR_BLACK: [u8; 3] = [0x1A, 0x1A, 0x1A];
pub const SPACE_BACKGROUND: [u8; 3] = [0x13, 0x13, 0x1A];
pub const COMPLETED_GREEN: [u8; 3] = [0x00, 0x80, 0x00];
pub const URGENT_TOMATO: [u8; 3] = [0xFF, 0x63, 0x47];

/// Halo around a planet: completion wins over priority.
pub fn halo_color(task: &TaskInfo) -> [u8; 3] {
    if task.status == TaskStatus::Completed {
        return COMPLETED_GREEN;
    }
    match task.priority {
        Priority::Medium => SUNSET_GOLD,
        Priority::Urgent => URGENT_TOMATO,
        Priority::Low => DAYLIGHT_BLUE,
    }
}
