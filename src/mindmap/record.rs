//! Task documents as the store serves them.

use serde::{Deserialize, Deserializer, Serialize};

use super::{Assignee, Node, PlanetKind, Priority, TaskInfo, TaskStatus};

/// One task document. Field names follow the store's camelCase schema.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskRecord {
    pub id: String,
    #[serde(default)]
    pub task_name: String,
    #[serde(default)]
    pub task_info: String,
    #[serde(default)]
    pub status: Option<String>,
    /// Anything but an array (null, a string, an object) reads as unassigned
    #[serde(default, deserialize_with = "lenient_assignees")]
    pub assigned_to: Vec<AssigneeRecord>,
    #[serde(default)]
    pub task_priority: Option<String>,
    #[serde(default)]
    pub task_due_date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AssigneeRecord {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
}

fn lenient_assignees<'de, D>(de: D) -> Result<Vec<AssigneeRecord>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(de)?;
    match value {
        serde_json::Value::Array(items) => Ok(items
            .into_iter()
            .filter_map(|v| serde_json::from_value(v).ok())
            .collect()),
        _ => Ok(Vec::new()),
    }
}

impl TaskRecord {
    pub fn into_node(self) -> Node {
        let planet = PlanetKind::for_id(&self.id);
        let assigned_to = self
            .assigned_to
            .into_iter()
            .map(|a| Assignee {
                id: a.id,
                name: a.name,
                email: a.email.filter(|e| !e.trim().is_empty()),
            })
            .collect();

        Node {
            id: self.id,
            label: self.task_name,
            children: Vec::new(),
            task: Some(TaskInfo {
                info: self.task_info,
                status: self.status.as_deref().map(TaskStatus::from_store).unwrap_or_default(),
                priority: self
                    .task_priority
                    .as_deref()
                    .map(Priority::from_store)
                    .unwrap_or_default(),
                assigned_to,
                due_date: self.task_due_date.unwrap_or_default(),
                planet,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_record() {
        let json = r#"{
            "id": "t1",
            "taskName": "Chart the moons",
            "taskInfo": "List every moon",
            "status": "chosen",
            "assignedTo": [{"id": "e1", "name": "Rei", "email": "rei@example.com"}],
            "taskPriority": "Urgent",
            "taskDueDate": "2025-03-01"
        }"#;
        let rec: TaskRecord = serde_json::from_str(json).unwrap();
        let node = rec.into_node();
        let task = node.task.unwrap();
        assert_eq!(node.label, "Chart the moons");
        assert_eq!(task.status, TaskStatus::Chosen);
        assert_eq!(task.priority, Priority::Urgent);
        assert_eq!(task.assigned_to[0].email.as_deref(), Some("rei@example.com"));
        assert_eq!(task.due_date, "2025-03-01");
    }

    #[test]
    fn missing_fields_take_defaults() {
        let rec: TaskRecord = serde_json::from_str(r#"{"id": "t2", "taskName": "Orbit"}"#).unwrap();
        let task = rec.into_node().task.unwrap();
        assert_eq!(task.status, TaskStatus::New);
        assert_eq!(task.priority, Priority::Low);
        assert!(task.assigned_to.is_empty());
        assert_eq!(task.due_date, "");
    }

    #[test]
    fn non_array_assignees_read_as_empty() {
        for raw in [r#""Rei""#, "null", r#"{"name": "Rei"}"#] {
            let json = format!(r#"{{"id": "t3", "assignedTo": {raw}}}"#);
            let rec: TaskRecord = serde_json::from_str(&json).unwrap();
            assert!(rec.assigned_to.is_empty(), "{raw}");
        }
    }
}
