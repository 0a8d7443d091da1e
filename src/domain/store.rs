use crate::domain::{Phase, Task};
use uuid::Uuid;

/// Ordered collection of tasks. The current task lives outside the store as
/// an `Option<Uuid>`; every operation re-resolves tasks by id so a stale copy
/// can never be written back.
#[derive(Debug, Clone, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    pub fn new(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    /// Three starter tasks, used when no saved state exists.
    pub fn seeded() -> Self {
        Self {
            tasks: vec![
                Task::new("Deep work".to_string()),
                Task::new("Email".to_string()),
                Task::new("Reading".to_string()),
            ],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: Uuid) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn get_mut(&mut self, id: Uuid) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id == id)
    }

    /// Add a task. Empty or whitespace-only names are rejected silently.
    pub fn add(&mut self, name: &str) -> Option<Uuid> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        let task = Task::new(name.to_string());
        let id = task.id;
        self.tasks.push(task);
        Some(id)
    }

    /// Rename a task. Empty or whitespace-only names are rejected silently.
    pub fn rename(&mut self, id: Uuid, new_name: &str) -> bool {
        let new_name = new_name.trim();
        if new_name.is_empty() {
            return false;
        }
        if let Some(task) = self.get_mut(id) {
            task.name = new_name.to_string();
            true
        } else {
            false
        }
    }

    pub fn delete(&mut self, id: Uuid) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        self.tasks.len() != before
    }

    /// Flip the completion flag. Returns the new flag, or `None` for an
    /// unknown id.
    pub fn toggle_completed(&mut self, id: Uuid) -> Option<bool> {
        let task = self.get_mut(id)?;
        task.is_completed = !task.is_completed;
        Some(task.is_completed)
    }

    /// First active task in display order, used for auto-selection after the
    /// current task is deleted or completed.
    pub fn first_active(&self) -> Option<&Task> {
        let mut active: Vec<&Task> = self.tasks.iter().filter(|t| t.is_active()).collect();
        active.sort_by(|a, b| a.name.cmp(&b.name));
        active.first().copied()
    }

    /// Display order: the current task first (only while it is active and the
    /// session is in work mode), then active tasks by name, then completed
    /// tasks by name. Recomputed on demand; nothing stores this order.
    pub fn sorted(&self, current: Option<Uuid>, phase: Phase) -> Vec<&Task> {
        let current_first = match (current, phase) {
            (Some(id), Phase::Work) => self.get(id).filter(|t| t.is_active()),
            _ => None,
        };

        let mut active: Vec<&Task> = self
            .tasks
            .iter()
            .filter(|t| t.is_active() && Some(t.id) != current_first.map(|c| c.id))
            .collect();
        active.sort_by(|a, b| a.name.cmp(&b.name));

        let mut completed: Vec<&Task> = self.tasks.iter().filter(|t| t.is_completed).collect();
        completed.sort_by(|a, b| a.name.cmp(&b.name));

        current_first
            .into_iter()
            .chain(active)
            .chain(completed)
            .collect()
    }
}
