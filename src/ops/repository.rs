use crate::model::task::{Context, Quadrant, Task};

/// In-memory task collection with ID assignment and context filtering.
///
/// Tasks keep insertion order. `next_id` is always greater than every id
/// ever issued, including ids of tasks that have since been deleted.
#[derive(Debug, Clone)]
pub struct TaskRepository {
    tasks: Vec<Task>,
    next_id: u64,
    current_context: Context,
}

impl Default for TaskRepository {
    fn default() -> Self {
        TaskRepository {
            tasks: Vec::new(),
            next_id: 1,
            current_context: Context::Work,
        }
    }
}

impl TaskRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a repository from persisted tasks. Records with id 0 or an id
    /// that leaves no room for a successor are dropped.
    pub fn from_tasks(mut tasks: Vec<Task>) -> Self {
        tasks.retain(|t| {
            let usable = t.id != 0 && t.id != u64::MAX;
            if !usable {
                tracing::warn!(id = t.id, title = %t.title, "dropping task with unusable id");
            }
            usable
        });
        let next_id = tasks.iter().map(|t| t.id).max().map_or(1, |max| max + 1);
        TaskRepository {
            tasks,
            next_id,
            current_context: Context::Work,
        }
    }

    /// Every task regardless of context, in storage order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    pub fn current_context(&self) -> Context {
        self.current_context
    }

    pub fn get(&self, id: u64) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Append a new task and return a copy of it
    pub fn add(
        &mut self,
        title: &str,
        description: &str,
        quadrant: Quadrant,
        context: Context,
    ) -> Task {
        let task = Task::new(
            self.next_id,
            title.to_string(),
            description.to_string(),
            quadrant,
            context,
        );
        self.next_id += 1;
        self.tasks.push(task.clone());
        task
    }

    /// Tasks in the current context
    pub fn list_all(&self) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|t| t.context == self.current_context)
            .collect()
    }

    /// Tasks in the current context and the given quadrant
    pub fn list_by_quadrant(&self, quadrant: Quadrant) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|t| t.context == self.current_context && t.quadrant == quadrant)
            .collect()
    }

    /// Overwrite title, description and quadrant. Returns false if the id is gone.
    pub fn update(&mut self, id: u64, title: &str, description: &str, quadrant: Quadrant) -> bool {
        match self.find_mut(id) {
            Some(task) => {
                task.title = title.to_string();
                task.description = description.to_string();
                task.quadrant = quadrant;
                task.touch();
                true
            }
            None => false,
        }
    }

    /// Remove a task, keeping the relative order of the rest
    pub fn delete(&mut self, id: u64) -> bool {
        match self.tasks.iter().position(|t| t.id == id) {
            Some(idx) => {
                self.tasks.remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn toggle_completion(&mut self, id: u64) -> bool {
        match self.find_mut(id) {
            Some(task) => {
                task.completed = !task.completed;
                task.touch();
                true
            }
            None => false,
        }
    }

    /// Switch between work and private views. Stored tasks are untouched.
    pub fn toggle_context(&mut self) {
        self.current_context = self.current_context.other();
    }

    fn find_mut(&mut self, id: u64) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id == id)
    }
}
