//! In-memory to-do list.
//!
//! Items are addressed by a stable [`TodoId`] rather than by their position
//! in a filtered view, so every operation stays correct whatever filter the
//! caller is showing.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TodoError;

/// Marker shown in front of completed items.
pub const COMPLETED_MARK: &str = "[✔] ";

/// Identity of a to-do item. Never reused within a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(pub u64);

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TodoId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(TodoId)
            .map_err(|_| format!("invalid task id: {s}"))
    }
}

/// A single task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    pub id: TodoId,
    /// Task text, without any completion marker.
    pub text: String,
    pub completed: bool,
}

impl fmt::Display for TodoItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.completed {
            write!(f, "{COMPLETED_MARK}{}", self.text)
        } else {
            write!(f, "{}", self.text)
        }
    }
}

/// Which items a view shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TodoFilter {
    #[default]
    All,
    Pending,
    Completed,
}

impl TodoFilter {
    pub fn matches(self, item: &TodoItem) -> bool {
        match self {
            TodoFilter::All => true,
            TodoFilter::Pending => !item.completed,
            TodoFilter::Completed => item.completed,
        }
    }
}

impl fmt::Display for TodoFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TodoFilter::All => write!(f, "all"),
            TodoFilter::Pending => write!(f, "pending"),
            TodoFilter::Completed => write!(f, "completed"),
        }
    }
}

impl FromStr for TodoFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(TodoFilter::All),
            "pending" | "open" => Ok(TodoFilter::Pending),
            "completed" | "done" => Ok(TodoFilter::Completed),
            other => Err(format!("unknown filter: {other}")),
        }
    }
}

/// Ordered list of tasks.
#[derive(Debug, Clone, Default)]
pub struct TodoList {
    items: Vec<TodoItem>,
    next_id: u64,
}

impl TodoList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Append a pending task. Returns its id.
    pub fn add(&mut self, text: &str) -> Result<TodoId, TodoError> {
        let text = non_empty(text)?;
        self.next_id += 1;
        let id = TodoId(self.next_id);
        self.items.push(TodoItem {
            id,
            text,
            completed: false,
        });
        tracing::debug!(%id, "task added");
        Ok(id)
    }

    /// Replace a task's text, keeping its completed flag.
    pub fn edit(&mut self, id: TodoId, text: &str) -> Result<(), TodoError> {
        let text = non_empty(text)?;
        self.get_mut(id)?.text = text;
        Ok(())
    }

    /// Flip a task's completed flag. Returns the new state.
    pub fn toggle(&mut self, id: TodoId) -> Result<bool, TodoError> {
        let item = self.get_mut(id)?;
        item.completed = !item.completed;
        Ok(item.completed)
    }

    pub fn remove(&mut self, id: TodoId) -> Result<TodoItem, TodoError> {
        let pos = self
            .items
            .iter()
            .position(|i| i.id == id)
            .ok_or(TodoError::NotFound(id))?;
        tracing::debug!(%id, "task removed");
        Ok(self.items.remove(pos))
    }

    pub fn get(&self, id: TodoId) -> Option<&TodoItem> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Items passing `filter`, in insertion order.
    pub fn view(&self, filter: TodoFilter) -> Vec<&TodoItem> {
        self.items.iter().filter(|i| filter.matches(i)).collect()
    }

    fn get_mut(&mut self, id: TodoId) -> Result<&mut TodoItem, TodoError> {
        self.items
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or(TodoError::NotFound(id))
    }
}

fn non_empty(text: &str) -> Result<String, TodoError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        Err(TodoError::EmptyText)
    } else {
        Ok(trimmed.to_string())
    }
}
