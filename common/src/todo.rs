use serde::{Deserialize, Serialize};
use thiserror::Error;

const MICROS_PER_SECOND: i64 = 1_000_000;

#[derive(Error, Debug, PartialEq)]
pub enum TodoError {
    #[error("Title is required")]
    TitleRequired,
    #[error("Todo not found")]
    NotFound(i64),
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    // Creation time in Unix microseconds, bumped if needed to stay unique.
    // Microseconds keep the id within the integer range browsers can represent exactly.
    pub id: i64,
    pub title: String,
    pub completed: bool,
    // Creation time in Unix seconds
    pub created_at: i64,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct TodoList {
    #[serde(default)]
    pub items: Vec<Todo>,
}

impl TodoList {
    pub fn new(items: Vec<Todo>) -> Self {
        TodoList { items }
    }

    pub fn items(&self) -> &[Todo] {
        &self.items
    }

    pub fn get(&self, id: i64) -> Option<&Todo> {
        self.items.iter().find(|t| t.id == id)
    }

    pub fn add(&mut self, title: &str, now_micros: i64) -> Result<Todo, TodoError> {
        if title.is_empty() {
            return Err(TodoError::TitleRequired);
        }
        let id = match self.items.iter().map(|t| t.id).max() {
            Some(last) if last >= now_micros => last + 1,
            _ => now_micros,
        };
        let todo = Todo {
            id,
            title: title.to_string(),
            completed: false,
            created_at: now_micros.div_euclid(MICROS_PER_SECOND),
        };
        self.items.push(todo.clone());
        Ok(todo)
    }

    pub fn toggle(&mut self, id: i64) -> Result<Todo, TodoError> {
        let todo = self
            .items
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(TodoError::NotFound(id))?;
        todo.completed = !todo.completed;
        Ok(todo.clone())
    }

    pub fn remove(&mut self, id: i64) -> Result<Todo, TodoError> {
        let index = self
            .items
            .iter()
            .position(|t| t.id == id)
            .ok_or(TodoError::NotFound(id))?;
        Ok(self.items.remove(index))
    }
}
