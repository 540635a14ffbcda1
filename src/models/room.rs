//! Room model.

use serde::{Deserialize, Serialize};

/// A room that class sessions can be placed in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    /// Unique room identifier.
    pub id: String,
    /// Seating capacity.
    pub capacity: i32,
    /// Equipment present in the room (e.g. "Projector").
    pub equipment: Vec<String>,
}

impl Room {
    /// Creates a room with the given capacity.
    pub fn new(id: impl Into<String>, capacity: i32) -> Self {
        Self {
            id: id.into(),
            capacity,
            equipment: Vec::new(),
        }
    }

    /// Adds an equipment item.
    pub fn with_equipment(mut self, item: impl Into<String>) -> Self {
        self.equipment.push(item.into());
        self
    }

    /// Whether the room has a given equipment item.
    pub fn has_equipment(&self, name: &str) -> bool {
        self.equipment.iter().any(|e| e == name)
    }
}
