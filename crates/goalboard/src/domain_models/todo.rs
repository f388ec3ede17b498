/// A todo item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    pub id: String,
    pub name: String,
    pub complete: bool,
}

impl Todo {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            complete: false,
        }
    }

    /// Copy of this todo with `complete` flipped
    pub fn toggled(&self) -> Self {
        Self {
            complete: !self.complete,
            ..self.clone()
        }
    }
}
