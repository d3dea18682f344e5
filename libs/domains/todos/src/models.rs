use chrono::{DateTime, Utc};
use validator::Validate;

/// A persisted ToDo item
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct ToDo {
    pub id: i64,
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    /// Empty when absent
    pub description: String,
    pub reminder: DateTime<Utc>,
}

/// Fields of a ToDo item before the datastore assigns its id
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct NewToDo {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    pub description: String,
    pub reminder: DateTime<Utc>,
}

impl NewToDo {
    pub fn with_id(self, id: i64) -> ToDo {
        ToDo {
            id,
            title: self.title,
            description: self.description,
            reminder: self.reminder,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_title_is_invalid() {
        let todo = NewToDo {
            title: String::new(),
            description: String::new(),
            reminder: Utc::now(),
        };
        let err = todo.validate().unwrap_err();
        assert!(err.field_errors().contains_key("title"));
    }

    #[test]
    fn test_description_may_be_empty() {
        let todo = ToDo {
            id: 1,
            title: "Buy milk".into(),
            description: String::new(),
            reminder: Utc::now(),
        };
        assert!(todo.validate().is_ok());
    }
}
