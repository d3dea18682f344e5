use std::sync::Arc;
use tracing::{info, instrument, warn};
use validator::Validate;

use rpc::todo::v1::{
    CreateRequest, CreateResponse, DeleteRequest, DeleteResponse, ReadAllRequest,
    ReadAllResponse, ReadRequest, ReadResponse, UpdateRequest, UpdateResponse,
};

use crate::error::{ToDoError, TodoResult};
use crate::models::{NewToDo, ToDo};
use crate::repository::TodoRepository;

/// API version implemented by this service
pub const API_VERSION: &str = "v1";

/// Accept the implemented version or an unset one
pub fn check_api(api: &str) -> TodoResult<()> {
    if !api.is_empty() && api != API_VERSION {
        return Err(ToDoError::Unimplemented(format!(
            "unsupported API version: service implements API version '{}', but asked for '{}'",
            API_VERSION, api
        )));
    }
    Ok(())
}

fn not_found(id: i64) -> ToDoError {
    ToDoError::NotFound(format!("ToDo with ID='{}' is not found", id))
}

fn validation_error(err: validator::ValidationErrors) -> ToDoError {
    ToDoError::InvalidArgument(err.to_string())
}

fn required_to_do<T>(to_do: Option<T>) -> TodoResult<T> {
    to_do.ok_or_else(|| ToDoError::InvalidArgument("to_do field is required".to_string()))
}

fn row_count(rows: u64) -> i64 {
    i64::try_from(rows).unwrap_or(i64::MAX)
}

/// ToDo business logic, shared by every transport
#[derive(Clone)]
pub struct TodoService<R: TodoRepository> {
    repository: Arc<R>,
}

impl<R: TodoRepository> TodoService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    #[instrument(skip(self, request), fields(api = %request.api))]
    pub async fn create(&self, request: CreateRequest) -> TodoResult<CreateResponse> {
        check_api(&request.api)?;

        let todo = NewToDo::try_from(required_to_do(request.to_do)?)?;
        todo.validate().map_err(validation_error)?;

        let id = self.repository.insert(todo).await?;
        info!(todo_id = id, "ToDo created");

        Ok(CreateResponse {
            api: API_VERSION.to_string(),
            id,
        })
    }

    #[instrument(skip(self, request), fields(api = %request.api, todo_id = request.id))]
    pub async fn read(&self, request: ReadRequest) -> TodoResult<ReadResponse> {
        check_api(&request.api)?;

        let mut rows = self.repository.find_by_id(request.id).await?;
        if rows.len() > 1 {
            return Err(ToDoError::Internal(format!(
                "found multiple ToDo rows with ID='{}'",
                request.id
            )));
        }
        let todo = rows.pop().ok_or_else(|| not_found(request.id))?;

        Ok(ReadResponse {
            api: API_VERSION.to_string(),
            to_do: Some(todo.into()),
        })
    }

    #[instrument(skip(self, request), fields(api = %request.api))]
    pub async fn update(&self, request: UpdateRequest) -> TodoResult<UpdateResponse> {
        check_api(&request.api)?;

        let todo = ToDo::try_from(required_to_do(request.to_do)?)?;
        todo.validate().map_err(validation_error)?;
        let id = todo.id;

        let updated = self.repository.update(todo).await?;
        info!(todo_id = id, rows_affected = updated, "ToDo update executed");
        if updated == 0 {
            return Err(not_found(id));
        }
        if updated > 1 {
            warn!(todo_id = id, rows_affected = updated, "Update touched more than one row");
        }

        Ok(UpdateResponse {
            api: API_VERSION.to_string(),
            updated: row_count(updated),
        })
    }

    #[instrument(skip(self, request), fields(api = %request.api, todo_id = request.id))]
    pub async fn delete(&self, request: DeleteRequest) -> TodoResult<DeleteResponse> {
        check_api(&request.api)?;

        let deleted = self.repository.delete(request.id).await?;
        if deleted == 0 {
            return Err(not_found(request.id));
        }
        info!(rows_affected = deleted, "ToDo deleted");

        Ok(DeleteResponse {
            api: API_VERSION.to_string(),
            deleted: row_count(deleted),
        })
    }

    #[instrument(skip(self, request), fields(api = %request.api))]
    pub async fn read_all(&self, request: ReadAllRequest) -> TodoResult<ReadAllResponse> {
        check_api(&request.api)?;

        let todos = self.repository.list().await?;

        Ok(ReadAllResponse {
            api: API_VERSION.to_string(),
            to_dos: todos.into_iter().map(Into::into).collect(),
        })
    }
}
