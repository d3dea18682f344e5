//! JSON shapes of the gateway.
//!
//! Field names follow the protobuf JSON mapping (camelCase); reminders are
//! RFC 3339 strings.

use chrono::{DateTime, FixedOffset, Utc};
use grpc_client::conversions::{datetime_to_timestamp, timestamp_to_datetime};
use rpc::todo::v1 as proto;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::error::{ToDoError, TodoResult};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct ToDoBody {
    pub id: i64,
    pub title: String,
    pub description: String,
    #[schema(value_type = Option<String>, format = DateTime, example = "2030-01-01T09:00:00Z")]
    pub reminder: Option<DateTime<FixedOffset>>,
}

impl From<ToDoBody> for proto::ToDo {
    fn from(body: ToDoBody) -> Self {
        proto::ToDo {
            id: body.id,
            title: body.title,
            description: body.description,
            reminder: body
                .reminder
                .map(|dt| datetime_to_timestamp(dt.with_timezone(&Utc))),
        }
    }
}

impl TryFrom<proto::ToDo> for ToDoBody {
    type Error = ToDoError;

    fn try_from(todo: proto::ToDo) -> TodoResult<Self> {
        let reminder = todo
            .reminder
            .as_ref()
            .map(timestamp_to_datetime)
            .transpose()
            .map_err(|e| ToDoError::Internal(format!("server returned invalid reminder: {}", e)))?;

        Ok(ToDoBody {
            id: todo.id,
            title: todo.title,
            description: todo.description,
            reminder: reminder.map(|dt| dt.fixed_offset()),
        })
    }
}

/// Body of `POST /v1/todo` and `PUT|PATCH /v1/todo/{id}`
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct ToDoPayload {
    pub api: String,
    pub to_do: Option<ToDoBody>,
}

/// `?api=` on bodiless routes
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
#[serde(default)]
pub struct ApiQuery {
    /// Requested API version
    pub api: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CreateResponseBody {
    pub api: String,
    pub id: i64,
}

impl From<proto::CreateResponse> for CreateResponseBody {
    fn from(response: proto::CreateResponse) -> Self {
        Self {
            api: response.api,
            id: response.id,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReadResponseBody {
    pub api: String,
    pub to_do: Option<ToDoBody>,
}

impl TryFrom<proto::ReadResponse> for ReadResponseBody {
    type Error = ToDoError;

    fn try_from(response: proto::ReadResponse) -> TodoResult<Self> {
        Ok(Self {
            api: response.api,
            to_do: response.to_do.map(ToDoBody::try_from).transpose()?,
        })
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct UpdateResponseBody {
    pub api: String,
    pub updated: i64,
}

impl From<proto::UpdateResponse> for UpdateResponseBody {
    fn from(response: proto::UpdateResponse) -> Self {
        Self {
            api: response.api,
            updated: response.updated,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DeleteResponseBody {
    pub api: String,
    pub deleted: i64,
}

impl From<proto::DeleteResponse> for DeleteResponseBody {
    fn from(response: proto::DeleteResponse) -> Self {
        Self {
            api: response.api,
            deleted: response.deleted,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReadAllResponseBody {
    pub api: String,
    pub to_dos: Vec<ToDoBody>,
}

impl TryFrom<proto::ReadAllResponse> for ReadAllResponseBody {
    type Error = ToDoError;

    fn try_from(response: proto::ReadAllResponse) -> TodoResult<Self> {
        Ok(Self {
            api: response.api,
            to_dos: response
                .to_dos
                .into_iter()
                .map(ToDoBody::try_from)
                .collect::<TodoResult<_>>()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prost_types::Timestamp;
    use serde_json::json;

    #[test]
    fn test_payload_uses_camel_case() {
        let payload: ToDoPayload = serde_json::from_value(json!({
            "api": "v1",
            "toDo": {
                "title": "Buy milk",
                "reminder": "2030-01-01T11:00:00+02:00"
            }
        }))
        .unwrap();

        let todo = proto::ToDo::from(payload.to_do.unwrap());
        assert_eq!(todo.title, "Buy milk");
        assert_eq!(todo.description, "");
        assert_eq!(
            todo.reminder,
            Some(Timestamp {
                seconds: 1_893_488_400,
                nanos: 0
            })
        );
    }

    #[test]
    fn test_unparsable_reminder_is_a_json_error() {
        let result = serde_json::from_value::<ToDoPayload>(json!({
            "toDo": { "title": "x", "reminder": "next tuesday" }
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_response_serializes_rfc3339() {
        let body = ReadAllResponseBody::try_from(proto::ReadAllResponse {
            api: "v1".into(),
            to_dos: vec![proto::ToDo {
                id: 1,
                title: "Buy milk".into(),
                description: String::new(),
                reminder: Some(Timestamp {
                    seconds: 1_893_488_400,
                    nanos: 500_000,
                }),
            }],
        })
        .unwrap();

        let value = serde_json::to_value(body).unwrap();
        let reminder = value["toDos"][0]["reminder"].as_str().unwrap();
        let parsed = DateTime::parse_from_rfc3339(reminder).unwrap();
        assert_eq!(parsed.timestamp(), 1_893_488_400);
        assert_eq!(parsed.timestamp_subsec_micros(), 500);
        assert_eq!(value["toDos"][0]["id"], 1);
    }
}
