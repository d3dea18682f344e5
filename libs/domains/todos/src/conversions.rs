//! `rpc::todo::v1` messages ↔ domain models

use chrono::{DateTime, Utc};
use grpc_client::conversions::{datetime_to_timestamp, timestamp_to_datetime};
use prost_types::Timestamp;
use rpc::todo::v1 as proto;

use crate::error::{ToDoError, TodoResult};
use crate::models::{NewToDo, ToDo};

const NANOS_PER_MICRO: i32 = 1_000;

/// 0001-01-01T00:00:00Z, the earliest protobuf `Timestamp`
const MIN_REMINDER_SECONDS: i64 = -62_135_596_800;
/// 9999-12-31T23:59:59Z, the latest protobuf `Timestamp`
const MAX_REMINDER_SECONDS: i64 = 253_402_300_799;

/// Decode a reminder for storage.
///
/// The datastore keeps microseconds, so anything finer would not survive a
/// round trip and is rejected.
pub fn reminder_from_proto(reminder: Option<&Timestamp>) -> TodoResult<DateTime<Utc>> {
    let ts = reminder
        .ok_or_else(|| ToDoError::InvalidArgument("reminder field is required".to_string()))?;

    if !(MIN_REMINDER_SECONDS..=MAX_REMINDER_SECONDS).contains(&ts.seconds) {
        return Err(ToDoError::InvalidArgument(format!(
            "reminder field has invalid format: {}s is outside 0001-01-01..=9999-12-31",
            ts.seconds
        )));
    }

    let dt = timestamp_to_datetime(ts).map_err(|e| {
        ToDoError::InvalidArgument(format!("reminder field has invalid format: {}", e))
    })?;

    if ts.nanos % NANOS_PER_MICRO != 0 {
        return Err(ToDoError::InvalidArgument(format!(
            "reminder field has invalid format: precision finer than microseconds ({} nanos)",
            ts.nanos
        )));
    }

    Ok(dt)
}

impl TryFrom<proto::ToDo> for NewToDo {
    type Error = ToDoError;

    fn try_from(todo: proto::ToDo) -> Result<Self, Self::Error> {
        let reminder = reminder_from_proto(todo.reminder.as_ref())?;
        Ok(NewToDo {
            title: todo.title,
            description: todo.description,
            reminder,
        })
    }
}

impl TryFrom<proto::ToDo> for ToDo {
    type Error = ToDoError;

    fn try_from(todo: proto::ToDo) -> Result<Self, Self::Error> {
        let id = todo.id;
        Ok(NewToDo::try_from(todo)?.with_id(id))
    }
}

impl From<ToDo> for proto::ToDo {
    fn from(todo: ToDo) -> Self {
        proto::ToDo {
            id: todo.id,
            title: todo.title,
            description: todo.description,
            reminder: Some(datetime_to_timestamp(todo.reminder)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn proto_todo(nanos: i32) -> proto::ToDo {
        proto::ToDo {
            id: 3,
            title: "Buy milk".into(),
            description: "2 litres".into(),
            reminder: Some(Timestamp {
                seconds: 1_893_488_400,
                nanos,
            }),
        }
    }

    #[test]
    fn test_proto_to_domain() {
        let todo = ToDo::try_from(proto_todo(250_000)).unwrap();
        assert_eq!(todo.id, 3);
        assert_eq!(todo.title, "Buy milk");
        assert_eq!(todo.description, "2 litres");
        assert_eq!(todo.reminder.timestamp(), 1_893_488_400);
        assert_eq!(todo.reminder.timestamp_subsec_micros(), 250);
    }

    #[test]
    fn test_domain_to_proto_keeps_reminder() {
        let reminder = Utc.with_ymd_and_hms(2030, 1, 1, 9, 0, 0).unwrap();
        let todo = ToDo {
            id: 9,
            title: "t".into(),
            description: String::new(),
            reminder,
        };
        let message = proto::ToDo::from(todo);
        assert_eq!(message.reminder, Some(Timestamp { seconds: 1_893_488_400, nanos: 0 }));
    }

    #[test]
    fn test_missing_reminder_is_invalid_argument() {
        let mut message = proto_todo(0);
        message.reminder = None;
        let err = NewToDo::try_from(message).unwrap_err();
        assert_eq!(err, ToDoError::InvalidArgument("reminder field is required".into()));
    }

    #[test]
    fn test_out_of_range_nanos_is_invalid_argument() {
        let err = NewToDo::try_from(proto_todo(-1)).unwrap_err();
        assert!(matches!(err, ToDoError::InvalidArgument(msg) if msg.starts_with("reminder field has invalid format")));
    }

    #[test]
    fn test_sub_microsecond_reminder_is_rejected() {
        let err = NewToDo::try_from(proto_todo(1_000_001)).unwrap_err();
        assert!(matches!(err, ToDoError::InvalidArgument(_)));
    }

    #[test]
    fn test_reminder_outside_timestamp_range_is_rejected() {
        for seconds in [MAX_REMINDER_SECONDS + 1, -219_950_000_000, MIN_REMINDER_SECONDS - 1] {
            let err = reminder_from_proto(Some(&Timestamp { seconds, nanos: 0 })).unwrap_err();
            assert!(
                matches!(&err, ToDoError::InvalidArgument(msg) if msg.starts_with("reminder field has invalid format")),
                "{seconds}: {err:?}"
            );
        }
    }

    #[test]
    fn test_reminder_range_bounds_are_accepted() {
        let first = reminder_from_proto(Some(&Timestamp { seconds: MIN_REMINDER_SECONDS, nanos: 0 })).unwrap();
        assert_eq!(first, Utc.with_ymd_and_hms(1, 1, 1, 0, 0, 0).unwrap());

        let last = reminder_from_proto(Some(&Timestamp { seconds: MAX_REMINDER_SECONDS, nanos: 999_999_000 })).unwrap();
        assert_eq!(last.timestamp(), MAX_REMINDER_SECONDS);
    }
}
