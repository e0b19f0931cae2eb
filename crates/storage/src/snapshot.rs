//! Loading and saving tracker data under its three storage keys.

use serde::de::DeserializeOwned;
use serde::Serialize;
use studytrack_core::TrackerData;
use tracing::debug;
use super::{Result, Storage, StorageError};

/// Key holding the task array.
pub const TODOS_KEY: &str = "todos";
/// Key holding the reminder array.
pub const REMINDERS_KEY: &str = "reminders";
/// Key holding the date-to-count mapping.
pub const PROGRESS_KEY: &str = "progress";

/// Load tracker data. Missing keys load as empty collections.
pub async fn load_data<S: Storage + ?Sized>(storage: &S) -> Result<TrackerData> {
    let data = TrackerData {
        todos: read_key(storage, TODOS_KEY).await?.unwrap_or_default(),
        reminders: read_key(storage, REMINDERS_KEY).await?.unwrap_or_default(),
        progress: read_key(storage, PROGRESS_KEY).await?.unwrap_or_default(),
    };
    debug!(
        todos = data.todos.len(),
        reminders = data.reminders.len(),
        days = data.progress.len(),
        "tracker data loaded"
    );
    Ok(data)
}

/// Store all three keys.
pub async fn save_data<S: Storage + ?Sized>(storage: &mut S, data: &TrackerData) -> Result<()> {
    write_key(storage, TODOS_KEY, &data.todos).await?;
    write_key(storage, REMINDERS_KEY, &data.reminders).await?;
    write_key(storage, PROGRESS_KEY, &data.progress).await?;
    Ok(())
}

async fn read_key<S, T>(storage: &S, key: &str) -> Result<Option<T>>
where
    S: Storage + ?Sized,
    T: DeserializeOwned,
{
    let Some(blob) = storage.get(key).await? else {
        return Ok(None);
    };
    // A stored `null` reads the same as an absent key.
    let value: Option<T> = serde_json::from_str(&blob).map_err(|source| StorageError::Json {
        key: key.to_string(),
        source,
    })?;
    Ok(value)
}

async fn write_key<S, T>(storage: &mut S, key: &str, value: &T) -> Result<()>
where
    S: Storage + ?Sized,
    T: Serialize + ?Sized,
{
    let blob = serde_json::to_string(value).map_err(|source| StorageError::Json {
        key: key.to_string(),
        source,
    })?;
    storage.put(key, &blob).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{JsonStorage, MemoryStorage};
    use chrono::NaiveDate;
    use std::sync::Arc;
    use studytrack_core::{FixedClock, ReminderForm, TaskForm, TrackerState};

    fn sample_state() -> TrackerState {
        let day = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        let clock = Arc::new(FixedClock::new(1_714_550_400_000, day));
        let mut state = TrackerState::new().with_clock(clock);
        let id = state
            .add_task(&TaskForm::new("Read Ch.1", "Study", "2024-05-01"))
            .unwrap()
            .id;
        state.add_task(&TaskForm::new("Gym", "Personal", ""));
        state.toggle_task(id);
        state.add_reminder(&ReminderForm::new("Submit HW", "2024-05-01T10:00"));
        state
    }

    #[tokio::test]
    async fn test_empty_storage_loads_empty_data() {
        let storage = MemoryStorage::new();
        let data = load_data(&storage).await.unwrap();
        assert_eq!(data, TrackerData::default());
    }

    #[tokio::test]
    async fn test_save_then_load_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = JsonStorage::new(dir.path()).await.unwrap();
        let state = sample_state();

        save_data(&mut storage, state.data()).await.unwrap();
        assert_eq!(
            storage.keys().await.unwrap(),
            vec!["progress", "reminders", "todos"]
        );

        let reopened = JsonStorage::new(dir.path()).await.unwrap();
        let loaded = load_data(&reopened).await.unwrap();
        assert_eq!(&loaded, state.data());
    }

    #[tokio::test]
    async fn test_loads_blobs_in_dashboard_format() {
        let mut storage = MemoryStorage::new();
        storage
            .put(
                TODOS_KEY,
                r#"[{"id":1714550400000,"text":"Essay","category":"Assignment","dueDate":"","completed":true}]"#,
            )
            .await
            .unwrap();
        storage
            .put(
                REMINDERS_KEY,
                r#"[{"id":1714550400001,"message":"Exam","time":"2024-05-03T09:30"}]"#,
            )
            .await
            .unwrap();
        storage.put(PROGRESS_KEY, r#"{"2024-05-01":2}"#).await.unwrap();

        let data = load_data(&storage).await.unwrap();
        assert_eq!(data.todos.len(), 1);
        assert!(data.todos[0].completed);
        assert!(data.todos[0].due_date.is_none());
        assert_eq!(data.reminders[0].to_string(), "Exam at 2024-05-03T09:30");
        assert_eq!(data.progress.total(), 2);

        // New ids must not collide with the loaded ones.
        let clock = Arc::new(FixedClock::new(5, NaiveDate::from_ymd_opt(2024, 5, 4).unwrap()));
        let mut state = TrackerState::from_data(data).with_clock(clock);
        let id = state.add_task(&TaskForm::new("Next", "Study", "")).unwrap().id;
        assert_eq!(id.as_u64(), 1_714_550_400_002);
    }

    #[tokio::test]
    async fn test_partial_and_null_keys() {
        let mut storage = MemoryStorage::new();
        storage.put(TODOS_KEY, "null").await.unwrap();
        storage.put(PROGRESS_KEY, r#"{"2024-04-30":1}"#).await.unwrap();

        let data = load_data(&storage).await.unwrap();
        assert!(data.todos.is_empty());
        assert!(data.reminders.is_empty());
        assert_eq!(data.progress.len(), 1);
    }

    #[tokio::test]
    async fn test_corrupt_blob_is_an_error() {
        let mut storage = MemoryStorage::new();
        storage.put(REMINDERS_KEY, "{not json").await.unwrap();

        match load_data(&storage).await {
            Err(StorageError::Json { key, .. }) => assert_eq!(key, REMINDERS_KEY),
            other => panic!("expected JSON error, got {other:?}"),
        }
    }
}
