use super::notice::{Confirm, LogNotifier, Notice, Notifier, Operation};
use super::repository::FileRepository;
use crate::collection::{DashboardSummary, ListQuery, status_choices};
use crate::core::{DeskError, FileId, FileRecord, Result, Timestamp};
use crate::storage::{FileStore, StoreAction};
use std::sync::Arc;
use tokio::sync::watch;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Ready,
}

/// Result of a lifecycle operation as the caller sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Persisted and reflected in the collection.
    Applied,
    /// Nothing changed locally; the notice has already been surfaced.
    Failed(Notice),
    /// Delete refused at the confirmation step.
    Cancelled,
    /// No record with that `FILE_ID` in the collection.
    NotFound,
}

impl Outcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied)
    }
}

/// Clears the syncing flag however the operation ends.
struct SyncGuard<'a>(&'a watch::Sender<bool>);

impl<'a> SyncGuard<'a> {
    fn start(flag: &'a watch::Sender<bool>) -> Self {
        flag.send_replace(true);
        Self(flag)
    }
}

impl Drop for SyncGuard<'_> {
    fn drop(&mut self) {
        self.0.send_replace(false);
    }
}

/// Owns the canonical collection and drives every change through the store.
pub struct FileManager {
    store: Arc<dyn FileStore>,
    notifier: Arc<dyn Notifier>,
    repository: FileRepository,
    state: LoadState,
    syncing: watch::Sender<bool>,
}

impl FileManager {
    pub fn new(store: Arc<dyn FileStore>) -> Self {
        let (syncing, _) = watch::channel(false);
        Self {
            store,
            notifier: Arc::new(LogNotifier),
            repository: FileRepository::new(),
            state: LoadState::Loading,
            syncing,
        }
    }

    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    pub fn store(&self) -> &Arc<dyn FileStore> {
        &self.store
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    pub fn is_syncing(&self) -> bool {
        *self.syncing.borrow()
    }

    /// Watch the syncing flag from another task.
    pub fn subscribe_syncing(&self) -> watch::Receiver<bool> {
        self.syncing.subscribe()
    }

    pub fn records(&self) -> &[FileRecord] {
        self.repository.records()
    }

    pub fn get(&self, file_id: &str) -> Option<&FileRecord> {
        self.repository.get(file_id)
    }

    pub fn query(&self, query: &ListQuery) -> Vec<&FileRecord> {
        query.apply(self.records())
    }

    pub fn summary(&self) -> Result<DashboardSummary> {
        DashboardSummary::from_records(self.records())
    }

    pub fn status_choices(&self) -> Vec<String> {
        status_choices(self.records())
    }

    /// Blank record with a `FILE_ID` nobody in the collection uses yet.
    pub fn new_draft(&self) -> FileRecord {
        let mut id = FileId::generate();
        while self.repository.contains(id.as_str()) {
            id = FileId::generate();
        }
        FileRecord::draft(id)
    }

    fn fail(&self, operation: Operation, file_id: Option<&str>, err: &DeskError) -> Outcome {
        let notice = Notice::from_error(operation, file_id, err);
        self.notifier.notify(&notice);
        Outcome::Failed(notice)
    }

    // ========================================================================
    // Operations
    // ========================================================================

    /// Replaces the collection with the store contents, newest first. On
    /// failure the collection is left empty.
    pub async fn load(&mut self) -> Outcome {
        self.state = LoadState::Loading;
        let outcome = match self.store.fetch_all().await {
            Ok(records) => {
                let count = self.repository.reset(records).len();
                tracing::info!(count, store = %self.store.describe(), "case files loaded");
                Outcome::Applied
            }
            Err(err) => {
                self.repository.clear();
                self.fail(Operation::Load, None, &err)
            }
        };
        self.state = LoadState::Ready;
        outcome
    }

    /// Stamps both timestamps, persists, then puts the record in front.
    pub async fn create(&mut self, mut record: FileRecord) -> Outcome {
        let _sync = SyncGuard::start(&self.syncing);

        if self.repository.contains(record.id()) {
            let err = DeskError::invalid(
                crate::schema::ids::FILE_ID,
                format!("'{}' is already in use", record.id()),
            );
            return self.fail(Operation::Create, Some(record.id()), &err);
        }

        let now = Timestamp::now();
        record.set_created_at(now);
        record.set_updated_at(now);

        if let Err(err) = self.store.persist(&record, StoreAction::Create).await {
            return self.fail(Operation::Create, Some(record.id()), &err);
        }

        tracing::info!(file_id = record.id(), "case file created");
        self.repository.prepend(record);
        Outcome::Applied
    }

    /// Full-record replace. `createdAt` is kept from the stored copy and
    /// `updatedAt` is refreshed.
    pub async fn update(&mut self, mut record: FileRecord) -> Outcome {
        let _sync = SyncGuard::start(&self.syncing);

        if let Some(existing) = self.repository.get(record.id()) {
            record.set_created_at(existing.created_at());
        }
        record.set_updated_at(Timestamp::now());

        if let Err(err) = self.store.persist(&record, StoreAction::Update).await {
            return self.fail(Operation::Update, Some(record.id()), &err);
        }

        let file_id = record.id().to_string();
        match self.repository.replace(record) {
            Some(_) => {
                tracing::info!(%file_id, "case file updated");
                Outcome::Applied
            }
            None => {
                tracing::warn!(%file_id, "updated a case file that is not in the collection");
                Outcome::NotFound
            }
        }
    }

    /// Asks for confirmation, then removes the record from the store and the
    /// collection. Unknown ids are a no-op.
    pub async fn delete(&mut self, file_id: &str, confirm: &dyn Confirm) -> Outcome {
        let Some(record) = self.repository.get(file_id).cloned() else {
            return Outcome::NotFound;
        };
        if !confirm.confirm(&record) {
            return Outcome::Cancelled;
        }

        let _sync = SyncGuard::start(&self.syncing);
        if let Err(err) = self.store.persist(&record, StoreAction::Delete).await {
            return self.fail(Operation::Delete, Some(file_id), &err);
        }

        self.repository.remove(file_id);
        tracing::info!(file_id, "case file deleted");
        Outcome::Applied
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lifecycle::AutoConfirm;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Store that records calls and can be told to fail.
    #[derive(Default)]
    struct ScriptedStore {
        rows: Mutex<Vec<FileRecord>>,
        calls: Mutex<Vec<StoreAction>>,
        fail: bool,
    }

    #[async_trait]
    impl FileStore for ScriptedStore {
        fn describe(&self) -> String {
            "scripted".to_string()
        }

        async fn fetch_all(&self) -> Result<Vec<FileRecord>> {
            if self.fail {
                return Err(DeskError::Transport("offline".into()));
            }
            Ok(self.rows.lock().unwrap().clone())
        }

        async fn persist(&self, _record: &FileRecord, action: StoreAction) -> Result<()> {
            self.calls.lock().unwrap().push(action);
            if self.fail {
                Err(DeskError::Transport("offline".into()))
            } else {
                Ok(())
            }
        }
    }

    fn manager(fail: bool) -> (FileManager, Arc<ScriptedStore>) {
        let store = Arc::new(ScriptedStore {
            fail,
            ..Default::default()
        });
        (FileManager::new(store.clone()), store)
    }

    #[tokio::test]
    async fn test_failed_load_leaves_empty_and_ready() {
        let (mut manager, _) = manager(true);
        assert_eq!(manager.state(), LoadState::Loading);
        let outcome = manager.load().await;
        assert!(matches!(outcome, Outcome::Failed(ref n) if n.transport));
        assert!(manager.records().is_empty());
        assert_eq!(manager.state(), LoadState::Ready);
    }

    #[tokio::test]
    async fn test_failed_create_changes_nothing_and_clears_syncing() {
        let (mut manager, store) = manager(true);
        let draft = manager.new_draft();
        let outcome = manager.create(draft).await;
        assert!(matches!(outcome, Outcome::Failed(_)));
        assert!(manager.records().is_empty());
        assert!(!manager.is_syncing());
        assert_eq!(*store.calls.lock().unwrap(), vec![StoreAction::Create]);
    }

    #[tokio::test]
    async fn test_duplicate_id_is_refused_before_persisting() {
        let (mut manager, store) = manager(false);
        let draft = manager.new_draft();
        assert!(manager.create(draft.clone()).await.is_applied());
        assert!(matches!(manager.create(draft).await, Outcome::Failed(_)));
        assert_eq!(store.calls.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_update_keeps_created_at() {
        let (mut manager, _) = manager(false);
        let draft = manager.new_draft();
        let id = draft.id().to_string();
        manager.create(draft).await;
        let created = manager.get(&id).unwrap().created_at();

        let mut edited = manager.get(&id).unwrap().clone();
        edited.set_created_at(Timestamp::epoch());
        edited.assign("DEATH_PERSON_NAME", "Rao").unwrap();
        assert!(manager.update(edited).await.is_applied());

        let stored = manager.get(&id).unwrap();
        assert_eq!(stored.created_at(), created);
        assert!(stored.updated_at() >= created);
        assert_eq!(stored.text("DEATH_PERSON_NAME"), "Rao");
    }

    #[tokio::test]
    async fn test_delete_needs_confirmation() {
        let (mut manager, store) = manager(false);
        let draft = manager.new_draft();
        let id = draft.id().to_string();
        manager.create(draft).await;

        assert_eq!(manager.delete(&id, &AutoConfirm(false)).await, Outcome::Cancelled);
        assert_eq!(manager.records().len(), 1);
        assert_eq!(manager.delete("NOPE", &AutoConfirm(true)).await, Outcome::NotFound);
        assert!(manager.delete(&id, &AutoConfirm(true)).await.is_applied());
        assert!(manager.records().is_empty());
        assert_eq!(
            *store.calls.lock().unwrap(),
            vec![StoreAction::Create, StoreAction::Delete]
        );
    }

    /// Store that records the syncing flag as seen during each persist.
    #[derive(Default)]
    struct FlagWatchingStore {
        syncing: Mutex<Option<watch::Receiver<bool>>>,
        seen: Mutex<Vec<(StoreAction, bool)>>,
    }

    #[async_trait]
    impl FileStore for FlagWatchingStore {
        fn describe(&self) -> String {
            "flag watching".to_string()
        }

        async fn fetch_all(&self) -> Result<Vec<FileRecord>> {
            Ok(Vec::new())
        }

        async fn persist(&self, _record: &FileRecord, action: StoreAction) -> Result<()> {
            let flag = self
                .syncing
                .lock()
                .unwrap()
                .as_ref()
                .map(|rx| *rx.borrow())
                .unwrap_or(false);
            self.seen.lock().unwrap().push((action, flag));
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_syncing_flag_is_raised_during_persist() {
        let store = Arc::new(FlagWatchingStore::default());
        let mut manager = FileManager::new(store.clone());
        *store.syncing.lock().unwrap() = Some(manager.subscribe_syncing());

        let draft = manager.new_draft();
        let id = draft.id().to_string();
        assert!(manager.create(draft).await.is_applied());
        assert!(!manager.is_syncing());

        let edited = manager.get(&id).unwrap().clone();
        assert!(manager.update(edited).await.is_applied());
        assert!(!manager.is_syncing());

        let mut rx = manager.subscribe_syncing();
        assert_eq!(manager.delete(&id, &AutoConfirm(false)).await, Outcome::Cancelled);
        assert!(!rx.has_changed().unwrap());
        assert_eq!(store.seen.lock().unwrap().len(), 2);

        assert!(manager.delete(&id, &AutoConfirm(true)).await.is_applied());
        assert!(!manager.is_syncing());
        assert!(!*rx.borrow_and_update());

        assert_eq!(
            *store.seen.lock().unwrap(),
            vec![
                (StoreAction::Create, true),
                (StoreAction::Update, true),
                (StoreAction::Delete, true),
            ]
        );
    }
}
