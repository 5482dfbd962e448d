//! Record lifecycle
//!
//! `FileManager` owns the one canonical collection. Loads and mutations go
//! through the store first and reach the collection only on success; every
//! failure becomes a `Notice`.

pub mod manager;
pub mod notice;
pub mod repository;

pub use manager::{FileManager, LoadState, Outcome};
pub use notice::{AutoConfirm, Confirm, LogNotifier, Notice, NoticeBuffer, Notifier, Operation};
pub use repository::FileRepository;
