mod sync;

pub use sync::{sync_repos, SyncOptions, SyncOutcome, SyncReport, SyncStatus};
