pub mod progress_ledger;
pub mod progress_model;
pub mod progress_traits;

pub use progress_ledger::ProgressLedger;
pub use progress_model::{HeatLevel, ProgressEntry};
pub use progress_traits::ProgressLedgerTrait;
