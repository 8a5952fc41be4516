mod error_banner;
mod failure_modal;
mod sifter_controls;
mod task_actions;
mod task_table;

pub use error_banner::ErrorBanner;
pub use failure_modal::FailureModal;
pub use sifter_controls::SifterControls;
pub use task_actions::TaskActions;
pub use task_table::TaskTable;
