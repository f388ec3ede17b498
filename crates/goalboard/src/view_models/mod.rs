//! View models
//!
//! Each view model selects the slice of `AppState` one widget needs and
//! pre-computes its presentation, so views never read the store directly.

mod input;
mod list;
mod status_bar;

pub use input::InputViewModel;
pub use list::ListViewModel;
pub use status_bar::StatusBarViewModel;
