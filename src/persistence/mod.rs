pub mod files;
pub mod state;

pub use files::{atomic_write, ensure_tomate_dir, get_tomate_dir, init_local_tomate, state_file};
pub use state::{load_state, save_state, LoadOutcome, SavedState, StateError, DATE_FORMAT};
