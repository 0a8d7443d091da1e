pub mod daily;
pub mod enums;
pub mod store;
pub mod task;

pub use daily::DailyCounter;
pub use enums::{Phase, UiMode};
pub use store::TaskStore;
pub use task::Task;
