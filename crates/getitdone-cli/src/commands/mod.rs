pub mod add;
pub mod done;
pub mod due;
pub mod list;
pub mod log_time;
pub mod note;
pub mod remove;
pub mod undo;
