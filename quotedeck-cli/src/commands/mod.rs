pub mod add;
pub mod categories;
pub mod export;
pub mod import;
pub mod list;
pub mod show;
pub mod status;
pub mod sync;
pub mod watch;
