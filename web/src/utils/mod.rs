pub mod flag;
pub mod format;
