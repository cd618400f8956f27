pub mod format;
pub mod toast;
