pub mod layout;
pub mod report;
pub mod upload;
