mod state;
mod view;

pub use state::UploadState;
pub use view::UploadPanel;
