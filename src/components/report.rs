mod banking;
mod breakdown;
mod charts;
mod summary;
mod view;

pub use view::ReportView;
