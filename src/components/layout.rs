mod navbar;
mod shell;

pub use navbar::Navbar;
pub use shell::Layout;
