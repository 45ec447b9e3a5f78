mod diagnostics;
mod home;
mod not_found;

pub use diagnostics::DiagnosticsPage;
pub use home::HomePage;
pub use not_found::NotFoundPage;
