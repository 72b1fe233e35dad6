mod apis;
mod dashboard;

pub use apis::ApisPage;
pub use dashboard::DashboardPage;
