mod consultants_widget;
mod dashboard;

pub use consultants_widget::ConsultantsWidget;
pub use dashboard::OverviewDashboard;
