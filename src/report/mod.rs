pub mod export;
pub mod parameters;
pub mod summary;

pub use export::ReportExporter;
pub use parameters::render_parameter_summary;
pub use summary::render_summary;
