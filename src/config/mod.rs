pub mod analysis;
pub mod manager;
pub mod membership;
pub mod traits;

pub use analysis::AnalysisConfig;
pub use manager::{AppConfig, ConfigManager};
pub use membership::MembershipConfig;
pub use traits::ConfigSection;
