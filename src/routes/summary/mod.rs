mod handler;
mod model;

pub use handler::{module_summary, social_carteirinha_summary};
pub use model::SUMMARY_MODULES;
