mod handler;
mod model;

pub use handler::{dashboard, transition};
