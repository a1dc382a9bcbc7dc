mod handler;

pub use handler::{org_page, page};
