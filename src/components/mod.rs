mod footer;
mod projects;

pub use footer::Footer;
pub use projects::{load_projects, render_projects};
