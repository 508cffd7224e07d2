mod toc;
mod page;
mod headings;
mod footer;
mod projects;

pub use toc::handle_toc_command;
pub use page::handle_page_command;
pub use headings::handle_headings_command;
pub use footer::handle_footer_command;
pub use projects::handle_projects_command;
