mod loader;

pub use loader::{find_data_file, load_data_file};
