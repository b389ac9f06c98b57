pub mod app_data;
pub mod force_remove;
pub mod install_root;
mod local_filesystem;
pub mod tree_copy;

pub use force_remove::force_remove_dir_all;
pub use local_filesystem::LocalFilesystem;
