pub mod filesystem;

pub use filesystem::FilesystemExporter;
