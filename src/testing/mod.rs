mod flaky_filesystem;
mod package_fixture;

pub use flaky_filesystem::FlakyFilesystem;
pub use package_fixture::PackageFixture;
