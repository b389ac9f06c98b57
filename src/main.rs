fn main() {
    pkgdeploy::app::cli::run();
}
