fn main() {
    pybuild_ci::app::cli::run();
}
