fn main() {
    wikisync::app::cli::run();
}
