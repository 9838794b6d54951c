fn main() {
    chn_quickstart::app::cli::run();
}
