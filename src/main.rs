fn main() {
    mergelog::app::cli::run();
}
