fn main() {
    // Run the CLI
    sectoc::cli::run();
}
