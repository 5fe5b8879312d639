fn main() -> std::process::ExitCode {
    organizer_cli::run()
}
