use contact_book::config::{self, Config, Mode};
use tracing::error;
use tracing_subscriber::EnvFilter;

fn main() {
    let config = match Config::load(std::env::args().skip(1)) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    // Logs go to stderr so they never interleave with command replies.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match &config.mode {
        Mode::Help => println!("{}", config::usage()),
        Mode::Export(json_path) => {
            match contact_book::migrate::export_file(&config.book_path, json_path) {
                Ok(n) => println!("Exported {} contact(s) to {}", n, json_path.display()),
                Err(e) => {
                    error!(error = %e, "export failed");
                    eprintln!("Export failed: {}", e);
                    std::process::exit(1);
                }
            }
        }
        Mode::Import(json_path) => {
            match contact_book::migrate::import_file(json_path, &config.book_path) {
                Ok(n) => println!("Imported {} contact(s) from {}", n, json_path.display()),
                Err(e) => {
                    error!(error = %e, "import failed");
                    eprintln!("Import failed: {}", e);
                    std::process::exit(1);
                }
            }
        }
        Mode::Interactive => contact_book::cli::run(&config.book_path),
    }
}
