use clap::Parser;

#[derive(Parser)]
#[command(name = "ty", about = concat!("[/] tally v", env!("CARGO_PKG_VERSION"), " - a tiny to-do list for your terminal"), version)]
struct Cli {
    /// Run against a different data directory
    #[arg(short = 'C', long = "data-dir")]
    data_dir: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = tally::tui::run(cli.data_dir.as_deref()) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
