use bookstall::config::Config;
use bookstall::{logging, Shell};
use clap::{ArgAction, Parser};
use eframe::egui;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "bookstall", version, about = "Second-hand book marketplace")]
struct Cli {
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Read configuration from this file instead of the default location
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Open the app directly on this route, as if following a link
    #[arg(long, value_name = "ROUTE")]
    route: Option<String>,

    /// Write a default config file if none exists, then exit
    #[arg(long)]
    init_config: bool,
}

fn load_config(cli: &Cli) -> Config {
    match &cli.config {
        Some(path) => Config::load_from(path).unwrap_or_else(|e| {
            tracing::warn!("{e}; using default configuration");
            Config::default()
        }),
        None => Config::load(),
    }
}

fn main() -> eframe::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if cli.init_config {
        let result = match &cli.config {
            Some(path) if !path.exists() => Config::default().save_to(path),
            Some(_) => Ok(()),
            None => Config::create_default(),
        };
        if let Err(e) = result {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
        return Ok(());
    }

    let mut config = load_config(&cli);
    if let Some(route) = cli.route {
        config.ui.start_route = route;
    }

    let shell = Shell::new(config);
    let title = shell.window_title();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 720.0])
            .with_min_inner_size([640.0, 420.0])
            .with_title(&title),
        ..Default::default()
    };

    eframe::run_native(
        "Bookstall",
        options,
        Box::new(move |cc| {
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::new(shell))
        }),
    )
}
