use std::path::PathBuf;
use std::process::ExitCode;
use std::rc::Rc;

mod config;
mod debug_log;
mod menu;
mod ui;

use config::Config;
use menu::MenuCatalog;
use ui::App;

/// Parsed command-line options.
#[derive(Debug, Default, PartialEq)]
struct Options {
    menu: Option<PathBuf>,
    debug: bool,
}

#[derive(Debug, PartialEq)]
enum Command {
    Run(Options),
    Help,
    Version,
}

fn parse_args<I>(args: I) -> Result<Command, String>
where
    I: IntoIterator<Item = String>,
{
    let mut options = Options::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return Ok(Command::Version),
            "--help" | "-h" => return Ok(Command::Help),
            "--debug" => options.debug = true,
            "--menu" => match args.next() {
                Some(path) => options.menu = Some(PathBuf::from(path)),
                None => return Err("'--menu' requires a path".to_string()),
            },
            arg => return Err(format!("unknown argument '{arg}'")),
        }
    }

    Ok(Command::Run(options))
}

fn main() -> ExitCode {
    let options = match parse_args(std::env::args().skip(1)) {
        Ok(Command::Run(options)) => options,
        Ok(Command::Version) => {
            println!("menu-viewer {}", env!("CARGO_PKG_VERSION"));
            return ExitCode::SUCCESS;
        }
        Ok(Command::Help) => {
            print_help();
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            eprintln!("error: {e}");
            eprintln!("run 'menu-viewer --help' for usage");
            return ExitCode::FAILURE;
        }
    };

    if options.debug {
        match debug_log::init() {
            Ok(path) => eprintln!("debug log: {}", path.display()),
            Err(e) => eprintln!("warning: failed to start debug log: {e}"),
        }
    }

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let config = match Config::load_from_dir(&cwd) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let menu_path = options.menu.or_else(|| config.menu_path(&cwd));
    let catalog = match &menu_path {
        Some(path) => match MenuCatalog::load(path) {
            Ok(catalog) => catalog,
            Err(e) => {
                eprintln!("error: {}: {e}", path.display());
                return ExitCode::FAILURE;
            }
        },
        None => MenuCatalog::seed(),
    };

    let source = menu_path
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "built-in".to_string());
    debug_log::log_startup(&source, catalog.len(), catalog.categories().len());

    let mut app = App::new(config, Rc::new(catalog));
    if let Err(e) = app.run() {
        eprintln!("error: {e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn print_help() {
    println!(
        "menu-viewer {} - Browse a restaurant menu in the terminal

USAGE:
    menu-viewer [OPTIONS]

OPTIONS:
    -h, --help          Print help information
    -V, --version       Print version information
    --menu <PATH>       Load the menu from a JSON file
    --debug             Write a debug log to ~/.menu-viewer/debug.log

CONFIG:
    Reads {} from the current directory if present.

DESCRIPTION:
    Lists the menu grouped by category next to a slowly spinning model.
    Selecting an item shows its details; nothing is ordered or saved.",
        env!("CARGO_PKG_VERSION"),
        config::CONFIG_FILE
    );
}
