//! codebox - print a file with syntax highlighting
//!
//! Renders a file through a read-only code widget to the terminal.

use std::env;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;
use std::process;

use codebox::{render, CodeBlock, LanguageRegistry, Result, Settings, StyleScheme};

/// Parsed command line
#[derive(Debug, Default)]
struct Args {
    file: Option<PathBuf>,
    language: Option<String>,
    scheme: Option<String>,
    line_numbers: bool,
    plain: bool,
}

fn main() {
    if let Err(e) = codebox::log::init() {
        eprintln!("Warning: logging unavailable: {}", e);
    }
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let mut args = Args::default();
    let mut argv = env::args().skip(1);

    // Parse command line arguments
    while let Some(arg) = argv.next() {
        match arg.as_str() {
            "--help" | "-h" => {
                print_usage();
                return Ok(());
            }
            "--version" | "-V" => {
                print_version();
                return Ok(());
            }
            "--list-languages" => {
                for name in LanguageRegistry::global().languages() {
                    println!("{}", name);
                }
                return Ok(());
            }
            "--list-schemes" => {
                for name in StyleScheme::builtin_names() {
                    println!("{}", name);
                }
                return Ok(());
            }
            "--language" | "-l" => args.language = argv.next(),
            "--scheme" | "-s" => args.scheme = argv.next(),
            "--line-numbers" | "-n" => args.line_numbers = true,
            "--plain" => args.plain = true,
            _ if arg.starts_with('-') && arg != "-" => {
                eprintln!("Unknown option: {}", arg);
                print_usage();
                process::exit(2);
            }
            _ => args.file = Some(PathBuf::from(arg)),
        }
    }

    let settings = Settings::load();
    let mut options = settings.to_options();
    if let Some(scheme) = args.scheme {
        options.scheme = scheme;
    }

    let registry = LanguageRegistry::global();
    let detected = args
        .file
        .as_deref()
        .and_then(|path| registry.detect(path))
        .map(str::to_string);
    if let Some(language) = args.language.or(detected) {
        options.language = language;
    }

    let mut block = CodeBlock::new(options)?;
    match args.file.as_deref() {
        Some(path) if path.as_os_str() != "-" => block.load_from_file(path)?,
        _ => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            block.set_content(&text);
        }
    }

    for warning in block.warnings() {
        eprintln!("Warning: {}", warning);
    }

    let render_options = render::RenderOptions {
        line_numbers: args.line_numbers || settings.line_numbers,
        colors: !args.plain && io::stdout().is_terminal(),
    };
    let stdout = io::stdout();
    let mut out = stdout.lock();
    render::render_to(&mut out, &block, &render_options)?;

    Ok(())
}

fn print_usage() {
    println!("codebox {} - print files with syntax highlighting", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Usage: codebox [OPTIONS] [FILE]");
    println!();
    println!("Reads standard input when FILE is missing or '-'.");
    println!();
    println!("Options:");
    println!("  -l, --language NAME  Highlight as NAME instead of detecting it");
    println!("  -s, --scheme NAME    Bundled scheme name or path to a scheme file");
    println!("  -n, --line-numbers   Show a line-number gutter");
    println!("      --plain          Print without colors");
    println!("      --list-languages List supported languages");
    println!("      --list-schemes   List bundled color schemes");
    println!("  -h, --help           Show this help message");
    println!("  -V, --version        Show version information");
    println!();
    println!("Settings are read from ~/.codebox.toml; set CODEBOX_LOG=debug for logs.");
}

fn print_version() {
    println!("codebox {}", env!("CARGO_PKG_VERSION"));
}
