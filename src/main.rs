#[cfg(feature = "cli")]
use clap::{ArgAction, Parser};

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(
    name = "avro-reflect",
    about = "Print Avro schemas for built-in Rust types"
)]
struct Cli {
    /// Schema names of the types to derive (`int`, `utcdatetime`, ...)
    #[arg(value_name = "TYPE", required_unless_present = "list")]
    types: Vec<String>,

    /// List the known type names and exit
    #[arg(long, default_value_t = false)]
    list: bool,

    /// Pretty-print the schemas
    #[arg(long, default_value_t = false)]
    pretty: bool,

    /// Write the output to a file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    output: Option<std::path::PathBuf>,

    /// Raise log verbosity (repeatable)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[cfg(feature = "cli")]
fn init_tracing(verbose: u8) {
    use tracing_subscriber::filter::{EnvFilter, LevelFilter};
    use tracing_subscriber::prelude::*;

    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_filter(filter),
        )
        .init();
}

#[cfg(feature = "cli")]
fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    use avro_reflect::{SchemaDeriver, TypeRegistry};

    let registry =
        TypeRegistry::with_builtins().with_deriver(SchemaDeriver::new().with_pretty(cli.pretty));

    let lines: Vec<String> = if cli.list {
        registry.names().map(str::to_string).collect()
    } else {
        cli.types
            .iter()
            .map(|name| registry.schema(name))
            .collect::<Result<_, _>>()?
    };

    let mut text = lines.join("\n");
    text.push('\n');

    match &cli.output {
        Some(path) => std::fs::write(path, text)
            .map_err(|e| format!("Failed to write {}: {e}", path.display()))?,
        None => print!("{text}"),
    }
    Ok(())
}

#[cfg(feature = "cli")]
fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("This binary is only available with the `cli` feature enabled.");
    std::process::exit(1);
}
