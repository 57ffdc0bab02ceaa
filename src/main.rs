use std::fs;
use std::path::PathBuf;
use std::process;

use clap::Parser;

use jsonchat::Config;

#[derive(Parser)]
#[command(name = "jsonchat")]
#[command(about = "Convert XML chat markup to JSON chat components")]
struct Cli {
    /// Input XML file
    input: PathBuf,

    /// Output JSON file (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Template variable definition; may be repeated
    #[arg(short, long, value_name = "KEY=VALUE")]
    var: Vec<String>,

    /// TOML config file with a [variables] table
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

fn main() {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load(path),
        None => Config::default(),
    };

    // Command-line definitions override config-file variables
    let mut variables = config.variables;
    for definition in &cli.var {
        match definition.split_once('=') {
            Some((key, value)) => {
                variables.insert(key.to_string(), value.to_string());
            }
            None => {
                eprintln!("Invalid --var {definition:?}: expected KEY=VALUE");
                process::exit(1);
            }
        }
    }

    let xml = match fs::read_to_string(&cli.input) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Error reading {}: {}", cli.input.display(), e);
            process::exit(1);
        }
    };

    let component = match jsonchat::xml_to_component_with(&xml, &variables) {
        Ok(component) => component,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    let serialized = if cli.pretty || config.output.pretty {
        serde_json::to_string_pretty(&component)
    } else {
        serde_json::to_string(&component)
    };
    let json = match serialized {
        Ok(json) => json,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    match &cli.output {
        Some(path) => {
            if let Err(e) = fs::write(path, json) {
                eprintln!("Error writing {}: {}", path.display(), e);
                process::exit(1);
            }
            println!("Created {}", path.display());
        }
        None => println!("{json}"),
    }
}
