//! Toolbox CLI - interactive front end for the tool facade
//!
//! Thin presentation shim: collects form-style input on stdin, builds one
//! [`ToolRequest`] per round, and prints the normalized output. Every
//! operation goes through [`ToolFacade::invoke`].

use clap::{Parser, Subcommand};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process;
use toolbox::config::ToolboxConfig;
use toolbox::facade::{SaveSpec, ToolFacade, ToolKind, ToolOutput, ToolRequest};
use toolbox::image::{AspectRatio, OutputFormat, Style};
use toolbox::llm::TargetLanguage;
use toolbox::logging::init_default_logging;
use tracing::{error, info};

/// Unified facade over hosted AI services
#[derive(Parser)]
#[command(name = "toolbox")]
#[command(about = "Unified facade over hosted LLM, search, and image services")]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive tool prompt
    Run,
    /// Validate configuration
    Config {
        /// Show the loaded configuration
        #[arg(long)]
        show: bool,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    init_default_logging();

    let config = match load_configuration(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {e}");
            process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Run => run_interactive(config).await,
        Commands::Config { show } => handle_config_command(config, show),
    };

    if let Err(e) = result {
        error!("Command failed: {e}");
        process::exit(1);
    }
}

fn load_configuration(
    config_path: &Option<PathBuf>,
) -> Result<ToolboxConfig, Box<dyn std::error::Error>> {
    match config_path {
        Some(path) => {
            info!("Loading configuration from: {}", path.display());
            Ok(ToolboxConfig::load_from_file(path)?)
        }
        None => {
            let default_paths = ["toolbox.toml", "config/toolbox.toml"];
            for path_str in default_paths {
                let path = PathBuf::from(path_str);
                if path.exists() {
                    info!("Loading configuration from: {}", path.display());
                    return Ok(ToolboxConfig::load_from_file(&path)?);
                }
            }
            Err("no configuration file found (looked for toolbox.toml)".into())
        }
    }
}

fn handle_config_command(
    config: ToolboxConfig,
    show: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("Configuration is valid.");
    if show {
        println!("{}", toml::to_string_pretty(&config)?);
    }
    Ok(())
}

async fn run_interactive(config: ToolboxConfig) -> Result<(), Box<dyn std::error::Error>> {
    // Credentials resolve here, once; a missing key halts before any prompt
    let facade = ToolFacade::from_config(&config)?;

    println!("Toolbox ready. Type a tool name, or \"quit\" to exit.");
    loop {
        println!();
        for kind in ToolKind::ALL {
            println!("  {kind}");
        }

        let selector = prompt("Tool: ")?;
        if selector.is_empty() || selector.eq_ignore_ascii_case("quit") {
            return Ok(());
        }

        let kind = match selector.parse::<ToolKind>() {
            Ok(kind) => kind,
            Err(e) => {
                eprintln!("{e}");
                continue;
            }
        };

        let request = match build_request(kind)? {
            Some(request) => request,
            None => continue,
        };

        match facade.invoke(request).await {
            Ok(output) => print_output(&output),
            Err(e) => eprintln!("error: {e}"),
        }
    }
}

/// Collect the parameters for one tool; None means invalid input was
/// already reported and the menu should come back
fn build_request(kind: ToolKind) -> io::Result<Option<ToolRequest>> {
    let request = match kind {
        ToolKind::AskQuestion => ToolRequest::AskQuestion {
            query: prompt("Question: ")?,
        },
        ToolKind::Translate => {
            let text = prompt("Text to translate: ")?;
            let language = prompt(&format!(
                "Target language {:?}: ",
                TargetLanguage::ALL.map(TargetLanguage::name)
            ))?;
            match language.parse::<TargetLanguage>() {
                Ok(language) => ToolRequest::Translate { text, language },
                Err(e) => {
                    eprintln!("{e}");
                    return Ok(None);
                }
            }
        }
        ToolKind::GenerateCode => ToolRequest::GenerateCode {
            task: prompt("Task description: ")?,
        },
        ToolKind::Summarize => ToolRequest::Summarize {
            text: prompt("Text to summarize: ")?,
        },
        ToolKind::AnalyzeFile => ToolRequest::AnalyzeFile {
            path: PathBuf::from(prompt("File path: ")?),
        },
        ToolKind::Search => ToolRequest::Search {
            query: prompt("Search query: ")?,
            max_results: None,
        },
        ToolKind::GenerateImage => {
            let prompt_text = prompt("Image prompt: ")?;
            let style = prompt(&format!("Style {:?}: ", Style::ALL.map(Style::name)))?;
            let style = if style.is_empty() {
                Style::None
            } else {
                match style.parse::<Style>() {
                    Ok(style) => style,
                    Err(e) => {
                        eprintln!("{e}");
                        return Ok(None);
                    }
                }
            };
            // Unrecognized ratios fall back to the default instead of failing
            let aspect_ratio = AspectRatio::parse(&prompt("Aspect ratio: ")?);
            let save = match prompt("Save as (stem.format, empty to skip): ")? {
                spec if spec.is_empty() => None,
                spec => match parse_save_spec(&spec) {
                    Ok(save) => Some(save),
                    Err(e) => {
                        eprintln!("{e}");
                        return Ok(None);
                    }
                },
            };
            ToolRequest::GenerateImage {
                prompt: prompt_text,
                style,
                aspect_ratio,
                save,
            }
        }
    };

    Ok(Some(request))
}

/// Parse "stem.format" into a save target
fn parse_save_spec(spec: &str) -> Result<SaveSpec, String> {
    let (stem, format) = spec
        .rsplit_once('.')
        .ok_or_else(|| format!("expected stem.format, got: {spec}"))?;
    if stem.is_empty() {
        return Err(format!("expected stem.format, got: {spec}"));
    }
    Ok(SaveSpec {
        stem: stem.to_string(),
        format: format.parse::<OutputFormat>()?,
    })
}

fn print_output(output: &ToolOutput) {
    match output {
        ToolOutput::Text(text) => println!("\n{text}"),
        ToolOutput::Image {
            handle,
            saved,
            save_error,
        } => {
            let (width, height) = handle.dimensions();
            println!("\nGenerated a {width}x{height} image.");
            if let Some(path) = saved {
                println!("Saved to {}", path.display());
            }
            if let Some(e) = save_error {
                eprintln!("{e}");
            }
        }
    }
}

fn prompt(label: &str) -> io::Result<String> {
    print!("{label}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}
