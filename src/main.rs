use std::io::Read;

use clap::{Args, Parser, Subcommand};
use clipper_core::{config, FragmentMode, Limits, Marker};
use tracing::{info, Subscriber};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, reload, EnvFilter, Registry};

type LogHandle = reload::Handle<EnvFilter, Registry>;

#[derive(Parser)]
#[command(
    name = "clipper",
    version,
    about = "UTF-8 safe clipping and splitting of chat messages"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to config file.
    #[arg(short, long, default_value = "config.toml", global = true)]
    config: String,

    /// Print fragments as a JSON array instead of one per line.
    #[arg(long, global = true)]
    json: bool,
}

/// Flags shared by the commands that cut text.
#[derive(Args)]
struct Profile {
    /// Destination profile to take limits from (default: `default_destination`).
    #[arg(short, long)]
    destination: Option<String>,

    /// Clipping marker. An empty string selects " <clipped message>".
    #[arg(short, long)]
    marker: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Split text into non-empty lines, cutting long ones.
    Lines {
        #[command(flatten)]
        profile: Profile,
        /// Byte limit per line (0 = never split).
        #[arg(long)]
        max_line_length: Option<usize>,
        /// Text to split; read from stdin when omitted.
        #[arg(trailing_var_arg = true)]
        text: Vec<String>,
    },
    /// Clip text to a byte budget.
    Clip {
        #[command(flatten)]
        profile: Profile,
        /// Byte budget, marker included.
        #[arg(long)]
        budget: Option<usize>,
        #[arg(trailing_var_arg = true)]
        text: Vec<String>,
    },
    /// Split text into a bounded number of parts.
    Segment {
        #[command(flatten)]
        profile: Profile,
        /// Byte budget per part.
        #[arg(long)]
        budget: Option<usize>,
        /// Maximum number of parts.
        #[arg(long)]
        max_parts: Option<usize>,
        #[arg(trailing_var_arg = true)]
        text: Vec<String>,
    },
    /// Collapse runs of newlines.
    Collapse {
        #[arg(trailing_var_arg = true)]
        text: Vec<String>,
    },
    /// Fragment text exactly as a configured destination would.
    Send {
        #[arg(short, long)]
        destination: Option<String>,
        #[arg(trailing_var_arg = true)]
        text: Vec<String>,
    },
    /// Show configured destinations.
    Status,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let env_filter = EnvFilter::try_from_default_env().ok();
    let from_env = env_filter.is_some();
    let (subscriber, log_handle) =
        build_logging(env_filter.unwrap_or_else(|| EnvFilter::new("info")));
    subscriber.init();

    let cfg = config::load(&cli.config)?;
    // RUST_LOG wins over the configured level.
    if !from_env {
        apply_log_level(&log_handle, &cfg.clipper.log_level)?;
    }

    info!(config = %cli.config, "clipper starting");

    match cli.command {
        Commands::Lines {
            profile,
            max_line_length,
            text,
        } => {
            let limits = resolve(&cfg, &profile)?;
            let max_line_length = max_line_length.unwrap_or(limits.max_line_length);
            let input = read_input(text)?;
            let fragments = clipper_text::split_lines(&input, max_line_length, &limits.marker)?;
            print_fragments(&fragments, cli.json)?;
        }
        Commands::Clip {
            profile,
            budget,
            text,
        } => {
            let limits = resolve(&cfg, &profile)?;
            let budget = budget.unwrap_or(limits.max_message_length);
            let input = read_input(text)?;
            let clipped = clipper_text::clip(&input, budget, &limits.marker)?;
            print_fragments(&[clipped], cli.json)?;
        }
        Commands::Segment {
            profile,
            budget,
            max_parts,
            text,
        } => {
            let limits = resolve(&cfg, &profile)?;
            let budget = budget.unwrap_or(limits.max_message_length);
            let max_parts = max_parts.unwrap_or(limits.max_parts);
            let input = read_input(text)?;
            let parts = clipper_text::segment(&input, budget, &limits.marker, max_parts)?;
            print_fragments(&parts, cli.json)?;
        }
        Commands::Collapse { text } => {
            let input = read_input(text)?;
            print_fragments(&[clipper_text::collapse_newlines(&input)], cli.json)?;
        }
        Commands::Send { destination, text } => {
            let limits = cfg.limits_for(destination.as_deref())?;
            let input = read_input(text)?;
            let fragments = clipper_text::fragment(&input, &limits)?;
            print_fragments(&fragments, cli.json)?;
        }
        Commands::Status => {
            println!("clipper - Status Check\n");
            println!("Config: {}", cli.config);
            println!("Default destination: {}", cfg.clipper.default_destination);
            println!();

            for (name, dest) in &cfg.destinations {
                let limits = dest.limits()?;
                let bound = match limits.mode {
                    FragmentMode::Lines if limits.max_line_length == 0 => {
                        "unbounded lines".to_string()
                    }
                    FragmentMode::Lines => format!("{} bytes per line", limits.max_line_length),
                    FragmentMode::Segment => format!(
                        "{} bytes x {} part(s)",
                        limits.max_message_length, limits.max_parts
                    ),
                };
                println!(
                    "  {name}: {} ({bound}), marker {:?}",
                    limits.mode.display_name(),
                    limits.marker.as_str()
                );
            }
        }
    }

    Ok(())
}

/// Limits of the selected destination with the command-line marker applied.
fn resolve(cfg: &config::Config, profile: &Profile) -> anyhow::Result<Limits> {
    let name = profile
        .destination
        .as_deref()
        .unwrap_or(&cfg.clipper.default_destination);
    // Flags may override the budgets, so validation happens in the text
    // routines rather than here.
    let mut limits = cfg.destination(name)?.resolve();
    if let Some(ref marker) = profile.marker {
        limits.marker = Marker::resolve(marker);
    }
    Ok(limits)
}

/// Subscriber writing to stderr (stdout carries only fragments) whose filter
/// can be swapped once the config is known.
fn build_logging(initial: EnvFilter) -> (impl Subscriber + Send + Sync + 'static, LogHandle) {
    let (filter, handle) = reload::Layer::new(initial);
    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr));
    (subscriber, handle)
}

fn apply_log_level(handle: &LogHandle, level: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::try_new(level)?;
    handle.reload(filter)?;
    Ok(())
}

/// Join the positional words, or read all of stdin when there are none.
fn read_input(words: Vec<String>) -> anyhow::Result<String> {
    if !words.is_empty() {
        return Ok(words.join(" "));
    }
    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;
    Ok(input)
}

fn print_fragments(fragments: &[String], json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string(fragments)?);
    } else {
        for fragment in fragments {
            println!("{fragment}");
        }
    }
    Ok(())
}
