use std::io::{self, BufRead};

use anyhow::{Context, Result};
use calcbrain::brain::{BrainConfig, CalculatorBrain, ClearPolicy, Evaluation, format_number};
use calcbrain::input::{parse_input, parse_line};
use calcbrain::plot::constants::{DEFAULT_SAMPLES, DEFAULT_X_MAX, DEFAULT_X_MIN};
use calcbrain::plot::{PlotConfig, render_ascii, sample};
use clap::{Parser, ValueEnum};
use log::{info, warn};

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Calcbrain - A keypad calculator driven from the terminal
#[derive(Parser, Debug)]
#[command(name = "calcbrain")]
#[command(about = "Press calculator keys one at a time and show the running result")]
#[command(version)]
pub struct CliArgs {
    /// Variable to graph the final expression against
    #[arg(short, long)]
    pub plot: Option<String>,

    /// Left edge of the graph
    #[arg(long, default_value_t = DEFAULT_X_MIN, allow_hyphen_values = true)]
    pub x_min: f64,

    /// Right edge of the graph
    #[arg(long, default_value_t = DEFAULT_X_MAX, allow_hyphen_values = true)]
    pub x_max: f64,

    /// Number of graph samples
    #[arg(long, default_value_t = DEFAULT_SAMPLES)]
    pub samples: usize,

    /// Graph width in characters
    #[arg(long, default_value_t = 60)]
    pub width: usize,

    /// Graph height in characters
    #[arg(long, default_value_t = 20)]
    pub height: usize,

    /// Keep variable values when clearing
    #[arg(long)]
    pub keep_variables: bool,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,

    /// Keys to press, e.g. `3 + 4 =`; read line by line from stdin when omitted
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub keys: Vec<String>,
}

/// Graph request for the CLI application
pub struct GraphConfig {
    pub variable: String,
    pub plot: PlotConfig,
    pub width: usize,
    pub height: usize,
}

/// Configuration for the CLI application
pub struct CliConfig {
    pub keys: Vec<String>,
    pub brain: BrainConfig,
    pub graph: Option<GraphConfig>,
    pub log_level: LogLevel,
}

impl From<CliArgs> for CliConfig {
    fn from(args: CliArgs) -> Self {
        let clear_policy = if args.keep_variables {
            ClearPolicy::KeepVariables
        } else {
            ClearPolicy::ResetVariables
        };

        let graph = args.plot.map(|variable| GraphConfig {
            variable,
            plot: PlotConfig {
                x_min: args.x_min,
                x_max: args.x_max,
                samples: args.samples,
            },
            width: args.width,
            height: args.height,
        });

        CliConfig {
            keys: args.keys,
            brain: BrainConfig { clear_policy },
            graph,
            log_level: args.log_level,
        }
    }
}

/// Parse command line arguments and return configuration
pub fn parse_args() -> Result<CliConfig> {
    let config = CliConfig::from(CliArgs::parse());

    if let Some(graph) = &config.graph {
        graph.plot.validate().context("Invalid graph settings")?;
    }

    Ok(config)
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .init();
}

/// Result on the left, description with its `…`/`=` suffix on the right
pub fn format_display(evaluation: &Evaluation) -> String {
    let value = evaluation.result.map(format_number).unwrap_or_default();
    format!("{:>14}  {}", value, evaluation.display_line())
}

/// Press every key in order, stopping at the first unreadable one
pub fn press_keys(brain: &mut CalculatorBrain, keys: &[String]) -> Result<Evaluation> {
    let mut evaluation = brain.evaluate();
    for key in keys {
        let input = parse_input(key).with_context(|| format!("Invalid key '{}'", key))?;
        evaluation = input.apply(brain);
    }
    Ok(evaluation)
}

fn run_interactive(brain: &mut CalculatorBrain) -> Result<()> {
    for line in io::stdin().lock().lines() {
        let line = line.context("Failed to read from stdin")?;
        match parse_line(&line) {
            Ok(inputs) => {
                for input in &inputs {
                    let evaluation = input.apply(brain);
                    println!("{}", format_display(&evaluation));
                }
            }
            Err(err) => {
                warn!("Skipping line '{}': {}", line, err);
                eprintln!("Error: {}", err);
            }
        }
    }
    Ok(())
}

fn draw_graph(brain: &CalculatorBrain, graph: &GraphConfig) -> Result<()> {
    let points = sample(brain, &graph.variable, &graph.plot)
        .with_context(|| format!("Cannot graph against '{}'", graph.variable))?;
    println!("{}", render_ascii(&points, graph.width, graph.height));
    Ok(())
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let config = parse_args()?;

    // Initialize logging
    init_logging(&config.log_level);

    let mut brain = CalculatorBrain::with_config(config.brain);

    if config.keys.is_empty() {
        info!("Reading keys from stdin");
        run_interactive(&mut brain)?;
    } else {
        info!("Pressing {} keys", config.keys.len());
        let evaluation = press_keys(&mut brain, &config.keys)?;
        println!("{}", format_display(&evaluation));
    }

    if let Some(graph) = &config.graph {
        draw_graph(&brain, graph)?;
    }

    Ok(())
}
