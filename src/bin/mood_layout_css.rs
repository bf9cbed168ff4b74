use std::fs;
use std::io::Read;
use std::path::PathBuf;

use mood_chart::api::{MoodChartEngine, MoodLayoutConfig};
use mood_chart::render::{AlphaEncoding, CssRenderer};
use mood_chart::telemetry;

#[derive(Debug, Default, PartialEq)]
struct CliArgs {
    input_path: Option<PathBuf>,
    config_path: Option<PathBuf>,
    alpha_encoding: Option<AlphaEncoding>,
    layout_only: bool,
    verbose: bool,
}

#[derive(Debug, PartialEq)]
enum Command {
    Help,
    Run(CliArgs),
}

const USAGE: &str = "Usage: mood_layout_css [--input <emotions.json>] [--config <config.json>] \
                     [--alpha decimal|hex] [--layout] [--verbose]";

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = match parse_args(std::env::args().skip(1))? {
        Command::Help => {
            println!("{USAGE}");
            return Ok(());
        }
        Command::Run(args) => args,
    };
    let _ = if args.verbose {
        telemetry::init_tracing("mood_chart=debug")
    } else {
        telemetry::init_default_tracing()
    };

    let config = match &args.config_path {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .map_err(|err| format!("failed to read `{}`: {err}", path.display()))?;
            MoodLayoutConfig::from_json_str(&raw).map_err(|err| err.to_string())?
        }
        None => MoodLayoutConfig::default(),
    };

    let payload = match &args.input_path {
        Some(path) => fs::read_to_string(path)
            .map_err(|err| format!("failed to read `{}`: {err}", path.display()))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .map_err(|err| format!("failed to read stdin: {err}"))?;
            buffer
        }
    };

    println!("{}", render_output(&args, config, &payload)?);
    Ok(())
}

/// CSS chart JSON, or the layout contract with `--layout`.
fn render_output(
    args: &CliArgs,
    mut config: MoodLayoutConfig,
    payload: &str,
) -> Result<String, String> {
    if let Some(encoding) = args.alpha_encoding {
        config = config.with_alpha_encoding(encoding);
    }

    let mut engine =
        MoodChartEngine::new(CssRenderer::default(), config).map_err(|err| err.to_string())?;
    engine
        .set_emotions_json(payload)
        .map_err(|err| err.to_string())?;

    if args.layout_only {
        return engine
            .layout_json_contract_v1_pretty()
            .map_err(|err| err.to_string());
    }

    engine.render().map_err(|err| err.to_string())?;
    let chart = engine
        .renderer_mut()
        .take_last_chart()
        .ok_or_else(|| "renderer produced no output".to_owned())?;
    chart.to_json_pretty().map_err(|err| err.to_string())
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Command, String> {
    let mut parsed = CliArgs::default();

    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--input" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --input".to_owned())?;
                parsed.input_path = Some(PathBuf::from(value));
            }
            "--config" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --config".to_owned())?;
                parsed.config_path = Some(PathBuf::from(value));
            }
            "--alpha" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --alpha".to_owned())?;
                parsed.alpha_encoding = Some(match value.as_str() {
                    "decimal" => AlphaEncoding::DecimalDigits,
                    "hex" => AlphaEncoding::HexByte,
                    other => return Err(format!("unknown alpha encoding `{other}`")),
                });
            }
            "--layout" => parsed.layout_only = true,
            "-v" | "--verbose" => parsed.verbose = true,
            "-h" | "--help" => return Ok(Command::Help),
            _ => {
                return Err(format!("unknown argument `{arg}`"));
            }
        }
    }

    Ok(Command::Run(parsed))
}
