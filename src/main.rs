//! scalespec -- command-line front end for the scaling and dictionary parsers.
//!
//! ```text
//! scalespec [--config FILE] scaling SPEC WIDTHxHEIGHT
//! scalespec [--config FILE] ratio VALUE
//! scalespec [--config FILE] dict STRING [SEP]
//! scalespec [--config FILE] steps SCALE
//! ```
//!
//! Results go to stdout; warnings go to the logger (stderr, `RUST_LOG`).

use std::path::PathBuf;
use std::process::ExitCode;

use scalespec::dict::{parse_simple_dict, DictValue, DEFAULT_SEPARATOR};
use scalespec::{parse_scaling_value, Config, ConfigError, InvalidScalingValue};

const USAGE: &str = "usage: scalespec [--config FILE] \
    (scaling SPEC WIDTHxHEIGHT | ratio VALUE | dict STRING [SEP] | steps SCALE)";

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("{0}")]
    Usage(String),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Ratio(#[from] InvalidScalingValue),
}

fn usage(msg: impl std::fmt::Display) -> CliError {
    CliError::Usage(format!("{msg}\n{USAGE}"))
}

// ---------------------------------------------------------------------------
// Arguments
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
enum Command {
    Version,
    Scaling {
        spec: String,
        width: u32,
        height: u32,
    },
    Ratio(String),
    Dict {
        input: String,
        sep: String,
    },
    Steps(f64),
}

#[derive(Debug, Clone, PartialEq)]
struct Args {
    config: Option<PathBuf>,
    command: Command,
}

fn parse_args<I>(args: I) -> Result<Args, CliError>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter().peekable();
    let mut config = None;
    if args.peek().map(String::as_str) == Some("--config") {
        args.next();
        let path = args.next().ok_or_else(|| usage("--config needs a file"))?;
        config = Some(PathBuf::from(path));
    }

    let name = args.next().ok_or_else(|| usage("missing command"))?;
    let mut operand = |what: &str| {
        args.next()
            .ok_or_else(|| usage(format!("{name}: missing {what}")))
    };
    let command = match name.as_str() {
        "--version" | "version" => Command::Version,
        "scaling" => {
            let spec = operand("SPEC")?;
            let (width, height) = parse_root(&operand("WIDTHxHEIGHT")?)?;
            Command::Scaling {
                spec,
                width,
                height,
            }
        }
        "ratio" => Command::Ratio(operand("VALUE")?),
        "dict" => {
            let input = operand("STRING")?;
            let sep = operand("SEP").unwrap_or_else(|_| DEFAULT_SEPARATOR.to_string());
            Command::Dict { input, sep }
        }
        "steps" => {
            let raw = operand("SCALE")?;
            let scale = raw
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| usage(format!("steps: invalid scale '{raw}'")))?;
            Command::Steps(scale)
        }
        other => return Err(usage(format!("unknown command '{other}'"))),
    };
    if let Some(extra) = args.next() {
        return Err(usage(format!("unexpected argument '{extra}'")));
    }
    Ok(Args { config, command })
}

fn parse_root(s: &str) -> Result<(u32, u32), CliError> {
    let bad = || usage(format!("invalid root size '{s}', expected WIDTHxHEIGHT"));
    let (w, h) = s.split_once('x').ok_or_else(bad)?;
    Ok((w.parse().map_err(|_| bad())?, h.parse().map_err(|_| bad())?))
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

fn load_config(path: Option<&PathBuf>) -> Result<Config, ConfigError> {
    let config = match path {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    config.with_env()
}

fn format_dict_value(value: &DictValue) -> String {
    match value {
        DictValue::Single(v) => v.clone(),
        DictValue::Multiple(vs) => format!("[{}]", vs.join(", ")),
    }
}

fn format_steps(steps: &[f64]) -> String {
    steps
        .iter()
        .map(f64::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

fn run(args: Args) -> Result<(), CliError> {
    if args.command == Command::Version {
        println!("scalespec v{}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }
    let config = load_config(args.config.as_ref())?;
    match args.command {
        Command::Version => {}
        Command::Scaling {
            spec,
            width,
            height,
        } => {
            let scale = config.parser().parse(&spec, width, height);
            println!("{scale}");
        }
        Command::Ratio(value) => match parse_scaling_value(&value)? {
            Some((num, den)) => println!("{num}:{den}"),
            None => println!("none"),
        },
        Command::Dict { input, sep } => {
            for (key, value) in parse_simple_dict(&input, &sep) {
                println!("{key}={}", format_dict_value(&value));
            }
        }
        Command::Steps(scale) => {
            let steps = config.steps();
            println!("up: {}", format_steps(&steps.up(scale)));
            println!("down: {}", format_steps(&steps.down(scale)));
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match parse_args(std::env::args().skip(1)).and_then(run) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("scalespec: {e}");
            ExitCode::FAILURE
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Result<Args, CliError> {
        parse_args(list.iter().map(|s| s.to_string()))
    }

    #[test]
    fn scaling_command_with_config() {
        let parsed = args(&["--config", "a.toml", "scaling", "auto", "3840x2160"]).unwrap();
        assert_eq!(parsed.config, Some(PathBuf::from("a.toml")));
        assert_eq!(
            parsed.command,
            Command::Scaling {
                spec: "auto".into(),
                width: 3840,
                height: 2160
            }
        );
    }

    #[test]
    fn dict_separator_defaults_to_comma() {
        let parsed = args(&["dict", "a=1,b=2"]).unwrap();
        assert_eq!(
            parsed.command,
            Command::Dict {
                input: "a=1,b=2".into(),
                sep: ",".into()
            }
        );
        let parsed = args(&["dict", "a=1;b=2", ";"]).unwrap();
        assert!(matches!(parsed.command, Command::Dict { sep, .. } if sep == ";"));
    }

    #[test]
    fn ratio_and_steps_commands() {
        assert_eq!(args(&["ratio", "2:3"]).unwrap().command, Command::Ratio("2:3".into()));
        assert_eq!(args(&["steps", "1.5"]).unwrap().command, Command::Steps(1.5));
    }

    #[test]
    fn bad_arguments_are_usage_errors() {
        for bad in [
            &[][..],
            &["--config"][..],
            &["frobnicate"][..],
            &["scaling", "2"][..],
            &["scaling", "2", "1920by1080"][..],
            &["steps", "big"][..],
            &["steps", "NaN"][..],
            &["steps", "inf"][..],
            &["ratio", "1", "extra"][..],
        ] {
            assert!(
                matches!(args(bad), Err(CliError::Usage(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn dict_values_format_lists_in_brackets() {
        assert_eq!(format_dict_value(&DictValue::Single("1".into())), "1");
        assert_eq!(
            format_dict_value(&DictValue::Multiple(vec!["1".into(), "3".into()])),
            "[1, 3]"
        );
    }

    #[test]
    fn version_does_not_need_a_config() {
        let parsed = Args {
            config: Some(PathBuf::from("/nonexistent/scalespec.toml")),
            command: Command::Version,
        };
        assert!(run(parsed).is_ok());
    }

    #[test]
    fn ratio_errors_propagate() {
        let parsed = args(&["ratio", "3:2"]).unwrap();
        assert!(matches!(run(parsed), Err(CliError::Ratio(_))));
    }
}
