#![forbid(unsafe_code)]

//! Command-line argument parsing for the event page.
//!
//! Parses args manually (no external dependencies) to keep the binary lean.
//! Every flag has a `MARQUEE_*` environment variable fallback; the flag
//! wins when both are present.

use marquee_fx::quality::QualityTier;
use std::env;
use std::process;

const VERSION: &str = env!("CARGO_PKG_VERSION");

const HELP_TEXT: &str = "\
IONWAVE 2026 — the hackathon event page, in your terminal

USAGE:
    marquee-site [OPTIONS]

OPTIONS:
    --quality=TIER   Force the quality tier: 'low', 'balanced', or 'high'
                     (default: classified from the environment once at start)
    --no-fx          Disable the starfield backdrop entirely
    --fps=N          Override the frame cap (default: from the quality tier)
    --seed=N         Seed for deterministic scramble/starfield noise
    --no-mouse       Do not capture the mouse
    --help, -h       Show this help message
    --version, -V    Show version

ENVIRONMENT:
    MARQUEE_QUALITY, MARQUEE_NO_FX, MARQUEE_FPS, MARQUEE_SEED
    MARQUEE_REDUCED_MOTION / _REDUCED_DATA / _SLOW_UPDATE / _SAVE_DATA
    MARQUEE_CORES, MARQUEE_MEMORY_GB   capability probe overrides
    MARQUEE_LOG                        enable tracing output (env-filter syntax)

KEYS:
    j/k, arrows, wheel   scroll        1-4, tab   jump to section
    g / G                top / bottom  q, esc     quit
";

/// Parsed options.
#[derive(Debug, Clone, PartialEq)]
pub struct Opts {
    pub quality: Option<QualityTier>,
    pub no_fx: bool,
    pub fps: Option<u32>,
    pub seed: Option<u64>,
    pub mouse: bool,
}

impl Default for Opts {
    fn default() -> Self {
        Self {
            quality: None,
            no_fx: false,
            fps: None,
            seed: None,
            mouse: true,
        }
    }
}

impl Opts {
    /// Parse process args, exiting on `--help`/`--version`/errors.
    #[must_use]
    pub fn parse() -> Self {
        match Self::try_parse(env::args().skip(1), |key| env::var(key).ok()) {
            Ok(opts) => opts,
            Err(ParseOutcome::Help) => {
                print!("{HELP_TEXT}");
                process::exit(0);
            }
            Err(ParseOutcome::Version) => {
                println!("marquee-site {VERSION}");
                process::exit(0);
            }
            Err(ParseOutcome::Invalid(msg)) => {
                eprintln!("error: {msg}");
                eprintln!("run with --help for usage");
                process::exit(2);
            }
        }
    }

    /// Testable parser core: args + environment lookup in, options out.
    pub fn try_parse<I, F>(args: I, get_env: F) -> Result<Self, ParseOutcome>
    where
        I: IntoIterator<Item = String>,
        F: Fn(&str) -> Option<String>,
    {
        let mut opts = Self {
            quality: get_env("MARQUEE_QUALITY").and_then(|v| v.parse().ok()),
            no_fx: get_env("MARQUEE_NO_FX").is_some_and(|v| flag(&v)),
            fps: get_env("MARQUEE_FPS").and_then(|v| v.trim().parse().ok()),
            seed: get_env("MARQUEE_SEED").and_then(|v| v.trim().parse().ok()),
            mouse: true,
        };

        for arg in args {
            if let Some(value) = arg.strip_prefix("--quality=") {
                opts.quality = Some(
                    value
                        .parse()
                        .map_err(|()| ParseOutcome::Invalid(format!("unknown tier '{value}'")))?,
                );
            } else if let Some(value) = arg.strip_prefix("--fps=") {
                opts.fps = Some(
                    value
                        .parse()
                        .map_err(|_| ParseOutcome::Invalid(format!("bad fps '{value}'")))?,
                );
            } else if let Some(value) = arg.strip_prefix("--seed=") {
                opts.seed = Some(
                    value
                        .parse()
                        .map_err(|_| ParseOutcome::Invalid(format!("bad seed '{value}'")))?,
                );
            } else {
                match arg.as_str() {
                    "--no-fx" => opts.no_fx = true,
                    "--no-mouse" => opts.mouse = false,
                    "--help" | "-h" => return Err(ParseOutcome::Help),
                    "--version" | "-V" => return Err(ParseOutcome::Version),
                    other => {
                        return Err(ParseOutcome::Invalid(format!("unknown option '{other}'")));
                    }
                }
            }
        }
        Ok(opts)
    }
}

/// Why parsing stopped without options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome {
    Help,
    Version,
    Invalid(String),
}

fn flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn defaults_with_no_args() {
        let opts = Opts::try_parse(args(&[]), no_env).unwrap();
        assert_eq!(opts, Opts::default());
    }

    #[test]
    fn flags_parse() {
        let opts = Opts::try_parse(
            args(&["--quality=low", "--no-fx", "--fps=30", "--seed=9", "--no-mouse"]),
            no_env,
        )
        .unwrap();
        assert_eq!(opts.quality, Some(QualityTier::Low));
        assert!(opts.no_fx);
        assert_eq!(opts.fps, Some(30));
        assert_eq!(opts.seed, Some(9));
        assert!(!opts.mouse);
    }

    #[test]
    fn env_fallback_and_flag_priority() {
        let env = |key: &str| match key {
            "MARQUEE_QUALITY" => Some("balanced".to_string()),
            "MARQUEE_NO_FX" => Some("yes".to_string()),
            _ => None,
        };
        let opts = Opts::try_parse(args(&[]), env).unwrap();
        assert_eq!(opts.quality, Some(QualityTier::Balanced));
        assert!(opts.no_fx);

        let opts = Opts::try_parse(args(&["--quality=high"]), env).unwrap();
        assert_eq!(opts.quality, Some(QualityTier::High));
    }

    #[test]
    fn bad_input_is_invalid() {
        assert!(matches!(
            Opts::try_parse(args(&["--quality=ultra"]), no_env),
            Err(ParseOutcome::Invalid(_))
        ));
        assert!(matches!(
            Opts::try_parse(args(&["--wat"]), no_env),
            Err(ParseOutcome::Invalid(_))
        ));
    }

    #[test]
    fn help_and_version_short_circuit() {
        assert_eq!(
            Opts::try_parse(args(&["-h"]), no_env),
            Err(ParseOutcome::Help)
        );
        assert_eq!(
            Opts::try_parse(args(&["--version"]), no_env),
            Err(ParseOutcome::Version)
        );
    }
}
