use std::{env, process};

use anyhow::{bail, Context, Result};
use bounded_perceptron::{
    configs::{json, OffMenu},
    Outcome, Session, TrainingConfig, TrainingConfigBuilder,
};
use log::{info, warn};

const USAGE: &str = "Usage: bounded-perceptron [CONFIG.json] [--speed F] [--iterations N] \
                     [--deadline MS] [--threshold F]";

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("error: {e:#}");
        eprintln!("{USAGE}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let config = parse_args(env::args().skip(1))?;

    for off in config.off_menu() {
        match off {
            OffMenu::Speed(v) => warn!("learning speed {v} is not one of the listed speeds"),
            OffMenu::Iterations(v) => warn!("{v} iterations is not one of the listed caps"),
            OffMenu::Deadline(v) => warn!("deadline {v:?} is not one of the listed deadlines"),
        }
    }

    let threshold = config.threshold();
    let session = Session::new(config).context("failed to start training session")?;
    info!("computing...");
    let outcome = session.wait()?;

    let weights = outcome.weights();
    println!("P: {threshold}");
    println!("W1: {}", weights.w1());
    println!("W2: {}", weights.w2());
    println!("Result: {}", describe(&outcome));

    Ok(())
}

fn describe(outcome: &Outcome) -> &'static str {
    match outcome {
        Outcome::Separated { .. } => "Correct",
        Outcome::Exhausted { .. } => {
            "Can't do the calculations in a proper time/iterations number \
             (iterations exhausted, try more iterations or another speed)"
        }
        Outcome::TimedOut { .. } => {
            "Can't do the calculations in a proper time/iterations number \
             (deadline hit before a verdict, try a longer deadline)"
        }
    }
}

fn parse_args<I>(mut args: I) -> Result<TrainingConfig>
where
    I: Iterator<Item = String>,
{
    let mut path = None;
    let mut speed = None;
    let mut iterations = None;
    let mut deadline = None;
    let mut threshold = None;

    while let Some(arg) = args.next() {
        let mut value = |flag: &str| {
            args.next()
                .with_context(|| format!("missing value for {flag}"))
        };

        match arg.as_str() {
            "--speed" => speed = Some(value("--speed")?.parse::<f64>()?),
            "--iterations" => iterations = Some(value("--iterations")?.parse::<usize>()?),
            "--deadline" => deadline = Some(value("--deadline")?.parse::<u64>()?),
            "--threshold" => threshold = Some(value("--threshold")?.parse::<f64>()?),
            flag if flag.starts_with("--") => bail!("unknown option: {flag}"),
            _ if path.is_some() => bail!("more than one config file given"),
            file => path = Some(file.to_string()),
        }
    }

    let base = match path {
        Some(path) => json::load(&path).with_context(|| format!("cannot load '{path}'"))?,
        None => TrainingConfig::default(),
    };

    let mut builder = TrainingConfigBuilder::from(base);
    if let Some(speed) = speed {
        builder = builder.speed(speed);
    }
    if let Some(iterations) = iterations {
        builder = builder.iterations(iterations);
    }
    if let Some(ms) = deadline {
        builder = builder.deadline_ms(ms);
    }
    if let Some(threshold) = threshold {
        builder = builder.threshold(threshold);
    }

    Ok(builder.build()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn args(s: &[&str]) -> impl Iterator<Item = String> {
        s.iter().map(|a| a.to_string()).collect::<Vec<_>>().into_iter()
    }

    #[test]
    fn no_arguments_means_defaults() {
        assert_eq!(parse_args(args(&[])).unwrap(), TrainingConfig::default());
    }

    #[test]
    fn flags_override_defaults() {
        let config = parse_args(args(&[
            "--speed", "0.1", "--iterations", "500", "--deadline", "2000", "--threshold", "3.5",
        ]))
        .unwrap();

        assert_eq!(config.speed(), 0.1);
        assert_eq!(config.iterations(), 500);
        assert_eq!(config.deadline(), Duration::from_secs(2));
        assert_eq!(config.threshold(), 3.5);
    }

    #[test]
    fn bad_arguments_are_reported() {
        assert!(parse_args(args(&["--speed"])).is_err());
        assert!(parse_args(args(&["--iterations", "-3"])).is_err());
        assert!(parse_args(args(&["--verbose"])).is_err());
        assert!(parse_args(args(&["a.json", "b.json"])).is_err());
    }

    #[test]
    fn every_outcome_has_a_message() {
        let weights = Default::default();
        let stats = Default::default();

        assert_eq!(describe(&Outcome::Separated { weights, stats }), "Correct");
        assert!(describe(&Outcome::Exhausted { weights, stats }).contains("iterations"));
        assert!(describe(&Outcome::TimedOut { weights, stats }).contains("deadline"));
    }
}
