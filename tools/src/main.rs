//! synthid: print synthetic US identity records as JSON lines.
//!
//! Usage:
//!   synthid --seed 42 --state CA --city "Los Angeles"
//!   synthid --count 10 --gender female --min-age 25 --max-age 40 --pretty
//!   synthid --config resolver.json --offline

use anyhow::{bail, Result};
use std::env;
use std::io::{self, Write};
use synthid_core::{
    composer::IdentityComposer, types::Seed, Gender, GenerateOptions, ResolverConfig,
};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_usage();
        return Ok(());
    }

    let options = parse_options(&args)?;
    let count = parse_arg(&args, "--count", 1usize);
    let pretty = args.iter().any(|a| a == "--pretty");

    let mut config = match flag_value(&args, "--config") {
        Some(path) => ResolverConfig::load(path)?,
        None => ResolverConfig::default(),
    };
    if args.iter().any(|a| a == "--offline") {
        config.offline = true;
    }

    let composer = IdentityComposer::from_config(&config)?;
    log::info!(
        "synthid: {count} record(s), seed {:?}, offline {}",
        options.seed,
        config.offline
    );

    let records = composer.compose_batch(&options, count).await;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for record in &records {
        let line = if pretty {
            serde_json::to_string_pretty(record)?
        } else {
            serde_json::to_string(record)?
        };
        writeln!(out, "{line}")?;
    }
    Ok(())
}

fn parse_options(args: &[String]) -> Result<GenerateOptions> {
    let gender = match flag_value(args, "--gender") {
        None => None,
        Some(value) if value.eq_ignore_ascii_case("random") => None,
        Some(value) => match value.parse::<Gender>() {
            Ok(gender) => Some(gender),
            Err(_) => bail!("--gender must be male, female or random (got {value})"),
        },
    };
    let seed = match flag_value(args, "--seed") {
        None => None,
        Some(value) => match value.parse::<Seed>() {
            Ok(seed) => Some(seed),
            Err(_) => bail!("--seed must be an integer (got {value})"),
        },
    };
    let min_age = parse_arg(args, "--min-age", 0u32);
    let max_age = parse_arg(args, "--max-age", 0u32);

    Ok(GenerateOptions {
        state: flag_value(args, "--state").map(str::to_owned),
        city: flag_value(args, "--city").map(str::to_owned),
        gender,
        min_age: (min_age > 0).then_some(min_age),
        max_age: (max_age > 0).then_some(max_age),
        seed,
    })
}

fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}

fn print_usage() {
    println!("synthid: synthetic US identity records (not real people)");
    println!();
    println!("  --seed N          reproducible output");
    println!("  --state XX        two-letter state code");
    println!("  --city NAME       city within the state");
    println!("  --gender G        male | female | random");
    println!("  --min-age N       lower age bound (with --max-age)");
    println!("  --max-age N       upper age bound (with --min-age)");
    println!("  --count N         number of records (default 1)");
    println!("  --config PATH     resolver settings (JSON)");
    println!("  --offline         synthetic addresses only");
    println!("  --pretty          pretty-print each record");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("synthid")
            .chain(list.iter().copied())
            .map(str::to_owned)
            .collect()
    }

    #[test]
    fn negative_seed_is_kept() {
        let options = parse_options(&args(&["--seed", "-7", "--state", "CA"])).expect("options");
        assert_eq!(options.seed, Some(-7));
        assert_eq!(options.state.as_deref(), Some("CA"));
    }

    #[test]
    fn malformed_seed_is_rejected() {
        assert!(parse_options(&args(&["--seed", "abc"])).is_err());
        assert!(parse_options(&args(&["--seed", "12x"])).is_err());
    }

    #[test]
    fn missing_seed_means_unseeded() {
        let options = parse_options(&args(&["--gender", "Random"])).expect("options");
        assert_eq!(options.seed, None);
        assert_eq!(options.gender, None);
    }

    #[test]
    fn gender_and_ages_are_parsed() {
        let options =
            parse_options(&args(&["--gender", "female", "--min-age", "25", "--max-age", "40"]))
                .expect("options");
        assert_eq!(options.gender, Some(Gender::Female));
        assert_eq!((options.min_age, options.max_age), (Some(25), Some(40)));
        assert!(parse_options(&args(&["--gender", "other"])).is_err());
    }
}
