use std::io::Write;

use clap::Args;
use clap::ArgAction;
use log::info;
use colored::*;
use env_logger::Builder;
use rand::rngs::StdRng;

use rs_alphabet::Alphabet;
use rs_sampling::GenerateError;
use rs_sampling::seeded_rng;
use rs_sampling::generate_from_alphabet;

/// Random string parameters.
#[derive(Debug, Args)]
pub struct GeneratorArguments {
    /// Seed for a reproducible string (omit for a random seed)
    #[arg(short, long, allow_negative_numbers = true)]
    pub seed: Option<i64>,

    /// Length of the random string
    #[arg(short, long)]
    pub length: usize,

    /// Character classes and literals to draw from: any lowercase letter
    /// selects a-z, any uppercase letter A-Z, any digit 0-9, everything
    /// else is used as is (e.g. "aA0-_")
    #[arg(short, long, value_name = "PATTERN")]
    pub alphabet: Alphabet,
}

impl GeneratorArguments {
    pub fn build_rng(&self) -> StdRng {
        seeded_rng(self.seed.map(|s| u64::from_ne_bytes(s.to_ne_bytes())))
    }

    pub fn generate(&self) -> Result<String, GenerateError> {
        self.alphabet.warn_invisible_extras();
        info!("{} {}", "Alphabet:".cyan(), self.alphabet);
        info!("{} {}", "Length:".cyan(), self.length);
        if let Some(seed) = self.seed {
            info!("{} {}", "Seed:".cyan(), seed);
        }
        generate_from_alphabet(self.length, &self.alphabet, &mut self.build_rng())
    }
}

/// Logging to stderr, `RUST_LOG` takes precedence over `verbosity`.
pub fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format(|buf, record| {
            writeln!(buf, "{}", record.args())
        })
        .init();
}

#[derive(Debug, Args)]
pub struct Verbosity {
    /// Verbosity (-v = info, -vv = debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use rs_sampling::RandomSource;

    #[derive(Debug, Parser)]
    struct TestCli {
        #[command(flatten)]
        generator: GeneratorArguments,
    }

    fn parse(args: &[&str]) -> Result<GeneratorArguments, clap::Error> {
        let argv = std::iter::once("randstr").chain(args.iter().copied());
        TestCli::try_parse_from(argv).map(|cli| cli.generator)
    }

    #[test]
    fn test_parse_long_and_short() {
        let long = parse(&["--seed", "5", "--length", "12", "--alphabet", "a-Z0"]).unwrap();
        let short = parse(&["-s", "5", "-l", "12", "-a", "a-Z0"]).unwrap();
        assert_eq!(long.seed, Some(5));
        assert_eq!(long.length, 12);
        assert_eq!(long.alphabet, Alphabet::from("a-Z0"));
        assert_eq!(short.seed, long.seed);
        assert_eq!(short.length, long.length);
        assert_eq!(short.alphabet, long.alphabet);
    }

    #[test]
    fn test_parse_seed_is_optional() {
        let args = parse(&["-l", "3", "-a", "x"]).unwrap();
        assert_eq!(args.seed, None);
    }

    #[test]
    fn test_parse_negative_seed() {
        let args = parse(&["-s", "-17", "-l", "3", "-a", "x"]).unwrap();
        assert_eq!(args.seed, Some(-17));

        let mut r1 = args.build_rng();
        let mut r2 = seeded_rng(Some(u64::MAX - 16));
        let s1: Vec<usize> = (0..8).map(|_| r1.next_index(100)).collect();
        let s2: Vec<usize> = (0..8).map(|_| r2.next_index(100)).collect();
        assert_eq!(s1, s2);
    }

    #[test]
    fn test_parse_missing_required() {
        let err = parse(&["-a", "abc"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
        let err = parse(&["-l", "4"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_parse_rejects_bad_numbers() {
        assert!(parse(&["-l", "-1", "-a", "abc"]).is_err());
        assert!(parse(&["-l", "ten", "-a", "abc"]).is_err());
        assert!(parse(&["-s", "1.5", "-l", "4", "-a", "abc"]).is_err());
    }

    #[test]
    fn test_parse_empty_alphabet_is_accepted() {
        let args = parse(&["-l", "4", "-a", ""]).unwrap();
        assert!(args.alphabet.is_empty());
        assert_eq!(args.generate(), Err(GenerateError::InvalidAlphabet));
    }

    #[test]
    fn test_generate_reproducible() {
        let a = parse(&["-s", "99", "-l", "20", "-a", "aA0"]).unwrap();
        let b = parse(&["-s", "99", "-l", "20", "-a", "Zz9"]).unwrap();
        let s = a.generate().unwrap();
        assert_eq!(s.len(), 20);
        assert_eq!(s, b.generate().unwrap());
    }

    #[test]
    fn test_generate_single_extra() {
        let args = parse(&["-l", "5", "-a", "!!"]).unwrap();
        assert_eq!(args.generate().unwrap(), "!!!!!");
    }
}
