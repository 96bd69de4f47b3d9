//! Unit tests mirroring the `src/` tree, one file per source module

mod io;

#[cfg(test)]
mod tests {
    use bayes_rescue::io::cli::{Cli, PolicyChoice};
    use bayes_rescue::io::configuration::{DEFAULT_SEED, DEFAULT_SESSIONS};
    use clap::Parser;

    // Tests the binary starts with the documented defaults when given no arguments
    #[test]
    fn test_binary_arguments_default() {
        let cli = Cli::try_parse_from(["bayes-rescue"])
            .unwrap_or_else(|e| unreachable!("default arguments should parse: {e}"));

        assert_eq!(cli.seed, DEFAULT_SEED);
        assert_eq!(cli.sessions, DEFAULT_SESSIONS);
        assert_eq!(cli.policy, PolicyChoice::Both);
        assert!(!cli.quiet);
        assert!(!cli.verbose);
    }
}
