use clap::{Parser, ValueEnum};
use std::fmt::{Display, Formatter};
use std::net::SocketAddr;
use tinylink_generator::SeqGenerator;
use url::Url;

pub const LISTEN_ADDR_ENV: &str = "TINYLINK_LISTEN_ADDR";
pub const DOMAIN_URL_ENV: &str = "DOMAIN_URL";
pub const GENERATOR_ENV: &str = "TINYLINK_GENERATOR";
pub const GENERATOR_PREFIX_ENV: &str = "TINYLINK_GENERATOR_PREFIX";
pub const MAX_ATTEMPTS_ENV: &str = "TINYLINK_MAX_ATTEMPTS";
pub const LOG_FORMAT_ENV: &str = "TINYLINK_LOG_FORMAT";

pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:5000";
pub const DEFAULT_DOMAIN_URL: &str = "http://localhost:5000";
pub const DEFAULT_GENERATOR_PREFIX: &str = "tl";
pub const DEFAULT_MAX_ATTEMPTS: &str = "5";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GeneratorArg {
    #[value(name = "random")]
    Random,
    #[value(name = "seq")]
    Seq,
}

impl Display for GeneratorArg {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            GeneratorArg::Random => write!(f, "random"),
            GeneratorArg::Seq => write!(f, "seq"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    #[value(name = "text")]
    Text,
    #[value(name = "json")]
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "tinylink-gateway")]
pub struct CLI {
    #[arg(long, env = LISTEN_ADDR_ENV, default_value = DEFAULT_LISTEN_ADDR)]
    pub listen_addr: SocketAddr,

    /// Prefix of every returned short URL.
    #[arg(
        long,
        env = DOMAIN_URL_ENV,
        default_value = DEFAULT_DOMAIN_URL,
        value_parser = parse_domain_url,
    )]
    pub domain_url: String,

    #[arg(
        long,
        env = GENERATOR_ENV,
        value_enum,
        default_value_t = GeneratorArg::Random
    )]
    pub generator: GeneratorArg,

    /// Only used by the `seq` generator.
    #[arg(
        long,
        env = GENERATOR_PREFIX_ENV,
        default_value = DEFAULT_GENERATOR_PREFIX,
        value_parser = parse_generator_prefix,
    )]
    pub generator_prefix: String,

    #[arg(
        long,
        env = MAX_ATTEMPTS_ENV,
        default_value = DEFAULT_MAX_ATTEMPTS,
        value_parser = clap::value_parser!(u32).range(1..),
    )]
    pub max_attempts: u32,

    #[arg(
        long,
        env = LOG_FORMAT_ENV,
        value_enum,
        default_value_t = LogFormat::Text
    )]
    pub log_format: LogFormat,
}

fn parse_domain_url(value: &str) -> Result<String, String> {
    let url = Url::parse(value).map_err(|e| format!("invalid domain url '{value}': {e}"))?;
    if url.cannot_be_a_base() {
        return Err(format!("domain url '{value}' cannot carry a path"));
    }
    Ok(value.to_owned())
}

fn parse_generator_prefix(value: &str) -> Result<String, String> {
    SeqGenerator::validate_prefix(value).map_err(|e| e.to_string())?;
    Ok(value.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = CLI::try_parse_from(["gateway"]).unwrap();

        assert_eq!(cli.listen_addr, DEFAULT_LISTEN_ADDR.parse().unwrap());
        assert_eq!(cli.domain_url, DEFAULT_DOMAIN_URL);
        assert_eq!(cli.generator, GeneratorArg::Random);
        assert_eq!(cli.max_attempts, 5);
        assert_eq!(cli.log_format, LogFormat::Text);
    }

    #[test]
    fn explicit_flags() {
        let cli = CLI::try_parse_from([
            "gateway",
            "--domain-url",
            "https://tiny.link",
            "--generator",
            "seq",
            "--generator-prefix",
            "node-a",
            "--max-attempts",
            "2",
            "--log-format",
            "json",
        ])
        .unwrap();

        assert_eq!(cli.domain_url, "https://tiny.link");
        assert_eq!(cli.generator, GeneratorArg::Seq);
        assert_eq!(cli.generator_prefix, "node-a");
        assert_eq!(cli.max_attempts, 2);
        assert_eq!(cli.log_format, LogFormat::Json);
    }

    #[test]
    fn rejects_zero_attempts() {
        assert!(CLI::try_parse_from(["gateway", "--max-attempts", "0"]).is_err());
    }

    #[test]
    fn rejects_unusable_generator_prefix() {
        let too_long = "a".repeat(27);
        for prefix in ["node.a", "a/b", too_long.as_str()] {
            assert!(
                CLI::try_parse_from(["gateway", "--generator-prefix", prefix]).is_err(),
                "prefix {prefix:?}"
            );
        }
    }

    #[test]
    fn rejects_relative_domain_url() {
        assert!(CLI::try_parse_from(["gateway", "--domain-url", "localhost"]).is_err());
    }
}
