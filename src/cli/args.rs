use crate::core::{OperationType, SupportFilter};
use crate::output::OutputFormat;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "ackcov")]
#[command(about = "API coverage dashboard for AWS Controllers for Kubernetes", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Directory containing the per-service `*-operations.json` reports
    #[arg(long, global = true, env = "ACKCOV_RESULTS_DIR")]
    pub results_dir: Option<PathBuf>,

    /// Disable colors and emoji
    #[arg(long, global = true)]
    pub plain: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", global = true, action = clap::ArgAction::Count)]
    pub verbosity: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Overall coverage across the selected services
    Overview {
        #[command(flatten)]
        selection: SelectionArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Control plane coverage across the selected services
    ControlPlane {
        #[command(flatten)]
        selection: SelectionArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Operation-level detail for one service
    Service {
        /// Service key, e.g. `s3` for `s3-operations.json`
        name: String,

        /// Only show operations of these types
        #[arg(long = "type", value_enum, value_delimiter = ',')]
        types: Option<Vec<TypeArg>>,

        /// Only show supported or unsupported operations
        #[arg(long, value_enum, default_value = "all")]
        support: SupportArg,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Control plane operations of one service
    ServiceControlPlane {
        /// Service key
        name: String,

        #[arg(long, value_enum, default_value = "all")]
        support: SupportArg,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Interactive dashboard
    Dashboard {
        /// Services selected when the dashboard opens
        #[arg(long, value_delimiter = ',', num_args = 0..)]
        services: Option<Vec<String>>,

        #[arg(long)]
        top: Option<usize>,
    },
}

#[derive(Args, Debug, Clone, Default)]
pub struct SelectionArgs {
    /// Comma-separated services to include; an empty value selects none
    #[arg(long, value_delimiter = ',', num_args = 0..)]
    pub services: Option<Vec<String>>,

    /// Length of the top services list
    #[arg(long)]
    pub top: Option<usize>,
}

#[derive(Args, Debug, Clone)]
pub struct OutputArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = "terminal")]
    pub format: OutputFormat,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TypeArg {
    ControlPlane,
    DataPlane,
}

impl From<TypeArg> for OperationType {
    fn from(arg: TypeArg) -> Self {
        match arg {
            TypeArg::ControlPlane => OperationType::ControlPlane,
            TypeArg::DataPlane => OperationType::DataPlane,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SupportArg {
    All,
    Supported,
    Unsupported,
}

impl From<SupportArg> for SupportFilter {
    fn from(arg: SupportArg) -> Self {
        match arg {
            SupportArg::All => SupportFilter::All,
            SupportArg::Supported => SupportFilter::Supported,
            SupportArg::Unsupported => SupportFilter::Unsupported,
        }
    }
}

/// `--services` given with no value arrives as `Some(vec![])` or `Some(vec![""])`.
pub fn normalize_services(services: Option<Vec<String>>) -> Option<Vec<String>> {
    services.map(|names| {
        names
            .into_iter()
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .collect()
    })
}

pub fn parse_args() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_overview_with_services() {
        let cli = Cli::try_parse_from(["ackcov", "overview", "--services", "s3,ec2", "--top", "3"])
            .unwrap();
        match cli.command {
            Commands::Overview { selection, output } => {
                assert_eq!(
                    selection.services,
                    Some(vec!["s3".to_string(), "ec2".to_string()])
                );
                assert_eq!(selection.top, Some(3));
                assert_eq!(output.format, OutputFormat::Terminal);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_empty_services_flag_selects_nothing() {
        let cli = Cli::try_parse_from(["ackcov", "overview", "--services"]).unwrap();
        let Commands::Overview { selection, .. } = cli.command else {
            panic!("expected overview");
        };
        assert_eq!(normalize_services(selection.services), Some(vec![]));
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "ackcov",
            "control-plane",
            "--results-dir",
            "out",
            "--plain",
            "-vv",
        ])
        .unwrap();
        assert_eq!(cli.results_dir, Some(PathBuf::from("out")));
        assert!(cli.plain);
        assert_eq!(cli.verbosity, 2);
    }

    #[test]
    fn test_parse_service_filters() {
        let cli = Cli::try_parse_from([
            "ackcov",
            "service",
            "s3",
            "--type",
            "control-plane",
            "--support",
            "unsupported",
            "--format",
            "json",
        ])
        .unwrap();
        match cli.command {
            Commands::Service {
                name,
                types,
                support,
                output,
            } => {
                assert_eq!(name, "s3");
                assert_eq!(types, Some(vec![TypeArg::ControlPlane]));
                assert_eq!(SupportFilter::from(support), SupportFilter::Unsupported);
                assert_eq!(output.format, OutputFormat::Json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_normalize_services_trims() {
        let names = normalize_services(Some(vec![" s3".into(), "".into(), "ec2 ".into()]));
        assert_eq!(names, Some(vec!["s3".to_string(), "ec2".to_string()]));
        assert_eq!(normalize_services(None), None);
    }
}
