use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "vaultcheck",
    about = "Vaultcheck: static structural conformance checks for the EigenVault system",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run every validator, assess production readiness, and persist the report
    Run {
        /// Repository root that manifest paths are resolved against
        #[arg(long, default_value = ".")]
        root: String,

        /// Artifact manifest TOML path (defaults to the builtin EigenVault manifest)
        #[arg(long)]
        manifest: Option<String>,

        /// Report output path (defaults to <root>/eigenvault_test_report.json)
        #[arg(long)]
        report: Option<String>,

        /// Output the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the resolved artifact manifest
    Manifest {
        /// Artifact manifest TOML path (defaults to the builtin EigenVault manifest)
        #[arg(long)]
        manifest: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
