use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "preventivi")]
#[command(about = "Generate and manage PDF quotes")]
#[command(version)]
pub struct Cli {
    /// Show debug output
    #[arg(long, short = 'v', global = true, default_value_t = false)]
    pub verbose: bool,

    /// Archive file to use instead of the configured one
    #[arg(long, global = true)]
    pub archive: Option<PathBuf>,

    /// Config file (defaults to the platform config directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Render a quote PDF for CLIENTE and archive it
    #[command(alias = "genera")]
    Generate(GenerateArgs),

    /// Archive an existing quote PDF, reading client, date and total from its text
    #[command(alias = "importa")]
    Import(ImportArgs),

    /// List archived quotes sorted by date
    #[command(alias = "lista")]
    List(ListArgs),

    /// Compare two quotes by their position in the list
    #[command(alias = "confronta")]
    Compare(CompareArgs),
}

#[derive(Parser)]
pub struct GenerateArgs {
    /// Client name
    pub cliente: String,

    /// Destination PDF file
    #[arg(long, short = 'd', default_value = "output.pdf")]
    pub dest: PathBuf,

    /// Quote total, N,NN
    #[arg(long, short = 't', default_value = "0,00")]
    pub totale: String,

    /// Brand profile (defaults to the configured brand)
    #[arg(long, short = 'b')]
    pub brand: Option<String>,
}

#[derive(Parser)]
pub struct ImportArgs {
    /// PDF file to import
    pub file: PathBuf,

    /// Use this client name instead of the one found in the PDF
    #[arg(long)]
    pub cliente: Option<String>,

    /// Use this date (YYYY-MM-DD) instead of the one found in the PDF
    #[arg(long)]
    pub data: Option<String>,
}

#[derive(Parser)]
pub struct ListArgs {
    /// Only show quotes for this client (exact, case-insensitive)
    #[arg(long)]
    pub cliente: Option<String>,

    /// Output as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[derive(Parser)]
pub struct CompareArgs {
    /// Position of the first quote in `list`
    #[arg(allow_negative_numbers = true)]
    pub first: i64,

    /// Position of the second quote in `list`
    #[arg(allow_negative_numbers = true)]
    pub second: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn italian_aliases_parse() {
        let cli = Cli::try_parse_from(["preventivi", "--verbose", "genera", "Acme", "-d", "x.pdf"]).unwrap();
        assert!(cli.verbose);
        match cli.command {
            Command::Generate(args) => {
                assert_eq!(args.cliente, "Acme");
                assert_eq!(args.dest, PathBuf::from("x.pdf"));
                assert_eq!(args.totale, "0,00");
            }
            _ => panic!("expected generate"),
        }
    }

    #[test]
    fn compare_accepts_negative_positions() {
        let cli = Cli::try_parse_from(["preventivi", "confronta", "-1", "2"]).unwrap();
        match cli.command {
            Command::Compare(args) => assert_eq!((args.first, args.second), (-1, 2)),
            _ => panic!("expected compare"),
        }
    }

    #[test]
    fn compare_rejects_non_numbers() {
        assert!(Cli::try_parse_from(["preventivi", "compare", "uno", "2"]).is_err());
    }
}
