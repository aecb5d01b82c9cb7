use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use fleet_core::catalog::Catalog;
use fleet_core::documents::DocumentKind;
use fleet_core::VERSION;

/// Fleet - keep track of your vehicles, their papers and their due dates
#[derive(Parser)]
#[command(name = "fleet")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the vehicle database
    #[arg(long, global = true, env = "FLEET_DB", value_name = "PATH")]
    pub db: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Use ASCII symbols instead of unicode
    #[arg(long, global = true)]
    pub ascii: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the database and write a config file pointing at it
    Init(InitArgs),

    /// Add a vehicle
    Add(AddArgs),

    /// Edit a vehicle by ID
    Edit(EditArgs),

    /// List vehicles, newest first
    List(ListArgs),

    /// Search vehicles by plate, brand, model, year, mileage, insurance or notes
    Search(SearchArgs),

    /// Show one vehicle
    Show(ShowArgs),

    /// Delete a vehicle by license plate
    Delete(DeleteArgs),

    /// Attach a document file to a vehicle
    Attach(AttachArgs),

    /// Remove an attached document
    Detach(DetachArgs),

    /// List documents attached to a vehicle
    Docs(DocsArgs),

    /// Print a suggestion list
    Catalog(CatalogArgs),

    /// Show or change preferences
    Prefs(PrefsArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `init` command
#[derive(Args)]
pub struct InitArgs {
    /// Where to create the database (defaults to --db or ./fleet_manager.db)
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Directory for attached documents (defaults to <db dir>/files)
    #[arg(long, value_name = "DIR")]
    pub documents_dir: Option<PathBuf>,

    /// Overwrite an existing config file
    #[arg(long)]
    pub force: bool,
}

/// Vehicle fields shared by `add` and `edit`.
///
/// On edit, an empty value clears an optional field.
#[derive(Args, Debug, Default, Clone)]
pub struct VehicleFieldArgs {
    /// License plate
    #[arg(long, value_name = "PLATE")]
    pub plate: Option<String>,

    #[arg(long)]
    pub brand: Option<String>,

    #[arg(long)]
    pub model: Option<String>,

    /// Production year
    #[arg(long)]
    pub year: Option<String>,

    /// Vehicle type (see `fleet catalog vehicle-types`)
    #[arg(long = "type", value_name = "TYPE")]
    pub vehicle_type: Option<String>,

    /// Vehicle identification number (17 characters)
    #[arg(long)]
    pub vin: Option<String>,

    #[arg(long)]
    pub mileage: Option<String>,

    /// Engine displacement in cc
    #[arg(long, value_name = "CC")]
    pub engine_cc: Option<String>,

    /// Fuel type (see `fleet catalog fuel-types`)
    #[arg(long)]
    pub fuel: Option<String>,

    #[arg(long)]
    pub color: Option<String>,

    #[arg(long)]
    pub notes: Option<String>,

    /// Insurance expiry date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub insurance_expiry: Option<String>,

    /// Next KTEO inspection date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub kteo_next: Option<String>,

    /// KEK renewal date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub kek_renewal: Option<String>,

    #[arg(long)]
    pub status: Option<String>,

    /// Whether the vehicle has a GPS tracker
    #[arg(long, value_name = "BOOL")]
    pub gps: Option<bool>,
}

/// Arguments for the `add` command
#[derive(Args)]
pub struct AddArgs {
    #[command(flatten)]
    pub fields: VehicleFieldArgs,

    /// Disable interactive prompts
    #[arg(long)]
    pub no_input: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `edit` command
#[derive(Args)]
pub struct EditArgs {
    /// Vehicle ID
    #[arg(value_name = "ID")]
    pub id: i64,

    #[command(flatten)]
    pub fields: VehicleFieldArgs,

    /// Disable interactive prompts
    #[arg(long)]
    pub no_input: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `list` command
#[derive(Args)]
pub struct ListArgs {
    /// Only vehicles with GPS, ordered by brand and model
    #[arg(long)]
    pub gps: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

/// Arguments for the `search` command
#[derive(Args)]
pub struct SearchArgs {
    /// Case-insensitive text to look for
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

/// Arguments for the `show` command
#[derive(Args)]
pub struct ShowArgs {
    /// License plate
    #[arg(value_name = "PLATE", required_unless_present = "id", conflicts_with = "id")]
    pub plate: Option<String>,

    /// Look up by ID instead of plate
    #[arg(long)]
    pub id: Option<i64>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `delete` command
#[derive(Args)]
pub struct DeleteArgs {
    /// License plate
    #[arg(value_name = "PLATE")]
    pub plate: String,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,

    /// Also remove attached documents
    #[arg(long)]
    pub with_documents: bool,
}

/// Document kinds accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DocumentKindArg {
    Licence,
    Insurance,
    Kteo,
}

impl From<DocumentKindArg> for DocumentKind {
    fn from(arg: DocumentKindArg) -> Self {
        match arg {
            DocumentKindArg::Licence => DocumentKind::Licence,
            DocumentKindArg::Insurance => DocumentKind::Insurance,
            DocumentKindArg::Kteo => DocumentKind::Kteo,
        }
    }
}

/// Arguments for the `attach` command
#[derive(Args)]
pub struct AttachArgs {
    /// License plate
    #[arg(value_name = "PLATE")]
    pub plate: String,

    #[arg(value_name = "KIND", value_enum)]
    pub kind: DocumentKindArg,

    /// File to copy (.pdf, .jpg, .jpeg or .png)
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

/// Arguments for the `detach` command
#[derive(Args)]
pub struct DetachArgs {
    /// License plate
    #[arg(value_name = "PLATE")]
    pub plate: String,

    #[arg(value_name = "KIND", value_enum)]
    pub kind: DocumentKindArg,
}

/// Arguments for the `docs` command
#[derive(Args)]
pub struct DocsArgs {
    /// License plate
    #[arg(value_name = "PLATE")]
    pub plate: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Suggestion lists accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CatalogArg {
    VehicleTypes,
    FuelTypes,
    Colors,
    Brands,
}

impl From<CatalogArg> for Catalog {
    fn from(arg: CatalogArg) -> Self {
        match arg {
            CatalogArg::VehicleTypes => Catalog::VehicleTypes,
            CatalogArg::FuelTypes => Catalog::FuelTypes,
            CatalogArg::Colors => Catalog::Colors,
            CatalogArg::Brands => Catalog::Brands,
        }
    }
}

/// Arguments for the `catalog` command
#[derive(Args)]
pub struct CatalogArgs {
    #[arg(value_name = "LIST", value_enum)]
    pub list: CatalogArg,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `prefs` command
#[derive(Args)]
pub struct PrefsArgs {
    #[command(subcommand)]
    pub command: PrefsSubcommand,
}

#[derive(Subcommand)]
pub enum PrefsSubcommand {
    /// Print current preferences
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Change one preference (theme, language, window_size, window_position)
    Set {
        #[arg(value_name = "KEY")]
        key: String,

        #[arg(value_name = "VALUE")]
        value: String,
    },
}

/// Arguments for the `completions` command
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_name = "SHELL")]
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_show_requires_plate_or_id() {
        assert!(Cli::try_parse_from(["fleet", "show"]).is_err());
        assert!(Cli::try_parse_from(["fleet", "show", "XEP-4096"]).is_ok());
        assert!(Cli::try_parse_from(["fleet", "show", "--id", "3"]).is_ok());
        assert!(Cli::try_parse_from(["fleet", "show", "XEP-4096", "--id", "3"]).is_err());
    }

    #[test]
    fn test_edit_parses_fields() {
        let cli = Cli::try_parse_from([
            "fleet", "edit", "7", "--mileage", "15000", "--gps", "true", "--notes", "",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Edit(args)) => {
                assert_eq!(args.id, 7);
                assert_eq!(args.fields.mileage.as_deref(), Some("15000"));
                assert_eq!(args.fields.gps, Some(true));
                assert_eq!(args.fields.notes.as_deref(), Some(""));
            }
            _ => panic!("expected edit"),
        }
    }

    #[test]
    fn test_verbose_counts() {
        let cli = Cli::try_parse_from(["fleet", "-vv", "list"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }
}
