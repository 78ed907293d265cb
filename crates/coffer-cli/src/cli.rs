use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use coffer_core::VERSION;

/// Coffer - donor, donation, and people tracking for nonprofit back offices
#[derive(Parser)]
#[command(name = "coffer")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the dataset file
    #[arg(short, long, global = true, env = "COFFER_DATA")]
    pub data: Option<String>,

    /// Organization scope: a slug, or "all" for every organization
    #[arg(short, long, global = true, env = "COFFER_ENTITY")]
    pub entity: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// ASCII-only output (no unicode symbols)
    #[arg(long, global = true)]
    pub ascii: bool,
}

/// Arguments for the `init` command
#[derive(Args)]
pub struct InitArgs {
    /// Path where the dataset will be created
    #[arg(value_name = "PATH")]
    pub path: Option<String>,

    /// Default entity scope to record in the config
    #[arg(long, value_name = "ORG")]
    pub default_entity: Option<String>,

    /// Overwrite an existing dataset
    #[arg(long)]
    pub force: bool,

    /// Disable interactive prompts
    #[arg(long)]
    pub no_input: bool,
}

/// Arguments for `orgs` subcommands
#[derive(Args)]
pub struct OrgsArgs {
    #[command(subcommand)]
    pub command: OrgsSubcommand,
}

#[derive(Subcommand)]
pub enum OrgsSubcommand {
    /// List organizations with record counts
    List(OrgListArgs),
}

/// Arguments for the `orgs list` command
#[derive(Args)]
pub struct OrgListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

/// Arguments for `donors` subcommands
#[derive(Args)]
pub struct DonorsArgs {
    #[command(subcommand)]
    pub command: DonorsSubcommand,
}

#[derive(Subcommand)]
pub enum DonorsSubcommand {
    /// List donors
    List(DonorListArgs),

    /// Show one donor profile by exact name
    Show(DonorShowArgs),

    /// Record a new donor (acknowledged, not persisted)
    Add(DonorAddArgs),
}

/// Arguments for the `donors list` command
#[derive(Args)]
pub struct DonorListArgs {
    /// Free-text search (name, email)
    #[arg(value_name = "QUERY")]
    pub query: Option<String>,

    /// Filter by status (active, lapsed, prospective; "all" keeps every status)
    #[arg(long)]
    pub status: Option<String>,

    /// Filter by kind (individual, organization, foundation; "all" keeps every kind)
    #[arg(long)]
    pub kind: Option<String>,

    /// Sort key (name, total, gifts, joined, last_gift)
    #[arg(long)]
    pub sort: Option<String>,

    /// Sort direction (asc, desc)
    #[arg(long)]
    pub direction: Option<String>,

    /// Limit number of results
    #[arg(long)]
    pub limit: Option<usize>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

/// Arguments for the `donors show` command
#[derive(Args)]
pub struct DonorShowArgs {
    /// Donor name (exact match)
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Session adjustment in DATE:AMOUNT:NOTE form (repeatable)
    #[arg(long, value_name = "ADJ")]
    pub adjust: Vec<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `donors add` command
#[derive(Args)]
pub struct DonorAddArgs {
    /// Donor name
    #[arg(long)]
    pub name: Option<String>,

    /// Contact email
    #[arg(long)]
    pub email: Option<String>,

    /// Contact phone
    #[arg(long)]
    pub phone: Option<String>,

    /// Donor kind (individual, organization, foundation)
    #[arg(long)]
    pub kind: Option<String>,

    /// Donor status (active, lapsed, prospective)
    #[arg(long)]
    pub status: Option<String>,

    /// Disable interactive prompts
    #[arg(long)]
    pub no_input: bool,
}

/// Arguments for `donations` subcommands
#[derive(Args)]
pub struct DonationsArgs {
    #[command(subcommand)]
    pub command: DonationsSubcommand,
}

#[derive(Subcommand)]
pub enum DonationsSubcommand {
    /// List donations
    List(DonationListArgs),

    /// Record a new donation (acknowledged, not persisted)
    Add(DonationAddArgs),

    /// Assign a donor to an existing donation (acknowledged, not persisted)
    Assign(DonationAssignArgs),
}

/// Arguments for the `donations list` command
#[derive(Args)]
pub struct DonationListArgs {
    /// Free-text search (id, purpose, donor name)
    #[arg(value_name = "QUERY")]
    pub query: Option<String>,

    /// Filter by status (completed, pending, failed, refunded; "all" keeps every status)
    #[arg(long)]
    pub status: Option<String>,

    /// Filter by kind (one_time, recurring; "all" keeps every kind)
    #[arg(long)]
    pub kind: Option<String>,

    /// Filter by payment method (credit_card, bank_transfer, paypal, check, cash; "all" keeps every method)
    #[arg(long)]
    pub method: Option<String>,

    /// Filter by assignment (all, assigned, unassigned)
    #[arg(long)]
    pub assignment: Option<String>,

    /// Sort key (date, amount, donor)
    #[arg(long)]
    pub sort: Option<String>,

    /// Sort direction (asc, desc)
    #[arg(long)]
    pub direction: Option<String>,

    /// Limit number of results
    #[arg(long)]
    pub limit: Option<usize>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

/// Arguments for the `donations add` command
#[derive(Args)]
pub struct DonationAddArgs {
    /// Amount (e.g., 500 or 1,234.56)
    #[arg(long)]
    pub amount: Option<String>,

    /// Date received (YYYY-MM-DD)
    #[arg(long)]
    pub date: Option<String>,

    /// Payment method (credit_card, bank_transfer, paypal, check, cash)
    #[arg(long)]
    pub method: Option<String>,

    /// Donation kind (one_time, recurring)
    #[arg(long)]
    pub kind: Option<String>,

    /// Purpose or fund designation
    #[arg(long)]
    pub purpose: Option<String>,

    /// Donor name; omit for an unassigned donation
    #[arg(long)]
    pub donor: Option<String>,

    /// Disable interactive prompts
    #[arg(long)]
    pub no_input: bool,
}

/// Arguments for the `donations assign` command
#[derive(Args)]
pub struct DonationAssignArgs {
    /// Donation ID
    #[arg(value_name = "DONATION_ID")]
    pub donation_id: String,

    /// Donor name (exact match)
    #[arg(value_name = "DONOR")]
    pub donor: String,
}

/// Arguments for `personnel` subcommands
#[derive(Args)]
pub struct PersonnelArgs {
    #[command(subcommand)]
    pub command: PersonnelSubcommand,
}

#[derive(Subcommand)]
pub enum PersonnelSubcommand {
    /// List staff
    List(PersonnelListArgs),
}

/// Arguments for the `personnel list` command
#[derive(Args)]
pub struct PersonnelListArgs {
    /// Free-text search (name, email, role)
    #[arg(value_name = "QUERY")]
    pub query: Option<String>,

    /// Filter by status (active, on_leave, ended; "all" keeps every status)
    #[arg(long)]
    pub status: Option<String>,

    /// Filter by employment (full_time, part_time, contractor; "all" keeps every arrangement)
    #[arg(long)]
    pub employment: Option<String>,

    /// Sort key (name, role, started)
    #[arg(long)]
    pub sort: Option<String>,

    /// Sort direction (asc, desc)
    #[arg(long)]
    pub direction: Option<String>,

    /// Limit number of results
    #[arg(long)]
    pub limit: Option<usize>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

/// Arguments for `volunteers` subcommands
#[derive(Args)]
pub struct VolunteersArgs {
    #[command(subcommand)]
    pub command: VolunteersSubcommand,
}

#[derive(Subcommand)]
pub enum VolunteersSubcommand {
    /// List volunteers
    List(VolunteerListArgs),

    /// Show one volunteer profile by exact name
    Show(VolunteerShowArgs),
}

/// Arguments for the `volunteers list` command
#[derive(Args)]
pub struct VolunteerListArgs {
    /// Free-text search (name, email, skills)
    #[arg(value_name = "QUERY")]
    pub query: Option<String>,

    /// Filter by status (active, inactive, applicant; "all" keeps every status)
    #[arg(long)]
    pub status: Option<String>,

    /// Filter by skill (substring match)
    #[arg(long)]
    pub skill: Option<String>,

    /// Sort key (name, hours, joined, last_session)
    #[arg(long)]
    pub sort: Option<String>,

    /// Sort direction (asc, desc)
    #[arg(long)]
    pub direction: Option<String>,

    /// Limit number of results
    #[arg(long)]
    pub limit: Option<usize>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

/// Arguments for the `volunteers show` command
#[derive(Args)]
pub struct VolunteerShowArgs {
    /// Volunteer name (exact match)
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `statement` command
#[derive(Args)]
pub struct StatementArgs {
    /// Donor name (exact match)
    #[arg(value_name = "DONOR")]
    pub donor: String,

    /// Limit to one calendar year
    #[arg(long)]
    pub year: Option<i32>,

    /// Write the statement to a file instead of stdout
    #[arg(long, value_name = "PATH")]
    pub out: Option<String>,
}

/// Arguments for the `check` command
#[derive(Args)]
pub struct CheckArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

/// Arguments for the `completions` command
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_name = "SHELL")]
    pub shell: Shell,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a starter dataset and config
    Init(InitArgs),

    /// Organizations
    Orgs(OrgsArgs),

    /// Donors
    Donors(DonorsArgs),

    /// Donations
    Donations(DonationsArgs),

    /// Personnel
    Personnel(PersonnelArgs),

    /// Volunteers
    Volunteers(VolunteersArgs),

    /// Render a contribution statement (HTML)
    Statement(StatementArgs),

    /// Check dataset integrity
    Check(CheckArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}
