//! Command-line interface for skillgap.
//!
//! Score an inventory file against a requirement catalog:
//!
//! ```bash
//! $ skillgap gaps --inventory skills.json --catalog catalog.yaml --department Engineering --format csv
//! ```
//!
//! Sign in against the local session store:
//!
//! ```bash
//! $ skillgap --data-dir ~/.skillgap login priya.sharma@company.com priya123
//! $ skillgap whoami
//! ```

use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Utc;
use clap::{Parser, Subcommand, ValueEnum};
use skillgap_core::export::{gaps_to_csv, suggestions_to_csv, team_to_csv};
use skillgap_core::gaps::{by_severity, generate_all_suggestions, GapSuggestion};
use skillgap_core::report::{to_table, GapSummary};
use skillgap_core::{bridge, fixtures, team, GapEngine, GapRecord, MatchStrategy, PlanTemplate, TrainingId};
use skillgap_runtime::{Registration, RuntimeConfig};

use crate::error::{AppError, Result};
use crate::input;
use crate::session::Session;

#[derive(Parser, Debug)]
#[command(name = "skillgap", version, about = "Skills-gap scoring and training planning")]
pub struct Cli {
    /// Directory of the session store
    #[arg(long, global = true, env = "SKILLGAP_DATA_DIR", default_value = ".skillgap")]
    pub data_dir: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Score an inventory against a requirement catalog
    Gaps {
        #[arg(long)]
        inventory: PathBuf,
        #[arg(long)]
        catalog: PathBuf,
        /// Exact department name, or "all"
        #[arg(long)]
        department: Option<String>,
        #[arg(long = "match", value_enum, default_value_t = MatchArg::TaxonomyFirst)]
        match_strategy: MatchArg,
        #[arg(long, value_enum, default_value_t = Format::Table)]
        format: Format,
        /// Most severe gaps first instead of catalog order
        #[arg(long)]
        sorted: bool,
        /// Print recommended actions for open gaps instead of the gaps
        #[arg(long)]
        suggest: bool,
    },

    /// Draft a training plan for one skill's gap
    Plan {
        #[arg(long)]
        inventory: PathBuf,
        #[arg(long)]
        catalog: PathBuf,
        /// Requirement skill name (case-insensitive)
        #[arg(long)]
        skill: String,
        #[arg(long = "match", value_enum, default_value_t = MatchArg::TaxonomyFirst)]
        match_strategy: MatchArg,
    },

    /// Sign in with an allow-listed account
    Login { email: String, password: String },

    /// Create an account
    Register {
        first_name: String,
        last_name: String,
        email: String,
        password: String,
    },

    /// Sign out
    Logout,

    /// Show the signed-in user
    Whoami,

    /// Search the team roster
    Team {
        /// Matches name, role or department
        #[arg(long, default_value = "")]
        search: String,
        #[arg(long, value_enum, default_value_t = Format::Table)]
        format: Format,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchArg {
    Substring,
    Bidirectional,
    TaxonomyFirst,
}

impl From<MatchArg> for MatchStrategy {
    fn from(arg: MatchArg) -> Self {
        match arg {
            MatchArg::Substring => MatchStrategy::Substring,
            MatchArg::Bidirectional => MatchStrategy::Bidirectional,
            MatchArg::TaxonomyFirst => MatchStrategy::TaxonomyFirst,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Table,
    Csv,
    Json,
}

fn evaluate(inventory: &Path, catalog: &Path, department: Option<&str>, strategy: MatchArg) -> Result<Vec<GapRecord>> {
    let inventory = input::load_inventory(inventory)?;
    let catalog = input::load_catalog(catalog)?;
    Ok(GapEngine::new()
        .with_match_strategy(strategy.into())
        .evaluate(&inventory, &catalog, department))
}

fn write_gap_table(out: &mut impl Write, records: &[GapRecord]) -> Result<()> {
    writeln!(
        out,
        "{:<24} {:<9} {:<13} {:<13} {:>5} {:>9}  {}",
        "SKILL", "PRIORITY", "REQUIRED", "CURRENT", "GAP", "AFFECTED", "TRAINING"
    )?;
    for (record, row) in records.iter().zip(to_table(records)) {
        writeln!(
            out,
            "{:<24} {:<9} {:<13} {:<13} {:>5} {:>9}  {}",
            row.skill,
            row.priority,
            record.required_level.title(),
            record.current_level.title(),
            row.gap_percentage,
            row.affected_headcount,
            row.recommended_training
        )?;
    }

    let summary = GapSummary::from_records(records);
    writeln!(
        out,
        "\n{} gaps: {} critical, {} high, {} medium, {} low; average {:.1}%, {} employees affected",
        summary.records,
        summary.critical,
        summary.high,
        summary.medium,
        summary.low,
        summary.average_gap,
        summary.total_affected
    )?;
    Ok(())
}

fn write_suggestion_table(out: &mut impl Write, suggestions: &[GapSuggestion]) -> Result<()> {
    if suggestions.is_empty() {
        writeln!(out, "No open gaps")?;
    }
    for s in suggestions {
        writeln!(out, "{:<9} {:>4}%  {}", s.priority.as_str(), s.gap_percentage, s.rationale)?;
    }
    Ok(())
}

/// Execute `cli`, writing command output to `out`.
pub async fn run(cli: Cli, out: &mut impl Write) -> Result<()> {
    let config = RuntimeConfig::default().with_data_dir(&cli.data_dir);

    match cli.command {
        Command::Gaps {
            inventory,
            catalog,
            department,
            match_strategy,
            format,
            sorted,
            suggest,
        } => {
            let mut records = evaluate(&inventory, &catalog, department.as_deref(), match_strategy)?;
            if suggest {
                let suggestions = generate_all_suggestions(&records);
                match format {
                    Format::Table => write_suggestion_table(out, &suggestions)?,
                    Format::Csv => write!(out, "{}", suggestions_to_csv(&suggestions))?,
                    Format::Json => writeln!(out, "{}", serde_json::to_string_pretty(&suggestions)?)?,
                }
                return Ok(());
            }
            if sorted {
                records = by_severity(&records);
            }
            match format {
                Format::Table => write_gap_table(out, &records)?,
                Format::Csv => write!(out, "{}", gaps_to_csv(&records))?,
                Format::Json => writeln!(out, "{}", serde_json::to_string_pretty(&records)?)?,
            }
        }

        Command::Plan {
            inventory,
            catalog,
            skill,
            match_strategy,
        } => {
            let records = evaluate(&inventory, &catalog, None, match_strategy)?;
            let gap = records
                .iter()
                .find(|r| r.skill_name.eq_ignore_ascii_case(&skill))
                .ok_or_else(|| AppError::UnknownGap(skill.clone()))?;
            let plan = bridge::draft_plan(gap, TrainingId::new(), Utc::now().date_naive(), &PlanTemplate::default());
            writeln!(out, "{}", serde_json::to_string_pretty(&plan)?)?;
        }

        Command::Login { email, password } => {
            let mut session = Session::open(config)?;
            let user = session.login(&email, &password).await?;
            writeln!(out, "Signed in as {} <{}>", user.name, user.email)?;
        }

        Command::Register {
            first_name,
            last_name,
            email,
            password,
        } => {
            let mut session = Session::open(config)?;
            let form = Registration {
                first_name,
                last_name,
                email,
                password,
            };
            let user = session.register(form).await?;
            writeln!(out, "Registered {} <{}>", user.name, user.email)?;
        }

        Command::Logout => {
            let mut session = Session::open(config)?;
            session.logout()?;
            writeln!(out, "Signed out")?;
        }

        Command::Whoami => {
            let mut session = Session::open(config)?;
            match session.restore()? {
                Some(user) => {
                    let stats = session.stats(Utc::now().date_naive());
                    writeln!(out, "{} <{}> ({:?})", user.name, user.email, user.role)?;
                    writeln!(
                        out,
                        "{} skills ({} verified), {} active certifications, {} critical gaps",
                        stats.total_skills, stats.verified_skills, stats.active_certifications, stats.critical_gaps
                    )?;
                }
                None => writeln!(out, "Not signed in")?,
            }
        }

        Command::Team { search, format } => {
            let roster = fixtures::team_members();
            let members = team::search(&roster, &search);
            match format {
                Format::Csv => write!(out, "{}", team_to_csv(&members))?,
                Format::Json => writeln!(out, "{}", serde_json::to_string_pretty(&members)?)?,
                Format::Table => {
                    for m in &members {
                        writeln!(
                            out,
                            "{:<18} {:<18} {:<12} {:>3} skills {:>2} certs  {:?}",
                            m.name, m.role, m.department, m.skills_count, m.certifications_count, m.status
                        )?;
                    }
                }
            }
        }
    }

    Ok(())
}
