use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand};
use frailty_engine::config::AppConfig;
use frailty_engine::error::AppError;
use frailty_engine::frailty::{
    ClinicalProfile, FactorCatalog, FrailtyEngine, RiskAssessment, SupplementaryRecord,
};
use frailty_engine::guidance::{evaluate_eligibility, EligibilityReport, GuidanceCatalog};
use frailty_engine::report::{generate_report, FrailtyReport};
use frailty_engine::telemetry;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(
    name = "frailty-engine",
    about = "Score medical frailty risk and match members to guidance from the command line",
    version
)]
struct Cli {
    /// Replace the built-in condition weights with a `condition,weight` CSV
    #[arg(long, global = true)]
    condition_catalog: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Score a clinical profile and print the assessment
    Assess(AssessArgs),
    /// Run the medical frailty exemption checklist
    Eligibility(AssessArgs),
    /// List guidance resources applicable to a member
    Guidance(GuidanceArgs),
    /// Build the member-facing assessment report
    Report(ReportArgs),
}

#[derive(Args, Debug)]
struct InputArgs {
    /// Clinical profile JSON document
    #[arg(long)]
    profile: PathBuf,
    /// Optional JSON array of supplementary health records
    #[arg(long)]
    records: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct AssessArgs {
    #[command(flatten)]
    input: InputArgs,
    /// Emit JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct GuidanceArgs {
    /// Clinical profile JSON document; without it only universal resources are listed
    #[arg(long)]
    profile: Option<PathBuf>,
    /// Optional JSON array of supplementary health records
    #[arg(long, requires = "profile")]
    records: Option<PathBuf>,
    /// Guidance catalog CSV (overrides APP_GUIDANCE_CATALOG)
    #[arg(long)]
    catalog: Option<PathBuf>,
    /// Only list resources in this category
    #[arg(long)]
    category: Option<String>,
    /// Emit JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct ReportArgs {
    #[command(flatten)]
    input: InputArgs,
    /// Report date (defaults to today)
    #[arg(long, value_parser = parse_date)]
    today: Option<NaiveDate>,
    /// Emit JSON instead of text
    #[arg(long)]
    json: bool,
}

fn main() {
    if let Err(err) = run_cli() {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

fn run_cli() -> Result<(), AppError> {
    let cli = Cli::parse();
    let mut config = AppConfig::load()?;
    if let Some(path) = cli.condition_catalog {
        config.catalogs.condition_catalog = Some(path);
    }

    telemetry::init(&config.telemetry)?;
    debug!(environment = ?config.environment, "configuration loaded");

    let catalog = match &config.catalogs.condition_catalog {
        Some(path) => FactorCatalog::from_path(path)?,
        None => FactorCatalog::standard(),
    };
    let engine = FrailtyEngine::new(catalog);

    let command = cli.command.name();
    match cli.command {
        Command::Assess(args) => run_assess(&engine, args)?,
        Command::Eligibility(args) => run_eligibility(&engine, args)?,
        Command::Guidance(mut args) => {
            if args.catalog.is_none() {
                args.catalog = config.catalogs.guidance_catalog.clone();
            }
            run_guidance(&engine, args)?
        }
        Command::Report(args) => run_report(&engine, args)?,
    }

    info!(command, "command completed");
    Ok(())
}

impl Command {
    fn name(&self) -> &'static str {
        match self {
            Command::Assess(_) => "assess",
            Command::Eligibility(_) => "eligibility",
            Command::Guidance(_) => "guidance",
            Command::Report(_) => "report",
        }
    }
}

fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

fn load_profile(path: &Path) -> Result<ClinicalProfile, AppError> {
    let profile: ClinicalProfile = serde_json::from_str(&fs::read_to_string(path)?)?;
    profile.validate()?;
    Ok(profile)
}

fn load_records(path: Option<&Path>) -> Result<Vec<SupplementaryRecord>, AppError> {
    match path {
        Some(path) => Ok(serde_json::from_str(&fs::read_to_string(path)?)?),
        None => Ok(Vec::new()),
    }
}

fn score_input(
    engine: &FrailtyEngine,
    profile: &Path,
    records: Option<&Path>,
) -> Result<(ClinicalProfile, RiskAssessment), AppError> {
    let profile = load_profile(profile)?;
    let records = load_records(records)?;
    let assessment = engine.score(&profile, &records);
    debug!(
        frailty_score = assessment.frailty_score,
        risk_level = assessment.risk_level.token(),
        records = records.len(),
        "profile assessed"
    );
    Ok((profile, assessment))
}

fn to_json<T: Serialize>(value: &T) -> Result<String, AppError> {
    Ok(serde_json::to_string_pretty(value)?)
}

fn print_json<T: Serialize>(value: &T) -> Result<(), AppError> {
    println!("{}", to_json(value)?);
    Ok(())
}

fn run_assess(engine: &FrailtyEngine, args: AssessArgs) -> Result<(), AppError> {
    let (_, assessment) = score_input(
        engine,
        &args.input.profile,
        args.input.records.as_deref(),
    )?;

    if args.json {
        return print_json(&assessment);
    }

    render_assessment(&assessment);
    Ok(())
}

fn run_eligibility(engine: &FrailtyEngine, args: AssessArgs) -> Result<(), AppError> {
    let (profile, assessment) = score_input(
        engine,
        &args.input.profile,
        args.input.records.as_deref(),
    )?;
    let eligibility = evaluate_eligibility(&assessment, &profile);

    if args.json {
        return print_json(&eligibility);
    }

    println!(
        "Risk level: {} ({:.3})",
        assessment.risk_level.label(),
        assessment.frailty_score
    );
    render_eligibility(&eligibility);
    Ok(())
}

fn run_guidance(engine: &FrailtyEngine, args: GuidanceArgs) -> Result<(), AppError> {
    let catalog = match &args.catalog {
        Some(path) => GuidanceCatalog::from_path(path)?,
        None => GuidanceCatalog::standard(),
    };

    let scored = match &args.profile {
        Some(path) => Some(score_input(engine, path, args.records.as_deref())?),
        None => None,
    };
    let latest = scored
        .as_ref()
        .map(|(profile, assessment)| (assessment, profile));
    let resources = catalog.personalized(latest, args.category.as_deref());

    if args.json {
        return print_json(&resources);
    }

    if scored.is_none() {
        println!("No profile supplied; listing universally applicable guidance only");
    }
    if resources.is_empty() {
        println!("Guidance: none applicable");
        return Ok(());
    }

    println!("Guidance");
    for resource in resources {
        println!(
            "- [{}] {} (priority {})",
            resource.category, resource.title, resource.priority
        );
        if let Some(description) = &resource.description {
            println!("    {description}");
        }
        if let Some(url) = &resource.resource_url {
            println!("    {url}");
        }
    }
    Ok(())
}

fn run_report(engine: &FrailtyEngine, args: ReportArgs) -> Result<(), AppError> {
    let (profile, assessment) = score_input(
        engine,
        &args.input.profile,
        args.input.records.as_deref(),
    )?;
    let today = args.today.unwrap_or_else(|| Local::now().date_naive());
    let report = generate_report(&profile, &assessment, today);

    if args.json {
        return print_json(&report);
    }

    render_report(&report);
    Ok(())
}

fn render_assessment(assessment: &RiskAssessment) {
    println!("Frailty assessment");
    println!(
        "Score: {:.3} ({} risk), confidence {:.2}",
        assessment.frailty_score,
        assessment.risk_level.label(),
        assessment.confidence_score
    );

    println!("\nContributing factors");
    for factor in &assessment.contributing_factors {
        println!(
            "- {} ({:.2}): {}",
            factor.factor, factor.impact, factor.description
        );
    }

    println!("\nInsights");
    for insight in &assessment.insights {
        println!("- {insight}");
    }

    if assessment.warning_flags.is_empty() {
        println!("\nWarnings: none");
    } else {
        println!("\nWarnings");
        for warning in &assessment.warning_flags {
            println!("- {warning}");
        }
    }
}

fn render_eligibility(eligibility: &EligibilityReport) {
    println!(
        "Exemption criteria met: {}/{}",
        eligibility.met_count, eligibility.total_criteria
    );
    for detail in &eligibility.details {
        println!("- {detail}");
    }
    if eligibility.qualifies {
        println!("Likely qualifies for a medical frailty exemption");
    } else {
        println!("Does not currently qualify for a medical frailty exemption");
    }
}

fn render_report(report: &FrailtyReport) {
    println!("{}", report.title);
    println!(
        "Generated {} (follow-up due {})",
        report.generated_on, report.follow_up_due
    );
    println!("\n{}", report.summary);

    if report.recommendations.is_empty() {
        println!("\nRecommendations: none");
    } else {
        println!("\nRecommendations");
        for recommendation in &report.recommendations {
            println!("- {recommendation}");
        }
    }

    println!("\nNext steps");
    for (index, step) in report.next_steps.iter().enumerate() {
        println!("{}. {step}", index + 1);
    }

    println!();
    render_eligibility(&report.eligibility);
}
