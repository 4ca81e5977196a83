//! Ritualgate CLI
//!
//! Usage:
//!   ritualgate --file ceremony.grc              # Validate a .grc document
//!   ritualgate --text "ritual text here"        # Validate raw text
//!   cat ceremony.grc | ritualgate               # Validate stdin
//!   ritualgate --file ceremony.grc --json       # JSON record output

use clap::Parser;
use colored::Colorize;
use std::io::Read;

use ritualgate::core::{parse_grc, save_record, seal_record, Validator};
use ritualgate::types::{ValidationResult, Verdict};
use ritualgate::VERSION;

#[derive(Parser, Debug)]
#[command(
    name = "ritualgate",
    version = VERSION,
    about = "Validate ritual documents against ESEP, CEDA and narrative forensics gates",
    long_about = "Ritualgate scores a ritual document on three independent axes:\n\n  \
                  ESEP       ethical/spiritual balance (lower is better, gate <= 0.7)\n  \
                  CEDA       cultural references (gate >= 2 distinct references)\n  \
                  NARRATIVE  polarization/bias/harmony/facts (higher is better, gate >= 0.6)\n\n\
                  All three gates must pass for approval. Documents are read as\n\
                  .grc (a '#' title line, optional 'bioregion:' header, '##'\n\
                  sections) unless --raw is given."
)]
struct Args {
    /// Text to validate directly (skips .grc parsing)
    #[arg(short, long)]
    text: Option<String>,

    /// Path to a .grc document
    #[arg(short, long)]
    file: Option<String>,

    /// Bioregion id; overrides the document header
    #[arg(short, long)]
    bioregion: Option<String>,

    /// Treat file/stdin input as raw text, not .grc
    #[arg(long)]
    raw: bool,

    /// Output the sealed record as JSON
    #[arg(long)]
    json: bool,

    /// Show per-analyzer score breakdown
    #[arg(long)]
    verbose: bool,

    /// Disable colors in output
    #[arg(long)]
    no_color: bool,

    /// Directory for sealed validation records
    #[arg(long, default_value = "./records")]
    record_dir: String,

    /// Disable record saving
    #[arg(long)]
    no_record: bool,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    if args.no_color {
        colored::control::set_override(false);
    }

    let (body, bioregion) = match load_input(&args) {
        Ok(loaded) => loaded,
        Err(message) => {
            eprintln!("{} {}", "error:".red().bold(), message);
            std::process::exit(2);
        }
    };

    let validator = Validator::new();
    let result = validator.validate_concurrent(&body, &bioregion).await;
    let record = seal_record(result.clone(), &body);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&record).unwrap());
    } else {
        print_summary(&result, &args);
    }

    if !args.no_record {
        match save_record(&record, &args.record_dir) {
            Ok(path) => {
                if !args.json {
                    println!("{}", format!("record saved: {}", path).dimmed());
                }
            }
            Err(reason) => {
                eprintln!("{} record not saved: {}", "warning:".yellow(), reason);
            }
        }
    }

    if !result.is_approved {
        std::process::exit(1);
    }
}

/// Resolve input text and bioregion id from flags, file, or stdin
fn load_input(args: &Args) -> Result<(String, String), String> {
    let fallback_bioregion = || {
        args.bioregion
            .clone()
            .unwrap_or_else(|| "unspecified".to_string())
    };

    if let Some(ref text) = args.text {
        return Ok((text.clone(), fallback_bioregion()));
    }

    let raw = match args.file {
        Some(ref path) => {
            std::fs::read_to_string(path).map_err(|e| format!("cannot read {}: {}", path, e))?
        }
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .map_err(|e| format!("cannot read stdin: {}", e))?;
            buffer
        }
    };

    if args.raw {
        return Ok((raw, fallback_bioregion()));
    }

    let document = parse_grc(&raw).map_err(|reason| reason.to_string())?;
    let bioregion = match args.bioregion {
        Some(ref id) => id.clone(),
        None if !document.bioregion.is_empty() => document.bioregion.clone(),
        None => "unspecified".to_string(),
    };

    Ok((document.body, bioregion))
}

/// Print the verdict line, feedback, and (in verbose mode) the breakdown box
fn print_summary(result: &ValidationResult, args: &Args) {
    let verdict = result.verdict();
    let verdict_str = match verdict {
        Verdict::Approved => format!("{}", verdict).green().bold(),
        Verdict::Rejected => format!("{}", verdict).red().bold(),
    };

    println!(
        "{} [{}] esep={:.3} | refs={} | narrative={:.3}",
        verdict_str, result.bioregion_id, result.esep_score, result.ceda_reference_count,
        result.narrative_score,
    );

    if verdict == Verdict::Rejected {
        println!(
            "{}",
            format!("failed gates: {}", result.failed_gates().join(", ")).red()
        );
    }

    if args.verbose {
        print_breakdown(result);
    }

    if !result.feedback.is_empty() {
        println!();
        for line in &result.feedback {
            println!("  - {}", line);
        }
    }

    if args.verbose && !result.issues.is_empty() {
        println!();
        for issue in &result.issues {
            println!(
                "  {}{}{} [{}] {}",
                issue.severity.color_code(),
                issue.severity,
                ritualgate::types::Severity::color_reset(),
                issue.category,
                issue.description
            );
            if !issue.excerpt.is_empty() {
                println!("      \"{}\"", issue.excerpt);
            }
        }
    }
}

/// Print per-analyzer score breakdown
fn print_breakdown(result: &ValidationResult) {
    println!("┌─────────────────────────────────────────┐");
    println!("│ ESEP (lower is better)                  │");
    println!("│   score:      {:.4}                     │", result.esep.score);
    println!("│   ethical:    {:.4}                     │", result.esep.ethical_score);
    println!("│   spiritual:  {:.4}                     │", result.esep.spiritual_score);
    println!("│   negative:   {:.4}                     │", result.esep.negative_score);
    println!("│   balance:    {:.4}                     │", result.esep.balance_score);
    println!("├─────────────────────────────────────────┤");
    println!("│ CEDA                                    │");
    println!("│   references: {}                        ", result.ceda.reference_count);
    println!("│   diversity:  {:.4}                     │", result.ceda.diversity);
    println!("│   authentic:  {:.4}                     │", result.ceda.authenticity);
    println!("├─────────────────────────────────────────┤");
    println!("│ NARRATIVE (higher is better)            │");
    println!("│   overall:    {:.4}                     │", result.narrative.overall_score);
    println!("│   polarize:   {:.4}                     │", result.narrative.polarization_score);
    println!("│   bias:       {:.4}                     │", result.narrative.bias_score);
    println!("│   harmony:    {:.4}                     │", result.narrative.harmony_score);
    println!("│   facts:      {:.4}                     │", result.narrative.fact_score);
    println!("└─────────────────────────────────────────┘");
}
