mod cli;

use clap::Parser;
use cli::{Cli, Commands};
use colored::Colorize;
use golinter_jsonschema::{config, keys, lint, output, rules};

/// Environment variable holding a `tracing` filter directive.
const LOG_ENV: &str = "GOLINTER_JSONSCHEMA_LOG";

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.quiet, cli.verbose);

    match cli.command {
        Commands::Lint {
            path,
            format,
            output: output_path,
            strict,
            fix,
            config: config_path,
        } => {
            if !path.exists() {
                eprintln!("Error: path does not exist: {}", path.display());
                std::process::exit(2);
            }

            let mut config = config::Config::load(config_path.as_deref()).unwrap_or_else(|e| {
                eprintln!("Error: {e}");
                std::process::exit(2);
            });

            if strict {
                config.strict.enabled = true;
            }

            let mut report = lint::run_lint(&path, &config);

            if fix {
                match lint::apply_fixes(&mut report) {
                    Ok(n) => tracing::info!(fixed = n, "applied suggested fixes"),
                    Err(e) => eprintln!("Error applying fixes: {e}"),
                }
            }

            let formatted = output::format_report(&report, &format);

            if let Some(out_path) = output_path {
                std::fs::write(&out_path, &formatted).unwrap_or_else(|e| {
                    eprintln!("Error writing output: {e}");
                    std::process::exit(2);
                });
                eprintln!("Output written to {}", out_path.display());
            } else {
                print!("{formatted}");
            }

            std::process::exit(if report.passed { 0 } else { 1 });
        }

        Commands::ListRules => {
            let all = rules::all_rules();
            println!("{}", "Rules".bold().underline());
            println!();

            for rule in &all {
                println!(
                    "  [{severity}] {id:<28} {message}",
                    severity = severity_label(rule.severity),
                    id = rule.id,
                    message = rule.message,
                );
            }

            println!();
            println!("  Total: {} rules", all.len());
        }

        Commands::Explain { rule_id } => match rules::find_rule(&rule_id) {
            Some(rule) => {
                println!("{}", rule.id.bold());
                println!();
                println!("  Analyzer:     {}", rule.analyzer);
                println!("  Severity:     {}", rule.severity);
                println!("  Description:  {}", rule.message);
                println!("  Remediation:  {}", rule.remediation);
                if rule.id == rules::nocommas::UNKNOWN_KEY {
                    println!();
                    println!("  Allowed keys: {}", keys::ALLOWED_KEYS.join(", "));
                }
            }
            None => {
                eprintln!("Unknown rule: {rule_id}");
                eprintln!("Use 'golinter-jsonschema list-rules' to see all available rules.");
                std::process::exit(2);
            }
        },
    }
}

fn severity_label(severity: &str) -> String {
    match severity {
        "error" => "ERROR".red().bold().to_string(),
        "warning" => " WARN".yellow().bold().to_string(),
        _ => severity.to_string(),
    }
}

fn init_tracing(quiet: bool, verbose: bool) {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    // Output goes to stdout, so logs must stay on stderr.
    if let Err(e) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
    {
        eprintln!("Warning: failed to initialize logging: {e}");
    }
}
