use crate::support::{load_manifest_or_exit, render_json_or_exit, report_path};
use vaultcheck_kernel::{CheckRunner, CheckStatus, FindingKind, FsOracle};
use vaultcheck_suite::{Report, generate_report, run_suite, write_report};

pub struct Args {
    pub root: String,
    pub manifest: Option<String>,
    pub report: Option<String>,
    pub json: bool,
}

pub fn run(args: Args) {
    let manifest = load_manifest_or_exit(args.manifest.as_deref());
    let oracle = FsOracle::new(&args.root);
    tracing::info!(
        root = %args.root,
        manifest = args.manifest.as_deref().unwrap_or("builtin"),
        "running EigenVault conformance suite"
    );

    let runner = run_suite(&manifest, &oracle);
    let report = generate_report(&runner, &manifest, &oracle);

    let out_path = report_path(&args.root, args.report.as_deref());
    write_report(&report, &out_path).unwrap_or_else(|err| {
        eprintln!("error: {err}");
        std::process::exit(2);
    });

    if args.json {
        println!("{}", render_json_or_exit(&report, "report"));
    } else {
        print_human_summary(&runner, &report);
        println!();
        println!("  Detailed report saved to: {}", out_path.display());
    }

    std::process::exit(report.exit_code());
}

fn print_human_summary(runner: &CheckRunner, report: &Report) {
    println!("vaultcheck run");
    println!("  Checks:");
    for (result, findings) in runner.outcomes() {
        let marker = match result.status {
            CheckStatus::Passed => "PASSED",
            CheckStatus::Failed => "FAILED",
            CheckStatus::Error => "ERROR",
        };
        println!("    - {}: {marker}", result.name);
        if result.status == CheckStatus::Error {
            println!("        fault: {}", result.details);
        }
        for finding in findings.iter() {
            match finding.kind {
                FindingKind::Found => {}
                FindingKind::Missing => {
                    println!("        missing {}: {}", finding.subject, finding.message)
                }
                FindingKind::Warning => {
                    println!("        warning {}: {}", finding.subject, finding.message)
                }
            }
        }
    }

    let readiness = &report.production_readiness;
    println!("  Production Readiness:");
    for (component, ready) in readiness.assessments.entries() {
        println!(
            "    - {component}: {}",
            if ready { "ready" } else { "not ready" }
        );
    }

    println!("  Tests Run: {}", report.summary.tests_run);
    println!("  Tests Passed: {}", report.summary.tests_passed);
    println!("  Success Rate: {:.1}%", report.summary.success_rate);
    println!(
        "  Readiness: {}/{} ({:.1}%)",
        readiness.score, readiness.max_score, readiness.percentage
    );
    println!("  Recommendation: {}", readiness.recommendation);
}
