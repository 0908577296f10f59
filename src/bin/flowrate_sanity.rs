//! Utility to verify the unit table identities
//! Usage: cargo run --bin flowrate_sanity

use flowrate::build_info::BuildInfo;
use flowrate::tools::status::sanity_check;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", BuildInfo::current().summary());

    let report = sanity_check();
    for check in &report.checks {
        println!(
            "  {:<6} {} {} -> {} {} (expected {})",
            if check.passed { "ok" } else { "FAILED" },
            check.input,
            check.from,
            check.actual,
            check.to,
            check.expected
        );
    }

    if !report.all_passed {
        let failed = report.checks.iter().filter(|c| !c.passed).count();
        return Err(format!("{} of {} checks failed", failed, report.checks.len()).into());
    }

    println!("All {} checks passed", report.checks.len());
    Ok(())
}
