//! Health check command for diagnosing publish problems
//!
//! Unlike `publish`, which stops at the first failed precondition,
//! doctor runs every check and reports all of them.

use std::path::PathBuf;

use crate::checks::{Check, CheckContext, Severity, create_default_runner};
use crate::core::constants;
use crate::core::error::{ExitCode, ShipError, ShipResult};

/// Run the doctor command to diagnose issues
pub fn run_doctor(thorough: bool, json: bool) -> ShipResult<()> {
  let ctx = CheckContext {
    artifact_path: PathBuf::from(constants::ARTIFACT_PATH),
    thorough,
  };

  let runner = create_default_runner();
  let results = runner.run_all(&ctx)?;

  // The exit code reflects the results in both output modes
  let has_errors = results.iter().any(|r| !r.passed && r.severity == Severity::Error);
  let has_warnings = results.iter().any(|r| !r.passed && r.severity == Severity::Warning);

  if json {
    // JSON output for CI/automation
    let json_output = serde_json::to_string_pretty(&results)
      .map_err(|e| ShipError::message(format!("Failed to serialize JSON: {}", e)))?;
    println!("{}", json_output);
  } else {
    // Human-readable output
    println!("🏥 Running release health checks...\n");

    println!("📋 Registered checks:");
    for check in runner.checks() {
      println!("   • {}: {}", check.name(), check.description());
    }
    println!();

    for result in &results {
      let icon = if result.passed { "✅" } else { "❌" };
      println!("{} {}: {}", icon, result.check_name, result.message);

      if !result.passed {
        if let Some(ref suggestion) = result.suggestion {
          println!("   💡 Fix: {}", suggestion);
        }
      }
      println!();
    }

    let passed_count = results.iter().filter(|r| r.passed).count();
    let total_count = results.len();

    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("Summary: {}/{} checks passed", passed_count, total_count);

    if has_errors {
      println!("\n⚠️  Fix the errors above before publishing.");
    } else if has_warnings {
      println!("\n⚠️  Some warnings found. Consider addressing them.");
    } else {
      println!("\n✨ All checks passed! Ready to publish.");
    }
  }

  if has_errors {
    std::process::exit(ExitCode::Validation.as_i32());
  }

  Ok(())
}
