use crate::app::api::{DeployReport, ProvisionReport};
use crate::domain::{Outcome, StepStatus};

pub(super) fn provision(outcome: &Outcome<ProvisionReport>) {
    let report = match outcome {
        Outcome::Failed { reason } => {
            println!("❌ {}", reason);
            return;
        }
        Outcome::Success(report) | Outcome::PartialSuccess { value: report, .. } => report,
    };

    let app = &report.app;
    match &report.repository {
        Some(repo) => println!("Review app {} for {}@{}", app.name, repo.slug(), app.branch),
        None => println!("Review app {} for branch {}", app.name, app.branch),
    }
    for record in &report.steps {
        match &record.status {
            StepStatus::Succeeded => println!("  ✅ {}", record.step),
            StepStatus::Warned(message) => println!("  ⚠️  {}", message),
        }
    }
    println!("✅ Review app ready: {} ({})", app.name, app.web_url);
    if let Some(record) = &report.dns_record {
        println!("  URL: https://{}", record.name);
    }
}

pub(super) fn deploy(outcome: &Outcome<DeployReport>) {
    match outcome.value() {
        Some(report) => {
            if report.remote_added {
                println!("  ✅ Git remote added: {}", report.target.name);
            }
            println!("✅ Deployed {} to {}", report.target.branch, report.target.name);
        }
        None => {
            if let Outcome::Failed { reason } = outcome {
                println!("❌ {}", reason);
            }
        }
    }
}
