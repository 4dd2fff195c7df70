use tracing::info;

use super::{ApiTester, RunReport};

const RULE_WIDTH: usize = 50;

impl ApiTester {
    /// Run every scenario in its fixed order and print the summary.
    pub async fn run_all_tests(&mut self) -> RunReport {
        println!("🚀 Starting HajaBot API Tests");
        println!("🔗 Base URL: {}", self.context.base_url());
        println!("{}", "=".repeat(RULE_WIDTH));

        self.test_health_check().await;

        self.test_create_lead_via_form().await;
        self.test_get_leads().await;
        self.test_get_leads_with_filter().await;

        self.test_webhook_message().await;
        self.test_send_manual_message().await;

        if self.context.created_lead_id().is_some() {
            self.test_update_lead_status().await;
            self.test_get_lead_messages().await;
        } else {
            info!("no lead created; skipping lead update checks");
        }

        let report = self.context.report();
        print_summary(&report);
        info!(
            attempted = report.attempted,
            passed = report.passed,
            "run finished"
        );
        report
    }
}

fn print_summary(report: &RunReport) {
    println!("\n{}", "=".repeat(RULE_WIDTH));
    println!("📊 Tests passed: {}/{}", report.passed, report.attempted);
    match report.success_rate() {
        Some(rate) => println!("📊 Success rate: {rate:.1}%"),
        None => println!("📊 Success rate: n/a"),
    }
}
