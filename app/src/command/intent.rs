//! Intent view: turn a stated goal into a templated plan.

use onebrain_core::LlmProvider;
use tracing::info;

use super::init_components;

/// In-prompt catalogue the planner chooses from.
const PLAN_TEMPLATE: &str = "Available projects:
- PRJ-001: Quantum Supply Chain – Phase 2 (Elena Vasquez / DEV-001)
- PRJ-002: Carbon Ledger (Jamal Khalid / DEV-002)
- PRJ-003: Dynamic Routing (Liam Chen / DEV-003)
- PRJ-004: Supplier Risk (Elena Vasquez / DEV-001)

Goal: {goal}

Generate markdown:
- Likely project
- 4–6 numbered tasks
- Suggested owner (use real names)
- Deadline/urgency
- Blockers";

/// Input parameters for the Intent command strategy.
#[derive(Debug, Clone)]
pub struct IntentInput {
    /// The goal or outcome to plan for
    pub goal: String,
}

/// Strategy for executing the Intent command.
#[derive(Debug, Clone, Copy)]
pub struct IntentStrategy;

impl super::CommandStrategy for IntentStrategy {
    type Input = IntentInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let goal = input.goal.trim();
        if goal.is_empty() {
            println!("Describe your goal first.");
            return Ok(());
        }

        let common = init_components()?;
        let prompt = PLAN_TEMPLATE.replace("{goal}", goal);

        match common.provider.complete(&prompt).await {
            Ok(plan) => {
                println!("Generated Plan");
                println!();
                println!("{plan}");
            }
            Err(e) => {
                info!("Plan generation failed: {e}");
                println!("No plan available");
            }
        }
        Ok(())
    }
}
