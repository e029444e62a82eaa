//! Fixed-template synthesis used by simulated execution.

use crate::agent::{result::AgentResult, role::AgentRole};
use std::collections::BTreeMap;

/// Build the combined narrative for `question` from the agent results.
///
/// Deterministic: the same question and results always give the same text.
/// Agents are listed in pipeline order regardless of completion order.
pub fn compose_synthesis(question: &str, responses: &BTreeMap<AgentRole, AgentResult>) -> String {
    let mut out = String::from("# Integrated analysis\n\n");
    out.push_str(&format!(
        "Combined result of {} agent analyses.\n\n",
        responses.len()
    ));
    out.push_str(&format!(
        "Conclusions drawn for \"{}\":\n\n",
        question.trim()
    ));

    for (i, (role, result)) in responses.iter().enumerate() {
        let summary = if result.success {
            step_summary(*role)
        } else {
            "no contribution"
        };
        out.push_str(&format!(
            "{}. **{} ({})**: {}\n",
            i + 1,
            role.label(),
            role,
            summary
        ));
    }

    out.push_str(
        "\n**Final recommendation:**\n\
         Take a staged, systematic approach toward the goal.",
    );
    out
}

fn step_summary(role: AgentRole) -> &'static str {
    match role {
        AgentRole::FirstPassResearch => "identified the relevant data and trends",
        AgentRole::StrategyAnalysis => "derived SWOT analysis and key insights",
        AgentRole::ExecutionPlanning => "laid out a concrete action plan",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_success() -> BTreeMap<AgentRole, AgentResult> {
        AgentRole::ALL
            .into_iter()
            .map(|r| (r, AgentResult::success(r, "x")))
            .collect()
    }

    #[test]
    fn test_mentions_question_and_every_agent() {
        let text = compose_synthesis("Open a cafe?", &all_success());
        assert!(text.contains("\"Open a cafe?\""));
        for role in AgentRole::ALL {
            assert!(text.contains(role.as_str()));
        }
    }

    #[test]
    fn test_lists_agents_in_pipeline_order() {
        let text = compose_synthesis("q", &all_success());
        let research = text.find("first-pass-research").unwrap();
        let strategy = text.find("strategy-analysis").unwrap();
        let planning = text.find("execution-planning").unwrap();
        assert!(research < strategy && strategy < planning);
    }

    #[test]
    fn test_failed_agent_marked() {
        let mut responses = all_success();
        responses.insert(
            AgentRole::StrategyAnalysis,
            AgentResult::failure(AgentRole::StrategyAnalysis, "down"),
        );
        let text = compose_synthesis("q", &responses);
        assert!(text.contains("(strategy-analysis)**: no contribution"));
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(
            compose_synthesis("q", &all_success()),
            compose_synthesis("q", &all_success())
        );
    }
}
