//! Placeholder agent texts for simulated execution.
//!
//! These stand in for real model output during development, so the
//! response shape can be exercised end to end without credentials.

use super::role::AgentRole;

/// Fixed response text for `role`, with the question quoted where relevant.
pub fn canned_response(role: AgentRole, question: &str) -> String {
    match role {
        AgentRole::FirstPassResearch => format!(
            "[Research findings]\n\n\
             Collected background information on \"{question}\".\n\n\
             Based on related data and recent trends, this is a significant topic. \
             Interest in it is growing in the market, and experts offer a range of \
             perspectives on it."
        ),
        AgentRole::StrategyAnalysis => "[Strategy analysis]\n\n\
             Building on the research above, here is the strategic view.\n\n\
             **Key insights:**\n\
             1. There is a market opportunity\n\
             2. A competitive edge has to be secured\n\
             3. Risk management matters\n\n\
             **SWOT:**\n\
             - Strengths: room for an innovative approach\n\
             - Weaknesses: upfront investment required\n\
             - Opportunities: high growth potential\n\
             - Threats: must keep up with market shifts"
            .to_string(),
        AgentRole::ExecutionPlanning => "[Execution plan]\n\n\
             Based on the combined analysis, here is a plan of action.\n\n\
             **Phased plan:**\n\
             1. Phase 1 (months 1-2): lay the groundwork\n\
             2. Phase 2 (months 3-6): pilot\n\
             3. Phase 3 (months 6-12): scale out\n\n\
             **Risk management:**\n\
             - Legal review is mandatory\n\
             - Set a budget\n\
             - Put monitoring in place\n\n\
             **Recommendation:**\n\
             Proceed step by step to keep risk low."
            .to_string(),
    }
}
