//! Console output formatter for chat responses

use colored::Colorize;
use orchestrator_domain::{ChatResponse, OrchestrationResult, OutputFormat};
use serde_json::Value;

/// Formats chat responses for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format according to the requested output format
    pub fn render(response: &ChatResponse, format: OutputFormat) -> String {
        match format {
            OutputFormat::Full => Self::format(response),
            OutputFormat::Synthesis => Self::format_synthesis_only(response),
            OutputFormat::Json => Self::format_json(response),
        }
    }

    /// Format every agent contribution followed by the synthesis
    pub fn format(response: &ChatResponse) -> String {
        match response {
            ChatResponse::Orchestrated(result) => Self::format_result(result),
            ChatResponse::Delegated(value) => Self::format_document(value),
            ChatResponse::Failed(_) => Self::format_error(response),
        }
    }

    /// Format as JSON, exactly the HTTP response body
    pub fn format_json(response: &ChatResponse) -> String {
        serde_json::to_string_pretty(response).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format synthesis only (concise output)
    pub fn format_synthesis_only(response: &ChatResponse) -> String {
        let synthesis = match response {
            ChatResponse::Orchestrated(result) => Some(result.synthesis.as_str()),
            ChatResponse::Delegated(value) if response.is_success() => {
                value.get("synthesis").and_then(Value::as_str)
            }
            _ => return Self::format_error(response),
        };

        let mut output = String::new();
        output.push_str(&format!("{}\n\n", "=== Synthesis ===".cyan().bold()));
        output.push_str(synthesis.unwrap_or("(no synthesis in response)"));
        output.push('\n');
        output
    }

    fn format_result(result: &OrchestrationResult) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Multi-Agent Analysis"));
        output.push('\n');

        output.push_str(&format!(
            "{} {}\n",
            "Question:".cyan().bold(),
            result.question
        ));
        output.push_str(&format!(
            "{} {} ({:.1}s)\n",
            "Mode:".cyan().bold(),
            result.metadata.mode,
            result.metadata.total_duration
        ));

        output.push_str(&Self::section_header("Agent Responses"));
        for (role, agent) in &result.responses {
            if agent.success {
                output.push_str(&format!(
                    "\n{}\n{}\n",
                    format!("── {} ({}) ──", role.label(), role).yellow().bold(),
                    agent.content
                ));
            } else {
                output.push_str(&format!(
                    "\n{}\nError: {}\n",
                    format!("── {} ({}) ──", role.label(), role).red().bold(),
                    agent.error.as_deref().unwrap_or("Unknown")
                ));
            }
        }

        output.push_str(&Self::section_header("Synthesis"));
        output.push_str(&format!("\n{}\n", result.synthesis));
        output.push_str(&Self::footer());
        output
    }

    /// Best-effort rendering of a delegate document with the usual fields
    fn format_document(value: &Value) -> String {
        let mut output = String::new();
        output.push_str(&Self::header("Multi-Agent Analysis"));
        output.push('\n');

        if let Some(question) = value.get("question").and_then(Value::as_str) {
            output.push_str(&format!("{} {}\n", "Question:".cyan().bold(), question));
        }

        if let Some(responses) = value.get("responses").and_then(Value::as_object) {
            output.push_str(&Self::section_header("Agent Responses"));
            for (agent, body) in responses {
                let content = body.get("content").and_then(Value::as_str).unwrap_or("");
                output.push_str(&format!(
                    "\n{}\n{}\n",
                    format!("── {} ──", agent).yellow().bold(),
                    content
                ));
            }
        }

        match value.get("synthesis").and_then(Value::as_str) {
            Some(synthesis) => {
                output.push_str(&Self::section_header("Synthesis"));
                output.push_str(&format!("\n{}\n", synthesis));
            }
            None => {
                output.push_str(&Self::section_header("Raw Response"));
                output.push_str(
                    &serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string()),
                );
                output.push('\n');
            }
        }

        output.push_str(&Self::footer());
        output
    }

    fn format_error(response: &ChatResponse) -> String {
        format!(
            "{} {}\n",
            "Error:".red().bold(),
            response.error_message().unwrap_or("Unknown")
        )
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}
