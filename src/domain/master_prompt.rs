//! Master-prompt assembly.
//!
//! Composes the fixed-structure instruction document sent to the model as a
//! system instruction. Assembly is pure string work: deterministic, no I/O,
//! and gated sections degrade to empty segments rather than placeholders.

use super::GenerationSettings;

const MULTI_AGENT_DIRECTIVE: &str = "Architect the application using a Multi-Agent System (MAS) \
     pattern. Design distinct roles (e.g., Coordinator, Executor, Validator) that communicate \
     through a structured state machine or message bus. Focus on agentic autonomy and \
     collaborative problem-solving within the app logic.";

const AESTHETICS_DIRECTIVE: &str = "Include rigorous requirements for modern UI/UX, \
     'vibe-aligned' aesthetics, responsiveness, and mobile-first design using Tailwind CSS. Use \
     high-quality icons and refined typography.";

const STRICTNESS_DIRECTIVE: &str = "Enforce strict TypeScript usage, no 'any' types, proper \
     error boundaries, and defensive programming patterns.";

const TESTING_DIRECTIVE: &str = "Include a comprehensive testing strategy. Mandate the use of \
     Vitest for unit/integration tests and provide a clear structure for E2E testing. Every core \
     utility and component should have a corresponding '.test.ts' or '.spec.tsx' file with \
     meaningful assertions.";

/// Build the master-prompt instruction document for a raw idea.
///
/// Returns an empty string when the idea is empty after trimming; callers
/// must not send an empty document to the model.
pub fn build(raw_idea: &str, settings: &GenerationSettings) -> String {
    if raw_idea.trim().is_empty() {
        return String::new();
    }

    format!(
        r#"You are a Senior Vibe Coding Architect and Lead Prompt Engineer.
Your goal is to take a vague or simple user idea and transmute it into a "Vibe Coding" Master Prompt.

A "Vibe Coding" Master Prompt is a highly detailed, technically precise instruction block that a user would paste into an AI coding assistant to get a perfect, one-shot application.

The output should be the PROMPT itself, written in the second person (addressing the AI assistant).

Structure the generated prompt with these sections:
1. **Role & Goal**: Tell the AI it is a world-class senior engineer.
2. **Core Functionality**: Expand the user's idea into concrete, high-value features.
3. **Architecture & Multi-Agent**: {multi_agent}
4. **Tech Stack Constraints**: {stack}
5. **Visual Guidelines**: {aesthetics}
6. **Code Quality & Testing**: {strictness} {testing}
7. **File Structure**: Mandate a clean, modular structure (e.g., components/, services/, agents/, tests/, types.ts).

Do not output markdown code blocks for the prompt itself unless it contains code examples for the AI to follow. The output should be ready to copy-paste directly.

User's Raw Idea: "{raw_idea}""#,
        multi_agent = multi_agent_fragment(settings),
        stack = stack_fragment(settings),
        aesthetics = aesthetics_fragment(settings),
        strictness = strictness_fragment(settings),
        testing = testing_fragment(settings),
        raw_idea = raw_idea,
    )
}

fn stack_fragment(settings: &GenerationSettings) -> String {
    if !settings.include_tech_stack {
        return String::new();
    }

    let labels: Vec<&str> = settings.selected_stack.iter().map(|option| option.label()).collect();
    format!("Required Tech Stack: {}.", labels.join(", "))
}

fn multi_agent_fragment(settings: &GenerationSettings) -> &'static str {
    if settings.multi_agent { MULTI_AGENT_DIRECTIVE } else { "" }
}

fn aesthetics_fragment(settings: &GenerationSettings) -> &'static str {
    if settings.add_visuals { AESTHETICS_DIRECTIVE } else { "" }
}

fn strictness_fragment(settings: &GenerationSettings) -> &'static str {
    if settings.strict_mode { STRICTNESS_DIRECTIVE } else { "" }
}

fn testing_fragment(settings: &GenerationSettings) -> &'static str {
    if settings.testing { TESTING_DIRECTIVE } else { "" }
}
