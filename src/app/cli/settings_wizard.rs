//! Interactive settings review.
//!
//! Walks every generation setting with dialoguer prompts, seeded from an
//! existing snapshot. Each step builds toward a new immutable settings value;
//! cancelling at any point (Esc or interrupt) abandons the whole review.

use dialoguer::{Confirm, MultiSelect};

use crate::domain::{AppError, GenerationSettings, TechStackOption};

/// Review `initial` interactively. Returns `None` when the user cancels.
pub(super) fn review(
    initial: &GenerationSettings,
) -> Result<Option<GenerationSettings>, AppError> {
    let Some(include_tech_stack) = confirm("Enforce a tech stack?", initial.include_tech_stack)?
    else {
        return Ok(None);
    };

    let selected_stack = if include_tech_stack {
        match select_stack(&initial.selected_stack)? {
            Some(stack) => stack,
            None => return Ok(None),
        }
    } else {
        initial.selected_stack.clone()
    };

    let Some(add_visuals) = confirm("Vibe & aesthetics?", initial.add_visuals)? else {
        return Ok(None);
    };
    let Some(strict_mode) = confirm("Strict type safety?", initial.strict_mode)? else {
        return Ok(None);
    };
    let Some(add_error_handling) = confirm("Error handling?", initial.add_error_handling)? else {
        return Ok(None);
    };
    let Some(multi_agent) = confirm("Multi-agent architecture?", initial.multi_agent)? else {
        return Ok(None);
    };
    let Some(testing) = confirm("Comprehensive testing?", initial.testing)? else {
        return Ok(None);
    };

    Ok(Some(GenerationSettings {
        include_tech_stack,
        selected_stack,
        strict_mode,
        add_visuals,
        add_error_handling,
        multi_agent,
        testing,
    }))
}

fn confirm(prompt: &str, default: bool) -> Result<Option<bool>, AppError> {
    Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact_opt()
        .map_err(|err| AppError::Validation(format!("Failed to read selection: {}", err)))
}

fn select_stack(current: &[TechStackOption]) -> Result<Option<Vec<TechStackOption>>, AppError> {
    let items: Vec<&str> = TechStackOption::ALL.iter().map(|option| option.label()).collect();
    let defaults: Vec<bool> =
        TechStackOption::ALL.iter().map(|option| current.contains(option)).collect();

    let selection = MultiSelect::new()
        .with_prompt("Active stack modules")
        .items(&items)
        .defaults(&defaults)
        .interact_opt()
        .map_err(|err| AppError::Validation(format!("Failed to select stack: {}", err)))?;

    Ok(selection.map(|indices| indices.into_iter().map(|i| TechStackOption::ALL[i]).collect()))
}
