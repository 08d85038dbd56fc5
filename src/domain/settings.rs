use super::TechStackOption;

/// Preference snapshot driving master-prompt generation.
///
/// A settings value is immutable once constructed. Toggle operations return
/// a new snapshot instead of mutating in place, so a generation request
/// always sees a complete, consistent value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationSettings {
    /// Include the Tech Stack Constraints section.
    pub include_tech_stack: bool,
    /// Stack options to mandate, in display order, duplicate-free.
    pub selected_stack: Vec<TechStackOption>,
    /// Demand strict typing and defensive programming.
    pub strict_mode: bool,
    /// Include the Visual Guidelines section.
    pub add_visuals: bool,
    /// Declared but not yet consumed by the prompt template; kept so
    /// settings round-trip losslessly until product defines its wording.
    pub add_error_handling: bool,
    /// Demand a multi-agent architecture.
    pub multi_agent: bool,
    /// Demand a comprehensive testing strategy.
    pub testing: bool,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            include_tech_stack: true,
            selected_stack: vec![
                TechStackOption::React18,
                TechStackOption::TypeScript,
                TechStackOption::Tailwind,
                TechStackOption::Lucide,
            ],
            strict_mode: true,
            add_visuals: true,
            add_error_handling: true,
            multi_agent: false,
            testing: false,
        }
    }
}

impl GenerationSettings {
    /// Return a snapshot with `option` XOR-toggled in the selected stack.
    ///
    /// Removes the option if present, appends it otherwise. Display order
    /// of the remaining options is preserved.
    pub fn with_stack_toggled(&self, option: TechStackOption) -> Self {
        let mut next = self.clone();
        if let Some(index) = next.selected_stack.iter().position(|o| *o == option) {
            next.selected_stack.remove(index);
        } else {
            next.selected_stack.push(option);
        }
        next
    }

    /// Return a snapshot with the selected stack replaced wholesale.
    ///
    /// Duplicates in `stack` are dropped, keeping the first occurrence.
    pub fn with_stack(&self, stack: Vec<TechStackOption>) -> Self {
        let mut seen = Vec::with_capacity(stack.len());
        for option in stack {
            if !seen.contains(&option) {
                seen.push(option);
            }
        }
        Self { selected_stack: seen, ..self.clone() }
    }
}
