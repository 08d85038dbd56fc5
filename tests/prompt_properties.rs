//! Property-based checks for the master-prompt builder.

use proptest::prelude::*;
use proptest::sample::subsequence;

use vibecoder::domain::master_prompt;
use vibecoder::{GenerationSettings, TechStackOption};

fn settings_strategy() -> impl Strategy<Value = GenerationSettings> {
    (
        any::<bool>(),
        subsequence(TechStackOption::ALL.to_vec(), 0..=TechStackOption::ALL.len()),
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(
            |(
                include_tech_stack,
                selected_stack,
                strict_mode,
                add_visuals,
                add_error_handling,
                multi_agent,
                testing,
            )| GenerationSettings {
                include_tech_stack,
                selected_stack,
                strict_mode,
                add_visuals,
                add_error_handling,
                multi_agent,
                testing,
            },
        )
}

// Ideas that stay non-empty after trimming.
fn idea_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9 ]{0,30}"
}

proptest! {
    #[test]
    fn build_is_deterministic(idea in idea_strategy(), settings in settings_strategy()) {
        prop_assert_eq!(
            master_prompt::build(&idea, &settings),
            master_prompt::build(&idea, &settings)
        );
    }

    #[test]
    fn raw_idea_is_embedded_verbatim(idea in idea_strategy(), settings in settings_strategy()) {
        let prompt = master_prompt::build(&idea, &settings);
        prop_assert!(
            prompt.contains(&format!(r#"User's Raw Idea: "{}""#, idea)),
            "raw idea not embedded verbatim"
        );
    }

    #[test]
    fn tech_stack_section_gates_on_its_flag(
        idea in idea_strategy(),
        settings in settings_strategy(),
    ) {
        let prompt = master_prompt::build(&idea, &settings);

        if settings.include_tech_stack {
            prop_assert!(prompt.contains("Required Tech Stack:"));
            for option in &settings.selected_stack {
                prop_assert!(prompt.contains(option.label()));
            }
        } else {
            prop_assert!(!prompt.contains("Required Tech Stack:"));
        }
    }

    #[test]
    fn multi_agent_language_gates_on_its_flag(
        idea in idea_strategy(),
        settings in settings_strategy(),
    ) {
        let prompt = master_prompt::build(&idea, &settings);
        prop_assert_eq!(prompt.contains("Multi-Agent System (MAS)"), settings.multi_agent);
    }

    #[test]
    fn quality_directives_gate_independently(
        idea in idea_strategy(),
        settings in settings_strategy(),
    ) {
        let prompt = master_prompt::build(&idea, &settings);
        prop_assert_eq!(prompt.contains("Enforce strict TypeScript"), settings.strict_mode);
        prop_assert_eq!(prompt.contains("Vitest"), settings.testing);
    }

    #[test]
    fn whitespace_ideas_build_nothing(settings in settings_strategy()) {
        prop_assert_eq!(master_prompt::build("", &settings), "");
        prop_assert_eq!(master_prompt::build(" \t\n ", &settings), "");
    }

    #[test]
    fn error_handling_flag_never_changes_the_prompt(
        idea in idea_strategy(),
        settings in settings_strategy(),
    ) {
        let with_flag = GenerationSettings { add_error_handling: true, ..settings.clone() };
        let without_flag = GenerationSettings { add_error_handling: false, ..settings };

        prop_assert_eq!(
            master_prompt::build(&idea, &with_flag),
            master_prompt::build(&idea, &without_flag)
        );
    }
}
