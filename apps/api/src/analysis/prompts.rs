// Resume analysis prompt catalog.
// All prompts for the analysis module are defined here. The four default
// categories are fixed; callers wanting a different set pass their own
// slice (or a single ad hoc prompt) to the orchestrator.

/// Key used for single custom-prompt analyses in the feedback map.
pub const CUSTOM_KEY: &str = "custom";

pub const STRUCTURE_PROMPT: &str = "\
You are an experienced resume reviewer. Assess whether the resume follows \
a clear structure with distinct sections such as 'Education', 'Work \
Experience', 'Skills', and 'Projects'. Point out sections that are \
missing, mislabeled, or out of the expected order, and suggest concrete \
improvements to the overall layout.";

pub const SKILLS_PROMPT: &str = "\
You are a technical recruiter screening this resume. Evaluate whether the \
skills listed are relevant to the candidate's target role and clearly \
presented. Suggest additional skills worth adding, and flag any that are \
vague, redundant, or outdated.";

pub const GRAMMAR_PROMPT: &str = "\
You are a professional copy editor. Check the resume for grammar, \
spelling, and punctuation mistakes. List every issue you find together \
with a suggested correction.";

pub const EXPERIENCE_PROMPT: &str = "\
You are a hiring manager reading this resume. Review the work experience \
section for clear and measurable achievements. Point out bullets that \
lack impact or numbers, and suggest how to rewrite them for clarity.";

/// The default analysis pass: category key to instruction, in presentation
/// order. Constant data; there is no runtime mutation API.
pub const DEFAULT_CATALOG: &[(&str, &str); 4] = &[
    ("structure", STRUCTURE_PROMPT),
    ("skills", SKILLS_PROMPT),
    ("grammar", GRAMMAR_PROMPT),
    ("experience", EXPERIENCE_PROMPT),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_the_four_fixed_categories() {
        let keys: Vec<&str> = DEFAULT_CATALOG.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, vec!["structure", "skills", "grammar", "experience"]);
    }

    #[test]
    fn test_catalog_prompts_are_nonempty() {
        for (key, prompt) in DEFAULT_CATALOG {
            assert!(!prompt.trim().is_empty(), "empty prompt for {key}");
        }
    }

    #[test]
    fn test_custom_key_does_not_collide_with_catalog() {
        assert!(DEFAULT_CATALOG.iter().all(|(k, _)| *k != CUSTOM_KEY));
    }
}
