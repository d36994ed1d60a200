// Job search and interview question prompt templates.
// Both features are prompt-in, text-out: the model's reply is returned
// verbatim, with no job-board integration behind them.

/// Job search prompt template.
/// Replace: {job_title}, {experience_level}, {role}, {location}, {days_ago}
pub const JOB_SEARCH_PROMPT_TEMPLATE: &str = r#"You are a career advisor helping a candidate find current openings.

Candidate criteria:
- Job title: {job_title}
- Experience level: {experience_level}
- Role focus: {role}
- Location: {location}
- Posted within the last {days_ago} days

Suggest specific companies and job boards likely to have matching openings right now.
For each suggestion, name the company or board, explain in one line why it fits the
criteria, and give a concrete next step to apply."#;

/// Interview questions prompt template.
/// Replace: {company_name}, {experience_level}, {role}
pub const INTERVIEW_QUESTIONS_PROMPT_TEMPLATE: &str = r#"You are an experienced interviewer at {company_name}.

Prepare interview questions for a {experience_level} level {role} candidate.
Generate 10 questions mixing technical depth, practical problem solving, and
behavioral fit. Number each question and keep every question specific to the
role and to {company_name}."#;
