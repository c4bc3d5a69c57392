//! Extraction prompt assembly.
//!
//! The prompt binds the summarizer to the user's goal and asks for a
//! bounded, structured summary. The word cap is enforced by instruction to
//! the service; there is no local truncation.

/// Build the prompt sent to the external summarization service.
#[must_use]
pub fn build_extraction_prompt(goal: &str, word_cap: u32) -> String {
    let goal_line = if goal.is_empty() {
        "The user did not state an explicit goal; infer the most recent active task.".to_string()
    } else {
        format!("The user's goal for the next session is: {goal}")
    };

    format!(
        "You are preparing a handoff for a coding session that is about to be reset.\n\
         {goal_line}\n\n\
         Scan the conversation chronologically and extract only what is relevant to that goal:\n\
         1. Restate the goal in one line.\n\
         2. Decisions made, with the reasoning that led to them.\n\
         3. Files touched or discussed, with their roles.\n\
         4. Errors encountered and how (or whether) they were resolved.\n\
         5. Open blockers and the agreed next step.\n\
         6. Explicitly list what you are excluding as not goal-relevant.\n\n\
         Respond with a structured summary under {word_cap} words. \
         Do not include pleasantries or commentary about this prompt."
    )
}
