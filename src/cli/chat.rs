//! Chat CLI commands
//!
//! fintrack does not talk to a chat provider itself. These commands print
//! the financial context and the composed prompt so they can be pasted into
//! one.

use clap::Subcommand;

use crate::chat::{ChatSession, FinancialContext};
use crate::config::settings::Settings;
use crate::error::FinanceResult;
use crate::services::{GoalService, ProfileService, ReportService};
use crate::storage::Storage;

#[derive(Subcommand)]
pub enum ChatCommands {
    /// Show the financial context attached to questions
    Context,
    /// Compose the prompt for a question
    Prompt {
        /// The question to ask
        #[arg(required = true, num_args = 1..)]
        question: Vec<String>,
    },
}

/// Context for the current data, or `None` without a profile or expenses
fn current_context(
    storage: &Storage,
    settings: &Settings,
) -> FinanceResult<Option<FinancialContext>> {
    if ProfileService::new(storage).get()?.is_none() {
        return Ok(None);
    }

    let (profile, analysis, expense_count) = ReportService::new(storage, settings).analysis()?;
    if expense_count == 0 {
        return Ok(None);
    }

    let goals = GoalService::new(storage).list_active()?;
    Ok(Some(FinancialContext::build(
        &profile,
        &analysis,
        &goals,
        &settings.currency_format(),
    )))
}

pub fn handle_chat_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ChatCommands,
) -> FinanceResult<()> {
    match cmd {
        ChatCommands::Context => match current_context(storage, settings)? {
            Some(context) => println!("{}", context),
            None => println!(
                "No financial context yet. Save a profile and record some expenses first."
            ),
        },

        ChatCommands::Prompt { question } => {
            let question = question.join(" ");
            let user_name = ProfileService::new(storage).get()?.map(|p| p.name);
            let mut session = ChatSession::new(user_name, current_context(storage, settings)?);

            let prompt = session.ask(&question);
            tracing::debug!(
                messages = session.messages().len(),
                with_context = session.context().is_some(),
                "chat prompt composed"
            );
            println!("{}", prompt);
        }
    }

    Ok(())
}
