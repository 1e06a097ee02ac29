//! Report commands: dashboard, budget, health and tips

use crate::config::settings::Settings;
use crate::display::{format_budget_plan, format_dashboard, format_health, format_tips};
use crate::error::FinanceResult;
use crate::services::ReportService;
use crate::storage::Storage;

const NO_EXPENSES: &str = "📝 No expenses recorded yet. Start with 'fintrack expense add'.";

pub fn handle_dashboard_command(storage: &Storage, settings: &Settings) -> FinanceResult<()> {
    let dashboard = ReportService::new(storage, settings).dashboard()?;
    print!("{}", format_dashboard(&dashboard, &settings.currency_format()));
    Ok(())
}

pub fn handle_budget_command(storage: &Storage, settings: &Settings) -> FinanceResult<()> {
    let service = ReportService::new(storage, settings);
    let (_, _, expense_count) = service.analysis()?;
    if expense_count == 0 {
        println!("{}", NO_EXPENSES);
        return Ok(());
    }

    let plan = service.budget_plan()?;
    print!("{}", format_budget_plan(&plan, &settings.currency_format()));
    Ok(())
}

pub fn handle_health_command(storage: &Storage, settings: &Settings) -> FinanceResult<()> {
    let dashboard = ReportService::new(storage, settings).dashboard()?;
    if !dashboard.has_expenses() {
        println!("{}", NO_EXPENSES);
        return Ok(());
    }

    print!("{}", format_health(&dashboard.health));
    Ok(())
}

pub fn handle_tips_command(storage: &Storage, settings: &Settings) -> FinanceResult<()> {
    let dashboard = ReportService::new(storage, settings).dashboard()?;
    if !dashboard.has_expenses() {
        println!("{}", NO_EXPENSES);
        return Ok(());
    }

    print!("{}", format_tips(&dashboard.tips, &settings.currency_format()));
    Ok(())
}
