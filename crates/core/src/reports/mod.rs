//! Reports module - payloads for the external reporting API.

mod report_assembler;
mod reports_model;
mod reports_service;
mod reports_traits;


pub use report_assembler::build_expense_history;
pub use reports_model::{
    ActiveUserSummary, ActiveUsersCriteria, ActiveUsersReport, CategorySummary, ExpenseHistory,
    MonthlySummary, ReportBudget, ReportCategory, ReportExpense, ReportMetadata,
    UserCompleteReport,
};
pub use reports_service::ReportService;
pub use reports_traits::ReportServiceTrait;
