//! # Documents Module
//!
//! Canned SecurBank documents: each builder returns the template to render
//! and the form data to merge into it.
//!
//! Timestamps are passed in by the caller so the builders stay deterministic.

use crate::payload::{FormData, FormValue};
use chrono::{DateTime, NaiveDate, Utc};
use securbank_core::{format_amount, format_currency, mask_account_number};

pub const ACCOUNT_STATEMENT_TEMPLATE: &str = "/content/dam/securbank/forms/account-statement.xdp";
pub const LOAN_APPLICATION_TEMPLATE: &str = "/content/dam/securbank/forms/loan-application.xdp";
pub const TRANSACTION_HISTORY_TEMPLATE: &str =
    "/content/dam/securbank/forms/transaction-history.xdp";
pub const CERTIFICATE_TEMPLATE: &str = "/content/dam/securbank/forms/certificate.xdp";
pub const FINANCIAL_REPORT_TEMPLATE: &str = "/content/dam/securbank/forms/financial-report.xdp";

/// Repeating rows beyond this are dropped from transaction histories.
pub const MAX_TRANSACTIONS: usize = 50;

const ISSUING_AUTHORITY: &str = "SecurBank Financial Services";
const STATEMENT_CURRENCY: &str = "USD";

/// A template path with the data to merge into it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormDocument {
    pub template_path: String,
    pub form_data: FormData,
}

impl FormDocument {
    fn new(template_path: &str, form_data: FormData) -> Self {
        Self {
            template_path: template_path.to_string(),
            form_data,
        }
    }
}


fn iso_timestamp(at: DateTime<Utc>) -> String {
    at.naive_utc().format("%Y-%m-%dT%H:%M:%S%.3f").to_string()
}

/// Lenient number lookup: missing or unparsable values count as zero.
fn number_field(data: &FormData, name: &str) -> f64 {
    data.get(name)
        .and_then(FormValue::first)
        .and_then(|value| value.trim().parse::<f64>().ok())
        .unwrap_or(0.0)
}

fn sum_fields(data: &FormData, names: &[&str]) -> f64 {
    names.iter().map(|name| number_field(data, name)).sum()
}

/// Monthly account statement.
///
/// Besides the raw values the statement carries display variants: the masked
/// account number and the balance with its currency sign.
pub fn account_statement(
    customer_name: &str,
    account_number: &str,
    balance: f64,
    statement_date: NaiveDate,
) -> FormDocument {
    let data = FormData::new()
        .with("customerName", customer_name)
        .with("accountNumber", account_number)
        .with("maskedAccountNumber", mask_account_number(Some(account_number)))
        .with("balance", format_amount(balance))
        .with("balanceDisplay", format_currency(balance))
        .with("statementDate", statement_date.to_string())
        .with("currency", STATEMENT_CURRENCY);
    FormDocument::new(ACCOUNT_STATEMENT_TEMPLATE, data)
}

/// Applicant, loan and income details for a loan application.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoanApplication {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub loan_amount: String,
    pub purpose: String,
    pub term: String,
    pub annual_income: String,
    pub monthly_expenses: String,
    pub application_id: Option<String>,
}

/// Loan application; the id defaults to `AUTO-<epoch millis>`.
pub fn loan_application(application: &LoanApplication, now: DateTime<Utc>) -> FormDocument {
    let application_id = application
        .application_id
        .clone()
        .unwrap_or_else(|| format!("AUTO-{}", now.timestamp_millis()));

    let data = FormData::new()
        .with("applicantFirstName", application.first_name.as_str())
        .with("applicantLastName", application.last_name.as_str())
        .with("applicantEmail", application.email.as_str())
        .with("applicantPhone", application.phone.as_str())
        .with("loanAmount", application.loan_amount.as_str())
        .with("loanPurpose", application.purpose.as_str())
        .with("loanTerm", application.term.as_str())
        .with("annualIncome", application.annual_income.as_str())
        .with("monthlyExpenses", application.monthly_expenses.as_str())
        .with("applicationDate", iso_timestamp(now))
        .with("applicationId", application_id);
    FormDocument::new(LOAN_APPLICATION_TEMPLATE, data)
}

/// One row of a transaction history.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionRow {
    pub date: String,
    pub description: String,
    pub amount: String,
    pub kind: String,
}

/// Transaction history, flattened into `transaction<i>_<field>` entries.
///
/// `totalTransactions` reports every row given, even when rows past
/// [`MAX_TRANSACTIONS`] are left out.
pub fn transaction_history(
    account_number: &str,
    transactions: &[TransactionRow],
    report_date: NaiveDate,
) -> FormDocument {
    let mut data = FormData::new()
        .with("accountNumber", account_number)
        .with("reportDate", report_date.to_string())
        .with("totalTransactions", transactions.len().to_string());

    for (i, row) in transactions.iter().take(MAX_TRANSACTIONS).enumerate() {
        data.insert(format!("transaction{i}_date"), row.date.as_str());
        data.insert(format!("transaction{i}_description"), row.description.as_str());
        data.insert(format!("transaction{i}_amount"), row.amount.as_str());
        data.insert(format!("transaction{i}_type"), row.kind.as_str());
    }
    FormDocument::new(TRANSACTION_HISTORY_TEMPLATE, data)
}

/// Certificate numbered `CERT-<epoch millis>`.
pub fn certificate(
    recipient_name: &str,
    certificate_type: &str,
    issue_date: &str,
    now: DateTime<Utc>,
) -> FormDocument {
    let data = FormData::new()
        .with("recipientName", recipient_name)
        .with("certificateType", certificate_type)
        .with("issueDate", issue_date)
        .with("certificateNumber", format!("CERT-{}", now.timestamp_millis()))
        .with("issuingAuthority", ISSUING_AUTHORITY);
    FormDocument::new(CERTIFICATE_TEMPLATE, data)
}

/// Financial report: the input fields plus totals over `income1..3` and
/// `expense1..3`.
pub fn financial_report(report: &FormData, now: DateTime<Utc>) -> FormDocument {
    let total_income = sum_fields(report, &["income1", "income2", "income3"]);
    let total_expenses = sum_fields(report, &["expense1", "expense2", "expense3"]);

    let mut data = report.clone();
    data.insert("totalIncome", format_amount(total_income));
    data.insert("totalExpenses", format_amount(total_expenses));
    data.insert("netAmount", format_amount(total_income - total_expenses));
    data.insert("reportGeneratedDate", iso_timestamp(now));
    FormDocument::new(FINANCIAL_REPORT_TEMPLATE, data)
}
