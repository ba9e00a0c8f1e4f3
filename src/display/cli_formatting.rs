use owo_colors::OwoColorize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::data_formatting::{display_or, format_date, or_na, present};
use crate::types::{Company, Project};

/// A row in the companies table
#[derive(Tabled)]
struct CompanyRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Company")]
    name: String,
    #[tabled(rename = "Type")]
    business_type: String,
    #[tabled(rename = "Contact")]
    contact: String,
    #[tabled(rename = "Email")]
    email: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Registered")]
    created: String,
}

/// A row in the projects table
#[derive(Tabled)]
struct ProjectRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Project")]
    name: String,
    #[tabled(rename = "Type")]
    project_type: String,
    #[tabled(rename = "Email")]
    email: String,
    #[tabled(rename = "Phone")]
    phone: String,
    #[tabled(rename = "Submitted")]
    created: String,
}

pub fn format_company_table(companies: &[Company]) -> String {
    let rows = companies.iter().map(|c| CompanyRow {
        id: or_na(c.id.as_deref()).to_string(),
        name: or_na(c.company_name.as_deref()).to_string(),
        business_type: or_na(c.business_type.as_deref()).to_string(),
        contact: or_na(c.contact_person_name.as_deref()).to_string(),
        email: or_na(c.email.as_deref()).to_string(),
        status: super::status_label(c).to_string(),
        created: format_date(c.created_at.as_deref()),
    });
    Table::new(rows).with(Style::rounded()).to_string()
}

pub fn format_project_table(projects: &[Project]) -> String {
    let rows = projects.iter().map(|p| ProjectRow {
        id: or_na(p.id.as_deref()).to_string(),
        name: or_na(p.name.as_deref()).to_string(),
        project_type: or_na(p.project_type.as_deref()).to_string(),
        email: or_na(p.email.as_deref()).to_string(),
        phone: or_na(p.phone_number.as_deref()).to_string(),
        created: format_date(p.created_at.as_deref()),
    });
    Table::new(rows).with(Style::rounded()).to_string()
}

fn push_field(out: &mut Vec<String>, label: &str, value: &str) {
    out.push(format!("{} {}", format!("{label}:").dimmed(), value));
}

fn push_section(out: &mut Vec<String>, title: &str, body: &str) {
    out.push(String::new());
    out.push(title.bold().to_string());
    for line in body.lines() {
        out.push(format!("  {line}"));
    }
}

/// Full company detail for `portal show company`
pub fn format_company_detail(company: &Company) -> String {
    let mut out = Vec::new();

    out.push(format!(
        "{} {}",
        or_na(company.company_name.as_deref()).bold(),
        super::format_status_colored(company)
    ));
    push_field(&mut out, "Type", or_na(company.business_type.as_deref()));
    if let Some(id) = present(company.id.as_deref()) {
        push_field(&mut out, "ID", &id.cyan().to_string());
    }

    out.push(String::new());
    out.push("Contact Person".bold().to_string());
    push_field(&mut out, "  Name", or_na(company.contact_person_name.as_deref()));
    push_field(
        &mut out,
        "  Designation",
        or_na(company.contact_person_designation.as_deref()),
    );
    push_field(&mut out, "  Email", or_na(company.email.as_deref()));
    push_field(&mut out, "  Phone", or_na(company.phone_number.as_deref()));

    out.push(String::new());
    push_field(
        &mut out,
        "Years in Operation",
        display_or(company.years_in_operation.as_deref(), "0"),
    );
    push_field(
        &mut out,
        "Employees",
        display_or(company.number_of_employees.as_deref(), "0"),
    );
    push_field(&mut out, "Annual Turnover", or_na(company.annual_turnover.as_deref()));

    for (label, value) in company_detail_rows(company) {
        push_field(&mut out, label, value);
    }

    for (title, body) in company_detail_sections(company) {
        push_section(&mut out, title, body);
    }

    out.push(String::new());
    out.push(
        format!("Registered on {}", format_date(company.created_at.as_deref()))
            .dimmed()
            .to_string(),
    );
    out.join("\n")
}

/// Full project detail for `portal show project`
pub fn format_project_detail(project: &Project) -> String {
    let mut out = Vec::new();

    out.push(format!(
        "{} [{}]",
        or_na(project.name.as_deref()).bold(),
        or_na(project.project_type.as_deref()).cyan()
    ));
    if let Some(id) = present(project.id.as_deref()) {
        push_field(&mut out, "ID", &id.cyan().to_string());
    }

    out.push(String::new());
    out.push("Contact Information".bold().to_string());
    push_field(&mut out, "  Email Address", or_na(project.email.as_deref()));
    push_field(&mut out, "  Phone Number", or_na(project.phone_number.as_deref()));

    push_section(
        &mut out,
        "Project Requirements",
        display_or(project.project_details.as_deref(), "No details provided"),
    );

    out.push(String::new());
    out.push(
        format!("Submitted on {}", format_date(project.created_at.as_deref()))
            .dimmed()
            .to_string(),
    );
    out.join("\n")
}

/// Labelled one-line detail rows, present values only
pub fn company_detail_rows(company: &Company) -> Vec<(&'static str, &str)> {
    [
        ("Office Address", company.office_address.as_deref()),
        ("Website", company.company_website.as_deref()),
        ("Areas of Expertise", company.areas_of_expertise.as_deref()),
        ("Relevant Licenses", company.relevant_licenses.as_deref()),
        (
            "Registration Number",
            company.company_registration_number.as_deref(),
        ),
        ("Tax Registration", company.tax_registration_number.as_deref()),
        ("Equipment Owned", company.equipment_owned.as_deref()),
        ("HSE Policy", company.hse_policy.as_deref()),
    ]
    .into_iter()
    .filter_map(|(label, value)| present(value).map(|v| (label, v)))
    .collect()
}

/// Free-text sections shown below the detail rows, present values only
pub fn company_detail_sections(company: &Company) -> Vec<(&'static str, &str)> {
    [
        (
            "Past Project References",
            company.past_project_references.as_deref(),
        ),
        ("Safety Record", company.safety_record.as_deref()),
        ("Company Profile", company.company_profile.as_deref()),
    ]
    .into_iter()
    .filter_map(|(title, value)| present(value).map(|v| (title, v)))
    .collect()
}
