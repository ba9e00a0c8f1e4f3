//! Mock data builders and a scripted record source.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use portal::remote::{FetchOutcome, RecordSource};
use portal::types::{Company, Project};

/// Builder for creating test companies
pub struct CompanyBuilder {
    company: Company,
}

impl CompanyBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            company: Company {
                id: Some(id.to_string()),
                not_blacklisted: Some(true),
                created_at: Some("2024-01-05T10:00:00.000Z".to_string()),
                ..Default::default()
            },
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.company.company_name = Some(name.to_string());
        self
    }

    pub fn contact(mut self, contact: &str) -> Self {
        self.company.contact_person_name = Some(contact.to_string());
        self
    }

    pub fn email(mut self, email: &str) -> Self {
        self.company.email = Some(email.to_string());
        self
    }

    pub fn blacklisted(mut self) -> Self {
        self.company.not_blacklisted = Some(false);
        self
    }

    pub fn build(self) -> Company {
        self.company
    }
}

/// Builder for creating test projects
pub struct ProjectBuilder {
    project: Project,
}

impl ProjectBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            project: Project {
                id: Some(id.to_string()),
                created_at: Some("2024-02-10T08:30:00.000Z".to_string()),
                ..Default::default()
            },
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.project.name = Some(name.to_string());
        self
    }

    pub fn project_type(mut self, project_type: &str) -> Self {
        self.project.project_type = Some(project_type.to_string());
        self
    }

    pub fn details(mut self, details: &str) -> Self {
        self.project.project_details = Some(details.to_string());
        self
    }

    pub fn build(self) -> Project {
        self.project
    }
}

pub fn mock_company(id: &str, name: &str) -> Company {
    CompanyBuilder::new(id).name(name).build()
}

pub fn mock_project(id: &str, name: &str) -> Project {
    ProjectBuilder::new(id).name(name).build()
}

/// Record source that replays fixed outcomes
pub struct FakeSource {
    pub companies: FetchOutcome<Company>,
    pub projects: FetchOutcome<Project>,
    /// Delay before each response
    pub latency: Duration,
    pub calls: AtomicUsize,
}

impl FakeSource {
    pub fn new(companies: FetchOutcome<Company>, projects: FetchOutcome<Project>) -> Self {
        Self {
            companies,
            projects,
            latency: Duration::ZERO,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl RecordSource for FakeSource {
    async fn fetch_companies(&self) -> FetchOutcome<Company> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(self.latency).await;
        self.companies.clone()
    }

    async fn fetch_projects(&self) -> FetchOutcome<Project> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(self.latency).await;
        self.projects.clone()
    }
}
