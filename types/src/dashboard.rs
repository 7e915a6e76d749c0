//! Fixed figures shown on the admin dashboard.
//!
//! None of this is fetched or persisted. The dashboard renders the same
//! values whichever credentials opened the gate.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryCounts {
    pub students: u32,
    pub companies: u32,
    pub internships: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StudentRegistration {
    pub name: &'static str,
    pub email: &'static str,
    pub department: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApprovalStatus {
    Approved,
    Pending,
}

impl ApprovalStatus {
    pub fn label(self) -> &'static str {
        match self {
            ApprovalStatus::Approved => "Approved",
            ApprovalStatus::Pending => "Pending",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompanyRegistration {
    pub name: &'static str,
    pub industry: &'static str,
    pub status: ApprovalStatus,
}

/// Buttons in the "Admin Actions" panel. They are placeholders and carry no
/// behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdminAction {
    ManageUsers,
    ApproveCompanies,
    ReviewInternships,
    GenerateReports,
}

impl AdminAction {
    pub const ALL: [AdminAction; 4] = [
        AdminAction::ManageUsers,
        AdminAction::ApproveCompanies,
        AdminAction::ReviewInternships,
        AdminAction::GenerateReports,
    ];

    pub fn label(self) -> &'static str {
        match self {
            AdminAction::ManageUsers => "Manage Users",
            AdminAction::ApproveCompanies => "Approve Companies",
            AdminAction::ReviewInternships => "Review Internships",
            AdminAction::GenerateReports => "Generate Reports",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardSnapshot {
    pub summary: SummaryCounts,
    pub students: &'static [StudentRegistration],
    pub companies: &'static [CompanyRegistration],
}

pub const DASHBOARD: DashboardSnapshot = DashboardSnapshot {
    summary: SummaryCounts {
        students: 1234,
        companies: 87,
        internships: 156,
    },
    students: &[
        StudentRegistration {
            name: "John Doe",
            email: "john.doe@fcrit.ac.in",
            department: "Computer Engineering",
        },
        StudentRegistration {
            name: "Jane Smith",
            email: "jane.smith@fcrit.ac.in",
            department: "Information Technology",
        },
        StudentRegistration {
            name: "Mike Johnson",
            email: "mike.johnson@fcrit.ac.in",
            department: "Mechanical Engineering",
        },
    ],
    companies: &[
        CompanyRegistration {
            name: "TechCorp Inc.",
            industry: "Information Technology",
            status: ApprovalStatus::Approved,
        },
        CompanyRegistration {
            name: "InnovateX",
            industry: "Software Development",
            status: ApprovalStatus::Pending,
        },
        CompanyRegistration {
            name: "Global Solutions Ltd.",
            industry: "Consulting",
            status: ApprovalStatus::Approved,
        },
    ],
};

/// Format a counter with `,` between each group of three digits.
pub fn format_count(n: u32) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }

    out
}
