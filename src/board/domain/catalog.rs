//! The back-office task title catalog.
//!
//! Titles are the suggestion list offered when creating a task; a subset of
//! them carries a department mapping used to auto-infer [`ModuleType`] from
//! the chosen title.

use super::ModuleType;

/// Known task titles offered by the board's task form.
pub const TASK_TITLE_OPTIONS: [&str; 60] = [
    "New Lead Follow-Up",
    "Call / WhatsApp Follow-Up",
    "Send Property Details",
    "Schedule Site Visit",
    "Update Lead Status",
    "Lead Assignment",
    "Lead Qualification",
    "Record Feedback / Notes",
    "Negotiation / Offer Discussion",
    "Booking Confirmation",
    "Re-Engage Dormant Lead",
    "Close / Lost Lead Reason",
    "Site Visit Scheduling",
    "Site Visit Follow-Up",
    "Pickup & Drop Coordination",
    "Office Meeting / Consultation",
    "Document Collection",
    "Agreement Signing",
    "Payment Collection / Receipt",
    "Feedback / Testimonial Collection",
    "Property Handover / Key Delivery",
    "Post-Sale Support / Maintenance Request",
    "Campaign Follow-Up",
    "Social Media Post / Boost",
    "Lead Source Analysis",
    "Listing Promotion / Refresh",
    "Creative / Brochure Design",
    "Email / SMS Blast",
    "Ad Budget Optimization",
    "Performance Reporting",
    "Agreement Preparation",
    "Document Verification",
    "Registration Coordination",
    "Invoice / Receipt Generation",
    "Payment Reconciliation",
    "Legal Clearance Check",
    "NOC / Builder Document Collection",
    "Stamp Duty & Tax Filing",
    "Handover Scheduling",
    "Post-Sale Support",
    "Maintenance Request",
    "Repair / Service Coordination",
    "Client Feedback Collection",
    "Warranty / AMC Management",
    "Complaint Resolution",
    "Follow-Up Visit / Call",
    "Team Meeting / Briefing",
    "Report Submission",
    "CRM Data Update / Cleanup",
    "Training / Onboarding",
    "Office Maintenance / Supplies",
    "System Access Setup",
    "Inventory Management",
    "Compliance / Audit Task",
    "SLA Breach Alert",
    "Auto Lead Assignment",
    "Smart Task Suggestion",
    "Auto Task Creation",
    "AI Lead Prioritization",
    "System Sync Alert",
];

/// Returns the department mapped to a catalog title, if any.
///
/// Only a subset of the catalog carries a mapping; unmatched titles return
/// `None` and the caller decides what to do with the task's current module.
#[must_use]
pub fn module_for_title(title: &str) -> Option<ModuleType> {
    match title {
        "New Lead Follow-Up"
        | "Call / WhatsApp Follow-Up"
        | "Schedule Site Visit"
        | "Lead Assignment"
        | "Booking Confirmation" => Some(ModuleType::Lead),
        "Site Visit Scheduling" | "Office Meeting / Consultation" | "Agreement Signing" => {
            Some(ModuleType::ClientInteraction)
        }
        "Campaign Follow-Up" | "Social Media Post / Boost" | "Listing Promotion / Refresh" => {
            Some(ModuleType::Marketing)
        }
        "Agreement Preparation" | "Document Verification" | "Registration Coordination" => {
            Some(ModuleType::Legal)
        }
        "Team Meeting / Briefing" | "Report Submission" | "System Access Setup" => {
            Some(ModuleType::Admin)
        }
        "Maintenance Request" | "Complaint Resolution" => Some(ModuleType::AfterSales),
        "Smart Task Suggestion" | "Auto Task Creation" => Some(ModuleType::Smart),
        _ => None,
    }
}
