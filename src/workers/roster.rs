//! Default worker roster.
//!
//! Used when a [`SupervisorBuilder`](crate::SupervisorBuilder) is given no workers.

use super::record::WorkerDef;

const DEFAULT_ROSTER: [(&str, &str, &str); 8] = [
    (
        "ui-agent",
        "UI Enhancement Agent",
        "Continuously improves user interface elements",
    ),
    (
        "style-agent",
        "Style Optimization Agent",
        "Continuously applies dynamic styling and animations",
    ),
    (
        "performance-agent",
        "Performance Agent",
        "Continuously monitors and optimizes website performance",
    ),
    (
        "code-agent",
        "Code Enhancement Agent",
        "Continuously improves code quality and functionality",
    ),
    (
        "monitoring-agent",
        "System Monitoring Agent",
        "Continuously monitors system health and status",
    ),
    (
        "network-agent",
        "Network Optimization Agent",
        "Continuously optimizes network connections",
    ),
    (
        "security-agent",
        "Security Monitoring Agent",
        "Continuously monitors security status",
    ),
    (
        "database-agent",
        "Database Optimization Agent",
        "Continuously optimizes database performance",
    ),
];

/// Returns the eight default worker definitions.
pub fn default_roster() -> Vec<WorkerDef> {
    DEFAULT_ROSTER
        .iter()
        .map(|(id, name, description)| WorkerDef::new(*id, *name, *description))
        .collect()
}
