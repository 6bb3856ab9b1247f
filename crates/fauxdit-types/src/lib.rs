//! # fauxdit-types
//!
//! **Tier 0 (Core Types)**
//!
//! This crate defines the report document schema for `fauxdit`. It contains
//! only data types and Serde definitions; the JSON shape is the contract
//! consumed by dashboards and downstream report tooling.
//!
//! ## What belongs here
//! * Pure data structs (Report, Issue, Recommendation, statistics blocks)
//! * Serialization/Deserialization logic
//!
//! ## What does NOT belong here
//! * File I/O
//! * CLI argument parsing
//! * Generation logic (use fauxdit-gen / fauxdit-report)

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Ordinal criticality of a finding. Drives score deductions and
/// recommendation gating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "CRITICAL",
            Severity::High => "HIGH",
            Severity::Medium => "MEDIUM",
            Severity::Low => "LOW",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Partition of the issue population.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Security,
    Performance,
    Maintainability,
}

impl Category {
    /// Prefix used when assigning per-category issue ids (`SEC-001`, ...).
    pub fn id_prefix(&self) -> &'static str {
        match self {
            Category::Security => "SEC",
            Category::Performance => "PERF",
            Category::Maintainability => "MAINT",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub file: String,
    pub line: u32,
    /// Present for Security issues only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Remediation {
    pub immediate: String,
    pub steps: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cwe {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cvss {
    pub score: f64,
    pub vector: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evidence {
    pub snippet: String,
}

/// A synthesized finding. The optional blocks (`cwe`, `cvss`, `evidence`,
/// `location.column`) are populated for Security issues only and omitted
/// from the serialized document otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    pub id: String,
    pub severity: Severity,
    pub category: Category,
    pub title: String,
    pub location: Location,
    pub impact: String,
    pub remediation: Remediation,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cwe: Option<Cwe>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cvss: Option<Cvss>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evidence: Option<Evidence>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Priority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Effort {
    Low,
    Medium,
    High,
}

/// Recommendations use their own category space: the process-oriented
/// fourth recommendation does not map onto an issue category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecommendationCategory {
    Security,
    Performance,
    Process,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub id: String,
    pub category: RecommendationCategory,
    pub priority: Priority,
    pub title: String,
    pub description: String,
    pub impact: String,
    pub effort: Effort,
    pub estimated_hours: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps: Option<Vec<String>>,
}

/// Five 0-100 scores. Each is floored to a category-specific minimum by
/// the score calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scores {
    pub overall: u32,
    pub security: u32,
    pub performance: u32,
    pub maintainability: u32,
    pub testing: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeverityCounts {
    pub critical: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

impl SeverityCounts {
    pub fn from_issues(issues: &[Issue]) -> Self {
        let mut counts = SeverityCounts::default();
        for issue in issues {
            match issue.severity {
                Severity::Critical => counts.critical += 1,
                Severity::High => counts.high += 1,
                Severity::Medium => counts.medium += 1,
                Severity::Low => counts.low += 1,
            }
        }
        counts
    }

    pub fn total(&self) -> usize {
        self.critical + self.high + self.medium + self.low
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistics {
    pub files_analyzed: usize,
    pub total_issues: usize,
    pub issues_by_severity: SeverityCounts,
    /// Language name to integer percentage of classified files. Values may
    /// sum below 100 because each entry is truncated individually.
    pub languages: BTreeMap<String, usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryInfo {
    pub path: String,
    pub commit: String,
    pub branch: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyCounts {
    pub total: u32,
    pub direct: u32,
    pub vulnerable: u32,
    pub outdated: u32,
    pub deprecated: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestingSummary {
    pub coverage_percent: u32,
    pub missing_tests: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QualityMetrics {
    pub cyclomatic_complexity: f64,
    pub cognitive_complexity: f64,
    pub maintainability_index: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quality {
    pub metrics: QualityMetrics,
    pub duplicated_lines_percent: f64,
    pub technical_debt_hours: u64,
}

/// The complete report document. Constructed fresh per invocation; the
/// serialized form is the tool's entire output surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub scan_completed_at: String,
    pub scan_duration_ms: u64,
    pub repository: RepositoryInfo,
    pub scores: Scores,
    pub statistics: Statistics,
    pub vulnerabilities: Vec<Issue>,
    pub recommendations: Vec<Recommendation>,
    pub dependencies: DependencyCounts,
    pub testing: TestingSummary,
    pub quality: Quality,
}

/// Aggregate file statistics produced by the repository scanner.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileStats {
    pub total_files: usize,
    pub languages: BTreeMap<String, usize>,
}
