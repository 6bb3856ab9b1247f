//! # fauxdit-gen
//!
//! **Tier 3 (Generation)**
//!
//! Issue synthesis for fauxdit reports: a weighted severity sampler and a
//! generator that populates category-proportional issue sets from the
//! static template pools.
//!
//! Every function takes the PRNG as an explicit parameter, so callers own
//! reproducibility: the CLI seeds from OS entropy, tests seed from a
//! constant.
//!
//! ## What belongs here
//! * Severity sampling
//! * Issue construction from templates
//!
//! ## What does NOT belong here
//! * Filesystem access (use fauxdit-walk)
//! * Scores and recommendations (use fauxdit-report)

pub mod templates;

use rand::Rng;

use fauxdit_types::{
    Category, Cvss, Cwe, Evidence, Issue, Location, Remediation, Severity,
};

/// Cumulative severity distribution for Security findings:
/// CRITICAL 4%, HIGH 12%, MEDIUM 34%, LOW 50%.
const SEVERITY_CDF: &[(Severity, f64)] = &[
    (Severity::Critical, 0.04),
    (Severity::High, 0.16),
    (Severity::Medium, 0.50),
    (Severity::Low, 1.0),
];

/// Performance findings never reach CRITICAL.
const PERFORMANCE_SEVERITIES: [Severity; 3] = [Severity::High, Severity::Medium, Severity::Low];

/// Maintainability findings are capped at MEDIUM.
const MAINTAINABILITY_SEVERITIES: [Severity; 2] = [Severity::Medium, Severity::Low];

/// Draw one severity from the fixed categorical distribution.
///
/// Returns the first bucket whose cumulative probability covers the draw;
/// defaults to LOW to guard floating-point edge cases.
pub fn sample_severity<R: Rng + ?Sized>(rng: &mut R) -> Severity {
    let draw: f64 = rng.random();
    for &(severity, cumulative) in SEVERITY_CDF {
        if draw <= cumulative {
            return severity;
        }
    }
    Severity::Low
}

/// Split a total issue count into (security, performance, maintainability).
///
/// Security takes floor(total * 0.30), performance floor(total * 0.25),
/// maintainability the remainder. A floor of zero is legitimate; no
/// minimum is enforced.
pub fn category_counts(total: usize) -> (usize, usize, usize) {
    let security = (total as f64 * 0.3) as usize;
    let performance = (total as f64 * 0.25) as usize;
    (security, performance, total - security - performance)
}

/// Generate a full issue population with a random total in [200, 350].
pub fn generate_issues<R: Rng + ?Sized>(rng: &mut R) -> Vec<Issue> {
    let total = rng.random_range(200..=350);
    generate_issues_with_total(rng, total)
}

/// Generate exactly `total` issues, split per [`category_counts`].
///
/// Issues are ordered Security, Performance, Maintainability, with ids
/// assigned sequentially within each category in generation order.
pub fn generate_issues_with_total<R: Rng + ?Sized>(rng: &mut R, total: usize) -> Vec<Issue> {
    let (security, performance, maintainability) = category_counts(total);
    let mut issues = Vec::with_capacity(total);
    for seq in 1..=security {
        issues.push(security_issue(rng, seq));
    }
    for seq in 1..=performance {
        issues.push(performance_issue(rng, seq));
    }
    for seq in 1..=maintainability {
        issues.push(maintainability_issue(rng, seq));
    }
    issues
}

fn security_issue<R: Rng + ?Sized>(rng: &mut R, seq: usize) -> Issue {
    let template = &templates::SECURITY[rng.random_range(0..templates::SECURITY.len())];
    let severity = sample_severity(rng);
    let score = if severity == Severity::Critical {
        template.cvss_base
    } else {
        template.cvss_base - rng.random_range(1.0..3.0)
    };

    Issue {
        id: issue_id(Category::Security, seq),
        severity,
        category: Category::Security,
        title: template.title.to_string(),
        location: Location {
            file: random_file(rng),
            line: rng.random_range(10..=500),
            column: Some(rng.random_range(1..=80)),
        },
        impact: severity_impact(severity).to_string(),
        remediation: Remediation {
            immediate: format!("Fix {}", template.title.to_lowercase()),
            steps: remediation_steps(template.title),
        },
        cwe: Some(Cwe {
            id: template.cwe_id.to_string(),
            name: template.cwe_name.to_string(),
        }),
        cvss: Some(Cvss {
            score,
            // The vector bucket is chosen from the template's base score,
            // not the reduced one.
            vector: cvss_vector(template.cvss_base).to_string(),
        }),
        evidence: Some(Evidence {
            snippet: snippet_for(template.pattern).to_string(),
        }),
    }
}

fn performance_issue<R: Rng + ?Sized>(rng: &mut R, seq: usize) -> Issue {
    let template = &templates::PERFORMANCE[rng.random_range(0..templates::PERFORMANCE.len())];
    let severity = PERFORMANCE_SEVERITIES[rng.random_range(0..PERFORMANCE_SEVERITIES.len())];

    Issue {
        id: issue_id(Category::Performance, seq),
        severity,
        category: Category::Performance,
        title: template.title.to_string(),
        location: Location {
            file: random_file(rng),
            line: rng.random_range(10..=500),
            column: None,
        },
        impact: template.impact.to_string(),
        remediation: Remediation {
            immediate: format!("Optimize {}", template.title.to_lowercase()),
            steps: remediation_steps(template.title),
        },
        cwe: None,
        cvss: None,
        evidence: None,
    }
}

fn maintainability_issue<R: Rng + ?Sized>(rng: &mut R, seq: usize) -> Issue {
    let template =
        &templates::MAINTAINABILITY[rng.random_range(0..templates::MAINTAINABILITY.len())];
    let severity =
        MAINTAINABILITY_SEVERITIES[rng.random_range(0..MAINTAINABILITY_SEVERITIES.len())];

    Issue {
        id: issue_id(Category::Maintainability, seq),
        severity,
        category: Category::Maintainability,
        title: template.title.to_string(),
        location: Location {
            file: random_file(rng),
            line: rng.random_range(10..=500),
            column: None,
        },
        impact: template
            .impact
            .unwrap_or("Reduced code maintainability")
            .to_string(),
        remediation: Remediation {
            immediate: format!("Refactor to improve {}", template.title.to_lowercase()),
            steps: vec![
                "Refactor code".to_string(),
                "Add tests".to_string(),
                "Update documentation".to_string(),
            ],
        },
        cwe: None,
        cvss: None,
        evidence: None,
    }
}

fn issue_id(category: Category, seq: usize) -> String {
    format!("{}-{:03}", category.id_prefix(), seq)
}

fn random_file<R: Rng + ?Sized>(rng: &mut R) -> String {
    templates::FILE_POOL[rng.random_range(0..templates::FILE_POOL.len())].to_string()
}

fn severity_impact(severity: Severity) -> &'static str {
    match severity {
        Severity::Critical => "Complete system compromise possible",
        Severity::High => "Significant security or performance impact",
        Severity::Medium => "Moderate impact on functionality",
        Severity::Low => "Minor impact, should be fixed",
    }
}

fn remediation_steps(title: &str) -> Vec<String> {
    let steps: &[&str] = if title.contains("API Key") {
        &[
            "Remove all hardcoded secrets immediately",
            "Rotate all exposed API keys",
            "Implement environment variable management",
            "Use secret management service",
        ]
    } else if title.contains("SQL Injection") {
        &[
            "Use parameterized queries",
            "Implement input validation",
            "Use ORM with built-in protection",
            "Add SQL injection detection",
        ]
    } else {
        &[
            "Review and fix the identified issue",
            "Add tests to prevent regression",
            "Update documentation",
        ]
    };
    steps.iter().map(|s| (*s).to_string()).collect()
}

fn cvss_vector(base: f64) -> &'static str {
    if base >= 9.0 {
        "CVSS:3.1/AV:N/AC:L/PR:N/UI:N/S:U/C:H/I:H/A:H"
    } else if base >= 7.0 {
        "CVSS:3.1/AV:N/AC:L/PR:L/UI:N/S:U/C:H/I:H/A:N"
    } else {
        "CVSS:3.1/AV:N/AC:H/PR:L/UI:R/S:U/C:L/I:L/A:N"
    }
}

fn snippet_for(pattern: &str) -> &'static str {
    for (key, snippet) in templates::SNIPPETS {
        if pattern.contains(key) {
            return snippet;
        }
    }
    templates::GENERIC_SNIPPET
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn category_counts_fixed_proportions() {
        assert_eq!(category_counts(200), (60, 50, 90));
        assert_eq!(category_counts(350), (105, 87, 158));
    }

    #[test]
    fn category_counts_small_totals() {
        // Floors of zero are legitimate; maintainability absorbs the rest.
        assert_eq!(category_counts(0), (0, 0, 0));
        assert_eq!(category_counts(1), (0, 0, 1));
        assert_eq!(category_counts(3), (0, 0, 3));
        assert_eq!(category_counts(4), (1, 1, 2));
    }

    #[test]
    fn generated_total_in_range() {
        let issues = generate_issues(&mut rng());
        assert!((200..=350).contains(&issues.len()));
    }

    #[test]
    fn ids_are_sequential_and_zero_padded() {
        let issues = generate_issues_with_total(&mut rng(), 20);
        // 20 -> 6 security, 5 performance, 9 maintainability.
        assert_eq!(issues[0].id, "SEC-001");
        assert_eq!(issues[5].id, "SEC-006");
        assert_eq!(issues[6].id, "PERF-001");
        assert_eq!(issues[11].id, "MAINT-001");
        assert_eq!(issues[19].id, "MAINT-009");
    }

    #[test]
    fn security_issues_carry_full_detail() {
        let issues = generate_issues_with_total(&mut rng(), 40);
        for issue in issues.iter().filter(|i| i.category == Category::Security) {
            assert!(issue.cwe.is_some());
            assert!(issue.cvss.is_some());
            assert!(issue.evidence.is_some());
            assert!(issue.location.column.is_some());
            assert!((10..=500).contains(&issue.location.line));
            let column = issue.location.column.unwrap();
            assert!((1..=80).contains(&column));
        }
    }

    #[test]
    fn non_security_issues_are_lean() {
        let issues = generate_issues_with_total(&mut rng(), 40);
        for issue in issues.iter().filter(|i| i.category != Category::Security) {
            assert!(issue.cwe.is_none());
            assert!(issue.cvss.is_none());
            assert!(issue.evidence.is_none());
            assert!(issue.location.column.is_none());
        }
    }

    #[test]
    fn performance_severity_never_critical() {
        let issues = generate_issues_with_total(&mut rng(), 200);
        for issue in issues.iter().filter(|i| i.category == Category::Performance) {
            assert_ne!(issue.severity, Severity::Critical);
        }
    }

    #[test]
    fn maintainability_severity_medium_or_low() {
        let issues = generate_issues_with_total(&mut rng(), 200);
        for issue in issues
            .iter()
            .filter(|i| i.category == Category::Maintainability)
        {
            assert!(matches!(issue.severity, Severity::Medium | Severity::Low));
        }
    }

    #[test]
    fn cvss_score_tracks_template_base() {
        let bases = [9.8, 9.1, 7.5, 8.2];
        let issues = generate_issues_with_total(&mut rng(), 500);
        for issue in issues.iter().filter(|i| i.category == Category::Security) {
            let cvss = issue.cvss.as_ref().unwrap();
            if issue.severity == Severity::Critical {
                assert!(bases.contains(&cvss.score));
            } else {
                // Reduced by a uniform offset in [1, 3).
                let base = bases
                    .iter()
                    .find(|b| (cvss.score > **b - 3.0) && (cvss.score <= **b - 1.0))
                    .copied();
                assert!(base.is_some(), "score {} outside any base window", cvss.score);
            }
        }
    }

    #[test]
    fn cvss_vector_bucketed_by_base_score() {
        assert!(cvss_vector(9.8).contains("PR:N"));
        assert!(cvss_vector(8.2).contains("PR:L/UI:N"));
        assert!(cvss_vector(5.0).contains("AC:H"));
    }

    #[test]
    fn snippet_lookup_by_pattern_substring() {
        assert!(snippet_for("api_key|api_secret|password|token").contains("EXPOSED"));
        assert!(snippet_for("SELECT.*FROM.*WHERE.*=").contains("SELECT * FROM users"));
        assert!(snippet_for("innerHTML|dangerouslySetInnerHTML").contains("innerHTML"));
        assert_eq!(snippet_for("req.params.id"), templates::GENERIC_SNIPPET);
    }

    #[test]
    fn remediation_steps_keyed_by_title() {
        assert_eq!(remediation_steps("Hardcoded API Keys in Repository").len(), 4);
        assert_eq!(remediation_steps("SQL Injection Vulnerability").len(), 4);
        assert_eq!(remediation_steps("Large Bundle Size").len(), 3);
    }

    #[test]
    fn sampler_distribution_sanity() {
        let mut rng = rng();
        let mut counts = [0usize; 4];
        let draws = 10_000;
        for _ in 0..draws {
            match sample_severity(&mut rng) {
                Severity::Critical => counts[0] += 1,
                Severity::High => counts[1] += 1,
                Severity::Medium => counts[2] += 1,
                Severity::Low => counts[3] += 1,
            }
        }
        // Loose bounds around the 4/12/34/50 split.
        assert!(counts[0] > 0 && counts[0] < draws / 10);
        assert!(counts[1] > draws / 20 && counts[1] < draws / 4);
        assert!(counts[2] > draws / 5 && counts[2] < draws / 2);
        assert!(counts[3] > draws / 3);
    }
}
