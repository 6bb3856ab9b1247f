//! # fauxdit-report
//!
//! **Tier 3 (Assembly)**
//!
//! Turns an issue population into the full report document: the multi-factor
//! score model, the recommendation set, and the synthesized dependency,
//! testing, and quality blocks.
//!
//! ## What belongs here
//! * Score calculation
//! * Recommendation selection
//! * Report assembly and metadata wiring
//!
//! ## What does NOT belong here
//! * Issue synthesis (use fauxdit-gen)
//! * Output formatting (CLI concern)

use std::path::Path;

use rand::Rng;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use fauxdit_types::{
    Category, DependencyCounts, Effort, Issue, Priority, Quality, QualityMetrics, Recommendation,
    RecommendationCategory, Report, RepositoryInfo, Scores, Severity, SeverityCounts, Statistics,
    TestingSummary,
};

/// Per-category deduction saturation points.
const SECURITY_DEDUCTION_CAP: f64 = 35.0;
const PERFORMANCE_DEDUCTION_CAP: f64 = 30.0;
const MAINTAINABILITY_DEDUCTION_CAP: f64 = 20.0;

/// Derive the five scores from the issue population.
///
/// The three issue-derived scores start at 100 and lose a capped amount per
/// issue in their category. `overall` is the truncated mean of the three
/// computed *before* the per-category floors apply. `testing` is an
/// independent draw in [65, 85].
pub fn calculate_scores<R: Rng + ?Sized>(rng: &mut R, issues: &[Issue]) -> Scores {
    let security_issues = count_category(issues, Category::Security);
    let performance_issues = count_category(issues, Category::Performance);
    let maintainability_issues = count_category(issues, Category::Maintainability);

    let security = 100.0 - (security_issues as f64 * 1.5).min(SECURITY_DEDUCTION_CAP);
    let performance = 100.0 - ((performance_issues * 2) as f64).min(PERFORMANCE_DEDUCTION_CAP);
    let maintainability =
        100.0 - (maintainability_issues as f64 * 0.5).min(MAINTAINABILITY_DEDUCTION_CAP);

    let overall = ((security + performance + maintainability) / 3.0) as u32;

    Scores {
        overall: overall.max(40),
        security: (security as u32).max(40),
        performance: (performance as u32).max(50),
        maintainability: (maintainability as u32).max(60),
        testing: rng.random_range(65..=85),
    }
}

fn count_category(issues: &[Issue], category: Category) -> usize {
    issues.iter().filter(|i| i.category == category).count()
}

/// Base recommendations plus the conditional security-training one.
///
/// The fourth entry appears iff the CRITICAL issue count is strictly
/// greater than 5.
pub fn build_recommendations(issues: &[Issue]) -> Vec<Recommendation> {
    let mut recommendations = vec![
        Recommendation {
            id: "REC-001".to_string(),
            category: RecommendationCategory::Security,
            priority: Priority::High,
            title: "Implement Security Headers".to_string(),
            description:
                "Add security headers like CSP, HSTS, X-Frame-Options to prevent common attacks"
                    .to_string(),
            impact: "Prevents XSS, clickjacking, and other client-side attacks".to_string(),
            effort: Effort::Low,
            estimated_hours: 4,
            steps: Some(vec![
                "Add helmet.js middleware".to_string(),
                "Configure CSP policy".to_string(),
                "Enable HSTS with preload".to_string(),
                "Test security headers".to_string(),
            ]),
        },
        Recommendation {
            id: "REC-002".to_string(),
            category: RecommendationCategory::Security,
            priority: Priority::High,
            title: "Implement Rate Limiting".to_string(),
            description: "Add rate limiting to prevent API abuse and DoS attacks".to_string(),
            impact: "Prevents API abuse and ensures availability".to_string(),
            effort: Effort::Medium,
            estimated_hours: 8,
            steps: Some(vec![
                "Install rate limiting middleware".to_string(),
                "Configure limits per endpoint".to_string(),
                "Add Redis for distributed limiting".to_string(),
                "Monitor and adjust limits".to_string(),
            ]),
        },
        Recommendation {
            id: "REC-003".to_string(),
            category: RecommendationCategory::Performance,
            priority: Priority::Medium,
            title: "Optimize Database Queries".to_string(),
            description: "Add indexes and optimize slow queries identified in analysis"
                .to_string(),
            impact: "Can improve response times by 50%+".to_string(),
            effort: Effort::Medium,
            estimated_hours: 16,
            steps: Some(vec![
                "Analyze slow query logs".to_string(),
                "Add missing indexes".to_string(),
                "Implement query caching".to_string(),
                "Use database query analyzer".to_string(),
            ]),
        },
    ];

    let critical_count = issues
        .iter()
        .filter(|i| i.severity == Severity::Critical)
        .count();
    if critical_count > 5 {
        recommendations.push(Recommendation {
            id: "REC-004".to_string(),
            category: RecommendationCategory::Process,
            priority: Priority::High,
            title: "Implement Security Training".to_string(),
            description: "Provide security training for development team".to_string(),
            impact: "Reduces future security issues by 60%".to_string(),
            effort: Effort::High,
            estimated_hours: 40,
            steps: None,
        });
    }

    recommendations
}

/// Run the full pipeline against `path` and assemble the report document.
///
/// Infallible by design: traversal and VCS lookups degrade to fallback
/// values internally, so the caller always receives a structurally
/// complete report.
pub fn assemble<R: Rng + ?Sized>(rng: &mut R, path: &Path) -> Report {
    let stats = fauxdit_walk::scan_repository(path, rng).into_stats();
    let issues = fauxdit_gen::generate_issues(rng);
    let scores = calculate_scores(rng, &issues);
    let recommendations = build_recommendations(&issues);
    let issues_by_severity = SeverityCounts::from_issues(&issues);
    let issue_count = issues.len();

    Report {
        scan_completed_at: timestamp(),
        scan_duration_ms: rng.random_range(45_000..=65_000),
        repository: RepositoryInfo {
            path: path.display().to_string(),
            commit: fauxdit_git::head_commit(path),
            branch: fauxdit_git::current_branch(path),
        },
        scores,
        statistics: Statistics {
            files_analyzed: stats.total_files,
            total_issues: issue_count,
            issues_by_severity,
            languages: stats.languages,
        },
        vulnerabilities: issues,
        recommendations,
        dependencies: dependency_counts(rng),
        testing: TestingSummary {
            coverage_percent: rng.random_range(60..=85),
            missing_tests: rng.random_range(15..=45),
        },
        quality: quality_block(rng, issue_count),
    }
}

fn timestamp() -> String {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_default()
}

/// Independently randomized counts; no cross-field consistency is enforced.
fn dependency_counts<R: Rng + ?Sized>(rng: &mut R) -> DependencyCounts {
    DependencyCounts {
        total: rng.random_range(800..=1500),
        direct: rng.random_range(50..=150),
        vulnerable: rng.random_range(15..=30),
        outdated: rng.random_range(100..=300),
        deprecated: rng.random_range(5..=15),
    }
}

fn quality_block<R: Rng + ?Sized>(rng: &mut R, issue_count: usize) -> Quality {
    Quality {
        metrics: QualityMetrics {
            cyclomatic_complexity: round1(rng.random_range(8.0..15.0)),
            cognitive_complexity: round1(rng.random_range(6.0..12.0)),
            maintainability_index: rng.random_range(65..=85),
        },
        duplicated_lines_percent: round1(rng.random_range(5.0..20.0)),
        technical_debt_hours: issue_count as u64 * rng.random_range(2..=4),
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(1)
    }

    fn issue(category: Category, severity: Severity) -> Issue {
        use fauxdit_types::{Location, Remediation};
        Issue {
            id: "X-000".to_string(),
            severity,
            category,
            title: "t".to_string(),
            location: Location {
                file: "f".to_string(),
                line: 1,
                column: None,
            },
            impact: "i".to_string(),
            remediation: Remediation {
                immediate: "r".to_string(),
                steps: vec![],
            },
            cwe: None,
            cvss: None,
            evidence: None,
        }
    }

    fn population(security: usize, performance: usize, maintainability: usize) -> Vec<Issue> {
        let mut issues = Vec::new();
        issues.extend((0..security).map(|_| issue(Category::Security, Severity::Low)));
        issues.extend((0..performance).map(|_| issue(Category::Performance, Severity::Low)));
        issues
            .extend((0..maintainability).map(|_| issue(Category::Maintainability, Severity::Low)));
        issues
    }

    #[test]
    fn scores_deduct_per_category() {
        let scores = calculate_scores(&mut rng(), &population(10, 5, 8));
        // 100 - 15, 100 - 10, 100 - 4.
        assert_eq!(scores.security, 85);
        assert_eq!(scores.performance, 90);
        assert_eq!(scores.maintainability, 96);
        // (85 + 90 + 96) / 3 = 90.33, truncated.
        assert_eq!(scores.overall, 90);
    }

    #[test]
    fn score_deductions_saturate() {
        let scores = calculate_scores(&mut rng(), &population(100, 100, 100));
        assert_eq!(scores.security, 65);
        assert_eq!(scores.performance, 70);
        assert_eq!(scores.maintainability, 80);
        // (65 + 70 + 80) / 3 = 71.66, truncated.
        assert_eq!(scores.overall, 71);
    }

    #[test]
    fn scores_on_empty_population_are_perfect() {
        let scores = calculate_scores(&mut rng(), &[]);
        assert_eq!(scores.overall, 100);
        assert_eq!(scores.security, 100);
        assert_eq!(scores.performance, 100);
        assert_eq!(scores.maintainability, 100);
    }

    #[test]
    fn testing_score_in_range() {
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let scores = calculate_scores(&mut rng, &[]);
            assert!((65..=85).contains(&scores.testing));
        }
    }

    #[test]
    fn fractional_deduction_truncates() {
        // 7 maintainability issues deduct 3.5: int(96.5) = 96.
        let scores = calculate_scores(&mut rng(), &population(0, 0, 7));
        assert_eq!(scores.maintainability, 96);
    }

    #[test]
    fn base_recommendations_are_three_in_order() {
        let recommendations = build_recommendations(&[]);
        assert_eq!(recommendations.len(), 3);
        assert_eq!(recommendations[0].id, "REC-001");
        assert_eq!(recommendations[1].id, "REC-002");
        assert_eq!(recommendations[2].id, "REC-003");
        assert_eq!(recommendations[0].estimated_hours, 4);
        assert_eq!(recommendations[1].estimated_hours, 8);
        assert_eq!(recommendations[2].estimated_hours, 16);
    }

    #[test]
    fn five_criticals_do_not_trigger_training() {
        let issues: Vec<Issue> = (0..5)
            .map(|_| issue(Category::Security, Severity::Critical))
            .collect();
        assert_eq!(build_recommendations(&issues).len(), 3);
    }

    #[test]
    fn six_criticals_trigger_training() {
        let issues: Vec<Issue> = (0..6)
            .map(|_| issue(Category::Security, Severity::Critical))
            .collect();
        let recommendations = build_recommendations(&issues);
        assert_eq!(recommendations.len(), 4);
        let training = &recommendations[3];
        assert_eq!(training.id, "REC-004");
        assert_eq!(training.category, RecommendationCategory::Process);
        assert_eq!(training.estimated_hours, 40);
        assert!(training.steps.is_none());
    }

    #[test]
    fn technical_debt_scales_with_issue_count() {
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let quality = quality_block(&mut rng, 250);
            assert!(quality.technical_debt_hours >= 500);
            assert!(quality.technical_debt_hours <= 1000);
            assert_eq!(quality.technical_debt_hours % 250, 0);
        }
    }

    #[test]
    fn quality_floats_have_one_decimal() {
        let quality = quality_block(&mut rng(), 10);
        let scaled = quality.metrics.cyclomatic_complexity * 10.0;
        assert!((scaled - scaled.round()).abs() < 1e-9);
        assert!((8.0..=15.0).contains(&quality.metrics.cyclomatic_complexity));
        assert!((6.0..=12.0).contains(&quality.metrics.cognitive_complexity));
        assert!((5.0..=20.0).contains(&quality.duplicated_lines_percent));
    }

    #[test]
    fn dependency_counts_in_documented_ranges() {
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let deps = dependency_counts(&mut rng);
            assert!((800..=1500).contains(&deps.total));
            assert!((50..=150).contains(&deps.direct));
            assert!((15..=30).contains(&deps.vulnerable));
            assert!((100..=300).contains(&deps.outdated));
            assert!((5..=15).contains(&deps.deprecated));
        }
    }

    #[test]
    fn assemble_holds_report_invariants() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("main.rs"), "fn main() {}").unwrap();

        let report = assemble(&mut rng(), dir.path());

        assert_eq!(report.statistics.total_issues, report.vulnerabilities.len());
        assert_eq!(
            report.statistics.issues_by_severity.total(),
            report.statistics.total_issues
        );
        assert!((200..=350).contains(&report.statistics.total_issues));
        assert!((45_000..=65_000).contains(&report.scan_duration_ms));
        assert!(report.scores.overall >= 40);
        assert!(report.scores.security >= 40);
        assert!(report.scores.performance >= 50);
        assert!(report.scores.maintainability >= 60);
        assert!((65..=85).contains(&report.scores.testing));
        assert!(matches!(report.recommendations.len(), 3 | 4));
        assert!(!report.repository.commit.is_empty());
        assert!(!report.repository.branch.is_empty());
        assert!(!report.scan_completed_at.is_empty());
    }

    #[test]
    fn assemble_missing_path_still_completes() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("gone");

        let report = assemble(&mut rng(), &missing);

        assert!((800..=1500).contains(&report.statistics.files_analyzed));
        assert_eq!(report.statistics.languages["TypeScript"], 65);
        assert_eq!(report.repository.branch, "main");
        assert_eq!(report.repository.commit.len(), 12);
    }
}
