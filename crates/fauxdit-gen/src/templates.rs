//! Static template pools for issue synthesis.
//!
//! One pool per category. Generated issues draw templates with replacement,
//! so titles repeat across a report; that matches what a real analyzer
//! produces when the same rule fires in many places.

pub struct SecurityTemplate {
    pub title: &'static str,
    pub cwe_id: &'static str,
    pub cwe_name: &'static str,
    /// Base CVSS score; reported as-is for CRITICAL findings and reduced by
    /// a random offset otherwise.
    pub cvss_base: f64,
    /// Detection pattern the finding pretends to have matched. Also keys
    /// the evidence snippet lookup.
    pub pattern: &'static str,
}

pub struct PerformanceTemplate {
    pub title: &'static str,
    pub impact: &'static str,
    pub pattern: &'static str,
}

pub struct MaintainabilityTemplate {
    pub title: &'static str,
    pub impact: Option<&'static str>,
    pub pattern: &'static str,
}

pub const SECURITY: &[SecurityTemplate] = &[
    SecurityTemplate {
        title: "Hardcoded API Keys in Repository",
        cwe_id: "CWE-798",
        cwe_name: "Use of Hard-coded Credentials",
        cvss_base: 9.8,
        pattern: "api_key|api_secret|password|token",
    },
    SecurityTemplate {
        title: "SQL Injection Vulnerability",
        cwe_id: "CWE-89",
        cwe_name: "SQL Injection",
        cvss_base: 9.1,
        pattern: "SELECT.*FROM.*WHERE.*=",
    },
    SecurityTemplate {
        title: "Cross-Site Scripting (XSS) Vulnerability",
        cwe_id: "CWE-79",
        cwe_name: "Cross-site Scripting",
        cvss_base: 7.5,
        pattern: "innerHTML|dangerouslySetInnerHTML",
    },
    SecurityTemplate {
        title: "Insecure Direct Object Reference",
        cwe_id: "CWE-639",
        cwe_name: "Authorization Bypass",
        cvss_base: 8.2,
        pattern: "req.params.id|userId.*params",
    },
];

pub const PERFORMANCE: &[PerformanceTemplate] = &[
    PerformanceTemplate {
        title: "N+1 Query Problem Detected",
        impact: "Causes 3+ second load times",
        pattern: "forEach.*await.*find",
    },
    PerformanceTemplate {
        title: "Large Bundle Size",
        impact: "Slow initial page load",
        pattern: "import.*from.*lodash",
    },
    PerformanceTemplate {
        title: "Inefficient Algorithm Complexity",
        impact: "O(n²) complexity causing slowdowns",
        pattern: "for.*for.*array",
    },
];

pub const MAINTAINABILITY: &[MaintainabilityTemplate] = &[
    MaintainabilityTemplate {
        title: "High Cyclomatic Complexity",
        impact: None,
        pattern: "if.*if.*if.*if",
    },
    MaintainabilityTemplate {
        title: "Code Duplication Detected",
        impact: None,
        pattern: "function.*similar",
    },
    MaintainabilityTemplate {
        title: "Missing Type Annotations",
        impact: Some("Reduced type safety"),
        pattern: ": any|: unknown",
    },
];

/// Representative file paths findings are attributed to.
pub const FILE_POOL: &[&str] = &[
    "src/api/controllers/user.controller.ts",
    "src/services/auth.service.ts",
    "src/middleware/auth.middleware.ts",
    "src/utils/database.utils.ts",
    "src/components/UserProfile.tsx",
    "src/routes/api.routes.ts",
    "packages/core/src/services/payment.service.ts",
    "apps/api/src/handlers/webhook.handler.ts",
    "lib/security/validator.ts",
    "config/production.config.ts",
];

/// Evidence snippets keyed by a substring of the detection pattern.
pub const SNIPPETS: &[(&str, &str)] = &[
    (
        "api_key",
        "- name: SERVICE_API_KEY\n  value: \"sk-live-1234567890abcdef\"  # EXPOSED!",
    ),
    (
        "SELECT",
        "const query = `SELECT * FROM users WHERE id = ${userId}`;\n// SQL Injection vulnerability!",
    ),
    (
        "innerHTML",
        "element.innerHTML = userInput; // XSS vulnerability!",
    ),
];

pub const GENERIC_SNIPPET: &str = "// Vulnerable code pattern detected";
