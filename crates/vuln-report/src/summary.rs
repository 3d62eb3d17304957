use std::collections::BTreeMap;

use crate::model::{ScanResult, Vulnerability};
use crate::severity::Severity;

/// Shown for missing text fields.
pub const PLACEHOLDER: &str = "—";

/// A vulnerability with its placeholders filled in.
#[derive(Debug, Clone, PartialEq)]
pub struct Finding {
    pub id: String,
    pub title: String,
    pub severity: Severity,
    pub package: String,
    pub version: String,
    pub fixed_in: Option<String>,
    pub project: Option<String>,
}

impl Finding {
    pub fn from_vulnerability(vuln: &Vulnerability, project: Option<&str>) -> Self {
        let or_placeholder =
            |value: &Option<String>| value.clone().unwrap_or_else(|| PLACEHOLDER.to_string());
        Self {
            id: or_placeholder(&vuln.id),
            title: vuln.title.clone().unwrap_or_else(|| "Unknown".to_string()),
            severity: vuln
                .severity
                .as_deref()
                .map(Severity::parse)
                .unwrap_or_default(),
            package: or_placeholder(&vuln.package_name),
            version: or_placeholder(&vuln.version),
            fixed_in: vuln.fixed_in.clone(),
            project: project.map(str::to_string),
        }
    }

    /// `package@version`, or just the package when the version is unknown.
    pub fn coordinate(&self) -> String {
        if self.version == PLACEHOLDER {
            self.package.clone()
        } else {
            format!("{}@{}", self.package, self.version)
        }
    }
}

/// Flattens every scan into findings, in document order.
pub fn findings(scans: &[ScanResult]) -> Vec<Finding> {
    scans
        .iter()
        .flat_map(|scan| {
            scan.vulnerabilities
                .iter()
                .map(|v| Finding::from_vulnerability(v, scan.project_name.as_deref()))
        })
        .collect()
}

/// Findings keyed by severity. Iterate with `.iter().rev()` for highest first.
pub fn group_by_severity(findings: &[Finding]) -> BTreeMap<Severity, Vec<Finding>> {
    let mut groups: BTreeMap<Severity, Vec<Finding>> = BTreeMap::new();
    for finding in findings {
        groups
            .entry(finding.severity)
            .or_default()
            .push(finding.clone());
    }
    groups
}

/// Counts per severity plus the total.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Summary {
    counts: BTreeMap<Severity, usize>,
    total: usize,
}

impl Summary {
    pub fn from_findings(findings: &[Finding]) -> Self {
        let mut summary = Self::default();
        for finding in findings {
            *summary.counts.entry(finding.severity).or_default() += 1;
            summary.total += 1;
        }
        summary
    }

    pub fn count(&self, severity: Severity) -> usize {
        self.counts.get(&severity).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// `critical: N` through `unknown: N`, then `total: N`.
    pub fn lines(&self) -> Vec<String> {
        Severity::ALL
            .iter()
            .map(|severity| format!("{}: {}", severity.key(), self.count(*severity)))
            .chain(std::iter::once(format!("total: {}", self.total)))
            .collect()
    }
}
