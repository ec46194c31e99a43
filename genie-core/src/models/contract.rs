use serde::{Deserialize, Serialize};

/// Template family chosen by the contract generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContractKind {
    #[serde(rename = "NFT")]
    Nft,
    Token,
    Marketplace,
    Generic,
}

impl std::fmt::Display for ContractKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContractKind::Nft => write!(f, "NFT"),
            ContractKind::Token => write!(f, "Token"),
            ContractKind::Marketplace => write!(f, "Marketplace"),
            ContractKind::Generic => write!(f, "Generic"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedContract {
    #[serde(rename = "type")]
    pub kind: ContractKind,
    pub code: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Info,
    Warning,
    Critical,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Info => write!(f, "info"),
            Severity::Warning => write!(f, "warning"),
            Severity::Critical => write!(f, "critical"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanFinding {
    pub severity: Severity,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
}

impl ScanFinding {
    pub fn new(severity: Severity, kind: &str, description: &str) -> Self {
        Self {
            severity,
            kind: kind.to_string(),
            description: description.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// High on any critical finding, medium on any warning, low otherwise.
    pub fn from_findings(findings: &[ScanFinding]) -> Self {
        if findings.iter().any(|f| f.severity == Severity::Critical) {
            RiskLevel::High
        } else if findings.iter().any(|f| f.severity == Severity::Warning) {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "low"),
            RiskLevel::Medium => write!(f, "medium"),
            RiskLevel::High => write!(f, "high"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanReport {
    pub issue_count: usize,
    pub issues: Vec<ScanFinding>,
    pub overall_risk: RiskLevel,
}

impl ScanReport {
    pub fn from_findings(issues: Vec<ScanFinding>) -> Self {
        Self {
            issue_count: issues.len(),
            overall_risk: RiskLevel::from_findings(&issues),
            issues,
        }
    }

    pub fn count_by_severity(&self, severity: Severity) -> usize {
        self.issues.iter().filter(|i| i.severity == severity).count()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionDoc {
    pub name: String,
    pub description: String,
    pub parameters: Vec<String>,
    pub returns: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDoc {
    pub name: String,
    pub description: String,
    pub parameters: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractDocumentation {
    pub contract_name: String,
    pub description: String,
    pub author: String,
    pub functions: Vec<FunctionDoc>,
    pub events: Vec<EventDoc>,
    pub variables: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GasOptimization {
    pub optimized_code: String,
    pub gas_before: u64,
    pub gas_after: u64,
}

impl GasOptimization {
    pub fn gas_saved(&self) -> u64 {
        self.gas_before.saturating_sub(self.gas_after)
    }

    pub fn savings_percent(&self) -> f64 {
        if self.gas_before == 0 {
            0.0
        } else {
            self.gas_saved() as f64 / self.gas_before as f64 * 100.0
        }
    }
}
