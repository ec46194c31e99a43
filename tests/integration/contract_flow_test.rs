use std::sync::Arc;

use genie_core::services::{GENERIC_TEMPLATE, MARKETPLACE_TEMPLATE, NFT_TEMPLATE, TOKEN_TEMPLATE};
use genie_core::{
    enhance_requirements, require_input, ContractKind, GasOptimizer, GenieError, InstantLatency,
    MockDeploymentService, RiskLevel, Severity,
};

const SAFE_CONTRACT: &str = r#"contract Counter {
    uint256 public count;

    function increment(uint256 by) public {
        require(by > 0, "zero");
        count += by;
    }
}"#;

fn service() -> MockDeploymentService {
    MockDeploymentService::new(Arc::new(InstantLatency))
}

#[tokio::test]
async fn test_generation_priority_order() {
    let service = service();
    let cases = [
        ("An NFT marketplace with token rewards", ContractKind::Nft, NFT_TEMPLATE),
        ("ERC20 with a marketplace", ContractKind::Token, TOKEN_TEMPLATE),
        ("A MARKETPLACE for domains", ContractKind::Marketplace, MARKETPLACE_TEMPLATE),
        ("a simple escrow", ContractKind::Generic, GENERIC_TEMPLATE),
    ];

    for (requirements, kind, template) in cases {
        let contract = service.generate_contract(requirements).await;
        assert_eq!(contract.kind, kind, "requirements {:?}", requirements);
        assert_eq!(contract.code, template);
    }
}

#[tokio::test]
async fn test_enhanced_requirements_pick_family() {
    let prompt = enhance_requirements("marketplace", "sell domain names");
    assert_eq!(
        prompt,
        "Generate a marketplace contract with these requirements: sell domain names"
    );
    assert_eq!(
        service().generate_contract(&prompt).await.kind,
        ContractKind::Marketplace
    );
}

#[tokio::test]
async fn test_scan_risk_follows_findings() {
    let service = service();

    let safe = service.scan_contract(SAFE_CONTRACT).await;
    assert_eq!(safe.overall_risk, RiskLevel::Low);
    assert_eq!(safe.issue_count, 1);
    assert_eq!(safe.issues[0].severity, Severity::Info);

    let timed = service
        .scan_contract("require(block.timestamp > start);")
        .await;
    assert_eq!(timed.overall_risk, RiskLevel::Medium);
    assert_eq!(timed.issues[0].kind, "Time Manipulation");

    let drained = service
        .scan_contract("uint b = this.balance; require(b > 0);")
        .await;
    assert_eq!(drained.overall_risk, RiskLevel::High);
    assert_eq!(drained.count_by_severity(Severity::Critical), 1);
    assert_eq!(drained.issue_count, drained.issues.len());
}

#[tokio::test]
async fn test_scan_checks_are_case_sensitive() {
    let report = service().scan_contract("THIS.BALANCE").await;
    assert_eq!(report.overall_risk, RiskLevel::Low);
}

#[tokio::test]
async fn test_documentation_follows_source_order() {
    let code = "event Minted(uint id);\nfunction mint() {}\nfunction burn() {}\nevent Burned(uint id);";
    let docs = service().generate_documentation(code).await;

    let functions: Vec<_> = docs.functions.iter().map(|f| f.name.as_str()).collect();
    let events: Vec<_> = docs.events.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(functions, ["mint", "burn"]);
    assert_eq!(events, ["Minted", "Burned"]);
    assert_eq!(docs.contract_name, "Generated Contract");
    assert_eq!(docs.functions[0].returns, "Description of return value");
}

#[tokio::test]
async fn test_documentation_of_plain_text_is_empty() {
    let docs = service().generate_documentation("no solidity here").await;
    assert!(docs.functions.is_empty());
    assert!(docs.events.is_empty());
    assert_eq!(docs.variables, ["name", "symbol", "owner"]);
}

#[tokio::test]
async fn test_gas_optimizer_savings_range() {
    let optimizer = GasOptimizer::with_seed(Arc::new(InstantLatency), 99);

    for _ in 0..20 {
        let result = optimizer.optimize(SAFE_CONTRACT).await;
        assert!((80_000..130_000).contains(&result.gas_before));
        assert!(result.gas_after * 2 >= result.gas_before);
        assert!(result.gas_after * 10 <= result.gas_before * 8 + 10);
        assert!(result.optimized_code.contains("uint128 public count"));
        assert!(result.optimized_code.ends_with("\n}"));
    }
}

#[test]
fn test_blank_input_rejected_before_service() {
    let err = require_input(" \n\t", "Please provide contract code to scan").unwrap_err();
    assert!(matches!(err, GenieError::ValidationError(_)));
    assert_eq!(require_input("x", "unused").unwrap(), "x");
}
