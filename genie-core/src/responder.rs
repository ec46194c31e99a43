//! Canned assistant replies.
//!
//! Replies are chosen by an ordered rule table: the first rule whose mode
//! filter admits the current mode and whose keywords occur in the
//! lower-cased user text wins. Mode-specific rules come first, so a
//! contracts-mode question about tokens gets the code sample rather than the
//! generic token explainer.

use crate::models::AssistantMode;

pub const VULNERABILITY_ANALYSIS: &str = "I've analyzed your smart contract for vulnerabilities. The most common security issues in smart contracts include reentrancy attacks, integer overflow/underflow, and front-running. To protect against these, I recommend:\n\n1. Following the checks-effects-interactions pattern\n2. Using SafeMath for arithmetic operations\n3. Implementing access controls with modifiers\n4. Getting your contract professionally audited before deployment";

pub const AUDIT_CHECKLIST: &str = "A comprehensive security audit examines your code for vulnerabilities and best practices. I'd need to see your contract to provide specific feedback, but here are common areas I check:\n\n- Access control mechanisms\n- Input validation\n- Gas optimization\n- Business logic flaws\n- External contract dependencies\n- Event emissions\n- Upgradeability patterns";

pub const ERC721_SAMPLE: &str = "For implementing tokens and NFTs, I recommend using the OpenZeppelin library as a foundation. For ERC-721 NFTs, your implementation might look like:\n\n```solidity\n// SPDX-License-Identifier: MIT\npragma solidity ^0.8.17;\n\nimport \"@openzeppelin/contracts/token/ERC721/extensions/ERC721URIStorage.sol\";\nimport \"@openzeppelin/contracts/access/Ownable.sol\";\n\ncontract MyNFT is ERC721URIStorage, Ownable {\n    uint256 private _tokenIds;\n    \n    constructor() ERC721(\"MyNFT\", \"MNFT\") {}\n    \n    function mintNFT(address recipient, string memory tokenURI) public onlyOwner returns (uint256) {\n        uint256 newItemId = _tokenIds;\n        _mint(recipient, newItemId);\n        _setTokenURI(newItemId, tokenURI);\n        _tokenIds++;\n        return newItemId;\n    }\n}\n```";

pub const GAS_TIPS: &str = "When deploying smart contracts, consider these optimization techniques to reduce gas costs:\n\n1. Use calldata instead of memory for function parameters\n2. Pack variables to use fewer storage slots\n3. Use libraries for common functions\n4. Cache storage variables in memory during complex operations\n5. Batch operations where possible\n6. Consider using the 'unchecked' block for math when overflow is impossible\n\nFor deployment, I recommend using Hardhat or Foundry with proper testing on testnets before mainnet.";

pub const SMART_CONTRACT_EXPLAINER: &str = "Smart contracts are self-executing contracts with the terms directly written into code. They run on blockchain networks like Ethereum and automatically execute when predetermined conditions are met. For development, I recommend using Solidity with frameworks like Hardhat or Foundry for testing and deployment. Would you like to know more about a specific aspect of smart contract development?";

pub const TOKEN_EXPLAINER: &str = "To create a token, you can implement the ERC-20 standard for fungible tokens or ERC-721/ERC-1155 for NFTs. OpenZeppelin provides secure implementations you can extend. For tokens with vesting schedules, you'll need to implement time-based token release mechanisms. Would you like me to explain how to implement a specific token feature like vesting, staking, or governance?";

pub const DEFI_EXPLAINER: &str = "DeFi (Decentralized Finance) applications typically include lending protocols, DEXs (decentralized exchanges), yield farming, and stablecoins. Building a DeFi application requires strong security considerations and usually involves complex contract interactions. The main components often include liquidity pools, oracles for price feeds, and governance mechanisms. What specific DeFi functionality are you looking to build?";

pub const ASK_ME_MORE: &str = "I'm your Web3 AI assistant with expertise in blockchain technology, smart contracts, and decentralized applications. Could you provide more details about your project or specific blockchain questions? I can help with contract development, security auditing, or architectural guidance for your Web3 application.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResponseRule {
    pub name: &'static str,
    /// `None` applies in every mode.
    pub mode: Option<AssistantMode>,
    pub keywords: &'static [&'static str],
    pub response: &'static str,
}

impl ResponseRule {
    fn matches(&self, text_lower: &str, mode: AssistantMode) -> bool {
        self.mode.map_or(true, |m| m == mode)
            && self.keywords.iter().any(|k| text_lower.contains(k))
    }
}

const RULES: &[ResponseRule] = &[
    ResponseRule {
        name: "security_vulnerabilities",
        mode: Some(AssistantMode::Security),
        keywords: &["vulnerabilit", "hack", "exploit"],
        response: VULNERABILITY_ANALYSIS,
    },
    ResponseRule {
        name: "security_audit",
        mode: Some(AssistantMode::Security),
        keywords: &["audit", "review"],
        response: AUDIT_CHECKLIST,
    },
    ResponseRule {
        name: "contracts_nft_token",
        mode: Some(AssistantMode::Contracts),
        keywords: &["nft", "token"],
        response: ERC721_SAMPLE,
    },
    ResponseRule {
        name: "contracts_deploy_gas",
        mode: Some(AssistantMode::Contracts),
        keywords: &["deploy", "gas"],
        response: GAS_TIPS,
    },
    ResponseRule {
        name: "smart_contract",
        mode: None,
        keywords: &["smart contract"],
        response: SMART_CONTRACT_EXPLAINER,
    },
    ResponseRule {
        name: "token",
        mode: None,
        keywords: &["token", "erc20"],
        response: TOKEN_EXPLAINER,
    },
    ResponseRule {
        name: "defi",
        mode: None,
        keywords: &["defi"],
        response: DEFI_EXPLAINER,
    },
];

/// The rule table in evaluation order. The fallback is not part of it.
pub fn rules() -> &'static [ResponseRule] {
    RULES
}

/// Picks the rule that answers `text` in `mode`, if any.
pub fn matching_rule(text: &str, mode: AssistantMode) -> Option<&'static ResponseRule> {
    let lower = text.to_lowercase();
    RULES.iter().find(|rule| rule.matches(&lower, mode))
}

/// Deterministic canned reply for `text` in `mode`.
pub fn respond(text: &str, mode: AssistantMode) -> &'static str {
    matching_rule(text, mode).map_or(ASK_ME_MORE, |rule| rule.response)
}

pub fn welcome_message(mode: AssistantMode) -> &'static str {
    match mode {
        AssistantMode::Blockchain => "Hello! I'm Web3 AI Assistant. I can help with blockchain development, smart contracts, and more. What can I help you with today?",
        AssistantMode::Security => "Hello! I'm the Security AI Assistant. I can help identify vulnerabilities in your smart contracts and provide security recommendations. How can I assist you?",
        AssistantMode::Contracts => "Hello! I'm the Smart Contract AI Assistant. I can help generate, modify, and explain smart contract code. What kind of contract are you working on?",
    }
}

pub fn persona_prompt(mode: AssistantMode) -> &'static str {
    match mode {
        AssistantMode::Blockchain => {
            "You are an expert blockchain AI assistant helping with Web3 development questions."
        }
        AssistantMode::Security => "You are a security specialist AI assistant focused on smart contract auditing and blockchain security.",
        AssistantMode::Contracts => "You are a smart contract developer AI assistant specializing in Solidity and contract implementation.",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryContext {
    Blockchain,
    General,
}

const CONTEXT_KEYWORDS: &[&str] = &[
    "contract", "token", "nft", "defi", "dao", "gas", "solidity", "security", "eth",
];

pub fn detect_context(text: &str) -> QueryContext {
    let lower = text.to_lowercase();
    if CONTEXT_KEYWORDS.iter().any(|k| lower.contains(k)) {
        QueryContext::Blockchain
    } else {
        QueryContext::General
    }
}
