use std::sync::Arc;
use std::time::Duration;

use genie_core::responder::{
    ASK_ME_MORE, AUDIT_CHECKLIST, DEFI_EXPLAINER, ERC721_SAMPLE, GAS_TIPS,
    SMART_CONTRACT_EXPLAINER, TOKEN_EXPLAINER, VULNERABILITY_ANALYSIS,
};
use genie_core::{
    respond, welcome_message, AssistantMode, ChatService, ChatSession, InstantLatency,
    LatencyConfig, MessageRole, SimulatedLatency,
};
use tokio::sync::RwLock;

fn instant_service(mode: AssistantMode) -> ChatService {
    ChatService::new(
        Arc::new(RwLock::new(ChatSession::with_mode(mode))),
        Arc::new(InstantLatency),
    )
}

#[test]
fn test_responder_is_deterministic_across_modes() {
    let inputs = [
        "tell me about smart contract upgrades",
        "nft mint",
        "hack",
        "",
        "DeFi lending",
    ];

    for mode in AssistantMode::ALL {
        for input in inputs {
            assert_eq!(respond(input, mode), respond(input, mode));
        }
    }
}

#[test]
fn test_mode_filters_rule_table() {
    let cases = [
        ("exploit", AssistantMode::Security, VULNERABILITY_ANALYSIS),
        ("exploit", AssistantMode::Blockchain, ASK_ME_MORE),
        ("please review", AssistantMode::Security, AUDIT_CHECKLIST),
        ("mint an NFT", AssistantMode::Contracts, ERC721_SAMPLE),
        ("mint an NFT", AssistantMode::Blockchain, ASK_ME_MORE),
        ("Gas costs", AssistantMode::Contracts, GAS_TIPS),
        ("what is a smart contract", AssistantMode::Security, SMART_CONTRACT_EXPLAINER),
        ("launch an erc20", AssistantMode::Blockchain, TOKEN_EXPLAINER),
        ("a token for my DAO", AssistantMode::Security, TOKEN_EXPLAINER),
        ("defi yield", AssistantMode::Contracts, DEFI_EXPLAINER),
    ];

    for (input, mode, expected) in cases {
        assert_eq!(respond(input, mode), expected, "input {:?} in {:?}", input, mode);
    }
}

#[tokio::test]
async fn test_conversation_round_trip() {
    let service = instant_service(AssistantMode::Blockchain);
    assert!(service.ensure_welcome().await);
    assert!(!service.ensure_welcome().await);

    let reply = service.send_message("How do DeFi protocols work?").await;
    assert_eq!(reply.content, DEFI_EXPLAINER);

    let transcript = service.snapshot().await;
    assert_eq!(transcript.len(), 3);
    assert_eq!(transcript[0].content, welcome_message(AssistantMode::Blockchain));
    assert_eq!(transcript[1].role, MessageRole::User);
    assert_eq!(transcript[1].content, "How do DeFi protocols work?");
    assert_eq!(transcript[2].role, MessageRole::Assistant);
    assert_eq!(transcript[2].id, reply.id);
    assert!(!service.is_loading().await);
}

#[tokio::test]
async fn test_switch_mode_resets_transcript() {
    let service = instant_service(AssistantMode::Blockchain);
    service.send_message("hello").await;
    service.send_message("again").await;

    service.switch_mode(AssistantMode::Security).await;

    let transcript = service.snapshot().await;
    assert_eq!(service.mode().await, AssistantMode::Security);
    assert_eq!(transcript.len(), 1);
    assert_eq!(transcript[0].content, welcome_message(AssistantMode::Security));
    assert_eq!(
        service.send_message("audit please").await.content,
        AUDIT_CHECKLIST
    );
}

#[tokio::test]
async fn test_clear_keeps_mode() {
    let service = instant_service(AssistantMode::Contracts);
    service.send_message("gas").await;
    service.clear().await;
    service.clear().await;

    assert!(service.snapshot().await.is_empty());
    assert_eq!(service.mode().await, AssistantMode::Contracts);
}

#[tokio::test(start_paused = true)]
async fn test_reply_waits_for_simulated_latency() {
    let latency = SimulatedLatency::with_seed(LatencyConfig::default(), 42);
    let service = Arc::new(ChatService::new(
        Arc::new(RwLock::new(ChatSession::new())),
        Arc::new(latency),
    ));

    let pending = {
        let service = Arc::clone(&service);
        tokio::spawn(async move { service.send_message("what is a token?").await })
    };

    tokio::time::sleep(Duration::from_millis(500)).await;
    assert!(service.is_loading().await);
    assert_eq!(service.snapshot().await.len(), 1);

    let reply = pending.await.unwrap();
    assert_eq!(reply.content, TOKEN_EXPLAINER);
    assert!(!service.is_loading().await);
    assert_eq!(service.snapshot().await.len(), 2);
}

#[tokio::test]
async fn test_message_ids_unique() {
    let service = instant_service(AssistantMode::Blockchain);
    for i in 0..10 {
        service.send_message(&format!("message {}", i)).await;
    }

    let mut ids: Vec<_> = service.snapshot().await.iter().map(|m| m.id).collect();
    let total = ids.len();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), total);
}
