use std::sync::{Arc, LazyLock, Mutex};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use regex::Regex;
use tracing::info;

use crate::latency::{Latency, Operation};
use crate::models::GasOptimization;

static CLOSE_PAREN_BRACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\)\s*\{").expect("brace pattern is valid"));

static FOR_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"for \(.*\) \{").expect("for-loop pattern is valid"));

const GAS_BEFORE_MIN: u64 = 80_000;
const GAS_BEFORE_SPAN: u64 = 50_000;

/// Simulated gas optimizer: textual rewrites plus made-up gas figures.
pub struct GasOptimizer {
    latency: Arc<dyn Latency>,
    rng: Mutex<StdRng>,
}

impl GasOptimizer {
    pub fn new(latency: Arc<dyn Latency>) -> Self {
        Self {
            latency,
            rng: Mutex::new(StdRng::from_os_rng()),
        }
    }

    pub fn with_seed(latency: Arc<dyn Latency>, seed: u64) -> Self {
        Self {
            latency,
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    pub async fn optimize(&self, code: &str) -> GasOptimization {
        self.latency.wait(Operation::OptimizeGas).await;

        let optimized_code = rewrite_source(code);
        let (gas_before, gas_after) = match self.rng.lock() {
            Ok(mut rng) => estimate_gas(&mut *rng),
            Err(poisoned) => estimate_gas(&mut *poisoned.into_inner()),
        };

        info!(gas_before, gas_after, "Gas optimization complete!");
        GasOptimization {
            optimized_code,
            gas_before,
            gas_after,
        }
    }
}

/// Applies the rewrites in order and closes the opened `unchecked` block.
pub fn rewrite_source(code: &str) -> String {
    let rewritten = code
        .replace("uint256", "uint128")
        .replace("memory", "calldata")
        .replace("for (", "unchecked { for (");
    let rewritten = CLOSE_PAREN_BRACE.replace_all(&rewritten, ") {");
    let rewritten = FOR_HEADER.replace_all(&rewritten, "$0 // Gas optimization");
    format!("{}\n}}", rewritten)
}

/// Before in 80000..130000; after saves between 20% and 50% of it.
pub fn estimate_gas<R: Rng + ?Sized>(rng: &mut R) -> (u64, u64) {
    let before = GAS_BEFORE_MIN + rng.random_range(0..GAS_BEFORE_SPAN);
    let ratio: f64 = rng.random_range(0.2..0.5);
    let saved = (before as f64 * ratio).floor() as u64;
    (before, before - saved)
}
