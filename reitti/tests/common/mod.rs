#![allow(dead_code)]

use reitti::{BoxError, Handler, HandlerError};
use std::sync::{
    Arc,
    atomic::{AtomicBool, AtomicUsize, Ordering},
};

// ============================================================================
// Test Context
// ============================================================================

/// Stand-in for an ambient request context with cancellation.
#[derive(Debug, Default)]
pub struct TestContext {
    pub request_id: u64,
    cancelled: AtomicBool,
}

impl TestContext {
    pub fn new(request_id: u64) -> Self {
        Self {
            request_id,
            cancelled: AtomicBool::new(false),
        }
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

#[derive(Debug)]
pub struct Cancelled;

impl std::fmt::Display for Cancelled {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("context cancelled")
    }
}

impl std::error::Error for Cancelled {}

// ============================================================================
// Test Handlers
// ============================================================================

/// Variadic handler body that returns the captures it received.
pub fn echo_args(_ctx: &TestContext, args: &[String]) -> Result<Vec<String>, BoxError> {
    Ok(args.to_vec())
}

/// Direct handler that counts its invocations.
pub struct CountingHandler {
    pub calls: Arc<AtomicUsize>,
}

impl Handler<TestContext, Vec<String>> for CountingHandler {
    fn call(&self, _ctx: &TestContext, args: &[String]) -> Result<Vec<String>, HandlerError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(args.to_vec())
    }
}

pub fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}
