use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use kursbot::domain::RateSnapshot;
use kursbot::error::RateError;
use kursbot::port::RateSource;

/// Rate source replaying a scripted sequence of results, then repeating the last one.
pub struct ScriptedRates {
    script: Mutex<Vec<Result<RateSnapshot, RateError>>>,
    calls: AtomicUsize,
}

impl ScriptedRates {
    pub fn new(script: Vec<Result<RateSnapshot, RateError>>) -> Arc<Self> {
        assert!(!script.is_empty(), "script needs at least one result");
        Arc::new(Self {
            script: Mutex::new(script),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn always(result: Result<RateSnapshot, RateError>) -> Arc<Self> {
        Self::new(vec![result])
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RateSource for ScriptedRates {
    fn name(&self) -> &'static str {
        "scripted"
    }

    async fn fetch(&self) -> Result<RateSnapshot, RateError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mut script = self.script.lock().expect("lock rate script");
        if script.len() > 1 {
            script.remove(0)
        } else {
            script[0].clone()
        }
    }
}
