use crate::engine::RatioEngine;
use crate::error::Result;
use crate::schema::{EnrichedStatement, RawStatement};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

/// One side of a narration exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Model,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub text: String,
}

impl ChatTurn {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            text: text.into(),
        }
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Model,
            text: text.into(),
        }
    }
}

/// Per-session state: the enrichment cache and the running conversation.
/// Created at session start, cleared at session end; passed by reference into
/// presentation code so the engine itself stays stateless.
#[derive(Default)]
pub struct AnalysisSession {
    cache: HashMap<u64, Arc<EnrichedStatement>>,
    history: Vec<ChatTurn>,
}

impl AnalysisSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enriches `raw`, memoized by content fingerprint. Repeated renders of
    /// the same uploaded table reuse the cached result; re-uploading changed
    /// content misses the cache.
    pub fn enriched(
        &mut self,
        engine: &RatioEngine,
        raw: &RawStatement,
    ) -> Result<Arc<EnrichedStatement>> {
        let key = raw.fingerprint();
        if let Some(cached) = self.cache.get(&key) {
            debug!("Enrichment cache hit for fingerprint {:#018x}", key);
            return Ok(Arc::clone(cached));
        }

        let enriched = Arc::new(engine.derive_enriched_statement(raw)?);
        info!(
            "Derived enriched statement: {} rows (fingerprint {:#018x})",
            enriched.rows.len(),
            key
        );
        self.cache.insert(key, Arc::clone(&enriched));
        Ok(enriched)
    }

    pub fn push_turn(&mut self, turn: ChatTurn) {
        self.history.push(turn);
    }

    pub fn history(&self) -> &[ChatTurn] {
        &self.history
    }

    pub fn cached_statements(&self) -> usize {
        self.cache.len()
    }

    /// Session end: drops cached enrichments and the chat transcript.
    pub fn reset(&mut self) {
        self.cache.clear();
        self.history.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::StatementRow;

    fn statement(current_total: f64) -> RawStatement {
        RawStatement::new(vec![StatementRow {
            label: "TOTAL ASSETS".to_string(),
            prior: 1000.0,
            current: current_total,
        }])
    }

    #[test]
    fn test_cache_hit_on_identical_content() {
        let engine = RatioEngine::default();
        let mut session = AnalysisSession::new();

        let first = session.enriched(&engine, &statement(1200.0)).unwrap();
        let second = session.enriched(&engine, &statement(1200.0)).unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(session.cached_statements(), 1);
    }

    #[test]
    fn test_cache_miss_on_changed_values() {
        let engine = RatioEngine::default();
        let mut session = AnalysisSession::new();

        session.enriched(&engine, &statement(1200.0)).unwrap();
        session.enriched(&engine, &statement(1300.0)).unwrap();

        assert_eq!(session.cached_statements(), 2);
    }

    #[test]
    fn test_failed_derivation_is_not_cached() {
        let engine = RatioEngine::default();
        let mut session = AnalysisSession::new();
        let raw = RawStatement::new(vec![StatementRow {
            label: "Cash".to_string(),
            prior: 1.0,
            current: 2.0,
        }]);

        assert!(session.enriched(&engine, &raw).is_err());
        assert_eq!(session.cached_statements(), 0);
    }

    #[test]
    fn test_history_accumulates_and_resets() {
        let mut session = AnalysisSession::new();
        session.push_turn(ChatTurn::user("How did assets grow?"));
        session.push_turn(ChatTurn::model("Assets grew 20% year over year."));
        assert_eq!(session.history().len(), 2);
        assert_eq!(session.history()[0].role, ChatRole::User);

        session.reset();
        assert!(session.history().is_empty());
        assert_eq!(session.cached_statements(), 0);
    }
}
