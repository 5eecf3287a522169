//! Debounced username availability validation
//!
//! Implements the validation pipeline: local syntax first, then (only when
//! syntax passes) a debounced remote existence check. Per-field state lives
//! in a registry keyed by host-supplied field id; each entry owns its own
//! debounce timer handle, so fields never share timer state.
//!
//! Cancellation is cooperative. A scheduled check that has not fired yet is
//! aborted outright; a request already in flight is never aborted, its
//! result is discarded if the field has moved on by the time it lands.

use std::collections::HashMap;
use std::sync::Arc;

use jid_availability_checker::{CheckRequest, CheckerError};
use tokio::sync::RwLock;
use tokio::task::JoinHandle;

use crate::error::{CoreError, CoreResult};
use crate::services::ServiceContext;
use crate::types::{
    compute_display_state, DisplayState, FieldConfig, FieldInput, SyntaxViolation, ValidationState,
};
use crate::validation::validate_local_part;

/// Per-field registry entry.
struct FieldEntry {
    config: FieldConfig,
    input: FieldInput,
    state: ValidationState,
    /// Bumped on every pipeline run. A scheduled check belongs to exactly
    /// one generation and gives up when the field has moved on.
    generation: u64,
    /// Timer for the scheduled check, if one is outstanding. The timer
    /// clears this slot itself right before issuing the request, so only
    /// timers that have not fired are ever aborted.
    pending_timer: Option<JoinHandle<()>>,
}

impl FieldEntry {
    /// Invalidate any scheduled check for this field.
    fn cancel_pending(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        if let Some(timer) = self.pending_timer.take() {
            timer.abort();
        }
    }
}

/// Username availability validator.
///
/// One instance serves all fields of a page; fields are independent. Must be
/// used inside a tokio runtime (checks are scheduled with `tokio::spawn`).
pub struct ValidatorService {
    ctx: Arc<ServiceContext>,
    fields: Arc<RwLock<HashMap<String, FieldEntry>>>,
}

impl ValidatorService {
    /// Create a validator service instance
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self {
            ctx,
            fields: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    // ===== Field lifecycle =====

    /// Register a field. The initial state is `Untouched` and the domain is
    /// preselected to the catalog default.
    ///
    /// Re-registering an id replaces the previous field (and cancels its
    /// pending check).
    pub async fn register_field(&self, field_id: &str, config: FieldConfig) -> CoreResult<()> {
        if config.min_length == 0 {
            return Err(CoreError::InvalidConfig(
                "min_length must be at least 1".to_string(),
            ));
        }
        if config.min_length > config.max_length {
            return Err(CoreError::InvalidConfig(format!(
                "min_length {} exceeds max_length {}",
                config.min_length, config.max_length
            )));
        }

        let domain = self.ctx.hosts.default_domain().to_string();
        if !self.ctx.hosts.is_selectable(&domain, config.register) {
            return Err(CoreError::InvalidConfig(format!(
                "default domain {domain} is not selectable for this field"
            )));
        }

        log::debug!("[Validator] Registering field {field_id}");
        {
            let mut fields = self.fields.write().await;
            if let Some(mut old) = fields.insert(
                field_id.to_string(),
                FieldEntry {
                    config,
                    input: FieldInput {
                        local_part: String::new(),
                        domain,
                    },
                    state: ValidationState::Untouched,
                    generation: 0,
                    pending_timer: None,
                },
            ) {
                old.cancel_pending();
            }
        }

        self.notify(field_id, &ValidationState::Untouched).await;
        Ok(())
    }

    /// Remove a field (the host tore the form down). Cancels any pending
    /// check.
    pub async fn remove_field(&self, field_id: &str) -> CoreResult<()> {
        let mut fields = self.fields.write().await;
        let mut entry = fields
            .remove(field_id)
            .ok_or_else(|| CoreError::FieldNotFound(field_id.to_string()))?;
        entry.cancel_pending();
        log::debug!("[Validator] Removed field {field_id}");
        Ok(())
    }

    /// Reset a field to `Untouched`, as if the user had not entered
    /// anything. Cancels any pending check; the domain selection is kept.
    pub async fn reset(&self, field_id: &str) -> CoreResult<()> {
        {
            let mut fields = self.fields.write().await;
            let entry = fields
                .get_mut(field_id)
                .ok_or_else(|| CoreError::FieldNotFound(field_id.to_string()))?;
            entry.cancel_pending();
            entry.input.local_part.clear();
            entry.state = ValidationState::Untouched;
        }
        self.notify(field_id, &ValidationState::Untouched).await;
        Ok(())
    }

    // ===== Host events =====

    /// The local-part input changed (keystroke, paste, autofill).
    pub async fn input_changed(
        &self,
        field_id: &str,
        local_part: &str,
    ) -> CoreResult<ValidationState> {
        self.update_and_revalidate(field_id, |input| {
            input.local_part = local_part.to_string();
        })
        .await
    }

    /// The domain selector changed.
    ///
    /// Availability is a function of (local part, domain) jointly, so the
    /// whole pipeline re-runs; a `Taken` under the old domain does not carry
    /// over to the new one.
    pub async fn domain_changed(&self, field_id: &str, domain: &str) -> CoreResult<ValidationState> {
        self.update_and_revalidate(field_id, |input| {
            input.domain = domain.to_string();
        })
        .await
    }

    // ===== Queries =====

    /// Current validation state.
    pub async fn state(&self, field_id: &str) -> CoreResult<ValidationState> {
        let fields = self.fields.read().await;
        fields
            .get(field_id)
            .map(|entry| entry.state.clone())
            .ok_or_else(|| CoreError::FieldNotFound(field_id.to_string()))
    }

    /// Current display data (a pure function of the state).
    pub async fn display_state(&self, field_id: &str) -> CoreResult<DisplayState> {
        Ok(compute_display_state(&self.state(field_id).await?))
    }

    // ===== Pipeline =====

    /// Apply a mutation to the field's input, then run the full validation
    /// pipeline on the result.
    async fn update_and_revalidate(
        &self,
        field_id: &str,
        update: impl FnOnce(&mut FieldInput),
    ) -> CoreResult<ValidationState> {
        let state = {
            let mut fields = self.fields.write().await;
            let entry = fields
                .get_mut(field_id)
                .ok_or_else(|| CoreError::FieldNotFound(field_id.to_string()))?;

            update(&mut entry.input);

            // Whatever was scheduled no longer describes the input
            entry.cancel_pending();

            let state = match self.syntax_check(entry) {
                Err(violation) => ValidationState::SyntaxInvalid { violation },
                Ok(()) if !entry.config.check_existence => ValidationState::Available,
                Ok(()) => {
                    self.schedule_check(field_id, entry);
                    ValidationState::Pending
                }
            };
            entry.state = state.clone();
            state
        };

        self.notify(field_id, &state).await;
        Ok(state)
    }

    /// Joint syntax validity of the current (local part, domain) pair.
    fn syntax_check(&self, entry: &FieldEntry) -> Result<(), SyntaxViolation> {
        validate_local_part(&entry.input.local_part, &entry.config)?;
        if !self
            .ctx
            .hosts
            .is_selectable(&entry.input.domain, entry.config.register)
        {
            return Err(SyntaxViolation::UnknownDomain {
                domain: entry.input.domain.clone(),
            });
        }
        Ok(())
    }

    /// Schedule the debounced existence check for the entry's current input.
    ///
    /// The spawned task sleeps through the quiet period, re-checks that the
    /// field has not moved on, issues the check labeled with the exact
    /// values it validates, and applies the result only if that label still
    /// matches the field's input when the response lands.
    fn schedule_check(&self, field_id: &str, entry: &mut FieldEntry) {
        let generation = entry.generation;
        let field_id = field_id.to_string();
        let fields = Arc::clone(&self.fields);
        let ctx = Arc::clone(&self.ctx);

        entry.pending_timer = Some(tokio::spawn(async move {
            tokio::time::sleep(ctx.debounce).await;

            // Quiet period elapsed; claim the timer slot. From here on the
            // request is in flight and must not be aborted.
            let request = {
                let mut fields = fields.write().await;
                let Some(entry) = fields.get_mut(&field_id) else {
                    return;
                };
                if entry.generation != generation {
                    return;
                }
                entry.pending_timer = None;
                CheckRequest::new(&entry.input.local_part, &entry.input.domain)
            };

            log::debug!("[Validator] Checking existence of {}", request.jid());
            let result = ctx.checker.check(&request).await;

            let applied = {
                let mut fields = fields.write().await;
                let Some(entry) = fields.get_mut(&field_id) else {
                    return;
                };
                let current = CheckRequest::new(&entry.input.local_part, &entry.input.domain);
                if current != request {
                    log::debug!(
                        "[Validator] Discarding stale result for {} (input moved on)",
                        request.jid()
                    );
                    None
                } else {
                    let state = match result {
                        Ok(()) => ValidationState::Available,
                        Err(CheckerError::JidExists { .. }) => ValidationState::Taken,
                        Err(e) => {
                            log::warn!("[Validator] Existence check failed: {e}");
                            ValidationState::Error
                        }
                    };
                    entry.state = state.clone();
                    Some(state)
                }
            };

            if let Some(state) = applied {
                let display = compute_display_state(&state);
                ctx.observer.state_changed(&field_id, &state, &display).await;
            }
        }));
    }

    /// Push a state change to the host. Runs outside the registry lock.
    async fn notify(&self, field_id: &str, state: &ValidationState) {
        let display = compute_display_state(state);
        self.ctx.observer.state_changed(field_id, state, &display).await;
    }
}
