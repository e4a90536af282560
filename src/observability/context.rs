//! Thread-local context tracking for crash reports.
//!
//! Records which generation phase is running and which question is being
//! asked, so the panic hook can say where a crash happened. Guards restore
//! the previous context on drop.

use std::cell::RefCell;

thread_local! {
    static CURRENT_CONTEXT: RefCell<GenerationContext> = const { RefCell::new(GenerationContext::new()) };
}

/// Context snapshot for the current run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationContext {
    pub phase: Option<GenerationPhase>,
    /// Name of the question awaiting an answer
    pub current_question: Option<&'static str>,
}

impl GenerationContext {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            phase: None,
            current_question: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationPhase {
    /// Prompting the user for answers
    CollectingAnswers,
    /// Building the document text
    Rendering,
    /// Persisting the document
    Writing,
}

impl std::fmt::Display for GenerationPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CollectingAnswers => write!(f, "collecting_answers"),
            Self::Rendering => write!(f, "rendering"),
            Self::Writing => write!(f, "writing"),
        }
    }
}

/// RAII guard restoring the previous context on drop.
pub struct ContextGuard {
    previous: GenerationContext,
}

impl Drop for ContextGuard {
    fn drop(&mut self) {
        CURRENT_CONTEXT.with(|ctx| {
            *ctx.borrow_mut() = self.previous.clone();
        });
    }
}

fn update(apply: impl FnOnce(&mut GenerationContext)) -> ContextGuard {
    CURRENT_CONTEXT.with(|ctx| {
        let previous = ctx.borrow().clone();
        apply(&mut ctx.borrow_mut());
        ContextGuard { previous }
    })
}

/// Set the current phase until the returned guard drops.
#[must_use]
pub fn set_phase(phase: GenerationPhase) -> ContextGuard {
    update(|ctx| ctx.phase = Some(phase))
}

#[must_use]
pub fn set_current_question(name: &'static str) -> ContextGuard {
    update(|ctx| ctx.current_question = Some(name))
}

/// Get the current context snapshot.
#[must_use]
pub fn get_current_context() -> GenerationContext {
    CURRENT_CONTEXT.with(|ctx| ctx.borrow().clone())
}
