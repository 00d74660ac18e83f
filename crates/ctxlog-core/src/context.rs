//! Request-scoped context.
//!
//! A [`Context`] is an immutable carrier of typed values plus an optional
//! cancellation signal. Deriving a context (adding a value or a cancellation scope)
//! never changes the original; the derived context shares everything it does not
//! override.
//!
//! Values are keyed by their Rust type, so a crate that stores a private newtype
//! owns a slot nobody else can read or overwrite.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use tokio_util::sync::CancellationToken;

type ValueMap = HashMap<TypeId, Arc<dyn Any + Send + Sync>>;

/// Immutable, derivable request-scoped value carrier.
#[derive(Clone, Default)]
pub struct Context {
    inner: Arc<Inner>,
}

#[derive(Default)]
struct Inner {
    values: ValueMap,
    token: Option<CancellationToken>,
}

impl Context {
    /// Returns an empty context that is never cancelled.
    pub fn background() -> Self {
        Self::default()
    }

    /// Returns a derived context holding `value` in the slot for `T`.
    pub fn with_value<T>(&self, value: T) -> Self
    where
        T: Send + Sync + 'static,
    {
        let mut values = self.inner.values.clone();
        values.insert(TypeId::of::<T>(), Arc::new(value));
        Self {
            inner: Arc::new(Inner {
                values,
                token: self.inner.token.clone(),
            }),
        }
    }

    /// Returns the value stored in the slot for `T`, if any.
    pub fn value<T>(&self) -> Option<&T>
    where
        T: Send + Sync + 'static,
    {
        self.inner
            .values
            .get(&TypeId::of::<T>())
            .and_then(|value| value.downcast_ref::<T>())
    }

    /// Returns a cancellable child context.
    ///
    /// The child is done when the returned handle is cancelled or dropped, or when
    /// any cancellable ancestor is cancelled.
    #[must_use = "dropping the handle cancels the derived context"]
    pub fn with_cancel(&self) -> (Self, CancelHandle) {
        let token = match &self.inner.token {
            Some(parent) => parent.child_token(),
            None => CancellationToken::new(),
        };
        let ctx = Self {
            inner: Arc::new(Inner {
                values: self.inner.values.clone(),
                token: Some(token.clone()),
            }),
        };
        (ctx, CancelHandle { token })
    }

    /// Returns true once the context has been cancelled.
    pub fn is_done(&self) -> bool {
        self.inner
            .token
            .as_ref()
            .is_some_and(CancellationToken::is_cancelled)
    }

    /// Waits until the context is cancelled. Never completes for contexts without a
    /// cancellation scope.
    pub async fn done(&self) {
        match &self.inner.token {
            Some(token) => token.cancelled().await,
            None => std::future::pending().await,
        }
    }

    /// Returns true if both handles refer to the same context.
    pub fn ptr_eq(&self, other: &Context) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("values", &self.inner.values.len())
            .field("cancellable", &self.inner.token.is_some())
            .field("done", &self.is_done())
            .finish()
    }
}

/// Cancels the context returned alongside it.
///
/// Cancelling is idempotent. Dropping the handle cancels as well, so the derived
/// context is released on every exit path.
#[derive(Debug)]
pub struct CancelHandle {
    token: CancellationToken,
}

impl CancelHandle {
    /// Marks the associated context (and its descendants) as done.
    pub fn cancel(&self) {
        self.token.cancel();
    }
}

impl Drop for CancelHandle {
    fn drop(&mut self) {
        self.token.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[derive(Debug, PartialEq)]
    struct TraceId(&'static str);

    #[derive(Debug, PartialEq)]
    struct Tenant(&'static str);

    #[test]
    fn test_values_are_keyed_by_type() {
        let ctx = Context::background()
            .with_value(TraceId("abc"))
            .with_value(Tenant("acme"));

        assert_eq!(ctx.value::<TraceId>(), Some(&TraceId("abc")));
        assert_eq!(ctx.value::<Tenant>(), Some(&Tenant("acme")));
        assert_eq!(ctx.value::<String>(), None);
    }

    #[test]
    fn test_derivation_leaves_parent_untouched() {
        let parent = Context::background().with_value(TraceId("parent"));
        let child = parent.with_value(TraceId("child"));

        assert_eq!(parent.value::<TraceId>(), Some(&TraceId("parent")));
        assert_eq!(child.value::<TraceId>(), Some(&TraceId("child")));
        assert!(!parent.ptr_eq(&child));
    }

    #[test]
    fn test_background_is_never_done() {
        let ctx = Context::background();
        assert!(!ctx.is_done());
    }

    #[test]
    fn test_cancel_marks_child_done() {
        let parent = Context::background().with_value(Tenant("acme"));
        let (child, cancel) = parent.with_cancel();

        assert!(!child.is_done());
        assert_eq!(child.value::<Tenant>(), Some(&Tenant("acme")));

        cancel.cancel();
        assert!(child.is_done());
        assert!(!parent.is_done());
    }

    #[test]
    fn test_dropping_handle_cancels() {
        let (ctx, cancel) = Context::background().with_cancel();
        drop(cancel);
        assert!(ctx.is_done());
    }

    #[test]
    fn test_parent_cancellation_propagates() {
        let (parent, cancel_parent) = Context::background().with_cancel();
        let (child, _cancel_child) = parent.with_value(Tenant("acme")).with_cancel();

        cancel_parent.cancel();
        assert!(child.is_done());
    }

    #[tokio::test]
    async fn test_done_resolves_after_cancel() {
        let (ctx, cancel) = Context::background().with_cancel();

        let waiter = {
            let ctx = ctx.clone();
            tokio::spawn(async move { ctx.done().await })
        };
        cancel.cancel();

        tokio::time::timeout(Duration::from_secs(1), waiter)
            .await
            .expect("done() should resolve")
            .unwrap();
    }
}
