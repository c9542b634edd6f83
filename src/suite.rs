//! Suite and test-function descriptors.
//!
//! A [`TestSuite`] is an identity plus two capabilities: enumerate its
//! [`TestFunction`]s in declaration order, and construct a fresh instance
//! of its state type. Instances are type-erased (`Box<dyn Any + Send>`)
//! so one registry can hold heterogeneous suites; each test function
//! carries the downcast back to the concrete state type.
//!
//! Invoking a test yields an [`Invocation`]: either the outcome is already
//! known (`Immediate`) or the test handed back a future the scheduler must
//! suspend on (`Deferred`). The scheduler branches on this structurally
//! rather than probing return values at runtime.

use std::any::Any;
use std::fmt;
use std::future::Future;

use futures::future::BoxFuture;
use thiserror::Error;

use crate::provider::ProviderError;

/// A type-erased, instantiated suite object.
pub type SuiteInstance = Box<dyn Any + Send>;

/// Failure value produced by a test body or an assertion helper.
///
/// A `TestFailure` is recorded and logged by the scheduler, never
/// propagated: it cannot abort a run.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct TestFailure(String);

impl TestFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }

    pub fn message(&self) -> &str {
        &self.0
    }
}

/// Outcome of invoking a test function on an instance.
pub enum Invocation {
    /// The test completed synchronously.
    Immediate(Result<(), TestFailure>),
    /// The test handed back a future; its step settles when the future does.
    Deferred(BoxFuture<'static, Result<(), TestFailure>>),
}

type TestBody = Box<dyn Fn(&mut (dyn Any + Send)) -> Invocation + Send + Sync>;

/// A named test function, bound to a suite instance at run time.
pub struct TestFunction {
    name: String,
    body: TestBody,
}

impl TestFunction {
    /// Wrap a synchronous test body over suite state `T`.
    pub fn new<T, F>(name: impl Into<String>, body: F) -> Self
    where
        T: Send + 'static,
        F: Fn(&mut T) -> Result<(), TestFailure> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            body: Box::new(move |instance| match instance.downcast_mut::<T>() {
                Some(state) => Invocation::Immediate(body(state)),
                None => Invocation::Immediate(Err(instance_type_mismatch::<T>())),
            }),
        }
    }

    /// Wrap an asynchronous test body over suite state `T`.
    ///
    /// The returned future must be `'static`: it cannot borrow the suite
    /// instance directly, so an async body copies what it needs out of the
    /// state (or shares it through an `Arc`) before the `async` block.
    pub fn new_async<T, F, Fut>(name: impl Into<String>, body: F) -> Self
    where
        T: Send + 'static,
        F: Fn(&mut T) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<(), TestFailure>> + Send + 'static,
    {
        Self {
            name: name.into(),
            body: Box::new(move |instance| match instance.downcast_mut::<T>() {
                Some(state) => Invocation::Deferred(Box::pin(body(state))),
                None => Invocation::Immediate(Err(instance_type_mismatch::<T>())),
            }),
        }
    }

    /// Function identity; the second half of every `Suite.test()` signature.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn invoke(&self, instance: &mut (dyn Any + Send)) -> Invocation {
        (self.body)(instance)
    }
}

impl fmt::Debug for TestFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestFunction").field("name", &self.name).finish_non_exhaustive()
    }
}

/// A custom provider handed back an instance of the wrong type; surfaced
/// as a per-test failure rather than a panic.
fn instance_type_mismatch<T>() -> TestFailure {
    TestFailure::new(format!("suite instance is not a {}", std::any::type_name::<T>()))
}

/// A registered test suite.
///
/// Implementations list their test functions in the order they should run
/// and expose no-argument construction for the default object provider.
pub trait TestSuite: Send + Sync {
    /// Suite identity; the first half of every `Suite.test()` signature.
    fn name(&self) -> &str;

    /// Declared test functions, in execution order. Called fresh per use.
    fn test_functions(&self) -> Vec<TestFunction>;

    /// Construct a fresh instance with no arguments.
    fn instantiate(&self) -> Result<SuiteInstance, ProviderError>;
}

// ============================================================================
// Tests
// ============================================================================
