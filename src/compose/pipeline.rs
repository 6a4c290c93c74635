//! Runtime-built pipelines.
//!
//! [`flow!`](crate::flow!) and [`try_flow!`](crate::try_flow!) compose a
//! sequence of functions known when the code is written. [`Pipeline`] and
//! [`TryPipeline`] cover the "function builder" use: stages are collected one
//! at a time (possibly from data, configuration, or a loop) and the whole
//! sequence is evaluated later, any number of times.
//!
//! Both keep their stages in inline storage, so short pipelines do not
//! allocate for the stage list itself.
//!
//! # Examples
//!
//! ```rust
//! use ergoflo::compose::Pipeline;
//!
//! let mut pipeline = Pipeline::new();
//! for increment in [1, 2, 3] {
//!     pipeline.push(move |x: i32| x + increment);
//! }
//!
//! assert_eq!(pipeline.len(), 3);
//! assert_eq!(pipeline.run(0), 6);
//! assert_eq!(pipeline.run(10), 16);
//! ```

use std::fmt;

use smallvec::SmallVec;

/// Number of stages stored inline before spilling to the heap.
const INLINE_STAGES: usize = 4;

/// A boxed stage of a [`Pipeline`].
pub type Stage<T> = Box<dyn Fn(T) -> T>;

/// A boxed stage of a [`TryPipeline`].
pub type TryStage<T, E> = Box<dyn Fn(T) -> Result<T, E>>;

/// An ordered sequence of `T -> T` stages built at runtime.
///
/// Running the pipeline threads the input through every stage in insertion
/// order. An empty pipeline returns its input unchanged. Adding a stage never
/// calls it, and every run calls every stage again.
///
/// # Examples
///
/// ```rust
/// use ergoflo::compose::Pipeline;
///
/// let shout = Pipeline::new()
///     .then(|text: String| text.trim().to_string())
///     .then(|text: String| text.to_uppercase())
///     .then(|text: String| format!("{text}!"));
///
/// assert_eq!(shout.run("  hello ".to_string()), "HELLO!");
/// ```
pub struct Pipeline<T> {
    stages: SmallVec<[Stage<T>; INLINE_STAGES]>,
}

impl<T> Pipeline<T> {
    /// Creates an empty pipeline.
    #[inline]
    pub fn new() -> Self {
        Self {
            stages: SmallVec::new(),
        }
    }

    /// Appends a stage and returns the pipeline, for builder-style chaining.
    #[must_use]
    pub fn then<F>(mut self, stage: F) -> Self
    where
        F: Fn(T) -> T + 'static,
    {
        self.push(stage);
        self
    }

    /// Appends a stage.
    pub fn push<F>(&mut self, stage: F)
    where
        F: Fn(T) -> T + 'static,
    {
        self.stages.push(Box::new(stage));
    }

    /// Returns the number of stages.
    #[inline]
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// Returns `true` if the pipeline has no stages.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Threads `input` through every stage in order.
    pub fn run(&self, input: T) -> T {
        tracing::debug!(stages = self.stages.len(), "running pipeline");
        self.stages.iter().fold(input, |value, stage| stage(value))
    }

    /// Converts the pipeline into a plain function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ergoflo::compose::Pipeline;
    ///
    /// let double_all: Vec<i32> = vec![1, 2, 3]
    ///     .into_iter()
    ///     .map(Pipeline::new().then(|x: i32| x * 2).into_fn())
    ///     .collect();
    /// assert_eq!(double_all, vec![2, 4, 6]);
    /// ```
    pub fn into_fn(self) -> impl Fn(T) -> T {
        move |input: T| self.run(input)
    }
}

impl<T> Default for Pipeline<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<Stage<T>> for Pipeline<T> {
    fn from_iter<I: IntoIterator<Item = Stage<T>>>(iterator: I) -> Self {
        Self {
            stages: iterator.into_iter().collect(),
        }
    }
}

impl<T> Extend<Stage<T>> for Pipeline<T> {
    fn extend<I: IntoIterator<Item = Stage<T>>>(&mut self, iterator: I) {
        self.stages.extend(iterator);
    }
}

impl<T> fmt::Debug for Pipeline<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Pipeline")
            .field("stages", &self.stages.len())
            .finish()
    }
}

/// An ordered sequence of fallible `T -> Result<T, E>` stages built at runtime.
///
/// Running the pipeline stops at the first stage that returns `Err` and
/// returns that error unchanged; later stages are not called.
///
/// # Examples
///
/// ```rust
/// use ergoflo::compose::TryPipeline;
/// use ergoflo::container::{Maybe, NothingError};
/// use ergoflo::propagate::checked;
///
/// let pipeline: TryPipeline<Maybe<i32>, NothingError> = TryPipeline::new()
///     .then(checked(|value: Maybe<i32>| value.map(|x| x + 1)))
///     .then(checked(|value: Maybe<i32>| value.filter(|x| *x < 10)));
///
/// assert_eq!(pipeline.run(Maybe::Some(1)), Ok(Maybe::Some(2)));
/// assert_eq!(pipeline.run(Maybe::Some(9)), Err(NothingError));
/// assert_eq!(pipeline.run(Maybe::Nothing), Err(NothingError));
/// ```
pub struct TryPipeline<T, E> {
    stages: SmallVec<[TryStage<T, E>; INLINE_STAGES]>,
}

impl<T, E> TryPipeline<T, E> {
    /// Creates an empty pipeline.
    #[inline]
    pub fn new() -> Self {
        Self {
            stages: SmallVec::new(),
        }
    }

    /// Appends a stage and returns the pipeline, for builder-style chaining.
    #[must_use]
    pub fn then<F>(mut self, stage: F) -> Self
    where
        F: Fn(T) -> Result<T, E> + 'static,
    {
        self.push(stage);
        self
    }

    /// Appends a stage.
    pub fn push<F>(&mut self, stage: F)
    where
        F: Fn(T) -> Result<T, E> + 'static,
    {
        self.stages.push(Box::new(stage));
    }

    /// Returns the number of stages.
    #[inline]
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// Returns `true` if the pipeline has no stages.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Threads `input` through every stage, stopping at the first error.
    ///
    /// # Errors
    ///
    /// Returns the error of the first failing stage, unchanged.
    pub fn run(&self, input: T) -> Result<T, E> {
        tracing::debug!(stages = self.stages.len(), "running fallible pipeline");
        self.stages
            .iter()
            .enumerate()
            .try_fold(input, |value, (index, stage)| {
                stage(value).inspect_err(|_| {
                    tracing::trace!(stage = index, "pipeline stage raised; aborting");
                })
            })
    }

    /// Converts the pipeline into a plain function.
    pub fn into_fn(self) -> impl Fn(T) -> Result<T, E> {
        move |input: T| self.run(input)
    }
}

impl<T, E> Default for TryPipeline<T, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, E> FromIterator<TryStage<T, E>> for TryPipeline<T, E> {
    fn from_iter<I: IntoIterator<Item = TryStage<T, E>>>(iterator: I) -> Self {
        Self {
            stages: iterator.into_iter().collect(),
        }
    }
}

impl<T, E> Extend<TryStage<T, E>> for TryPipeline<T, E> {
    fn extend<I: IntoIterator<Item = TryStage<T, E>>>(&mut self, iterator: I) {
        self.stages.extend(iterator);
    }
}

impl<T, E> fmt::Debug for TryPipeline<T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("TryPipeline")
            .field("stages", &self.stages.len())
            .finish()
    }
}
