//! Opt-in per-operation tracing.
//!
//! With the `trace_multiplications` feature every multiply, square and
//! inversion emits a TRACE event named after the operation. Without it the
//! macro expands to nothing.

#[cfg(feature = "trace_multiplications")]
macro_rules! trace_operation {
    ($op:literal) => {
        ::tracing::event!(name: $op, ::tracing::Level::TRACE, field = "GF(2^173)");
    };
}

#[cfg(not(feature = "trace_multiplications"))]
macro_rules! trace_operation {
    ($op:literal) => {};
}

pub(crate) use trace_operation;
