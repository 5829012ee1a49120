//! Converts a resolver's raw string [`Bindings`] into typed values for a
//! handler, using a route's declared constraints and a
//! [`TypeConverterRegistry`].
//!
//! Rather than reflecting over a handler's signature to build a positional
//! argument vector, this crate exposes typed accessor methods on
//! [`Binder`] — a handler pulls its own arguments out in declaration order
//! by calling `required`/`optional`/`array`, with no reflection and no
//! intermediate `Vec<dyn Any>` the handler has to downcast itself.
//!
//! [`Bindings`]: argmux_route::Bindings
//! [`TypeConverterRegistry`]: argmux_convert::TypeConverterRegistry

mod binder;

pub use binder::Binder;
