//! Provider-specific wire knowledge
//!
//! One submodule per upstream API family. Each owns the literal
//! identifiers that family puts on the wire.

pub mod anthropic;
