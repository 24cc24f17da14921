pub(crate) mod codec;
pub(crate) mod eval;
pub(crate) mod registry;
