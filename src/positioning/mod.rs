pub(crate) mod positioner;
pub(crate) mod rotation;
