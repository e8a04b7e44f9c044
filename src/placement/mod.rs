pub(crate) mod cache;
pub(crate) mod default;
pub(crate) mod keys;
pub(crate) mod quadrant;
pub(crate) mod source;
pub(crate) mod special;
pub(crate) mod tuples;
