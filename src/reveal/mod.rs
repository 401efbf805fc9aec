pub(crate) mod animation;
pub(crate) mod engine;
pub(crate) mod typewriter;
