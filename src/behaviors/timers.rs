use gloo_timers::callback::Timeout;

/// One-shot timer scheduling, as seen by the behavior controllers.
pub trait Timers {
    type Handle;

    fn set_timeout(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Self::Handle;

    fn clear_timeout(&self, handle: Self::Handle);
}

/// Browser timers backed by `setTimeout`.
#[derive(Debug, Default, Clone, Copy)]
pub struct GlooTimers;

impl Timers for GlooTimers {
    type Handle = Timeout;

    fn set_timeout(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(delay_ms, callback)
    }

    fn clear_timeout(&self, handle: Timeout) {
        // dropping a gloo Timeout clears it
        drop(handle);
    }
}
