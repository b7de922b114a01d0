//! Mount/unmount lifecycle around a per-frame animation.

/// Something advanced once per animation frame.
pub trait Animation {
    type Frame;

    fn tick(&mut self, dt_sec: f32) -> Self::Frame;

    /// Back to the state of a fresh mount.
    fn reset(&mut self);
}

/// Owns one animation and gates its ticks on `start()`/`stop()`.
#[derive(Debug, Default)]
pub struct Driver<A> {
    animation: A,
    running: bool,
}

impl<A: Animation> Driver<A> {
    pub fn new(animation: A) -> Self {
        Self {
            animation,
            running: false,
        }
    }

    pub fn start(&mut self) {
        self.running = true;
    }

    /// Stop ticking and drop all accumulated state.
    pub fn stop(&mut self) {
        self.running = false;
        self.animation.reset();
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn tick(&mut self, dt_sec: f32) -> Option<A::Frame> {
        self.running.then(|| self.animation.tick(dt_sec))
    }

    #[inline]
    pub fn get(&self) -> &A {
        &self.animation
    }

    /// Input handlers write through this; they still run while stopped so a
    /// late event after unmount is harmless.
    #[inline]
    pub fn get_mut(&mut self) -> &mut A {
        &mut self.animation
    }
}
