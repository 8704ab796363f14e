//! Frame scheduling seam and the driver that runs a wheel on top of it.
//!
//! Hosts provide a [`Scheduler`] (animation frames in the browser, timers on
//! native). [`SpinDriver`] keeps asking it for the next frame until the spin
//! settles, feeding each frame to the engine and forwarding the resulting
//! events in the same callback. Dropping the driver cancels the pending frame.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use crate::clock::Clock;
use crate::engine::{SpinPlan, WheelEngine, WheelEvent};
use crate::error::WheelError;
use crate::selector::RandomSelector;

/// Receives the frame timestamp in milliseconds.
pub type FrameCallback = Box<dyn FnOnce(f64)>;

pub trait Scheduler {
    type Handle;

    fn schedule_frame(&self, callback: FrameCallback) -> Self::Handle;
    fn cancel(&self, handle: Self::Handle);
}

/// Scheduler driven by hand, one frame per [`ManualScheduler::run_frame`].
#[derive(Default)]
pub struct ManualScheduler {
    queue: RefCell<VecDeque<(u64, FrameCallback)>>,
    next_id: Cell<u64>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    /// Runs every callback queued before this call. Returns how many ran.
    pub fn run_frame(&self, now_ms: f64) -> usize {
        let due: Vec<_> = self.queue.borrow_mut().drain(..).collect();
        let ran = due.len();
        for (_, callback) in due {
            callback(now_ms);
        }
        ran
    }
}

impl Scheduler for ManualScheduler {
    type Handle = u64;

    fn schedule_frame(&self, callback: FrameCallback) -> u64 {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.queue.borrow_mut().push_back((id, callback));
        id
    }

    fn cancel(&self, handle: u64) {
        self.queue.borrow_mut().retain(|(id, _)| *id != handle);
    }
}

impl<S: Scheduler + ?Sized> Scheduler for Rc<S> {
    type Handle = S::Handle;

    fn schedule_frame(&self, callback: FrameCallback) -> Self::Handle {
        (**self).schedule_frame(callback)
    }

    fn cancel(&self, handle: Self::Handle) {
        (**self).cancel(handle)
    }
}

type Listener = Box<dyn FnMut(WheelEvent)>;
type FrameObserver = Box<dyn FnMut(f64)>;

struct DriverInner<S: Scheduler, R: RandomSelector, C: Clock> {
    engine: Rc<RefCell<WheelEngine<R, C>>>,
    scheduler: S,
    listener: RefCell<Listener>,
    frame_observer: RefCell<Option<FrameObserver>>,
    handle: RefCell<Option<S::Handle>>,
    generation: Cell<u64>,
}

pub struct SpinDriver<S, R, C>
where
    S: Scheduler + 'static,
    R: RandomSelector + 'static,
    C: Clock + 'static,
{
    inner: Rc<DriverInner<S, R, C>>,
}

impl<S, R, C> SpinDriver<S, R, C>
where
    S: Scheduler + 'static,
    R: RandomSelector + 'static,
    C: Clock + 'static,
{
    pub fn new<F>(engine: Rc<RefCell<WheelEngine<R, C>>>, scheduler: S, listener: F) -> Self
    where
        F: FnMut(WheelEvent) + 'static,
    {
        Self {
            inner: Rc::new(DriverInner {
                engine,
                scheduler,
                listener: RefCell::new(Box::new(listener)),
                frame_observer: RefCell::new(None),
                handle: RefCell::new(None),
                generation: Cell::new(0),
            }),
        }
    }

    /// Calls `observer` with the wheel's rotation after every frame, before
    /// that frame's events are emitted.
    pub fn on_frame<F>(self, observer: F) -> Self
    where
        F: FnMut(f64) + 'static,
    {
        *self.inner.frame_observer.borrow_mut() = Some(Box::new(observer));
        self
    }

    pub fn engine(&self) -> &Rc<RefCell<WheelEngine<R, C>>> {
        &self.inner.engine
    }

    /// Starts a spin and schedules its first frame.
    pub fn spin(&self) -> Result<SpinPlan, WheelError> {
        let plan = self.inner.engine.borrow_mut().request_spin()?;
        schedule_next(&self.inner);
        Ok(plan)
    }

    pub fn is_spinning(&self) -> bool {
        self.inner.engine.borrow().is_spinning()
    }

    /// Aborts the spin: the pending frame is cancelled and nothing further is emitted.
    pub fn cancel(&self) -> bool {
        self.inner.generation.set(self.inner.generation.get() + 1);
        if let Some(handle) = self.inner.handle.borrow_mut().take() {
            self.inner.scheduler.cancel(handle);
        }
        match self.inner.engine.try_borrow_mut() {
            Ok(mut engine) => engine.cancel(),
            Err(_) => false,
        }
    }
}

impl<S, R, C> Drop for SpinDriver<S, R, C>
where
    S: Scheduler + 'static,
    R: RandomSelector + 'static,
    C: Clock + 'static,
{
    fn drop(&mut self) {
        self.cancel();
    }
}

fn schedule_next<S, R, C>(inner: &Rc<DriverInner<S, R, C>>)
where
    S: Scheduler + 'static,
    R: RandomSelector + 'static,
    C: Clock + 'static,
{
    let generation = inner.generation.get();
    let frame_inner = Rc::clone(inner);
    let handle = inner
        .scheduler
        .schedule_frame(Box::new(move |now_ms| drive_frame(&frame_inner, generation, now_ms)));
    if let Some(previous) = inner.handle.borrow_mut().replace(handle) {
        inner.scheduler.cancel(previous);
    }
}

fn drive_frame<S, R, C>(inner: &Rc<DriverInner<S, R, C>>, generation: u64, now_ms: f64)
where
    S: Scheduler + 'static,
    R: RandomSelector + 'static,
    C: Clock + 'static,
{
    if inner.generation.get() != generation {
        return;
    }
    // The handle for this frame has fired; forget it without cancelling.
    drop(inner.handle.borrow_mut().take());

    let mut events = Vec::new();
    let (settled, rotation) = {
        let mut engine = inner.engine.borrow_mut();
        let settled = engine.advance_with(now_ms, |event| events.push(event));
        (settled, engine.rotation())
    };
    if let Some(observer) = inner.frame_observer.borrow_mut().as_mut() {
        observer(rotation);
    }

    // Engine borrow is released so listeners may call back into it.
    for event in events {
        if inner.generation.get() != generation {
            return;
        }
        let mut listener = inner.listener.borrow_mut();
        (&mut *listener)(event);
    }

    let still_spinning = inner.engine.borrow().is_spinning();
    if !settled && still_spinning && inner.generation.get() == generation {
        schedule_next(inner);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::selector::SeededSelector;
    use crate::shared_wheel_game::{options_from_labels, WheelConfig};
    use std::rc::Weak;

    type TestEngine = WheelEngine<SeededSelector, FixedClock>;

    fn shared_engine(labels: &[&str]) -> Rc<RefCell<TestEngine>> {
        let config = WheelConfig {
            spin_duration_ms: 1000,
            ..WheelConfig::default()
        };
        Rc::new(RefCell::new(WheelEngine::with_parts(
            options_from_labels(labels),
            config,
            SeededSelector::new(5),
            FixedClock::new(0),
        )))
    }

    fn recorder() -> (Rc<RefCell<Vec<WheelEvent>>>, impl FnMut(WheelEvent) + 'static) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        (log, move |e: WheelEvent| sink.borrow_mut().push(e))
    }

    #[test]
    fn test_driver_runs_spin_to_result() {
        let scheduler = Rc::new(ManualScheduler::new());
        let (events, listener) = recorder();
        let driver = SpinDriver::new(shared_engine(&["A", "B", "C"]), Rc::clone(&scheduler), listener);
        driver.spin().unwrap();

        let mut t = 0.0;
        while scheduler.pending() > 0 {
            scheduler.run_frame(t);
            t += 16.0;
        }
        let events = events.borrow();
        let results: Vec<_> = events
            .iter()
            .filter(|e| matches!(e, WheelEvent::Settled(_)))
            .collect();
        assert_eq!(results.len(), 1);
        assert!(matches!(events.last(), Some(WheelEvent::Settled(_))));
        assert!(!driver.is_spinning());
    }

    #[test]
    fn test_second_spin_rejected_while_in_flight() {
        let scheduler = Rc::new(ManualScheduler::new());
        let (_events, listener) = recorder();
        let driver = SpinDriver::new(shared_engine(&["A", "B"]), Rc::clone(&scheduler), listener);
        driver.spin().unwrap();
        assert_eq!(driver.spin().unwrap_err(), WheelError::AlreadySpinning);
        assert_eq!(scheduler.pending(), 1);
    }

    #[test]
    fn test_drop_mid_spin_stops_everything() {
        let scheduler = Rc::new(ManualScheduler::new());
        let (events, listener) = recorder();
        let engine = shared_engine(&["A", "B", "C", "D"]);
        let driver = SpinDriver::new(Rc::clone(&engine), Rc::clone(&scheduler), listener);
        driver.spin().unwrap();
        scheduler.run_frame(0.0);
        scheduler.run_frame(200.0);
        let seen = events.borrow().len();

        drop(driver);
        assert_eq!(scheduler.pending(), 0);
        for t in 0..100 {
            scheduler.run_frame(300.0 + t as f64 * 16.0);
        }
        assert_eq!(events.borrow().len(), seen);
        assert!(!engine.borrow().is_spinning());
        assert!(engine.borrow().last_result().is_none());
    }

    #[test]
    fn test_listener_can_start_next_spin_from_result() {
        type TestDriver = SpinDriver<Rc<ManualScheduler>, SeededSelector, FixedClock>;

        let scheduler = Rc::new(ManualScheduler::new());
        let settled = Rc::new(Cell::new(0));
        let respin_from: Rc<RefCell<Weak<TestDriver>>> = Rc::new(RefCell::new(Weak::new()));

        let count = Rc::clone(&settled);
        let slot = Rc::clone(&respin_from);
        let driver = Rc::new(SpinDriver::new(
            shared_engine(&["A", "B"]),
            Rc::clone(&scheduler),
            move |e| {
                if let WheelEvent::Settled(_) = e {
                    count.set(count.get() + 1);
                    if count.get() == 1 {
                        let driver = slot.borrow().upgrade();
                        if let Some(driver) = driver {
                            driver.spin().unwrap();
                        }
                    }
                }
            },
        ));
        *respin_from.borrow_mut() = Rc::downgrade(&driver);

        driver.spin().unwrap();
        let mut t = 0.0;
        while settled.get() == 0 {
            scheduler.run_frame(t);
            t += 50.0;
        }
        // the spin started inside the listener is already queued
        assert!(driver.is_spinning());
        assert_eq!(scheduler.pending(), 1);

        while scheduler.pending() > 0 {
            scheduler.run_frame(t);
            t += 50.0;
        }
        assert_eq!(settled.get(), 2);
        assert!(!driver.is_spinning());
    }

    #[test]
    fn test_frame_observer_sees_every_frame() {
        let scheduler = Rc::new(ManualScheduler::new());
        let (_events, listener) = recorder();
        let frames = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&frames);
        let driver = SpinDriver::new(shared_engine(&["A", "B"]), Rc::clone(&scheduler), listener)
            .on_frame(move |rotation| sink.borrow_mut().push(rotation));
        driver.spin().unwrap();
        let mut ran = 0;
        let mut t = 0.0;
        while scheduler.pending() > 0 {
            ran += scheduler.run_frame(t);
            t += 100.0;
        }
        let frames = frames.borrow();
        assert_eq!(frames.len(), ran);
        // settled rotation is reported normalised
        assert!(*frames.last().unwrap() < 360.0);
    }
}
