//! Task dispatch shared by the concurrent strategies.
//!
//! Tasks are rayon scope jobs. The end of the `rayon::scope` is the join point: it is the only
//! place a dispatching task suspends, and a worker waiting there keeps executing queued tasks, so
//! deep recursion never parks all workers at once.
//!
//! The [`handoff`] channels do no synchronization of their own. Each task drops its result into its
//! one-slot channel, and the dispatching task reads the slots after the scope has joined, when
//! every value is already there.

use std::sync::atomic::{AtomicUsize, Ordering};

use crossbeam_channel::{Receiver, Sender};

/// Sending half of a handoff channel. Delivering consumes it.
pub struct HandoffSender<T> {
    tx: Sender<T>,
}

/// Receiving half of a handoff channel. Waiting consumes it.
pub struct Handoff<T> {
    rx: Receiver<T>,
}

/// Creates a single-use channel that carries exactly one value from one task to one waiter.
///
/// The channel has a single slot so the sender never blocks, the waiter reads it only after the
/// sending task has been joined.
pub fn handoff<T>() -> (HandoffSender<T>, Handoff<T>) {
    let (tx, rx) = crossbeam_channel::bounded(1);

    (HandoffSender { tx }, Handoff { rx })
}

impl<T> HandoffSender<T> {
    pub fn deliver(self, value: T) {
        // The slot is empty and the waiter is alive until it has received, this can't fail.
        let _ = self.tx.send(value);
    }
}

impl<T> Handoff<T> {
    /// Takes the delivered value. Callers only wait after the sending task has been joined, so
    /// this returns at once.
    pub fn wait(self) -> T {
        match self.rx.recv() {
            Ok(value) => value,
            // Only reachable if the sending task died, in which case the scope re-raised its panic
            // before anyone could wait here.
            Err(_) => panic!("task finished without delivering its result"),
        }
    }
}

/// What a concurrent sort did to the scheduler.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ForkStats {
    pub tasks_spawned: usize,
}

/// One dispatch session. Counts every task it hands to the scheduler.
#[derive(Debug, Default)]
pub struct Forker {
    spawned: AtomicUsize,
}

impl Forker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `a` and `b` as two independent tasks and waits for both results.
    pub fn join<A, B, RA, RB>(&self, a: A, b: B) -> (RA, RB)
    where
        A: FnOnce() -> RA + Send,
        B: FnOnce() -> RB + Send,
        RA: Send,
        RB: Send,
    {
        let (a_tx, a_result) = handoff();
        let (b_tx, b_result) = handoff();

        self.record_spawns(2);
        rayon::scope(|s| {
            s.spawn(move |_| a_tx.deliver(a()));
            s.spawn(move |_| b_tx.deliver(b()));
        });

        (a_result.wait(), b_result.wait())
    }

    /// Runs `a` as a task and `b` in the calling task, returns once both are done.
    pub fn fork_left<A, B, RB>(&self, a: A, b: B) -> RB
    where
        A: FnOnce() + Send,
        B: FnOnce() -> RB + Send,
        RB: Send,
    {
        let (done_tx, done) = handoff::<()>();

        self.record_spawns(1);
        let b_result = rayon::scope(|s| {
            s.spawn(move |_| {
                a();
                done_tx.deliver(());
            });

            b()
        });

        done.wait();

        b_result
    }

    /// Runs `f` on every input as its own task, returns the results in input order.
    pub fn dispatch_each<I, F, R>(&self, inputs: Vec<I>, f: F) -> Vec<R>
    where
        I: Send,
        F: Fn(I) -> R + Sync,
        R: Send,
    {
        let (senders, results): (Vec<HandoffSender<R>>, Vec<Handoff<R>>) =
            inputs.iter().map(|_| handoff()).unzip();
        let f = &f;

        self.record_spawns(inputs.len());
        rayon::scope(|s| {
            for (input, tx) in inputs.into_iter().zip(senders) {
                s.spawn(move |_| tx.deliver(f(input)));
            }
        });

        results.into_iter().map(Handoff::wait).collect()
    }

    pub fn stats(&self) -> ForkStats {
        ForkStats {
            tasks_spawned: self.spawned.load(Ordering::Relaxed),
        }
    }

    #[inline]
    fn record_spawns(&self, count: usize) {
        self.spawned.fetch_add(count, Ordering::Relaxed);
    }
}
