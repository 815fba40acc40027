//! Tracking of currently running application instances.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use parking_lot::Mutex;
use vrc_runtime::CancellationToken;

use crate::catalog::canonical;

/// One running application instance.
#[derive(Debug, Clone)]
pub struct RunningApp {
	/// Catalog-cased package identifier, kept for display.
	pub package: String,
	/// Generation id distinguishing this run from earlier runs of the
	/// same package.
	pub run_id: u64,
	/// When the launch was accepted.
	pub started_at: Instant,
	/// Cancels this run's unit of work.
	pub cancel: CancellationToken,
}

/// Claim on a running slot, handed to the launch's unit of work.
#[derive(Debug, Clone)]
pub struct RunTicket {
	pub run_id: u64,
	pub cancel: CancellationToken,
}

/// Set of currently running applications, keyed by canonical package.
///
/// Every check-and-mutate happens under a single lock acquisition, so
/// concurrent launch/end calls for the same package serialize cleanly
/// and membership never goes stale between a check and its write.
#[derive(Debug, Default)]
pub struct RunningSet {
	inner: Mutex<HashMap<String, RunningApp>>,
	clock: AtomicU64,
}

impl RunningSet {
	/// Creates an empty running set.
	pub fn new() -> Self {
		Self::default()
	}

	/// Claims the running slot for `package`.
	///
	/// Returns `None` when an instance already holds the slot. On success
	/// the returned ticket carries the run id and cancellation token the
	/// unit of work needs to release the slot later.
	pub fn begin(&self, package: &str) -> Option<RunTicket> {
		let key = canonical(package);
		let mut inner = self.inner.lock();
		if inner.contains_key(&key) {
			return None;
		}

		let run_id = self.clock.fetch_add(1, Ordering::Relaxed) + 1;
		let cancel = CancellationToken::new();
		inner.insert(
			key,
			RunningApp {
				package: package.to_string(),
				run_id,
				started_at: Instant::now(),
				cancel: cancel.clone(),
			},
		);
		Some(RunTicket { run_id, cancel })
	}

	/// Returns whether `package` currently holds a running slot.
	pub fn contains(&self, package: &str) -> bool {
		self.inner.lock().contains_key(&canonical(package))
	}

	/// Removes the instance for `package`, returning its record.
	pub fn end(&self, package: &str) -> Option<RunningApp> {
		self.inner.lock().remove(&canonical(package))
	}

	/// Releases the slot for `package`, but only when it still belongs
	/// to `run_id`.
	///
	/// A unit of work that outlived an explicit end must not delete the
	/// entry of a newer launch of the same package; the generation check
	/// turns such stale removals into no-ops.
	pub fn finish(&self, package: &str, run_id: u64) -> bool {
		let key = canonical(package);
		let mut inner = self.inner.lock();
		match inner.get(&key) {
			Some(app) if app.run_id == run_id => {
				inner.remove(&key);
				true
			}
			_ => false,
		}
	}

	/// Number of currently running instances.
	pub fn len(&self) -> usize {
		self.inner.lock().len()
	}

	/// Returns whether nothing is running.
	pub fn is_empty(&self) -> bool {
		self.inner.lock().is_empty()
	}
}

#[cfg(test)]
mod tests {
	use std::sync::{Arc, Barrier};
	use std::thread;

	use super::*;

	#[test]
	fn begin_claims_the_slot() {
		let running = RunningSet::new();
		assert!(running.begin("com.beatsaber").is_some());
		assert!(running.contains("com.beatsaber"));
		assert_eq!(running.len(), 1);
	}

	#[test]
	fn begin_rejects_a_second_claim() {
		let running = RunningSet::new();
		assert!(running.begin("com.beatsaber").is_some());
		assert!(running.begin("com.beatsaber").is_none());
		assert_eq!(running.len(), 1);
	}

	#[test]
	fn keys_are_case_insensitive() {
		let running = RunningSet::new();
		assert!(running.begin("com.BeatSaber").is_some());
		assert!(running.contains("COM.BEATSABER"));
		assert!(running.begin("com.beatsaber").is_none());

		let app = running.end("Com.Beatsaber").unwrap();
		assert_eq!(app.package, "com.BeatSaber");
	}

	#[test]
	fn end_removes_and_is_idempotent() {
		let running = RunningSet::new();
		running.begin("com.hla").unwrap();

		assert!(running.end("com.hla").is_some());
		assert!(!running.contains("com.hla"));
		assert!(running.end("com.hla").is_none());
	}

	#[test]
	fn finish_releases_a_matching_run() {
		let running = RunningSet::new();
		let ticket = running.begin("com.ug").unwrap();

		assert!(running.finish("com.ug", ticket.run_id));
		assert!(running.is_empty());
		assert!(!running.finish("com.ug", ticket.run_id));
	}

	#[test]
	fn finish_ignores_a_stale_run_id() {
		let running = RunningSet::new();
		let first = running.begin("com.beatsaber").unwrap();
		running.end("com.beatsaber").unwrap();

		let second = running.begin("com.beatsaber").unwrap();
		assert_ne!(first.run_id, second.run_id);

		assert!(!running.finish("com.beatsaber", first.run_id));
		assert!(running.contains("com.beatsaber"));

		assert!(running.finish("com.beatsaber", second.run_id));
		assert!(running.is_empty());
	}

	#[test]
	fn run_ids_are_strictly_increasing() {
		let running = RunningSet::new();
		let a = running.begin("com.beatsaber").unwrap();
		let b = running.begin("com.hla").unwrap();
		let c = running.begin("com.ug").unwrap();
		assert!(a.run_id < b.run_id);
		assert!(b.run_id < c.run_id);
	}

	#[test]
	fn concurrent_begins_grant_exactly_one_claim() {
		const CLAIMANTS: usize = 8;
		const ROUNDS: usize = 200;

		let running = Arc::new(RunningSet::new());
		for _ in 0..ROUNDS {
			let barrier = Arc::new(Barrier::new(CLAIMANTS));
			let claims: Vec<_> = (0..CLAIMANTS)
				.map(|_| {
					let running = Arc::clone(&running);
					let barrier = Arc::clone(&barrier);
					thread::spawn(move || {
						// All claimants stampede at once.
						barrier.wait();
						running.begin("com.beatsaber").is_some()
					})
				})
				.collect();

			let granted = claims
				.into_iter()
				.map(|claim| claim.join().unwrap())
				.filter(|granted| *granted)
				.count();
			assert_eq!(granted, 1);
			assert!(running.end("com.beatsaber").is_some());
		}
		assert!(running.is_empty());
	}
}
