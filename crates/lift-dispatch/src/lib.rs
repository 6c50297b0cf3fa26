//! `lift-dispatch` — which lift answers which call.
//!
//! # Crate layout
//!
//! | Module         | Contents                                           |
//! |----------------|----------------------------------------------------|
//! | [`registry`]   | `FloorCallRegistry` — outstanding `(floor, dir)`s  |
//! | [`outcome`]    | `DispatchOutcome`                                  |
//! | [`dispatcher`] | `Dispatcher` — absorption + nearest-idle policy    |
//!
//! # Allocation policy (summary)
//!
//! ```text
//! handle_call(floor, dir):
//!   already active?        → AlreadyActive   (no duplicate dispatch)
//!   activate, then:
//!   ① en-route absorption  → first lift (id order) moving in `dir` with
//!                            the call floor strictly inside its remaining
//!                            route appends it to `stops`  → AbsorbedBy
//!   ② nearest idle         → minimise |level − floor|, ties to lowest id;
//!                            set destination + serving    → AllocatedTo
//!   ③ neither              → NoLiftAvailable (registry entry persists as
//!                            the pending signal; lift-sim re-assigns)
//! ```

pub mod dispatcher;
pub mod outcome;
pub mod registry;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use dispatcher::Dispatcher;
pub use outcome::DispatchOutcome;
pub use registry::FloorCallRegistry;
