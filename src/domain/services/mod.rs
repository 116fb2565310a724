//! Domain Services
//!
//! Stateless logic that turns two trees into a sync plan.

mod local_enumerator;
mod reconciler;
mod remote_enumerator;

pub use local_enumerator::{LocalEnumerator, LocalScan};
pub use reconciler::{project_short_name, PlanReconciler, SecurityCheck};
pub use remote_enumerator::RemoteEnumerator;
