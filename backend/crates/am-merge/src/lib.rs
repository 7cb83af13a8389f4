pub mod error;
pub mod finalizer;
pub mod orchestrator;
pub mod reassigner;
pub mod reconciler;

pub use error::{MergeError, MergeErrorResult};
pub use finalizer::CleanupFinalizer;
pub use orchestrator::{MergeOrchestrator, MergeRequest};
pub use reassigner::{
    BulkOwnerRewrite, BulkSweep, CATEGORY_SWEEPS, EntityReassigner, EntitySweep, OwnedRepository,
    OwnerSweep,
};
pub use reconciler::RoleAssignmentReconciler;
