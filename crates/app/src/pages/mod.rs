//! Page orchestrators
//!
//! Each page owns its loaded data, form state and notifications, and talks
//! to the backend only through [`postapi_client::Backend`].

pub mod dashboard;
pub mod docs;
pub mod new_resource;
pub mod project_detail;

#[cfg(test)]
pub(crate) mod fake;

pub use dashboard::DashboardPage;
pub use docs::DocsPage;
pub use new_resource::{NewResourceForm, SubmitOutcome};
pub use project_detail::{ProjectDetail, ProjectDetailPage};

use crate::error::{AppError, AppResult};
use postapi_ir::DeployAvailability;

/// Turn a deploy affordance into a go/no-go
pub(crate) fn ensure_deployable(availability: DeployAvailability) -> AppResult<()> {
    match availability {
        DeployAvailability::Available => Ok(()),
        DeployAvailability::AlreadyDeployed { url } => Err(AppError::Unavailable(format!(
            "Project is already deployed at {}",
            url
        ))),
        DeployAvailability::Unavailable { reason } => Err(AppError::Unavailable(reason)),
    }
}
