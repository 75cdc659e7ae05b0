use std::{future::Future, ops::ControlFlow};

use anvil_config::ReadinessPolicy;

use crate::StartupError;

/// Runs `attempt` until it breaks, fails, or the policy's attempt budget is
/// exhausted. Sleeps for the policy's interval between two attempts.
pub(crate) async fn poll_until_ready<T, AttemptT, FutureT>(
    policy: &ReadinessPolicy,
    mut attempt: AttemptT,
) -> Result<T, StartupError>
where
    AttemptT: FnMut(u32) -> FutureT,
    FutureT: Future<Output = Result<ControlFlow<T>, StartupError>>,
{
    for attempt_number in 1..=policy.max_attempts {
        if attempt_number > 1 {
            tokio::time::sleep(policy.interval).await;
        }

        if let ControlFlow::Break(value) = attempt(attempt_number).await? {
            return Ok(value);
        }
    }

    Err(StartupError::NotReady {
        attempts: policy.max_attempts,
    })
}
