use std::future::Future;

use futures_util::future::join_all;

/// Run every task to completion, then fail the group on the first error.
///
/// Each outcome is collected before the verdict so no sub-task is dropped
/// mid-flight. Results keep task order.
pub async fn join_all_ok<I, F, T, E>(label: &str, tasks: I) -> Result<Vec<T>, E>
where
    I: IntoIterator<Item = F>,
    F: Future<Output = Result<T, E>>,
    E: std::fmt::Display,
{
    let outcomes = join_all(tasks).await;

    let failed: Vec<&E> = outcomes.iter().filter_map(|o| o.as_ref().err()).collect();
    if !failed.is_empty() {
        tracing::debug!(
            "{label}: {} of {} tasks failed, first: {}",
            failed.len(),
            outcomes.len(),
            failed[0]
        );
    }

    outcomes.into_iter().collect()
}
