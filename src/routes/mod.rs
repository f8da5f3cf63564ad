mod health;
mod index;
mod process;
mod users;

pub use health::health_check;
pub use index::index;
pub use process::process;
pub use users::list_users;

/// Walk the source chain so `Debug` on our error types shows the full cause
/// of a failure, not just the top-level message.
pub fn error_chain_fmt(
    e: &impl std::error::Error,
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    writeln!(f, "{}\n", e)?;
    let mut current = e.source();
    while let Some(cause) = current {
        writeln!(f, "Caused by:\n\t{}", cause)?;
        current = cause.source();
    }
    Ok(())
}
