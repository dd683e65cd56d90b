use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::future::Future;
use std::time::Duration;

/// Print a green-checkmark confirmation line.
pub fn print_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

pub fn print_warning(message: &str) {
    eprintln!("{} {}", "⚠".yellow(), message);
}

pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue(), message);
}

/// Run one operation behind a spinner: show `in_progress` while the future
/// is pending, clear the spinner on both paths, and print the checkmark line
/// only on success. Errors propagate to the caller; a failed step never
/// reports as finished.
pub async fn run_step<T, F>(in_progress: &str, finished: &str, op: F) -> anyhow::Result<T>
where
    F: Future<Output = anyhow::Result<T>>,
{
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    pb.set_message(in_progress.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));

    let result = op.await;
    pb.finish_and_clear();

    let value = result?;
    print_success(finished);
    Ok(value)
}
