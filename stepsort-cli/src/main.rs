//! The `stepsort` binary.

fn main() -> anyhow::Result<()> {
    stepsort_cli::run()
}
