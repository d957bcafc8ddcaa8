use driftfield::{Backdrop, BackdropError};
use tracing::Level;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), BackdropError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(Level::INFO.into())
                .from_env_lossy(),
        )
        .init();

    Backdrop::new()
        .with_title("driftfield")
        .with_heading("DRIFTFIELD")
        .with_taglines([
            "Particles that drift, bounce, and scatter...",
            "They know where your cursor is...",
            "One backdrop for every hero section!",
        ])
        .run()
}
