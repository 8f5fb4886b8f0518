use image_filter_app::{my_err::MyError, my_ui};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), MyError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    my_ui::create_app()?;

    Ok(())
}
