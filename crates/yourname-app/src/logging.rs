use tracing_subscriber::{EnvFilter, fmt};

pub fn init(verbose: bool, json: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let builder = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);

    // a second init (tests) is not an error
    let _ = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
}
