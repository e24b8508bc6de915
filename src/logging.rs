use env_logger::{Builder, Env, Target};

/// log to stderr so stdout stays reserved for program output, `RUST_LOG` overrides the level
pub fn init() {
    let _ = Builder::from_env(Env::default().default_filter_or("warn"))
        .target(Target::Stderr)
        .format_timestamp(None)
        .try_init();
}
