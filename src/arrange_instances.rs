use arrange_instances::{ArrangeConfig, ArrangeError, ArrangeResult};
use log::error;

const BANNER: &str = "Arrange Instances - tile emulator windows";

fn init_logging() {
    // Diagnostics go to stdout next to the progress output
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stdout)
        .init();
}

#[cfg(windows)]
fn run(config: &ArrangeConfig) -> ArrangeResult<()> {
    use arrange_instances::display::print_layout_preview;
    use arrange_instances::{arrange, Win32Desktop};
    use log::warn;

    let desktop = Win32Desktop::new();
    let report = arrange(&desktop, config)?;
    match &report.placement {
        Some(placement) => {
            if let Err(e) = print_layout_preview(&placement.grid, &report.windows) {
                warn!("Failed to print layout preview: {}", e);
            }
        }
        None => println!("No matching windows; nothing to arrange"),
    }
    Ok(())
}

#[cfg(not(windows))]
fn run(_config: &ArrangeConfig) -> ArrangeResult<()> {
    Err(ArrangeError::UnsupportedPlatform)
}

fn main() {
    let config = match ArrangeConfig::from_args(std::env::args()) {
        Ok(config) => config,
        Err(usage @ ArrangeError::Usage { .. }) => {
            println!("{}", usage);
            std::process::exit(usage.exit_code());
        }
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(e.exit_code());
        }
    };

    init_logging();
    println!("{}", BANNER);
    if let Err(e) = run(&config) {
        error!("{}", e);
        std::process::exit(e.exit_code());
    }
}
