mod handlers;
pub mod parse;

use clap::Parser;
pub use parse::Cli;

use crate::core::error::GraphError;

/// Route `log` records to stderr as `[LEVEL target] message`.
fn init_logger(debug: bool) -> Result<(), GraphError> {
    let level = if debug {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {}] {}",
                record.level(),
                record.target(),
                message
            ));
        })
        .level(level)
        .chain(std::io::stderr())
        .apply()?;
    Ok(())
}

pub fn run() -> Result<(), GraphError> {
    let cli = parse::Cli::parse();
    init_logger(cli.debug)?;
    match cli.cmd {
        parse::Command::Render(a) => handlers::render(&a),
        parse::Command::Columns(a) => handlers::columns(&a),
        parse::Command::Colors => {
            handlers::colors();
            Ok(())
        }
        parse::Command::Examples => {
            handlers::examples();
            Ok(())
        }
    }
}
