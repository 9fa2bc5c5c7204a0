// Mon Oct 19 2026 - Alex

use colored::Colorize;
use console_trace::ui::cli::{parse_args, CommandHandler};

fn main() {
    let args = parse_args();

    let handler = match CommandHandler::from_args(&args) {
        Ok(handler) => handler,
        Err(e) => {
            eprintln!("{} {}", "[!]".red(), e);
            std::process::exit(2);
        }
    };

    handler.setup_logging();

    if let Err(error) = handler.execute(args.command) {
        if let Err(render_error) = handler.report(&error) {
            log::error!("could not render error trace: {}", render_error);
            eprintln!("fatal: {:#}", error);
        }
        std::process::exit(1);
    }
}
