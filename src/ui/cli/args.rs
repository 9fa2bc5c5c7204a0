// Mon Oct 19 2026 - Alex

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "console-trace")]
#[command(author = "Alex")]
#[command(version = "0.1.0")]
#[command(about = "Boxed, word-wrapped error traces for the terminal", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// -v shows the top-level error with its trace, -vv adds every cause
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[arg(short, long, global = true)]
    pub width: Option<usize>,

    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(short, long, global = true)]
    pub log_level: Option<String>,

    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render an error chain stored as JSON
    Render(RenderArgs),
    /// Capture a real I/O failure, wrap it and render the chain
    Demo(DemoArgs),
}

#[derive(Parser, Debug)]
pub struct RenderArgs {
    pub input: PathBuf,

    #[arg(long)]
    pub working_dir: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct DemoArgs {
    #[arg(short, long, default_value = "2")]
    pub depth: usize,

    #[arg(short, long, default_value = "missing-settings.json")]
    pub path: PathBuf,
}

impl DemoArgs {
    pub fn validate(&self) -> Result<(), String> {
        if self.depth > 32 {
            return Err(format!("depth must be at most 32, got {}", self.depth));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_render_with_globals() {
        let args = Args::try_parse_from(["console-trace", "-vv", "render", "err.json", "--width", "100"]).unwrap();

        assert_eq!(args.verbose, 2);
        assert_eq!(args.width, Some(100));
        match args.command {
            Command::Render(render) => assert_eq!(render.input, PathBuf::from("err.json")),
            _ => panic!("expected render command"),
        }
    }

    #[test]
    fn test_parse_demo_defaults() {
        let args = Args::try_parse_from(["console-trace", "demo"]).unwrap();

        assert_eq!(args.verbose, 0);
        assert!(!args.no_color);
        match args.command {
            Command::Demo(demo) => {
                assert_eq!(demo.depth, 2);
                assert!(demo.validate().is_ok());
            }
            _ => panic!("expected demo command"),
        }
    }

    #[test]
    fn test_demo_depth_limit() {
        let demo = DemoArgs {
            depth: 100,
            path: PathBuf::from("x"),
        };
        assert!(demo.validate().is_err());
    }
}
