use clap::Parser;
use log::trace;
use rand::Rng;

use mazer::{solve, DepthFirstSearch, Dims, Error, NullRenderer, Renderer};

#[derive(Parser, Debug)]
#[clap(version, about, name = "mazer")]
struct Args {
    #[clap(short, long, default_value_t = 16, help = "Maze width in cells")]
    cols: i32,
    #[clap(short, long, default_value_t = 12, help = "Maze height in cells")]
    rows: i32,
    #[clap(short, long, help = "Seed for a reproducible layout")]
    seed: Option<u64>,
    #[clap(long, action, help = "Log every wall change and solver move")]
    trace: bool,
}

/// Forwards maze events to the log, for watching runs with `--trace`.
struct LogRenderer;

impl Renderer for LogRenderer {
    fn on_wall_change(&mut self, cell: Dims) {
        trace!("walls changed at {:?}", cell);
    }

    fn on_move(&mut self, from: Dims, to: Dims, undo: bool) {
        if undo {
            trace!("backtrack {:?} -> {:?}", from, to);
        } else {
            trace!("move {:?} -> {:?}", from, to);
        }
    }
}

fn main() -> Result<(), Error> {
    let args = Args::parse();
    env_logger::init();

    let seed = args.seed.unwrap_or_else(|| rand::thread_rng().gen());
    if args.seed.is_none() {
        println!("seed: {}", seed);
    }

    let mut log_renderer = LogRenderer;
    let mut null_renderer = NullRenderer;
    let renderer: &mut dyn Renderer = if args.trace {
        &mut log_renderer
    } else {
        &mut null_renderer
    };

    let size = Dims(args.cols, args.rows);
    let maze = DepthFirstSearch::generate(size, Some(seed), renderer)?;
    println!("{}", maze);

    let path = solve(&maze, renderer)?;
    println!("solved in {} steps", path.len() - 1);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_args_are_well_formed() {
        Args::command().debug_assert();
    }
}
