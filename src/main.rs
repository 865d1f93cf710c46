use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use labyrinth::{
    Maze,
    app::App,
    logging::init_logging,
    render::{Canvas, Layout},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LayoutArg {
    /// Neighboring cells share walls
    Compact,
    /// Every cell is drawn as its own block
    Boxed,
}

impl From<LayoutArg> for Layout {
    fn from(value: LayoutArg) -> Self {
        match value {
            LayoutArg::Compact => Layout::Compact,
            LayoutArg::Boxed => Layout::Boxed,
        }
    }
}

/// Generate perfect mazes and find shortest paths through them.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Maze width in cells
    #[arg(long, requires = "height")]
    width: Option<u16>,

    /// Maze height in cells
    #[arg(long, requires = "width")]
    height: Option<u16>,

    /// Random seed; a fresh one is drawn from OS entropy when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Directory for the log files
    #[arg(long, value_name = "DIR", default_value = "logs")]
    log_dir: PathBuf,

    /// Print the maze solved corner to corner and exit, without the interactive menu
    #[arg(long, requires = "width")]
    print: bool,

    /// How the maze is drawn
    #[arg(long, value_enum, default_value_t = LayoutArg::Compact)]
    layout: LayoutArg,
}

fn build_maze(width: u16, height: u16, seed: Option<u64>) -> labyrinth::Result<Maze> {
    match seed {
        Some(seed) => Maze::with_seed(width, height, seed),
        None => Maze::from_entropy(width, height),
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let _guard = init_logging(&args.log_dir)?;
    tracing::info!("Starting with {:?}", args);

    let layout = Layout::from(args.layout);
    let maze = match (args.width, args.height) {
        (Some(width), Some(height)) => Some(build_maze(width, height, args.seed)?),
        _ => None,
    };

    if args.print {
        let Some(maze) = maze else {
            anyhow::bail!("--print needs --width and --height");
        };
        let (start, goal) = App::corners(&maze);
        let path = maze.pathfind(start, goal)?;
        let canvas = Canvas::new(maze.grid(), layout, Some(&path), Some(start));
        print!("{}", canvas.to_plain_string());
        println!(
            "{}x{} maze, seed {}: {} steps from {:?} to {:?}",
            maze.width(),
            maze.height(),
            maze.seed(),
            path.len(),
            start,
            goal
        );
        return Ok(());
    }

    let mut app = App::new(layout, args.seed);
    if let Some(maze) = maze {
        app = app.with_maze(maze);
    }

    let mut stdout = std::io::stdout();
    App::setup_terminal(&mut stdout)?;
    let result = app.run(&mut stdout);
    App::restore_terminal(&mut stdout)?;
    result?;
    Ok(())
}
