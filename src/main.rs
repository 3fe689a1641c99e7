//! CLI for maze generation and solving

use anyhow::bail;
use clap::Parser;
use maze_game::generator::Generator;
use maze_game::pathfinder::Pathfinder;
use maze_game::player::Player;
use maze_game::Maze;

/// Generate a perfect maze and print it with player, target and solution
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Cell count along the x-axis
    #[arg(short = 'x', long, default_value_t = 10)]
    width: usize,

    /// Cell count along the y-axis
    #[arg(short = 'y', long, default_value_t = 10)]
    height: usize,

    /// Random seed
    #[arg(long)]
    seed: Option<u64>,

    /// Overlay the solution path between player and target
    #[arg(short, long)]
    solution: bool,

    /// Print the raw canvas rows instead of the joined maze
    #[arg(short, long)]
    array: bool,
}

/// Generate a maze, place the player, print maze and solution length
fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    if args.width < 10 || args.height < 10 {
        bail!("the values for x and y must be greater than 9");
    }

    let mut maze = Maze::new(args.width, args.height)?;
    let mut generator = Generator::new(args.seed);
    let tree = generator.generate(&mut maze);
    maze.render();

    let player = Player::new(maze.interior_x(), maze.interior_y(), args.seed);
    maze.set_marker(player.pos().x, player.pos().y, "PLY");
    maze.set_marker(player.target().x, player.target().y, "END");

    let mut pathfinder = Pathfinder::new(args.seed);
    let route = pathfinder.find_path(tree.clone(), player.pos(), player.target())?;
    if args.solution {
        for step in &route {
            maze.set_marker(step.x, step.y, " ■ ");
        }
    }

    println!(
        "Player start-coordinate at x={},y={} and end-coordinate at x={},y={}:",
        player.pos().x + 1,
        player.pos().y + 1,
        player.target().x + 1,
        player.target().y + 1
    );
    if args.array {
        println!("{}", maze.array_dump());
    } else {
        println!("{maze}");
    }
    println!("The solution path is {} cells long.", route.len() + 1);
    Ok(())
}
