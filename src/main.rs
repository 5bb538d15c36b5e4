use layercube::prelude::*;

use log::LevelFilter;
use simple_logger::SimpleLogger;

fn main() -> anyhow::Result<()> {
    SimpleLogger::new()
        .with_level(LevelFilter::Info)
        .env()
        .init()?;
    let start = std::time::Instant::now();

    let args = std::env::args().skip(1).collect::<Vec<_>>();
    let scramble = if args.is_empty() {
        random_scramble(DEFAULT_SCRAMBLE_LENGTH, &mut rand::thread_rng())
    } else {
        Move::parse_sequence(&args.join(" "))?
    };
    println!("Scramble: {}", format_sequence(&scramble));

    let solution = LayerSolver::default().solve_scramble(&scramble);
    for report in &solution.phases {
        println!(
            "  {:<26} {:<18} {:>4} moves",
            report.phase,
            report.outcome,
            report.moves
        );
    }
    println!(
        "Solution ({} moves): {}",
        solution.moves.len(),
        format_sequence(&solution.moves)
    );

    let replay = Cube::solved().apply_all(scramble.iter().chain(&solution.moves).copied());
    anyhow::ensure!(
        replay == solution.cube,
        "replaying the solution diverged from the solver's cube"
    );
    println!("{}", replay);

    if solution.solved {
        println!("Cube solved");
    } else {
        println!("Cube not solved");
    }

    log::info!("Total time: {:?}", start.elapsed());
    Ok(())
}
