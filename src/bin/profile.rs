use std::{path::Path, time::Duration};

use labyrinth::{app::App, logging::init_logging};

fn main() -> anyhow::Result<()> {
    let _guard = init_logging(Path::new("logs"))?;

    let mut args = std::env::args();
    args.next(); // Skip executable name
    let num_iters = args.next().and_then(|s| s.parse::<u64>().ok()).unwrap_or(10);
    let size = args.next().and_then(|s| s.parse::<u16>().ok()).unwrap_or(u8::MAX as u16);

    let samples = App::profile(size, size, num_iters)?;
    for sample in &samples {
        println!(
            "seed {:>4}: generation {:>12?}  search {:>12?}  path length {}",
            sample.seed, sample.generation, sample.search, sample.path_len
        );
    }

    if !samples.is_empty() {
        let count = samples.len() as u32;
        let generation = samples.iter().map(|s| s.generation).sum::<Duration>() / count;
        let search = samples.iter().map(|s| s.search).sum::<Duration>() / count;
        println!(
            "{}x{} over {} runs: average generation {:?}, average search {:?}",
            size, size, count, generation, search
        );
    }
    Ok(())
}
