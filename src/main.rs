use std::thread;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use sparselife::dec;
use sparselife::engine;
use sparselife::render;
use sparselife::render::RenderError;

mod console;
mod options;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let Some(args) = options::Args::from_env() else {
        // usage was printed
        return Ok(());
    };

    let worldfile = args.worldfile().to_owned();
    let (alive, dead) = (args.alive_char(), args.dead_char());

    let mut world = dec::load_path(&worldfile, alive)
        .with_context(|| format!("failed to load world from {worldfile}"))?;
    let delay = args.delay();

    let mut console = console::ConsoleRender::new()?;
    let mut generation: u64 = 0;
    'generations: loop {
        while let Some(cmd) = console.poll_events()? {
            if let console::ConsoleCommand::Exit = cmd {
                break 'generations;
            }
        }

        world = engine::advance(&world, 1);
        generation += 1;
        match render::render_world(&world, alive, dead) {
            Ok(frame) => console.render(&frame)?,
            // every cell has died; the bounding box no longer exists
            Err(RenderError::EmptyWorld) => break 'generations,
        }

        thread::sleep(delay);
    }
    std::mem::drop(console);

    println!("stopped after {generation} generations");
    Ok(())
}
