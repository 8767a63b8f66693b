use thiserror::Error;

use crate::Pos2;
use crate::World;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("cannot render an empty world: the bounding box is undefined")]
    EmptyWorld,
}

/// Renders a world as a text block: a range line describing the live-cell
/// bounding box, then one row per line from `minY - 1` to `maxY + 1` and one
/// character per column from `minX - 1` to `maxX + 1`.
pub fn render_world(world: &World, alive: char, dead: char) -> Result<String, RenderError> {
    let (min, max) = world.bounds().ok_or(RenderError::EmptyWorld)?;

    let mut output = format!(
        "x-range:({}, {}), y-range:({}, {})\n",
        min.x, max.x, min.y, max.y
    );
    for y in (min.y - 1)..=(max.y + 1) {
        for x in (min.x - 1)..=(max.x + 1) {
            output.push(if world.contains(&Pos2::new(x, y)) {
                alive
            } else {
                dead
            });
        }
        output.push('\n');
    }

    Ok(output)
}
